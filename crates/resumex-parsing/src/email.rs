//! Email extraction: an ordered fallback chain, each tier tried until
//! one succeeds. PDF text extraction often injects stray spaces inside
//! addresses, so the first tier tolerates whitespace around `@` and `.`
//! and strips it before returning.

use once_cell::sync::Lazy;
use regex::Regex;

/// Tier 1: whitespace-tolerant `local @ domain . tld`.
static SPACED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([\w.\-]+)\s*@\s*([\w\-]+(?:\s*\.\s*[\w\-]+)+)").expect("static regex")
});

/// Tier 2: strict shape, applied to whitespace-stripped text.
static STRICT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("static regex")
});

/// Tier 3: keyword-anchored, one pattern per separator style.
static KEYWORD_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    let keywords = ["email", "e-mail", "mail", "contact"];
    let separators = [r"[:\s]+", r"\s*=+\s*", r"\s*-+\s*"];
    let mut patterns = Vec::new();
    for keyword in keywords {
        for separator in separators {
            let pattern = format!(
                r"(?i){keyword}{separator}([A-Za-z0-9._%+\-]+)\s*@\s*([A-Za-z0-9\-]+(?:\s*\.\s*[A-Za-z0-9\-]+)+)"
            );
            patterns.push(Regex::new(&pattern).expect("static regex"));
        }
    }
    patterns
});

/// Tier 4: first address-shaped token after a contact-information header.
static CONTACT_SECTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(?:contact information|contact details|contact)[^@]*?([A-Za-z0-9._%+\-]+)\s*@\s*([A-Za-z0-9\-]+(?:\s*\.\s*[A-Za-z0-9\-]+)+)",
    )
    .expect("static regex")
});

pub(crate) fn extract_email(text: &str) -> Option<String> {
    if let Some(caps) = SPACED_RE.captures(text) {
        return Some(join_parts(&caps[1], &caps[2]));
    }

    let collapsed: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    if let Some(m) = STRICT_RE.find(&collapsed) {
        return Some(m.as_str().to_string());
    }

    for re in KEYWORD_RES.iter() {
        if let Some(caps) = re.captures(text) {
            return Some(join_parts(&caps[1], &caps[2]));
        }
    }

    if let Some(caps) = CONTACT_SECTION_RE.captures(text) {
        return Some(join_parts(&caps[1], &caps[2]));
    }

    None
}

fn join_parts(local: &str, domain: &str) -> String {
    let strip = |s: &str| s.chars().filter(|c| !c.is_whitespace()).collect::<String>();
    format!("{}@{}", strip(local), strip(domain))
}
