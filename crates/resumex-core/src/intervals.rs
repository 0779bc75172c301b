use chrono::Datelike;

/// A calendar month, the granularity at which work-experience durations
/// are reconciled. `month` is 1-based (January = 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonthPoint {
    pub year: i32,
    pub month: u32,
}

impl MonthPoint {
    pub fn new(year: i32, month: u32) -> MonthPoint {
        debug_assert!((1..=12).contains(&month));
        MonthPoint { year, month }
    }

    /// The current calendar month from the system clock.
    pub fn now() -> MonthPoint {
        let today = chrono::Utc::now();
        MonthPoint::new(today.year(), today.month())
    }

    /// Absolute month index, used for ordering and duration arithmetic.
    fn index(self) -> i64 {
        self.year as i64 * 12 + (self.month as i64 - 1)
    }

    /// Inclusive number of months from `self` through `end`.
    pub fn months_through(self, end: MonthPoint) -> i64 {
        end.index() - self.index() + 1
    }
}

static MONTHS: &[&str] = &[
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Month number from an English month name or abbreviation, 1-based.
pub fn month_from_name(name: &str) -> Option<u32> {
    let lower = name.to_lowercase();
    MONTHS
        .iter()
        .position(|m| lower.starts_with(m))
        .map(|i| i as u32 + 1)
}

/// Parse `"<Month> <Year>"` ("Jul 2018", "September 2020") into a
/// [`MonthPoint`].
pub fn parse_month_year(s: &str) -> Option<MonthPoint> {
    let mut parts = s.split_whitespace();
    let month = month_from_name(parts.next()?)?;
    let year: i32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(MonthPoint::new(year, month))
}

/// Merge overlapping or adjacent month ranges into disjoint maximal spans.
///
/// Ranges with `end < start` are discarded. Sorting by start makes the
/// result order-independent; merging when the next start falls at or
/// before the current merged end prevents double-counting overlap.
pub fn merge_periods(
    mut periods: Vec<(MonthPoint, MonthPoint)>,
) -> Vec<(MonthPoint, MonthPoint)> {
    periods.retain(|(start, end)| end >= start);
    if periods.is_empty() {
        return Vec::new();
    }
    periods.sort_by_key(|(start, _)| start.index());

    let mut merged: Vec<(MonthPoint, MonthPoint)> = vec![periods[0]];
    for (start, end) in periods.into_iter().skip(1) {
        let last = merged.last_mut().expect("merged is non-empty");
        if start.index() <= last.1.index() {
            if end.index() > last.1.index() {
                last.1 = end;
            }
        } else {
            merged.push((start, end));
        }
    }
    merged
}

/// Total inclusive duration of a set of (possibly overlapping) ranges,
/// in months.
pub fn total_months(periods: Vec<(MonthPoint, MonthPoint)>) -> i64 {
    merge_periods(periods)
        .into_iter()
        .map(|(start, end)| start.months_through(end))
        .sum()
}

/// Convert a month count to years, rounded to one decimal place.
pub fn years_from_months(months: i64) -> f64 {
    ((months.max(0) as f64 / 12.0) * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mp(year: i32, month: u32) -> MonthPoint {
        MonthPoint::new(year, month)
    }

    #[test]
    fn test_parse_month_year() {
        assert_eq!(parse_month_year("Jul 2018"), Some(mp(2018, 7)));
        assert_eq!(parse_month_year("September 2020"), Some(mp(2020, 9)));
        assert_eq!(parse_month_year("2018"), None);
        assert_eq!(parse_month_year("Smarch 2018"), None);
    }

    #[test]
    fn test_months_through_inclusive() {
        assert_eq!(mp(2018, 1).months_through(mp(2018, 1)), 1);
        assert_eq!(mp(2018, 1).months_through(mp(2018, 12)), 12);
        assert_eq!(mp(2018, 1).months_through(mp(2021, 3)), 39);
    }

    #[test]
    fn test_merge_no_overlap() {
        let merged = merge_periods(vec![
            (mp(2010, 1), mp(2010, 12)),
            (mp(2015, 1), mp(2015, 6)),
        ]);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_merge_overlapping_no_double_count() {
        // (Jan 2018, Dec 2019) and (Jun 2019, Mar 2021) overlap — the
        // total must be Mar 2021 - Jan 2018 + 1 = 39 months, not the
        // naive sum of the two ranges.
        let total = total_months(vec![
            (mp(2018, 1), mp(2019, 12)),
            (mp(2019, 6), mp(2021, 3)),
        ]);
        assert_eq!(total, 39);
    }

    #[test]
    fn test_merge_order_independent() {
        let a = total_months(vec![
            (mp(2018, 1), mp(2019, 12)),
            (mp(2019, 6), mp(2021, 3)),
        ]);
        let b = total_months(vec![
            (mp(2019, 6), mp(2021, 3)),
            (mp(2018, 1), mp(2019, 12)),
        ]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_merge_idempotent() {
        let once = merge_periods(vec![
            (mp(2018, 1), mp(2019, 12)),
            (mp(2019, 6), mp(2021, 3)),
        ]);
        let twice = merge_periods(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_merge_contained_range() {
        let total = total_months(vec![
            (mp(2018, 1), mp(2021, 12)),
            (mp(2019, 1), mp(2019, 6)),
        ]);
        assert_eq!(total, 48);
    }

    #[test]
    fn test_inverted_range_discarded() {
        let total = total_months(vec![(mp(2021, 1), mp(2018, 1))]);
        assert_eq!(total, 0);
    }

    #[test]
    fn test_years_rounding() {
        assert_eq!(years_from_months(39), 3.3);
        assert_eq!(years_from_months(12), 1.0);
        assert_eq!(years_from_months(18), 1.5);
        assert_eq!(years_from_months(0), 0.0);
        assert_eq!(years_from_months(-5), 0.0);
    }
}
