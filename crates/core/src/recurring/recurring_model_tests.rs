//! Tests for recurring schedule math.

#[cfg(test)]
mod tests {
    use crate::recurring::{next_occurrence, Frequency};
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_daily_weekly_biweekly() {
        assert_eq!(next_occurrence(d(2026, 3, 15), Frequency::Daily), d(2026, 3, 16));
        assert_eq!(next_occurrence(d(2026, 3, 15), Frequency::Weekly), d(2026, 3, 22));
        assert_eq!(
            next_occurrence(d(2026, 3, 25), Frequency::Biweekly),
            d(2026, 4, 8)
        );
    }

    #[test]
    fn test_monthly_clamps_to_month_end() {
        assert_eq!(
            next_occurrence(d(2026, 1, 31), Frequency::Monthly),
            d(2026, 2, 28)
        );
        // Leap year
        assert_eq!(
            next_occurrence(d(2024, 1, 31), Frequency::Monthly),
            d(2024, 2, 29)
        );
        assert_eq!(
            next_occurrence(d(2026, 3, 31), Frequency::Monthly),
            d(2026, 4, 30)
        );
    }

    #[test]
    fn test_monthly_rolls_over_year() {
        assert_eq!(
            next_occurrence(d(2026, 12, 15), Frequency::Monthly),
            d(2027, 1, 15)
        );
    }

    #[test]
    fn test_quarterly_and_yearly() {
        assert_eq!(
            next_occurrence(d(2026, 11, 30), Frequency::Quarterly),
            d(2027, 2, 28)
        );
        assert_eq!(
            next_occurrence(d(2024, 2, 29), Frequency::Yearly),
            d(2025, 2, 28)
        );
    }

    #[test]
    fn test_frequency_parse_round_trip() {
        for f in [
            Frequency::Daily,
            Frequency::Weekly,
            Frequency::Biweekly,
            Frequency::Monthly,
            Frequency::Quarterly,
            Frequency::Yearly,
        ] {
            assert_eq!(Frequency::parse(f.as_str()).unwrap(), f);
        }
        assert!(Frequency::parse("HOURLY").is_err());
    }
}
