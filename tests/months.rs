#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use shiftrack::libs::error::ValidationError;
    use shiftrack::libs::month::YearMonth;

    #[test]
    fn test_month_of_date() {
        let month = YearMonth::of(NaiveDate::from_ymd_opt(2025, 3, 17).unwrap());
        assert_eq!(month, YearMonth::new(2025, 3).unwrap());
        assert_eq!(month.to_string(), "2025-03");
        assert_eq!(month.label(), "March 2025");
        assert_eq!(month.first_day(), NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
    }

    #[test]
    fn test_contains() {
        let month = YearMonth::new(2025, 3).unwrap();
        assert!(month.contains(NaiveDate::from_ymd_opt(2025, 3, 31).unwrap()));
        assert!(!month.contains(NaiveDate::from_ymd_opt(2025, 4, 1).unwrap()));
        assert!(!month.contains(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
    }

    #[test]
    fn test_navigation() {
        let month = YearMonth::new(2025, 12).unwrap();
        assert_eq!(month.add_months(1), YearMonth::new(2026, 1).unwrap());
        assert_eq!(month.add_months(-12), YearMonth::new(2024, 12).unwrap());
        assert_eq!(month.add_months(0), month);
    }

    #[test]
    fn test_parse_and_serde() {
        assert_eq!(
            "2025-13".parse::<YearMonth>(),
            Err(ValidationError::InvalidMonth("2025-13".to_string()))
        );
        assert!(YearMonth::new(2025, 0).is_err());

        let month: YearMonth = serde_json::from_str("\"2025-07\"").unwrap();
        assert_eq!(month, YearMonth::new(2025, 7).unwrap());
        assert_eq!(serde_json::to_string(&month).unwrap(), "\"2025-07\"");
    }

    #[test]
    fn test_ordering_follows_time() {
        let mut months = vec![
            YearMonth::new(2025, 2).unwrap(),
            YearMonth::new(2024, 11).unwrap(),
            YearMonth::new(2025, 1).unwrap(),
        ];
        months.sort();
        let labels: Vec<String> = months.iter().map(ToString::to_string).collect();
        assert_eq!(labels, vec!["2024-11", "2025-01", "2025-02"]);
    }
}
