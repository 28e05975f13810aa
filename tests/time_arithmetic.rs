#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use shiftrack::libs::error::ValidationError;
    use shiftrack::libs::time::{
        duration_hours, format_time, format_wire_date, parse_date, parse_time_of_day, seconds_of_day,
    };

    fn t(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn test_seconds_of_day() {
        assert_eq!(seconds_of_day(t(0, 0, 0)), 0);
        assert_eq!(seconds_of_day(t(1, 1, 1)), 3661);
        assert_eq!(seconds_of_day(t(23, 59, 59)), 86_399);
    }

    #[test]
    fn test_duration_in_fractional_hours() {
        assert_eq!(duration_hours(t(9, 0, 0), t(17, 30, 0)).unwrap(), 8.5);
        assert_eq!(duration_hours(t(9, 0, 0), t(9, 15, 0)).unwrap(), 0.25);
        assert_eq!(duration_hours(t(0, 0, 0), t(23, 59, 59)).unwrap(), 86_399.0 / 3600.0);
    }

    #[test]
    fn test_zero_length_shift_is_allowed() {
        assert_eq!(duration_hours(t(12, 0, 0), t(12, 0, 0)).unwrap(), 0.0);
    }

    #[test]
    fn test_end_before_start_is_rejected() {
        let err = duration_hours(t(22, 0, 0), t(6, 0, 0)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::EndBeforeStart {
                start: "22:00:00".to_string(),
                end: "06:00:00".to_string(),
            }
        );
        assert_eq!(err.to_string(), "End time 06:00:00 is before start time 22:00:00");
    }

    #[test]
    fn test_parse_clock_times() {
        assert_eq!(parse_time_of_day("09:30").unwrap(), t(9, 30, 0));
        assert_eq!(parse_time_of_day("17:45:10").unwrap(), t(17, 45, 10));
        assert_eq!(parse_time_of_day(" 08:00 ").unwrap(), t(8, 0, 0));
    }

    #[test]
    fn test_parse_iso_durations() {
        assert_eq!(parse_time_of_day("PT9H").unwrap(), t(9, 0, 0));
        assert_eq!(parse_time_of_day("PT1H30M").unwrap(), t(1, 30, 0));
        assert_eq!(parse_time_of_day("PT45M15S").unwrap(), t(0, 45, 15));
    }

    #[test]
    fn test_parse_rejects_malformed_times() {
        for input in ["", "9:00", "24:00", "12:60", "noon", "12:00:00:00", "PT1X"] {
            assert!(
                matches!(parse_time_of_day(input), Err(ValidationError::InvalidTime(_))),
                "accepted {:?}",
                input
            );
        }
    }

    #[test]
    fn test_parse_dates() {
        let expected = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
        assert_eq!(parse_date("2025-03-04").unwrap(), expected);
        assert_eq!(parse_date("2025-03-04T00:00:00").unwrap(), expected);
        assert!(parse_date("2025-02-30").is_err());
        assert!(parse_date("04/03/2025").is_err());
        assert!(parse_date("2025-3-4").is_err());
    }

    #[test]
    fn test_wire_formats() {
        assert_eq!(format_time(t(7, 5, 0)), "07:05:00");
        assert_eq!(
            format_wire_date(NaiveDate::from_ymd_opt(2025, 12, 1).unwrap()),
            "2025-12-01T00:00:00"
        );
    }
}
