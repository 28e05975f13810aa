#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use shiftrack::libs::shift::Shift;
    use shiftrack::libs::summary::{ShiftTotals, Totals};

    fn shift(id: i64, day: u32, start: (u32, u32), end: (u32, u32), rate: Option<f64>) -> Shift {
        Shift {
            id,
            date: NaiveDate::from_ymd_opt(2025, 3, day).unwrap(),
            start_time: NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
            hourly_rate: rate,
            is_completed: false,
            total_hours: None,
            effective_hourly_rate: None,
            pay: None,
        }
    }

    fn sample() -> Vec<Shift> {
        vec![
            shift(1, 3, (9, 0), (17, 0), None),
            shift(2, 3, (18, 0), (20, 30), Some(30.0)),
            shift(3, 7, (10, 15), (12, 0), None),
        ]
    }

    #[test]
    fn test_default_rate_shift_resolution() {
        let resolved = shift(9, 4, (9, 0), (13, 0), None).resolved(15.0).unwrap();
        assert_eq!(resolved.total_hours, Some(4.0));
        assert_eq!(resolved.effective_hourly_rate, Some(15.0));
        assert_eq!(resolved.pay, Some(60.0));
    }

    #[test]
    fn test_empty_month_totals_are_zero() {
        let shifts: Vec<Shift> = Vec::new();
        assert_eq!(shifts.totals(20.0).unwrap(), Totals::default());
    }

    #[test]
    fn test_totals_equal_sum_of_per_shift_figures() {
        let shifts = sample();
        let totals = shifts.totals(20.0).unwrap();

        let hours: f64 = shifts.iter().map(|s| s.hours().unwrap()).sum();
        let pay: f64 = shifts.iter().map(|s| s.pay(20.0).unwrap()).sum();
        assert!((totals.total_hours - hours).abs() < 1e-9);
        assert!((totals.total_pay - pay).abs() < 1e-9);
        // 8h @ 20 + 2.5h @ 30 + 1.75h @ 20
        assert!((totals.total_hours - 12.25).abs() < 1e-9);
        assert!((totals.total_pay - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_totals_ignore_order() {
        let shifts = sample();
        let mut reversed = shifts.clone();
        reversed.reverse();
        let mut rotated = shifts.clone();
        rotated.rotate_left(1);

        let expected = shifts.totals(20.0).unwrap();
        for permutation in [reversed, rotated] {
            let totals = permutation.totals(20.0).unwrap();
            assert!((totals.total_hours - expected.total_hours).abs() < 1e-9);
            assert!((totals.total_pay - expected.total_pay).abs() < 1e-9);
        }
    }

    #[test]
    fn test_service_figures_take_precedence() {
        let mut shifts = sample();
        shifts[0].total_hours = Some(7.5);
        shifts[0].pay = Some(150.0);

        let totals = shifts.totals(20.0).unwrap();
        assert!((totals.total_hours - 11.75).abs() < 1e-9);
        assert!((totals.total_pay - 260.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_shift_fails_the_fold() {
        let shifts = vec![shift(1, 3, (17, 0), (9, 0), None)];
        assert!(shifts.totals(20.0).is_err());
    }

    #[test]
    fn test_daily_totals_group_by_date() {
        let daily = sample().daily_totals(20.0).unwrap();
        let days: Vec<u32> = daily.keys().map(|d| chrono::Datelike::day(d)).collect();
        assert_eq!(days, vec![3, 7]);

        let third = daily[&NaiveDate::from_ymd_opt(2025, 3, 3).unwrap()];
        assert!((third.total_hours - 10.5).abs() < 1e-9);
        assert!((third.total_pay - 235.0).abs() < 1e-9);
    }
}
