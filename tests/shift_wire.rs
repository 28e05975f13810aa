#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use serde_json::json;
    use shiftrack::api::ShiftsResponse;
    use shiftrack::libs::rate::HourlyRate;
    use shiftrack::libs::shift::{Shift, ShiftDraft};

    #[test]
    fn test_decode_service_shift() {
        let shift: Shift = serde_json::from_value(json!({
            "id": 12,
            "date": "2025-03-04T00:00:00",
            "startTime": "09:00:00",
            "endTime": "PT17H30M",
            "hourlyRate": null,
            "isCompleted": true,
            "totalHours": 8.5,
            "effectiveHourlyRate": 20.0,
            "pay": 170.0
        }))
        .unwrap();

        assert_eq!(shift.id, 12);
        assert_eq!(shift.date, NaiveDate::from_ymd_opt(2025, 3, 4).unwrap());
        assert_eq!(shift.end_time, NaiveTime::from_hms_opt(17, 30, 0).unwrap());
        assert_eq!(shift.hourly_rate, None);
        assert!(shift.is_completed);
        assert_eq!(shift.pay(99.0).unwrap(), 170.0);
    }

    #[test]
    fn test_derived_fields_are_optional() {
        let shift: Shift = serde_json::from_value(json!({
            "id": 3,
            "date": "2025-03-04",
            "startTime": "09:00",
            "endTime": "11:30"
        }))
        .unwrap();

        assert!(!shift.is_completed);
        assert_eq!(shift.hours().unwrap(), 2.5);
        assert_eq!(shift.pay(20.0).unwrap(), 50.0);

        let resolved = shift.resolved(20.0).unwrap();
        assert_eq!(resolved.effective_hourly_rate, Some(20.0));
        assert_eq!(resolved.pay, Some(50.0));
    }

    #[test]
    fn test_malformed_time_fails_to_decode() {
        let result = serde_json::from_value::<Shift>(json!({
            "date": "2025-03-04",
            "startTime": "nine",
            "endTime": "11:30"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_create_body_sends_null_rate() {
        let draft = ShiftDraft::parse("2025-03-04", "09:00", "17:00", "").unwrap();
        let body = serde_json::to_value(draft.to_create_input()).unwrap();

        assert_eq!(
            body,
            json!({
                "date": "2025-03-04T00:00:00",
                "startTime": "09:00:00",
                "endTime": "17:00:00",
                "hourlyRate": null
            })
        );
    }

    #[test]
    fn test_update_body_carries_id_and_completion() {
        let draft = ShiftDraft::parse("2025-03-04", "09:00", "17:00", "27.5")
            .unwrap()
            .completed(true);
        let body = serde_json::to_value(draft.to_update_input(8)).unwrap();

        assert_eq!(body["id"], json!(8));
        assert_eq!(body["hourlyRate"], json!(27.5));
        assert_eq!(body["isCompleted"], json!(true));
    }

    #[test]
    fn test_draft_builders_keep_validation() {
        let draft = ShiftDraft::parse("2025-03-04", "09:00", "17:00", "").unwrap();
        let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        let eight = NaiveTime::from_hms_opt(8, 0, 0).unwrap();

        assert!(draft.clone().with_times(nine, eight).is_err());
        let moved = draft.with_rate(Some(HourlyRate::new(15.0).unwrap()));
        assert_eq!(moved.hourly_rate().map(HourlyRate::value), Some(15.0));
        assert_eq!(moved.start_time(), nine);
    }

    #[test]
    fn test_month_response_defaults() {
        let response: ShiftsResponse = serde_json::from_value(json!({ "shifts": [] })).unwrap();
        assert_eq!(response, ShiftsResponse::default());

        let response: ShiftsResponse = serde_json::from_value(json!({
            "shifts": [{ "id": 1, "date": "2025-03-04", "startTime": "09:00:00", "endTime": "10:00:00" }],
            "totalHours": 1.0,
            "totalPay": 20.0,
            "monthlyDefaultRate": 20.0
        }))
        .unwrap();
        assert_eq!(response.shifts.len(), 1);
        assert_eq!(response.monthly_default_rate, 20.0);
    }
}
