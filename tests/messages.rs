#[cfg(test)]
mod tests {
    use anyhow::Context;
    use shiftrack::libs::error::{ShiftError, ValidationError};
    use shiftrack::libs::messages::Message;
    use shiftrack::libs::shift::ShiftDraft;

    #[test]
    fn test_command_failure_shows_local_validation_error() {
        let err = ShiftDraft::parse("2025-03-04", "17:00", "09:00", "").unwrap_err();
        let message = Message::CommandFailed(format!("{:#}", anyhow::Error::from(err)));

        assert_eq!(message.to_string(), "End time 09:00:00 is before start time 17:00:00");
    }

    #[test]
    fn test_command_failure_shows_service_detail() {
        let result: Result<(), ShiftError> = Err(ShiftError::request("Delete shift", Some(500), "database offline"));
        let err = result.context("Could not delete shift 3").unwrap_err();
        let message = Message::CommandFailed(format!("{:#}", err));

        assert_eq!(
            message.to_string(),
            "Could not delete shift 3: Delete shift failed (500): database offline"
        );
    }

    #[test]
    fn test_validation_errors_are_marked_as_such() {
        let err = ShiftError::from(ValidationError::RateOutOfRange(0.0));
        assert!(err.is_validation());
        assert!(!ShiftError::MutationInFlight(1).is_validation());
    }
}
