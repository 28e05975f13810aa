//! Display implementation for shiftrack messages.
//!
//! All user-facing text lives here, one arm per [`Message`] variant, so the
//! wording of the CLI can be reviewed in one place.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === SHIFT MESSAGES ===
            Message::ShiftAdded(summary) => format!("Shift added: {}", summary),
            Message::ShiftAddedToOtherMonth(month) => format!("The shift belongs to {}; select that month to see it.", month),
            Message::ShiftUpdated(id) => format!("Shift {} updated", id),
            Message::ShiftDeleted(id) => format!("Shift {} deleted", id),
            Message::ShiftDeleteRolledBack(id) => format!("Shift {} could not be deleted; the month was reloaded from the server.", id),
            Message::ShiftCompleted(id) => format!("Shift {} marked as completed", id),
            Message::ShiftReopened(id) => format!("Shift {} marked as not completed", id),
            Message::ShiftRateSet(id, rate) => format!("Shift {} now pays {}", id, rate),
            Message::ShiftRateCleared(id) => format!("Shift {} now uses the monthly default rate", id),
            Message::ShiftNotFound(id) => format!("Shift {} was not found in the selected month", id),
            Message::ShiftEditNoChanges => "No changes given; the shift was left as it is.".to_string(),
            Message::ConfirmDeleteShift(summary) => format!("Delete shift {}?", summary),
            Message::NoShiftsForMonth(month) => format!("No shifts recorded for {}", month),

            // === MONTH MESSAGES ===
            Message::ShiftsHeader(month) => format!("Shifts for {}", month),
            Message::CalendarHeader(month) => format!("Calendar for {}", month),
            Message::LoadingMonth(month) => format!("Loading {}...", month),
            Message::MonthTotals { hours, duration, pay } => format!("Total hours: {} ({})   Total pay: {}", hours, duration, pay),
            Message::MonthlyDefaultRate(rate) => format!("Monthly default rate: {}", rate),
            Message::MonthlyRateSaved(month, rate) => format!("Default rate for {} set to {}", month, rate),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleServer => "Shift service settings".to_string(),
            Message::ConfigModuleDisplay => "Display settings".to_string(),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select settings to configure".to_string(),
            Message::PromptServerApiUrl => "Enter the shift service URL".to_string(),
            Message::PromptCurrency => "Enter the currency symbol".to_string(),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
            Message::CommandFailed(error) => error.to_string(),
        };

        write!(f, "{}", text)
    }
}
