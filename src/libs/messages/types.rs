#[derive(Debug, Clone)]
pub enum Message {
    // === SHIFT MESSAGES ===
    ShiftAdded(String),           // shift summary
    ShiftAddedToOtherMonth(String), // month
    ShiftUpdated(i64),
    ShiftDeleted(i64),
    ShiftDeleteRolledBack(i64),
    ShiftCompleted(i64),
    ShiftReopened(i64),
    ShiftRateSet(i64, String), // id, rate
    ShiftRateCleared(i64),
    ShiftNotFound(i64),
    ShiftEditNoChanges,
    ConfirmDeleteShift(String), // shift summary
    NoShiftsForMonth(String),   // month label

    // === MONTH MESSAGES ===
    ShiftsHeader(String),   // month label
    CalendarHeader(String), // month label
    LoadingMonth(String),   // month
    MonthTotals {
        hours: String,
        duration: String,
        pay: String,
    },
    MonthlyDefaultRate(String),
    MonthlyRateSaved(String, String), // month, rate

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleServer,
    ConfigModuleDisplay,

    // === PROMPTS ===
    PromptSelectModules,
    PromptServerApiUrl,
    PromptCurrency,

    // === GENERAL MESSAGES ===
    OperationCancelled,
    CommandFailed(String), // error text
}
