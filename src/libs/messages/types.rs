#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String, String), // id, date
    TaskUpdated(String),         // id
    TaskDeleted(String),         // id
    TasksNotFoundForDate(String),
    TasksNotFoundForRange(String), // mode
    TasksHeader(String),           // date
    TasksRangeHeader(String, usize), // mode, count
    NothingToUpdate,

    // === EXPORT MESSAGES ===
    ExportCompleted(String), // path
    ExportEmpty(String),     // mode

    // === SERVER MESSAGES ===
    ServerStarted(String), // url
    OperatorName(String),
    StaticDirMissing(String),

    // === CONFIGURATION MESSAGES ===
    ConfigWizardHeader,
    ConfigSaved(String), // path
    PromptOperatorName,
    PromptPort,
    PromptDataDir,
    PromptStaticDir,
}
