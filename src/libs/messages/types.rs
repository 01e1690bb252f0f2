#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskAdded { bucket: String, id: u32, name: String },
    TaskRenamed { bucket: String, id: u32 },
    TaskMarkedDone { bucket: String, id: u32 },
    TaskMarkedPending { bucket: String, id: u32 },
    TaskNotFoundWithId { bucket: String, id: u32 },
    BucketCreated(String),
    BucketEmpty(String),
    NoTasks,

    // === FILE MESSAGES ===
    TasksSaved(String),       // path
    TasksLoaded(String),      // path
    TasksImported(String),    // source path
    ImportFailed(String),     // source path
    ExportFailed(String),     // destination path
    TaskFileNotFound(String), // path
    TasksSaveFailed(String),  // error
    TasksLoadFailed(String),  // error
    AutosaveFailed(String),   // error
    WorkingFile(String),      // path

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigNotFound,
    ConfigModuleTasks,

    // === SHELL MESSAGES ===
    InvalidCommand,
    InvalidDay(String),
    ShellGoodbye,

    // === PROMPTS ===
    PromptCommand,
    PromptDay,
    PromptTaskIndex,
    PromptTaskName,
    PromptFilename(String), // default
    PromptTasksFile,
    PromptDefaultDay,
    PromptConfirmDeleteConfig,
}
