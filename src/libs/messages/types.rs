#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    SettingsFileCorrupt(String),
    SettingsFlushFailed(String),
    PromptAutoCheck,
    PromptCheckInterval,
    PromptBetaChannel,

    // === UPDATE CHECK MESSAGES ===
    CheckingForUpdates,
    NoUpdateAvailable,
    UpdateCheckFailed(String),
    UpdaterUnknownExit(String), // formatted exit code, or "none"
    CheckAlreadyRunning,
    UpdateAvailable {
        name: String,
        tag: String,
    },

    // === OFFER MESSAGES ===
    OfferHeader {
        current: String,
        name: String,
    },
    PromptUpdateDecision,
    VersionSkipRecorded(String), // version tag
    VersionSkipped(String),      // version tag
    UpdateDeclined,
    InstallHandoff(String), // version tag
    InstallSpawnFailed(String),

    // === SUBPROCESS MESSAGES ===
    UpdaterStartFailed(String),
    UpdaterTimedOut(u64), // seconds waited

    // === WATCHER MESSAGES ===
    WatcherStarted,
    WatcherAutoCheckDisabled,
    WatcherStopped,
    WatcherReceivedSigterm,
    WatcherReceivedSigint,
    WatcherReceivedCtrlC,
    WatcherCtrlCListenFailed(String), // error
    WatcherSignalHandlingNotSupported,
    FailedToCreateSigtermHandler,
    FailedToCreateSigintHandler,
    SchedulerArmed(u64), // seconds until next check
    SchedulerDisarmed,
    CheckError(String),

    // === MOD QUERY MESSAGES ===
    UnknownModLoader(String),
    UnknownResourceType(String),

    // === GENERIC ERROR MESSAGES ===
    FailedToResolveAppDir,
}
