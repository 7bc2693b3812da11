// Page structure shared with index.html. Elements are looked up by id once at
// startup.
pub const ROOT_ID: &str = "app"; // full-page container carrying the background
pub const ENABLE_BUTTON_ID: &str = "enable-motion";
pub const READOUT_ID: &str = "readout"; // heart + numbers, shown once permitted
pub const HEART_ID: &str = "heart";
pub const PING_ID: &str = "heart-ping"; // ring shown while a beat is raised
pub const RATE_ID: &str = "heart-rate";
pub const STATUS_ID: &str = "status";
pub const SHAKE_BADGE_ID: &str = "shake-badge";

// Static parts of the class lists; tier classes are appended per frame.
pub const ROOT_BASE_CLASS: &str =
    "min-h-screen flex flex-col items-center justify-center transition-all duration-1000";
pub const HEART_BASE_CLASS: &str = "w-32 h-32 mx-auto transition-all duration-150";
pub const HEART_BEAT_CLASS: &str = "scale-125 drop-shadow-2xl";
pub const HEART_IDLE_CLASS: &str = "scale-100";
pub const HIDDEN_CLASS: &str = "hidden";

pub const LOG_LEVEL: log::Level = log::Level::Info;
