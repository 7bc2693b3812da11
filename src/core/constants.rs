/// Shake, decay and beat tuning constants.
///
/// Times are milliseconds on the engine's monotonic clock. Rates are beats
/// per minute.
// Heart rate bounds
pub const RESTING_RATE: u32 = 60; // decay floor and initial rate
pub const MAX_RATE: u32 = 180; // shake boosts clamp here

// Presentation tier boundaries (strictly greater than)
pub const ELEVATED_RATE: u32 = 100;
pub const MODERATE_RATE: u32 = 80;

// Motion channel (acceleration including gravity, m/s^2)
pub const MOTION_SHAKE_THRESHOLD: f64 = 15.0; // per-axis delta between samples
pub const MOTION_DEBOUNCE_MS: f64 = 100.0;
pub const MOTION_SHAKE_BOOST: u32 = 10;

// Pointer fallback channel (CSS pixels)
pub const POINTER_SHAKE_THRESHOLD: f32 = 50.0; // per-axis delta between moves
pub const POINTER_DEBOUNCE_MS: f64 = 200.0;
pub const POINTER_SHAKE_BOOST: u32 = 8;
pub const POINTER_CONFIRMATIONS: u32 = 2; // candidates needed before a shake counts

// Timers
pub const SHAKE_HOLD_MS: f64 = 2000.0; // shaking flag clears after this much quiet
pub const DECAY_PERIOD_MS: f64 = 500.0;
pub const DECAY_STEP: u32 = 1;
pub const BEAT_PULSE_MS: f64 = 150.0; // how long the beat flag stays up
pub const MS_PER_MINUTE: f64 = 60_000.0;
