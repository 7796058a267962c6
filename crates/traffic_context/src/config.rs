/// Lowest reading accepted by any classifier band. Negative speed or
/// acceleration falls outside every rule.
pub const MIN_READING: f64 = 0.0;

/// Upper edge of the LOW speed band and lower edge of the MEDIUM band.
pub const SPEED_LOW_MAX: f64 = 20.0;
/// Upper edge of the MEDIUM speed band. Anything above is HIGH.
pub const SPEED_MEDIUM_MAX: f64 = 50.0;

/// Upper edge of the LOW acceleration band and lower edge of the MEDIUM band.
pub const ACCEL_LOW_MAX: f64 = 10.0;
/// Upper edge of the MEDIUM acceleration band. Anything above is HIGH.
pub const ACCEL_MEDIUM_MAX: f64 = 35.0;

/// Length of a full signal cycle in seconds. A green light hit by an
/// accident blinks yellow for whatever is left of the cycle.
pub const SIGNAL_CYCLE_SECS: i64 = 60;

/// How long a red light is held after an accident before blinking yellow.
pub const RED_HOLD_SECS: i64 = 60;
