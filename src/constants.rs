/// Starting altitude for a drone constructed without an explicit one
pub const DEFAULT_ALTITUDE: i64 = 0;

/// Demo flight scenario figures
pub const DEMO_START_ALTITUDE: i64 = 100;
pub const DEMO_CLIMB_STEP: i64 = 50;
