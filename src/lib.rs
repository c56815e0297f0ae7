//! Flight model for a single drone: per-instance altitude and ascend
//! bookkeeping plus a process-wide count of constructed drones.

pub mod constants;
pub mod logic;

pub use logic::drone::Drone;
