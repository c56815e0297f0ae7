//! The drone flight model.
//!
//! A [`Drone`] owns its altitude and ascend counter outright; the one piece
//! of shared state is the process-wide construction counter, a static
//! atomic so that concurrent construction can never lose an increment.

use std::sync::atomic::{AtomicU64, Ordering};

use colored::Colorize;
use log::{debug, info};

use crate::constants::DEFAULT_ALTITUDE;

/// Drones constructed over the process lifetime.
/// Owned by the type, not by any instance; never decremented.
static NUM_DRONES: AtomicU64 = AtomicU64::new(0);

#[derive(Debug)]
pub struct Drone {
    altitude: i64,
    ascend_count: u64,
}

impl Drone {
    /// Creates a new drone at the given altitude, in feet above ground.
    /// Negative altitudes are accepted.
    #[must_use]
    pub fn new(altitude: i64) -> Self {
        NUM_DRONES.fetch_add(1, Ordering::Relaxed);
        debug!(
            "[ {} ] Constructed at {} feet, {} constructed so far",
            "Drone".green(),
            altitude,
            Self::num_drones()
        );

        Self {
            altitude,
            ascend_count: 0,
        }
    }

    /// Writes the current status line to stdout.
    pub fn report(&self) {
        println!("{}", self.status_line());
    }

    /// The line [`report`](Self::report) prints.
    #[must_use]
    pub fn status_line(&self) -> String {
        format!("The drone is flying at {} feet.", self.altitude)
    }

    /// Changes altitude by `change` feet and records the call.
    /// A negative `change` descends.
    pub fn ascend(&mut self, change: i64) {
        self.altitude += change;
        self.ascend_count += 1;
        info!(
            "[ {} ] Ascending by {} feet to {}",
            "Drone".green(),
            change,
            self.altitude
        );
    }

    #[must_use]
    pub fn altitude(&self) -> i64 {
        self.altitude
    }

    /// How many times this instance has ascended.
    #[must_use]
    pub fn ascend_count(&self) -> u64 {
        self.ascend_count
    }

    /// How many drones have been constructed in this process.
    /// Shared across all instances.
    #[must_use]
    pub fn num_drones() -> u64 {
        NUM_DRONES.load(Ordering::Relaxed)
    }
}

impl Default for Drone {
    fn default() -> Self {
        Self::new(DEFAULT_ALTITUDE)
    }
}
