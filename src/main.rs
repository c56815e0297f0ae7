use colored::Colorize;
use log::info;

use drone::constants::{DEMO_CLIMB_STEP, DEMO_START_ALTITUDE};
use drone::Drone;

fn main() {
    env_logger::init();

    info!("[ {} ] Starting flight demo", "Demo".green());

    let mut scout = Drone::new(DEMO_START_ALTITUDE);
    scout.report();

    scout.ascend(DEMO_CLIMB_STEP);
    scout.ascend(DEMO_CLIMB_STEP);
    scout.report();

    info!(
        "[ {} ] Scout ascended {} times",
        "Demo".green(),
        scout.ascend_count()
    );

    let idle = Drone::default();
    idle.report();

    let _reserve = Drone::new(75);
    info!(
        "[ {} ] {} drones constructed this run",
        "Demo".green(),
        Drone::num_drones()
    );
}
