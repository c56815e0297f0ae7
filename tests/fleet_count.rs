use drone::Drone;

// This file is its own test binary, so the process-wide counter is observed
// from a known-zero start. Keep it to a single test function: a second test
// in this process could interleave constructions with these assertions.
#[test]
fn sequential_constructions_are_counted_once_each() {
    assert_eq!(Drone::num_drones(), 0);

    let _first = Drone::new(10);
    assert_eq!(Drone::num_drones(), 1);

    let _second = Drone::default();
    assert_eq!(Drone::num_drones(), 2);

    let _third = Drone::new(-5);
    assert_eq!(Drone::num_drones(), 3);
}
