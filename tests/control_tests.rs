//! Component validation tests
//!
//! These tests exercise the control components against local management
//! centers so they stay independent of the process-wide singleton.

use traffic_control::control::{
    LightState, RoadsideSensor, TrafficManagementCenter, TrafficMediator, TrafficSensor,
    UpdateLightCommand, ViolationManager,
};

#[test]
fn test_registration_preserves_call_order() {
    let mut center = TrafficManagementCenter::new();
    assert_eq!(center.sensor_count(), 0);
    assert_eq!(center.light_count(), 0);

    let s1 = center.register_sensor(Box::new(RoadsideSensor::new("Main Street")));
    let s2 = center.register_sensor(Box::new(RoadsideSensor::new("Second Avenue")));
    let l1 = center.add_light("Main St & First Ave");
    let l2 = center.add_light("Main St & Second Ave");

    assert_eq!(center.sensor_count(), 2);
    assert_eq!(center.light_count(), 2);
    assert_eq!(center.sensor(s1).unwrap().location(), "Main Street");
    assert_eq!(center.sensor(s2).unwrap().location(), "Second Avenue");
    assert_eq!(center.light(l1).unwrap().location, "Main St & First Ave");
    assert_eq!(center.light(l2).unwrap().location, "Main St & Second Ave");
}

#[test]
fn test_lights_start_red() {
    let mut center = TrafficManagementCenter::new();
    let light = center.add_light("First & Elm");
    assert_eq!(center.light(light).unwrap().state, LightState::Red);
}

#[test]
fn test_event_classification_is_total_and_exact() {
    assert_eq!(LightState::from_event("Heavy Traffic"), LightState::Red);
    assert_eq!(LightState::from_event("Moderate Traffic"), LightState::Yellow);
    assert_eq!(LightState::from_event("Light Traffic"), LightState::Green);
    assert_eq!(LightState::from_event(""), LightState::Green);
    assert_eq!(LightState::from_event("Gridlock"), LightState::Green);
}

#[test]
fn test_notify_broadcasts_to_every_light() {
    let mut center = TrafficManagementCenter::new();
    let sensor = center.register_sensor(Box::new(RoadsideSensor::new("Main Street")));
    let l1 = center.add_light("Main St & First Ave");
    let l2 = center.add_light("Main St & Second Ave");

    center.notify(sensor, "Heavy Traffic").unwrap();
    assert_eq!(center.light(l1).unwrap().state, LightState::Red);
    assert_eq!(center.light(l2).unwrap().state, LightState::Red);

    center.notify(sensor, "Moderate Traffic").unwrap();
    for light in center.lights() {
        assert_eq!(light.state, LightState::Yellow);
    }
}

#[test]
fn test_sensor_stores_last_reading() {
    let mut sensor = RoadsideSensor::new("Main Street");
    assert_eq!(sensor.last_reading(), None);

    sensor.receive_update("Light Traffic");
    assert_eq!(sensor.last_reading(), Some("Light Traffic"));

    sensor.receive_update("Heavy Traffic");
    assert_eq!(sensor.last_reading(), Some("Heavy Traffic"));
}

#[test]
fn test_command_forces_state_regardless_of_prior() {
    let mut center = TrafficManagementCenter::new();
    let sensor = center.register_sensor(Box::new(RoadsideSensor::new("Main Street")));
    let light = center.add_light("Main St & First Ave");

    // Drive the light red first, then force it green by command
    center.notify(sensor, "Heavy Traffic").unwrap();
    assert_eq!(center.light(light).unwrap().state, LightState::Red);

    let command = UpdateLightCommand::new(light, LightState::Green);
    command.execute(&mut center).unwrap();
    assert_eq!(center.light(light).unwrap().state, LightState::Green);

    // Re-executing against a green light is a no-op state-wise
    command.execute(&mut center).unwrap();
    assert_eq!(center.light(light).unwrap().state, LightState::Green);
}

#[test]
fn test_unknown_handles_are_errors() {
    let mut center = TrafficManagementCenter::new();
    let sensor = center.register_sensor(Box::new(RoadsideSensor::new("Main Street")));
    let light = center.add_light("Main St & First Ave");

    let mut other = TrafficManagementCenter::new();
    assert!(other.notify(sensor, "Heavy Traffic").is_err());
    assert!(UpdateLightCommand::new(light, LightState::Green)
        .execute(&mut other)
        .is_err());
}

#[test]
fn test_violation_log_preserves_insertion_order() {
    let mut manager = ViolationManager::new();
    assert!(manager.is_empty());

    manager.add_violation("Vehicle_101", "Speeding");
    manager.add_violation("Vehicle_202", "Running Red Light");
    manager.add_violation("Vehicle_303", "Illegal Turn");

    assert_eq!(manager.len(), 3);
    let violations = manager.violations();
    assert_eq!(violations[0].vehicle, "Vehicle_101");
    assert_eq!(violations[0].kind, "Speeding");
    assert_eq!(violations[1].vehicle, "Vehicle_202");
    assert_eq!(violations[1].kind, "Running Red Light");
    assert_eq!(violations[2].vehicle, "Vehicle_303");
    assert_eq!(violations[2].kind, "Illegal Turn");
}

#[test]
fn test_violation_report_formatting() {
    let mut manager = ViolationManager::new();
    assert_eq!(manager.report(), "No violations recorded.");

    manager.add_violation("Vehicle_101", "Speeding");
    manager.add_violation("Vehicle_202", "Illegal Turn");

    let report = manager.report();
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines[0], "-- Recorded Violations --");
    assert_eq!(lines[1], "1. Vehicle Vehicle_101 committed Speeding");
    assert_eq!(lines[2], "2. Vehicle Vehicle_202 committed Illegal Turn");
}

#[test]
fn test_light_state_display_labels() {
    assert_eq!(LightState::Red.to_string(), "RED");
    assert_eq!(LightState::Yellow.to_string(), "YELLOW");
    assert_eq!(LightState::Green.to_string(), "GREEN");
}
