//! Core types for the traffic control system

use std::fmt;

/// A unique identifier for a registered sensor
/// This is a simple wrapper around a usize for type safety
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SensorId(pub usize);

/// A unique identifier for a registered traffic light
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LightId(pub usize);

/// The state of a traffic light
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightState {
    Red,
    Yellow,
    Green,
}

impl LightState {
    /// Classify a raw traffic event into the light state it calls for.
    ///
    /// The mapping is total: heavy traffic holds cross traffic at red,
    /// moderate traffic goes to yellow, and every other label (including
    /// "Light Traffic" and unrecognized events) flows green.
    pub fn from_event(event: &str) -> Self {
        match event {
            "Heavy Traffic" => LightState::Red,
            "Moderate Traffic" => LightState::Yellow,
            _ => LightState::Green,
        }
    }
}

impl fmt::Display for LightState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LightState::Red => "RED",
            LightState::Yellow => "YELLOW",
            LightState::Green => "GREEN",
        };
        write!(f, "{}", label)
    }
}

/// Traffic events the simulation driver can generate
pub const TRAFFIC_EVENTS: [&str; 3] = ["Heavy Traffic", "Moderate Traffic", "Light Traffic"];

/// Violation types the simulation driver can generate
pub const VIOLATION_TYPES: [&str; 3] = ["Speeding", "Running Red Light", "Illegal Turn"];
