//! Standalone traffic control module
//!
//! This module contains all the core traffic-management logic: sensors that
//! observe road conditions, a central mediator that fans events out to
//! traffic lights, a violation log, and a facade that ties them together.
//! It runs entirely in-process and can be exercised from the console.

mod center;
mod command;
mod driver;
mod facade;
mod light;
mod sensor;
mod types;
mod violation;

// Re-export public types for external use
// These may not be used within this crate but are part of the public API
#[allow(unused_imports)]
pub use center::{TrafficManagementCenter, TrafficMediator};
#[allow(unused_imports)]
pub use command::UpdateLightCommand;
#[allow(unused_imports)]
pub use driver::{simulate_traffic_system, SimulationConfig};
#[allow(unused_imports)]
pub use facade::TrafficSystemFacade;
#[allow(unused_imports)]
pub use light::TrafficLight;
#[allow(unused_imports)]
pub use sensor::{RoadsideSensor, TrafficSensor};
#[allow(unused_imports)]
pub use types::{LightId, LightState, SensorId, TRAFFIC_EVENTS, VIOLATION_TYPES};
#[allow(unused_imports)]
pub use violation::{TrafficViolation, ViolationManager};
