//! Facade over the traffic management center
//!
//! A single entry point composing sensor/light registration, event
//! propagation, and violation reporting on top of the process-wide center.
//! The facade holds the singleton handle, never a private copy.

use std::sync::{Mutex, MutexGuard};

use anyhow::Result;

use super::center::{TrafficManagementCenter, TrafficMediator};
use super::sensor::RoadsideSensor;
use super::types::{LightId, LightState, SensorId};

/// Simplified interface to the traffic management system
pub struct TrafficSystemFacade {
    center: &'static Mutex<TrafficManagementCenter>,
}

impl Default for TrafficSystemFacade {
    fn default() -> Self {
        Self::new()
    }
}

impl TrafficSystemFacade {
    /// Build a facade over the process-wide management center
    pub fn new() -> Self {
        Self {
            center: TrafficManagementCenter::global(),
        }
    }

    fn center(&self) -> MutexGuard<'_, TrafficManagementCenter> {
        // Single-threaded use; poisoning only happens after a panic elsewhere
        self.center.lock().expect("traffic center mutex poisoned")
    }

    /// Create a roadside sensor and register it with the center
    pub fn register_sensor(&self, location: &str) -> SensorId {
        self.center()
            .register_sensor(Box::new(RoadsideSensor::new(location)))
    }

    /// Create a traffic light and register it with the center
    pub fn add_traffic_light(&self, location: &str) -> LightId {
        self.center().add_light(location)
    }

    /// Store a new reading on the sensor, then notify the center.
    ///
    /// The event propagated to the lights is the same raw value the sensor
    /// stored, not a derived notification.
    pub fn update_traffic_info(&self, sensor: SensorId, data: &str) -> Result<()> {
        let mut center = self.center();
        center.update_sensor(sensor, data)?;
        center.notify(sensor, data)
    }

    /// Record a traffic violation in the center's log
    pub fn report_violation(&self, vehicle: &str, violation_type: &str) {
        self.center()
            .violation_manager
            .add_violation(vehicle, violation_type);
    }

    /// Current state of a registered light
    pub fn light_state(&self, light: LightId) -> Result<LightState> {
        Ok(self.center().light(light)?.state)
    }

    pub fn sensor_count(&self) -> usize {
        self.center().sensor_count()
    }

    pub fn light_count(&self) -> usize {
        self.center().light_count()
    }

    /// Render the violation report
    pub fn violation_report(&self) -> String {
        self.center().violation_manager.report()
    }

    /// Emit the violation report through the log facade
    pub fn log_violation_report(&self) {
        self.center().violation_manager.log_report();
    }
}
