//! The traffic management center (mediator)
//!
//! The center owns every registered sensor and light plus the violation log,
//! and fans sensor events out to the lights. Exactly one center exists per
//! process; it is created lazily on first access through
//! [`TrafficManagementCenter::global`].

use std::sync::{Mutex, OnceLock};

use anyhow::{Context, Result};
use log::info;

use super::light::TrafficLight;
use super::sensor::TrafficSensor;
use super::types::{LightId, LightState, SensorId};
use super::violation::ViolationManager;

static GLOBAL_CENTER: OnceLock<Mutex<TrafficManagementCenter>> = OnceLock::new();

/// Capability for mediating between senders and receivers
///
/// A mediator accepts a notification from a sender and decides which
/// interested parties hear about it.
pub trait TrafficMediator {
    fn notify(&mut self, sender: SensorId, event: &str) -> Result<()>;
}

/// The central coordinator for sensors, lights, and violations
#[derive(Default)]
pub struct TrafficManagementCenter {
    /// Registered sensors, in registration order
    sensors: Vec<Box<dyn TrafficSensor + Send>>,
    /// Registered lights, in registration order
    lights: Vec<TrafficLight>,
    /// The violation log owned by the center
    pub violation_manager: ViolationManager,
}

impl TrafficManagementCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Access the process-wide center, creating it on first use.
    ///
    /// Every call returns the identical instance for the lifetime of the
    /// process.
    pub fn global() -> &'static Mutex<TrafficManagementCenter> {
        GLOBAL_CENTER.get_or_init(|| Mutex::new(TrafficManagementCenter::new()))
    }

    /// Register a sensor and hand back its id
    pub fn register_sensor(&mut self, sensor: Box<dyn TrafficSensor + Send>) -> SensorId {
        let id = SensorId(self.sensors.len());
        self.sensors.push(sensor);
        id
    }

    /// Create and register a traffic light at the given location
    pub fn add_light(&mut self, location: impl Into<String>) -> LightId {
        let id = LightId(self.lights.len());
        self.lights.push(TrafficLight::new(id, location));
        id
    }

    /// Forward a new reading to the given sensor
    pub fn update_sensor(&mut self, id: SensorId, event: &str) -> Result<()> {
        let sensor = self
            .sensors
            .get_mut(id.0)
            .context("Sensor not registered with the center")?;
        sensor.receive_update(event);
        Ok(())
    }

    /// Set a light's state directly, bypassing event classification
    pub fn set_light_state(&mut self, id: LightId, state: LightState) -> Result<()> {
        let light = self
            .lights
            .get_mut(id.0)
            .context("Light not registered with the center")?;
        light.update_state(state);
        Ok(())
    }

    pub fn sensor(&self, id: SensorId) -> Result<&(dyn TrafficSensor + Send)> {
        self.sensors
            .get(id.0)
            .map(|s| s.as_ref())
            .context("Sensor not registered with the center")
    }

    pub fn light(&self, id: LightId) -> Result<&TrafficLight> {
        self.lights
            .get(id.0)
            .context("Light not registered with the center")
    }

    pub fn sensor_count(&self) -> usize {
        self.sensors.len()
    }

    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    pub fn lights(&self) -> &[TrafficLight] {
        &self.lights
    }
}

impl TrafficMediator for TrafficManagementCenter {
    /// Broadcast a sensor's event to every registered light.
    ///
    /// Lights are notified in registration order; there is no filtering or
    /// topology, so lights not of interest still hear the event.
    fn notify(&mut self, sender: SensorId, event: &str) -> Result<()> {
        let location = self.sensor(sender)?.location().to_string();
        info!("Sensor at {} detected event: {}", location, event);
        for light in &mut self.lights {
            light.handle_event(event);
        }
        Ok(())
    }
}
