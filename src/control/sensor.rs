//! Traffic sensors (observer capability)
//!
//! A sensor is anything that can receive a traffic-condition notification.
//! Only one concrete variant exists today, but the trait keeps the center
//! decoupled from the sensor implementation.

use log::info;

/// Capability for receiving traffic-condition updates
pub trait TrafficSensor {
    /// Where the sensor is installed
    fn location(&self) -> &str;

    /// The most recent event the sensor received, if any
    fn last_reading(&self) -> Option<&str>;

    /// Store a new traffic reading; always succeeds
    fn receive_update(&mut self, event: &str);
}

/// A roadside sensor that remembers its last reading
#[derive(Debug, Clone, Default)]
pub struct RoadsideSensor {
    location: String,
    last_reading: Option<String>,
}

impl RoadsideSensor {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            last_reading: None,
        }
    }
}

impl TrafficSensor for RoadsideSensor {
    fn location(&self) -> &str {
        &self.location
    }

    fn last_reading(&self) -> Option<&str> {
        self.last_reading.as_deref()
    }

    fn receive_update(&mut self, event: &str) {
        self.last_reading = Some(event.to_string());
        info!("Sensor at {} updated with data: {}", self.location, event);
    }
}
