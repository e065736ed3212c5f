//! Traffic light state machine
//!
//! Lights start red and change state either from classified traffic events
//! or from direct commands. There is no terminal state.

use log::info;

use super::types::{LightId, LightState};

/// A traffic light at a fixed location
#[derive(Debug, Clone)]
pub struct TrafficLight {
    pub id: LightId,
    pub location: String,
    pub state: LightState,
}

impl TrafficLight {
    pub fn new(id: LightId, location: impl Into<String>) -> Self {
        Self {
            id,
            location: location.into(),
            state: LightState::Red,
        }
    }

    /// Set the light state unconditionally and log the change
    pub fn update_state(&mut self, new_state: LightState) {
        self.state = new_state;
        info!("Traffic light at {} changed to {}", self.location, self.state);
    }

    /// React to a traffic event by switching to the state it calls for
    pub fn handle_event(&mut self, event: &str) {
        self.update_state(LightState::from_event(event));
    }
}
