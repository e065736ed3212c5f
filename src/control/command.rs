//! Command object for direct light changes
//!
//! Encapsulates "set this light to this state" so the decision to change a
//! light can be made separately from when the change happens. Single-shot
//! synchronous execution; no undo, no queuing.

use anyhow::Result;

use super::center::TrafficManagementCenter;
use super::types::{LightId, LightState};

/// A deferred request to force a light into a given state
#[derive(Debug, Clone, Copy)]
pub struct UpdateLightCommand {
    light: LightId,
    state: LightState,
}

impl UpdateLightCommand {
    pub fn new(light: LightId, state: LightState) -> Self {
        Self { light, state }
    }

    /// Apply the captured state change to the target light
    pub fn execute(&self, center: &mut TrafficManagementCenter) -> Result<()> {
        center.set_light_state(self.light, self.state)
    }
}
