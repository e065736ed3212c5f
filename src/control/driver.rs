//! Simulation driver for the traffic control system
//!
//! Runs the end-to-end scenario: registers sensors and lights through the
//! facade, generates random traffic events and violations for a fixed number
//! of iterations, issues one direct light command, checks singleton
//! identity, and prints the violation report.

use std::time::Duration;

use anyhow::Result;
use log::info;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use super::center::TrafficManagementCenter;
use super::command::UpdateLightCommand;
use super::facade::TrafficSystemFacade;
use super::types::{LightState, TRAFFIC_EVENTS, VIOLATION_TYPES};

/// Configuration for a simulation run
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Number of traffic-update iterations to run
    pub iterations: u32,
    /// Seed for reproducible runs; unseeded when `None`
    pub seed: Option<u64>,
    /// Pause between iterations; purely cosmetic pacing
    pub step_delay: Duration,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            iterations: 10,
            seed: None,
            step_delay: Duration::ZERO,
        }
    }
}

/// Random helpers that use a seeded RNG when one is configured
struct DriverRng {
    rng: Option<StdRng>,
}

impl DriverRng {
    fn new(seed: Option<u64>) -> Self {
        Self {
            rng: seed.map(StdRng::seed_from_u64),
        }
    }

    fn choose(&mut self, slice: &[&'static str]) -> &'static str {
        let picked = match &mut self.rng {
            Some(rng) => slice.choose(rng),
            None => slice.choose(&mut rand::rng()),
        };
        picked.copied().unwrap_or("")
    }

    fn chance(&mut self, probability: f64) -> bool {
        match &mut self.rng {
            Some(rng) => rng.random_bool(probability),
            None => rand::rng().random_bool(probability),
        }
    }

    fn vehicle_id(&mut self) -> String {
        let number: u32 = match &mut self.rng {
            Some(rng) => rng.random_range(100..=999),
            None => rand::rng().random_range(100..=999),
        };
        format!("Vehicle_{}", number)
    }
}

/// Run the full traffic management scenario
pub fn simulate_traffic_system(config: SimulationConfig) -> Result<()> {
    let traffic_system = TrafficSystemFacade::new();
    let mut rng = DriverRng::new(config.seed);

    let sensor1 = traffic_system.register_sensor("Main Street");
    let sensor2 = traffic_system.register_sensor("Second Avenue");

    let light1 = traffic_system.add_traffic_light("Main St & First Ave");
    let _light2 = traffic_system.add_traffic_light("Main St & Second Ave");

    for iteration in 0..config.iterations {
        let event1 = rng.choose(&TRAFFIC_EVENTS);
        let event2 = rng.choose(&TRAFFIC_EVENTS);

        traffic_system.update_traffic_info(sensor1, event1)?;
        traffic_system.update_traffic_info(sensor2, event2)?;

        // 30% chance of a violation per iteration
        if rng.chance(0.3) {
            let vehicle = rng.vehicle_id();
            let violation_type = rng.choose(&VIOLATION_TYPES);
            traffic_system.report_violation(&vehicle, violation_type);
        }

        if !config.step_delay.is_zero() && iteration + 1 < config.iterations {
            std::thread::sleep(config.step_delay);
        }
    }

    // Force a light green directly through a command
    let command = UpdateLightCommand::new(light1, LightState::Green);
    {
        let mut center = TrafficManagementCenter::global()
            .lock()
            .expect("traffic center mutex poisoned");
        command.execute(&mut center)?;
    }

    // Two accesses to the singleton must yield the identical instance
    let first = TrafficManagementCenter::global();
    let second = TrafficManagementCenter::global();
    info!(
        "Singleton center identity check: {}",
        std::ptr::eq(first, second)
    );

    traffic_system.log_violation_report();
    Ok(())
}
