//! Traffic violation log
//!
//! An append-only record of infractions. Entries are never removed within a
//! run and are reported in insertion order.

use std::fmt::Write;

use log::info;

/// An immutable record of a single infraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrafficViolation {
    pub vehicle: String,
    pub kind: String,
}

/// Owns the ordered sequence of recorded violations
#[derive(Debug, Clone, Default)]
pub struct ViolationManager {
    violations: Vec<TrafficViolation>,
}

impl ViolationManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation; always succeeds
    pub fn add_violation(&mut self, vehicle: impl Into<String>, kind: impl Into<String>) {
        let violation = TrafficViolation {
            vehicle: vehicle.into(),
            kind: kind.into(),
        };
        info!(
            "Violation recorded: Vehicle {} committed {}",
            violation.vehicle, violation.kind
        );
        self.violations.push(violation);
    }

    /// Render the full violation report as a 1-indexed enumeration
    pub fn report(&self) -> String {
        if self.violations.is_empty() {
            return "No violations recorded.".to_string();
        }
        let mut out = String::from("-- Recorded Violations --");
        for (i, violation) in self.violations.iter().enumerate() {
            let _ = write!(
                out,
                "\n{}. Vehicle {} committed {}",
                i + 1,
                violation.vehicle,
                violation.kind
            );
        }
        out
    }

    /// Emit the violation report through the log facade
    pub fn log_report(&self) {
        for line in self.report().lines() {
            info!("{}", line);
        }
    }

    pub fn violations(&self) -> &[TrafficViolation] {
        &self.violations
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }
}
