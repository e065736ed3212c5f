//! City Traffic Control Library
//!
//! A traffic-management simulation that can run headless from the console.

pub mod control;
