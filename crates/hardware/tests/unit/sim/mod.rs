//! Simulation session tests.


/// Full sample programs run to completion.
pub mod programs;

/// Stepping, halting, and reset on the simulator session.
pub mod simulator;
