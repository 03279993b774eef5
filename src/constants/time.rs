//! Simulation loop rates.

/// Simulation updates per second (fixed timestep)
pub const UPS_SET: f64 = 200.0;
/// Render snapshots per second (always lower than the update rate)
pub const FPS_SET: f64 = 120.0;
