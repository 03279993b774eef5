//! Fixed-timestep driver.
//!
//! Simulation runs at `UPS_SET` updates per second regardless of render
//! pace; rendering is capped at `FPS_SET`. Update credit accumulates as
//! a fraction of the tick interval, so a slow frame is repaid with
//! several catch-up ticks rather than a slower simulation.

use std::time::Instant;

use crate::constants::{FPS_SET, UPS_SET};

/// Run the loop until `poll` returns false.
///
/// `poll` gathers input and reports whether to keep running, `update`
/// advances the simulation by exactly one tick, `render` draws one frame.
pub fn run<P, U, R>(mut poll: P, mut update: U, mut render: R)
where
    P: FnMut() -> bool,
    U: FnMut(),
    R: FnMut(),
{
    let time_per_update = 1.0 / UPS_SET;
    let time_per_frame = 1.0 / FPS_SET;

    let mut previous = Instant::now();
    let mut delta_u = 0.0_f64;
    let mut delta_f = 0.0_f64;

    let mut updates = 0u32;
    let mut frames = 0u32;
    let mut last_report = Instant::now();

    while poll() {
        let now = Instant::now();
        let elapsed = now.duration_since(previous).as_secs_f64();
        previous = now;
        delta_u += elapsed / time_per_update;
        delta_f += elapsed / time_per_frame;

        while delta_u >= 1.0 {
            update();
            updates += 1;
            delta_u -= 1.0;
        }

        if delta_f >= 1.0 {
            render();
            frames += 1;
            delta_f -= 1.0;
        }

        if last_report.elapsed().as_secs() >= 1 {
            tracing::debug!(ups = updates, fps = frames, "loop rate");
            updates = 0;
            frames = 0;
            last_report = Instant::now();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loop_exits_when_poll_declines() {
        let mut updates = 0u32;
        run(|| false, || updates += 1, || {});
        assert_eq!(updates, 0);
    }

    #[test]
    fn test_updates_accumulate_in_real_time() {
        use std::cell::Cell;

        let updates = Cell::new(0u32);
        let renders = Cell::new(0u32);
        // Run until enough ticks have elapsed, then stop
        run(
            || updates.get() < 20,
            || updates.set(updates.get() + 1),
            || renders.set(renders.get() + 1),
        );
        assert!(updates.get() >= 20);
        assert!(renders.get() >= 1);
    }
}
