use std::time::{Duration, Instant};

use crate::{
    error::{GlideError, GlideResult},
    scroll::Scroller,
    viewport::Viewport,
};

/// Drive `scroller` to completion with synthetic timestamps spaced at
/// `1000/fps` milliseconds, starting from zero. Deterministic; no sleeping.
/// Returns the number of frames executed.
#[tracing::instrument(skip(scroller))]
pub fn drive_fixed<V: Viewport>(scroller: &mut Scroller<V>, fps: u32) -> GlideResult<u64> {
    drive_fixed_with(scroller, fps, |_, _| {})
}

/// Like [`drive_fixed`], invoking `on_sample(frame, scroll_y)` after each
/// frame's offset write.
pub fn drive_fixed_with<V, F>(
    scroller: &mut Scroller<V>,
    fps: u32,
    mut on_sample: F,
) -> GlideResult<u64>
where
    V: Viewport,
    F: FnMut(u64, f64),
{
    if fps == 0 {
        return Err(GlideError::validation("fps must be > 0"));
    }

    let step_ms = 1000.0 / f64::from(fps);
    let mut frames = 0u64;
    while scroller.is_animating() {
        scroller.on_frame(frames as f64 * step_ms);
        on_sample(frames, scroller.viewport().scroll_y());
        frames += 1;
    }
    Ok(frames)
}

/// Drive `scroller` to completion against the wall clock, sleeping out each
/// frame interval. Approximates a repaint scheduler on hosts without a
/// display-sync callback: at most one frame per interval, `Instant`-derived
/// monotonic timestamps.
#[tracing::instrument(skip(scroller))]
pub fn drive_realtime<V: Viewport>(scroller: &mut Scroller<V>, fps: u32) -> GlideResult<u64> {
    if fps == 0 {
        return Err(GlideError::validation("fps must be > 0"));
    }

    let interval = Duration::from_secs_f64(1.0 / f64::from(fps));
    let t0 = Instant::now();
    let mut frames = 0u64;
    while scroller.is_animating() {
        scroller.on_frame(t0.elapsed().as_secs_f64() * 1000.0);
        frames += 1;
        if scroller.is_animating() {
            std::thread::sleep(interval);
        }
    }
    Ok(frames)
}
