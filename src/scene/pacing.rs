use std::time::Duration;

/// Coalesces bursts of input events into one recomputation per animation
/// frame.
///
/// The first event after a frame asks for a new frame; later events only
/// refresh the input snapshot until that frame runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    /// Returns `true` when the caller must schedule an animation frame.
    #[inline]
    pub fn request(&mut self) -> bool {
        if self.pending {
            false
        } else {
            self.pending = true;
            true
        }
    }

    /// Called at the start of the scheduled frame.
    #[inline]
    pub fn begin_frame(&mut self) {
        self.pending = false;
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

// Exponential smoothing weight for a new frame interval
pub const FPS_SMOOTHING: f32 = 0.1;

/// Smoothed frames-per-second estimate from animation-frame intervals.
#[derive(Clone, Copy, Debug)]
pub struct FpsMeter {
    avg_frame_sec: Option<f32>,
    alpha: f32,
}

impl Default for FpsMeter {
    fn default() -> Self {
        Self::new(FPS_SMOOTHING)
    }
}

impl FpsMeter {
    pub fn new(alpha: f32) -> Self {
        Self {
            avg_frame_sec: None,
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    /// Feeds one frame interval and returns the updated estimate. Zero-length
    /// intervals (two callbacks in the same tick) are ignored.
    pub fn tick(&mut self, dt: Duration) -> f32 {
        let dt_sec = dt.as_secs_f32();
        if dt_sec > 0.0 {
            self.avg_frame_sec = Some(match self.avg_frame_sec {
                Some(avg) => (1.0 - self.alpha) * avg + self.alpha * dt_sec,
                None => dt_sec,
            });
        }
        self.fps()
    }

    pub fn fps(&self) -> f32 {
        match self.avg_frame_sec {
            Some(avg) if avg > 0.0 => 1.0 / avg,
            _ => 0.0,
        }
    }
}
