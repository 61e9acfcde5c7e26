//! Status line state types.

/// Immutable snapshot read by the renderer each frame.
#[derive(Clone, Debug, Default)]
pub struct StatusLine {
    pub fps: f32,
    pub frames: u64,
}

/// Mutable accumulator that tracks frame rate.
#[derive(Debug)]
pub struct StatusLineAccumulator {
    fps_ema: f32,
    frames: u64,
}

impl Default for StatusLineAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusLineAccumulator {
    pub fn new() -> Self {
        Self {
            fps_ema: 60.0,
            frames: 0,
        }
    }

    /// Update with the interval since the previous render (ms).
    pub fn on_frame(&mut self, frame_ms: u16) {
        let fps = if frame_ms > 0 {
            1000.0 / f32::from(frame_ms)
        } else {
            self.fps_ema
        };
        self.fps_ema += 0.1 * (fps - self.fps_ema);
        self.frames += 1;
    }

    pub fn snapshot(&self) -> StatusLine {
        StatusLine {
            fps: (self.fps_ema * 10.0).round() / 10.0,
            frames: self.frames,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fps_tracking() {
        let mut acc = StatusLineAccumulator::new();
        acc.on_frame(16);
        acc.on_frame(16);
        acc.on_frame(16);
        let snapshot = acc.snapshot();
        assert!(snapshot.fps > 50.0);
        assert_eq!(snapshot.frames, 3);
    }

    #[test]
    fn test_slow_frames_pull_fps_down() {
        let mut acc = StatusLineAccumulator::new();
        for _ in 0..50 {
            acc.on_frame(100);
        }
        assert!(acc.snapshot().fps < 15.0);
    }
}
