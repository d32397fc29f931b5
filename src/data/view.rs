//! Per-panel vertical view transform: zoom scale and pan offset.

/// Vertical direction of a pointer-drag pan gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanDirection {
    Up,
    Down,
}

/// Zoom scale and pan offset applied to a panel's displayed value range.
///
/// The zoom steps are independent multiplicative operators, not inverses:
/// one zoom-in followed by one zoom-out lands at 0.9375, not 1.0. The drift
/// is a preserved behavior of the system, so don't "fix" it.
#[derive(Debug, Clone, Copy)]
pub struct ViewTransform {
    pub scale: f64,
    pub pan_offset: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            pan_offset: 0.0,
        }
    }
}

impl ViewTransform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn zoom_in(&mut self) {
        self.scale *= 0.75;
    }

    pub fn zoom_out(&mut self) {
        self.scale *= 1.25;
    }

    /// Shift the pan offset one step in `direction`, clamped against the
    /// extent of the currently visible window:
    /// - up stops once the displayed ceiling would pass the window maximum;
    /// - down stops at a small guard margin above the window minimum.
    pub fn pan(&mut self, direction: PanDirection, window_extent: (f64, f64)) {
        let (window_min, window_max) = window_extent;
        match direction {
            PanDirection::Up => {
                if window_max * self.scale + self.pan_offset < window_max {
                    self.pan_offset += 0.05 * window_max;
                }
            }
            PanDirection::Down => {
                if window_max * self.scale + self.pan_offset > window_min + 0.4 {
                    self.pan_offset -= 0.05 * window_min.abs();
                }
            }
        }
    }

    /// The value range handed to the rendering layer, computed from the
    /// extent of *all* loaded channels (not just the visible window).
    pub fn axis_range(&self, value_extent: (f64, f64)) -> (f64, f64) {
        let (min, max) = value_extent;
        (
            min * self.scale + self.pan_offset,
            max * self.scale + self.pan_offset,
        )
    }
}
