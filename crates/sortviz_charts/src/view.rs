//! Chart view transform: value domain to plot pixels.

/// 1D numeric domain (min..max).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain1D {
    pub min: f32,
    pub max: f32,
}

impl Domain1D {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f32 {
        self.max - self.min
    }

    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.max > self.min
    }
}

/// View transform for the bar chart: y domain mapping to local pixel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartView {
    pub y: Domain1D,
    /// Padding inside the plotting area (left, top, right, bottom).
    pub padding: [f32; 4],
}

impl ChartView {
    pub fn new(y: Domain1D) -> Self {
        Self {
            y,
            padding: [8.0, 16.0, 8.0, 8.0],
        }
    }

    pub fn plot_rect(&self, width: f32, height: f32) -> (f32, f32, f32, f32) {
        let left = self.padding[0];
        let top = self.padding[1];
        let right = self.padding[2];
        let bottom = self.padding[3];
        let w = (width - left - right).max(0.0);
        let h = (height - top - bottom).max(0.0);
        (left, top, w, h)
    }

    pub fn y_to_px(&self, y: f32, plot_y: f32, plot_h: f32) -> f32 {
        // y increases downward in screen coords.
        let t = (y - self.y.min) / self.y.span();
        plot_y + (1.0 - t) * plot_h
    }
}
