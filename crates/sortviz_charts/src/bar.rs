//! The bar chart model: one bar per array element, colored by the step at
//! the playback cursor.

use sortviz_core::{Brush, Color, DrawContext, Point, Rect, Step, TextStyle};

use crate::common::{draw_grid, fill_bg};
use crate::view::{ChartView, Domain1D};

/// Hard cap on bar count; the controls stop at 160, this guards the model.
const MAX_BARS: usize = 4096;

#[derive(Clone, Debug)]
pub struct BarChartStyle {
    pub bg: Color,
    pub grid: Color,
    pub text: Color,

    /// Resting bar color.
    pub bar: Color,
    /// Both indices of a `Compare`.
    pub compare: Color,
    /// Both indices of a `Swap`.
    pub swap: Color,
    /// The single index of an `Overwrite`.
    pub overwrite: Color,

    pub bar_gap: f32,
    pub min_bar_w: f32,
    pub corner: f32,
}

impl Default for BarChartStyle {
    fn default() -> Self {
        Self {
            bg: Color::rgba(0.08, 0.09, 0.11, 1.0),
            grid: Color::rgba(1.0, 1.0, 1.0, 0.08),
            text: Color::rgba(1.0, 1.0, 1.0, 0.85),
            bar: Color::from_hex(0x4682B4),
            compare: Color::from_hex(0xFFA500),
            swap: Color::from_hex(0xE04040),
            overwrite: Color::from_hex(0x3CB371),
            bar_gap: 2.0,
            min_bar_w: 1.0,
            corner: 2.0,
        }
    }
}

/// Which bars the current step highlights.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Highlight {
    #[default]
    None,
    Compare(usize, usize),
    Swap(usize, usize),
    Overwrite(usize),
}

impl Highlight {
    /// Derive the highlight from the step at the cursor, if any.
    pub fn from_step(step: Option<&Step>) -> Self {
        match step {
            Some(Step::Compare { i, j }) => Highlight::Compare(*i, *j),
            Some(Step::Swap { i, j }) => Highlight::Swap(*i, *j),
            Some(Step::Overwrite { index, .. }) => Highlight::Overwrite(*index),
            Some(Step::Done) | None => Highlight::None,
        }
    }

    fn color_for(&self, idx: usize, style: &BarChartStyle) -> Color {
        match *self {
            Highlight::Compare(i, j) if idx == i || idx == j => style.compare,
            Highlight::Swap(i, j) if idx == i || idx == j => style.swap,
            Highlight::Overwrite(i) if idx == i => style.overwrite,
            _ => style.bar,
        }
    }
}

/// Bar chart over the working array of a sorting run.
///
/// The model owns copies only: the replay player hands it a values snapshot
/// and the current step each frame, never a reference into its own state.
pub struct BarChartModel {
    values: Vec<u32>,
    highlight: Highlight,
    view: ChartView,
    pub style: BarChartStyle,
    /// Label drawn in the top-left corner (algorithm name, progress).
    pub caption: Option<String>,
}

impl BarChartModel {
    pub fn new(values: Vec<u32>) -> anyhow::Result<Self> {
        anyhow::ensure!(
            values.len() <= MAX_BARS,
            "BarChartModel supports at most {MAX_BARS} bars, got {}",
            values.len()
        );
        let view = ChartView::new(Self::domain_for(&values));
        Ok(Self {
            values,
            highlight: Highlight::None,
            view,
            style: BarChartStyle::default(),
            caption: None,
        })
    }

    fn domain_for(values: &[u32]) -> Domain1D {
        let max = values.iter().copied().max().unwrap_or(0) as f32;
        // Keep the domain valid even for empty or all-zero arrays.
        Domain1D::new(0.0, max.max(1.0))
    }

    pub fn values(&self) -> &[u32] {
        &self.values
    }

    pub fn highlight(&self) -> Highlight {
        self.highlight
    }

    pub fn view(&self) -> &ChartView {
        &self.view
    }

    /// Take the next frame's snapshot: values copy plus the step at the
    /// cursor (the renderer's sole source of highlight state).
    pub fn set_frame(&mut self, values: &[u32], step: Option<&Step>) {
        if values.len() > MAX_BARS {
            tracing::warn!(len = values.len(), "frame exceeds bar cap, ignoring");
            return;
        }
        if self.values != values {
            self.values.clear();
            self.values.extend_from_slice(values);
            self.view.y = Self::domain_for(&self.values);
        }
        self.highlight = Highlight::from_step(step);
    }

    pub fn render_plot(&mut self, ctx: &mut dyn DrawContext, w: f32, h: f32) {
        fill_bg(ctx, w, h, self.style.bg);

        let (px, py, pw, ph) = self.view.plot_rect(w, h);
        if pw <= 0.0 || ph <= 0.0 {
            return;
        }

        draw_grid(ctx, px, py, pw, ph, self.style.grid, 4);

        let n = self.values.len();
        if n == 0 {
            return;
        }

        let slot_w = pw / n as f32;
        let bar_w = (slot_w - self.style.bar_gap).max(self.style.min_bar_w);

        for (idx, &value) in self.values.iter().enumerate() {
            let x = px + idx as f32 * slot_w;
            let top = self.view.y_to_px(value as f32, py, ph);
            let bar_h = (py + ph - top).max(0.5);
            let color = self.highlight.color_for(idx, &self.style);
            ctx.fill_rect(
                Rect::new(x, top, bar_w, bar_h),
                self.style.corner.into(),
                Brush::Solid(color),
            );
        }

        if let Some(caption) = &self.caption {
            let style = TextStyle::new(12.0).with_color(self.style.text);
            ctx.draw_text(caption, Point::new(px + 4.0, py - 12.0), &style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_absurd_bar_counts() {
        assert!(BarChartModel::new(vec![1; MAX_BARS + 1]).is_err());
        assert!(BarChartModel::new(vec![1; 160]).is_ok());
    }

    #[test]
    fn domain_tracks_the_max_value() {
        let mut model = BarChartModel::new(vec![3, 7, 2]).unwrap();
        assert_eq!(model.view().y, Domain1D::new(0.0, 7.0));
        model.set_frame(&[3, 7, 100], None);
        assert_eq!(model.view().y, Domain1D::new(0.0, 100.0));
    }

    #[test]
    fn empty_values_keep_a_valid_domain() {
        let model = BarChartModel::new(Vec::new()).unwrap();
        assert!(model.view().y.is_valid());
    }

    #[test]
    fn highlight_follows_the_step_kind() {
        let style = BarChartStyle::default();

        let h = Highlight::from_step(Some(&Step::Compare { i: 0, j: 2 }));
        assert_eq!(h.color_for(0, &style), style.compare);
        assert_eq!(h.color_for(2, &style), style.compare);
        assert_eq!(h.color_for(1, &style), style.bar);

        let h = Highlight::from_step(Some(&Step::Swap { i: 1, j: 3 }));
        assert_eq!(h.color_for(1, &style), style.swap);

        let h = Highlight::from_step(Some(&Step::Overwrite { index: 2, value: 9 }));
        assert_eq!(h.color_for(2, &style), style.overwrite);
        assert_eq!(h.color_for(0, &style), style.bar);

        assert_eq!(Highlight::from_step(Some(&Step::Done)), Highlight::None);
        assert_eq!(Highlight::from_step(None), Highlight::None);
    }
}
