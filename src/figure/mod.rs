//! Box-and-jitter comparison figures, one slot of boxes per region.

pub mod axis;
pub mod render;
pub mod ticks;

use plotters::prelude::{RGBColor, SeriesLabelPosition};

use crate::config::AxesConfig;
use crate::core::metric::Metric;
use crate::error::{Error, Result};

pub use render::render_cohort;

/// Period colours: blue, red, green, olive, grey.
pub const PERIOD_COLORS: [RGBColor; 5] = [
    RGBColor(0, 0, 153),
    RGBColor(153, 0, 0),
    RGBColor(0, 153, 0),
    RGBColor(153, 153, 0),
    RGBColor(153, 153, 153),
];

pub const BOX_HALF_WIDTH: f64 = 0.25;
/// Caps span half the box; jitter spreads across the cap width.
pub const CAP_HALF_WIDTH: f64 = 0.125;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FigureKind {
    /// Population change markers against urban expansion distributions.
    Rates,
    /// Population density distributions.
    Density,
}

impl FigureKind {
    pub fn metric(self) -> Metric {
        match self {
            FigureKind::Rates => Metric::UrbanExpansion,
            FigureKind::Density => Metric::Density,
        }
    }

    fn file_stem(self) -> &'static str {
        match self {
            FigureKind::Rates => "rates",
            FigureKind::Density => "PD",
        }
    }

    pub fn left_desc(self) -> &'static str {
        match self {
            FigureKind::Rates => "percent change: population",
            FigureKind::Density => "10³ people per km²",
        }
    }

    pub fn right_desc(self) -> &'static str {
        match self {
            FigureKind::Rates => "percent change: urban area",
            FigureKind::Density => "10³ people per km²",
        }
    }

    pub fn layout(self) -> SlotLayout {
        match self {
            FigureKind::Rates => SlotLayout {
                periods: 4,
                slot: 5.0,
                x_max: 51.0,
            },
            FigureKind::Density => SlotLayout {
                periods: 5,
                slot: 6.0,
                x_max: 60.0,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisScale {
    Linear,
    Log,
}

impl AxisScale {
    fn file_suffix(self) -> &'static str {
        match self {
            AxisScale::Linear => "linear",
            AxisScale::Log => "log",
        }
    }

    /// Maps a data value into drawing space. Log axes are drawn as log10 on
    /// a linear range; non-positive values have no position there.
    pub fn to_plot(self, v: f64) -> Option<f64> {
        match self {
            AxisScale::Linear if v.is_finite() => Some(v),
            AxisScale::Log if v.is_finite() && v > 0.0 => Some(v.log10()),
            _ => None,
        }
    }

    pub fn from_plot(self, y: f64) -> f64 {
        match self {
            AxisScale::Linear => y,
            AxisScale::Log => 10f64.powf(y),
        }
    }
}

/// X positions: region `m` occupies `periods` consecutive unit slots
/// starting at `1 + slot * m`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlotLayout {
    pub periods: usize,
    pub slot: f64,
    pub x_max: f64,
}

impl SlotLayout {
    pub fn position(&self, region: usize, period: usize) -> f64 {
        1.0 + self.slot * region as f64 + period as f64
    }

    /// Where the region label sits.
    pub fn center(&self, region: usize) -> f64 {
        self.position(region, 0) + self.periods as f64 / 2.0 - 0.5
    }
}

/// One of the four figures drawn per cohort.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FigureSpec {
    pub kind: FigureKind,
    pub scale: AxisScale,
    pub limits: [f64; 2],
}

impl FigureSpec {
    /// The four figures in drawing order: linear pair, then log pair.
    pub fn all(axes: &AxesConfig) -> [FigureSpec; 4] {
        [
            FigureSpec {
                kind: FigureKind::Rates,
                scale: AxisScale::Linear,
                limits: axes.rates_linear,
            },
            FigureSpec {
                kind: FigureKind::Density,
                scale: AxisScale::Linear,
                limits: axes.density_linear,
            },
            FigureSpec {
                kind: FigureKind::Rates,
                scale: AxisScale::Log,
                limits: axes.rates_log,
            },
            FigureSpec {
                kind: FigureKind::Density,
                scale: AxisScale::Log,
                limits: axes.density_log,
            },
        ]
    }

    pub fn file_name(&self, cohort_tag: &str) -> String {
        format!(
            "{}_{}_{}.png",
            cohort_tag,
            self.kind.file_stem(),
            self.scale.file_suffix()
        )
    }

    fn limit_error(&self, problem: &str) -> Error {
        let [lo, hi] = self.limits;
        Error::Plot(format!(
            "{}_{} axis limits [{lo}, {hi}] {problem}",
            self.kind.file_stem(),
            self.scale.file_suffix()
        ))
    }

    /// Limits in drawing space. They must be finite, increasing and, on a
    /// log axis, positive.
    pub fn plot_range(&self) -> Result<(f64, f64)> {
        let [lo, hi] = self.limits;
        if !lo.is_finite() || !hi.is_finite() || lo >= hi {
            return Err(self.limit_error("must be finite with lower < upper"));
        }
        match (self.scale.to_plot(lo), self.scale.to_plot(hi)) {
            (Some(y_lo), Some(y_hi)) => Ok((y_lo, y_hi)),
            _ => Err(self.limit_error("must be positive on a log axis")),
        }
    }

    pub fn ticks(&self) -> Result<Vec<f64>> {
        self.plot_range()?;
        let [lo, hi] = self.limits;
        let ticks = match (self.kind, self.scale) {
            (FigureKind::Rates, AxisScale::Linear) => ticks::stepped(lo, hi, 2.0),
            (FigureKind::Rates, AxisScale::Log) => ticks::powers_of_two(lo, hi),
            (FigureKind::Density, _) => ticks::multiples(lo, hi, 10.0),
        };
        if ticks.len() > ticks::MAX_TICKS {
            return Err(self.limit_error("span too many ticks"));
        }
        Ok(ticks)
    }

    pub fn format_tick(&self, v: f64) -> String {
        match (self.kind, self.scale) {
            (FigureKind::Rates, AxisScale::Log) => format!("{v:.1}"),
            _ => format!("{v:.0}"),
        }
    }

    pub fn legend_position(&self) -> SeriesLabelPosition {
        match (self.kind, self.scale) {
            (FigureKind::Rates, AxisScale::Log) => SeriesLabelPosition::LowerLeft,
            _ => SeriesLabelPosition::UpperLeft,
        }
    }
}
