use std::error::Error;
use std::path::{Path, PathBuf};

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use rand::Rng;
use tracing::info;

use super::axis::TickedRange;
use super::{BOX_HALF_WIDTH, CAP_HALF_WIDTH, FigureKind, FigureSpec, PERIOD_COLORS, ticks};
use crate::analysis::CohortAnalysis;
use crate::config::FigureConfig;
use crate::core::stats::BoxStats;
use crate::data::Region;

const BOX_GREY: RGBColor = RGBColor(153, 153, 153);
const GRID_GREY: RGBColor = RGBColor(204, 204, 204);

/// Draws the four figures of one cohort into `out_dir` and returns the
/// written paths. `rng` places the jitter.
pub fn render_cohort<R: Rng>(
    analysis: &CohortAnalysis,
    specs: &[FigureSpec],
    figure: &FigureConfig,
    out_dir: &Path,
    rng: &mut R,
) -> crate::error::Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(specs.len());
    for spec in specs {
        let path = out_dir.join(spec.file_name(analysis.cohort.tag()));
        render_figure(&path, spec, analysis, figure, rng).map_err(crate::error::Error::plot)?;
        info!(path = %path.display(), "figure written");
        written.push(path);
    }
    Ok(written)
}

fn render_figure<R: Rng>(
    out_path: &Path,
    spec: &FigureSpec,
    analysis: &CohortAnalysis,
    figure: &FigureConfig,
    rng: &mut R,
) -> Result<(), Box<dyn Error>> {
    let layout = spec.kind.layout();
    let scale = spec.scale;
    let (y_lo, y_hi) = spec.plot_range()?;
    let in_range = |y: f64| y >= y_lo && y <= y_hi;

    let tick_pos: Vec<f64> = spec
        .ticks()?
        .iter()
        .filter_map(|&t| scale.to_plot(t))
        .collect();
    let centers: Vec<f64> = (0..Region::ALL.len()).map(|m| layout.center(m)).collect();
    let region_labels: Vec<(f64, &str)> = centers
        .iter()
        .copied()
        .zip(Region::ALL.iter().map(|r| r.label()))
        .collect();

    let font = figure.font.as_str();
    let root = BitMapBackend::new(out_path, (figure.width, figure.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(110)
        .right_y_label_area_size(110)
        .build_cartesian_2d(
            TickedRange::new(0.0..layout.x_max, centers.clone()),
            TickedRange::new(y_lo..y_hi, tick_pos.clone()),
        )?
        .set_secondary_coord(
            TickedRange::new(0.0..layout.x_max, Vec::new()),
            TickedRange::new(y_lo..y_hi, tick_pos.clone()),
        );

    let x_fmt = |x: &f64| {
        region_labels
            .iter()
            .find(|(c, _)| (c - x).abs() < 1e-6)
            .map(|(_, l)| l.to_string())
            .unwrap_or_default()
    };
    let y_fmt = |y: &f64| spec.format_tick(scale.from_plot(*y));

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(centers.len())
        .y_labels(tick_pos.len())
        .x_label_formatter(&x_fmt)
        .y_label_formatter(&y_fmt)
        .y_desc(spec.kind.left_desc())
        .label_style((font, 22))
        .axis_desc_style((font, 24))
        .draw()?;

    chart
        .configure_secondary_axes()
        .y_label_formatter(&y_fmt)
        .y_desc(spec.kind.right_desc())
        .label_style((font, 22))
        .axis_desc_style((font, 24))
        .draw()?;

    let grid = GRID_GREY.mix(0.6);
    for &t in ticks::interior(&tick_pos) {
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(0.0, t), (layout.x_max, t)],
            grid,
        )))?;
    }

    if spec.kind == FigureKind::Rates {
        for (m, region) in analysis.regions.iter().enumerate() {
            for (j, &mean) in region.population_change.iter().enumerate() {
                let Some(y) = scale.to_plot(mean).filter(|&y| in_range(y)) else {
                    continue;
                };
                let x = layout.position(m, j);
                chart.draw_series(std::iter::once(PathElement::new(
                    vec![(x - 0.1, y), (x + 0.1, y)],
                    PERIOD_COLORS[j].stroke_width(6),
                )))?;
            }
        }
    }

    let box_style = ShapeStyle::from(&BOX_GREY).stroke_width(2);
    let count_style =
        TextStyle::from((font, 16).into_font()).pos(Pos::new(HPos::Center, VPos::Bottom));
    let clamp_y = |v: f64| scale.to_plot(v).unwrap_or(y_lo).clamp(y_lo, y_hi);

    for (m, (_, draws)) in analysis.draws(spec.kind.metric()).enumerate() {
        for (j, period) in draws.draws.iter().enumerate() {
            let x = layout.position(m, j);
            let color = PERIOD_COLORS[j].mix(figure.jitter_alpha);

            let cloud: Vec<(f64, f64)> = period
                .iter()
                .filter_map(|&v| scale.to_plot(v))
                .filter(|&y| in_range(y))
                .map(|y| (x + rng.random_range(-CAP_HALF_WIDTH..=CAP_HALF_WIDTH), y))
                .collect();
            chart.draw_series(cloud.into_iter().map(|p| Circle::new(p, 2, color.filled())))?;

            let Some(b) = BoxStats::from_values(period) else {
                continue;
            };
            let (q1, med, q3) = (clamp_y(b.q1), clamp_y(b.median), clamp_y(b.q3));
            let (w_lo, w_hi) = (clamp_y(b.whisker_lo), clamp_y(b.whisker_hi));

            chart.draw_series(std::iter::once(Rectangle::new(
                [(x - BOX_HALF_WIDTH, q1), (x + BOX_HALF_WIDTH, q3)],
                box_style,
            )))?;
            let half = BOX_HALF_WIDTH;
            let cap = CAP_HALF_WIDTH;
            chart.draw_series([
                PathElement::new(vec![(x - half, med), (x + half, med)], box_style),
                PathElement::new(vec![(x, q3), (x, w_hi)], box_style),
                PathElement::new(vec![(x, q1), (x, w_lo)], box_style),
                PathElement::new(vec![(x - cap, w_hi), (x + cap, w_hi)], box_style),
                PathElement::new(vec![(x - cap, w_lo), (x + cap, w_lo)], box_style),
            ])?;

            if let Some(top) = scale.to_plot(b.whisker_hi).filter(|&y| in_range(y)) {
                chart.draw_series(std::iter::once(Text::new(
                    draws.counts[j].to_string(),
                    (x, top),
                    count_style.clone(),
                )))?;
            }
        }
    }

    for (j, label) in spec.kind.metric().legend_labels().iter().enumerate() {
        let color = PERIOD_COLORS[j];
        chart
            .draw_series(std::iter::empty::<Circle<(f64, f64), i32>>())?
            .label(*label)
            .legend(move |(x, y)| Circle::new((x, y), 6, color.filled()));
    }
    chart
        .configure_series_labels()
        .position(spec.legend_position())
        .label_font((font, 18))
        .background_style(WHITE.mix(0.9))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
