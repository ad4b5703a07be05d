use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use plotters::prelude::*;

use crate::models::{AdoptionSeries, WeeklyObservation};

const CHART_SIZE: (u32, u32) = (800, 500);

/// Renders one overlay chart per trend into `out_dir`, creating the
/// directory if needed. Returns the number of charts written.
pub fn render_all(
    out_dir: &Path,
    observations: &[WeeklyObservation],
    adoption: &[(&'static str, AdoptionSeries)],
) -> anyhow::Result<usize> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create chart directory {}", out_dir.display()))?;

    let mut rendered = 0usize;

    for (trend, series) in adoption {
        let viral: Vec<(u32, f64)> = observations
            .iter()
            .filter(|observation| observation.trend == *trend)
            .map(|observation| (observation.week, f64::from(observation.video_count)))
            .collect();

        let path = render_trend_chart(out_dir, trend, &viral, series)?;
        tracing::debug!(trend = %trend, path = %path.display(), "chart rendered");
        rendered += 1;
    }

    Ok(rendered)
}

/// One line chart overlaying posting volume and adoption intensity on the
/// shared week axis.
pub fn render_trend_chart(
    out_dir: &Path,
    trend: &str,
    viral: &[(u32, f64)],
    adoption: &AdoptionSeries,
) -> anyhow::Result<PathBuf> {
    let path = out_dir.join(format!("{trend}_style_signal.png"));

    let y_max = viral
        .iter()
        .map(|(_, count)| *count)
        .chain(adoption.iter().copied())
        .fold(1.0, f64::max)
        * 1.15;

    let backend_path = path.clone();
    let root = BitMapBackend::new(&backend_path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| anyhow!("backend error: {e}"))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .caption(format!("Style Signals: {trend}"), ("sans-serif", 24.0))
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .build_cartesian_2d(1u32..6u32, 0.0..y_max)
        .map_err(|e| anyhow!("chart build error: {e}"))?;

    chart
        .configure_mesh()
        .x_desc("Week")
        .y_desc("Relative Frequency")
        .x_labels(6)
        .draw()
        .map_err(|e| anyhow!("mesh error: {e}"))?;

    chart
        .draw_series(LineSeries::new(viral.iter().copied(), &BLUE))
        .map_err(|e| anyhow!("draw error: {e}"))?
        .label("Viral Content (Posting)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], BLUE));
    chart
        .draw_series(
            viral
                .iter()
                .map(|point| Circle::new(*point, 3, BLUE.filled())),
        )
        .map_err(|e| anyhow!("draw error: {e}"))?;

    let adoption_points: Vec<(u32, f64)> = adoption
        .iter()
        .enumerate()
        .map(|(index, value)| (index as u32 + 1, *value))
        .collect();

    chart
        .draw_series(LineSeries::new(adoption_points.iter().copied(), &RED))
        .map_err(|e| anyhow!("draw error: {e}"))?
        .label("Adoption Signal (Wearing)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], RED));
    chart
        .draw_series(
            adoption_points
                .iter()
                .map(|point| Circle::new(*point, 3, RED.filled())),
        )
        .map_err(|e| anyhow!("draw error: {e}"))?;

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.85))
        .border_style(BLACK)
        .position(SeriesLabelPosition::UpperRight)
        .draw()
        .map_err(|e| anyhow!("legend error: {e}"))?;

    root.present().map_err(|e| anyhow!("render error: {e}"))?;
    Ok(path)
}
