use crate::error::{Error, Result};
use crate::range::ParamRange;
use plotters::prelude::*;
use std::path::Path;

/// Renders the normalized-to-parameter curve of `range` to a PNG at `path`.
pub fn plot_curve<R: ParamRange + ?Sized>(range: &R, steps: usize, path: &Path) -> Result<()> {
    let steps = steps.max(1);
    let xs: Vec<f64> = (0..=steps).map(|i| i as f64 / steps as f64).collect();
    let ys: Vec<f64> = xs.iter().map(|&t| range.norm_to_param(t)).collect();
    plot_graph(&xs, &ys, path)?;
    log::info!("wrote {} point curve to {}", xs.len(), path.display());
    Ok(())
}

pub fn plot_graph(xs: &[f64], ys: &[f64], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let root = BitMapBackend::new(path, (640, 480)).into_drawing_area();
    root.fill(&WHITE).map_err(plot_error)?;

    let x_min = xs.iter().cloned().fold(f64::MAX, f64::min);
    let x_max = xs.iter().cloned().fold(f64::MIN, f64::max);
    let y_min = ys.iter().cloned().fold(f64::MAX, f64::min);
    let y_max = ys.iter().cloned().fold(f64::MIN, f64::max);

    let mut chart = ChartBuilder::on(&root)
        .margin(5)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(plot_error)?;

    chart
        .draw_series(LineSeries::new(
            xs.iter().zip(ys.iter()).map(|(&x, &y)| (x, y)),
            &BLUE,
        ))
        .map_err(plot_error)?;

    root.present().map_err(plot_error)?;
    Ok(())
}

fn plot_error<E: std::fmt::Display>(e: E) -> Error {
    Error::Plot(e.to_string())
}
