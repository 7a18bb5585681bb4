use plotters::prelude::*;
use thiserror::Error;

use crate::services::distribution::{DistributionBucket, bucket_size};

#[derive(Error, Debug)]
pub enum HistogramError {
    #[error("failed to render histogram: {0}")]
    Render(String),
}

pub fn write_histogram_png(
    output_path: &str,
    buckets: &[DistributionBucket],
) -> Result<(), HistogramError> {
    render_histogram_png(output_path, buckets)
}

fn render_histogram_png(
    output_path: &str,
    buckets: &[DistributionBucket],
) -> Result<(), HistogramError> {
    if buckets.is_empty() {
        return Ok(());
    }

    let max_probability = buckets
        .iter()
        .map(|bucket| bucket.probability)
        .fold(0.0_f64, f64::max);
    let y_max = if max_probability > 0.0 {
        max_probability * 1.1
    } else {
        1.0
    };
    let size = bucket_size();

    let root = BitMapBackend::new(output_path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Savings Probability Distribution", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(65)
        .build_cartesian_2d(0..buckets.len() as i32, 0.0..y_max)
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Savings (% of OpEx)")
        .y_desc("Probability (%)")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .x_label_formatter(&|value| format!("{:.1}", *value as f64 * size))
        .y_label_formatter(&|value| format!("{value:.0}"))
        .draw()
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    let bar_color = RGBColor(16, 185, 129);
    let bar_style = ShapeStyle::from(&bar_color).filled();
    chart
        .draw_series(buckets.iter().enumerate().map(|(index, bucket)| {
            let index = index as i32;
            Rectangle::new([(index, 0.0), (index + 1, bucket.probability)], bar_style)
        }))
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    root.present()
        .map_err(|e| HistogramError::Render(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::trial::SampledTrial;
    use crate::services::distribution::savings_distribution;
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn empty_buckets_write_nothing() {
        let path = std::env::temp_dir().join("costsim-never-written.png");
        write_histogram_png(path.to_str().unwrap(), &[]).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn renders_png_for_distribution() {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let path = std::env::temp_dir().join(format!("histogram-{nanos}.png"));
        let trials: Vec<SampledTrial> = (0..30)
            .map(|i| SampledTrial {
                savings_percent: i as f64 * 0.5,
                savings_amount: i as f64 * 0.01,
            })
            .collect();

        write_histogram_png(path.to_str().unwrap(), &savings_distribution(&trials)).unwrap();

        assert!(std::fs::metadata(&path).unwrap().len() > 0);
        let _ = std::fs::remove_file(path);
    }
}
