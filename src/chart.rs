//! Grouped bar chart of a [`Comparison`]: one group per word, one bar per source.

use anyhow::{anyhow, Result};
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;

use crate::compare::Comparison;

const SERIES_COLORS: [RGBColor; 2] = [RGBColor(31, 119, 180), RGBColor(255, 127, 14)];
/// Horizontal gap, in pixels, on each side of a bar.
const BAR_MARGIN: u32 = 2;

/// Render the chart as an SVG document of `size` (width, height) pixels.
pub fn render_svg(comparison: &Comparison, size: (u32, u32)) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
        draw(&root, comparison).map_err(|e| anyhow!("rendering chart: {e}"))?;
        root.present().map_err(|e| anyhow!("rendering chart: {e}"))?;
    }
    Ok(svg)
}

/// Chart data for consumers that render it themselves.
pub fn to_json(comparison: &Comparison) -> Result<String> {
    Ok(serde_json::to_string_pretty(comparison)?)
}

fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    comparison: &Comparison,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let words: Vec<&str> = comparison.words().collect();
    let groups = words.len().max(1);
    let y_max = (f64::from(comparison.max_count()) * 1.05).max(1.0);

    let mut chart = ChartBuilder::on(root)
        .caption(
            format!("{} vs {}", comparison.titles[0], comparison.titles[1]),
            ("sans-serif", 22),
        )
        .margin(20)
        .x_label_area_size(110)
        .y_label_area_size(70)
        .build_cartesian_2d((0..groups).into_segmented(), 0f64..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(2 * groups + 2)
        .x_label_formatter(&|x: &SegmentValue<usize>| match x {
            SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => {
                words.get(*i).map(|w| w.to_string()).unwrap_or_default()
            }
            _ => String::new(),
        })
        .x_label_style(("sans-serif", 13).into_font().transform(FontTransform::Rotate90))
        .y_label_formatter(&|y: &f64| format!("{y:.0}"))
        .x_desc("Word")
        .y_desc("Occurrences")
        .draw()?;

    // each group splits at its centre: first source left, second right
    for (side, color) in SERIES_COLORS.iter().enumerate() {
        let style = color.mix(0.85).filled();
        chart
            .draw_series(comparison.rows.iter().enumerate().map(|(i, row)| {
                let (left, right) = if side == 0 {
                    (SegmentValue::Exact(i), SegmentValue::CenterOf(i))
                } else {
                    (SegmentValue::CenterOf(i), SegmentValue::Exact(i + 1))
                };
                let top = f64::from(row.counts[side]);
                let mut bar = Rectangle::new([(left, 0.0), (right, top)], style);
                bar.set_margin(0, 0, BAR_MARGIN, BAR_MARGIN);
                bar
            }))?
            .label(comparison.titles[side].as_str())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], style));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::ComparisonRow;

    fn sample() -> Comparison {
        Comparison {
            titles: ["Emma".to_string(), "Pride and Prejudice".to_string()],
            rows: vec![
                ComparisonRow { word: "emma".into(), counts: [855, 0] },
                ComparisonRow { word: "elizabeth".into(), counts: [0, 635] },
                ComparisonRow { word: "miss".into(), counts: [599, 283] },
            ],
        }
    }

    #[test]
    fn test_render_svg_contains_labels() {
        let svg = render_svg(&sample(), (800, 400)).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("elizabeth"));
        assert!(svg.contains("miss"));
        assert!(svg.contains("Pride and Prejudice"));
    }

    #[test]
    fn test_render_empty_comparison() {
        let empty = Comparison {
            titles: ["A".to_string(), "B".to_string()],
            rows: Vec::new(),
        };
        let svg = render_svg(&empty, (400, 300)).unwrap();
        assert!(svg.contains("</svg>"));
    }

    #[test]
    fn test_json_round_trips_rows() {
        let json = to_json(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["rows"][2]["word"], "miss");
        assert_eq!(value["rows"][2]["counts"][1], 283);
        assert_eq!(value["titles"][0], "Emma");
    }
}
