//! Line plot over labelled x positions

use egui::{RichText, Ui};
use egui_plot::{Legend, Line, MarkerShape, Plot, PlotPoints, Points};
use hx_core::Record;

use super::{check_columns, numeric, text, ChartError};

#[derive(Debug, Clone, PartialEq)]
pub struct LinePoint {
    /// x value as displayed on the axis
    pub label: String,
    pub y: f64,
}

/// Everything needed to draw a single-series line chart
#[derive(Debug, Clone, PartialEq)]
pub struct LineChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<LinePoint>,
    pub markers: bool,
}

/// Build a line chart from rows, plotting them in the order given
pub fn line_chart<'r, R, I>(
    rows: I,
    x: &str,
    y: &str,
    title: impl Into<String>,
) -> Result<LineChartSpec, ChartError>
where
    R: Record,
    I: IntoIterator<Item = &'r R>,
{
    check_columns::<R>(&[x, y])?;

    let points = rows
        .into_iter()
        .enumerate()
        .map(|(index, row)| {
            Ok(LinePoint {
                label: text(row, x),
                y: numeric(row, y, index)?,
            })
        })
        .collect::<Result<Vec<_>, ChartError>>()?;

    Ok(LineChartSpec {
        title: title.into(),
        x_label: x.to_string(),
        y_label: y.to_string(),
        points,
        markers: true,
    })
}

/// Axis text for an x position; only whole positions carry a label
fn x_tick_label(labels: &[String], value: f64) -> String {
    if value.fract() != 0.0 || value < 0.0 {
        return String::new();
    }
    labels.get(value as usize).cloned().unwrap_or_default()
}

pub fn show_line_chart(ui: &mut Ui, id_source: &str, spec: &LineChartSpec) {
    ui.label(RichText::new(&spec.title).strong().size(16.0));

    let labels: Vec<String> = spec.points.iter().map(|p| p.label.clone()).collect();
    let hover_labels = labels.clone();
    let values: Vec<[f64; 2]> = spec
        .points
        .iter()
        .enumerate()
        .map(|(i, p)| [i as f64, p.y])
        .collect();

    Plot::new(id_source)
        .height(360.0)
        .legend(Legend::default())
        .x_axis_label(spec.x_label.as_str())
        .y_axis_label(spec.y_label.as_str())
        .x_axis_formatter(move |value, _chars, _range| x_tick_label(&labels, value))
        .label_formatter(move |_name, value| {
            let index = value.x.round().max(0.0) as usize;
            match hover_labels.get(index) {
                Some(label) => format!("{}\n{:.0}", label, value.y),
                None => String::new(),
            }
        })
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(PlotPoints::from(values.clone()))
                    .name(&spec.y_label)
                    .width(2.0),
            );
            if spec.markers {
                plot_ui.points(
                    Points::new(PlotPoints::from(values))
                        .shape(MarkerShape::Circle)
                        .filled(true)
                        .radius(4.0),
                );
            }
        });
}
