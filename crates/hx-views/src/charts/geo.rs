//! Geographic scatter plot of destinations

use egui::Ui;
use egui_plot::{Legend, MarkerShape, Plot, PlotPoint, PlotPoints, Points};
use hx_core::Record;

use super::{check_columns, numeric, text, ChartError};

/// Column roles for a geographic scatter plot
#[derive(Debug, Clone)]
pub struct GeoColumns<'a> {
    pub lat: &'a str,
    pub lon: &'a str,
    /// Bold first line of the hover label
    pub hover_name: &'a str,
    pub hover_data: &'a [&'a str],
    /// Points are grouped into one colored series per value
    pub color: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
    pub name: String,
    pub hover: Vec<(String, String)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeoSeries {
    pub name: String,
    pub points: Vec<GeoPoint>,
}

/// Everything needed to draw the map
#[derive(Debug, Clone, PartialEq)]
pub struct GeoScatterSpec {
    pub series: Vec<GeoSeries>,
    pub zoom: f32,
    pub height: f32,
}

impl GeoScatterSpec {
    /// (min_lon, min_lat, max_lon, max_lat) over all points
    pub fn bounds(&self) -> Option<[f64; 4]> {
        let mut points = self.series.iter().flat_map(|s| &s.points);
        let first = points.next()?;
        let init = [first.lon, first.lat, first.lon, first.lat];
        Some(points.fold(init, |[x0, y0, x1, y1], p| {
            [x0.min(p.lon), y0.min(p.lat), x1.max(p.lon), y1.max(p.lat)]
        }))
    }
}

/// Build a geographic scatter specification from rows
pub fn geo_scatter<'r, R, I>(rows: I, columns: &GeoColumns<'_>) -> Result<GeoScatterSpec, ChartError>
where
    R: Record,
    I: IntoIterator<Item = &'r R>,
{
    let mut roles = vec![columns.lat, columns.lon, columns.hover_name];
    roles.extend_from_slice(columns.hover_data);
    roles.extend(columns.color);
    check_columns::<R>(&roles)?;

    let mut series: Vec<GeoSeries> = Vec::new();
    for (index, row) in rows.into_iter().enumerate() {
        let point = GeoPoint {
            lat: numeric(row, columns.lat, index)?,
            lon: numeric(row, columns.lon, index)?,
            name: text(row, columns.hover_name),
            hover: columns
                .hover_data
                .iter()
                .map(|c| (c.to_string(), text(row, c)))
                .collect(),
        };

        let group = columns.color.map(|c| text(row, c)).unwrap_or_default();
        match series.iter_mut().find(|s| s.name == group) {
            Some(existing) => existing.points.push(point),
            None => series.push(GeoSeries {
                name: group,
                points: vec![point],
            }),
        }
    }

    Ok(GeoScatterSpec {
        series,
        zoom: 4.0,
        height: 600.0,
    })
}

/// Hover text for the point of `series` nearest to `value`
fn hover_label(series: &[GeoSeries], name: &str, value: &PlotPoint) -> String {
    let nearest = series
        .iter()
        .filter(|s| s.name == name)
        .flat_map(|s| &s.points)
        .min_by(|a, b| {
            let da = (a.lon - value.x).powi(2) + (a.lat - value.y).powi(2);
            let db = (b.lon - value.x).powi(2) + (b.lat - value.y).powi(2);
            da.total_cmp(&db)
        });

    match nearest {
        Some(point) => {
            let mut label = point.name.clone();
            for (column, cell) in &point.hover {
                label.push_str(&format!("\n{}: {}", column, cell));
            }
            label
        }
        None => String::new(),
    }
}

/// Draw the map as a longitude/latitude scatter
pub fn show_geo_scatter(ui: &mut Ui, id_source: &str, spec: &GeoScatterSpec) {
    let hover_series = spec.series.clone();
    let mut plot = Plot::new(id_source)
        .height(spec.height)
        .data_aspect(1.0)
        .legend(Legend::default())
        .x_axis_label("Longitude")
        .y_axis_label("Latitude")
        .label_formatter(move |name, value| hover_label(&hover_series, name, value));

    if let Some([x0, y0, x1, y1]) = spec.bounds() {
        // Higher zoom pads less around the points
        let pad = 20.0 / spec.zoom.max(1.0) as f64;
        plot = plot
            .include_x(x0 - pad)
            .include_x(x1 + pad)
            .include_y(y0 - pad)
            .include_y(y1 + pad);
    }

    plot.show(ui, |plot_ui| {
        for series in &spec.series {
            let points: Vec<[f64; 2]> = series.points.iter().map(|p| [p.lon, p.lat]).collect();
            plot_ui.points(
                Points::new(PlotPoints::from(points))
                    .name(&series.name)
                    .shape(MarkerShape::Circle)
                    .filled(true)
                    .radius(6.0),
            );
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use hx_core::Destination;

    fn destination(name: &str, category: &str, lat: f64, lon: f64) -> Destination {
        Destination {
            name: name.into(),
            state: "Odisha".into(),
            category: category.into(),
            latitude: lat,
            longitude: lon,
            annual_visitors: 1000,
            significance: 8.0,
            unique_aspect: String::new(),
            best_season: String::new(),
            image_path: None,
        }
    }

    const COLUMNS: GeoColumns<'static> = GeoColumns {
        lat: "latitude",
        lon: "longitude",
        hover_name: "name",
        hover_data: &["state", "category", "annual_visitors"],
        color: Some("category"),
    };

    #[test]
    fn test_points_grouped_by_color_column() {
        let rows = vec![
            destination("Konark", "Temple", 19.88, 86.09),
            destination("Raghurajpur", "Craft Village", 19.83, 85.85),
            destination("Lingaraj", "Temple", 20.23, 85.83),
        ];
        let spec = geo_scatter(&rows, &COLUMNS).unwrap();

        assert_eq!(spec.series.iter().map(|s| s.points.len()).sum::<usize>(), 3);
        let names: Vec<_> = spec.series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Temple", "Craft Village"]);
        assert_eq!(spec.series[0].points[1].name, "Lingaraj");
        assert_eq!(
            spec.series[0].points[0].hover[2],
            ("annual_visitors".to_string(), "1000".to_string())
        );
        assert_eq!(spec.bounds(), Some([85.83, 19.83, 86.09, 20.23]));
    }

    #[test]
    fn test_unknown_column_is_rejected() {
        let rows = vec![destination("Konark", "Temple", 19.88, 86.09)];
        let columns = GeoColumns { lat: "lat", ..COLUMNS };

        assert_eq!(
            geo_scatter(&rows, &columns),
            Err(ChartError::UnknownColumn {
                table: "cultural_destinations",
                column: "lat".into()
            })
        );
    }

    #[test]
    fn test_text_column_in_numeric_role() {
        let rows = vec![destination("Konark", "Temple", 19.88, 86.09)];
        let columns = GeoColumns { lat: "state", ..COLUMNS };
        assert!(matches!(geo_scatter(&rows, &columns), Err(ChartError::NotNumeric { row: 0, .. })));
    }

    #[test]
    fn test_hover_label_picks_nearest_point() {
        let rows = vec![
            destination("Konark", "Temple", 19.88, 86.09),
            destination("Lingaraj", "Temple", 20.23, 85.83),
        ];
        let spec = geo_scatter(&rows, &COLUMNS).unwrap();
        let label = hover_label(&spec.series, "Temple", &PlotPoint::new(85.8, 20.2));
        assert!(label.starts_with("Lingaraj\nstate: Odisha"));
    }
}
