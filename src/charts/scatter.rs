//! Payload vs. Outcome Scatter Chart

use serde::Serialize;

use super::figure::{series_color, Axis, Figure, Layout, Legend, ScatterMarker, ScatterTrace, Title, Trace};
use super::filter::{filter_rows, PayloadRange, SiteSelection};
use crate::dataset::{LaunchRecord, LaunchTable, Outcome};

/// Group label for rows without an orbit
pub const UNKNOWN_ORBIT: &str = "Unknown";

const SCATTER_TITLE: &str = "Payload vs. Outcome (1=Success, 0=Failure)";

/// What the point colors encode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorBy {
    Orbit,
    Outcome,
}

impl ColorBy {
    /// Orbit when the table has orbit data, otherwise outcome
    pub fn for_table(table: &LaunchTable) -> Self {
        if table.has_orbit() {
            ColorBy::Orbit
        } else {
            ColorBy::Outcome
        }
    }

    fn legend_title(self) -> &'static str {
        match self {
            ColorBy::Orbit => "Orbit",
            ColorBy::Outcome => "class",
        }
    }

    fn group_of(self, record: &LaunchRecord) -> String {
        match self {
            ColorBy::Orbit => record
                .orbit
                .clone()
                .unwrap_or_else(|| UNKNOWN_ORBIT.to_string()),
            ColorBy::Outcome => record.outcome.label().to_string(),
        }
    }
}

fn scatter_layout(color_by: ColorBy) -> Layout {
    Layout {
        xaxis: Some(Axis::titled("Payload Mass (kg)")),
        yaxis: Some(
            Axis::titled("class").categorical(&[
                (f64::from(Outcome::Failure.class()), Outcome::Failure.label()),
                (f64::from(Outcome::Success.class()), Outcome::Success.label()),
            ]),
        ),
        legend: Some(Legend {
            title: Title::new(color_by.legend_title()),
        }),
        ..Layout::titled(SCATTER_TITLE)
    }
}

/// Scatter of payload mass against outcome for the selected site and range.
///
/// One trace per color group, in order of first appearance. Only rows with a
/// payload inside `payload` (inclusive) are plotted; an empty selection
/// yields a figure with no traces.
pub fn payload_scatter(table: &LaunchTable, site: &SiteSelection, payload: &PayloadRange) -> Figure {
    let color_by = ColorBy::for_table(table);
    let rows = filter_rows(table, site, Some(payload));

    let mut groups: Vec<(String, Vec<&LaunchRecord>)> = Vec::new();
    for &record in &rows {
        let key = color_by.group_of(record);
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, members)) => members.push(record),
            None => groups.push((key, vec![record])),
        }
    }

    tracing::debug!(
        site = %site,
        lo = payload.lo(),
        hi = payload.hi(),
        points = rows.len(),
        groups = groups.len(),
        "Built payload scatter"
    );

    groups
        .into_iter()
        .enumerate()
        .fold(Figure::new(scatter_layout(color_by)), |fig, (idx, (name, members))| {
            fig.trace(Trace::Scatter(ScatterTrace {
                name,
                mode: "markers".to_string(),
                x: members.iter().filter_map(|r| r.payload_mass_kg).collect(),
                y: members.iter().map(|r| r.outcome.class()).collect(),
                customdata: members
                    .iter()
                    .map(|r| r.launch_site.clone().unwrap_or_default())
                    .collect(),
                hovertemplate: "Launch Site=%{customdata}<br>Payload Mass (kg)=%{x}<br>class=%{y}<extra></extra>"
                    .to_string(),
                marker: ScatterMarker {
                    color: series_color(idx).to_string(),
                },
            }))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::CanonicalColumn;

    fn sample() -> LaunchTable {
        LaunchTable::from_records(vec![
            LaunchRecord::new("SiteA", Outcome::Success).payload(500.0).orbit("LEO"),
            LaunchRecord::new("SiteA", Outcome::Failure).payload(1500.0).orbit("GTO"),
            LaunchRecord::new("SiteB", Outcome::Success).payload(3000.0).orbit("LEO"),
        ])
    }

    fn points(fig: &Figure) -> Vec<(f64, u8, String)> {
        fig.data
            .iter()
            .flat_map(|t| match t {
                Trace::Scatter(s) => s
                    .x
                    .iter()
                    .zip(&s.y)
                    .zip(&s.customdata)
                    .map(|((x, y), site)| (*x, *y, site.clone()))
                    .collect::<Vec<_>>(),
                other => panic!("expected scatter trace, got {other:?}"),
            })
            .collect()
    }

    fn range(lo: f64, hi: f64) -> PayloadRange {
        PayloadRange::new(lo, hi).unwrap()
    }

    #[test]
    fn test_all_sites_full_range() {
        let fig = payload_scatter(&sample(), &SiteSelection::All, &range(0.0, 5000.0));

        assert_eq!(fig.point_count(), 3);
        assert_eq!(fig.layout.title.text, SCATTER_TITLE);
    }

    #[test]
    fn test_single_site() {
        let fig = payload_scatter(&sample(), &SiteSelection::from("SiteA"), &range(0.0, 5000.0));

        assert_eq!(fig.point_count(), 2);
        assert!(points(&fig).iter().all(|(_, _, site)| site == "SiteA"));
    }

    #[test]
    fn test_narrow_range() {
        let fig = payload_scatter(&sample(), &SiteSelection::All, &range(1000.0, 2000.0));

        assert_eq!(points(&fig), vec![(1500.0, 0, "SiteA".to_string())]);
    }

    #[test]
    fn test_range_bounds_inclusive() {
        let fig = payload_scatter(&sample(), &SiteSelection::All, &range(500.0, 1500.0));
        assert_eq!(fig.point_count(), 2);
    }

    #[test]
    fn test_points_within_range_and_none_omitted() {
        let table = sample();
        let ranges = [(0.0, 0.0), (0.0, 500.0), (500.0, 3000.0), (1200.0, 2999.0), (3000.0, 9000.0)];

        for (lo, hi) in ranges {
            for site in [SiteSelection::All, SiteSelection::from("SiteA"), SiteSelection::from("SiteB")] {
                let fig = payload_scatter(&table, &site, &range(lo, hi));
                let plotted = points(&fig);

                assert!(plotted.iter().all(|(x, _, _)| *x >= lo && *x <= hi));

                let expected = table
                    .iter()
                    .filter(|r| site.matches(r))
                    .filter(|r| r.payload_mass_kg.is_some_and(|m| m >= lo && m <= hi))
                    .count();
                assert_eq!(plotted.len(), expected, "site={site} range=[{lo}, {hi}]");
            }
        }
    }

    #[test]
    fn test_colored_by_orbit() {
        let fig = payload_scatter(&sample(), &SiteSelection::All, &range(0.0, 5000.0));
        let names: Vec<&str> = fig
            .data
            .iter()
            .map(|t| match t {
                Trace::Scatter(s) => s.name.as_str(),
                _ => unreachable!(),
            })
            .collect();

        assert_eq!(names, vec!["LEO", "GTO"]);
        assert_eq!(fig.layout.legend.as_ref().unwrap().title.text, "Orbit");
    }

    #[test]
    fn test_null_orbit_grouped_as_unknown() {
        let table = LaunchTable::from_records(vec![
            LaunchRecord::new("SiteA", Outcome::Success).payload(500.0).orbit("LEO"),
            LaunchRecord::new("SiteA", Outcome::Failure).payload(700.0),
        ]);
        let fig = payload_scatter(&table, &SiteSelection::All, &range(0.0, 1000.0));

        assert_eq!(fig.point_count(), 2);
        assert!(fig.data.iter().any(|t| matches!(t, Trace::Scatter(s) if s.name == UNKNOWN_ORBIT)));
    }

    #[test]
    fn test_missing_orbit_colors_by_outcome() {
        let table = LaunchTable::with_columns(
            vec![
                LaunchRecord::new("SiteA", Outcome::Success).payload(500.0),
                LaunchRecord::new("SiteA", Outcome::Failure).payload(1500.0),
            ],
            [CanonicalColumn::LaunchSite, CanonicalColumn::Class, CanonicalColumn::PayloadMass],
        );

        assert_eq!(ColorBy::for_table(&table), ColorBy::Outcome);

        let fig = payload_scatter(&table, &SiteSelection::All, &range(0.0, 5000.0));
        assert_eq!(fig.data.len(), 2);
        assert_eq!(fig.layout.legend.as_ref().unwrap().title.text, "class");
    }

    #[test]
    fn test_empty_selection_is_valid() {
        let fig = payload_scatter(&sample(), &SiteSelection::All, &range(9000.0, 9500.0));

        assert!(fig.data.is_empty());
        let yaxis = fig.layout.yaxis.as_ref().unwrap();
        assert_eq!(
            yaxis.ticktext,
            Some(vec!["Failure".to_string(), "Success".to_string()])
        );
    }
}
