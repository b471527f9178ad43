//! Success/Failure Pie Chart

use serde::Serialize;

use super::figure::{Figure, Layout, PieMarker, PieTrace, Trace};
use super::filter::{filter_rows, SiteSelection};
use crate::dataset::{LaunchTable, Outcome};

/// Launch counts per outcome
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OutcomeCounts {
    pub success: u64,
    pub failure: u64,
}

impl OutcomeCounts {
    pub fn total(&self) -> u64 {
        self.success + self.failure
    }

    pub fn get(&self, outcome: Outcome) -> u64 {
        match outcome {
            Outcome::Success => self.success,
            Outcome::Failure => self.failure,
        }
    }

    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Success => self.success += 1,
            Outcome::Failure => self.failure += 1,
        }
    }
}

/// Count outcomes for the selected site (or all rows)
pub fn outcome_counts(table: &LaunchTable, site: &SiteSelection) -> OutcomeCounts {
    let mut counts = OutcomeCounts::default();
    for record in filter_rows(table, site, None) {
        counts.record(record.outcome);
    }
    counts
}

fn outcome_color(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Success => "#00CC96",
        Outcome::Failure => "#EF553B",
    }
}

/// Pie chart of Success vs Failure for the selected site.
///
/// Outcomes with no launches get no slice, so an empty selection yields a
/// pie with zero slices. Slices are ordered by count, largest first.
pub fn success_pie(table: &LaunchTable, site: &SiteSelection) -> Figure {
    let counts = outcome_counts(table, site);

    let title = match site {
        SiteSelection::All => "Overall Success vs Failure".to_string(),
        SiteSelection::Site(name) => format!("{}: Success vs Failure", name),
    };

    let mut slices: Vec<(Outcome, u64)> = [Outcome::Success, Outcome::Failure]
        .into_iter()
        .map(|o| (o, counts.get(o)))
        .filter(|(_, n)| *n > 0)
        .collect();
    // Stable sort keeps Success ahead of Failure on ties
    slices.sort_by(|a, b| b.1.cmp(&a.1));

    tracing::debug!(
        site = %site,
        success = counts.success,
        failure = counts.failure,
        "Built success pie"
    );

    let trace = PieTrace {
        labels: slices.iter().map(|(o, _)| o.label().to_string()).collect(),
        values: slices.iter().map(|(_, n)| *n).collect(),
        marker: PieMarker {
            colors: slices.iter().map(|(o, _)| outcome_color(*o).to_string()).collect(),
        },
    };

    Figure::new(Layout::titled(title)).trace(Trace::Pie(trace))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::LaunchRecord;

    fn sample() -> LaunchTable {
        LaunchTable::from_records(vec![
            LaunchRecord::new("SiteA", Outcome::Success).payload(500.0),
            LaunchRecord::new("SiteA", Outcome::Failure).payload(1500.0),
            LaunchRecord::new("SiteB", Outcome::Success).payload(3000.0),
        ])
    }

    fn slices(fig: &Figure) -> Vec<(String, u64)> {
        match &fig.data[0] {
            Trace::Pie(pie) => pie
                .labels
                .iter()
                .cloned()
                .zip(pie.values.iter().copied())
                .collect(),
            other => panic!("expected pie trace, got {other:?}"),
        }
    }

    #[test]
    fn test_all_sites() {
        let table = sample();
        let fig = success_pie(&table, &SiteSelection::All);

        assert_eq!(fig.layout.title.text, "Overall Success vs Failure");
        assert_eq!(
            slices(&fig),
            vec![("Success".to_string(), 2), ("Failure".to_string(), 1)]
        );
        let total: u64 = slices(&fig).iter().map(|(_, n)| n).sum();
        assert_eq!(total as usize, table.len());
    }

    #[test]
    fn test_single_site() {
        let fig = success_pie(&sample(), &SiteSelection::from("SiteA"));

        assert_eq!(fig.layout.title.text, "SiteA: Success vs Failure");
        assert_eq!(
            slices(&fig),
            vec![("Success".to_string(), 1), ("Failure".to_string(), 1)]
        );
    }

    #[test]
    fn test_only_failures() {
        let table = LaunchTable::from_records(vec![
            LaunchRecord::new("SiteC", Outcome::Failure),
            LaunchRecord::new("SiteC", Outcome::Failure),
        ]);
        let fig = success_pie(&table, &SiteSelection::from("SiteC"));

        assert_eq!(slices(&fig), vec![("Failure".to_string(), 2)]);
    }

    #[test]
    fn test_unknown_site_yields_empty_pie() {
        let fig = success_pie(&sample(), &SiteSelection::from("Nowhere"));

        assert_eq!(fig.data.len(), 1);
        assert!(fig.data[0].is_empty());
        assert_eq!(fig.point_count(), 0);
    }

    #[test]
    fn test_outcome_counts_per_site() {
        let table = sample();

        for site in table.sites() {
            let selection = SiteSelection::from(site.as_str());
            let expected = table.rows_for(&site).count() as u64;
            assert_eq!(outcome_counts(&table, &selection).total(), expected);
        }
    }
}
