//! Launch Table Types
//!
//! The canonical, in-memory launch table and its rows.

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;

use super::schema::{coerce_number, CanonicalColumn};

/// Binary launch result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Numeric class value (1 = success, 0 = failure)
    pub fn class(self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Failure => "Failure",
            Outcome::Success => "Success",
        }
    }

    /// Parse a class cell that holds a recognizable outcome: a number equal
    /// to 0 or 1, or a `true`/`false` spelling (any case).
    pub fn parse(cell: Option<&str>) -> Option<Outcome> {
        let trimmed = cell?.trim();
        if trimmed.eq_ignore_ascii_case("true") {
            return Some(Outcome::Success);
        }
        if trimmed.eq_ignore_ascii_case("false") {
            return Some(Outcome::Failure);
        }
        match coerce_number(Some(trimmed)) {
            Some(v) if v == 1.0 => Some(Outcome::Success),
            Some(v) if v == 0.0 => Some(Outcome::Failure),
            _ => None,
        }
    }

    /// Coerce a raw class cell.
    ///
    /// Cells [`Outcome::parse`] cannot read (missing, non-numeric,
    /// out-of-range) are failures.
    pub fn coerce(cell: Option<&str>) -> Outcome {
        Self::parse(cell).unwrap_or(Outcome::Failure)
    }
}

impl From<bool> for Outcome {
    fn from(success: bool) -> Self {
        if success {
            Outcome::Success
        } else {
            Outcome::Failure
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// Serialized as the 0/1 class column
impl Serialize for Outcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.class())
    }
}

/// One launch, in canonical form
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaunchRecord {
    #[serde(rename = "Launch Site")]
    pub launch_site: Option<String>,
    #[serde(rename = "class")]
    pub outcome: Outcome,
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: Option<f64>,
    #[serde(rename = "Orbit")]
    pub orbit: Option<String>,
}

impl LaunchRecord {
    /// Create a record for a site with a known outcome
    pub fn new(site: impl Into<String>, outcome: Outcome) -> Self {
        Self {
            launch_site: Some(site.into()),
            outcome,
            payload_mass_kg: None,
            orbit: None,
        }
    }

    /// Set the payload mass
    pub fn payload(mut self, kg: f64) -> Self {
        self.payload_mass_kg = Some(kg);
        self
    }

    /// Set the orbit
    pub fn orbit(mut self, orbit: impl Into<String>) -> Self {
        self.orbit = Some(orbit.into());
        self
    }
}

/// The canonical launch table.
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct LaunchTable {
    rows: Vec<LaunchRecord>,
    present: BTreeSet<CanonicalColumn>,
    source: String,
    loaded_at: DateTime<Utc>,
}

impl LaunchTable {
    /// Build a table from records, treating every canonical column as present
    pub fn from_records(rows: Vec<LaunchRecord>) -> Self {
        Self::with_columns(rows, CanonicalColumn::ALL)
    }

    /// Build a table from records with an explicit set of source columns.
    /// Columns not listed were synthesized as null.
    pub fn with_columns(
        rows: Vec<LaunchRecord>,
        present: impl IntoIterator<Item = CanonicalColumn>,
    ) -> Self {
        Self {
            rows,
            present: present.into_iter().collect(),
            source: "memory".to_string(),
            loaded_at: Utc::now(),
        }
    }

    /// Label the table with the source it was loaded from
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn rows(&self) -> &[LaunchRecord] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &LaunchRecord> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Whether the column existed in the source (directly or via an alias)
    pub fn has_column(&self, column: CanonicalColumn) -> bool {
        self.present.contains(&column)
    }

    /// Columns that were synthesized as null
    pub fn synthesized_columns(&self) -> Vec<CanonicalColumn> {
        CanonicalColumn::ALL
            .into_iter()
            .filter(|c| !self.present.contains(c))
            .collect()
    }

    /// Whether orbit data is usable: the column came from the source and
    /// holds at least one value.
    pub fn has_orbit(&self) -> bool {
        self.has_column(CanonicalColumn::Orbit) && self.rows.iter().any(|r| r.orbit.is_some())
    }

    /// Sorted unique non-null launch sites
    pub fn sites(&self) -> Vec<String> {
        self.rows
            .iter()
            .filter_map(|r| r.launch_site.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Rows launched from `site`
    pub fn rows_for<'a>(&'a self, site: &'a str) -> impl Iterator<Item = &'a LaunchRecord> + 'a {
        self.rows
            .iter()
            .filter(move |r| r.launch_site.as_deref() == Some(site))
    }

    /// Observed (min, max) payload mass, if any row has one
    pub fn payload_bounds(&self) -> Option<(f64, f64)> {
        self.rows
            .iter()
            .filter_map(|r| r.payload_mass_kg)
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LaunchTable {
        LaunchTable::from_records(vec![
            LaunchRecord::new("SiteB", Outcome::Success).payload(3000.0).orbit("GTO"),
            LaunchRecord::new("SiteA", Outcome::Success).payload(500.0).orbit("LEO"),
            LaunchRecord::new("SiteA", Outcome::Failure).payload(1500.0),
        ])
    }

    #[test]
    fn test_outcome_coerce() {
        assert_eq!(Outcome::coerce(Some("1")), Outcome::Success);
        assert_eq!(Outcome::coerce(Some("1.0")), Outcome::Success);
        assert_eq!(Outcome::coerce(Some("0")), Outcome::Failure);
        assert_eq!(Outcome::coerce(Some("2")), Outcome::Failure);
        assert_eq!(Outcome::coerce(Some("-1")), Outcome::Failure);
        assert_eq!(Outcome::coerce(Some("yes")), Outcome::Failure);
        assert_eq!(Outcome::coerce(Some("")), Outcome::Failure);
        assert_eq!(Outcome::coerce(None), Outcome::Failure);
    }

    #[test]
    fn test_outcome_boolean_spellings() {
        assert_eq!(Outcome::coerce(Some("True")), Outcome::Success);
        assert_eq!(Outcome::coerce(Some("TRUE")), Outcome::Success);
        assert_eq!(Outcome::coerce(Some(" false ")), Outcome::Failure);
    }

    #[test]
    fn test_outcome_parse_distinguishes_defaults() {
        assert_eq!(Outcome::parse(Some("0.0")), Some(Outcome::Failure));
        assert_eq!(Outcome::parse(Some(" 0")), Some(Outcome::Failure));
        assert_eq!(Outcome::parse(Some("1.0")), Some(Outcome::Success));
        assert_eq!(Outcome::parse(Some("2")), None);
        assert_eq!(Outcome::parse(Some("")), None);
        assert_eq!(Outcome::parse(None), None);
    }

    #[test]
    fn test_sites_sorted_unique() {
        let mut table_rows = sample().rows().to_vec();
        table_rows.push(LaunchRecord {
            launch_site: None,
            outcome: Outcome::Failure,
            payload_mass_kg: None,
            orbit: None,
        });
        let table = LaunchTable::from_records(table_rows);

        assert_eq!(table.sites(), vec!["SiteA".to_string(), "SiteB".to_string()]);
    }

    #[test]
    fn test_rows_for() {
        let table = sample();

        assert_eq!(table.rows_for("SiteA").count(), 2);
        assert_eq!(table.rows_for("SiteB").count(), 1);
        assert_eq!(table.rows_for("Nowhere").count(), 0);
    }

    #[test]
    fn test_payload_bounds() {
        assert_eq!(sample().payload_bounds(), Some((500.0, 3000.0)));

        let empty = LaunchTable::from_records(vec![LaunchRecord::new("SiteA", Outcome::Success)]);
        assert_eq!(empty.payload_bounds(), None);
    }

    #[test]
    fn test_has_orbit() {
        assert!(sample().has_orbit());

        let synthesized = LaunchTable::with_columns(
            sample().rows().to_vec(),
            [CanonicalColumn::LaunchSite, CanonicalColumn::Class, CanonicalColumn::PayloadMass],
        );
        assert!(!synthesized.has_orbit());
        assert_eq!(synthesized.synthesized_columns(), vec![CanonicalColumn::Orbit]);

        let all_null = LaunchTable::from_records(vec![LaunchRecord::new("SiteA", Outcome::Failure)]);
        assert!(!all_null.has_orbit());
    }

    #[test]
    fn test_record_serializes_canonical_names() {
        let record = LaunchRecord::new("SiteA", Outcome::Success).payload(500.0);
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["Launch Site"], "SiteA");
        assert_eq!(json["class"], 1);
        assert_eq!(json["Payload Mass (kg)"], 500.0);
        assert!(json["Orbit"].is_null());
    }
}
