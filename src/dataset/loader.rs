//! CSV Loading
//!
//! Parses a launch CSV into the canonical table. Header spellings are
//! resolved through a [`SourceSchema`]; missing columns are synthesized as
//! null and cell values are coerced instead of rejected.

use std::io::Read;

use super::error::DatasetResult;
use super::schema::{coerce_number, coerce_text, CanonicalColumn, SourceSchema};
use super::types::{LaunchRecord, LaunchTable, Outcome};

impl LaunchTable {
    /// Parse a CSV stream with a header row
    pub fn from_csv_reader<R: Read>(reader: R, schema: &SourceSchema) -> DatasetResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        let columns = schema.resolve(headers.iter());

        for column in columns.missing() {
            tracing::warn!(
                schema = schema.name(),
                column = column.name(),
                "Column missing from source, filling with nulls"
            );
        }

        let site_idx = columns.index(CanonicalColumn::LaunchSite);
        let class_idx = columns.index(CanonicalColumn::Class);
        let mass_idx = columns.index(CanonicalColumn::PayloadMass);
        let orbit_idx = columns.index(CanonicalColumn::Orbit);

        let mut rows = Vec::new();
        let mut class_defaulted = 0usize;
        let mut mass_nulled = 0usize;

        for result in reader.records() {
            let record = result?;
            let cell = |idx: Option<usize>| idx.and_then(|i| record.get(i));

            let outcome = match Outcome::parse(cell(class_idx)) {
                Some(outcome) => outcome,
                None => {
                    class_defaulted += 1;
                    Outcome::Failure
                }
            };

            let raw_mass = cell(mass_idx);
            let payload_mass_kg = coerce_number(raw_mass);
            if payload_mass_kg.is_none() && raw_mass.is_some_and(|s| !s.trim().is_empty()) {
                mass_nulled += 1;
            }

            rows.push(LaunchRecord {
                launch_site: coerce_text(cell(site_idx)),
                outcome,
                payload_mass_kg,
                orbit: coerce_text(cell(orbit_idx)),
            });
        }

        if class_defaulted > 0 {
            tracing::debug!(count = class_defaulted, "Defaulted unreadable class values to 0");
        }
        if mass_nulled > 0 {
            tracing::debug!(count = mass_nulled, "Coerced non-numeric payload masses to null");
        }

        tracing::info!(
            schema = schema.name(),
            rows = rows.len(),
            "Parsed launch table"
        );

        Ok(LaunchTable::with_columns(rows, columns.present()))
    }

    /// Parse CSV text held in memory
    pub fn from_csv_str(text: &str, schema: &SourceSchema) -> DatasetResult<Self> {
        Self::from_csv_reader(text.as_bytes(), schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::schema::{IBM_LAB, LOCAL_CLEAN};

    #[test]
    fn test_local_schema_with_aliases() {
        let csv_data = "FlightNumber,LaunchSite,PayloadMass,Orbit,Class
1,CCAFS SLC 40,6104.96,LEO,0
2,VAFB SLC 4E,500,PO,1
3,KSC LC 39A,,GTO,1";

        let table = LaunchTable::from_csv_str(csv_data, &LOCAL_CLEAN).unwrap();

        assert_eq!(table.len(), 3);
        assert!(table.synthesized_columns().is_empty());
        assert_eq!(table.rows()[0].launch_site.as_deref(), Some("CCAFS SLC 40"));
        assert_eq!(table.rows()[0].payload_mass_kg, Some(6104.96));
        assert_eq!(table.rows()[1].outcome, Outcome::Success);
        assert_eq!(table.rows()[2].payload_mass_kg, None);
        assert!(table.has_orbit());
    }

    #[test]
    fn test_missing_orbit_is_synthesized() {
        let csv_data = ",Flight Number,Launch Site,class,Payload Mass (kg),Booster Version
0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003
1,2,CCAFS LC-40,0,0.0,F9 v1.0  B0004
2,3,CCAFS LC-40,1,525.0,F9 v1.0  B0005";

        let table = LaunchTable::from_csv_str(csv_data, &IBM_LAB).unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.synthesized_columns(), vec![CanonicalColumn::Orbit]);
        assert!(table.rows().iter().all(|r| r.orbit.is_none()));
        assert!(!table.has_orbit());
    }

    #[test]
    fn test_class_coerced_to_binary() {
        let csv_data = "Launch Site,class,Payload Mass (kg),Orbit
SiteA,1,100,LEO
SiteA,,200,LEO
SiteA,2,300,LEO
SiteA,abc,400,LEO
SiteA,1.0,500,LEO
SiteA,True,600,LEO
SiteA,0.0,700,LEO";

        let table = LaunchTable::from_csv_str(csv_data, &LOCAL_CLEAN).unwrap();
        let classes: Vec<u8> = table.iter().map(|r| r.outcome.class()).collect();

        assert_eq!(classes, vec![1, 0, 0, 0, 1, 1, 0]);
    }

    #[test]
    fn test_missing_class_column_defaults_to_failure() {
        let csv_data = "Launch Site,Payload Mass (kg)
SiteA,100
SiteB,200";

        let table = LaunchTable::from_csv_str(csv_data, &LOCAL_CLEAN).unwrap();

        assert!(table.iter().all(|r| r.outcome == Outcome::Failure));
        assert_eq!(
            table.synthesized_columns(),
            vec![CanonicalColumn::Class, CanonicalColumn::Orbit]
        );
    }

    #[test]
    fn test_non_numeric_payload_becomes_null() {
        let csv_data = "Launch Site,class,Payload Mass (kg)
SiteA,1,heavy
SiteA,0,1500";

        let table = LaunchTable::from_csv_str(csv_data, &IBM_LAB).unwrap();

        assert_eq!(table.rows()[0].payload_mass_kg, None);
        assert_eq!(table.rows()[1].payload_mass_kg, Some(1500.0));
    }

    #[test]
    fn test_ragged_rows_are_tolerated() {
        let csv_data = "Launch Site,class,Payload Mass (kg),Orbit
SiteA,1,500
SiteB";

        let table = LaunchTable::from_csv_str(csv_data, &LOCAL_CLEAN).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[0].orbit, None);
        assert_eq!(table.rows()[1].outcome, Outcome::Failure);
        assert_eq!(table.rows()[1].payload_mass_kg, None);
    }
}
