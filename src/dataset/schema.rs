//! Canonical Schema and Source Adapters
//!
//! The canonical launch table has four columns. Each data source is described
//! by a [`SourceSchema`]: the alternate header spellings it may use for each
//! canonical column. Header resolution is the same for every source; only the
//! alias list differs.

use serde::Serialize;
use std::fmt;

/// A column of the canonical launch table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum CanonicalColumn {
    LaunchSite,
    Class,
    PayloadMass,
    Orbit,
}

impl CanonicalColumn {
    /// All canonical columns, in table order
    pub const ALL: [CanonicalColumn; 4] = [
        CanonicalColumn::LaunchSite,
        CanonicalColumn::Class,
        CanonicalColumn::PayloadMass,
        CanonicalColumn::Orbit,
    ];

    /// Canonical header name
    pub fn name(self) -> &'static str {
        match self {
            CanonicalColumn::LaunchSite => "Launch Site",
            CanonicalColumn::Class => "class",
            CanonicalColumn::PayloadMass => "Payload Mass (kg)",
            CanonicalColumn::Orbit => "Orbit",
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for CanonicalColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Header spellings accepted by one data source
#[derive(Debug, Clone, Copy)]
pub struct SourceSchema {
    name: &'static str,
    aliases: &'static [(CanonicalColumn, &'static str)],
}

/// Cleaned local export (richer columns, CamelCase spellings)
pub const LOCAL_CLEAN: SourceSchema = SourceSchema {
    name: "local-clean",
    aliases: &[
        (CanonicalColumn::LaunchSite, "LaunchSite"),
        (CanonicalColumn::PayloadMass, "PayloadMass"),
        (CanonicalColumn::Class, "Class"),
    ],
};

/// IBM lab dataset served over HTTP
pub const IBM_LAB: SourceSchema = SourceSchema {
    name: "ibm-lab",
    aliases: &[(CanonicalColumn::PayloadMass, "PayloadMass")],
};

impl SourceSchema {
    /// Schema identifier used in logs
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Alternate spellings for a canonical column
    pub fn aliases_for(&self, column: CanonicalColumn) -> impl Iterator<Item = &'static str> + '_ {
        self.aliases
            .iter()
            .filter(move |(col, _)| *col == column)
            .map(|(_, alias)| *alias)
    }

    /// Resolve header positions for every canonical column.
    ///
    /// A header with the canonical name always wins over an alias, so an
    /// alias never overwrites an existing canonical column.
    pub fn resolve<'h, I>(&self, headers: I) -> ColumnMap
    where
        I: IntoIterator<Item = &'h str>,
    {
        let headers: Vec<&str> = headers.into_iter().map(str::trim).collect();
        let mut map = ColumnMap::default();

        for column in CanonicalColumn::ALL {
            let position = |wanted: &str| headers.iter().position(|h| *h == wanted);

            if let Some(idx) = position(column.name()) {
                map.set(column, idx, ColumnOrigin::Canonical);
                continue;
            }

            for alias in self.aliases_for(column) {
                if let Some(idx) = position(alias) {
                    tracing::debug!(
                        schema = self.name,
                        alias,
                        column = column.name(),
                        "Renaming aliased column"
                    );
                    map.set(column, idx, ColumnOrigin::Alias(alias));
                    break;
                }
            }
        }

        map
    }
}

/// How a canonical column was found in the source headers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnOrigin {
    Canonical,
    Alias(&'static str),
}

/// Resolved positions of canonical columns within a source record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap {
    slots: [Option<(usize, ColumnOrigin)>; 4],
}

impl ColumnMap {
    fn set(&mut self, column: CanonicalColumn, idx: usize, origin: ColumnOrigin) {
        self.slots[column.slot()] = Some((idx, origin));
    }

    /// Record position of a canonical column, if the source has it
    pub fn index(&self, column: CanonicalColumn) -> Option<usize> {
        self.slots[column.slot()].map(|(idx, _)| idx)
    }

    /// Whether the column came from a canonical header or an alias
    pub fn origin(&self, column: CanonicalColumn) -> Option<ColumnOrigin> {
        self.slots[column.slot()].map(|(_, origin)| origin)
    }

    /// Canonical columns found in the source
    pub fn present(&self) -> Vec<CanonicalColumn> {
        CanonicalColumn::ALL
            .into_iter()
            .filter(|c| self.index(*c).is_some())
            .collect()
    }

    /// Canonical columns that must be synthesized as null
    pub fn missing(&self) -> Vec<CanonicalColumn> {
        CanonicalColumn::ALL
            .into_iter()
            .filter(|c| self.index(*c).is_none())
            .collect()
    }
}

// ============================================
// CELL COERCION
// ============================================

/// Cell spellings read as null (the usual spreadsheet/pandas markers)
const NULL_MARKERS: &[&str] = &[
    "", "NA", "N/A", "n/a", "#N/A", "NaN", "nan", "-nan", "NULL", "null", "None", "<NA>",
];

fn is_null_marker(cell: &str) -> bool {
    NULL_MARKERS.contains(&cell)
}

/// Text cell: trimmed, null markers become `None`
pub fn coerce_text(cell: Option<&str>) -> Option<String> {
    let cell = cell?.trim();
    if is_null_marker(cell) {
        None
    } else {
        Some(cell.to_string())
    }
}

/// Numeric cell: anything that is not a finite number becomes `None`
pub fn coerce_number(cell: Option<&str>) -> Option<f64> {
    let cell = cell?.trim();
    if is_null_marker(cell) {
        return None;
    }
    cell.parse::<f64>().ok().filter(|v| v.is_finite())
}
