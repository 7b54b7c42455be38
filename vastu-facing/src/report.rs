//! Report building and CSV output.
//!
//! Pairs each [`MatchResult`] with its point's pass-through fields, in input
//! order. A batch in which no point matched any road is an error
//! ([`FacingError::EmptyResultSet`]): an empty report looks the same as a
//! broken pipeline, so the caller has to decide what it means.

use std::io::Write;

use log::info;

use crate::config::ReportConfig;
use crate::core::{PassThrough, PropertyPoint};
use crate::engine::MatchResult;
use crate::error::{FacingError, Result};
use crate::geometry::Orientation;

/// Placeholder for a column a record does not have.
pub const MISSING_FIELD: &str = "N/A";

/// One output row.
#[derive(Clone, Debug, PartialEq)]
pub struct ReportRecord {
    /// Id of the originating point
    pub point_id: String,
    /// Pass-through fields copied from the point
    pub fields: PassThrough,
    /// Facing direction
    pub orientation: Orientation,
}

/// Ordered report rows plus the column layout to write them with.
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    records: Vec<ReportRecord>,
    orientation_column: String,
    id_column: Option<String>,
}

impl Report {
    pub fn records(&self) -> &[ReportRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Column headers: optional id column, pass-through field names in
    /// first-seen order, then the orientation column.
    pub fn columns(&self) -> Vec<String> {
        let mut columns: Vec<String> = self.id_column.iter().cloned().collect();
        for record in &self.records {
            for name in record.fields.names() {
                if !columns.iter().any(|c| c == name) {
                    columns.push(name.to_string());
                }
            }
        }
        columns.push(self.orientation_column.clone());
        columns
    }

    /// Write the report as CSV (header row, then one row per record).
    ///
    /// Fields a record lacks are written as [`MISSING_FIELD`].
    pub fn write_csv<W: Write>(&self, writer: &mut W) -> Result<()> {
        let columns = self.columns();
        let field_columns = &columns[self.id_column.iter().count()..columns.len() - 1];

        write_row(writer, columns.iter().map(String::as_str))?;

        for record in &self.records {
            let id = self.id_column.as_ref().map(|_| record.point_id.as_str());
            let fields = field_columns
                .iter()
                .map(|name| record.fields.get(name).unwrap_or(MISSING_FIELD));
            let cells = id
                .into_iter()
                .chain(fields)
                .chain(std::iter::once(record.orientation.as_str()));
            write_row(writer, cells)?;
        }

        writer.flush()?;
        Ok(())
    }

    /// The CSV as a string.
    pub fn to_csv_string(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.write_csv(&mut buf)?;
        // Every cell written is valid UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

fn write_row<'a, W: Write>(writer: &mut W, cells: impl Iterator<Item = &'a str>) -> Result<()> {
    for (i, cell) in cells.enumerate() {
        if i > 0 {
            writer.write_all(b",")?;
        }
        write_cell(writer, cell)?;
    }
    writer.write_all(b"\n")?;
    Ok(())
}

/// RFC 4180 quoting: wrap in quotes if needed, double embedded quotes.
fn write_cell<W: Write>(writer: &mut W, cell: &str) -> Result<()> {
    if cell.contains([',', '"', '\n', '\r']) {
        write!(writer, "\"{}\"", cell.replace('"', "\"\""))?;
    } else {
        writer.write_all(cell.as_bytes())?;
    }
    Ok(())
}

/// Shapes engine output into a [`Report`].
#[derive(Clone, Debug, Default)]
pub struct ReportBuilder {
    config: ReportConfig,
}

impl ReportBuilder {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    /// Build a report from points and their match results.
    ///
    /// `results` must be the engine output for `points`, in the same order.
    ///
    /// # Errors
    /// - [`FacingError::InvalidConfig`] if the report headers are unusable
    /// - [`FacingError::Mismatch`] if the two slices are out of step
    /// - [`FacingError::EmptyResultSet`] if no point matched a road
    /// - [`FacingError::ColumnConflict`] if a point has a field named like
    ///   the id or orientation column
    pub fn build(&self, points: &[PropertyPoint], results: &[MatchResult]) -> Result<Report> {
        self.config.validate()?;

        if points.len() != results.len() {
            return Err(FacingError::Mismatch(format!(
                "{} point(s) but {} result(s)",
                points.len(),
                results.len()
            )));
        }

        if !results.iter().any(MatchResult::is_matched) {
            return Err(FacingError::EmptyResultSet {
                points: points.len(),
            });
        }

        let mut records = Vec::with_capacity(results.len());
        for (point, result) in points.iter().zip(results) {
            if point.id != result.point_id {
                return Err(FacingError::Mismatch(format!(
                    "point {} paired with result for {}",
                    point.id, result.point_id
                )));
            }
            if let Some(column) = self
                .config
                .reserved_columns()
                .find(|&column| point.fields.get(column).is_some())
            {
                return Err(FacingError::ColumnConflict {
                    point: point.id.clone(),
                    column: column.to_string(),
                });
            }
            if !result.is_matched() && !self.config.include_unmatched {
                continue;
            }
            records.push(ReportRecord {
                point_id: point.id.clone(),
                fields: point.fields.clone(),
                orientation: result.orientation,
            });
        }

        info!(
            "Report built: {} record(s) from {} point(s)",
            records.len(),
            points.len()
        );

        Ok(Report {
            records,
            orientation_column: self.config.orientation_column.clone(),
            id_column: self.config.id_column.clone(),
        })
    }
}
