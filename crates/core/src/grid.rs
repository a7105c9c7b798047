//! Spreadsheet grid converter.
//!
//! Turns a list of described records into [`wecom::sheet::GridData`]: an
//! optional header row followed by one data row per record, cells stringified
//! with the same numeric rules the approval handlers use (full 64-bit float
//! precision, shortest round-trip form).
//!
//! Header text is the field's tag when present, otherwise its declared name;
//! a tag of `-` excludes the field from the header and from every data row.
//! Unsupported cell shapes render a fixed placeholder instead of failing the
//! row.

use crate::error::{ConvertError, ConvertResult};
use oa_types::{Field, FieldValue, GridRecord};
use wecom::sheet::{CellData, CellValue, GridData, RowData, UpdateRangeRequest};

/// Rendered for cell shapes the sheet cannot represent as text.
pub const UNSUPPORTED_CELL: &str = "Unsupported type";

/// Tag value excluding a field from the sheet.
const EXCLUDE_TAG: &str = "-";

/// Where and how a grid is written into a sheet.
#[derive(Clone, Debug)]
pub struct GridOptions {
    pub sheet_id: String,
    pub include_headers: bool,
    pub start_row: u32,
    pub start_column: u32,
}

impl GridOptions {
    /// Options writing from the sheet origin, headers included.
    pub fn new(sheet_id: impl Into<String>) -> Self {
        Self {
            sheet_id: sheet_id.into(),
            include_headers: true,
            start_row: 0,
            start_column: 0,
        }
    }
}

/// Converts a list of records into a range-update request.
///
/// # Errors
///
/// [`ConvertError::InvalidShape`] if `rows` is not a list,
/// [`ConvertError::EmptyInput`] if it is empty, and
/// [`ConvertError::ElementType`] if an element is not a record.
pub fn update_range(rows: &FieldValue, options: &GridOptions) -> ConvertResult<UpdateRangeRequest> {
    let mut grid = grid_data(rows, options.include_headers)?;
    grid.start_row = options.start_row;
    grid.start_column = options.start_column;
    Ok(UpdateRangeRequest {
        sheet_id: options.sheet_id.clone(),
        grid_data: grid,
    })
}

/// Converts a list of records into grid rows anchored at the origin.
///
/// # Errors
///
/// Same taxonomy as [`update_range`].
pub fn grid_data(rows: &FieldValue, include_headers: bool) -> ConvertResult<GridData> {
    let FieldValue::List(items) = rows else {
        return Err(ConvertError::InvalidShape {
            expected: "a list of records",
        });
    };
    if items.is_empty() {
        return Err(ConvertError::EmptyInput);
    }

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match item {
            FieldValue::Record(fields) => records.push(fields.as_slice()),
            _ => return Err(ConvertError::ElementType { index }),
        }
    }

    let mut grid = GridData {
        start_row: 0,
        start_column: 0,
        rows: Vec::with_capacity(records.len() + usize::from(include_headers)),
    };

    if include_headers {
        grid.rows.push(RowData {
            values: records[0]
                .iter()
                .filter(|field| !excluded(field))
                .map(|field| cell(header_text(field)))
                .collect(),
        });
    }

    for fields in records {
        grid.rows.push(RowData {
            values: fields
                .iter()
                .filter(|field| !excluded(field))
                .map(|field| cell(cell_text(&field.value)))
                .collect(),
        });
    }

    tracing::debug!(rows = grid.rows.len(), "built grid data");
    Ok(grid)
}

/// Typed convenience over [`grid_data`] for slices of grid records.
///
/// # Errors
///
/// [`ConvertError::EmptyInput`] if `rows` is empty. The shape errors cannot
/// occur on this path.
pub fn grid_data_from_records<T: GridRecord>(
    rows: &[T],
    include_headers: bool,
) -> ConvertResult<GridData> {
    let value = FieldValue::List(
        rows.iter()
            .map(|row| FieldValue::Record(row.grid_fields()))
            .collect(),
    );
    grid_data(&value, include_headers)
}

fn excluded(field: &Field) -> bool {
    field.tag.as_deref() == Some(EXCLUDE_TAG)
}

fn header_text(field: &Field) -> String {
    match field.tag.as_deref() {
        Some(tag) if !tag.is_empty() => tag.to_owned(),
        _ => field.name.clone(),
    }
}

fn cell_text(value: &FieldValue) -> String {
    match value {
        FieldValue::Text(text) => text.clone(),
        FieldValue::Int(n) => n.to_string(),
        FieldValue::UInt(n) => n.to_string(),
        FieldValue::Float(f) => f.to_string(),
        FieldValue::Bool(b) => b.to_string(),
        _ => UNSUPPORTED_CELL.to_owned(),
    }
}

fn cell(text: String) -> CellData {
    CellData {
        cell_value: CellValue { text },
    }
}
