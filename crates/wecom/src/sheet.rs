//! Spreadsheet range-update wire model.
//!
//! JSON shapes for writing a rectangular block of cells into a sheet via the
//! document batch-update API. The grid converter in `oa-core` produces
//! [`GridData`]; the surrounding request/transport plumbing is out of scope
//! here.

use serde::{Deserialize, Serialize};

/// A request to update one range of cells in one sheet.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct UpdateRangeRequest {
    pub sheet_id: String,
    pub grid_data: GridData,
}

/// A rectangular block of cell data anchored at a start position.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GridData {
    pub start_row: u32,
    pub start_column: u32,
    pub rows: Vec<RowData>,
}

/// One row of cells.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RowData {
    pub values: Vec<CellData>,
}

/// One cell.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CellData {
    pub cell_value: CellValue,
}

/// A cell's value. The API models richer cell content (links, formats); only
/// text is produced here.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CellValue {
    pub text: String,
}
