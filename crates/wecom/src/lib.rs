//! WeCom OA wire/boundary support.
//!
//! This crate defines the JSON wire shapes the conversion engines produce:
//! the OA approval-apply event ([`apply`]) and the spreadsheet batch-update
//! grid ([`sheet`]). Conversion semantics live in `oa-core`; this crate
//! handles wire formats and API alignment only.
//!
//! Field names follow the OA API exactly (including its spellings, e.g.
//! `notifyer`), since these payloads are compared byte-for-byte downstream.

pub mod apply;
pub mod sheet;

use thiserror::Error;

/// Errors returned by the `wecom` boundary crate.
#[derive(Debug, Error)]
pub enum WecomError {
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Read an OA apply event from JSON.
pub fn read_apply_event_json(json: &str) -> Result<apply::ApplyEvent, WecomError> {
    Ok(serde_json::from_str(json)?)
}

/// Write an OA apply event to JSON.
pub fn write_apply_event_json(event: &apply::ApplyEvent) -> Result<String, WecomError> {
    Ok(serde_json::to_string(event)?)
}

/// Write a spreadsheet range-update request to JSON.
pub fn write_update_range_json(request: &sheet::UpdateRangeRequest) -> Result<String, WecomError> {
    Ok(serde_json::to_string(request)?)
}
