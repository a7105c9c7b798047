//! Shared field-description types for the OA conversion engines.
//!
//! Business types describe themselves to the engines as an ordered list of
//! [`Field`] descriptors over a small dynamic value model ([`FieldValue`]),
//! via the [`ApplyRecord`] and [`GridRecord`] capability traits. The engines
//! in `oa-core` never see the caller's concrete types; they only walk
//! descriptors.
//!
//! Conversion semantics (tag grammar, handlers, assembly) live in `oa-core`.
//! Wire shapes live in `wecom`. This crate holds only the vocabulary both
//! share.

pub mod control;
pub mod record;
pub mod value;

pub use control::ControlKind;
pub use record::{apply_rows, ApplyRecord, GridRecord};
pub use value::{Field, FieldValue};
