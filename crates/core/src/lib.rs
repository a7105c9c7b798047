//! # OA Core
//!
//! Conversion engines turning described business records into OA wire
//! payloads:
//!
//! - [`convert`] — the approval-event converter: walks a record's tagged
//!   fields, dispatches each control kind to a handler, and assembles a
//!   [`wecom::apply::ApplyEvent`].
//! - [`grid`] — the spreadsheet converter: turns a list of records into
//!   [`wecom::sheet::GridData`] rows.
//! - [`tag`] — the tag mini-language (`key[=value](;key[=value])*`) parser.
//!
//! Both engines are pure, synchronous, in-memory transformations. A built
//! [`Converter`] is immutable: configure it through [`ConverterBuilder`],
//! then share it freely across threads.
//!
//! **No transport concerns**: token handling, HTTP submission, and document
//! CRUD calls belong to the API layer that consumes these payloads.

pub mod convert;
pub mod error;
pub mod grid;
pub mod tag;

pub use convert::{Converter, ConverterBuilder, UnknownControlPolicy};
pub use error::{ConvertError, ConvertResult};
pub use grid::GridOptions;
