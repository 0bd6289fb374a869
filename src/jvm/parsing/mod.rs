//! Module containing the APIs for decoding class-file elements.

pub mod constant_pool;
pub mod errors;
pub(crate) mod reader_utils;

pub use errors::{Error, FormatError, ReferenceTypeError};
