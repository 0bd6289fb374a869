pub mod constant_pool;
pub mod parsing;
pub mod runtime;
pub mod symbols;

pub use parsing::errors::Error;

/// A [`Result`] type for operations on a class file.
pub type ClassFileResult<T> = Result<T, Error>;
