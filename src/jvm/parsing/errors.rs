//! The error taxonomy for constructing and reading constant pools.

use std::io;

use itertools::Itertools;

use crate::jvm::constant_pool::Tag;

/// An error that occurs when working with a class file's constant pool.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed input detected while constructing the pool.
    #[error(transparent)]
    Format(#[from] FormatError),
    /// A semantically invalid reference detected by a typed accessor.
    #[error(transparent)]
    Reference(#[from] ReferenceTypeError),
}

/// A construction-time error: the byte stream does not encode a valid
/// constant pool. Always fatal; no partial pool is ever returned.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// Reading from the underlying stream failed, including truncation.
    #[error("Failed to read from stream: {0}")]
    ReadFail(#[from] io::Error),
    /// The decoded pool count is below the minimum of 1.
    #[error("Invalid constant pool size ({0})")]
    InvalidPoolSize(u16),
    /// A tag byte that no entry kind is encoded as.
    #[error("Invalid constant pool entry type {tag} at index {index}")]
    UnknownTag {
        /// The offending tag byte.
        tag: u8,
        /// The pool index at which it was read.
        index: u16,
    },
    /// A `Long` or `Double` entry whose second slot would fall outside the pool.
    #[error("Invalid long or double constant index {0}")]
    InvalidWideIndex(u16),
    /// A tag that requires a newer class-file version than the one being parsed.
    #[error("Class file version {major}.{minor} does not support constant tag {tag}")]
    UnsupportedTagVersion {
        /// The gated tag.
        tag: Tag,
        /// The class file's major version.
        major: u16,
        /// The class file's minor version.
        minor: u16,
    },
    /// A tag rejected by the owning parser's fallback policy.
    #[error("Unexpected constant pool tag {0}")]
    UnexpectedTag(Tag),
    /// A pre-resolution patch whose kind does not match the decoded entry.
    #[error("Patch at index {index} is incompatible with a {tag} entry")]
    IncompatiblePatch {
        /// The pool index of the patched slot.
        index: u16,
        /// The tag decoded at that slot.
        tag: Tag,
    },
    /// The class file is malformed in some other way.
    #[error("MalformedClassFile: {0}")]
    Malformed(&'static str),
}

/// An access-time error: a typed accessor was invoked against an entry of a
/// different kind. Raised lazily; the pool itself tolerates wrong-shaped
/// entries existing inertly.
#[derive(Debug, thiserror::Error)]
pub enum ReferenceTypeError {
    /// The entry's actual tag matches none of the expected tags.
    #[error(
        "Constant pool entry{} at {index} is a {actual}, expected {}",
        fmt_description(.description),
        fmt_expected(.expected)
    )]
    Mismatched {
        /// The accessed index.
        index: u16,
        /// The tag actually found there.
        actual: Tag,
        /// The tag(s) the accessor accepts.
        expected: &'static [Tag],
        /// The caller-supplied label, if any.
        description: Option<String>,
    },
    /// The index is past the end of the pool.
    #[error("Constant pool index {index}{} is out of range", fmt_description(.description))]
    OutOfRange {
        /// The accessed index.
        index: u16,
        /// The caller-supplied label, if any.
        description: Option<String>,
    },
}

impl ReferenceTypeError {
    pub(crate) fn mismatched(
        index: u16,
        actual: Tag,
        expected: &'static [Tag],
        description: Option<&str>,
    ) -> Self {
        Self::Mismatched {
            index,
            actual,
            expected,
            description: description.map(str::to_owned),
        }
    }

    pub(crate) fn out_of_range(index: u16, description: Option<&str>) -> Self {
        Self::OutOfRange {
            index,
            description: description.map(str::to_owned),
        }
    }

    /// The pool index the failed access referred to.
    #[must_use]
    pub fn index(&self) -> u16 {
        match self {
            Self::Mismatched { index, .. } | Self::OutOfRange { index, .. } => *index,
        }
    }
}

fn fmt_description(description: &Option<String>) -> String {
    description
        .as_deref()
        .map(|it| format!(" for {it}"))
        .unwrap_or_default()
}

fn fmt_expected(expected: &[Tag]) -> String {
    format!("[{}]", expected.iter().join(", "))
}
