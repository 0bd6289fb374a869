//! Interned symbols for text entries in the constant pool.

use std::{
    borrow::Cow,
    fmt::{self, Display},
    hash::{Hash, Hasher},
    ops::Deref,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};

use dashmap::DashMap;
use itertools::Itertools;

/// The payload of a `CONSTANT_Utf8_info` entry.
///
/// Class files encode text as modified UTF-8 (CESU-8 with an embedded NUL
/// encoding). A conforming class file may carry byte sequences that do not
/// decode to a Rust [`String`]; those are kept as raw bytes instead of being
/// rejected or lossily converted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum JavaString {
    /// The payload decodes to valid UTF-8.
    ValidUtf8(String),
    /// The payload does not decode; the raw modified UTF-8 bytes are kept.
    InvalidUtf8(Vec<u8>),
}

impl JavaString {
    /// Decodes a modified UTF-8 byte sequence.
    #[must_use]
    pub fn from_modified_utf8(bytes: Vec<u8>) -> Self {
        match cesu8::from_java_cesu8(&bytes) {
            Ok(result) => Self::ValidUtf8(result.into_owned()),
            Err(_) => Self::InvalidUtf8(bytes),
        }
    }

    /// Encodes this string back into modified UTF-8.
    #[must_use]
    pub fn to_modified_utf8(&self) -> Cow<'_, [u8]> {
        match self {
            Self::ValidUtf8(value) => cesu8::to_java_cesu8(value),
            Self::InvalidUtf8(bytes) => Cow::Borrowed(bytes),
        }
    }

    /// Returns the decoded text, or [`None`] if the payload is not valid UTF-8.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::ValidUtf8(value) => Some(value),
            Self::InvalidUtf8(_) => None,
        }
    }
}

impl From<&str> for JavaString {
    fn from(value: &str) -> Self {
        Self::ValidUtf8(value.to_owned())
    }
}

impl Display for JavaString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValidUtf8(value) => f.pad(value),
            Self::InvalidUtf8(bytes) => {
                let dump = bytes.iter().map(|it| format!("0x{it:02X}")).join(" ");
                write!(f, "{dump} // Invalid UTF-8")
            }
        }
    }
}

/// An interned, identity-comparable handle to decoded text.
///
/// Two symbols produced by the same [`SymbolTable`] compare equal if and only
/// if they were interned from equal byte sequences; the comparison itself is
/// a pointer check.
#[derive(Debug, Clone)]
pub struct Symbol(Arc<JavaString>);

impl Symbol {
    fn new(value: JavaString) -> Self {
        Self(Arc::new(value))
    }

    /// Whether two handles refer to the same interned payload.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(Arc::as_ptr(&self.0), state);
    }
}

impl Deref for Symbol {
    type Target = JavaString;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A deduplication table mapping modified UTF-8 payloads to [`Symbol`]s.
///
/// The table may be shared across many concurrently parsed pools. Lookups are
/// lock-striped; interning one key does not block interning of unrelated
/// keys. The Utf8-entry counter is best-effort and not linearizable with
/// parsing.
#[derive(Debug, Default)]
pub struct SymbolTable {
    symbols: DashMap<Box<[u8]>, Symbol>,
    utf8_entries: AtomicU64,
}

impl SymbolTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the symbol for the given modified UTF-8 bytes, interning them
    /// if no equal payload has been seen before.
    ///
    /// When an identical symbol already exists, no copy of the payload is
    /// made; the existing handle is returned.
    pub fn get_or_intern(&self, bytes: &[u8]) -> Symbol {
        if let Some(existing) = self.symbols.get(bytes) {
            return existing.value().clone();
        }
        self.symbols
            .entry(Box::from(bytes))
            .or_insert_with(|| Symbol::new(JavaString::from_modified_utf8(bytes.to_vec())))
            .value()
            .clone()
    }

    /// Interns an already-decoded string.
    pub fn intern_java_string(&self, value: &JavaString) -> Symbol {
        self.get_or_intern(&value.to_modified_utf8())
    }

    /// The number of distinct symbols in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the table contains no symbols.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub(crate) fn record_utf8_entry(&self) {
        self.utf8_entries.fetch_add(1, Ordering::Relaxed);
    }

    /// The number of `CONSTANT_Utf8` entries decoded through this table.
    ///
    /// Counts every decoded entry, including duplicates that resolved to an
    /// existing symbol.
    #[must_use]
    pub fn utf8_entry_count(&self) -> u64 {
        self.utf8_entries.load(Ordering::Relaxed)
    }
}
