//! Opaque handles into the runtime object model.
//!
//! The constant pool never inspects these values; it stores them during
//! pre-resolution patching and hands them back through the typed accessors.

use std::{any::Any, fmt, sync::Arc};

use super::symbols::JavaString;

/// A reference to a runtime object supplied by the class loader.
#[derive(Clone)]
pub struct ObjectHandle(Arc<dyn Any + Send + Sync>);

impl ObjectHandle {
    /// Wraps a runtime value.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self(Arc::new(value))
    }

    /// Borrows the wrapped value if it is of type `T`.
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref()
    }

    /// Whether two handles refer to the same runtime object.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for ObjectHandle {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for ObjectHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ObjectHandle(..)")
    }
}

/// One slot of the pre-resolution table handed to the pool builder.
///
/// A patch overrides the payload of the slot at the same index while the
/// builder still consumes the entry's nominal byte width, so patched and
/// unpatched pools stay byte-position-compatible. Only the entry kinds listed
/// here can be overridden.
#[derive(Debug, Clone, PartialEq)]
pub enum Patch {
    /// An already-loaded class to splice into a `Class` slot.
    Class(ObjectHandle),
    /// A class name to splice into a `Class` slot; interned when applied.
    ClassName(JavaString),
    /// A runtime string object to splice into a `String` slot.
    String(ObjectHandle),
    /// A value for an `Integer` slot.
    Integer(i32),
    /// A value for a `Float` slot.
    Float(f32),
    /// A value for a `Long` slot.
    Long(i64),
    /// A value for a `Double` slot.
    Double(f64),
}
