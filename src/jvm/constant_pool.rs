//! The constant pool and its entry model.
//!
//! See the [JVM Specification §4.4](https://docs.oracle.com/javase/specs/jvms/se21/html/jvms-4.html#jvms-4.4)
//! for the on-wire format.

use std::fmt::{self, Display};

use super::{parsing::errors::ReferenceTypeError, runtime::ObjectHandle, symbols::Symbol};

/// The kind of a constant pool entry, with its one-byte wire code.
///
/// Wire codes are frozen by the class-file format and must never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Tag {
    /// Slot 0 and the slot following a `Long` or `Double` entry.
    Invalid = 0,
    /// A modified UTF-8 string.
    Utf8 = 1,
    /// A 32-bit integer.
    Integer = 3,
    /// A 32-bit IEEE-754 float.
    Float = 4,
    /// A 64-bit integer, occupying two slots.
    Long = 5,
    /// A 64-bit IEEE-754 double, occupying two slots.
    Double = 6,
    /// A class or interface.
    Class = 7,
    /// A string literal.
    String = 8,
    /// A field reference.
    FieldRef = 9,
    /// A class method reference.
    MethodRef = 10,
    /// An interface method reference.
    InterfaceMethodRef = 11,
    /// A name and a descriptor.
    NameAndType = 12,
    /// A method handle.
    MethodHandle = 15,
    /// A method type.
    MethodType = 16,
    /// A dynamically computed constant.
    Dynamic = 17,
    /// A dynamically computed call site.
    InvokeDynamic = 18,
    /// A module.
    Module = 19,
    /// A package.
    Package = 20,
}

impl Tag {
    /// Every tag, in wire-code order.
    pub const VALUES: [Tag; 18] = [
        Tag::Invalid,
        Tag::Utf8,
        Tag::Integer,
        Tag::Float,
        Tag::Long,
        Tag::Double,
        Tag::Class,
        Tag::String,
        Tag::FieldRef,
        Tag::MethodRef,
        Tag::InterfaceMethodRef,
        Tag::NameAndType,
        Tag::MethodHandle,
        Tag::MethodType,
        Tag::Dynamic,
        Tag::InvokeDynamic,
        Tag::Module,
        Tag::Package,
    ];

    /// Decodes a wire code. Returns [`None`] for codes the format does not
    /// define; `0` is reserved and not a valid wire code.
    #[must_use]
    pub const fn from_wire(code: u8) -> Option<Self> {
        let tag = match code {
            1 => Tag::Utf8,
            3 => Tag::Integer,
            4 => Tag::Float,
            5 => Tag::Long,
            6 => Tag::Double,
            7 => Tag::Class,
            8 => Tag::String,
            9 => Tag::FieldRef,
            10 => Tag::MethodRef,
            11 => Tag::InterfaceMethodRef,
            12 => Tag::NameAndType,
            15 => Tag::MethodHandle,
            16 => Tag::MethodType,
            17 => Tag::Dynamic,
            18 => Tag::InvokeDynamic,
            19 => Tag::Module,
            20 => Tag::Package,
            _ => return None,
        };
        Some(tag)
    }

    /// The one-byte code this tag is encoded as.
    #[must_use]
    pub const fn wire_code(self) -> u8 {
        self as u8
    }

    /// The name of this entry kind as used in the class-file specification.
    #[must_use]
    pub const fn constant_kind(self) -> &'static str {
        match self {
            Tag::Invalid => "CONSTANT_Invalid",
            Tag::Utf8 => "CONSTANT_Utf8",
            Tag::Integer => "CONSTANT_Integer",
            Tag::Float => "CONSTANT_Float",
            Tag::Long => "CONSTANT_Long",
            Tag::Double => "CONSTANT_Double",
            Tag::Class => "CONSTANT_Class",
            Tag::String => "CONSTANT_String",
            Tag::FieldRef => "CONSTANT_Fieldref",
            Tag::MethodRef => "CONSTANT_Methodref",
            Tag::InterfaceMethodRef => "CONSTANT_InterfaceMethodref",
            Tag::NameAndType => "CONSTANT_NameAndType",
            Tag::MethodHandle => "CONSTANT_MethodHandle",
            Tag::MethodType => "CONSTANT_MethodType",
            Tag::Dynamic => "CONSTANT_Dynamic",
            Tag::InvokeDynamic => "CONSTANT_InvokeDynamic",
            Tag::Module => "CONSTANT_Module",
            Tag::Package => "CONSTANT_Package",
        }
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.constant_kind())
    }
}

/// A `Class` entry, either unresolved or pre-resolved via patching.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassConstant {
    /// An unresolved entry referencing its binary name.
    Index {
        /// The index in the constant pool of the class's binary name.
        /// The entry at that index must be a [`PoolConstant::Utf8`].
        name_index: u16,
    },
    /// A pre-resolved entry holding an interned class name.
    WithName(Symbol),
    /// A pre-resolved entry holding an already-loaded class.
    Resolved(ObjectHandle),
}

/// A `String` entry, either unresolved or pre-resolved via patching.
#[derive(Debug, Clone, PartialEq)]
pub enum StringConstant {
    /// An unresolved entry referencing its text.
    Index {
        /// The index in the constant pool of the string's text.
        /// The entry at that index must be a [`PoolConstant::Utf8`].
        utf8_index: u16,
    },
    /// A pre-resolved entry holding a runtime string object.
    Resolved(ObjectHandle),
}

/// An entry in the [`ConstantPool`].
///
/// Entries referencing other pool slots keep the raw indices; resolution is
/// driven by the caller through the typed accessors. Numeric literals always
/// carry their value directly.
#[derive(Debug, Clone, PartialEq)]
pub enum PoolConstant {
    /// Slot 0 and the slot following a `Long` or `Double` entry.
    Invalid,
    /// An interned modified UTF-8 string.
    Utf8(Symbol),
    /// A 32-bit integer.
    Integer(i32),
    /// A 32-bit IEEE-754 float.
    Float(f32),
    /// A 64-bit integer. The following slot is always [`PoolConstant::Invalid`].
    Long(i64),
    /// A 64-bit IEEE-754 double. The following slot is always [`PoolConstant::Invalid`].
    Double(f64),
    /// A class or interface.
    Class(ClassConstant),
    /// A string literal.
    String(StringConstant),
    /// A field reference.
    FieldRef {
        /// The index in the constant pool of the class containing the field.
        /// The entry at that index must be a [`PoolConstant::Class`].
        class_index: u16,
        /// The index in the constant pool of the name and type of the field.
        /// The entry at that index must be a [`PoolConstant::NameAndType`].
        name_and_type_index: u16,
    },
    /// A class method reference.
    MethodRef {
        /// The index in the constant pool of the class containing the method.
        /// The entry at that index must be a [`PoolConstant::Class`].
        class_index: u16,
        /// The index in the constant pool of the name and type of the method.
        /// The entry at that index must be a [`PoolConstant::NameAndType`].
        name_and_type_index: u16,
    },
    /// An interface method reference.
    InterfaceMethodRef {
        /// The index in the constant pool of the interface containing the method.
        /// The entry at that index must be a [`PoolConstant::Class`].
        class_index: u16,
        /// The index in the constant pool of the name and type of the method.
        /// The entry at that index must be a [`PoolConstant::NameAndType`].
        name_and_type_index: u16,
    },
    /// A name and a descriptor.
    NameAndType {
        /// The index in the constant pool of the UTF-8 string containing the name.
        /// The entry at that index must be a [`PoolConstant::Utf8`].
        name_index: u16,
        /// The index in the constant pool of the UTF-8 string containing the descriptor.
        /// The entry at that index must be a [`PoolConstant::Utf8`].
        descriptor_index: u16,
    },
    /// A method handle.
    MethodHandle {
        /// The kind of method handle.
        reference_kind: u8,
        /// The index in the constant pool of the referenced member.
        /// The entry at that index must be a [`PoolConstant::FieldRef`],
        /// [`PoolConstant::MethodRef`] or [`PoolConstant::InterfaceMethodRef`].
        reference_index: u16,
    },
    /// A method type.
    MethodType {
        /// The index in the constant pool of the UTF-8 string containing the descriptor.
        /// The entry at that index must be a [`PoolConstant::Utf8`].
        descriptor_index: u16,
    },
    /// A dynamically computed constant.
    Dynamic {
        /// The index of the bootstrap method in the `BootstrapMethods` attribute.
        bootstrap_method_attr_index: u16,
        /// The index in the constant pool of the name and type of the constant.
        /// The entry at that index must be a [`PoolConstant::NameAndType`].
        name_and_type_index: u16,
    },
    /// A dynamically computed call site.
    InvokeDynamic {
        /// The index of the bootstrap method in the `BootstrapMethods` attribute.
        bootstrap_method_attr_index: u16,
        /// The index in the constant pool of the name and type of the call site.
        /// The entry at that index must be a [`PoolConstant::NameAndType`].
        name_and_type_index: u16,
    },
}

impl PoolConstant {
    /// The [`Tag`] of this entry.
    #[must_use]
    pub const fn tag(&self) -> Tag {
        match self {
            Self::Invalid => Tag::Invalid,
            Self::Utf8(_) => Tag::Utf8,
            Self::Integer(_) => Tag::Integer,
            Self::Float(_) => Tag::Float,
            Self::Long(_) => Tag::Long,
            Self::Double(_) => Tag::Double,
            Self::Class(_) => Tag::Class,
            Self::String(_) => Tag::String,
            Self::FieldRef { .. } => Tag::FieldRef,
            Self::MethodRef { .. } => Tag::MethodRef,
            Self::InterfaceMethodRef { .. } => Tag::InterfaceMethodRef,
            Self::NameAndType { .. } => Tag::NameAndType,
            Self::MethodHandle { .. } => Tag::MethodHandle,
            Self::MethodType { .. } => Tag::MethodType,
            Self::Dynamic { .. } => Tag::Dynamic,
            Self::InvokeDynamic { .. } => Tag::InvokeDynamic,
        }
    }

    /// A printable form of this entry for the pool dump. Cross-references are
    /// resolved for display only; a dangling reference degrades to `#index`.
    fn printable(&self, pool: &ConstantPool) -> String {
        match self {
            Self::Invalid => "(invalid)".to_owned(),
            Self::Utf8(symbol) => symbol.to_string(),
            Self::Integer(value) => value.to_string(),
            Self::Float(value) => format!("{value}f"),
            Self::Long(value) => format!("{value}l"),
            Self::Double(value) => format!("{value}d"),
            Self::Class(ClassConstant::Index { name_index }) => display_utf8(pool, *name_index),
            Self::Class(ClassConstant::WithName(name)) => name.to_string(),
            Self::Class(ClassConstant::Resolved(_)) => "<resolved class>".to_owned(),
            Self::String(StringConstant::Index { utf8_index }) => display_utf8(pool, *utf8_index),
            Self::String(StringConstant::Resolved(_)) => "<resolved string>".to_owned(),
            Self::FieldRef {
                class_index,
                name_and_type_index,
            }
            | Self::MethodRef {
                class_index,
                name_and_type_index,
            }
            | Self::InterfaceMethodRef {
                class_index,
                name_and_type_index,
            } => format!(
                "{}.{}",
                display_entry(pool, *class_index),
                display_entry(pool, *name_and_type_index)
            ),
            Self::NameAndType {
                name_index,
                descriptor_index,
            } => format!(
                "{}:{}",
                display_utf8(pool, *name_index),
                display_utf8(pool, *descriptor_index)
            ),
            Self::MethodHandle {
                reference_kind,
                reference_index,
            } => format!(
                "{} {}",
                reference_kind_name(*reference_kind),
                display_entry(pool, *reference_index)
            ),
            Self::MethodType { descriptor_index } => display_utf8(pool, *descriptor_index),
            Self::Dynamic {
                bootstrap_method_attr_index,
                name_and_type_index,
            }
            | Self::InvokeDynamic {
                bootstrap_method_attr_index,
                name_and_type_index,
            } => format!(
                "#{}:{}",
                bootstrap_method_attr_index,
                display_entry(pool, *name_and_type_index)
            ),
        }
    }
}

fn display_utf8(pool: &ConstantPool, index: u16) -> String {
    match pool.entries.get(usize::from(index)) {
        Some(PoolConstant::Utf8(symbol)) => symbol.to_string(),
        _ => format!("#{index}"),
    }
}

fn display_entry(pool: &ConstantPool, index: u16) -> String {
    match pool.entries.get(usize::from(index)) {
        Some(entry @ (PoolConstant::Class(_) | PoolConstant::NameAndType { .. })) => {
            entry.printable(pool)
        }
        _ => format!("#{index}"),
    }
}

fn reference_kind_name(kind: u8) -> String {
    let name = match kind {
        1 => "REF_getField",
        2 => "REF_getStatic",
        3 => "REF_putField",
        4 => "REF_putStatic",
        5 => "REF_invokeVirtual",
        6 => "REF_invokeStatic",
        7 => "REF_invokeSpecial",
        8 => "REF_newInvokeSpecial",
        9 => "REF_invokeInterface",
        unknown => return format!("REF_{unknown}"),
    };
    name.to_owned()
}

/// A view of a field, method or interface-method reference entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberRef {
    /// The tag of the underlying entry: [`Tag::FieldRef`], [`Tag::MethodRef`]
    /// or [`Tag::InterfaceMethodRef`].
    pub tag: Tag,
    /// The index of the `Class` entry of the member's owner.
    pub class_index: u16,
    /// The index of the member's `NameAndType` entry.
    pub name_and_type_index: u16,
}

/// A view of a `NameAndType` entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameAndTypeRef {
    /// The index of the `Utf8` entry holding the name.
    pub name_index: u16,
    /// The index of the `Utf8` entry holding the descriptor.
    pub descriptor_index: u16,
}

/// A view of a `MethodHandle` entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodHandleRef {
    /// The kind of method handle.
    pub reference_kind: u8,
    /// The index of the referenced member entry.
    pub reference_index: u16,
}

/// A view of a `MethodType` entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodTypeRef {
    /// The index of the `Utf8` entry holding the descriptor.
    pub descriptor_index: u16,
}

/// A view of a `Dynamic` or `InvokeDynamic` entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootstrapMethodRef {
    /// The index of the bootstrap method in the `BootstrapMethods` attribute.
    pub bootstrap_method_attr_index: u16,
    /// The index of the `NameAndType` entry.
    pub name_and_type_index: u16,
}

/// The text backing a `String` entry.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedString {
    /// Text reached by following the entry's index to its `Utf8` entry.
    Interned(Symbol),
    /// A runtime string object spliced in by pre-resolution patching.
    Patched(ObjectHandle),
}

/// An immutable, shareable constant pool.
///
/// Slots are 1-indexed; slot 0 is reserved and always holds
/// [`PoolConstant::Invalid`], as does the slot following a `Long` or `Double`
/// entry. Once constructed the pool is never mutated and can be read from
/// multiple threads without synchronization.
#[derive(Debug, Clone)]
pub struct ConstantPool {
    entries: Box<[PoolConstant]>,
}

impl ConstantPool {
    pub(crate) fn from_entries(entries: Vec<PoolConstant>) -> Self {
        Self {
            entries: entries.into_boxed_slice(),
        }
    }

    /// The number of slots, including slot 0 and wide-entry shadow slots.
    /// Equals the `constant_pool_count` decoded from the header.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the pool has no slots. A successfully parsed pool always has
    /// at least the reserved slot 0.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Gets the entry at the given index.
    ///
    /// `description` is a label used in error messages only, never for logic.
    ///
    /// # Errors
    /// [`ReferenceTypeError::OutOfRange`] if `index` is past the end of the pool.
    pub fn at(
        &self,
        index: u16,
        description: Option<&str>,
    ) -> Result<&PoolConstant, ReferenceTypeError> {
        self.entries
            .get(usize::from(index))
            .ok_or_else(|| ReferenceTypeError::out_of_range(index, description))
    }

    /// The tag at the given index.
    ///
    /// Returns [`Tag::Invalid`] for slot 0, for the slot following a `Long`
    /// or `Double` entry, and for indices past the end of the pool.
    #[must_use]
    pub fn tag_at(&self, index: u16) -> Tag {
        self.entries
            .get(usize::from(index))
            .map_or(Tag::Invalid, PoolConstant::tag)
    }

    /// The value of the `Integer` entry at the given index.
    ///
    /// # Errors
    /// [`ReferenceTypeError`] if the entry is not an `Integer`.
    pub fn int_at(&self, index: u16, description: Option<&str>) -> Result<i32, ReferenceTypeError> {
        match self.at(index, description)? {
            PoolConstant::Integer(value) => Ok(*value),
            entry => Err(ReferenceTypeError::mismatched(
                index,
                entry.tag(),
                &[Tag::Integer],
                description,
            )),
        }
    }

    /// The value of the `Long` entry at the given index.
    ///
    /// # Errors
    /// [`ReferenceTypeError`] if the entry is not a `Long`.
    pub fn long_at(
        &self,
        index: u16,
        description: Option<&str>,
    ) -> Result<i64, ReferenceTypeError> {
        match self.at(index, description)? {
            PoolConstant::Long(value) => Ok(*value),
            entry => Err(ReferenceTypeError::mismatched(
                index,
                entry.tag(),
                &[Tag::Long],
                description,
            )),
        }
    }

    /// The value of the `Float` entry at the given index.
    ///
    /// # Errors
    /// [`ReferenceTypeError`] if the entry is not a `Float`.
    pub fn float_at(
        &self,
        index: u16,
        description: Option<&str>,
    ) -> Result<f32, ReferenceTypeError> {
        match self.at(index, description)? {
            PoolConstant::Float(value) => Ok(*value),
            entry => Err(ReferenceTypeError::mismatched(
                index,
                entry.tag(),
                &[Tag::Float],
                description,
            )),
        }
    }

    /// The value of the `Double` entry at the given index.
    ///
    /// # Errors
    /// [`ReferenceTypeError`] if the entry is not a `Double`.
    pub fn double_at(
        &self,
        index: u16,
        description: Option<&str>,
    ) -> Result<f64, ReferenceTypeError> {
        match self.at(index, description)? {
            PoolConstant::Double(value) => Ok(*value),
            entry => Err(ReferenceTypeError::mismatched(
                index,
                entry.tag(),
                &[Tag::Double],
                description,
            )),
        }
    }

    /// The interned text of the `Utf8` entry at the given index.
    ///
    /// # Errors
    /// [`ReferenceTypeError`] if the entry is not a `Utf8`.
    pub fn utf8_at(
        &self,
        index: u16,
        description: Option<&str>,
    ) -> Result<Symbol, ReferenceTypeError> {
        match self.at(index, description)? {
            PoolConstant::Utf8(symbol) => Ok(symbol.clone()),
            entry => Err(ReferenceTypeError::mismatched(
                index,
                entry.tag(),
                &[Tag::Utf8],
                description,
            )),
        }
    }

    /// The resolved text backing the `String` entry at the given index.
    ///
    /// For an unresolved entry this follows the entry's index to the
    /// referenced `Utf8` entry; a pre-resolved entry returns its stored value
    /// directly.
    ///
    /// # Errors
    /// [`ReferenceTypeError`] if the entry is not a `String`, or if the
    /// referenced slot is not a `Utf8`.
    pub fn string_at(
        &self,
        index: u16,
        description: Option<&str>,
    ) -> Result<ResolvedString, ReferenceTypeError> {
        match self.at(index, description)? {
            PoolConstant::String(StringConstant::Index { utf8_index }) => self
                .utf8_at(*utf8_index, description)
                .map(ResolvedString::Interned),
            PoolConstant::String(StringConstant::Resolved(object)) => {
                Ok(ResolvedString::Patched(object.clone()))
            }
            entry => Err(ReferenceTypeError::mismatched(
                index,
                entry.tag(),
                &[Tag::String],
                description,
            )),
        }
    }

    /// The `Class` entry at the given index. Following the name index of an
    /// unresolved entry is left to the caller.
    ///
    /// # Errors
    /// [`ReferenceTypeError`] if the entry is not a `Class`.
    pub fn class_at(
        &self,
        index: u16,
        description: Option<&str>,
    ) -> Result<&ClassConstant, ReferenceTypeError> {
        match self.at(index, description)? {
            PoolConstant::Class(class) => Ok(class),
            entry => Err(ReferenceTypeError::mismatched(
                index,
                entry.tag(),
                &[Tag::Class],
                description,
            )),
        }
    }

    /// The `NameAndType` entry at the given index.
    ///
    /// # Errors
    /// [`ReferenceTypeError`] if the entry is not a `NameAndType`.
    pub fn name_and_type_at(
        &self,
        index: u16,
        description: Option<&str>,
    ) -> Result<NameAndTypeRef, ReferenceTypeError> {
        match *self.at(index, description)? {
            PoolConstant::NameAndType {
                name_index,
                descriptor_index,
            } => Ok(NameAndTypeRef {
                name_index,
                descriptor_index,
            }),
            ref entry => Err(ReferenceTypeError::mismatched(
                index,
                entry.tag(),
                &[Tag::NameAndType],
                description,
            )),
        }
    }

    /// The member reference at the given index: a field, method or interface
    /// method reference.
    ///
    /// # Errors
    /// [`ReferenceTypeError`] if the entry is none of the three member kinds.
    pub fn member_at(
        &self,
        index: u16,
        description: Option<&str>,
    ) -> Result<MemberRef, ReferenceTypeError> {
        match *self.at(index, description)? {
            PoolConstant::FieldRef {
                class_index,
                name_and_type_index,
            } => Ok(MemberRef {
                tag: Tag::FieldRef,
                class_index,
                name_and_type_index,
            }),
            PoolConstant::MethodRef {
                class_index,
                name_and_type_index,
            } => Ok(MemberRef {
                tag: Tag::MethodRef,
                class_index,
                name_and_type_index,
            }),
            PoolConstant::InterfaceMethodRef {
                class_index,
                name_and_type_index,
            } => Ok(MemberRef {
                tag: Tag::InterfaceMethodRef,
                class_index,
                name_and_type_index,
            }),
            ref entry => Err(ReferenceTypeError::mismatched(
                index,
                entry.tag(),
                &[Tag::MethodRef, Tag::InterfaceMethodRef, Tag::FieldRef],
                description,
            )),
        }
    }

    /// The method reference at the given index: a class or interface method.
    ///
    /// # Errors
    /// [`ReferenceTypeError`] if the entry is not a method reference.
    pub fn method_at(&self, index: u16) -> Result<MemberRef, ReferenceTypeError> {
        match *self.at(index, None)? {
            PoolConstant::MethodRef {
                class_index,
                name_and_type_index,
            } => Ok(MemberRef {
                tag: Tag::MethodRef,
                class_index,
                name_and_type_index,
            }),
            PoolConstant::InterfaceMethodRef {
                class_index,
                name_and_type_index,
            } => Ok(MemberRef {
                tag: Tag::InterfaceMethodRef,
                class_index,
                name_and_type_index,
            }),
            ref entry => Err(ReferenceTypeError::mismatched(
                index,
                entry.tag(),
                &[Tag::MethodRef, Tag::InterfaceMethodRef],
                None,
            )),
        }
    }

    /// The class method reference at the given index.
    ///
    /// # Errors
    /// [`ReferenceTypeError`] if the entry is not a `MethodRef`.
    pub fn class_method_at(&self, index: u16) -> Result<MemberRef, ReferenceTypeError> {
        match *self.at(index, None)? {
            PoolConstant::MethodRef {
                class_index,
                name_and_type_index,
            } => Ok(MemberRef {
                tag: Tag::MethodRef,
                class_index,
                name_and_type_index,
            }),
            ref entry => Err(ReferenceTypeError::mismatched(
                index,
                entry.tag(),
                &[Tag::MethodRef],
                None,
            )),
        }
    }

    /// The interface method reference at the given index.
    ///
    /// # Errors
    /// [`ReferenceTypeError`] if the entry is not an `InterfaceMethodRef`.
    pub fn interface_method_at(&self, index: u16) -> Result<MemberRef, ReferenceTypeError> {
        match *self.at(index, None)? {
            PoolConstant::InterfaceMethodRef {
                class_index,
                name_and_type_index,
            } => Ok(MemberRef {
                tag: Tag::InterfaceMethodRef,
                class_index,
                name_and_type_index,
            }),
            ref entry => Err(ReferenceTypeError::mismatched(
                index,
                entry.tag(),
                &[Tag::InterfaceMethodRef],
                None,
            )),
        }
    }

    /// The field reference at the given index.
    ///
    /// # Errors
    /// [`ReferenceTypeError`] if the entry is not a `FieldRef`.
    pub fn field_at(&self, index: u16) -> Result<MemberRef, ReferenceTypeError> {
        match *self.at(index, None)? {
            PoolConstant::FieldRef {
                class_index,
                name_and_type_index,
            } => Ok(MemberRef {
                tag: Tag::FieldRef,
                class_index,
                name_and_type_index,
            }),
            ref entry => Err(ReferenceTypeError::mismatched(
                index,
                entry.tag(),
                &[Tag::FieldRef],
                None,
            )),
        }
    }

    /// The `String` entry at the given index, without resolving its text.
    ///
    /// # Errors
    /// [`ReferenceTypeError`] if the entry is not a `String`.
    pub fn string_constant_at(&self, index: u16) -> Result<&StringConstant, ReferenceTypeError> {
        match self.at(index, None)? {
            PoolConstant::String(string) => Ok(string),
            entry => Err(ReferenceTypeError::mismatched(
                index,
                entry.tag(),
                &[Tag::String],
                None,
            )),
        }
    }

    /// The `InvokeDynamic` entry at the given index.
    ///
    /// # Errors
    /// [`ReferenceTypeError`] if the entry is not an `InvokeDynamic`.
    pub fn indy_at(&self, index: u16) -> Result<BootstrapMethodRef, ReferenceTypeError> {
        match *self.at(index, None)? {
            PoolConstant::InvokeDynamic {
                bootstrap_method_attr_index,
                name_and_type_index,
            } => Ok(BootstrapMethodRef {
                bootstrap_method_attr_index,
                name_and_type_index,
            }),
            ref entry => Err(ReferenceTypeError::mismatched(
                index,
                entry.tag(),
                &[Tag::InvokeDynamic],
                None,
            )),
        }
    }

    /// The `Dynamic` entry at the given index.
    ///
    /// # Errors
    /// [`ReferenceTypeError`] if the entry is not a `Dynamic`.
    pub fn dynamic_at(&self, index: u16) -> Result<BootstrapMethodRef, ReferenceTypeError> {
        match *self.at(index, None)? {
            PoolConstant::Dynamic {
                bootstrap_method_attr_index,
                name_and_type_index,
            } => Ok(BootstrapMethodRef {
                bootstrap_method_attr_index,
                name_and_type_index,
            }),
            ref entry => Err(ReferenceTypeError::mismatched(
                index,
                entry.tag(),
                &[Tag::Dynamic],
                None,
            )),
        }
    }

    /// The `MethodHandle` entry at the given index.
    ///
    /// # Errors
    /// [`ReferenceTypeError`] if the entry is not a `MethodHandle`.
    pub fn method_handle_at(&self, index: u16) -> Result<MethodHandleRef, ReferenceTypeError> {
        match *self.at(index, None)? {
            PoolConstant::MethodHandle {
                reference_kind,
                reference_index,
            } => Ok(MethodHandleRef {
                reference_kind,
                reference_index,
            }),
            ref entry => Err(ReferenceTypeError::mismatched(
                index,
                entry.tag(),
                &[Tag::MethodHandle],
                None,
            )),
        }
    }

    /// The `MethodType` entry at the given index.
    ///
    /// # Errors
    /// [`ReferenceTypeError`] if the entry is not a `MethodType`.
    pub fn method_type_at(&self, index: u16) -> Result<MethodTypeRef, ReferenceTypeError> {
        match *self.at(index, None)? {
            PoolConstant::MethodType { descriptor_index } => {
                Ok(MethodTypeRef { descriptor_index })
            }
            ref entry => Err(ReferenceTypeError::mismatched(
                index,
                entry.tag(),
                &[Tag::MethodType],
                None,
            )),
        }
    }
}

impl Display for ConstantPool {
    /// Writes one line per non-shadow slot as `#index = TAG // printable-form`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut slots = self.entries.iter().enumerate();
        while let Some((index, entry)) = slots.next() {
            writeln!(f, "#{index} = {:<27} // {}", entry.tag(), entry.printable(self))?;
            if matches!(entry, PoolConstant::Long(_) | PoolConstant::Double(_)) {
                slots.next();
            }
        }
        Ok(())
    }
}
