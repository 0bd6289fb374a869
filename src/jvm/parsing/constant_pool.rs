//! Decoding of the constant pool from class-file bytes.

use std::io::Read;

use super::{
    errors::FormatError,
    reader_utils::{ValueReaderExt, read_byte_chunk},
};
use crate::jvm::{
    constant_pool::{ClassConstant, ConstantPool, PoolConstant, StringConstant, Tag},
    runtime::Patch,
    symbols::SymbolTable,
};

/// The first class-file major version supporting the `invokedynamic` family
/// of constants (`MethodHandle`, `MethodType`, `InvokeDynamic`).
pub const INVOKE_DYNAMIC_MAJOR_VERSION: u16 = 51;

/// The first class-file major version supporting `Dynamic` constants.
pub const DYNAMIC_CONSTANT_MAJOR_VERSION: u16 = 55;

/// The owning class-file parser, as seen by the pool builder.
///
/// The builder consults it to gate tags behind capability checks, to report
/// bootstrap-method-attribute indices for later validation against the
/// `BootstrapMethods` attribute, and to decide the fate of tags this core
/// does not decode itself.
pub trait ClassfileParsing {
    /// Gates the `invokedynamic` family of tags.
    ///
    /// # Errors
    /// [`FormatError`] if `tag` is not supported; decoding aborts.
    fn check_invoke_dynamic_support(&mut self, tag: Tag) -> Result<(), FormatError>;

    /// Gates the `Dynamic` tag.
    ///
    /// # Errors
    /// [`FormatError`] if `tag` is not supported; decoding aborts.
    fn check_dynamic_constant_support(&mut self, tag: Tag) -> Result<(), FormatError>;

    /// Reports a bootstrap-method-attribute index seen in a `Dynamic` or
    /// `InvokeDynamic` entry.
    fn update_max_bootstrap_method_attr_index(&mut self, index: u16);

    /// Fallback for `Module`, `Package` and any other tag the pool builder
    /// does not decode. The implementation may fail, or consume the entry's
    /// bytes from `reader` and produce a substitute entry.
    ///
    /// # Errors
    /// [`FormatError`] if the tag is rejected; decoding aborts.
    fn handle_bad_constant<R>(&mut self, tag: Tag, reader: &mut R) -> Result<PoolConstant, FormatError>
    where
        R: Read + ?Sized;
}

/// A [`ClassfileParsing`] implementation gated on the class-file version.
///
/// `Module` and `Package` tags are rejected; callers that accept
/// `module-info` pools implement the trait with their own policy.
#[derive(Debug, Clone)]
pub struct ParserContext {
    major_version: u16,
    minor_version: u16,
    max_bootstrap_method_attr_index: Option<u16>,
}

impl ParserContext {
    /// Creates a context for a class file of the given version.
    #[must_use]
    pub const fn new(major_version: u16, minor_version: u16) -> Self {
        Self {
            major_version,
            minor_version,
            max_bootstrap_method_attr_index: None,
        }
    }

    /// The highest bootstrap-method-attribute index referenced by any
    /// `Dynamic` or `InvokeDynamic` entry, or [`None`] if no such entry was
    /// decoded.
    #[must_use]
    pub const fn max_bootstrap_method_attr_index(&self) -> Option<u16> {
        self.max_bootstrap_method_attr_index
    }
}

impl ClassfileParsing for ParserContext {
    fn check_invoke_dynamic_support(&mut self, tag: Tag) -> Result<(), FormatError> {
        if self.major_version < INVOKE_DYNAMIC_MAJOR_VERSION {
            return Err(FormatError::UnsupportedTagVersion {
                tag,
                major: self.major_version,
                minor: self.minor_version,
            });
        }
        Ok(())
    }

    fn check_dynamic_constant_support(&mut self, tag: Tag) -> Result<(), FormatError> {
        if self.major_version < DYNAMIC_CONSTANT_MAJOR_VERSION {
            return Err(FormatError::UnsupportedTagVersion {
                tag,
                major: self.major_version,
                minor: self.minor_version,
            });
        }
        Ok(())
    }

    fn update_max_bootstrap_method_attr_index(&mut self, index: u16) {
        let current = self.max_bootstrap_method_attr_index.unwrap_or(0);
        self.max_bootstrap_method_attr_index = Some(current.max(index));
    }

    fn handle_bad_constant<R>(&mut self, tag: Tag, _reader: &mut R) -> Result<PoolConstant, FormatError>
    where
        R: Read + ?Sized,
    {
        Err(FormatError::UnexpectedTag(tag))
    }
}

fn patch_at<'a>(patches: Option<&'a [Option<Patch>]>, index: u16) -> Option<&'a Patch> {
    patches
        .and_then(|it| it.get(usize::from(index)))
        .and_then(Option::as_ref)
}

impl ConstantPool {
    /// Parses a constant pool, starting at the `u2` pool count.
    ///
    /// Entries are decoded in a single forward pass and kept unresolved;
    /// `patches`, when present, overrides the payload of individual
    /// `Class`/`String`/`Integer`/`Float`/`Long`/`Double` slots with
    /// pre-resolved values. A patched slot still consumes the entry's
    /// nominal byte width, so the stream position after parsing does not
    /// depend on the patch table.
    ///
    /// # Errors
    /// [`FormatError`] on malformed input; no partial pool is returned.
    pub fn parse<R, P>(
        reader: &mut R,
        parser: &mut P,
        symbols: &SymbolTable,
        patches: Option<&[Option<Patch>]>,
    ) -> Result<Self, FormatError>
    where
        R: Read + ?Sized,
        P: ClassfileParsing + ?Sized,
    {
        let count: u16 = reader.read_value()?;
        if count < 1 {
            return Err(FormatError::InvalidPoolSize(count));
        }
        let length = usize::from(count);
        let mut entries = vec![PoolConstant::Invalid; length];

        let mut index: u16 = 1;
        while usize::from(index) < length {
            let tag_byte: u8 = reader.read_value()?;
            let Some(tag) = Tag::from_wire(tag_byte) else {
                return Err(FormatError::UnknownTag {
                    tag: tag_byte,
                    index,
                });
            };
            let slot = usize::from(index);
            match tag {
                Tag::Class => {
                    let name_index: u16 = reader.read_value()?;
                    entries[slot] = match patch_at(patches, index) {
                        Some(Patch::Class(mirror)) => {
                            PoolConstant::Class(ClassConstant::Resolved(mirror.clone()))
                        }
                        Some(Patch::ClassName(name)) => PoolConstant::Class(
                            ClassConstant::WithName(symbols.intern_java_string(name)),
                        ),
                        Some(_) => return Err(FormatError::IncompatiblePatch { index, tag }),
                        None => PoolConstant::Class(ClassConstant::Index { name_index }),
                    };
                }
                Tag::String => {
                    let utf8_index: u16 = reader.read_value()?;
                    entries[slot] = match patch_at(patches, index) {
                        Some(Patch::String(object)) => {
                            PoolConstant::String(StringConstant::Resolved(object.clone()))
                        }
                        Some(_) => return Err(FormatError::IncompatiblePatch { index, tag }),
                        None => PoolConstant::String(StringConstant::Index { utf8_index }),
                    };
                }
                Tag::FieldRef => {
                    let class_index = reader.read_value()?;
                    let name_and_type_index = reader.read_value()?;
                    entries[slot] = PoolConstant::FieldRef {
                        class_index,
                        name_and_type_index,
                    };
                }
                Tag::MethodRef => {
                    let class_index = reader.read_value()?;
                    let name_and_type_index = reader.read_value()?;
                    entries[slot] = PoolConstant::MethodRef {
                        class_index,
                        name_and_type_index,
                    };
                }
                Tag::InterfaceMethodRef => {
                    let class_index = reader.read_value()?;
                    let name_and_type_index = reader.read_value()?;
                    entries[slot] = PoolConstant::InterfaceMethodRef {
                        class_index,
                        name_and_type_index,
                    };
                }
                Tag::NameAndType => {
                    let name_index = reader.read_value()?;
                    let descriptor_index = reader.read_value()?;
                    entries[slot] = PoolConstant::NameAndType {
                        name_index,
                        descriptor_index,
                    };
                }
                Tag::Integer => {
                    let decoded: i32 = reader.read_value()?;
                    entries[slot] = match patch_at(patches, index) {
                        Some(Patch::Integer(value)) => PoolConstant::Integer(*value),
                        Some(_) => return Err(FormatError::IncompatiblePatch { index, tag }),
                        None => PoolConstant::Integer(decoded),
                    };
                }
                Tag::Float => {
                    let decoded: f32 = reader.read_value()?;
                    entries[slot] = match patch_at(patches, index) {
                        Some(Patch::Float(value)) => PoolConstant::Float(*value),
                        Some(_) => return Err(FormatError::IncompatiblePatch { index, tag }),
                        None => PoolConstant::Float(decoded),
                    };
                }
                Tag::Long => {
                    let decoded: i64 = reader.read_value()?;
                    entries[slot] = match patch_at(patches, index) {
                        Some(Patch::Long(value)) => PoolConstant::Long(*value),
                        Some(_) => return Err(FormatError::IncompatiblePatch { index, tag }),
                        None => PoolConstant::Long(decoded),
                    };
                    // The following slot is reserved; `entries` already holds
                    // Invalid there.
                    index += 1;
                    if usize::from(index) >= length {
                        return Err(FormatError::InvalidWideIndex(index - 1));
                    }
                }
                Tag::Double => {
                    let decoded: f64 = reader.read_value()?;
                    entries[slot] = match patch_at(patches, index) {
                        Some(Patch::Double(value)) => PoolConstant::Double(*value),
                        Some(_) => return Err(FormatError::IncompatiblePatch { index, tag }),
                        None => PoolConstant::Double(decoded),
                    };
                    index += 1;
                    if usize::from(index) >= length {
                        return Err(FormatError::InvalidWideIndex(index - 1));
                    }
                }
                Tag::Utf8 => {
                    let byte_length: u16 = reader.read_value()?;
                    let bytes = read_byte_chunk(reader, usize::from(byte_length))?;
                    symbols.record_utf8_entry();
                    entries[slot] = PoolConstant::Utf8(symbols.get_or_intern(&bytes));
                }
                Tag::MethodHandle => {
                    parser.check_invoke_dynamic_support(tag)?;
                    let reference_kind = reader.read_value()?;
                    let reference_index = reader.read_value()?;
                    entries[slot] = PoolConstant::MethodHandle {
                        reference_kind,
                        reference_index,
                    };
                }
                Tag::MethodType => {
                    parser.check_invoke_dynamic_support(tag)?;
                    let descriptor_index = reader.read_value()?;
                    entries[slot] = PoolConstant::MethodType { descriptor_index };
                }
                Tag::Dynamic => {
                    parser.check_dynamic_constant_support(tag)?;
                    let bootstrap_method_attr_index = reader.read_value()?;
                    let name_and_type_index = reader.read_value()?;
                    entries[slot] = PoolConstant::Dynamic {
                        bootstrap_method_attr_index,
                        name_and_type_index,
                    };
                    parser.update_max_bootstrap_method_attr_index(bootstrap_method_attr_index);
                }
                Tag::InvokeDynamic => {
                    parser.check_invoke_dynamic_support(tag)?;
                    let bootstrap_method_attr_index = reader.read_value()?;
                    let name_and_type_index = reader.read_value()?;
                    entries[slot] = PoolConstant::InvokeDynamic {
                        bootstrap_method_attr_index,
                        name_and_type_index,
                    };
                    parser.update_max_bootstrap_method_attr_index(bootstrap_method_attr_index);
                }
                Tag::Invalid | Tag::Module | Tag::Package => {
                    entries[slot] = parser.handle_bad_constant(tag, reader)?;
                }
            }
            index += 1;
        }

        Ok(Self::from_entries(entries))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::jvm::runtime::ObjectHandle;
    use crate::jvm::symbols::JavaString;

    fn pool_bytes(count: u16, body: &[u8]) -> Vec<u8> {
        let mut bytes = count.to_be_bytes().to_vec();
        bytes.extend_from_slice(body);
        bytes
    }

    fn utf8_entry(text: &str) -> Vec<u8> {
        let payload = cesu8::to_java_cesu8(text);
        let mut bytes = vec![1];
        bytes.extend(u16::try_from(payload.len()).unwrap().to_be_bytes());
        bytes.extend_from_slice(&payload);
        bytes
    }

    #[test]
    fn pool_size_zero_is_rejected_before_decoding() {
        let bytes = pool_bytes(0, &[]);
        let mut reader = bytes.as_slice();
        let mut parser = ParserContext::new(61, 0);
        let symbols = SymbolTable::new();
        let err = ConstantPool::parse(&mut reader, &mut parser, &symbols, None).unwrap_err();
        assert!(matches!(err, FormatError::InvalidPoolSize(0)));
    }

    #[test]
    fn unknown_tag_names_the_offending_index() {
        let mut body = vec![3];
        body.extend(1i32.to_be_bytes());
        body.push(2); // tag 2 is not defined
        let bytes = pool_bytes(3, &body);
        let mut reader = bytes.as_slice();
        let mut parser = ParserContext::new(61, 0);
        let symbols = SymbolTable::new();
        let err = ConstantPool::parse(&mut reader, &mut parser, &symbols, None).unwrap_err();
        assert!(matches!(err, FormatError::UnknownTag { tag: 2, index: 2 }));
    }

    #[test]
    fn truncated_stream_is_a_read_failure() {
        let bytes = pool_bytes(2, &[3, 0, 0]); // Integer with a short payload
        let mut reader = bytes.as_slice();
        let mut parser = ParserContext::new(61, 0);
        let symbols = SymbolTable::new();
        let err = ConstantPool::parse(&mut reader, &mut parser, &symbols, None).unwrap_err();
        assert!(matches!(err, FormatError::ReadFail(_)));
    }

    #[test]
    fn wide_entry_without_room_for_its_shadow_slot_fails() {
        let mut body = vec![5];
        body.extend(7i64.to_be_bytes());
        let bytes = pool_bytes(2, &body);
        let mut reader = bytes.as_slice();
        let mut parser = ParserContext::new(61, 0);
        let symbols = SymbolTable::new();
        let err = ConstantPool::parse(&mut reader, &mut parser, &symbols, None).unwrap_err();
        assert!(matches!(err, FormatError::InvalidWideIndex(1)));
    }

    #[test]
    fn invoke_dynamic_family_requires_major_version_51() {
        let body = [15, 6, 0, 4];
        let bytes = pool_bytes(2, &body);
        let mut reader = bytes.as_slice();
        let mut parser = ParserContext::new(50, 0);
        let symbols = SymbolTable::new();
        let err = ConstantPool::parse(&mut reader, &mut parser, &symbols, None).unwrap_err();
        assert!(matches!(
            err,
            FormatError::UnsupportedTagVersion {
                tag: Tag::MethodHandle,
                major: 50,
                minor: 0,
            }
        ));

        let mut reader = bytes.as_slice();
        let mut parser = ParserContext::new(51, 0);
        assert!(ConstantPool::parse(&mut reader, &mut parser, &symbols, None).is_ok());
    }

    #[test]
    fn dynamic_constants_require_major_version_55() {
        let body = [17, 0, 3, 0, 9];
        let bytes = pool_bytes(2, &body);
        let mut reader = bytes.as_slice();
        let mut parser = ParserContext::new(54, 0);
        let symbols = SymbolTable::new();
        let err = ConstantPool::parse(&mut reader, &mut parser, &symbols, None).unwrap_err();
        assert!(matches!(
            err,
            FormatError::UnsupportedTagVersion { tag: Tag::Dynamic, .. }
        ));
    }

    #[test]
    fn bootstrap_method_attr_indices_are_tracked() {
        let mut body = vec![18, 0, 3, 0, 9];
        body.extend([17, 0, 8, 0, 9]);
        body.extend([18, 0, 5, 0, 9]);
        let bytes = pool_bytes(4, &body);
        let mut reader = bytes.as_slice();
        let mut parser = ParserContext::new(55, 0);
        let symbols = SymbolTable::new();
        ConstantPool::parse(&mut reader, &mut parser, &symbols, None).unwrap();
        assert_eq!(parser.max_bootstrap_method_attr_index(), Some(8));
    }

    #[test]
    fn module_and_package_tags_are_rejected_by_the_default_policy() {
        let body = [19, 0, 2];
        let bytes = pool_bytes(2, &body);
        let mut reader = bytes.as_slice();
        let mut parser = ParserContext::new(61, 0);
        let symbols = SymbolTable::new();
        let err = ConstantPool::parse(&mut reader, &mut parser, &symbols, None).unwrap_err();
        assert!(matches!(err, FormatError::UnexpectedTag(Tag::Module)));
    }

    #[test]
    fn utf8_entries_are_counted_and_interned() {
        let mut body = utf8_entry("dup");
        body.extend(utf8_entry("dup"));
        let bytes = pool_bytes(3, &body);
        let mut reader = bytes.as_slice();
        let mut parser = ParserContext::new(61, 0);
        let symbols = SymbolTable::new();
        let pool = ConstantPool::parse(&mut reader, &mut parser, &symbols, None).unwrap();
        assert_eq!(symbols.utf8_entry_count(), 2);
        assert_eq!(symbols.len(), 1);
        let first = pool.utf8_at(1, None).unwrap();
        let second = pool.utf8_at(2, None).unwrap();
        assert!(first.ptr_eq(&second));
    }

    #[test]
    fn patches_override_payloads_without_moving_the_cursor() {
        let mut body = vec![7, 0, 3]; // Class -> name at 3
        body.push(8);
        body.extend([0u8, 3]); // String -> utf8 at 3
        body.extend(utf8_entry("Marker"));
        body.push(3);
        body.extend(11i32.to_be_bytes());
        body.push(5);
        body.extend(22i64.to_be_bytes());
        let bytes = pool_bytes(7, &body);
        let symbols = SymbolTable::new();

        let mut plain_reader = bytes.as_slice();
        let mut parser = ParserContext::new(61, 0);
        let plain = ConstantPool::parse(&mut plain_reader, &mut parser, &symbols, None).unwrap();

        let class_mirror = ObjectHandle::new("a loaded class");
        let string_object = ObjectHandle::new("a runtime string");
        let patches = vec![
            None,
            Some(Patch::Class(class_mirror.clone())),
            Some(Patch::String(string_object.clone())),
            None,
            Some(Patch::Integer(99)),
            Some(Patch::Long(-1)),
        ];
        let mut patched_reader = bytes.as_slice();
        let patched =
            ConstantPool::parse(&mut patched_reader, &mut parser, &symbols, Some(&patches))
                .unwrap();

        // Identical cursor advancement with and without the patch table.
        assert_eq!(plain_reader.len(), patched_reader.len());
        assert_eq!(plain.len(), patched.len());

        assert_eq!(plain.int_at(4, None).unwrap(), 11);
        assert_eq!(patched.int_at(4, None).unwrap(), 99);
        assert_eq!(plain.long_at(5, None).unwrap(), 22);
        assert_eq!(patched.long_at(5, None).unwrap(), -1);

        let ClassConstant::Resolved(resolved) = patched.class_at(1, None).unwrap() else {
            panic!("expected a pre-resolved class");
        };
        assert!(resolved.ptr_eq(&class_mirror));
        assert!(matches!(
            plain.class_at(1, None).unwrap(),
            ClassConstant::Index { name_index: 3 }
        ));

        let StringConstant::Resolved(resolved) = patched.string_constant_at(2).unwrap() else {
            panic!("expected a pre-resolved string");
        };
        assert!(resolved.ptr_eq(&string_object));
    }

    #[test]
    fn class_name_patches_are_interned() {
        let body = [7u8, 0, 9];
        let bytes = pool_bytes(2, &body);
        let symbols = SymbolTable::new();
        let patches = vec![
            None,
            Some(Patch::ClassName(JavaString::from("com/example/Synthetic"))),
        ];
        let mut reader = bytes.as_slice();
        let mut parser = ParserContext::new(61, 0);
        let pool = ConstantPool::parse(&mut reader, &mut parser, &symbols, Some(&patches)).unwrap();
        let ClassConstant::WithName(name) = pool.class_at(1, None).unwrap() else {
            panic!("expected a name-based pre-resolved class");
        };
        assert!(name.ptr_eq(&symbols.get_or_intern(b"com/example/Synthetic")));
    }

    #[test]
    fn mismatched_patch_kind_is_rejected() {
        let mut body = vec![3];
        body.extend(1i32.to_be_bytes());
        let bytes = pool_bytes(2, &body);
        let symbols = SymbolTable::new();
        let patches = vec![None, Some(Patch::Float(1.0))];
        let mut reader = bytes.as_slice();
        let mut parser = ParserContext::new(61, 0);
        let err = ConstantPool::parse(&mut reader, &mut parser, &symbols, Some(&patches))
            .unwrap_err();
        assert!(matches!(
            err,
            FormatError::IncompatiblePatch {
                index: 1,
                tag: Tag::Integer,
            }
        ));
    }

    #[test]
    fn short_patch_tables_leave_later_slots_untouched() {
        let mut body = vec![3];
        body.extend(5i32.to_be_bytes());
        body.push(3);
        body.extend(6i32.to_be_bytes());
        let bytes = pool_bytes(3, &body);
        let symbols = SymbolTable::new();
        let patches = vec![None, Some(Patch::Integer(50))];
        let mut reader = bytes.as_slice();
        let mut parser = ParserContext::new(61, 0);
        let pool = ConstantPool::parse(&mut reader, &mut parser, &symbols, Some(&patches)).unwrap();
        assert_eq!(pool.int_at(1, None).unwrap(), 50);
        assert_eq!(pool.int_at(2, None).unwrap(), 6);
    }

    fn arb_entry_bytes() -> impl Strategy<Value = Vec<u8>> {
        prop_oneof![
            any::<i32>().prop_map(|it| {
                let mut bytes = vec![3];
                bytes.extend(it.to_be_bytes());
                bytes
            }),
            any::<f32>().prop_map(|it| {
                let mut bytes = vec![4];
                bytes.extend(it.to_be_bytes());
                bytes
            }),
            any::<i64>().prop_map(|it| {
                let mut bytes = vec![5];
                bytes.extend(it.to_be_bytes());
                bytes
            }),
            any::<f64>().prop_map(|it| {
                let mut bytes = vec![6];
                bytes.extend(it.to_be_bytes());
                bytes
            }),
            any::<u16>().prop_map(|it| {
                let mut bytes = vec![7];
                bytes.extend(it.to_be_bytes());
                bytes
            }),
            any::<u16>().prop_map(|it| {
                let mut bytes = vec![8];
                bytes.extend(it.to_be_bytes());
                bytes
            }),
            (9u8..=12, any::<u16>(), any::<u16>()).prop_map(|(tag, first, second)| {
                let mut bytes = vec![tag];
                bytes.extend(first.to_be_bytes());
                bytes.extend(second.to_be_bytes());
                bytes
            }),
            "[a-zA-Z0-9/$<>()\\[;]{0,24}".prop_map(|it| utf8_entry(&it)),
            (1u8..=9, any::<u16>()).prop_map(|(kind, reference)| {
                let mut bytes = vec![15, kind];
                bytes.extend(reference.to_be_bytes());
                bytes
            }),
            any::<u16>().prop_map(|it| {
                let mut bytes = vec![16];
                bytes.extend(it.to_be_bytes());
                bytes
            }),
            (17u8..=18, any::<u16>(), any::<u16>()).prop_map(|(tag, bsm, nat)| {
                let mut bytes = vec![tag];
                bytes.extend(bsm.to_be_bytes());
                bytes.extend(nat.to_be_bytes());
                bytes
            }),
        ]
    }

    prop_compose! {
        fn arb_constant_pool_bytes()(
            entries in prop::collection::vec(arb_entry_bytes(), 1..=50)
        ) -> (u16, Vec<u8>) {
            let mut count: u16 = 1;
            for entry in &entries {
                count += match entry.first() {
                    Some(5 | 6) => 2,
                    _ => 1,
                };
            }
            let bytes = entries.into_iter().flatten().collect();
            (count, bytes)
        }
    }

    proptest! {

        #[test]
        fn parse_consumes_exactly_the_pool_bytes((count, bytes) in arb_constant_pool_bytes()) {
            let image = pool_bytes(count, &bytes);
            let mut reader = image.as_slice();
            let mut parser = ParserContext::new(61, 0);
            let symbols = SymbolTable::new();
            let pool = ConstantPool::parse(&mut reader, &mut parser, &symbols, None);
            prop_assert!(pool.is_ok());
            prop_assert!(reader.is_empty());
            prop_assert_eq!(pool.unwrap().len(), usize::from(count));
        }

        #[test]
        fn parse_fails_on_overstated_count((count, bytes) in arb_constant_pool_bytes()) {
            let image = pool_bytes(count + 1, &bytes);
            let mut reader = image.as_slice();
            let mut parser = ParserContext::new(61, 0);
            let symbols = SymbolTable::new();
            prop_assert!(ConstantPool::parse(&mut reader, &mut parser, &symbols, None).is_err());
        }
    }
}
