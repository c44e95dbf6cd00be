//! The enumeration-and-decode pass over a type descriptor.
//!
//! Mirrors a reflection dump of a type's public surface: walk the declared
//! properties in declaration order, keep the public, instance-level, readable ones,
//! decode each member's nullability annotation, and render one line per property in
//! the fixed format:
//!
//! ```text
//! {TypeName}.{MemberName}: {MemberTypeName}, {Description}
//! ```
//!
//! Descriptors are immutable and reading an annotation has no side effects, so
//! repeating a pass over the same descriptor produces byte-identical output.

use std::io;

use crate::{
    metadata::{
        nullability::describe_attribute,
        typesystem::{BindingFlags, PropertyDescriptor, TypeDescriptor},
    },
    Result,
};

/// The properties of `descriptor` a public-surface dump includes, in declaration
/// order: public, instance-level, and readable.
///
/// # Examples
///
/// ```rust
/// use nullscope::inspector::visible_properties;
/// use nullscope::metadata::fixtures::probe;
///
/// let descriptor = probe::descriptor()?;
/// assert_eq!(visible_properties(&descriptor).count(), 9);
/// # Ok::<(), nullscope::Error>(())
/// ```
pub fn visible_properties(
    descriptor: &TypeDescriptor,
) -> impl Iterator<Item = &PropertyDescriptor> {
    descriptor
        .properties()
        .iter()
        .filter(|p| p.binding.contains(BindingFlags::public_instance()) && p.can_read)
}

/// Render the dump lines for `descriptor` without writing them anywhere.
///
/// One entry per visible property, in declaration order. This is the testable core
/// of [`dump_public_properties`].
#[must_use]
pub fn property_lines(descriptor: &TypeDescriptor) -> Vec<String> {
    visible_properties(descriptor)
        .map(|p| {
            format!(
                "{}.{}: {}, {}",
                descriptor.name(),
                p.name,
                p.type_name,
                describe_attribute(descriptor.attribute(&p.name))
            )
        })
        .collect()
}

/// Write the public-property dump of `descriptor` to `out`, one line per property.
///
/// # Errors
///
/// [`crate::Error::Io`] if writing to the sink fails; the pass itself has no other
/// failure modes.
///
/// # Examples
///
/// ```rust
/// use nullscope::inspector::dump_public_properties;
/// use nullscope::metadata::fixtures::collections;
///
/// let descriptor = collections::ilist_int32()?;
/// let mut out = Vec::new();
/// dump_public_properties(&descriptor, &mut out)?;
///
/// let text = String::from_utf8_lossy(&out);
/// assert!(text.starts_with("IList`1.Item: Int32, no attribute\n"));
/// # Ok::<(), nullscope::Error>(())
/// ```
pub fn dump_public_properties<W: io::Write>(descriptor: &TypeDescriptor, out: &mut W) -> Result<()> {
    for line in property_lines(descriptor) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{
        nullability::NullableAttribute,
        typesystem::{TypeDescriptorBuilder, TypeRegistry},
    };

    fn mixed_surface() -> TypeDescriptor {
        TypeDescriptorBuilder::new("Mixed")
            .property(PropertyDescriptor::new("Visible", "String"))
            .unwrap()
            .property(
                PropertyDescriptor::new("Shared", "Int32")
                    .with_binding(BindingFlags::STATIC | BindingFlags::PUBLIC),
            )
            .unwrap()
            .property(
                PropertyDescriptor::new("Hidden", "String")
                    .with_binding(BindingFlags::INSTANCE | BindingFlags::NON_PUBLIC),
            )
            .unwrap()
            .property(PropertyDescriptor::new("Sink", "String").write_only())
            .unwrap()
            .attach("Visible", NullableAttribute::Mode(1))
            .unwrap()
            .build()
    }

    #[test]
    fn filters_to_public_instance_readable() {
        let descriptor = mixed_surface();
        let names: Vec<&str> = visible_properties(&descriptor).map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Visible"]);
    }

    #[test]
    fn line_format() {
        let descriptor = mixed_surface();
        assert_eq!(
            property_lines(&descriptor),
            ["Mixed.Visible: String, non-nullable ref. type"]
        );
    }

    #[test]
    fn unannotated_member_renders_no_attribute() {
        let descriptor = TypeDescriptorBuilder::new("Bare")
            .property(PropertyDescriptor::new("Value", "Int32"))
            .unwrap()
            .build();
        assert_eq!(property_lines(&descriptor), ["Bare.Value: Int32, no attribute"]);
    }

    #[test]
    fn writer_output_matches_lines() {
        let descriptor = mixed_surface();
        let mut out = Vec::new();
        dump_public_properties(&descriptor, &mut out).unwrap();

        let expected: String = property_lines(&descriptor)
            .into_iter()
            .map(|line| line + "\n")
            .collect();
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn repeated_passes_are_identical() {
        let mut registry = TypeRegistry::new();
        registry.register(mixed_surface()).unwrap();
        let descriptor = registry.get("Mixed").unwrap();

        let first = property_lines(descriptor);
        let second = property_lines(descriptor);
        assert_eq!(first, second);
    }

    #[test]
    fn empty_type_dumps_nothing() {
        let descriptor = TypeDescriptorBuilder::new("Empty").build();
        assert!(property_lines(&descriptor).is_empty());

        let mut out = Vec::new();
        dump_public_properties(&descriptor, &mut out).unwrap();
        assert!(out.is_empty());
    }
}
