//! The probe subject: one type covering every annotation combination.
//!
//! The mirrored C# declarations, with the mode bytes the compiler records for them:
//!
//! | member   | declared type | annotation       |
//! |----------|---------------|------------------|
//! | `A`      | `string`      | `1`              |
//! | `B`      | `string?`     | `2`              |
//! | `C`      | `string?` (get-only) | `2`       |
//! | `ArrayA` | `int[]`       | `[1, 0]`         |
//! | `ArrayB` | `int[]?`      | `[2, 0]`         |
//! | `ArrayC` | `string[]?`   | `[2, 1]`         |
//! | `ArrayD` | `string?[]`   | `[1, 2]`         |
//! | `ArrayE` | `string?[]?`  | `2` (collapsed)  |
//! | `N`      | `int`         | none             |
//!
//! Sequences carry one byte per type position, outermost-first; `ArrayE` collapses
//! to the scalar form because both of its positions carry the same byte, and `N`
//! carries nothing because value types are not annotated at all.

use crate::{
    metadata::{
        nullability::NullableAttribute,
        typesystem::{PropertyDescriptor, TypeDescriptor, TypeDescriptorBuilder},
    },
    Result,
};

/// Runtime counterpart of the described `Probe` type.
///
/// The array members exist purely as declaration-time fixtures; the constructor
/// always resets them to their empty or absent state. The first text member is
/// never absent, falling back to the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Probe {
    /// First text member; absent input becomes the empty string
    pub a: String,
    /// Second text member, stored verbatim
    pub b: Option<String>,
    c: Option<String>,
    /// Plain array of a value type
    pub array_a: Vec<i32>,
    /// Nullable array of a value type
    pub array_b: Option<Vec<i32>>,
    /// Nullable array of non-nullable elements
    pub array_c: Option<Vec<String>>,
    /// Plain array of nullable elements
    pub array_d: Vec<Option<String>>,
    /// Nullable array of nullable elements
    pub array_e: Option<Vec<Option<String>>>,
    n: i32,
}

impl Probe {
    /// Construct a probe from three optional text values and a required count.
    ///
    /// `a` falls back to the empty string when absent; `b` and `c` are stored
    /// verbatim, including absence. All array members start empty or absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nullscope::metadata::fixtures::probe::Probe;
    ///
    /// let probe = Probe::new(None, None, None, 5);
    /// assert_eq!(probe.a, "");
    /// assert_eq!(probe.b, None);
    /// assert_eq!(probe.n(), 5);
    /// ```
    #[must_use]
    pub fn new(a: Option<String>, b: Option<String>, c: Option<String>, n: i32) -> Self {
        Probe {
            a: a.unwrap_or_default(),
            b,
            c,
            n,
            array_a: Vec::new(),
            array_b: None,
            array_c: None,
            array_d: Vec::new(),
            array_e: None,
        }
    }

    /// Third text member; get-only after construction.
    #[must_use]
    pub fn c(&self) -> Option<&str> {
        self.c.as_deref()
    }

    /// The count member; get-only after construction.
    #[must_use]
    pub fn n(&self) -> i32 {
        self.n
    }
}

/// The hand-maintained descriptor for [`Probe`], carrying the annotation table above.
///
/// `C` and `N` are get-only; every member is a public instance property.
///
/// # Errors
///
/// Builder errors on invalid fixture data; the shipped table builds cleanly.
pub fn descriptor() -> Result<TypeDescriptor> {
    Ok(TypeDescriptorBuilder::new("Probe")
        .property(PropertyDescriptor::new("A", "String"))?
        .property(PropertyDescriptor::new("B", "String"))?
        .property(PropertyDescriptor::new("C", "String").read_only())?
        .property(PropertyDescriptor::new("ArrayA", "Int32[]"))?
        .property(PropertyDescriptor::new("ArrayB", "Int32[]"))?
        .property(PropertyDescriptor::new("ArrayC", "String[]"))?
        .property(PropertyDescriptor::new("ArrayD", "String[]"))?
        .property(PropertyDescriptor::new("ArrayE", "String[]"))?
        .property(PropertyDescriptor::new("N", "Int32").read_only())?
        .attach("A", NullableAttribute::Mode(1))?
        .attach("B", NullableAttribute::Mode(2))?
        .attach("C", NullableAttribute::Mode(2))?
        .attach("ArrayA", NullableAttribute::Modes(vec![1, 0]))?
        .attach("ArrayB", NullableAttribute::Modes(vec![2, 0]))?
        .attach("ArrayC", NullableAttribute::Modes(vec![2, 1]))?
        .attach("ArrayD", NullableAttribute::Modes(vec![1, 2]))?
        .attach("ArrayE", NullableAttribute::Mode(2))?
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructor_defaults_first_text_member() {
        let probe = Probe::new(None, None, None, 5);
        assert_eq!(probe.a, "");
        assert_eq!(probe.b, None);
        assert_eq!(probe.c(), None);
        assert_eq!(probe.n(), 5);
    }

    #[test]
    fn constructor_stores_present_values_verbatim() {
        let probe = Probe::new(
            Some("first".to_string()),
            Some("second".to_string()),
            Some("third".to_string()),
            -3,
        );
        assert_eq!(probe.a, "first");
        assert_eq!(probe.b.as_deref(), Some("second"));
        assert_eq!(probe.c(), Some("third"));
        assert_eq!(probe.n(), -3);
    }

    #[test]
    fn arrays_start_empty_or_absent() {
        let probe = Probe::new(Some("x".to_string()), None, None, 0);
        assert!(probe.array_a.is_empty());
        assert_eq!(probe.array_b, None);
        assert_eq!(probe.array_c, None);
        assert!(probe.array_d.is_empty());
        assert_eq!(probe.array_e, None);
    }

    #[test]
    fn descriptor_declares_all_nine_members_in_order() {
        let descriptor = descriptor().unwrap();
        let names: Vec<&str> = descriptor
            .properties()
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(
            names,
            ["A", "B", "C", "ArrayA", "ArrayB", "ArrayC", "ArrayD", "ArrayE", "N"]
        );
    }

    #[test]
    fn descriptor_annotation_table() {
        let descriptor = descriptor().unwrap();
        assert_eq!(descriptor.attribute("A"), Some(&NullableAttribute::Mode(1)));
        assert_eq!(descriptor.attribute("B"), Some(&NullableAttribute::Mode(2)));
        assert_eq!(
            descriptor.attribute("ArrayD"),
            Some(&NullableAttribute::Modes(vec![1, 2]))
        );
        assert_eq!(descriptor.attribute("ArrayE"), Some(&NullableAttribute::Mode(2)));
        assert_eq!(descriptor.attribute("N"), None);
        assert_eq!(descriptor.attachment_count(), 8);
    }

    #[test]
    fn get_only_members_remain_readable() {
        let descriptor = descriptor().unwrap();
        for name in ["C", "N"] {
            let prop = descriptor
                .properties()
                .iter()
                .find(|p| p.name == name)
                .unwrap();
            assert!(prop.can_read);
            assert!(!prop.can_write);
        }
    }
}
