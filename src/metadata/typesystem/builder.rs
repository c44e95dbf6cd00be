use std::collections::HashMap;

use crate::{
    metadata::{
        nullability::NullableAttribute,
        typesystem::{PropertyDescriptor, TypeDescriptor},
    },
    Error, Result,
};

/// Declaration-time construction of a [`TypeDescriptor`].
///
/// The builder is the single place descriptor invariants are enforced:
///
/// - property names are unique per type, and declaration order is preserved
/// - an annotation can only be attached to a declared member
/// - at most one annotation per member (`AllowMultiple = false` in the .NET
///   attribute usage)
///
/// Annotation bytes themselves are not validated; any byte value is accepted and
/// out-of-table bytes decode to the `unrecognized` fallback.
///
/// # Examples
///
/// ```rust
/// use nullscope::metadata::nullability::NullableAttribute;
/// use nullscope::metadata::typesystem::{PropertyDescriptor, TypeDescriptorBuilder};
///
/// let descriptor = TypeDescriptorBuilder::new("Widget")
///     .property(PropertyDescriptor::new("Label", "String"))?
///     .attach("Label", NullableAttribute::Mode(2))?
///     .build();
///
/// assert_eq!(descriptor.name(), "Widget");
/// assert!(descriptor.attribute("Label").is_some());
/// # Ok::<(), nullscope::Error>(())
/// ```
#[derive(Debug)]
pub struct TypeDescriptorBuilder {
    name: String,
    properties: Vec<PropertyDescriptor>,
    attachments: HashMap<String, NullableAttribute>,
}

impl TypeDescriptorBuilder {
    /// Start describing a type with the given reflection-style name.
    #[must_use]
    pub fn new(name: &str) -> Self {
        TypeDescriptorBuilder {
            name: name.to_string(),
            properties: Vec::new(),
            attachments: HashMap::new(),
        }
    }

    /// Declare the next property.
    ///
    /// Properties are enumerated in the order they are declared here.
    ///
    /// # Errors
    ///
    /// [`Error::DuplicateProperty`] if a property with the same name was already
    /// declared on this type.
    pub fn property(mut self, property: PropertyDescriptor) -> Result<Self> {
        if self.properties.iter().any(|p| p.name == property.name) {
            return Err(Error::DuplicateProperty {
                type_name: self.name,
                member: property.name,
            });
        }
        self.properties.push(property);
        Ok(self)
    }

    /// Attach a nullability annotation to an already-declared member.
    ///
    /// # Errors
    ///
    /// [`Error::MemberNotFound`] if no property named `member` has been declared,
    /// [`Error::DuplicateAttachment`] if the member already carries an annotation.
    pub fn attach(mut self, member: &str, attribute: NullableAttribute) -> Result<Self> {
        if !self.properties.iter().any(|p| p.name == member) {
            return Err(Error::MemberNotFound {
                type_name: self.name,
                member: member.to_string(),
            });
        }
        if self.attachments.contains_key(member) {
            return Err(Error::DuplicateAttachment {
                type_name: self.name,
                member: member.to_string(),
            });
        }
        self.attachments.insert(member.to_string(), attribute);
        Ok(self)
    }

    /// Finish construction and freeze the descriptor.
    #[must_use]
    pub fn build(self) -> TypeDescriptor {
        TypeDescriptor {
            name: self.name,
            properties: self.properties,
            attachments: self.attachments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> TypeDescriptorBuilder {
        TypeDescriptorBuilder::new("Widget")
    }

    #[test]
    fn declaration_order_is_preserved() {
        let descriptor = widget()
            .property(PropertyDescriptor::new("B", "String"))
            .unwrap()
            .property(PropertyDescriptor::new("A", "String"))
            .unwrap()
            .property(PropertyDescriptor::new("C", "Int32"))
            .unwrap()
            .build();

        let names: Vec<&str> = descriptor.properties().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["B", "A", "C"]);
    }

    #[test]
    fn duplicate_property_is_rejected() {
        let result = widget()
            .property(PropertyDescriptor::new("A", "String"))
            .unwrap()
            .property(PropertyDescriptor::new("A", "Int32"));

        assert!(matches!(
            result,
            Err(Error::DuplicateProperty { type_name, member })
                if type_name == "Widget" && member == "A"
        ));
    }

    #[test]
    fn attach_requires_declared_member() {
        let result = widget()
            .property(PropertyDescriptor::new("A", "String"))
            .unwrap()
            .attach("Missing", NullableAttribute::Mode(1));

        assert!(matches!(
            result,
            Err(Error::MemberNotFound { member, .. }) if member == "Missing"
        ));
    }

    #[test]
    fn second_attachment_on_same_member_is_rejected() {
        let result = widget()
            .property(PropertyDescriptor::new("A", "String"))
            .unwrap()
            .attach("A", NullableAttribute::Mode(1))
            .unwrap()
            .attach("A", NullableAttribute::Mode(2));

        assert!(matches!(
            result,
            Err(Error::DuplicateAttachment { member, .. }) if member == "A"
        ));
    }

    #[test]
    fn attachment_is_readable_after_build() {
        let descriptor = widget()
            .property(PropertyDescriptor::new("A", "String"))
            .unwrap()
            .property(PropertyDescriptor::new("N", "Int32"))
            .unwrap()
            .attach("A", NullableAttribute::Modes(vec![1, 2]))
            .unwrap()
            .build();

        assert_eq!(
            descriptor.attribute("A"),
            Some(&NullableAttribute::Modes(vec![1, 2]))
        );
        assert_eq!(descriptor.attribute("N"), None);
        assert_eq!(descriptor.attachment_count(), 1);
    }
}
