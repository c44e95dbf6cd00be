use std::collections::HashMap;

use bitflags::bitflags;

use crate::metadata::nullability::NullableAttribute;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    /// Member binding flags, mirroring the `System.Reflection.BindingFlags` values
    /// a reflection pass filters on.
    pub struct BindingFlags: u32 {
        /// Member belongs to an instance
        const INSTANCE = 0x0004;
        /// Member is static
        const STATIC = 0x0008;
        /// Member is public
        const PUBLIC = 0x0010;
        /// Member is non-public (private, protected, internal)
        const NON_PUBLIC = 0x0020;
    }
}

impl BindingFlags {
    /// The flag combination the inspector selects: public instance members.
    #[must_use]
    pub fn public_instance() -> Self {
        BindingFlags::PUBLIC | BindingFlags::INSTANCE
    }
}

/// A single property declaration on a [`TypeDescriptor`].
///
/// Carries the member name, the .NET reflection-style short name of the declared type
/// (`String`, `Int32[]`, `Object`, ...), binding flags, and the accessor surface. The
/// nullability annotation is deliberately NOT a field here: it lives on the owning
/// descriptor and is looked up by member name at inspection time, matching the
/// ambient attribute-to-declaration association of the .NET attribute model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDescriptor {
    /// Member name as declared
    pub name: String,
    /// Reflection-style short name of the declared type
    pub type_name: String,
    /// Visibility and instance/static binding of the member
    pub binding: BindingFlags,
    /// Whether the property has a getter
    pub can_read: bool,
    /// Whether the property has a setter
    pub can_write: bool,
}

impl PropertyDescriptor {
    /// Create a public instance property with both accessors.
    ///
    /// This is the common case (`{ get; set; }`); use the modifiers below for
    /// get-only, static, or non-public members.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nullscope::metadata::typesystem::{BindingFlags, PropertyDescriptor};
    ///
    /// let prop = PropertyDescriptor::new("Count", "Int32");
    /// assert!(prop.binding.contains(BindingFlags::public_instance()));
    /// assert!(prop.can_read && prop.can_write);
    /// ```
    #[must_use]
    pub fn new(name: &str, type_name: &str) -> Self {
        PropertyDescriptor {
            name: name.to_string(),
            type_name: type_name.to_string(),
            binding: BindingFlags::public_instance(),
            can_read: true,
            can_write: true,
        }
    }

    /// Drop the setter, modelling a `{ get; }` declaration.
    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.can_write = false;
        self
    }

    /// Drop the getter, modelling a `{ set; }` declaration.
    #[must_use]
    pub fn write_only(mut self) -> Self {
        self.can_read = false;
        self
    }

    /// Replace the default public instance binding.
    #[must_use]
    pub fn with_binding(mut self, binding: BindingFlags) -> Self {
        self.binding = binding;
        self
    }
}

/// An immutable description of one inspectable type.
///
/// Holds the type name, the declaration-ordered property list, and the annotation
/// map keyed by member name. Built through
/// [`TypeDescriptorBuilder`](crate::metadata::typesystem::TypeDescriptorBuilder);
/// never mutated afterwards, so repeated inspection passes observe identical data.
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    pub(crate) name: String,
    pub(crate) properties: Vec<PropertyDescriptor>,
    pub(crate) attachments: HashMap<String, NullableAttribute>,
}

impl TypeDescriptor {
    /// Reflection-style short name of the described type.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All declared properties, in declaration order.
    #[must_use]
    pub fn properties(&self) -> &[PropertyDescriptor] {
        &self.properties
    }

    /// The nullability annotation attached to `member`, if any.
    ///
    /// Looked up by name at call time; members without an annotation return `None`
    /// and decode as `no attribute`.
    #[must_use]
    pub fn attribute(&self, member: &str) -> Option<&NullableAttribute> {
        self.attachments.get(member)
    }

    /// Number of members carrying a nullability annotation.
    #[must_use]
    pub fn attachment_count(&self) -> usize {
        self.attachments.len()
    }
}
