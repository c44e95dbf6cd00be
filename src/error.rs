use thiserror::Error;

/// The generic Error type, which provides coverage for all errors this library can
/// potentially return.
///
/// This enum covers all possible error conditions that can occur while constructing
/// type descriptors, registering them, and rendering inspection output. Each variant
/// provides specific context about the failure mode to enable appropriate handling.
///
/// Note that decoding nullability annotations is deliberately infallible: unrecognized
/// mode bytes render as a descriptive fallback string rather than an error.
///
/// # Examples
///
/// ```rust
/// use nullscope::{
///     metadata::typesystem::{PropertyDescriptor, TypeDescriptorBuilder},
///     Error,
/// };
///
/// let builder = TypeDescriptorBuilder::new("Widget")
///     .property(PropertyDescriptor::new("Label", "String"))?;
///
/// match builder.property(PropertyDescriptor::new("Label", "String")) {
///     Err(Error::DuplicateProperty { type_name, member }) => {
///         eprintln!("{type_name} already declares {member}");
///     }
///     Err(e) => eprintln!("other error: {e}"),
///     Ok(_) => unreachable!(),
/// }
/// # Ok::<(), nullscope::Error>(())
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// A member was declared twice on the same type descriptor.
    ///
    /// Property declaration order is significant, so a second declaration of the
    /// same name is rejected rather than silently merged or reordered.
    #[error("Type '{type_name}' already declares a property named '{member}'")]
    DuplicateProperty {
        /// Name of the type being described
        type_name: String,
        /// Name of the conflicting member
        member: String,
    },

    /// A second nullability annotation was attached to the same member.
    ///
    /// The .NET attribute convention allows at most one annotation per declaration
    /// (`AllowMultiple = false`), which this library enforces at build time.
    #[error("Member '{type_name}.{member}' already carries a nullability annotation")]
    DuplicateAttachment {
        /// Name of the type being described
        type_name: String,
        /// Name of the member that is already annotated
        member: String,
    },

    /// An annotation was attached to a member the type does not declare.
    ///
    /// Annotations travel with declarations; attaching one to an unknown member
    /// name is a construction mistake, not a runtime condition.
    #[error("Type '{type_name}' has no member named '{member}'")]
    MemberNotFound {
        /// Name of the type being described
        type_name: String,
        /// The unknown member name
        member: String,
    },

    /// A type descriptor with the same name is already registered.
    ///
    /// Registry iteration order follows registration order, so duplicate names
    /// would make lookups ambiguous and are rejected.
    #[error("A type named '{0}' is already registered")]
    DuplicateType(String),

    /// The requested type is not present in the registry.
    ///
    /// Returned by [`crate::metadata::typesystem::TypeRegistry::find`] when a
    /// lookup by name fails.
    #[error("No type named '{0}' is registered")]
    TypeNotFound(String),

    /// Writing inspection output to the supplied sink failed.
    ///
    /// Wraps standard I/O errors raised by the output writer, such as a closed
    /// pipe or a full disk.
    #[error("{0}")]
    Io(#[from] std::io::Error),
}
