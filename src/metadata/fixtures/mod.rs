//! Built-in fixture types for the inspector.
//!
//! Two kinds of fixtures live here:
//!
//! - [`probe`]: a type under our control whose members exercise every annotation
//!   combination the convention supports, together with a runtime data holder whose
//!   constructor semantics match the described declarations
//! - [`collections`]: stable stand-ins for two host-runtime collection types. Their
//!   member sets are fixed as data rather than deduced from a live runtime, so
//!   inspection output does not drift across host versions.

pub mod collections;
pub mod probe;

use crate::{metadata::typesystem::TypeRegistry, Result};

/// The registry holding all built-in fixtures, in the canonical inspection order:
/// `Probe`, then `ArrayList`, then ``IList`1``.
///
/// # Errors
///
/// Construction errors from the fixture builders; with the shipped fixture data
/// this does not occur.
///
/// # Examples
///
/// ```rust
/// use nullscope::metadata::fixtures::builtin_registry;
///
/// let registry = builtin_registry()?;
/// let names: Vec<&str> = registry.iter().map(|d| d.name()).collect();
/// assert_eq!(names, ["Probe", "ArrayList", "IList`1"]);
/// # Ok::<(), nullscope::Error>(())
/// ```
pub fn builtin_registry() -> Result<TypeRegistry> {
    let mut registry = TypeRegistry::new();
    registry.register(probe::descriptor()?)?;
    registry.register(collections::array_list()?)?;
    registry.register(collections::ilist_int32()?)?;
    Ok(registry)
}
