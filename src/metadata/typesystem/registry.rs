use std::collections::HashMap;

use crate::{metadata::typesystem::TypeDescriptor, Error, Result};

/// An insertion-ordered collection of [`TypeDescriptor`] entries, keyed by type name.
///
/// Stands in for the host runtime's type universe: every type the inspector can be
/// pointed at is registered here explicitly. Iteration yields descriptors in
/// registration order, which makes multi-type inspection passes deterministic.
///
/// # Examples
///
/// ```rust
/// use nullscope::metadata::typesystem::{TypeDescriptorBuilder, TypeRegistry};
///
/// let mut registry = TypeRegistry::new();
/// registry.register(TypeDescriptorBuilder::new("Widget").build())?;
///
/// assert_eq!(registry.len(), 1);
/// assert!(registry.get("Widget").is_some());
/// # Ok::<(), nullscope::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct TypeRegistry {
    types: Vec<TypeDescriptor>,
    index: HashMap<String, usize>,
}

impl TypeRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        TypeRegistry::default()
    }

    /// Register a descriptor.
    ///
    /// # Errors
    ///
    /// [`Error::DuplicateType`] if a descriptor with the same name is already
    /// registered.
    pub fn register(&mut self, descriptor: TypeDescriptor) -> Result<()> {
        if self.index.contains_key(descriptor.name()) {
            return Err(Error::DuplicateType(descriptor.name().to_string()));
        }
        self.index
            .insert(descriptor.name().to_string(), self.types.len());
        self.types.push(descriptor);
        Ok(())
    }

    /// Look up a descriptor by type name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TypeDescriptor> {
        self.index.get(name).map(|&at| &self.types[at])
    }

    /// Look up a descriptor by type name, failing if it is absent.
    ///
    /// # Errors
    ///
    /// [`Error::TypeNotFound`] if no descriptor with that name is registered.
    pub fn find(&self, name: &str) -> Result<&TypeDescriptor> {
        self.get(name)
            .ok_or_else(|| Error::TypeNotFound(name.to_string()))
    }

    /// Iterate over all descriptors in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.types.iter()
    }

    /// Number of registered descriptors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::typesystem::TypeDescriptorBuilder;

    fn named(name: &str) -> TypeDescriptor {
        TypeDescriptorBuilder::new(name).build()
    }

    #[test]
    fn register_and_get() {
        let mut registry = TypeRegistry::new();
        registry.register(named("A")).unwrap();
        registry.register(named("B")).unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("A").unwrap().name(), "A");
        assert!(registry.get("C").is_none());
    }

    #[test]
    fn find_reports_missing_types() {
        let registry = TypeRegistry::new();
        assert!(matches!(
            registry.find("Ghost"),
            Err(Error::TypeNotFound(name)) if name == "Ghost"
        ));
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut registry = TypeRegistry::new();
        registry.register(named("A")).unwrap();

        assert!(matches!(
            registry.register(named("A")),
            Err(Error::DuplicateType(name)) if name == "A"
        ));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn iteration_follows_registration_order() {
        let mut registry = TypeRegistry::new();
        for name in ["Zeta", "Alpha", "Mu"] {
            registry.register(named(name)).unwrap();
        }

        let order: Vec<&str> = registry.iter().map(TypeDescriptor::name).collect();
        assert_eq!(order, ["Zeta", "Alpha", "Mu"]);
    }

    #[test]
    fn empty_registry() {
        let registry = TypeRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }
}
