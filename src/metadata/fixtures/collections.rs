//! Stable stand-ins for host-runtime collection types.
//!
//! A reflection pass is often pointed at types the caller does not own, such as the
//! untyped `ArrayList` and the generic `IList<T>` interface instantiated over a value
//! type. Their live member sets and annotation surfaces vary across host runtime
//! versions, so here they are pinned as explicit data. The member lists below follow
//! the shape those types expose through reflection; only the two `Object`-typed
//! members of `ArrayList` carry annotations, and the `IList<int>` instantiation
//! carries none at all, which exercises the `no attribute` output path end-to-end.

use crate::{
    metadata::{
        nullability::NullableAttribute,
        typesystem::{PropertyDescriptor, TypeDescriptor, TypeDescriptorBuilder},
    },
    Result,
};

/// Descriptor for the untyped `ArrayList` collection.
///
/// `Item` (the indexer) is a nullable `Object`; `SyncRoot` is non-nullable. The
/// value-typed members carry no annotation.
///
/// # Errors
///
/// Builder errors on invalid fixture data; the shipped table builds cleanly.
pub fn array_list() -> Result<TypeDescriptor> {
    Ok(TypeDescriptorBuilder::new("ArrayList")
        .property(PropertyDescriptor::new("Capacity", "Int32"))?
        .property(PropertyDescriptor::new("Count", "Int32").read_only())?
        .property(PropertyDescriptor::new("IsFixedSize", "Boolean").read_only())?
        .property(PropertyDescriptor::new("IsReadOnly", "Boolean").read_only())?
        .property(PropertyDescriptor::new("IsSynchronized", "Boolean").read_only())?
        .property(PropertyDescriptor::new("Item", "Object"))?
        .property(PropertyDescriptor::new("SyncRoot", "Object").read_only())?
        .attach("Item", NullableAttribute::Mode(2))?
        .attach("SyncRoot", NullableAttribute::Mode(1))?
        .build())
}

/// Descriptor for the `IList<int>` instantiation (reflection name ``IList`1``).
///
/// Every member is value-typed, so no annotations are present.
///
/// # Errors
///
/// Builder errors on invalid fixture data; the shipped table builds cleanly.
pub fn ilist_int32() -> Result<TypeDescriptor> {
    Ok(TypeDescriptorBuilder::new("IList`1")
        .property(PropertyDescriptor::new("Item", "Int32"))?
        .property(PropertyDescriptor::new("Count", "Int32").read_only())?
        .property(PropertyDescriptor::new("IsReadOnly", "Boolean").read_only())?
        .build())
}
