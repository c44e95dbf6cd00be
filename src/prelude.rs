//! # nullscope Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and
//! functions from the nullscope library. Import this module to get quick access to
//! the essential pieces for describing and inspecting annotated types.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all nullscope operations
pub use crate::Error;

/// The result type used throughout nullscope
pub use crate::Result;

// ================================================================================================
// Annotation Model
// ================================================================================================

/// Annotation values and decoding
pub use crate::metadata::nullability::{
    describe_attribute, describe_mode, NullableAttribute, NullableMode,
};

// ================================================================================================
// Type Descriptors
// ================================================================================================

/// Descriptor construction and lookup
pub use crate::metadata::typesystem::{
    BindingFlags, PropertyDescriptor, TypeDescriptor, TypeDescriptorBuilder, TypeRegistry,
};

// ================================================================================================
// Fixtures and Inspection
// ================================================================================================

/// The built-in fixture registry
pub use crate::metadata::fixtures::builtin_registry;

/// The enumeration pass
pub use crate::inspector::{dump_public_properties, property_lines, visible_properties};
