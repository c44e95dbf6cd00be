//! Nullability annotation model and type descriptor infrastructure.
//!
//! This module contains everything the inspector consumes: the annotation values
//! themselves, the descriptors that carry them, and the built-in fixture types.
//!
//! # Key Components
//!
//! - [`nullability`] - The `NullableAttribute` scalar/sequence forms, the mode-byte
//!   table, and the decoding functions that turn bytes into descriptions
//! - [`typesystem`] - `PropertyDescriptor`, `TypeDescriptor`, .NET-style binding
//!   flags, the validating builder, and the insertion-ordered registry
//! - [`fixtures`] - The probe subject covering every annotation combination, plus
//!   stable descriptors standing in for host-runtime collection types
//!
//! # Examples
//!
//! ```rust
//! use nullscope::metadata::fixtures::builtin_registry;
//! use nullscope::metadata::nullability::describe_attribute;
//!
//! let registry = builtin_registry()?;
//! let probe = registry.find("Probe")?;
//!
//! assert_eq!(describe_attribute(probe.attribute("B")), "nullable ref. type");
//! assert_eq!(describe_attribute(probe.attribute("N")), "no attribute");
//! # Ok::<(), nullscope::Error>(())
//! ```

pub mod fixtures;
pub mod nullability;
pub mod typesystem;
