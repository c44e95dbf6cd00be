// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]

//! # nullscope
//!
//! A small framework for modelling and inspecting the nullable-reference metadata
//! annotations that the .NET compiler attaches to member declarations. The C# compiler
//! records nullability as a `NullableAttribute` carrying either a single mode byte or an
//! ordered sequence of mode bytes (one per reference-type position for nested array and
//! generic shapes); `nullscope` mirrors that convention with explicit, declarative type
//! descriptors and a reflection-style enumeration pass, without requiring the .NET
//! runtime.
//!
//! ## Features
//!
//! - **📦 Faithful annotation model** - The scalar/sequence `NullableAttribute` forms,
//!   including the compiler's collapse of all-identical sequences
//! - **🔍 Declarative type descriptors** - Member lists, .NET reflection type names, and
//!   binding flags supplied as data, built through a validating builder
//! - **📊 Reflection-style inspection** - Enumerate a type's public instance properties
//!   in declaration order and decode each member's annotation
//! - **🧩 Built-in fixtures** - A probe type exercising every nullability combination,
//!   plus stable stand-ins for host-runtime collection types
//! - **🛡️ Memory safe** - Built in Rust with comprehensive error handling
//!
//! ## Quick Start
//!
//! Add `nullscope` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! nullscope = "0.1"
//! ```
//!
//! ### Using the Prelude
//!
//! For convenient access to the most commonly used types, import the prelude:
//!
//! ```rust
//! use nullscope::prelude::*;
//!
//! let registry = builtin_registry()?;
//! for descriptor in registry.iter() {
//!     println!("{}: {} properties", descriptor.name(), descriptor.properties().len());
//! }
//! # Ok::<(), nullscope::Error>(())
//! ```
//!
//! ### Basic Usage
//!
//! ```rust
//! use nullscope::inspector::dump_public_properties;
//! use nullscope::metadata::fixtures::probe;
//!
//! let descriptor = probe::descriptor()?;
//!
//! let mut out = Vec::new();
//! dump_public_properties(&descriptor, &mut out)?;
//!
//! // One line per public instance property, e.g.
//! // Probe.A: String, non-nullable ref. type
//! print!("{}", String::from_utf8_lossy(&out));
//! # Ok::<(), nullscope::Error>(())
//! ```
//!
//! ## Architecture
//!
//! `nullscope` is organized into a handful of modules:
//!
//! - [`prelude`] - Convenient re-exports of commonly used types and functions
//! - [`metadata`] - Annotation model, type descriptors, and built-in fixtures
//! - [`inspector`] - The enumeration-and-decode pass over a descriptor
//! - [`Error`] and [`Result`] - Comprehensive error handling
//!
//! ### Describing a Type
//!
//! ```rust
//! use nullscope::metadata::nullability::NullableAttribute;
//! use nullscope::metadata::typesystem::{PropertyDescriptor, TypeDescriptorBuilder};
//!
//! let descriptor = TypeDescriptorBuilder::new("Widget")
//!     .property(PropertyDescriptor::new("Label", "String"))?
//!     .property(PropertyDescriptor::new("Tags", "String[]"))?
//!     .attach("Label", NullableAttribute::Mode(1))?
//!     .attach("Tags", NullableAttribute::Modes(vec![1, 2]))?
//!     .build();
//!
//! assert_eq!(descriptor.properties().len(), 2);
//! # Ok::<(), nullscope::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, Error>`](Result). Construction-time misuse
//! of the builder or registry (duplicate members, duplicate attachments, unknown lookup
//! targets) is reported as a typed error; the decode path itself never fails, mapping
//! unrecognized mode bytes to a descriptive fallback string instead.

pub(crate) mod error;

/// Reflection-style enumeration of a type descriptor's public properties.
///
/// The inspector walks a [`metadata::typesystem::TypeDescriptor`] in declaration order,
/// keeps the public, instance-level, readable members, decodes each member's attached
/// nullability annotation, and renders one line per property.
///
/// # Example
///
/// ```rust
/// use nullscope::inspector::property_lines;
/// use nullscope::metadata::fixtures::probe;
///
/// let descriptor = probe::descriptor()?;
/// for line in property_lines(&descriptor) {
///     println!("{line}");
/// }
/// # Ok::<(), nullscope::Error>(())
/// ```
pub mod inspector;

/// Definitions of the nullability annotation model, type descriptors, and fixtures.
///
/// This module contains the data side of the crate:
///
/// - [`metadata::nullability`] - The `NullableAttribute` forms, the mode-byte table, and
///   the byte-to-description decoding functions
/// - [`metadata::typesystem`] - Property and type descriptors, .NET-style binding flags,
///   the descriptor builder, and the ordered type registry
/// - [`metadata::fixtures`] - The probe subject and the stable collection stand-ins,
///   pre-wired into a registry
pub mod metadata;

/// # nullscope Prelude
///
/// This module provides a convenient prelude for the most commonly used types and
/// functions from the nullscope library.
///
/// # Example
///
/// ```rust
/// use nullscope::prelude::*;
///
/// let registry = builtin_registry()?;
/// assert!(registry.get("Probe").is_some());
/// # Ok::<(), nullscope::Error>(())
/// ```
pub mod prelude;

/// `nullscope` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always
/// [`Error`].
///
/// # Example
///
/// ```rust
/// use nullscope::{metadata::typesystem::TypeDescriptor, Result};
///
/// fn probe_descriptor() -> Result<TypeDescriptor> {
///     nullscope::metadata::fixtures::probe::descriptor()
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The generic Error type covering all errors this library can return.
///
/// See the variants on [`Error`] for the individual failure modes.
pub use error::Error;
