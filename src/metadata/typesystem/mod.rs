//! Type descriptor infrastructure.
//!
//! Rust has no runtime reflection facility, so the "type" the inspector enumerates is
//! an explicit descriptor: a declaration-ordered member list with .NET reflection-style
//! type names, binding flags, and the nullability annotations attached at declaration
//! time. Descriptors are assembled through a validating builder and collected in an
//! insertion-ordered registry:
//!
//! - [`PropertyDescriptor`] / [`BindingFlags`]: one public member and its surface
//! - [`TypeDescriptor`]: an immutable member list plus the by-name annotation map
//! - [`TypeDescriptorBuilder`]: declaration-time construction and validation
//! - [`TypeRegistry`]: named, ordered collection of descriptors

mod builder;
mod registry;
mod types;

pub use builder::*;
pub use registry::*;
pub use types::*;
