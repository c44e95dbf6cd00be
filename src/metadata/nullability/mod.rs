//! Nullability annotation values and their decoding.
//!
//! The .NET compiler encodes nullable-reference analysis results as a
//! `NullableAttribute` on each annotated declaration: a single mode byte for simple
//! members, or an ordered byte sequence for nested shapes such as arrays, with one
//! byte per type position outermost-first. This module mirrors that convention:
//!
//! - [`NullableAttribute`]: the scalar/sequence tagged union attached to members
//! - [`NullableMode`]: the three recognized mode codes (`0`/`1`/`2`)
//! - [`describe_mode`] / [`describe_attribute`]: decoding into the human-readable
//!   descriptions the inspector prints
//!
//! Decoding is total: any byte is representable, and bytes outside the recognized
//! table render as `unrecognized {value}` rather than failing.

mod describe;
mod types;

pub use describe::*;
pub use types::*;
