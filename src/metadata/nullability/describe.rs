use crate::metadata::nullability::{NullableAttribute, NullableMode};

/// Decode a single annotation byte into its human-readable description.
///
/// The three recognized modes map to fixed strings; every other byte value renders
/// as `unrecognized {value}` with the decimal representation of the byte. This
/// function is total and never fails.
///
/// # Examples
///
/// ```rust
/// use nullscope::metadata::nullability::describe_mode;
///
/// assert_eq!(describe_mode(0), "value type");
/// assert_eq!(describe_mode(1), "non-nullable ref. type");
/// assert_eq!(describe_mode(2), "nullable ref. type");
/// assert_eq!(describe_mode(77), "unrecognized 77");
/// ```
#[must_use]
pub fn describe_mode(value: u8) -> String {
    match NullableMode::from_byte(value) {
        Some(mode) => mode.to_string(),
        None => format!("unrecognized {value}"),
    }
}

/// Decode a member's annotation, if any, into the description the inspector prints.
///
/// A missing annotation renders as `no attribute`. The sequence form renders as a
/// bracketed, comma-space-joined list of its elements decoded with [`describe_mode`],
/// in original order; an empty sequence renders as `[]`. The scalar form decodes the
/// single byte directly.
///
/// # Examples
///
/// ```rust
/// use nullscope::metadata::nullability::{describe_attribute, NullableAttribute};
///
/// assert_eq!(describe_attribute(None), "no attribute");
/// assert_eq!(
///     describe_attribute(Some(&NullableAttribute::Modes(vec![2, 0]))),
///     "[nullable ref. type, value type]"
/// );
/// ```
#[must_use]
pub fn describe_attribute(attribute: Option<&NullableAttribute>) -> String {
    match attribute {
        None => "no attribute".to_string(),
        Some(NullableAttribute::Modes(modes)) => {
            let parts: Vec<String> = modes.iter().map(|&value| describe_mode(value)).collect();
            format!("[{}]", parts.join(", "))
        }
        Some(NullableAttribute::Mode(value)) => describe_mode(*value),
    }
}
