use std::fmt;

use strum::{EnumCount, EnumIter};

/// The recognized nullability mode codes.
///
/// Each variant corresponds to one of the mode bytes the compiler emits for a type
/// position. The numeric values are part of the convention and must not change.
/// Bytes outside this table are still representable in a [`NullableAttribute`] (the
/// encoding is open-ended); they simply have no `NullableMode` and decode through
/// the fallback branch of [`describe_mode`](crate::metadata::nullability::describe_mode).
#[derive(Clone, Copy, PartialEq, Debug, EnumIter, EnumCount, Eq, Hash)]
pub enum NullableMode {
    /// Mode `0` - the position is a value type; nullability analysis does not apply.
    ValueType = 0,

    /// Mode `1` - a reference type the compiler considers never null.
    NonNullableRef = 1,

    /// Mode `2` - a reference type that may be null.
    NullableRef = 2,
}

impl NullableMode {
    /// Look up the mode for a raw annotation byte.
    ///
    /// Returns `None` for bytes outside the recognized table.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nullscope::metadata::nullability::NullableMode;
    ///
    /// assert_eq!(NullableMode::from_byte(2), Some(NullableMode::NullableRef));
    /// assert_eq!(NullableMode::from_byte(7), None);
    /// ```
    #[must_use]
    pub fn from_byte(value: u8) -> Option<Self> {
        match value {
            0 => Some(NullableMode::ValueType),
            1 => Some(NullableMode::NonNullableRef),
            2 => Some(NullableMode::NullableRef),
            _ => None,
        }
    }

    /// The raw annotation byte for this mode.
    #[must_use]
    pub fn byte(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for NullableMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            NullableMode::ValueType => "value type",
            NullableMode::NonNullableRef => "non-nullable ref. type",
            NullableMode::NullableRef => "nullable ref. type",
        };
        f.write_str(text)
    }
}

/// A nullability annotation as attached to a member declaration.
///
/// Mirrors the two constructor forms of the compiler-generated attribute: a single
/// mode byte, or an ordered sequence of mode bytes for nested shapes (one byte per
/// type position, outermost-first). When every byte of a sequence is identical the
/// compiler collapses it to the scalar form; fixtures here reproduce that behavior
/// but nothing enforces it, and both forms accept arbitrary byte values.
///
/// Values are immutable once constructed. At most one annotation may be attached to
/// a given member; the descriptor builder enforces this.
///
/// # Examples
///
/// ```rust
/// use nullscope::metadata::nullability::{describe_attribute, NullableAttribute};
///
/// // string  -> scalar mode 1
/// let plain = NullableAttribute::Mode(1);
/// // string?[] -> non-nullable array of nullable elements
/// let compound = NullableAttribute::Modes(vec![1, 2]);
///
/// assert_eq!(describe_attribute(Some(&plain)), "non-nullable ref. type");
/// assert_eq!(
///     describe_attribute(Some(&compound)),
///     "[non-nullable ref. type, nullable ref. type]"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NullableAttribute {
    /// A single mode byte covering the whole declared type.
    Mode(u8),

    /// One mode byte per type position, outermost-first.
    Modes(Vec<u8>),
}

impl NullableAttribute {
    /// Number of mode bytes this annotation carries.
    ///
    /// `1` for the scalar form, the sequence length otherwise.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            NullableAttribute::Mode(_) => 1,
            NullableAttribute::Modes(modes) => modes.len(),
        }
    }

    /// Returns `true` if this is the sequence form with no elements.
    ///
    /// The scalar form is never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn from_byte_roundtrips_recognized_modes() {
        for mode in NullableMode::iter() {
            assert_eq!(NullableMode::from_byte(mode.byte()), Some(mode));
        }
    }

    #[test]
    fn from_byte_rejects_unknown_bytes() {
        for value in 3..=u8::MAX {
            assert_eq!(NullableMode::from_byte(value), None);
        }
    }

    #[test]
    fn mode_count_matches_table() {
        assert_eq!(NullableMode::COUNT, 3);
    }

    #[test]
    fn display_strings() {
        assert_eq!(NullableMode::ValueType.to_string(), "value type");
        assert_eq!(
            NullableMode::NonNullableRef.to_string(),
            "non-nullable ref. type"
        );
        assert_eq!(NullableMode::NullableRef.to_string(), "nullable ref. type");
    }

    #[test]
    fn attribute_len() {
        assert_eq!(NullableAttribute::Mode(1).len(), 1);
        assert_eq!(NullableAttribute::Modes(vec![2, 0]).len(), 2);
        assert_eq!(NullableAttribute::Modes(Vec::new()).len(), 0);
    }

    #[test]
    fn only_empty_sequence_is_empty() {
        assert!(NullableAttribute::Modes(Vec::new()).is_empty());
        assert!(!NullableAttribute::Mode(0).is_empty());
        assert!(!NullableAttribute::Modes(vec![1]).is_empty());
    }
}
