//! The parser's only construction-time configuration knob: how strictly
//! the UTF-8 byte front-end validates multi-byte sequences.

/// Strictness of the byte front-end's UTF-8 decoding (§4.4 / §12).
///
/// Chosen once at construction and not mutable mid-stream, matching the
/// immutability the callback itself is held to.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Utf8Mode {
    /// Accept overlong encodings, surrogate code points, and 5-/6-byte
    /// leading bytes without validation (the behavior described in
    /// §4.4, matched directly against the original decoder this crate
    /// is modeled on).
    #[default]
    Permissive,
    /// Reject invalid sequences (overlong forms, surrogates, out-of-range
    /// code points, and leading bytes outside the modern 1-4 byte range)
    /// and deliver `char::REPLACEMENT_CHARACTER` in their place.
    Replacement,
}
