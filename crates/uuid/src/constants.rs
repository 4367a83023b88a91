//! Lengths and layout of the two UUID forms.

/// Length of the binary form in bytes.
pub const BINARY_LEN: usize = 16;

/// Length of the text form in characters.
pub const TEXT_LEN: usize = 36;

/// The reserved all-zero UUID in text form.
pub const NIL: &str = "00000000-0000-0000-0000-000000000000";

/// The reserved all-zero UUID in binary form.
pub const NIL_BYTES: [u8; BINARY_LEN] = [0; BINARY_LEN];

/// Hex-digit group lengths of the text form, in order.
pub const GROUP_LENGTHS: [usize; 5] = [8, 4, 4, 4, 12];

/// Character offsets of the four hyphens in the text form.
pub const HYPHEN_OFFSETS: [usize; 4] = [8, 13, 18, 23];
