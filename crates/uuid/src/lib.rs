//! A 128-bit UUID value type with binary and text forms.
//!
//! A UUID has two equivalent representations:
//! - **binary form**: exactly 16 raw bytes, the canonical internal representation.
//! - **text form**: 36 lowercase hexadecimal characters grouped 8-4-4-4-12 with hyphens,
//!   for example `31c5e283-29d9-47df-8e86-965f31998e4b`.
//!
//! This crate provides:
//! - The [`Uuid`] value type, constructed from either form and rendered on demand.
//! - Static conversions between the forms ([`binary`] and [`text`]).
//! - A non-throwing [`validate()`] check over arbitrary [`Candidate`] values.
//! - Random generation ([`generate()`] / [`generate_with`]) driven by a [`GenerationMethod`]
//!   and an [`OutputFormat`].
//!
//! ## Example
//!
//! ```
//! use ident_uuid::{Uuid, ValidationForm, validate};
//!
//! # fn main() -> Result<(), ident_uuid::UuidError> {
//! let id = Uuid::parse("31c5e283-29d9-47df-8e86-965f31998e4b")?;
//! assert_eq!(Uuid::new(id.binary())?, id);
//! assert!(validate(id.text().as_str(), ValidationForm::Text));
//! # Ok(())
//! # }
//! ```
//!
//! ## The NIL UUID
//!
//! The all-zero value [`NIL`] (`00000000-0000-0000-0000-000000000000`) denotes "no identifier".
//! [`Uuid::is_null`] reports whether an instance holds it.

mod codec;
mod constants;
mod generate;
mod validate;
mod value;

pub use codec::{binary, text};
pub use constants::{BINARY_LEN, GROUP_LENGTHS, HYPHEN_OFFSETS, NIL, NIL_BYTES, TEXT_LEN};
pub use generate::{generate, generate_with, Generated, GenerationMethod, OutputFormat};
pub use validate::{validate, Candidate, ValidationForm};
pub use value::{Property, RawUuid, Uuid};

/// Error type for UUID operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UuidError {
    /// A value presented as a UUID has the wrong length or does not decode as hex
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),

    /// A property name that the UUID type does not define
    #[error("Unknown property: {0}")]
    UnknownProperty(String),

    /// An attempt to unset or partially modify the stored identifier
    #[error("Immutable field: {0}")]
    ImmutableField(String),

    /// A generation method that is recognised but not implemented
    #[error("Not implemented: {0}")]
    NotImplemented(String),

    /// The secure random source failed to produce bytes
    #[error("Random source failure: {0}")]
    RandomSource(String),

    /// An option name (method, format or form) that could not be parsed
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for UUID operations.
pub type UuidResult<T> = Result<T, UuidError>;
