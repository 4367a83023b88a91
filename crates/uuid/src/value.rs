//! The UUID value type.
//!
//! A [`Uuid`] always holds exactly one canonical representation, the 16-byte binary form.
//! The text form is derived from it on demand.

use crate::codec;
use crate::constants::{BINARY_LEN, TEXT_LEN};
use crate::generate::{generate, GenerationMethod, OutputFormat};
use crate::{UuidError, UuidResult};
use std::{fmt, str::FromStr};

/// The `uuid` crate's type, used as backing storage and for interop.
pub use ::uuid::Uuid as RawUuid;

/// A 128-bit identifier with binary and text forms.
///
/// # Construction
/// - [`Uuid::new`] accepts either form and dispatches on length: 16 bytes is binary,
///   36 characters is text.
/// - [`Uuid::from_bytes`] wraps 16 raw bytes and cannot fail.
/// - [`Uuid::parse`] reads the text form.
/// - [`Uuid::random`] generates a fresh identifier from the OS secure random source.
///
/// # Mutation
/// Instances are immutable apart from [`Uuid::replace`], which swaps the whole value. There is
/// no way to modify individual bytes, and [`Uuid::clear`] always fails.
///
/// # Equality
/// Two `Uuid`s are equal iff their binary forms are byte-identical. Comparison against other
/// values goes through their string rendering, see [`Uuid::matches`].
///
/// # Display format
/// When displayed or converted to string, a `Uuid` always produces the 36-character
/// hyphenated lowercase text form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Uuid(RawUuid);

/// A named, read-only view of a [`Uuid`], as returned by [`Uuid::property`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Property {
    Binary([u8; BINARY_LEN]),
    Text(String),
    IsNull(bool),
}

impl fmt::Display for Property {
    /// Binary is rendered as 32 lowercase hex digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Property::Binary(bytes) => f.write_str(&hex::encode(bytes)),
            Property::Text(text) => f.write_str(text),
            Property::IsNull(is_null) => write!(f, "{}", is_null),
        }
    }
}

impl Uuid {
    /// Constructs a UUID from either of its two forms.
    ///
    /// # Arguments
    ///
    /// * `value` - 16 raw bytes, or a 36-character text UUID.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::InvalidFormat`] if `value` is neither 16 nor 36 bytes long, or if a
    /// 36-byte value does not decode as a text UUID.
    pub fn new(value: impl AsRef<[u8]>) -> UuidResult<Self> {
        decode(value.as_ref()).map(Self)
    }

    /// Wraps 16 raw bytes.
    pub const fn from_bytes(bytes: [u8; BINARY_LEN]) -> Self {
        Self(RawUuid::from_bytes(bytes))
    }

    /// Parses the 36-character text form.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::InvalidFormat`] if `text` is not a 36-character text UUID.
    pub fn parse(text: &str) -> UuidResult<Self> {
        codec::binary(text).map(Self::from_bytes)
    }

    /// The all-zero NIL UUID.
    pub const fn nil() -> Self {
        Self(RawUuid::nil())
    }

    /// Generates a new UUID from the OS secure random source.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::RandomSource`] if the OS source fails.
    pub fn random() -> UuidResult<Self> {
        generate(GenerationMethod::SecureRandom, OutputFormat::Binary)?.into_uuid()
    }

    /// Returns the raw 16 bytes.
    pub fn binary(&self) -> &[u8; BINARY_LEN] {
        self.0.as_bytes()
    }

    /// Returns the 36-character hyphenated lowercase text form.
    pub fn text(&self) -> String {
        codec::encode(self.0.as_bytes())
    }

    /// Alias for [`Uuid::text`].
    pub fn str(&self) -> String {
        self.text()
    }

    /// Returns true if this is the NIL UUID.
    pub fn is_null(&self) -> bool {
        self.0.is_nil()
    }

    /// Returns the backing `uuid::Uuid`.
    pub fn uuid(&self) -> RawUuid {
        self.0
    }

    /// Looks up a read-only property by name.
    ///
    /// Recognised names are `binary`, `text`, `str` (same as `text`) and `is_null`.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::UnknownProperty`] for any other name.
    pub fn property(&self, name: &str) -> UuidResult<Property> {
        match name {
            "binary" => Ok(Property::Binary(*self.binary())),
            "text" | "str" => Ok(Property::Text(self.text())),
            "is_null" => Ok(Property::IsNull(self.is_null())),
            other => Err(UuidError::UnknownProperty(format!(
                "'{}' is not defined; expected one of binary, text, str, is_null",
                other
            ))),
        }
    }

    /// Replaces the whole value, dispatching on length exactly as [`Uuid::new`] does.
    ///
    /// On failure the previous value is kept.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::InvalidFormat`] under the same conditions as [`Uuid::new`].
    pub fn replace(&mut self, value: impl AsRef<[u8]>) -> UuidResult<()> {
        self.0 = decode(value.as_ref())?;
        Ok(())
    }

    /// Sets a property by name. Only `id` is settable, and it replaces the whole value.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::ImmutableField`] for any name other than `id`, and
    /// [`UuidError::InvalidFormat`] if the new value is malformed.
    pub fn set_property(&mut self, name: &str, value: impl AsRef<[u8]>) -> UuidResult<()> {
        match name {
            "id" => self.replace(value),
            other => Err(UuidError::ImmutableField(format!(
                "'{}' cannot be set",
                other
            ))),
        }
    }

    /// Always fails: the identifier can be replaced but never unset.
    ///
    /// # Errors
    ///
    /// Always returns [`UuidError::ImmutableField`].
    pub fn clear(&mut self) -> UuidResult<()> {
        Err(UuidError::ImmutableField("'id' cannot be unset".into()))
    }

    /// Compares against an arbitrary value through its string rendering.
    ///
    /// `other` matches when its `Display` output equals this UUID's text form. Another `Uuid`
    /// therefore matches exactly when it is equal.
    pub fn matches<T>(&self, other: &T) -> bool
    where
        T: fmt::Display + ?Sized,
    {
        self.text() == other.to_string()
    }
}

fn decode(value: &[u8]) -> UuidResult<RawUuid> {
    match value.len() {
        BINARY_LEN => RawUuid::from_slice(value)
            .map_err(|e| UuidError::InvalidFormat(format!("invalid binary UUID: {}", e))),
        TEXT_LEN => {
            let text = std::str::from_utf8(value).map_err(|_| {
                UuidError::InvalidFormat("text UUID is not valid UTF-8".into())
            })?;
            codec::binary(text).map(RawUuid::from_bytes)
        }
        len => {
            tracing::debug!(len, "rejected UUID value of unrecognised length");
            Err(UuidError::InvalidFormat(format!(
                "UUID must be {} bytes or {} characters, got length {}",
                BINARY_LEN, TEXT_LEN, len
            )))
        }
    }
}

impl Default for Uuid {
    /// The NIL UUID.
    fn default() -> Self {
        Self::nil()
    }
}

impl fmt::Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

impl FromStr for Uuid {
    type Err = UuidError;

    /// Equivalent to [`Uuid::parse`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse(s)
    }
}

impl TryFrom<&str> for Uuid {
    type Error = UuidError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Uuid::new(value)
    }
}

impl TryFrom<&[u8]> for Uuid {
    type Error = UuidError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        Uuid::new(value)
    }
}

impl From<[u8; BINARY_LEN]> for Uuid {
    fn from(bytes: [u8; BINARY_LEN]) -> Self {
        Uuid::from_bytes(bytes)
    }
}

impl From<RawUuid> for Uuid {
    fn from(uuid: RawUuid) -> Self {
        Self(uuid)
    }
}

impl From<Uuid> for RawUuid {
    fn from(uuid: Uuid) -> Self {
        uuid.0
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl PartialEq<str> for Uuid {
    fn eq(&self, other: &str) -> bool {
        self.text() == other
    }
}

impl PartialEq<&str> for Uuid {
    fn eq(&self, other: &&str) -> bool {
        self.text() == *other
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Uuid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.text())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Uuid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Uuid::new(&s).map_err(serde::de::Error::custom)
    }
}
