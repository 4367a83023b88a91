//! Random UUID generation.
//!
//! Generation is selected by two independent parameters: a [`GenerationMethod`] deciding where
//! the 16 bytes come from, and an [`OutputFormat`] deciding which form is returned.

use crate::codec;
use crate::constants::BINARY_LEN;
use crate::{Uuid, UuidError, UuidResult};
use chrono::Utc;
use rand::rngs::OsRng;
use rand::{CryptoRng, Rng, RngCore};
use std::{fmt, str::FromStr};

/// Source of the 16 bytes of a generated UUID.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GenerationMethod {
    /// Cryptographically strong randomness from a non-blocking source.
    #[default]
    SecureRandom,
    /// Legacy low-entropy generation: a time and PRNG based seed run through a digest.
    ///
    /// The seed carries far less than 128 bits of entropy. Do not rely on it for uniqueness
    /// or anything security relevant.
    WeakRandom,
    /// Randomness from a blocking source. Not implemented.
    BlockingRandom,
    /// Time-based (RFC 4122 version 1 style) generation. Not implemented.
    TimeBased,
}

impl fmt::Display for GenerationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::SecureRandom => "secure",
            Self::WeakRandom => "weak",
            Self::BlockingRandom => "blocking",
            Self::TimeBased => "time",
        };
        f.write_str(name)
    }
}

impl FromStr for GenerationMethod {
    type Err = UuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "secure" => Ok(Self::SecureRandom),
            "weak" => Ok(Self::WeakRandom),
            "blocking" => Ok(Self::BlockingRandom),
            "time" => Ok(Self::TimeBased),
            other => Err(UuidError::InvalidInput(format!(
                "generation method must be one of secure, weak, blocking, time; got '{}'",
                other
            ))),
        }
    }
}

/// Form in which a generated UUID is returned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    #[default]
    Binary,
    Text,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Binary => f.write_str("binary"),
            Self::Text => f.write_str("text"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = UuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "binary" => Ok(Self::Binary),
            "text" => Ok(Self::Text),
            other => Err(UuidError::InvalidInput(format!(
                "output format must be binary or text; got '{}'",
                other
            ))),
        }
    }
}

/// A freshly generated UUID in the requested [`OutputFormat`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Generated {
    Binary([u8; BINARY_LEN]),
    Text(String),
}

impl Generated {
    /// Returns the raw bytes if this was generated in binary form.
    pub fn as_binary(&self) -> Option<&[u8; BINARY_LEN]> {
        match self {
            Self::Binary(bytes) => Some(bytes),
            Self::Text(_) => None,
        }
    }

    /// Returns the text if this was generated in text form.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Binary(_) => None,
            Self::Text(text) => Some(text.as_str()),
        }
    }

    /// Wraps the generated value in a [`Uuid`].
    pub fn into_uuid(self) -> UuidResult<Uuid> {
        match self {
            Self::Binary(bytes) => Ok(Uuid::from_bytes(bytes)),
            Self::Text(text) => Uuid::parse(&text),
        }
    }
}

impl fmt::Display for Generated {
    /// Text form as is; binary form as 32 lowercase hex digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Binary(bytes) => f.write_str(&hex::encode(bytes)),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// Generates a UUID using the operating system's secure random source.
///
/// # Errors
///
/// Returns [`UuidError::NotImplemented`] for [`GenerationMethod::BlockingRandom`] and
/// [`GenerationMethod::TimeBased`], and [`UuidError::RandomSource`] if the OS source fails.
pub fn generate(method: GenerationMethod, format: OutputFormat) -> UuidResult<Generated> {
    generate_with(&mut OsRng, method, format)
}

/// Generates a UUID drawing secure randomness from `rng`.
///
/// `rng` is only consulted by [`GenerationMethod::SecureRandom`].
///
/// # Errors
///
/// As for [`generate`].
pub fn generate_with<R>(
    rng: &mut R,
    method: GenerationMethod,
    format: OutputFormat,
) -> UuidResult<Generated>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let bytes = match method {
        GenerationMethod::SecureRandom => {
            let mut bytes = [0u8; BINARY_LEN];
            rng.try_fill_bytes(&mut bytes)
                .map_err(|e| UuidError::RandomSource(e.to_string()))?;
            bytes
        }
        GenerationMethod::WeakRandom => {
            tracing::warn!(
                "generating UUID with the weak random method; uniqueness is not guaranteed"
            );
            weak_random_bytes()
        }
        GenerationMethod::BlockingRandom | GenerationMethod::TimeBased => {
            return Err(UuidError::NotImplemented(format!(
                "generation method '{}'",
                method
            )));
        }
    };

    tracing::debug!(%method, %format, "generated UUID");

    Ok(match format {
        OutputFormat::Binary => Generated::Binary(bytes),
        OutputFormat::Text => Generated::Text(codec::encode(&bytes)),
    })
}

fn weak_random_bytes() -> [u8; BINARY_LEN] {
    weak_digest(&weak_seed())
}

/// A non-cryptographic PRNG draw, the wall clock in nanoseconds and the process id.
fn weak_seed() -> String {
    let draw: u32 = rand::thread_rng().gen();
    let now = Utc::now();
    let nanos = now
        .timestamp_nanos_opt()
        .unwrap_or_else(|| now.timestamp_micros().saturating_mul(1_000));
    format!("{}{:x}.{}", draw, nanos, std::process::id())
}

fn weak_digest(seed: &str) -> [u8; BINARY_LEN] {
    md5::compute(seed.as_bytes()).0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::NIL_BYTES;
    use crate::{validate, ValidationForm};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_secure_binary_values_differ() {
        let first = generate(GenerationMethod::SecureRandom, OutputFormat::Binary).unwrap();
        let second = generate(GenerationMethod::SecureRandom, OutputFormat::Binary).unwrap();

        let first = first.as_binary().copied().unwrap();
        let second = second.as_binary().copied().unwrap();
        assert_ne!(first, second);
        assert_ne!(first, NIL_BYTES);
        assert_ne!(second, NIL_BYTES);
    }

    #[test]
    fn test_generate_defaults_to_secure_binary() {
        assert_eq!(GenerationMethod::default(), GenerationMethod::SecureRandom);
        assert_eq!(OutputFormat::default(), OutputFormat::Binary);

        let generated = generate(Default::default(), Default::default()).unwrap();
        assert!(generated.as_binary().is_some());
        assert!(generated.as_text().is_none());
    }

    #[test]
    fn test_generate_text_passes_validation() {
        let generated = generate(GenerationMethod::SecureRandom, OutputFormat::Text).unwrap();
        let text = generated.as_text().unwrap();

        assert!(validate(text, ValidationForm::Text));
        assert_eq!(generated.to_string(), text);
    }

    #[test]
    fn test_generate_with_seeded_rng_is_deterministic() {
        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);

        let a = generate_with(&mut rng_a, GenerationMethod::SecureRandom, OutputFormat::Text)
            .unwrap();
        let b = generate_with(&mut rng_b, GenerationMethod::SecureRandom, OutputFormat::Text)
            .unwrap();
        assert_eq!(a, b);

        let c = generate_with(&mut rng_a, GenerationMethod::SecureRandom, OutputFormat::Text)
            .unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_generate_binary_and_text_agree() {
        let mut rng_a = StdRng::seed_from_u64(7);
        let mut rng_b = StdRng::seed_from_u64(7);

        let bin = generate_with(&mut rng_a, GenerationMethod::SecureRandom, OutputFormat::Binary)
            .unwrap();
        let text = generate_with(&mut rng_b, GenerationMethod::SecureRandom, OutputFormat::Text)
            .unwrap();

        assert_eq!(bin.into_uuid().unwrap(), text.into_uuid().unwrap());
    }

    #[test]
    fn test_generate_weak_produces_valid_uuid() {
        let generated = generate(GenerationMethod::WeakRandom, OutputFormat::Text).unwrap();
        assert!(validate(generated.as_text().unwrap(), ValidationForm::Text));

        let generated = generate(GenerationMethod::WeakRandom, OutputFormat::Binary).unwrap();
        assert_eq!(generated.as_binary().unwrap().len(), 16);
    }

    #[test]
    fn test_weak_digest_is_md5_of_seed() {
        assert_eq!(
            hex::encode(weak_digest("")),
            "d41d8cd98f00b204e9800998ecf8427e"
        );
        assert_eq!(
            hex::encode(weak_digest("abc")),
            "900150983cd24fb0d6963f7d28e17f72"
        );
    }

    #[test]
    fn test_weak_seed_varies_between_calls() {
        let seeds: std::collections::HashSet<String> = (0..8).map(|_| weak_seed()).collect();
        assert!(seeds.len() > 1);
        assert!(seeds.iter().all(|s| s.ends_with(&format!(".{}", std::process::id()))));
    }

    #[test]
    fn test_generate_unimplemented_methods() {
        for method in [GenerationMethod::TimeBased, GenerationMethod::BlockingRandom] {
            for format in [OutputFormat::Binary, OutputFormat::Text] {
                match generate(method, format) {
                    Err(UuidError::NotImplemented(msg)) => {
                        assert!(msg.contains(&method.to_string()))
                    }
                    other => panic!("Expected NotImplemented error, got {:?}", other),
                }
            }
        }
    }

    #[test]
    fn test_generated_binary_display_is_hex() {
        let generated = Generated::Binary([0xab; 16]);
        assert_eq!(generated.to_string(), "ab".repeat(16));
    }

    #[test]
    fn test_method_and_format_parse() {
        for method in [
            GenerationMethod::SecureRandom,
            GenerationMethod::WeakRandom,
            GenerationMethod::BlockingRandom,
            GenerationMethod::TimeBased,
        ] {
            assert_eq!(method.to_string().parse::<GenerationMethod>().unwrap(), method);
        }
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("binary".parse::<OutputFormat>().unwrap(), OutputFormat::Binary);

        assert!(matches!(
            "md5".parse::<GenerationMethod>(),
            Err(UuidError::InvalidInput(_))
        ));
        assert!(matches!(
            "TEXT".parse::<OutputFormat>(),
            Err(UuidError::InvalidInput(_))
        ));
    }
}
