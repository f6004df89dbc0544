//! Configuration types for controlling runs and generator parameters.

use std::fmt;

/// Characters `strings` draws from unless told otherwise.
pub const ALPHANUMERIC: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Printable ASCII punctuation, for widening an alphabet.
pub const SYMBOLS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Whitespace characters, for widening an alphabet.
pub const WHITESPACE: &str = " \t\n\r";

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Numeric bounds that do not describe a usable range
    InvalidRange { min: String, max: String },
    /// Length bounds with `min > max`
    InvalidLengthRange { min: usize, max: usize },
    /// An alphabet with no characters while non-empty strings are requested
    EmptyAlphabet,
    /// A choice generator built from an empty list
    EmptyChoices,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidRange { min, max } => {
                write!(f, "Invalid range: [{}, {}] is empty or unbounded", min, max)
            }
            ConfigError::InvalidLengthRange { min, max } => {
                write!(
                    f,
                    "Invalid length range: min_length {} exceeds max_length {}",
                    min, max
                )
            }
            ConfigError::EmptyAlphabet => {
                write!(f, "Alphabet is empty (at least one character is required)")
            }
            ConfigError::EmptyChoices => {
                write!(f, "Cannot choose from an empty list of values")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Configuration for a single run
#[derive(Debug, Clone, PartialEq)]
pub struct TestConfig {
    /// Number of trials to run; zero is a no-op that succeeds
    pub iterations: usize,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self { iterations: 100 }
    }
}

impl TestConfig {
    /// Create a configuration running `iterations` trials
    pub fn with_iterations(iterations: usize) -> Self {
        Self { iterations }
    }
}

/// Bounds for `numbers`: samples land in `[min, max)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberConfig {
    pub min: f64,
    pub max: f64,
}

impl Default for NumberConfig {
    fn default() -> Self {
        Self {
            min: -50.0,
            max: 50.0,
        }
    }
}

impl NumberConfig {
    /// Reject inverted, empty or non-finite bounds, and bounds whose span
    /// `max - min` overflows to infinity
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_float_range(self.min, self.max)
    }
}

pub(crate) fn validate_float_range<T>(min: T, max: T) -> Result<(), ConfigError>
where
    T: num_traits::Float + fmt::Display,
{
    // Uniform sampling scales by `max - min`, which must stay finite too.
    if !min.is_finite() || !max.is_finite() || min >= max || !(max - min).is_finite() {
        return Err(ConfigError::InvalidRange {
            min: min.to_string(),
            max: max.to_string(),
        });
    }
    Ok(())
}

/// Parameters for `strings`
#[derive(Debug, Clone, PartialEq)]
pub struct StringConfig {
    /// Shortest generated body, in characters (prefix not counted)
    pub min_length: usize,
    /// Longest generated body, inclusive
    pub max_length: usize,
    /// Characters to draw from
    pub alphabet: String,
    /// Fixed text prepended to every sample
    pub prefix: Option<String>,
}

impl Default for StringConfig {
    fn default() -> Self {
        Self {
            min_length: 7,
            max_length: 100,
            alphabet: ALPHANUMERIC.to_string(),
            prefix: None,
        }
    }
}

impl StringConfig {
    /// Length bounds, keeping the default alphabet
    pub fn with_lengths(min_length: usize, max_length: usize) -> Self {
        Self {
            min_length,
            max_length,
            ..Self::default()
        }
    }

    /// Replace the alphabet
    pub fn alphabet(mut self, alphabet: impl Into<String>) -> Self {
        self.alphabet = alphabet.into();
        self
    }

    /// Append extra characters to the current alphabet
    pub fn extend_alphabet(mut self, extra: &str) -> Self {
        self.alphabet.push_str(extra);
        self
    }

    /// Prepend `prefix` to every sample
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_length > self.max_length {
            return Err(ConfigError::InvalidLengthRange {
                min: self.min_length,
                max: self.max_length,
            });
        }
        if self.max_length > 0 && self.alphabet.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }
        Ok(())
    }
}

/// Parameters for `arrays`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayConfig {
    /// Exclusive upper bound on the generated length
    pub max_length: usize,
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self { max_length: 10 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        assert_eq!(TestConfig::default().iterations, 100);
        assert_eq!(NumberConfig::default(), NumberConfig { min: -50.0, max: 50.0 });
        assert_eq!(ArrayConfig::default().max_length, 10);

        let strings = StringConfig::default();
        assert_eq!(strings.min_length, 7);
        assert_eq!(strings.max_length, 100);
        assert_eq!(strings.alphabet, ALPHANUMERIC);
        assert!(strings.prefix.is_none());
    }

    #[test]
    fn test_number_config_validation() {
        assert!(NumberConfig::default().validate().is_ok());
        assert!(NumberConfig { min: 0.0, max: 1.0 }.validate().is_ok());

        assert!(NumberConfig { min: 1.0, max: 1.0 }.validate().is_err());
        assert!(NumberConfig { min: 2.0, max: 1.0 }.validate().is_err());
        assert!(
            NumberConfig {
                min: f64::NEG_INFINITY,
                max: 0.0
            }
            .validate()
            .is_err()
        );
        assert!(
            NumberConfig {
                min: 0.0,
                max: f64::NAN
            }
            .validate()
            .is_err()
        );
    }

    #[test]
    fn test_number_config_rejects_overflowing_span() {
        let widest = NumberConfig {
            min: f64::MIN,
            max: f64::MAX,
        };
        assert!(matches!(
            widest.validate(),
            Err(ConfigError::InvalidRange { .. })
        ));
        assert!(
            NumberConfig {
                min: -1e308,
                max: 1e308
            }
            .validate()
            .is_err()
        );
        assert!(
            NumberConfig {
                min: -1e307,
                max: 1e307
            }
            .validate()
            .is_ok()
        );
    }

    #[test]
    fn test_string_config_validation() {
        assert!(StringConfig::default().validate().is_ok());
        assert!(StringConfig::with_lengths(0, 0).validate().is_ok());
        assert!(StringConfig::with_lengths(0, 0).alphabet("").validate().is_ok());

        assert_eq!(
            StringConfig::with_lengths(5, 4).validate(),
            Err(ConfigError::InvalidLengthRange { min: 5, max: 4 })
        );
        assert_eq!(
            StringConfig::with_lengths(0, 3).alphabet("").validate(),
            Err(ConfigError::EmptyAlphabet)
        );
    }

    #[test]
    fn test_string_config_builders() {
        let config = StringConfig::with_lengths(1, 3)
            .extend_alphabet(SYMBOLS)
            .extend_alphabet(WHITESPACE)
            .prefix("key-");

        assert!(config.alphabet.starts_with(ALPHANUMERIC));
        assert!(config.alphabet.ends_with(WHITESPACE));
        assert_eq!(config.prefix.as_deref(), Some("key-"));
    }

    #[test]
    fn test_config_error_display() {
        let error = ConfigError::InvalidRange {
            min: "2".to_string(),
            max: "1".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Invalid range: [2, 1] is empty or unbounded"
        );

        let error = ConfigError::InvalidLengthRange { min: 5, max: 4 };
        assert_eq!(
            format!("{}", error),
            "Invalid length range: min_length 5 exceeds max_length 4"
        );

        assert_eq!(
            format!("{}", ConfigError::EmptyChoices),
            "Cannot choose from an empty list of values"
        );
    }
}
