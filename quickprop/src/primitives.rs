//! Generators for numbers, booleans, strings, sequences and records.

use std::fmt;

use rand::distributions::uniform::SampleUniform;
use rand::{Rng, RngCore};

use crate::arbitrary::Arbitrary;
use crate::config::{ArrayConfig, ConfigError, NumberConfig, StringConfig, validate_float_range};

/// Generator for boolean values
#[derive(Debug, Clone, Copy, Default)]
pub struct BoolGenerator;

/// Yields `true` or `false` with equal probability.
pub fn booleans() -> BoolGenerator {
    BoolGenerator
}

impl Arbitrary<bool> for BoolGenerator {
    fn sample(&self, rng: &mut dyn RngCore) -> bool {
        rng.gen_bool(0.5)
    }
}

/// Generator for floating-point values in a half-open range
#[derive(Debug, Clone, Copy)]
pub struct NumberGenerator<T> {
    min: T,
    max: T,
}

impl<T> NumberGenerator<T>
where
    T: num_traits::Float + fmt::Display,
{
    /// Samples uniformly from `[min, max)`. Both bounds must be finite,
    /// `min < max`, and `max - min` must not overflow.
    pub fn new(min: T, max: T) -> Result<Self, ConfigError> {
        validate_float_range(min, max)?;
        Ok(Self { min, max })
    }

    pub fn min(&self) -> T {
        self.min
    }

    pub fn max(&self) -> T {
        self.max
    }
}

impl Default for NumberGenerator<f64> {
    fn default() -> Self {
        let NumberConfig { min, max } = NumberConfig::default();
        Self { min, max }
    }
}

/// Uniform `f64` samples in `[config.min, config.max)`.
pub fn numbers(config: NumberConfig) -> Result<NumberGenerator<f64>, ConfigError> {
    NumberGenerator::new(config.min, config.max)
}

impl<T> Arbitrary<T> for NumberGenerator<T>
where
    T: SampleUniform + PartialOrd + Copy,
{
    fn sample(&self, rng: &mut dyn RngCore) -> T {
        rng.gen_range(self.min..self.max)
    }
}

/// Generator for integers in an inclusive range
#[derive(Debug, Clone, Copy)]
pub struct IntGenerator<T> {
    min: T,
    max: T,
}

/// Uniform integers in `[min, max]`; rejects `min > max`.
pub fn integers<T>(min: T, max: T) -> Result<IntGenerator<T>, ConfigError>
where
    T: num_traits::PrimInt + fmt::Display,
{
    if min > max {
        return Err(ConfigError::InvalidRange {
            min: min.to_string(),
            max: max.to_string(),
        });
    }
    Ok(IntGenerator { min, max })
}

impl<T> Arbitrary<T> for IntGenerator<T>
where
    T: SampleUniform + PartialOrd + Copy,
{
    fn sample(&self, rng: &mut dyn RngCore) -> T {
        rng.gen_range(self.min..=self.max)
    }
}

/// Generator for strings drawn from an alphabet
#[derive(Debug, Clone)]
pub struct StringGenerator {
    alphabet: Vec<char>,
    min_length: usize,
    max_length: usize,
    prefix: String,
}

/// Strings whose body length lies in `[min_length, max_length]`, each
/// character drawn independently from the alphabet, with the optional prefix
/// prepended.
///
/// ```rust
/// use quickprop::{Arbitrary, StringConfig, strings};
///
/// let keys = strings(StringConfig::with_lengths(4, 8).prefix("user:")).unwrap();
/// let key = keys.arbitrary();
/// assert!(key.starts_with("user:"));
/// ```
pub fn strings(config: StringConfig) -> Result<StringGenerator, ConfigError> {
    config.validate()?;
    Ok(StringGenerator {
        alphabet: config.alphabet.chars().collect(),
        min_length: config.min_length,
        max_length: config.max_length,
        prefix: config.prefix.unwrap_or_default(),
    })
}

impl Arbitrary<String> for StringGenerator {
    fn sample(&self, rng: &mut dyn RngCore) -> String {
        let length = rng.gen_range(self.min_length..=self.max_length);
        let mut value = String::with_capacity(self.prefix.len() + length);
        value.push_str(&self.prefix);
        for _ in 0..length {
            value.push(self.alphabet[rng.gen_range(0..self.alphabet.len())]);
        }
        value
    }
}

/// Generator for `Vec<T>` sequences
#[derive(Debug, Clone)]
pub struct ArrayGenerator<G> {
    element: G,
    max_length: usize,
}

/// Vectors of length in `[0, config.max_length)`, elements sampled in order
/// from `element`. A `max_length` of zero always yields an empty vector.
pub fn arrays<G>(element: G, config: ArrayConfig) -> ArrayGenerator<G> {
    ArrayGenerator {
        element,
        max_length: config.max_length,
    }
}

impl<T, G: Arbitrary<T>> Arbitrary<Vec<T>> for ArrayGenerator<G> {
    fn sample(&self, rng: &mut dyn RngCore) -> Vec<T> {
        if self.max_length == 0 {
            return Vec::new();
        }
        let length = rng.gen_range(0..self.max_length);
        (0..length).map(|_| self.element.sample(rng)).collect()
    }
}

/// Types with a compile-time shape: one generator per named field.
///
/// Implemented by `#[derive(Record)]`, which also defines the shape struct.
pub trait Record: Sized {
    type Shape: Arbitrary<Self>;
}

/// Generator built from a record shape
#[derive(Debug, Clone)]
pub struct RecordGenerator<S> {
    shape: S,
}

/// Every sample populates each field of the shape exactly once.
pub fn records<S>(shape: S) -> RecordGenerator<S> {
    RecordGenerator { shape }
}

impl<T, S: Arbitrary<T>> Arbitrary<T> for RecordGenerator<S> {
    fn sample(&self, rng: &mut dyn RngCore) -> T {
        self.shape.sample(rng)
    }
}

/// Build a record generator from a struct literal of field generators.
///
/// The generator expressions are evaluated once, up front; each sample then
/// invokes every field's generator exactly once.
///
/// ```rust
/// use quickprop::{Arbitrary, booleans, record, NumberConfig, numbers};
///
/// #[derive(Debug)]
/// struct Point {
///     x: f64,
///     visible: bool,
/// }
///
/// let points = record!(Point {
///     x: numbers(NumberConfig { min: 0.0, max: 1.0 }).unwrap(),
///     visible: booleans(),
/// });
/// let point: Point = points.arbitrary();
/// assert!(point.x >= 0.0 && point.x < 1.0);
/// ```
#[macro_export]
macro_rules! record {
    ($($ty:ident)::+ { $($field:ident : $generator:expr),+ $(,)? }) => {{
        let generators = ($($generator,)+);
        $crate::records($crate::from_fn(move |rng: &mut dyn $crate::RngCore| {
            let ($(ref $field,)+) = generators;
            $($ty)::+ {
                $($field: $crate::Arbitrary::sample($field, rng),)+
            }
        }))
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arbitrary::constant;
    use crate::config::{ALPHANUMERIC, SYMBOLS};
    use rand::thread_rng;

    #[test]
    fn test_bool_generator_produces_both_values() {
        let generator = booleans();
        let mut rng = thread_rng();

        let trues = (0..1000).filter(|_| generator.sample(&mut rng)).count();
        assert!(trues > 0 && trues < 1000, "got {} trues out of 1000", trues);
    }

    #[test]
    fn test_number_generator_range() {
        let generator = numbers(NumberConfig { min: 0.0, max: 1.0 }).expect("valid range");
        let mut rng = thread_rng();

        for _ in 0..1000 {
            let value = generator.sample(&mut rng);
            assert!((0.0..1.0).contains(&value), "{} out of range", value);
        }
    }

    #[test]
    fn test_number_generator_defaults() {
        let generator = NumberGenerator::default();
        assert_eq!(generator.min(), -50.0);
        assert_eq!(generator.max(), 50.0);

        let mut rng = thread_rng();
        for _ in 0..200 {
            let value = generator.sample(&mut rng);
            assert!((-50.0..50.0).contains(&value));
        }
    }

    #[test]
    fn test_number_generator_rejects_bad_bounds() {
        assert!(numbers(NumberConfig { min: 1.0, max: 0.0 }).is_err());
        assert!(numbers(NumberConfig { min: 3.0, max: 3.0 }).is_err());
        assert!(NumberGenerator::<f32>::new(0.0, f32::INFINITY).is_err());
    }

    #[test]
    fn test_number_generator_rejects_overflowing_span() {
        assert!(matches!(
            numbers(NumberConfig {
                min: f64::MIN,
                max: f64::MAX
            }),
            Err(ConfigError::InvalidRange { .. })
        ));
        assert!(matches!(
            numbers(NumberConfig {
                min: -1e308,
                max: 1e308
            }),
            Err(ConfigError::InvalidRange { .. })
        ));
        assert!(NumberGenerator::<f32>::new(f32::MIN, f32::MAX).is_err());
        assert!(NumberGenerator::<f32>::new(-3e38, 3e38).is_err());
    }

    #[test]
    fn test_number_generator_samples_wide_finite_span() {
        let generator = numbers(NumberConfig {
            min: -1e307,
            max: 1e307,
        })
        .expect("span is finite");
        let mut rng = thread_rng();

        for _ in 0..1000 {
            let value = generator.sample(&mut rng);
            assert!(value.is_finite());
            assert!((-1e307..1e307).contains(&value), "{} out of range", value);
        }

        let narrow = NumberGenerator::<f32>::new(-1e38, 1e38).expect("span is finite");
        for _ in 0..200 {
            let value: f32 = narrow.sample(&mut rng);
            assert!(value.is_finite());
        }
    }

    #[test]
    fn test_f32_number_generator() {
        let generator = NumberGenerator::<f32>::new(-1.0, 1.0).expect("valid range");
        let mut rng = thread_rng();
        for _ in 0..200 {
            let value: f32 = generator.sample(&mut rng);
            assert!((-1.0..1.0).contains(&value));
        }
    }

    #[test]
    fn test_int_generator() {
        let generator = integers(1, 10).expect("valid range");
        let mut rng = thread_rng();

        for _ in 0..100 {
            let value: i32 = generator.sample(&mut rng);
            assert!((1..=10).contains(&value));
        }

        let single = integers(7u8, 7u8).expect("single value range");
        assert_eq!(single.arbitrary(), 7);

        assert!(integers(10i64, 1i64).is_err());
    }

    #[test]
    fn test_string_generator_lengths() {
        let generator = strings(StringConfig::with_lengths(2, 10)).expect("valid config");
        let mut rng = thread_rng();

        for _ in 0..200 {
            let value = generator.sample(&mut rng);
            let length = value.chars().count();
            assert!((2..=10).contains(&length), "length {} for {:?}", length, value);
            assert!(value.chars().all(|c| ALPHANUMERIC.contains(c)));
        }
    }

    #[test]
    fn test_string_generator_empty() {
        let generator = strings(StringConfig::with_lengths(0, 0)).expect("valid config");
        let mut rng = thread_rng();

        for _ in 0..20 {
            assert_eq!(generator.sample(&mut rng), "");
        }
    }

    #[test]
    fn test_string_generator_prefix() {
        let generator =
            strings(StringConfig::with_lengths(0, 0).prefix("id-")).expect("valid config");
        assert_eq!(generator.arbitrary(), "id-");

        let generator =
            strings(StringConfig::with_lengths(3, 3).prefix("id-")).expect("valid config");
        let value = generator.arbitrary();
        assert!(value.starts_with("id-"));
        assert_eq!(value.chars().count(), 6);
    }

    #[test]
    fn test_string_generator_custom_alphabet() {
        let generator = strings(StringConfig::with_lengths(5, 20).alphabet(SYMBOLS))
            .expect("valid config");
        let mut rng = thread_rng();

        for _ in 0..100 {
            let value = generator.sample(&mut rng);
            assert!(value.chars().all(|c| SYMBOLS.contains(c)));
        }
    }

    #[test]
    fn test_string_generator_multibyte_alphabet() {
        let generator =
            strings(StringConfig::with_lengths(4, 4).alphabet("äöü")).expect("valid config");
        let value = generator.arbitrary();
        assert_eq!(value.chars().count(), 4);
        assert!(value.chars().all(|c| "äöü".contains(c)));
    }

    #[test]
    fn test_string_generator_rejects_bad_config() {
        assert!(strings(StringConfig::with_lengths(10, 2)).is_err());
        assert!(strings(StringConfig::with_lengths(1, 2).alphabet("")).is_err());
    }

    #[test]
    fn test_array_generator_lengths() {
        let generator = arrays(booleans(), ArrayConfig { max_length: 5 });
        let mut rng = thread_rng();
        let mut seen_empty = false;

        for _ in 0..500 {
            let value: Vec<bool> = generator.sample(&mut rng);
            assert!(value.len() < 5);
            seen_empty |= value.is_empty();
        }
        assert!(seen_empty);
    }

    #[test]
    fn test_array_generator_zero_max_length() {
        let generator = arrays(booleans(), ArrayConfig { max_length: 0 });
        let mut rng = thread_rng();

        for _ in 0..20 {
            let value: Vec<bool> = generator.sample(&mut rng);
            assert!(value.is_empty());
        }
    }

    #[test]
    fn test_array_generator_keeps_duplicates() {
        let generator = arrays(constant(3), ArrayConfig { max_length: 50 });
        let mut rng = thread_rng();

        let value = (0..100)
            .map(|_| generator.sample(&mut rng))
            .find(|v: &Vec<i32>| v.len() > 1)
            .expect("some vector longer than one element");
        assert!(value.iter().all(|&x| x == 3));
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Account {
        owner: String,
        balance: f64,
        frozen: bool,
    }

    #[test]
    fn test_record_macro_populates_every_field() {
        let accounts = record!(Account {
            owner: strings(StringConfig::with_lengths(1, 5).prefix("acct-")).unwrap(),
            balance: numbers(NumberConfig { min: 0.0, max: 100.0 }).unwrap(),
            frozen: constant(true),
        });
        let mut rng = thread_rng();

        for _ in 0..100 {
            let account: Account = accounts.sample(&mut rng);
            assert!(account.owner.starts_with("acct-"));
            assert!((0.0..100.0).contains(&account.balance));
            assert!(account.frozen);
        }
    }

    #[test]
    fn test_records_wraps_any_shape() {
        let pairs = records((constant(1), constant("a")));
        assert_eq!(pairs.arbitrary(), (1, "a"));
    }
}
