//! The `Arbitrary` capability and its generic combinators.

use std::marker::PhantomData;
use std::sync::Arc;

use rand::RngCore;

use crate::config::ConfigError;

/// A reusable producer of freshly sampled values of `T`
///
/// Implementations hold only their construction-time configuration. Every
/// call to [`sample`](Arbitrary::sample) is independent of the previous ones,
/// and sampling never fails.
pub trait Arbitrary<T> {
    /// Draw one value using the supplied random source
    fn sample(&self, rng: &mut dyn RngCore) -> T;

    /// Draw one value from the thread-local random source
    fn arbitrary(&self) -> T {
        self.sample(&mut rand::thread_rng())
    }

    /// Derive a generator by transforming every sample with `f`
    fn map<U, F>(self, f: F) -> Map<Self, F, T>
    where
        Self: Sized,
        F: Fn(T) -> U,
    {
        Map {
            inner: self,
            mapper: f,
            _phantom: PhantomData,
        }
    }

    /// Erase the concrete generator type
    fn boxed(self) -> BoxedArbitrary<T>
    where
        Self: Sized + Send + Sync + 'static,
    {
        BoxedArbitrary::new(self)
    }
}

impl<T, G: Arbitrary<T> + ?Sized> Arbitrary<T> for &G {
    fn sample(&self, rng: &mut dyn RngCore) -> T {
        (**self).sample(rng)
    }
}

/// A type-erased, cheaply cloneable generator
pub struct BoxedArbitrary<T> {
    inner: Arc<dyn Arbitrary<T> + Send + Sync>,
}

impl<T> BoxedArbitrary<T> {
    pub fn new<G: Arbitrary<T> + Send + Sync + 'static>(generator: G) -> Self {
        Self {
            inner: Arc::new(generator),
        }
    }
}

impl<T> Clone for BoxedArbitrary<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> std::fmt::Debug for BoxedArbitrary<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoxedArbitrary")
            .field("type", &std::any::type_name::<T>())
            .finish()
    }
}

impl<T> Arbitrary<T> for BoxedArbitrary<T> {
    fn sample(&self, rng: &mut dyn RngCore) -> T {
        self.inner.sample(rng)
    }
}

/// See [`Arbitrary::map`]
#[derive(Clone)]
pub struct Map<G, F, T> {
    inner: G,
    mapper: F,
    _phantom: PhantomData<fn() -> T>,
}

impl<T, U, G, F> Arbitrary<U> for Map<G, F, T>
where
    G: Arbitrary<T>,
    F: Fn(T) -> U,
{
    fn sample(&self, rng: &mut dyn RngCore) -> U {
        (self.mapper)(self.inner.sample(rng))
    }
}

/// A generator that always produces the same value
#[derive(Debug, Clone)]
pub struct ConstantGenerator<T> {
    value: T,
}

/// Always yields a clone of `value`.
pub fn constant<T: Clone>(value: T) -> ConstantGenerator<T> {
    ConstantGenerator { value }
}

impl<T: Clone> Arbitrary<T> for ConstantGenerator<T> {
    fn sample(&self, _rng: &mut dyn RngCore) -> T {
        self.value.clone()
    }
}

/// A generator that picks uniformly from a fixed list of values
#[derive(Debug, Clone)]
pub struct OneOfGenerator<T> {
    values: Vec<T>,
}

/// Picks uniformly from `values`, which must not be empty.
pub fn one_of<T: Clone>(values: Vec<T>) -> Result<OneOfGenerator<T>, ConfigError> {
    if values.is_empty() {
        return Err(ConfigError::EmptyChoices);
    }
    Ok(OneOfGenerator { values })
}

impl<T: Clone> Arbitrary<T> for OneOfGenerator<T> {
    fn sample(&self, rng: &mut dyn RngCore) -> T {
        use rand::Rng;
        let index = rng.gen_range(0..self.values.len());
        self.values[index].clone()
    }
}

/// See [`from_fn`]
#[derive(Clone)]
pub struct FnGenerator<F>(F);

/// Build a generator from a sampling closure.
///
/// ```rust
/// use quickprop::{Arbitrary, from_fn};
/// use rand::Rng;
///
/// let dice = from_fn(|rng| rng.gen_range(1..=6u8));
/// let roll = dice.arbitrary();
/// assert!((1..=6).contains(&roll));
/// ```
pub fn from_fn<T, F>(f: F) -> FnGenerator<F>
where
    F: Fn(&mut dyn RngCore) -> T,
{
    FnGenerator(f)
}

impl<T, F: Fn(&mut dyn RngCore) -> T> Arbitrary<T> for FnGenerator<F> {
    fn sample(&self, rng: &mut dyn RngCore) -> T {
        (self.0)(rng)
    }
}

macro_rules! tuple_arbitrary_impl {
    ($($gen:ident: $var:ident: $ty:ident),+) => {
        impl<$($ty, $gen: Arbitrary<$ty>),+> Arbitrary<($($ty,)+)> for ($($gen,)+) {
            fn sample(&self, rng: &mut dyn RngCore) -> ($($ty,)+) {
                let ($($var,)+) = self;
                ($($var.sample(rng),)+)
            }
        }
    };
}

tuple_arbitrary_impl!(GA: a: A, GB: b: B);
tuple_arbitrary_impl!(GA: a: A, GB: b: B, GC: c: C);
tuple_arbitrary_impl!(GA: a: A, GB: b: B, GC: c: C, GD: d: D);
tuple_arbitrary_impl!(GA: a: A, GB: b: B, GC: c: C, GD: d: D, GE: e: E);
tuple_arbitrary_impl!(GA: a: A, GB: b: B, GC: c: C, GD: d: D, GE: e: E, GF: f: F);
