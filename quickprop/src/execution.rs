//! Trial loop for running synchronous and asynchronous properties.

use std::fmt;
use std::future::Future;
use std::pin::pin;
use std::task::Poll;

use rand::rngs::StdRng;

use crate::arbitrary::Arbitrary;
use crate::config::TestConfig;
use crate::error::{PropertyError, TestFailure};
use crate::property::{AsyncProperty, CaughtPanic, Property, catch_quietly};
use crate::rng::create_rng;
use crate::trace::{TraceConfig, global_trace_config};

/// Runs properties against sampled values until one fails or the iteration
/// budget is spent.
///
/// ```rust
/// use quickprop::{Runner, TestConfig, TraceConfig, booleans};
///
/// let runner = Runner::new(TestConfig::default(), TraceConfig::disabled()).iterations(50);
/// assert!(runner.run(|b: bool| b || !b, booleans()).is_ok());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Runner {
    config: TestConfig,
    trace: TraceConfig,
}

impl Runner {
    pub fn new(config: TestConfig, trace: TraceConfig) -> Self {
        Self { config, trace }
    }

    /// Default configuration with the process-wide trace setting
    pub fn from_env() -> Self {
        Self::new(TestConfig::default(), global_trace_config().clone())
    }

    /// Set the number of trials
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.config.iterations = iterations;
        self
    }

    /// Replace the trace configuration
    pub fn trace(mut self, trace: TraceConfig) -> Self {
        self.trace = trace;
        self
    }

    pub fn config(&self) -> &TestConfig {
        &self.config
    }

    /// Execute the property, stopping at the first counter-example
    pub fn run<T, G, P>(&self, property: P, arbitrary: G) -> Result<(), TestFailure<T>>
    where
        T: Clone + fmt::Debug,
        G: Arbitrary<T>,
        P: Property<T>,
    {
        let iterations = self.config.iterations;
        let mut rng = create_rng();
        log::debug!("starting run of {} trials", iterations);

        for trial in 1..=iterations {
            let (value, serialized) = self.next_value(&arbitrary, &mut rng, trial);

            let verdict = catch_quietly(|| property.test(value.clone()));

            if let Some((cause, location)) = failed(verdict) {
                return Err(self.counter_example(value, serialized, trial, cause, location));
            }
            log::trace!("trial {}/{} passed", trial, iterations);
        }

        log::debug!("all {} trials passed", iterations);
        Ok(())
    }

    /// Execute an async property; each trial is awaited before the next
    /// value is sampled.
    pub async fn run_async<T, G, P>(&self, property: P, arbitrary: G) -> Result<(), TestFailure<T>>
    where
        T: Clone + fmt::Debug,
        G: Arbitrary<T>,
        P: AsyncProperty<T>,
    {
        let iterations = self.config.iterations;
        let mut rng = create_rng();
        log::debug!("starting async run of {} trials", iterations);

        for trial in 1..=iterations {
            let (value, serialized) = self.next_value(&arbitrary, &mut rng, trial);

            let verdict = match catch_quietly(|| property.test(value.clone())) {
                Ok(pending) => {
                    // Capture per poll: the task may resume on another thread.
                    let mut pending = pin!(pending);
                    futures::future::poll_fn(|cx| {
                        match catch_quietly(|| pending.as_mut().poll(cx)) {
                            Ok(Poll::Pending) => Poll::Pending,
                            Ok(Poll::Ready(verdict)) => Poll::Ready(Ok(verdict)),
                            Err(caught) => Poll::Ready(Err(caught)),
                        }
                    })
                    .await
                }
                Err(caught) => Err(caught),
            };

            if let Some((cause, location)) = failed(verdict) {
                return Err(self.counter_example(value, serialized, trial, cause, location));
            }
            log::trace!("trial {}/{} passed", trial, iterations);
        }

        log::debug!("all {} async trials passed", iterations);
        Ok(())
    }

    fn next_value<T, G>(&self, arbitrary: &G, rng: &mut StdRng, trial: usize) -> (T, String)
    where
        T: fmt::Debug,
        G: Arbitrary<T>,
    {
        let value = arbitrary.sample(rng);
        let serialized = format!("{:?}", value);
        self.trace.record(trial, self.config.iterations, &serialized);
        (value, serialized)
    }

    fn counter_example<T>(
        &self,
        value: T,
        serialized: String,
        trial: usize,
        cause: PropertyError,
        location: Option<String>,
    ) -> TestFailure<T> {
        let failure = TestFailure::new(value, serialized, trial, self.config.iterations, cause)
            .with_location(location);
        log::warn!("{}", failure.summary());
        failure
    }
}

/// The failure cause of a trial, with the panic location when it panicked
fn failed(
    verdict: Result<Result<(), PropertyError>, CaughtPanic>,
) -> Option<(PropertyError, Option<String>)> {
    match verdict {
        Ok(Ok(())) => None,
        Ok(Err(cause)) => Some((cause, None)),
        Err(caught) => Some((PropertyError::raised(caught.message), caught.location)),
    }
}

/// Check `property` against 100 sampled values
pub fn quickcheck<T, G, P>(property: P, arbitrary: G) -> Result<(), TestFailure<T>>
where
    T: Clone + fmt::Debug,
    G: Arbitrary<T>,
    P: Property<T>,
{
    Runner::from_env().run(property, arbitrary)
}

/// Check `property` against `iterations` sampled values
pub fn quickcheck_with_iterations<T, G, P>(
    property: P,
    arbitrary: G,
    iterations: usize,
) -> Result<(), TestFailure<T>>
where
    T: Clone + fmt::Debug,
    G: Arbitrary<T>,
    P: Property<T>,
{
    Runner::from_env()
        .iterations(iterations)
        .run(property, arbitrary)
}

/// Check an async `property` against 100 sampled values
pub async fn quickcheck_async<T, G, P>(property: P, arbitrary: G) -> Result<(), TestFailure<T>>
where
    T: Clone + fmt::Debug,
    G: Arbitrary<T>,
    P: AsyncProperty<T>,
{
    Runner::from_env().run_async(property, arbitrary).await
}

/// Check an async `property` against `iterations` sampled values
pub async fn quickcheck_async_with_iterations<T, G, P>(
    property: P,
    arbitrary: G,
    iterations: usize,
) -> Result<(), TestFailure<T>>
where
    T: Clone + fmt::Debug,
    G: Arbitrary<T>,
    P: AsyncProperty<T>,
{
    Runner::from_env()
        .iterations(iterations)
        .run_async(property, arbitrary)
        .await
}

/// Run a property and panic with the counter-example if one is found
///
/// ```rust
/// use quickprop::{assert_quickcheck, integers};
///
/// assert_quickcheck!(|x: i32| x.abs() >= 0, integers(-1000, 1000).unwrap());
/// assert_quickcheck!(|x: i32| x * 2 / 2 == x, integers(-1000, 1000).unwrap(), iterations = 500);
/// ```
#[macro_export]
macro_rules! assert_quickcheck {
    ($property:expr, $arbitrary:expr $(,)?) => {
        if let ::std::result::Result::Err(failure) = $crate::quickcheck($property, $arbitrary) {
            panic!("{}", failure);
        }
    };
    ($property:expr, $arbitrary:expr, iterations = $iterations:expr $(,)?) => {
        if let ::std::result::Result::Err(failure) =
            $crate::quickcheck_with_iterations($property, $arbitrary, $iterations)
        {
            panic!("{}", failure);
        }
    };
}
