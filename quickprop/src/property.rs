//! Property definition traits for synchronous and asynchronous testing.

use std::any::Any;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;

use crate::error::PropertyError;

/// Something a predicate can return
///
/// `false` falsifies the property. `true` and `()` hold. `Err` counts as the
/// predicate raising, with the error's `Debug` text as the diagnostic.
pub trait PropertyOutcome {
    fn into_verdict(self) -> Result<(), PropertyError>;
}

impl PropertyOutcome for bool {
    fn into_verdict(self) -> Result<(), PropertyError> {
        if self {
            Ok(())
        } else {
            Err(PropertyError::Falsified)
        }
    }
}

impl PropertyOutcome for () {
    fn into_verdict(self) -> Result<(), PropertyError> {
        Ok(())
    }
}

impl<O: PropertyOutcome, E: fmt::Debug> PropertyOutcome for Result<O, E> {
    fn into_verdict(self) -> Result<(), PropertyError> {
        match self {
            Ok(outcome) => outcome.into_verdict(),
            Err(error) => Err(PropertyError::raised(format!("{:?}", error))),
        }
    }
}

/// Property definition trait for synchronous testing
pub trait Property<T> {
    /// Test the property with the given input
    fn test(&self, input: T) -> Result<(), PropertyError>;
}

impl<T, F, R> Property<T> for F
where
    F: Fn(T) -> R,
    R: PropertyOutcome,
{
    fn test(&self, input: T) -> Result<(), PropertyError> {
        self(input).into_verdict()
    }
}

/// Async property trait for asynchronous testing
pub trait AsyncProperty<T> {
    /// Test the property asynchronously with the given input
    fn test(&self, input: T) -> impl Future<Output = Result<(), PropertyError>> + Send;
}

impl<T, F, Fut, R> AsyncProperty<T> for F
where
    F: Fn(T) -> Fut,
    Fut: Future<Output = R> + Send,
    R: PropertyOutcome,
{
    fn test(&self, input: T) -> impl Future<Output = Result<(), PropertyError>> + Send {
        let pending = self(input);
        async move { pending.await.into_verdict() }
    }
}

/// A panic caught while a predicate ran
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CaughtPanic {
    pub message: String,
    /// `file:line:column` of the panic, when the hook saw it
    pub location: Option<String>,
}

thread_local! {
    static CAPTURING: Cell<bool> = const { Cell::new(false) };
    static PANIC_LOCATION: RefCell<Option<String>> = const { RefCell::new(None) };
}

static INSTALL_HOOK: Once = Once::new();

/// Wrap the process panic hook once. While this thread is capturing, the
/// location is stashed and nothing is printed; otherwise the previous hook
/// runs unchanged.
fn install_capture_hook() {
    INSTALL_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if CAPTURING.try_with(Cell::get).unwrap_or(false) {
                let location = info
                    .location()
                    .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()));
                let _ = PANIC_LOCATION.try_with(|slot| *slot.borrow_mut() = location);
            } else {
                previous(info);
            }
        }));
    });
}

/// Run `f`, turning a panic into a [`CaughtPanic`] without writing to stderr
pub(crate) fn catch_quietly<R>(f: impl FnOnce() -> R) -> Result<R, CaughtPanic> {
    install_capture_hook();
    PANIC_LOCATION.with(|slot| slot.borrow_mut().take());
    let was_capturing = CAPTURING.with(|flag| flag.replace(true));
    let outcome = panic::catch_unwind(AssertUnwindSafe(f));
    CAPTURING.with(|flag| flag.set(was_capturing));

    outcome.map_err(|payload| CaughtPanic {
        message: panic_message(&*payload),
        location: PANIC_LOCATION.with(|slot| slot.borrow_mut().take()),
    })
}

/// Turn a caught panic payload into a readable message
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "panic with a non-string payload".to_string()
    }
}
