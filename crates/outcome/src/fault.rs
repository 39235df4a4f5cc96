use std::{
    any::Any,
    panic::{catch_unwind, resume_unwind, AssertUnwindSafe},
};

use crate::Outcome;

/// A value that was raised instead of returned: the payload of a panic, or
/// the error a fallible future completed with.
///
/// The payload is kept exactly as it was raised. `panic!("boom")` is stored
/// as a `&'static str`, `panic!("{x}")` as a `String`, and
/// `std::panic::panic_any(value)` as whatever `value` was.
pub struct Fault {
    payload: Box<dyn Any + Send + 'static>,
}

impl Fault {
    /// Wraps `value` as the payload. A `Fault` is never nested inside another one.
    pub fn new<T>(value: T) -> Self
    where
        T: Any + Send + 'static,
    {
        Self::from_payload(Box::new(value))
    }

    /// Adopts an already boxed payload, as handed out by `catch_unwind` or
    /// `JoinError::into_panic`.
    pub fn from_payload(payload: Box<dyn Any + Send + 'static>) -> Self {
        match payload.downcast::<Self>() {
            Ok(fault) => *fault,
            Err(payload) => Self { payload },
        }
    }

    pub fn is<T: Any>(&self) -> bool {
        self.payload.is::<T>()
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.payload.downcast_ref()
    }

    /// Takes the payload out as a `T`, or gives the fault back if it holds
    /// something else.
    pub fn downcast<T: Any>(self) -> Result<T, Self> {
        match self.payload.downcast::<T>() {
            Ok(value) => Ok(*value),
            Err(payload) => Err(Self { payload }),
        }
    }

    /// The panic message, when the payload is one of the two types the
    /// `panic!` macro produces.
    pub fn message(&self) -> Option<&str> {
        if let Some(msg) = self.downcast_ref::<&'static str>() {
            return Some(*msg);
        }
        self.downcast_ref::<String>().map(String::as_str)
    }

    pub fn payload(&self) -> &(dyn Any + Send + 'static) {
        &*self.payload
    }

    pub fn into_payload(self) -> Box<dyn Any + Send + 'static> {
        self.payload
    }

    /// Raises the payload again on the current thread.
    pub fn resume(self) -> ! {
        resume_unwind(self.payload)
    }
}

impl From<Box<dyn Any + Send + 'static>> for Fault {
    fn from(payload: Box<dyn Any + Send + 'static>) -> Self {
        Self::from_payload(payload)
    }
}

impl std::fmt::Debug for Fault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.message() {
            Some(msg) => f.debug_tuple("Fault").field(&msg).finish(),
            None => f.debug_tuple("Fault").field(&format_args!("..")).finish(),
        }
    }
}

impl std::fmt::Display for Fault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.message() {
            Some(msg) => f.write_str(msg),
            None => f.write_str("opaque fault payload"),
        }
    }
}

impl std::error::Error for Fault {}

impl<V> Outcome<V, Fault> {
    /// Runs `f` once, right now, turning a panic into `Error(fault)`.
    ///
    /// Only unwinding panics can be captured: with `panic = "abort"` the
    /// process still aborts. The installed panic hook runs as usual before the
    /// fault is captured, so the default hook still prints the message.
    ///
    /// ```rust
    /// use outcome::{Fault, Outcome};
    ///
    /// let answer = Outcome::from_execution(|| 42);
    /// assert_eq!(answer.to_option(), Some(42));
    ///
    /// let boom = Outcome::<(), Fault>::from_execution(|| panic!("boom"));
    /// assert_eq!(boom.to_error_option().and_then(|f| f.downcast::<&str>().ok()), Some("boom"));
    /// ```
    pub fn from_execution(f: impl FnOnce() -> V) -> Self {
        match catch_unwind(AssertUnwindSafe(f)) {
            Ok(value) => Self::Ok(value),
            Err(payload) => {
                let fault = Fault::from_payload(payload);
                log::debug!("captured fault from execution: {fault}");
                Self::Error(fault)
            }
        }
    }
}
