use crate::Tag;

/// Either a success value (`Ok`) or a failure value (`Error`).
///
/// Every combinator consumes the receiver and hands back a new outcome (or
/// the receiver itself, for operations that don't touch the active variant).
/// Nothing here ever inspects `V` or `E`.
#[must_use = "this `Outcome` may be an `Error` variant, which should be handled"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
pub enum Outcome<V, E> {
    Ok(V),
    Error(E),
}

impl<V, E> Outcome<V, E> {
    /// `Some(value)` becomes `Ok(value)`, `None` becomes `Error(error_if_none)`.
    pub fn from_option(opt: Option<V>, error_if_none: E) -> Self {
        match opt {
            Some(value) => Self::Ok(value),
            None => Self::Error(error_if_none),
        }
    }

    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(..))
    }

    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(..))
    }

    pub const fn tag(&self) -> Tag {
        match self {
            Self::Ok(..) => Tag::Ok,
            Self::Error(..) => Tag::Error,
        }
    }

    pub const fn as_ref(&self) -> Outcome<&V, &E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Error(error) => Outcome::Error(error),
        }
    }

    pub fn map<V2>(self, f: impl FnOnce(V) -> V2) -> Outcome<V2, E> {
        match self {
            Self::Ok(value) => Outcome::Ok(f(value)),
            Self::Error(error) => Outcome::Error(error),
        }
    }

    pub fn map_error<E2>(self, f: impl FnOnce(E) -> E2) -> Outcome<V, E2> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Error(error) => Outcome::Error(f(error)),
        }
    }

    /// Chains a computation that can itself fail. The returned outcome is
    /// exactly what `f` produced, it is never wrapped again.
    pub fn flat_map<V2>(self, f: impl FnOnce(V) -> Outcome<V2, E>) -> Outcome<V2, E> {
        match self {
            Self::Ok(value) => f(value),
            Self::Error(error) => Outcome::Error(error),
        }
    }

    /// Recovers from (or re-types) an error.
    pub fn flat_map_error<E2>(self, f: impl FnOnce(E) -> Outcome<V, E2>) -> Outcome<V, E2> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Error(error) => f(error),
        }
    }

    pub fn get_with_default(self, default: V) -> V {
        match self {
            Self::Ok(value) => value,
            Self::Error(..) => default,
        }
    }

    /// Like [`Outcome::get_with_default`] but the default is only computed
    /// for an `Error`, from the error itself.
    pub fn get_with_default_else(self, f: impl FnOnce(E) -> V) -> V {
        match self {
            Self::Ok(value) => value,
            Self::Error(error) => f(error),
        }
    }

    /// Converts into an `Option`, dropping the error.
    pub fn to_option(self) -> Option<V> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Error(..) => None,
        }
    }

    pub fn to_error_option(self) -> Option<E> {
        match self {
            Self::Ok(..) => None,
            Self::Error(error) => Some(error),
        }
    }

    /// Calls exactly one of the handlers with the payload of the active variant.
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let len = Outcome::<&str, i32>::Ok("hello").match_with(str::len, |code| code as usize);
    /// assert_eq!(len, 5);
    /// ```
    pub fn match_with<R>(self, on_ok: impl FnOnce(V) -> R, on_error: impl FnOnce(E) -> R) -> R {
        match self {
            Self::Ok(value) => on_ok(value),
            Self::Error(error) => on_error(error),
        }
    }

    /// Observes the whole outcome, then returns it untouched.
    pub fn tap(self, f: impl FnOnce(&Self)) -> Self {
        f(&self);
        self
    }

    pub fn tap_ok(self, f: impl FnOnce(&V)) -> Self {
        if let Self::Ok(value) = &self {
            f(value)
        }
        self
    }

    pub fn tap_error(self, f: impl FnOnce(&E)) -> Self {
        if let Self::Error(error) = &self {
            f(error)
        }
        self
    }
}

impl<V, E> From<Result<V, E>> for Outcome<V, E> {
    fn from(result: Result<V, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Error(error),
        }
    }
}

impl<V, E> From<Outcome<V, E>> for Result<V, E> {
    fn from(outcome: Outcome<V, E>) -> Self {
        match outcome {
            Outcome::Ok(value) => Ok(value),
            Outcome::Error(error) => Err(error),
        }
    }
}
