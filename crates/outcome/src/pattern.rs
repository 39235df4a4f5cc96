//! Descriptors for matching an [`Outcome`] from the outside.
//!
//! A plain `match` on [`Outcome::Ok`] / [`Outcome::Error`] is the normal way to
//! take an outcome apart. These descriptors exist for code that receives
//! patterns as values (rule tables, generic matchers) and needs to know the
//! variant a pattern targets ([`Variant::TAG`]) and to pull the payload out
//! of a matching outcome ([`Pattern::bind`]).
//!
//! ```rust
//! use outcome::pattern::{self, Pattern};
//! use outcome::Outcome;
//!
//! let outcome = Outcome::<u16, String>::Ok(404);
//!
//! let client_error = pattern::Ok(pattern::When(|code: &u16| (400..500).contains(code)));
//! assert_eq!(client_error.bind(&outcome), Some(&404));
//!
//! let any_error = pattern::Error(pattern::Any);
//! assert_eq!(any_error.bind(&outcome), None);
//! ```

use crate::Outcome;

/// Names the variant of an [`Outcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
pub enum Tag {
    Ok,
    Error,
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Ok => "Ok",
            Self::Error => "Error",
        })
    }
}

/// Something that can recognise a `T` and extract a binding from it.
pub trait Pattern<'a, T: ?Sized + 'a> {
    type Binding;

    fn bind(&self, value: &'a T) -> Option<Self::Binding>;

    fn is_match(&self, value: &'a T) -> bool {
        self.bind(value).is_some()
    }
}

/// A descriptor that targets a single variant.
pub trait Variant {
    const TAG: Tag;
}

/// Matches `Outcome::Ok(v)` when `v` matches the inner pattern.
#[derive(Debug, Clone, Copy)]
pub struct Ok<P>(pub P);

/// Matches `Outcome::Error(e)` when `e` matches the inner pattern.
#[derive(Debug, Clone, Copy)]
pub struct Error<P>(pub P);

/// Matches anything, binding a reference to it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Any;

/// Matches when the predicate holds.
#[derive(Debug, Clone, Copy)]
pub struct When<F>(pub F);

/// Matches when the value equals the one held here.
#[derive(Debug, Clone, Copy)]
pub struct Is<T>(pub T);

impl<P> Variant for Ok<P> {
    const TAG: Tag = Tag::Ok;
}

impl<P> Variant for Error<P> {
    const TAG: Tag = Tag::Error;
}

impl<'a, V, E, P> Pattern<'a, Outcome<V, E>> for Ok<P>
where
    V: 'a,
    E: 'a,
    P: Pattern<'a, V>,
{
    type Binding = P::Binding;

    fn bind(&self, value: &'a Outcome<V, E>) -> Option<Self::Binding> {
        match value {
            Outcome::Ok(value) => self.0.bind(value),
            Outcome::Error(..) => None,
        }
    }
}

impl<'a, V, E, P> Pattern<'a, Outcome<V, E>> for Error<P>
where
    V: 'a,
    E: 'a,
    P: Pattern<'a, E>,
{
    type Binding = P::Binding;

    fn bind(&self, value: &'a Outcome<V, E>) -> Option<Self::Binding> {
        match value {
            Outcome::Ok(..) => None,
            Outcome::Error(error) => self.0.bind(error),
        }
    }
}

impl<'a, T> Pattern<'a, T> for Any
where
    T: ?Sized + 'a,
{
    type Binding = &'a T;

    fn bind(&self, value: &'a T) -> Option<Self::Binding> {
        Some(value)
    }
}

impl<'a, T, F> Pattern<'a, T> for When<F>
where
    T: ?Sized + 'a,
    F: Fn(&T) -> bool,
{
    type Binding = &'a T;

    fn bind(&self, value: &'a T) -> Option<Self::Binding> {
        (self.0)(value).then_some(value)
    }
}

impl<'a, T, U> Pattern<'a, T> for Is<U>
where
    T: ?Sized + PartialEq<U> + 'a,
{
    type Binding = &'a T;

    fn bind(&self, value: &'a T) -> Option<Self::Binding> {
        (*value == self.0).then_some(value)
    }
}
