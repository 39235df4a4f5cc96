//! An immutable success-or-failure container with a uniform set of
//! combinators.
//!
//! ```rust
//! use outcome::Outcome;
//!
//! let doubled = Outcome::<i32, &str>::Ok(2).map(|x| x * 2);
//! assert_eq!(doubled.get_with_default(0), 4);
//!
//! let chained = Outcome::<i32, &str>::Ok(1).flat_map(|x| {
//!     if x > 1 { Outcome::Error("e") } else { Outcome::Ok(2) }
//! });
//! assert_eq!(chained, Outcome::Ok(2));
//! ```
//!
//! Panicking code and futures can be brought in with
//! [`Outcome::from_execution`] and [`Outcome::from_future`], which capture
//! the raised value as a [`Fault`].

mod outcome;
pub use outcome::Outcome;

mod aggregate;

mod fault;
pub use fault::Fault;

#[cfg(feature = "deferred")]
mod deferred;
#[cfg(feature = "deferred")]
pub use deferred::{FromFuture, FromTryFuture};

pub mod pattern;
pub use pattern::Tag;
