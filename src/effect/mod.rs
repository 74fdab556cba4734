//! Effect wrappers that plug into the capability traits.
//!
//! # Deferred
//!
//! [`Deferred`] describes a synchronous computation that may fail. Nothing
//! runs until [`Deferred::run`], and every call runs it again.
//!
//! # Maybe
//!
//! [`Maybe`] (feature `async`) adapts a cold asynchronous source that
//! completes with a value, with nothing, or with an error. It is realized on
//! Tokio, either by awaiting [`Maybe::realize`] or by spawning it with
//! [`Maybe::subscribe`] and observing the terminal [`Signal`]s of the returned
//! [`Subscription`].
//!
//! Both have a witness ([`ForDeferred`], [`ForMaybe`]) and an instance value
//! implementing every capability up to `MonadError`, so the binding runtime
//! drives them the same way it drives `Option` or `Result`.
//!
//! ```rust
//! use kindred::bind;
//! use kindred::effect::{Deferred, DeferredInstances};
//! use kindred::typeclass::IntoKind;
//!
//! let total = bind! { DeferredInstances::<String>::new() =>
//!     x <= Deferred::pure(20).kind();
//!     y <= Deferred::succeed(move || x + 1).kind();
//!     yield y * 2
//! };
//! assert_eq!(total.fix().run(), Ok(42));
//! ```

mod deferred;
#[cfg(feature = "async")]
mod maybe;

pub use deferred::{Deferred, DeferredInstances, ForDeferred, SameOutcome};
#[cfg(feature = "async")]
pub use maybe::{ForMaybe, Maybe, MaybeInstances, Signal, Subscription};
