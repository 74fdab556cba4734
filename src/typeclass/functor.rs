//! Invariant and covariant functors.
//!
//! [`Invariant`] maps a wrapped value through a pair of conversions, which
//! is all some constructors support (a monoid on `A` can only become a monoid
//! on `B` if values can travel both ways). [`Functor`] needs only the forward
//! direction.
//!
//! # Laws
//!
//! ## Invariant
//!
//! ```text
//! imap(fa, id, id) == fa
//! imap(imap(fa, f1, g1), f2, g2) == imap(fa, f2 . f1, g1 . g2)
//! ```
//!
//! ## Functor
//!
//! ```text
//! map(fa, id) == fa
//! map(map(fa, f), g) == map(fa, g . f)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::instances::OptionInstances;
//! use kindred::typeclass::{Functor, IntoKind};
//!
//! let transformed = OptionInstances.map(Some(5).kind(), |n: i32| n.to_string());
//! assert_eq!(transformed.fix(), Some("5".to_string()));
//! ```

use super::higher::{Kind, Value, Witness};

/// A type class for constructors that can be mapped through an isomorphism.
pub trait Invariant<F: Witness> {
    /// Maps `fa` with `to`, using `from` wherever values flow back in.
    fn imap<A, B, To, Back>(&self, fa: Kind<F, A>, to: To, from: Back) -> Kind<F, B>
    where
        A: Value,
        B: Value,
        To: Fn(A) -> B + Send + Sync + 'static,
        Back: Fn(B) -> A + Send + Sync + 'static;
}

/// A type class for constructors whose contents can be mapped.
///
/// Every functor is an invariant functor that ignores the backward
/// conversion.
pub trait Functor<F: Witness>: Invariant<F> {
    /// Applies `function` to the wrapped value(s).
    fn map<A, B, Function>(&self, fa: Kind<F, A>, function: Function) -> Kind<F, B>
    where
        A: Value,
        B: Value,
        Function: Fn(A) -> B + Send + Sync + 'static;

    /// Replaces the wrapped value(s) with `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::instances::OptionInstances;
    /// use kindred::typeclass::{Functor, IntoKind};
    ///
    /// assert_eq!(OptionInstances.replace(Some(5).kind(), "x").fix(), Some("x"));
    /// assert_eq!(OptionInstances.replace(None::<i32>.kind(), "x").fix(), None);
    /// ```
    fn replace<A: Value, B: Value>(&self, fa: Kind<F, A>, value: B) -> Kind<F, B>
    where
        Self: Sized,
    {
        self.map(fa, move |_| value.clone())
    }

    /// Discards the wrapped value(s), keeping the structure.
    fn void<A: Value>(&self, fa: Kind<F, A>) -> Kind<F, ()>
    where
        Self: Sized,
    {
        self.replace(fa, ())
    }
}
