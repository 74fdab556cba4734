//! Monoid type classes - semigroups with an identity element.
//!
//! # Laws
//!
//! In addition to associativity:
//!
//! ## Left Identity
//!
//! ```text
//! combine(empty(), a) == a
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! combine(a, empty()) == a
//! ```
//!
//! # Monoids as a type constructor
//!
//! [`ForMonoid`] is the witness whose `Of<A>` is a monoid instance for `A`
//! ([`MonoidOf<A>`]). It is an invariant functor: a monoid on `A` plus a pair
//! of conversions `A -> B`, `B -> A` yields a monoid on `B`
//! (see [`crate::registry::MonoidInvariant`]).
//!
//! # Examples
//!
//! ```rust
//! use kindred::instances::{OptionInstances, VecInstances};
//! use kindred::typeclass::{Foldable, IntoKind, MonoidK};
//!
//! let options = vec![Some(1).kind()].kind();
//! let folded = VecInstances.fold(options, &OptionInstances.algebra::<i32>());
//! assert_eq!(folded, Some(1).kind());
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use super::higher::{IntoKind, Kind, Value, Witness};
use super::semigroup::{Semigroup, SemigroupK};

/// A semigroup with an identity element.
///
/// # Laws
///
/// For all `a`:
/// ```text
/// combine(empty(), a) == a
/// combine(a, empty()) == a
/// ```
pub trait Monoid<A>: Semigroup<A> {
    /// Returns the identity element.
    fn empty(&self) -> A;

    /// Combines all values, starting from the identity element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::instances::Sum;
    /// use kindred::typeclass::Monoid;
    ///
    /// assert_eq!(Sum.combine_all(vec![1, 2, 3]), 6);
    /// assert_eq!(Sum.combine_all(Vec::<i32>::new()), 0);
    /// ```
    fn combine_all<I>(&self, values: I) -> A
    where
        Self: Sized,
        I: IntoIterator<Item = A>,
    {
        values
            .into_iter()
            .fold(self.empty(), |accumulator, element| {
                self.combine(accumulator, element)
            })
    }

    /// Returns whether `value` is the identity element.
    fn is_empty_value(&self, value: &A) -> bool
    where
        Self: Sized,
        A: PartialEq,
    {
        *value == self.empty()
    }
}

impl<A, M: Monoid<A> + ?Sized> Monoid<A> for &M {
    fn empty(&self) -> A {
        (**self).empty()
    }
}

/// A monoid on `F<A>` that works uniformly for every element type `A`.
///
/// # Laws
///
/// For all `A` and all `x: Kind<F, A>`:
/// ```text
/// combine_k(empty_k(), x) == x
/// combine_k(x, empty_k()) == x
/// ```
pub trait MonoidK<F: Witness>: SemigroupK<F> {
    /// The empty wrapped value.
    fn empty_k<A: Value>(&self) -> Kind<F, A>;

    /// Specialises this instance to a [`Monoid`] on `Kind<F, A>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::instances::OptionInstances;
    /// use kindred::typeclass::{IntoKind, Monoid, MonoidK};
    ///
    /// let algebra = OptionInstances.algebra::<i32>();
    /// assert_eq!(algebra.combine_all(vec![None.kind(), Some(2).kind()]), Some(2).kind());
    /// ```
    fn algebra<A: Value>(&self) -> MonoidKAlgebra<Self, F, A>
    where
        Self: Clone + Sized,
    {
        MonoidKAlgebra::new(self.clone())
    }
}

/// The [`Monoid`] on `Kind<F, A>` obtained from a [`MonoidK`] instance.
pub struct MonoidKAlgebra<M, F, A> {
    instance: M,
    marker: PhantomData<fn() -> (F, A)>,
}

impl<M, F, A> MonoidKAlgebra<M, F, A> {
    /// Wraps a `MonoidK` instance.
    pub const fn new(instance: M) -> Self {
        Self {
            instance,
            marker: PhantomData,
        }
    }
}

impl<M: Clone, F, A> Clone for MonoidKAlgebra<M, F, A> {
    fn clone(&self) -> Self {
        Self::new(self.instance.clone())
    }
}

impl<M: fmt::Debug, F, A> fmt::Debug for MonoidKAlgebra<M, F, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("MonoidKAlgebra")
            .field("instance", &self.instance)
            .finish()
    }
}

impl<M, F, A> Semigroup<Kind<F, A>> for MonoidKAlgebra<M, F, A>
where
    M: SemigroupK<F>,
    F: Witness,
    A: Value,
{
    fn combine(&self, left: Kind<F, A>, right: Kind<F, A>) -> Kind<F, A> {
        self.instance.combine_k(left, right)
    }
}

impl<M, F, A> Monoid<Kind<F, A>> for MonoidKAlgebra<M, F, A>
where
    M: MonoidK<F>,
    F: Witness,
    A: Value,
{
    fn empty(&self) -> Kind<F, A> {
        self.instance.empty_k()
    }
}

// =============================================================================
// Monoids as a type constructor
// =============================================================================

/// A shared, type-erased monoid instance for `A`.
pub struct MonoidOf<A> {
    instance: Arc<dyn Monoid<A> + Send + Sync>,
}

impl<A> MonoidOf<A> {
    /// Erases a monoid instance.
    pub fn new<M>(instance: M) -> Self
    where
        M: Monoid<A> + Send + Sync + 'static,
    {
        Self {
            instance: Arc::new(instance),
        }
    }
}

impl<A> Clone for MonoidOf<A> {
    fn clone(&self) -> Self {
        Self {
            instance: Arc::clone(&self.instance),
        }
    }
}

impl<A> fmt::Debug for MonoidOf<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("MonoidOf").finish_non_exhaustive()
    }
}

impl<A> Semigroup<A> for MonoidOf<A> {
    fn combine(&self, left: A, right: A) -> A {
        self.instance.combine(left, right)
    }
}

impl<A> Monoid<A> for MonoidOf<A> {
    fn empty(&self) -> A {
        self.instance.empty()
    }
}

/// Witness for monoid instances: `Of<A>` is [`MonoidOf<A>`].
#[derive(Debug)]
pub enum ForMonoid {}

impl Witness for ForMonoid {
    type Of<A: Value> = MonoidOf<A>;
}

impl<A: Value> IntoKind for MonoidOf<A> {
    type Witness = ForMonoid;
    type Inner = A;

    fn kind(self) -> Kind<ForMonoid, A> {
        Kind::new(self)
    }
}
