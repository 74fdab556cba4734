//! Value-level monoids for sequences and optional values.

use crate::typeclass::{Monoid, Semigroup};

/// Concatenation of strings and vectors.
///
/// # Examples
///
/// ```rust
/// use kindred::instances::Concat;
/// use kindred::typeclass::{Monoid, Semigroup};
///
/// assert_eq!(Concat.combine(vec![1, 2], vec![3]), vec![1, 2, 3]);
/// assert_eq!(Concat.combine_all(vec!["a".to_string(), "b".to_string()]), "ab");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Concat;

impl Semigroup<String> for Concat {
    fn combine(&self, mut left: String, right: String) -> String {
        left.push_str(&right);
        left
    }
}

impl Monoid<String> for Concat {
    fn empty(&self) -> String {
        String::new()
    }
}

impl<T> Semigroup<Vec<T>> for Concat {
    fn combine(&self, mut left: Vec<T>, mut right: Vec<T>) -> Vec<T> {
        left.append(&mut right);
        left
    }
}

impl<T> Monoid<Vec<T>> for Concat {
    fn empty(&self) -> Vec<T> {
        Vec::new()
    }
}

/// Lifts a semigroup on `A` to a monoid on `Option<A>`.
///
/// Present values are combined with the inner semigroup and `None` is the
/// identity. Compare with the `MonoidK` instance for options, which keeps
/// the first present value without looking inside it.
///
/// # Examples
///
/// ```rust
/// use kindred::instances::{OptionMonoid, Sum};
/// use kindred::typeclass::Monoid;
///
/// let monoid = OptionMonoid::new(Sum);
/// assert_eq!(monoid.combine_all(vec![Some(1), None, Some(2)]), Some(3));
/// ```
pub struct OptionMonoid<S> {
    inner: S,
}

impl<S> OptionMonoid<S> {
    /// Wraps the semigroup used for present values.
    pub const fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: Clone> Clone for OptionMonoid<S> {
    fn clone(&self) -> Self {
        Self::new(self.inner.clone())
    }
}

impl<S: std::fmt::Debug> std::fmt::Debug for OptionMonoid<S> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("OptionMonoid")
            .field("inner", &self.inner)
            .finish()
    }
}

impl<A, S: Semigroup<A>> Semigroup<Option<A>> for OptionMonoid<S> {
    fn combine(&self, left: Option<A>, right: Option<A>) -> Option<A> {
        match (left, right) {
            (Some(left), Some(right)) => Some(self.inner.combine(left, right)),
            (Some(value), None) | (None, Some(value)) => Some(value),
            (None, None) => None,
        }
    }
}

impl<A, S: Semigroup<A>> Monoid<Option<A>> for OptionMonoid<S> {
    fn empty(&self) -> Option<A> {
        None
    }
}
