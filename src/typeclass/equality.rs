//! Equality instances used when comparing the two sides of a law.
//!
//! Some wrapped values have no structural equality (a deferred computation
//! is a function), so laws compare through an explicit instance rather than
//! through [`PartialEq`].
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::{Equality, Natural};
//!
//! assert!(Natural.equal(&1, &1));
//!
//! let same_length = |left: &String, right: &String| left.len() == right.len();
//! assert!(same_length.equal(&"ab".to_string(), &"cd".to_string()));
//! ```

/// Decides whether two values are observably the same.
pub trait Equality<T> {
    /// Returns `true` when `left` and `right` are equal under this instance.
    fn equal(&self, left: &T, right: &T) -> bool;
}

/// Equality through [`PartialEq`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: PartialEq> Equality<T> for Natural {
    fn equal(&self, left: &T, right: &T) -> bool {
        left == right
    }
}

impl<T, Function> Equality<T> for Function
where
    Function: Fn(&T, &T) -> bool,
{
    fn equal(&self, left: &T, right: &T) -> bool {
        self(left, right)
    }
}
