//! Foldable type class - reducing wrapped values to a summary.
//!
//! # Laws
//!
//! `Foldable` has no laws beyond consistency between its operations:
//!
//! ```text
//! fold(fa, m) == fold_map(fa, m, id)
//! length(fa) == fold_left(fa, 0, |n, _| n + 1)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::instances::{Sum, VecInstances};
//! use kindred::typeclass::{Foldable, IntoKind};
//!
//! let numbers = vec![1, 2, 3, 4, 5].kind();
//! assert_eq!(VecInstances.fold_left(numbers.clone(), 0, |total, n| total + n), 15);
//! assert_eq!(VecInstances.fold(numbers, &Sum), 15);
//! ```

use super::higher::{Kind, Value, Witness};
use super::monoid::Monoid;

/// A type class for constructors whose contents can be folded left to right.
pub trait Foldable<F: Witness> {
    /// Folds the wrapped value(s) from left to right.
    fn fold_left<A, B, Function>(&self, fa: Kind<F, A>, init: B, function: Function) -> B
    where
        A: Value,
        Function: FnMut(B, A) -> B;

    /// Combines the wrapped value(s) with `monoid`, starting from its identity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::instances::{OptionInstances, VecInstances};
    /// use kindred::typeclass::{Foldable, IntoKind, MonoidK};
    ///
    /// let options = vec![None.kind(), Some(1).kind(), Some(2).kind()].kind();
    /// let first = VecInstances.fold(options, &OptionInstances.algebra::<i32>());
    /// assert_eq!(first.fix(), Some(1));
    /// ```
    fn fold<A, M>(&self, fa: Kind<F, A>, monoid: &M) -> A
    where
        Self: Sized,
        A: Value,
        M: Monoid<A>,
    {
        self.fold_left(fa, monoid.empty(), |accumulator, element| {
            monoid.combine(accumulator, element)
        })
    }

    /// Maps every value into `monoid` and combines the results.
    fn fold_map<A, B, M, Function>(&self, fa: Kind<F, A>, monoid: &M, function: Function) -> B
    where
        Self: Sized,
        A: Value,
        M: Monoid<B>,
        Function: Fn(A) -> B,
    {
        self.fold_left(fa, monoid.empty(), |accumulator, element| {
            monoid.combine(accumulator, function(element))
        })
    }

    /// Counts the wrapped values.
    fn length<A: Value>(&self, fa: Kind<F, A>) -> usize
    where
        Self: Sized,
    {
        self.fold_left(fa, 0, |count, _| count + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instances::{Concat, OptionInstances, Product, Sum, VecInstances};
    use crate::typeclass::{IntoKind, MonoidK};
    use rstest::rstest;

    #[rstest]
    fn fold_single_present_value() {
        let folded = VecInstances.fold(vec![Some(1).kind()].kind(), &OptionInstances.algebra::<i32>());
        assert_eq!(folded.fix(), Some(1));
    }

    #[rstest]
    fn fold_empty_list_is_identity() {
        let empty: Vec<Kind<crate::typeclass::ForOption, i32>> = Vec::new();
        let folded = VecInstances.fold(empty.kind(), &OptionInstances.algebra::<i32>());
        assert_eq!(folded.fix(), None);
    }

    #[rstest]
    #[case(Some(4), 4)]
    #[case(None, 1)]
    fn option_fold_with_product(#[case] input: Option<i32>, #[case] expected: i32) {
        assert_eq!(OptionInstances.fold(input.kind(), &Product), expected);
    }

    #[rstest]
    fn fold_map_renders_elements() {
        let rendered = VecInstances.fold_map(vec![1, 2, 3].kind(), &Concat, |n: i32| n.to_string());
        assert_eq!(rendered, "123");
    }

    #[rstest]
    #[case(vec![], 0)]
    #[case(vec![7, 8, 9], 3)]
    fn vec_length(#[case] values: Vec<i32>, #[case] expected: usize) {
        assert_eq!(VecInstances.length(values.kind()), expected);
    }

    #[rstest]
    fn fold_agrees_with_fold_map_identity() {
        let values = vec![5, 6, 7].kind();
        assert_eq!(
            VecInstances.fold(values.clone(), &Sum),
            VecInstances.fold_map(values, &Sum, |n: i32| n)
        );
    }
}
