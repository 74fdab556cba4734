//! Monad type class - sequencing dependent computations.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! flat_map(pure(a), f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! flat_map(m, pure) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! flat_map(flat_map(m, f), g) == flat_map(m, |x| flat_map(f(x), g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::instances::OptionInstances;
//! use kindred::typeclass::{IntoKind, Monad};
//!
//! let halved = OptionInstances.flat_map(Some(10).kind(), |n: i32| {
//!     (if n % 2 == 0 { Some(n / 2) } else { None }).kind()
//! });
//! assert_eq!(halved.fix(), Some(5));
//! ```

use super::applicative::Applicative;
use super::higher::{Kind, Value, Witness};

/// An applicative whose computations can depend on earlier results.
pub trait Monad<F: Witness>: Applicative<F> {
    /// Feeds the wrapped value(s) of `fa` into `function` and flattens.
    ///
    /// `function` is only invoked once a value is available; a constructor
    /// without a value (an empty `Option`, an error) never invokes it.
    fn flat_map<A, B, Function>(&self, fa: Kind<F, A>, function: Function) -> Kind<F, B>
    where
        A: Value,
        B: Value,
        Function: Fn(A) -> Kind<F, B> + Send + Sync + 'static;

    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::instances::OptionInstances;
    /// use kindred::typeclass::{IntoKind, Monad};
    ///
    /// let nested = Some(Some(3).kind()).kind();
    /// assert_eq!(OptionInstances.flatten(nested).fix(), Some(3));
    /// ```
    fn flatten<A: Value>(&self, ffa: Kind<F, Kind<F, A>>) -> Kind<F, A>
    where
        Self: Sized,
    {
        self.flat_map(ffa, |fa| fa)
    }

    /// Sequences `next` after `fa`, discarding the value of `fa`.
    fn then<A: Value, B: Value>(&self, fa: Kind<F, A>, next: Kind<F, B>) -> Kind<F, B>
    where
        Self: Sized,
    {
        self.flat_map(fa, move |_| next.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instances::{OptionInstances, ResultInstances, VecInstances};
    use crate::typeclass::IntoKind;
    use rstest::rstest;

    fn half(value: i32) -> Kind<crate::typeclass::ForOption, i32> {
        (if value % 2 == 0 { Some(value / 2) } else { None }).kind()
    }

    #[rstest]
    #[case(Some(8), Some(4))]
    #[case(Some(7), None)]
    #[case(None, None)]
    fn option_flat_map(#[case] input: Option<i32>, #[case] expected: Option<i32>) {
        assert_eq!(OptionInstances.flat_map(input.kind(), half).fix(), expected);
    }

    #[rstest]
    fn vec_flat_map_expands_elements() {
        let expanded = VecInstances.flat_map(vec![1, 2].kind(), |n: i32| vec![n, n * 10].kind());
        assert_eq!(expanded.fix(), vec![1, 10, 2, 20]);
    }

    #[rstest]
    fn result_flat_map_short_circuits() {
        let instances = ResultInstances::<String>::new();
        let failed: Result<i32, String> = Err("stop".to_string());
        let result = instances.flat_map(failed.kind(), |n: i32| Ok::<i32, String>(n + 1).kind());
        assert_eq!(result.fix(), Err("stop".to_string()));
    }

    #[rstest]
    fn then_discards_first_value() {
        let sequenced = OptionInstances.then(Some(1).kind(), Some("next").kind());
        assert_eq!(sequenced.fix(), Some("next"));
        let skipped = OptionInstances.then(None::<i32>.kind(), Some("next").kind());
        assert_eq!(skipped.fix(), None);
    }

    #[rstest]
    fn flatten_vec() {
        let nested = vec![vec![1, 2].kind(), vec![3].kind()].kind();
        assert_eq!(VecInstances.flatten(nested).fix(), vec![1, 2, 3]);
    }
}
