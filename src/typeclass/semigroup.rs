//! Semigroup type classes - associative binary operations.
//!
//! Instances are values: `Sum.combine(1, 2)` rather than a method on the
//! combined type. This lets one type carry several algebras (addition,
//! multiplication, maximum, ...) without newtype wrappers, and lets an
//! algebra be chosen at the call site.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! combine(combine(a, b), c) == combine(a, combine(b, c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::instances::{Concat, Sum};
//! use kindred::typeclass::Semigroup;
//!
//! assert_eq!(Sum.combine(2, 3), 5);
//! assert_eq!(Concat.combine(String::from("Hello, "), String::from("World!")), "Hello, World!");
//! ```

use super::higher::{Kind, Value, Witness};

/// An associative binary operation on `A`.
///
/// # Laws
///
/// For all `a`, `b`, `c`:
/// ```text
/// combine(combine(a, b), c) == combine(a, combine(b, c))
/// ```
pub trait Semigroup<A> {
    /// Combines two values into one.
    fn combine(&self, left: A, right: A) -> A;

    /// Combines a value with itself `count` times.
    ///
    /// # Panics
    ///
    /// Panics if `count` is 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::instances::Concat;
    /// use kindred::typeclass::Semigroup;
    ///
    /// assert_eq!(Concat.combine_n(String::from("ab"), 3), "ababab");
    /// ```
    fn combine_n(&self, value: A, count: usize) -> A
    where
        Self: Sized,
        A: Clone,
    {
        assert!(count > 0, "combine_n requires count > 0");

        (1..count).fold(value.clone(), |accumulator, _| {
            self.combine(accumulator, value.clone())
        })
    }

    /// Reduces all values with `combine`, or returns `None` when there are none.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::instances::Max;
    /// use kindred::typeclass::Semigroup;
    ///
    /// assert_eq!(Max.reduce_all(vec![3, 9, 4]), Some(9));
    /// assert_eq!(Max.reduce_all(Vec::<i32>::new()), None);
    /// ```
    fn reduce_all<I>(&self, values: I) -> Option<A>
    where
        Self: Sized,
        I: IntoIterator<Item = A>,
    {
        values
            .into_iter()
            .reduce(|accumulator, element| self.combine(accumulator, element))
    }
}

/// A semigroup on `F<A>` that works uniformly for every element type `A`.
///
/// `Option` combines by keeping the first present value; `Vec` concatenates.
///
/// # Laws
///
/// For all `A` and all `x`, `y`, `z: Kind<F, A>`:
/// ```text
/// combine_k(combine_k(x, y), z) == combine_k(x, combine_k(y, z))
/// ```
pub trait SemigroupK<F: Witness> {
    /// Combines two wrapped values.
    fn combine_k<A: Value>(&self, left: Kind<F, A>, right: Kind<F, A>) -> Kind<F, A>;
}

impl<A, S: Semigroup<A> + ?Sized> Semigroup<A> for &S {
    fn combine(&self, left: A, right: A) -> A {
        (**self).combine(left, right)
    }
}
