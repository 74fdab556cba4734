//! Numeric algebras.
//!
//! The same integers form several monoids. Each one is its own zero-sized
//! instance, so the choice is made where the algebra is used:
//!
//! - [`Sum`]: addition (identity: 0)
//! - [`Product`]: multiplication (identity: 1)
//! - [`Max`]: maximum (identity: the type minimum)
//! - [`Min`]: minimum (identity: the type maximum)
//!
//! `Sum` and `Product` wrap on overflow so they stay total (and lawful) over
//! every input, including the ones a property test generates.
//!
//! # The Bounded Trait
//!
//! [`Bounded`] provides the extreme values `Max` and `Min` need as their
//! identity element.

use crate::typeclass::{Monoid, Semigroup};

/// Integer types with wrapping arithmetic and the two arithmetic identities.
pub trait Numeric: Copy {
    /// The additive identity.
    const ZERO: Self;

    /// The multiplicative identity.
    const ONE: Self;

    /// Addition, wrapping on overflow.
    fn add_wrapping(self, other: Self) -> Self;

    /// Multiplication, wrapping on overflow.
    fn mul_wrapping(self, other: Self) -> Self;
}

/// Types with a minimum and a maximum value.
///
/// # Examples
///
/// ```rust
/// use kindred::instances::Bounded;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
/// struct Score(u8);
///
/// impl Bounded for Score {
///     const MIN_VALUE: Self = Score(0);
///     const MAX_VALUE: Self = Score(100);
/// }
///
/// assert_eq!(Score::MAX_VALUE.0, 100);
/// ```
pub trait Bounded {
    /// The minimum value of this type.
    const MIN_VALUE: Self;

    /// The maximum value of this type.
    const MAX_VALUE: Self;
}

macro_rules! integer_algebras {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Numeric for $integer {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline]
                fn add_wrapping(self, other: Self) -> Self {
                    self.wrapping_add(other)
                }

                #[inline]
                fn mul_wrapping(self, other: Self) -> Self {
                    self.wrapping_mul(other)
                }
            }

            impl Bounded for $integer {
                const MIN_VALUE: Self = Self::MIN;
                const MAX_VALUE: Self = Self::MAX;
            }
        )*
    };
}

integer_algebras!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Bounded for char {
    const MIN_VALUE: Self = '\0';
    const MAX_VALUE: Self = Self::MAX;
}

impl Bounded for bool {
    const MIN_VALUE: Self = false;
    const MAX_VALUE: Self = true;
}

/// The additive monoid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Sum;

impl<A: Numeric> Semigroup<A> for Sum {
    #[inline]
    fn combine(&self, left: A, right: A) -> A {
        left.add_wrapping(right)
    }
}

impl<A: Numeric> Monoid<A> for Sum {
    #[inline]
    fn empty(&self) -> A {
        A::ZERO
    }
}

/// The multiplicative monoid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Product;

impl<A: Numeric> Semigroup<A> for Product {
    #[inline]
    fn combine(&self, left: A, right: A) -> A {
        left.mul_wrapping(right)
    }
}

impl<A: Numeric> Monoid<A> for Product {
    #[inline]
    fn empty(&self) -> A {
        A::ONE
    }
}

/// The maximum monoid. Its identity is [`Bounded::MIN_VALUE`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Max;

impl<A: Ord> Semigroup<A> for Max {
    #[inline]
    fn combine(&self, left: A, right: A) -> A {
        left.max(right)
    }
}

impl<A: Ord + Bounded> Monoid<A> for Max {
    #[inline]
    fn empty(&self) -> A {
        A::MIN_VALUE
    }
}

/// The minimum monoid. Its identity is [`Bounded::MAX_VALUE`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Min;

impl<A: Ord> Semigroup<A> for Min {
    #[inline]
    fn combine(&self, left: A, right: A) -> A {
        left.min(right)
    }
}

impl<A: Ord + Bounded> Monoid<A> for Min {
    #[inline]
    fn empty(&self) -> A {
        A::MAX_VALUE
    }
}
