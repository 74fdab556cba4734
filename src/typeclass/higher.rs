//! Higher-Kinded Type emulation through witness tags and Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Option<_>` directly.
//! This module names every constructor with a *witness* type and stores a
//! concrete `F<A>` inside [`Kind<F, A>`], a newtype tagged with the witness.
//! Type classes are then written once against `Kind<F, A>` and instantiated
//! per witness.
//!
//! # Encoding
//!
//! - [`Witness`]: a tag type with a GAT `Of<A>` naming the concrete `F<A>`.
//! - [`Kind<F, A>`]: the wrapped value, tagged with `F`.
//! - [`IntoKind`]: tags a concrete value with its witness (`Some(1).kind()`).
//!
//! Tagging is lossless: `Kind::new(value).fix() == value`.
//!
//! # Example
//!
//! ```rust
//! use kindred::typeclass::{ForOption, IntoKind, Kind};
//!
//! let tagged: Kind<ForOption, i32> = Some(42).kind();
//! assert_eq!(tagged.fix(), Some(42));
//! ```
//!
//! Recovering a value as the wrong concrete type is a compile error:
//!
//! ```rust,compile_fail
//! use kindred::typeclass::{ForOption, Kind};
//!
//! let tagged: Kind<ForOption, i32> = Kind::new(Some(1));
//! let wrong: Vec<i32> = tagged.fix();
//! ```
//!
//! So is mixing two witnesses:
//!
//! ```rust,compile_fail
//! use kindred::typeclass::{ForOption, ForVec, Kind};
//!
//! let tagged: Kind<ForVec, i32> = Kind::new(Some(1));
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// Element types that can be threaded through the algebras.
///
/// Deferred and asynchronous wrappers re-run their producers and may cross
/// threads, so every element is cloneable and thread-safe.
pub trait Value: Clone + Send + Sync + 'static {}

impl<T: Clone + Send + Sync + 'static> Value for T {}

/// A shareable function value, used wherever a function lives inside a
/// wrapped value (for example the left operand of `ap`).
pub type Morphism<A, B> = Arc<dyn Fn(A) -> B + Send + Sync>;

/// Wraps a closure into a [`Morphism`].
///
/// # Examples
///
/// ```rust
/// use kindred::typeclass::morphism;
///
/// let double = morphism(|x: i32| x * 2);
/// assert_eq!(double(21), 42);
/// ```
pub fn morphism<A, B, Function>(function: Function) -> Morphism<A, B>
where
    Function: Fn(A) -> B + Send + Sync + 'static,
{
    Arc::new(function)
}

/// A tag naming a type constructor independently of its element type.
///
/// # Laws
///
/// Two wrapped values denote the same constructor iff they carry the same
/// witness type. The GAT `Of<A>` must be the only way to name `F<A>`.
pub trait Witness: Sized + 'static {
    /// The constructor applied to `A`.
    type Of<A: Value>: Value;
}

/// A value of type `F<A>`, tagged with the witness `F`.
///
/// `Kind` is immutable: every operation that transforms it produces a new
/// value.
pub struct Kind<F: Witness, A: Value> {
    value: F::Of<A>,
    witness: PhantomData<fn() -> F>,
}

impl<F: Witness, A: Value> Kind<F, A> {
    /// Tags a concrete `F<A>` with its witness.
    #[inline]
    pub const fn new(value: F::Of<A>) -> Self {
        Self {
            value,
            witness: PhantomData,
        }
    }

    /// Recovers the concrete `F<A>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::{ForVec, Kind};
    ///
    /// let tagged: Kind<ForVec, i32> = Kind::new(vec![1, 2]);
    /// assert_eq!(tagged.fix(), vec![1, 2]);
    /// ```
    #[inline]
    pub fn fix(self) -> F::Of<A> {
        self.value
    }

    /// Borrows the concrete `F<A>`.
    #[inline]
    pub const fn as_fixed(&self) -> &F::Of<A> {
        &self.value
    }
}

impl<F: Witness, A: Value> Clone for Kind<F, A> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<F: Witness, A: Value> PartialEq for Kind<F, A>
where
    F::Of<A>: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<F: Witness, A: Value> Eq for Kind<F, A> where F::Of<A>: Eq {}

impl<F: Witness, A: Value> fmt::Debug for Kind<F, A>
where
    F::Of<A>: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Kind").field(&self.value).finish()
    }
}

/// Tags a concrete wrapped type with its witness.
///
/// This is the inverse of [`Kind::fix`].
pub trait IntoKind: Sized {
    /// The witness of the constructor.
    type Witness: Witness;

    /// The element type.
    type Inner: Value;

    /// Tags `self` with its witness.
    fn kind(self) -> Kind<Self::Witness, Self::Inner>;
}

// =============================================================================
// Standard Library Witnesses
// =============================================================================

/// Witness for [`Option`].
#[derive(Debug)]
pub enum ForOption {}

impl Witness for ForOption {
    type Of<A: Value> = Option<A>;
}

/// Witness for [`Vec`].
#[derive(Debug)]
pub enum ForVec {}

impl Witness for ForVec {
    type Of<A: Value> = Vec<A>;
}

/// Witness for [`Result`] with a fixed error type `E`.
pub struct ForResult<E>(PhantomData<fn() -> E>);

impl<E: Value> Witness for ForResult<E> {
    type Of<A: Value> = Result<A, E>;
}

impl<A: Value> IntoKind for Option<A> {
    type Witness = ForOption;
    type Inner = A;

    fn kind(self) -> Kind<ForOption, A> {
        Kind::new(self)
    }
}

impl<A: Value> IntoKind for Vec<A> {
    type Witness = ForVec;
    type Inner = A;

    fn kind(self) -> Kind<ForVec, A> {
        Kind::new(self)
    }
}

impl<A: Value, E: Value> IntoKind for Result<A, E> {
    type Witness = ForResult<E>;
    type Inner = A;

    fn kind(self) -> Kind<ForResult<E>, A> {
        Kind::new(self)
    }
}

static_assertions::assert_impl_all!(Kind<ForOption, i32>: Clone, Send, Sync);
static_assertions::assert_impl_all!(Kind<ForResult<String>, Vec<u8>>: Clone, Send, Sync);
