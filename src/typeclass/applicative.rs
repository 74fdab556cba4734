//! Applicative type class - lifting values and applying wrapped functions.
//!
//! # Laws
//!
//! ```text
//! ap(pure(id), fa) == fa                                     (identity)
//! ap(pure(f), pure(a)) == pure(f(a))                         (homomorphism)
//! ap(ff, pure(a)) == ap(pure(|f| f(a)), ff)                  (interchange)
//! ap(ap(ap(pure(compose), u), v), w) == ap(u, ap(v, w))      (composition)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::instances::OptionInstances;
//! use kindred::typeclass::{Applicative, IntoKind};
//!
//! let lifted = OptionInstances.pure(42);
//! assert_eq!(lifted.fix(), Some(42));
//!
//! let sum = OptionInstances.map2(Some(1).kind(), Some(2).kind(), |x: i32, y: i32| x + y);
//! assert_eq!(sum.fix(), Some(3));
//! ```

use std::sync::Arc;

use super::functor::Functor;
use super::higher::{Kind, Morphism, Value, Witness, morphism};

/// A functor that can lift values and apply wrapped functions.
pub trait Applicative<F: Witness>: Functor<F> {
    /// Lifts a value into `F`.
    fn pure<A: Value>(&self, value: A) -> Kind<F, A>;

    /// Applies the wrapped function(s) in `ff` to the wrapped value(s) in `fa`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::instances::VecInstances;
    /// use kindred::typeclass::{Applicative, IntoKind, morphism};
    ///
    /// let functions = vec![morphism(|x: i32| x + 1), morphism(|x: i32| x * 10)].kind();
    /// let applied = VecInstances.ap(functions, vec![1, 2].kind());
    /// assert_eq!(applied.fix(), vec![2, 3, 10, 20]);
    /// ```
    fn ap<A: Value, B: Value>(&self, ff: Kind<F, Morphism<A, B>>, fa: Kind<F, A>) -> Kind<F, B>;

    /// Combines two wrapped values with a binary function.
    fn map2<A, B, C, Function>(
        &self,
        fa: Kind<F, A>,
        fb: Kind<F, B>,
        function: Function,
    ) -> Kind<F, C>
    where
        Self: Sized,
        A: Value,
        B: Value,
        C: Value,
        Function: Fn(A, B) -> C + Send + Sync + 'static,
    {
        let function = Arc::new(function);
        let partially_applied = self.map(fa, move |a: A| {
            let function = Arc::clone(&function);
            morphism(move |b: B| function(a.clone(), b))
        });
        self.ap(partially_applied, fb)
    }

    /// Pairs two wrapped values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::instances::OptionInstances;
    /// use kindred::typeclass::{Applicative, IntoKind};
    ///
    /// let paired = OptionInstances.product(Some(1).kind(), Some("a").kind());
    /// assert_eq!(paired.fix(), Some((1, "a")));
    /// ```
    fn product<A: Value, B: Value>(&self, fa: Kind<F, A>, fb: Kind<F, B>) -> Kind<F, (A, B)>
    where
        Self: Sized,
    {
        self.map2(fa, fb, |a, b| (a, b))
    }
}
