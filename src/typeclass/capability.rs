//! Capability descriptors: the names, hierarchy and laws of every type class.
//!
//! The traits in [`crate::typeclass`] define the *operations* of a
//! capability. This module describes each capability as data, so the
//! registry can key instances by capability and the laws harness can
//! enumerate the equations an instance must satisfy.
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::{Capability, Law};
//!
//! assert_eq!(Capability::Monoid.parent(), Some(Capability::Semigroup));
//! assert_eq!(
//!     Capability::Monoid.all_laws(),
//!     vec![Law::Associativity, Law::LeftIdentity, Law::RightIdentity],
//! );
//! ```

use std::fmt;

/// A named algebraic structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Capability {
    /// Associative `combine` on values.
    Semigroup,
    /// Semigroup with an identity element.
    Monoid,
    /// Semigroup on `F<A>`, uniformly in `A`.
    SemigroupK,
    /// Monoid on `F<A>`, uniformly in `A`.
    MonoidK,
    /// `imap` with a pair of conversions.
    Invariant,
    /// Covariant `map`.
    Functor,
    /// `pure` and `ap`.
    Applicative,
    /// `flat_map`.
    Monad,
    /// `raise_error` and `handle_error_with`.
    MonadError,
    /// Left folds over a structure.
    Foldable,
}

impl Capability {
    /// Every capability, parents before children.
    pub const ALL: [Self; 10] = [
        Self::Semigroup,
        Self::Monoid,
        Self::SemigroupK,
        Self::MonoidK,
        Self::Invariant,
        Self::Functor,
        Self::Applicative,
        Self::Monad,
        Self::MonadError,
        Self::Foldable,
    ];

    /// The capability name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Semigroup => "Semigroup",
            Self::Monoid => "Monoid",
            Self::SemigroupK => "SemigroupK",
            Self::MonoidK => "MonoidK",
            Self::Invariant => "Invariant",
            Self::Functor => "Functor",
            Self::Applicative => "Applicative",
            Self::Monad => "Monad",
            Self::MonadError => "MonadError",
            Self::Foldable => "Foldable",
        }
    }

    /// The capability this one directly extends.
    pub const fn parent(self) -> Option<Self> {
        match self {
            Self::Semigroup | Self::SemigroupK | Self::Invariant | Self::Foldable => None,
            Self::Monoid => Some(Self::Semigroup),
            Self::MonoidK => Some(Self::SemigroupK),
            Self::Functor => Some(Self::Invariant),
            Self::Applicative => Some(Self::Functor),
            Self::Monad => Some(Self::Applicative),
            Self::MonadError => Some(Self::Monad),
        }
    }

    /// Laws introduced by this capability, excluding inherited ones.
    pub const fn laws(self) -> &'static [Law] {
        match self {
            Self::Semigroup | Self::SemigroupK => &[Law::Associativity],
            Self::Monoid | Self::MonoidK => &[Law::LeftIdentity, Law::RightIdentity],
            Self::Invariant => &[Law::InvariantIdentity, Law::InvariantComposition],
            Self::Functor => &[Law::CovariantIdentity, Law::CovariantComposition],
            Self::Applicative => &[
                Law::ApplicativeIdentity,
                Law::ApplicativeHomomorphism,
                Law::ApplicativeInterchange,
                Law::ApplicativeComposition,
            ],
            Self::Monad => &[
                Law::MonadLeftIdentity,
                Law::MonadRightIdentity,
                Law::MonadAssociativity,
            ],
            Self::MonadError => &[
                Law::RaiseErrorHandleWith,
                Law::HandleErrorWithPure,
                Law::RaiseErrorFlatMap,
            ],
            Self::Foldable => &[],
        }
    }

    /// Laws of this capability and all of its ancestors, ancestors first.
    pub fn all_laws(self) -> Vec<Law> {
        let mut laws = self.parent().map_or_else(Vec::new, Self::all_laws);
        laws.extend_from_slice(self.laws());
        laws
    }

    /// Returns `true` if `self` is `other` or transitively extends it.
    pub fn extends(self, other: Self) -> bool {
        let mut current = Some(self);
        while let Some(capability) = current {
            if capability == other {
                return true;
            }
            current = capability.parent();
        }
        false
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// An equation every instance of some capability must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Law {
    /// `combine(combine(x, y), z) == combine(x, combine(y, z))`
    Associativity,
    /// `combine(empty(), x) == x`
    LeftIdentity,
    /// `combine(x, empty()) == x`
    RightIdentity,
    /// `imap(fa, id, id) == fa`
    InvariantIdentity,
    /// `imap(imap(fa, f1, g1), f2, g2) == imap(fa, f2 . f1, g1 . g2)`
    InvariantComposition,
    /// `map(fa, id) == fa`
    CovariantIdentity,
    /// `map(map(fa, f), g) == map(fa, g . f)`
    CovariantComposition,
    /// `ap(pure(id), fa) == fa`
    ApplicativeIdentity,
    /// `ap(pure(f), pure(a)) == pure(f(a))`
    ApplicativeHomomorphism,
    /// `ap(ff, pure(a)) == ap(pure(|f| f(a)), ff)`
    ApplicativeInterchange,
    /// `ap(ap(ap(pure(compose), u), v), w) == ap(u, ap(v, w))`
    ApplicativeComposition,
    /// `flat_map(pure(a), f) == f(a)`
    MonadLeftIdentity,
    /// `flat_map(fa, pure) == fa`
    MonadRightIdentity,
    /// `flat_map(flat_map(fa, f), g) == flat_map(fa, |a| flat_map(f(a), g))`
    MonadAssociativity,
    /// `handle_error_with(raise_error(e), f) == f(e)`
    RaiseErrorHandleWith,
    /// `handle_error_with(pure(a), f) == pure(a)`
    HandleErrorWithPure,
    /// `flat_map(raise_error(e), f) == raise_error(e)`
    RaiseErrorFlatMap,
    /// `to(from(b)) == b` for the conversions of a derived instance.
    RoundTrip,
}

impl Law {
    /// The law name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Associativity => "associativity",
            Self::LeftIdentity => "left identity",
            Self::RightIdentity => "right identity",
            Self::InvariantIdentity => "invariant identity",
            Self::InvariantComposition => "invariant composition",
            Self::CovariantIdentity => "covariant identity",
            Self::CovariantComposition => "covariant composition",
            Self::ApplicativeIdentity => "applicative identity",
            Self::ApplicativeHomomorphism => "applicative homomorphism",
            Self::ApplicativeInterchange => "applicative interchange",
            Self::ApplicativeComposition => "applicative composition",
            Self::MonadLeftIdentity => "monad left identity",
            Self::MonadRightIdentity => "monad right identity",
            Self::MonadAssociativity => "monad associativity",
            Self::RaiseErrorHandleWith => "raise error then handle",
            Self::HandleErrorWithPure => "handle pure",
            Self::RaiseErrorFlatMap => "raise error short-circuits flat_map",
            Self::RoundTrip => "conversion round trip",
        }
    }

    /// The equation, in pseudo-code.
    pub const fn equation(self) -> &'static str {
        match self {
            Self::Associativity => "combine(combine(x, y), z) == combine(x, combine(y, z))",
            Self::LeftIdentity => "combine(empty(), x) == x",
            Self::RightIdentity => "combine(x, empty()) == x",
            Self::InvariantIdentity => "imap(fa, id, id) == fa",
            Self::InvariantComposition => {
                "imap(imap(fa, f1, g1), f2, g2) == imap(fa, f2 . f1, g1 . g2)"
            }
            Self::CovariantIdentity => "map(fa, id) == fa",
            Self::CovariantComposition => "map(map(fa, f), g) == map(fa, g . f)",
            Self::ApplicativeIdentity => "ap(pure(id), fa) == fa",
            Self::ApplicativeHomomorphism => "ap(pure(f), pure(a)) == pure(f(a))",
            Self::ApplicativeInterchange => "ap(ff, pure(a)) == ap(pure(|f| f(a)), ff)",
            Self::ApplicativeComposition => {
                "ap(ap(ap(pure(compose), u), v), w) == ap(u, ap(v, w))"
            }
            Self::MonadLeftIdentity => "flat_map(pure(a), f) == f(a)",
            Self::MonadRightIdentity => "flat_map(fa, pure) == fa",
            Self::MonadAssociativity => {
                "flat_map(flat_map(fa, f), g) == flat_map(fa, |a| flat_map(f(a), g))"
            }
            Self::RaiseErrorHandleWith => "handle_error_with(raise_error(e), f) == f(e)",
            Self::HandleErrorWithPure => "handle_error_with(pure(a), f) == pure(a)",
            Self::RaiseErrorFlatMap => "flat_map(raise_error(e), f) == raise_error(e)",
            Self::RoundTrip => "to(from(b)) == b",
        }
    }
}

impl fmt::Display for Law {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// Type-level capability tags, used to key the static registry.
///
/// ```rust
/// use kindred::typeclass::Capability;
/// use kindred::typeclass::cap::{self, Descriptor};
///
/// assert_eq!(<cap::MonoidK as Descriptor>::CAPABILITY, Capability::MonoidK);
/// ```
pub mod cap {
    use super::Capability;

    /// Links a type-level tag to its [`Capability`].
    pub trait Descriptor: 'static {
        /// The described capability.
        const CAPABILITY: Capability;
    }

    macro_rules! descriptors {
        ($($name:ident),+ $(,)?) => {
            $(
                #[doc = concat!("Type-level tag for [`Capability::", stringify!($name), "`].")]
                #[derive(Debug)]
                pub enum $name {}

                impl Descriptor for $name {
                    const CAPABILITY: Capability = Capability::$name;
                }
            )+
        };
    }

    descriptors!(
        Semigroup,
        Monoid,
        SemigroupK,
        MonoidK,
        Invariant,
        Functor,
        Applicative,
        Monad,
        MonadError,
        Foldable,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Capability::MonadError, Capability::Invariant, true)]
    #[case(Capability::Monad, Capability::Functor, true)]
    #[case(Capability::MonoidK, Capability::SemigroupK, true)]
    #[case(Capability::Monoid, Capability::MonoidK, false)]
    #[case(Capability::Functor, Capability::Monad, false)]
    fn extends_follows_the_hierarchy(
        #[case] child: Capability,
        #[case] ancestor: Capability,
        #[case] expected: bool,
    ) {
        assert_eq!(child.extends(ancestor), expected);
    }

    #[rstest]
    fn monad_error_inherits_every_kind_law() {
        let laws = Capability::MonadError.all_laws();
        assert_eq!(laws.first(), Some(&Law::InvariantIdentity));
        assert_eq!(laws.last(), Some(&Law::RaiseErrorFlatMap));
        assert_eq!(laws.len(), 2 + 2 + 4 + 3 + 3);
    }

    #[rstest]
    fn every_capability_reaches_a_root() {
        for capability in Capability::ALL {
            let mut depth = 0;
            let mut current = Some(capability);
            while let Some(next) = current {
                depth += 1;
                current = next.parent();
            }
            assert!(depth <= 5, "{capability} has an unexpectedly deep hierarchy");
        }
    }

    #[rstest]
    fn laws_render_their_names() {
        assert_eq!(Law::MonadLeftIdentity.to_string(), "monad left identity");
        assert_eq!(Capability::MonoidK.to_string(), "MonoidK");
        assert!(Law::RoundTrip.equation().contains("to(from(b))"));
    }
}
