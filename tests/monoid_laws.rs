#![cfg(feature = "laws")]
//! Property-based tests for the value-level algebras.
//!
//! - Semigroup and Monoid laws for the numeric, string and option monoids
//! - `MonoidK` laws for `Option` and `Vec`, and folding through a `MonoidK`
//!   algebra
//! - Invariant laws for `ForMonoid`, whose `imap` derives a new monoid

use kindred::instances::{Concat, Max, Min, OptionInstances, OptionMonoid, Product, Sum, VecInstances};
use kindred::laws::{InvariantLaws, KindSample, MonoidKLaws, MonoidLaws, check, kind_sample};
use kindred::registry::MonoidInvariant;
use kindred::typeclass::{
    Capability, Foldable, ForMonoid, ForOption, ForVec, IntoKind, Kind, Monoid, MonoidK, MonoidOf,
    Natural, Semigroup,
};
use proptest::prelude::*;
use rstest::rstest;

const SAMPLES: usize = 200;

// =============================================================================
// Monoid laws through the harness
// =============================================================================

#[rstest]
fn sum_is_a_monoid() {
    let report = check(&MonoidLaws::new(Sum), &Natural, any::<(i32, i32, i32)>(), SAMPLES).unwrap();
    assert!(report.conforms(), "{:?}", report.violations);
    assert_eq!(report.capability, Capability::Monoid);
}

#[rstest]
fn product_is_a_monoid() {
    let report = check(&MonoidLaws::new(Product), &Natural, any::<(i64, i64, i64)>(), SAMPLES).unwrap();
    assert!(report.conforms(), "{:?}", report.violations);
}

#[rstest]
fn max_and_min_are_monoids() {
    let max = check(&MonoidLaws::new(Max), &Natural, any::<(u8, u8, u8)>(), SAMPLES).unwrap();
    let min = check(&MonoidLaws::new(Min), &Natural, any::<(i16, i16, i16)>(), SAMPLES).unwrap();
    assert!(max.conforms());
    assert!(min.conforms());
}

#[rstest]
fn concat_is_a_monoid() {
    let strings = check(&MonoidLaws::new(Concat), &Natural, any::<(String, String, String)>(), SAMPLES).unwrap();
    let vectors = check(
        &MonoidLaws::new(Concat),
        &Natural,
        any::<(Vec<u8>, Vec<u8>, Vec<u8>)>(),
        SAMPLES,
    )
    .unwrap();
    assert!(strings.conforms());
    assert!(vectors.conforms());
}

#[rstest]
fn option_monoid_is_a_monoid() {
    let report = check(
        &MonoidLaws::new(OptionMonoid::new(Sum)),
        &Natural,
        any::<(Option<i32>, Option<i32>, Option<i32>)>(),
        SAMPLES,
    )
    .unwrap();
    assert!(report.conforms());
}

// =============================================================================
// MonoidK
// =============================================================================

fn option_kinds() -> impl Strategy<Value = Kind<ForOption, i32>> {
    any::<Option<i32>>().prop_map(IntoKind::kind)
}

fn vec_kinds() -> impl Strategy<Value = Kind<ForVec, i32>> {
    prop::collection::vec(any::<i32>(), 0..8).prop_map(IntoKind::kind)
}

#[rstest]
fn option_monoid_k_laws() {
    let laws = MonoidKLaws::<_, ForOption, i32>::new(OptionInstances);
    let report = check(&laws, &Natural, (option_kinds(), option_kinds(), option_kinds()), SAMPLES).unwrap();
    assert!(report.conforms());
    assert_eq!(report.laws_checked.len(), 3);
}

#[rstest]
fn vec_monoid_k_laws() {
    let laws = MonoidKLaws::<_, ForVec, i32>::new(VecInstances);
    let report = check(&laws, &Natural, (vec_kinds(), vec_kinds(), vec_kinds()), SAMPLES).unwrap();
    assert!(report.conforms());
}

#[rstest]
fn fold_single_option_through_monoid_k() {
    let folded = VecInstances.fold(vec![Some(1).kind()].kind(), &OptionInstances.algebra::<i32>());
    assert_eq!(folded, Some(1).kind());
}

proptest! {
    /// Folding through the `Option` algebra picks the first present element.
    #[test]
    fn prop_fold_picks_first_present(values in prop::collection::vec(any::<Option<i32>>(), 0..16)) {
        let expected = values.iter().flatten().next().copied();
        let wrapped: Vec<Kind<ForOption, i32>> = values.into_iter().map(IntoKind::kind).collect();
        let folded = VecInstances.fold(wrapped.kind(), &OptionInstances.algebra::<i32>());
        prop_assert_eq!(folded.fix(), expected);
    }

    /// `combine_all` agrees with a left fold from `empty`.
    #[test]
    fn prop_combine_all_is_left_fold(values in prop::collection::vec(any::<i64>(), 0..32)) {
        let folded = values.iter().fold(Monoid::<i64>::empty(&Sum), |total, &n| Sum.combine(total, n));
        prop_assert_eq!(Sum.combine_all(values), folded);
    }
}

// =============================================================================
// Invariant over monoids
// =============================================================================

fn monoids() -> impl Strategy<Value = KindSample<ForMonoid>> {
    let erased = prop_oneof![
        Just(MonoidOf::<i64>::new(Sum)),
        Just(MonoidOf::<i64>::new(Product)),
        Just(MonoidOf::<i64>::new(Max)),
        Just(MonoidOf::<i64>::new(Min)),
    ];
    kind_sample(erased.prop_map(IntoKind::kind))
}

fn same_monoid(left: &Kind<ForMonoid, i64>, right: &Kind<ForMonoid, i64>) -> bool {
    let (left, right) = (left.as_fixed(), right.as_fixed());
    let inputs = [(0, 0), (3, 4), (-7, 11), (i64::MAX, 1), (i64::MIN, -1)];
    left.empty() == right.empty()
        && inputs
            .iter()
            .all(|&(x, y)| left.combine(x, y) == right.combine(x, y))
}

#[rstest]
fn monoid_invariant_laws() {
    let report = check(&InvariantLaws::new(MonoidInvariant), &same_monoid, monoids(), SAMPLES).unwrap();
    assert!(report.conforms(), "{:?}", report.violations);
    assert_eq!(report.capability, Capability::Invariant);
}
