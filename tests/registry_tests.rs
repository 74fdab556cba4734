//! Tests for instance resolution.
//!
//! - Canonical instances resolved statically with `lookup`
//! - Canonical instances provided by a downstream type
//! - The dynamic registry: registration, lookup failures and sharing
//!   between threads

use std::sync::Arc;
use std::thread;

use kindred::error::RegistryError;
use kindred::instances::{Concat, OptionInstances, Product, ResultInstances, Sum, VecInstances};
use kindred::registry::{InstanceRegistry, Provide, RegistryBuilder, lookup};
use kindred::typeclass::{
    Capability, ForOption, ForResult, ForVec, Functor, IntoKind, Kind, Monad, MonadError, Monoid,
    MonoidK, Semigroup, SemigroupK, Witness, cap,
};
use rstest::rstest;

// =============================================================================
// Generic code written once
// =============================================================================

fn double_all<F, I>(instance: &I, fa: Kind<F, i32>) -> Kind<F, i32>
where
    F: Witness,
    I: Functor<F>,
{
    instance.map(fa, |n: i32| n * 2)
}

fn summarize<A, M: Monoid<A>>(monoid: &M, values: Vec<A>) -> A {
    monoid.combine_all(values)
}

#[rstest]
fn generic_functor_code_runs_on_each_witness() {
    let option = double_all(&lookup::<ForOption, cap::Functor>(), Some(4).kind());
    let vec = double_all(&lookup::<ForVec, cap::Functor>(), vec![1, 2, 3].kind());
    let result = double_all(&lookup::<ForResult<String>, cap::Functor>(), Ok::<i32, String>(5).kind());

    assert_eq!(option.fix(), Some(8));
    assert_eq!(vec.fix(), vec![2, 4, 6]);
    assert_eq!(result.fix(), Ok(10));
}

#[rstest]
#[case(vec![1, 2, 3, 4], 10)]
#[case(vec![], 0)]
fn generic_monoid_code_with_canonical_instance(#[case] values: Vec<i64>, #[case] expected: i64) {
    assert_eq!(summarize(&lookup::<i64, cap::Monoid>(), values), expected);
}

#[rstest]
fn algebra_is_chosen_at_the_call_site() {
    let values = vec![2_u32, 3, 4];
    assert_eq!(summarize(&Sum, values.clone()), 9);
    assert_eq!(summarize(&Product, values), 24);
}

#[rstest]
fn canonical_monad_error_for_result() {
    let instance = lookup::<ForResult<String>, cap::MonadError>();
    let recovered = instance.handle_error_with(instance.raise_error("lost".to_string()), |e: String| {
        Ok::<i32, String>(i32::try_from(e.len()).unwrap_or(0)).kind()
    });
    assert_eq!(recovered.fix(), Ok(4));
}

#[rstest]
fn canonical_monoid_k_for_vec() {
    let instance = lookup::<ForVec, cap::MonoidK>();
    let combined = instance.combine_k(vec![1].kind(), instance.empty_k());
    assert_eq!(combined.fix(), vec![1]);
}

#[rstest]
fn canonical_string_monoid_is_concatenation() {
    let concat = lookup::<String, cap::Semigroup>();
    assert_eq!(concat.combine("kin".to_string(), "dred".to_string()), "kindred");
}

// =============================================================================
// Downstream canonical instances
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Celsius(i32);

#[derive(Debug, Clone, Copy)]
struct Warmest;

impl Semigroup<Celsius> for Warmest {
    fn combine(&self, left: Celsius, right: Celsius) -> Celsius {
        if left.0 >= right.0 { left } else { right }
    }
}

impl Monoid<Celsius> for Warmest {
    fn empty(&self) -> Celsius {
        Celsius(-273)
    }
}

impl Provide<cap::Monoid> for Celsius {
    type Instance = Warmest;

    fn instance() -> Warmest {
        Warmest
    }
}

#[rstest]
fn downstream_type_provides_its_instance() {
    let readings = vec![Celsius(12), Celsius(31), Celsius(-4)];
    assert_eq!(summarize(&lookup::<Celsius, cap::Monoid>(), readings), Celsius(31));
    assert_eq!(summarize(&lookup::<Celsius, cap::Monoid>(), Vec::new()), Celsius(-273));
}

// =============================================================================
// Dynamic registry
// =============================================================================

fn populated() -> InstanceRegistry {
    let mut builder = RegistryBuilder::new();
    builder
        .register_canonical::<ForOption, cap::Monad>()
        .and_then(|builder| builder.register_canonical::<ForVec, cap::Foldable>())
        .and_then(|builder| builder.register::<ForResult<String>, cap::MonadError, _>(ResultInstances::<String>::new()))
        .and_then(|builder| builder.register::<Celsius, cap::Monoid, _>(Warmest))
        .and_then(|builder| builder.register::<String, cap::Monoid, _>(Concat))
        .unwrap();
    builder.build()
}

#[rstest]
fn registered_instances_are_found() {
    let registry = populated();

    let monad = registry.lookup::<ForOption, cap::Monad, OptionInstances>().unwrap();
    let bound = monad.flat_map(Some(3).kind(), |n: i32| Some(n + 1).kind());
    assert_eq!(bound.fix(), Some(4));

    let warmest = registry.lookup::<Celsius, cap::Monoid, Warmest>().unwrap();
    assert_eq!(warmest.combine(Celsius(1), Celsius(2)), Celsius(2));

    assert!(registry.contains::<ForVec, cap::Foldable>());
    assert_eq!(registry.len(), 5);
    assert!(!registry.is_empty());
}

#[rstest]
fn capability_is_part_of_the_key() {
    let registry = populated();

    let error = registry
        .lookup::<ForOption, cap::Functor, OptionInstances>()
        .unwrap_err();
    assert!(matches!(
        error,
        RegistryError::NotFound {
            capability: Capability::Functor,
            ..
        }
    ));
}

#[rstest]
fn subject_is_part_of_the_key() {
    let registry = populated();
    assert!(!registry.contains::<ForResult<i32>, cap::MonadError>());
    assert!(registry.contains::<ForResult<String>, cap::MonadError>());
    assert!(!registry.contains::<Vec<u8>, cap::Monoid>());
}

#[rstest]
fn duplicate_registration_keeps_the_first() {
    let mut builder = RegistryBuilder::new();
    builder.register::<ForVec, cap::MonoidK, _>(VecInstances).unwrap();

    let error = builder
        .register::<ForVec, cap::MonoidK, _>(VecInstances)
        .map(|_| ())
        .unwrap_err();
    assert!(matches!(error, RegistryError::Ambiguous { capability: Capability::MonoidK, .. }));
    assert!(error.to_string().contains("ambiguous MonoidK instance"));

    let registry = builder.build();
    assert_eq!(registry.len(), 1);
    assert!(registry.lookup::<ForVec, cap::MonoidK, VecInstances>().is_ok());
}

#[rstest]
fn wrong_instance_type_is_reported() {
    let registry = populated();
    let found = registry.lookup::<String, cap::Monoid, Concat>().map(|_| ());
    assert_eq!(found, Ok(()));

    let mut builder = RegistryBuilder::new();
    builder.register::<u64, cap::Monoid, _>(Product).unwrap();
    let error = builder
        .build()
        .lookup::<u64, cap::Monoid, Sum>()
        .map(|_| ())
        .unwrap_err();
    match error {
        RegistryError::InstanceType { expected, actual, .. } => {
            assert!(expected.ends_with("Sum"));
            assert!(actual.ends_with("Product"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[rstest]
fn registry_is_shared_between_threads() {
    let registry = Arc::new(populated());

    let handles: Vec<_> = (0..4)
        .map(|offset| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let monad = registry
                    .lookup::<ForOption, cap::Monad, OptionInstances>()
                    .unwrap();
                monad
                    .flat_map(Some(offset).kind(), |n: i32| Some(n * 10).kind())
                    .fix()
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|handle| handle.join().unwrap()).collect();
    assert_eq!(results, vec![Some(0), Some(10), Some(20), Some(30)]);
}

#[rstest]
fn debug_lists_capabilities_and_instances() {
    let rendered = format!("{:?}", populated());
    assert!(rendered.contains("Foldable"));
    assert!(rendered.contains("Warmest"));
}
