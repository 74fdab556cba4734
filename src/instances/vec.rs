//! Instances for [`Vec`].
//!
//! `Vec` models nondeterminism: `ap` and `flat_map` produce every
//! combination, in order. It has no error channel.

use crate::typeclass::{
    Applicative, Foldable, ForVec, Functor, Invariant, Kind, Monad, MonoidK, Morphism, SemigroupK,
    Value,
};

/// Every capability `Vec` supports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct VecInstances;

impl Invariant<ForVec> for VecInstances {
    fn imap<A, B, To, Back>(&self, fa: Kind<ForVec, A>, to: To, _from: Back) -> Kind<ForVec, B>
    where
        A: Value,
        B: Value,
        To: Fn(A) -> B + Send + Sync + 'static,
        Back: Fn(B) -> A + Send + Sync + 'static,
    {
        self.map(fa, to)
    }
}

impl Functor<ForVec> for VecInstances {
    fn map<A, B, Function>(&self, fa: Kind<ForVec, A>, function: Function) -> Kind<ForVec, B>
    where
        A: Value,
        B: Value,
        Function: Fn(A) -> B + Send + Sync + 'static,
    {
        Kind::new(fa.fix().into_iter().map(function).collect())
    }
}

impl Applicative<ForVec> for VecInstances {
    fn pure<A: Value>(&self, value: A) -> Kind<ForVec, A> {
        Kind::new(vec![value])
    }

    fn ap<A: Value, B: Value>(&self, ff: Kind<ForVec, Morphism<A, B>>, fa: Kind<ForVec, A>) -> Kind<ForVec, B> {
        let values = fa.fix();
        let functions = ff.fix();
        let mut applied = Vec::with_capacity(functions.len().saturating_mul(values.len()));
        for function in &functions {
            applied.extend(values.iter().cloned().map(|value| function(value)));
        }
        Kind::new(applied)
    }
}

impl Monad<ForVec> for VecInstances {
    fn flat_map<A, B, Function>(&self, fa: Kind<ForVec, A>, function: Function) -> Kind<ForVec, B>
    where
        A: Value,
        B: Value,
        Function: Fn(A) -> Kind<ForVec, B> + Send + Sync + 'static,
    {
        Kind::new(
            fa.fix()
                .into_iter()
                .flat_map(|value| function(value).fix())
                .collect(),
        )
    }
}

impl SemigroupK<ForVec> for VecInstances {
    fn combine_k<A: Value>(&self, left: Kind<ForVec, A>, right: Kind<ForVec, A>) -> Kind<ForVec, A> {
        let mut combined = left.fix();
        combined.extend(right.fix());
        Kind::new(combined)
    }
}

impl MonoidK<ForVec> for VecInstances {
    fn empty_k<A: Value>(&self) -> Kind<ForVec, A> {
        Kind::new(Vec::new())
    }
}

impl Foldable<ForVec> for VecInstances {
    fn fold_left<A, B, Function>(&self, fa: Kind<ForVec, A>, init: B, function: Function) -> B
    where
        A: Value,
        Function: FnMut(B, A) -> B,
    {
        fa.fix().into_iter().fold(init, function)
    }
}

static_assertions::assert_impl_all!(VecInstances: Copy, Send, Sync);
