//! Consumer-side tests for the derivation strategies.
//!
//! Three single-value families are declared the way a downstream crate
//! would declare them, each with a different native core:
//!
//! - `Chained`: native `{pure, bind}`; `map`, `apply`, and `join` all
//!   derived.
//! - `Stacked`: native `{pure, join, map}`; `bind` derived, `apply`
//!   native (the apply strategy requires native `bind`, which `Stacked`
//!   does not have).
//! - `Applied`: applicative only, native `{pure, apply}`; `map` derived
//!   through application.
//!
//! All three carry the same trivial semantics as `Identity`, so every
//! derived operation can be checked against the natively-implemented
//! baseline.

use catena::conform;
use catena::deriving::{NativeApply, NativeBind, NativeJoin, NativeMap};
use catena::{Applicative, Family, Functor, Identity, Monad};
use proptest::prelude::*;

// =============================================================================
// Chained: minimal bind core
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Chained<A>(A);

impl<A> Family for Chained<A> {
    type Elem = A;
    type Of<B> = Chained<B>;
}

impl<A> Functor for Chained<A> {
    catena::derive_map_from_bind_and_pure!();

    fn map_ref<B, F>(&self, function: F) -> Chained<B>
    where
        F: FnOnce(&A) -> B,
    {
        Chained(function(&self.0))
    }
}

impl<A> Applicative for Chained<A> {
    fn pure<B>(value: B) -> Chained<B> {
        Chained(value)
    }

    catena::derive_apply_from_bind_and_pure!();
}

impl<A> Monad for Chained<A> {
    fn bind<B, F>(self, function: F) -> Chained<B>
    where
        F: FnOnce(A) -> Chained<B>,
    {
        function(self.0)
    }

    catena::derive_join_from_bind!();
}

impl<A> NativeBind for Chained<A> {}

// =============================================================================
// Stacked: minimal join/map core
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Stacked<A>(A);

impl<A> Family for Stacked<A> {
    type Elem = A;
    type Of<B> = Stacked<B>;
}

impl<A> Functor for Stacked<A> {
    fn map<B, F>(self, function: F) -> Stacked<B>
    where
        F: FnOnce(A) -> B,
    {
        Stacked(function(self.0))
    }

    fn map_ref<B, F>(&self, function: F) -> Stacked<B>
    where
        F: FnOnce(&A) -> B,
    {
        Stacked(function(&self.0))
    }
}

impl<A> Applicative for Stacked<A> {
    fn pure<B>(value: B) -> Stacked<B> {
        Stacked(value)
    }

    fn apply<B, Output>(self, value: Stacked<B>) -> Stacked<Output>
    where
        A: FnOnce(B) -> Output,
    {
        Stacked((self.0)(value.0))
    }
}

impl<A> Monad for Stacked<A> {
    catena::derive_bind_from_join_and_map!();

    fn join(nested: Stacked<Stacked<A>>) -> Stacked<A> {
        nested.0
    }
}

impl<A> NativeJoin for Stacked<A> {}
impl<A> NativeMap for Stacked<A> {}

// =============================================================================
// Applied: applicative only, map derived through application
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Applied<A>(A);

impl<A> Family for Applied<A> {
    type Elem = A;
    type Of<B> = Applied<B>;
}

impl<A> Functor for Applied<A> {
    catena::derive_map_from_apply!();

    fn map_ref<B, F>(&self, function: F) -> Applied<B>
    where
        F: FnOnce(&A) -> B,
    {
        Applied(function(&self.0))
    }
}

impl<A> Applicative for Applied<A> {
    fn pure<B>(value: B) -> Applied<B> {
        Applied(value)
    }

    fn apply<B, Output>(self, value: Applied<B>) -> Applied<Output>
    where
        A: FnOnce(B) -> Output,
    {
        Applied((self.0)(value.0))
    }
}

impl<A> NativeApply for Applied<A> {}

// =============================================================================
// Conformance
// =============================================================================

#[test]
fn derived_families_are_instances() {
    conform::assert_monad::<Chained<i32>>();
    conform::assert_monad::<Stacked<i32>>();
    conform::assert_applicative::<Applied<i32>>();
    // Functor conformance of an applicative-only family follows from the
    // supertrait edge.
    conform::assert_functor::<Applied<i32>>();
}

// =============================================================================
// Derived operations agree with their defining equations
// =============================================================================

proptest! {
    #[test]
    fn prop_chained_derived_map_agrees_with_equation(value in any::<i32>()) {
        let f = |n: i32| n.wrapping_add(9);
        let derived = Chained(value).map(f);
        let by_equation = Chained(value).bind(|x| <Chained<i32> as Applicative>::pure(f(x)));
        prop_assert_eq!(derived, by_equation);
    }

    #[test]
    fn prop_chained_derived_join_agrees_with_equation(value in any::<i32>()) {
        let nested = Chained(Chained(value));
        let derived = <Chained<i32> as Monad>::join(nested);
        let by_equation = nested.bind(|inner| inner);
        prop_assert_eq!(derived, by_equation);
    }

    #[test]
    fn prop_stacked_derived_bind_agrees_with_equation(value in any::<i32>()) {
        let f = |n: i32| Stacked(n.wrapping_mul(5));
        let derived = Stacked(value).bind(f);
        let by_equation = <Stacked<i32> as Monad>::join(Stacked(value).map(f));
        prop_assert_eq!(derived, by_equation);
    }

    #[test]
    fn prop_applied_derived_map_agrees_with_equation(value in any::<i32>()) {
        let f = |n: i32| n.wrapping_sub(2);
        let derived = Applied(value).map(f);
        let by_equation = <Applied<()> as Applicative>::pure(f).apply(Applied(value));
        prop_assert_eq!(derived, by_equation);
    }
}

// =============================================================================
// Derived cores agree with the natively-implemented baseline
// =============================================================================

proptest! {
    #[test]
    fn prop_chained_agrees_with_identity(value in any::<i32>()) {
        let f = |n: i32| n.wrapping_add(1);

        let chained = Chained(value).map(f);
        let baseline = Identity(value).map(f);
        prop_assert_eq!(chained.0, baseline.0);
    }

    #[test]
    fn prop_chained_apply_agrees_with_identity(value in any::<i32>()) {
        let f = |n: i32| n.wrapping_mul(7);

        let chained = <Chained<()> as Applicative>::pure(f).apply(Chained(value));
        let baseline = <Identity<()> as Applicative>::pure(f).apply(Identity(value));
        prop_assert_eq!(chained.0, baseline.0);
    }

    #[test]
    fn prop_stacked_bind_agrees_with_identity(value in any::<i32>()) {
        let stacked = Stacked(value).bind(|n| Stacked(n.wrapping_mul(2)));
        let baseline = Identity(value).bind(|n| Identity(n.wrapping_mul(2)));
        prop_assert_eq!(stacked.0, baseline.0);
    }
}

// =============================================================================
// Monad laws hold for the derived operations too
// =============================================================================

proptest! {
    #[test]
    fn prop_chained_left_identity_law(value in any::<i32>()) {
        let f = |n: i32| Chained(n.wrapping_add(4));
        let lifted: Chained<i32> = <Chained<()> as Applicative>::pure(value);
        prop_assert_eq!(lifted.bind(f), f(value));
    }

    #[test]
    fn prop_stacked_right_identity_law(value in any::<i32>()) {
        let wrapped = Stacked(value);
        prop_assert_eq!(wrapped.bind(<Stacked<i32> as Applicative>::pure), wrapped);
    }

    #[test]
    fn prop_stacked_associativity_law(value in any::<i32>()) {
        let f = |n: i32| Stacked(n.wrapping_add(1));
        let g = |n: i32| Stacked(n.wrapping_mul(2));

        let left = Stacked(value).bind(f).bind(g);
        let right = Stacked(value).bind(|x| f(x).bind(g));
        prop_assert_eq!(left, right);
    }
}
