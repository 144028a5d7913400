//! Opt-in derivation strategies for capability operations.
//!
//! A monad instance only has to write one of two native cores,
//! `{pure, bind}` or `{pure, join, map}`, and can fill the remaining
//! operations with the strategies in this module. Each strategy is a
//! `macro_rules!` mixin invoked inside the instance's impl block, expanding
//! to the method it derives:
//!
//! | strategy | fills | defining equation | needs native |
//! |---|---|---|---|
//! | [`derive_join_from_bind!`] | `Monad::join` | `join(m) = bind(m, id)` | [`NativeBind`] |
//! | [`derive_map_from_bind_and_pure!`] | `Functor::map` | `map(f, m) = bind(m, pure ∘ f)` | [`NativeBind`] |
//! | [`derive_bind_from_join_and_map!`] | `Monad::bind` | `bind(m, f) = join(map(f, m))` | [`NativeJoin`], [`NativeMap`] |
//! | [`derive_apply_from_bind_and_pure!`] | `Applicative::apply` | `apply(mf, m) = bind(mf, f -> bind(m, pure ∘ f))` | [`NativeBind`] |
//! | [`derive_map_from_apply!`] | `Functor::map` | `map(f, m) = apply(pure(f), m)` | [`NativeApply`] |
//!
//! Selection is always explicit (the macro call written in the impl), and
//! at most one definition per method can exist, so two strategies can never
//! compete for the same operation.
//!
//! # Native-core markers
//!
//! Deriving `bind` from `join` while `join` is derived from `bind` would
//! recurse forever. The marker traits below make that unrepresentable: an
//! instance declares which primitives it wrote by hand, every strategy
//! asserts its prerequisites against those declarations at compile time,
//! and no strategy ever declares a marker itself. A derivation therefore
//! bottoms out in hand-written code after exactly one step, and opting into
//! a strategy whose prerequisite is missing (or itself derived) fails the
//! build:
//!
//! ```compile_fail
//! use catena::{Applicative, Family, Functor, Monad};
//!
//! struct Plain<A>(A);
//!
//! impl<A> Family for Plain<A> {
//!     type Elem = A;
//!     type Of<B> = Plain<B>;
//! }
//!
//! impl<A> Functor for Plain<A> {
//!     fn map<B, F>(self, function: F) -> Plain<B>
//!     where
//!         F: FnOnce(A) -> B,
//!     {
//!         Plain(function(self.0))
//!     }
//!
//!     fn map_ref<B, F>(&self, function: F) -> Plain<B>
//!     where
//!         F: FnOnce(&A) -> B,
//!     {
//!         Plain(function(&self.0))
//!     }
//! }
//!
//! impl<A> Applicative for Plain<A> {
//!     fn pure<B>(value: B) -> Plain<B> {
//!         Plain(value)
//!     }
//!
//!     fn apply<B, Output>(self, value: Plain<B>) -> Plain<Output>
//!     where
//!         A: FnOnce(B) -> Output,
//!     {
//!         Plain((self.0)(value.0))
//!     }
//! }
//!
//! // Rejected: `Plain` never declared NativeJoin/NativeMap, so the
//! // strategy's prerequisites are unsatisfied.
//! impl<A> Monad for Plain<A> {
//!     catena::derive_bind_from_join_and_map!();
//!
//!     fn join(nested: Plain<Plain<A>>) -> Plain<A> {
//!         nested.0
//!     }
//! }
//! ```
//!
//! # Writing an instance
//!
//! A bind-core family in full:
//!
//! ```rust
//! use catena::{Applicative, Family, Functor, Monad};
//! use catena::deriving::NativeBind;
//!
//! #[derive(Debug, PartialEq)]
//! struct Thunk<A>(A);
//!
//! impl<A> Family for Thunk<A> {
//!     type Elem = A;
//!     type Of<B> = Thunk<B>;
//! }
//!
//! impl<A> Functor for Thunk<A> {
//!     catena::derive_map_from_bind_and_pure!();
//!
//!     fn map_ref<B, F>(&self, function: F) -> Thunk<B>
//!     where
//!         F: FnOnce(&A) -> B,
//!     {
//!         Thunk(function(&self.0))
//!     }
//! }
//!
//! impl<A> Applicative for Thunk<A> {
//!     fn pure<B>(value: B) -> Thunk<B> {
//!         Thunk(value)
//!     }
//!
//!     catena::derive_apply_from_bind_and_pure!();
//! }
//!
//! impl<A> Monad for Thunk<A> {
//!     fn bind<B, F>(self, function: F) -> Thunk<B>
//!     where
//!         F: FnOnce(A) -> Thunk<B>,
//!     {
//!         function(self.0)
//!     }
//!
//!     catena::derive_join_from_bind!();
//! }
//!
//! impl<A> NativeBind for Thunk<A> {}
//!
//! assert_eq!(Thunk(2).map(|n| n + 1), Thunk(3));
//! assert_eq!(<Thunk<i32> as Monad>::join(Thunk(Thunk(7))), Thunk(7));
//! ```
//!
//! The borrowing [`Functor::map_ref`] overload is never derived: any
//! instance can produce it directly against its own representation, while a
//! bind-backed version would force a `Clone` bound the `Functor` contract
//! does not carry.
//!
//! [`Functor::map_ref`]: crate::Functor::map_ref

use super::applicative::Applicative;
use super::functor::Functor;
use super::monad::Monad;

/// Declares that a family's [`Monad::bind`] is written by hand, not
/// derived.
///
/// [`Monad::bind`]: crate::Monad::bind
pub trait NativeBind: Monad {}

/// Declares that a family's [`Monad::join`] is written by hand, not
/// derived.
///
/// [`Monad::join`]: crate::Monad::join
pub trait NativeJoin: Monad {}

/// Declares that a family's [`Functor::map`] is written by hand, not
/// derived.
///
/// [`Functor::map`]: crate::Functor::map
pub trait NativeMap: Functor {}

/// Declares that a family's [`Applicative::apply`] is written by hand, not
/// derived.
///
/// [`Applicative::apply`]: crate::Applicative::apply
pub trait NativeApply: Applicative {}

/// Compile-time prerequisite check for strategies built on `bind`.
#[inline]
pub fn require_native_bind<M: NativeBind>() {}

/// Compile-time prerequisite check for strategies built on `join`.
#[inline]
pub fn require_native_join<M: NativeJoin>() {}

/// Compile-time prerequisite check for strategies built on `map`.
#[inline]
pub fn require_native_map<M: NativeMap>() {}

/// Compile-time prerequisite check for strategies built on `apply`.
#[inline]
pub fn require_native_apply<M: NativeApply>() {}

/// Fills [`Monad::join`] as `join(m) = bind(m, id)`.
///
/// Invoke inside the family's `Monad` impl. Requires the family to declare
/// [`NativeBind`].
///
/// [`Monad::join`]: crate::Monad::join
#[macro_export]
macro_rules! derive_join_from_bind {
    () => {
        #[inline]
        fn join(nested: Self::Of<Self>) -> Self
        where
            Self: Sized,
        {
            $crate::deriving::require_native_bind::<Self::Of<Self>>();
            $crate::Monad::bind(nested, |inner| inner)
        }
    };
}

/// Fills [`Functor::map`] as `map(f, m) = bind(m, |x| pure(f(x)))`.
///
/// Invoke inside the family's `Functor` impl. Requires the family to
/// declare [`NativeBind`]; `pure` is native by definition.
///
/// [`Functor::map`]: crate::Functor::map
#[macro_export]
macro_rules! derive_map_from_bind_and_pure {
    () => {
        #[inline]
        fn map<B, F>(self, function: F) -> Self::Of<B>
        where
            Self: Sized,
            F: FnOnce(Self::Elem) -> B,
        {
            $crate::deriving::require_native_bind::<Self>();
            $crate::Monad::bind(self, move |value| {
                <Self as $crate::Applicative>::pure(function(value))
            })
        }
    };
}

/// Fills [`Monad::bind`] as `bind(m, f) = join(map(f, m))`.
///
/// Invoke inside the family's `Monad` impl. Requires the family to declare
/// both [`NativeJoin`] and [`NativeMap`].
///
/// [`Monad::bind`]: crate::Monad::bind
#[macro_export]
macro_rules! derive_bind_from_join_and_map {
    () => {
        #[inline]
        fn bind<B, F>(self, function: F) -> Self::Of<B>
        where
            Self: Sized,
            F: FnOnce(Self::Elem) -> Self::Of<B>,
        {
            $crate::deriving::require_native_join::<Self::Of<B>>();
            $crate::deriving::require_native_map::<Self>();
            <Self::Of<B> as $crate::Monad>::join($crate::Functor::map(self, function))
        }
    };
}

/// Fills [`Applicative::apply`] as
/// `apply(mf, m) = bind(mf, |f| bind(m, |x| pure(f(x))))`.
///
/// Invoke inside the family's `Applicative` impl. Requires the family to
/// declare [`NativeBind`].
///
/// [`Applicative::apply`]: crate::Applicative::apply
#[macro_export]
macro_rules! derive_apply_from_bind_and_pure {
    () => {
        #[inline]
        fn apply<B, Output>(self, value: Self::Of<B>) -> Self::Of<Output>
        where
            Self: Sized,
            Self::Elem: FnOnce(B) -> Output,
        {
            $crate::deriving::require_native_bind::<Self>();
            $crate::Monad::bind(self, move |function| {
                $crate::Monad::bind(value, move |inner| {
                    <Self as $crate::Applicative>::pure(function(inner))
                })
            })
        }
    };
}

/// Fills [`Functor::map`] as `map(f, m) = apply(pure(f), m)`.
///
/// The mapping default for families whose natural primitive is contextual
/// application. Invoke inside the family's `Functor` impl; requires the
/// family to declare [`NativeApply`].
///
/// [`Functor::map`]: crate::Functor::map
#[macro_export]
macro_rules! derive_map_from_apply {
    () => {
        #[inline]
        fn map<B, F>(self, function: F) -> Self::Of<B>
        where
            Self: Sized,
            F: FnOnce(Self::Elem) -> B,
        {
            $crate::deriving::require_native_apply::<Self>();
            $crate::Applicative::apply(<Self as $crate::Applicative>::pure(function), self)
        }
    };
}
