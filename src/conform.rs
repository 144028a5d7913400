//! Conformance predicates for capability instances.
//!
//! Whether a family is an instance of a capability is a question the type
//! system answers: the impl either exists or it does not. The functions
//! here turn that answer into something a test suite or a downstream crate
//! can state explicitly: each one compiles exactly when the queried family
//! holds the capability, and fails the build naming the missing impl
//! otherwise.
//!
//! ```rust
//! use catena::conform;
//!
//! conform::assert_functor::<Option<i32>>();
//! conform::assert_monad::<Result<String, ()>>();
//! ```
//!
//! ```compile_fail
//! use catena::conform;
//!
//! struct Plain<T>(T);
//!
//! // Rejected: no `Monad` impl for `Plain` exists.
//! conform::assert_monad::<Plain<i32>>();
//! ```
//!
//! # What an instance must supply
//!
//! | requirement | shape | notes |
//! |---|---|---|
//! | [`Family`] | `Elem`, `Of<B>` | one impl per type; all capabilities share it |
//! | [`Functor`] | `map`, `map_ref` | `map` may come from a derivation strategy |
//! | [`Applicative`] | `pure`, `apply` | `pure` is always native |
//! | [`Monad`] | `bind`, `join` | one of `{bind}` / `{join, map}` native, rest derived |
//! | native-core markers | [`crate::deriving`] | declare what was written by hand |
//!
//! Re-parametrisation cannot disagree between capabilities: there is only
//! one [`Family`] impl per type for every capability to dispatch through,
//! and a second one is a coherence error.

use super::applicative::Applicative;
use super::family::Family;
use super::functor::Functor;
use super::monad::Monad;

/// Compiles iff `F` is a parametrised family.
#[inline]
pub fn assert_family<F: Family>() {}

/// Compiles iff `F` is a functor instance.
#[inline]
pub fn assert_functor<F: Functor>() {}

/// Compiles iff `F` is an applicative instance.
#[inline]
pub fn assert_applicative<F: Applicative>() {}

/// Compiles iff `M` is a monad instance.
#[inline]
pub fn assert_monad<M: Monad>() {}
