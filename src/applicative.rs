//! The contextual-application capability.
//!
//! An applicative family can lift a plain value into itself ([`pure`]) and
//! apply a wrapped function to a wrapped value ([`apply`]). Where a functor
//! transforms with an ordinary function, an applicative lets the function
//! itself carry the family's effect: a maybe-function applied to a
//! maybe-value, a fallible function applied to a fallible value.
//!
//! `pure` is the one operation of the whole capability stack that can never
//! be derived: only the instance knows how to build its minimal shape
//! around a value.
//!
//! [`pure`]: Applicative::pure
//! [`apply`]: Applicative::apply

use super::functor::Functor;
use super::identity::Identity;

/// A functor that can lift plain values and apply wrapped functions.
///
/// # Laws
///
/// For all values `x`, wrapped values `v`, and wrapped functions `u`:
///
/// - **identity**: `pure(|x| x).apply(v)` equals `v`;
/// - **homomorphism**: `pure(f).apply(pure(x))` equals `pure(f(x))`.
///
/// # Examples
///
/// ```rust
/// use catena::Applicative;
///
/// let lifted: Option<i32> = <Option<()> as Applicative>::pure(42);
/// assert_eq!(lifted, Some(42));
///
/// let function: Option<fn(i32) -> i32> = Some(|x| x + 1);
/// assert_eq!(function.apply(Some(5)), Some(6));
/// ```
pub trait Applicative: Functor {
    /// Lifts a plain value into the family.
    ///
    /// Mandatory for every instance; no derivation strategy produces it.
    fn pure<B>(value: B) -> Self::Of<B>;

    /// Applies the function contained in `self` to the value contained in
    /// `value`.
    ///
    /// Only callable when the element type of `self` is itself a callable;
    /// the family's effect is threaded through both operands, so e.g. an
    /// absent function or an absent argument each yield an absent result.
    fn apply<B, Output>(self, value: Self::Of<B>) -> Self::Of<Output>
    where
        Self: Sized,
        Self::Elem: FnOnce(B) -> Output;
}

// =============================================================================
// Option<A>
// =============================================================================

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn apply<B, Output>(self, value: Option<B>) -> Option<Output>
    where
        A: FnOnce(B) -> Output,
    {
        match (self, value) {
            (Some(function), Some(inner)) => Some(function(inner)),
            _ => None,
        }
    }
}

impl<A> crate::deriving::NativeApply for Option<A> {}

// =============================================================================
// Result<T, E>
// =============================================================================

impl<T, E: Clone> Applicative for Result<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Result<B, E> {
        Ok(value)
    }

    #[inline]
    fn apply<B, Output>(self, value: Result<B, E>) -> Result<Output, E>
    where
        T: FnOnce(B) -> Output,
    {
        match (self, value) {
            (Ok(function), Ok(inner)) => Ok(function(inner)),
            (Err(error), _) => Err(error),
            (_, Err(error)) => Err(error),
        }
    }
}

impl<T, E: Clone> crate::deriving::NativeApply for Result<T, E> {}

// =============================================================================
// Box<A>
// =============================================================================

impl<A> Applicative for Box<A> {
    #[inline]
    fn pure<B>(value: B) -> Box<B> {
        Box::new(value)
    }

    #[inline]
    fn apply<B, Output>(self, value: Box<B>) -> Box<Output>
    where
        A: FnOnce(B) -> Output,
    {
        let function = *self;
        Box::new(function(*value))
    }
}

impl<A> crate::deriving::NativeApply for Box<A> {}

// =============================================================================
// Identity<A>
// =============================================================================

impl<A> Applicative for Identity<A> {
    #[inline]
    fn pure<B>(value: B) -> Identity<B> {
        Identity(value)
    }

    #[inline]
    fn apply<B, Output>(self, value: Identity<B>) -> Identity<Output>
    where
        A: FnOnce(B) -> Output,
    {
        Identity((self.0)(value.0))
    }
}

impl<A> crate::deriving::NativeApply for Identity<A> {}
