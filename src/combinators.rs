//! Generic combinators over any conforming family.
//!
//! Every function here is written once against the capability traits and
//! works for any family whose instance exists: `Option`, `Result`, `Box`,
//! [`Identity`](crate::Identity), or a downstream type. The trait bounds
//! are the guard: applying a combinator to a family without the required
//! capability is a build failure naming the missing impl, never a runtime
//! fallback.
//!
//! ```compile_fail
//! use catena::combinators::lift_m;
//!
//! struct Plain<T>(T);
//!
//! // Rejected: `Plain` implements no capability.
//! let _ = lift_m(|x: i32| x + 1, Plain(1));
//! ```
//!
//! Because these are ordinary functions, they double as the first-class
//! "function object" forms: instantiate and pass them to higher-order code
//! directly.
//!
//! ```rust
//! use catena::combinators::fmap;
//!
//! let mapper = fmap::<Option<i32>, fn(i32) -> i32>;
//! assert_eq!(mapper(|n| n + 1, Some(5)), Some(6));
//! ```

use super::family::{Family, Morphism, ResultOf};
use super::functor::Functor;
use super::monad::Monad;

/// Maps `function` over `value`: the free-function form of
/// [`Functor::map`].
///
/// The result type is computed from the callable through
/// [`Morphism`], so `fmap` can be named and passed without spelling
/// out its result.
///
/// # Examples
///
/// ```rust
/// use catena::combinators::fmap;
///
/// assert_eq!(fmap(|n: i32| n + 1, Some(5)), Some(6));
/// assert_eq!(fmap(|n: i32| n + 1, None), None);
/// ```
#[inline]
pub fn fmap<M, F>(function: F, value: M) -> M::Of<ResultOf<F, M::Elem>>
where
    M: Functor,
    F: Morphism<M::Elem>,
{
    value.map(|inner| function.run(inner))
}

/// Sequences `value` into `function`: the free-function form of
/// [`Monad::bind`].
///
/// # Examples
///
/// ```rust
/// use catena::combinators::mbind;
///
/// let result = mbind(Some(5), |n| if n > 0 { Some(n * 2) } else { None });
/// assert_eq!(result, Some(10));
/// ```
#[inline]
pub fn mbind<M, B, F>(value: M, function: F) -> M::Of<B>
where
    M: Monad,
    F: FnOnce(M::Elem) -> M::Of<B>,
{
    value.bind(function)
}

/// [`mbind`] with mirrored argument order: function first, computation
/// second.
///
/// # Examples
///
/// ```rust
/// use catena::combinators::mbind_flipped;
///
/// let result = mbind_flipped(|n| if n > 0 { Some(n * 2) } else { None }, Some(5));
/// assert_eq!(result, Some(10));
/// ```
#[inline]
pub fn mbind_flipped<M, B, F>(function: F, value: M) -> M::Of<B>
where
    M: Monad,
    F: FnOnce(M::Elem) -> M::Of<B>,
{
    value.bind(function)
}

/// Flattens one level of nesting: the free-function form of
/// [`Monad::join`].
///
/// The outer family cannot be recovered from the nested argument alone, so
/// call sites name the result type:
///
/// ```rust
/// use catena::combinators::mjoin;
///
/// let flat: Option<i32> = mjoin(Some(Some(5)));
/// assert_eq!(flat, Some(5));
/// ```
#[inline]
pub fn mjoin<M>(nested: M::Of<M>) -> M
where
    M: Monad,
{
    M::join(nested)
}

/// Lifts a plain function into the monad: `lift_m(f, m)` is
/// `m.bind(|x| pure(f(x)))`.
///
/// # Examples
///
/// ```rust
/// use catena::combinators::lift_m;
///
/// assert_eq!(lift_m(|n: i32| n + 1, Some(5)), Some(6));
///
/// let failed: Result<i32, String> = Err("boom".to_string());
/// assert_eq!(lift_m(|n: i32| n + 1, failed), Err("boom".to_string()));
/// ```
#[inline]
pub fn lift_m<M, B, F>(function: F, value: M) -> M::Of<B>
where
    M: Monad,
    F: FnOnce(M::Elem) -> B,
{
    value.bind(move |inner| M::pure(function(inner)))
}

/// Sequences two computations left to right, keeping the second result.
///
/// Only `first`'s underlying `bind` runs; `second` is returned as the
/// continuation, so absence or failure on the left propagates without ever
/// exposing `second`.
///
/// # Examples
///
/// ```rust
/// use catena::combinators::seq;
///
/// assert_eq!(seq(Some(3), Some("a")), Some("a"));
///
/// let absent: Option<i32> = None;
/// assert_eq!(seq(absent, Some("a")), None);
/// ```
#[inline]
pub fn seq<M, B>(first: M, second: M::Of<B>) -> M::Of<B>
where
    M: Monad,
{
    first.bind(move |_| second)
}

/// Sequences two computations left to right, keeping the first result.
///
/// Both operands' underlying `bind` runs exactly once each, in order;
/// `first`'s value is then re-wrapped through `pure`. The extra bound is
/// the re-parametrisation coherence the operation relies on: `second`'s
/// family, re-parametrised back to `first`'s element type, is `first`'s
/// own type.
///
/// # Examples
///
/// ```rust
/// use catena::combinators::seq_left;
///
/// assert_eq!(seq_left(Some(3), Some("a")), Some(3));
///
/// let absent: Option<&str> = None;
/// assert_eq!(seq_left(Some(3), absent), None);
/// ```
#[inline]
pub fn seq_left<M, B>(first: M, second: M::Of<B>) -> M::Of<M::Elem>
where
    M: Monad,
    M::Of<B>: Monad + Family<Of<M::Elem> = M::Of<M::Elem>>,
{
    first.bind::<M::Elem, _>(move |value| {
        second.bind::<M::Elem, _>(move |_| M::pure(value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::Identity;
    use rstest::rstest;

    #[rstest]
    fn fmap_transforms_present_value() {
        assert_eq!(fmap(|n: i32| n + 1, Some(5)), Some(6));
    }

    #[rstest]
    fn fmap_preserves_absence() {
        let absent: Option<i32> = None;
        assert_eq!(fmap(|n: i32| n + 1, absent), None);
    }

    #[rstest]
    fn fmap_works_for_any_instance() {
        assert_eq!(fmap(|n: i32| n * 2, Identity(21)), Identity(42));
        assert_eq!(*fmap(|n: i32| n * 2, Box::new(21)), 42);
    }

    #[rstest]
    fn mbind_and_flipped_agree() {
        let f = |n: i32| if n > 0 { Some(n * 2) } else { None };
        assert_eq!(mbind(Some(5), f), mbind_flipped(f, Some(5)));
        assert_eq!(mbind(Some(5), f), Some(10));
    }

    #[rstest]
    fn mjoin_flattens_one_level() {
        let flat: Option<i32> = mjoin(Some(Some(5)));
        assert_eq!(flat, Some(5));
    }

    #[rstest]
    fn lift_m_wraps_the_result() {
        assert_eq!(lift_m(|n: i32| n + 1, Some(5)), Some(6));
        assert_eq!(lift_m(|n: i32| n + 1, Identity(5)), Identity(6));
    }

    #[rstest]
    fn lift_m_propagates_failure() {
        let failed: Result<i32, String> = Err("boom".to_string());
        assert_eq!(lift_m(|n: i32| n + 1, failed), Err("boom".to_string()));
    }

    #[rstest]
    fn seq_keeps_right_result() {
        assert_eq!(seq(Some(3), Some("a")), Some("a"));
    }

    #[rstest]
    fn seq_propagates_left_absence() {
        let absent: Option<i32> = None;
        assert_eq!(seq(absent, Some("a")), None);
    }

    #[rstest]
    fn seq_left_keeps_left_result() {
        assert_eq!(seq_left(Some(3), Some("a")), Some(3));
    }

    #[rstest]
    fn seq_left_propagates_right_absence() {
        let absent: Option<&str> = None;
        assert_eq!(seq_left(Some(3), absent), None);
    }

    #[rstest]
    fn seq_left_works_across_element_types() {
        let kept: Result<i32, String> = seq_left(Ok(3), Ok::<&str, String>("a"));
        assert_eq!(kept, Ok(3));
    }

    // The combinators are plain functions and can be handed to higher-order
    // code once instantiated.
    #[rstest]
    fn combinators_are_first_class() {
        fn run_mapper(
            mapper: fn(fn(i32) -> i32, Option<i32>) -> Option<i32>,
        ) -> Option<i32> {
            mapper(|n| n * 2, Some(21))
        }

        assert_eq!(run_mapper(fmap::<Option<i32>, fn(i32) -> i32>), Some(42));
    }
}
