//! The sequencing capability.
//!
//! A monad is an applicative family whose computations can be chained so
//! that each step sees the result of the previous one. [`bind`] is the
//! primitive: conceptually it runs the left-hand computation, feeds its
//! result to a function, and hands back the computation that function
//! chose, without running it; the caller stays in control of the chain.
//! [`join`] flattens one level of nesting and is interdefinable with
//! `bind`.
//!
//! # Minimal cores
//!
//! An instance supplies [`pure`](crate::Applicative::pure) plus one of two
//! native cores, and fills the rest with the opt-in strategies from
//! [`crate::deriving`]:
//!
//! - `{bind}`: derive `join` (and optionally `map`/`apply`), or
//! - `{join, map}`: derive `bind` (here `apply` stays native, since the
//!   apply strategy needs native `bind`).
//!
//! `Option` and `Result` in this crate are bind-core instances; `Box` is a
//! join/map-core instance.
//!
//! # Laws
//!
//! For all values `x`, computations `m`, and compatible functions `f`, `g`:
//!
//! - **left identity**: `pure(x).bind(f)` equals `f(x)`;
//! - **right identity**: `m.bind(pure)` equals `m`;
//! - **associativity**: `m.bind(f).bind(g)` equals
//!   `m.bind(|x| f(x).bind(g))`.
//!
//! [`bind`]: Monad::bind
//! [`join`]: Monad::join

use super::applicative::Applicative;
use super::identity::Identity;

/// An applicative family supporting dependent sequencing.
///
/// # Examples
///
/// ```rust
/// use catena::Monad;
///
/// let halved = Some(10).bind(|n: i32| if n % 2 == 0 { Some(n / 2) } else { None });
/// assert_eq!(halved, Some(5));
///
/// // An absent left-hand side short-circuits; the function never runs.
/// let absent: Option<i32> = None;
/// assert_eq!(absent.bind(|n| Some(n * 2)), None);
/// ```
pub trait Monad: Applicative {
    /// Sequences `self` with the computation chosen by `function`.
    ///
    /// The returned computation is not additionally run; whatever "run"
    /// means for the family, it stays under the caller's control.
    fn bind<B, F>(self, function: F) -> Self::Of<B>
    where
        Self: Sized,
        F: FnOnce(Self::Elem) -> Self::Of<B>;

    /// Flattens one level of nesting.
    ///
    /// An associated function rather than a method, so instances implement
    /// it against the concrete nested type:
    ///
    /// ```rust
    /// use catena::Monad;
    ///
    /// let flat: Option<i32> = Monad::join(Some(Some(5)));
    /// assert_eq!(flat, Some(5));
    /// ```
    fn join(nested: Self::Of<Self>) -> Self
    where
        Self: Sized;

    /// Sequences two computations, discarding the first result.
    ///
    /// The first computation's effect still happens: absence or failure on
    /// the left propagates and `next` is never exposed.
    ///
    /// ```rust
    /// use catena::Monad;
    ///
    /// assert_eq!(Some(3).then(Some("a")), Some("a"));
    ///
    /// let absent: Option<i32> = None;
    /// assert_eq!(absent.then(Some("a")), None);
    /// ```
    #[inline]
    fn then<B>(self, next: Self::Of<B>) -> Self::Of<B>
    where
        Self: Sized,
    {
        self.bind(|_| next)
    }
}

// =============================================================================
// Option<A>: bind core, join derived
// =============================================================================

impl<A> Monad for Option<A> {
    #[inline]
    fn bind<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        self.and_then(function)
    }

    crate::derive_join_from_bind!();
}

impl<A> crate::deriving::NativeBind for Option<A> {}

// =============================================================================
// Result<T, E>: bind core, join derived
// =============================================================================

impl<T, E: Clone> Monad for Result<T, E> {
    #[inline]
    fn bind<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> Result<B, E>,
    {
        self.and_then(function)
    }

    crate::derive_join_from_bind!();
}

impl<T, E: Clone> crate::deriving::NativeBind for Result<T, E> {}

// =============================================================================
// Box<A>: join/map core, bind derived
// =============================================================================

impl<A> Monad for Box<A> {
    crate::derive_bind_from_join_and_map!();

    #[inline]
    fn join(nested: Box<Box<A>>) -> Box<A> {
        *nested
    }
}

impl<A> crate::deriving::NativeJoin for Box<A> {}

// =============================================================================
// Identity<A>: fully native
// =============================================================================

impl<A> Monad for Identity<A> {
    #[inline]
    fn bind<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> Identity<B>,
    {
        function(self.0)
    }

    #[inline]
    fn join(nested: Identity<Identity<A>>) -> Identity<A> {
        nested.0
    }
}

impl<A> crate::deriving::NativeBind for Identity<A> {}
impl<A> crate::deriving::NativeJoin for Identity<A> {}
