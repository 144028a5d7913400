//! The mapping capability.
//!
//! A functor is a family whose contained value can be transformed without
//! disturbing the surrounding shape: `Some(5)` stays a `Some`, an `Err`
//! stays the same `Err`, a box stays a box. Two laws pin down "without
//! disturbing":
//!
//! - **identity**: `fa.map(|x| x)` is observationally equal to `fa`;
//! - **composition**: `fa.map(f).map(g)` equals `fa.map(|x| g(f(x)))`.
//!
//! The laws are a contract on instances, not something the compiler can
//! prove; the crate's law suites check them property-based over every
//! shipped instance.
//!
//! Both a consuming and a borrowing form are part of the capability. A
//! caller that no longer needs the wrapped value hands it over by value and
//! the instance may reuse its storage; [`Functor::map_ref`] serves callers
//! that keep the original.

use super::family::Family;
use super::identity::Identity;

/// A family supporting structure-preserving transformation of its element.
///
/// Families whose natural primitive is `apply` rather than `map` can fill
/// `map` with [`derive_map_from_apply!`](crate::derive_map_from_apply); the
/// borrowing [`map_ref`](Self::map_ref) is always supplied by the instance
/// itself.
///
/// # Examples
///
/// ```rust
/// use catena::Functor;
///
/// let some: Option<i32> = Some(5);
/// assert_eq!(some.map(|n| n + 1), Some(6));
///
/// let none: Option<i32> = None;
/// assert_eq!(none.map(|n| n + 1), None);
/// ```
pub trait Functor: Family {
    /// Applies `function` to the contained value, consuming `self`.
    fn map<B, F>(self, function: F) -> Self::Of<B>
    where
        Self: Sized,
        F: FnOnce(Self::Elem) -> B;

    /// Applies `function` to a borrow of the contained value, leaving
    /// `self` intact.
    ///
    /// ```rust
    /// use catena::Functor;
    ///
    /// let text: Option<String> = Some("hello".to_string());
    /// let length = text.map_ref(|s| s.len());
    /// assert_eq!(length, Some(5));
    /// assert_eq!(text, Some("hello".to_string()));
    /// ```
    fn map_ref<B, F>(&self, function: F) -> Self::Of<B>
    where
        F: FnOnce(&Self::Elem) -> B;
}

// =============================================================================
// Option<A>
// =============================================================================

impl<A> Functor for Option<A> {
    #[inline]
    fn map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn map_ref<B, F>(&self, function: F) -> Option<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

impl<A> crate::deriving::NativeMap for Option<A> {}

// =============================================================================
// Result<T, E>
// =============================================================================

impl<T, E: Clone> Functor for Result<T, E> {
    #[inline]
    fn map<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn map_ref<B, F>(&self, function: F) -> Result<B, E>
    where
        F: FnOnce(&T) -> B,
    {
        match self {
            Ok(value) => Ok(function(value)),
            Err(error) => Err(error.clone()),
        }
    }
}

impl<T, E: Clone> crate::deriving::NativeMap for Result<T, E> {}

// =============================================================================
// Box<A>
// =============================================================================

impl<A> Functor for Box<A> {
    #[inline]
    fn map<B, F>(self, function: F) -> Box<B>
    where
        F: FnOnce(A) -> B,
    {
        Box::new(function(*self))
    }

    #[inline]
    fn map_ref<B, F>(&self, function: F) -> Box<B>
    where
        F: FnOnce(&A) -> B,
    {
        Box::new(function(self.as_ref()))
    }
}

impl<A> crate::deriving::NativeMap for Box<A> {}

// =============================================================================
// Identity<A>
// =============================================================================

impl<A> Functor for Identity<A> {
    #[inline]
    fn map<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> B,
    {
        Identity(function(self.0))
    }

    #[inline]
    fn map_ref<B, F>(&self, function: F) -> Identity<B>
    where
        F: FnOnce(&A) -> B,
    {
        Identity(function(&self.0))
    }
}

impl<A> crate::deriving::NativeMap for Identity<A> {}
