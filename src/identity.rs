//! The identity family: a value with no surrounding effect.
//!
//! [`Identity`] wraps exactly one value and adds nothing. It is the
//! smallest possible instance of every capability in the crate, which makes
//! it the baseline the derivation-agreement tests compare against: any
//! single-value family that derives an operation must behave exactly like
//! `Identity` computing the same thing natively.

use super::family::Family;

/// A single value, wrapped without any additional structure.
///
/// # Examples
///
/// ```rust
/// use catena::Identity;
///
/// let wrapped = Identity::new(42);
/// assert_eq!(wrapped.into_inner(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Wraps `value`.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the wrapper and returns the value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Borrows the wrapped value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> Family for Identity<A> {
    type Elem = A;
    type Of<B> = Identity<B>;
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}
