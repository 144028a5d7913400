//! Type-level plumbing for parametrised families.
//!
//! Rust has no native higher-kinded types: there is no way to abstract over
//! `Option<_>` as opposed to `Option<i32>`. This module closes the gap with
//! a generic associated type, giving every capability in the crate a shared
//! vocabulary for two questions about a wrapped value:
//!
//! - which element type is it parametrised over ([`Family::Elem`]), and
//! - what does the same family look like over a different element type
//!   ([`Family::Of`])?
//!
//! The third piece, [`Morphism`], names the return type of a callable in
//! type position. Generic signatures occasionally need "the result of
//! applying `F` to `A`" as a type, and stable Rust cannot project it out of
//! the `Fn` traits directly.
//!
//! # Example
//!
//! ```rust
//! use catena::Family;
//!
//! fn swap_element<F: Family>(_: &F) -> F::Of<String>
//! where
//!     F::Of<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let none: Option<String> = swap_element(&Some(42));
//! assert_eq!(none, None);
//! ```

/// A parametrised family of types: one type constructor viewed independently
/// of its current element type.
///
/// Implementing `Family` for `F<T>` states that `F` is a container-like
/// shape whose element type can be swapped. The two members correspond to
/// the two primitive type-level operations every capability builds on:
///
/// - `Elem` extracts the element type (`Option<i32> -> i32`),
/// - `Of<B>` re-parametrises the family (`Option<i32>, String ->
///   Option<String>`).
///
/// Every capability of a family dispatches through this single trait, so a
/// family cannot present different re-parametrisation rules to different
/// capabilities: coherence admits exactly one `Family` impl per type.
///
/// # Laws
///
/// `Of<Elem>` must be the implementing type itself: re-parametrising over
/// the current element type is the identity. All std impls in this crate
/// satisfy this definitionally.
pub trait Family {
    /// The element type the family is currently parametrised over.
    type Elem;

    /// The same family parametrised over `B` instead.
    ///
    /// The bound keeps re-parametrisation composable: the result is itself
    /// a family, with `B` as its element type.
    type Of<B>: Family<Elem = B>;
}

/// A consuming callable from `A`, with its result available as an
/// associated type.
///
/// Blanket-implemented for every `FnOnce(A) -> B`, so any closure or
/// function item is a `Morphism` automatically. Exists because a generic
/// signature sometimes needs to *name* a callable's result type (see
/// [`crate::combinators::fmap`]), which the unstable `Fn` internals do not
/// allow on stable Rust.
pub trait Morphism<A> {
    /// The callable's return type.
    type Output;

    /// Applies the callable to `input`.
    fn run(self, input: A) -> Self::Output;
}

impl<A, B, F> Morphism<A> for F
where
    F: FnOnce(A) -> B,
{
    type Output = B;

    #[inline]
    fn run(self, input: A) -> B {
        self(input)
    }
}

/// The result type of applying callable `F` to an argument of type `A`.
pub type ResultOf<F, A> = <F as Morphism<A>>::Output;

// =============================================================================
// Standard library families
// =============================================================================

impl<A> Family for Option<A> {
    type Elem = A;
    type Of<B> = Option<B>;
}

impl<T, E> Family for Result<T, E> {
    type Elem = T;
    type Of<B> = Result<B, E>;
}

impl<A> Family for Box<A> {
    type Elem = A;
    type Of<B> = Box<B>;
}
