//! # catena
//!
//! Law-abiding functor, applicative, and monad capabilities for Rust, with
//! explicit compile-time derivation of default operations.
//!
//! The crate gives heterogeneous wrapped-value families (optional values,
//! fallible results, boxed values, user-defined containers) one shared
//! vocabulary for mapping, contextual application, and sequencing. A family
//! opts in by implementing the capability traits over a minimal set of
//! native operations and filling the rest with named derivation strategies;
//! everything resolves statically, with no runtime registry, no virtual
//! dispatch, and no cost over calling the native operations directly.
//!
//! ## Layers
//!
//! - [`family`]: type-level utilities for element extraction,
//!   re-parametrisation, and callable result types.
//! - [`functor`] / [`applicative`] / [`monad`]: the capability traits and
//!   the shipped instances (`Option`, `Result`, `Box`, [`Identity`]).
//! - [`deriving`]: opt-in derivation strategies and the native-core
//!   markers that keep them acyclic.
//! - [`combinators`]: generic operations over any conforming family.
//! - [`conform`]: instance predicates for test suites and downstream
//!   crates.
//!
//! ## Example
//!
//! ```rust
//! use catena::prelude::*;
//!
//! let result = Some(5)
//!     .bind(|n: i32| if n > 0 { Some(n * 2) } else { None })
//!     .map(|n| n + 1);
//! assert_eq!(result, Some(11));
//!
//! // The same code shape works for any conforming family.
//! let result = Ok::<i32, String>(5)
//!     .bind(|n| if n > 0 { Ok(n * 2) } else { Err("negative".to_string()) })
//!     .map(|n| n + 1);
//! assert_eq!(result, Ok(11));
//! ```
//!
//! Laws are a contract, not something the compiler proves: every instance
//! must satisfy the functor and monad laws documented on the traits, and
//! the crate's property suites check the shipped instances.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod applicative;
pub mod combinators;
pub mod conform;
pub mod deriving;
pub mod family;
pub mod functor;
pub mod identity;
pub mod monad;

pub use applicative::Applicative;
pub use family::{Family, Morphism, ResultOf};
pub use functor::Functor;
pub use identity::Identity;
pub use monad::Monad;

/// Convenient bulk import of the capability surface.
///
/// ```rust
/// use catena::prelude::*;
/// ```
pub mod prelude {
    pub use crate::applicative::Applicative;
    pub use crate::combinators::{fmap, lift_m, mbind, mbind_flipped, mjoin, seq, seq_left};
    pub use crate::family::{Family, Morphism, ResultOf};
    pub use crate::functor::Functor;
    pub use crate::identity::Identity;
    pub use crate::monad::Monad;
}
