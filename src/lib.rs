//! Operational transformation for plain-text documents.
//!
//! A set of pure, deterministic functions for merging independently produced
//! edits to the same document without a central lock:
//!
//! - [`apply`] executes an [`Operation`] against a document.
//! - [`compose`] combines two sequential operations into one.
//! - [`transform`] rebases an operation against a concurrent one so both
//!   peers converge on the same document (Transform Property 1).
//!
//! Operations are ordered sequences of [`Component`]s (`Skip`, `Insert`,
//! `Delete`), counted in Unicode code points and kept in canonical form:
//! no zero-length components, no adjacent components of the same kind, no
//! trailing skip. Everything is synchronous and allocation-only; inputs are
//! never mutated.
//!
//! ```
//! use ot_text::{Component, Operation, Side, apply, transform};
//!
//! let base = "hello world";
//!
//! // One peer replaces "world" while another appends an exclamation mark.
//! let replace: Operation = [
//!     Component::Skip(5),
//!     Component::Delete(6),
//!     Component::Insert(" there".to_owned()),
//! ]
//! .into_iter()
//! .collect();
//! let exclaim: Operation = [Component::Skip(11), Component::Insert("!".to_owned())]
//!     .into_iter()
//!     .collect();
//!
//! let replace_rebased = transform(&replace, &exclaim, Side::Left).unwrap();
//! let exclaim_rebased = transform(&exclaim, &replace, Side::Right).unwrap();
//!
//! let via_exclaim = apply(&apply(base, &exclaim).unwrap(), &replace_rebased).unwrap();
//! let via_replace = apply(&apply(base, &replace).unwrap(), &exclaim_rebased).unwrap();
//!
//! assert_eq!(via_exclaim, via_replace);
//! assert_eq!(via_exclaim, "hello there!");
//! ```
//!
//! With the `serde` feature enabled, components serialize into a compact
//! schema-neutral wire form (positive integer, string, or negative integer)
//! for exchange with transport and storage layers.

mod apply;
mod component;
mod compose;
mod cursor;
mod error;
mod operation;
mod transform;
#[cfg(feature = "serde")]
mod transport;
mod utils;

pub use apply::apply;
pub use component::Component;
pub use compose::compose;
pub use error::OperationError;
pub use operation::Operation;
pub use transform::transform;
pub use utils::side::Side;
