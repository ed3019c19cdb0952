//! Twofold core library — closed two-state containers.
//!
//! Public API surface:
//! - [`either`] — [`Either`], a disjoint union of two unrelated payloads
//! - [`maybe`] — [`Maybe`] and its [`Failure`] record
//! - [`boundary`] — the only place raised faults become [`Failure`] values
//! - [`error`] — [`ConstructionError`]

pub mod boundary;
pub mod either;
pub mod error;
pub mod maybe;

pub use boundary::Panicked;
pub use either::{AtLeft, AtRight, Either, Inject, IntoEither};
pub use error::ConstructionError;
pub use maybe::{Cause, Failure, Maybe};
