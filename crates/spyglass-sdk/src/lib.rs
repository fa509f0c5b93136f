//! Spyglass SDK - ABI types for engine introspection
//!
//! This crate provides the minimal types and traits needed to inspect
//! hidden engine state (promise settlement, external handle identity, own
//! property tables) without depending on any concrete engine.
//!
//! A concrete engine binding implements [`InspectContext`]; the
//! `spyglass-inspect` crate builds the query operations on top of that
//! trait, so the same operations run against a real engine or a test
//! fake.
//!
//! # Example
//!
//! ```ignore
//! use spyglass_sdk::{InspectContext, PromiseState, ValueRef};
//!
//! fn is_settled(ctx: &dyn InspectContext, promise: ValueRef) -> bool {
//!     matches!(
//!         ctx.promise_state(promise),
//!         Ok(PromiseState::Fulfilled | PromiseState::Rejected)
//!     )
//! }
//! ```

#![warn(missing_docs)]

mod context;
mod error;
mod value;

pub use context::{InspectContext, PromiseState, PropertyEntry, PropertyKey};
pub use error::{InspectError, InspectResult};
pub use value::ValueRef;
