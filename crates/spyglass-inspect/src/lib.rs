//! Spyglass introspection primitives
//!
//! Four stateless query operations over engine state that the managed
//! language deliberately hides from ordinary reflection:
//!
//! - [`get_promise_state`] - settlement state of a promise, as a stable
//!   u32 code (0 pending, 1 fulfilled, 2 rejected)
//! - [`get_promise_result`] - a settled promise's value or reason
//! - [`get_external`] - the numeric identity of the address wrapped by an
//!   external handle, widened losslessly to a big integer
//! - [`get_own_non_index_property_names`] - own, enumerable, non-index
//!   string keys of an object, in canonical order
//!
//! All operations run against `&dyn InspectContext` from `spyglass-sdk`,
//! so they work unchanged over any engine binding or a test fake. They
//! are read-only snapshots: nothing waits for settlement, nothing
//! dereferences an external address, nothing mutates the engine.
//!
//! # Example
//!
//! ```ignore
//! use spyglass_inspect::{get_promise_state, STATE_FULFILLED};
//!
//! let code = get_promise_state(ctx, promise)?;
//! if code == STATE_FULFILLED {
//!     let value = get_promise_result(ctx, promise)?;
//! }
//! ```

#![warn(missing_docs)]

mod filter;
mod handler;
mod ops;

pub use filter::{filter_keys, is_array_index, KeyFilter};
pub use handler::{InspectHandler, InspectOp, InspectReply};
pub use ops::{
    get_external, get_own_non_index_property_names, get_promise_result, get_promise_state,
    STATE_FULFILLED, STATE_PENDING, STATE_REJECTED,
};
