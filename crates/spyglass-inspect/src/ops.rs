//! The four introspection operations
//!
//! Each operation is a single synchronous query: caller supplies the
//! engine context and one value, gets back a result or an error. No
//! operation invokes another, holds state between calls, or mutates
//! anything. Failures from the engine propagate unchanged; there is no
//! retry and no partial result.

use num_bigint::BigUint;
use spyglass_sdk::{InspectContext, InspectResult, PromiseState, ValueRef};

use crate::filter::{filter_keys, KeyFilter};

/// State code for a pending promise
pub const STATE_PENDING: u32 = PromiseState::Pending.code();
/// State code for a fulfilled promise
pub const STATE_FULFILLED: u32 = PromiseState::Fulfilled.code();
/// State code for a rejected promise
pub const STATE_REJECTED: u32 = PromiseState::Rejected.code();

/// Get the settlement state of a promise as its stable u32 code.
///
/// Fails with `TypeMismatch` if `value` is not a promise, or
/// `EngineError` if the engine cannot retrieve the state.
pub fn get_promise_state(ctx: &dyn InspectContext, value: ValueRef) -> InspectResult<u32> {
    let state = ctx.promise_state(value)?;
    tracing::trace!(value = ?value, state = ?state, "promise state queried");
    Ok(state.code())
}

/// Get the fulfillment value or rejection reason of a promise.
///
/// For a pending promise the result is whatever the engine defines
/// (typically its undefined value); no precondition on state is enforced
/// here.
pub fn get_promise_result(ctx: &dyn InspectContext, value: ValueRef) -> InspectResult<ValueRef> {
    let result = ctx.promise_result(value)?;
    tracing::trace!(value = ?value, result = ?result, "promise result queried");
    Ok(result)
}

/// Get the numeric identity of the address wrapped by an external handle.
///
/// The address bit pattern is widened losslessly to a `BigUint`, so the
/// identity survives transport regardless of pointer width. The address
/// is never dereferenced.
pub fn get_external(ctx: &dyn InspectContext, value: ValueRef) -> InspectResult<BigUint> {
    let addr = ctx.external_address(value)?;
    tracing::trace!(value = ?value, addr, "external identity queried");
    Ok(BigUint::from(addr as u64))
}

/// Get the own, enumerable, non-index string keys of an object.
///
/// Keys come back in the engine's canonical enumeration order as a fresh
/// snapshot: mutating the object afterwards does not affect a sequence
/// already returned. Index-shaped string keys ("0", "42") are excluded
/// along with numeric index keys; symbol keys are coerced to their string
/// form.
pub fn get_own_non_index_property_names(
    ctx: &dyn InspectContext,
    value: ValueRef,
) -> InspectResult<Vec<String>> {
    let entries = ctx.own_property_entries(value)?;
    let keys = filter_keys(entries, &KeyFilter::own_non_index());
    tracing::trace!(value = ?value, count = keys.len(), "own non-index keys queried");
    Ok(keys)
}
