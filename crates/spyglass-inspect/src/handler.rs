//! Call-surface dispatch for the introspection operations
//!
//! Embedders that route calls through a numeric or symbolic dispatch
//! table (rather than calling the typed operation functions directly)
//! go through [`InspectHandler`]. The handler owns the
//! argument-count contract: every operation takes exactly one value, and
//! any other arity is a [`ContractViolation`].
//!
//! ## Call IDs (0x0E10-0x0E13)
//!
//! | ID     | Name                            | Result            |
//! |--------|---------------------------------|-------------------|
//! | 0x0E10 | inspect.promiseState            | u32 state code    |
//! | 0x0E11 | inspect.promiseResult           | engine value      |
//! | 0x0E12 | inspect.external                | big integer       |
//! | 0x0E13 | inspect.ownNonIndexPropertyNames| string sequence   |
//!
//! [`ContractViolation`]: spyglass_sdk::InspectError::ContractViolation

use num_bigint::BigUint;
use spyglass_sdk::{InspectContext, InspectError, InspectResult, ValueRef};

use crate::ops;

/// The four introspection operations, by stable call ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum InspectOp {
    /// Settlement state of a promise
    PromiseState = 0x0E10,
    /// Settlement result of a promise
    PromiseResult = 0x0E11,
    /// Numeric identity of an external handle
    External = 0x0E12,
    /// Own enumerable non-index string keys
    OwnNonIndexPropertyNames = 0x0E13,
}

impl InspectOp {
    /// Resolve a numeric call ID. Returns `None` outside the inspect range.
    pub const fn from_id(id: u16) -> Option<Self> {
        match id {
            0x0E10 => Some(Self::PromiseState),
            0x0E11 => Some(Self::PromiseResult),
            0x0E12 => Some(Self::External),
            0x0E13 => Some(Self::OwnNonIndexPropertyNames),
            _ => None,
        }
    }

    /// The symbolic dispatch name of this operation
    pub const fn name(self) -> &'static str {
        match self {
            Self::PromiseState => "inspect.promiseState",
            Self::PromiseResult => "inspect.promiseResult",
            Self::External => "inspect.external",
            Self::OwnNonIndexPropertyNames => "inspect.ownNonIndexPropertyNames",
        }
    }

    /// Resolve a symbolic dispatch name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "inspect.promiseState" => Some(Self::PromiseState),
            "inspect.promiseResult" => Some(Self::PromiseResult),
            "inspect.external" => Some(Self::External),
            "inspect.ownNonIndexPropertyNames" => Some(Self::OwnNonIndexPropertyNames),
            _ => None,
        }
    }
}

/// Result of a dispatched introspection call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InspectReply {
    /// Promise state code {0, 1, 2}
    StateCode(u32),
    /// An engine value (promise settlement result)
    Value(ValueRef),
    /// Arbitrary-precision external identity
    BigInt(BigUint),
    /// Filtered property-name snapshot
    Keys(Vec<String>),
}

/// Dispatcher routing call IDs to the typed operations.
pub struct InspectHandler;

impl InspectHandler {
    /// Execute one introspection call.
    ///
    /// `args` must contain exactly one value; any other count fails with
    /// `ContractViolation` before the engine is consulted.
    pub fn call(
        &self,
        ctx: &dyn InspectContext,
        op: InspectOp,
        args: &[ValueRef],
    ) -> InspectResult<InspectReply> {
        let [value] = args else {
            return Err(InspectError::ContractViolation(format!(
                "{} expects exactly 1 argument, got {}",
                op.name(),
                args.len()
            )));
        };

        match op {
            InspectOp::PromiseState => {
                ops::get_promise_state(ctx, *value).map(InspectReply::StateCode)
            }
            InspectOp::PromiseResult => {
                ops::get_promise_result(ctx, *value).map(InspectReply::Value)
            }
            InspectOp::External => ops::get_external(ctx, *value).map(InspectReply::BigInt),
            InspectOp::OwnNonIndexPropertyNames => {
                ops::get_own_non_index_property_names(ctx, *value).map(InspectReply::Keys)
            }
        }
    }
}
