//! InspectContext trait - abstract engine operations
//!
//! Defines the narrow interface a concrete engine binding implements so
//! the introspection operations can run against any engine (or a test
//! fake) without touching engine internals. Every method is a read-only,
//! synchronous snapshot of engine-owned state; nothing here blocks,
//! allocates on behalf of the caller, or mutates the engine.

use crate::error::InspectResult;
use crate::value::ValueRef;

/// Settlement state of a promise, as the engine reports it.
///
/// The numeric codes are a fixed transport mapping matching the engine's
/// own canonical ordering; they must never be renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum PromiseState {
    /// Not yet settled
    Pending = 0,
    /// Settled with a fulfillment value
    Fulfilled = 1,
    /// Settled with a rejection reason
    Rejected = 2,
}

impl PromiseState {
    /// The stable u32 transport code for this state
    #[inline]
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Decode a transport code back to a state
    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(Self::Pending),
            1 => Some(Self::Fulfilled),
            2 => Some(Self::Rejected),
            _ => None,
        }
    }
}

/// A property key as the engine stores it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyKey {
    /// Ordinary string key
    String(String),
    /// Array-index key (canonical non-negative integer below 2^32 - 1)
    Index(u32),
    /// Symbol key; `description` is the engine's string form of it
    Symbol {
        /// String the engine produces when the symbol is coerced
        description: String,
    },
}

impl PropertyKey {
    /// The engine's string-conversion of this key
    pub fn to_key_string(&self) -> String {
        match self {
            PropertyKey::String(s) => s.clone(),
            PropertyKey::Index(i) => i.to_string(),
            PropertyKey::Symbol { description } => description.clone(),
        }
    }
}

/// One entry of a value's property table snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyEntry {
    /// The property key
    pub key: PropertyKey,
    /// Whether the property is enumerable
    pub enumerable: bool,
    /// Whether the property comes from the prototype chain rather than
    /// the value itself
    pub inherited: bool,
}

impl PropertyEntry {
    /// Own enumerable entry with a string key (the common case)
    pub fn own(key: impl Into<String>) -> Self {
        Self {
            key: PropertyKey::String(key.into()),
            enumerable: true,
            inherited: false,
        }
    }
}

/// Abstract engine context for introspection queries.
///
/// This trait is the single entry point to the engine. The engine
/// provides the concrete implementation; the introspection operations
/// only see `&dyn InspectContext`, which keeps them engine-agnostic and
/// lets tests substitute a fake.
///
/// # Contract
///
/// - Every method is a read-only projection of engine state at the
///   instant of the call. No method may mutate the engine, block, or
///   retain the passed `ValueRef` beyond the call.
/// - The host keeps the engine and every passed value alive for the
///   duration of the call; implementations perform no pinning.
/// - Failures are reported as [`InspectError::EngineError`] when the
///   engine itself cannot answer, or [`InspectError::TypeMismatch`] when
///   the value is of the wrong intrinsic kind.
///
/// [`InspectError::EngineError`]: crate::InspectError::EngineError
/// [`InspectError::TypeMismatch`]: crate::InspectError::TypeMismatch
pub trait InspectContext {
    /// Report the settlement state of a promise value.
    fn promise_state(&self, value: ValueRef) -> InspectResult<PromiseState>;

    /// Report the settlement result of a promise value.
    ///
    /// For a pending promise the returned value is whatever the engine
    /// defines (typically its undefined value); no state precondition is
    /// enforced here.
    fn promise_result(&self, value: ValueRef) -> InspectResult<ValueRef>;

    /// Report the raw address wrapped by an external handle.
    ///
    /// The address is identity only. Implementations must read the stored
    /// bit pattern and nothing else; dereferencing it is out of contract.
    fn external_address(&self, value: ValueRef) -> InspectResult<usize>;

    /// Snapshot the property table of a value.
    ///
    /// Entries come in the engine's canonical enumeration order, own
    /// entries before inherited ones, inherited entries flagged via
    /// [`PropertyEntry::inherited`]. The returned vector is a fresh,
    /// independent copy: later mutation of the value must not be visible
    /// through a previously returned snapshot.
    fn own_property_entries(&self, value: ValueRef) -> InspectResult<Vec<PropertyEntry>>;
}
