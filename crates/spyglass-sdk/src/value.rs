//! ValueRef - opaque handle to an engine-managed value
//!
//! A `ValueRef` is nothing but the raw u64 bits of a reference into the
//! engine's value space. This layer never decodes, allocates, or frees
//! what the bits point at; every read goes through the engine via
//! [`InspectContext`](crate::InspectContext).
//!
//! The host guarantees the referenced value stays alive (not collected)
//! for the duration of any call that receives the handle. No pinning or
//! lifetime extension happens on this side.

use std::marker::PhantomData;

/// Opaque reference to a value owned by the managed-value engine.
///
/// Same bit layout as the engine's internal value word, so conversion at
/// the boundary is zero-cost (`from_bits`/`to_bits`).
///
/// `ValueRef` is deliberately not `Send`/`Sync` (the phantom raw pointer
/// opts out): the engine executes single-threaded and handles must not
/// cross to another thread.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct ValueRef(u64, PhantomData<*const ()>);

impl ValueRef {
    /// Create from raw u64 bits (same encoding as the engine value word)
    #[inline(always)]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits, PhantomData)
    }

    /// Get raw u64 bits (same encoding as the engine value word)
    #[inline(always)]
    pub const fn to_bits(self) -> u64 {
        self.0
    }
}

impl std::fmt::Debug for ValueRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ValueRef({:#018x})", self.0)
    }
}
