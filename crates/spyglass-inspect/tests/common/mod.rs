//! Shared test fixture: a fake engine over plain Rust data.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use spyglass_sdk::{
    InspectContext, InspectError, InspectResult, PromiseState, PropertyEntry, ValueRef,
};

/// The fake engine's undefined value.
pub const UNDEFINED: ValueRef = ValueRef::from_bits(0);

enum Slot {
    Promise {
        state: PromiseState,
        result: ValueRef,
    },
    External {
        addr: usize,
    },
    Object {
        entries: Vec<PropertyEntry>,
    },
    /// Some other engine value kind, by name
    Plain {
        kind: &'static str,
    },
}

/// In-memory stand-in for a managed-value engine.
///
/// Values are handed out as `ValueRef`s whose bits index a slot table.
/// Interior mutability lets tests settle promises or mutate objects
/// between queries while the context is borrowed shared, the same way a
/// real engine's state moves underneath the introspection layer.
pub struct MockEngine {
    slots: RefCell<Vec<Slot>>,
    fail_all: RefCell<bool>,
}

impl MockEngine {
    pub fn new() -> Self {
        Self {
            // Slot 0 is UNDEFINED.
            slots: RefCell::new(vec![Slot::Plain { kind: "undefined" }]),
            fail_all: RefCell::new(false),
        }
    }

    fn push(&self, slot: Slot) -> ValueRef {
        let mut slots = self.slots.borrow_mut();
        slots.push(slot);
        ValueRef::from_bits((slots.len() - 1) as u64)
    }

    pub fn pending_promise(&self) -> ValueRef {
        self.push(Slot::Promise {
            state: PromiseState::Pending,
            result: UNDEFINED,
        })
    }

    pub fn fulfilled_promise(&self, result: ValueRef) -> ValueRef {
        self.push(Slot::Promise {
            state: PromiseState::Fulfilled,
            result,
        })
    }

    pub fn rejected_promise(&self, reason: ValueRef) -> ValueRef {
        self.push(Slot::Promise {
            state: PromiseState::Rejected,
            result: reason,
        })
    }

    pub fn external(&self, addr: usize) -> ValueRef {
        self.push(Slot::External { addr })
    }

    pub fn object(&self, entries: Vec<PropertyEntry>) -> ValueRef {
        self.push(Slot::Object { entries })
    }

    pub fn plain(&self, kind: &'static str) -> ValueRef {
        self.push(Slot::Plain { kind })
    }

    /// Settle a pending promise, as the engine would when a job runs.
    pub fn settle(&self, promise: ValueRef, state: PromiseState, result: ValueRef) {
        let mut slots = self.slots.borrow_mut();
        match &mut slots[promise.to_bits() as usize] {
            Slot::Promise {
                state: s,
                result: r,
            } => {
                *s = state;
                *r = result;
            }
            _ => panic!("settle() on a non-promise slot"),
        }
    }

    /// Replace an object's property table, as a script mutation would.
    pub fn mutate_object(&self, object: ValueRef, entries: Vec<PropertyEntry>) {
        let mut slots = self.slots.borrow_mut();
        match &mut slots[object.to_bits() as usize] {
            Slot::Object { entries: e } => *e = entries,
            _ => panic!("mutate_object() on a non-object slot"),
        }
    }

    /// Make every subsequent query fail, as if the engine hit an
    /// internal error.
    pub fn fail_queries(&self) {
        *self.fail_all.borrow_mut() = true;
    }

    fn check_healthy(&self) -> InspectResult<()> {
        if *self.fail_all.borrow() {
            Err(InspectError::EngineError(
                "internal allocation failure".into(),
            ))
        } else {
            Ok(())
        }
    }

    fn kind_name(slot: &Slot) -> &'static str {
        match slot {
            Slot::Promise { .. } => "promise",
            Slot::External { .. } => "external",
            Slot::Object { .. } => "object",
            Slot::Plain { kind } => kind,
        }
    }
}

impl InspectContext for MockEngine {
    fn promise_state(&self, value: ValueRef) -> InspectResult<PromiseState> {
        self.check_healthy()?;
        let slots = self.slots.borrow();
        match &slots[value.to_bits() as usize] {
            Slot::Promise { state, .. } => Ok(*state),
            other => Err(InspectError::TypeMismatch {
                expected: "promise".into(),
                got: Self::kind_name(other).into(),
            }),
        }
    }

    fn promise_result(&self, value: ValueRef) -> InspectResult<ValueRef> {
        self.check_healthy()?;
        let slots = self.slots.borrow();
        match &slots[value.to_bits() as usize] {
            Slot::Promise { result, .. } => Ok(*result),
            other => Err(InspectError::TypeMismatch {
                expected: "promise".into(),
                got: Self::kind_name(other).into(),
            }),
        }
    }

    fn external_address(&self, value: ValueRef) -> InspectResult<usize> {
        self.check_healthy()?;
        let slots = self.slots.borrow();
        match &slots[value.to_bits() as usize] {
            Slot::External { addr } => Ok(*addr),
            other => Err(InspectError::TypeMismatch {
                expected: "external".into(),
                got: Self::kind_name(other).into(),
            }),
        }
    }

    fn own_property_entries(&self, value: ValueRef) -> InspectResult<Vec<PropertyEntry>> {
        self.check_healthy()?;
        let slots = self.slots.borrow();
        match &slots[value.to_bits() as usize] {
            Slot::Object { entries } => Ok(entries.clone()),
            other => Err(InspectError::EngineError(format!(
                "cannot enumerate properties of {}",
                Self::kind_name(other)
            ))),
        }
    }
}

/// Install a test subscriber once so `RUST_LOG=trace` shows query events.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
