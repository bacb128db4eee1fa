//! Node and timer identities
//!
//! The engine never holds real DOM references. The host assigns every
//! element it exposes a [`NodeId`] when building the page snapshot, and all
//! events and effects refer to elements by that id. Timer tokens work the
//! same way for scheduled callbacks: a component mints a [`TimerToken`],
//! asks the runtime to schedule it, and later matches the token when the
//! timer fires.

use std::sync::atomic::{AtomicU64, Ordering};

/// Opaque identity for a host-owned page element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

impl NodeId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Raw value, for host-side bookkeeping
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Generator for unique node IDs
#[derive(Debug, Default)]
pub struct NodeIdGenerator {
    next: u64,
}

impl NodeIdGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn next(&mut self) -> NodeId {
        let id = NodeId(self.next);
        self.next += 1;
        id
    }
}

/// Identity for a scheduled timer callback
///
/// Tokens are process-unique: a shared atomic counter backs every
/// [`TimerToken::mint`], so two components can never collide even when they
/// schedule from different threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(pub u64);

static NEXT_TIMER_TOKEN: AtomicU64 = AtomicU64::new(1);

impl TimerToken {
    /// Mint a fresh, process-unique token
    pub fn mint() -> Self {
        Self(NEXT_TIMER_TOKEN.fetch_add(1, Ordering::Relaxed))
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}
