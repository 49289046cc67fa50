//! Lock-guarded interner for multi-threaded hosts.
//!
//! [`Interner::intern`] is a read-then-insert sequence, so concurrent callers
//! must be serialized. [`SharedInterner`] puts the whole table behind one
//! `parking_lot::RwLock`: lookups share the read lock, inserts take the
//! write lock for the complete check-and-append.
//!
//! The read-only methods take the lock with `read_recursive`, so they may be
//! called from inside [`SharedInterner::with_read`] even while a writer is
//! queued.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

use super::{Interner, InternerStats, SymbolId};
use crate::config::InternerConfig;
use crate::error::{ConfigResult, InternResult};

#[derive(Debug, Default)]
struct Shared {
    table: RwLock<Interner>,

    /// Hits answered under the read lock, which cannot bump the table's own
    /// counter
    read_hits: AtomicUsize,
}

/// Thread-safe handle to a shared [`Interner`]
///
/// Cloning the handle is cheap and every clone sees the same table.
///
/// # Examples
///
/// ```
/// use symtab::symbol::SharedInterner;
/// use std::thread;
///
/// let shared = SharedInterner::new();
/// let handles: Vec<_> = (0..4)
///     .map(|_| {
///         let shared = shared.clone();
///         thread::spawn(move || shared.intern("same").unwrap())
///     })
///     .collect();
///
/// for handle in handles {
///     assert_eq!(handle.join().unwrap().as_u32(), 0);
/// }
/// assert_eq!(shared.size(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedInterner {
    inner: Arc<Shared>,
}

impl SharedInterner {
    pub fn new() -> Self {
        Self::from_interner(Interner::new())
    }

    pub fn with_capacity_limit(capacity_limit: u32) -> Self {
        Self::from_interner(Interner::with_capacity_limit(capacity_limit))
    }

    pub fn with_config(config: &InternerConfig) -> ConfigResult<Self> {
        Interner::with_config(config).map(Self::from_interner)
    }

    /// Share an existing interner, keeping its identifiers and counters
    pub fn from_interner(interner: Interner) -> Self {
        Self {
            inner: Arc::new(Shared {
                table: RwLock::new(interner),
                read_hits: AtomicUsize::new(0),
            }),
        }
    }

    /// Intern a string, serialized against all other callers
    ///
    /// Known strings are answered under the read lock. New strings take the
    /// write lock, which re-checks presence before assigning an identifier so
    /// two racing callers still agree on one id.
    pub fn intern(&self, symbol: &str) -> InternResult<SymbolId> {
        if let Some(id) = self.inner.table.read().get(symbol) {
            self.inner.read_hits.fetch_add(1, Ordering::Relaxed);
            return Ok(id);
        }
        self.inner.table.write().intern(symbol)
    }

    pub fn identifier_of(&self, symbol: &str) -> InternResult<SymbolId> {
        self.inner.table.read_recursive().identifier_of(symbol)
    }

    /// Owned copy of the string for `id`
    pub fn symbol_of(&self, id: SymbolId) -> InternResult<String> {
        self.inner
            .table
            .read_recursive()
            .symbol_of(id)
            .map(str::to_string)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.inner.table.read_recursive().contains(symbol)
    }

    pub fn size(&self) -> usize {
        self.inner.table.read_recursive().size()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.table.read_recursive().is_empty()
    }

    /// Snapshot of all symbols ordered by identifier
    pub fn symbols(&self) -> Vec<String> {
        self.inner.table.read_recursive().to_vec()
    }

    /// Counters of the wrapped table, including hits served on the read path
    pub fn stats(&self) -> InternerStats {
        let mut stats = self.inner.table.read_recursive().stats();
        stats.hits += self.inner.read_hits.load(Ordering::Relaxed);
        stats
    }

    /// Run `f` against the table under a single read guard
    ///
    /// Use this for multi-step reads that must observe one consistent state.
    /// Prefer the `&Interner` handed to `f`. The read-only methods of this
    /// handle also work inside `f`, but [`intern`](Self::intern) on any clone
    /// of it deadlocks.
    pub fn with_read<R>(&self, f: impl FnOnce(&Interner) -> R) -> R {
        f(&self.inner.table.read_recursive())
    }
}
