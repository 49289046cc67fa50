//! Symbol module - bidirectional string interning.
//!
//! This module provides the [`Interner`], which maps strings ("symbols") to
//! compact [`SymbolId`] handles and back again. Identifiers are dense: the
//! first distinct string seen gets `0`, the next `1`, and so on, with no gaps
//! and no reuse. That makes them usable as indices into side tables (graph
//! node labels, columnar encodings).
//!
//! # Performance Characteristics
//!
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | [`Interner::intern`] (hit) | O(1) | Hash lookup only |
//! | [`Interner::intern`] (miss) | O(1) amortized | Hash insert + one allocation |
//! | [`Interner::identifier_of`] | O(1) | Hash lookup, never inserts |
//! | [`Interner::symbol_of`] | O(1) | Direct index |
//!
//! # Thread Safety
//!
//! [`Interner`] mutates through `&mut self`, so a single owner gets exclusive
//! access for free. Hosts that share one table between threads wrap it in a
//! [`SharedInterner`], which serializes interning behind a read-write lock.
//!
//! # Examples
//!
//! ```
//! use symtab::symbol::Interner;
//!
//! let mut interner = Interner::new();
//! let a = interner.intern("a").unwrap();
//! let b = interner.intern("b").unwrap();
//!
//! assert_eq!(interner.intern("a").unwrap(), a);
//! assert_eq!(a.as_u32(), 0);
//! assert_eq!(b.as_u32(), 1);
//! assert_eq!(interner.symbol_of(b).unwrap(), "b");
//! ```

mod interner;
mod shared;

use std::fmt;

pub use interner::Interner;
pub use shared::SharedInterner;

use crate::error::InternError;

/// Identifier assigned to an interned symbol
///
/// A 4-byte handle. Identifiers are only meaningful for the interner that
/// produced them.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SymbolId(u32);

impl SymbolId {
    /// Hard upper bound on the number of distinct symbols in one table.
    ///
    /// The largest identifier ever assigned is `MAX_CAPACITY - 1`.
    pub const MAX_CAPACITY: u32 = u32::MAX;

    /// Create an identifier from its raw value
    ///
    /// The result is not tied to any table; looking it up may still fail
    /// with [`InternError::IdentifierNotFound`].
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw identifier value
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Get the identifier as a table position
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Callers guarantee `index < MAX_CAPACITY`.
    pub(crate) fn from_index(index: usize) -> Self {
        debug_assert!(index < Self::MAX_CAPACITY as usize);
        Self(index as u32)
    }
}

impl TryFrom<i64> for SymbolId {
    type Error = InternError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        u32::try_from(raw)
            .map(Self)
            .map_err(|_| InternError::IdentifierNotFound { id: raw })
    }
}

impl TryFrom<usize> for SymbolId {
    type Error = InternError;

    fn try_from(raw: usize) -> Result<Self, Self::Error> {
        u32::try_from(raw).map(Self).map_err(|_| InternError::IdentifierNotFound {
            id: i64::try_from(raw).unwrap_or(i64::MAX),
        })
    }
}

impl From<SymbolId> for u32 {
    fn from(id: SymbolId) -> Self {
        id.0
    }
}

impl fmt::Debug for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SymbolId({})", self.0)
    }
}

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Statistics about an interner for profiling
///
/// These counters are diagnostics kept beside the table. They are not part
/// of the symbol/identifier mapping: a hit or a rejected `intern` moves a
/// counter but leaves the mapping untouched.
///
/// # Fields
///
/// * `count` - Number of distinct interned symbols
/// * `capacity` - Configured capacity limit
/// * `hits` - Number of `intern` calls for an already-known symbol
/// * `misses` - Number of `intern` calls that assigned a new identifier
/// * `rejected` - Number of novel symbols refused because the table was full
///
/// # Examples
///
/// ```
/// use symtab::symbol::Interner;
///
/// let mut interner = Interner::new();
/// interner.intern("x").unwrap();
/// interner.intern("x").unwrap();
///
/// let stats = interner.stats();
/// assert_eq!(stats.count, 1);
/// assert_eq!(stats.hit_rate(), 0.5);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InternerStats {
    pub count: usize,
    pub capacity: usize,
    pub hits: usize,
    pub misses: usize,
    pub rejected: usize,
}

impl InternerStats {
    /// Fraction of the capacity limit already assigned
    ///
    /// Returns 0.0 if capacity is 0.
    pub fn load_factor(&self) -> f64 {
        if self.capacity == 0 {
            0.0
        } else {
            self.count as f64 / self.capacity as f64
        }
    }

    /// Check if the identifier space is getting full (load factor > 0.75)
    pub fn is_near_capacity(&self) -> bool {
        self.load_factor() > 0.75
    }

    /// Calculate the hit rate (hits / (hits + misses))
    ///
    /// Returns 0.0 if nothing has been interned.
    pub fn hit_rate(&self) -> f64 {
        let total = self.total_operations();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Number of successful `intern` calls
    pub fn total_operations(&self) -> usize {
        self.hits + self.misses
    }
}

static_assertions::assert_impl_all!(SymbolId: Send, Sync, Copy);
static_assertions::assert_impl_all!(Interner: Send, Sync);
static_assertions::assert_impl_all!(SharedInterner: Send, Sync, Clone);
