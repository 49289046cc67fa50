//! Single-owner string interner.
//!
//! Both directions of the mapping live in one insertion-ordered hash set:
//! the position of an entry is its identifier, so hashing a string gives
//! the forward lookup and indexing by position gives the reverse lookup.
//! Entries are only ever appended, which keeps positions stable.
//!
//! # Performance Characteristics
//!
//! - **Interning (hit)**: O(1) - hash lookup only
//! - **Interning (miss)**: O(1) amortized - hash insert + allocation
//! - **String retrieval**: O(1) - index into the entry vector

use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;
use tracing::{debug, trace, warn};

use super::{InternerStats, SymbolId};
use crate::config::InternerConfig;
use crate::error::{ConfigResult, InternError, InternResult};

/// Bidirectional symbol table
///
/// Maps each distinct string to a [`SymbolId`] assigned in first-seen order,
/// starting at `0`. The table is append-only: there is no removal, so an
/// identifier stays valid for the lifetime of the interner.
///
/// # Examples
///
/// ```
/// use symtab::symbol::Interner;
///
/// let mut interner = Interner::new();
/// let ids: Vec<u32> = ["a", "b", "a", "c"]
///     .into_iter()
///     .map(|s| interner.intern(s).unwrap().as_u32())
///     .collect();
///
/// assert_eq!(ids, [0, 1, 0, 2]);
/// assert_eq!(interner.size(), 3);
/// assert_eq!(interner.to_vec(), ["a", "b", "c"]);
/// ```
#[derive(Debug, Clone)]
pub struct Interner {
    /// Entry position is the identifier
    table: IndexSet<Box<str>, FxBuildHasher>,

    /// Number of distinct symbols accepted before `intern` starts failing
    capacity_limit: u32,

    /// Diagnostic counters, not part of the table state
    hits: usize,
    misses: usize,
    rejected: usize,
}

impl Interner {
    /// Create an empty interner with the full `u32` identifier space
    pub fn new() -> Self {
        Self::with_capacity_limit(SymbolId::MAX_CAPACITY)
    }

    /// Create an empty interner that accepts at most `capacity_limit`
    /// distinct symbols
    pub fn with_capacity_limit(capacity_limit: u32) -> Self {
        Self::build(capacity_limit, 0)
    }

    /// Create an empty interner from a validated config
    pub fn with_config(config: &InternerConfig) -> ConfigResult<Self> {
        config.validate()?;
        debug!(
            capacity_limit = config.capacity_limit,
            initial_capacity = config.initial_capacity,
            "creating interner from config"
        );
        Ok(Self::build(config.capacity_limit, config.initial_capacity))
    }

    fn build(capacity_limit: u32, initial_capacity: usize) -> Self {
        let reserve = initial_capacity.min(capacity_limit as usize);
        Self {
            table: IndexSet::with_capacity_and_hasher(reserve, FxBuildHasher),
            capacity_limit,
            hits: 0,
            misses: 0,
            rejected: 0,
        }
    }

    /// Intern a string, returning its identifier
    ///
    /// If the string is already known its existing identifier is returned and
    /// the table is left untouched. Otherwise the next identifier is assigned.
    ///
    /// # Errors
    ///
    /// [`InternError::ExhaustedIdentifierSpace`] if the string is new and
    /// every identifier below the capacity limit is taken. Known strings keep
    /// resolving after that point.
    pub fn intern(&mut self, symbol: &str) -> InternResult<SymbolId> {
        if let Some(index) = self.table.get_index_of(symbol) {
            self.hits += 1;
            return Ok(SymbolId::from_index(index));
        }

        if self.table.len() >= self.capacity_limit as usize {
            self.rejected += 1;
            warn!(
                capacity = self.capacity_limit,
                "identifier space exhausted, rejecting new symbol"
            );
            return Err(InternError::ExhaustedIdentifierSpace {
                capacity: self.capacity_limit,
            });
        }

        let (index, _) = self.table.insert_full(Box::from(symbol));
        self.misses += 1;
        let id = SymbolId::from_index(index);
        trace!(id = id.as_u32(), symbol, "assigned new identifier");
        Ok(id)
    }

    /// Intern every string in order
    ///
    /// Stops at the first failure; strings interned before it stay interned.
    pub fn intern_all<'a, I>(&mut self, symbols: I) -> InternResult<Vec<SymbolId>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        symbols.into_iter().map(|s| self.intern(s)).collect()
    }

    /// Get the identifier of a previously interned string
    ///
    /// Pure lookup: never interns.
    ///
    /// # Errors
    ///
    /// [`InternError::SymbolNotFound`] if the string was never interned.
    pub fn identifier_of(&self, symbol: &str) -> InternResult<SymbolId> {
        self.get(symbol).ok_or_else(|| InternError::SymbolNotFound {
            symbol: symbol.to_string(),
        })
    }

    /// Get the string an identifier was assigned to
    ///
    /// # Errors
    ///
    /// [`InternError::IdentifierNotFound`] if `id` is not below [`size`](Self::size).
    pub fn symbol_of(&self, id: SymbolId) -> InternResult<&str> {
        self.resolve(id).ok_or(InternError::IdentifierNotFound {
            id: i64::from(id.as_u32()),
        })
    }

    /// Like [`identifier_of`](Self::identifier_of), treating absence as normal
    #[inline]
    pub fn get(&self, symbol: &str) -> Option<SymbolId> {
        self.table.get_index_of(symbol).map(SymbolId::from_index)
    }

    /// Like [`symbol_of`](Self::symbol_of), treating absence as normal
    #[inline]
    pub fn resolve(&self, id: SymbolId) -> Option<&str> {
        self.table.get_index(id.index()).map(|s| &**s)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.table.contains(symbol)
    }

    /// Number of distinct symbols interned so far
    ///
    /// Equal to the identifier the next new symbol will receive.
    #[inline]
    pub fn size(&self) -> usize {
        self.table.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.size()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn capacity_limit(&self) -> u32 {
        self.capacity_limit
    }

    /// Number of new symbols that can still be accepted
    pub fn remaining(&self) -> u32 {
        // len never exceeds capacity_limit, which fits in u32
        self.capacity_limit - self.table.len() as u32
    }

    /// All symbols ordered by identifier, as a borrowed read-only view
    pub fn symbols(&self) -> impl ExactSizeIterator<Item = &str> + DoubleEndedIterator + '_ {
        self.table.iter().map(|s| &**s)
    }

    /// `(identifier, symbol)` pairs in identifier order
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (SymbolId, &str)> + '_ {
        self.table
            .iter()
            .enumerate()
            .map(|(index, s)| (SymbolId::from_index(index), &**s))
    }

    /// Owned snapshot of all symbols ordered by identifier
    pub fn to_vec(&self) -> Vec<String> {
        self.symbols().map(str::to_string).collect()
    }

    /// Profiling counters
    ///
    /// The counters sit outside the table: hits and rejected calls bump them
    /// while the symbol/identifier mapping stays exactly as it was.
    pub fn stats(&self) -> InternerStats {
        InternerStats {
            count: self.table.len(),
            capacity: self.capacity_limit as usize,
            hits: self.hits,
            misses: self.misses,
            rejected: self.rejected,
        }
    }
}

impl Default for Interner {
    fn default() -> Self {
        Self::new()
    }
}
