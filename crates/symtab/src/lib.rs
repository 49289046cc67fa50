//! symtab - Bidirectional Symbol Table
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! This crate maps arbitrary strings ("symbols") to small dense integer
//! identifiers and back. It is meant as a compact stand-in for strings inside
//! larger data structures, such as node and edge labels of a graph or a
//! dictionary column in a columnar encoding.
//!
//! GUARANTEES:
//! -----------
//! 1. BIJECTION
//!    `symbol_of(identifier_of(s)) == s` for every interned `s`, and the
//!    reverse holds for every assigned identifier.
//!
//! 2. DENSE, FIRST-SEEN IDENTIFIERS
//!    N distinct strings receive exactly the identifiers `0..N`, in the
//!    order they were first interned.
//!
//! 3. APPEND-ONLY
//!    There is no removal, so an identifier never changes meaning.
//!
//! 4. BOUNDED
//!    Identifiers are `u32`. Once the capacity limit is reached, new strings
//!    are rejected with an error while known strings keep resolving.
//
// ============================================================================
// LAYOUT
// ============================================================================
//
// ```
// Interner
// ┌──────────────────────────────────────────────┐
// │ IndexSet<Box<str>, FxBuildHasher>            │
// │                                              │
// │   hash("b") ──► position 1                   │  forward
// │   position 1 ──► "b"                         │  reverse
// │                                              │
// │   [0] "a"   [1] "b"   [2] "c"   ...          │
// └──────────────────────────────────────────────┘
//
// SymbolId (4 bytes):
// ┌──────────────┐
// │   position   │
// │   (32-bit)   │
// └──────────────┘
// ```
//
// Shared access is layered on top: `SharedInterner` wraps the same type in
// `Arc<RwLock<_>>` without changing the algorithm.

pub mod config;
pub mod error;
pub mod symbol;

pub use config::InternerConfig;
pub use error::{ConfigError, ConfigResult, InternError, InternResult};
pub use symbol::{Interner, InternerStats, SharedInterner, SymbolId};
