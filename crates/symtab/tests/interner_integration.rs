//! Interner Integration Tests - Public API End to End
//!
//! These tests drive the crate the way a consumer does:
//! - Loading a config file and building tables from it
//! - Encoding graph labels through a shared table
//! - Saturation behavior as seen from outside the crate

mod common;

use std::io::Write;
use std::sync::Arc;
use std::thread;

use common::{init_logging, interner_with};
use symtab::{ConfigError, InternError, Interner, InternerConfig, SharedInterner, SymbolId};

// ============================================================================
// FIRST-SEEN ORDERING AND LOOKUPS
// ============================================================================

#[test]
fn test_first_seen_example() {
    init_logging();
    let mut interner = Interner::new();

    let ids: Vec<u32> = ["a", "b", "a", "c"]
        .iter()
        .map(|s| interner.intern(s).unwrap().as_u32())
        .collect();

    assert_eq!(ids, vec![0, 1, 0, 2]);
    assert_eq!(interner.size(), 3);
    assert_eq!(interner.to_vec(), vec!["a", "b", "c"]);
}

#[test]
fn test_reverse_lookup_range() {
    init_logging();
    let mut interner = Interner::new();
    assert!(matches!(
        interner.symbol_of(SymbolId::new(0)),
        Err(InternError::IdentifierNotFound { id: 0 })
    ));

    interner.intern("first").unwrap();
    assert_eq!(interner.symbol_of(SymbolId::new(0)).unwrap(), "first");
    assert!(matches!(
        interner.symbol_of(SymbolId::new(1)),
        Err(InternError::IdentifierNotFound { id: 1 })
    ));
}

#[test]
fn test_failed_calls_leave_table_unchanged() {
    init_logging();
    let mut interner = Interner::with_capacity_limit(2);
    interner.intern_all(["p", "q"]).unwrap();
    let before = interner.to_vec();

    assert!(interner.identifier_of("r").is_err());
    assert!(interner.symbol_of(SymbolId::new(2)).is_err());
    assert!(interner.intern("r").is_err());

    assert_eq!(interner.to_vec(), before);
    assert_eq!(interner.identifier_of("q").unwrap(), SymbolId::new(1));
}

// ============================================================================
// CONFIGURATION
// ============================================================================

#[test]
fn test_config_file_drives_capacity() {
    init_logging();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "capacity_limit = 3").unwrap();
    writeln!(file, "initial_capacity = 3").unwrap();

    let config = InternerConfig::load_from_path(file.path()).unwrap();
    let mut interner = Interner::with_config(&config).unwrap();

    interner.intern_all(["x", "y", "z"]).unwrap();
    assert_eq!(
        interner.intern("w"),
        Err(InternError::ExhaustedIdentifierSpace { capacity: 3 })
    );
    assert_eq!(interner.intern("y").unwrap(), SymbolId::new(1));
}

#[test]
fn test_config_file_invalid() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("symtab.toml");
    std::fs::write(&path, "capacity_limit = 0\n").unwrap();

    let result = InternerConfig::load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::Invalid(_))));

    std::fs::write(&path, "capacity_limit = [1, 2]\n").unwrap();
    let result = InternerConfig::load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_config_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = InternerConfig::load_from_path(&dir.path().join("absent.toml"));
    assert!(matches!(result, Err(ConfigError::Io { .. })));
}

// ============================================================================
// GRAPH LABEL ENCODING
// ============================================================================

#[test]
fn test_edge_list_encoding_roundtrip() {
    init_logging();
    let edges = [
        ("picasso", "painter"),
        ("picasso", "spain"),
        ("braque", "painter"),
        ("braque", "france"),
    ];

    let mut labels = Interner::new();
    let encoded: Vec<(SymbolId, SymbolId)> = edges
        .iter()
        .map(|(from, to)| (labels.intern(from).unwrap(), labels.intern(to).unwrap()))
        .collect();

    assert_eq!(labels.size(), 5);

    // dense ids index straight into a side table
    let mut out_degree = vec![0usize; labels.size()];
    for (from, _) in &encoded {
        out_degree[from.index()] += 1;
    }
    assert_eq!(out_degree[labels.identifier_of("picasso").unwrap().index()], 2);
    assert_eq!(out_degree[labels.identifier_of("painter").unwrap().index()], 0);

    let decoded: Vec<(&str, &str)> = encoded
        .iter()
        .map(|(from, to)| (labels.symbol_of(*from).unwrap(), labels.symbol_of(*to).unwrap()))
        .collect();
    assert_eq!(decoded, edges);
}

#[test]
fn test_shared_table_across_workers() {
    init_logging();
    let shared = SharedInterner::new();
    let corpus: Arc<Vec<String>> = Arc::new((0..200).map(|i| format!("node-{}", i % 50)).collect());

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let shared = shared.clone();
            let corpus = Arc::clone(&corpus);
            thread::spawn(move || {
                corpus
                    .iter()
                    .skip(worker)
                    .step_by(4)
                    .map(|label| (label.clone(), shared.intern(label).unwrap()))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        for (label, id) in handle.join().unwrap() {
            assert_eq!(shared.symbol_of(id).unwrap(), label);
        }
    }
    assert_eq!(shared.size(), 50);

    let seeded = interner_with(&["a", "b"]);
    let shared = SharedInterner::from_interner(seeded);
    assert_eq!(shared.intern("a").unwrap(), SymbolId::new(0));
}
