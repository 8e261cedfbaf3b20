//! Corpus harness for the front-matter parser.
//!
//! Every document under test/ok/ must parse; every document under test/bad/
//! must fail with `UnexpectedToken`. Drop a .fm file into either directory to
//! extend the corpus.

use std::fs;
use std::path::{Path, PathBuf};

use glob::glob;
use libmatter::{parse, ParseError};

/// Root corpus directory (test/ at the workspace root).
fn corpus_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join("test")
}

/// All .fm files in a corpus subdirectory, sorted for stable test output.
fn corpus_files(subdir: &str) -> Vec<PathBuf> {
    let pattern = corpus_root().join(subdir).join("*.fm");
    let mut files: Vec<PathBuf> = glob(pattern.to_str().unwrap())
        .unwrap()
        .filter_map(|entry| entry.ok())
        .collect();
    files.sort();
    files
}

#[test]
fn ok_corpus_parses() {
    let files = corpus_files("ok");
    assert!(!files.is_empty(), "no fixtures under test/ok/");
    for path in files {
        let source = fs::read_to_string(&path).unwrap();
        let result = parse(&source);
        assert!(
            result.is_ok(),
            "{} failed to parse: {:?}",
            path.display(),
            result
        );
    }
}

#[test]
fn bad_corpus_is_rejected() {
    let files = corpus_files("bad");
    assert!(!files.is_empty(), "no fixtures under test/bad/");
    for path in files {
        let source = fs::read_to_string(&path).unwrap();
        let result = parse(&source);
        assert_eq!(
            result,
            Err(ParseError::UnexpectedToken),
            "{} parsed but should not have",
            path.display()
        );
    }
}
