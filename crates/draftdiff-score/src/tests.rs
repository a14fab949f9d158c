//! End-to-end scoring scenarios over real directories.

use crate::{MatchConfig, Scorer};
use std::fs;
use std::path::Path;

fn scorer() -> Scorer {
    Scorer::new(MatchConfig::default()).unwrap()
}

fn write_vector(dir: &Path, name: &str, csv: &str) {
    fs::write(dir.join(name), csv).unwrap();
}

fn base_name(key: &str) -> String {
    format!("{}_normalized_tokenized_vectorized.txt", key)
}

fn final_name(key: &str) -> String {
    format!("{} - Final_normalized_tokenized_vectorized.txt", key)
}

#[test]
fn test_identical_vectors_score_one() {
    let dir = tempfile::tempdir().unwrap();
    write_vector(dir.path(), &base_name("A"), "1,0,0");
    write_vector(dir.path(), &final_name("A"), "1,0,0");
    let output = dir.path().join("results.txt");

    let records = scorer().score_directory(dir.path(), &output).unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].key, "A");
    let table = fs::read_to_string(&output).unwrap();
    assert_eq!(table, "File Name,Cosine Similarity\nA,1.000000\n");
}

#[test]
fn test_orthogonal_vectors_score_zero() {
    let dir = tempfile::tempdir().unwrap();
    write_vector(dir.path(), &base_name("A"), "1,0");
    write_vector(dir.path(), &final_name("A"), "0,1");
    let output = dir.path().join("results.txt");

    scorer().score_directory(dir.path(), &output).unwrap();

    let table = fs::read_to_string(&output).unwrap();
    assert!(table.contains("A,0.000000"));
}

#[test]
fn test_single_role_key_emits_no_row() {
    let dir = tempfile::tempdir().unwrap();
    write_vector(dir.path(), &base_name("Y"), "1,0,0");
    let output = dir.path().join("results.txt");

    let records = scorer().score_directory(dir.path(), &output).unwrap();

    assert!(records.is_empty());
    let table = fs::read_to_string(&output).unwrap();
    assert_eq!(table, "File Name,Cosine Similarity\n");
}

#[test]
fn test_dimension_mismatch_skips_pair_but_not_batch() {
    let dir = tempfile::tempdir().unwrap();
    write_vector(dir.path(), &base_name("Bad"), "1,0,0");
    write_vector(dir.path(), &final_name("Bad"), "1,0,0,0,0");
    write_vector(dir.path(), &base_name("Good"), "1,0");
    write_vector(dir.path(), &final_name("Good"), "1,0");
    let output = dir.path().join("results.txt");

    let records = scorer().score_directory(dir.path(), &output).unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].key, "Good");
    let table = fs::read_to_string(&output).unwrap();
    assert!(!table.contains("Bad"));
    assert!(table.contains("Good,1.000000"));
}

#[test]
fn test_malformed_vector_skips_pair_but_not_batch() {
    let dir = tempfile::tempdir().unwrap();
    write_vector(dir.path(), &base_name("Broken"), "1,banana,0");
    write_vector(dir.path(), &final_name("Broken"), "1,0,0");
    write_vector(dir.path(), &base_name("Fine"), "0,2");
    write_vector(dir.path(), &final_name("Fine"), "0,1");
    let output = dir.path().join("results.txt");

    let records = scorer().score_directory(dir.path(), &output).unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].key, "Fine");
    assert!((records[0].score - 1.0).abs() < 1e-6);
}

#[test]
fn test_zero_norm_pair_skipped() {
    let dir = tempfile::tempdir().unwrap();
    write_vector(dir.path(), &base_name("Zero"), "0,0,0");
    write_vector(dir.path(), &final_name("Zero"), "1,0,0");
    let output = dir.path().join("results.txt");

    let records = scorer().score_directory(dir.path(), &output).unwrap();

    assert!(records.is_empty());
    let table = fs::read_to_string(&output).unwrap();
    assert_eq!(table, "File Name,Cosine Similarity\n");
}

#[test]
fn test_results_file_truncated_between_runs() {
    let dir = tempfile::tempdir().unwrap();
    write_vector(dir.path(), &base_name("A"), "1,0");
    write_vector(dir.path(), &final_name("A"), "1,0");
    let output = dir.path().join("results.txt");
    fs::write(&output, "File Name,Cosine Similarity\nStale,0.500000\n").unwrap();

    scorer().score_directory(dir.path(), &output).unwrap();

    let table = fs::read_to_string(&output).unwrap();
    assert!(!table.contains("Stale"));
    assert_eq!(table, "File Name,Cosine Similarity\nA,1.000000\n");
}

#[test]
fn test_rows_follow_key_discovery_order() {
    let dir = tempfile::tempdir().unwrap();
    for key in ["B", "A", "C"] {
        write_vector(dir.path(), &base_name(key), "1,1");
        write_vector(dir.path(), &final_name(key), "1,1");
    }
    let output = dir.path().join("results.txt");

    let records = scorer().score_directory(dir.path(), &output).unwrap();

    let keys: Vec<&str> = records.iter().map(|r| r.key.as_str()).collect();
    // Discovery is a sorted scan, so keys appear alphabetically.
    assert_eq!(keys, vec!["A", "B", "C"]);

    let table = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines[0], "File Name,Cosine Similarity");
    assert_eq!(lines[1], "A,1.000000");
    assert_eq!(lines[3], "C,1.000000");
}

#[test]
fn test_custom_naming_convention() {
    let config = MatchConfig {
        final_marker: ".rev2_".to_string(),
        base_suffix: "_vec.txt".to_string(),
    };
    let scorer = Scorer::new(config).unwrap();

    let dir = tempfile::tempdir().unwrap();
    write_vector(dir.path(), "K_vec.txt", "1,0");
    write_vector(dir.path(), "K.rev2_vec.txt", "1,0");
    let output = dir.path().join("results.txt");

    let records = scorer.score_directory(dir.path(), &output).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].key, "K");
}
