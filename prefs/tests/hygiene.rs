//! Hygiene: source-scan budgets for the core crate.
//!
//! Production code here runs inside a page that cannot recover from a panic,
//! and every DOM or store failure must reach the caller as a `ThemeError`.
//! Each budget is zero; test files (`*_test.rs`) are excluded.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

// Panics.
const MAX_UNWRAP: usize = 0;
const MAX_EXPECT: usize = 0;
const MAX_PANIC: usize = 0;
const MAX_TODO: usize = 0;

// Silently dropped results.
const MAX_SILENT_DISCARD: usize = 0;
const MAX_DOT_OK: usize = 0;

const MAX_ALLOW_DEAD_CODE: usize = 0;

struct SourceFile {
    path: String,
    content: String,
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn check_budget(pattern: &str, max: usize) {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found under src/");
    let found = hits(&files, pattern);
    let count: usize = found.iter().map(|(_, c)| c).sum();
    let listing = found
        .iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n");
    assert!(count <= max, "`{pattern}` budget exceeded: found {count}, max {max}.\n{listing}");
}

#[test]
fn unwrap_budget() {
    check_budget(".unwrap()", MAX_UNWRAP);
}

#[test]
fn expect_budget() {
    check_budget(".expect(", MAX_EXPECT);
}

#[test]
fn panic_budget() {
    check_budget("panic!(", MAX_PANIC);
}

#[test]
fn todo_budget() {
    check_budget("todo!(", MAX_TODO);
}

#[test]
fn silent_discard_budget() {
    check_budget("let _ =", MAX_SILENT_DISCARD);
}

#[test]
fn dot_ok_budget() {
    check_budget(".ok()", MAX_DOT_OK);
}

#[test]
fn allow_dead_code_budget() {
    check_budget("#[allow(dead_code)]", MAX_ALLOW_DEAD_CODE);
}
