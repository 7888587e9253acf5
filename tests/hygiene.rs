//! Hygiene: enforces coding standards at test time.
//!
//! Scans the enhancer's production sources for constructs that crash the page
//! script or swallow errors without looking at them. Every budget is zero; a
//! hit fails with the offending files listed.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

struct Rule {
    pattern: &'static str,
    reason: &'static str,
}

const RULES: &[Rule] = &[
    Rule { pattern: ".unwrap()", reason: "panics abort the whole WASM instance" },
    Rule { pattern: ".expect(", reason: "panics abort the whole WASM instance" },
    Rule { pattern: "panic!(", reason: "panics abort the whole WASM instance" },
    Rule { pattern: "unreachable!(", reason: "panics abort the whole WASM instance" },
    Rule { pattern: "todo!(", reason: "stubs must not ship" },
    Rule { pattern: "unimplemented!(", reason: "stubs must not ship" },
    Rule { pattern: "let _ =", reason: "discarded results must be logged" },
    Rule { pattern: ".ok()", reason: "discarded errors must be logged or matched" },
    Rule { pattern: "#[allow(dead_code)]", reason: "unused code should be deleted" },
];

/// Production `.rs` files under `src/`, excluding `*_test.rs`.
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

#[test]
fn sources_are_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("lib.rs")), "run from the crate root");
}

#[test]
fn zero_budget_rules() {
    let files = source_files();
    let mut report = Vec::new();
    for rule in RULES {
        for (path, count) in hits(&files, rule.pattern) {
            report.push(format!("  {path}: {count} x `{}` ({})", rule.pattern, rule.reason));
        }
    }
    assert!(report.is_empty(), "hygiene violations:\n{}", report.join("\n"));
}
