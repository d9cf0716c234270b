//! Architecture enforcement tests.
//!
//! Dependencies point one way: `cli -> engine -> store -> core`, with `ui`
//! depending only on `core`. A lower layer that imports a higher one would
//! make the two modules depend on each other, so these tests fail on any
//! such import.

use std::fs;
use std::path::{Path, PathBuf};

/// Each layer and the modules it must not reach into.
const FORBIDDEN: &[(&str, &[&str])] = &[
    ("src/core", &["engine", "store", "cli", "ui"]),
    ("src/store", &["engine", "cli", "ui"]),
    ("src/ui", &["engine", "store", "cli"]),
    ("src/engine", &["cli"]),
];

/// All `.rs` files under `dir`, recursively.
fn rust_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).expect("Failed to read source directory") {
        let path = entry.expect("Failed to read entry").path();
        if path.is_dir() {
            files.extend(rust_files(&path));
        } else if path.extension().map(|e| e == "rs").unwrap_or(false) {
            files.push(path);
        }
    }
    files
}

#[test]
fn layers_do_not_import_upward() {
    let mut violations = Vec::new();

    for (layer, forbidden) in FORBIDDEN {
        for path in rust_files(Path::new(layer)) {
            let content = fs::read_to_string(&path)
                .unwrap_or_else(|_| panic!("Failed to read {}", path.display()));

            for (number, line) in content.lines().enumerate() {
                let code = line.trim_start();
                // Doc links may name other layers.
                if code.starts_with("//") {
                    continue;
                }
                for module in *forbidden {
                    if code.contains(&format!("crate::{}::", module))
                        || code.contains(&format!("crate::{};", module))
                    {
                        violations.push(format!(
                            "{}:{}: imports crate::{}",
                            path.display(),
                            number + 1,
                            module
                        ));
                    }
                }
            }
        }
    }

    assert!(
        violations.is_empty(),
        "Architecture violations found:\n  {}",
        violations.join("\n  ")
    );
}

#[test]
fn every_layer_directory_exists() {
    for (layer, _) in FORBIDDEN {
        assert!(Path::new(layer).is_dir(), "missing layer directory {}", layer);
    }
}
