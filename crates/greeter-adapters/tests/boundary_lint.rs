//! Only `boundary.rs` may convert I/O faults into core errors.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

/// Patterns that indicate fault interception or conversion.
const CONVERSIONS: &[&str] = &["Error::io(", "catch_unwind", "io::Error) ->"];

#[test]
fn fault_conversion_lives_only_in_boundary_module() {
    let src = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");
    let mut violations = Vec::new();

    for entry in WalkDir::new(&src)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
    {
        let relative = entry.path().strip_prefix(&src).unwrap();
        if relative == Path::new("boundary.rs") {
            continue;
        }

        let text = fs::read_to_string(entry.path()).unwrap();
        for (number, line) in text.lines().enumerate() {
            if line.trim_start().starts_with("//") {
                continue;
            }
            for needle in CONVERSIONS {
                if line.contains(needle) {
                    violations.push(format!("{}:{}: {needle}", relative.display(), number + 1));
                }
            }
        }
    }

    assert!(
        violations.is_empty(),
        "fault conversion outside boundary.rs:\n{}",
        violations.join("\n")
    );
}

#[test]
fn no_panic_interception_anywhere() {
    let src = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");
    for entry in WalkDir::new(&src).into_iter().filter_map(Result::ok) {
        if entry.file_type().is_file() {
            let text = fs::read_to_string(entry.path()).unwrap();
            assert!(
                !text.contains("catch_unwind"),
                "{} intercepts panics",
                entry.path().display()
            );
        }
    }
}
