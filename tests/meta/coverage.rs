//! Keeps `tests/unit/` in step with `src/`, one test file per source file

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";
    const TESTS_DIR: &str = "tests";

    // Relative paths of every directory and .rs file below `root`
    fn walk(root: &Path) -> io::Result<BTreeSet<String>> {
        let mut found = BTreeSet::new();
        let mut pending = vec![root.to_path_buf()];

        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                let relative = path
                    .strip_prefix(root)
                    .map_err(|strip_error| io::Error::other(strip_error.to_string()))?
                    .to_string_lossy()
                    .replace('\\', "/");

                if path.is_dir() {
                    found.insert(relative);
                    pending.push(path);
                } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                    found.insert(relative);
                }
            }
        }

        Ok(found)
    }

    fn is_module_file(relative: &str) -> bool {
        relative == "mod.rs" || relative.ends_with("/mod.rs")
    }

    // tests/unit/main.rs is the harness root, not the mirror of src/main.rs
    fn is_harness_root(relative: &str) -> bool {
        relative == "main.rs"
    }

    #[test]
    fn test_every_source_file_has_unit_tests() {
        let sources = walk(Path::new(SRC_DIR)).unwrap_or_default();
        let units = walk(Path::new(UNIT_DIR)).unwrap_or_default();
        assert!(!sources.is_empty(), "No sources found under {SRC_DIR}");

        let missing: Vec<String> = sources
            .iter()
            .filter(|relative| relative.as_str() != "lib.rs" && relative.as_str() != "main.rs")
            .filter(|relative| !is_module_file(relative))
            .filter(|relative| !units.contains(*relative))
            .map(|relative| format!("  - {SRC_DIR}/{relative} -> {UNIT_DIR}/{relative}"))
            .collect();

        assert!(
            missing.is_empty(),
            "Source files without unit test counterparts:\n{}",
            missing.join("\n")
        );
    }

    #[test]
    fn test_every_unit_test_has_a_source_file() {
        let sources = walk(Path::new(SRC_DIR)).unwrap_or_default();
        let units = walk(Path::new(UNIT_DIR)).unwrap_or_default();

        let orphaned: Vec<String> = units
            .iter()
            .filter(|relative| !is_module_file(relative) && !is_harness_root(relative))
            .filter(|relative| !sources.contains(*relative))
            .map(|relative| format!("  - {UNIT_DIR}/{relative} (no {SRC_DIR}/{relative})"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit test files without source counterparts:\n{}",
            orphaned.join("\n")
        );
    }

    #[test]
    fn test_every_test_file_contains_tests() {
        let files = walk(Path::new(TESTS_DIR)).unwrap_or_default();

        let empty: Vec<String> = files
            .iter()
            .filter(|relative| relative.ends_with(".rs") && !is_module_file(relative))
            .filter(|relative| {
                fs::read_to_string(Path::new(TESTS_DIR).join(relative))
                    .map(|content| !content.contains("#[test]"))
                    .unwrap_or(true)
            })
            .map(|relative| format!("  - {TESTS_DIR}/{relative}"))
            .collect();

        assert!(
            empty.is_empty(),
            "Test files without any #[test] functions:\n{}",
            empty.join("\n")
        );
    }
}
