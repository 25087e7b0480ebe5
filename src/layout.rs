//! Single source of truth for the generated skill layout.
//!
//! This module defines WHERE generated entries live, relative to the
//! skill root. It has no I/O, no validation, no business logic. One file
//! shows the entire layout.
//!
//! ```text
//! <root>/
//! ├── README.md
//! ├── skill.json
//! ├── .gitignore
//! ├── src/
//! │   ├── main.py
//! │   └── __init__.py
//! ├── tests/
//! │   ├── test_main.py
//! │   └── __init__.py
//! ├── docs/
//! │   └── api.md
//! └── examples/
//!     └── example.md
//! ```

use std::path::{Path, PathBuf};

/// Subdirectories created under the skill root, in creation order.
pub const SUBDIRS: [&str; 4] = ["src", "tests", "docs", "examples"];

/// Project README: `README.md`
pub const README: &str = "README.md";

/// Skill metadata manifest: `skill.json`
pub const MANIFEST: &str = "skill.json";

/// Git ignore rules: `.gitignore`
pub const GITIGNORE: &str = ".gitignore";

/// Entry-point script: `src/main.py`
pub const MAIN_PY: &str = "src/main.py";

/// Package marker with docstring: `src/__init__.py`
pub const PACKAGE_INIT: &str = "src/__init__.py";

/// Test stub: `tests/test_main.py`
pub const TEST_MAIN: &str = "tests/test_main.py";

/// Test package marker (empty): `tests/__init__.py`
pub const TESTS_INIT: &str = "tests/__init__.py";

/// Usage examples stub: `examples/example.md`
pub const EXAMPLE_DOC: &str = "examples/example.md";

/// API documentation stub: `docs/api.md`
pub const API_DOC: &str = "docs/api.md";

/// Every generated file, in the order it is written.
///
/// This is the write order reported to the user, not the listing order
/// of the tree above.
pub const FILES: [&str; 9] = [
    README,
    MANIFEST,
    MAIN_PY,
    PACKAGE_INIT,
    GITIGNORE,
    TEST_MAIN,
    TESTS_INIT,
    EXAMPLE_DOC,
    API_DOC,
];

/// Skill manifest: `<root>/skill.json`
pub fn manifest_path(root: &Path) -> PathBuf {
    root.join(MANIFEST)
}

/// Entry-point script: `<root>/src/main.py`
pub fn main_py_path(root: &Path) -> PathBuf {
    root.join(MAIN_PY)
}
