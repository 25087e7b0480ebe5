//! Scaffold a new skill: request in, directory tree and files out.
//!
//! A [`ScaffoldRequest`] is turned into a deterministic [`ScaffoldPlan`] -
//! an ordered list of directory and file entries - which is then applied
//! to the filesystem one entry at a time. Directory creation is exist-ok;
//! file writes overwrite without an existence check, so re-running over an
//! existing skill clobbers prior edits to the generated files. A failed
//! entry aborts the remaining entries; entries already created stay in
//! place (no rollback).

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::{layout, templates};

/// Plan path of the skill root itself.
const ROOT_DIR: &str = ".";

/// Input to the scaffolder: a skill name and an optional target root.
#[derive(Debug, Clone)]
pub struct ScaffoldRequest {
    name: String,
    target: Option<PathBuf>,
}

impl ScaffoldRequest {
    /// Build a request, rejecting empty names before any filesystem
    /// access. Any non-empty name is accepted verbatim.
    pub fn new(name: &str, target: Option<&Path>) -> Result<Self> {
        if name.trim().is_empty() {
            anyhow::bail!("skill name must not be empty");
        }
        Ok(Self {
            name: name.to_string(),
            target: target.map(Path::to_path_buf),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Target root: the explicit path when given, else `<cwd>/<name>`.
    pub fn resolve_root(&self) -> Result<PathBuf> {
        match &self.target {
            Some(path) => Ok(path.clone()),
            None => {
                let cwd = std::env::current_dir()
                    .context("Failed to resolve current directory")?;
                Ok(cwd.join(&self.name))
            }
        }
    }
}

/// One step of the plan, relative to the skill root.
#[derive(Debug, Clone)]
pub enum Entry {
    /// Directory, created with parents, exist-ok.
    Dir { path: &'static str },
    /// File, written unconditionally.
    File { path: &'static str, content: String },
}

impl Entry {
    /// Progress-line description: `skill directory: <root>` for the root,
    /// `directory: src/` for subdirectories, the relative path for files.
    pub fn describe(&self, root: &Path) -> String {
        match self {
            Entry::Dir { path } if *path == ROOT_DIR => {
                format!("skill directory: {}", root.display())
            }
            Entry::Dir { path } => format!("directory: {path}/"),
            Entry::File { path, .. } => (*path).to_string(),
        }
    }

    fn absolute(&self, root: &Path) -> PathBuf {
        let rel = match self {
            Entry::Dir { path } | Entry::File { path, .. } => path,
        };
        if *rel == ROOT_DIR {
            root.to_path_buf()
        } else {
            root.join(rel)
        }
    }
}

/// Apply a single plan entry under `root`.
pub fn apply_entry(root: &Path, entry: &Entry) -> Result<()> {
    let target = entry.absolute(root);
    match entry {
        Entry::Dir { .. } => fs::create_dir_all(&target)
            .with_context(|| format!("Failed to create directory: {}", target.display()))?,
        Entry::File { content, .. } => fs::write(&target, content)
            .with_context(|| format!("Failed to write file: {}", target.display()))?,
    }
    Ok(())
}

/// Ordered creation plan derived from a request.
#[derive(Debug)]
pub struct ScaffoldPlan {
    entries: Vec<Entry>,
}

impl ScaffoldPlan {
    /// Compute the full plan: root, subdirectories, then files in write
    /// order.
    pub fn build(request: &ScaffoldRequest) -> Result<Self> {
        let name = request.name();

        let mut entries = vec![Entry::Dir { path: ROOT_DIR }];
        entries.extend(layout::SUBDIRS.into_iter().map(|path| Entry::Dir { path }));

        entries.push(Entry::File {
            path: layout::README,
            content: templates::readme(name),
        });
        entries.push(Entry::File {
            path: layout::MANIFEST,
            content: templates::manifest(name)?,
        });
        entries.push(Entry::File {
            path: layout::MAIN_PY,
            content: templates::main_py(name),
        });
        entries.push(Entry::File {
            path: layout::PACKAGE_INIT,
            content: templates::package_init_py(name),
        });
        entries.push(Entry::File {
            path: layout::GITIGNORE,
            content: templates::gitignore(),
        });
        entries.push(Entry::File {
            path: layout::TEST_MAIN,
            content: templates::test_main_py(name),
        });
        entries.push(Entry::File {
            path: layout::TESTS_INIT,
            content: String::new(),
        });
        entries.push(Entry::File {
            path: layout::EXAMPLE_DOC,
            content: templates::example_md(name),
        });
        entries.push(Entry::File {
            path: layout::API_DOC,
            content: templates::api_md(name),
        });

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Apply every entry in order. The CLI iterates [`Self::entries`]
    /// itself to report progress per entry.
    pub fn apply_all(&self, root: &Path) -> Result<()> {
        for entry in &self.entries {
            apply_entry(root, entry)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn plan_for(name: &str) -> ScaffoldPlan {
        let request = ScaffoldRequest::new(name, None).unwrap();
        ScaffoldPlan::build(&request).unwrap()
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(ScaffoldRequest::new("", None).is_err());
        assert!(ScaffoldRequest::new("   ", None).is_err());
    }

    #[test]
    fn test_resolve_root_defaults_to_cwd_join_name() {
        let request = ScaffoldRequest::new("my-skill", None).unwrap();
        let root = request.resolve_root().unwrap();
        assert_eq!(root, std::env::current_dir().unwrap().join("my-skill"));
    }

    #[test]
    fn test_resolve_root_prefers_explicit_target() {
        let target = Path::new("/somewhere/else");
        let request = ScaffoldRequest::new("my-skill", Some(target)).unwrap();
        assert_eq!(request.resolve_root().unwrap(), target);
    }

    #[test]
    fn test_plan_shape() {
        let plan = plan_for("my-skill");
        let entries = plan.entries();
        assert_eq!(entries.len(), 1 + layout::SUBDIRS.len() + layout::FILES.len());

        // Root first, then subdirectories, then files in write order.
        assert!(matches!(entries[0], Entry::Dir { path: ROOT_DIR }));
        for (entry, dir) in entries[1..].iter().zip(layout::SUBDIRS) {
            match entry {
                Entry::Dir { path } => assert_eq!(*path, dir),
                Entry::File { .. } => panic!("expected directory entry"),
            }
        }
        for (entry, file) in entries[5..].iter().zip(layout::FILES) {
            match entry {
                Entry::File { path, .. } => assert_eq!(*path, file),
                Entry::Dir { .. } => panic!("expected file entry"),
            }
        }
    }

    #[test]
    fn test_plan_is_deterministic() {
        let a = plan_for("my-skill");
        let b = plan_for("my-skill");
        for (x, y) in a.entries().iter().zip(b.entries()) {
            assert_eq!(format!("{x:?}"), format!("{y:?}"));
        }
    }

    #[test]
    fn test_describe_lines() {
        let plan = plan_for("my-skill");
        let root = Path::new("/tmp/my-skill");
        let lines: Vec<String> = plan.entries().iter().map(|e| e.describe(root)).collect();

        assert_eq!(lines[0], "skill directory: /tmp/my-skill");
        assert_eq!(lines[1], "directory: src/");
        assert_eq!(lines[5], "README.md");
        assert_eq!(lines[7], "src/main.py");
    }

    #[test]
    fn test_apply_all_creates_tree() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("my-skill");
        plan_for("my-skill").apply_all(&root).unwrap();

        assert!(root.is_dir());
        for dir in layout::SUBDIRS {
            assert!(root.join(dir).is_dir());
        }
        for file in layout::FILES {
            assert!(root.join(file).is_file());
        }
    }

    #[test]
    fn test_apply_fails_under_regular_file() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("occupied");
        fs::write(&blocker, "not a directory").unwrap();

        let err = plan_for("my-skill")
            .apply_all(&blocker.join("my-skill"))
            .unwrap_err();
        assert!(err.to_string().contains("Failed to create directory"));
    }
}
