//! Initialize a new skill skeleton from the embedded templates.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use skillsmith::{scaffold, ScaffoldPlan, ScaffoldRequest};

/// Execute the init flow: validate, plan, apply, report.
///
/// Prints one progress line per created entry, in creation order, then a
/// summary and next steps. Partial scaffolds are possible: a filesystem
/// failure aborts the remaining entries and nothing is rolled back.
pub fn execute(name: &str, path: Option<&Path>) -> Result<()> {
    let request = ScaffoldRequest::new(name, path)?;
    let root = request.resolve_root()?;
    let plan = ScaffoldPlan::build(&request)?;

    for entry in plan.entries() {
        scaffold::apply_entry(&root, entry)?;
        println!("✓ Created {}", entry.describe(&root));
    }

    println!(
        "\n✅ Skill '{}' initialized successfully at: {}",
        name,
        root.display()
    );

    println!("\n{}", "Next steps:".bold());
    println!("  1. {}", format!("cd {}", root.display()).cyan());
    println!("  2. Edit src/main.py to implement your skill logic");
    println!("  3. Update README.md with your skill's documentation");
    println!("  4. Add tests in tests/test_main.py");

    Ok(())
}
