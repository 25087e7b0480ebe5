//! Embedded skill templates and rendering.
//!
//! Templates are embedded at compile time from `resources/templates/skill/`
//! and rendered by substituting the skill name. Substitution is literal
//! string replacement on the `{{name}}` marker - there is no template
//! engine.

use anyhow::Result;

use crate::manifest::SkillManifest;

mod skill_templates {
    pub const README_MD: &str = include_str!("../resources/templates/skill/README.md.tmpl");
    pub const MAIN_PY: &str = include_str!("../resources/templates/skill/main.py.tmpl");
    pub const PACKAGE_INIT_PY: &str =
        include_str!("../resources/templates/skill/package_init.py.tmpl");
    pub const GITIGNORE: &str = include_str!("../resources/templates/skill/gitignore");
    pub const TEST_MAIN_PY: &str = include_str!("../resources/templates/skill/test_main.py.tmpl");
    pub const EXAMPLE_MD: &str = include_str!("../resources/templates/skill/example.md.tmpl");
    pub const API_MD: &str = include_str!("../resources/templates/skill/api.md.tmpl");
}

const NAME_MARKER: &str = "{{name}}";
const CLASS_MARKER: &str = "{{class_name}}";

/// `README.md` content.
pub fn readme(name: &str) -> String {
    skill_templates::README_MD.replace(NAME_MARKER, name)
}

/// `skill.json` content, rendered through the typed manifest.
pub fn manifest(name: &str) -> Result<String> {
    SkillManifest::new(name).to_json()
}

/// `src/main.py` content.
pub fn main_py(name: &str) -> String {
    skill_templates::MAIN_PY.replace(NAME_MARKER, name)
}

/// `src/__init__.py` content.
///
/// The template is a single line containing literal `\n` escape
/// sequences; it is written out verbatim.
pub fn package_init_py(name: &str) -> String {
    skill_templates::PACKAGE_INIT_PY.replace(NAME_MARKER, name)
}

/// `.gitignore` content. No substitution point.
pub fn gitignore() -> String {
    skill_templates::GITIGNORE.to_string()
}

/// `tests/test_main.py` content.
pub fn test_main_py(name: &str) -> String {
    skill_templates::TEST_MAIN_PY
        .replace(CLASS_MARKER, &test_class_name(name))
        .replace(NAME_MARKER, name)
}

/// `examples/example.md` content.
pub fn example_md(name: &str) -> String {
    skill_templates::EXAMPLE_MD.replace(NAME_MARKER, name)
}

/// `docs/api.md` content.
pub fn api_md(name: &str) -> String {
    skill_templates::API_MD.replace(NAME_MARKER, name)
}

/// unittest class name for the generated test stub.
///
/// Dashes become underscores, then the first letter of each alphabetic
/// run is uppercased and the rest lowercased: `my-skill` -> `My_Skill`.
pub fn test_class_name(name: &str) -> String {
    let mut class_name = String::with_capacity(name.len());
    let mut start_of_run = true;
    for ch in name.chars() {
        let ch = if ch == '-' { '_' } else { ch };
        if ch.is_alphabetic() {
            if start_of_run {
                class_name.extend(ch.to_uppercase());
            } else {
                class_name.extend(ch.to_lowercase());
            }
            start_of_run = false;
        } else {
            class_name.push(ch);
            start_of_run = true;
        }
    }
    class_name
}
