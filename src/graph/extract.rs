use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ProjectInfo;
use crate::error::{PackError, Result};
use crate::paths;

/// One `#include` directive per line, either bracket style. The first group
/// captures the target, the second the closing bracket that tells the styles
/// apart.
pub(crate) static INCLUDE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?m)^#include *[<"](.*)([>"])$"#).unwrap());

/// Split the include directives of a source file into project files that must
/// be packed and language or library includes that are left as declarations.
///
/// Quoted includes are resolved against the including file's directory.
/// Angle-bracket includes that mention the project namespace are resolved
/// against the project working directory; every other angle-bracket include
/// is an external name. Both lists keep the order the directives appear in.
pub fn extract_includes(
    file: &Path,
    project: &ProjectInfo,
) -> Result<(Vec<PathBuf>, Vec<String>)> {
    let source = fs::read_to_string(file).map_err(|source| PackError::FileAccess {
        path: file.to_path_buf(),
        source,
    })?;

    let mut internal = Vec::new();
    let mut external = Vec::new();

    for cap in INCLUDE_PATTERN.captures_iter(&source) {
        let target = &cap[1];

        if &cap[2] == "\"" {
            let current_dir = file.parent().unwrap_or_else(|| Path::new(""));
            internal.push(paths::resolve(current_dir, Path::new(target)));
        } else if target.contains(&project.namespace) {
            internal.push(paths::resolve(&project.workingdir, Path::new(target)));
        } else {
            external.push(target.to_string());
        }
    }

    Ok((internal, external))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn project_at(root: &Path) -> ProjectInfo {
        ProjectInfo {
            workingdir: root.to_path_buf(),
            namespace: "proj".to_string(),
            entrypoint: root.join("proj.h"),
        }
    }

    #[test]
    fn test_quoted_include_resolves_relative_to_including_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a.h");
        fs::write(&file, "#include \"detail/b.h\"\n").unwrap();

        let (internal, external) = extract_includes(&file, &project_at(dir.path())).unwrap();
        assert_eq!(internal, vec![dir.path().join("detail/b.h")]);
        assert!(external.is_empty());
    }

    #[test]
    fn test_namespace_angle_include_resolves_against_workingdir() {
        let dir = TempDir::new().unwrap();
        let subdir = dir.path().join("detail");
        fs::create_dir(&subdir).unwrap();
        let file = subdir.join("a.h");
        fs::write(&file, "#include <proj/b.h>\n").unwrap();

        let (internal, external) = extract_includes(&file, &project_at(dir.path())).unwrap();
        assert_eq!(internal, vec![dir.path().join("proj/b.h")]);
        assert!(external.is_empty());
    }

    #[test]
    fn test_plain_angle_include_is_external() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a.h");
        fs::write(&file, "#include <vector>\n#include <cstdint>\n").unwrap();

        let (internal, external) = extract_includes(&file, &project_at(dir.path())).unwrap();
        assert!(internal.is_empty());
        assert_eq!(external, vec!["vector".to_string(), "cstdint".to_string()]);
    }

    #[test]
    fn test_directive_order_is_preserved() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a.h");
        fs::write(
            &file,
            "#include <vector>\n#include \"b.h\"\n#include <proj/c.h>\n#include <string>\n",
        )
        .unwrap();

        let (internal, external) = extract_includes(&file, &project_at(dir.path())).unwrap();
        assert_eq!(
            internal,
            vec![dir.path().join("b.h"), dir.path().join("proj/c.h")]
        );
        assert_eq!(external, vec!["vector".to_string(), "string".to_string()]);
    }

    #[test]
    fn test_non_directive_text_is_ignored() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a.h");
        fs::write(
            &file,
            "// #include <commented>\nnamespace proj {}\n    #include <indented>\n",
        )
        .unwrap();

        let (internal, external) = extract_includes(&file, &project_at(dir.path())).unwrap();
        assert!(internal.is_empty());
        assert!(external.is_empty());
    }

    #[test]
    fn test_unreadable_file_is_a_file_access_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.h");

        let err = extract_includes(&missing, &project_at(dir.path())).unwrap_err();
        assert!(matches!(err, PackError::FileAccess { .. }));
    }
}
