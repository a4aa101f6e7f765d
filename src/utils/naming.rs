use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, ScaffoldError};

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Path separators and JavaScript string delimiters
const FORBIDDEN_CHARS: &[char] = &['/', '\\', '\'', '"'];

/// Normalize a raw project name into a directory/package name.
/// "My App" -> "my-app"
/// "Big   Web\tApp" -> "big-web-app"
/// "demo-app" -> "demo-app"
pub fn normalize_project_name(raw: &str) -> String {
    WHITESPACE_RUN.replace_all(raw, "-").to_lowercase()
}

/// Validate and normalize a project name taken from the command line.
pub fn project_name_from_arg(raw: Option<&str>) -> Result<String> {
    match raw {
        Some(name) if name.trim().is_empty() => Err(ScaffoldError::Usage(
            "Project name must not be empty".to_string(),
        )),
        Some(name) => {
            let normalized = normalize_project_name(name);
            if normalized == "." || normalized == ".." || normalized.contains(FORBIDDEN_CHARS) {
                return Err(ScaffoldError::Usage(format!(
                    "Invalid project name '{}': must not be '.' or '..' or contain / \\ ' \"",
                    name
                )));
            }
            Ok(normalized)
        }
        None => Err(ScaffoldError::Usage("Missing project name".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_project_name() {
        assert_eq!(normalize_project_name("demo-app"), "demo-app");
        assert_eq!(normalize_project_name("My App"), "my-app");
        assert_eq!(normalize_project_name("Big   Web\tApp"), "big-web-app");
        assert_eq!(normalize_project_name("MixedCase"), "mixedcase");
        assert_eq!(normalize_project_name("a \n b"), "a-b");
    }

    #[test]
    fn test_normalize_keeps_edge_whitespace_as_hyphen() {
        assert_eq!(normalize_project_name(" Site "), "-site-");
    }

    #[test]
    fn test_normalized_names_have_no_whitespace_or_uppercase() {
        for raw in ["Hello World", "  lots   of   space ", "TAB\tSEP", "x"] {
            let name = normalize_project_name(raw);
            assert!(!name.chars().any(char::is_whitespace), "{name:?}");
            assert!(!name.chars().any(char::is_uppercase), "{name:?}");
            assert!(!name.contains("--"), "{name:?}");
        }
    }

    #[test]
    fn test_project_name_rejects_paths_and_quotes() {
        for raw in ["../x", "a/b", "a\\b", ".", "..", "it's", "say \"hi\""] {
            assert!(
                matches!(project_name_from_arg(Some(raw)), Err(ScaffoldError::Usage(_))),
                "{raw:?} should be rejected"
            );
        }
        assert_eq!(project_name_from_arg(Some("my.app")).unwrap(), "my.app");
        assert_eq!(project_name_from_arg(Some("...")).unwrap(), "...");
    }

    #[test]
    fn test_project_name_from_arg() {
        assert_eq!(project_name_from_arg(Some("My App")).unwrap(), "my-app");
        assert!(matches!(
            project_name_from_arg(None),
            Err(ScaffoldError::Usage(_))
        ));
        assert!(matches!(
            project_name_from_arg(Some("   ")),
            Err(ScaffoldError::Usage(_))
        ));
        assert!(matches!(
            project_name_from_arg(Some("")),
            Err(ScaffoldError::Usage(_))
        ));
    }
}
