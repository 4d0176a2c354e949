//! Filter-string parsing and the name/path/extension match rules.
//!
//! Filter strings are `|`-delimited token lists typed by the user. Tokens are
//! matched verbatim (case-sensitive, no globbing) against entry names,
//! relative paths, and extensions.

use std::collections::HashSet;

/// Splits a raw filter string on `|` into a normalized token set.
///
/// Leading/trailing spaces and tabs are trimmed from each token, empty tokens
/// are dropped, and duplicates collapse. An empty or whitespace-only input
/// yields an empty set.
pub fn parse_filter_set(raw: &str) -> HashSet<String> {
    raw.split('|')
        .map(|token| token.trim_matches(|c| c == ' ' || c == '\t'))
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}

/// The extension of a bare file name: the substring from the last `.`
/// (inclusive), or `""` when the name contains no dot.
///
/// `archive.tar.gz` yields `.gz`; `Makefile` yields `""`; a dot-file like
/// `.gitignore` yields `.gitignore`.
pub fn extension_of(name: &str) -> &str {
    name.rfind('.').map_or("", |pos| &name[pos..])
}

/// The bare file name of a relative path (the part after the last separator).
pub fn file_name_of(rel_path: &str) -> &str {
    rel_path
        .rsplit(std::path::MAIN_SEPARATOR)
        .next()
        .unwrap_or(rel_path)
}

/// Classic-mode exclusion sets.
///
/// One `ignored_items` set serves as both the folder-name set and the
/// file-name set; the tool has a single input field for both.
#[derive(Debug, Clone)]
pub struct ClassicFilters {
    pub ignored_items: HashSet<String>,
    pub ignored_extensions: HashSet<String>,
}

impl ClassicFilters {
    pub fn from_raw(filter1: &str, filter2: &str) -> Self {
        Self {
            ignored_items: parse_filter_set(filter1),
            ignored_extensions: parse_filter_set(filter2),
        }
    }

    /// The post-traversal exclusion check applied over the complete flat
    /// list: a file is dropped when its bare name or its extension is ignored.
    pub fn file_excluded(&self, rel_path: &str) -> bool {
        let name = file_name_of(rel_path);
        self.ignored_items.contains(name) || self.ignored_extensions.contains(extension_of(name))
    }
}

/// Target-mode inclusion sets.
///
/// As with [`ClassicFilters`], `target_items` holds folder names and file
/// names (and relative file paths) alike.
#[derive(Debug, Clone)]
pub struct TargetFilters {
    pub target_items: HashSet<String>,
    pub target_extensions: HashSet<String>,
}

impl TargetFilters {
    pub fn from_raw(filter1: &str, filter2: &str) -> Self {
        Self {
            target_items: parse_filter_set(filter1),
            target_extensions: parse_filter_set(filter2),
        }
    }

    /// Whether a file passes the name and extension rules.
    ///
    /// An empty set imposes no restriction for its dimension; non-empty sets
    /// must both be satisfied. The name rule accepts either the bare name or
    /// the full relative path.
    pub fn file_matches(&self, name: &str, rel_path: &str) -> bool {
        if !self.target_items.is_empty()
            && !self.target_items.contains(name)
            && !self.target_items.contains(rel_path)
        {
            return false;
        }
        if !self.target_extensions.is_empty()
            && !self.target_extensions.contains(extension_of(name))
        {
            return false;
        }
        true
    }

    /// The flat-walk folder rule: at least one separator-delimited component
    /// of the relative path (the file name included) is a target item.
    ///
    /// Deliberately different from the tree builder's ancestor-name
    /// propagation; the two walks disagree on edge cases and both behaviors
    /// are part of the output contract.
    pub fn in_target_component(&self, rel_path: &str) -> bool {
        if self.target_items.is_empty() {
            return true;
        }
        rel_path
            .split(std::path::MAIN_SEPARATOR)
            .any(|part| self.target_items.contains(part))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parse_trims_spaces_and_tabs() {
        let set = parse_filter_set(" .git | node_modules\t|\ttarget ");
        assert_eq!(set.len(), 3);
        assert!(set.contains(".git"));
        assert!(set.contains("node_modules"));
        assert!(set.contains("target"));
    }

    #[test]
    fn parse_drops_empty_tokens_and_duplicates() {
        let set = parse_filter_set("a||a| |\t|b");
        assert_eq!(set.len(), 2);
        assert!(set.contains("a"));
        assert!(set.contains("b"));
    }

    #[test]
    fn parse_empty_input_yields_empty_set() {
        assert!(parse_filter_set("").is_empty());
        assert!(parse_filter_set("   \t  ").is_empty());
        assert!(parse_filter_set("|||").is_empty());
    }

    #[test]
    fn parse_is_case_sensitive() {
        let set = parse_filter_set("README|readme");
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn extension_is_taken_from_the_last_dot() {
        assert_eq!(extension_of("archive.tar.gz"), ".gz");
        assert_eq!(extension_of("main.rs"), ".rs");
        assert_eq!(extension_of("Makefile"), "");
        assert_eq!(extension_of(".gitignore"), ".gitignore");
    }

    #[test]
    fn file_name_is_the_last_path_component() {
        let sep = std::path::MAIN_SEPARATOR;
        let rel = format!("src{sep}module{sep}main.rs");
        assert_eq!(file_name_of(&rel), "main.rs");
        assert_eq!(file_name_of("main.rs"), "main.rs");
    }

    #[test]
    fn classic_excludes_by_name_or_extension() {
        let filters = ClassicFilters::from_raw("secret.txt", ".log");
        assert!(filters.file_excluded("secret.txt"));
        assert!(filters.file_excluded("build.log"));
        assert!(!filters.file_excluded("main.rs"));
    }

    #[test]
    fn classic_empty_sets_exclude_nothing() {
        let filters = ClassicFilters::from_raw("", "");
        assert!(!filters.file_excluded("anything.at.all"));
        assert!(!filters.file_excluded("Makefile"));
    }

    #[test]
    fn target_empty_sets_impose_no_restriction() {
        let filters = TargetFilters::from_raw("", "");
        assert!(filters.file_matches("whatever.bin", "whatever.bin"));
        assert!(filters.in_target_component("a/b/c.txt"));
    }

    #[test]
    fn target_name_and_extension_must_both_match_when_both_are_set() {
        let filters = TargetFilters::from_raw("main.txt", ".md");
        // Name matches but extension does not.
        assert!(!filters.file_matches("main.txt", "src/main.txt"));
        // Extension matches but name does not.
        assert!(!filters.file_matches("readme.md", "readme.md"));
    }

    #[test]
    fn target_accepts_bare_name_or_relative_path() {
        let sep = std::path::MAIN_SEPARATOR;
        let rel = format!("docs{sep}guide.md");
        let by_name = TargetFilters::from_raw("guide.md", "");
        let by_path = TargetFilters::from_raw(&rel, "");
        assert!(by_name.file_matches("guide.md", &rel));
        assert!(by_path.file_matches("guide.md", &rel));
    }

    #[test]
    fn component_check_matches_anywhere_in_the_path() {
        let sep = std::path::MAIN_SEPARATOR;
        let filters = TargetFilters::from_raw("B", "");
        assert!(filters.in_target_component(&format!("A{sep}B{sep}C{sep}f.txt")));
        assert!(!filters.in_target_component(&format!("A{sep}C{sep}f.txt")));
        // The file name itself counts as a component.
        assert!(filters.in_target_component("B"));
    }

    proptest! {
        /// Parsing is order-insensitive and token order never matters.
        #[test]
        fn parse_matches_manual_set(tokens in proptest::collection::vec("[A-Za-z0-9._-]{0,8}", 0..12)) {
            let raw = tokens.join("|");
            let parsed = parse_filter_set(&raw);
            let expected: HashSet<String> =
                tokens.iter().filter(|t| !t.is_empty()).cloned().collect();
            prop_assert_eq!(parsed, expected);
        }
    }
}
