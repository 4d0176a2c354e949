//! Renders the ASCII hierarchy section for both filtering modes.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use super::filter::{ClassicFilters, TargetFilters};
use super::listing::{list_entries, relative_to_root, sort_entries};

/// Builds the ASCII tree rows, depth-first with sorted children.
///
/// This struct is stateless and provides methods as associated functions.
pub struct TreeBuilder;

impl TreeBuilder {
    /// Classic mode: every entry is rendered except that recursion stops at
    /// directories named in the ignore set. The ignored directory's own row
    /// stays visible; the exclusion hides contents, not the entry.
    pub fn build_classic(
        root: &Path,
        filters: &ClassicFilters,
        cancel: &AtomicBool,
    ) -> Vec<String> {
        let mut lines = Vec::new();
        Self::classic_level(root, filters, "", &mut lines, cancel);
        lines
    }

    fn classic_level(
        dir: &Path,
        filters: &ClassicFilters,
        prefix: &str,
        lines: &mut Vec<String>,
        cancel: &AtomicBool,
    ) {
        if cancel.load(Ordering::Relaxed) {
            return;
        }
        let mut entries = list_entries(dir);
        sort_entries(&mut entries);

        let count = entries.len();
        for (i, entry) in entries.iter().enumerate() {
            if cancel.load(Ordering::Relaxed) {
                break;
            }
            let is_last = i + 1 == count;
            let connector = if is_last { "└── " } else { "├── " };
            lines.push(format!("{prefix}{connector}{}", entry.name));

            if entry.is_directory {
                if filters.ignored_items.contains(&entry.name) {
                    continue;
                }
                let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
                Self::classic_level(&dir.join(&entry.name), filters, &child_prefix, lines, cancel);
            }
        }
    }

    /// Target mode: a directory is rendered iff its own name is a target item
    /// or anything beneath it matched (bottom-up propagation through a
    /// per-directory buffer); a file is rendered iff it passes the
    /// name/extension rules of [`TargetFilters::file_matches`].
    pub fn build_target(root: &Path, filters: &TargetFilters, cancel: &AtomicBool) -> Vec<String> {
        let mut lines = Vec::new();
        Self::target_level(root, root, filters, "", &mut lines, cancel);
        lines
    }

    /// Returns true iff at least one descendant at any depth matched, so
    /// ancestors can decide inclusion without re-scanning. A cancellation
    /// observed mid-level reports "no match" upward; an in-progress
    /// cancellation can therefore drop an otherwise-matching ancestor, which
    /// is the documented cooperative-cancellation trade-off.
    fn target_level(
        dir: &Path,
        root: &Path,
        filters: &TargetFilters,
        prefix: &str,
        lines: &mut Vec<String>,
        cancel: &AtomicBool,
    ) -> bool {
        if cancel.load(Ordering::Relaxed) {
            return false;
        }
        let mut entries = list_entries(dir);
        sort_entries(&mut entries);

        let mut has_match = false;
        let count = entries.len();
        for (i, entry) in entries.iter().enumerate() {
            if cancel.load(Ordering::Relaxed) {
                return false;
            }
            let is_last = i + 1 == count;
            let connector = if is_last { "└── " } else { "├── " };
            let line = format!("{prefix}{connector}{}", entry.name);
            let full = dir.join(&entry.name);

            if entry.is_directory {
                let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
                let mut sub_lines = Vec::new();
                let child_match = Self::target_level(
                    &full,
                    root,
                    filters,
                    &child_prefix,
                    &mut sub_lines,
                    cancel,
                );
                if filters.target_items.contains(&entry.name) || child_match {
                    lines.push(line);
                    lines.append(&mut sub_lines);
                    has_match = true;
                }
            } else {
                let rel = relative_to_root(&full, root);
                if filters.file_matches(&entry.name, &rel) {
                    lines.push(line);
                    has_match = true;
                }
            }
        }
        has_match
    }
}
