//! Collects the flat list of relative file paths whose contents are emitted.
//!
//! These walks run separately from the tree builders and from each other, and
//! their filtering rules are not the tree builders' rules: the classic walk
//! defers name/extension exclusion to a post-pass, and the target walk checks
//! path components instead of propagating matches. Both asymmetries are part
//! of the output contract.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use super::filter::{ClassicFilters, TargetFilters};
use super::listing::{list_entries, relative_to_root, sort_entries};

/// Gathers relative file paths, depth-first with sorted children.
///
/// This struct is stateless and provides methods as associated functions.
pub struct FileCollector;

impl FileCollector {
    /// Classic mode: every file outside ignored directories, in traversal
    /// order. Directories named in the ignore set are not descended at all.
    /// Name/extension exclusion is deliberately NOT applied here; run
    /// [`FileCollector::apply_ignore_filters`] over the complete list.
    pub fn collect_classic(
        root: &Path,
        filters: &ClassicFilters,
        cancel: &AtomicBool,
    ) -> Vec<String> {
        let mut files = Vec::new();
        Self::classic_level(root, root, filters, &mut files, cancel);
        files
    }

    fn classic_level(
        dir: &Path,
        root: &Path,
        filters: &ClassicFilters,
        files: &mut Vec<String>,
        cancel: &AtomicBool,
    ) {
        if cancel.load(Ordering::Relaxed) {
            return;
        }
        let mut entries = list_entries(dir);
        sort_entries(&mut entries);

        for entry in &entries {
            if cancel.load(Ordering::Relaxed) {
                break;
            }
            let full = dir.join(&entry.name);
            if entry.is_directory {
                if filters.ignored_items.contains(&entry.name) {
                    continue;
                }
                Self::classic_level(&full, root, filters, files, cancel);
            } else {
                files.push(relative_to_root(&full, root));
            }
        }
    }

    /// The classic-mode exclusion pass over the complete flat list: drops
    /// files whose bare name is an ignored item or whose extension is ignored.
    pub fn apply_ignore_filters(files: Vec<String>, filters: &ClassicFilters) -> Vec<String> {
        files
            .into_iter()
            .filter(|rel| !filters.file_excluded(rel))
            .collect()
    }

    /// Target mode: every directory is descended (the item set does not prune
    /// recursion here); a file is kept when it passes the name/extension
    /// rules and, if the item set is non-empty, some component of its
    /// relative path is a target item.
    pub fn collect_target(
        root: &Path,
        filters: &TargetFilters,
        cancel: &AtomicBool,
    ) -> Vec<String> {
        let mut files = Vec::new();
        Self::target_level(root, root, filters, &mut files, cancel);
        files
    }

    fn target_level(
        dir: &Path,
        root: &Path,
        filters: &TargetFilters,
        files: &mut Vec<String>,
        cancel: &AtomicBool,
    ) {
        if cancel.load(Ordering::Relaxed) {
            return;
        }
        let mut entries = list_entries(dir);
        sort_entries(&mut entries);

        for entry in &entries {
            if cancel.load(Ordering::Relaxed) {
                break;
            }
            let full = dir.join(&entry.name);
            if entry.is_directory {
                Self::target_level(&full, root, filters, files, cancel);
            } else {
                let rel = relative_to_root(&full, root);
                if filters.file_matches(&entry.name, &rel) && filters.in_target_component(&rel) {
                    files.push(rel);
                }
            }
        }
    }
}
