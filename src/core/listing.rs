//! Directory enumeration, the deterministic child ordering, and relative
//! path computation shared by every recursive walk.

use std::cmp::Ordering;
use std::fs;
use std::path::Path;

use super::DirEntry;

/// Enumerates the immediate children of `dir` in discovery order.
///
/// A directory that cannot be opened or iterated (permissions, vanished
/// mid-walk) yields an empty list; callers treat "no entries" and
/// "unreadable" identically and keep going. Entries whose type cannot be
/// determined are skipped. Symlinks are not followed, so a symlink to a
/// directory is listed as a file.
pub fn list_entries(dir: &Path) -> Vec<DirEntry> {
    let read_dir = match fs::read_dir(dir) {
        Ok(read_dir) => read_dir,
        Err(e) => {
            tracing::debug!("Skipping unreadable directory {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut entries = Vec::new();
    for entry in read_dir.flatten() {
        let file_type = match entry.file_type() {
            Ok(file_type) => file_type,
            Err(_) => continue,
        };
        entries.push(DirEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            is_directory: file_type.is_dir(),
        });
    }
    entries
}

/// Orders a directory's children: directories first, then files, each group
/// ascending by name in byte order (not locale-aware).
///
/// Applied once per directory before rendering or recursing, so the tree
/// builders and the flat traversals all see entries in the same order and two
/// runs over an unchanged filesystem produce identical output.
pub fn sort_entries(entries: &mut [DirEntry]) {
    entries.sort_by(|a, b| match (a.is_directory, b.is_directory) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a.name.cmp(&b.name),
    });
}

/// The path of `full` relative to `root`, as a string using the platform
/// separator. Never starts with a separator. Falls back to the full path
/// when `full` does not live under `root`.
pub fn relative_to_root(full: &Path, root: &Path) -> String {
    match full.strip_prefix(root) {
        Ok(rel) => rel.display().to_string(),
        Err(_) => full.display().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn entry(name: &str, is_directory: bool) -> DirEntry {
        DirEntry {
            name: name.to_string(),
            is_directory,
        }
    }

    #[test]
    fn sorts_directories_before_files_then_byte_order() {
        let mut entries = vec![
            entry("zeta.txt", false),
            entry("alpha", true),
            entry("Beta.txt", false),
            entry("misc", true),
        ];
        sort_entries(&mut entries);
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "misc", "Beta.txt", "zeta.txt"]);
    }

    #[test]
    fn byte_order_puts_uppercase_before_lowercase() {
        let mut entries = vec![entry("abc", false), entry("ABC", false)];
        sort_entries(&mut entries);
        assert_eq!(entries[0].name, "ABC");
    }

    #[test]
    fn lists_children_with_classification() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();
        fs::write(temp.path().join("file.txt"), "x").unwrap();

        let mut entries = list_entries(temp.path());
        sort_entries(&mut entries);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "sub");
        assert!(entries[0].is_directory);
        assert_eq!(entries[1].name, "file.txt");
        assert!(!entries[1].is_directory);
    }

    #[test]
    fn missing_directory_yields_empty_list() {
        crate::utils::test_helpers::setup_test_logging();
        let temp = TempDir::new().unwrap();
        let gone = temp.path().join("does-not-exist");
        assert!(list_entries(&gone).is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_directory_yields_empty_list() {
        use crate::utils::test_helpers::running_as_root;
        use std::os::unix::fs::PermissionsExt;

        crate::utils::test_helpers::setup_test_logging();
        if running_as_root() {
            // Root ignores directory permissions; nothing to observe.
            return;
        }

        let temp = TempDir::new().unwrap();
        let locked = temp.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::write(locked.join("hidden.txt"), "x").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        assert!(list_entries(&locked).is_empty());

        // Restore so the TempDir can clean up.
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[test]
    fn relative_path_never_starts_with_a_separator() {
        let temp = TempDir::new().unwrap();
        let full = temp.path().join("src").join("main.rs");
        let rel = relative_to_root(&full, temp.path());
        assert!(!rel.starts_with(std::path::MAIN_SEPARATOR));
        let sep = std::path::MAIN_SEPARATOR;
        assert_eq!(rel, format!("src{sep}main.rs"));
    }

    #[test]
    fn path_outside_root_falls_back_to_full_path() {
        let root = Path::new("/tmp/root");
        let outside = Path::new("/somewhere/else.txt");
        assert_eq!(relative_to_root(outside, root), "/somewhere/else.txt");
    }
}
