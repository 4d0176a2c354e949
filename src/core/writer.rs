//! Assembles the output artifact and writes it to disk.

use std::fs;
use std::path::Path;

use super::error::CoreError;
use super::ScanResult;

/// Default artifact name, resolved against the process working directory.
pub const OUTPUT_FILE_NAME: &str = "output.txt";

/// Substituted for the content of any file that cannot be read as text.
const READ_ERROR_SENTINEL: &str = "Error reading file.";

/// Renders and writes the artifact. The section layout is a compatibility
/// contract; do not reorder or reformat it.
///
/// This struct is stateless and provides methods as associated functions.
pub struct ArtifactWriter;

impl ArtifactWriter {
    /// Builds the full artifact text: the hierarchy header and tree rows,
    /// then (unless `include_contents` is false) one fenced block per
    /// collected file, read best-effort relative to `root`.
    pub fn render(root: &Path, result: &ScanResult, include_contents: bool) -> String {
        let mut out = String::new();
        out.push_str("Hierarchy of folders and files:\n");
        for line in &result.tree_lines {
            out.push_str(line);
            out.push('\n');
        }
        out.push('\n');

        if !include_contents {
            return out;
        }

        out.push_str("Contents of files:\n\n");
        for rel in &result.file_paths {
            out.push_str(rel);
            out.push_str(":\n```\n");
            out.push_str(&Self::read_file_content(&root.join(rel)));
            out.push_str("\n```\n\n");
        }
        out
    }

    /// Whole-file text read that never fails: any error (missing file,
    /// permissions, non-UTF-8 bytes) yields the sentinel string instead.
    fn read_file_content(path: &Path) -> String {
        match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::debug!("Substituting sentinel for {}: {}", path.display(), e);
                READ_ERROR_SENTINEL.to_string()
            }
        }
    }

    /// Writes the rendered artifact.
    pub fn write(output_path: &Path, artifact: &str) -> Result<(), CoreError> {
        fs::write(output_path, artifact)
            .map_err(|e| CoreError::Io(e, output_path.to_path_buf()))
    }
}
