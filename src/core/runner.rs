//! Drives one complete run: validate the root, run the traversals for the
//! selected mode, render and write the artifact, report through the log sink.

use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::time::Instant;

use super::error::CoreError;
use super::filter::{ClassicFilters, TargetFilters};
use super::traversal::FileCollector;
use super::tree::TreeBuilder;
use super::writer::{ArtifactWriter, OUTPUT_FILE_NAME};
use super::{LogSink, Mode, ScanResult};

/// Runs a full traversal and writes the artifact as `output.txt` in the
/// process working directory.
///
/// Synchronous; callers that must stay responsive invoke it from a worker
/// thread. Returns nothing: every outcome is observable through the log sink
/// and the written artifact.
pub fn run_traversal(
    root: &Path,
    mode: Mode,
    filter1: &str,
    filter2: &str,
    log: &dyn LogSink,
    cancel: &AtomicBool,
) {
    run_traversal_to(root, mode, filter1, filter2, Path::new(OUTPUT_FILE_NAME), log, cancel);
}

/// [`run_traversal`] with an explicit artifact path.
pub fn run_traversal_to(
    root: &Path,
    mode: Mode,
    filter1: &str,
    filter2: &str,
    output_path: &Path,
    log: &dyn LogSink,
    cancel: &AtomicBool,
) {
    let started = Instant::now();

    if let Err(e) = validate_root(root) {
        tracing::warn!("Refusing to scan: {e}");
        log.log("Error: The provided path is not a valid directory.");
        return;
    }

    tracing::info!("Starting {:?}-mode traversal of {}", mode, root.display());
    let result = scan(root, mode, filter1, filter2, cancel);
    tracing::info!(
        tree_lines = result.tree_lines.len(),
        files = result.file_paths.len(),
        "Traversal finished"
    );

    let include_contents = mode != Mode::NoContent;
    let artifact = ArtifactWriter::render(root, &result, include_contents);
    match ArtifactWriter::write(output_path, &artifact) {
        Ok(()) => log.log(&format!(
            "Output successfully written to '{}'.",
            output_path.display()
        )),
        Err(e) => {
            tracing::error!("Failed to write artifact: {e}");
            log.log("Error writing to output file.");
        }
    }

    let elapsed = started.elapsed().as_secs_f64();
    log.log(&format!("Process finished in {elapsed:.3} seconds."));
}

/// Runs the tree builder and flat traversal for `mode` without touching the
/// filesystem beyond reads. Cancellation truncates the result; everything
/// accumulated before the flag was observed is kept.
pub fn scan(
    root: &Path,
    mode: Mode,
    filter1: &str,
    filter2: &str,
    cancel: &AtomicBool,
) -> ScanResult {
    match mode {
        Mode::Classic | Mode::NoContent => {
            let filters = ClassicFilters::from_raw(filter1, filter2);
            let tree_lines = TreeBuilder::build_classic(root, &filters, cancel);
            let file_paths = if mode == Mode::NoContent {
                Vec::new()
            } else {
                let collected = FileCollector::collect_classic(root, &filters, cancel);
                FileCollector::apply_ignore_filters(collected, &filters)
            };
            ScanResult {
                tree_lines,
                file_paths,
            }
        }
        Mode::Target => {
            let filters = TargetFilters::from_raw(filter1, filter2);
            ScanResult {
                tree_lines: TreeBuilder::build_target(root, &filters, cancel),
                file_paths: FileCollector::collect_target(root, &filters, cancel),
            }
        }
    }
}

fn validate_root(root: &Path) -> Result<(), CoreError> {
    if root.is_dir() {
        Ok(())
    } else {
        Err(CoreError::NotADirectory(root.to_path_buf()))
    }
}
