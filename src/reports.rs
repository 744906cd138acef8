use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Report directory produced by a test run, relative to the working directory
pub const REPORT_DIR: &str = "test-output";

/// Zipped report artifact produced alongside [`REPORT_DIR`]
pub const REPORT_ARCHIVE: &str = "test-output.zip";

/// Outcome of a cleanup pass.
///
/// Cleanup is best-effort: individual delete failures end up in `warnings`
/// rather than aborting the pass.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CleanupReport {
    /// Top-level artifacts that were deleted
    pub removed: Vec<PathBuf>,
    /// Top-level artifacts that did not exist (a no-op, not a failure)
    pub skipped: Vec<PathBuf>,
    /// Per-entry delete failures, formatted as "path: error"
    pub warnings: Vec<String>,
}

impl CleanupReport {
    /// True when no delete failed
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Delete stale report artifacts (`test-output/` and `test-output.zip`)
/// under the process working directory.
///
/// Safe to run whether or not prior artifacts exist, and idempotent. Errors
/// only if the working directory itself cannot be determined.
pub fn clean_report_artifacts() -> Result<CleanupReport> {
    let root = std::env::current_dir().context("Could not determine the working directory")?;
    Ok(clean_at(&root))
}

/// Delete stale report artifacts under an explicit root directory.
pub fn clean_at(root: &Path) -> CleanupReport {
    let mut report = CleanupReport::default();

    for name in [REPORT_DIR, REPORT_ARCHIVE] {
        let path = root.join(name);
        if !path.exists() {
            info!("{} not present, nothing to clean", path.display());
            report.skipped.push(path);
            continue;
        }

        let outcome = if path.is_dir() {
            remove_dir_tree(&path, &mut report)
        } else {
            std::fs::remove_file(&path)
        };

        match outcome {
            Ok(()) => {
                info!("Removed stale report artifact {}", path.display());
                report.removed.push(path);
            }
            Err(e) => {
                warn!("Could not remove {}: {}", path.display(), e);
                report.warnings.push(format!("{}: {}", path.display(), e));
            }
        }
    }

    report
}

/// Recursively delete a directory's contents, then the directory itself.
/// Failures on individual entries are recorded and skipped so one stubborn
/// file does not stop the rest of the walk.
fn remove_dir_tree(dir: &Path, report: &mut CleanupReport) -> io::Result<()> {
    match std::fs::read_dir(dir) {
        Ok(entries) => {
            for entry in entries.flatten() {
                let child = entry.path();
                if child.is_dir() {
                    if let Err(e) = remove_dir_tree(&child, report) {
                        warn!("Could not remove {}: {}", child.display(), e);
                        report.warnings.push(format!("{}: {}", child.display(), e));
                    }
                } else {
                    debug!("Removing {}", child.display());
                    if let Err(e) = std::fs::remove_file(&child) {
                        warn!("Could not remove {}: {}", child.display(), e);
                        report.warnings.push(format!("{}: {}", child.display(), e));
                    }
                }
            }
        }
        Err(e) => {
            report.warnings.push(format!("{}: {}", dir.display(), e));
        }
    }

    // Fails if some child survived above; the caller records it
    std::fs::remove_dir(dir)
}

#[cfg(test)]
#[path = "reports_test.rs"]
mod reports_test;
