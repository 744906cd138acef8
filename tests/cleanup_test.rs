// Integration tests for the report cleaner entry point, which works off the
// process working directory. Changing the working directory is process-global
// state, so these run serially.

use std::fs;
use std::path::Path;

use serial_test::serial;
use tempfile::TempDir;

/// Run a closure with the working directory switched to a temp dir,
/// restoring the previous one afterwards.
fn in_temp_cwd<T>(f: impl FnOnce(&Path) -> T) -> T {
    let tmp = TempDir::new().unwrap();
    let previous = std::env::current_dir().unwrap();
    std::env::set_current_dir(tmp.path()).unwrap();
    let result = f(tmp.path());
    std::env::set_current_dir(previous).unwrap();
    result
}

#[test]
#[serial]
fn cleanup_removes_artifacts_under_working_directory() {
    in_temp_cwd(|_root| {
        fs::create_dir_all("test-output/a").unwrap();
        fs::write("test-output/a/b.txt", "old report").unwrap();
        fs::write("test-output.zip", "old archive").unwrap();

        let report = pagekit::clean_report_artifacts().unwrap();

        assert!(!Path::new("test-output").exists());
        assert!(!Path::new("test-output.zip").exists());
        assert_eq!(report.removed.len(), 2);
        assert!(report.is_clean(), "warnings: {:?}", report.warnings);
    });
}

#[test]
#[serial]
fn cleanup_twice_in_a_row_never_errors() {
    in_temp_cwd(|_root| {
        fs::create_dir_all("test-output").unwrap();
        fs::write("test-output/report.html", "<html>").unwrap();

        let first = pagekit::clean_report_artifacts().unwrap();
        assert!(first.is_clean());

        let second = pagekit::clean_report_artifacts().unwrap();
        assert!(second.is_clean());
        assert!(second.removed.is_empty());
        assert_eq!(second.skipped.len(), 2);
    });
}
