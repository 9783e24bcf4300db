pub mod archive;
pub mod error;
pub mod report;
pub mod scan;
pub mod utils;

pub use archive::list_classes;
pub use error::{Result, ScanError};
pub use report::{ClassMethods, MethodReport};
pub use scan::Disassembler;

use log::{debug, info};
use scan::MethodPattern;
use std::path::Path;

pub fn scan_archive(archive_path: &Path) -> Result<MethodReport> {
    scan_archive_with(archive_path, &Disassembler::javap())
}

pub fn scan_archive_with(
    archive_path: &Path,
    disassembler: &Disassembler,
) -> Result<MethodReport> {
    info!(
        "Scanning archive {:?} with disassembler: {}",
        archive_path,
        disassembler.command()
    );

    if !archive_path.is_file() {
        return Err(ScanError::NotFound(archive_path.to_path_buf()));
    }

    // Dropped on every exit path, so the extracted tree never outlives the scan.
    let scratch = tempfile::tempdir()?;
    debug!("Scratch directory: {:?}", scratch.path());

    archive::extract_archive(archive_path, scratch.path())?;

    let pattern = MethodPattern::new();
    let report = scan::scan_extracted_tree(scratch.path(), disassembler, &pattern);

    info!(
        "Scan complete: {} classes with {} private methods",
        report.class_count(),
        report.method_count()
    );

    Ok(report)
}

pub fn analyze_archive(archive_path: &Path, output_path: &Path) -> Result<()> {
    info!("Starting archive analysis");
    debug!(
        "Archive path: {:?}, Output path: {:?}",
        archive_path, output_path
    );

    let report = scan_archive(archive_path)?;

    info!("Exporting report to JSON at {:?}", output_path);
    utils::io::export_report_to_json(&report, output_path)?;

    Ok(())
}

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
