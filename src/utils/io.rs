use crate::report::MethodReport;
use log::{error, info};
use std::fs;
use std::io::{self};
use std::path::Path;

pub fn export_report_to_json(report: &MethodReport, output_path: &Path) -> io::Result<()> {
    info!(
        "Exporting report with {} classes and {} methods to JSON: {:?}",
        report.class_count(),
        report.method_count(),
        output_path
    );

    let json = match serde_json::to_string_pretty(report) {
        Ok(json) => json,
        Err(e) => {
            error!("Failed to serialize report to JSON: {}", e);
            return Err(io::Error::other(e));
        }
    };

    match fs::write(output_path, &json) {
        Ok(_) => {
            info!(
                "Successfully wrote {} bytes to {:?}",
                json.len(),
                output_path
            );
            Ok(())
        }
        Err(e) => {
            error!("Failed to write JSON to file {:?}: {}", output_path, e);
            Err(e)
        }
    }
}
