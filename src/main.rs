use jarscan::{list_classes, scan_archive, version};
use log::{error, info, warn};
use std::path::Path;
use std::time::Instant;

const DEFAULT_ARCHIVE: &str = "chess-0.0.2-SNAPSHOT.jar";

fn main() -> std::io::Result<()> {
    // Initialize logger
    if std::env::var_os("RUST_LOG").is_none() {
        unsafe {
            std::env::set_var("RUST_LOG", "info");
        }
    }
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    let mut positional: Option<String> = None;
    let mut jar_flag: Option<String> = None;
    let mut json_output: Option<String> = None;
    let mut list_only = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--jar" => {
                i += 1;
                if i >= args.len() {
                    error!("--jar requires a path argument");
                    print_usage(&args[0]);
                    return Ok(());
                }
                jar_flag = Some(args[i].clone());
            }
            "--json" => {
                i += 1;
                if i >= args.len() {
                    error!("--json requires a path argument");
                    print_usage(&args[0]);
                    return Ok(());
                }
                json_output = Some(args[i].clone());
            }
            "--classes" => list_only = true,
            "--help" | "-h" => {
                print_usage(&args[0]);
                return Ok(());
            }
            flag if flag.starts_with("--") => {
                warn!("Ignoring unknown flag: {}", flag);
            }
            path => positional = Some(path.to_string()),
        }
        i += 1;
    }

    // The flag wins over the positional argument; fall back to the default.
    let archive = jar_flag
        .or(positional)
        .unwrap_or_else(|| DEFAULT_ARCHIVE.to_string());
    let archive_path = Path::new(&archive);

    info!("jarscan v{}", version());
    info!("Archive: {:?}", archive_path);

    let start_time = Instant::now();

    if list_only {
        match list_classes(archive_path) {
            Ok(classes) => {
                for class_name in &classes {
                    println!("{}", class_name);
                }
                info!("Listed {} classes in {:.2?}", classes.len(), start_time.elapsed());
            }
            Err(e) => {
                error!("Failed to list classes: {}", e);
                eprintln!("{}", e);
            }
        }
        return Ok(());
    }

    match scan_archive(archive_path) {
        Ok(report) => {
            if report.is_empty() {
                println!("No private methods found.");
            } else {
                for class in report.classes() {
                    println!("\nClass: {}", class.class_name);
                    for signature in &class.signatures {
                        println!("  {}", signature);
                    }
                }
            }

            if let Some(output) = &json_output {
                jarscan::utils::io::export_report_to_json(&report, Path::new(output))?;
            }

            let elapsed = start_time.elapsed();
            info!(
                "Scan completed in {:.2?}: {} classes, {} private methods",
                elapsed,
                report.class_count(),
                report.method_count()
            );
        }
        Err(e) => {
            error!("Scan failed: {}", e);
            eprintln!("{}", e);
        }
    }

    Ok(())
}

fn print_usage(program: &str) {
    eprintln!(
        "Usage: {} [archive_path] [--jar PATH] [--json PATH] [--classes]",
        program
    );
    eprintln!("Version: {}", version());
}
