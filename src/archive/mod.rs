use crate::error::{Result, ScanError};
use log::{debug, info};
use std::fs::File;
use std::path::Path;
use zip::ZipArchive;

pub const CLASS_SUFFIX: &str = ".class";

// Fully extract the archive into dest. Anything that stops the container
// from being read as a zip is reported as CorruptArchive.
pub fn extract_archive(archive_path: &Path, dest: &Path) -> Result<()> {
    info!("Extracting {:?} into {:?}", archive_path, dest);

    let file = File::open(archive_path)?;
    let mut archive = ZipArchive::new(file).map_err(|e| ScanError::CorruptArchive {
        path: archive_path.to_path_buf(),
        reason: e.to_string(),
    })?;

    archive.extract(dest).map_err(|e| ScanError::CorruptArchive {
        path: archive_path.to_path_buf(),
        reason: e.to_string(),
    })?;

    debug!("Extracted {} entries from {:?}", archive.len(), archive_path);
    Ok(())
}

// List the dot-qualified names of all class entries without extracting,
// in central-directory order.
pub fn list_classes(archive_path: &Path) -> Result<Vec<String>> {
    if !archive_path.is_file() {
        return Err(ScanError::NotFound(archive_path.to_path_buf()));
    }

    let file = File::open(archive_path)?;
    let mut archive = ZipArchive::new(file).map_err(|e| ScanError::CorruptArchive {
        path: archive_path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mut class_names = Vec::new();
    for i in 0..archive.len() {
        let entry = archive.by_index(i).map_err(|e| ScanError::CorruptArchive {
            path: archive_path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let name = entry.name();
        if let Some(stripped) = name.strip_suffix(CLASS_SUFFIX) {
            class_names.push(stripped.replace('/', "."));
        }
    }

    debug!(
        "Found {} class entries in {:?}",
        class_names.len(),
        archive_path
    );
    Ok(class_names)
}
