use crate::archive::CLASS_SUFFIX;
use crate::report::MethodReport;
use crate::scan::disassembler::Disassembler;
use crate::scan::pattern::MethodPattern;
use log::{debug, info, trace, warn};
use std::path::{Component, Path};
use walkdir::WalkDir;

// Walk the extracted tree, disassemble every class file and collect the
// private-method signatures per class. One failing class file is skipped
// with a warning; it must not stop analysis of the rest.
pub fn scan_extracted_tree(
    scratch_root: &Path,
    disassembler: &Disassembler,
    pattern: &MethodPattern,
) -> MethodReport {
    info!("Scanning extracted tree at: {:?}", scratch_root);

    let mut report = MethodReport::new();
    let mut file_count = 0usize;

    for entry in WalkDir::new(scratch_root).into_iter().filter_map(|e| e.ok()) {
        let path = entry.path();

        if path.is_dir() {
            continue;
        }

        if !has_class_suffix(path) {
            trace!("Skipping non-class entry: {:?}", path);
            continue;
        }

        file_count += 1;
        debug!("Disassembling: {:?}", path);

        let output = match disassembler.run(path) {
            Ok(output) => output,
            Err(e) => {
                warn!("Disassembly failed for {:?}: {}", path, e);
                continue;
            }
        };

        let signatures = pattern.matches_in(&output);
        if signatures.is_empty() {
            trace!("No private methods in {:?}", path);
            continue;
        }

        let class_name = match class_name_from_path(scratch_root, path) {
            Some(name) => name,
            None => {
                warn!("Could not derive class name for {:?}", path);
                continue;
            }
        };

        debug!(
            "Found {} private methods in {}",
            signatures.len(),
            class_name
        );
        report.add_class(class_name, signatures);
    }

    info!(
        "Scanned {} class files, {} classes with private methods",
        file_count,
        report.class_count()
    );

    report
}

fn has_class_suffix(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with(CLASS_SUFFIX))
}

// pkg/sub/Foo.class relative to the scratch root becomes pkg.sub.Foo.
fn class_name_from_path(scratch_root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(scratch_root).ok()?;

    let joined = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => part.to_str(),
            _ => None,
        })
        .collect::<Vec<&str>>()
        .join(".");

    joined.strip_suffix(CLASS_SUFFIX).map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn class_name_is_dot_qualified_and_stripped() {
        let root = PathBuf::from("/tmp/scratch");
        let file = root.join("pkg").join("sub").join("Foo.class");
        assert_eq!(
            class_name_from_path(&root, &file),
            Some("pkg.sub.Foo".to_string())
        );
    }

    #[test]
    fn top_level_class_has_no_package_prefix() {
        let root = PathBuf::from("/tmp/scratch");
        let file = root.join("Main.class");
        assert_eq!(class_name_from_path(&root, &file), Some("Main".to_string()));
    }

    #[test]
    fn paths_outside_the_root_are_rejected() {
        let root = PathBuf::from("/tmp/scratch");
        let file = PathBuf::from("/elsewhere/Foo.class");
        assert_eq!(class_name_from_path(&root, &file), None);
    }

    #[test]
    fn suffix_check_requires_exact_ending() {
        assert!(has_class_suffix(Path::new("Foo.class")));
        assert!(!has_class_suffix(Path::new("Foo.classes")));
        assert!(!has_class_suffix(Path::new("Foo.java")));
    }
}
