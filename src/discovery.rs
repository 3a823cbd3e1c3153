//! Finding code list files on disk.
//!
//! Files given directly are used as-is. Directories are walked recursively
//! for `*.shapez` files, in sorted order.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, ShapezError};

/// File extension of code list files.
pub const CODE_LIST_EXTENSION: &str = "shapez";

/// Check if a path looks like a code list file.
pub fn is_code_list(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(CODE_LIST_EXTENSION)
}

/// Expand files and directories into the list of code list files to read.
pub fn scan_sources(sources: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for source in sources {
        if source.is_dir() {
            files.extend(scan_directory(source)?);
        } else if source.is_file() {
            files.push(source.clone());
        } else {
            return Err(ShapezError::Io {
                path: source.clone(),
                message: "No such file or directory".to_string(),
            });
        }
    }

    Ok(files)
}

/// Recursively find code list files under `root`.
pub fn scan_directory(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
        let entry = entry.map_err(|e| ShapezError::Io {
            path: root.to_path_buf(),
            message: format!("Failed to scan directory: {}", e),
        })?;

        if entry.file_type().is_file() && is_code_list(entry.path()) {
            files.push(entry.into_path());
        }
    }

    log::debug!("found {} code list(s) under {}", files.len(), root.display());
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_is_code_list() {
        assert!(is_code_list(Path::new("shapes/starter.shapez")));
        assert!(!is_code_list(Path::new("shapes/notes.txt")));
        assert!(!is_code_list(Path::new("shapez")));
    }

    #[test]
    fn test_scan_directory_recursive_and_sorted() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("b.shapez"), "C(u)").unwrap();
        fs::write(dir.path().join("a.shapez"), "C(u)").unwrap();
        fs::write(dir.path().join("readme.md"), "").unwrap();
        fs::write(dir.path().join("nested").join("c.shapez"), "C(u)").unwrap();

        let files = scan_directory(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();

        assert_eq!(names, vec!["a.shapez", "b.shapez", "c.shapez"]);
    }

    #[test]
    fn test_scan_sources_mixed() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("single.txt");
        fs::write(&file, "C(u)").unwrap();

        let files = scan_sources(&[file.clone()]).unwrap();
        assert_eq!(files, vec![file]);

        let missing = dir.path().join("missing");
        assert!(scan_sources(&[missing]).is_err());
    }
}
