//! Corpus directories
//!
//! A corpus is a flat directory where every regular file is one document.

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{ClassifierError, Result};

/// List the documents of a corpus directory, in display order.
///
/// A missing path or a path that is not a directory is a configuration
/// error. Entries that are not regular files are skipped.
pub fn list_documents(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(ClassifierError::Config(format!(
            "corpus directory missing: {}",
            dir.display()
        )));
    }

    let mut documents = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| ClassifierError::io(dir, e))? {
        let entry = entry.map_err(|e| ClassifierError::io(dir, e))?;
        let path = entry.path();
        if path.is_file() {
            documents.push(path);
        } else {
            warn!("Skipping non-file entry {}", path.display());
        }
    }

    documents.sort_by(|a, b| display_order(a, b));
    debug!("Found {} documents in {}", documents.len(), dir.display());
    Ok(documents)
}

/// Ordering used when reporting results.
///
/// Files whose name starts with a number (`12.txt`) come first, ordered
/// numerically; everything else follows in lexicographic order.
pub fn display_order(a: &Path, b: &Path) -> Ordering {
    let name_a = file_name(a);
    let name_b = file_name(b);

    match (numeric_prefix(&name_a), numeric_prefix(&name_b)) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| name_a.cmp(&name_b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => name_a.cmp(&name_b),
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Integer before the first `.` of a file name
fn numeric_prefix(name: &str) -> Option<i64> {
    name.split('.').next()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn names(paths: &[PathBuf]) -> Vec<String> {
        paths.iter().map(|p| file_name(p)).collect()
    }

    #[test]
    fn test_numeric_prefix() {
        assert_eq!(numeric_prefix("12.txt"), Some(12));
        assert_eq!(numeric_prefix("7"), Some(7));
        assert_eq!(numeric_prefix("notes.txt"), None);
        assert_eq!(numeric_prefix(".hidden"), None);
    }

    #[test]
    fn test_display_order_numeric_then_lexicographic() {
        let mut paths: Vec<PathBuf> = ["10.txt", "b.txt", "2.txt", "a.txt", "1.txt"]
            .iter()
            .map(PathBuf::from)
            .collect();
        paths.sort_by(|a, b| display_order(a, b));

        assert_eq!(names(&paths), vec!["1.txt", "2.txt", "10.txt", "a.txt", "b.txt"]);
    }

    #[test]
    fn test_list_documents_skips_directories() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("3.txt"), "Subject: c").unwrap();
        fs::write(temp_dir.path().join("20.txt"), "Subject: b").unwrap();
        fs::write(temp_dir.path().join("1.txt"), "Subject: a").unwrap();
        fs::create_dir(temp_dir.path().join("nested")).unwrap();

        let documents = list_documents(temp_dir.path()).unwrap();
        assert_eq!(names(&documents), vec!["1.txt", "3.txt", "20.txt"]);
    }

    #[test]
    fn test_list_documents_missing_dir_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = list_documents(&temp_dir.path().join("absent"));
        assert!(matches!(result, Err(ClassifierError::Config(_))));

        let file = temp_dir.path().join("file.txt");
        fs::write(&file, "Subject: x").unwrap();
        assert!(matches!(list_documents(&file), Err(ClassifierError::Config(_))));
    }

    #[test]
    fn test_list_documents_empty_dir() {
        let temp_dir = TempDir::new().unwrap();
        assert!(list_documents(temp_dir.path()).unwrap().is_empty());
    }
}
