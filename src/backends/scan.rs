//! File discovery backend
//!
//! Walks each search root with walkdir and yields every `carcols.meta` file.
//! Roots are visited in the order given; inside a root, entries come in
//! whatever order the directory walk produces.

use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::core::error::ScanError;
use crate::core::model::FileRecord;
use crate::core::paths::{is_target_file, make_relative, normalize_path, parent_folder_name};

/// Lazily discover `carcols.meta` files under all roots.
///
/// A missing root shows up as a single `Err(ScanError::MissingRoot)` item and
/// the walk moves on to the next root.
pub fn locate_files(
    roots: &[PathBuf],
) -> impl Iterator<Item = Result<FileRecord, ScanError>> + '_ {
    roots.iter().flat_map(|root| locate_in_root(root))
}

fn locate_in_root(root: &Path) -> Box<dyn Iterator<Item = Result<FileRecord, ScanError>> + '_> {
    if !root.exists() {
        warn!(root = %root.display(), "Directory not found, skipping");
        return Box::new(std::iter::once(Err::<FileRecord, _>(
            ScanError::MissingRoot {
                root: root.to_path_buf(),
            },
        )));
    }

    info!("Searching in directory: {}", root.display());

    let walker = WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .into_iter()
        .filter_map(move |entry| match entry {
            Ok(e) => Some(e),
            Err(err) => {
                debug!(root = %root.display(), error = %err, "Skipping unreadable entry");
                None
            }
        })
        .filter(|entry| !entry.file_type().is_dir() && entry.path().is_file())
        .filter(|entry| is_target_file(entry.path()))
        .map(move |entry| Ok::<_, ScanError>(file_record(entry.path(), root)));

    Box::new(walker)
}

fn file_record(path: &Path, root: &Path) -> FileRecord {
    let relative_path = make_relative(path, root).unwrap_or_else(|| normalize_path(path));

    FileRecord {
        folder: parent_folder_name(path),
        file_path: path.to_path_buf(),
        relative_path,
        root: root.display().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::tempdir;

    fn collect_ok(roots: &[PathBuf]) -> Vec<FileRecord> {
        locate_files(roots).filter_map(Result::ok).collect()
    }

    #[test]
    fn test_locate_empty_dir() {
        let temp = tempdir().unwrap();
        let roots = vec![temp.path().to_path_buf()];
        assert!(locate_files(&roots).next().is_none());
    }

    #[test]
    fn test_locate_matches_file_name_only() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("police/stream")).unwrap();
        fs::create_dir_all(temp.path().join("carcols.meta.d")).unwrap();
        File::create(temp.path().join("police/carcols.meta")).unwrap();
        File::create(temp.path().join("police/stream/CARCOLS.META")).unwrap();
        File::create(temp.path().join("police/vehicles.meta")).unwrap();
        File::create(temp.path().join("carcols.meta.d/readme.txt")).unwrap();

        let roots = vec![temp.path().to_path_buf()];
        let mut found: Vec<_> = collect_ok(&roots)
            .into_iter()
            .map(|r| r.relative_path)
            .collect();
        found.sort();

        assert_eq!(
            found,
            vec!["police/carcols.meta", "police/stream/CARCOLS.META"]
        );
    }

    #[test]
    fn test_locate_fills_record_fields() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("lspd")).unwrap();
        let file = temp.path().join("lspd/carcols.meta");
        File::create(&file).unwrap();

        let roots = vec![temp.path().to_path_buf()];
        let records = collect_ok(&roots);
        assert_eq!(records.len(), 1);

        let rec = &records[0];
        assert_eq!(rec.folder, "lspd");
        assert_eq!(rec.file_path, file);
        assert_eq!(rec.relative_path, "lspd/carcols.meta");
        assert_eq!(rec.root, temp.path().display().to_string());
    }

    #[test]
    fn test_locate_file_directly_in_root() {
        let temp = tempdir().unwrap();
        let root = temp.path().join("[emergency]");
        fs::create_dir(&root).unwrap();
        File::create(root.join("carcols.meta")).unwrap();

        let records = collect_ok(&[root]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].folder, "[emergency]");
        assert_eq!(records[0].relative_path, "carcols.meta");
    }

    #[test]
    fn test_missing_root_is_skipped() {
        let temp = tempdir().unwrap();
        let present = temp.path().join("present");
        fs::create_dir(&present).unwrap();
        File::create(present.join("carcols.meta")).unwrap();

        let roots = vec![temp.path().join("missing"), present.clone()];
        let items: Vec<_> = locate_files(&roots).collect();
        assert_eq!(items.len(), 2);

        match &items[0] {
            Err(ScanError::MissingRoot { root }) => assert_eq!(root, &roots[0]),
            other => panic!("expected missing root, got {other:?}"),
        }
        assert!(items[1].is_ok());
    }

    #[test]
    fn test_roots_keep_configured_order() {
        let temp = tempdir().unwrap();
        let first = temp.path().join("zzz");
        let second = temp.path().join("aaa");
        fs::create_dir(&first).unwrap();
        fs::create_dir(&second).unwrap();
        File::create(first.join("carcols.meta")).unwrap();
        File::create(second.join("carcols.meta")).unwrap();

        let records = collect_ok(&[first.clone(), second.clone()]);
        let roots: Vec<_> = records.iter().map(|r| r.root.clone()).collect();
        assert_eq!(
            roots,
            vec![first.display().to_string(), second.display().to_string()]
        );
    }

    #[test]
    fn test_root_that_is_a_file_yields_nothing() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("carcols.meta");
        File::create(&file).unwrap();

        let items: Vec<_> = locate_files(&[file]).collect();
        assert!(items.is_empty());
    }
}
