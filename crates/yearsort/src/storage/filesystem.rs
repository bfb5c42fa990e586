use std::cell::RefCell;
use std::collections::HashSet;
use std::ffi::OsStr;
use std::fs::{File, FileTimes, OpenOptions};
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::StorageError;
use crate::storage::outcome::{Outcome, PlaceMode};

/// Whether anything (file, directory, dangling symlink) occupies `path`.
fn occupied(path: &Path) -> bool {
    std::fs::symlink_metadata(path).is_ok()
}

/// Copies `src` into a newly created `dst`, carrying over permissions and
/// access/modification times. Never truncates an existing file; a partial
/// `dst` is removed when the copy fails.
fn copy_preserving(src: &Path, dst: &Path) -> std::io::Result<()> {
    let mut reader = File::open(src)?;
    let metadata = reader.metadata()?;

    let mut writer = OpenOptions::new().write(true).create_new(true).open(dst)?;

    let result = (|| {
        std::io::copy(&mut reader, &mut writer)?;

        let mut times = FileTimes::new();
        if let Ok(modified) = metadata.modified() {
            times = times.set_modified(modified);
        }
        if let Ok(accessed) = metadata.accessed() {
            times = times.set_accessed(accessed);
        }
        writer.set_times(times)?;

        // Permissions last: a read-only source would block set_times.
        writer.set_permissions(metadata.permissions())
    })();

    if result.is_err() {
        drop(writer);
        let _ = std::fs::remove_file(dst);
    }
    result
}

/// Move a file from `src` to `dst`. Uses `rename` first (fast, atomic on same
/// filesystem). Falls back to copy + delete when rename fails, which covers
/// moves across devices.
fn move_file(src: &Path, dst: &Path) -> Result<(), StorageError> {
    if occupied(dst) {
        return Err(StorageError::FileExists(dst.to_path_buf()));
    }

    if std::fs::rename(src, dst).is_ok() {
        return Ok(());
    }

    copy_preserving(src, dst).map_err(|e| StorageError::MoveFile {
        from: src.to_path_buf(),
        to: dst.to_path_buf(),
        source: e,
    })?;
    remove_source(src, dst)
}

/// Second half of a copy-based move. When `src` cannot be deleted the copy
/// at `dst` is removed again, so a failed move leaves a single file behind.
fn remove_source(src: &Path, dst: &Path) -> Result<(), StorageError> {
    std::fs::remove_file(src).map_err(|e| {
        let _ = std::fs::remove_file(dst);
        StorageError::MoveFile {
            from: src.to_path_buf(),
            to: dst.to_path_buf(),
            source: e,
        }
    })
}

fn copy_file(src: &Path, dst: &Path) -> Result<(), StorageError> {
    copy_preserving(src, dst).map_err(|e| {
        if e.kind() == std::io::ErrorKind::AlreadyExists {
            StorageError::FileExists(dst.to_path_buf())
        } else {
            StorageError::CopyFile {
                from: src.to_path_buf(),
                to: dst.to_path_buf(),
                source: e,
            }
        }
    })
}

/// Places `source` at `destination`.
///
/// In dry-run mode nothing is touched and the intended action is reported.
/// Filesystem errors never escape: they become [`Outcome::Failed`] so the
/// run can carry on with the next file.
pub fn place(source: &Path, destination: &Path, mode: PlaceMode, dry_run: bool) -> Outcome {
    if dry_run {
        return Outcome::DryRun {
            action: mode,
            destination: destination.to_path_buf(),
        };
    }

    let result = match mode {
        PlaceMode::Move => move_file(source, destination),
        PlaceMode::Copy => copy_file(source, destination),
    };

    match result {
        Ok(()) => Outcome::Placed(destination.to_path_buf()),
        Err(e) => Outcome::Failed(e.to_string()),
    }
}

/// Splits a file name into stem and extension (with its dot). Leading dots
/// belong to the stem, so `.hidden` has no extension.
fn split_extension(filename: &str) -> (&str, &str) {
    let leading = filename.len() - filename.trim_start_matches('.').len();
    match filename[leading..].rfind('.') {
        Some(pos) => filename.split_at(leading + pos),
        None => (filename, ""),
    }
}

/// Owns the destination root and hands out collision-free paths inside it.
///
/// Dry runs never create the files they announce, so paths handed out in
/// dry-run mode are remembered and count as taken for the rest of the run.
pub struct FileStorage {
    output_directory: PathBuf,
    claimed: RefCell<HashSet<PathBuf>>,
}

impl FileStorage {
    pub fn new<P: AsRef<Path>>(output_directory: P) -> Self {
        Self {
            output_directory: output_directory.as_ref().to_path_buf(),
            claimed: RefCell::new(HashSet::new()),
        }
    }

    pub fn output_directory(&self) -> &Path {
        &self.output_directory
    }

    /// Computes `root/<folder>/<filename>`, or the first free
    /// `name (N).ext` variant when that path is taken.
    ///
    /// Creates the folder first unless `dry_run` is set; the collision search
    /// is the same either way.
    pub fn resolve_destination(
        &self,
        folder: &str,
        filename: &OsStr,
        dry_run: bool,
    ) -> Result<PathBuf, StorageError> {
        let dir_path = self.output_directory.join(folder);
        if !dry_run {
            self.ensure_directory(&dir_path)?;
        }

        let path = self.resolve_conflict(&dir_path, filename)?;
        if dry_run {
            self.claimed.borrow_mut().insert(path.clone());
        }
        Ok(path)
    }

    pub fn ensure_directory(&self, path: &Path) -> Result<(), StorageError> {
        if !path.is_dir() {
            std::fs::create_dir_all(path).map_err(|e| StorageError::CreateDirectory {
                path: path.to_path_buf(),
                source: e,
            })?;
        }
        Ok(())
    }

    fn taken(&self, path: &Path) -> bool {
        occupied(path) || self.claimed.borrow().contains(path)
    }

    fn resolve_conflict(&self, directory: &Path, filename: &OsStr) -> Result<PathBuf, StorageError> {
        let path = directory.join(filename);
        if !self.taken(&path) {
            return Ok(path);
        }

        let name = filename.to_string_lossy();
        let (base, ext) = split_extension(&name);

        let candidate = (1u64..)
            .map(|counter| directory.join(format!("{} ({}){}", base, counter, ext)))
            .find(|candidate| !self.taken(candidate))
            .ok_or_else(|| StorageError::FileExists(path.clone()))?;

        debug!("{} taken, using {}", path.display(), candidate.display());
        Ok(candidate)
    }
}
