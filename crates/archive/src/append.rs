use super::errors::ArchiveError;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};

type Result<T> = std::result::Result<T, ArchiveError>;

/// Adds `entry_name` to the archive unless an entry with that name exists.
///
/// Returns whether the entry was written.
pub fn append_if_missing<P: AsRef<Path>>(archive_path: P, entry_name: &str, contents: &[u8]) -> Result<bool> {
    let archive_path = archive_path.as_ref();

    if has_entry(archive_path, entry_name)? {
        return Ok(false);
    }

    let file = OpenOptions::new().read(true).write(true).open(archive_path)?;
    let mut writer = ZipWriter::new_append(file)?;
    writer.start_file(entry_name, SimpleFileOptions::default())?;
    writer.write_all(contents)?;
    writer.finish()?;

    tracing::debug!("Appended {} to {}", entry_name, archive_path.display());
    Ok(true)
}

pub fn has_entry<P: AsRef<Path>>(archive_path: P, entry_name: &str) -> Result<bool> {
    let archive = ZipArchive::new(File::open(archive_path)?)?;
    let found = archive.file_names().any(|name| name == entry_name);
    Ok(found)
}

/// Same as [`append_if_missing`], off the async runtime
pub async fn append_if_missing_async<P: AsRef<Path>>(
    archive_path: P,
    entry_name: &str,
    contents: Vec<u8>,
) -> Result<bool> {
    let archive_path = archive_path.as_ref().to_path_buf();
    let entry_name = entry_name.to_string();

    tokio::task::spawn_blocking(move || append_if_missing(&archive_path, &entry_name, &contents)).await?
}
