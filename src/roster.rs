use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument, warn};

/// Read player names from every `*.txt` roster file in `dir`.
///
/// Files are visited in path order and names keep their order within each
/// file, duplicates included. Blank lines are ignored. A missing or
/// unreadable directory reads as an empty roster, and a roster file that
/// cannot be read as UTF-8 text is skipped with a warning.
#[instrument]
pub fn read_player_names(dir: &Path) -> Vec<String> {
    let mut names = Vec::new();
    for path in files_with_extension(dir, "txt") {
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "skipping unreadable roster file"
                );
                continue;
            }
        };
        let before = names.len();
        names.extend(
            content
                .lines()
                .filter(|line| !line.is_empty())
                .map(str::to_string),
        );
        debug!(path = %path.display(), count = names.len() - before, "read roster file");
    }
    names
}

/// Regular files directly in `dir` with the given extension, sorted by path.
///
/// A directory that cannot be listed yields no files.
pub(crate) fn files_with_extension(dir: &Path, extension: &str) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(dir = %dir.display(), "directory does not exist");
            return Vec::new();
        }
        Err(e) => {
            warn!(dir = %dir.display(), error = %e, "cannot list directory");
            return Vec::new();
        }
    };

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.path()),
            Err(e) => {
                warn!(
                    dir = %dir.display(),
                    error = %e,
                    "skipping unreadable directory entry"
                );
                None
            }
        })
        .filter(|path| {
            path.is_file() && path.extension().is_some_and(|ext| ext == extension)
        })
        .collect();
    paths.sort();
    paths
}
