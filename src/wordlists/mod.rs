//! Dictionary sourcing
//!
//! Loads the word list from a local cache file, downloading it first when the
//! cache is missing. The loaded `Dictionary` is owned by the caller and passed
//! by reference to each query.

pub mod download;
pub mod loader;
#[cfg(test)]
mod testing;

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default remote word list (one lowercase word per line)
pub const DEFAULT_WORDS_URL: &str =
    "https://raw.githubusercontent.com/dwyl/english-words/master/words_alpha.txt";

/// File name used for the cached dictionary
pub const WORDS_FILE_NAME: &str = "words.txt";

/// The dictionary could not be obtained
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{cause}")]
pub struct DictionaryUnavailable {
    cause: String,
}

impl DictionaryUnavailable {
    #[must_use]
    pub fn new(cause: impl Into<String>) -> Self {
        Self {
            cause: cause.into(),
        }
    }

    /// Human-readable description of what went wrong
    #[must_use]
    pub fn cause(&self) -> &str {
        &self.cause
    }
}

/// Where the dictionary lives and where to fetch it from when missing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub path: PathBuf,
    pub url: String,
}

impl Source {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, url: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            url: url.into(),
        }
    }
}

impl Default for Source {
    fn default() -> Self {
        Self::new(default_words_path(), DEFAULT_WORDS_URL)
    }
}

/// `words.txt` next to the running executable, or in the working directory
/// when the executable location is unknown
#[must_use]
pub fn default_words_path() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_default()
        .join(WORDS_FILE_NAME)
}

/// A loaded, immutable word list
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<String>,
    path: PathBuf,
    downloaded: bool,
}

impl Dictionary {
    /// Load the dictionary, downloading it if the cache file does not exist
    ///
    /// If downloading to `source.path` fails, one more attempt is made into
    /// `words.txt` in the current directory, and that file is used instead.
    ///
    /// # Errors
    ///
    /// Returns `DictionaryUnavailable` when both downloads fail or the file
    /// cannot be read or holds no words.
    pub fn open(source: &Source) -> Result<Self, DictionaryUnavailable> {
        Self::open_with_fallback(source, env::current_dir)
    }

    /// `open` with the fallback directory supplied by `working_dir`
    fn open_with_fallback(
        source: &Source,
        working_dir: impl FnOnce() -> io::Result<PathBuf>,
    ) -> Result<Self, DictionaryUnavailable> {
        let mut path = source.path.clone();
        let mut downloaded = false;

        if !path.exists() {
            tracing::warn!(path = %path.display(), "word list not found, downloading");
            path = Self::download_with_fallback(&source.url, &path, working_dir)?;
            downloaded = true;
        }

        let words = loader::load_from_file(&path)?;
        Ok(Self {
            words,
            path,
            downloaded,
        })
    }

    fn download_with_fallback(
        url: &str,
        path: &Path,
        working_dir: impl FnOnce() -> io::Result<PathBuf>,
    ) -> Result<PathBuf, DictionaryUnavailable> {
        let Err(primary) = download::fetch(url, path) else {
            return Ok(path.to_path_buf());
        };

        let dir = working_dir()
            .map_err(|e| DictionaryUnavailable::new(format!("Failed to download word list: {e}")))?;
        let fallback = dir.join(WORDS_FILE_NAME);

        // A relative target resolves against the same directory
        if dir.join(path) == fallback {
            return Err(primary);
        }

        tracing::warn!(
            error = %primary,
            fallback = %fallback.display(),
            "download failed, retrying in working directory"
        );
        download::fetch(url, &fallback)?;
        Ok(fallback)
    }

    /// Wrap an in-memory word list
    #[must_use]
    pub fn from_words(words: Vec<String>) -> Self {
        Self {
            words,
            path: PathBuf::new(),
            downloaded: false,
        }
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Path the words were read from (empty for in-memory lists)
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether this session downloaded the cache file
    #[must_use]
    pub const fn was_downloaded(&self) -> bool {
        self.downloaded
    }

    /// Delete the cache file if this session downloaded it
    ///
    /// Returns the removed path, or `None` when nothing was removed.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file exists but cannot be removed.
    pub fn remove_downloaded(&self) -> std::io::Result<Option<&Path>> {
        if !self.downloaded || !self.path.exists() {
            return Ok(None);
        }
        fs::remove_file(&self.path)?;
        tracing::debug!(path = %self.path.display(), "removed downloaded word list");
        Ok(Some(&self.path))
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{WordServer, closed_url};
    use super::*;
    use std::io::Write;

    #[test]
    fn open_existing_file_does_not_download() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "crane\nslate").unwrap();

        // Nothing listens there: would fail if a download were attempted
        let source = Source::new(file.path(), closed_url());
        let dict = Dictionary::open(&source).unwrap();

        assert_eq!(dict.words(), &["crane", "slate"]);
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.path(), file.path());
        assert!(!dict.was_downloaded());
    }

    #[test]
    fn open_missing_file_downloads_then_removes_it() {
        let server = WordServer::ok("Crane\nslate\n");
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache").join(WORDS_FILE_NAME);

        let dict = Dictionary::open(&Source::new(&path, server.url.as_str())).unwrap();

        assert_eq!(dict.words(), &["crane", "slate"]);
        assert_eq!(dict.path(), path);
        assert!(dict.was_downloaded());
        assert!(path.exists());
        assert!(!path.with_extension("part").exists());
        assert_eq!(server.requests(), 1);

        assert_eq!(dict.remove_downloaded().unwrap(), Some(path.as_path()));
        assert!(!path.exists());
        assert_eq!(dict.remove_downloaded().unwrap(), None);
    }

    #[test]
    fn failed_download_retries_in_working_directory() {
        let server = WordServer::ok("spoon\n");
        let dir = tempfile::tempdir().unwrap();
        // Parent is a regular file, so the configured path cannot be created
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let working = dir.path().join("work");
        fs::create_dir(&working).unwrap();

        let source = Source::new(blocker.join(WORDS_FILE_NAME), server.url.as_str());
        let dict = Dictionary::open_with_fallback(&source, || Ok(working.clone())).unwrap();

        assert_eq!(dict.path(), working.join(WORDS_FILE_NAME));
        assert_eq!(dict.words(), &["spoon"]);
        assert!(dict.was_downloaded());
        assert_eq!(server.requests(), 1);
    }

    #[test]
    fn relative_path_in_working_directory_is_not_retried() {
        let server = WordServer::not_found();
        let dir = tempfile::tempdir().unwrap();
        let working = dir.path().to_path_buf();

        let source = Source::new(WORDS_FILE_NAME, server.url.as_str());
        let err = Dictionary::open_with_fallback(&source, || Ok(working.clone())).unwrap_err();

        assert!(err.cause().starts_with("Failed to download word list"));
        assert_eq!(server.requests(), 1);
        assert!(!working.join(WORDS_FILE_NAME).exists());
    }

    #[test]
    fn both_downloads_failing_is_unavailable() {
        let server = WordServer::not_found();
        let dir = tempfile::tempdir().unwrap();
        let working = dir.path().join("work");

        let path = dir.path().join("cache").join(WORDS_FILE_NAME);
        let source = Source::new(path, server.url.as_str());
        let err = Dictionary::open_with_fallback(&source, || Ok(working.clone())).unwrap_err();

        assert!(err.cause().contains("404"));
        assert_eq!(server.requests(), 2);
    }

    #[test]
    fn open_empty_file_is_unavailable() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let source = Source::new(file.path(), DEFAULT_WORDS_URL);
        let err = Dictionary::open(&source).unwrap_err();
        assert_eq!(err.to_string(), "Word list file is empty or invalid.");
    }

    #[test]
    fn remove_downloaded_keeps_user_files() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "crane").unwrap();

        let dict = Dictionary::open(&Source::new(file.path(), DEFAULT_WORDS_URL)).unwrap();
        assert_eq!(dict.remove_downloaded().unwrap(), None);
        assert!(file.path().exists());
    }

    #[test]
    fn from_words_is_in_memory() {
        let dict = Dictionary::from_words(vec!["spoon".to_string()]);
        assert_eq!(dict.len(), 1);
        assert!(!dict.is_empty());
        assert_eq!(dict.path(), Path::new(""));
        assert_eq!(dict.remove_downloaded().unwrap(), None);
    }

    #[test]
    fn default_source_points_at_words_file() {
        let source = Source::default();
        assert_eq!(source.url, DEFAULT_WORDS_URL);
        assert_eq!(source.path.file_name().unwrap(), WORDS_FILE_NAME);
    }

    #[test]
    fn unavailable_displays_cause() {
        let err = DictionaryUnavailable::new("network down");
        assert_eq!(err.cause(), "network down");
        assert_eq!(format!("{err}"), "network down");
    }
}
