//! Dictionary download
//!
//! Fetches the word list over HTTP and writes it to the cache path.

use super::DictionaryUnavailable;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::Duration;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Download `url` into `path`
///
/// The body is streamed into a sibling `.part` file and renamed into place
/// once the transfer completes. Missing parent directories are created.
///
/// # Errors
///
/// Returns `DictionaryUnavailable` on network failure, a non-success HTTP
/// status, or any filesystem error.
pub fn fetch(url: &str, path: &Path) -> Result<(), DictionaryUnavailable> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            DictionaryUnavailable::new(format!("Could not create {}: {e}", parent.display()))
        })?;
    }

    tracing::info!(%url, path = %path.display(), "downloading word list");

    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .connect_timeout(Duration::from_secs(15))
        .timeout(Duration::from_secs(300))
        .build()
        .map_err(|e| DictionaryUnavailable::new(format!("Failed to build HTTP client: {e}")))?;

    let mut response = client
        .get(url)
        .send()
        .and_then(reqwest::blocking::Response::error_for_status)
        .map_err(|e| DictionaryUnavailable::new(format!("Failed to download word list: {e}")))?;

    let partial = path.with_extension("part");
    let result = write_body(&mut response, &partial).and_then(|bytes| {
        fs::rename(&partial, path)?;
        Ok(bytes)
    });

    match result {
        Ok(bytes) => {
            tracing::info!(bytes, path = %path.display(), "download complete");
            Ok(())
        }
        Err(e) => {
            let _ = fs::remove_file(&partial);
            Err(DictionaryUnavailable::new(format!(
                "Failed to save word list to {}: {e}",
                path.display()
            )))
        }
    }
}

fn write_body(response: &mut reqwest::blocking::Response, partial: &Path) -> io::Result<u64> {
    let pb = progress_bar(response.content_length());
    let mut writer = pb.wrap_write(BufWriter::new(File::create(partial)?));

    let bytes = response.copy_to(&mut writer).map_err(io::Error::other)?;
    writer.flush()?;
    pb.finish_and_clear();

    Ok(bytes)
}

fn progress_bar(length: Option<u64>) -> ProgressBar {
    match length {
        Some(total) => {
            let pb = ProgressBar::new(total);
            if let Ok(style) = ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")
            {
                pb.set_style(style.progress_chars("█▓▒░"));
            }
            pb
        }
        None => {
            let pb = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {bytes}")
            {
                pb.set_style(style);
            }
            pb.enable_steady_tick(Duration::from_millis(100));
            pb
        }
    }
}
