//! Storage of uploaded plant images.

use std::io::ErrorKind;
use std::path::Path;

use tokio::io::AsyncWriteExt;

/// URL prefix under which stored images are served.
pub const IMAGE_URL_PREFIX: &str = "/plant_images";

/// Names tried per upload before giving up on collisions.
const MAX_NAME_ATTEMPTS: u32 = 100;

/// Reduces an uploaded file name to `[A-Za-z0-9._-]`.
///
/// Path components are dropped, whitespace becomes `_`, and leading dots are
/// stripped so the result can never name a hidden file or leave the media
/// directory. Returns `None` when nothing usable remains.
pub fn sanitize_filename(original: &str) -> Option<String> {
    let base = original
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default();

    let cleaned: String = base
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect();

    let cleaned = cleaned.trim_start_matches(['.', '_']).to_string();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

/// Name an upload is stored under: `<unix_ts>_<sanitized name>`.
pub fn stored_name(unix_ts: i64, original: &str) -> String {
    match sanitize_filename(original) {
        Some(name) => format!("{}_{}", unix_ts, name),
        None => format!("{}_image", unix_ts),
    }
}

/// Public URL of a stored image.
pub fn image_url(stored_name: &str) -> String {
    format!("{}/{}", IMAGE_URL_PREFIX, stored_name)
}

/// Stored name for the `attempt`-th try: `<ts>_<name>`, then `<ts>_<n>_<name>`.
fn candidate_name(unix_ts: i64, original: &str, attempt: u32) -> String {
    if attempt == 0 {
        return stored_name(unix_ts, original);
    }
    let name = sanitize_filename(original).unwrap_or_else(|| "image".to_string());
    format!("{}_{}_{}", unix_ts, attempt, name)
}

/// Writes an upload into the media directory without replacing any file.
///
/// Uploads with the same name in the same second get a numeric suffix.
/// Returns the name the image was stored under.
pub async fn save_image(
    dir: &Path,
    unix_ts: i64,
    original: &str,
    bytes: &[u8],
) -> std::io::Result<String> {
    tokio::fs::create_dir_all(dir).await?;

    for attempt in 0..MAX_NAME_ATTEMPTS {
        let name = candidate_name(unix_ts, original, attempt);
        let path = dir.join(&name);
        let mut file = match tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
        {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
            Err(e) => return Err(e),
        };

        if let Err(e) = write_all(&mut file, bytes).await {
            drop(file);
            tokio::fs::remove_file(&path).await.ok();
            return Err(e);
        }
        return Ok(name);
    }

    Err(std::io::Error::new(
        ErrorKind::AlreadyExists,
        format!("no free name for upload {:?}", original),
    ))
}

async fn write_all(file: &mut tokio::fs::File, bytes: &[u8]) -> std::io::Result<()> {
    file.write_all(bytes).await?;
    file.flush().await
}

/// Deletes a stored image. A missing file is not an error.
pub async fn remove_image(dir: &Path, stored_name: &str) -> std::io::Result<()> {
    match tokio::fs::remove_file(dir.join(stored_name)).await {
        Err(e) if e.kind() != ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}
