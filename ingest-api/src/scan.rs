use std::path::Path;

use tokio::fs;
use tracing::{debug, warn};

use crate::api::IngestError;

/// Reads every regular file directly inside `dir`, sorted by name.
///
/// Sub-directories (the quarantine folder among them) are skipped, symlinks
/// are followed. File contents that are not valid UTF-8 lose the offending
/// bytes rather than failing the scan.
pub async fn scan_directory(dir: &Path) -> Result<Vec<(String, String)>, IngestError> {
    match fs::metadata(dir).await {
        Ok(metadata) if metadata.is_dir() => {}
        _ => return Err(IngestError::DataDirNotFound(dir.display().to_string())),
    }

    let mut documents = Vec::new();
    let mut entries = fs::read_dir(dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        let is_file = fs::metadata(&path)
            .await
            .map(|metadata| metadata.is_file())
            .unwrap_or(false);
        if !is_file {
            debug!(path = %path.display(), "skipping non-file entry");
            continue;
        }

        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(raw) => {
                warn!(name = ?raw, "skipping file with a non UTF-8 name");
                continue;
            }
        };

        let bytes = fs::read(&path).await?;
        documents.push((name, decode_text(&bytes)));
    }

    documents.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(documents)
}

/// File text as indexed: lossy UTF-8 with `\r\n` and lone `\r` read as `\n`.
pub fn decode_text(bytes: &[u8]) -> String {
    normalize_newlines(&decode_lossy(bytes))
}

/// UTF-8 decode that silently drops invalid byte sequences.
pub fn decode_lossy(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}

fn normalize_newlines(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn decode_drops_invalid_bytes() {
        assert_eq!(decode_lossy(b"plain"), "plain");
        assert_eq!(decode_lossy(b"caf\xc3\xa9"), "café");
        assert_eq!(decode_lossy(b"bad\xff\xfebytes"), "badbytes");
        assert_eq!(decode_lossy(b""), "");
    }

    #[test]
    fn decode_text_reads_any_line_ending_as_newline() {
        assert_eq!(decode_text(b"one\r\ntwo\rthree\nfour"), "one\ntwo\nthree\nfour");
        assert_eq!(decode_text(b"\r\n\r\n"), "\n\n");
        assert_eq!(decode_text(b"no breaks"), "no breaks");
        // an invalid byte between \r and \n is dropped before line endings are read
        assert_eq!(decode_text(b"a\r\xff\nb"), "a\nb");
    }

    #[tokio::test]
    async fn reads_regular_files_only() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("b.txt"), "second").unwrap();
        std::fs::write(dir.path().join("a.txt"), "first").unwrap();
        std::fs::write(dir.path().join("raw.bin"), b"ok\xffok").unwrap();
        std::fs::write(dir.path().join("win.txt"), "line one\r\nline two\r\n").unwrap();
        std::fs::create_dir(dir.path().join("quarantine")).unwrap();
        std::fs::write(dir.path().join("quarantine").join("c.txt"), "hidden").unwrap();

        let documents = scan_directory(dir.path()).await.unwrap();

        assert_eq!(
            documents,
            vec![
                ("a.txt".to_string(), "first".to_string()),
                ("b.txt".to_string(), "second".to_string()),
                ("raw.bin".to_string(), "okok".to_string()),
                ("win.txt".to_string(), "line one\nline two\n".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn empty_directory_scans_to_nothing() {
        let dir = TempDir::new().unwrap();
        assert!(scan_directory(dir.path()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");

        let err = scan_directory(&missing).await.unwrap_err();
        assert!(matches!(err, IngestError::DataDirNotFound(_)));
        assert_eq!(
            err.to_string(),
            format!("Data dir not found: {}", missing.display())
        );
    }

    #[tokio::test]
    async fn file_in_place_of_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("file.txt");
        std::fs::write(&file, "x").unwrap();

        assert!(matches!(
            scan_directory(&file).await,
            Err(IngestError::DataDirNotFound(_))
        ));
    }
}
