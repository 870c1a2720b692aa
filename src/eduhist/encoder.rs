//! File-to-document encoding.
//!
//! A raw file on disk becomes a self-contained [`EducationDocument`]: the
//! original file name, a MIME type guessed from the extension (empty when
//! unknown), and the file's bytes as a base64 data URL. The encoding
//! round-trips byte for byte; [`decode_data_url`] is the inverse.
//!
//! Batches are all-or-nothing: a partially attached entry is worse than a
//! clear failure, so one unreadable file fails the whole batch and nothing
//! reaches the store.

use crate::error::{EduError, Result};
use crate::model::EducationDocument;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;

const FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";

/// Read one file in full and encode it as a document.
pub fn encode_file(path: &Path) -> Result<EducationDocument> {
    let bytes = fs::read(path).map_err(|source| EduError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let mime_type = mime_guess::from_path(path).first_raw().unwrap_or_default();
    let media_type = if mime_type.is_empty() {
        FALLBACK_MEDIA_TYPE
    } else {
        mime_type
    };

    let data_url = format!("data:{};base64,{}", media_type, BASE64.encode(&bytes));
    debug!("encoded {} ({} bytes, {})", name, bytes.len(), media_type);

    Ok(EducationDocument {
        name,
        mime_type: mime_type.to_string(),
        data_url,
    })
}

/// Recover the original bytes from a document's data URL.
pub fn decode_data_url(data_url: &str) -> Result<Vec<u8>> {
    let payload = data_url
        .split_once(";base64,")
        .map(|(_, payload)| payload)
        .ok_or_else(|| EduError::Payload("missing base64 marker".to_string()))?;
    BASE64
        .decode(payload)
        .map_err(|e| EduError::Payload(e.to_string()))
}

/// Encode several files, one scoped thread each, and join them all.
/// Output order matches input order. If any file fails, the whole batch
/// fails and no partial result is returned.
pub fn encode_batch(paths: &[PathBuf]) -> Result<Vec<EducationDocument>> {
    if paths.is_empty() {
        return Ok(Vec::new());
    }

    thread::scope(|scope| {
        let handles: Vec<_> = paths
            .iter()
            .map(|path| scope.spawn(move || encode_file(path)))
            .collect();

        let mut documents = Vec::with_capacity(handles.len());
        for handle in handles {
            match handle.join() {
                Ok(document) => documents.push(document?),
                Err(_) => {
                    return Err(EduError::Store(
                        "file encoding thread panicked".to_string(),
                    ))
                }
            }
        }
        Ok(documents)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, bytes).unwrap();
        path
    }

    #[test]
    fn roundtrips_bytes_and_preserves_name_and_type() {
        let dir = TempDir::new().unwrap();
        let bytes: Vec<u8> = (0..=255).collect();
        let path = write_file(&dir, "diploma.pdf", &bytes);

        let document = encode_file(&path).unwrap();
        assert_eq!(document.name, "diploma.pdf");
        assert_eq!(document.mime_type, "application/pdf");
        assert!(document.data_url.starts_with("data:application/pdf;base64,"));
        assert_eq!(decode_data_url(&document.data_url).unwrap(), bytes);
    }

    #[test]
    fn unknown_extension_yields_empty_mime_type() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "transcript.qqq", b"hello");

        let document = encode_file(&path).unwrap();
        assert_eq!(document.mime_type, "");
        // The data URL still carries a usable media type.
        assert!(document
            .data_url
            .starts_with("data:application/octet-stream;base64,"));
    }

    #[test]
    fn empty_file_roundtrips() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "empty.txt", b"");

        let document = encode_file(&path).unwrap();
        assert_eq!(decode_data_url(&document.data_url).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.pdf");
        let err = encode_file(&path).unwrap_err();
        assert!(matches!(err, EduError::FileRead { .. }));
    }

    #[test]
    fn batch_preserves_input_order() {
        let dir = TempDir::new().unwrap();
        let a = write_file(&dir, "a.txt", b"first");
        let b = write_file(&dir, "b.txt", b"second");
        let c = write_file(&dir, "c.txt", b"third");

        let documents = encode_batch(&[a, b, c]).unwrap();
        assert_eq!(documents.len(), 3);
        assert_eq!(documents[0].name, "a.txt");
        assert_eq!(documents[1].name, "b.txt");
        assert_eq!(documents[2].name, "c.txt");
    }

    #[test]
    fn batch_aborts_when_any_file_fails() {
        let dir = TempDir::new().unwrap();
        let good = write_file(&dir, "good.txt", b"fine");
        let missing = dir.path().join("missing.txt");

        let err = encode_batch(&[good, missing]).unwrap_err();
        assert!(matches!(err, EduError::FileRead { .. }));
    }

    #[test]
    fn empty_batch_is_empty() {
        assert!(encode_batch(&[]).unwrap().is_empty());
    }

    #[test]
    fn decode_rejects_plain_strings() {
        assert!(matches!(
            decode_data_url("not a data url"),
            Err(EduError::Payload(_))
        ));
    }
}
