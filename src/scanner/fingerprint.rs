//! Streaming BLAKE3 content fingerprinting.
//!
//! Files are read in fixed 64 KiB blocks so memory use is independent of file
//! size. Two files are considered identical exactly when their full-content
//! digests match; there is no partial-prefix shortcut and no byte-by-byte
//! fallback after a digest match.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::ReadError;

/// Size of each read block fed to the hasher.
pub const BLOCK_SIZE: usize = 64 * 1024;

/// A full-content BLAKE3 digest (32 bytes).
pub type Fingerprint = [u8; 32];

/// Render a fingerprint as a lowercase hex string.
#[must_use]
pub fn fingerprint_to_hex(fingerprint: &Fingerprint) -> String {
    blake3::Hash::from_bytes(*fingerprint).to_hex().to_string()
}

/// Streaming file fingerprinter.
///
/// # Example
///
/// ```no_run
/// use dupelens::scanner::Fingerprinter;
/// use std::path::Path;
///
/// let fingerprinter = Fingerprinter::new();
/// let digest = fingerprinter.fingerprint(Path::new("file.txt")).unwrap();
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Fingerprinter;

impl Fingerprinter {
    /// Create a new fingerprinter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Compute the full-content digest of a file.
    ///
    /// Reads the file in [`BLOCK_SIZE`] chunks, so arbitrarily large files
    /// are handled with constant memory.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError`] if the file cannot be opened or read.
    pub fn fingerprint(&self, path: &Path) -> Result<Fingerprint, ReadError> {
        let mut file = File::open(path).map_err(|e| ReadError::from_io(path, e))?;
        let mut hasher = blake3::Hasher::new();
        let mut block = vec![0u8; BLOCK_SIZE];

        loop {
            let n = file
                .read(&mut block)
                .map_err(|e| ReadError::from_io(path, e))?;
            if n == 0 {
                break;
            }
            hasher.update(&block[..n]);
        }

        Ok(*hasher.finalize().as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_identical_content_same_fingerprint() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        fs::write(&a, b"hello").unwrap();
        fs::write(&b, b"hello").unwrap();

        let fingerprinter = Fingerprinter::new();
        assert_eq!(
            fingerprinter.fingerprint(&a).unwrap(),
            fingerprinter.fingerprint(&b).unwrap()
        );
    }

    #[test]
    fn test_different_content_different_fingerprint() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        fs::write(&a, b"hello").unwrap();
        fs::write(&b, b"world").unwrap();

        let fingerprinter = Fingerprinter::new();
        assert_ne!(
            fingerprinter.fingerprint(&a).unwrap(),
            fingerprinter.fingerprint(&b).unwrap()
        );
    }

    #[test]
    fn test_fingerprint_matches_blake3_of_whole_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.bin");
        let content = b"some file content";
        fs::write(&path, content).unwrap();

        let digest = Fingerprinter::new().fingerprint(&path).unwrap();
        assert_eq!(digest, *blake3::hash(content).as_bytes());
    }

    #[test]
    fn test_content_spanning_block_boundary() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("big.bin");
        // One full block plus a partial tail block
        let content = vec![b'x'; BLOCK_SIZE + 17];
        fs::write(&path, &content).unwrap();

        let digest = Fingerprinter::new().fingerprint(&path).unwrap();
        assert_eq!(digest, *blake3::hash(&content).as_bytes());
    }

    #[test]
    fn test_empty_files_share_fingerprint() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("empty1");
        let b = dir.path().join("empty2");
        fs::write(&a, b"").unwrap();
        fs::write(&b, b"").unwrap();

        let fingerprinter = Fingerprinter::new();
        assert_eq!(
            fingerprinter.fingerprint(&a).unwrap(),
            fingerprinter.fingerprint(&b).unwrap()
        );
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let err = Fingerprinter::new()
            .fingerprint(&dir.path().join("nope"))
            .unwrap_err();
        assert!(matches!(err, ReadError::NotFound(_)));
    }

    #[test]
    fn test_fingerprint_to_hex() {
        let digest = *blake3::hash(b"hello").as_bytes();
        let hex = fingerprint_to_hex(&digest);
        assert_eq!(hex.len(), 64);
        assert_eq!(hex, blake3::hash(b"hello").to_hex().to_string());
    }
}
