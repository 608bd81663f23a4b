//! Content digests using SHA-256

use crate::error::ReadError;
use crate::types::Digest;
use sha2::{Digest as _, Sha256};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Read buffer size. Any value produces the same digest.
pub const CHUNK_SIZE: usize = 64 * 1024;

/// Compute the digest of a file's bytes.
///
/// Streams the file in `CHUNK_SIZE` pieces, so memory use does not grow
/// with file size.
pub fn digest_file(path: &Path) -> Result<Digest, ReadError> {
    let file = File::open(path).map_err(|source| ReadError {
        path: path.to_path_buf(),
        source,
    })?;
    digest_reader(file).map_err(|source| ReadError {
        path: path.to_path_buf(),
        source,
    })
}

/// Compute the digest of everything readable from `reader`
pub fn digest_reader<R: Read>(reader: R) -> io::Result<Digest> {
    digest_reader_chunked(reader, CHUNK_SIZE)
}

/// Same as [`digest_reader`] with an explicit chunk size
pub fn digest_reader_chunked<R: Read>(mut reader: R, chunk_size: usize) -> io::Result<Digest> {
    let mut hasher = Sha256::new();
    let mut buf = vec![0u8; chunk_size.max(1)];
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buf[..n]);
    }
    Ok(Digest::from_bytes(hasher.finalize().into()))
}

/// Compute the digest of an in-memory byte slice
pub fn digest_bytes(content: &[u8]) -> Digest {
    Digest::from_bytes(Sha256::digest(content).into())
}
