//! Archive checksums for index entries.

use sha2::{Digest, Sha256};
use std::io::{self, Read};

/// Compute the lowercase hex SHA-256 of a byte slice.
#[must_use]
pub fn compute_sha256(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

/// Compute the lowercase hex SHA-256 of everything `reader` yields.
pub fn sha256_reader<R: Read>(mut reader: R) -> io::Result<String> {
    let mut hasher = Sha256::new();
    let mut buf = [0u8; 8192];
    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}
