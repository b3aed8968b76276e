//! JSON lines codec for index entries

use crate::{IndexError, IndexResult};
use serde::{Serialize, de::DeserializeOwned};
use std::io::BufRead;

/// Reads and writes index entries as one JSON object per line
///
/// Compact maps must be flat objects of string values; records may hold
/// strings, booleans, integers and string lists.
#[derive(Debug, Clone, Default)]
pub struct JsonLineCodec {
    /// Whether to pretty-print output (one entry then spans several lines)
    pretty: bool,
}

impl JsonLineCodec {
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Codec that pretty-prints output, for human inspection
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    /// Encode one entry
    pub fn encode<T: Serialize>(&self, value: &T) -> IndexResult<String> {
        let encoded = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        encoded.map_err(|e| IndexError::Serialization(e.to_string()))
    }

    /// Decode one entry
    pub fn decode<T: DeserializeOwned>(&self, line: &str) -> IndexResult<T> {
        serde_json::from_str(line).map_err(Into::into)
    }

    /// Decode every non-blank line of `reader`
    ///
    /// Errors carry the 1-based line number within the input.
    pub fn decode_lines<T, R>(&self, reader: R) -> impl Iterator<Item = IndexResult<T>>
    where
        T: DeserializeOwned,
        R: BufRead,
    {
        reader
            .lines()
            .enumerate()
            .filter_map(|(index, line)| match line {
                Err(err) => Some(Err(IndexError::Io(err))),
                Ok(line) if line.trim().is_empty() => None,
                Ok(line) => Some(
                    serde_json::from_str(&line).map_err(|e| IndexError::at_line(index + 1, &e)),
                ),
            })
    }
}
