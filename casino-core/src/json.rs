//! Reading one JSON document from a stream and writing one back.
//!
//! Output is fully encoded before the first byte reaches the writer, so a failed encode never
//! leaves partial output behind.
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::{Read, Write};
use tracing::debug;

#[derive(Debug, derive_more::Display)]
pub enum JsonError {
    #[display(fmt = "decode: {}", _0)]
    Decode(serde_json::Error),
    #[display(fmt = "encode: {}", _0)]
    Encode(serde_json::Error),
}

impl std::error::Error for JsonError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            JsonError::Decode(e) | JsonError::Encode(e) => Some(e),
        }
    }
}

/// Read the whole stream and decode it as a single `T`.
pub fn read_json<T: DeserializeOwned, R: Read>(mut r: R) -> Result<T, JsonError> {
    let mut input = String::new();
    r.read_to_string(&mut input)
        .map_err(|e| JsonError::Decode(serde_json::Error::io(e)))?;
    debug!(bytes = input.len(), "read input");
    serde_json::from_str(&input).map_err(JsonError::Decode)
}

/// Encode `value` followed by a newline and write it out in one go.
pub fn write_json<T: Serialize + ?Sized, W: Write>(mut w: W, value: &T) -> Result<(), JsonError> {
    let mut buf = serde_json::to_vec(value).map_err(JsonError::Encode)?;
    buf.push(b'\n');
    w.write_all(&buf)
        .and_then(|_| w.flush())
        .map_err(|e| JsonError::Encode(serde_json::Error::io(e)))?;
    debug!(bytes = buf.len(), "wrote output");
    Ok(())
}
