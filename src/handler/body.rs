//! Request body accumulation
//!
//! Drains a body frame by frame until the stream reports no more data, so
//! handlers never see a partial body.

use http_body_util::BodyExt;
use hyper::body::{Body, Bytes};
use std::fmt::Display;

#[derive(Debug, PartialEq, Eq)]
pub enum BodyError {
    /// Accumulated data exceeded the configured limit
    TooLarge,
    /// The underlying stream failed mid-read
    Read(String),
}

/// Read the whole body, failing once more than `limit` bytes have arrived.
///
/// Trailer frames are skipped.
pub async fn read_full_body<B>(mut body: B, limit: u64) -> Result<Bytes, BodyError>
where
    B: Body<Data = Bytes> + Unpin,
    B::Error: Display,
{
    let mut buf: Vec<u8> = Vec::new();
    let mut more_body = true;

    while more_body {
        match body.frame().await {
            Some(Ok(frame)) => {
                if let Some(chunk) = frame.data_ref() {
                    let total = u64::try_from(buf.len() + chunk.len()).unwrap_or(u64::MAX);
                    if total > limit {
                        return Err(BodyError::TooLarge);
                    }
                    buf.extend_from_slice(chunk);
                }
            }
            Some(Err(e)) => return Err(BodyError::Read(e.to_string())),
            None => more_body = false,
        }
    }

    Ok(Bytes::from(buf))
}
