//! Line-oriented device feed.
//!
//! A device bridge (or a test script) writes one notification per line:
//!
//! ```text
//! heel 1500
//! toe 0xdc05
//! # comments and blank lines are skipped
//! ```
//!
//! Plain payloads are passed on as text; `0x`-prefixed payloads are hex
//! encoded raw bytes.

use super::{EventSender, SensorEvent};
use crate::error::{PlantarError, Result};
use crate::sensor::SensorId;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::thread::{self, JoinHandle};

/// Parse one feed line. Blank and comment lines yield `None`.
pub fn parse_feed_line(line: &str) -> Option<Result<SensorEvent>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let (name, payload) = line
        .split_once(char::is_whitespace)
        .unwrap_or((line, ""));

    Some(parse_parts(name, payload.trim()))
}

fn parse_parts(name: &str, payload: &str) -> Result<SensorEvent> {
    let sensor: SensorId = name.parse()?;
    let payload = match payload.strip_prefix("0x").or_else(|| payload.strip_prefix("0X")) {
        Some(hex) => decode_hex(hex)?,
        None => payload.as_bytes().to_vec(),
    };
    Ok(SensorEvent::Notification { sensor, payload })
}

fn decode_hex(hex: &str) -> Result<Vec<u8>> {
    if hex.len() % 2 != 0 {
        return Err(PlantarError::decode(format!("odd-length hex payload '{}'", hex)));
    }
    (0..hex.len())
        .step_by(2)
        .map(|i| {
            hex.get(i..i + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(|| PlantarError::decode(format!("invalid hex payload '{}'", hex)))
        })
        .collect()
}

/// Read notifications from `path` on a background thread.
///
/// The thread ends at end of file, on a read error, or once the receiving
/// side has gone away. Malformed lines are logged and skipped.
pub fn spawn_file_feed(path: &Path, tx: EventSender) -> Result<JoinHandle<()>> {
    let file = File::open(path).map_err(|e| PlantarError::feed_open(path.to_path_buf(), e))?;
    let source = path.display().to_string();

    let handle = thread::Builder::new()
        .name("plantar-feed".to_string())
        .spawn(move || {
            tracing::info!(%source, "feed opened");
            for (lineno, line) in BufReader::new(file).lines().enumerate() {
                let line = match line {
                    Ok(line) => line,
                    Err(e) => {
                        tracing::error!(%source, "feed read failed: {}", e);
                        break;
                    }
                };
                match parse_feed_line(&line) {
                    Some(Ok(event)) => {
                        if tx.send(event).is_err() {
                            break;
                        }
                    }
                    Some(Err(e)) => tracing::warn!(%source, line = lineno + 1, "skipping: {}", e),
                    None => {}
                }
            }
            tracing::info!(%source, "feed closed");
        })?;

    Ok(handle)
}
