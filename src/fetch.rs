use std::io::{BufRead, BufReader, Read};
use std::time::Duration;

use tracing::info;

use crate::error::{ImportError, Result};

const READ_TIMEOUT_SECS: u64 = 60;

/// Download the names list and return its lines as a lazy stream.
///
/// One attempt, no retries. A non-success status or an unreachable host
/// fails the run before anything is written locally.
pub fn fetch_lines(url: &str) -> Result<impl Iterator<Item = Result<String>>> {
    info!("Fetching names list: {}", url);
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(READ_TIMEOUT_SECS))
        .build()?;
    let response = client.get(url).send()?.error_for_status()?;
    Ok(read_lines(response))
}

/// Stream lines out of a reader without buffering the whole body.
fn read_lines<R: Read>(reader: R) -> impl Iterator<Item = Result<String>> {
    BufReader::new(reader)
        .lines()
        .map(|line| line.map_err(ImportError::from))
}
