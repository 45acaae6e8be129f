use anyhow::{bail, Result};

/// The pieces of one serialized response: the status line, the header
/// lines, and the raw body bytes.
#[derive(Debug, PartialEq, Eq)]
pub struct WireParts {
    pub status_line: String,
    pub headers: Vec<String>,
    pub body: Vec<u8>,
}

/// Splits raw wire bytes at the blank line into head and body. Fails when
/// the head terminator is missing or the head is not utf-8.
pub fn split_wire(raw: &[u8]) -> Result<WireParts> {
    let boundary = match raw.windows(4).position(|window| window == b"\r\n\r\n") {
        Some(index) => index,
        None => bail!("missing the blank line after the head"),
    };

    let head = std::str::from_utf8(&raw[..boundary])?;
    let mut lines = head.split("\r\n");
    // split always yields at least one item
    let status_line = lines.next().unwrap().to_string();

    Ok(WireParts {
        status_line,
        headers: lines.map(str::to_string).collect(),
        body: raw[boundary + 4..].to_vec(),
    })
}
