use std::fmt;
use std::io::Read;

/// Number of bytes read from a streamed content source per sink write.
pub const STREAM_CHUNK_SIZE: usize = 8192;

/// Body content of a response.
///
/// A response holds exactly one of these at a time: nothing, a payload that
/// is already in memory, or a source that is read in [`STREAM_CHUNK_SIZE`]
/// chunks during emission and dropped once it is exhausted.
pub enum Content {
    Empty,
    Plain(Vec<u8>),
    Stream(Box<dyn Read>),
}

impl Content {
    pub fn stream<R: Read + 'static>(source: R) -> Self {
        Content::Stream(Box::new(source))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Content::Empty)
    }

    /// The in-memory payload, if that is what this content holds.
    pub fn as_plain(&self) -> Option<&[u8]> {
        match self {
            Content::Plain(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Appends bytes to the payload.
    ///
    /// Empty content becomes a fresh payload. A streamed source cannot be
    /// appended to; the handle is dropped and the appended bytes become the
    /// new payload.
    pub fn append(&mut self, chunk: &[u8]) {
        match self {
            Content::Plain(bytes) => bytes.extend_from_slice(chunk),
            _ => *self = Content::Plain(chunk.to_vec()),
        }
    }
}

impl Default for Content {
    fn default() -> Self {
        Content::Empty
    }
}

impl fmt::Debug for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Content::Empty => f.write_str("Empty"),
            Content::Plain(bytes) => write!(f, "Plain({} bytes)", bytes.len()),
            Content::Stream(_) => f.write_str("Stream(..)"),
        }
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Plain(text.as_bytes().to_vec())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::Plain(text.into_bytes())
    }
}

impl From<&[u8]> for Content {
    fn from(bytes: &[u8]) -> Self {
        Content::Plain(bytes.to_vec())
    }
}

impl From<Vec<u8>> for Content {
    fn from(bytes: Vec<u8>) -> Self {
        Content::Plain(bytes)
    }
}
