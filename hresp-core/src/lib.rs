#[macro_use]
extern crate lazy_static;

#[macro_use]
pub mod test_utils;

mod errors;
mod response;
mod sink;
mod status;

pub use errors::{Error, Result};
pub use response::content::{Content, STREAM_CHUNK_SIZE};
pub use response::Response;
pub use sink::{Flow, Sink, WireSink};
pub use status::reason_phrase;
