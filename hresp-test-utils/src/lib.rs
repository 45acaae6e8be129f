mod wire;
mod write_test_file;

pub use wire::{split_wire, WireParts};
pub use write_test_file::write_test_file;
