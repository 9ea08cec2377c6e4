mod sample;

#[cfg(not(target_arch = "wasm32"))]
mod document_io;

pub use sample::{SAMPLE_WEIGH_INS, sample_input_json, sample_records};

#[cfg(not(target_arch = "wasm32"))]
pub use document_io::read_document;
