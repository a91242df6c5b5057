use thiserror::Error;

/// Errors surfaced while loading a raw binary image into the bus. Once the
/// CPU begins stepping there is nothing in this crate that can fail -- see
/// the error handling design notes in SPEC_FULL.md.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read ROM image: {0}")]
    Io(#[from] std::io::Error),

    #[error("ROM image is {len} bytes, but the address space only holds 65536")]
    ImageTooLarge { len: usize },
}
