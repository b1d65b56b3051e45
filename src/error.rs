// src/error.rs
//! Public error types for the entire crate

use thiserror::Error;

use crate::enums::CipherMode;

/// Everything the AES provider itself can reject.
///
/// These pass through the `Rijndael` adapter untranslated.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("invalid key size: {0} bits")]
    InvalidKeySize(usize),

    #[error("invalid block size: {0} bits")]
    InvalidBlockSize(usize),

    #[error("invalid IV length: expected {expected} bytes, got {actual}")]
    InvalidIvLength { expected: usize, actual: usize },

    #[error("no key material has been set or generated")]
    MissingKey,

    #[error("no IV has been set or generated")]
    MissingIv,

    #[error("cipher mode {0:?} is not supported by this provider")]
    UnsupportedMode(CipherMode),

    #[error("data length {0} is not a multiple of the 16-byte block size")]
    InvalidDataLength(usize),

    #[error("padding check failed during decryption")]
    Padding,

    #[error("secure random source failed: {0}")]
    Rng(String),

    #[error("cipher instance has been disposed")]
    Disposed,
}

/// Error surface of the `Rijndael` compatibility adapter.
///
/// `UnsupportedBlockSize` is the one adapter-specific condition, raised
/// before anything is forwarded; every other failure is the provider's own.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("Rijndael block sizes 192 and 256 are not supported on this platform (requested {0})")]
    UnsupportedBlockSize(usize),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

pub type Result<T> = std::result::Result<T, CipherError>;
