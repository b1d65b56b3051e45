// src/lib.rs
//! rijndael-compat — the legacy Rijndael cipher surface over a modern AES backend
//!
//! Features:
//! - Drop-in Rijndael-style configuration object (key/IV/mode/padding properties)
//! - Every operation forwarded to a RustCrypto AES provider
//! - Block sizes 192/256 rejected up front (unsupported by the backend)
//! - Zeroizing key material, explicit disposal

pub mod consts;
pub mod enums;
pub mod error;
pub mod provider;
pub mod rijndael;
pub mod sizes;
pub mod transform;

// Re-export everything users need at the crate root
pub use enums::{CipherMode, PaddingScheme};
pub use error::{CipherError, ProviderError, Result};
pub use provider::AesProvider;
pub use rijndael::Rijndael;
pub use sizes::LegalSizes;
pub use transform::AesTransform;
