// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for all #[derive(...)] enums that represent
//! user-visible choices: block cipher modes, padding schemes, etc.

use serde::{Deserialize, Serialize};

/// Block cipher chaining modes from the legacy Rijndael surface.
///
/// Only `Cbc` and `Ecb` can actually produce a transform on this provider;
/// the remaining variants are accepted by the setter (the legacy contract
/// allowed storing them) and rejected at transform-creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[non_exhaustive]
pub enum CipherMode {
    #[default]
    Cbc,
    Ecb,
    Cfb,
    Ofb,
    Cts,
}

/// Padding schemes from the legacy Rijndael surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[non_exhaustive]
pub enum PaddingScheme {
    #[default]
    Pkcs7,
    None,
    Zeros,
    AnsiX923,
    Iso10126,
}
