// src/consts.rs
//! Shared constants — defaults and legal-size tables

use crate::sizes::LegalSizes;

/// Key size selected on construction (bits)
pub const DEFAULT_KEY_SIZE_BITS: usize = 256;

/// Block size selected on construction (bits)
pub const DEFAULT_BLOCK_SIZE_BITS: usize = 128;

/// AES block length in bytes — fixed for every key size
pub const AES_BLOCK_SIZE_BYTES: usize = 16;

/// Key sizes the AES provider accepts
pub const AES_KEY_SIZES: LegalSizes = LegalSizes::new(128, 256, 64);

/// Block sizes the AES provider accepts — exactly one
pub const AES_BLOCK_SIZES: LegalSizes = LegalSizes::new(128, 128, 0);

/// Block sizes the historical Rijndael contract advertised.
/// Informational only: 192 and 256 are rejected before reaching the provider.
pub const LEGACY_BLOCK_SIZES: LegalSizes = LegalSizes::new(128, 256, 64);

/// Key sizes the historical Rijndael contract advertised.
/// Identical to the provider's table, so the key-size surface is untouched.
pub const LEGACY_KEY_SIZES: LegalSizes = LegalSizes::new(128, 256, 64);
