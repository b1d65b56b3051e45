// src/provider.rs
//! The modern AES provider — the object every adapter operation forwards to
//!
//! Holds the full cipher configuration (key, IV, sizes, mode, padding) and
//! hands out one-direction transform handles. Key material lives in
//! `Zeroizing` buffers and is actively cleared on disposal.

use rand::rngs::OsRng;
use rand::TryRngCore;
use zeroize::{Zeroize, Zeroizing};

use crate::consts::{
    AES_BLOCK_SIZES, AES_KEY_SIZES, DEFAULT_BLOCK_SIZE_BITS, DEFAULT_KEY_SIZE_BITS,
};
use crate::enums::{CipherMode, PaddingScheme};
use crate::error::ProviderError;
use crate::sizes::LegalSizes;
use crate::transform::{AesTransform, Direction};

/// AES cipher configuration object.
///
/// Not designed for concurrent mutation; callers serialize access to an
/// instance, as with any cipher configuration object.
pub struct AesProvider {
    key: Option<Zeroizing<Vec<u8>>>,
    iv: Option<Zeroizing<Vec<u8>>>,
    key_size_bits: usize,
    block_size_bits: usize,
    mode: CipherMode,
    padding: PaddingScheme,
    disposed: bool,
}

impl AesProvider {
    /// Fresh provider with the standard defaults: 256-bit key, 128-bit
    /// block, CBC mode, PKCS7 padding, no key material yet.
    pub fn new() -> Self {
        Self {
            key: None,
            iv: None,
            key_size_bits: DEFAULT_KEY_SIZE_BITS,
            block_size_bits: DEFAULT_BLOCK_SIZE_BITS,
            mode: CipherMode::default(),
            padding: PaddingScheme::default(),
            disposed: false,
        }
    }

    pub fn legal_key_sizes(&self) -> LegalSizes {
        AES_KEY_SIZES
    }

    pub fn legal_block_sizes(&self) -> LegalSizes {
        AES_BLOCK_SIZES
    }

    pub fn key_size(&self) -> usize {
        self.key_size_bits
    }

    /// Select a key size in bits. Discards any stored key, since it no
    /// longer matches the configuration.
    pub fn set_key_size(&mut self, bits: usize) -> Result<(), ProviderError> {
        self.ensure_live()?;
        if !AES_KEY_SIZES.contains(bits) {
            return Err(ProviderError::InvalidKeySize(bits));
        }
        self.key_size_bits = bits;
        self.key = None;
        Ok(())
    }

    pub fn block_size(&self) -> usize {
        self.block_size_bits
    }

    pub fn set_block_size(&mut self, bits: usize) -> Result<(), ProviderError> {
        self.ensure_live()?;
        if !AES_BLOCK_SIZES.contains(bits) {
            return Err(ProviderError::InvalidBlockSize(bits));
        }
        self.block_size_bits = bits;
        Ok(())
    }

    /// Owned copy of the current key; the copy zeroizes itself on drop
    pub fn key(&self) -> Result<Zeroizing<Vec<u8>>, ProviderError> {
        self.ensure_live()?;
        self.key.clone().ok_or(ProviderError::MissingKey)
    }

    /// Store a key. Its length must be a legal key size; the reported key
    /// size follows the stored key.
    pub fn set_key(&mut self, key: &[u8]) -> Result<(), ProviderError> {
        self.ensure_live()?;
        let bits = key.len() * 8;
        if key.len() % 8 != 0 || !AES_KEY_SIZES.contains(bits) {
            return Err(ProviderError::InvalidKeySize(bits));
        }
        self.key_size_bits = bits;
        self.key = Some(Zeroizing::new(key.to_vec()));
        Ok(())
    }

    pub fn iv(&self) -> Result<Zeroizing<Vec<u8>>, ProviderError> {
        self.ensure_live()?;
        self.iv.clone().ok_or(ProviderError::MissingIv)
    }

    pub fn set_iv(&mut self, iv: &[u8]) -> Result<(), ProviderError> {
        self.ensure_live()?;
        let expected = self.block_size_bits / 8;
        if iv.len() != expected {
            return Err(ProviderError::InvalidIvLength {
                expected,
                actual: iv.len(),
            });
        }
        self.iv = Some(Zeroizing::new(iv.to_vec()));
        Ok(())
    }

    pub fn mode(&self) -> CipherMode {
        self.mode
    }

    /// Mode support is checked when a transform is created, not here
    pub fn set_mode(&mut self, mode: CipherMode) -> Result<(), ProviderError> {
        self.ensure_live()?;
        self.mode = mode;
        Ok(())
    }

    pub fn padding(&self) -> PaddingScheme {
        self.padding
    }

    pub fn set_padding(&mut self, padding: PaddingScheme) -> Result<(), ProviderError> {
        self.ensure_live()?;
        self.padding = padding;
        Ok(())
    }

    /// Replace the stored key with fresh bytes from the OS random source
    pub fn generate_key(&mut self) -> Result<(), ProviderError> {
        self.ensure_live()?;
        let mut key = Zeroizing::new(vec![0u8; self.key_size_bits / 8]);
        OsRng
            .try_fill_bytes(key.as_mut_slice())
            .map_err(|e| ProviderError::Rng(e.to_string()))?;
        self.key = Some(key);
        Ok(())
    }

    /// Replace the stored IV with fresh bytes from the OS random source
    pub fn generate_iv(&mut self) -> Result<(), ProviderError> {
        self.ensure_live()?;
        let mut iv = Zeroizing::new(vec![0u8; self.block_size_bits / 8]);
        OsRng
            .try_fill_bytes(iv.as_mut_slice())
            .map_err(|e| ProviderError::Rng(e.to_string()))?;
        self.iv = Some(iv);
        Ok(())
    }

    /// Encryptor over the configured key and IV.
    ///
    /// Fails when key material (or, under CBC, the IV) has not been set or
    /// generated yet.
    pub fn create_encryptor(&self) -> Result<AesTransform, ProviderError> {
        self.transform_from_config(Direction::Encrypt)
    }

    /// Encryptor over caller-supplied key and IV; the configured key and IV
    /// are ignored entirely. Mode and padding still come from this instance.
    pub fn create_encryptor_with(
        &self,
        key: &[u8],
        iv: &[u8],
    ) -> Result<AesTransform, ProviderError> {
        self.transform_from_material(Direction::Encrypt, key, iv)
    }

    /// Decryptor over the configured key and IV
    pub fn create_decryptor(&self) -> Result<AesTransform, ProviderError> {
        self.transform_from_config(Direction::Decrypt)
    }

    /// Decryptor over caller-supplied key and IV
    pub fn create_decryptor_with(
        &self,
        key: &[u8],
        iv: &[u8],
    ) -> Result<AesTransform, ProviderError> {
        self.transform_from_material(Direction::Decrypt, key, iv)
    }

    /// Actively zeroize and release all key material. Idempotent; every
    /// subsequent operation fails with `Disposed`.
    pub fn dispose(&mut self) {
        if let Some(mut key) = self.key.take() {
            key.zeroize();
        }
        if let Some(mut iv) = self.iv.take() {
            iv.zeroize();
        }
        self.disposed = true;
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    fn ensure_live(&self) -> Result<(), ProviderError> {
        if self.disposed {
            return Err(ProviderError::Disposed);
        }
        Ok(())
    }

    fn check_mode(&self) -> Result<(), ProviderError> {
        match self.mode {
            CipherMode::Cbc | CipherMode::Ecb => Ok(()),
            other => Err(ProviderError::UnsupportedMode(other)),
        }
    }

    fn transform_from_config(&self, direction: Direction) -> Result<AesTransform, ProviderError> {
        self.ensure_live()?;
        self.check_mode()?;
        let key = self.key.clone().ok_or(ProviderError::MissingKey)?;
        let iv = match self.mode {
            CipherMode::Ecb => None,
            _ => Some(self.iv.clone().ok_or(ProviderError::MissingIv)?),
        };
        Ok(AesTransform::new(
            direction,
            key,
            iv,
            self.mode,
            self.padding,
        ))
    }

    fn transform_from_material(
        &self,
        direction: Direction,
        key: &[u8],
        iv: &[u8],
    ) -> Result<AesTransform, ProviderError> {
        self.ensure_live()?;
        self.check_mode()?;
        let bits = key.len() * 8;
        if key.len() % 8 != 0 || !AES_KEY_SIZES.contains(bits) {
            return Err(ProviderError::InvalidKeySize(bits));
        }
        let expected = self.block_size_bits / 8;
        if iv.len() != expected {
            return Err(ProviderError::InvalidIvLength {
                expected,
                actual: iv.len(),
            });
        }
        Ok(AesTransform::new(
            direction,
            Zeroizing::new(key.to_vec()),
            Some(Zeroizing::new(iv.to_vec())),
            self.mode,
            self.padding,
        ))
    }
}

impl Default for AesProvider {
    fn default() -> Self {
        Self::new()
    }
}
