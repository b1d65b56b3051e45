// src/rijndael.rs
//! Rijndael compatibility adapter
//!
//! Presents the historical Rijndael configuration surface while forwarding
//! every operation to an [`AesProvider`]. The adapter does no cryptographic
//! work of its own; the one thing it adds is the up-front rejection of the
//! two legacy block sizes (192 and 256) the provider cannot honor.
//!
//! The legacy contract advertised block sizes 128–256 in steps of 64
//! ([`crate::consts::LEGACY_BLOCK_SIZES`]); on this backend the enforced set
//! is narrowed to exactly 128 bits. Key sizes are deliberately left at the
//! full 128–256 range — only the block-size table is narrowed.

use zeroize::Zeroizing;

use crate::consts::AES_BLOCK_SIZES;
use crate::enums::{CipherMode, PaddingScheme};
use crate::error::{CipherError, Result};
use crate::provider::AesProvider;
use crate::sizes::LegalSizes;
use crate::transform::AesTransform;

/// Legacy Rijndael cipher object backed by AES
pub struct Rijndael {
    inner: AesProvider,
}

impl Rijndael {
    /// Zero-argument factory, the construction path legacy callers expect.
    ///
    /// Defaults match the historical contract: 256-bit key, 128-bit block.
    pub fn create() -> Self {
        Self {
            inner: AesProvider::new(),
        }
    }

    pub fn block_size(&self) -> usize {
        self.inner.block_size()
    }

    /// Set the block size in bits.
    ///
    /// 192 and 256 were legal under the original Rijndael algorithm but are
    /// not supported here; they fail with [`CipherError::UnsupportedBlockSize`]
    /// before anything reaches the provider. Any other out-of-range value
    /// gets the provider's ordinary invalid-block-size error.
    pub fn set_block_size(&mut self, bits: usize) -> Result<()> {
        if bits == 192 || bits == 256 {
            return Err(CipherError::UnsupportedBlockSize(bits));
        }
        self.inner.set_block_size(bits)?;
        Ok(())
    }

    pub fn key_size(&self) -> usize {
        self.inner.key_size()
    }

    pub fn set_key_size(&mut self, bits: usize) -> Result<()> {
        self.inner.set_key_size(bits)?;
        Ok(())
    }

    pub fn key(&self) -> Result<Zeroizing<Vec<u8>>> {
        Ok(self.inner.key()?)
    }

    pub fn set_key(&mut self, key: &[u8]) -> Result<()> {
        self.inner.set_key(key)?;
        Ok(())
    }

    pub fn iv(&self) -> Result<Zeroizing<Vec<u8>>> {
        Ok(self.inner.iv()?)
    }

    pub fn set_iv(&mut self, iv: &[u8]) -> Result<()> {
        self.inner.set_iv(iv)?;
        Ok(())
    }

    pub fn mode(&self) -> CipherMode {
        self.inner.mode()
    }

    pub fn set_mode(&mut self, mode: CipherMode) -> Result<()> {
        self.inner.set_mode(mode)?;
        Ok(())
    }

    pub fn padding(&self) -> PaddingScheme {
        self.inner.padding()
    }

    pub fn set_padding(&mut self, padding: PaddingScheme) -> Result<()> {
        self.inner.set_padding(padding)?;
        Ok(())
    }

    /// Key sizes as the provider reports them — the full legacy range
    pub fn legal_key_sizes(&self) -> LegalSizes {
        self.inner.legal_key_sizes()
    }

    /// Block sizes actually accepted: the narrowed single-value table
    pub fn legal_block_sizes(&self) -> LegalSizes {
        AES_BLOCK_SIZES
    }

    /// Encryptor over the configured key and IV
    pub fn create_encryptor(&self) -> Result<AesTransform> {
        Ok(self.inner.create_encryptor()?)
    }

    /// Encryptor over explicit key and IV, ignoring the configured ones
    pub fn create_encryptor_with(&self, key: &[u8], iv: &[u8]) -> Result<AesTransform> {
        Ok(self.inner.create_encryptor_with(key, iv)?)
    }

    /// Decryptor over the configured key and IV
    pub fn create_decryptor(&self) -> Result<AesTransform> {
        Ok(self.inner.create_decryptor()?)
    }

    /// Decryptor over explicit key and IV, ignoring the configured ones
    pub fn create_decryptor_with(&self, key: &[u8], iv: &[u8]) -> Result<AesTransform> {
        Ok(self.inner.create_decryptor_with(key, iv)?)
    }

    /// Populate the IV from the provider's secure random source
    pub fn generate_iv(&mut self) -> Result<()> {
        self.inner.generate_iv()?;
        Ok(())
    }

    /// Populate the key from the provider's secure random source
    pub fn generate_key(&mut self) -> Result<()> {
        self.inner.generate_key()?;
        Ok(())
    }

    /// Release the provider's resources; key material is zeroized first.
    ///
    /// Idempotent. Any operation after disposal fails.
    pub fn dispose(&mut self) {
        self.inner.dispose();
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.is_disposed()
    }
}

impl Default for Rijndael {
    fn default() -> Self {
        Self::create()
    }
}
