// src/transform.rs
//! Opaque one-direction transform handles
//!
//! A handle captures key, IV, mode and padding at creation time and never
//! looks back at the configuration object that produced it. Key material is
//! zeroized when the handle is dropped.

use aes::{Aes128, Aes192, Aes256};
use cipher::block_padding::{AnsiX923, Iso10126, NoPadding, Pkcs7, ZeroPadding};
use cipher::{BlockCipher, BlockDecryptMut, BlockEncryptMut, KeyInit, KeyIvInit};
use zeroize::Zeroizing;

use crate::consts::AES_BLOCK_SIZE_BYTES;
use crate::enums::{CipherMode, PaddingScheme};
use crate::error::ProviderError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Encrypt,
    Decrypt,
}

/// A single-direction AES transform with fixed key material.
///
/// `process` is a one-shot operation over the whole message; the handle is
/// stateless between calls and may be reused for independent messages.
pub struct AesTransform {
    direction: Direction,
    key: Zeroizing<Vec<u8>>,
    iv: Option<Zeroizing<Vec<u8>>>,
    mode: CipherMode,
    padding: PaddingScheme,
}

impl AesTransform {
    pub(crate) fn new(
        direction: Direction,
        key: Zeroizing<Vec<u8>>,
        iv: Option<Zeroizing<Vec<u8>>>,
        mode: CipherMode,
        padding: PaddingScheme,
    ) -> Self {
        Self {
            direction,
            key,
            iv,
            mode,
            padding,
        }
    }

    /// Run the transform over `data` and return the output bytes
    pub fn process(&self, data: &[u8]) -> Result<Vec<u8>, ProviderError> {
        match self.direction {
            Direction::Encrypt => {
                // Only padded schemes may round the message up to a block
                if self.padding == PaddingScheme::None && data.len() % AES_BLOCK_SIZE_BYTES != 0 {
                    return Err(ProviderError::InvalidDataLength(data.len()));
                }
                match self.key.len() {
                    16 => self.encrypt_blocks::<Aes128>(data),
                    24 => self.encrypt_blocks::<Aes192>(data),
                    32 => self.encrypt_blocks::<Aes256>(data),
                    n => Err(ProviderError::InvalidKeySize(n * 8)),
                }
            }
            Direction::Decrypt => {
                if data.len() % AES_BLOCK_SIZE_BYTES != 0 {
                    return Err(ProviderError::InvalidDataLength(data.len()));
                }
                match self.key.len() {
                    16 => self.decrypt_blocks::<Aes128>(data),
                    24 => self.decrypt_blocks::<Aes192>(data),
                    32 => self.decrypt_blocks::<Aes256>(data),
                    n => Err(ProviderError::InvalidKeySize(n * 8)),
                }
            }
        }
    }

    fn encrypt_blocks<C>(&self, data: &[u8]) -> Result<Vec<u8>, ProviderError>
    where
        C: BlockCipher + BlockEncryptMut + KeyInit,
    {
        match self.mode {
            CipherMode::Cbc => {
                let iv = self.iv.as_deref().ok_or(ProviderError::MissingIv)?;
                let enc = cbc::Encryptor::<C>::new_from_slices(&self.key, iv).map_err(|_| {
                    ProviderError::InvalidIvLength {
                        expected: AES_BLOCK_SIZE_BYTES,
                        actual: iv.len(),
                    }
                })?;
                Ok(encrypt_padded(enc, self.padding, data))
            }
            CipherMode::Ecb => {
                let enc = ecb::Encryptor::<C>::new_from_slice(&self.key)
                    .map_err(|_| ProviderError::InvalidKeySize(self.key.len() * 8))?;
                Ok(encrypt_padded(enc, self.padding, data))
            }
            other => Err(ProviderError::UnsupportedMode(other)),
        }
    }

    fn decrypt_blocks<C>(&self, data: &[u8]) -> Result<Vec<u8>, ProviderError>
    where
        C: BlockCipher + BlockDecryptMut + KeyInit,
    {
        match self.mode {
            CipherMode::Cbc => {
                let iv = self.iv.as_deref().ok_or(ProviderError::MissingIv)?;
                let dec = cbc::Decryptor::<C>::new_from_slices(&self.key, iv).map_err(|_| {
                    ProviderError::InvalidIvLength {
                        expected: AES_BLOCK_SIZE_BYTES,
                        actual: iv.len(),
                    }
                })?;
                decrypt_padded(dec, self.padding, data)
            }
            CipherMode::Ecb => {
                let dec = ecb::Decryptor::<C>::new_from_slice(&self.key)
                    .map_err(|_| ProviderError::InvalidKeySize(self.key.len() * 8))?;
                decrypt_padded(dec, self.padding, data)
            }
            other => Err(ProviderError::UnsupportedMode(other)),
        }
    }
}

fn encrypt_padded<M>(enc: M, padding: PaddingScheme, msg: &[u8]) -> Vec<u8>
where
    M: BlockEncryptMut,
{
    match padding {
        PaddingScheme::Pkcs7 => enc.encrypt_padded_vec_mut::<Pkcs7>(msg),
        PaddingScheme::None => enc.encrypt_padded_vec_mut::<NoPadding>(msg),
        PaddingScheme::Zeros => enc.encrypt_padded_vec_mut::<ZeroPadding>(msg),
        PaddingScheme::AnsiX923 => enc.encrypt_padded_vec_mut::<AnsiX923>(msg),
        PaddingScheme::Iso10126 => enc.encrypt_padded_vec_mut::<Iso10126>(msg),
    }
}

fn decrypt_padded<M>(dec: M, padding: PaddingScheme, data: &[u8]) -> Result<Vec<u8>, ProviderError>
where
    M: BlockDecryptMut,
{
    let out = match padding {
        PaddingScheme::Pkcs7 => dec.decrypt_padded_vec_mut::<Pkcs7>(data),
        PaddingScheme::None => dec.decrypt_padded_vec_mut::<NoPadding>(data),
        PaddingScheme::Zeros => dec.decrypt_padded_vec_mut::<ZeroPadding>(data),
        PaddingScheme::AnsiX923 => dec.decrypt_padded_vec_mut::<AnsiX923>(data),
        PaddingScheme::Iso10126 => dec.decrypt_padded_vec_mut::<Iso10126>(data),
    };
    out.map_err(|_| ProviderError::Padding)
}
