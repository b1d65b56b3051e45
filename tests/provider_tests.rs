// tests/provider_tests.rs
use rijndael_compat::{AesProvider, CipherMode, PaddingScheme, ProviderError};

fn sample_plaintext() -> Vec<u8> {
    (0u8..37).map(|i| i.wrapping_mul(7).wrapping_add(13)).collect()
}

#[test]
fn test_provider_defaults() {
    let aes = AesProvider::new();

    assert_eq!(aes.key_size(), 256);
    assert_eq!(aes.block_size(), 128);
    assert_eq!(aes.mode(), CipherMode::Cbc);
    assert_eq!(aes.padding(), PaddingScheme::Pkcs7);
    assert!(!aes.is_disposed());
}

#[test]
fn test_cbc_aes128_known_vector() {
    // NIST SP 800-38A, F.2.1 CBC-AES128.Encrypt, first block
    let key = hex::decode("2b7e151628aed2a6abf7158809cf4f3c").unwrap();
    let iv = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
    let plaintext = hex::decode("6bc1bee22e409f96e93d7e117393172a").unwrap();
    let expected = hex::decode("7649abac8119b246cee98e9b12e9197d").unwrap();

    let mut aes = AesProvider::new();
    aes.set_padding(PaddingScheme::None).unwrap();

    let ciphertext = aes
        .create_encryptor_with(&key, &iv)
        .unwrap()
        .process(&plaintext)
        .unwrap();
    assert_eq!(ciphertext, expected);

    let decrypted = aes
        .create_decryptor_with(&key, &iv)
        .unwrap()
        .process(&ciphertext)
        .unwrap();
    assert_eq!(decrypted, plaintext);
}

#[test]
fn test_ecb_mode_needs_no_iv() {
    let mut aes = AesProvider::new();
    aes.set_mode(CipherMode::Ecb).unwrap();
    aes.generate_key().unwrap();

    let plaintext = sample_plaintext();
    let ciphertext = aes.create_encryptor().unwrap().process(&plaintext).unwrap();
    let decrypted = aes.create_decryptor().unwrap().process(&ciphertext).unwrap();

    assert_eq!(decrypted, plaintext);
}

#[test]
fn test_all_legal_key_lengths_roundtrip() {
    for key_bits in [128, 192, 256] {
        let mut aes = AesProvider::new();
        aes.set_key_size(key_bits).unwrap();
        aes.generate_key().unwrap();
        aes.generate_iv().unwrap();
        assert_eq!(aes.key().unwrap().len(), key_bits / 8);

        let plaintext = sample_plaintext();
        let ciphertext = aes.create_encryptor().unwrap().process(&plaintext).unwrap();
        let decrypted = aes.create_decryptor().unwrap().process(&ciphertext).unwrap();
        assert_eq!(decrypted, plaintext, "roundtrip failed for {key_bits}-bit key");
    }
}

#[test]
fn test_none_padding_requires_block_aligned_input() {
    let mut aes = AesProvider::new();
    aes.set_padding(PaddingScheme::None).unwrap();
    aes.generate_key().unwrap();
    aes.generate_iv().unwrap();

    let err = aes.create_encryptor().unwrap().process(&sample_plaintext());
    assert!(matches!(err, Err(ProviderError::InvalidDataLength(37))));

    // An aligned message passes through without growing
    let aligned = vec![0x42u8; 32];
    let ciphertext = aes.create_encryptor().unwrap().process(&aligned).unwrap();
    assert_eq!(ciphertext.len(), 32);
}

#[test]
fn test_zeros_padding_roundtrip() {
    let mut aes = AesProvider::new();
    aes.set_padding(PaddingScheme::Zeros).unwrap();
    aes.generate_key().unwrap();
    aes.generate_iv().unwrap();

    // Plaintext must not end in zero bytes, zero padding is stripped blindly
    let plaintext = b"zero padded message, ends nonzero!".to_vec();
    let ciphertext = aes.create_encryptor().unwrap().process(&plaintext).unwrap();
    let decrypted = aes.create_decryptor().unwrap().process(&ciphertext).unwrap();

    assert_eq!(decrypted, plaintext);
}

#[test]
fn test_ansix923_and_iso10126_roundtrip() {
    for padding in [PaddingScheme::AnsiX923, PaddingScheme::Iso10126] {
        let mut aes = AesProvider::new();
        aes.set_padding(padding).unwrap();
        aes.generate_key().unwrap();
        aes.generate_iv().unwrap();

        let plaintext = sample_plaintext();
        let ciphertext = aes.create_encryptor().unwrap().process(&plaintext).unwrap();
        let decrypted = aes.create_decryptor().unwrap().process(&ciphertext).unwrap();
        assert_eq!(decrypted, plaintext, "roundtrip failed for {padding:?}");
    }
}

#[test]
fn test_decrypt_with_wrong_key_does_not_yield_plaintext() {
    let mut aes = AesProvider::new();
    aes.generate_key().unwrap();
    aes.generate_iv().unwrap();

    let plaintext = sample_plaintext();
    let ciphertext = aes.create_encryptor().unwrap().process(&plaintext).unwrap();

    aes.generate_key().unwrap();
    match aes.create_decryptor().unwrap().process(&ciphertext) {
        Ok(garbage) => assert_ne!(garbage, plaintext),
        Err(ProviderError::Padding) => {}
        Err(other) => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_truncated_ciphertext_rejected() {
    let mut aes = AesProvider::new();
    aes.generate_key().unwrap();
    aes.generate_iv().unwrap();

    let ciphertext = aes
        .create_encryptor()
        .unwrap()
        .process(&sample_plaintext())
        .unwrap();

    let err = aes.create_decryptor().unwrap().process(&ciphertext[..30]);
    assert!(matches!(err, Err(ProviderError::InvalidDataLength(30))));
}

#[test]
fn test_invalid_key_lengths_rejected() {
    let mut aes = AesProvider::new();

    for len in [0usize, 8, 20, 33, 64] {
        let err = aes.set_key(&vec![0u8; len]);
        assert!(
            matches!(err, Err(ProviderError::InvalidKeySize(_))),
            "{len}-byte key should be rejected"
        );
    }
}

#[test]
fn test_invalid_key_size_values_rejected() {
    let mut aes = AesProvider::new();

    for bits in [0usize, 64, 160, 512] {
        let err = aes.set_key_size(bits);
        assert!(matches!(err, Err(ProviderError::InvalidKeySize(b)) if b == bits));
    }
}

#[test]
fn test_explicit_transform_material_is_validated() {
    let aes = AesProvider::new();

    let err = aes.create_encryptor_with(&[0u8; 20], &[0u8; 16]);
    assert!(matches!(err, Err(ProviderError::InvalidKeySize(160))));

    let err = aes.create_encryptor_with(&[0u8; 32], &[0u8; 12]);
    assert!(matches!(
        err,
        Err(ProviderError::InvalidIvLength {
            expected: 16,
            actual: 12
        })
    ));
}

#[test]
fn test_generated_iv_matches_block_size() {
    let mut aes = AesProvider::new();
    aes.generate_iv().unwrap();
    assert_eq!(aes.iv().unwrap().len(), 16);
}

#[test]
fn test_disposed_provider_refuses_everything() {
    let mut aes = AesProvider::new();
    aes.generate_key().unwrap();
    aes.dispose();

    assert!(aes.is_disposed());
    assert!(matches!(aes.key(), Err(ProviderError::Disposed)));
    assert!(matches!(aes.generate_key(), Err(ProviderError::Disposed)));
    assert!(matches!(aes.set_key(&[0u8; 32]), Err(ProviderError::Disposed)));
    assert!(matches!(
        aes.create_decryptor(),
        Err(ProviderError::Disposed)
    ));
}
