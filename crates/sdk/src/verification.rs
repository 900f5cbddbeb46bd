use sha2::{Digest, Sha256};

/// Number of digits in a verification code.
pub const VERIFICATION_CODE_LEN: usize = 6;

/// Deterministic verification code for a pair of encrypted keys.
///
/// The code is the first eight bytes of a SHA-256 digest over
/// both length prefixed keys, read as a big endian integer and
/// reduced to six decimal digits.
pub fn verification_code(
    first_encrypted_key: &str,
    second_encrypted_key: &str,
) -> String {
    let mut hasher = Sha256::new();
    for key in [first_encrypted_key, second_encrypted_key] {
        hasher.update((key.len() as u64).to_be_bytes());
        hasher.update(key.as_bytes());
    }
    let digest = hasher.finalize();

    let mut seed = [0u8; 8];
    seed.copy_from_slice(&digest[..8]);
    let code = u64::from_be_bytes(seed) % 10u64.pow(VERIFICATION_CODE_LEN as u32);
    format!("{:0width$}", code, width = VERIFICATION_CODE_LEN)
}
