//! Output descriptors for the two key multisig wallet.
//!
//! Checksums follow the descriptor checksum algorithm from
//! BIP-380.
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Characters allowed in a descriptor body, in checksum symbol order.
const INPUT_CHARSET: &str = "0123456789()[],'/*abcdefgh@:$%{}\
    IJKLMNOPQRSTUVWXYZ&+-.;<=>?!^_|~\
    ijklmnopqrstuvwxyzABCDEFGH`#\"\\ ";

/// Characters used to write a checksum.
const CHECKSUM_CHARSET: &[u8] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

const GENERATOR: [u64; 5] = [
    0xf5dee51989,
    0xa9fdca3312,
    0x1bab10e32d,
    0x3706b1677a,
    0x644d626ffd,
];

/// Length of a descriptor checksum.
pub const CHECKSUM_LEN: usize = 8;

/// Length of a key fingerprint in hex characters.
pub const FINGERPRINT_LEN: usize = 8;

/// Spending script variants in priority order.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DescriptorVariant {
    /// Nested segwit multisig, change chain.
    NestedChange,
    /// Nested segwit multisig, external chain.
    NestedExternal,
    /// Native segwit multisig, change chain.
    NativeChange,
    /// Native segwit multisig, external chain.
    NativeExternal,
}

impl DescriptorVariant {
    /// All variants in the order they appear in a descriptor set.
    pub const ALL: [DescriptorVariant; 4] = [
        Self::NestedChange,
        Self::NestedExternal,
        Self::NativeChange,
        Self::NativeExternal,
    ];

    /// Descriptor body for a pair of fingerprints.
    pub fn body(&self, first: &str, second: &str) -> String {
        match self {
            Self::NestedChange => format!(
                "sh(wsh(multi(2, {first}/1'/1'/0/*, {second}/1'/1'/0/*)))"
            ),
            Self::NestedExternal => format!(
                "sh(wsh(multi(2, {first}/1'/1'/1/*, {second}/1'/1'/1/*)))"
            ),
            Self::NativeChange => format!(
                "wsh(multi(2, {first}/1'/1'/0/*, {second}/1'/1'/0/*))"
            ),
            Self::NativeExternal => format!(
                "wsh(multi(2, {first}/1'/1'/1/*, {second}/1'/1'/1/*))"
            ),
        }
    }
}

/// Ordered list of checksummed descriptors.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DescriptorSet(Vec<String>);

impl DescriptorSet {
    /// Number of descriptors.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Determine if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate the descriptors in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|s| s.as_str())
    }

    /// Verify the checksum of every descriptor.
    pub fn verify(&self) -> Result<()> {
        for descriptor in &self.0 {
            verify_descriptor(descriptor)?;
        }
        Ok(())
    }
}

impl From<DescriptorSet> for Vec<String> {
    fn from(value: DescriptorSet) -> Self {
        value.0
    }
}

impl AsRef<[String]> for DescriptorSet {
    fn as_ref(&self) -> &[String] {
        &self.0
    }
}

/// Build the checksummed descriptors for a pair of key fingerprints.
pub fn build_descriptors(
    first_fingerprint: &str,
    second_fingerprint: &str,
) -> Result<DescriptorSet> {
    validate_fingerprint(first_fingerprint)?;
    validate_fingerprint(second_fingerprint)?;

    let mut descriptors = Vec::with_capacity(DescriptorVariant::ALL.len());
    for variant in DescriptorVariant::ALL {
        let body = variant.body(first_fingerprint, second_fingerprint);
        let checksum = descriptor_checksum(&body)?;
        descriptors.push(format!("{body}#{checksum}"));
    }
    Ok(DescriptorSet(descriptors))
}

/// Compute the checksum for a descriptor body.
pub fn descriptor_checksum(body: &str) -> Result<String> {
    let mut symbols = expand(body)?;
    symbols.extend_from_slice(&[0; CHECKSUM_LEN]);
    let checksum = polymod(&symbols) ^ 1;
    Ok((0..CHECKSUM_LEN)
        .map(|i| {
            let index = (checksum >> (5 * (CHECKSUM_LEN - 1 - i))) & 31;
            CHECKSUM_CHARSET[index as usize] as char
        })
        .collect())
}

/// Verify a descriptor with a `#checksum` suffix.
pub fn verify_descriptor(descriptor: &str) -> Result<()> {
    let mismatch = || Error::DescriptorChecksum(descriptor.to_owned());
    let (body, checksum) = descriptor.rsplit_once('#').ok_or_else(mismatch)?;
    if checksum.len() != CHECKSUM_LEN {
        return Err(mismatch());
    }

    let mut symbols = expand(body).map_err(|_| mismatch())?;
    for c in checksum.bytes() {
        let value = CHECKSUM_CHARSET
            .iter()
            .position(|s| *s == c)
            .ok_or_else(mismatch)?;
        symbols.push(value as u64);
    }

    if polymod(&symbols) != 1 {
        return Err(mismatch());
    }
    Ok(())
}

fn validate_fingerprint(fingerprint: &str) -> Result<()> {
    if fingerprint.len() != FINGERPRINT_LEN
        || !fingerprint.chars().all(|c| c.is_ascii_hexdigit())
    {
        return Err(Error::InvalidFingerprint(fingerprint.to_owned()));
    }
    Ok(())
}

fn expand(body: &str) -> Result<Vec<u64>> {
    let mut symbols = Vec::with_capacity(body.len() + body.len() / 3 + 1);
    let mut groups = Vec::with_capacity(3);
    for c in body.chars() {
        let value = INPUT_CHARSET
            .find(c)
            .ok_or(Error::DescriptorCharacter(c))? as u64;
        symbols.push(value & 31);
        groups.push(value >> 5);
        if groups.len() == 3 {
            symbols.push(groups[0] * 9 + groups[1] * 3 + groups[2]);
            groups.clear();
        }
    }
    match groups.as_slice() {
        [a] => symbols.push(*a),
        [a, b] => symbols.push(a * 3 + b),
        _ => {}
    }
    Ok(symbols)
}

fn polymod(symbols: &[u64]) -> u64 {
    let mut chk = 1u64;
    for value in symbols {
        let top = chk >> 35;
        chk = ((chk & 0x7ffffffff) << 5) ^ value;
        for (i, generator) in GENERATOR.iter().enumerate() {
            if (top >> i) & 1 == 1 {
                chk ^= generator;
            }
        }
    }
    chk
}
