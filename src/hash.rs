use serde::{Deserialize, Serialize};
use sha3::{Digest, Sha3_512};

pub const DIGEST_LEN: usize = 64;
pub const DIGEST_HEX_LEN: usize = DIGEST_LEN * 2;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DigestAlgorithm {
    #[default]
    Sha3_512,
    Blake3_512,
}

impl DigestAlgorithm {
    pub fn name(self) -> &'static str {
        match self {
            Self::Sha3_512 => "sha3-512",
            Self::Blake3_512 => "blake3-512",
        }
    }
}

pub fn digest_hex(algorithm: DigestAlgorithm, bytes: &[u8]) -> String {
    match algorithm {
        DigestAlgorithm::Sha3_512 => hex::encode(Sha3_512::digest(bytes)),
        DigestAlgorithm::Blake3_512 => {
            let mut hasher = blake3::Hasher::new();
            hasher.update(bytes);
            let mut output = [0u8; DIGEST_LEN];
            hasher.finalize_xof().fill(&mut output);
            hex::encode(output)
        }
    }
}

pub fn digest_text(algorithm: DigestAlgorithm, text: &str) -> String {
    digest_hex(algorithm, text.as_bytes())
}
