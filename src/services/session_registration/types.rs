/*
 * Responsibility
 * - Validated registration request (RegistrationParam) and the signature algorithm set
 * - Construction is closed: only the validator in core.rs (or the test factory) builds one
 * - No Clone/Copy: the value is moved to session creation, never duplicated
 */
use std::fmt;

use url::Url;

/// Signature algorithms a server may offer for the bound session key.
///
/// The token lookup is a fixed, case-sensitive table. Anything else in the
/// header is ignored by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignatureAlgorithm {
    /// `ES256` (ECDSA P-256 + SHA-256)
    EcdsaSha256,
    /// `RS256` (RSASSA-PKCS1-v1_5 + SHA-256)
    RsaPkcs1Sha256,
}

impl SignatureAlgorithm {
    const TABLE: [(&'static str, SignatureAlgorithm); 2] = [
        ("ES256", SignatureAlgorithm::EcdsaSha256),
        ("RS256", SignatureAlgorithm::RsaPkcs1Sha256),
    ];

    pub fn from_token(token: &str) -> Option<Self> {
        Self::TABLE
            .iter()
            .find(|(name, _)| *name == token)
            .map(|(_, algo)| *algo)
    }

    pub fn as_token(&self) -> &'static str {
        match self {
            SignatureAlgorithm::EcdsaSha256 => "ES256",
            SignatureAlgorithm::RsaPkcs1Sha256 => "RS256",
        }
    }

    /// JOSE algorithm used when signing the registration proof JWT.
    pub fn jwt_algorithm(&self) -> jsonwebtoken::Algorithm {
        match self {
            SignatureAlgorithm::EcdsaSha256 => jsonwebtoken::Algorithm::ES256,
            SignatureAlgorithm::RsaPkcs1Sha256 => jsonwebtoken::Algorithm::RS256,
        }
    }
}

impl fmt::Display for SignatureAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

impl From<SignatureAlgorithm> for jsonwebtoken::Algorithm {
    fn from(algo: SignatureAlgorithm) -> Self {
        algo.jwt_algorithm()
    }
}

/// A fully validated `Sec-Session-Registration` entry.
///
/// Invariants (held by every constructed value):
/// - `registration_endpoint` is absolute and passed the endpoint trust policy
/// - `supported_algos` is non-empty, in header order (duplicates kept)
/// - `challenge` is non-empty and copied verbatim
#[derive(Debug, PartialEq, Eq)]
pub struct RegistrationParam {
    // TODO: store last-updated time and isolation info once session storage needs them.
    registration_endpoint: Url,
    supported_algos: Vec<SignatureAlgorithm>,
    challenge: String,
}

impl RegistrationParam {
    pub(super) fn new(
        registration_endpoint: Url,
        supported_algos: Vec<SignatureAlgorithm>,
        challenge: String,
    ) -> Self {
        debug_assert!(!supported_algos.is_empty());
        debug_assert!(!challenge.is_empty());
        Self {
            registration_endpoint,
            supported_algos,
            challenge,
        }
    }

    /// Build a param without header parsing (fixtures only).
    #[cfg(any(test, feature = "test-utils"))]
    pub fn create_instance_for_testing(
        registration_endpoint: Url,
        supported_algos: Vec<SignatureAlgorithm>,
        challenge: String,
    ) -> Self {
        Self {
            registration_endpoint,
            supported_algos,
            challenge,
        }
    }

    pub fn registration_endpoint(&self) -> &Url {
        &self.registration_endpoint
    }

    pub fn supported_algorithms(&self) -> &[SignatureAlgorithm] {
        &self.supported_algos
    }

    pub fn challenge(&self) -> &str {
        &self.challenge
    }

    /// Hand the owned parts to the caller (e.g. session creation).
    pub fn into_parts(self) -> (Url, Vec<SignatureAlgorithm>, String) {
        (
            self.registration_endpoint,
            self.supported_algos,
            self.challenge,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_token_is_case_sensitive() {
        assert_eq!(
            SignatureAlgorithm::from_token("ES256"),
            Some(SignatureAlgorithm::EcdsaSha256)
        );
        assert_eq!(
            SignatureAlgorithm::from_token("RS256"),
            Some(SignatureAlgorithm::RsaPkcs1Sha256)
        );
        assert_eq!(SignatureAlgorithm::from_token("es256"), None);
        assert_eq!(SignatureAlgorithm::from_token("PS256"), None);
        assert_eq!(SignatureAlgorithm::from_token(""), None);
    }

    #[test]
    fn test_token_names_match_table() {
        for (name, algo) in SignatureAlgorithm::TABLE {
            assert_eq!(algo.as_token(), name);
            assert_eq!(algo.to_string(), name);
        }
    }

    #[test]
    fn test_jwt_algorithm_mapping() {
        assert_eq!(
            jsonwebtoken::Algorithm::from(SignatureAlgorithm::EcdsaSha256),
            jsonwebtoken::Algorithm::ES256
        );
        assert_eq!(
            SignatureAlgorithm::RsaPkcs1Sha256.jwt_algorithm(),
            jsonwebtoken::Algorithm::RS256
        );
    }

    #[test]
    fn test_instance_for_testing_keeps_values() {
        let endpoint = Url::parse("https://example.com/reg").unwrap();
        let algos = vec![
            SignatureAlgorithm::RsaPkcs1Sha256,
            SignatureAlgorithm::EcdsaSha256,
            SignatureAlgorithm::RsaPkcs1Sha256,
        ];
        let param = RegistrationParam::create_instance_for_testing(
            endpoint.clone(),
            algos.clone(),
            "c29tZS1jaGFsbGVuZ2U=".to_string(),
        );

        assert_eq!(param.registration_endpoint(), &endpoint);
        assert_eq!(param.supported_algorithms(), algos.as_slice());
        assert_eq!(param.challenge(), "c29tZS1jaGFsbGVuZ2U=");

        let (e, a, c) = param.into_parts();
        assert_eq!(e, endpoint);
        assert_eq!(a, algos);
        assert_eq!(c, "c29tZS1jaGFsbGVuZ2U=");
    }
}
