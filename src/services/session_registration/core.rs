//! `Sec-Session-Registration` parsing - core logic.
//!
//! This module only knows about headers and URLs. It never fails: anything
//! that does not validate is dropped (logged at debug) and the rest of the
//! header is still processed. Callers get an empty Vec when nothing is usable.
//!
//! Wire format (one structured-field list per header occurrence):
//!   (RS256 ES256);path="start";challenge="c29tZS1jaGFsbGVuZ2U="

use axum::http::{HeaderMap, HeaderName};
use sfv::{BareItem, Item, ListEntry, Parameters, Parser};
use tracing::debug;
use url::Url;

use super::trust;
use super::types::{RegistrationParam, SignatureAlgorithm};

pub const REGISTRATION_HEADER: HeaderName = HeaderName::from_static("sec-session-registration");

const PATH_PARAM: &str = "path";
const CHALLENGE_PARAM: &str = "challenge";

/// Why a list member was discarded. Only used for logging.
#[derive(Debug, thiserror::Error)]
enum Discard {
    #[error("member is not an inner list")]
    NotInnerList,
    #[error("non-token value in algorithm list")]
    NonTokenAlgorithm,
    #[error("no supported algorithm")]
    NoSupportedAlgorithm,
    #[error("missing parameter: {0}")]
    MissingParam(&'static str),
    #[error("parameter is not a string: {0}")]
    NotAString(&'static str),
    #[error("path does not resolve: {0}")]
    UnresolvablePath(url::ParseError),
    #[error("endpoint not allowed for request url")]
    UntrustedEndpoint,
    #[error("empty challenge")]
    EmptyChallenge,
}

/// Collect every valid registration request from the response headers.
///
/// Each occurrence of the header is parsed on its own; a malformed occurrence
/// is skipped without affecting the others. Order is header order, then list
/// order within each occurrence.
pub fn create_if_valid(request_url: &Url, headers: &HeaderMap) -> Vec<RegistrationParam> {
    headers
        .get_all(&REGISTRATION_HEADER)
        .iter()
        .filter_map(|value| match value.to_str() {
            Ok(value) => Some(value),
            Err(e) => {
                debug!(error = ?e, %request_url, "skipping non-ascii registration header");
                None
            }
        })
        .flat_map(|value| parse_header_value(request_url, value))
        .collect()
}

/// Parse one header occurrence. Grammar errors yield an empty Vec.
pub fn parse_header_value(request_url: &Url, value: &str) -> Vec<RegistrationParam> {
    let list = match Parser::new(value).parse_list() {
        Ok(list) => list,
        Err(e) => {
            debug!(error = ?e, %request_url, "skipping malformed registration header");
            return Vec::new();
        }
    };

    list.iter()
        .filter_map(|member| parse_member(request_url, member))
        .collect()
}

/// Validate one list member.
///
/// Only inner-list members (`(ES256 RS256);path=..;challenge=..`) carry an
/// algorithm list; a bare item member is discarded.
pub fn parse_member(request_url: &Url, member: &ListEntry) -> Option<RegistrationParam> {
    let result = match member {
        ListEntry::InnerList(inner) => validate(request_url, &inner.items, &inner.params),
        ListEntry::Item(_) => Err(Discard::NotInnerList),
    };

    match result {
        Ok(param) => Some(param),
        Err(reason) => {
            debug!(%reason, %request_url, "discarding registration member");
            None
        }
    }
}

fn validate(
    request_url: &Url,
    items: &[Item],
    params: &Parameters,
) -> Result<RegistrationParam, Discard> {
    // 1) algorithms
    let supported_algos = parse_algorithms(items)?;

    // 2) + 3) path -> endpoint, checked against the request's trust level
    let path = string_param(params, PATH_PARAM)?;
    let endpoint = request_url.join(path).map_err(Discard::UnresolvablePath)?;
    if !trust::is_endpoint_allowed(request_url, &endpoint) {
        return Err(Discard::UntrustedEndpoint);
    }

    // 4) challenge
    let challenge = string_param(params, CHALLENGE_PARAM)?;
    if challenge.is_empty() {
        return Err(Discard::EmptyChallenge);
    }

    Ok(RegistrationParam::new(
        endpoint,
        supported_algos,
        challenge.to_owned(),
    ))
}

fn parse_algorithms(items: &[Item]) -> Result<Vec<SignatureAlgorithm>, Discard> {
    let mut algos = Vec::with_capacity(items.len());
    for item in items {
        let BareItem::Token(token) = &item.bare_item else {
            return Err(Discard::NonTokenAlgorithm);
        };
        // Unknown algorithms are expected; skip them.
        if let Some(algo) = SignatureAlgorithm::from_token(token.as_str()) {
            algos.push(algo);
        }
    }

    if algos.is_empty() {
        return Err(Discard::NoSupportedAlgorithm);
    }
    Ok(algos)
}

fn string_param<'a>(params: &'a Parameters, name: &'static str) -> Result<&'a str, Discard> {
    let value = params
        .iter()
        .find(|(key, _)| key.as_str() == name)
        .map(|(_, value)| value)
        .ok_or(Discard::MissingParam(name))?;

    match value {
        BareItem::String(s) => Ok(s.as_str()),
        _ => Err(Discard::NotAString(name)),
    }
}
