use axum::http::{HeaderMap, HeaderValue, header};
use dbsc_registration::{REGISTRATION_HEADER, SignatureAlgorithm, create_if_valid};
use url::Url;

fn url(s: &str) -> Url {
    Url::parse(s).unwrap()
}

fn headers(values: &[&'static str]) -> HeaderMap {
    let mut map = HeaderMap::new();
    map.insert(header::CONTENT_TYPE, HeaderValue::from_static("text/html"));
    for &value in values {
        map.append(REGISTRATION_HEADER, HeaderValue::from_static(value));
    }
    map
}

#[test]
fn test_absent_header_yields_nothing() {
    let result = create_if_valid(&url("https://example.com/"), &headers(&[]));
    assert!(result.is_empty());
    assert!(create_if_valid(&url("https://example.com/"), &HeaderMap::new()).is_empty());
}

#[test]
fn test_concrete_scenario() {
    let result = create_if_valid(
        &url("https://site.example/page"),
        &headers(&[r#"(RS256);path="reg";challenge="abc""#]),
    );
    assert_eq!(result.len(), 1);
    let param = &result[0];
    assert_eq!(
        param.registration_endpoint(),
        &url("https://site.example/reg")
    );
    assert_eq!(
        param.supported_algorithms(),
        &[SignatureAlgorithm::RsaPkcs1Sha256]
    );
    assert_eq!(param.challenge(), "abc");
}

#[test]
fn test_bogus_algorithm_yields_nothing() {
    let result = create_if_valid(
        &url("https://site.example/page"),
        &headers(&[r#"(BOGUS);path="reg";challenge="abc""#]),
    );
    assert!(result.is_empty());
}

#[test]
fn test_explainer_example() {
    let result = create_if_valid(
        &url("https://example.com/a/b"),
        &headers(&[r#"(RS256 ES256);path="start";challenge="c29tZS1jaGFsbGVuZ2U=""#]),
    );
    assert_eq!(result.len(), 1);
    assert_eq!(
        result[0].registration_endpoint().as_str(),
        "https://example.com/a/start"
    );
    assert_eq!(
        result[0].supported_algorithms(),
        &[
            SignatureAlgorithm::RsaPkcs1Sha256,
            SignatureAlgorithm::EcdsaSha256
        ]
    );
    assert_eq!(result[0].challenge(), "c29tZS1jaGFsbGVuZ2U=");
}

#[test]
fn test_absolute_path_replaces_request_path() {
    let result = create_if_valid(
        &url("https://example.com/a/b"),
        &headers(&[r#"(ES256);path="/start";challenge="c""#]),
    );
    assert_eq!(
        result[0].registration_endpoint().as_str(),
        "https://example.com/start"
    );
}

#[test]
fn test_all_valid_members_in_encounter_order() {
    let result = create_if_valid(
        &url("https://example.com/"),
        &headers(&[
            r#"(ES256);path="one";challenge="1", (RS256 ES256);path="two";challenge="2""#,
            r#"(RS256);path="three";challenge="3""#,
        ]),
    );
    let summary: Vec<_> = result
        .iter()
        .map(|p| {
            (
                p.registration_endpoint().path().to_string(),
                p.supported_algorithms().to_vec(),
                p.challenge().to_string(),
            )
        })
        .collect();
    assert_eq!(
        summary,
        vec![
            (
                "/one".to_string(),
                vec![SignatureAlgorithm::EcdsaSha256],
                "1".to_string()
            ),
            (
                "/two".to_string(),
                vec![
                    SignatureAlgorithm::RsaPkcs1Sha256,
                    SignatureAlgorithm::EcdsaSha256
                ],
                "2".to_string()
            ),
            (
                "/three".to_string(),
                vec![SignatureAlgorithm::RsaPkcs1Sha256],
                "3".to_string()
            ),
        ]
    );
}

#[test]
fn test_missing_challenge_only_drops_that_member() {
    let result = create_if_valid(
        &url("https://example.com/"),
        &headers(&[
            r#"(ES256);path="no-challenge", (ES256);path="ok";challenge="a""#,
            r#"(RS256);path="other";challenge="b""#,
        ]),
    );
    let paths: Vec<_> = result
        .iter()
        .map(|p| p.registration_endpoint().path())
        .collect();
    assert_eq!(paths, vec!["/ok", "/other"]);
}

#[test]
fn test_malformed_occurrence_does_not_affect_others() {
    let result = create_if_valid(
        &url("https://example.com/"),
        &headers(&[
            r#"(ES256;path="broken""#,
            r#"(ES256);path="reg";challenge="a""#,
        ]),
    );
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].registration_endpoint().path(), "/reg");

    let result = create_if_valid(
        &url("https://example.com/"),
        &headers(&[
            r#"(ES256);path="reg";challenge="a""#,
            "@@@",
        ]),
    );
    assert_eq!(result.len(), 1);
}

#[test]
fn test_trust_policy() {
    // secure -> secure
    let result = create_if_valid(
        &url("https://example.com/"),
        &headers(&[r#"(ES256);path="https://auth.example.com/reg";challenge="a""#]),
    );
    assert_eq!(result.len(), 1);

    // insecure -> insecure
    let result = create_if_valid(
        &url("http://insecure.example/"),
        &headers(&[r#"(ES256);path="reg";challenge="a""#]),
    );
    assert_eq!(result.len(), 1);
    assert_eq!(
        result[0].registration_endpoint().as_str(),
        "http://insecure.example/reg"
    );

    // secure -> insecure
    let result = create_if_valid(
        &url("https://example.com/"),
        &headers(&[r#"(ES256);path="http://example.com/reg";challenge="a""#]),
    );
    assert!(result.is_empty());
}

#[test]
fn test_results_own_their_data() {
    let result = {
        let map = headers(&[r#"(ES256);path="reg";challenge="a""#]);
        let request_url = url("https://example.com/");
        create_if_valid(&request_url, &map)
    };
    let (endpoint, algos, challenge) = result.into_iter().next().unwrap().into_parts();
    assert_eq!(endpoint.as_str(), "https://example.com/reg");
    assert_eq!(algos, vec![SignatureAlgorithm::EcdsaSha256]);
    assert_eq!(challenge, "a");
}
