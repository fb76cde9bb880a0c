#![allow(clippy::unwrap_used)]

use std::{io, sync::Mutex};

use aviso::api::{
    ApiClientError, Origin, Outcome, RawResponse, Transport, VerificationClient,
    VerificationRequest,
};
use aviso::config::{ClientConfig, QueryParams};
use pretty_assertions::assert_eq;
use reqwest::StatusCode;
use url::Url;

/// Replays one canned answer and remembers every URL it was asked for.
struct Recorder {
    answer: Result<(StatusCode, &'static str), &'static str>,
    seen: Mutex<Vec<Url>>,
}

impl Recorder {
    fn ok(body: &'static str) -> Self {
        Self::status(StatusCode::OK, body)
    }

    fn status(status: StatusCode, body: &'static str) -> Self {
        Self {
            answer: Ok((status, body)),
            seen: Mutex::new(vec![]),
        }
    }

    fn unreachable() -> Self {
        Self {
            answer: Err("connection refused"),
            seen: Mutex::new(vec![]),
        }
    }
}

impl Transport for &'static Recorder {
    fn get(&self, url: &Url) -> Result<RawResponse, ApiClientError> {
        self.seen.lock().unwrap().push(url.clone());
        match self.answer {
            Ok((status, body)) => Ok(RawResponse::new(status, body)),
            Err(reason) => Err(ApiClientError::from(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                reason,
            ))),
        }
    }
}

fn client(recorder: Recorder) -> (VerificationClient, &'static Recorder) {
    client_with(recorder, |config| config)
}

fn client_with(
    recorder: Recorder,
    configure: impl FnOnce(ClientConfig) -> ClientConfig,
) -> (VerificationClient, &'static Recorder) {
    let recorder: &'static Recorder = Box::leak(Box::new(recorder));
    let config = configure(ClientConfig::from_url("https://lookup.test/consulta").unwrap());
    (
        VerificationClient::with_transport(config, recorder).unwrap(),
        recorder,
    )
}

fn calls(recorder: &Recorder) -> usize {
    recorder.seen.lock().unwrap().len()
}

#[test]
fn test_requires_notice() {
    let (client, recorder) = client(Recorder::ok(r#"{ "requiere_aviso_automatico": true }"#));
    assert_eq!(
        client.verify(VerificationRequest::new("acero", "72081000")),
        Outcome::RequiresNotice
    );
    assert_eq!(calls(recorder), 1);
}

#[test]
fn test_no_notice_required() {
    let (client, _) = client(Recorder::ok(r#"{ "requiere_aviso_automatico": false }"#));
    assert_eq!(
        client.verify(VerificationRequest::new("acero", "72081000")),
        Outcome::NoNoticeRequired
    );
}

#[test]
fn test_absent_or_null_flag_is_not_found() {
    for body in [
        "{}",
        r#"{ "mensaje": "Fracción no encontrada", "requiere_aviso_automatico": null }"#,
        r#"{ "requiere_aviso_automatico": "true" }"#,
    ] {
        let recorder: &'static Recorder = Box::leak(Box::new(Recorder::ok(body)));
        let config = ClientConfig::from_url("https://lookup.test/consulta").unwrap();
        let client = VerificationClient::with_transport(config, recorder).unwrap();
        assert_eq!(
            client.verify(VerificationRequest::new("acero", "72081000")),
            Outcome::NotFound,
            "body {body}"
        );
    }
}

#[test]
fn test_missing_input_never_reaches_the_network() {
    let (client, recorder) = client_with(Recorder::ok("{}"), |config| {
        config.with_placeholder("selecciona")
    });

    let incomplete = [
        VerificationRequest::new("", "72081000"),
        VerificationRequest::new("acero", ""),
        VerificationRequest::new("   ", "72081000"),
        VerificationRequest::new("acero", " \t\n"),
        VerificationRequest::new("", ""),
        VerificationRequest::new("Selecciona", "72081000"),
    ];

    for request in incomplete {
        assert_eq!(client.verify(request), Outcome::MissingInput);
    }
    assert_eq!(calls(recorder), 0);
}

#[test]
fn test_server_error_is_connection_error() {
    let (client, recorder) = client(Recorder::status(
        StatusCode::INTERNAL_SERVER_ERROR,
        r#"{ "requiere_aviso_automatico": true }"#,
    ));
    assert_eq!(
        client.verify(VerificationRequest::new("acero", "72081000")),
        Outcome::ConnectionError
    );
    assert_eq!(calls(recorder), 1);
}

#[test]
fn test_unavailable_database_is_connection_error() {
    let (client, _) = client(Recorder::status(
        StatusCode::SERVICE_UNAVAILABLE,
        r#"{"mensaje": "Base TIGIE no disponible", "requiere_aviso_automatico": null}"#,
    ));
    assert_eq!(
        client.verify(VerificationRequest::new("acero", "72081000")),
        Outcome::ConnectionError
    );
}

#[test]
fn test_transport_failure_is_connection_error() {
    let (client, recorder) = client(Recorder::unreachable());
    let verification = client.check(VerificationRequest::new("acero", "72081000"));

    assert_eq!(verification.outcome, Outcome::ConnectionError);
    assert!(verification.record.is_none());
    assert_eq!(calls(recorder), 1);
}

#[test]
fn test_malformed_json_is_connection_error() {
    let (client, _) = client(Recorder::ok("<html>502 Bad Gateway</html>"));
    assert_eq!(
        client.verify(VerificationRequest::new("acero", "72081000")),
        Outcome::ConnectionError
    );
}

#[test]
fn test_non_object_answer_is_not_found_but_null_is_not() {
    let (array_client, recorder) = client(Recorder::ok("[]"));
    let verification = array_client.check(VerificationRequest::new("acero", "72081000"));
    assert_eq!(verification.outcome, Outcome::NotFound);
    assert!(verification.record.is_none());
    assert_eq!(calls(recorder), 1);

    let (null_client, _) = client(Recorder::ok("null"));
    assert_eq!(
        null_client.verify(VerificationRequest::new("acero", "72081000")),
        Outcome::ConnectionError
    );
}

#[test]
fn test_request_is_normalized_and_encoded() {
    let (client, recorder) = client(Recorder::ok("{}"));
    client.verify(VerificationRequest::new("  auto partes ", "AB72-08!10.01"));

    let seen = recorder.seen.lock().unwrap();
    assert_eq!(
        seen[0].as_str(),
        "https://lookup.test/consulta?industria=auto+partes&fraccion=7208.10.01"
    );
}

#[test]
fn test_consulta_convention_sends_origin() {
    let (client, recorder) = client_with(Recorder::ok("{}"), |config| {
        config.with_params(QueryParams::consulta())
    });

    client.verify(VerificationRequest::new("acero", "72081000"));
    client.verify(VerificationRequest::new("acero", "72081000").with_origin(Origin::Us));

    let seen = recorder.seen.lock().unwrap();
    assert_eq!(
        seen[0].query(),
        Some("origin=mx&industria=acero&code=7208.10.00")
    );
    assert_eq!(
        seen[1].query(),
        Some("origin=us&industria=acero&code=7208.10.00")
    );
}

#[test]
fn test_record_is_returned_with_outcome() {
    let (client, _) = client(Recorder::ok(
        r#"{
            "requiere_aviso_automatico": true,
            "industria": "acero",
            "origin": "mx",
            "code": "7208.10.00",
            "match_source": "override/prefix",
            "descripcion": "Laminados planos de hierro o acero sin alear"
        }"#,
    ));

    let verification = client.check(VerificationRequest::new("acero", "72081000"));
    assert_eq!(verification.outcome, Outcome::RequiresNotice);

    let record = verification.record.unwrap();
    assert_eq!(record.code.as_deref(), Some("7208.10.00"));
    assert_eq!(
        record.descripcion.as_deref(),
        Some("Laminados planos de hierro o acero sin alear")
    );
}

#[test]
fn test_repeated_verification_is_stable() {
    let (client, recorder) = client(Recorder::ok(r#"{ "requiere_aviso_automatico": false }"#));
    let request = VerificationRequest::new("textil", "6109.10.01");

    let first = client.verify(request.clone());
    let second = client.verify(request);

    assert_eq!(first, second);
    assert_eq!(calls(recorder), 2);

    let seen = recorder.seen.lock().unwrap();
    assert_eq!(seen[0], seen[1]);
}

#[test]
fn test_concurrent_verifications_are_independent() {
    let (client, recorder) = client(Recorder::ok(r#"{ "requiere_aviso_automatico": true }"#));

    let outcomes: Vec<Outcome> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let client = client.clone();
                scope.spawn(move || {
                    client.verify(VerificationRequest::new("acero", format!("7208100{i}")))
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(outcomes.iter().all(|o| *o == Outcome::RequiresNotice));
    assert_eq!(calls(recorder), 8);
}

#[test]
fn test_health() {
    let (client, recorder) = client(Recorder::ok(
        r#"{"status": "ok", "origins": ["https://www.northcrossconsulting.com"]}"#,
    ));

    let health = client.health().unwrap();
    assert!(health.is_ok());
    assert_eq!(
        recorder.seen.lock().unwrap()[0].as_str(),
        "https://lookup.test/health"
    );
}

#[test]
fn test_health_propagates_errors() {
    let (client, _) = client(Recorder::unreachable());
    assert!(client.health().is_err());
}
