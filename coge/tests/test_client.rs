use coge::config::CogeParameters;
use coge::errors::CogeError;
use coge::types::*;
use coge::CogeClient;
use rstest::*;
use std::io::Write;

mod helpers;
use helpers::{base_url, AnyResult, FakeTransport, TESTING_URL};

#[fixture]
fn parameters_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".ron").tempfile().unwrap();
    write!(
        file,
        r#"(
    base_url: Some("{}"),
    user: Some("sam"),
    client_id: None,
    token_url: None,
    token: Some("t0k"),
)"#,
        TESTING_URL
    )
    .unwrap();
    file
}

#[rstest]
fn test_client_from_parameters(parameters_file: tempfile::NamedTempFile) -> AnyResult {
    let parameters = CogeParameters::load(parameters_file.path())?;
    assert!(parameters.has_token());
    assert_eq!(parameters.user, Some(Username::from("sam")));
    let coge = parameters.into_client()?;
    let credentials = coge.credentials();
    assert!(credentials.is_authenticated());
    assert_eq!(credentials.base_url().as_str(), TESTING_URL);
    Ok(())
}

#[rstest]
fn test_client_without_token(parameters_file: tempfile::NamedTempFile) -> AnyResult {
    let mut parameters = CogeParameters::load(parameters_file.path())?;
    parameters.token = None;
    let coge = parameters.into_client()?;
    assert!(!coge.credentials().is_authenticated());
    assert!(matches!(
        coge.list_data_store("/iplant/home/sam"),
        Err(CogeError::MissingAuth)
    ));
    Ok(())
}

#[test]
fn test_invalid_base_url() {
    assert!(BaseUrl::try_from("genomevolution.org/coge/api/v1").is_err());
}

#[test]
fn test_token_not_in_debug() -> AnyResult {
    let coge = CogeClient::authenticated(base_url(), Username::from("sam"), "s3cr3t")?;
    let debug = format!("{:?}", coge.credentials());
    assert!(debug.contains("sam"));
    assert!(!debug.contains("s3cr3t"));
    Ok(())
}

#[test]
fn test_shared_transport() -> AnyResult {
    let transport = FakeTransport::new();
    transport.respond(200, r#"{"groups": []}"#);
    let coge = CogeClient::with_transport(coge::Credentials::anonymous(base_url()), transport.clone());
    assert!(coge.search_groups("lab")?.is_empty());
    assert_eq!(transport.requests().len(), 1);
    Ok(())
}

#[test]
fn test_client_moves_to_another_thread() -> AnyResult {
    let transport = FakeTransport::new();
    transport.respond(200, r#"{"organisms": [{"id": 38378}]}"#);
    let credentials = coge::Credentials::anonymous(base_url());
    let coge = CogeClient::with_transport(credentials, transport.clone());
    let found = std::thread::spawn(move || coge.search_organisms("Cicer"))
        .join()
        .unwrap()?;
    assert_eq!(found.len(), 1);
    assert_eq!(transport.requests().len(), 1);
    Ok(())
}
