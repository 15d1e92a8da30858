//! Interpretation of the JSON envelope wrapping every CoGe response.
//!
//! A response is one of:
//!
//! - `{"error": {...}}`: the service reports a failure
//! - `{"<resource key>": [...], ...}`: search results
//! - a flat object describing one entity (fetch), or `{"success": ..., ...}` (mutation)

use super::transport::ApiResponse;
use crate::errors::CogeError;
use crate::models::Fields;
use log::warn;
use serde_json::{Map, Value};

/// Fail with [CogeError::Service] if the document has a top-level `error` key.
pub(crate) fn check(document: Value) -> Result<Value, CogeError> {
    if let Some(error) = document.as_object().and_then(|o| o.get("error")) {
        return Err(CogeError::service(error.clone()));
    }
    Ok(document)
}

/// Parse a JSON response body and check it for an error envelope.
///
/// The envelope is checked regardless of HTTP status. A non-2xx response
/// which is not an error envelope fails with [CogeError::Http].
pub(crate) fn parse(res: ApiResponse) -> Result<Value, CogeError> {
    match serde_json::from_str::<Value>(&res.body) {
        Ok(document) => {
            let document = check(document)?;
            if res.is_success() {
                Ok(document)
            } else {
                Err(http_error(res))
            }
        }
        Err(e) if res.is_success() => Err(e.into()),
        Err(_) => Err(http_error(res)),
    }
}

/// Return a text (e.g. FASTA) response body, unless it is actually a JSON
/// error envelope.
pub(crate) fn parse_text(res: ApiResponse) -> Result<String, CogeError> {
    if res.body.trim_start().starts_with('{') {
        if let Ok(document) = serde_json::from_str::<Value>(&res.body) {
            check(document)?;
        }
    }
    if res.is_success() {
        Ok(res.body)
    } else {
        Err(http_error(res))
    }
}

fn http_error(res: ApiResponse) -> CogeError {
    CogeError::Http {
        status: res.status,
        text: res.body,
    }
}

pub(crate) fn into_object(document: Value) -> Result<Map<String, Value>, CogeError> {
    match document {
        Value::Object(o) => Ok(o),
        other => Err(CogeError::NotAnObject(other.to_string())),
    }
}

/// Members of the array stored under `key`, in server order.
///
/// Any other top-level keys are ignored, so that the service may add members
/// (counts, paging, ...) to its search envelopes without breaking clients.
/// An absent or non-array `key` yields nothing. A member which is not an
/// object yields [CogeError::NotAnObject].
pub fn named_array<'a>(
    envelope: &'a Map<String, Value>,
    key: &str,
) -> impl Iterator<Item = Result<&'a Map<String, Value>, CogeError>> + 'a {
    let members: &[Value] = match envelope.get(key) {
        Some(Value::Array(a)) => a.as_slice(),
        Some(other) => {
            warn!("envelope member \"{}\" is not an array: {}", key, other);
            &[]
        }
        None => &[],
    };
    members.iter().map(|member| match member {
        Value::Object(o) => Ok(o),
        other => Err(CogeError::NotAnObject(other.to_string())),
    })
}

/// Hydrate each object of the array stored under `key`.
pub(crate) fn hydrate_named<T>(
    envelope: &Map<String, Value>,
    key: &str,
    mut hydrate: impl FnMut(Fields<'_>) -> Result<T, CogeError>,
) -> Result<Vec<T>, CogeError> {
    named_array(envelope, key)
        .map(|member| hydrate(Fields::new(member?)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;
    use serde_json::json;

    fn envelope(v: Value) -> Map<String, Value> {
        into_object(v).unwrap()
    }

    #[rstest]
    #[case(200)]
    #[case(404)]
    fn test_error_envelope(#[case] status: u16) {
        let res = ApiResponse::new(status, r#"{"error": {"message": "not found"}}"#);
        let err = parse(res).unwrap_err();
        assert_eq!(err.service_message(), Some("not found"));
    }

    #[test]
    fn test_success_document() {
        let res = ApiResponse::new(200, r#"{"id": 7, "name": "G"}"#);
        assert_eq!(parse(res).unwrap(), json!({"id": 7, "name": "G"}));
    }

    #[rstest]
    #[case(200, "<html>oops</html>", false)]
    #[case(502, "<html>Bad Gateway</html>", true)]
    #[case(500, r#"{"id": 1}"#, true)]
    fn test_unparsable_or_failed(#[case] status: u16, #[case] body: &str, #[case] is_http: bool) {
        let err = parse(ApiResponse::new(status, body)).unwrap_err();
        assert_eq!(matches!(err, CogeError::Http { .. }), is_http);
        assert_eq!(matches!(err, CogeError::Json(_)), !is_http);
    }

    #[test]
    fn test_text() {
        let fasta = ">Chr1\nACGT\n";
        assert_eq!(parse_text(ApiResponse::new(200, fasta)).unwrap(), fasta);
        let err = parse_text(ApiResponse::new(200, r#"{"error": {"message": "Access denied"}}"#))
            .unwrap_err();
        assert_eq!(err.service_message(), Some("Access denied"));
        assert!(matches!(
            parse_text(ApiResponse::new(500, "boom")),
            Err(CogeError::Http { status: 500, .. })
        ));
    }

    #[test]
    fn test_named_array_ignores_siblings() {
        let e = envelope(json!({
            "count": 3,
            "organisms": [{"id": 3}, {"id": 1}, {"id": 2}],
            "genomes": [{"id": 99}]
        }));
        let ids: Vec<_> = named_array(&e, "organisms")
            .map(|o| o.unwrap()["id"].clone())
            .collect();
        assert_eq!(ids, vec![json!(3), json!(1), json!(2)]);
    }

    #[test]
    fn test_non_object_member_fails() {
        let e = envelope(json!({"organisms": [{"id": 3}, 7]}));
        let err = hydrate_named(&e, "organisms", |f| Ok(f.u32("id"))).unwrap_err();
        assert!(matches!(err, CogeError::NotAnObject(s) if s == "7"));
    }

    #[rstest]
    #[case(json!({}))]
    #[case(json!({"organisms": {"id": 1}}))]
    #[case(json!({"organisms": null}))]
    fn test_named_array_missing(#[case] v: Value) {
        assert_eq!(named_array(&envelope(v), "organisms").count(), 0)
    }

    #[test]
    fn test_not_an_object() {
        assert!(matches!(into_object(json!([1, 2])), Err(CogeError::NotAnObject(_))));
    }
}
