use super::{Fields, Hydrate};

/// Outcome reported by the service for an add, update or delete request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CogeResponse {
    /// The `success` flag. Some endpoints omit it; since error envelopes are
    /// turned into [crate::errors::CogeError] first, a response without the
    /// flag counts as success.
    pub success: bool,
    /// Id of the created entity, or of the job creating it.
    pub id: Option<u64>,
    pub message: Option<String>,
}

impl Hydrate for CogeResponse {
    fn hydrate(fields: Fields<'_>) -> Self {
        Self {
            success: fields.bool("success").unwrap_or(true),
            id: fields.u64("id"),
            message: fields.string("message"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;
    use serde_json::{json, Value};

    #[rstest]
    #[case(json!({"success": true, "id": 12}), true, Some(12), None)]
    #[case(json!({"success": false, "message": "not yet implemented"}), false, None, Some("not yet implemented"))]
    #[case(json!({"id": "38379"}), true, Some(38379), None)]
    fn test_response(
        #[case] json: Value,
        #[case] success: bool,
        #[case] id: Option<u64>,
        #[case] message: Option<&str>,
    ) {
        let r = CogeResponse::from_object(json.as_object().unwrap());
        assert_eq!(r.success, success);
        assert_eq!(r.id, id);
        assert_eq!(r.message.as_deref(), message);
    }
}
