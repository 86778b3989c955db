//! CRUD operation implementations.
//!
//! Each operation issues exactly one store call. "Create", "update", and
//! "delete" are all attribute overwrites; only the request shape and the
//! response body differ. The profile is schemaless — whatever key/value
//! pairs the caller supplies are stored verbatim.

use crate::{
    error::{ProfileError, ProfileResult},
    handler::ProfileRequestHandler,
    http::{HttpRequest, HttpResponse},
    store::AttributeStore,
};
use serde::Deserialize;
use serde_json::json;
use std::collections::HashMap;

/// Body shape for POST /customers.
#[derive(Debug, Deserialize)]
struct CreateProfileBody {
    id: String,
    attributes: HashMap<String, String>,
}

/// Body shape for PUT /customers/{id}.
///
/// An `id` field is accepted but optional; when present it must match the
/// path parameter.
#[derive(Debug, Deserialize)]
struct UpdateProfileBody {
    #[serde(default)]
    id: Option<String>,
    attributes: HashMap<String, String>,
}

/// Extract the non-empty contact id bound to the `{id}` path parameter.
fn contact_id(request: &HttpRequest) -> ProfileResult<&str> {
    match request.path_params.get("id").map(String::as_str) {
        Some(id) if !id.is_empty() => Ok(id),
        Some(_) => Err(ProfileError::invalid_request(
            "path parameter 'id' must be non-empty",
        )),
        None => Err(ProfileError::invalid_request("missing path parameter 'id'")),
    }
}

/// Parse the request body into the expected shape.
fn parse_body<'a, T: Deserialize<'a>>(request: &'a HttpRequest) -> ProfileResult<T> {
    let body = request
        .body
        .as_deref()
        .ok_or_else(|| ProfileError::invalid_request("missing request body"))?;
    Ok(serde_json::from_str(body)?)
}

/// Handle GET /customers/{id}: one read, attribute map as the body.
pub(super) async fn handle_get<S: AttributeStore>(
    handler: &ProfileRequestHandler<S>,
    request: &HttpRequest,
) -> ProfileResult<HttpResponse> {
    let contact_id = contact_id(request)?;

    let attributes = handler
        .store()
        .read_attributes(&handler.config().instance_id, contact_id)
        .await
        .map_err(ProfileError::store)?;

    Ok(HttpResponse::ok(json!(attributes)))
}

/// Handle POST /customers: one overwrite write, echoing the supplied id.
///
/// No existence check — creating over an existing id silently overwrites
/// it. The handler never mints identifiers; the caller supplies `id`.
pub(super) async fn handle_create<S: AttributeStore>(
    handler: &ProfileRequestHandler<S>,
    request: &HttpRequest,
) -> ProfileResult<HttpResponse> {
    let body: CreateProfileBody = parse_body(request)?;
    if body.id.is_empty() {
        return Err(ProfileError::invalid_request(
            "'id' must be a non-empty string",
        ));
    }

    handler
        .store()
        .write_attributes(&handler.config().instance_id, &body.id, body.attributes)
        .await
        .map_err(ProfileError::store)?;

    Ok(HttpResponse::created(json!({ "id": body.id })))
}

/// Handle PUT /customers/{id}: full overwrite of the attribute map.
pub(super) async fn handle_update<S: AttributeStore>(
    handler: &ProfileRequestHandler<S>,
    request: &HttpRequest,
) -> ProfileResult<HttpResponse> {
    let contact_id = contact_id(request)?;
    let body: UpdateProfileBody = parse_body(request)?;

    if let Some(body_id) = &body.id {
        if body_id != contact_id {
            return Err(ProfileError::invalid_request(format!(
                "body id '{}' does not match path id '{}'",
                body_id, contact_id
            )));
        }
    }

    handler
        .store()
        .write_attributes(&handler.config().instance_id, contact_id, body.attributes)
        .await
        .map_err(ProfileError::store)?;

    Ok(HttpResponse::message("Customer profile updated successfully"))
}

/// Handle DELETE /customers/{id}: overwrite with the empty attribute map.
///
/// Soft delete by policy: the underlying contact record survives and a
/// subsequent GET yields an empty map, not an absence.
pub(super) async fn handle_delete<S: AttributeStore>(
    handler: &ProfileRequestHandler<S>,
    request: &HttpRequest,
) -> ProfileResult<HttpResponse> {
    let contact_id = contact_id(request)?;

    handler
        .store()
        .write_attributes(&handler.config().instance_id, contact_id, HashMap::new())
        .await
        .map_err(ProfileError::store)?;

    Ok(HttpResponse::message("Customer profile deleted successfully"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_id_requires_binding() {
        let request = HttpRequest::new("GET", "/customers/{id}");
        let error = contact_id(&request).unwrap_err();
        assert!(error.to_string().contains("missing path parameter"));

        let request = request.with_path_param("id", "");
        let error = contact_id(&request).unwrap_err();
        assert!(error.to_string().contains("non-empty"));
    }

    #[test]
    fn test_parse_body_rejects_missing_and_malformed() {
        let request = HttpRequest::new("POST", "/customers");
        let error = parse_body::<CreateProfileBody>(&request).unwrap_err();
        assert!(matches!(error, ProfileError::InvalidRequest { .. }));

        let request = request.with_body("{not json");
        let error = parse_body::<CreateProfileBody>(&request).unwrap_err();
        assert!(matches!(error, ProfileError::MalformedBody(_)));
    }

    #[test]
    fn test_create_body_requires_both_fields() {
        let request = HttpRequest::new("POST", "/customers").with_body(r#"{"id": "c1"}"#);
        assert!(parse_body::<CreateProfileBody>(&request).is_err());

        let request =
            HttpRequest::new("POST", "/customers").with_body(r#"{"attributes": {"a": "1"}}"#);
        assert!(parse_body::<CreateProfileBody>(&request).is_err());
    }

    #[test]
    fn test_update_body_id_is_optional() {
        let request =
            HttpRequest::new("PUT", "/customers/{id}").with_body(r#"{"attributes": {"a": "1"}}"#);
        let body: UpdateProfileBody = parse_body(&request).unwrap();
        assert!(body.id.is_none());
        assert_eq!(body.attributes.get("a").map(String::as_str), Some("1"));
    }
}
