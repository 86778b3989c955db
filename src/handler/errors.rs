//! Fault-to-response flattening.
//!
//! The fault boundary is deliberately flat: parse failures, shape
//! violations, and store faults all become a 500 with the fault message in
//! the body. There is no retry and no fault-kind distinction at this level;
//! only routing mismatches get a different status (404, handled before
//! dispatch).

use crate::{error::ProfileError, http::HttpResponse};

/// Convert a propagated fault into the uniform 500 response.
pub fn error_response(error: &ProfileError) -> HttpResponse {
    HttpResponse::server_error(error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_all_fault_kinds_flatten_to_500() {
        let faults = vec![
            ProfileError::invalid_request("missing request body"),
            ProfileError::from(serde_json::from_str::<serde_json::Value>("{").unwrap_err()),
            ProfileError::store(crate::store::StoreError::network("connection reset")),
        ];

        for fault in faults {
            let message = fault.to_string();
            let response = error_response(&fault);
            assert_eq!(response.status_code, 500);
            assert_eq!(response.body, json!({ "error": message }));
        }
    }
}
