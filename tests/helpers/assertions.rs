// Test Assertion Helpers
//
// Common assertions over the verifier's ApiResponse. Every helper panics
// with the offending status and body so a failed contract check reads
// directly from the test output.

use serde_json::Value;
use std::time::Duration;

use mercado_verify::ApiResponse;

/// Assert an exact status code
pub fn assert_status(response: &ApiResponse, expected: u16) {
    assert_eq!(
        response.status, expected,
        "Expected status {}, got {} with body: {}",
        expected, response.status, response.body
    );
}

/// Assert 200 OK
pub fn assert_ok(response: &ApiResponse) {
    assert_status(response, 200);
}

/// Assert 201 Created
pub fn assert_created(response: &ApiResponse) {
    assert_status(response, 201);
}

/// Assert 400 Bad Request
pub fn assert_bad_request(response: &ApiResponse) {
    assert_status(response, 400);
}

/// Assert 404 Not Found
pub fn assert_not_found(response: &ApiResponse) {
    assert_status(response, 404);
}

/// Assert 409 Conflict
pub fn assert_conflict(response: &ApiResponse) {
    assert_status(response, 409);
}

/// Assert 405 Method Not Allowed
pub fn assert_method_not_allowed(response: &ApiResponse) {
    assert_status(response, 405);
}

/// Assert the response declared a JSON content type
pub fn assert_json_content_type(response: &ApiResponse) {
    assert!(
        response.is_json(),
        "Expected application/json content type, got {:?}",
        response.content_type
    );
}

/// Assert the error envelope carries a message containing `needle`
pub fn assert_error_message_contains(response: &ApiResponse, needle: &str) {
    let message = response.error_message().unwrap_or_else(|| {
        panic!(
            "Expected an error message in the body, got: {}",
            response.body
        )
    });
    assert!(
        message.contains(needle),
        "Expected error message containing '{}', got '{}'",
        needle,
        message
    );
}

/// Assert the call finished inside the time budget
pub fn assert_within_budget(response: &ApiResponse, budget: Duration) {
    assert!(
        response.within_budget(budget),
        "Response took {:?}, over the {:?} budget",
        response.elapsed,
        budget
    );
}

/// Assert a JSON value has the shape of a market record
pub fn assert_market_shape(body: &Value) {
    assert!(
        body.get("id").is_some(),
        "Market record must include 'id': {}",
        body
    );
    assert!(
        body["id"].as_i64().map(|id| id > 0).unwrap_or(false),
        "'id' must be a positive integer: {}",
        body
    );
    assert!(body["nome"].is_string(), "'nome' must be a string: {}", body);
    assert!(body["cnpj"].is_string(), "'cnpj' must be a string: {}", body);
    assert!(
        body["endereco"].is_string(),
        "'endereco' must be a string: {}",
        body
    );
    if let Some(produtos) = body.get("produtos") {
        assert!(
            produtos.is_object(),
            "'produtos' must be a category mapping when present: {}",
            body
        );
        for (category, items) in produtos.as_object().unwrap() {
            assert!(
                items.is_array(),
                "category '{}' must hold a list of items: {}",
                category,
                body
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(status: u16, body: Value) -> ApiResponse {
        ApiResponse {
            status,
            content_type: Some("application/json".to_string()),
            body,
            elapsed: Duration::from_millis(3),
        }
    }

    #[test]
    fn test_assert_market_shape_accepts_full_record() {
        assert_market_shape(&json!({
            "id": 1,
            "nome": "Moni",
            "cnpj": "12345678912123",
            "endereco": "Rua 1",
            "produtos": {"padaria": ["pao"]}
        }));
    }

    #[test]
    #[should_panic(expected = "'id' must be a positive integer")]
    fn test_assert_market_shape_rejects_bad_id() {
        assert_market_shape(&json!({
            "id": "abc",
            "nome": "Moni",
            "cnpj": "12345678912123",
            "endereco": "Rua 1"
        }));
    }

    #[test]
    #[should_panic(expected = "Expected status 200")]
    fn test_assert_status_mismatch_panics() {
        assert_ok(&response(404, Value::Null));
    }

    #[test]
    fn test_assert_error_message_contains() {
        let resp = response(
            404,
            json!({"error": {"message": "Market 999999 not found", "code": 404}}),
        );
        assert_error_message_contains(&resp, "not found");
    }
}
