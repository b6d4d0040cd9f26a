//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector names an operation and describes its input, the expected
//! request, a simulated response, and either the expected parsed body or the
//! expected error message. Bodies are compared as parsed JSON so field order
//! does not matter.

use poke_client::{
    CreateUser, HttpMethod, HttpRequest, HttpResponse, InitiateConnection, PokeClient, Result,
    SendMessage,
};
use serde_json::Value;

const BASE_URL: &str = "http://localhost:8000";

fn client() -> PokeClient {
    PokeClient::new(BASE_URL)
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        other => panic!("unknown method: {other}"),
    }
}

fn input<T: serde::de::DeserializeOwned>(case: &Value) -> T {
    serde_json::from_value(case["input"].clone()).unwrap()
}

fn input_id(case: &Value) -> &str {
    case["input_id"].as_str().unwrap()
}

/// Build the request a case describes and parse its simulated response.
fn exchange(case: &Value) -> (HttpRequest, Box<dyn Fn(HttpResponse) -> Result<Value>>) {
    let c = client();
    let operation = case["operation"].as_str().unwrap();
    let request = match operation {
        "create_user" => c.build_create_user(&input::<CreateUser>(case)).unwrap(),
        "get_user" => c.build_get_user(input_id(case)),
        "initiate_connection" => c
            .build_initiate_connection(&input::<InitiateConnection>(case))
            .unwrap(),
        "check_connection_status" => c.build_check_connection_status(input_id(case)),
        "send_message" => c.build_send_message(&input::<SendMessage>(case)).unwrap(),
        "get_message_response" => c.build_get_message_response(input_id(case)),
        "get_user_memory" => c.build_get_user_memory(input_id(case)),
        "health_check" => c.build_health_check(),
        "get_user_conversations" => c.build_get_user_conversations(input_id(case)),
        other => panic!("unknown operation: {other}"),
    };
    let parse: Box<dyn Fn(HttpResponse) -> Result<Value>> = match operation {
        "create_user" => Box::new(move |r| c.parse_create_user(r)),
        "get_user" => Box::new(move |r| c.parse_get_user(r)),
        "initiate_connection" => Box::new(move |r| c.parse_initiate_connection(r)),
        "check_connection_status" => Box::new(move |r| c.parse_check_connection_status(r)),
        "send_message" => Box::new(move |r| c.parse_send_message(r)),
        "get_message_response" => Box::new(move |r| c.parse_get_message_response(r)),
        "get_user_memory" => Box::new(move |r| c.parse_get_user_memory(r)),
        "health_check" => Box::new(move |r| c.parse_health_check(r)),
        "get_user_conversations" => Box::new(move |r| c.parse_get_user_conversations(r)),
        other => panic!("unknown operation: {other}"),
    };
    (request, parse)
}

fn run_vectors(raw: &str) {
    let vectors: Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let expected_req = &case["expected_request"];
        let (req, parse) = exchange(case);

        // Verify build
        assert_eq!(req.method, parse_method(expected_req["method"].as_str().unwrap()), "{name}: method");
        assert_eq!(req.path, format!("{BASE_URL}{}", expected_req["path"].as_str().unwrap()), "{name}: path");

        let expected_headers: Vec<(String, String)> = expected_req["headers"]
            .as_array()
            .unwrap()
            .iter()
            .map(|h| {
                let arr = h.as_array().unwrap();
                (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
            })
            .collect();
        assert_eq!(req.headers, expected_headers, "{name}: headers");

        match req.body.as_deref() {
            Some(body) => {
                let req_body: Value = serde_json::from_str(body).unwrap();
                assert_eq!(req_body, expected_req["body"], "{name}: body");
            }
            None => assert!(expected_req["body"].is_null(), "{name}: body should be None"),
        }

        // Verify parse
        let sim = &case["simulated_response"];
        let response = HttpResponse {
            status: sim["status"].as_u64().unwrap() as u16,
            status_text: sim["status_text"].as_str().unwrap().to_string(),
            headers: Vec::new(),
            body: sim["body"].as_str().unwrap().to_string(),
        };
        let result = parse(response);

        if let Some(expected_error) = case.get("expected_error") {
            let err = result.unwrap_err();
            assert_eq!(err.to_string(), expected_error.as_str().unwrap(), "{name}: error");
        } else {
            assert_eq!(result.unwrap(), case["expected_result"], "{name}: parsed result");
        }
    }
}

#[test]
fn user_test_vectors() {
    run_vectors(include_str!("../../test-vectors/users.json"));
}

#[test]
fn connection_test_vectors() {
    run_vectors(include_str!("../../test-vectors/connections.json"));
}

#[test]
fn message_test_vectors() {
    run_vectors(include_str!("../../test-vectors/messages.json"));
}

#[test]
fn health_test_vectors() {
    run_vectors(include_str!("../../test-vectors/health.json"));
}
