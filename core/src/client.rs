//! Stateless HTTP request builder and response parser for the clients API.
//!
//! # Design
//! `ClientsClient` holds only a `base_url`. Each operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method that
//! consumes an `HttpResponse`. Every listing endpoint (all clients, income,
//! income greater than, CPF) answers with the same page body, so they share
//! `parse_list_clients`.

use serde::de::DeserializeOwned;
use url::form_urlencoded;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Client, ErrorBody, Page, PageQuery};

#[derive(Debug, Clone)]
pub struct ClientsClient {
    base_url: String,
}

impl ClientsClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_clients(&self, query: &PageQuery) -> HttpRequest {
        self.listing("/clients/", None, query)
    }

    pub fn build_get_client(&self, id: i64) -> HttpRequest {
        self.bodiless(HttpMethod::Get, format!("/clients/id/{id}"))
    }

    pub fn build_find_by_income(&self, income: f64, query: &PageQuery) -> HttpRequest {
        self.listing("/clients/income/", Some(("income", income.to_string())), query)
    }

    pub fn build_find_by_income_greater_than(&self, income: f64, query: &PageQuery) -> HttpRequest {
        self.listing(
            "/clients/incomeGreaterThan/",
            Some(("income", income.to_string())),
            query,
        )
    }

    pub fn build_find_by_cpf_like(&self, cpf: &str, query: &PageQuery) -> HttpRequest {
        self.listing("/clients/cpf/", Some(("cpf", cpf.to_string())), query)
    }

    pub fn build_create_client(&self, input: &Client) -> Result<HttpRequest, ApiError> {
        self.with_body(HttpMethod::Post, "/clients/".to_string(), input)
    }

    pub fn build_update_client(&self, id: i64, input: &Client) -> Result<HttpRequest, ApiError> {
        self.with_body(HttpMethod::Put, format!("/clients/{id}"), input)
    }

    pub fn build_delete_client(&self, id: i64) -> HttpRequest {
        self.bodiless(HttpMethod::Delete, format!("/clients/{id}"))
    }

    /// Parse the page returned by any listing endpoint.
    pub fn parse_list_clients(&self, response: HttpResponse) -> Result<Page<Client>, ApiError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }

    pub fn parse_get_client(&self, response: HttpResponse) -> Result<Client, ApiError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }

    pub fn parse_create_client(&self, response: HttpResponse) -> Result<Client, ApiError> {
        check_status(&response, 201)?;
        decode(&response.body)
    }

    pub fn parse_update_client(&self, response: HttpResponse) -> Result<Client, ApiError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }

    pub fn parse_delete_client(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)
    }

    fn listing(&self, path: &str, filter: Option<(&'static str, String)>, query: &PageQuery) -> HttpRequest {
        let pairs: Vec<(&str, String)> = filter.into_iter().chain(query.pairs()).collect();
        let mut path = path.to_string();
        if !pairs.is_empty() {
            let encoded = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(pairs)
                .finish();
            path.push('?');
            path.push_str(&encoded);
        }
        self.bodiless(HttpMethod::Get, path)
    }

    fn bodiless(&self, method: HttpMethod, path: String) -> HttpRequest {
        HttpRequest {
            method,
            path: format!("{}{path}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    fn with_body(&self, method: HttpMethod, path: String, input: &Client) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method,
            path: format!("{}{path}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        let body: ErrorBody = serde_json::from_str(&response.body).unwrap_or_default();
        return Err(ApiError::NotFound(body));
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
