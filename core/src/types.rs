//! Wire types for the clients API.
//!
//! # Design
//! Defined independently from the server crate so this crate stays free of
//! axum and tokio. The integration tests run both crates against each other
//! and catch schema drift.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Client projection as sent and received by the API. `id` is `None` on
/// payloads this crate builds for POST/PUT.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub cpf: String,
    pub income: f64,
    pub birth_date: DateTime<Utc>,
    pub children: u32,
}

/// Subset of `pageable` the client reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pageable {
    pub page_number: u32,
    pub page_size: u32,
}

/// One page of a listing. Fields the server sends beyond these are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub pageable: Pageable,
    pub total_elements: u64,
    pub total_pages: u64,
    pub number_of_elements: u32,
}

/// Sort direction for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

/// Optional listing parameters. Unset fields are left to the server default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub lines_per_page: Option<u32>,
    pub direction: Option<Direction>,
    /// Property name, e.g. `"name"` or `"birthDate"`.
    pub order_by: Option<String>,
}

impl PageQuery {
    pub(crate) fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(lines) = self.lines_per_page {
            pairs.push(("linesPerPage", lines.to_string()));
        }
        if let Some(direction) = self.direction {
            pairs.push(("direction", direction.as_str().to_string()));
        }
        if let Some(order_by) = &self.order_by {
            pairs.push(("orderBy", order_by.clone()));
        }
        pairs
    }
}

/// Error body the server returns alongside a 404.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorBody {
    pub status: u16,
    pub error: String,
    pub message: String,
    pub path: String,
}
