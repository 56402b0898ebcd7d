//! Client row and its external projection.
//!
//! # Design
//! `Client` is the stored row and always has an id. `ClientDto` is what goes
//! over the wire: `id` is optional so POST/PUT bodies can omit it, and any id
//! a caller does send is ignored on write.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored client row.
#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub cpf: String,
    pub income: f64,
    pub birth_date: DateTime<Utc>,
    pub children: u32,
}

impl Client {
    /// Overwrite every mutable field from `dto`. The id is left untouched.
    pub fn replace_with(&mut self, dto: ClientDto) {
        self.name = dto.name;
        self.cpf = dto.cpf;
        self.income = dto.income;
        self.birth_date = dto.birth_date;
        self.children = dto.children;
    }
}

/// Client projection returned by every endpoint and accepted by POST/PUT.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientDto {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub cpf: String,
    pub income: f64,
    pub birth_date: DateTime<Utc>,
    pub children: u32,
}

impl ClientDto {
    /// Turn a projection into a row under the given id.
    pub fn into_client(self, id: i64) -> Client {
        Client {
            id,
            name: self.name,
            cpf: self.cpf,
            income: self.income,
            birth_date: self.birth_date,
            children: self.children,
        }
    }
}

impl From<Client> for ClientDto {
    fn from(client: Client) -> Self {
        Self {
            id: Some(client.id),
            name: client.name,
            cpf: client.cpf,
            income: client.income,
            birth_date: client.birth_date,
            children: client.children,
        }
    }
}
