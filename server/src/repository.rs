//! Storage for client rows.
//!
//! # Design
//! `ClientRepository` is the seam between the service layer and storage. The
//! only backend is `InMemoryClientRepository`: a `BTreeMap` keyed by id plus
//! an id sequence, both under one `RwLock` so that "check the row exists, then
//! mutate it" happens under a single write guard.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::fixture;
use crate::model::{Client, ClientDto};
use crate::page::{Page, PageRequest};

/// Row predicate applied before sorting and slicing.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientFilter {
    All,
    IncomeEquals(f64),
    IncomeGreaterThan(f64),
    CpfContains(String),
}

impl ClientFilter {
    pub fn matches(&self, client: &Client) -> bool {
        match self {
            ClientFilter::All => true,
            ClientFilter::IncomeEquals(income) => client.income == *income,
            ClientFilter::IncomeGreaterThan(income) => client.income > *income,
            ClientFilter::CpfContains(fragment) => client.cpf.contains(fragment.as_str()),
        }
    }
}

#[async_trait]
pub trait ClientRepository: Send + Sync {
    async fn find_page(&self, filter: &ClientFilter, request: &PageRequest) -> Page<Client>;

    async fn find_by_id(&self, id: i64) -> Option<Client>;

    /// Store a new row and return it with its assigned id.
    async fn insert(&self, dto: ClientDto) -> Client;

    /// Replace every field of row `id`. Returns `None` and changes nothing
    /// when the row does not exist.
    async fn replace(&self, id: i64, dto: ClientDto) -> Option<Client>;

    /// Remove row `id`, returning whether it existed.
    async fn delete(&self, id: i64) -> bool;
}

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<i64, Client>,
    last_id: i64,
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryClientRepository {
    table: Arc<RwLock<Table>>,
}

impl InMemoryClientRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository preloaded with the twelve fixture rows.
    pub fn seeded() -> Self {
        Self::with_rows(fixture::clients())
    }

    /// A repository preloaded with `rows`. The id sequence continues after the
    /// highest id present.
    pub fn with_rows(rows: Vec<Client>) -> Self {
        let last_id = rows.iter().map(|c| c.id).max().unwrap_or(0);
        let rows = rows.into_iter().map(|c| (c.id, c)).collect();
        Self {
            table: Arc::new(RwLock::new(Table { rows, last_id })),
        }
    }
}

#[async_trait]
impl ClientRepository for InMemoryClientRepository {
    async fn find_page(&self, filter: &ClientFilter, request: &PageRequest) -> Page<Client> {
        let table = self.table.read().await;
        let mut matching: Vec<&Client> = table.rows.values().filter(|c| filter.matches(c)).collect();
        matching.sort_by(|a, b| request.compare(a, b));

        let total = matching.len() as u64;
        let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let content = matching
            .into_iter()
            .skip(offset)
            .take(request.page_size() as usize)
            .cloned()
            .collect();
        Page::new(content, request, total)
    }

    async fn find_by_id(&self, id: i64) -> Option<Client> {
        self.table.read().await.rows.get(&id).cloned()
    }

    async fn insert(&self, dto: ClientDto) -> Client {
        let mut table = self.table.write().await;
        table.last_id += 1;
        let client = dto.into_client(table.last_id);
        table.rows.insert(client.id, client.clone());
        client
    }

    async fn replace(&self, id: i64, dto: ClientDto) -> Option<Client> {
        let mut table = self.table.write().await;
        let row = table.rows.get_mut(&id)?;
        row.replace_with(dto);
        Some(row.clone())
    }

    async fn delete(&self, id: i64) -> bool {
        self.table.write().await.rows.remove(&id).is_some()
    }
}
