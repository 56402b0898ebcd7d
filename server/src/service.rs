//! Business operations over clients.
//!
//! # Design
//! Handlers only ever see `dyn ClientService`, so tests can swap in a mock
//! without touching storage. `ClientServiceImpl` is the real implementation:
//! it turns repository rows into projections and repository misses into
//! `ServiceError::NotFound`.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::error::ServiceError;
use crate::model::ClientDto;
use crate::page::{Page, PageRequest};
use crate::repository::{ClientFilter, ClientRepository};

pub type SharedService = Arc<dyn ClientService>;

#[async_trait]
pub trait ClientService: Send + Sync {
    async fn find_all_paged(&self, request: PageRequest) -> Page<ClientDto>;

    async fn find_by_id(&self, id: i64) -> Result<ClientDto, ServiceError>;

    async fn find_by_income(&self, request: PageRequest, income: f64) -> Page<ClientDto>;

    async fn find_by_income_greater_than(&self, request: PageRequest, income: f64) -> Page<ClientDto>;

    async fn find_by_cpf_like(&self, request: PageRequest, cpf: String) -> Page<ClientDto>;

    async fn insert(&self, dto: ClientDto) -> ClientDto;

    async fn update(&self, id: i64, dto: ClientDto) -> Result<ClientDto, ServiceError>;

    async fn delete(&self, id: i64) -> Result<(), ServiceError>;
}

pub struct ClientServiceImpl<R> {
    repository: R,
}

impl<R: ClientRepository> ClientServiceImpl<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    async fn find_page(&self, filter: ClientFilter, request: PageRequest) -> Page<ClientDto> {
        debug!(?filter, ?request, "listing clients");
        self.repository
            .find_page(&filter, &request)
            .await
            .map(ClientDto::from)
    }
}

#[async_trait]
impl<R: ClientRepository> ClientService for ClientServiceImpl<R> {
    async fn find_all_paged(&self, request: PageRequest) -> Page<ClientDto> {
        self.find_page(ClientFilter::All, request).await
    }

    async fn find_by_id(&self, id: i64) -> Result<ClientDto, ServiceError> {
        self.repository
            .find_by_id(id)
            .await
            .map(ClientDto::from)
            .ok_or_else(|| ServiceError::NotFound("Entity not found".to_string()))
    }

    async fn find_by_income(&self, request: PageRequest, income: f64) -> Page<ClientDto> {
        self.find_page(ClientFilter::IncomeEquals(income), request).await
    }

    async fn find_by_income_greater_than(&self, request: PageRequest, income: f64) -> Page<ClientDto> {
        self.find_page(ClientFilter::IncomeGreaterThan(income), request).await
    }

    async fn find_by_cpf_like(&self, request: PageRequest, cpf: String) -> Page<ClientDto> {
        self.find_page(ClientFilter::CpfContains(cpf), request).await
    }

    async fn insert(&self, dto: ClientDto) -> ClientDto {
        let client = self.repository.insert(dto).await;
        debug!(id = client.id, "client created");
        client.into()
    }

    async fn update(&self, id: i64, dto: ClientDto) -> Result<ClientDto, ServiceError> {
        let client = self
            .repository
            .replace(id, dto)
            .await
            .ok_or_else(|| ServiceError::NotFound(format!("Id not found {id}")))?;
        debug!(id, "client updated");
        Ok(client.into())
    }

    async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        if !self.repository.delete(id).await {
            return Err(ServiceError::NotFound(format!("Id not found {id}")));
        }
        debug!(id, "client deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryClientRepository;

    fn service() -> ClientServiceImpl<InMemoryClientRepository> {
        ClientServiceImpl::new(InMemoryClientRepository::seeded())
    }

    fn dto(name: &str, cpf: &str) -> ClientDto {
        ClientDto {
            id: None,
            name: name.to_string(),
            cpf: cpf.to_string(),
            income: 2000.0,
            birth_date: "2000-01-01T00:00:00Z".parse().unwrap(),
            children: 2,
        }
    }

    #[tokio::test]
    async fn find_by_id_returns_projection() {
        let client = service().find_by_id(3).await.unwrap();
        assert_eq!(client.id, Some(3));
        assert_eq!(client.name, "Clarice Lispector");
    }

    #[tokio::test]
    async fn find_by_id_missing_is_not_found() {
        let err = service().find_by_id(33).await.unwrap_err();
        assert_eq!(err, ServiceError::NotFound("Entity not found".to_string()));
    }

    #[tokio::test]
    async fn update_replaces_all_fields() {
        let service = service();
        let updated = service.update(3, dto("Nome Atualizado", "99999999999")).await.unwrap();
        assert_eq!(updated.id, Some(3));
        assert_eq!(updated.name, "Nome Atualizado");
        assert_eq!(updated.income, 2000.0);

        let stored = service.find_by_id(3).await.unwrap();
        assert_eq!(stored, updated);
    }

    #[tokio::test]
    async fn update_missing_is_not_found() {
        let err = service().update(999, dto("X", "0")).await.unwrap_err();
        assert_eq!(err, ServiceError::NotFound("Id not found 999".to_string()));
    }

    #[tokio::test]
    async fn delete_then_lookup_is_not_found() {
        let service = service();
        service.delete(3).await.unwrap();
        assert!(service.find_by_id(3).await.is_err());
        assert!(service.delete(3).await.is_err());
    }

    #[tokio::test]
    async fn insert_assigns_id_and_ignores_supplied_one() {
        let service = service();
        let mut input = dto("Novo Cliente", "12345678901");
        input.id = Some(1);
        let created = service.insert(input).await;
        assert_eq!(created.id, Some(13));
        assert_eq!(service.find_by_id(1).await.unwrap().name, "Conceição Evaristo");
    }

    #[tokio::test]
    async fn cpf_like_matches_substring() {
        let page = service()
            .find_by_cpf_like(PageRequest::default(), "4452".to_string())
            .await;
        assert_eq!(page.content.len(), 1);
        assert_eq!(page.content[0].name, "Clarice Lispector");
    }
}
