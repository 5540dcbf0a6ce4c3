//! Endereço service - address use cases and database error translation.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::config::{
    DEFAULT_PAGE_NUMBER, MSG_ENDERECO_NAO_ENCONTRADO, MSG_ERRO_ATUALIZAR, MSG_ERRO_CRIAR,
    MSG_ERRO_INTERNO_CRIAR, MSG_ERRO_REMOVER, MSG_PAGINA_VAZIA,
};
use crate::domain::{CreateEndereco, Endereco, UpdateEndereco};
use crate::errors::{AppError, AppResult};
use crate::infra::EnderecoRepository;
use crate::types::{ListQuery, PageRequest, Paginated};

/// Address service trait for dependency injection.
#[async_trait]
pub trait EnderecoService: Send + Sync {
    /// Create an address for an existing client
    async fn create(&self, data: CreateEndereco) -> AppResult<Endereco>;

    /// List addresses page by page
    async fn find_all(&self, query: ListQuery) -> AppResult<Paginated<Endereco>>;

    /// List one client's addresses page by page
    async fn find_by_cliente(
        &self,
        cliente_uuid: Uuid,
        query: ListQuery,
    ) -> AppResult<Paginated<Endereco>>;

    /// Fetch one address
    async fn find_one(&self, uuid: Uuid) -> AppResult<Endereco>;

    /// Apply a partial update
    async fn update(&self, uuid: Uuid, data: UpdateEndereco) -> AppResult<Endereco>;

    /// Delete an address
    async fn remove(&self, uuid: Uuid) -> AppResult<()>;
}

/// Concrete implementation of EnderecoService over a repository.
pub struct EnderecoManager<R: EnderecoRepository + ?Sized> {
    repo: Arc<R>,
    default_limit: u64,
}

impl<R: EnderecoRepository + ?Sized> EnderecoManager<R> {
    /// `default_limit` applies when a list request omits `limit`
    pub fn new(repo: Arc<R>, default_limit: u64) -> Self {
        Self {
            repo,
            default_limit,
        }
    }

    fn page_request(&self, query: &ListQuery) -> AppResult<PageRequest> {
        PageRequest::new(
            query.page.unwrap_or(DEFAULT_PAGE_NUMBER),
            query
                .limit
                .unwrap_or_else(|| i64::try_from(self.default_limit).unwrap_or(i64::MAX)),
        )
    }

    fn paginate(
        page: PageRequest,
        rows: Vec<Endereco>,
        total: u64,
    ) -> AppResult<Paginated<Endereco>> {
        // An empty first page is just an empty collection
        if rows.is_empty() && page.page > 1 {
            return Err(AppError::not_found(MSG_PAGINA_VAZIA));
        }
        Ok(Paginated::new(rows, page, total))
    }
}

#[async_trait]
impl<R: EnderecoRepository + ?Sized> EnderecoService for EnderecoManager<R> {
    async fn create(&self, data: CreateEndereco) -> AppResult<Endereco> {
        let endereco = self.repo.create(data).await.map_err(|e| match e {
            AppError::Constraint(msg) => {
                tracing::warn!(reason = %msg, "Rejected address insert");
                AppError::bad_request(format!("{}: {}", MSG_ERRO_CRIAR, msg))
            }
            other => {
                tracing::error!(error = ?other, "Failed to insert address");
                AppError::internal(MSG_ERRO_INTERNO_CRIAR)
            }
        })?;

        tracing::info!(uuid = %endereco.uuid, cliente = %endereco.cliente_uuid, "Address created");
        Ok(endereco)
    }

    async fn find_all(&self, query: ListQuery) -> AppResult<Paginated<Endereco>> {
        let page = self.page_request(&query)?;
        let (rows, total) = self.repo.find_page(page).await?;
        Self::paginate(page, rows, total)
    }

    async fn find_by_cliente(
        &self,
        cliente_uuid: Uuid,
        query: ListQuery,
    ) -> AppResult<Paginated<Endereco>> {
        let page = self.page_request(&query)?;
        let (rows, total) = self.repo.find_page_by_cliente(cliente_uuid, page).await?;
        Self::paginate(page, rows, total)
    }

    async fn find_one(&self, uuid: Uuid) -> AppResult<Endereco> {
        self.repo
            .find_by_uuid(uuid)
            .await?
            .ok_or_else(|| AppError::not_found(MSG_ENDERECO_NAO_ENCONTRADO))
    }

    async fn update(&self, uuid: Uuid, data: UpdateEndereco) -> AppResult<Endereco> {
        if data.is_empty() {
            return self.find_one(uuid).await;
        }

        let updated = self.repo.update(uuid, data).await.map_err(|e| match e {
            e if e.is_row_missing() => AppError::not_found(MSG_ENDERECO_NAO_ENCONTRADO),
            AppError::Constraint(msg) => {
                tracing::warn!(%uuid, reason = %msg, "Rejected address update");
                AppError::bad_request(format!("{}: {}", MSG_ERRO_ATUALIZAR, msg))
            }
            other => {
                tracing::error!(%uuid, error = ?other, "Failed to update address");
                AppError::internal(MSG_ERRO_ATUALIZAR)
            }
        })?;

        updated.ok_or_else(|| AppError::not_found(MSG_ENDERECO_NAO_ENCONTRADO))
    }

    async fn remove(&self, uuid: Uuid) -> AppResult<()> {
        let removed = self.repo.delete(uuid).await.map_err(|e| {
            tracing::error!(%uuid, error = ?e, "Failed to delete address");
            AppError::internal(MSG_ERRO_REMOVER)
        })?;

        if removed == 0 {
            return Err(AppError::not_found(MSG_ENDERECO_NAO_ENCONTRADO));
        }

        tracing::info!(%uuid, "Address removed");
        Ok(())
    }
}
