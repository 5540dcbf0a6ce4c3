//! Endereço repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Select, Set,
};
use uuid::Uuid;

use super::entities::endereco::{self, ActiveModel, Entity as EnderecoEntity};
use crate::domain::{CreateEndereco, Endereco, UpdateEndereco};
use crate::errors::AppResult;
use crate::types::PageRequest;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Address repository trait for dependency injection.
///
/// Database failures surface as `AppError::Database`; the service layer
/// decides which status each one becomes.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EnderecoRepository: Send + Sync {
    /// Insert a new address with a fresh uuid
    async fn create(&self, data: CreateEndereco) -> AppResult<Endereco>;

    /// Find address by uuid
    async fn find_by_uuid(&self, uuid: Uuid) -> AppResult<Option<Endereco>>;

    /// One page of addresses plus the total row count
    async fn find_page(&self, page: PageRequest) -> AppResult<(Vec<Endereco>, u64)>;

    /// One page of a single client's addresses plus their total count
    async fn find_page_by_cliente(
        &self,
        cliente_uuid: Uuid,
        page: PageRequest,
    ) -> AppResult<(Vec<Endereco>, u64)>;

    /// Apply the present fields; `Ok(None)` when the row does not exist
    async fn update(&self, uuid: Uuid, data: UpdateEndereco) -> AppResult<Option<Endereco>>;

    /// Delete by uuid, returning the number of rows removed
    async fn delete(&self, uuid: Uuid) -> AppResult<u64>;
}

/// SeaORM-backed implementation of EnderecoRepository
pub struct EnderecoStore {
    db: DatabaseConnection,
}

impl EnderecoStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn fetch_page(
        &self,
        query: Select<EnderecoEntity>,
        page: PageRequest,
    ) -> AppResult<(Vec<Endereco>, u64)> {
        let models = query
            .clone()
            .order_by_asc(endereco::Column::CreatedAt)
            .order_by_asc(endereco::Column::Uuid)
            .offset(page.offset())
            .limit(page.limit)
            .all(&self.db)
            .await?;

        let total = query.count(&self.db).await?;

        Ok((models.into_iter().map(Endereco::from).collect(), total))
    }
}

#[async_trait]
impl EnderecoRepository for EnderecoStore {
    async fn create(&self, data: CreateEndereco) -> AppResult<Endereco> {
        let now = Utc::now();
        let active_model = ActiveModel {
            uuid: Set(Uuid::new_v4()),
            logradouro: Set(data.logradouro),
            numero: Set(data.numero),
            complemento: Set(data.complemento),
            bairro: Set(data.bairro),
            cidade: Set(data.cidade),
            estado: Set(data.estado),
            cep: Set(data.cep),
            cliente_uuid: Set(data.cliente_uuid),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await?;
        Ok(Endereco::from(model))
    }

    async fn find_by_uuid(&self, uuid: Uuid) -> AppResult<Option<Endereco>> {
        let result = EnderecoEntity::find_by_id(uuid).one(&self.db).await?;
        Ok(result.map(Endereco::from))
    }

    async fn find_page(&self, page: PageRequest) -> AppResult<(Vec<Endereco>, u64)> {
        self.fetch_page(EnderecoEntity::find(), page).await
    }

    async fn find_page_by_cliente(
        &self,
        cliente_uuid: Uuid,
        page: PageRequest,
    ) -> AppResult<(Vec<Endereco>, u64)> {
        let query = EnderecoEntity::find().filter(endereco::Column::ClienteUuid.eq(cliente_uuid));
        self.fetch_page(query, page).await
    }

    async fn update(&self, uuid: Uuid, data: UpdateEndereco) -> AppResult<Option<Endereco>> {
        let Some(existing) = EnderecoEntity::find_by_id(uuid).one(&self.db).await? else {
            return Ok(None);
        };

        let mut active: ActiveModel = existing.into();

        if let Some(logradouro) = data.logradouro {
            active.logradouro = Set(logradouro);
        }
        if let Some(numero) = data.numero {
            active.numero = Set(numero);
        }
        if let Some(complemento) = data.complemento {
            active.complemento = Set(complemento);
        }
        if let Some(bairro) = data.bairro {
            active.bairro = Set(bairro);
        }
        if let Some(cidade) = data.cidade {
            active.cidade = Set(cidade);
        }
        if let Some(estado) = data.estado {
            active.estado = Set(estado);
        }
        if let Some(cep) = data.cep {
            active.cep = Set(cep);
        }
        if let Some(cliente_uuid) = data.cliente_uuid {
            active.cliente_uuid = Set(cliente_uuid);
        }
        active.updated_at = Set(Utc::now());

        let model = active.update(&self.db).await?;
        Ok(Some(Endereco::from(model)))
    }

    async fn delete(&self, uuid: Uuid) -> AppResult<u64> {
        let result = EnderecoEntity::delete_by_id(uuid).exec(&self.db).await?;
        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult, Value};

    use super::*;
    use crate::errors::AppError;
    use crate::infra::repositories::entities::endereco::Model as EnderecoModel;

    fn model(uuid: Uuid) -> EnderecoModel {
        let now = Utc::now();
        EnderecoModel {
            uuid,
            logradouro: "Rua das Flores".to_string(),
            numero: "123".to_string(),
            complemento: None,
            bairro: "Centro".to_string(),
            cidade: "São Paulo".to_string(),
            estado: "SP".to_string(),
            cep: "01001-000".to_string(),
            cliente_uuid: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
        }
    }

    fn payload(cliente_uuid: Uuid) -> CreateEndereco {
        CreateEndereco {
            logradouro: "Rua das Flores".to_string(),
            numero: "123".to_string(),
            complemento: None,
            bairro: "Centro".to_string(),
            cidade: "São Paulo".to_string(),
            estado: "SP".to_string(),
            cep: "01001-000".to_string(),
            cliente_uuid,
        }
    }

    #[tokio::test]
    async fn test_create_returns_inserted_row() {
        let row = model(Uuid::new_v4());
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row.clone()]])
            .into_connection();

        let store = EnderecoStore::new(db);
        let created = store.create(payload(row.cliente_uuid)).await.unwrap();

        assert_eq!(created, Endereco::from(row));
    }

    #[tokio::test]
    async fn test_create_failure_surfaces_as_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();

        let store = EnderecoStore::new(db);
        let err = store.create(payload(Uuid::new_v4())).await.unwrap_err();

        assert!(matches!(err, AppError::Database(_)));
    }

    #[tokio::test]
    async fn test_update_returns_stored_row() {
        let uuid = Uuid::new_v4();
        let before = model(uuid);
        let after = EnderecoModel {
            numero: "456".to_string(),
            ..before.clone()
        };
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![before]])
            .append_query_results([vec![after.clone()]])
            .into_connection();

        let store = EnderecoStore::new(db);
        let data = UpdateEndereco {
            numero: Some("456".to_string()),
            ..Default::default()
        };
        let updated = store.update(uuid, data).await.unwrap();

        assert_eq!(updated, Some(Endereco::from(after)));
    }

    #[tokio::test]
    async fn test_find_by_uuid_maps_model() {
        let uuid = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(uuid)]])
            .into_connection();

        let store = EnderecoStore::new(db);
        let found = store.find_by_uuid(uuid).await.unwrap();

        assert_eq!(found.map(|e| e.uuid), Some(uuid));
    }

    #[tokio::test]
    async fn test_find_page_returns_rows_and_total() {
        let count_row = BTreeMap::from([("num_items", Value::from(3i64))]);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(Uuid::new_v4()), model(Uuid::new_v4())]])
            .append_query_results([vec![count_row]])
            .into_connection();

        let store = EnderecoStore::new(db);
        let (rows, total) = store
            .find_page(PageRequest { page: 1, limit: 2 })
            .await
            .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(total, 3);
    }

    #[tokio::test]
    async fn test_update_missing_row_returns_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<EnderecoModel>::new()])
            .into_connection();

        let store = EnderecoStore::new(db);
        let result = store
            .update(Uuid::new_v4(), UpdateEndereco::default())
            .await
            .unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_reports_rows_affected() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let store = EnderecoStore::new(db);
        assert_eq!(store.delete(Uuid::new_v4()).await.unwrap(), 0);
    }
}
