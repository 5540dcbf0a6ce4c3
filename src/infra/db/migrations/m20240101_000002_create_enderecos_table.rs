//! Migration: Create the enderecos table with its client foreign key.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_clientes_table::Clientes;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Enderecos::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Enderecos::Uuid).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Enderecos::Logradouro).string().not_null())
                    .col(ColumnDef::new(Enderecos::Numero).string_len(20).not_null())
                    .col(ColumnDef::new(Enderecos::Complemento).string().null())
                    .col(ColumnDef::new(Enderecos::Bairro).string().not_null())
                    .col(ColumnDef::new(Enderecos::Cidade).string().not_null())
                    .col(ColumnDef::new(Enderecos::Estado).char_len(2).not_null())
                    .col(ColumnDef::new(Enderecos::Cep).string_len(9).not_null())
                    .col(ColumnDef::new(Enderecos::ClienteUuid).uuid().not_null())
                    .col(
                        ColumnDef::new(Enderecos::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Enderecos::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_enderecos_cliente_uuid")
                            .from(Enderecos::Table, Enderecos::ClienteUuid)
                            .to(Clientes::Table, Clientes::Uuid)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_enderecos_cliente_uuid")
                    .table(Enderecos::Table)
                    .col(Enderecos::ClienteUuid)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_enderecos_cliente_uuid")
                    .table(Enderecos::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Enderecos::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Enderecos {
    Table,
    Uuid,
    Logradouro,
    Numero,
    Complemento,
    Bairro,
    Cidade,
    Estado,
    Cep,
    ClienteUuid,
    CreatedAt,
    UpdatedAt,
}
