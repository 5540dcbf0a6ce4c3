//! Cliente database entity for SeaORM.
//!
//! Clients are managed elsewhere; the table is mapped here so that the
//! address relation can be expressed and enforced.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "clientes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub uuid: Uuid,
    pub nome: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::endereco::Entity")]
    Endereco,
}

impl Related<super::endereco::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Endereco.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
