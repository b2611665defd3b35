//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;

use common::AppError;
use domain::{User, UserEmail};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub age: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity.
///
/// Rehydration runs the domain validation again; a row that violates the
/// invariants surfaces as an internal error rather than an invalid entity.
impl TryFrom<Model> for User {
    type Error = AppError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let email = UserEmail::parse(&model.email)
            .map_err(|e| AppError::internal(format!("corrupt user row {}: {}", model.id, e)))?;

        User::restore(Some(model.id), model.name, email, model.age, model.created_at)
            .map_err(|e| AppError::internal(format!("corrupt user row {}: {}", model.id, e)))
    }
}
