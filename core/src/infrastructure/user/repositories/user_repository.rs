use chrono::Utc;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, SqlErr,
};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    user::{
        entities::{User, UserActivity},
        ports::UserRepository,
    },
};
use crate::entity::users::{ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity};

#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pub db: DatabaseConnection,
}

impl PostgresUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_active_model(user: &User) -> Result<UserActiveModel, CoreError> {
    let diet = serde_json::to_value(&user.diet).map_err(|e| {
        error!("Failed to serialize diet: {}", e);
        CoreError::InternalServerError
    })?;

    Ok(UserActiveModel {
        id: Set(user.id),
        name: Set(user.name.clone()),
        email: Set(user.email.clone()),
        password_hash: NotSet,
        join_date: Set(user.join_date.clone()),
        scans: Set(user.scans),
        recipes_generated: Set(user.recipes_generated),
        grocery_purchases: Set(user.grocery_purchases),
        bookings: Set(user.bookings),
        cuisine: Set(user.cuisine.clone()),
        diet: Set(diet),
        last_active: Set(user.last_active.fixed_offset()),
        status: Set(user.status.as_str().to_string()),
        role: Set(user.role.as_str().to_string()),
        created_at: NotSet,
    })
}

/// A concurrent sign-up with the same address loses on the unique email index.
fn create_user_error(sql_err: Option<SqlErr>) -> CoreError {
    match sql_err {
        Some(SqlErr::UniqueConstraintViolation(_)) => CoreError::EmailAlreadyInUse,
        _ => CoreError::InternalServerError,
    }
}

impl UserRepository for PostgresUserRepository {
    async fn create_user(&self, user: User, password_hash: String) -> Result<User, CoreError> {
        let mut model = to_active_model(&user)?;
        model.password_hash = Set(password_hash);
        model.created_at = Set(Utc::now().fixed_offset());

        let created = UserEntity::insert(model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create user: {}", e);
                create_user_error(e.sql_err())
            })?;

        Ok(created.into())
    }

    async fn get_by_id(&self, user_id: Uuid) -> Result<Option<User>, CoreError> {
        let user = UserEntity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get user by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(User::from);

        Ok(user)
    }

    async fn get_by_email(&self, email: String) -> Result<Option<User>, CoreError> {
        let user = UserEntity::find()
            .filter(UserColumn::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get user by email: {}", e);
                CoreError::InternalServerError
            })?
            .map(User::from);

        Ok(user)
    }

    async fn get_password_hash(&self, user_id: Uuid) -> Result<Option<String>, CoreError> {
        let model = UserEntity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get password hash: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(model.map(|m| m.password_hash))
    }

    async fn list_users(&self) -> Result<Vec<User>, CoreError> {
        let users = UserEntity::find()
            .order_by_desc(UserColumn::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list users: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(User::from)
            .collect::<Vec<User>>();

        Ok(users)
    }

    async fn update_user(&self, user: User) -> Result<User, CoreError> {
        let updated = UserEntity::update(to_active_model(&user)?)
            .filter(UserColumn::Id.eq(user.id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update user: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(updated.into())
    }

    async fn record_activity(&self, user_id: Uuid, activity: UserActivity) -> Result<(), CoreError> {
        UserEntity::update_many()
            .col_expr(
                UserColumn::Scans,
                Expr::col(UserColumn::Scans).add(activity.scans),
            )
            .col_expr(
                UserColumn::RecipesGenerated,
                Expr::col(UserColumn::RecipesGenerated).add(activity.recipes_generated),
            )
            .col_expr(
                UserColumn::GroceryPurchases,
                Expr::col(UserColumn::GroceryPurchases).add(activity.grocery_purchases),
            )
            .col_expr(
                UserColumn::Bookings,
                Expr::col(UserColumn::Bookings).add(activity.bookings),
            )
            .col_expr(UserColumn::LastActive, Expr::value(Utc::now().fixed_offset()))
            .filter(UserColumn::Id.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to record user activity: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }

    async fn delete_user(&self, user_id: Uuid) -> Result<(), CoreError> {
        let result = UserEntity::delete_by_id(user_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete user: {}", e);
                CoreError::InternalServerError
            })?;

        if result.rows_affected == 0 {
            return Err(CoreError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_email_on_insert_is_reported_as_such() {
        assert_eq!(
            create_user_error(Some(SqlErr::UniqueConstraintViolation(
                "duplicate key value violates unique constraint \"users_email_key\"".to_string()
            ))),
            CoreError::EmailAlreadyInUse
        );
        assert_eq!(
            create_user_error(Some(SqlErr::ForeignKeyConstraintViolation(
                "fk".to_string()
            ))),
            CoreError::InternalServerError
        );
        assert_eq!(create_user_error(None), CoreError::InternalServerError);
    }
}
