use crate::entities::user_entity as users;
use crate::error::{AppError, AppResult};
use crate::models::CreateUserRequest;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

/// 按 id 查询用户的能力，订单服务通过它校验下单用户
#[async_trait::async_trait]
pub trait UserDirectory: Send + Sync {
    async fn get_user_by_id(&self, id: i64) -> AppResult<users::Model>;
}

#[derive(Clone)]
pub struct UserService {
    pool: DatabaseConnection,
}

impl UserService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 创建用户
    ///
    /// Email uniqueness is left to the `users.email` unique index; a duplicate
    /// surfaces as `AppError::ConstraintViolation`.
    pub async fn create_user(&self, request: CreateUserRequest) -> AppResult<users::Model> {
        let user = users::ActiveModel {
            email: Set(request.email),
            name: Set(request.name),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        log::info!("User created: id={}, email={}", user.id, user.email);
        Ok(user)
    }

    pub async fn get_all_users(&self) -> AppResult<Vec<users::Model>> {
        let models = users::Entity::find()
            .order_by_asc(users::Column::Id)
            .all(&self.pool)
            .await?;
        Ok(models)
    }

    pub async fn get_user_by_id(&self, id: i64) -> AppResult<users::Model> {
        users::Entity::find_by_id(id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User not found with id: {id}")))
    }

    pub async fn get_user_by_email(&self, email: &str) -> AppResult<Option<users::Model>> {
        let user = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.pool)
            .await?;
        Ok(user)
    }
}

#[async_trait::async_trait]
impl UserDirectory for UserService {
    async fn get_user_by_id(&self, id: i64) -> AppResult<users::Model> {
        UserService::get_user_by_id(self, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::connection::test_pool;

    fn request(email: &str, name: &str) -> CreateUserRequest {
        CreateUserRequest {
            email: email.to_string(),
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_user_assigns_id_and_timestamps() {
        let service = UserService::new(test_pool().await);

        let user = service.create_user(request("a@x.com", "A")).await.unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.name, "A");
        assert_eq!(user.created_at, user.updated_at);

        let fetched = service.get_user_by_id(user.id).await.unwrap();
        assert_eq!(fetched, user);
    }

    #[tokio::test]
    async fn test_ids_are_unique_and_listed_in_insertion_order() {
        let service = UserService::new(test_pool().await);
        let a = service.create_user(request("a@x.com", "A")).await.unwrap();
        let b = service.create_user(request("b@x.com", "B")).await.unwrap();
        assert_ne!(a.id, b.id);

        let all = service.get_all_users().await.unwrap();
        assert_eq!(all, vec![a, b]);
    }

    #[tokio::test]
    async fn test_get_user_by_id_not_found() {
        let service = UserService::new(test_pool().await);
        let err = service.get_user_by_id(42).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_get_user_by_email() {
        let service = UserService::new(test_pool().await);
        let user = service.create_user(request("a@x.com", "A")).await.unwrap();

        assert_eq!(service.get_user_by_email("a@x.com").await.unwrap(), Some(user));
        assert_eq!(service.get_user_by_email("nobody@x.com").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_duplicate_email_is_rejected_by_store() {
        let service = UserService::new(test_pool().await);
        service.create_user(request("a@x.com", "A")).await.unwrap();

        let err = service
            .create_user(request("a@x.com", "Someone else"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ConstraintViolation(_)));
        assert_eq!(service.get_all_users().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_user_directory_delegates_to_service() {
        let service = UserService::new(test_pool().await);
        let user = service.create_user(request("a@x.com", "A")).await.unwrap();

        let directory: &dyn UserDirectory = &service;
        assert_eq!(directory.get_user_by_id(user.id).await.unwrap(), user);
        assert!(matches!(
            directory.get_user_by_id(user.id + 1).await,
            Err(AppError::NotFound(_))
        ));
    }
}
