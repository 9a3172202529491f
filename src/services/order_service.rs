use crate::entities::{OrderStatus, order_entity as orders};
use crate::error::{AppError, AppResult};
use crate::models::{CreateOrderRequest, OrderWithUserResponse};
use crate::services::UserDirectory;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct OrderService {
    pool: DatabaseConnection,
    users: Arc<dyn UserDirectory>,
}

impl OrderService {
    pub fn new(pool: DatabaseConnection, users: Arc<dyn UserDirectory>) -> Self {
        Self { pool, users }
    }

    /// 创建订单，下单用户必须存在
    pub async fn create_order(&self, request: CreateOrderRequest) -> AppResult<orders::Model> {
        log::info!(
            "Creating order: user_id={}, product_name={}",
            request.user_id,
            request.product_name
        );

        // 用户不存在时直接返回 NotFound，不写入订单
        self.users.get_user_by_id(request.user_id).await?;

        let order = orders::ActiveModel {
            user_id: Set(request.user_id),
            product_name: Set(request.product_name),
            quantity: Set(request.quantity),
            price: Set(request.price),
            status: Set(OrderStatus::Pending),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        log::info!("Order created: id={}", order.id);
        Ok(order)
    }

    pub async fn get_all_orders(&self) -> AppResult<Vec<orders::Model>> {
        let models = orders::Entity::find()
            .order_by_asc(orders::Column::Id)
            .all(&self.pool)
            .await?;
        Ok(models)
    }

    pub async fn get_order_by_id(&self, id: i64) -> AppResult<orders::Model> {
        orders::Entity::find_by_id(id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Order not found with id: {id}")))
    }

    /// 查询用户的全部订单；用户不存在时返回 NotFound，即便没有任何订单
    pub async fn get_orders_by_user_id(&self, user_id: i64) -> AppResult<Vec<orders::Model>> {
        self.users.get_user_by_id(user_id).await?;
        self.find_by_user_id(user_id).await
    }

    pub async fn get_orders_by_status(&self, status: OrderStatus) -> AppResult<Vec<orders::Model>> {
        let models = orders::Entity::find()
            .filter(orders::Column::Status.eq(status))
            .order_by_asc(orders::Column::Id)
            .all(&self.pool)
            .await?;
        Ok(models)
    }

    /// 订单列表附带下单用户信息
    pub async fn get_orders_with_user(&self, user_id: i64) -> AppResult<Vec<OrderWithUserResponse>> {
        let user = self.users.get_user_by_id(user_id).await?;
        let items = self
            .find_by_user_id(user_id)
            .await?
            .into_iter()
            .map(|order| OrderWithUserResponse::new(order, &user))
            .collect();
        Ok(items)
    }

    /// 更新订单状态
    ///
    /// Any status may replace any other, including the current one. There is
    /// no version check, so concurrent updates are last-writer-wins.
    pub async fn update_order_status(
        &self,
        id: i64,
        status: OrderStatus,
    ) -> AppResult<orders::Model> {
        let order = self.get_order_by_id(id).await?;
        let previous = order.status;

        let updated = orders::ActiveModel {
            status: Set(status),
            ..order.into_active_model()
        }
        .update(&self.pool)
        .await?;

        log::info!("Order {id} status changed: {previous} -> {status}");
        Ok(updated)
    }

    async fn find_by_user_id(&self, user_id: i64) -> AppResult<Vec<orders::Model>> {
        let models = orders::Entity::find()
            .filter(orders::Column::UserId.eq(user_id))
            .order_by_asc(orders::Column::Id)
            .all(&self.pool)
            .await?;
        Ok(models)
    }
}
