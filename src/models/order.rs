use crate::entities::{OrderStatus, order_entity, user_entity};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 价格保留两位小数
const PRICE_SCALE: u32 = 2;

fn with_price_scale(mut price: Decimal) -> Decimal {
    price.rescale(PRICE_SCALE);
    price
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    #[schema(example = 1)]
    pub user_id: i64,
    #[schema(example = "Widget")]
    pub product_name: String,
    #[schema(example = 2)]
    pub quantity: i32,
    #[schema(value_type = String, example = "9.99")]
    pub price: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderResponse {
    pub id: i64,
    pub user_id: i64,
    pub product_name: String,
    pub quantity: i32,
    #[schema(value_type = String, example = "9.99")]
    pub price: Decimal,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<order_entity::Model> for OrderResponse {
    fn from(m: order_entity::Model) -> Self {
        Self {
            id: m.id,
            user_id: m.user_id,
            product_name: m.product_name,
            quantity: m.quantity,
            price: with_price_scale(m.price),
            status: m.status,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

/// 订单 + 下单用户信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderWithUserResponse {
    pub order_id: i64,
    pub product_name: String,
    pub quantity: i32,
    #[schema(value_type = String, example = "9.99")]
    pub price: Decimal,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub user_id: i64,
    pub user_name: String,
    pub user_email: String,
}

impl OrderWithUserResponse {
    pub fn new(order: order_entity::Model, user: &user_entity::Model) -> Self {
        Self {
            order_id: order.id,
            product_name: order.product_name,
            quantity: order.quantity,
            price: with_price_scale(order.price),
            status: order.status,
            created_at: order.created_at,
            user_id: user.id,
            user_name: user.name.clone(),
            user_email: user.email.clone(),
        }
    }
}
