use crate::entities::OrderStatus;
use crate::models::*;
use crate::services::OrderService;
use actix_web::{HttpResponse, ResponseError, Result, web};

fn to_responses(orders: Vec<crate::entities::order_entity::Model>) -> Vec<OrderResponse> {
    orders.into_iter().map(OrderResponse::from).collect()
}

#[utoipa::path(
    post,
    path = "/orders",
    tag = "order",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created with status PENDING", body = OrderResponse),
        (status = 400, description = "Malformed request body"),
        (status = 404, description = "User not found", body = ApiError)
    )
)]
pub async fn create_order(
    order_service: web::Data<OrderService>,
    request: web::Json<CreateOrderRequest>,
) -> Result<HttpResponse> {
    match order_service.create_order(request.into_inner()).await {
        Ok(order) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(OrderResponse::from(order))))
        }
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/orders",
    tag = "order",
    responses(
        (status = 200, description = "All orders", body = [OrderResponse])
    )
)]
pub async fn get_all_orders(order_service: web::Data<OrderService>) -> Result<HttpResponse> {
    match order_service.get_all_orders().await {
        Ok(orders) => Ok(HttpResponse::Ok().json(ApiResponse::success(to_responses(orders)))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/orders/{id}",
    tag = "order",
    params(
        ("id" = i64, Path, description = "Order id")
    ),
    responses(
        (status = 200, description = "Order found", body = OrderResponse),
        (status = 404, description = "Order not found", body = ApiError)
    )
)]
pub async fn get_order_by_id(
    order_service: web::Data<OrderService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match order_service.get_order_by_id(path.into_inner()).await {
        Ok(order) => Ok(HttpResponse::Ok().json(ApiResponse::success(OrderResponse::from(order)))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/orders/user/{user_id}",
    tag = "order",
    params(
        ("user_id" = i64, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Orders of the user", body = [OrderResponse]),
        (status = 404, description = "User not found", body = ApiError)
    )
)]
pub async fn get_orders_by_user_id(
    order_service: web::Data<OrderService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match order_service.get_orders_by_user_id(path.into_inner()).await {
        Ok(orders) => Ok(HttpResponse::Ok().json(ApiResponse::success(to_responses(orders)))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/orders/user/{user_id}/details",
    tag = "order",
    params(
        ("user_id" = i64, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Orders of the user with the user's name and email", body = [OrderWithUserResponse]),
        (status = 404, description = "User not found", body = ApiError)
    )
)]
pub async fn get_orders_with_user(
    order_service: web::Data<OrderService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match order_service.get_orders_with_user(path.into_inner()).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(items))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/orders/status/{status}",
    tag = "order",
    params(
        ("status" = OrderStatus, Path, description = "Order status")
    ),
    responses(
        (status = 200, description = "Orders currently in the status", body = [OrderResponse])
    )
)]
pub async fn get_orders_by_status(
    order_service: web::Data<OrderService>,
    path: web::Path<OrderStatus>,
) -> Result<HttpResponse> {
    match order_service.get_orders_by_status(path.into_inner()).await {
        Ok(orders) => Ok(HttpResponse::Ok().json(ApiResponse::success(to_responses(orders)))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    patch,
    path = "/orders/{id}/status",
    tag = "order",
    params(
        ("id" = i64, Path, description = "Order id")
    ),
    request_body = UpdateOrderStatusRequest,
    responses(
        (status = 200, description = "Status replaced", body = OrderResponse),
        (status = 400, description = "Malformed request body"),
        (status = 404, description = "Order not found", body = ApiError)
    )
)]
pub async fn update_order_status(
    order_service: web::Data<OrderService>,
    path: web::Path<i64>,
    request: web::Json<UpdateOrderStatusRequest>,
) -> Result<HttpResponse> {
    match order_service
        .update_order_status(path.into_inner(), request.status)
        .await
    {
        Ok(order) => Ok(HttpResponse::Ok().json(ApiResponse::success(OrderResponse::from(order)))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn order_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/orders")
            .route("", web::post().to(create_order))
            .route("", web::get().to(get_all_orders))
            .route("/user/{user_id}/details", web::get().to(get_orders_with_user))
            .route("/user/{user_id}", web::get().to(get_orders_by_user_id))
            .route("/status/{status}", web::get().to(get_orders_by_status))
            .route("/{id}/status", web::patch().to(update_order_status))
            .route("/{id}", web::get().to(get_order_by_id)),
    );
}
