use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::entities::OrderStatus;
use crate::handlers;
use crate::models::*;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::user::create_user,
        handlers::user::get_all_users,
        handlers::user::get_user_by_id,
        handlers::user::get_user_by_email,
        handlers::order::create_order,
        handlers::order::get_all_orders,
        handlers::order::get_order_by_id,
        handlers::order::get_orders_by_user_id,
        handlers::order::get_orders_with_user,
        handlers::order::get_orders_by_status,
        handlers::order::update_order_status,
    ),
    components(
        schemas(
            CreateUserRequest,
            UserResponse,
            CreateOrderRequest,
            UpdateOrderStatusRequest,
            OrderResponse,
            OrderWithUserResponse,
            OrderStatus,
            ApiError,
        )
    ),
    tags(
        (name = "user", description = "User management API"),
        (name = "order", description = "Order management API"),
    ),
    info(
        title = "Order Backend API",
        version = "0.1.0",
        description = "Users and orders REST API"
    ),
    servers(
        (url = "/api", description = "Local server")
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .route(
        "/swagger-ui",
        web::get().to(|| async {
            actix_web::HttpResponse::Found()
                .append_header(("Location", "/swagger-ui/"))
                .finish()
        }),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        for expected in [
            "/users",
            "/users/{id}",
            "/users/email/{email}",
            "/orders",
            "/orders/{id}",
            "/orders/{id}/status",
            "/orders/user/{user_id}",
            "/orders/user/{user_id}/details",
            "/orders/status/{status}",
        ] {
            assert!(
                paths.iter().any(|p| p.as_str() == expected),
                "missing {expected}"
            );
        }
    }
}
