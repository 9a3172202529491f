use crate::models::*;
use crate::services::UserService;
use actix_web::{HttpResponse, ResponseError, Result, web};

#[utoipa::path(
    post,
    path = "/users",
    tag = "user",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Malformed request body"),
        (status = 409, description = "Email already registered", body = ApiError)
    )
)]
pub async fn create_user(
    user_service: web::Data<UserService>,
    request: web::Json<CreateUserRequest>,
) -> Result<HttpResponse> {
    match user_service.create_user(request.into_inner()).await {
        Ok(user) => Ok(HttpResponse::Created().json(ApiResponse::success(UserResponse::from(user)))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/users",
    tag = "user",
    responses(
        (status = 200, description = "All users", body = [UserResponse])
    )
)]
pub async fn get_all_users(user_service: web::Data<UserService>) -> Result<HttpResponse> {
    match user_service.get_all_users().await {
        Ok(users) => {
            let items: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
            Ok(HttpResponse::Ok().json(ApiResponse::success(items)))
        }
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "user",
    params(
        ("id" = i64, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found", body = ApiError)
    )
)]
pub async fn get_user_by_id(
    user_service: web::Data<UserService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match user_service.get_user_by_id(path.into_inner()).await {
        Ok(user) => Ok(HttpResponse::Ok().json(ApiResponse::success(UserResponse::from(user)))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/users/email/{email}",
    tag = "user",
    params(
        ("email" = String, Path, description = "User email")
    ),
    responses(
        (status = 200, description = "Lookup result, data is null when no user has this email", body = UserResponse)
    )
)]
pub async fn get_user_by_email(
    user_service: web::Data<UserService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    match user_service.get_user_by_email(&path.into_inner()).await {
        Ok(user) => Ok(HttpResponse::Ok().json(ApiResponse::success(user.map(UserResponse::from)))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn user_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .route("", web::post().to(create_user))
            .route("", web::get().to(get_all_users))
            .route("/email/{email}", web::get().to(get_user_by_email))
            .route("/{id}", web::get().to(get_user_by_id)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::connection::test_pool;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use serde_json::{Value, json};

    macro_rules! user_app {
        () => {{
            let user_service = UserService::new(test_pool().await);
            test::init_service(
                App::new()
                    .app_data(web::Data::new(user_service))
                    .service(web::scope("/api").configure(user_config)),
            )
            .await
        }};
    }

    #[actix_web::test]
    async fn test_create_and_fetch_user() {
        let app = user_app!();

        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({ "email": "a@x.com", "name": "A" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["id"], 1);
        assert_eq!(body["data"]["email"], "a@x.com");

        let req = test::TestRequest::get().uri("/api/users/1").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["name"], "A");

        let req = test::TestRequest::get().uri("/api/users").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"].as_array().map(Vec::len), Some(1));
    }

    #[actix_web::test]
    async fn test_unknown_user_is_404() {
        let app = user_app!();

        let req = test::TestRequest::get().uri("/api/users/99").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_email_lookup_returns_null_when_absent() {
        let app = user_app!();

        let req = test::TestRequest::get()
            .uri("/api/users/email/nobody@x.com")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert!(body["data"].is_null());
    }

    #[actix_web::test]
    async fn test_duplicate_email_is_409() {
        let app = user_app!();

        for expected in [StatusCode::CREATED, StatusCode::CONFLICT] {
            let req = test::TestRequest::post()
                .uri("/api/users")
                .set_json(json!({ "email": "a@x.com", "name": "A" }))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), expected);
        }
    }

    #[actix_web::test]
    async fn test_missing_field_is_rejected() {
        let app = user_app!();

        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({ "email": "a@x.com" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
