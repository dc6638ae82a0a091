//! 라우트 구성
//!
//! 모든 API는 `/api/v1` 아래에 리소스별 `web::scope`로 묶입니다.
//! 개별 핸들러가 `AuthenticatedUser` 추출기로 인증을 요구하고,
//! 전부 보호되는 스코프는 `AuthMiddleware::required()`로 감쌉니다.

use actix_web::{error::JsonPayloadError, get, web, HttpRequest, HttpResponse};
use serde_json::json;

use crate::errors::errors::AppError;
use crate::handlers;
use crate::middlewares::AuthMiddleware;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler));
    cfg.service(index).service(health_check);

    configure_user_routes(cfg);
    configure_auth_routes(cfg);
    configure_profile_routes(cfg);
    configure_post_routes(cfg);
    configure_group_routes(cfg);
    configure_conversation_routes(cfg);
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .service(handlers::users::register)
            .service(handlers::users::list_users)
            .service(handlers::users::paginate_users)
            .service(handlers::users::get_user)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user),
    );
}

fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/auth")
            .service(handlers::auth::login)
            .service(handlers::auth::current_user)
            .service(handlers::auth::refresh_token)
            .service(handlers::auth::revoke_token)
            .service(handlers::auth::list_refresh_tokens),
    );
}

fn configure_profile_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/profile")
            .service(handlers::profiles::list_profiles)
            .service(handlers::profiles::my_profile)
            .service(handlers::profiles::profile_by_user)
            .service(handlers::profiles::upsert_profile)
            .service(handlers::profiles::delete_profile)
            .service(handlers::profiles::add_experience)
            .service(handlers::profiles::remove_experience)
            .service(handlers::profiles::add_education)
            .service(handlers::profiles::remove_education)
            .service(handlers::profiles::follow)
            .service(handlers::profiles::unfollow)
            .service(handlers::profiles::send_friend_request)
            .service(handlers::profiles::accept_friend_request)
            .service(handlers::profiles::unfriend),
    );
}

fn configure_post_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/posts")
            .service(handlers::posts::create_post)
            .service(handlers::posts::list_posts)
            .service(handlers::posts::paginate_posts)
            .service(handlers::posts::like_post)
            .service(handlers::posts::unlike_post)
            .service(handlers::posts::share_post)
            .service(handlers::posts::unshare_post)
            .service(handlers::posts::add_comment)
            .service(handlers::posts::remove_comment)
            .service(handlers::posts::get_post)
            .service(handlers::posts::update_post)
            .service(handlers::posts::delete_post),
    );
}

fn configure_group_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/groups")
            .service(handlers::groups::create_group)
            .service(handlers::groups::list_groups)
            .service(handlers::groups::get_group)
            .service(handlers::groups::update_group)
            .service(handlers::groups::delete_group)
            .service(handlers::groups::join_group)
            .service(handlers::groups::approve_join_request)
            .service(handlers::groups::list_members)
            .service(handlers::groups::remove_member)
            .service(handlers::groups::add_manager)
            .service(handlers::groups::remove_manager),
    );
}

fn configure_conversation_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/conversations")
            .wrap(AuthMiddleware::required())
            .service(handlers::conversations::send_message)
            .service(handlers::conversations::my_conversations)
            .service(handlers::conversations::get_conversation),
    );
}

/// 잘못된 JSON 본문은 다른 검증 오류와 같은 400 형식으로 응답합니다.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::debug!("JSON 본문 파싱 실패: {}", err);
    AppError::ValidationError(err.to_string()).into()
}

#[get("/")]
async fn index() -> HttpResponse {
    HttpResponse::Ok().body("API is running...")
}

#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "social_network_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "database": "MongoDB",
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuthSettings;
    use crate::services::auth::TokenService;
    use actix_web::{http::StatusCode, test, App};

    #[actix_web::test]
    async fn test_index_and_health() {
        let app = test::init_service(App::new().service(index).service(health_check)).await;

        let body = test::call_and_read_body(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(body, "API is running...".as_bytes());

        let health: serde_json::Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::get().uri("/health").to_request(),
        )
        .await;
        assert_eq!(health["status"], "healthy");
    }

    #[actix_web::test]
    async fn test_json_errors_become_validation_errors() {
        let req = test::TestRequest::default().to_http_request();
        let err = json_error_handler(JsonPayloadError::ContentType, &req);

        let res = err.error_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_conversations_scope_requires_token() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(TokenService::new(&AuthSettings::for_tests())))
                .configure(configure_conversation_routes),
        )
        .await;

        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/v1/conversations").to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }
}
