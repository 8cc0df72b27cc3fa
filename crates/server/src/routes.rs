use crate::config::ListingMode;
use crate::error::ApiError;
use crate::state::AppState;
use actix_web::{http::header, web, HttpResponse};
use tracing::{debug, error};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api").route(web::get().to(list_users)));
}

async fn list_users(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let users = state.store.fetch_all().await.map_err(|e| {
        error!("Failed to list users: {}", e);
        ApiError::from(e)
    })?;
    debug!("Listed {} users", users.len());

    match state.listing_mode {
        ListingMode::Dump => Ok(HttpResponse::Ok().json(users)),
        // rows are read and dropped
        ListingMode::PostOnly => Ok(HttpResponse::MethodNotAllowed()
            .insert_header((header::ALLOW, "POST"))
            .finish()),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::store::test::{InMemoryUserStore, UnreachableUserStore};
    use crate::store::{User, UserStore};
    use actix_web::{http::StatusCode, test, App};
    use serde_json::json;
    use std::sync::Arc;

    fn state(store: impl UserStore + 'static, listing_mode: ListingMode) -> web::Data<AppState> {
        web::Data::new(AppState::new(Arc::new(store), listing_mode))
    }

    #[actix_web::test]
    async fn test_dump_empty_store() {
        let app = test::init_service(
            App::new()
                .app_data(state(InMemoryUserStore::new(Vec::new()), ListingMode::Dump))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/api").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        let body = test::read_body(resp).await;
        assert_eq!(body.as_ref(), b"[]");
    }

    #[actix_web::test]
    async fn test_dump_returns_every_row_untouched() {
        let rows = vec![
            json!({"id": "u1", "email": "a@example.com", "firstName": "Ada"}),
            json!({"id": "u2", "rating": 1350, "tags": ["blitz"]}),
            json!({"id": "u3"}),
        ];
        let store = InMemoryUserStore::new(rows.iter().cloned().map(User).collect());
        let app = test::init_service(
            App::new()
                .app_data(state(store, ListingMode::Dump))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/api").to_request();
        let body: Vec<serde_json::Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, rows);
    }

    #[actix_web::test]
    async fn test_dump_store_failure_is_server_error() {
        let app = test::init_service(
            App::new()
                .app_data(state(UnreachableUserStore, ListingMode::Dump))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/api").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = test::read_body(resp).await;
        assert!(body.is_empty());
    }

    #[actix_web::test]
    async fn test_post_only_refuses_get() {
        let populated = InMemoryUserStore::new(vec![User(json!({"id": "u1"}))]);
        let empty = InMemoryUserStore::new(Vec::new());
        for app_state in [
            state(populated, ListingMode::PostOnly),
            state(empty, ListingMode::PostOnly),
        ] {
            let app =
                test::init_service(App::new().app_data(app_state).configure(configure)).await;

            let req = test::TestRequest::get().uri("/api").to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
            assert_eq!(resp.headers().get(header::ALLOW).unwrap(), "POST");
            let body = test::read_body(resp).await;
            assert!(body.is_empty());
        }
    }

    #[actix_web::test]
    async fn test_post_only_store_failure_is_server_error() {
        let app = test::init_service(
            App::new()
                .app_data(state(UnreachableUserStore, ListingMode::PostOnly))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/api").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(resp.headers().get(header::ALLOW).is_none());
    }

    #[actix_web::test]
    async fn test_other_methods_are_rejected() {
        let app = test::init_service(
            App::new()
                .app_data(state(InMemoryUserStore::new(Vec::new()), ListingMode::Dump))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post().uri("/api").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
