use axum::{extract::Query as UrlQuery, http::StatusCode, routing::get, Json, Router};
use content_sdk::{ContentClient, ContentClientOptions, ContentError, Envelope, Query, Skill};
use serde_json::json;
use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve test app");
    });
    format!("http://{addr}")
}

fn client(base_url: &str) -> ContentClient {
    ContentClient::new(ContentClientOptions {
        base_url: Some(base_url.to_string()),
        ..Default::default()
    })
    .expect("client should construct")
}

#[test]
fn construction_requires_a_base_url() {
    let err = ContentClient::new(ContentClientOptions::default())
        .err()
        .expect("construction should fail");
    assert!(matches!(err, ContentError::MissingBaseUrl));

    let err = ContentClient::new(ContentClientOptions {
        base_url: Some("   ".to_string()),
        ..Default::default()
    })
    .err()
    .expect("blank base url should fail");
    assert!(matches!(err, ContentError::MissingBaseUrl));
}

#[test]
fn media_urls_resolve_against_the_backend_origin() {
    let client = client("http://localhost:1337/");
    assert_eq!(
        client.resolve_media_url("/uploads/cover.png"),
        "http://localhost:1337/uploads/cover.png"
    );
    assert_eq!(
        client.resolve_media_url("https://cdn.example.com/cover.png"),
        "https://cdn.example.com/cover.png"
    );
    assert_eq!(client.resolve_media_url(""), "");
}

#[tokio::test]
async fn profile_request_carries_population_and_locale() {
    let seen: Arc<Mutex<Vec<(String, String)>>> = Arc::default();
    let seen_handler = seen.clone();
    let app = Router::new().route(
        "/api/profile",
        get(
            move |UrlQuery(params): UrlQuery<Vec<(String, String)>>| {
                let seen = seen_handler.clone();
                async move {
                    *seen.lock().expect("params lock") = params;
                    Json(json!({"data": {"id": 1, "brandName": "rvllfil"}}))
                }
            },
        ),
    );
    let base = serve(app).await;

    let envelope = client(&base)
        .get_profile(Some("id"))
        .await
        .expect("profile fetch");
    let profile = envelope.data.expect("profile data");
    assert_eq!(profile.brand_name, "rvllfil");

    let params = seen.lock().expect("params lock").clone();
    assert!(params.contains(&("populate[social_links]".to_string(), "*".to_string())));
    assert!(params.contains(&("populate[portofolio_number]".to_string(), "*".to_string())));
    assert!(params.contains(&("locale".to_string(), "id".to_string())));
}

#[tokio::test]
async fn required_resource_failures_propagate() {
    let app = Router::new().route(
        "/api/skills",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let base = serve(app).await;

    let err = client(&base)
        .get_skills()
        .await
        .err()
        .expect("skills fetch should fail");
    match err {
        ContentError::Status(status, url) => {
            assert_eq!(status, reqwest::StatusCode::INTERNAL_SERVER_ERROR);
            assert!(url.contains("/api/skills"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn optional_resources_soft_fail_to_empty_envelopes() {
    let app = Router::new()
        .route(
            "/api/hero-section",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        )
        .route(
            "/api/testimonials",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
    let base = serve(app).await;
    let client = client(&base);

    let hero = client.get_hero_section().await;
    assert!(hero.data.is_none());

    let testimonials = client.get_testimonials().await;
    assert!(testimonials.data.is_empty());

    // The services endpoint does not exist at all (404) and still soft-fails.
    let services = client.get_services().await;
    assert!(services.data.is_empty());
}

#[tokio::test]
async fn slug_lookup_returns_first_match_or_none() {
    let app = Router::new().route(
        "/api/portofolios",
        get(|UrlQuery(params): UrlQuery<Vec<(String, String)>>| async move {
            let slug = params
                .iter()
                .find(|(key, _)| key == "filters[slug][$eq]")
                .map(|(_, value)| value.clone())
                .unwrap_or_default();
            if slug == "known-project" {
                Json(json!({
                    "data": [{"id": 1, "title": "Known", "slug": "known-project"}],
                    "meta": {}
                }))
            } else {
                Json(json!({
                    "data": [],
                    "meta": {"pagination": {"page": 1, "pageSize": 25, "pageCount": 0, "total": 0}}
                }))
            }
        }),
    );
    let base = serve(app).await;
    let client = client(&base);

    let hit = client
        .get_portfolio_item_by_slug("known-project", None)
        .await
        .expect("slug fetch");
    assert_eq!(hit.expect("should match").title, "Known");

    let miss = client
        .get_portfolio_item_by_slug("missing", None)
        .await
        .expect("slug fetch");
    assert!(miss.is_none());
}

#[tokio::test]
async fn responses_are_cached_within_the_revalidation_window() {
    let hits = Arc::new(AtomicUsize::new(0));
    let handler_hits = hits.clone();
    let app = Router::new().route(
        "/api/skills",
        get(move || {
            let hits = handler_hits.clone();
            async move {
                hits.fetch_add(1, Ordering::SeqCst);
                Json(json!({
                    "data": [{"id": 1, "name": "Rust", "order": 1}],
                    "meta": {}
                }))
            }
        }),
    );
    let base = serve(app).await;
    let client = client(&base);

    let first = client.get_skills().await.expect("first fetch");
    let second = client.get_skills().await.expect("second fetch");
    assert_eq!(first.data[0].name, second.data[0].name);
    assert_eq!(hits.load(Ordering::SeqCst), 1);

    // A zero revalidation window on the same URL forces a refetch.
    let query = Query::new().sort("order:asc").revalidate(Duration::ZERO);
    let _: Envelope<Vec<Skill>> = client
        .fetch_envelope("/api/skills", &query)
        .await
        .expect("refetch");
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn profile_view_merges_overlays_from_the_backend() {
    let app = Router::new()
        .route(
            "/api/profile",
            get(|| async {
                Json(json!({"data": {
                    "id": 1,
                    "brandName": "rvllfil",
                    "tagline": "Base tagline",
                    "portfolioNumber": [{"id": 1, "label": "Projects", "value": "12"}]
                }}))
            }),
        )
        .route(
            "/api/hero-section",
            get(|| async {
                Json(json!({"data": {
                    "tagline": "Hero tagline",
                    "portfolioNumber": [{"id": 2, "label": "Hero stat", "value": "3"}]
                }}))
            }),
        )
        .route(
            "/api/about-section",
            get(|| async {
                Json(json!({"data": {
                    "aboutSectionTitle": "About me",
                    "portfolioNumber": [{"id": 3, "label": "About stat", "value": "9"}]
                }}))
            }),
        );
    // The contact section route is absent; its fetch soft-fails.
    let base = serve(app).await;

    let view = client(&base)
        .get_profile_view(None)
        .await
        .expect("view fetch")
        .expect("merged view");
    assert_eq!(view.brand_name.as_deref(), Some("rvllfil"));
    assert_eq!(view.tagline.as_deref(), Some("Hero tagline"));
    assert_eq!(view.about_section_title.as_deref(), Some("About me"));
    assert_eq!(view.portfolio_number[0].label, "Hero stat");
    assert!(view.contact_email.is_none());
}
