use super::*;
use axum::body::{Body, to_bytes};
use coopcraft_client::pages::catalog::site_menu;

fn test_options() -> LeptosOptions {
    LeptosOptions::builder().output_name("coopcraft").build()
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    String::from_utf8(bytes.to_vec()).expect("body should be UTF-8")
}

// =============================================================================
// Fallback
// =============================================================================

#[tokio::test]
async fn unknown_path_renders_shell_with_404() {
    let _ = any_spawner::Executor::init_tokio();
    let menu = site_menu().unwrap();
    let request = Request::builder().uri("/nope").body(Body::empty()).unwrap();

    let response = render_not_found(test_options(), menu, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let html = body_text(response).await;
    assert!(html.contains("<nav id=\"site-menu\""), "navigation panel missing: {html}");
    assert!(html.contains("Page not found."));
    assert!(!html.contains("aria-current=\"page\""), "no item should be active on an unknown path");
}
