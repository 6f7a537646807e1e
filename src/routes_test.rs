use super::*;

use crate::config::Config;
use crate::photos::PhotoCache;

fn config(upstream: &str) -> Config {
    Config { port: 3000, photos_upstream_url: upstream.to_owned(), photos_timeout_secs: 1 }
}

fn photo(id: u64) -> Photo {
    Photo {
        album_id: 1,
        id,
        title: format!("photo {id}"),
        url: format!("https://img.test/{id}.png"),
        thumbnail_url: String::new(),
    }
}

#[test]
fn photo_error_to_status_maps_upstream_failures_to_bad_gateway() {
    assert_eq!(photo_error_to_status(&PhotoError::Request("refused".to_owned())), StatusCode::BAD_GATEWAY);
    assert_eq!(photo_error_to_status(&PhotoError::Status { status: 503 }), StatusCode::BAD_GATEWAY);
    assert_eq!(photo_error_to_status(&PhotoError::Parse("eof".to_owned())), StatusCode::BAD_GATEWAY);
}

#[test]
fn photo_error_to_status_maps_client_build_to_internal() {
    assert_eq!(
        photo_error_to_status(&PhotoError::HttpClientBuild("tls".to_owned())),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[tokio::test]
async fn healthz_is_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn list_photos_serves_cached_listing() {
    let state = AppState::with_cache(
        &config("http://127.0.0.1:9/photos"),
        PhotoCache::with_listing(vec![photo(1), photo(2)]),
    )
    .unwrap();
    let Json(photos) = list_photos(State(state)).await.unwrap();
    let ids: Vec<u64> = photos.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[tokio::test]
async fn list_photos_unreachable_upstream_is_bad_gateway() {
    let state = AppState::new(&config("http://127.0.0.1:9/photos")).unwrap();
    let status = list_photos(State(state.clone())).await.unwrap_err();
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(state.cache.cached().await.is_none());
}
