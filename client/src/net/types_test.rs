use super::*;

#[test]
fn photo_parses_jsonplaceholder_record() {
    let raw = r#"{
        "albumId": 1,
        "id": 2,
        "title": "reprehenderit est deserunt",
        "url": "https://via.placeholder.com/600/771796",
        "thumbnailUrl": "https://via.placeholder.com/150/771796"
    }"#;
    let photo: Photo = serde_json::from_str(raw).expect("photo");
    assert_eq!(photo.album_id, 1);
    assert_eq!(photo.id, 2);
    assert_eq!(photo.thumbnail_url, "https://via.placeholder.com/150/771796");
}

#[test]
fn photo_requires_only_url() {
    let photo: Photo = serde_json::from_str(r#"{"url":"https://img.test/a.png"}"#).expect("photo");
    assert_eq!(photo.url, "https://img.test/a.png");
    assert!(photo.title.is_empty());
}

#[test]
fn photo_without_url_is_rejected() {
    assert!(serde_json::from_str::<Photo>(r#"{"id":1,"title":"t"}"#).is_err());
}

#[test]
fn photo_serializes_camel_case() {
    let photo = Photo {
        album_id: 3,
        id: 4,
        title: "t".to_owned(),
        url: "u".to_owned(),
        thumbnail_url: "th".to_owned(),
    };
    let value = serde_json::to_value(&photo).expect("json");
    assert_eq!(value["albumId"], 3);
    assert_eq!(value["thumbnailUrl"], "th");
}

#[test]
fn image_refs_keep_listing_order() {
    let photos: Vec<Photo> = serde_json::from_str(
        r#"[{"url":"a","title":"first"},{"url":"b","title":"second"}]"#,
    )
    .expect("photos");
    let refs = image_refs(&photos);
    assert_eq!(refs.len(), 2);
    assert_eq!(refs[0], ImageRef { url: "a".to_owned(), title: "first".to_owned() });
    assert_eq!(refs[1].url, "b");
}
