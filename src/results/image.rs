//! Image URL resolution for exercise records
//!
//! Upstream records carry images under any of several names, or only
//! inside a `videos` list. Whatever is found is routed through the local
//! image proxy so the required API headers can be attached server-side
//! before the browser fetches it.

use super::fields;
use serde_json::Value;

/// Record fields checked for an image URL, in priority order.
pub const IMAGE_FIELDS: [&str; 8] = [
    "imageUrl",
    "image_url",
    "image",
    "thumbnail",
    "thumbnail_url",
    "gif_url",
    "video_url",
    "url",
];

/// Local path images are rewritten through.
pub const IMAGE_PROXY_PATH: &str = "/api/image-proxy";

/// Pick a usable image URL out of a record, rewritten through the image
/// proxy. Empty string when nothing qualifies; callers render a
/// placeholder.
pub fn resolve_image(record: &Value) -> String {
    if let Some(url) = fields::first_match(record, &IMAGE_FIELDS, fields::absolute_url) {
        return proxied(&url);
    }

    if let Some(url) = video_og_image(record) {
        return proxied(&url);
    }

    String::new()
}

/// Fall back to the `videos` list: the male/front-angle entry shows the
/// exercise most clearly, else whatever comes first.
fn video_og_image(record: &Value) -> Option<String> {
    let videos = record.get("videos")?.as_array()?;
    let first = videos.first()?;

    let best = videos
        .iter()
        .find(|v| {
            v.get("gender").and_then(Value::as_str) == Some("male")
                && v.get("angle").and_then(Value::as_str) == Some("front")
        })
        .unwrap_or(first);

    best.get("og_image").and_then(fields::absolute_url)
}

fn proxied(url: &str) -> String {
    format!("{}?url={}", IMAGE_PROXY_PATH, urlencoding::encode(url))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_direct_field_preferred_over_videos() {
        let record = json!({
            "imageUrl": "https://media.test/direct.png",
            "videos": [{"gender": "male", "angle": "front", "og_image": "https://media.test/video.png"}]
        });
        assert_eq!(
            resolve_image(&record),
            "/api/image-proxy?url=https%3A%2F%2Fmedia.test%2Fdirect.png"
        );
    }

    #[test]
    fn test_field_precedence() {
        let record = json!({
            "thumbnail": "https://media.test/thumb.png",
            "image": "https://media.test/image.png"
        });
        assert!(resolve_image(&record).contains("image.png"));
    }

    #[test]
    fn test_relative_candidate_skipped() {
        let record = json!({
            "imageUrl": "/media/relative.png",
            "image": "https://media.test/abs.png"
        });
        assert!(resolve_image(&record).contains("abs.png"));
    }

    #[test]
    fn test_male_front_video_preferred() {
        let record = json!({
            "videos": [
                {"gender": "female", "angle": "side", "og_image": "https://media.test/first.png"},
                {"gender": "male", "angle": "front", "og_image": "https://media.test/best.png"}
            ]
        });
        assert!(resolve_image(&record).contains("best.png"));
    }

    #[test]
    fn test_first_video_fallback() {
        let record = json!({
            "videos": [
                {"gender": "female", "angle": "side", "og_image": "https://media.test/first.png"},
                {"gender": "female", "angle": "front", "og_image": "https://media.test/second.png"}
            ]
        });
        assert!(resolve_image(&record).contains("first.png"));
    }

    #[test]
    fn test_no_candidate_yields_empty() {
        assert_eq!(resolve_image(&json!({"name": "Squat"})), "");
        assert_eq!(
            resolve_image(&json!({"videos": [{"og_image": "/relative.png"}]})),
            ""
        );
        assert_eq!(resolve_image(&json!({"videos": []})), "");
    }

    #[test]
    fn test_array_valued_field_uses_first_string() {
        let record = json!({"image": ["https://media.test/a.png", "https://media.test/b.png"]});
        assert!(resolve_image(&record).contains("a.png"));
    }
}
