use serde::{Deserialize, Serialize};

/// A browsable music release as served by `/api/albums`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawAlbum")]
pub struct Album {
    pub id: i64,
    pub title: String,
    pub artist: String,
    pub image_url: String,
    pub description: String,
}

/// Wire form of [`Album`]. Payloads may carry the art under `imageUrl`,
/// `image`, or both.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAlbum {
    id: i64,
    title: String,
    artist: String,
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    description: String,
}

impl From<RawAlbum> for Album {
    fn from(raw: RawAlbum) -> Self {
        Self {
            id: raw.id,
            title: raw.title,
            artist: raw.artist,
            image_url: raw.image_url.or(raw.image).unwrap_or_default(),
            description: raw.description,
        }
    }
}

impl Album {
    /// Secondary line used by the recently played rows.
    pub fn subtitle(&self) -> String {
        format!("{} • Popular Song", self.artist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_payload() {
        let json = r#"{
            "id": 1,
            "title": "Abbey Road",
            "artist": "The Beatles",
            "imageUrl": "https://example.com/abbey.jpg",
            "description": "1969"
        }"#;
        let album: Album = serde_json::from_str(json).unwrap();
        assert_eq!(album.id, 1);
        assert_eq!(album.image_url, "https://example.com/abbey.jpg");
        assert_eq!(album.description, "1969");
    }

    #[test]
    fn accepts_image_alias_and_missing_description() {
        let json = r#"{"id": 7, "title": "Awake", "artist": "Dream Theater", "image": "a.png"}"#;
        let album: Album = serde_json::from_str(json).unwrap();
        assert_eq!(album.image_url, "a.png");
        assert!(album.description.is_empty());
    }

    #[test]
    fn accepts_both_image_keys_preferring_image_url() {
        let json = r#"[{
            "id": 1,
            "title": "Abbey Road",
            "artist": "The Beatles",
            "image": "small.jpg",
            "imageUrl": "large.jpg",
            "description": "x"
        }]"#;
        let albums: Vec<Album> = serde_json::from_str(json).unwrap();
        assert_eq!(albums.len(), 1);
        assert_eq!(albums[0].image_url, "large.jpg");
    }

    #[test]
    fn missing_art_is_empty() {
        let json = r#"{"id": 9, "title": "Blue", "artist": "Joni Mitchell"}"#;
        let album: Album = serde_json::from_str(json).unwrap();
        assert!(album.image_url.is_empty());
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let album = Album {
            id: 2,
            title: "Kind of Blue".into(),
            artist: "Miles Davis".into(),
            image_url: "kob.jpg".into(),
            description: String::new(),
        };
        let value = serde_json::to_value(&album).unwrap();
        assert_eq!(value["imageUrl"], "kob.jpg");
        assert!(value.get("image_url").is_none());
    }

    #[test]
    fn subtitle_mentions_artist() {
        let album = Album {
            id: 3,
            title: "Blue".into(),
            artist: "Joni Mitchell".into(),
            image_url: String::new(),
            description: String::new(),
        };
        assert_eq!(album.subtitle(), "Joni Mitchell • Popular Song");
    }
}
