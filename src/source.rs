use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::album::Album;
use crate::error::NetworkError;

/// Where the home feed gets its albums from.
#[derive(Debug, Clone)]
pub enum AlbumSource {
    Static,
    Remote(ApiClient),
}

impl AlbumSource {
    /// Performs at most one request; the static set never fails.
    pub async fn fetch_albums(&self) -> Result<Vec<Album>, NetworkError> {
        match self {
            AlbumSource::Static => Ok(sample_albums()),
            AlbumSource::Remote(client) => client.fetch_albums().await,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            AlbumSource::Static => "sample data".to_string(),
            AlbumSource::Remote(client) => client.base_url().to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: Url) -> Result<Self, NetworkError> {
        let client = Client::builder()
            .user_agent(concat!("albumdeck/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub async fn fetch_albums(&self) -> Result<Vec<Album>, NetworkError> {
        self.get_json("api/albums").await
    }

    #[allow(dead_code)]
    pub async fn fetch_album(&self, id: i64) -> Result<Album, NetworkError> {
        self.get_json(&format!("api/albums/{}", id)).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, NetworkError> {
        let url = self.base_url.join(path)?;
        debug!(%url, "GET");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(NetworkError::Status(status));
        }

        // Decode separately so a bad payload is reported as such, not as a transport error.
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

fn album(id: i64, title: &str, artist: &str, slug: &str, description: &str) -> Album {
    Album {
        id,
        title: title.to_string(),
        artist: artist.to_string(),
        image_url: format!("https://music.juanfrausto.com/images/{}.jpg", slug),
        description: description.to_string(),
    }
}

/// Hardcoded album set used when no remote API is configured.
pub fn sample_albums() -> Vec<Album> {
    vec![
        album(
            1,
            "Abbey Road",
            "The Beatles",
            "abbey-road",
            "The eleventh studio album by the Beatles, recorded in 1969 at EMI Studios.",
        ),
        album(
            2,
            "Kind of Blue",
            "Miles Davis",
            "kind-of-blue",
            "A modal jazz landmark recorded in two sessions in 1959.",
        ),
        album(
            3,
            "Rumours",
            "Fleetwood Mac",
            "rumours",
            "Soft rock written amid the band's personal turmoil, released in 1977.",
        ),
        album(
            4,
            "Awake",
            "Dream Theater",
            "awake",
            "The third studio album by the progressive metal band, released in 1994.",
        ),
        album(
            5,
            "Random Access Memories",
            "Daft Punk",
            "random-access-memories",
            "A tribute to late-seventies and early-eighties studio craft, released in 2013.",
        ),
    ]
}
