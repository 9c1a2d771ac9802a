use reqwest::{
    Client as HttpClient, RequestBuilder, Response,
    header::{HeaderMap, HeaderValue},
};
use serde::Deserialize;

pub mod error;
pub mod models;
pub mod result;

pub use error::Error;
pub use models::{Location, Photo, User};
pub use result::Result;

const BASE_URL: &str = "https://api.unsplash.com";

/// Fixed page size for both endpoints; no pagination cursor is exposed.
const PER_PAGE: u32 = 20;

macro_rules! query_params {
    ($($key:expr => $value:expr),+ $(,)?) => {
        &[
            $(($key, $value.to_string())),+
        ]
    };
}

/// Envelope returned by `/search/photos`; everything besides `results` is
/// ignored. `/photos` returns the array bare, with no envelope.
#[derive(Debug, Deserialize)]
struct SearchPage {
    results: Vec<Photo>,
}

#[derive(Clone)]
pub struct Client {
    http: HttpClient,
    base_url: String,
}

impl Client {
    pub fn new<T: AsRef<str>>(access_key: T) -> Result<Self> {
        Self::with_base_url(access_key, BASE_URL)
    }

    /// Same as [`Client::new`] but against a custom service origin, so tests
    /// can point the client at a local mock server.
    pub fn with_base_url<T: AsRef<str>, U: Into<String>>(access_key: T, base_url: U) -> Result<Self> {
        let auth = format!("Client-ID {}", access_key.as_ref());
        let mut auth = HeaderValue::from_str(&auth).map_err(|_| Error::InvalidApiKey)?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert("Authorization", auth);

        Ok(Self {
            http: HttpClient::builder()
                .default_headers(headers)
                .build()
                .unwrap(),
            base_url: base_url.into(),
        })
    }

    pub fn new_from_env() -> Result<Self> {
        let access_key = std::env::var("UNSPLASH_ACCESS_KEY").map_err(|_| Error::InvalidApiKey)?;

        Self::new(access_key)
    }

    pub async fn search_photos<T: AsRef<str>>(&self, query: T) -> Result<Vec<Photo>> {
        let request = self
            .http
            .get(format!("{}/search/photos", self.base_url))
            .query(query_params!(
                "query" => query.as_ref(),
                "per_page" => PER_PAGE,
            ));

        let response = Self::send_request(request).await?;
        let page: SearchPage = response.json().await.map_err(|_| Error::InvalidResponse)?;

        Ok(page.results)
    }

    pub async fn get_photos(&self) -> Result<Vec<Photo>> {
        let request = self
            .http
            .get(format!("{}/photos", self.base_url))
            .query(query_params!(
                "per_page" => PER_PAGE,
            ));

        let response = Self::send_request(request).await?;
        let photos = response.json().await.map_err(|_| Error::InvalidResponse)?;

        Ok(photos)
    }

    async fn send_request(request: RequestBuilder) -> Result<Response> {
        let response = request.send().await.map_err(|_| Error::Request)?;

        if !response.status().is_success() {
            return Err(Error::Status(response.status()));
        }

        Ok(response)
    }
}
