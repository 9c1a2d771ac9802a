use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Photo {
    id: String,
    urls: HashMap<String, String>,
    alt_description: Option<String>,
    user: User,
    #[serde(default)]
    location: Option<Location>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Location {
    title: Option<String>,
}

impl Photo {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Image address for a size variant (`raw`, `full`, `regular`, `small`).
    pub fn url<T: AsRef<str>>(&self, size: T) -> Option<&str> {
        self.urls.get(size.as_ref()).map(String::as_str)
    }

    pub fn alt_description(&self) -> Option<&str> {
        self.alt_description.as_deref()
    }

    pub fn user_name(&self) -> &str {
        &self.user.name
    }

    pub fn location_title(&self) -> Option<&str> {
        self.location
            .as_ref()
            .and_then(|location| location.title.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_full_photo() {
        let photo: Photo = serde_json::from_str(
            r#"{
                "id": "1",
                "urls": {
                    "raw": "https://images.example/raw",
                    "full": "https://images.example/full",
                    "regular": "https://images.example/regular",
                    "small": "https://images.example/small"
                },
                "alt_description": "cat",
                "user": { "name": "Jane" },
                "location": { "title": "Oslo" }
            }"#,
        )
        .unwrap();

        assert_eq!(photo.id(), "1");
        assert_eq!(photo.url("regular"), Some("https://images.example/regular"));
        assert_eq!(photo.alt_description(), Some("cat"));
        assert_eq!(photo.user_name(), "Jane");
        assert_eq!(photo.location_title(), Some("Oslo"));
    }

    #[test]
    fn null_fields_stay_none() {
        let photo: Photo = serde_json::from_str(
            r#"{
                "id": "1",
                "urls": {},
                "alt_description": null,
                "user": { "name": "Jane" },
                "location": { "title": null }
            }"#,
        )
        .unwrap();

        assert_eq!(photo.alt_description(), None);
        assert_eq!(photo.location_title(), None);
        assert_eq!(photo.url("raw"), None);
    }

    #[test]
    fn missing_location_is_tolerated() {
        let photo: Photo = serde_json::from_str(
            r#"{
                "id": "1",
                "urls": {},
                "alt_description": "cat",
                "user": { "name": "Jane" }
            }"#,
        )
        .unwrap();

        assert_eq!(photo.location_title(), None);
    }
}
