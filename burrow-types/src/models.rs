use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{PostId, ProfileId};

// Custom serde module for DateTime to ensure RFC3339 string format
mod datetime_format {
    use chrono::{DateTime, Utc};
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.to_rfc3339())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<DateTime<Utc>>().map_err(serde::de::Error::custom)
    }
}

/// Public profile of another neighbour, as shown in a profile overlay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: ProfileId,
    pub nickname: String,
    #[serde(default)]
    pub profile_image_url: Option<String>,
    #[serde(with = "datetime_format")]
    pub join_date: DateTime<Utc>,
    pub post_count: u32,
}

/// Compact post entry listed under a profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummary {
    pub id: PostId,
    pub content: String,
    #[serde(default)]
    pub first_image: Option<String>,
    pub like_count: u32,
    #[serde(with = "datetime_format")]
    pub created_at: DateTime<Utc>,
    pub author_nickname: String,
    pub author_user_id: ProfileId,
}

impl UserProfile {
    /// Join date formatted for display, e.g. "March 2024"
    pub fn join_month(&self) -> String {
        self.join_date.format("%B %Y").to_string()
    }
}
