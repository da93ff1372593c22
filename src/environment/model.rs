use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

// Raw records as they arrive from the surrounding message store. This
// layer only reads them; all mutation goes through `storage::Data`.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Story {
    pub id: String,
    /// Conversation id of the sender.
    pub sender_id: String,
    /// The distribution list this story was shared with.
    pub distribution_id: String,
    pub timestamp: DateTime<Utc>,
    pub attachment: Option<Attachment>,
    /// Mirrored from the distribution list; hiding operates per list.
    pub hidden: bool,
    #[serde(default)]
    pub views: u32,
}

impl PartialEq for Story {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Story {}

#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub content_type: String,
    /// Remote source, if the attachment has not been downloaded yet
    pub url: Option<Url>,
    /// Location on disk once downloaded
    pub path: Option<PathBuf>,
    pub filename: String,
    pub caption: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    pub title: String,
    pub avatar: Option<Url>,
}

impl PartialEq for Conversation {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Conversation {}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct DistributionList {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    pub id: String,
    pub category: String,
    pub name: String,
    pub image: Option<Url>,
}

#[allow(unused)]
#[cfg(debug_assertions)]
pub mod mock {
    use chrono::Utc;

    use super::*;

    pub fn make_conversation(id: &str) -> Conversation {
        Conversation {
            id: id.to_string(),
            title: format!("Contact {id}"),
            avatar: None,
        }
    }

    pub fn make_attachment() -> Attachment {
        Attachment {
            content_type: "image/jpeg".to_string(),
            url: None,
            path: Some(PathBuf::from("/tmp/attachment.jpg")),
            filename: "attachment.jpg".to_string(),
            caption: None,
        }
    }

    pub fn make_story(id: &str, sender_id: &str) -> Story {
        Story {
            id: id.to_string(),
            sender_id: sender_id.to_string(),
            distribution_id: format!("dist-{sender_id}"),
            timestamp: Utc::now(),
            attachment: Some(make_attachment()),
            hidden: false,
            views: 0,
        }
    }
}
