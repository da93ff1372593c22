use crate::environment::model::*;
use chrono::{DateTime, Utc};

use crate::helper::{format_datetime, format_number};

use serde::{Deserialize, Serialize};

#[derive(Default, Clone, Debug, Serialize, Deserialize)]
pub struct ConversationViewModel {
    pub id: ConversationId,
    pub title: String,
    pub avatar: Option<String>,
}

impl PartialEq for ConversationViewModel {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ConversationViewModel {}

impl ConversationViewModel {
    pub fn new(conversation: &Conversation) -> Self {
        Self {
            id: ConversationId(conversation.id.clone()),
            title: conversation.title.clone(),
            avatar: conversation.avatar.as_ref().map(|u| u.to_string()),
        }
    }
}

#[derive(Default, Clone, Serialize, Deserialize)]
pub struct StoryViewModel {
    pub id: StoryId,
    pub sender: ConversationId,
    pub distribution: DistributionId,
    pub created: DateTime<Utc>,
    pub created_human: String,
    pub created_full: String,
    pub attachment: Option<AttachmentMedia>,
    /// Mirrored from the distribution list the story belongs to
    #[serde(default)]
    pub is_hidden: bool,
    /// How many recipients have seen this story. Only shown when the
    /// read-receipt setting is on.
    #[serde(default)]
    pub views: u32,
    pub views_str: String,
}

impl PartialEq for StoryViewModel {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.is_hidden == other.is_hidden && self.views == other.views
    }
}

impl Eq for StoryViewModel {}

impl std::fmt::Debug for StoryViewModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoryViewModel")
            .field("id", &self.id)
            .field("sender", &self.sender.0)
            .finish()
    }
}

impl StoryViewModel {
    pub fn new(story: &Story) -> Self {
        let (h, f) = format_datetime(&story.timestamp);
        StoryViewModel {
            id: StoryId(story.id.clone()),
            sender: ConversationId(story.sender_id.clone()),
            distribution: DistributionId(story.distribution_id.clone()),
            created: story.timestamp,
            created_human: h,
            created_full: f,
            attachment: story.attachment.as_ref().map(AttachmentMedia::new),
            is_hidden: story.hidden,
            views: story.views,
            views_str: format_number(story.views as i64),
        }
    }
}

/// The current user's sends, collapsed into one aggregate feed entry.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct MyStoriesViewModel {
    pub title: String,
    pub newest: DateTime<Utc>,
    pub count_str: String,
    pub stories: Vec<StoryViewModel>,
}

impl MyStoriesViewModel {
    /// `None` when the user has no active sends; the entry is absent
    /// from the feed in that case.
    pub fn new(stories: Vec<StoryViewModel>) -> Option<Self> {
        let newest = stories.iter().map(|s| s.created).max()?;
        Some(Self {
            title: crate::loc!("My Stories").to_string(),
            newest,
            count_str: format_number(stories.len() as i64),
            stories,
        })
    }
}

#[derive(Clone, Default, Debug, Serialize, Deserialize)]
pub struct AttachmentMedia {
    pub content_type: String,
    /// Remote source, if any
    pub source: Option<String>,
    /// Path to the data on disk
    pub path: Option<std::path::PathBuf>,
    pub filename: String,
    pub caption: Option<String>,
}

impl PartialEq for AttachmentMedia {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path && self.filename == other.filename
    }
}

impl Eq for AttachmentMedia {}

impl AttachmentMedia {
    pub fn new(attachment: &Attachment) -> Self {
        Self {
            content_type: attachment.content_type.clone(),
            source: attachment.url.as_ref().map(|u| u.to_string()),
            path: attachment.path.clone(),
            filename: attachment.filename.clone(),
            caption: attachment.caption.clone(),
        }
    }
}

#[derive(Debug, Eq, PartialEq, Hash, Clone, Default, Serialize, Deserialize)]
pub struct ConversationId(pub String);

#[derive(Debug, Eq, PartialEq, Hash, Clone, Default, Serialize, Deserialize)]
pub struct StoryId(pub String);

impl std::fmt::Display for StoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("StoryID:{}", self.0))
    }
}

#[derive(Debug, Eq, PartialEq, Hash, Clone, Default, Serialize, Deserialize)]
pub struct DistributionId(pub String);
