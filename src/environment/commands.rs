use std::rc::Rc;

use chrono::{DateTime, Utc};

use crate::view_model::{AttachmentMedia, ConversationId, DistributionId, StoryId};

/// Everything the surrounding application executes on behalf of the
/// stories surface. One method per user intent, fire-and-forget: the
/// implementer owns the effect and reports its outcome (e.g. a toast
/// after a failed save), never this layer.
pub trait StoryCommands {
    /// Navigate to a conversation
    fn show_conversation(&self, conversation: &ConversationId);
    /// Flip the hidden flag on a distribution list
    fn toggle_hide_stories(&self, distribution: &DistributionId);
    /// Open or close the forward dialog for a story
    fn toggle_forward_modal(&self, story: &StoryId);
    /// Write a story attachment to disk
    fn save_attachment(&self, attachment: &AttachmentMedia, timestamp: DateTime<Utc>);
    /// Open the stories settings panel
    fn show_stories_settings(&self);
}

/// Presentation seam for creating a new story. The host hands the
/// picked file here and gets a callback to close the composer again.
pub trait StoryComposer {
    fn compose(&self, file: AttachmentMedia, on_close: Rc<dyn Fn()>);
}
