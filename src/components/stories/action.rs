use crate::environment::types::MainMenuEvent;
use crate::view_model::{ConversationId, DistributionId, StoryId, StoryViewModel};

/// One variant per user intent the stories surface can raise. Each
/// maps onto exactly one command of the surrounding application.
#[derive(Clone)]
pub enum StoryAction {
    /// Jump to the sender's conversation
    OpenConversation(ConversationId),
    /// Hide or unhide every story of a distribution list
    ToggleHideStories(DistributionId),
    /// Open the forward dialog for a story
    ForwardStory(StoryId),
    /// Save the story's attachment to disk
    SaveStory(StoryViewModel),
    ShowStoriesSettings,
    MenuEvent(MainMenuEvent),
}

impl std::fmt::Debug for StoryAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OpenConversation(arg0) => f.debug_tuple("OpenConversation").field(arg0).finish(),
            Self::ToggleHideStories(arg0) => {
                f.debug_tuple("ToggleHideStories").field(arg0).finish()
            }
            Self::ForwardStory(arg0) => f.debug_tuple("ForwardStory").field(arg0).finish(),
            Self::SaveStory(story) => f.debug_tuple("SaveStory").field(&story.id).finish(),
            Self::ShowStoriesSettings => write!(f, "ShowStoriesSettings"),
            Self::MenuEvent(arg0) => f.debug_tuple("MenuEvent").field(arg0).finish(),
        }
    }
}
