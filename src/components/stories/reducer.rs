use debug_panic::debug_panic;

use crate::environment::commands::StoryCommands;
use crate::environment::types::MainMenuEvent;

use super::action::StoryAction;

/// Map a user intent onto the one command it stands for. Commands are
/// fire-and-forget: nothing is returned, no state is touched here, and
/// the store reacts to the command on its own schedule.
pub fn reduce(action: StoryAction, commands: &impl StoryCommands) {
    log::trace!("{action:?}");
    match action {
        StoryAction::OpenConversation(conversation) => commands.show_conversation(&conversation),
        StoryAction::ToggleHideStories(distribution) => {
            commands.toggle_hide_stories(&distribution)
        }
        StoryAction::ForwardStory(story) => commands.toggle_forward_modal(&story),
        StoryAction::SaveStory(story) => {
            // A story without an attachment has nothing to save; never
            // emit the command with an empty payload.
            let Some(attachment) = story.attachment.as_ref() else {
                return;
            };
            commands.save_attachment(attachment, story.created);
        }
        StoryAction::ShowStoriesSettings => commands.show_stories_settings(),
        StoryAction::MenuEvent(MainMenuEvent::StoriesSettings) => commands.show_stories_settings(),
        StoryAction::MenuEvent(event) => {
            // Composing a story goes through the `StoryComposer` seam,
            // not through a command.
            debug_panic!("Unroutable menu event: {event}");
        }
    }
}
