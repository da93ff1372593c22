mod action;
mod reducer;
mod state;

pub use action::StoryAction;
pub use reducer::reduce;
pub use state::{categorize, SelectedStoryData, StoriesViewModel, StoryGroupKind, StoryGroups};
