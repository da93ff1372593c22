use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::environment::model::{Badge, DistributionList, Story};
use crate::environment::storage::Data;
use crate::environment::types::{Preferences, UiConfig};
use crate::view_model::{
    ConversationId, ConversationViewModel, DistributionId, MyStoriesViewModel, StoryId,
    StoryViewModel,
};

use strum_macros::Display;
use strum_macros::EnumIter;
use strum_macros::IntoStaticStr;

/// The story open in the full-screen viewer, plus the cursor into its
/// group when the group has siblings. At most one of these exists;
/// absence means the viewer is closed.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct SelectedStoryData {
    pub story_id: StoryId,
    pub index: usize,
}

/// The three feed sections, in display order.
#[derive(IntoStaticStr, EnumIter, Display, Debug, Clone, Copy, Eq, PartialEq)]
pub enum StoryGroupKind {
    MyStories,
    HiddenStories,
    Stories,
}

/// Disjoint partition of the known story set. Every story lands in
/// exactly one group, decided by (sender is self, hidden flag).
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct StoryGroups {
    /// Aggregate entry for the current user's sends; absent without any
    pub my_stories: Option<MyStoriesViewModel>,
    pub hidden_stories: Vec<StoryViewModel>,
    pub stories: Vec<StoryViewModel>,
}

impl StoryGroups {
    pub fn len_of(&self, kind: StoryGroupKind) -> usize {
        match kind {
            StoryGroupKind::MyStories => self
                .my_stories
                .as_ref()
                .map(|m| m.stories.len())
                .unwrap_or_default(),
            StoryGroupKind::HiddenStories => self.hidden_stories.len(),
            StoryGroupKind::Stories => self.stories.len(),
        }
    }

    pub fn contains(&self, kind: StoryGroupKind, id: &StoryId) -> bool {
        match kind {
            StoryGroupKind::MyStories => self
                .my_stories
                .as_ref()
                .map(|m| m.stories.iter().any(|s| &s.id == id))
                .unwrap_or_default(),
            StoryGroupKind::HiddenStories => self.hidden_stories.iter().any(|s| &s.id == id),
            StoryGroupKind::Stories => self.stories.iter().any(|s| &s.id == id),
        }
    }

    pub fn total(&self) -> usize {
        use strum::IntoEnumIterator;
        StoryGroupKind::iter().map(|kind| self.len_of(kind)).sum()
    }
}

/// Partition the story set. Own sends collapse into the aggregate
/// entry no matter their hidden flag; foreign stories split on it.
/// Groups are ordered newest first.
pub fn categorize(stories: &[Story], me: Option<&str>) -> StoryGroups {
    let mut own = Vec::new();
    let mut hidden = Vec::new();
    let mut active = Vec::new();
    for story in stories {
        let entry = StoryViewModel::new(story);
        if me == Some(story.sender_id.as_str()) {
            own.push(entry);
        } else if story.hidden {
            hidden.push(entry);
        } else {
            active.push(entry);
        }
    }

    let newest_first = |a: &StoryViewModel, b: &StoryViewModel| b.created.cmp(&a.created);
    StoryGroups {
        my_stories: MyStoriesViewModel::new(own.into_iter().sorted_by(newest_first).collect()),
        hidden_stories: hidden.into_iter().sorted_by(newest_first).collect(),
        stories: active.into_iter().sorted_by(newest_first).collect(),
    }
}

/// Everything the stories surface renders, projected from one state
/// snapshot in a single pass.
#[derive(Debug, Clone, PartialEq)]
pub struct StoriesViewModel {
    pub groups: StoryGroups,
    pub me: Option<ConversationViewModel>,
    pub selected_story: Option<SelectedStoryData>,
    pub is_viewing_story: bool,
    pub is_stories_settings_visible: bool,
    pub preferences: Preferences,
    badges: im::HashMap<String, Badge>,
    distribution_lists: im::HashMap<String, DistributionList>,
}

impl StoriesViewModel {
    /// The visibility gate comes first: `None` means there is nothing
    /// to render and no further work happens.
    pub fn assemble(data: &Data, config: &UiConfig) -> Option<Self> {
        if !data.is_showing_stories_view() {
            return None;
        }
        let me = data.me.as_ref();
        Some(Self {
            groups: categorize(&data.stories, me.map(|c| c.id.as_str())),
            me: me.map(ConversationViewModel::new),
            selected_story: data.selected_story.clone(),
            is_viewing_story: data.is_viewing_story(),
            is_stories_settings_visible: data.is_stories_settings_visible,
            preferences: Preferences::resolve(config),
            badges: data.badges.clone(),
            distribution_lists: data.distribution_lists.clone(),
        })
    }

    /// Badge of a sender, if that sender carries one.
    pub fn preferred_badge(&self, sender: &ConversationId) -> Option<&Badge> {
        self.badges.get(sender.0.as_str())
    }

    /// Display name of a distribution list.
    pub fn distribution_name(&self, distribution: &DistributionId) -> Option<&str> {
        self.distribution_lists
            .get(distribution.0.as_str())
            .map(|list| list.name.as_str())
    }
}
