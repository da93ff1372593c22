use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};

use crate::components::stories::SelectedStoryData;
use crate::environment::model::{Badge, Conversation, DistributionList, Story};

/// Stories expire this long after they were sent.
pub const STORY_RETENTION_HOURS: i64 = 24;

#[derive(Clone, Default)]
pub struct Data {
    /// The current user's own conversation
    pub me: Option<Conversation>,

    /// Every story the store currently knows, own and foreign alike
    pub stories: Vec<Story>,

    pub distribution_lists: im::HashMap<String, DistributionList>,

    /// Badge per sender conversation, if that sender has one
    pub badges: im::HashMap<String, Badge>,

    /// Present while the full-screen story viewer is open
    pub selected_story: Option<SelectedStoryData>,

    pub is_stories_settings_visible: bool,

    /// When the user opened the stories view. The feed renders only
    /// while this is set.
    pub stories_opened_at: Option<DateTime<Utc>>,
}

impl std::fmt::Debug for Data {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Data")
            .field("me", &self.me.as_ref().map(|e| &e.id))
            .field("stories", &self.stories.len())
            .field("distribution_lists", &self.distribution_lists.len())
            .field("badges", &self.badges.len())
            .field("selected_story", &self.selected_story)
            .field(
                "is_stories_settings_visible",
                &self.is_stories_settings_visible,
            )
            .field("stories_opened_at", &self.stories_opened_at)
            .finish()
    }
}

// Data Operations

impl Data {
    pub fn is_showing_stories_view(&self) -> bool {
        self.stories_opened_at.is_some()
    }

    pub fn is_viewing_story(&self) -> bool {
        self.selected_story.is_some()
    }

    pub fn open_stories_view(&mut self, now: DateTime<Utc>) {
        self.stories_opened_at = Some(now);
    }

    /// Closing the feed also closes the viewer and the settings panel.
    pub fn close_stories_view(&mut self) {
        self.stories_opened_at = None;
        self.selected_story = None;
        self.is_stories_settings_visible = false;
    }

    /// Ingest a batch of stories, skipping ids we already know.
    pub fn merge_stories(&mut self, batch: &[Story]) {
        let existing: HashSet<_> = self.stories.iter().map(|e| e.id.clone()).collect();
        for entry in batch.iter() {
            if !existing.contains(entry.id.as_str()) {
                self.stories.push(entry.clone());
            }
        }
        self.stories
            .sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    }

    /// Flip the hidden flag on every story of a distribution list.
    /// If the story open in the viewer just became hidden, the viewer
    /// closes rather than staying open over hidden content.
    pub fn toggle_hide_stories(&mut self, distribution_id: &str) -> bool {
        let mut changed = false;
        for story in self
            .stories
            .iter_mut()
            .filter(|s| s.distribution_id == distribution_id)
        {
            story.hidden = !story.hidden;
            changed = true;
        }
        if !changed {
            log::debug!("no stories for distribution {distribution_id}");
            return false;
        }
        if let Some(ref selected) = self.selected_story {
            let now_hidden = self
                .stories
                .iter()
                .any(|s| s.id == selected.story_id.0 && s.hidden);
            if now_hidden {
                self.selected_story = None;
            }
        }
        true
    }

    /// Drop stories past their retention window. The viewer closes if
    /// the story it was showing expired.
    pub fn remove_expired(&mut self, now: DateTime<Utc>) {
        let cutoff = now - Duration::hours(STORY_RETENTION_HOURS);
        self.stories.retain(|s| s.timestamp > cutoff);
        if let Some(ref selected) = self.selected_story {
            if !self.stories.iter().any(|s| s.id == selected.story_id.0) {
                self.selected_story = None;
            }
        }
    }

    pub fn select_story(&mut self, selection: SelectedStoryData) {
        if !self.stories.iter().any(|s| s.id == selection.story_id.0) {
            log::error!("Cannot select unknown story {}", selection.story_id);
            return;
        }
        self.selected_story = Some(selection);
    }

    pub fn clear_selection(&mut self) {
        self.selected_story = None;
    }

    /// Remove lists we don't have anymore, add new lists
    pub fn update_distribution_lists(&mut self, lists: &[DistributionList]) {
        let mut unknown: HashSet<_> = self.distribution_lists.keys().cloned().collect();
        for list in lists {
            unknown.remove(&list.id);
            self.distribution_lists.insert(list.id.clone(), list.clone());
        }
        for id in unknown {
            self.distribution_lists.remove(&id);
        }
    }
}

/// Shared handle on the state container. Reads for one view-model
/// assembly all happen inside a single `with` closure, so the view
/// never observes a torn snapshot.
#[derive(Clone, Default)]
pub struct Storage(Arc<Mutex<Data>>);

impl Storage {
    pub fn with<T>(&self, action: impl FnOnce(&Data) -> T) -> T {
        match self.0.lock() {
            Ok(guard) => action(&guard),
            Err(poisoned) => action(&poisoned.into_inner()),
        }
    }

    pub fn with_mutation<T>(&self, action: impl FnOnce(&mut Data) -> T) -> T {
        match self.0.lock() {
            Ok(mut guard) => action(&mut guard),
            Err(poisoned) => action(&mut poisoned.into_inner()),
        }
    }
}
