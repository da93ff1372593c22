use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, Utc};

use storyline::environment::model::mock;
use storyline::environment::storage::Data;
use storyline::environment::types::UiConfig;
use storyline::{
    reduce, AttachmentMedia, ConversationId, DistributionId, SelectedStoryData, StoriesViewModel,
    StoryAction, StoryCommands, StoryComposer, StoryGroupKind, StoryId,
};

#[derive(Debug, Clone, Eq, PartialEq)]
enum Emitted {
    ShowConversation(String),
    ToggleHideStories(String),
    ToggleForwardModal(String),
    SaveAttachment(String, DateTime<Utc>),
    ShowStoriesSettings,
}

#[derive(Default)]
struct RecordingCommands(RefCell<Vec<Emitted>>);

impl StoryCommands for RecordingCommands {
    fn show_conversation(&self, conversation: &ConversationId) {
        self.0
            .borrow_mut()
            .push(Emitted::ShowConversation(conversation.0.clone()));
    }

    fn toggle_hide_stories(&self, distribution: &DistributionId) {
        self.0
            .borrow_mut()
            .push(Emitted::ToggleHideStories(distribution.0.clone()));
    }

    fn toggle_forward_modal(&self, story: &StoryId) {
        self.0
            .borrow_mut()
            .push(Emitted::ToggleForwardModal(story.0.clone()));
    }

    fn save_attachment(&self, attachment: &AttachmentMedia, timestamp: DateTime<Utc>) {
        self.0
            .borrow_mut()
            .push(Emitted::SaveAttachment(attachment.filename.clone(), timestamp));
    }

    fn show_stories_settings(&self) {
        self.0.borrow_mut().push(Emitted::ShowStoriesSettings);
    }
}

fn populated_data() -> Data {
    let mut data = Data::default();
    data.me = Some(mock::make_conversation("me"));
    data.merge_stories(&[
        mock::make_story("own", "me"),
        mock::make_story("theirs", "friend"),
    ]);
    data
}

#[test]
fn closed_feed_renders_nothing_regardless_of_content() {
    let data = populated_data();
    assert!(StoriesViewModel::assemble(&data, &UiConfig::default()).is_none());
}

#[test]
fn opened_feed_projects_groups_and_routes_intents() {
    let mut data = populated_data();
    data.open_stories_view(Utc::now());

    let model = StoriesViewModel::assemble(&data, &UiConfig::default()).expect("feed is open");
    assert_eq!(model.groups.len_of(StoryGroupKind::MyStories), 1);
    assert_eq!(model.groups.len_of(StoryGroupKind::Stories), 1);
    assert!(!model.is_viewing_story);

    let story = model.groups.stories[0].clone();
    let commands = RecordingCommands::default();
    reduce(StoryAction::ForwardStory(story.id.clone()), &commands);
    reduce(StoryAction::SaveStory(story.clone()), &commands);
    reduce(StoryAction::OpenConversation(story.sender.clone()), &commands);

    assert_eq!(
        commands.0.into_inner(),
        vec![
            Emitted::ToggleForwardModal("theirs".to_string()),
            Emitted::SaveAttachment("attachment.jpg".to_string(), story.created),
            Emitted::ShowConversation("friend".to_string()),
        ]
    );
}

#[test]
fn hiding_the_viewed_distribution_closes_the_viewer_in_the_next_snapshot() {
    let mut data = populated_data();
    data.open_stories_view(Utc::now());
    data.select_story(SelectedStoryData {
        story_id: StoryId("theirs".to_string()),
        index: 0,
    });

    let model = StoriesViewModel::assemble(&data, &UiConfig::default()).expect("feed is open");
    assert!(model.is_viewing_story);
    let distribution = model.groups.stories[0].distribution.clone();

    // The intent only emits the command; the store owns the mutation.
    let commands = RecordingCommands::default();
    reduce(StoryAction::ToggleHideStories(distribution.clone()), &commands);
    assert_eq!(
        commands.0.into_inner(),
        vec![Emitted::ToggleHideStories(distribution.0.clone())]
    );

    data.toggle_hide_stories(&distribution.0);
    let model = StoriesViewModel::assemble(&data, &UiConfig::default()).expect("feed is open");
    assert!(!model.is_viewing_story);
    assert_eq!(model.groups.len_of(StoryGroupKind::HiddenStories), 1);
    assert_eq!(model.groups.len_of(StoryGroupKind::Stories), 0);
}

#[test]
fn environment_shares_one_snapshot_across_reads() {
    let dir = tempfile::tempdir().unwrap();
    let environment =
        storyline::Environment::new(storyline::environment::Repository::with_root(dir.path()));

    environment.storage.with_mutation(|data| {
        data.me = Some(mock::make_conversation("me"));
        data.merge_stories(&[mock::make_story("s1", "friend")]);
        data.open_stories_view(Utc::now());
    });

    let config = environment.repository.config().unwrap();
    let model = environment
        .storage
        .with(|data| StoriesViewModel::assemble(data, &config))
        .expect("feed is open");

    assert_eq!(model.groups.len_of(StoryGroupKind::Stories), 1);
    assert_eq!(
        model.preferences.pane_width,
        storyline::environment::types::DEFAULT_PANE_WIDTH
    );
}

#[test]
fn composer_seam_hands_back_the_file_and_a_close_callback() {
    #[derive(Default)]
    struct RecordingComposer {
        files: RefCell<Vec<String>>,
    }

    impl StoryComposer for RecordingComposer {
        fn compose(&self, file: AttachmentMedia, on_close: Rc<dyn Fn()>) {
            self.files.borrow_mut().push(file.filename);
            on_close();
        }
    }

    let composer = RecordingComposer::default();
    let closed = Rc::new(RefCell::new(false));
    let flag = closed.clone();
    composer.compose(
        AttachmentMedia {
            filename: "fresh.jpg".to_string(),
            ..Default::default()
        },
        Rc::new(move || *flag.borrow_mut() = true),
    );

    assert_eq!(composer.files.into_inner(), vec!["fresh.jpg".to_string()]);
    assert!(*closed.borrow());
}
