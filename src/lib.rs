pub mod components;
pub mod environment;
mod helper;
mod view_model;

pub use components::stories::{
    categorize, reduce, SelectedStoryData, StoriesViewModel, StoryAction, StoryGroupKind,
    StoryGroups,
};
pub use environment::commands::{StoryCommands, StoryComposer};
pub use environment::Environment;
pub use helper::{format_datetime, format_number};
pub use view_model::*;

/// Handy macro for future localization
#[macro_export]
macro_rules! loc {
    ($x:expr $(,)?) => {
        $x
    };
}

/// Set up logging for a host application. Library code only ever
/// uses the `log` macros.
pub fn init_logging() {
    use env_logger::Env;
    use std::io::Write;
    env_logger::Builder::from_env(Env::default().default_filter_or("debug"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{}:{} {} [{}] - {}",
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .target(env_logger::Target::Stdout)
        .init();
}
