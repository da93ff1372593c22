pub mod commands;
pub mod model;
pub mod repository;
pub mod storage;
pub mod types;

pub use repository::Repository;
pub use storage::{Data, Storage};

#[derive(Clone)]
pub struct Environment {
    pub repository: Repository,
    pub storage: Storage,
}

impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Environment").finish()
    }
}

impl Environment {
    pub fn new(repository: Repository) -> Self {
        Self {
            repository,
            storage: Storage::default(),
        }
    }
}
