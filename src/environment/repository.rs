use crate::environment::types::UiConfig;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{from_slice, to_string_pretty};
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

const UICONFIG_PATH: &str = "uiconfig.json";

lazy_static::lazy_static! {
    static ref DATA_DIRECTORY: PathBuf = default_data_directory();
}

#[derive(Clone)]
pub struct Repository {
    root: PathBuf,
    ui_config: Arc<Mutex<UiConfig>>,
}

impl Repository {
    pub fn new() -> Self {
        Self::with_root(DATA_DIRECTORY.clone())
    }

    /// Keep the persisted settings under a custom directory.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let ui_config = read(&root, UICONFIG_PATH).ok().flatten().unwrap_or_default();
        Self {
            root,
            ui_config: Arc::new(Mutex::new(ui_config)),
        }
    }

    pub fn config(&self) -> Result<UiConfig, String> {
        Ok(self
            .ui_config
            .lock()
            .map_err(|e| format!("UiConfig Data Error: {e:?}"))?
            .clone())
    }

    pub fn set_config(&self, config: &UiConfig) -> Option<()> {
        let mut ui_config = self
            .ui_config
            .lock()
            .map_err(|e| format!("UiConfig Data Error: {e:?}"))
            .ok()?;
        *ui_config = config.clone();
        if let Err(e) = write(&self.root, UICONFIG_PATH, config) {
            log::error!("Could not save config: {e:?}");
        }
        None
    }

    pub fn map_config<T>(
        &self,
        action: impl FnOnce(&mut MutexGuard<UiConfig>) -> T,
    ) -> Result<T, String> {
        let mut ui_config = self
            .ui_config
            .lock()
            .map_err(|e| format!("UiConfig Data Error: {e:?}"))?;
        let o = action(&mut ui_config);
        if let Err(e) = write(&self.root, UICONFIG_PATH, ui_config.deref()) {
            log::error!("Could not save config: {e:?}");
        }
        Ok(o)
    }
}

impl Default for Repository {
    fn default() -> Self {
        Self::new()
    }
}

fn read<T: DeserializeOwned>(root: &Path, name: &str) -> Result<Option<T>, String> {
    let data_path = root.join(name);
    if !data_path.exists() {
        return Ok(None);
    };
    let data = std::fs::read(&data_path)
        .map_err(|e| format!("Could not read {}: {e:?}", data_path.display()))?;
    let obj: T =
        from_slice(&data).map_err(|e| format!("Could not parse {}: {e:?}", data_path.display()))?;
    Ok(Some(obj))
}

fn write<T: Serialize>(root: &Path, name: &str, value: &T) -> Result<(), String> {
    let data_path = root.join(name);
    let data = to_string_pretty(&value).map_err(|e| format!("Could not parse value:{e:?}"))?;
    std::fs::write(&data_path, data)
        .map_err(|e| format!("Could not write to {}: {e:?}", data_path.display()))?;
    Ok(())
}

fn default_data_directory() -> PathBuf {
    use directories_next::ProjectDirs;
    if let Some(proj_dirs) = ProjectDirs::from("com", "storyline", "storyline") {
        let dirs = proj_dirs.config_dir().to_path_buf();
        if !dirs.exists() {
            if let Err(e) = std::fs::create_dir_all(&dirs) {
                log::error!("Could not create directory {}: {e:?}", dirs.display());
                panic!("Couldn't find a folder to save data")
            }
        }
        dirs
    } else {
        panic!("Couldn't find a folder to save data")
    }
}
