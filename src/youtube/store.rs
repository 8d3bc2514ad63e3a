use super::{VideoRecord, YoutubeError};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

const VIDEOS_KEY: &str = "youtube_videos";

/// The resources JSON file: a top-level object whose `youtube_videos` array is
/// appended to. Other keys, and existing entries of any shape, are kept as-is.
pub struct ResourceStore {
    path: PathBuf,
    root: Map<String, Value>,
    videos: Vec<Value>,
}

impl ResourceStore {
    /// A missing file starts an empty store.
    pub fn load(path: &Path) -> Result<Self, YoutubeError> {
        let mut root = match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str::<Value>(&content)? {
                Value::Object(map) => map,
                _ => return Err(YoutubeError::InvalidStore(path.display().to_string())),
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Map::new(),
            Err(e) => return Err(e.into()),
        };

        let videos = match root.remove(VIDEOS_KEY) {
            Some(Value::Array(entries)) => entries,
            Some(Value::Null) | None => Vec::new(),
            Some(_) => return Err(YoutubeError::InvalidStore(path.display().to_string())),
        };

        Ok(Self {
            path: path.to_path_buf(),
            root,
            videos,
        })
    }

    pub fn videos(&self) -> &[Value] {
        &self.videos
    }

    /// Append records whose JSON form is not already present. Returns how many were added.
    pub fn merge(
        &mut self,
        records: impl IntoIterator<Item = VideoRecord>,
    ) -> Result<usize, YoutubeError> {
        let mut added = 0;
        for record in records {
            let entry = serde_json::to_value(&record)?;
            if !self.videos.contains(&entry) {
                self.videos.push(entry);
                added += 1;
            }
        }
        Ok(added)
    }

    pub fn save(&self) -> Result<(), YoutubeError> {
        let mut root = self.root.clone();
        root.insert(VIDEOS_KEY.to_string(), Value::Array(self.videos.clone()));
        let content = serde_json::to_string_pretty(&Value::Object(root))?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}
