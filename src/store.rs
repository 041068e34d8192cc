// Song identifier store
//
// An ordered, read-only mapping from known filenames to Telegram file ids,
// loaded once at startup from a JSON snapshot. The matcher's fallback
// tie-break is "first entry in store order", so the map must preserve the
// snapshot's key order.

use std::fs;
use std::io;
use std::path::Path;

use indexmap::IndexMap;
use log::{info, warn};

/// In-memory song snapshot, immutable after load
///
/// Shared read-only across request handlers; no interior mutability.
#[derive(Debug, Default)]
pub struct SongStore {
    songs: IndexMap<String, String>,
}

impl SongStore {
    /// Load the store from a JSON snapshot file
    ///
    /// The snapshot is a JSON object mapping filename strings to Telegram
    /// file id strings. A missing file logs a warning and yields an empty
    /// store: the service stays up, every request 404s until a snapshot is
    /// deployed. A present-but-malformed file is an error.
    pub fn load(path: &Path) -> io::Result<Self> {
        if !path.exists() {
            warn!("Song snapshot not found at {}, starting empty", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let songs: IndexMap<String, String> = serde_json::from_str(&content)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        info!("Song snapshot loaded with {} songs", songs.len());
        Ok(Self { songs })
    }

    /// Build a store from an iterator of (filename, file id) pairs
    ///
    /// Entry order is preserved and becomes the fallback scan order.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        Self {
            songs: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Exact lookup by filename
    pub fn get(&self, filename: &str) -> Option<&str> {
        self.songs.get(filename).map(String::as_str)
    }

    /// Iterate entries in snapshot order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.songs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of songs in the store
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// Whether the store holds no songs
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_snapshot_yields_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = SongStore::load(&dir.path().join("nope.json")).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn snapshot_load_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("songs_db.json");
        let mut file = fs::File::create(&path).unwrap();
        write!(
            file,
            r#"{{"Zebra-aaa.mp3": "id1", "Alpha-bbb.mp3": "id2", "Mango-ccc.mp3": "id3"}}"#
        )
        .unwrap();

        let store = SongStore::load(&path).unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(store.get("Alpha-bbb.mp3"), Some("id2"));

        let keys: Vec<&str> = store.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["Zebra-aaa.mp3", "Alpha-bbb.mp3", "Mango-ccc.mp3"]);
    }

    #[test]
    fn malformed_snapshot_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("songs_db.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        assert!(SongStore::load(&path).is_err());
    }
}
