// Filename matcher
//
// Requested filenames drift from the stored ones: different extensions,
// underscores swapped for spaces, title prefixes present or absent. The
// stable anchor across those variants is the trailing token after the last
// dash (by convention the external video/content id), so when an exact
// lookup misses we fall back to a substring scan on that token.

use log::info;

use crate::store::SongStore;

/// Resolve a requested filename to a Telegram file id
///
/// Exact match first. Otherwise the extension is stripped, the match token
/// is taken (text after the last `-`, or the whole stem when there is no
/// dash), and the first store entry whose filename contains the token wins.
/// The scan order is the store's snapshot order, which makes ties stable
/// rather than "best"; that trade-off is deliberate.
pub fn resolve<'a>(filename: &str, store: &'a SongStore) -> Option<&'a str> {
    if let Some(file_id) = store.get(filename) {
        return Some(file_id);
    }

    let stem = match filename.rsplit_once('.') {
        Some((stem, _ext)) => stem,
        None => filename,
    };

    let token = match stem.rsplit_once('-') {
        Some((_, token)) => token,
        None => stem,
    };

    // An empty token would be a substring of every key.
    if token.is_empty() {
        return None;
    }

    for (stored_name, file_id) in store.iter() {
        if stored_name.contains(token) {
            info!("Fuzzy match: requested '{}' resolved via '{}'", filename, stored_name);
            return Some(file_id);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> SongStore {
        SongStore::from_entries([
            ("Chand_Sifarish-ZaURV4XxdPI.mp3", "id_chand"),
            ("Song A-XYZ123.mp3", "id_a"),
            ("Song B-XYZ123.mp3", "id_b"),
            ("plainname.mp3", "id_plain"),
        ])
    }

    #[test]
    fn exact_match_wins() {
        let store = store();
        assert_eq!(resolve("Song A-XYZ123.mp3", &store), Some("id_a"));
    }

    #[test]
    fn exact_match_beats_token_scan() {
        // "Song B" contains the same token but the exact key must win even
        // though "Song A" comes first in scan order.
        let store = store();
        assert_eq!(resolve("Song B-XYZ123.mp3", &store), Some("id_b"));
    }

    #[test]
    fn falls_back_to_trailing_dash_token() {
        let store = store();
        // Different extension and a space instead of an underscore.
        assert_eq!(resolve("Chand Sifarish-ZaURV4XxdPI.m4a", &store), Some("id_chand"));
    }

    #[test]
    fn first_entry_in_store_order_breaks_ties() {
        let store = store();
        assert_eq!(resolve("Other Title-XYZ123.m4a", &store), Some("id_a"));
    }

    #[test]
    fn no_dash_uses_whole_stem_as_token() {
        let store = store();
        assert_eq!(resolve("plainname.ogg", &store), Some("id_plain"));
    }

    #[test]
    fn empty_token_never_matches() {
        let store = store();
        assert_eq!(resolve("ends-with-dash-.mp3", &store), None);
        assert_eq!(resolve(".mp3", &store), None);
        assert_eq!(resolve("", &store), None);
    }

    #[test]
    fn unknown_filename_returns_none() {
        let store = store();
        assert_eq!(resolve("Totally Unrelated-QQQQQ.mp3", &store), None);
    }

    #[test]
    fn empty_store_matches_nothing() {
        let store = SongStore::default();
        assert_eq!(resolve("anything.mp3", &store), None);
    }
}
