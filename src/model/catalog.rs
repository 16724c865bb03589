use super::Video;
use std::collections::HashMap;
use std::sync::Arc;

/// Read-only source of video records
///
/// Both the playback controller and the playlist store resolve ids through
/// this trait. Records are shared, never copied.
pub trait CatalogProvider {
    /// All videos, in catalog order
    fn videos(&self) -> &[Arc<Video>];

    /// Look up a video by id
    fn get(&self, id: &str) -> Option<Arc<Video>>;

    /// Total number of videos
    fn len(&self) -> usize {
        self.videos().len()
    }

    /// Check if the catalog has no videos
    fn is_empty(&self) -> bool {
        self.videos().is_empty()
    }

    /// Check if a video id is known
    fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }
}

/// In-memory video catalog
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// All videos in insertion order
    videos: Vec<Arc<Video>>,

    /// Position of each video in `videos`, indexed by id
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog the player ships with
    pub fn sample() -> Self {
        [
            Video::new("funny_dogs_video_id", "Funny Dogs", &["#dog", "#animal"]),
            Video::new("amazing_cats_video_id", "Amazing Cats", &["#cat", "#animal"]),
            Video::new("another_cat_video_id", "Another Cat Video", &["#cat", "#animal"]),
            Video::new("life_at_google_video_id", "Life at Google", &["#google", "#career"]),
            Video::new("nothing_video_id", "Video about nothing", &[]),
        ]
        .into_iter()
        .collect()
    }

    /// Add a video to the catalog
    ///
    /// A video with an id already present replaces the earlier record in place.
    pub fn add_video(&mut self, video: Video) {
        match self.index.get(&video.id) {
            Some(&pos) => {
                log::warn!("Duplicate video id in catalog, replacing: {}", video.id);
                self.videos[pos] = Arc::new(video);
            }
            None => {
                self.index.insert(video.id.clone(), self.videos.len());
                self.videos.push(Arc::new(video));
            }
        }
    }
}

impl FromIterator<Video> for Catalog {
    fn from_iter<I: IntoIterator<Item = Video>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for video in iter {
            catalog.add_video(video);
        }
        catalog
    }
}

impl CatalogProvider for Catalog {
    fn videos(&self) -> &[Arc<Video>] {
        &self.videos
    }

    fn get(&self, id: &str) -> Option<Arc<Video>> {
        self.index.get(id).map(|&pos| Arc::clone(&self.videos[pos]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_creation() {
        let catalog = Catalog::new();
        assert_eq!(catalog.len(), 0);
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_add_video() {
        let mut catalog = Catalog::new();
        catalog.add_video(Video::new("v1", "Amazing Cat Video", &["#cat"]));

        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains("v1"));
        assert_eq!(catalog.get("v1").unwrap().title, "Amazing Cat Video");
        assert!(catalog.get("v2").is_none());
    }

    #[test]
    fn test_duplicate_id_replaces_record() {
        let mut catalog = Catalog::new();
        catalog.add_video(Video::new("v1", "First", &[]));
        catalog.add_video(Video::new("v2", "Second", &[]));
        catalog.add_video(Video::new("v1", "Replacement", &[]));

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.videos()[0].title, "Replacement");
        assert_eq!(catalog.get("v1").unwrap().title, "Replacement");
    }

    #[test]
    fn test_sample_catalog() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.len(), 5);

        let cats = catalog.get("amazing_cats_video_id").unwrap();
        assert_eq!(cats.title, "Amazing Cats");
        assert_eq!(cats.tags, vec!["#cat", "#animal"]);

        assert!(catalog.get("nothing_video_id").unwrap().tags.is_empty());
    }

    #[test]
    fn test_get_shares_record() {
        let catalog = Catalog::sample();
        let a = catalog.get("funny_dogs_video_id").unwrap();
        let b = catalog.get("funny_dogs_video_id").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
