use serde::{Deserialize, Serialize};
use std::fmt;

/// A single video record from the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    /// Unique identifier for this video
    pub id: String,

    /// Video title
    pub title: String,

    /// Tags in catalog order (e.g. `#cat`)
    pub tags: Vec<String>,
}

impl Video {
    /// Create a new video record
    pub fn new(id: impl Into<String>, title: impl Into<String>, tags: &[&str]) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// Renders as `Title (id) [#tag1 #tag2]`
impl fmt::Display for Video {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) [{}]", self.title, self.id, self.tags.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_tags() {
        let video = Video::new("amazing_cats_video_id", "Amazing Cats", &["#cat", "#animal"]);
        assert_eq!(
            video.to_string(),
            "Amazing Cats (amazing_cats_video_id) [#cat #animal]"
        );
    }

    #[test]
    fn test_display_without_tags() {
        let video = Video::new("nothing_video_id", "Video about nothing", &[]);
        assert_eq!(video.to_string(), "Video about nothing (nothing_video_id) []");
    }
}
