pub const VIDEO_ID: &str = "video_id";
pub const TITLE: &str = "title";
pub const CATEGORY: &str = "category";
pub const VIEWS: &str = "views";
pub const LIKES: &str = "likes";
pub const COMMENT_COUNT: &str = "comment_count";
pub const PUBLISH_TIME: &str = "publish_time";

pub const STANDARD_CATEGORY: &str = "standard_category";
pub const PUBLISH_HOUR: &str = "publish_hour";
pub const PUBLISH_DAY: &str = "publish_day";

pub const REQUIRED_COLUMNS: [&str; 7] = [
    VIDEO_ID,
    TITLE,
    CATEGORY,
    VIEWS,
    LIKES,
    COMMENT_COUNT,
    PUBLISH_TIME,
];

/// Bucketed category label. Everything outside the allow-list collapses to
/// `Others`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardCategory {
    Music,
    Entertainment,
    News,
    Others,
}

impl StandardCategory {
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "Music" => StandardCategory::Music,
            "Entertainment" => StandardCategory::Entertainment,
            "News" => StandardCategory::News,
            _ => StandardCategory::Others,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StandardCategory::Music => "Music",
            StandardCategory::Entertainment => "Entertainment",
            StandardCategory::News => "News",
            StandardCategory::Others => "Others",
        }
    }
}
