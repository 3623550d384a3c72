//! Engagement counter record for external posts
//!
//! Every counter is optional: an absent value means the upstream platform
//! did not report it, which is different from a count of zero.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Wire names of the counters, in payload order
pub const LIKE_COUNT: &str = "likeCount";
pub const COMMENT_COUNT: &str = "commentCount";
pub const VIEW_COUNT: &str = "viewCount";

/// Like/comment/view counts of a post that originates outside the system
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct PostExternalData {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0))]
    like_count: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0))]
    comment_count: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0))]
    view_count: Option<i64>,
}

impl PostExternalData {
    /// Record with every counter absent
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_like_count(mut self, count: i64) -> Self {
        self.like_count = Some(count);
        self
    }

    pub fn with_comment_count(mut self, count: i64) -> Self {
        self.comment_count = Some(count);
        self
    }

    pub fn with_view_count(mut self, count: i64) -> Self {
        self.view_count = Some(count);
        self
    }

    pub fn like_count(&self) -> Option<i64> {
        self.like_count
    }

    pub fn comment_count(&self) -> Option<i64> {
        self.comment_count
    }

    pub fn view_count(&self) -> Option<i64> {
        self.view_count
    }

    pub fn set_like_count(&mut self, count: Option<i64>) {
        self.like_count = count;
    }

    pub fn set_comment_count(&mut self, count: Option<i64>) {
        self.comment_count = count;
    }

    pub fn set_view_count(&mut self, count: Option<i64>) {
        self.view_count = count;
    }

    /// True when the upstream platform reported none of the counters
    pub fn is_empty(&self) -> bool {
        self.like_count.is_none() && self.comment_count.is_none() && self.view_count.is_none()
    }

    /// Combine an older snapshot with a newer fetch.
    ///
    /// Counters present in `newer` win; counters it lacks keep the value
    /// from `self`, so a partial refresh never erases known data.
    pub fn merge(&self, newer: &PostExternalData) -> PostExternalData {
        PostExternalData {
            like_count: newer.like_count.or(self.like_count),
            comment_count: newer.comment_count.or(self.comment_count),
            view_count: newer.view_count.or(self.view_count),
        }
    }

    /// Likes plus comments, or `None` when neither is known. Views are not
    /// counted as engagement.
    pub fn total_engagement(&self) -> Option<i64> {
        match (self.like_count, self.comment_count) {
            (None, None) => None,
            (likes, comments) => Some(likes.unwrap_or(0).saturating_add(comments.unwrap_or(0))),
        }
    }

    /// Counters paired with their wire names, in payload order
    pub fn counters(&self) -> [(&'static str, Option<i64>); 3] {
        [
            (LIKE_COUNT, self.like_count),
            (COMMENT_COUNT, self.comment_count),
            (VIEW_COUNT, self.view_count),
        ]
    }

    /// Clear the counter with the given wire name. Unknown names are ignored.
    pub(crate) fn clear(&mut self, wire_name: &str) {
        match wire_name {
            LIKE_COUNT => self.like_count = None,
            COMMENT_COUNT => self.comment_count = None,
            VIEW_COUNT => self.view_count = None,
            _ => {}
        }
    }
}

/// Map a Rust field name (as reported by `validator`) to its wire name
pub(crate) fn wire_name(field: &str) -> Option<&'static str> {
    match field {
        "like_count" => Some(LIKE_COUNT),
        "comment_count" => Some(COMMENT_COUNT),
        "view_count" => Some(VIEW_COUNT),
        _ => None,
    }
}
