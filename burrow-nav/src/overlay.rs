use burrow_types::{PostSummary, UserProfile};

/// Number of a profile's posts listed inside its overlay
pub const PREVIEW_POST_LIMIT: usize = 3;

/// Depth information shown on a profile overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayIndicator {
    pub depth: usize,
    pub max_depth: usize,
    pub show_stack_info: bool,
}

impl OverlayIndicator {
    /// `depth/max` badge, only once overlays are actually nested
    pub fn badge(&self) -> Option<String> {
        if self.show_stack_info && self.depth > 1 {
            Some(format!("{}/{}", self.depth, self.max_depth))
        } else {
            None
        }
    }

    /// True when at most one more overlay can be opened
    pub fn near_limit(&self) -> bool {
        self.show_stack_info && self.depth + 1 >= self.max_depth
    }

    /// Whether author names inside this overlay should be clickable
    pub fn can_click_profile(&self) -> bool {
        self.depth < self.max_depth
    }
}

/// Everything a screen needs to draw one profile overlay
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileOverlay {
    pub profile: UserProfile,
    pub posts: Vec<PostSummary>,
    pub indicator: OverlayIndicator,
}

impl ProfileOverlay {
    pub fn new(profile: UserProfile, posts: Vec<PostSummary>, indicator: OverlayIndicator) -> Self {
        Self {
            profile,
            posts,
            indicator,
        }
    }

    pub fn title(&self) -> String {
        format!("{}'s profile", self.profile.nickname)
    }

    pub fn preview_posts(&self) -> &[PostSummary] {
        let end = self.posts.len().min(PREVIEW_POST_LIMIT);
        &self.posts[..end]
    }

    pub fn has_more_posts(&self) -> bool {
        self.posts.len() > PREVIEW_POST_LIMIT
    }

    /// Posts left out of the preview, for a "+N more" label
    pub fn remaining_posts(&self) -> usize {
        self.posts.len().saturating_sub(PREVIEW_POST_LIMIT)
    }
}
