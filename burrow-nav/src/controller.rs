use burrow_types::{PostId, ProfileId};

use crate::args::PostDetailArgs;
use crate::config::NavigationConfig;
use crate::logging::LogConfig;
use crate::overlay::OverlayIndicator;
use crate::stack::NavigationStack;

/// Why a profile overlay was not opened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The profile is already open further down the stack
    AlreadyOpen,
    /// The stack has reached its depth limit
    MaxDepthReached,
    /// The profile id is unusable (blank)
    Unavailable,
}

impl RejectReason {
    /// Message shown to the user
    pub fn message(&self, max_depth: usize) -> String {
        match self {
            RejectReason::AlreadyOpen => "This profile is already open".to_string(),
            RejectReason::MaxDepthReached => {
                format!("Profiles can only be nested {} levels deep", max_depth)
            }
            RejectReason::Unavailable => "This profile can't be opened".to_string(),
        }
    }
}

/// Result of a profile tap
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileOpenOutcome {
    /// A new overlay should be shown for `profile_id`
    Opened { profile_id: ProfileId, depth: usize },
    Rejected(RejectReason),
}

impl ProfileOpenOutcome {
    pub fn is_opened(&self) -> bool {
        matches!(self, ProfileOpenOutcome::Opened { .. })
    }
}

/// What to do after a post is tapped inside a profile overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostNavigation {
    /// The tapped post is the one this view already shows
    AlreadyViewing,
    /// Replace this view with a post detail built from these arguments
    Navigate(PostDetailArgs),
}

/// Owns the profile overlay stack of one post detail view.
///
/// The screen layer forwards user actions here and renders whatever the
/// returned values describe. Nothing in here calls back into the screen.
#[derive(Debug)]
pub struct PostDetailController {
    post_id: PostId,
    stack: NavigationStack,
    show_stack_info: bool,
    log_config: LogConfig,
}

impl PostDetailController {
    /// Enter a post detail view, continuing any stack handed over in `args`
    pub fn open(args: PostDetailArgs, config: &NavigationConfig) -> Self {
        Self::open_with_log_config(args, config, LogConfig::default())
    }

    /// Like [`PostDetailController::open`], with the controller's log
    /// output gated by `log_config` from the first line on
    pub fn open_with_log_config(
        args: PostDetailArgs,
        config: &NavigationConfig,
        log_config: LogConfig,
    ) -> Self {
        let mut controller = Self {
            post_id: args.post_id,
            stack: NavigationStack::with_max_depth(config.max_depth),
            show_stack_info: config.show_stack_info,
            log_config,
        };

        if args.profile_stack.is_empty() {
            log_navigation!(
                controller.log_config,
                "Post {}: starting a new profile stack",
                controller.post_id
            );
        } else {
            let inherited = args.profile_stack.len();
            let usable = usable_profiles(args.profile_stack);
            let discarded = inherited - usable.len();

            controller.stack.restore(usable);
            let dropped = controller.stack.truncate_to(config.max_depth);
            log_navigation!(
                controller.log_config,
                "Post {}: continuing profile stack of {} ({} blank or repeated, {} over depth {})",
                controller.post_id,
                inherited,
                discarded,
                dropped,
                config.max_depth
            );
        }

        controller.log_stack();
        controller
    }

    pub fn post_id(&self) -> &PostId {
        &self.post_id
    }

    pub fn stack(&self) -> &NavigationStack {
        &self.stack
    }

    pub fn depth(&self) -> usize {
        self.stack.current_depth()
    }

    pub fn max_depth(&self) -> usize {
        self.stack.max_depth()
    }

    /// Handle a tap on a profile avatar or author name, from the post itself
    /// or from inside an open overlay
    pub fn on_profile_click(&mut self, profile_id: impl Into<ProfileId>) -> ProfileOpenOutcome {
        let profile_id = profile_id.into();

        if profile_id.is_blank() {
            log_navigation!(self.log_config, "Ignoring profile click without an id");
            return ProfileOpenOutcome::Rejected(RejectReason::Unavailable);
        }

        if self.stack.push(profile_id.clone()) {
            let depth = self.stack.current_depth();
            log_navigation!(self.log_config, "Opened profile {} at depth {}", profile_id, depth);
            self.log_stack();
            return ProfileOpenOutcome::Opened { profile_id, depth };
        }

        let reason = if self.stack.is_in_stack(&profile_id) {
            RejectReason::AlreadyOpen
        } else if self.stack.is_full() {
            RejectReason::MaxDepthReached
        } else {
            RejectReason::Unavailable
        };
        log_navigation!(
            self.log_config,
            "Profile {} not opened: {:?}",
            profile_id,
            reason
        );
        self.log_stack();
        ProfileOpenOutcome::Rejected(reason)
    }

    /// User-facing text for a rejection from this controller
    pub fn rejection_message(&self, reason: RejectReason) -> String {
        reason.message(self.max_depth())
    }

    /// Handle dismissal of the top overlay
    pub fn on_overlay_dismissed(&mut self) -> Option<ProfileId> {
        let closed = self.stack.pop();
        log_navigation!(
            self.log_config,
            "Dismissed overlay {:?}, depth now {}",
            closed.as_ref().map(ProfileId::as_str),
            self.stack.current_depth()
        );
        self.log_stack();
        closed
    }

    /// Jump back to an ancestor overlay, closing everything above it.
    ///
    /// Returns how many overlays were closed; 0 if `profile_id` is not open.
    pub fn jump_to_profile(&mut self, profile_id: impl AsRef<str>) -> usize {
        let closed = self.stack.pop_to(profile_id);
        self.log_stack();
        closed
    }

    /// Handle a tap on one of the posts listed inside a profile overlay
    pub fn on_post_click_from_profile(&self, post_id: impl Into<PostId>) -> PostNavigation {
        let post_id = post_id.into();

        if post_id == self.post_id {
            log_navigation!(self.log_config, "Post {} is already being viewed", post_id);
            return PostNavigation::AlreadyViewing;
        }

        let args = PostDetailArgs::with_profile_stack(post_id, self.stack.serialize());
        log_navigation!(
            self.log_config,
            "Handing {} profile(s) over to post {}",
            args.profile_stack.len(),
            args.post_id
        );
        PostNavigation::Navigate(args)
    }

    /// Depth badge data for the top overlay
    pub fn overlay_indicator(&self) -> OverlayIndicator {
        OverlayIndicator {
            depth: self.stack.current_depth(),
            max_depth: self.stack.max_depth(),
            show_stack_info: self.show_stack_info,
        }
    }

    /// Release the stack when the view goes away
    pub fn teardown(&mut self) {
        self.stack.clear();
        log_navigation!(self.log_config, "Post {}: profile stack released", self.post_id);
    }

    fn log_stack(&self) {
        log_profile_stack!(self.log_config, "Post {}: stack {}", self.post_id, self.stack);
    }
}

/// Drop blank ids and repeats from a handed-over stack, keeping the first
/// occurrence of each profile
fn usable_profiles(inherited: Vec<ProfileId>) -> Vec<ProfileId> {
    let mut usable: Vec<ProfileId> = Vec::with_capacity(inherited.len());
    for id in inherited {
        if !id.is_blank() && !usable.contains(&id) {
            usable.push(id);
        }
    }
    usable
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(post_id: &str) -> PostDetailController {
        PostDetailController::open(PostDetailArgs::new(post_id), &NavigationConfig::default())
    }

    #[test]
    fn test_open_fresh() {
        let controller = open("p1");
        assert_eq!(controller.post_id(), &PostId::from("p1"));
        assert_eq!(controller.depth(), 0);
        assert_eq!(controller.max_depth(), 5);
    }

    #[test]
    fn test_open_restores_inherited_stack() {
        let args = PostDetailArgs::with_profile_stack(
            "p2",
            vec![ProfileId::from("u1"), ProfileId::from("u2")],
        );
        let controller = PostDetailController::open(args, &NavigationConfig::default());
        assert_eq!(controller.depth(), 2);
        assert_eq!(controller.stack().top_of_stack(), Some(&ProfileId::from("u2")));
    }

    #[test]
    fn test_open_truncates_oversized_stack() {
        let config = NavigationConfig {
            max_depth: 2,
            show_stack_info: true,
        };
        let args = PostDetailArgs::with_profile_stack(
            "p2",
            vec![ProfileId::from("u1"), ProfileId::from("u2"), ProfileId::from("u3")],
        );

        let controller = PostDetailController::open(args, &config);
        assert_eq!(
            controller.stack().entries(),
            &[ProfileId::from("u1"), ProfileId::from("u2")]
        );
    }

    #[test]
    fn test_open_drops_blank_and_repeated_profiles() {
        let json = r#"{"postId":"p2","profileStack":["u1","u1","","u2"]}"#;
        let args = PostDetailArgs::from_json(json).unwrap();
        let mut controller = PostDetailController::open(args, &NavigationConfig::default());

        assert_eq!(
            controller.stack().entries(),
            &[ProfileId::from("u1"), ProfileId::from("u2")]
        );
        assert_eq!(controller.on_overlay_dismissed(), Some(ProfileId::from("u2")));
        assert_eq!(controller.on_overlay_dismissed(), Some(ProfileId::from("u1")));
        assert!(!controller.stack().is_in_stack("u1"));
        assert_eq!(controller.on_overlay_dismissed(), None);
    }

    #[test]
    fn test_open_dedupes_before_truncating() {
        let config = NavigationConfig {
            max_depth: 2,
            show_stack_info: true,
        };
        let args = PostDetailArgs::with_profile_stack(
            "p2",
            vec![ProfileId::from("u1"), ProfileId::from("u1"), ProfileId::from("u2")],
        );

        let controller = PostDetailController::open(args, &config);
        assert_eq!(
            controller.stack().entries(),
            &[ProfileId::from("u1"), ProfileId::from("u2")]
        );
    }

    #[test]
    fn test_profile_click_opens() {
        let mut controller = open("p1");
        let outcome = controller.on_profile_click("u1");
        assert_eq!(
            outcome,
            ProfileOpenOutcome::Opened {
                profile_id: ProfileId::from("u1"),
                depth: 1
            }
        );
        assert!(outcome.is_opened());
    }

    #[test]
    fn test_duplicate_profile_rejected_as_already_open() {
        let mut controller = open("p1");
        controller.on_profile_click("u1");
        controller.on_profile_click("u2");

        let outcome = controller.on_profile_click("u1");
        assert_eq!(outcome, ProfileOpenOutcome::Rejected(RejectReason::AlreadyOpen));
        assert_eq!(controller.depth(), 2);
    }

    #[test]
    fn test_full_stack_rejected_as_max_depth() {
        let mut controller = open("p1");
        for id in ["u1", "u2", "u3", "u4", "u5"] {
            assert!(controller.on_profile_click(id).is_opened());
        }

        let outcome = controller.on_profile_click("u6");
        assert_eq!(outcome, ProfileOpenOutcome::Rejected(RejectReason::MaxDepthReached));
        assert_eq!(
            controller.rejection_message(RejectReason::MaxDepthReached),
            "Profiles can only be nested 5 levels deep"
        );
    }

    #[test]
    fn test_already_open_wins_over_full() {
        let mut controller = open("p1");
        for id in ["u1", "u2", "u3", "u4", "u5"] {
            controller.on_profile_click(id);
        }

        let outcome = controller.on_profile_click("u3");
        assert_eq!(outcome, ProfileOpenOutcome::Rejected(RejectReason::AlreadyOpen));
    }

    #[test]
    fn test_blank_profile_unavailable() {
        let mut controller = open("p1");
        let outcome = controller.on_profile_click(" ");
        assert_eq!(outcome, ProfileOpenOutcome::Rejected(RejectReason::Unavailable));
        assert_eq!(controller.depth(), 0);
    }

    #[test]
    fn test_dismiss_pops_top() {
        let mut controller = open("p1");
        controller.on_profile_click("u1");
        controller.on_profile_click("u2");

        assert_eq!(controller.on_overlay_dismissed(), Some(ProfileId::from("u2")));
        assert_eq!(controller.on_overlay_dismissed(), Some(ProfileId::from("u1")));
        assert_eq!(controller.on_overlay_dismissed(), None);
    }

    #[test]
    fn test_post_click_on_current_post() {
        let mut controller = open("p1");
        controller.on_profile_click("u1");
        assert_eq!(
            controller.on_post_click_from_profile("p1"),
            PostNavigation::AlreadyViewing
        );
    }

    #[test]
    fn test_post_click_hands_over_stack() {
        let mut controller = open("p1");
        controller.on_profile_click("u1");
        controller.on_profile_click("u2");

        let navigation = controller.on_post_click_from_profile("p7");
        assert_eq!(
            navigation,
            PostNavigation::Navigate(PostDetailArgs::with_profile_stack(
                "p7",
                vec![ProfileId::from("u1"), ProfileId::from("u2")]
            ))
        );
        // The current view keeps its own stack
        assert_eq!(controller.depth(), 2);
    }

    #[test]
    fn test_jump_to_profile() {
        let mut controller = open("p1");
        for id in ["u1", "u2", "u3"] {
            controller.on_profile_click(id);
        }

        assert_eq!(controller.jump_to_profile("u1"), 2);
        assert_eq!(controller.depth(), 1);
        assert_eq!(controller.jump_to_profile("missing"), 0);
        assert_eq!(controller.depth(), 1);
    }

    #[test]
    fn test_overlay_indicator_tracks_depth() {
        let mut controller = open("p1");
        controller.on_profile_click("u1");
        assert_eq!(controller.overlay_indicator().badge(), None);

        controller.on_profile_click("u2");
        let indicator = controller.overlay_indicator();
        assert_eq!(indicator.badge(), Some("2/5".to_string()));
        assert!(indicator.can_click_profile());
    }

    #[test]
    fn test_teardown_clears() {
        let mut controller = PostDetailController::open_with_log_config(
            PostDetailArgs::new("p1"),
            &NavigationConfig::default(),
            LogConfig::disabled(),
        );
        controller.on_profile_click("u1");
        controller.teardown();
        assert_eq!(controller.depth(), 0);
    }

    #[test]
    fn test_reject_messages() {
        assert_eq!(
            RejectReason::AlreadyOpen.message(5),
            "This profile is already open"
        );
        assert_eq!(
            RejectReason::Unavailable.message(5),
            "This profile can't be opened"
        );
        assert_eq!(
            RejectReason::MaxDepthReached.message(3),
            "Profiles can only be nested 3 levels deep"
        );
    }
}
