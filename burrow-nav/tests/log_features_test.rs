use burrow_nav::logging::{init_logging, LogConfig, LogFeatures};
use burrow_nav::{NavigationConfig, PostDetailArgs, PostDetailController};
use burrow_types::ProfileId;
use log::LevelFilter;
use std::fs;
use tempfile::TempDir;

// The logger is process-wide, so this file holds a single test
#[test]
fn test_muted_features_leave_no_navigation_lines() {
    let dir = TempDir::new().unwrap();
    let log_file = dir.path().join("burrow_nav.log");

    // Debug level, so only the feature switches keep records out
    let config = LogConfig {
        log_file: log_file.clone(),
        level: LevelFilter::Debug,
        features: LogFeatures::none(),
        ..LogConfig::minimal()
    };
    init_logging(&config).unwrap();

    let args = PostDetailArgs::with_profile_stack(
        "post-1",
        vec![ProfileId::from("alice"), ProfileId::from("bob")],
    );
    let mut controller =
        PostDetailController::open_with_log_config(args, &NavigationConfig::default(), config);
    controller.on_profile_click("carol");
    controller.on_profile_click("alice");
    controller.jump_to_profile("alice");
    controller.on_overlay_dismissed();
    controller.on_overlay_dismissed();
    controller.on_post_click_from_profile("post-2");
    controller.teardown();

    // Records outside the muted targets still arrive
    log::warn!("unrelated warning");

    let contents = fs::read_to_string(&log_file).expect("Should be able to read log file");
    assert!(contents.contains("unrelated warning"));

    for muted in [
        "Restored stack",
        "Pushed profile",
        "Rejected profile",
        "Popped profile",
        "Collapsed stack",
        "Cleared stack",
        "Opened profile",
        "not opened",
        "Dismissed overlay",
        "Handing",
        "Post post-1",
    ] {
        assert!(
            !contents.contains(muted),
            "Found muted line {:?} in log:\n{}",
            muted,
            contents
        );
    }
}
