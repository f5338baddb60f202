use eal::{run, setup_logging, Args, LogLevel};
use tracing::level_filters::LevelFilter;

// One test per binary: the subscriber is process-wide, so the levels are
// checked in sequence rather than from parallel test threads.
#[test]
fn setup_installs_one_subscriber_and_applies_each_level() {
    assert!(
        !tracing::dispatcher::has_been_set(),
        "no subscriber should be installed yet"
    );

    for (name, level) in [
        ("debug", LogLevel::Debug),
        ("info", LogLevel::Info),
        ("warning", LogLevel::Warning),
        ("error", LogLevel::Error),
        ("critical", LogLevel::Critical),
    ] {
        let handle = setup_logging(level).expect("setup should succeed on every call");

        assert!(
            tracing::dispatcher::has_been_set(),
            "a subscriber should now be installed"
        );
        assert_eq!(handle.level().name(), name.to_uppercase());
        assert_eq!(LevelFilter::current(), level.filter());
    }

    let handle = setup_logging(LogLevel::Warning).unwrap();
    handle.set_level(LogLevel::Debug).unwrap();
    assert_eq!(setup_logging(LogLevel::Info).unwrap().level(), LogLevel::Info);
    assert_eq!(handle.level(), LogLevel::Info, "handles share one configuration");

    for (name, level) in [
        ("debug", LogLevel::Debug),
        ("INFO", LogLevel::Info),
        ("warning", LogLevel::Warning),
        ("error", LogLevel::Error),
        ("critical", LogLevel::Critical),
    ] {
        let args = Args::from_argv([
            "bogus".to_string(),
            "--region=pytest-local".to_string(),
            "--message=pytest-log_levels".to_string(),
            format!("--log-level={name}"),
        ])
        .unwrap();
        let mut out = Vec::new();

        let return_code = run(args, &mut out).unwrap();

        assert_eq!(return_code, 0, "run should return success");
        assert_eq!(handle.level().name(), name.to_uppercase());
        assert_eq!(LevelFilter::current(), level.filter());
        assert_eq!(String::from_utf8(out).unwrap().split('\n').count(), 5);
    }
}
