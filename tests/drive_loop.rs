use glide::{
    ScrollToElementOpts, ScrollToTopOpts, Scroller, SimViewport, Target, Viewport as _,
    drive_fixed, drive_fixed_with, drive_realtime,
};

#[test]
fn fixed_drive_lands_exactly_on_the_target() {
    let mut vp = SimViewport::new(0.0);
    vp.insert("#end", 1080.0);
    let mut scroller = Scroller::new(vp);
    scroller.scroll_to_element(
        &Target::Selector("#end".into()),
        ScrollToElementOpts::default(),
    );

    // 100 fps -> 10ms steps, so an 800ms run completes on frame index 80.
    let frames = drive_fixed(&mut scroller, 100).unwrap();
    assert_eq!(frames, 81);
    assert_eq!(scroller.viewport().scroll_y(), 1000.0);
    assert!(!scroller.is_animating());
}

#[test]
fn fixed_drive_samples_are_ordered_and_monotonic() {
    let mut scroller = Scroller::new(SimViewport::new(800.0));
    scroller.scroll_to_top(ScrollToTopOpts::default());

    let mut samples: Vec<(u64, f64)> = Vec::new();
    let frames = drive_fixed_with(&mut scroller, 100, |frame, y| samples.push((frame, y))).unwrap();

    assert_eq!(frames, 61); // 600ms at 10ms steps, inclusive of frame 0
    assert_eq!(samples.len(), 61);
    assert_eq!(samples[0], (0, 800.0));
    assert_eq!(samples[60].1, 0.0);
    for pair in samples.windows(2) {
        assert_eq!(pair[1].0, pair[0].0 + 1);
        assert!(pair[1].1 <= pair[0].1, "collapse toward zero must not climb");
    }
}

#[test]
fn realtime_drive_completes_short_runs() {
    let mut scroller = Scroller::new(SimViewport::new(120.0));
    scroller.scroll_to_top(ScrollToTopOpts {
        duration_ms: 30.0,
        ..Default::default()
    });

    let frames = drive_realtime(&mut scroller, 120).unwrap();
    assert!(frames >= 1);
    assert_eq!(scroller.viewport().scroll_y(), 0.0);
    assert!(!scroller.is_animating());
}

#[test]
fn non_positive_durations_terminate_the_drive_loop() {
    // A hostile duration must never leave the driver spinning.
    for duration_ms in [0.0, -500.0] {
        let mut scroller = Scroller::new(SimViewport::new(800.0));
        scroller.scroll_to_top(ScrollToTopOpts {
            duration_ms,
            ..Default::default()
        });

        let frames = drive_fixed(&mut scroller, 60).unwrap();
        assert_eq!(frames, 1);
        assert_eq!(scroller.viewport().scroll_y(), 0.0);
        assert!(!scroller.is_animating());
    }
}

#[test]
fn zero_fps_is_a_validation_error() {
    let mut scroller = Scroller::new(SimViewport::new(100.0));
    scroller.scroll_to_top(ScrollToTopOpts::default());

    let err = drive_fixed(&mut scroller, 0).unwrap_err();
    assert!(err.to_string().contains("validation error:"));
    let err = drive_realtime(&mut scroller, 0).unwrap_err();
    assert!(err.to_string().contains("validation error:"));
}
