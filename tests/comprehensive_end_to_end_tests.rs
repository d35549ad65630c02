//! End-to-end runs of the supervisor against captured output

use spinwait::{
    app::run_supervised,
    constants::terminal::SPINNER_FRAMES,
    spinner::{self, SpinnerState},
    supervisor::{SupervisorConfig, supervise},
    testing_utils::{OutputTrace, SharedBuffer},
};
use std::time::Duration;

/// Default run: "thinking!", 100 ms frames, 3 s computation
#[tokio::test(start_paused = true)]
async fn test_default_run_prints_answer_after_wiped_spinner() {
    let buffer = SharedBuffer::new();
    let mut answer_out = buffer.clone();

    let result = run_supervised(buffer.clone(), &mut answer_out, &SupervisorConfig::default())
        .await
        .unwrap();
    assert_eq!(result, 42);

    let output = buffer.contents();
    let spinner_output = output
        .strip_suffix("Answer: 42\n")
        .expect("answer line should come last");

    // The animation never writes a line terminator
    assert!(!spinner_output.contains('\n'));
    assert!(!spinner_output.contains('\r'));

    let trace = OutputTrace::parse(spinner_output);
    let cycles = trace.cycles();
    assert!(
        (25..=31).contains(&cycles.len()),
        "expected about 30 frames, got {}",
        cycles.len()
    );

    for (i, cycle) in cycles.iter().enumerate() {
        assert_eq!(cycle.text, format!("{} thinking!", SPINNER_FRAMES[i % 4]));
        assert!(cycle.is_balanced(), "frame {i} erase width mismatch: {cycle:?}");
    }

    // Exactly one wipe, after the last frame, as wide as that frame
    assert_eq!(trace.cleanups(), 1);
    assert!(trace.ends_with_cleanup());
    let cleanup = trace.segments().last().unwrap();
    assert!(cleanup.is_balanced());
    assert_eq!(cleanup.width(), cycles.last().unwrap().width());
}

#[tokio::test(start_paused = true)]
async fn test_custom_label_and_timing() {
    let buffer = SharedBuffer::new();
    let config = SupervisorConfig {
        label: "crunching numbers".to_string(),
        frame_interval: Duration::from_millis(50),
        delay: Duration::from_millis(1000),
    };

    let result = supervise(buffer.clone(), &config).await.unwrap();
    assert_eq!(result, 42);

    let trace = OutputTrace::parse(&buffer.contents());
    let cycles = trace.cycles();
    assert!((18..=21).contains(&cycles.len()), "got {}", cycles.len());
    assert!(cycles.iter().all(|c| c.text.ends_with(" crunching numbers")));
    assert!(trace.segments().iter().all(|s| s.is_balanced()));
    assert!(trace.ends_with_cleanup());
}

/// Same flow on the real clock with short durations
#[tokio::test]
async fn test_real_time_run() {
    let buffer = SharedBuffer::new();
    let config = SupervisorConfig {
        frame_interval: Duration::from_millis(5),
        delay: Duration::from_millis(60),
        ..SupervisorConfig::default()
    };

    let result = supervise(buffer.clone(), &config).await.unwrap();
    assert_eq!(result, 42);

    let trace = OutputTrace::parse(&buffer.contents());
    assert!(!trace.cycles().is_empty());
    assert!(trace.segments().iter().all(|s| s.is_balanced()));
    assert_eq!(trace.cleanups(), 1);
    assert!(trace.ends_with_cleanup());
}

#[tokio::test(start_paused = true)]
async fn test_output_is_frozen_once_supervise_returns() {
    let buffer = SharedBuffer::new();
    let config = SupervisorConfig {
        delay: Duration::from_millis(400),
        ..SupervisorConfig::default()
    };

    supervise(buffer.clone(), &config).await.unwrap();
    let at_return = buffer.contents();

    tokio::time::sleep(Duration::from_secs(1)).await;
    assert_eq!(buffer.contents(), at_return);
}

#[tokio::test(start_paused = true)]
async fn test_handle_lifecycle() {
    let buffer = SharedBuffer::new();
    let mut handle = spinner::spawn(buffer.clone(), "thinking!", Duration::from_millis(100));
    assert_eq!(handle.state(), SpinnerState::Running);

    tokio::time::sleep(Duration::from_millis(1050)).await;
    assert_eq!(handle.state(), SpinnerState::Running);

    handle.cancel();
    handle.cancel();
    handle.stop().await.unwrap();
    assert_eq!(handle.state(), SpinnerState::Stopped);

    // Cancelling a stopped spinner is a silent no-op
    let stopped_output = buffer.contents();
    handle.cancel();
    handle.stop().await.unwrap();
    assert_eq!(buffer.contents(), stopped_output);

    let trace = OutputTrace::parse(&stopped_output);
    assert_eq!(trace.cycles().len(), 11);
    assert_eq!(trace.cleanups(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_cancel_at_spawn_is_safe() {
    let buffer = SharedBuffer::new();
    let mut handle = spinner::spawn(buffer.clone(), "thinking!", Duration::from_millis(100));
    handle.cancel();
    handle.stop().await.unwrap();

    assert!(handle.is_stopped());
    assert_eq!(buffer.contents(), "");
}
