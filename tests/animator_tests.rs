// Host-side tests for the per-frame updater and the cancellable frame loop.
// The web crate is wasm-only, so these exercise drift-core directly.

use drift_core::*;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
struct RecordingSink {
    poses: Vec<FramePose>,
}

impl RenderSink for RecordingSink {
    fn render(&mut self, pose: &FramePose) {
        self.poses.push(*pose);
    }
}

/// Delivers a fixed number of frames, then reports the host as stopped.
struct FixedFrames(u64);

impl FrameScheduler for FixedFrames {
    fn wait_frame(&mut self) -> bool {
        if self.0 == 0 {
            return false;
        }
        self.0 -= 1;
        true
    }
}

fn centred_input() -> InputState {
    InputState::default()
}

#[test]
fn time_is_exactly_frames_times_step() {
    let mut animator = Animator::default();
    let input = centred_input();
    assert_eq!(animator.time(), 0.0);
    for n in 1..=5000u64 {
        let pose = animator.step(&input);
        assert_eq!(pose.frame, n);
        assert_eq!(pose.time, n as f64 * TIME_STEP);
    }
    assert_eq!(animator.time(), 5000.0 * TIME_STEP);
}

#[test]
fn field_spins_at_fixed_rates() {
    let mut animator = Animator::default();
    let input = centred_input();
    let mut pose = animator.pose();
    for _ in 0..1000 {
        pose = animator.step(&input);
    }
    let t = 1000.0 * TIME_STEP;
    assert!((pose.field_rotation.x as f64 - t * FIELD_SPIN_X).abs() < 1e-6);
    assert!((pose.field_rotation.y as f64 - t * FIELD_SPIN_Y).abs() < 1e-6);
    assert_eq!(pose.field_rotation.z, 0.0);
}

#[test]
fn camera_depth_breathes_within_bounds() {
    let mut animator = Animator::default();
    let input = centred_input();
    let lo = CAMERA_BASE_Z as f64 - BREATH_AMPLITUDE;
    let hi = CAMERA_BASE_Z as f64 + BREATH_AMPLITUDE;
    let mut seen_above = false;
    let mut seen_below = false;
    // a couple of full breaths
    for _ in 0..5000 {
        let z = animator.step(&input).camera_position.z as f64;
        assert!(z >= lo - 1e-4 && z <= hi + 1e-4, "depth {z} out of range");
        seen_above |= z > CAMERA_BASE_Z as f64 + 0.5;
        seen_below |= z < CAMERA_BASE_Z as f64 - 0.5;
    }
    assert!(seen_above && seen_below);
}

#[test]
fn breathing_depth_matches_formula() {
    for i in 0..200 {
        let t = i as f64 * 0.37;
        let expected = 30.0 + (t * 2.0).sin() * 0.6;
        assert!((breathing_depth(t) as f64 - expected).abs() < 1e-4);
    }
}

#[test]
fn pointer_follow_eases_toward_target() {
    let mut animator = Animator::new(CameraFollow::from_mode(FollowMode::Pointer));
    let mut input = InputState::default();
    // bottom-right corner: target x = 1.4, y = -1.2
    input.on_pointer_move(100.0, 100.0, 100.0, 100.0);

    let first = animator.step(&input).camera_position;
    assert!((first.x - 1.4 * 0.05).abs() < 1e-6);
    assert!((first.y + 1.2 * 0.05).abs() < 1e-6);

    let mut prev_gap = (1.4 - first.x).abs();
    for _ in 0..300 {
        let pos = animator.step(&input).camera_position;
        let gap = (1.4 - pos.x).abs();
        assert!(gap <= prev_gap, "follow overshot or diverged");
        prev_gap = gap;
    }
    let pos = animator.pose().camera_position;
    assert!((pos.x - 1.4).abs() < 1e-3);
    assert!((pos.y + 1.2).abs() < 1e-3);
}

#[test]
fn pointer_follow_step_is_first_order_filter() {
    let follow = CameraFollow::from_mode(FollowMode::Pointer);
    let pointer = PointerState { x: -1.0, y: 0.5 };
    let current = Vec2::new(0.4, 0.2);
    let next = follow.lateral(current, 12.0, pointer);
    let target = Vec2::new(-1.4, -0.6);
    let expected = current + (target - current) * FOLLOW_SMOOTHING;
    assert!((next - expected).length() < 1e-6);
}

#[test]
fn drift_ignores_pointer_and_depends_only_on_time() {
    let mut still = Animator::new(CameraFollow::from_mode(FollowMode::Drift));
    let mut moving = Animator::new(CameraFollow::from_mode(FollowMode::Drift));
    let quiet = InputState::default();
    let mut busy = InputState::default();
    for i in 0..500 {
        busy.on_pointer_move((i * 37 % 800) as f64, (i * 13 % 600) as f64, 800.0, 600.0);
        let a = still.step(&quiet);
        let b = moving.step(&busy);
        assert_eq!(a.camera_position, b.camera_position);

        let t = a.time;
        assert!((a.camera_position.x - (t * DRIFT_FREQUENCY_X).sin() as f32 * DRIFT_AMPLITUDE_X).abs() < 1e-5);
        assert!((a.camera_position.y - (t * DRIFT_FREQUENCY_Y).cos() as f32 * DRIFT_AMPLITUDE_Y).abs() < 1e-5);
    }
}

#[test]
fn follow_strategies_report_their_mode() {
    assert_eq!(CameraFollow::from_mode(FollowMode::Pointer).mode(), FollowMode::Pointer);
    assert_eq!(CameraFollow::from_mode(FollowMode::Drift).mode(), FollowMode::Drift);
    assert_eq!(CameraFollow::default().mode(), FollowMode::Pointer);
}

#[test]
fn frame_loop_renders_once_per_scheduled_frame() {
    let input = Rc::new(RefCell::new(InputState::default()));
    let mut frame_loop = FrameLoop::new(Animator::default(), input);
    let mut sink = RecordingSink::default();

    let frames = frame_loop.run(&mut FixedFrames(120), &mut sink);
    assert_eq!(frames, 120);
    assert_eq!(sink.poses.len(), 120);
    assert_eq!(sink.poses.last().unwrap().time, 120.0 * TIME_STEP);
    for (i, pose) in sink.poses.iter().enumerate() {
        assert_eq!(pose.frame, i as u64 + 1);
    }
}

#[test]
fn frame_loop_reads_latest_input_each_frame() {
    let input = Rc::new(RefCell::new(InputState::default()));
    let mut frame_loop = FrameLoop::new(Animator::default(), input.clone());
    let mut sink = RecordingSink::default();

    assert_eq!(frame_loop.tick(&mut sink), LoopControl::Continue);
    assert_eq!(sink.poses[0].camera_position.x, 0.0);

    input.borrow_mut().on_pointer_move(200.0, 50.0, 200.0, 100.0);
    frame_loop.tick(&mut sink);
    assert!(sink.poses[1].camera_position.x > 0.0);
}

#[test]
fn cancelled_loop_stops_before_next_frame() {
    struct CancelAfter {
        handle: CancelHandle,
        remaining: u32,
        rendered: u32,
    }
    impl RenderSink for CancelAfter {
        fn render(&mut self, _pose: &FramePose) {
            self.rendered += 1;
            self.remaining -= 1;
            if self.remaining == 0 {
                self.handle.cancel();
            }
        }
    }

    let input = Rc::new(RefCell::new(InputState::default()));
    let mut frame_loop = FrameLoop::new(Animator::default(), input);
    let mut sink = CancelAfter {
        handle: frame_loop.cancel_handle(),
        remaining: 10,
        rendered: 0,
    };
    let frames = frame_loop.run(&mut FixedFrames(1000), &mut sink);
    assert_eq!(sink.rendered, 10);
    assert_eq!(frames, 10);
    assert!(frame_loop.cancel_handle().is_cancelled());
    assert_eq!(frame_loop.tick(&mut sink), LoopControl::Stop);
    assert_eq!(frame_loop.animator().frame(), 10);
}
