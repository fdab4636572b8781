//! End-to-end runs of the experience through its public API, driven by a
//! fixed-step clock and recorded by [`FrameRecorder`].

use shatter::mode::{InsightState, Mode, PromptStep};
use shatter::options::{DebrisOptions, FragmentOptions, Options};
use shatter::particles::{FragmentBurst, ParticleField};
use shatter::renderer::{FrameRecorder, InstancePool};
use shatter::util::frame_timing::FixedStep;
use shatter::util::rng::scene_rng;
use shatter::{Experience, ExperienceCommand};

fn seeded(seed: u64) -> Options {
    Options {
        seed: Some(seed),
        ..Options::default()
    }
}

#[test]
fn debris_stays_in_the_tunnel_for_a_thousand_frames() {
    let options = DebrisOptions::default();
    let mut rng = scene_rng(Some(5));
    let mut field = ParticleField::new(&options, &mut rng);
    assert_eq!(field.len(), 400);

    for _ in 0..1000 {
        field.advance(0.016, &mut rng);
        for p in field.particles() {
            assert!(p.position.z >= options.far_z);
            assert!(p.position.z <= options.near_z);
        }
    }
    assert_eq!(field.len(), 400);
}

#[test]
fn fragments_spread_out_and_fade_before_the_shatter_ends() {
    let options = FragmentOptions::default();
    let mut rng = scene_rng(Some(9));
    let mut burst = FragmentBurst::new(&options, &mut rng);
    assert_eq!(burst.fragments().len(), 300);
    let start = burst.mean_distance_from_origin();

    let mut steps = FixedStep::new(1.0 / 60.0);
    while !burst.is_expired(2.5) {
        let tick = steps.next().expect("fixed steps never end");
        burst.advance(tick.delta);
    }
    assert!(burst.mean_distance_from_origin() > start);
    assert!(burst.frames() >= 149);

    let mut instances = Vec::new();
    burst.write_instances(&mut instances);
    assert_eq!(instances.len(), 300);
    // At least 0.2 units per frame for 150 frames carries every fragment
    // past the 20-unit fade radius.
    assert!(instances.iter().all(|i| i.scale() < 1e-6));
}

#[test]
fn full_cycle_through_every_mode() {
    let mut exp = Experience::new(seeded(1)).expect("valid options");
    let mut rec = FrameRecorder::new();
    let mut steps = FixedStep::new(1.0 / 60.0);
    let mut run = |exp: &mut Experience, rec: &mut FrameRecorder, n: usize| {
        for tick in steps.by_ref().take(n) {
            assert!(exp.frame(tick, rec));
        }
    };

    run(&mut exp, &mut rec, 120);
    assert_eq!(exp.mode(), Mode::Noise);
    assert_eq!(rec.instances(InstancePool::Debris).len(), 400);

    assert!(exp.execute(ExperienceCommand::AdvancePrompt).is_none());
    assert_eq!(exp.prompt_step(), PromptStep::Question);
    assert!(exp.execute(ExperienceCommand::AdvancePrompt).is_some());
    assert_eq!(exp.mode(), Mode::Shatter);

    run(&mut exp, &mut rec, 60);
    assert_eq!(exp.mode(), Mode::Shatter);
    assert_eq!(rec.instances(InstancePool::Fragments).len(), 300);

    // Shatter lasts 2.5 s; 100 more frames at 60 fps crosses it.
    run(&mut exp, &mut rec, 100);
    assert_eq!(exp.mode(), Mode::Silence);
    assert_eq!(rec.overlay.insight, Some(InsightState::Loading));

    run(&mut exp, &mut rec, 120);
    assert!(matches!(rec.overlay.insight, Some(InsightState::Ready(_))));
    assert_eq!(rec.overlay.silence_opacity, 1.0);
    assert_eq!(rec.overlay.canvas_opacity, 0.0);

    assert!(exp.execute(ExperienceCommand::ResetToNoise).is_some());
    run(&mut exp, &mut rec, 30);
    assert_eq!(exp.mode(), Mode::Noise);
    assert_eq!(exp.prompt_step(), PromptStep::Ask);
    assert!(rec.instances(InstancePool::Fragments).is_empty());
    assert_eq!(rec.instances(InstancePool::Debris).len(), 400);

    exp.teardown();
    assert!(!exp.frame(steps.next().expect("fixed steps never end"), &mut rec));
}

#[test]
fn same_seed_same_frames() {
    let record = |seed| {
        let mut exp = Experience::new(seeded(seed)).expect("valid options");
        let mut rec = FrameRecorder::new();
        for tick in FixedStep::new(0.02).take(50) {
            let _ = exp.frame(tick, &mut rec);
        }
        rec.instances(InstancePool::Debris).to_vec()
    };
    assert_eq!(record(3), record(3));
    assert_ne!(record(3), record(4));
}
