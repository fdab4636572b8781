//! Headless driver: plays the scripted sequence at a fixed frame rate and
//! logs what each phase produced.
//!
//! ```text
//! shatter [OPTIONS.toml]      run the sequence
//! shatter --schema            print the options JSON schema
//! ```
//!
//! Set `RUST_LOG=debug` for pool construction and transition details.

use std::io::Write;
use std::path::Path;

use shatter::mode::{InsightState, Mode};
use shatter::renderer::{FrameRecorder, InstancePool};
use shatter::util::frame_timing::FixedStep;
use shatter::{Experience, ExperienceCommand, Options, ShatterError};

const FRAME_RATE: f32 = 60.0;
/// Upper bound on any single phase, so a broken option set cannot hang.
const PHASE_LIMIT_SECS: f32 = 30.0;

struct Driver {
    experience: Experience,
    recorder: FrameRecorder,
    steps: FixedStep,
}

impl Driver {
    fn new(options: Options) -> Result<Self, ShatterError> {
        Ok(Self {
            experience: Experience::new(options)?,
            recorder: FrameRecorder::new(),
            steps: FixedStep::new(1.0 / FRAME_RATE),
        })
    }

    /// Run frames until `done` holds or the phase limit passes. Returns
    /// the number of frames run.
    fn run_until(&mut self, mut done: impl FnMut(&Experience) -> bool) -> u64 {
        let limit = (PHASE_LIMIT_SECS * FRAME_RATE) as u64;
        let mut frames = 0;
        while frames < limit && !done(&self.experience) {
            if let Some(tick) = self.steps.next() {
                let _ = self.experience.frame(tick, &mut self.recorder);
            }
            frames += 1;
        }
        frames
    }

    fn run_for(&mut self, secs: f32) -> u64 {
        let mut left = (secs * FRAME_RATE) as u64;
        self.run_until(|_| {
            let done = left == 0;
            left = left.saturating_sub(1);
            done
        })
    }

    fn log_noise(&self) {
        let debris = self.recorder.instances(InstancePool::Debris);
        let (far, near) = self.experience.debris().bounds();
        let tiles: usize =
            self.recorder.wall_tiles.iter().flatten().copied().sum();
        log::info!(
            "noise: {} debris instances in z [{far:.1}, {near:.1}], {tiles} wall tiles, twist {:.3} rad",
            debris.len(),
            self.experience.tunnel().twist(),
        );
    }
}

fn run(options: Options) -> Result<(), ShatterError> {
    let mut driver = Driver::new(options)?;

    let frames = driver.run_for(3.0);
    log::info!("ran {frames} frames of noise");
    driver.log_noise();

    for _ in 0..2 {
        let _ = driver.experience.execute(ExperienceCommand::AdvancePrompt);
    }

    let mut peak_distance = 0.0_f32;
    let frames = driver.run_until(|e| {
        if let Some(burst) = e.fragments() {
            peak_distance = peak_distance.max(burst.mean_distance_from_origin());
        }
        e.mode() != Mode::Shatter
    });
    log::info!(
        "shatter: {frames} frames, fragments reached mean distance {peak_distance:.2}"
    );

    let frames = driver.run_until(|e| {
        matches!(e.overlay().insight, Some(InsightState::Ready(_)))
    });
    if let Some(InsightState::Ready(text)) = &driver.experience.overlay().insight
    {
        log::info!("silence: insight after {frames} frames: {text}");
    }

    let _ = driver.experience.execute(ExperienceCommand::ResetToNoise);
    let frames = driver.run_for(1.0);
    log::info!("back to noise for {frames} frames");
    driver.log_noise();

    driver.experience.teardown();
    log::info!("done: {} frames accepted", driver.recorder.frames);
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let arg = std::env::args().nth(1);
    if arg.as_deref() == Some("--schema") {
        let schema = Options::json_schema();
        let written = serde_json::to_string_pretty(&schema)
            .map_err(|e| e.to_string())
            .and_then(|json| {
                writeln!(std::io::stdout().lock(), "{json}")
                    .map_err(|e| e.to_string())
            });
        if let Err(e) = written {
            log::error!("failed to write schema: {e}");
            std::process::exit(1);
        }
        return;
    }

    let options = match arg {
        Some(path) => match Options::load(Path::new(&path)) {
            Ok(options) => options,
            Err(e) => {
                log::error!("{path}: {e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    if let Err(e) = run(options) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
