//! The experience: every animated component, gated by mode and driven once
//! per display refresh.
//!
//! [`Experience`] owns the tunnel, both particle pools, the camera rig, the
//! mode controller and the overlays. Hosts feed it [`InputEvent`]s and
//! [`ExperienceCommand`]s between frames and call
//! [`Experience::frame`] with a [`SceneRenderer`] on every refresh.
//!
//! | Mode    | Updated each frame               | Instance pools written |
//! |---------|----------------------------------|------------------------|
//! | NOISE   | tunnel, debris, camera           | debris                 |
//! | SHATTER | fragments, camera                | fragments              |
//! | SILENCE | terminal view                    | none                   |

/// Discrete commands.
pub mod command;
/// Input events.
pub mod input;

use glam::Vec2;
use web_time::Duration;

pub use self::command::ExperienceCommand;
pub use self::input::InputEvent;
use crate::camera::input::clamp_ndc;
use crate::camera::{CameraRig, TiltInput};
use crate::error::ShatterError;
use crate::mode::{
    Affirmations, InsightProvider, Mode, ModeChange, ModeController,
    OverlayState, Overlays, Prompt, PromptStep, SilenceOverlay,
};
use crate::options::Options;
use crate::particles::{FragmentBurst, ParticleField};
use crate::renderer::{InstancePool, InstanceTransform, SceneRenderer};
use crate::tunnel::{ApproxTextMetrics, TextMetrics, TunnelScroller, WallSide};
use crate::util::frame_timing::FrameTick;
use crate::util::rng::{scene_rng, SceneRng};

/// The whole interactive scene.
pub struct Experience {
    options: Options,
    rng: SceneRng,

    tunnel: TunnelScroller,
    debris: ParticleField,
    fragments: Option<FragmentBurst>,
    camera: CameraRig,

    controller: ModeController,
    prompt: Prompt,
    overlays: Overlays,
    overlay: OverlayState,
    silence: Option<SilenceOverlay>,
    provider: Box<dyn InsightProvider>,

    pointer: Vec2,
    tilt: Option<TiltInput>,

    /// Frame-clock time of the last accepted frame.
    now: Duration,
    layouts_sent: bool,
    torn_down: bool,
    scratch: Vec<InstanceTransform>,
}

impl Experience {
    /// Build the scene, measuring wall text with [`ApproxTextMetrics`].
    pub fn new(options: Options) -> Result<Self, ShatterError> {
        let metrics = ApproxTextMetrics::new(
            options.tunnel.font_size,
            options.tunnel.glyph_advance,
        );
        Self::with_metrics(options, &metrics)
    }

    /// Build the scene with a custom text measurement backend.
    pub fn with_metrics<M: TextMetrics + ?Sized>(
        options: Options,
        metrics: &M,
    ) -> Result<Self, ShatterError> {
        options.validate()?;

        let mut rng = scene_rng(options.seed);
        let tunnel = TunnelScroller::new(&options.tunnel, metrics);
        let debris = ParticleField::new(&options.debris, &mut rng);
        let camera = CameraRig::new(&options.camera, 1.0);
        let controller =
            ModeController::new(options.transition.shatter_duration());
        let overlays = Overlays::new(&options.transition);
        let provider =
            Box::new(Affirmations::new(options.transition.insight_latency()));

        log::info!(
            "experience ready: {} debris, walls of {} tiles",
            debris.len(),
            WallSide::ALL
                .iter()
                .map(|&s| tunnel.layout(s).tiles().count())
                .sum::<usize>()
        );

        Ok(Self {
            options,
            rng,
            tunnel,
            debris,
            fragments: None,
            camera,
            controller,
            prompt: Prompt::new(),
            overlays,
            overlay: OverlayState::default(),
            silence: None,
            provider,
            pointer: Vec2::ZERO,
            tilt: None,
            now: Duration::ZERO,
            layouts_sent: false,
            torn_down: false,
            scratch: Vec::new(),
        })
    }

    /// Replace the terminal view's text provider.
    #[must_use]
    pub fn with_provider(
        mut self,
        provider: impl InsightProvider + 'static,
    ) -> Self {
        self.provider = Box::new(provider);
        self
    }

    // ── Accessors ──────────────────────────────────────────────────────

    /// Current mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.controller.mode()
    }

    /// Current prompt step.
    #[must_use]
    pub fn prompt_step(&self) -> PromptStep {
        self.prompt.step()
    }

    /// Options the scene was built with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Frame-clock time of the last accepted frame.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Tunnel walls.
    #[must_use]
    pub fn tunnel(&self) -> &TunnelScroller {
        &self.tunnel
    }

    /// Debris pool.
    #[must_use]
    pub fn debris(&self) -> &ParticleField {
        &self.debris
    }

    /// Fragment pool; only present in SHATTER.
    #[must_use]
    pub fn fragments(&self) -> Option<&FragmentBurst> {
        self.fragments.as_ref()
    }

    /// Camera rig.
    #[must_use]
    pub fn camera(&self) -> &CameraRig {
        &self.camera
    }

    /// Terminal view; only present in SILENCE.
    #[must_use]
    pub fn silence(&self) -> Option<&SilenceOverlay> {
        self.silence.as_ref()
    }

    /// Overlay state pushed with the last accepted frame.
    #[must_use]
    pub fn overlay(&self) -> &OverlayState {
        &self.overlay
    }

    /// Whether [`teardown`](Self::teardown) has run.
    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    // ── Commands and input ─────────────────────────────────────────────

    /// Run one command at the time of the last accepted frame. Returns the
    /// mode change it caused, if any.
    ///
    /// The change is stamped with that frame's time, so a delay it arms can
    /// start up to one frame before the real event. Hosts that know the
    /// event time use [`execute_at`](Self::execute_at).
    pub fn execute(&mut self, command: ExperienceCommand) -> Option<ModeChange> {
        self.execute_at(command, self.now)
    }

    /// Run one command at `now` on the frame clock. Times before the last
    /// accepted frame read as that frame.
    pub fn execute_at(
        &mut self,
        command: ExperienceCommand,
        now: Duration,
    ) -> Option<ModeChange> {
        if self.torn_down {
            return None;
        }
        let now = now.max(self.now);
        let change = match command {
            ExperienceCommand::AdvancePrompt => {
                if self.mode() != Mode::Noise || !self.prompt.advance() {
                    return None;
                }
                self.controller.confirm_shatter(now)
            }
            ExperienceCommand::ConfirmShatter => {
                self.controller.confirm_shatter(now)
            }
            ExperienceCommand::ResetToNoise => {
                self.controller.reset_to_noise(now)
            }
        };
        if let Some(change) = change {
            self.enter(change);
        }
        change
    }

    /// Record an input event; it takes effect on the next frame.
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerMoved { x, y } => {
                self.pointer = clamp_ndc(Vec2::new(x, y));
            }
            InputEvent::DeviceOrientation { gamma, beta } => {
                self.tilt = Some(TiltInput { gamma, beta });
            }
            InputEvent::OrientationUnavailable => self.tilt = None,
            InputEvent::Resized { width, height } => {
                self.camera.resize(width, height);
            }
        }
    }

    // ── Frame loop ─────────────────────────────────────────────────────

    /// Advance every active component to `tick` and push the result into
    /// `renderer`.
    ///
    /// Returns false, changing nothing, when the renderer is not ready or
    /// the experience has been torn down.
    pub fn frame<R: SceneRenderer + ?Sized>(
        &mut self,
        tick: FrameTick,
        renderer: &mut R,
    ) -> bool {
        if self.torn_down {
            return false;
        }
        if !renderer.is_ready() {
            log::trace!("renderer not ready; frame at {:.3}s skipped", tick.elapsed);
            return false;
        }

        self.now = tick.now();
        if let Some(change) = self.controller.poll(self.now) {
            self.enter(change);
        }

        let mode = self.mode();
        renderer.begin_frame(mode);
        if !self.layouts_sent {
            for side in WallSide::ALL {
                renderer.set_wall_layout(side, self.tunnel.layout(side));
            }
            self.layouts_sent = true;
        }

        match mode {
            Mode::Noise => self.frame_noise(tick, renderer),
            Mode::Shatter => self.frame_shatter(tick, renderer),
            Mode::Silence => self.frame_silence(renderer),
        }

        self.overlay = self.overlays.state(
            mode,
            self.controller.previous(),
            self.controller.time_in_mode(self.now),
            self.silence.as_ref(),
        );
        renderer.set_overlay(&self.overlay);
        true
    }

    /// Cancel pending timers and drop both pools' transient state. Later
    /// frames and commands are ignored.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.controller.teardown();
        if let Some(silence) = self.silence.as_mut() {
            silence.close();
        }
        self.silence = None;
        self.fragments = None;
        self.torn_down = true;
        log::info!("experience torn down at {:.3}s", self.now.as_secs_f32());
    }

    fn frame_noise<R: SceneRenderer + ?Sized>(
        &mut self,
        tick: FrameTick,
        renderer: &mut R,
    ) {
        self.tunnel.advance(tick.elapsed);
        self.debris.advance(tick.delta, &mut self.rng);
        self.camera.update(self.pointer, self.tilt);

        renderer.set_camera(&self.camera.uniform);
        for side in WallSide::ALL {
            renderer.set_wall_pose(side, self.tunnel.wall_pose(side));
        }
        self.scratch.clear();
        self.debris.write_instances(&mut self.scratch);
        renderer.write_instances(InstancePool::Debris, &self.scratch);
        renderer.write_instances(InstancePool::Fragments, &[]);
    }

    fn frame_shatter<R: SceneRenderer + ?Sized>(
        &mut self,
        tick: FrameTick,
        renderer: &mut R,
    ) {
        self.camera.update(self.pointer, self.tilt);
        renderer.set_camera(&self.camera.uniform);

        self.scratch.clear();
        if let Some(burst) = self.fragments.as_mut() {
            burst.advance(tick.delta);
            burst.write_instances(&mut self.scratch);
        }
        renderer.write_instances(InstancePool::Debris, &[]);
        renderer.write_instances(InstancePool::Fragments, &self.scratch);
    }

    fn frame_silence<R: SceneRenderer + ?Sized>(&mut self, renderer: &mut R) {
        if let Some(silence) = self.silence.as_mut() {
            let _ = silence.poll(self.now, self.provider.as_mut(), &mut self.rng);
        }
        for pool in InstancePool::ALL {
            renderer.write_instances(pool, &[]);
        }
    }

    /// Mode entry effects.
    fn enter(&mut self, change: ModeChange) {
        match change.to {
            Mode::Shatter => {
                self.fragments = Some(FragmentBurst::new(
                    &self.options.fragments,
                    &mut self.rng,
                ));
            }
            Mode::Silence => {
                if let Some(burst) = self.fragments.take() {
                    log::debug!(
                        "fragment burst dropped after {} frames",
                        burst.frames()
                    );
                }
                self.silence =
                    Some(SilenceOverlay::open(change.at, self.provider.as_ref()));
            }
            Mode::Noise => {
                if let Some(silence) = self.silence.as_mut() {
                    silence.close();
                }
                self.silence = None;
                self.debris =
                    ParticleField::new(&self.options.debris, &mut self.rng);
                self.prompt.reset();
            }
        }
    }
}
