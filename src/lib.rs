// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Tests assert with unwrap/expect/panic freely.
#![cfg_attr(
    test,
    allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)
)]

//! Procedural scene-animation core for the noise tunnel experience.
//!
//! Shatter animates a tunnel of scrolling text, a drifting debris field, a
//! fragment explosion and a quiet terminal view, and hands the result to
//! whatever renderer the host provides. It never touches a graphics API.
//!
//! # Key entry points
//!
//! - [`scene::Experience`] - owns every component and runs one frame at a
//!   time
//! - [`renderer::SceneRenderer`] - the trait a host implements to draw
//! - [`options::Options`] - runtime configuration with TOML presets
//! - [`mode`] - the NOISE → SHATTER → SILENCE state machine
//!
//! # Frame loop
//!
//! The host calls [`scene::Experience::frame`] once per display refresh
//! with a [`util::frame_timing::FrameTick`]. Timers are polled against the
//! tick's elapsed time rather than scheduled on an executor, so the whole
//! crate is single-threaded and deterministic under a fixed seed.
//!
//! ```
//! use shatter::options::Options;
//! use shatter::renderer::FrameRecorder;
//! use shatter::scene::{Experience, ExperienceCommand};
//! use shatter::util::frame_timing::FixedStep;
//!
//! let options = Options { seed: Some(7), ..Options::default() };
//! let mut experience = Experience::new(options)?;
//! let mut recorder = FrameRecorder::new();
//! for tick in FixedStep::new(1.0 / 60.0).take(60) {
//!     experience.frame(tick, &mut recorder);
//! }
//! experience.execute(ExperienceCommand::ConfirmShatter);
//! # Ok::<(), shatter::error::ShatterError>(())
//! ```

pub mod camera;
pub mod error;
pub mod mode;
pub mod options;
pub mod particles;
pub mod renderer;
pub mod scene;
pub mod tunnel;
pub mod util;
#[cfg(feature = "web")]
pub mod web;

pub use error::ShatterError;
pub use options::Options;
pub use scene::{Experience, ExperienceCommand, InputEvent};
