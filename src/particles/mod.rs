//! Instanced object pools: drifting debris and the shatter burst.
//!
//! Both pools are fixed-size arenas indexed by slot. Randomness is injected
//! through a caller-owned [`rand::Rng`], so a seeded source reproduces a run
//! exactly.

pub mod debris;
pub mod fragments;

pub use debris::{Particle, ParticleField};
pub use fragments::{Fragment, FragmentBurst};
