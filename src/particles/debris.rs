//! Drifting debris: a fixed pool recycled as it passes the far end of the
//! tunnel.

use glam::{Quat, Vec3};
use rand::Rng;

use crate::options::DebrisOptions;
use crate::renderer::InstanceTransform;
use crate::util::rng::centered;

/// One debris particle. Identity is the pool slot; recycling only rewrites
/// the fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// World-space position; z runs along the tunnel axis.
    pub position: Vec3,
    /// Axial drift, world units per second.
    pub speed: f32,
    /// Size in `[0, 1)`; rendered scale is `size * size_scale`.
    pub size: f32,
}

/// Fixed-size pool of debris particles.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    lateral_extent: f32,
    near_z: f32,
    far_z: f32,
    rate: f32,
    speed_jitter: f32,
    size_scale: f32,
}

impl ParticleField {
    /// Scatter `options.count` particles through the tunnel volume.
    pub fn new<R: Rng + ?Sized>(
        options: &DebrisOptions,
        rng: &mut R,
    ) -> Self {
        let mut field = Self {
            particles: Vec::with_capacity(options.count),
            lateral_extent: options.lateral_extent,
            near_z: options.near_z,
            far_z: options.far_z,
            rate: options.rate,
            speed_jitter: options.speed_jitter,
            size_scale: options.size_scale,
        };
        for _ in 0..options.count {
            let z = if field.far_z < field.near_z {
                rng.random_range(field.far_z..=field.near_z)
            } else {
                field.near_z
            };
            let particle = field.spawn(rng, z);
            field.particles.push(particle);
        }
        log::debug!(
            "debris field: {} particles, z in [{}, {}]",
            field.particles.len(),
            field.far_z,
            field.near_z
        );
        field
    }

    fn spawn<R: Rng + ?Sized>(&self, rng: &mut R, z: f32) -> Particle {
        let jitter = if self.speed_jitter > 0.0 {
            rng.random_range(-self.speed_jitter..=self.speed_jitter)
        } else {
            0.0
        };
        Particle {
            position: Vec3::new(
                centered(rng, self.lateral_extent),
                centered(rng, self.lateral_extent),
                z,
            ),
            speed: self.rate * (1.0 + jitter),
            size: rng.random::<f32>(),
        }
    }

    /// Drift every particle down the tunnel by `speed * delta`, recycling
    /// any that passed `far_z` back to `near_z` with fresh lateral
    /// coordinates and size.
    ///
    /// A non-positive or non-finite delta (paused clock) moves nothing.
    pub fn advance<R: Rng + ?Sized>(&mut self, delta: f32, rng: &mut R) {
        if !(delta.is_finite() && delta > 0.0) {
            return;
        }
        for slot in 0..self.particles.len() {
            let p = &mut self.particles[slot];
            p.position.z -= p.speed * delta;
            if p.position.z < self.far_z {
                let fresh = self.spawn(rng, self.near_z);
                self.particles[slot] = fresh;
            }
        }
    }

    /// Append one transform per particle.
    pub fn write_instances(&self, out: &mut Vec<InstanceTransform>) {
        out.extend(self.particles.iter().map(|p| {
            InstanceTransform::new(
                p.position,
                Quat::IDENTITY,
                p.size * self.size_scale,
            )
        }));
    }

    /// All particles, indexed by slot.
    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Pool size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether the pool is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Axial bounds `(far_z, near_z)` every particle stays within.
    #[must_use]
    pub fn bounds(&self) -> (f32, f32) {
        (self.far_z, self.near_z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::rng::scene_rng;

    fn field(seed: u64) -> (ParticleField, crate::util::rng::SceneRng) {
        let mut rng = scene_rng(Some(seed));
        let field = ParticleField::new(&DebrisOptions::default(), &mut rng);
        (field, rng)
    }

    #[test]
    fn spawns_inside_volume() {
        let (field, _) = field(3);
        assert_eq!(field.len(), 400);
        for p in field.particles() {
            assert!((-45.0..=5.0).contains(&p.position.z));
            assert!((-5.0..5.0).contains(&p.position.x));
            assert!((-5.0..5.0).contains(&p.position.y));
            assert!((0.0..1.0).contains(&p.size));
            assert_eq!(p.speed, 10.0);
        }
    }

    #[test]
    fn stays_in_bounds_after_every_update() {
        let (mut field, mut rng) = field(11);
        for _ in 0..2000 {
            field.advance(0.05, &mut rng);
            for p in field.particles() {
                assert!(p.position.z >= -45.0 && p.position.z <= 5.0);
            }
        }
    }

    #[test]
    fn recycles_to_near_end() {
        let mut rng = scene_rng(Some(5));
        let opts = DebrisOptions {
            count: 1,
            ..DebrisOptions::default()
        };
        let mut field = ParticleField::new(&opts, &mut rng);
        let start = field.particles()[0].position.z;
        // Enough travel to cross the far end exactly once.
        let delta = (start + 45.0) / 10.0 + 0.01;
        field.advance(delta, &mut rng);
        assert_eq!(field.particles()[0].position.z, 5.0);
    }

    #[test]
    fn paused_clock_moves_nothing() {
        let (mut field, mut rng) = field(9);
        let before = field.particles().to_vec();
        field.advance(0.0, &mut rng);
        field.advance(-1.0, &mut rng);
        field.advance(f32::NAN, &mut rng);
        assert_eq!(field.particles(), &before[..]);
    }

    #[test]
    fn same_seed_same_field() {
        let (a, _) = field(21);
        let (b, _) = field(21);
        assert_eq!(a.particles(), b.particles());
    }

    #[test]
    fn jitter_varies_speed_within_range() {
        let mut rng = scene_rng(Some(2));
        let opts = DebrisOptions {
            speed_jitter: 0.5,
            ..DebrisOptions::default()
        };
        let field = ParticleField::new(&opts, &mut rng);
        assert!(field
            .particles()
            .iter()
            .all(|p| (5.0..=15.0).contains(&p.speed)));
        assert!(field.particles().iter().any(|p| p.speed != 10.0));
    }

    #[test]
    fn instances_scale_by_size() {
        let (field, _) = field(4);
        let mut out = Vec::new();
        field.write_instances(&mut out);
        assert_eq!(out.len(), field.len());
        for (inst, p) in out.iter().zip(field.particles()) {
            assert!((inst.translation() - p.position).length() < 1e-5);
            assert!((inst.scale() - p.size * 0.05).abs() < 1e-6);
        }
    }
}
