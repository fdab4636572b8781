//! One-shot fragment explosion played during the shatter transition.

use glam::{EulerRot, Quat, Vec2, Vec3};
use rand::Rng;

use crate::options::FragmentOptions;
use crate::renderer::InstanceTransform;

/// One shard of the burst.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fragment {
    /// World-space position.
    pub position: Vec3,
    /// Euler angles (XYZ order), radians.
    pub rotation: Vec3,
    /// Displacement per frame.
    pub velocity: Vec3,
    /// Rotation per frame around x and y.
    pub spin: Vec2,
}

impl Fragment {
    /// Render scale: 1 at the world origin, falling linearly to 0 at
    /// `fade_radius` and beyond.
    #[inline]
    #[must_use]
    pub fn fade_scale(&self, fade_radius: f32) -> f32 {
        (1.0 - self.position.length() / fade_radius).max(0.0)
    }
}

/// Fixed pool of fragments flying out from a shared origin.
///
/// Integration is per frame (no delta scaling, no damping). The burst never
/// recycles; the mode controller drops the whole pool when the shatter
/// ends.
#[derive(Debug, Clone)]
pub struct FragmentBurst {
    fragments: Vec<Fragment>,
    origin: Vec3,
    fade_radius: f32,
    age: f32,
    frames: u64,
}

impl FragmentBurst {
    /// Spawn `options.count` fragments at the origin with random outward
    /// velocities.
    pub fn new<R: Rng + ?Sized>(
        options: &FragmentOptions,
        rng: &mut R,
    ) -> Self {
        let origin = Vec3::from_array(options.origin);
        let fragments = (0..options.count)
            .map(|_| {
                let speed = options.min_speed
                    + rng.random::<f32>() * options.speed_range;
                let direction = Vec3::new(
                    rng.random::<f32>() - 0.5,
                    rng.random::<f32>() - 0.5,
                    rng.random::<f32>() - 0.5,
                )
                .try_normalize()
                .unwrap_or(Vec3::Y);
                Fragment {
                    position: origin,
                    rotation: Vec3::new(
                        rng.random::<f32>(),
                        rng.random::<f32>(),
                        rng.random::<f32>(),
                    ),
                    velocity: direction * speed,
                    spin: Vec2::new(
                        rng.random::<f32>() * options.max_spin,
                        rng.random::<f32>() * options.max_spin,
                    ),
                }
            })
            .collect::<Vec<_>>();
        log::debug!(
            "fragment burst: {} fragments at {origin}",
            fragments.len()
        );
        Self {
            fragments,
            origin,
            fade_radius: options.fade_radius,
            age: 0.0,
            frames: 0,
        }
    }

    /// One frame: move every fragment by its velocity and spin it.
    ///
    /// `delta` only advances the burst's age.
    pub fn advance(&mut self, delta: f32) {
        for f in &mut self.fragments {
            f.position += f.velocity;
            f.rotation.x += f.spin.x;
            f.rotation.y += f.spin.y;
        }
        if delta.is_finite() && delta > 0.0 {
            self.age += delta;
        }
        self.frames += 1;
    }

    /// Append one transform per fragment, scaled by its fade.
    pub fn write_instances(&self, out: &mut Vec<InstanceTransform>) {
        out.extend(self.fragments.iter().map(|f| {
            InstanceTransform::new(
                f.position,
                Quat::from_euler(
                    EulerRot::XYZ,
                    f.rotation.x,
                    f.rotation.y,
                    f.rotation.z,
                ),
                f.fade_scale(self.fade_radius),
            )
        }));
    }

    /// Whether the burst has lived at least `lifetime` seconds.
    #[must_use]
    pub fn is_expired(&self, lifetime: f32) -> bool {
        self.age >= lifetime
    }

    /// Mean distance of the fragments from the burst origin.
    #[must_use]
    pub fn mean_distance_from_origin(&self) -> f32 {
        if self.fragments.is_empty() {
            return 0.0;
        }
        let total: f32 = self
            .fragments
            .iter()
            .map(|f| f.position.distance(self.origin))
            .sum();
        total / self.fragments.len() as f32
    }

    /// All fragments, indexed by slot.
    #[must_use]
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Seconds since the burst started.
    #[must_use]
    pub fn age(&self) -> f32 {
        self.age
    }

    /// Frames integrated so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Distance at which fragments reach zero scale.
    #[must_use]
    pub fn fade_radius(&self) -> f32 {
        self.fade_radius
    }
}
