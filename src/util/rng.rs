//! Seedable random source shared by the particle pools.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random source every pool draws from.
pub type SceneRng = StdRng;

/// Seed from `seed` when given, OS entropy otherwise.
#[must_use]
pub fn scene_rng(seed: Option<u64>) -> SceneRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Uniform draw in `[-extent / 2, extent / 2)`, or exactly 0 when the
/// extent is empty.
#[inline]
pub fn centered<R: Rng + ?Sized>(rng: &mut R, extent: f32) -> f32 {
    (rng.random::<f32>() - 0.5) * extent
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = scene_rng(Some(42));
        let mut b = scene_rng(Some(42));
        for _ in 0..16 {
            assert_eq!(a.random::<u32>(), b.random::<u32>());
        }
    }

    #[test]
    fn centered_stays_in_range() {
        let mut rng = scene_rng(Some(1));
        for _ in 0..1000 {
            let v = centered(&mut rng, 10.0);
            assert!((-5.0..5.0).contains(&v));
        }
        assert_eq!(centered(&mut rng, 0.0), 0.0);
    }
}
