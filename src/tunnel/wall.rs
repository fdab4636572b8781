use std::f32::consts::FRAC_PI_2;

use glam::{Affine3A, Quat, Vec3};

/// The four tunnel walls, in the order they are rotated around the axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WallSide {
    /// Below the viewer.
    Floor,
    /// To the viewer's right.
    Right,
    /// Above the viewer.
    Ceiling,
    /// To the viewer's left.
    Left,
}

impl WallSide {
    /// All walls, indexed as in [`wall_transform`].
    pub const ALL: [WallSide; 4] =
        [Self::Floor, Self::Right, Self::Ceiling, Self::Left];

    /// Wall for an index; indices wrap every four.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 4]
    }

    /// Position in [`ALL`](Self::ALL).
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Floor => 0,
            Self::Right => 1,
            Self::Ceiling => 2,
            Self::Left => 3,
        }
    }
}

/// Rigid transform from wall-local space to tunnel space.
///
/// The floor lies at `y = -radius` facing up, its local +y running down the
/// tunnel (-z). Wall `k` is the floor rotated by `k * 90°` around the tunnel
/// axis. Indices wrap every four.
#[must_use]
pub fn wall_transform(index: usize, radius: f32) -> Affine3A {
    let around_axis = Quat::from_rotation_z((index % 4) as f32 * FRAC_PI_2);
    let floor = Affine3A::from_translation(Vec3::new(0.0, -radius, 0.0))
        * Affine3A::from_rotation_x(-FRAC_PI_2);
    Affine3A::from_quat(around_axis) * floor
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn floor_sits_below_and_scrolls_into_depth() {
        let t = wall_transform(0, 4.0);
        assert!(close(t.transform_point3(Vec3::ZERO), Vec3::new(0.0, -4.0, 0.0)));
        assert!(close(t.transform_vector3(Vec3::Y), Vec3::NEG_Z));
        assert!(close(t.transform_vector3(Vec3::Z), Vec3::Y));
        assert!(close(t.transform_vector3(Vec3::X), Vec3::X));
    }

    #[test]
    fn walls_are_quarter_turns_of_the_floor() {
        let centres = [
            Vec3::new(0.0, -4.0, 0.0),
            Vec3::new(4.0, 0.0, 0.0),
            Vec3::new(0.0, 4.0, 0.0),
            Vec3::new(-4.0, 0.0, 0.0),
        ];
        for (i, c) in centres.iter().enumerate() {
            let t = wall_transform(i, 4.0);
            assert!(close(t.transform_point3(Vec3::ZERO), *c), "wall {i}");
            // Every wall faces the axis and scrolls the same way.
            assert!(close(t.transform_vector3(Vec3::Z), -c.normalize()));
            assert!(close(t.transform_vector3(Vec3::Y), Vec3::NEG_Z));
        }
    }

    #[test]
    fn indices_wrap() {
        assert_eq!(wall_transform(5, 2.0), wall_transform(1, 2.0));
        assert_eq!(WallSide::from_index(6), WallSide::Ceiling);
        for side in WallSide::ALL {
            assert_eq!(WallSide::from_index(side.index()), side);
        }
    }
}
