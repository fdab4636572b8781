use glam::{Mat4, Quat, Vec3};

/// Per-instance transform for pooled objects.
/// Column-major model matrix, uploaded as-is to an instance buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceTransform {
    /// Model matrix columns.
    pub model: [[f32; 4]; 4],
}

impl InstanceTransform {
    /// Translation, rotation, and uniform scale.
    #[inline]
    #[must_use]
    pub fn new(translation: Vec3, rotation: Quat, scale: f32) -> Self {
        Self {
            model: Mat4::from_scale_rotation_translation(
                Vec3::splat(scale),
                rotation,
                translation,
            )
            .to_cols_array_2d(),
        }
    }

    /// Translation component.
    #[must_use]
    pub fn translation(&self) -> Vec3 {
        let [x, y, z, _] = self.model[3];
        Vec3::new(x, y, z)
    }

    /// Length of the first basis column (the uniform scale).
    #[must_use]
    pub fn scale(&self) -> f32 {
        let [x, y, z, _] = self.model[0];
        Vec3::new(x, y, z).length()
    }

    /// Flatten a slice of instances into raw floats (16 per instance).
    #[must_use]
    pub fn as_floats(instances: &[Self]) -> &[f32] {
        bytemuck::cast_slice(instances)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_back_translation_and_scale() {
        let t = InstanceTransform::new(
            Vec3::new(1.0, -2.0, 3.0),
            Quat::from_rotation_y(0.7),
            0.25,
        );
        assert!((t.translation() - Vec3::new(1.0, -2.0, 3.0)).length() < 1e-6);
        assert!((t.scale() - 0.25).abs() < 1e-6);
    }

    #[test]
    fn flattens_to_sixteen_floats_each() {
        let instances = vec![
            InstanceTransform::new(Vec3::X, Quat::IDENTITY, 1.0);
            3
        ];
        let floats = InstanceTransform::as_floats(&instances);
        assert_eq!(floats.len(), 48);
        assert_eq!(floats[12], 1.0);
    }
}
