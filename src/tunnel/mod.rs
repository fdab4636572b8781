//! Tunnel of scrolling text: four walls, each a tiled stack of phrases that
//! slides along the tunnel axis and wraps seamlessly.
//!
//! Layout happens once per wall ([`WallLayout::compute`]); animation is a
//! single scroll offset per wall taken modulo the block height, applied as a
//! rigid translation. Individual phrase placements never change after
//! layout.

/// Wall layout: phrase order, scale fitting, stacking, tiling.
pub mod layout;
/// Text measurement backend.
pub mod metrics;
/// Wall placement around the tunnel axis.
pub mod wall;

use glam::{Affine3A, Quat, Vec3};
pub use layout::{
    fit_scale, scroll_offset, LayoutParams, TilePlacement, WallLayout,
    WallTextBlock,
};
pub use metrics::{ApproxTextMetrics, TextBounds, TextMetrics};
pub use wall::{wall_transform, WallSide};

use crate::options::TunnelOptions;

/// Four laid-out walls plus their shared scroll and twist state.
#[derive(Debug, Clone)]
pub struct TunnelScroller {
    walls: [WallLayout; 4],
    radius: f32,
    near_z: f32,
    rate: f32,
    twist_rate: f32,
    scroll: [f32; 4],
    twist: f32,
}

impl TunnelScroller {
    /// Lay out all four walls using `metrics`.
    pub fn new<M: TextMetrics + ?Sized>(
        options: &TunnelOptions,
        metrics: &M,
    ) -> Self {
        let params = LayoutParams::from_options(options);
        let walls = options.wall_seeds.map(|seed| {
            WallLayout::compute(&options.phrases, seed, metrics, &params)
        });
        Self {
            walls,
            radius: options.radius,
            near_z: options.near_z,
            rate: options.speed * options.scroll_multiplier,
            twist_rate: options.twist_rate,
            scroll: [0.0; 4],
            twist: 0.0,
        }
    }

    /// Recompute scroll offsets and twist for `elapsed` seconds since start.
    ///
    /// Pure function of time: calling it twice with the same `elapsed`
    /// yields the same state.
    pub fn advance(&mut self, elapsed: f32) {
        for (offset, layout) in self.scroll.iter_mut().zip(&self.walls) {
            *offset = layout.scroll_offset(elapsed, self.rate);
        }
        let twist = elapsed * self.twist_rate;
        self.twist = if twist.is_finite() {
            twist.rem_euclid(std::f32::consts::TAU)
        } else {
            0.0
        };
    }

    /// Layout of one wall.
    #[must_use]
    pub fn layout(&self, side: WallSide) -> &WallLayout {
        &self.walls[side.index()]
    }

    /// Current scroll offset of one wall, in `[0, H)`.
    #[must_use]
    pub fn scroll(&self, side: WallSide) -> f32 {
        self.scroll[side.index()]
    }

    /// Current twist of the whole tunnel around its axis, radians.
    #[must_use]
    pub fn twist(&self) -> f32 {
        self.twist
    }

    /// World transform of one wall's tiles: twist, move to the near end,
    /// place the wall, then slide it by the scroll offset.
    #[must_use]
    pub fn wall_pose(&self, side: WallSide) -> Affine3A {
        let i = side.index();
        Affine3A::from_quat(Quat::from_rotation_z(self.twist))
            * Affine3A::from_translation(Vec3::new(0.0, 0.0, self.near_z))
            * wall_transform(i, self.radius)
            * Affine3A::from_translation(Vec3::new(0.0, self.scroll[i], 0.0))
    }
}
