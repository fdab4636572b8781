//! One-time layout of a wall's text stack.

use glam::{Affine3A, Quat, Vec3};

use super::metrics::TextMetrics;
use crate::options::TunnelOptions;

/// Widths and heights at or below this are treated as degenerate.
const EPSILON: f32 = 1e-4;

/// Upper bound on tiled copies per wall.
const MAX_COPIES: usize = 1024;

/// Inputs to [`WallLayout::compute`] besides phrases and metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    /// Width every phrase is scaled toward.
    pub target_width: f32,
    /// Lower clamp on a phrase's scale.
    pub min_scale: f32,
    /// Upper clamp on a phrase's scale.
    pub max_scale: f32,
    /// Gap after each phrase in the stack.
    pub gap: f32,
    /// Depth the tiled copies must cover.
    pub view_depth: f32,
}

impl LayoutParams {
    /// Parameters derived from tunnel options.
    #[must_use]
    pub fn from_options(options: &TunnelOptions) -> Self {
        Self {
            target_width: options.target_width(),
            min_scale: options.min_scale,
            max_scale: options.max_scale,
            gap: options.phrase_gap.max(0.0),
            view_depth: options.view_depth,
        }
    }
}

/// A phrase placed in a wall's repeating block.
#[derive(Debug, Clone, PartialEq)]
pub struct WallTextBlock {
    /// Text to render.
    pub phrase: String,
    /// Uniform scale fitting the phrase to the target width.
    pub scale: f32,
    /// Natural height reported by the text backend.
    pub measured_height: f32,
    /// Distance from the start of the block to this phrase's leading edge.
    pub stack_offset: f32,
}

impl WallTextBlock {
    /// Height after scaling.
    #[must_use]
    pub fn scaled_height(&self) -> f32 {
        self.measured_height * self.scale
    }
}

/// Wall-local placement of one tiled phrase.
///
/// Wall-local axes: x along the wall's width, y down the tunnel (the scroll
/// axis), z toward the tunnel axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TilePlacement {
    /// Index into [`WallLayout::blocks`].
    pub block: usize,
    /// Which copy of the block this tile belongs to.
    pub copy: usize,
    /// Centre of the phrase in wall-local space.
    pub position: Vec3,
    /// Uniform scale.
    pub scale: f32,
}

impl TilePlacement {
    /// Wall-local transform of the phrase mesh.
    #[must_use]
    pub fn local_transform(&self) -> Affine3A {
        Affine3A::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            Quat::IDENTITY,
            self.position,
        )
    }
}

/// Repeating block of phrases for one wall, tiled to cover the view depth.
#[derive(Debug, Clone, PartialEq)]
pub struct WallLayout {
    blocks: Vec<WallTextBlock>,
    block_height: f32,
    copies: usize,
}

impl WallLayout {
    /// Lay out `phrases`, rotated left by `seed`, measured with `metrics`.
    ///
    /// Deterministic: the same inputs always produce the same layout.
    pub fn compute<M: TextMetrics + ?Sized>(
        phrases: &[String],
        seed: usize,
        metrics: &M,
        params: &LayoutParams,
    ) -> Self {
        if phrases.is_empty() {
            return Self::empty();
        }

        let mut ordered = phrases.to_vec();
        ordered.rotate_left(seed % phrases.len());

        let mut blocks = Vec::with_capacity(ordered.len());
        let mut cursor = 0.0;
        for phrase in ordered {
            let bounds = metrics.measure(&phrase);
            let scale = fit_scale(
                bounds.width,
                params.target_width,
                params.min_scale,
                params.max_scale,
            );
            let measured_height = if bounds.height.is_finite() {
                bounds.height.max(0.0)
            } else {
                0.0
            };
            let block = WallTextBlock {
                phrase,
                scale,
                measured_height,
                stack_offset: cursor,
            };
            cursor += block.scaled_height() + params.gap;
            blocks.push(block);
        }

        if cursor <= EPSILON {
            log::warn!("wall layout collapsed to zero height; wall disabled");
            return Self::empty();
        }

        let wanted = (params.view_depth.max(0.0) / cursor).ceil() as usize + 1;
        let copies = wanted.min(MAX_COPIES);
        if copies < wanted {
            log::warn!(
                "wall layout needs {wanted} copies of a {cursor:.4}-unit \
                 block; capped at {MAX_COPIES}"
            );
        }
        log::debug!(
            "wall layout: {} phrases, block height {cursor:.3}, {copies} copies",
            blocks.len()
        );

        Self {
            blocks,
            block_height: cursor,
            copies,
        }
    }

    fn empty() -> Self {
        Self {
            blocks: Vec::new(),
            block_height: 0.0,
            copies: 0,
        }
    }

    /// Phrases in stack order.
    #[must_use]
    pub fn blocks(&self) -> &[WallTextBlock] {
        &self.blocks
    }

    /// Period H of the repeating block (0 for an empty layout).
    #[must_use]
    pub fn block_height(&self) -> f32 {
        self.block_height
    }

    /// Number of tiled copies, including the one extra for the wrap.
    #[must_use]
    pub fn copies(&self) -> usize {
        self.copies
    }

    /// Whether the wall has nothing to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.copies == 0
    }

    /// Every tiled phrase in wall-local space.
    ///
    /// Tiling starts one block before the wall origin, so any scroll offset
    /// in `[0, H)` still covers `[0, view_depth]`.
    pub fn tiles(&self) -> impl Iterator<Item = TilePlacement> + '_ {
        let h = self.block_height;
        (0..self.copies).flat_map(move |copy| {
            let base = (copy as f32 - 1.0) * h;
            self.blocks.iter().enumerate().map(move |(block, b)| {
                TilePlacement {
                    block,
                    copy,
                    position: Vec3::new(
                        0.0,
                        base + b.stack_offset + b.scaled_height() * 0.5,
                        0.0,
                    ),
                    scale: b.scale,
                }
            })
        })
    }

    /// Scroll offset at `elapsed` seconds for a scroll `rate` in world units
    /// per second; always within `[0, H)`.
    #[must_use]
    pub fn scroll_offset(&self, elapsed: f32, rate: f32) -> f32 {
        scroll_offset(elapsed, rate, self.block_height)
    }
}

/// Uniform scale fitting `width` to `target`, clamped to
/// `[min_scale, max_scale]`. Degenerate widths take `min_scale`.
#[must_use]
pub fn fit_scale(
    width: f32,
    target: f32,
    min_scale: f32,
    max_scale: f32,
) -> f32 {
    if !width.is_finite() || width <= EPSILON {
        return min_scale;
    }
    (target / width).max(min_scale).min(max_scale)
}

/// `(elapsed * rate) mod period`, in `[0, period)`. A degenerate period or
/// non-finite displacement yields 0.
#[must_use]
pub fn scroll_offset(elapsed: f32, rate: f32, period: f32) -> f32 {
    let displacement = elapsed * rate;
    if !(period > EPSILON && displacement.is_finite()) {
        return 0.0;
    }
    let offset = displacement.rem_euclid(period);
    // rem_euclid can round up to exactly `period` for tiny negatives.
    if offset >= period {
        0.0
    } else {
        offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::DEFAULT_PHRASES;
    use crate::tunnel::metrics::{ApproxTextMetrics, TextBounds};

    struct FixedMetrics(TextBounds);

    impl TextMetrics for FixedMetrics {
        fn measure(&self, _text: &str) -> TextBounds {
            self.0
        }
    }

    fn phrases() -> Vec<String> {
        DEFAULT_PHRASES.iter().map(|p| (*p).to_owned()).collect()
    }

    fn params() -> LayoutParams {
        LayoutParams::from_options(&TunnelOptions::default())
    }

    #[test]
    fn rotates_phrases_by_seed() {
        let m = ApproxTextMetrics::new(0.6, 0.7);
        let layout = WallLayout::compute(&phrases(), 3, &m, &params());
        assert_eq!(layout.blocks()[0].phrase, "DONT BELONG");
        assert_eq!(layout.blocks()[10].phrase, "FRAUD");

        let wrapped = WallLayout::compute(&phrases(), 14, &m, &params());
        assert_eq!(wrapped, layout);
    }

    #[test]
    fn scales_to_target_width_with_clamps() {
        let m = ApproxTextMetrics::new(0.6, 0.7);
        let layout = WallLayout::compute(&phrases(), 0, &m, &params());
        for b in layout.blocks() {
            let natural = b.phrase.chars().count() as f32 * 0.42;
            let expected = (6.0 / natural).clamp(0.5, 8.0);
            assert!((b.scale - expected).abs() < 1e-5, "{}", b.phrase);
        }
        // "FAKE": 4 glyphs, 1.68 wide, scaled up to fill 6 units.
        let fake =
            layout.blocks().iter().find(|b| b.phrase == "FAKE").unwrap();
        assert!((fake.scale * 1.68 - 6.0).abs() < 1e-4);
    }

    #[test]
    fn degenerate_width_clamps_to_min_scale() {
        assert_eq!(fit_scale(0.0, 6.0, 0.5, 8.0), 0.5);
        assert_eq!(fit_scale(f32::NAN, 6.0, 0.5, 8.0), 0.5);
        assert_eq!(fit_scale(1e-9, 6.0, 0.5, 8.0), 0.5);
        assert_eq!(fit_scale(100.0, 6.0, 0.5, 8.0), 0.5);
        assert_eq!(fit_scale(0.1, 6.0, 0.5, 8.0), 8.0);

        let m = FixedMetrics(TextBounds {
            width: 0.0,
            height: 0.6,
        });
        let layout = WallLayout::compute(&phrases(), 0, &m, &params());
        assert!(layout.blocks().iter().all(|b| b.scale == 0.5));
        assert!(layout.block_height().is_finite());
    }

    #[test]
    fn stacks_by_scaled_height() {
        let m = ApproxTextMetrics::new(0.6, 0.7);
        let layout = WallLayout::compute(&phrases(), 0, &m, &params());
        let mut expected = 0.0;
        for b in layout.blocks() {
            assert!((b.stack_offset - expected).abs() < 1e-4);
            expected += b.scaled_height() + 0.4;
        }
        assert!((layout.block_height() - expected).abs() < 1e-4);
        let wanted = (50.0 / layout.block_height()).ceil() as usize + 1;
        assert_eq!(layout.copies(), wanted);
    }

    #[test]
    fn tile_transform_places_and_scales_phrase() {
        let m = ApproxTextMetrics::new(0.6, 0.7);
        let layout = WallLayout::compute(&phrases(), 0, &m, &params());
        for tile in layout.tiles().take(5) {
            let t = tile.local_transform();
            assert!(t.transform_point3(Vec3::ZERO).abs_diff_eq(tile.position, 1e-5));
            assert!(t
                .transform_vector3(Vec3::X)
                .abs_diff_eq(Vec3::X * tile.scale, 1e-5));
        }
    }

    #[test]
    fn layout_is_deterministic() {
        let m = ApproxTextMetrics::new(0.6, 0.7);
        let a = WallLayout::compute(&phrases(), 6, &m, &params());
        let b = WallLayout::compute(&phrases(), 6, &m, &params());
        assert_eq!(a, b);
        assert!(a.tiles().eq(b.tiles()));
    }

    #[test]
    fn tiles_cover_view_depth_at_any_offset() {
        let m = ApproxTextMetrics::new(0.6, 0.7);
        let layout = WallLayout::compute(&phrases(), 0, &m, &params());
        let h = layout.block_height();
        let tiles: Vec<_> = layout.tiles().collect();
        assert_eq!(tiles.len(), layout.copies() * layout.blocks().len());

        let first = tiles.first().unwrap().position.y;
        let last = tiles.last().unwrap().position.y;
        for offset in [0.0, h * 0.5, h * 0.999] {
            assert!(first + offset <= h);
            assert!(last + offset >= 50.0 - h);
        }
    }

    #[test]
    fn empty_inputs_yield_empty_layout() {
        let m = ApproxTextMetrics::new(0.6, 0.7);
        let layout = WallLayout::compute(&[], 2, &m, &params());
        assert!(layout.is_empty());
        assert_eq!(layout.tiles().count(), 0);

        let blank = vec![String::new(); 3];
        let params = LayoutParams { gap: 0.0, ..params() };
        let layout = WallLayout::compute(&blank, 0, &m, &params);
        assert!(layout.is_empty());
        assert_eq!(layout.scroll_offset(12.0, 5.0), 0.0);
    }

    #[test]
    fn scroll_offset_wraps_into_period() {
        assert_eq!(scroll_offset(0.0, 5.0, 10.0), 0.0);
        assert!((scroll_offset(3.0, 5.0, 10.0) - 5.0).abs() < 1e-6);
        assert!((scroll_offset(2.2, 5.0, 10.0) - 1.0).abs() < 1e-4);
        assert_eq!(scroll_offset(-1e-20, 1.0, 1.0), 0.0);
        assert_eq!(scroll_offset(f32::INFINITY, 1.0, 10.0), 0.0);
        assert_eq!(scroll_offset(4.0, 1.0, 0.0), 0.0);
        for i in 0..10_000 {
            let elapsed = i as f32 * 0.0167;
            let off = scroll_offset(elapsed, 5.0, 7.3);
            assert!((0.0..7.3).contains(&off));
        }
    }
}
