use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Phrases painted on the tunnel walls, in layout order before per-wall
/// rotation.
pub const DEFAULT_PHRASES: [&str; 11] = [
    "NOT GOOD ENOUGH",
    "THEY KNOW",
    "FRAUD",
    "DONT BELONG",
    "EVERYONE SEES IT",
    "FAKE",
    "ERROR",
    "WHO AM I",
    "IMPOSTER",
    "FAILURE",
    "DISAPPOINTMENT",
];

/// Tunnel geometry, text layout, and scroll parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Tunnel", inline)]
#[serde(default)]
pub struct TunnelOptions {
    /// Distance from the tunnel axis to each wall.
    #[schemars(title = "Radius", range(min = 1.0, max = 12.0), extend("step" = 0.5))]
    pub radius: f32,
    /// Fraction of the wall width a phrase is scaled to fill.
    #[schemars(title = "Text Width", range(min = 0.1, max = 1.0), extend("step" = 0.05))]
    pub target_width_ratio: f32,
    /// Font size handed to the text estimator.
    #[schemars(skip)]
    pub font_size: f32,
    /// Average glyph advance as a fraction of the font size.
    #[schemars(skip)]
    pub glyph_advance: f32,
    /// Lower clamp on the per-phrase scale factor.
    #[schemars(skip)]
    pub min_scale: f32,
    /// Upper clamp on the per-phrase scale factor.
    #[schemars(skip)]
    pub max_scale: f32,
    /// Gap between stacked phrases, in world units.
    #[schemars(title = "Phrase Gap", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub phrase_gap: f32,
    /// Depth (along the tunnel axis) the tiled walls must cover.
    #[schemars(skip)]
    pub view_depth: f32,
    /// Axial coordinate of the near end of each wall.
    #[schemars(skip)]
    pub near_z: f32,
    /// Base scroll speed.
    #[schemars(title = "Speed", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub speed: f32,
    /// Multiplier converting `speed` into world units per second.
    #[schemars(skip)]
    pub scroll_multiplier: f32,
    /// Rotation of the whole tunnel around its axis, radians per second.
    #[schemars(title = "Twist", range(min = -1.0, max = 1.0), extend("step" = 0.01))]
    pub twist_rate: f32,
    /// Phrase list shared by all walls.
    #[schemars(skip)]
    pub phrases: Vec<String>,
    /// Per-wall rotation of the phrase list (floor, right, ceiling, left).
    #[schemars(skip)]
    pub wall_seeds: [usize; 4],
}

impl TunnelOptions {
    /// Width a phrase is scaled to: a fraction of the full wall width.
    #[must_use]
    pub fn target_width(&self) -> f32 {
        self.radius * 2.0 * self.target_width_ratio
    }
}

impl Default for TunnelOptions {
    fn default() -> Self {
        Self {
            radius: 4.0,
            target_width_ratio: 0.75,
            font_size: 0.6,
            glyph_advance: 0.7,
            min_scale: 0.5,
            max_scale: 8.0,
            phrase_gap: 0.4,
            view_depth: 50.0,
            near_z: 5.0,
            speed: 0.1,
            scroll_multiplier: 50.0,
            twist_rate: 0.1,
            phrases: DEFAULT_PHRASES.iter().map(|p| (*p).to_owned()).collect(),
            wall_seeds: [0, 3, 6, 9],
        }
    }
}
