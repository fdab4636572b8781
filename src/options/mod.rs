//! Centralized scene options with TOML preset support.
//!
//! All tweakable settings (tunnel layout, debris, fragments, camera,
//! transition timings) are consolidated here. Options serialize to/from
//! TOML so a host can ship presets next to its assets.

mod camera;
mod debris;
mod fragments;
mod transition;
mod tunnel;

use std::path::Path;

pub use camera::CameraOptions;
pub use debris::DebrisOptions;
pub use fragments::FragmentOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use transition::TransitionOptions;
pub use tunnel::{TunnelOptions, DEFAULT_PHRASES};

use crate::error::ShatterError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[debris]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Seed for every random draw in the scene. `None` seeds from OS
    /// entropy.
    #[schemars(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Tunnel wall layout and scrolling.
    pub tunnel: TunnelOptions,
    /// Drifting debris particles.
    pub debris: DebrisOptions,
    /// Shatter fragment burst.
    pub fragments: FragmentOptions,
    /// Camera projection and parallax.
    pub camera: CameraOptions,
    /// Mode transition timings.
    pub transition: TransitionOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, ShatterError> {
        let content = std::fs::read_to_string(path).map_err(ShatterError::Io)?;
        toml::from_str(&content)
            .map_err(|e| ShatterError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), ShatterError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ShatterError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ShatterError::Io)?;
        }
        std::fs::write(path, content).map_err(ShatterError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }

    /// Reject option sets the animation core cannot run with.
    ///
    /// Per-frame code clamps what it can; this catches the values that would
    /// leave a pool empty or a volume inverted, and any non-finite float that
    /// would reach per-frame math.
    pub fn validate(&self) -> Result<(), ShatterError> {
        let t = &self.tunnel;
        require(
            all_finite(&[
                t.radius,
                t.target_width_ratio,
                t.font_size,
                t.glyph_advance,
                t.min_scale,
                t.max_scale,
                t.phrase_gap,
                t.view_depth,
                t.near_z,
                t.speed,
                t.scroll_multiplier,
                t.twist_rate,
            ]),
            "tunnel values must be finite",
        )?;
        require(t.radius > 0.0, "tunnel.radius must be positive")?;
        require(
            t.target_width_ratio > 0.0,
            "tunnel.target_width_ratio must be positive",
        )?;
        require(t.view_depth > 0.0, "tunnel.view_depth must be positive")?;
        require(t.phrase_gap >= 0.0, "tunnel.phrase_gap must not be negative")?;
        require(
            t.min_scale > 0.0 && t.min_scale <= t.max_scale,
            "tunnel.min_scale must be positive and at most tunnel.max_scale",
        )?;

        let d = &self.debris;
        require(
            all_finite(&[
                d.lateral_extent,
                d.near_z,
                d.far_z,
                d.rate,
                d.speed_jitter,
                d.size_scale,
            ]),
            "debris values must be finite",
        )?;
        require(d.count > 0, "debris.count must be at least 1")?;
        require(
            d.far_z < d.near_z,
            "debris.far_z must lie beyond debris.near_z",
        )?;
        require(
            d.lateral_extent >= 0.0,
            "debris.lateral_extent must not be negative",
        )?;
        // Particles only recycle by crossing far_z, so they must move toward it.
        require(d.rate > 0.0, "debris.rate must be positive")?;
        require(
            (0.0..=1.0).contains(&d.speed_jitter),
            "debris.speed_jitter must be within [0, 1]",
        )?;

        let f = &self.fragments;
        require(
            all_finite(&f.origin)
                && all_finite(&[
                    f.min_speed,
                    f.speed_range,
                    f.max_spin,
                    f.fade_radius,
                ]),
            "fragment values must be finite",
        )?;
        require(f.count > 0, "fragments.count must be at least 1")?;
        require(f.fade_radius > 0.0, "fragments.fade_radius must be positive")?;
        require(
            f.min_speed >= 0.0 && f.speed_range >= 0.0 && f.max_spin >= 0.0,
            "fragment speeds must not be negative",
        )?;

        let c = &self.camera;
        require(
            all_finite(&c.base_position)
                && all_finite(&c.look_at)
                && all_finite(&[
                    c.fovy,
                    c.znear,
                    c.zfar,
                    c.intensity,
                    c.smoothing,
                    c.tilt_range,
                    c.neutral_beta,
                ]),
            "camera values must be finite",
        )?;
        require(
            c.fovy > 0.0 && c.fovy < 180.0,
            "camera.fovy must be within (0, 180) degrees",
        )?;
        require(
            c.smoothing > 0.0 && c.smoothing <= 1.0,
            "camera.smoothing must be within (0, 1]",
        )?;
        require(c.tilt_range > 0.0, "camera.tilt_range must be positive")?;
        require(
            c.znear > 0.0 && c.znear < c.zfar,
            "camera.znear must be positive and below camera.zfar",
        )?;
        Ok(())
    }
}

fn all_finite(values: &[f32]) -> bool {
    values.iter().all(|v| v.is_finite())
}

fn require(ok: bool, msg: &str) -> Result<(), ShatterError> {
    if ok {
        Ok(())
    } else {
        Err(ShatterError::InvalidOptions(msg.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
seed = 7

[debris]
count = 64
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.seed, Some(7));
        assert_eq!(opts.debris.count, 64);
        // Everything else should be default
        assert_eq!(opts.debris.far_z, -45.0);
        assert_eq!(opts.fragments.count, 300);
        assert_eq!(opts.tunnel.phrases.len(), DEFAULT_PHRASES.len());
        assert_eq!(opts.transition.shatter_ms, 2500);
    }

    #[test]
    fn defaults_validate() {
        assert!(Options::default().validate().is_ok());
    }

    #[test]
    fn validation_rejects_unusable_values() {
        let mut opts = Options::default();
        opts.debris.count = 0;
        assert!(matches!(
            opts.validate(),
            Err(ShatterError::InvalidOptions(_))
        ));

        let mut opts = Options::default();
        opts.debris.far_z = 10.0;
        assert!(opts.validate().is_err());

        let mut opts = Options::default();
        opts.camera.smoothing = 0.0;
        assert!(opts.validate().is_err());

        let mut opts = Options::default();
        opts.tunnel.min_scale = 9.0;
        assert!(opts.validate().is_err());
    }

    #[test]
    fn debris_must_move_toward_far_plane() {
        for rate in [-10.0, 0.0, f32::NAN] {
            let mut opts = Options::default();
            opts.debris.rate = rate;
            assert!(opts.validate().is_err(), "rate {rate} accepted");
        }
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let cases: [fn(&mut Options); 8] = [
            |o| o.camera.intensity = f32::INFINITY,
            |o| o.camera.base_position[0] = f32::NAN,
            |o| o.camera.look_at[2] = f32::NEG_INFINITY,
            |o| o.camera.fovy = f32::INFINITY,
            |o| o.tunnel.radius = f32::INFINITY,
            |o| o.debris.lateral_extent = f32::INFINITY,
            |o| o.fragments.origin[1] = f32::NAN,
            |o| o.debris.size_scale = f32::INFINITY,
        ];
        for (i, mutate) in cases.iter().enumerate() {
            let mut opts = Options::default();
            mutate(&mut opts);
            assert!(
                matches!(opts.validate(), Err(ShatterError::InvalidOptions(_))),
                "case {i} accepted"
            );
        }
    }

    #[test]
    fn save_then_load_and_list_presets() {
        let dir = std::env::temp_dir()
            .join(format!("shatter-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.tunnel.speed = 0.25;
        opts.save(&dir.join("fast.toml")).unwrap();
        std::fs::write(dir.join("notes.txt"), "ignored").unwrap();

        let loaded = Options::load(&dir.join("fast.toml")).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(Options::list_presets(&dir), vec!["fast".to_owned()]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn load_reports_parse_errors() {
        let dir = std::env::temp_dir()
            .join(format!("shatter-bad-preset-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.toml");
        std::fs::write(&path, "[debris\ncount = ").unwrap();
        assert!(matches!(
            Options::load(&path),
            Err(ShatterError::OptionsParse(_))
        ));
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("tunnel"));
        assert!(props.contains_key("debris"));
        assert!(props.contains_key("fragments"));
        assert!(props.contains_key("camera"));
        assert!(props.contains_key("transition"));
        assert!(!props.contains_key("seed"));

        let tunnel = &props["tunnel"]["properties"];
        assert!(tunnel.get("speed").is_some());
        assert!(tunnel.get("phrases").is_none());
        assert!(tunnel.get("wall_seeds").is_none());
    }
}
