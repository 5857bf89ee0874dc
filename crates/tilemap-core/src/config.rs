//! Navigation configuration.
//!
//! Every tunable of the navigation engine lives here so hosts can pass one
//! JSON document instead of reaching for globals. Missing fields fall back
//! to the defaults below.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Tunables for the viewport, stage, and input controllers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Map squares per pixel when fully zoomed in (`zoom = 1`).
    pub min_squares_per_pixel: f64,
    /// Map squares per pixel when fully zoomed out (`zoom = 0`).
    pub max_squares_per_pixel: f64,
    /// Zoom factor at startup, clamped to `[0, 1]`.
    pub initial_zoom: f64,
    /// Map-space centre of the view at startup.
    pub initial_position: Point,
    /// Tiling granularity of the stage mesh, in map squares.
    pub squares_per_chunk: f64,
    /// Keyboard pan step as a fraction of the larger display dimension.
    pub keyboard_pan_screen_percent: f64,
    /// Zoom change per unit of accumulated wheel `deltaY`.
    /// Negative so that scrolling down (positive delta) zooms out.
    pub wheel_zoom_per_delta: f64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            min_squares_per_pixel: 1.0,
            max_squares_per_pixel: 3.0,
            initial_zoom: 0.5,
            initial_position: Point::ORIGIN,
            squares_per_chunk: 32.0,
            keyboard_pan_screen_percent: 0.05,
            wheel_zoom_per_delta: -0.001,
        }
    }
}

impl NavigationConfig {
    /// Parse a config from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| format!("invalid navigation config: {e}"))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the viewport and stage rely on.
    pub fn validate(&self) -> Result<(), String> {
        let finite = [
            ("min_squares_per_pixel", self.min_squares_per_pixel),
            ("max_squares_per_pixel", self.max_squares_per_pixel),
            ("initial_zoom", self.initial_zoom),
            ("initial_position.x", self.initial_position.x),
            ("initial_position.y", self.initial_position.y),
            ("squares_per_chunk", self.squares_per_chunk),
            ("keyboard_pan_screen_percent", self.keyboard_pan_screen_percent),
            ("wheel_zoom_per_delta", self.wheel_zoom_per_delta),
        ];
        if let Some((name, _)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(format!("{name} must be a finite number"));
        }
        if self.min_squares_per_pixel <= 0.0 {
            return Err("min_squares_per_pixel must be positive".into());
        }
        if self.max_squares_per_pixel < self.min_squares_per_pixel {
            return Err(format!(
                "max_squares_per_pixel ({}) must not be below min_squares_per_pixel ({})",
                self.max_squares_per_pixel, self.min_squares_per_pixel
            ));
        }
        if self.squares_per_chunk <= 0.0 {
            return Err("squares_per_chunk must be positive".into());
        }
        // At most one grid line per pixel when fully zoomed out. This also
        // bounds the stage to roughly one chunk per display pixel.
        if self.squares_per_chunk < self.max_squares_per_pixel {
            return Err(format!(
                "squares_per_chunk ({}) must not be below max_squares_per_pixel ({})",
                self.squares_per_chunk, self.max_squares_per_pixel
            ));
        }
        if self.keyboard_pan_screen_percent < 0.0 {
            return Err("keyboard_pan_screen_percent must not be negative".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_json_yields_defaults() {
        let config = NavigationConfig::from_json("{}").unwrap();
        assert_eq!(config, NavigationConfig::default());
    }

    #[test]
    fn partial_json_overrides_named_fields() {
        let config =
            NavigationConfig::from_json(r#"{ "squares_per_chunk": 16, "initial_zoom": 1.0 }"#)
                .unwrap();
        assert_eq!(config.squares_per_chunk, 16.0);
        assert_eq!(config.initial_zoom, 1.0);
        assert_eq!(config.max_squares_per_pixel, 3.0);
    }

    #[test]
    fn initial_position_parses_as_vector() {
        let config =
            NavigationConfig::from_json(r#"{ "initial_position": { "x": 12.5, "y": -4 } }"#)
                .unwrap();
        assert_eq!(config.initial_position, Point::new(12.5, -4.0));
    }

    #[test]
    fn rejects_inverted_zoom_range() {
        let err = NavigationConfig::from_json(
            r#"{ "min_squares_per_pixel": 4, "max_squares_per_pixel": 2 }"#,
        )
        .unwrap_err();
        assert!(err.contains("max_squares_per_pixel"), "got: {err}");
    }

    #[test]
    fn rejects_zero_chunk() {
        let config = NavigationConfig {
            squares_per_chunk: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_chunk_finer_than_a_zoomed_out_pixel() {
        let config = NavigationConfig {
            squares_per_chunk: 1e-6,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.contains("squares_per_chunk"), "got: {err}");

        let finest_allowed = NavigationConfig {
            squares_per_chunk: 3.0,
            ..Default::default()
        };
        assert_eq!(finest_allowed.validate(), Ok(()));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = NavigationConfig::from_json("{ nope").unwrap_err();
        assert!(err.starts_with("invalid navigation config"), "got: {err}");
    }
}
