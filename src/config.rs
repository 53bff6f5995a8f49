//! Mapper configuration from CSS color strings.

use serde::{Deserialize, Serialize};
use crate::{css, ColorMapper, Result, HIGH, HIGHLIGHT, LOW};

/// The three colors of a [`ColorMapper`] in CSS notation.  Missing
/// fields take the built-in defaults.
///
/// ```
/// use category_colors::{MapperConfig, RGB8};
/// let m = MapperConfig::from_json(r##"{"highlight": "#000000"}"##)?.mapper()?;
/// assert_eq!(m.highlight_color(), RGB8::new(0, 0, 0));
/// # Ok::<(), category_colors::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MapperConfig {
    pub highlight: String,
    pub low: String,
    pub high: String,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self { highlight: css::to_css_rgb(HIGHLIGHT),
               low: css::to_css_rgb(LOW),
               high: css::to_css_rgb(HIGH) }
    }
}

impl MapperConfig {
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Parse the colors and build the mapper.
    pub fn mapper(&self) -> Result<ColorMapper> {
        let m = ColorMapper::default()
            .highlight(css::parse_color(&self.highlight)?)
            .low(css::parse_color(&self.low)?)
            .high(css::parse_color(&self.high)?);
        log::debug!("color mapper: highlight {}, gradient {} → {}",
                    self.highlight, self.low, self.high);
        Ok(m)
    }
}

impl From<&ColorMapper> for MapperConfig {
    fn from(m: &ColorMapper) -> Self {
        let g = m.gradient();
        Self { highlight: css::to_css_rgb(m.highlight_color()),
               low: css::to_css_rgb(g.low()),
               high: css::to_css_rgb(g.high()) }
    }
}
