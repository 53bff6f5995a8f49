//! Renderer-agnostic bar chart description.
//!
//! A [`BarChart`] carries everything a plotting front-end needs to
//! draw the colored bars of a [`Distribution`]: labels, ratios,
//! percentage texts and CSS fill colors.  It serializes to JSON.

use serde::Serialize;
use crate::{css, ColorMapper, Distribution, Result, SortOrder, RGB8};

/// Color of the bar outlines.
pub const OUTLINE: RGB8 = RGB8 { r: 8, g: 48, b: 107 };

/// Number of categories listed in a [`Summary`].
pub const SUMMARY_LEN: usize = 5;

/// Render a ratio as a percentage with two decimals.
///
/// ```
/// assert_eq!(category_colors::format_percent(0.1234), "12.34%");
/// ```
pub fn format_percent(ratio: f64) -> String {
    format!("{:.2}%", ratio * 100.)
}

/// One bar of a [`BarChart`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Bar {
    pub label: String,
    pub ratio: f64,
    /// The ratio as a percentage, to be printed next to the bar.
    pub text: String,
    /// CSS `rgb(r, g, b)` fill color.
    pub color: String,
    pub highlighted: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BarChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub outline: String,
    pub bars: Vec<Bar>,
}

impl BarChart {
    /// Bars of `dist`, presented in `order` and colored by `mapper`.
    pub fn new(dist: &Distribution, mapper: &ColorMapper,
               order: SortOrder) -> Self {
        let bars: Vec<Bar> = mapper.map(&dist.sorted(order)).into_iter()
            .map(|c| Bar { text: format_percent(c.ratio),
                           color: css::to_css_rgb(c.color),
                           label: c.label,
                           ratio: c.ratio,
                           highlighted: c.highlighted })
            .collect();
        log::debug!("bar chart for {} with {} bars ({:?})",
                    dist.subject(), bars.len(), order);
        BarChart { title: format!("{}: distribution", dist.subject()),
                   x_label: "Type".to_string(),
                   y_label: "Ratio".to_string(),
                   outline: css::to_css_rgb(OUTLINE),
                   bars }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_axis_labels(mut self, x: impl Into<String>,
                            y: impl Into<String>) -> Self {
        self.x_label = x.into();
        self.y_label = y.into();
        self
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Side panel information: the peak category and the first few.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Summary {
    pub subject: String,
    /// Label and percentage of the largest ratio.
    pub peak: Option<(String, String)>,
    /// The first [`SUMMARY_LEN`] categories, with percentages.
    pub top: Vec<(String, String)>,
}

impl Summary {
    pub fn new(dist: &Distribution, order: SortOrder) -> Self {
        let peak = dist.peak()
            .map(|c| (c.label.clone(), format_percent(c.ratio)));
        let top = dist.top(order, SUMMARY_LEN).into_iter()
            .map(|c| { let p = format_percent(c.ratio); (c.label, p) })
            .collect();
        Summary { subject: dist.subject().to_string(), peak, top }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::Category;

    fn sample() -> Distribution {
        Distribution::new("Korea", vec![Category::new("INFJ", 0.02),
                                        Category::new("ISFJ", 0.125),
                                        Category::new("INTP", 0.05),
                                        Category::new("ESTJ", 0.10),
                                        Category::new("ENFP", 0.08),
                                        Category::new("ISTJ", 0.09)])
    }

    #[test]
    fn percent() {
        assert_eq!(format_percent(0.), "0.00%");
        assert_eq!(format_percent(1.), "100.00%");
        assert_eq!(format_percent(0.125), "12.50%");
    }

    #[test]
    fn descending_chart() {
        let c = BarChart::new(&sample(), &ColorMapper::default(),
                              SortOrder::Descending);
        let labels: Vec<_> = c.bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, ["ISFJ", "ESTJ", "ISTJ", "ENFP", "INTP", "INFJ"]);
        assert!(c.bars[0].highlighted);
        assert_eq!(c.bars[0].color, "rgb(255, 65, 54)");
        assert_eq!(c.bars[1].color, "rgb(10, 70, 160)");
        assert_eq!(c.bars[5].color, "rgb(220, 235, 252)");
        assert_eq!(c.bars[0].text, "12.50%");
        assert_eq!(c.title, "Korea: distribution");
        assert_eq!(c.outline, "rgb(8, 48, 107)");
    }

    #[test]
    fn original_order_chart() {
        let c = BarChart::new(&sample(), &ColorMapper::default(),
                              SortOrder::Original)
            .with_title("Korea: MBTI")
            .with_axis_labels("MBTI", "Share");
        assert_eq!(c.bars[0].label, "INFJ");
        assert!(c.bars[1].highlighted);
        assert_eq!(c.bars.iter().filter(|b| b.highlighted).count(), 1);
        assert_eq!((c.title.as_str(), c.x_label.as_str(), c.y_label.as_str()),
                   ("Korea: MBTI", "MBTI", "Share"));
    }

    #[test]
    fn json_export() {
        let c = BarChart::new(&sample(), &ColorMapper::default(),
                              SortOrder::Descending);
        let v: serde_json::Value = c.to_json().ok()
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default();
        assert_eq!(v["bars"][0]["label"], "ISFJ");
        assert_eq!(v["bars"][0]["color"], "rgb(255, 65, 54)");
        assert_eq!(v["bars"].as_array().map(|a| a.len()), Some(6));
    }

    #[test]
    fn summary() {
        let s = Summary::new(&sample(), SortOrder::Descending);
        assert_eq!(s.peak, Some(("ISFJ".to_string(), "12.50%".to_string())));
        assert_eq!(s.top.len(), SUMMARY_LEN);
        assert_eq!(s.top[1], ("ESTJ".to_string(), "10.00%".to_string()));
        let empty = Summary::new(&Distribution::new("none", vec![]),
                                 SortOrder::Original);
        assert!(empty.peak.is_none() && empty.top.is_empty());
    }
}
