//! Highlight-and-gradient coloring of categorical ratios.
//!
//! The central operation is [`map_colors`] (or [`ColorMapper::map`]
//! with custom endpoints): the category with the largest ratio gets a
//! fixed highlight color and every other one a color taken on a
//! [`LinearGradient`] according to its position among the remaining
//! ratios.
//!
//! Around it:
//! - [`Distribution`] and [`Dataset`] hold per-subject ratios;
//! - [`BarChart`] and [`Summary`] describe a chart for a renderer;
//! - [`css`] formats and parses CSS colors;
//! - [`MapperConfig`] builds a [`ColorMapper`] from CSS strings or JSON.

use std::marker::PhantomData;
pub use rgb::RGB8;
use serde::Serialize;

pub mod chart;
pub mod config;
pub mod css;
pub mod distribution;
mod error;

pub use chart::{Bar, BarChart, Summary, format_percent};
pub use config::MapperConfig;
pub use distribution::{Dataset, Distribution, SortOrder, MBTI_TYPES};
pub use error::{Error, Result};

/// Color given to the category with the largest ratio.
pub const HIGHLIGHT: RGB8 = RGB8 { r: 255, g: 65, b: 54 };
/// Gradient color for the smallest of the remaining ratios.
pub const LOW: RGB8 = RGB8 { r: 220, g: 235, b: 252 };
/// Gradient color for the largest of the remaining ratios.
pub const HIGH: RGB8 = RGB8 { r: 10, g: 70, b: 160 };

/// A “continuous” range of colors parametrized by reals in \[0, 1\].
pub trait ColorRange<Color> {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\].  Values
    /// outside that interval are clamped.
    fn rgb(&self, t: f64) -> Color;

    /// Return an iterator yielding `n` evenly spaced values between
    /// `a` and `b` (both included) together with their colors.
    ///
    /// # Example
    ///
    /// ```
    /// use category_colors::{ColorRange, LinearGradient, LOW, HIGH};
    /// let g = LinearGradient::new(LOW, HIGH);
    /// let v: Vec<_> = g.range(0.1, 0.3, 3).collect();
    /// assert_eq!(v[0], (0.1, LOW));
    /// assert_eq!(v[2], (0.3, HIGH));
    /// ```
    fn range(self, a: f64, b: f64, n: usize) -> Range<Self, Color>
    where Self: Sized {
        Range { range: self, color: PhantomData, a, b,
                last: n.saturating_sub(1), i: 0, j: n }
    }
}

/// An iterator yielding `f64` in a given range together with colors.
///
/// Created by [`ColorRange::range`].
pub struct Range<R, Color> {
    range: R,
    color: PhantomData<Color>,
    a: f64,
    b: f64,
    last: usize, // index of `b`
    i: usize, // first position to be consumed
    j: usize, // position after the last one to be consumed
}

impl<R, Color> Range<R, Color> where R: ColorRange<Color> {
    fn item(&self, k: usize) -> (f64, Color) {
        if k == 0 {
            (self.a, self.range.rgb(0.))
        } else if k == self.last {
            (self.b, self.range.rgb(1.))
        } else {
            let t = k as f64 / self.last as f64;
            ((1. - t) * self.a + t * self.b, self.range.rgb(t))
        }
    }
}

impl<R, Color> Iterator for Range<R, Color>
where R: ColorRange<Color> {
    type Item = (f64, Color);

    fn next(&mut self) -> Option<Self::Item> {
        if self.i >= self.j { return None }
        let item = self.item(self.i);
        self.i += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.j - self.i;
        (len, Some(len))
    }
}

impl<R, Color> ExactSizeIterator for Range<R, Color>
where R: ColorRange<Color> {}

impl<R, Color> DoubleEndedIterator for Range<R, Color>
where R: ColorRange<Color> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.i >= self.j { return None }
        self.j -= 1;
        Some(self.item(self.j))
    }
}

/// Channel-wise linear interpolation between two RGB colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinearGradient {
    low: RGB8,
    high: RGB8,
}

impl LinearGradient {
    /// Gradient going from `low` (at `t = 0`) to `high` (at `t = 1`).
    pub fn new(low: RGB8, high: RGB8) -> Self { Self { low, high } }

    pub fn low(&self) -> RGB8 { self.low }

    pub fn high(&self) -> RGB8 { self.high }
}

#[inline]
fn lerp(a: u8, b: u8, t: f64) -> u8 {
    let (a, b) = (a as f64, b as f64);
    (a + (b - a) * t).round() as u8
}

impl ColorRange<RGB8> for LinearGradient {
    fn rgb(&self, t: f64) -> RGB8 {
        let t = t.clamp(0., 1.);
        RGB8 { r: lerp(self.low.r, self.high.r, t),
               g: lerp(self.low.g, self.high.g, t),
               b: lerp(self.low.b, self.high.b, t) }
    }
}

/// A label together with its ratio (normally in \[0, 1\]).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Category {
    pub label: String,
    pub ratio: f64,
}

impl Category {
    pub fn new(label: impl Into<String>, ratio: f64) -> Self {
        Self { label: label.into(), ratio }
    }
}

impl<S: Into<String>> From<(S, f64)> for Category {
    fn from((label, ratio): (S, f64)) -> Self { Category::new(label, ratio) }
}

/// A [`Category`] with the color assigned by a [`ColorMapper`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ColoredCategory {
    pub label: String,
    pub ratio: f64,
    pub color: RGB8,
    /// Whether this is the category carrying the highlight color.
    pub highlighted: bool,
}

/// Index of the first category with the largest ratio.
pub(crate) fn peak_index(categories: &[Category]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, c) in categories.iter().enumerate() {
        match best {
            None => best = Some((i, c.ratio)),
            Some((_, r)) if c.ratio > r => best = Some((i, c.ratio)),
            Some(_) => (),
        }
    }
    best.map(|(i, _)| i)
}

/// Assigns colors to categories: the first category with the largest
/// ratio gets the highlight color, the others are placed on the
/// low → high gradient according to their ratio relative to the
/// smallest and largest of the ratios *below* the peak.  Categories
/// tied with the peak (other than the first) get the high color, or
/// the low one when every other ratio is equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorMapper {
    highlight: RGB8,
    gradient: LinearGradient,
}

impl Default for ColorMapper {
    /// Red highlight, light to dark blue gradient.
    fn default() -> Self {
        Self { highlight: HIGHLIGHT, gradient: LinearGradient::new(LOW, HIGH) }
    }
}

impl ColorMapper {
    /// Set the color of the maximum category.
    pub fn highlight(mut self, c: RGB8) -> Self {
        self.highlight = c;
        self
    }

    /// Set the color of the smallest non-highlighted ratio.
    pub fn low(mut self, c: RGB8) -> Self {
        self.gradient.low = c;
        self
    }

    /// Set the color of the largest non-highlighted ratio.
    pub fn high(mut self, c: RGB8) -> Self {
        self.gradient.high = c;
        self
    }

    pub fn highlight_color(&self) -> RGB8 { self.highlight }

    /// The gradient used for non-highlighted categories.
    pub fn gradient(&self) -> LinearGradient { self.gradient }

    /// Smallest and largest ratio strictly below the peak ratio.
    /// Other categories tied with the peak are left out, and end up
    /// on the high end of the gradient once `t` is clamped.
    fn remaining_bounds(categories: &[Category], top: usize)
                        -> Option<(f64, f64)> {
        let peak = categories[top].ratio;
        categories.iter()
            .map(|c| c.ratio)
            .filter(|&r| r < peak)
            .fold(None, |acc, r| match acc {
                None => Some((r, r)),
                Some((lo, hi)) => Some((lo.min(r), hi.max(r))),
            })
    }

    /// Color the `categories`, keeping their order.
    ///
    /// # Example
    ///
    /// ```
    /// use category_colors::{ColorMapper, Category, HIGHLIGHT, LOW};
    /// let cats = [Category::new("X", 0.1), Category::new("Y", 0.9)];
    /// let colored = ColorMapper::default().map(&cats);
    /// assert_eq!(colored[0].color, LOW);
    /// assert_eq!(colored[1].color, HIGHLIGHT);
    /// ```
    pub fn map(&self, categories: &[Category]) -> Vec<ColoredCategory> {
        let Some(top) = peak_index(categories) else { return vec![] };
        let (lo, hi) = Self::remaining_bounds(categories, top)
            .unwrap_or((0., 0.));
        categories.iter().enumerate().map(|(i, c)| {
            let color = if i == top { self.highlight }
                else if hi == lo { self.gradient.rgb(0.) }
                else { self.gradient.rgb((c.ratio - lo) / (hi - lo)) };
            ColoredCategory { label: c.label.clone(), ratio: c.ratio,
                              color, highlighted: i == top }
        }).collect()
    }

    /// Sample `n` colors of the gradient over the range of the ratios
    /// below the peak, e.g. to draw a legend.  Returns `None` if no
    /// ratio is below the peak.
    pub fn legend(&self, categories: &[Category], n: usize)
                  -> Option<Range<LinearGradient, RGB8>> {
        let top = peak_index(categories)?;
        let (lo, hi) = Self::remaining_bounds(categories, top)?;
        Some(self.gradient.range(lo, hi, n))
    }
}

/// Color `categories` with the default [`ColorMapper`].
pub fn map_colors<C>(categories: impl IntoIterator<Item = C>)
                     -> Vec<ColoredCategory>
where C: Into<Category> {
    let categories: Vec<Category> =
        categories.into_iter().map(Into::into).collect();
    ColorMapper::default().map(&categories)
}
