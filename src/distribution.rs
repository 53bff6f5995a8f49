//! Per-subject ratio distributions.
//!
//! A [`Dataset`] is a table whose columns are category labels (the
//! sixteen [`MBTI_TYPES`] for instance) and whose rows are
//! [`Distribution`]s keyed by a subject such as a country.

use crate::{peak_index, Category, Error, Result};

/// The sixteen MBTI personality types.
pub const MBTI_TYPES: [&str; 16] = [
    "INFJ", "ISFJ", "INTP", "ISFP", "ENTP", "INFP", "ENTJ", "ISTP",
    "INTJ", "ESFP", "ESTJ", "ENFP", "ESTP", "ISTJ", "ENFJ", "ESFJ"];

/// Order in which the categories of a [`Distribution`] are presented.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Keep the input order.
    Original,
    /// Largest ratio first.  Equal ratios keep their input order.
    #[default]
    Descending,
}

/// The ratios of one subject.
#[derive(Clone, Debug, PartialEq)]
pub struct Distribution {
    subject: String,
    categories: Vec<Category>,
}

impl Distribution {
    pub fn new(subject: impl Into<String>, categories: Vec<Category>) -> Self {
        Self { subject: subject.into(), categories }
    }

    /// Build a distribution from possibly missing values.  Missing
    /// and non-finite values are replaced by `0.` (with a warning).
    pub fn from_values<S, I>(subject: impl Into<String>, values: I) -> Self
    where S: Into<String>,
          I: IntoIterator<Item = (S, Option<f64>)> {
        let subject = subject.into();
        let categories = values.into_iter().map(|(label, v)| {
            let label = label.into();
            let ratio = match v {
                Some(r) if r.is_finite() => r,
                _ => {
                    log::warn!("{subject}: no usable value for {label}, \
                                using 0");
                    0.
                }
            };
            Category { label, ratio }
        }).collect();
        Self { subject, categories }
    }

    pub fn subject(&self) -> &str { &self.subject }

    /// The categories in input order.
    pub fn categories(&self) -> &[Category] { &self.categories }

    pub fn len(&self) -> usize { self.categories.len() }

    pub fn is_empty(&self) -> bool { self.categories.is_empty() }

    /// The categories in the given order.
    pub fn sorted(&self, order: SortOrder) -> Vec<Category> {
        let mut v = self.categories.clone();
        if order == SortOrder::Descending {
            v.sort_by(|a, b| b.ratio.total_cmp(&a.ratio));
        }
        v
    }

    /// The first category having the largest ratio.
    pub fn peak(&self) -> Option<&Category> {
        peak_index(&self.categories).map(|i| &self.categories[i])
    }

    /// The first `n` categories in the given order.
    pub fn top(&self, order: SortOrder, n: usize) -> Vec<Category> {
        let mut v = self.sorted(order);
        v.truncate(n);
        v
    }
}

/// Distributions sharing the same category labels.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    labels: Vec<String>,
    rows: Vec<Distribution>,
}

impl Dataset {
    /// Labels are trimmed of surrounding whitespace.
    pub fn new<S: Into<String>>(labels: impl IntoIterator<Item = S>) -> Self {
        Self { labels: labels.into_iter()
                   .map(|l| l.into().trim().to_string()).collect(),
               rows: vec![] }
    }

    /// A dataset whose columns are the [`MBTI_TYPES`].
    pub fn mbti() -> Self { Self::new(MBTI_TYPES) }

    pub fn labels(&self) -> &[String] { &self.labels }

    /// Append the row of `subject`.  `values` must have one entry per
    /// label; `None` marks a missing value.
    pub fn push_row(&mut self, subject: impl Into<String>,
                    values: Vec<Option<f64>>) -> Result<()> {
        let subject = subject.into();
        if values.len() != self.labels.len() {
            return Err(Error::RowLength { subject,
                                          expected: self.labels.len(),
                                          found: values.len() })
        }
        let row = Distribution::from_values(
            subject, self.labels.iter().cloned().zip(values));
        self.rows.push(row);
        Ok(())
    }

    /// The subjects, in insertion order.
    pub fn subjects(&self) -> impl Iterator<Item = &str> + '_ {
        self.rows.iter().map(|r| r.subject())
    }

    /// The first row with this subject.
    pub fn get(&self, subject: &str) -> Result<&Distribution> {
        self.rows.iter().find(|r| r.subject == subject)
            .ok_or_else(|| Error::UnknownSubject(subject.to_string()))
    }

    pub fn rows(&self) -> &[Distribution] { &self.rows }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn labels(v: &[Category]) -> Vec<&str> {
        v.iter().map(|c| c.label.as_str()).collect()
    }

    fn sample() -> Distribution {
        Distribution::new("Korea", vec![Category::new("INFJ", 0.02),
                                        Category::new("ISFJ", 0.12),
                                        Category::new("INTP", 0.05),
                                        Category::new("ESTJ", 0.12)])
    }

    #[test]
    fn missing_values_become_zero() {
        let d = Distribution::from_values(
            "X", [("a", Some(0.4)), ("b", None), ("c", Some(f64::NAN))]);
        let r: Vec<_> = d.categories().iter().map(|c| c.ratio).collect();
        assert_eq!(r, vec![0.4, 0., 0.]);
        assert_eq!(d.subject(), "X");
    }

    #[test]
    fn descending_is_stable() {
        let d = sample();
        assert_eq!(labels(&d.sorted(SortOrder::Descending)),
                   ["ISFJ", "ESTJ", "INTP", "INFJ"]);
        assert_eq!(labels(&d.sorted(SortOrder::Original)),
                   ["INFJ", "ISFJ", "INTP", "ESTJ"]);
    }

    #[test]
    fn peak_and_top() {
        let d = sample();
        assert_eq!(d.peak().map(|c| c.label.as_str()), Some("ISFJ"));
        assert_eq!(labels(&d.top(SortOrder::Descending, 2)), ["ISFJ", "ESTJ"]);
        assert_eq!(d.top(SortOrder::Original, 10).len(), 4);
        assert!(Distribution::new("empty", vec![]).peak().is_none());
    }

    #[test]
    fn dataset_rows() {
        let mut ds = Dataset::new(["a", "b"]);
        assert!(ds.push_row("P", vec![Some(0.3), Some(0.7)]).is_ok());
        assert!(ds.push_row("Q", vec![None, Some(1.)]).is_ok());
        assert!(matches!(ds.push_row("R", vec![Some(1.)]),
                         Err(Error::RowLength { expected: 2, found: 1, .. })));
        assert_eq!(ds.subjects().collect::<Vec<_>>(), ["P", "Q"]);
        let q = ds.get("Q").map(|d| d.categories()[0].ratio).ok();
        assert_eq!(q, Some(0.));
        assert!(matches!(ds.get("Z"), Err(Error::UnknownSubject(s)) if s == "Z"));
    }

    #[test]
    fn labels_are_trimmed() {
        let mut ds = Dataset::new([" INFJ", "ENTP \t"]);
        assert_eq!(ds.labels(), ["INFJ", "ENTP"]);
        assert!(ds.push_row("P", vec![Some(0.5), Some(0.5)]).is_ok());
        let l = ds.get("P").map(|d| labels(d.categories())).ok();
        assert_eq!(l, Some(vec!["INFJ", "ENTP"]));
    }

    #[test]
    fn mbti_columns() {
        let ds = Dataset::mbti();
        assert_eq!(ds.labels().len(), 16);
        assert!(ds.rows().is_empty());
    }
}
