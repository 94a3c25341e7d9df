//! Metric kinds and the counters they are rendered from.

use serde::Serialize;
use strum::{Display, EnumString, IntoStaticStr, VariantArray};

use crate::text::{fixed_one, metric, star_rating, title_case, UNDEFINED_MESSAGE};

/// A countable attribute a platform adapter can render.
///
/// The route token is the lower-case variant name (`"likes"`, `"url"`, ...).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Display,
    EnumString,
    IntoStaticStr,
    VariantArray,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MetricKind {
    Url,
    Likes,
    Downloads,
    Comments,
    Rating,
    Stars,
    Makes,
    Views,
    Collections,
    Collects,
    Remixes,
}

impl MetricKind {
    pub fn token(self) -> &'static str {
        self.into()
    }

    /// Title-cased token. Platforms may override the label for `url`.
    pub fn label(self) -> String {
        title_case(self.token())
    }

    /// Badge message for this metric.
    ///
    /// Absent counters render as `"undefined"`; a zero rating count renders
    /// rating kinds as `"unrated"`.
    pub fn render_message(self, counters: &ModelCounters) -> String {
        match self {
            MetricKind::Url => String::new(),
            MetricKind::Rating => render_rating(counters, |avg, count| {
                format!("{}/5 ({})", fixed_one(avg), metric(Some(count)))
            }),
            MetricKind::Stars => render_rating(counters, |avg, _| star_rating(avg)),
            counter => metric(counters.counter(counter)),
        }
    }
}

fn render_rating(counters: &ModelCounters, render: impl FnOnce(f64, f64) -> String) -> String {
    match (counters.rating_avg, counters.rating_count) {
        (_, Some(count)) if count == 0.0 => "unrated".to_string(),
        (Some(avg), Some(count)) => render(avg, count),
        _ => UNDEFINED_MESSAGE.to_string(),
    }
}

/// Counters fetched for one model. Every field is optional: the upstream
/// schemas only enforce types.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ModelCounters {
    pub likes: Option<f64>,
    pub downloads: Option<f64>,
    pub comments: Option<f64>,
    pub views: Option<f64>,
    pub makes: Option<f64>,
    pub remixes: Option<f64>,
    pub collections: Option<f64>,
    pub collects: Option<f64>,
    pub shares: Option<f64>,
    pub rating_avg: Option<f64>,
    pub rating_count: Option<f64>,
}

impl ModelCounters {
    /// The counter backing a plain numeric metric.
    pub fn counter(&self, kind: MetricKind) -> Option<f64> {
        match kind {
            MetricKind::Likes => self.likes,
            MetricKind::Downloads => self.downloads,
            MetricKind::Comments => self.comments,
            MetricKind::Views => self.views,
            MetricKind::Makes => self.makes,
            MetricKind::Remixes => self.remixes,
            MetricKind::Collections => self.collections,
            MetricKind::Collects => self.collects,
            MetricKind::Rating | MetricKind::Stars => self.rating_count,
            MetricKind::Url => None,
        }
    }
}
