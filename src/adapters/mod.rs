//! Platform Adapters
//!
//! Each platform is a static [`PlatformProfile`] (labels, colors, links,
//! supported formats, sample model) plus a [`PlatformAdapter`] that fetches
//! and validates the model counters. Rendering is shared and pure.

use async_trait::async_trait;
use serde::Serialize;
use strum::{Display, EnumString, IntoStaticStr, VariantArray};

use crate::badge::{BadgeDescriptor, BadgeLink};
use crate::error::{BadgeError, Result};
use crate::metric::{MetricKind, ModelCounters};
use crate::text::{encode_component, title_case};

pub mod grabcad;
pub mod printables;
pub mod thingiverse;

pub use grabcad::GrabCadAdapter;
pub use printables::PrintablesAdapter;
pub use thingiverse::ThingiverseAdapter;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString, IntoStaticStr, VariantArray,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Platform {
    GrabCad,
    Printables,
    Thingiverse,
}

impl Platform {
    pub fn profile(self) -> &'static PlatformProfile {
        match self {
            Platform::GrabCad => &grabcad::PROFILE,
            Platform::Printables => &printables::PROFILE,
            Platform::Thingiverse => &thingiverse::PROFILE,
        }
    }
}

/// Everything about a platform that does not need the network.
#[derive(Debug)]
pub struct PlatformProfile {
    pub platform: Platform,
    /// Label of the `url` badge.
    pub display_label: &'static str,
    pub color: &'static str,
    pub named_logo: &'static str,
    /// Canonical object page, the encoded id is appended.
    pub page_url_prefix: &'static str,
    /// Whether the `likes` badge links to both the page and its likes page.
    pub likes_link_pair: bool,
    pub formats: &'static [MetricKind],
    pub sample_id: &'static str,
    pub sample_counters: fn() -> ModelCounters,
}

/// Static preview of one route, rendered from the sample model.
#[derive(Debug, Clone, Serialize)]
pub struct Example {
    pub title: String,
    pub platform: Platform,
    pub format: MetricKind,
    pub id: String,
    pub preview: BadgeDescriptor,
}

impl PlatformProfile {
    pub fn supports(&self, kind: MetricKind) -> bool {
        self.formats.contains(&kind)
    }

    pub fn page_url(&self, id: &str) -> String {
        format!("{}{}", self.page_url_prefix, encode_component(id))
    }

    pub fn label(&self, kind: MetricKind) -> String {
        match kind {
            MetricKind::Url => self.display_label.to_string(),
            other => other.label(),
        }
    }

    pub fn link(&self, kind: MetricKind, id: &str) -> BadgeLink {
        let page = self.page_url(id);
        if kind == MetricKind::Likes && self.likes_link_pair {
            let likes = format!("{}/likes", page);
            BadgeLink::Many(vec![page, likes])
        } else {
            BadgeLink::Single(page)
        }
    }

    fn badge(&self, kind: MetricKind, message: String) -> BadgeDescriptor {
        BadgeDescriptor::new(self.label(kind), message, self.color).with_logo(self.named_logo)
    }

    /// Metric-less badge: empty message, link to the object page.
    pub fn render_url(&self, id: &str) -> BadgeDescriptor {
        self.badge(MetricKind::Url, String::new())
            .with_link(self.link(MetricKind::Url, id))
    }

    pub fn render(&self, kind: MetricKind, id: &str, counters: &ModelCounters) -> BadgeDescriptor {
        self.badge(kind, kind.render_message(counters))
            .with_link(self.link(kind, id))
    }

    pub fn render_error(&self, kind: MetricKind, err: &BadgeError) -> BadgeDescriptor {
        BadgeDescriptor::from_error(self.label(kind), self.named_logo, err)
    }

    pub fn examples(&self) -> Vec<Example> {
        let counters = (self.sample_counters)();
        self.formats
            .iter()
            .map(|&format| Example {
                title: format!("{} {}", self.display_label, title_case(format.token())),
                platform: self.platform,
                format,
                id: self.sample_id.to_string(),
                preview: self.render(format, self.sample_id, &counters).sample(),
            })
            .collect()
    }
}

/// Fetches the counters of one model from a platform API.
#[async_trait]
pub trait PlatformAdapter: Send + Sync {
    fn profile(&self) -> &'static PlatformProfile;

    /// One read-only request; the full counter set comes back whatever
    /// format was requested.
    async fn fetch(&self, id: &str) -> Result<ModelCounters>;
}
