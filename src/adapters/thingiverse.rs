//! Thingiverse Platform Adapter
//!
//! The REST API only answers requests carrying an application bearer token,
//! so the adapter refuses to fetch when none is configured.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::adapters::{Platform, PlatformAdapter, PlatformProfile};
use crate::config::ENV_THINGIVERSE_TOKEN;
use crate::error::{BadgeError, Result};
use crate::http::HttpClient;
use crate::metric::{MetricKind, ModelCounters};
use crate::text::encode_component;

pub const THING_PATH: &str = "/things/";

pub static PROFILE: PlatformProfile = PlatformProfile {
    platform: Platform::Thingiverse,
    display_label: "Thingiverse",
    color: "blue",
    named_logo: "thingiverse",
    page_url_prefix: "https://thingiverse.com/thing:",
    likes_link_pair: true,
    formats: &[
        MetricKind::Url,
        MetricKind::Likes,
        MetricKind::Collects,
        MetricKind::Comments,
        MetricKind::Downloads,
        MetricKind::Views,
        MetricKind::Remixes,
        MetricKind::Makes,
    ],
    sample_id: "2738211",
    sample_counters,
};

fn sample_counters() -> ModelCounters {
    ThingiverseThing {
        like_count: Some(33139.0),
        collect_count: Some(47333.0),
        comment_count: Some(404.0),
        download_count: Some(349490.0),
        view_count: Some(619467.0),
        remix_count: Some(112.0),
        make_count: Some(1338.0),
        ..Default::default()
    }
    .into()
}

/// `/things/{thing}` response, restricted to the counters badges use.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThingiverseThing {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub like_count: Option<f64>,
    #[serde(default)]
    pub collect_count: Option<f64>,
    #[serde(default)]
    pub comment_count: Option<f64>,
    #[serde(default)]
    pub download_count: Option<f64>,
    #[serde(default)]
    pub view_count: Option<f64>,
    #[serde(default)]
    pub remix_count: Option<f64>,
    #[serde(default)]
    pub make_count: Option<f64>,
}

impl From<ThingiverseThing> for ModelCounters {
    fn from(thing: ThingiverseThing) -> Self {
        ModelCounters {
            likes: thing.like_count,
            collects: thing.collect_count,
            comments: thing.comment_count,
            downloads: thing.download_count,
            views: thing.view_count,
            remixes: thing.remix_count,
            makes: thing.make_count,
            ..Default::default()
        }
    }
}

pub struct ThingiverseAdapter {
    http: HttpClient,
    api_base: String,
    token: Option<String>,
}

impl ThingiverseAdapter {
    pub fn new(http: HttpClient, api_base: &str, token: Option<&str>) -> Self {
        Self {
            http,
            api_base: api_base.to_string(),
            token: token.map(|t| t.to_string()),
        }
    }

    pub fn thing_url(&self, thing: &str) -> String {
        format!("{}{}{}", self.api_base, THING_PATH, encode_component(thing))
    }

    pub fn is_configured(&self) -> bool {
        self.token.is_some()
    }
}

#[async_trait]
impl PlatformAdapter for ThingiverseAdapter {
    fn profile(&self) -> &'static PlatformProfile {
        &PROFILE
    }

    async fn fetch(&self, thing: &str) -> Result<ModelCounters> {
        let token = self
            .token
            .as_deref()
            .ok_or_else(|| BadgeError::NotConfigured(ENV_THINGIVERSE_TOKEN.to_string()))?;

        debug!(platform = "thingiverse", thing, "fetching thing counters");
        let model: ThingiverseThing = self.http.get_json(&self.thing_url(thing), Some(token)).await?;
        Ok(model.into())
    }
}
