//! GrabCAD Platform Adapter
//!
//! Public community API, no credentials. Counters are read from
//! `/community/api/v1/models/{id}`.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::adapters::{Platform, PlatformAdapter, PlatformProfile};
use crate::error::Result;
use crate::http::HttpClient;
use crate::metric::{MetricKind, ModelCounters};
use crate::text::encode_component;

pub const MODEL_PATH: &str = "/community/api/v1/models/";

pub static PROFILE: PlatformProfile = PlatformProfile {
    platform: Platform::GrabCad,
    display_label: "GrabCAD",
    color: "blue",
    named_logo: "grabcad",
    page_url_prefix: "https://grabcad.com/library/",
    likes_link_pair: true,
    formats: &[
        MetricKind::Url,
        MetricKind::Likes,
        MetricKind::Downloads,
        MetricKind::Comments,
    ],
    sample_id: "arduino-uno-r3-1",
    sample_counters,
};

fn sample_counters() -> ModelCounters {
    GrabCadModel {
        likes_count: Some(1586.0),
        downloads_count: Some(71486.0),
        comments_count: Some(174.0),
    }
    .into()
}

/// `/community/api/v1/models/{id}` response. All counters are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GrabCadModel {
    #[serde(default)]
    pub likes_count: Option<f64>,
    #[serde(default)]
    pub downloads_count: Option<f64>,
    #[serde(default)]
    pub comments_count: Option<f64>,
}

impl From<GrabCadModel> for ModelCounters {
    fn from(model: GrabCadModel) -> Self {
        ModelCounters {
            likes: model.likes_count,
            downloads: model.downloads_count,
            comments: model.comments_count,
            ..Default::default()
        }
    }
}

pub struct GrabCadAdapter {
    http: HttpClient,
    api_base: String,
}

impl GrabCadAdapter {
    pub fn new(http: HttpClient, api_base: &str) -> Self {
        Self {
            http,
            api_base: api_base.to_string(),
        }
    }

    pub fn model_url(&self, id: &str) -> String {
        format!("{}{}{}", self.api_base, MODEL_PATH, encode_component(id))
    }
}

#[async_trait]
impl PlatformAdapter for GrabCadAdapter {
    fn profile(&self) -> &'static PlatformProfile {
        &PROFILE
    }

    async fn fetch(&self, id: &str) -> Result<ModelCounters> {
        debug!(platform = "grabcad", id, "fetching model counters");
        let model: GrabCadModel = self.http.get_json(&self.model_url(id), None).await?;
        Ok(model.into())
    }
}
