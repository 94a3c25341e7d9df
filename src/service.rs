//! Generic adapter engine: validate the request, fetch once, render.

use std::str::FromStr;

use serde::Serialize;
use tracing::{debug, warn};

use crate::adapters::{
    Example, GrabCadAdapter, Platform, PlatformAdapter, PrintablesAdapter, ThingiverseAdapter,
};
use crate::badge::BadgeDescriptor;
use crate::config::ServiceConfig;
use crate::error::{BadgeError, Result};
use crate::http::HttpClient;
use crate::metric::{MetricKind, ModelCounters};
use strum::VariantArray;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadgeRequest {
    pub platform: Platform,
    pub metric: MetricKind,
    pub id: String,
}

impl BadgeRequest {
    pub fn new(platform: Platform, metric: MetricKind, id: &str) -> Self {
        Self {
            platform,
            metric,
            id: id.to_string(),
        }
    }

    /// Parse raw route tokens. The format must be one the platform offers.
    pub fn parse(platform: &str, format: &str, id: &str) -> Result<Self> {
        let platform = Platform::from_str(platform)
            .map_err(|_| BadgeError::InvalidParameter(format!("unknown platform: {}", platform)))?;
        let metric = MetricKind::from_str(format)
            .map_err(|_| BadgeError::InvalidParameter(format!("unknown format: {}", format)))?;
        if !platform.profile().supports(metric) {
            return Err(BadgeError::InvalidParameter(format!(
                "{} does not offer {}",
                platform, metric
            )));
        }
        Ok(Self::new(platform, metric, id))
    }
}

pub struct BadgeService {
    config: ServiceConfig,
    grabcad: GrabCadAdapter,
    printables: PrintablesAdapter,
    thingiverse: ThingiverseAdapter,
}

impl BadgeService {
    pub fn new(config: ServiceConfig) -> Result<Self> {
        let http = HttpClient::with_timeout(Some(config.http_timeout_secs))?;
        Ok(Self {
            grabcad: GrabCadAdapter::new(http.clone(), &config.grabcad_api_base),
            printables: PrintablesAdapter::new(http.clone(), &config.printables_api_base),
            thingiverse: ThingiverseAdapter::new(
                http,
                &config.thingiverse_api_base,
                config.thingiverse_token.as_deref(),
            ),
            config,
        })
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub fn adapter(&self, platform: Platform) -> &dyn PlatformAdapter {
        match platform {
            Platform::GrabCad => &self.grabcad,
            Platform::Printables => &self.printables,
            Platform::Thingiverse => &self.thingiverse,
        }
    }

    pub async fn fetch(&self, platform: Platform, id: &str) -> Result<ModelCounters> {
        self.adapter(platform).fetch(id).await
    }

    /// Pure half of a request: counters in, descriptor out.
    pub fn render_counters(
        platform: Platform,
        metric: MetricKind,
        id: &str,
        counters: &ModelCounters,
    ) -> BadgeDescriptor {
        platform.profile().render(metric, id, counters)
    }

    /// Like [`BadgeService::render`] but hands fetch errors back to the caller.
    pub async fn try_render(&self, request: &BadgeRequest) -> Result<BadgeDescriptor> {
        let profile = request.platform.profile();
        if !profile.supports(request.metric) {
            return Err(BadgeError::InvalidParameter(format!(
                "{} does not offer {}",
                request.platform, request.metric
            )));
        }

        if request.metric == MetricKind::Url {
            return Ok(profile.render_url(&request.id));
        }

        let counters = self.fetch(request.platform, &request.id).await?;
        debug!(platform = %request.platform, metric = %request.metric, "rendering badge");
        Ok(Self::render_counters(
            request.platform,
            request.metric,
            &request.id,
            &counters,
        ))
    }

    /// Always produces a descriptor; failures become error badges.
    pub async fn render(&self, request: &BadgeRequest) -> BadgeDescriptor {
        match self.try_render(request).await {
            Ok(badge) => badge,
            Err(e) => {
                warn!(
                    platform = %request.platform,
                    metric = %request.metric,
                    error_code = e.code(),
                    "badge request failed: {}",
                    e
                );
                request.platform.profile().render_error(request.metric, &e)
            }
        }
    }

    pub fn examples() -> Vec<Example> {
        Platform::VARIANTS
            .iter()
            .flat_map(|platform| platform.profile().examples())
            .collect()
    }
}
