//! Printables Platform Adapter
//!
//! Counters come from the public GraphQL endpoint in a single `print(id)`
//! query, whatever format was requested.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::adapters::{Platform, PlatformAdapter, PlatformProfile};
use crate::error::{BadgeError, Result};
use crate::http::HttpClient;
use crate::metric::{MetricKind, ModelCounters};

pub const GRAPHQL_PATH: &str = "/graphql/";

pub const PRINT_QUERY: &str = r#"query ($id: ID!) {
  print(id: $id) {
    ratingAvg
    ratingCount
    shareCount
    likesCount
    makesCount
    downloadCount
    displayCount
    collectionsCount
    commentCount
    remixCount
  }
}"#;

pub static PROFILE: PlatformProfile = PlatformProfile {
    platform: Platform::Printables,
    display_label: "Printables",
    color: "orange",
    named_logo: "printables",
    page_url_prefix: "https://printables.com/model/",
    likes_link_pair: false,
    formats: &[
        MetricKind::Url,
        MetricKind::Rating,
        MetricKind::Stars,
        MetricKind::Likes,
        MetricKind::Makes,
        MetricKind::Downloads,
        MetricKind::Views,
        MetricKind::Collections,
        MetricKind::Comments,
        MetricKind::Remixes,
    ],
    sample_id: "3161",
    sample_counters,
};

fn sample_counters() -> ModelCounters {
    ModelCounters {
        rating_avg: Some(4.96),
        rating_count: Some(750.0),
        likes: Some(2774.0),
        makes: Some(2149.0),
        downloads: Some(42439.0),
        views: Some(71458.0),
        collections: Some(1443.0),
        comments: Some(2333.0),
        remixes: Some(56.0),
        ..Default::default()
    }
}

#[derive(Debug, Serialize)]
struct GraphqlRequest<'a> {
    query: &'static str,
    variables: PrintVariables<'a>,
}

#[derive(Debug, Serialize)]
struct PrintVariables<'a> {
    id: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct GraphqlResponse<T> {
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Option<Vec<GraphqlError>>,
}

#[derive(Debug, Deserialize)]
pub struct GraphqlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct PrintData {
    #[serde(default)]
    pub print: Option<PrintablesPrint>,
}

/// `print(id)` selection set. `ratingAvg` is a decimal string upstream.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintablesPrint {
    #[serde(default)]
    pub rating_avg: Option<String>,
    #[serde(default)]
    pub rating_count: Option<f64>,
    #[serde(default)]
    pub share_count: Option<f64>,
    #[serde(default)]
    pub likes_count: Option<f64>,
    #[serde(default)]
    pub makes_count: Option<f64>,
    #[serde(default)]
    pub download_count: Option<f64>,
    #[serde(default)]
    pub display_count: Option<f64>,
    #[serde(default)]
    pub collections_count: Option<f64>,
    #[serde(default)]
    pub comment_count: Option<f64>,
    #[serde(default)]
    pub remix_count: Option<f64>,
}

impl PrintablesPrint {
    pub fn into_counters(self) -> Result<ModelCounters> {
        let rating_avg = match self.rating_avg.as_deref().map(str::trim) {
            Some(raw) => Some(raw.parse::<f64>().map_err(|_| {
                BadgeError::SchemaViolation(format!("ratingAvg is not a number: {}", raw))
            })?),
            None => None,
        };

        Ok(ModelCounters {
            rating_avg,
            rating_count: self.rating_count,
            shares: self.share_count,
            likes: self.likes_count,
            makes: self.makes_count,
            downloads: self.download_count,
            views: self.display_count,
            collections: self.collections_count,
            comments: self.comment_count,
            remixes: self.remix_count,
            ..Default::default()
        })
    }
}

/// Unwrap a GraphQL envelope: upstream errors first, then a missing print.
pub fn extract_print(response: GraphqlResponse<PrintData>) -> Result<PrintablesPrint> {
    if let Some(first) = response.errors.as_ref().and_then(|errors| errors.first()) {
        return Err(BadgeError::InvalidResponse(first.message.clone()));
    }

    let data = response
        .data
        .ok_or_else(|| BadgeError::SchemaViolation("missing data".to_string()))?;
    data.print.ok_or(BadgeError::NotFound)
}

pub struct PrintablesAdapter {
    http: HttpClient,
    api_base: String,
}

impl PrintablesAdapter {
    pub fn new(http: HttpClient, api_base: &str) -> Self {
        Self {
            http,
            api_base: api_base.to_string(),
        }
    }

    pub fn graphql_url(&self) -> String {
        format!("{}{}", self.api_base, GRAPHQL_PATH)
    }
}

#[async_trait]
impl PlatformAdapter for PrintablesAdapter {
    fn profile(&self) -> &'static PlatformProfile {
        &PROFILE
    }

    async fn fetch(&self, id: &str) -> Result<ModelCounters> {
        debug!(platform = "printables", id, "querying print counters");
        let request = GraphqlRequest {
            query: PRINT_QUERY,
            variables: PrintVariables { id },
        };
        let response: GraphqlResponse<PrintData> =
            self.http.post_json(&self.graphql_url(), &request).await?;
        extract_print(response)?.into_counters()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::badge::BadgeLink;
    use crate::http::parse_with_schema;

    fn parse(body: &str) -> Result<ModelCounters> {
        let response: GraphqlResponse<PrintData> = parse_with_schema(body)?;
        extract_print(response)?.into_counters()
    }

    #[test]
    fn test_print_maps_every_counter() {
        let counters = parse(
            r#"{"data":{"print":{
                "ratingAvg":"4.96","ratingCount":750,"shareCount":3,"likesCount":2774,
                "makesCount":2149,"downloadCount":42439,"displayCount":71458,
                "collectionsCount":1443,"commentCount":2333,"remixCount":56
            }}}"#,
        )
        .unwrap();
        assert_eq!(counters, ModelCounters { shares: Some(3.0), ..sample_counters() });
    }

    #[test]
    fn test_null_print_is_not_found() {
        assert!(matches!(parse(r#"{"data":{"print":null}}"#), Err(BadgeError::NotFound)));
    }

    #[test]
    fn test_graphql_errors_surface_first_message() {
        match parse(r#"{"errors":[{"message":"Invalid ID"},{"message":"other"}],"data":null}"#) {
            Err(BadgeError::InvalidResponse(msg)) => assert_eq!(msg, "Invalid ID"),
            other => panic!("expected InvalidResponse, got: {:?}", other),
        }
    }

    #[test]
    fn test_wrong_types_violate_schema() {
        assert!(matches!(
            parse(r#"{"data":{"print":{"likesCount":"lots"}}}"#),
            Err(BadgeError::SchemaViolation(_))
        ));
        assert!(matches!(
            parse(r#"{"data":{"print":{"ratingAvg":"n/a"}}}"#),
            Err(BadgeError::SchemaViolation(_))
        ));
        assert!(matches!(parse(r#"{}"#), Err(BadgeError::SchemaViolation(_))));
    }

    #[test]
    fn test_rating_formats() {
        let counters = sample_counters();
        let rating = PROFILE.render(MetricKind::Rating, "3161", &counters);
        assert_eq!(rating.label, "Rating");
        assert_eq!(rating.message, "5.0/5 (750)");
        assert_eq!(rating.color, "orange");

        let stars = PROFILE.render(MetricKind::Stars, "3161", &counters);
        assert_eq!(stars.message, "★★★★★");

        let unrated = ModelCounters {
            rating_count: Some(0.0),
            ..counters
        };
        assert_eq!(PROFILE.render(MetricKind::Rating, "3161", &unrated).message, "unrated");
        assert_eq!(PROFILE.render(MetricKind::Stars, "3161", &unrated).message, "unrated");
    }

    #[test]
    fn test_views_read_display_count_with_single_link() {
        let badge = PROFILE.render(MetricKind::Views, "3161", &sample_counters());
        assert_eq!(badge.label, "Views");
        assert_eq!(badge.message, "71k");
        assert_eq!(
            badge.link,
            Some(BadgeLink::Single("https://printables.com/model/3161".to_string()))
        );

        let likes = PROFILE.render(MetricKind::Likes, "3161", &sample_counters());
        assert!(matches!(likes.link, Some(BadgeLink::Single(_))));
    }

    #[test]
    fn test_url_badge() {
        let badge = PROFILE.render_url("3161");
        assert_eq!(badge.label, "Printables");
        assert_eq!(badge.message, "");
    }
}
