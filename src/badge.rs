//! Badge descriptors handed to the rendering layer.

use serde::Serialize;

use crate::error::BadgeError;

pub const SOCIAL_STYLE: &str = "social";
pub const ERROR_COLOR: &str = "red";
pub const INACTIVE_COLOR: &str = "lightgrey";

/// Either one link or an ordered list of links (left/right badge halves).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum BadgeLink {
    Single(String),
    Many(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeDescriptor {
    pub label: String,
    pub message: String,
    pub color: String,
    pub style: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub named_logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<BadgeLink>,
}

impl BadgeDescriptor {
    pub fn new(label: impl Into<String>, message: impl Into<String>, color: &str) -> Self {
        Self {
            label: label.into(),
            message: message.into(),
            color: color.to_string(),
            style: SOCIAL_STYLE.to_string(),
            named_logo: None,
            link: None,
        }
    }

    pub fn with_logo(mut self, logo: &str) -> Self {
        self.named_logo = Some(logo.to_string());
        self
    }

    pub fn with_link(mut self, link: BadgeLink) -> Self {
        self.link = Some(link);
        self
    }

    /// Static previews never carry links.
    pub fn sample(mut self) -> Self {
        self.link = None;
        self
    }

    /// Error badge: keeps the requested label, shows the error's pretty
    /// message and drops the link.
    pub fn from_error(label: impl Into<String>, named_logo: &str, err: &BadgeError) -> Self {
        let color = if err.is_user_error() {
            ERROR_COLOR
        } else {
            INACTIVE_COLOR
        };
        Self::new(label, err.pretty_message(), color).with_logo(named_logo)
    }
}
