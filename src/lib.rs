//! Badge adapters for models hosted on GrabCAD, Printables and Thingiverse.
//!
//! Each request fetches one model's counters from the platform API and
//! renders them into a [`badge::BadgeDescriptor`].

pub mod adapters;
pub mod badge;
pub mod config;
pub mod error;
pub mod http;
pub mod metric;
pub mod server;
pub mod service;
pub mod text;

pub use adapters::{Platform, PlatformAdapter, PlatformProfile};
pub use badge::{BadgeDescriptor, BadgeLink};
pub use config::ServiceConfig;
pub use error::{BadgeError, Result};
pub use metric::{MetricKind, ModelCounters};
pub use service::{BadgeRequest, BadgeService};
