//! Tooltip loading and resolution service for the charcycle diagram viewer.
//!
//! The viewer's UI components hand this crate an icon asset path and the
//! active system view; they get back either renderable tooltip content or
//! `None` ("no tooltip available"). The library document is fetched once
//! from its static source and cached for the lifetime of the service.

mod config;
mod error;
mod service;

pub use config::TooltipSourceConfig;
pub use error::{TooltipError, TooltipResult};
pub use service::TooltipService;
