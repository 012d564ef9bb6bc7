//! Notion integration for nq.
//!
//! This crate provides:
//! - [`NotionClient`]: REST API client with bearer token authentication
//! - [`NotionApi`]: the three remote operations nq uses, as a trait
//! - [`render`]: display strings for page properties and blocks
//! - [`PageReporter`](report::PageReporter): page report and entry append workflow
//!
//! # API Client
//!
//! ```ignore
//! use std::time::Duration;
//! use nq_notion::{NotionApi, NotionClient};
//!
//! let client = NotionClient::new(
//!     "https://api.notion.com/v1",
//!     "secret_token",
//!     "2022-06-28",
//!     Duration::from_secs(30),
//! );
//!
//! let page = client.retrieve_page("16d86b3a74e380a79f5fcf3b92b17235")?;
//! println!("Page URL: {}", page.url);
//! ```

// API client
mod api;
mod client;
pub use api::NotionApi;
pub use client::NotionClient;

// In-memory API for tests
#[cfg(test)]
mod mock;
#[cfg(test)]
pub use mock::{AppendCall, MockNotion, MockOperation};

// Rendering
pub mod render;

// Types
pub mod types;

// Page report workflow
pub mod report;
pub use report::{
    AppendOutcome, ChildReport, Entry, PageReporter, PageSummary, Report, ReportEvent,
};

// Errors
pub mod error;
pub use error::NotionError;
