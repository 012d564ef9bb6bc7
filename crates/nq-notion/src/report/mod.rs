//! Page report for Notion.
//!
//! This module provides the [`PageReporter`] struct that runs the whole
//! read-and-append workflow against a [`NotionApi`]:
//!
//! 1. Retrieve the target page and render its properties
//! 2. Fetch the blocks of each configured child page
//! 3. Optionally append a labeled entry to the append-target child
//!
//! Every remote failure is logged and degraded to an empty section here;
//! nothing below this layer swallows errors.
//!
//! # Example
//!
//! ```no_run
//! use nq_config::ReportConfig;
//! use nq_notion::{Entry, NotionClient, PageReporter};
//! use std::time::Duration;
//!
//! let client = NotionClient::new(
//!     "https://api.notion.com/v1",
//!     "secret_token",
//!     "2022-06-28",
//!     Duration::from_secs(30),
//! );
//! let config = ReportConfig::default();
//! let reporter = PageReporter::new(&client, "page-id", &config);
//!
//! let entry = Entry {
//!     label: "2025-03-01".to_owned(),
//!     content: "Went hiking".to_owned(),
//! };
//! let report = reporter.run(Some(&entry), &mut |event| println!("{event:?}"));
//! ```

mod append;
mod fetch;
mod result;

pub use append::{AppendOptions, AppendOutcome, append_if_absent, create_block, label_exists};
pub use fetch::{fetch_blocks, last_non_empty_block};
pub use result::{ChildReport, Entry, PageSummary, Report, ReportEvent};

use nq_config::{ChildPageConfig, ReportConfig};
use tracing::{error, info};

use crate::api::NotionApi;
use crate::render::render_property;

/// Runs the page report workflow.
pub struct PageReporter<'a> {
    api: &'a dyn NotionApi,
    page_id: &'a str,
    config: &'a ReportConfig,
}

impl<'a> PageReporter<'a> {
    /// Create a new page reporter.
    #[must_use]
    pub fn new(api: &'a dyn NotionApi, page_id: &'a str, config: &'a ReportConfig) -> Self {
        Self {
            api,
            page_id,
            config,
        }
    }

    /// Run the full report.
    ///
    /// Steps run in order and each one degrades to an empty result on
    /// failure, so a later step always runs. `on_event` is called as each
    /// step starts or finishes, before the next remote call is made.
    pub fn run(
        &self,
        entry: Option<&Entry>,
        on_event: &mut dyn FnMut(ReportEvent<'_>),
    ) -> Report {
        let page = self.read_page();
        on_event(ReportEvent::Page(page.as_ref()));

        let mut children = Vec::with_capacity(self.config.children.len());
        for child in &self.config.children {
            on_event(ReportEvent::ChildStarted(child));
            let report = self.read_child(child);
            on_event(ReportEvent::ChildFetched(&report));
            children.push(report);
        }

        let append = entry.and_then(|entry| {
            let outcome = self.append_entry(entry, &children, on_event);
            on_event(ReportEvent::Appended(entry, outcome.as_ref()));
            outcome
        });

        Report {
            page,
            children,
            append,
        }
    }

    /// Retrieve the target page and render its properties.
    ///
    /// Returns `None` (after logging) when retrieval fails.
    pub fn read_page(&self) -> Option<PageSummary> {
        match self.api.retrieve_page(self.page_id) {
            Ok(page) => {
                let properties = page
                    .properties
                    .iter()
                    .map(|(name, property)| (name.clone(), render_property(&property.value)))
                    .collect();
                Some(PageSummary {
                    id: page.id,
                    url: page.url,
                    created_time: page.created_time,
                    last_edited_time: page.last_edited_time,
                    properties,
                })
            }
            Err(err) => {
                error!("Error occurred during page query: {:?}", err);
                None
            }
        }
    }

    /// Fetch the blocks of one child page.
    pub fn read_child(&self, child: &ChildPageConfig) -> ChildReport {
        info!("Retrieving content for child page: {}", child.title);
        ChildReport {
            title: child.title.clone(),
            page_id: child.page_id.clone(),
            blocks: fetch_blocks(self.api, &child.page_id),
        }
    }

    /// Append `entry` to the append-target child unless its label exists.
    ///
    /// `children` must contain the target's already fetched blocks.
    /// [`ReportEvent::Creating`] is emitted right before blocks are created.
    pub fn append_entry(
        &self,
        entry: &Entry,
        children: &[ChildReport],
        on_event: &mut dyn FnMut(ReportEvent<'_>),
    ) -> Option<AppendOutcome> {
        let target = self.config.append_target().and_then(|target| {
            children
                .iter()
                .find(|child| child.page_id == target.page_id)
        });
        let Some(target) = target else {
            error!(
                "Append target \"{}\" is not a configured child page",
                self.config.append_to
            );
            return None;
        };

        if !label_exists(&target.blocks, &entry.label) {
            on_event(ReportEvent::Creating(entry));
        }

        Some(append_if_absent(
            self.api,
            &target.page_id,
            &entry.label,
            &entry.content,
            &target.blocks,
            AppendOptions {
                add_at_top: self.config.add_at_top,
            },
        ))
    }
}
