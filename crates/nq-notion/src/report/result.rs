//! Report result types.

use nq_config::ChildPageConfig;

use crate::types::Block;

use super::append::AppendOutcome;
use super::fetch::last_non_empty_block;

/// Rendered page metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSummary {
    /// Page ID.
    pub id: String,
    /// Page URL.
    pub url: String,
    /// Creation timestamp.
    pub created_time: String,
    /// Last edit timestamp.
    pub last_edited_time: String,
    /// `(name, rendered value)` pairs in API order.
    pub properties: Vec<(String, String)>,
}

/// Blocks of one child page.
#[derive(Debug, Clone)]
pub struct ChildReport {
    /// Display title.
    pub title: String,
    /// Notion page ID.
    pub page_id: String,
    /// Fetched blocks; empty when the fetch failed.
    pub blocks: Vec<Block>,
}

impl ChildReport {
    /// Last non-empty block with its index.
    #[must_use]
    pub fn last_block(&self) -> Option<(usize, &Block)> {
        last_non_empty_block(&self.blocks)
    }
}

/// Labeled entry to append: a label paragraph above a content paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Label, e.g. a date. Also the key for the existence check.
    pub label: String,
    /// Content text.
    pub content: String,
}

impl Entry {
    /// Entry from positional arguments; `None` unless at least two are given.
    #[must_use]
    pub fn from_args(args: &[String]) -> Option<Self> {
        match args {
            [label, content, ..] => Some(Self {
                label: label.clone(),
                content: content.clone(),
            }),
            _ => None,
        }
    }
}

/// Result of a full report run.
#[derive(Debug)]
pub struct Report {
    /// Target page, `None` when retrieval failed.
    pub page: Option<PageSummary>,
    /// Child pages in configured order.
    pub children: Vec<ChildReport>,
    /// Append outcome, `None` when no entry was given.
    pub append: Option<AppendOutcome>,
}

/// Progress of a report run, in the order steps happen.
#[derive(Debug)]
pub enum ReportEvent<'r> {
    /// Page retrieval finished; `None` when it failed.
    Page(Option<&'r PageSummary>),
    /// A child page is about to be fetched.
    ChildStarted(&'r ChildPageConfig),
    /// A child page's blocks were fetched.
    ChildFetched(&'r ChildReport),
    /// The entry's label is absent and its blocks are about to be created.
    Creating(&'r Entry),
    /// Append step finished; `None` when the target is not configured.
    Appended(&'r Entry, Option<&'r AppendOutcome>),
}
