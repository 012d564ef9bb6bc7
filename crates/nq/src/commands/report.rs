//! `nq [LABEL CONTENT]` command implementation.

use std::path::PathBuf;

use clap::Args;
use nq_config::{CliSettings, Config};
use nq_notion::render::render_block;
use nq_notion::{
    AppendOutcome, ChildReport, Entry, NotionClient, PageReporter, PageSummary, ReportEvent,
};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the report command.
#[derive(Args)]
pub(crate) struct ReportArgs {
    /// Entry label and content. With both, the entry is appended to the
    /// target child page unless the label already exists.
    /// Options must come before them; values may start with `-`.
    #[arg(value_name = "LABEL CONTENT", trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,

    /// Path to configuration file (default: auto-discover nq.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Notion integration token.
    #[arg(long, env = "NOTION_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// ID of the page to report on.
    #[arg(long, env = "NOTION_DATABASE_ID")]
    page_id: Option<String>,
}

impl ReportArgs {
    /// Entry to append, when at least two positional arguments are given.
    pub(crate) fn entry(&self) -> Option<Entry> {
        Entry::from_args(&self.args)
    }

    /// Execute the report command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is missing or invalid. Remote
    /// failures are logged and never returned.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let entry = self.entry();
        let cli_settings = CliSettings {
            api_key: self.api_key,
            page_id: self.page_id,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let credentials = config.require_notion()?;

        let client = NotionClient::from_config(&config.notion, credentials.api_key);
        let reporter = PageReporter::new(&client, credentials.page_id, &config.report);

        output.highlight("Starting Notion page query...");
        reporter.run(entry.as_ref(), &mut |event| print_event(output, &event));

        if entry.is_none() {
            print_usage(output);
        }

        Ok(())
    }
}

/// How a line is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Info,
    Success,
    Warning,
    Error,
}

fn print_event(output: &Output, event: &ReportEvent<'_>) {
    match event {
        ReportEvent::Page(Some(page)) => print_lines(output, &page_lines(page)),
        // Failure already logged
        ReportEvent::Page(None) | ReportEvent::Appended(_, None) => {}
        ReportEvent::ChildStarted(child) => {
            output.info(&format!(
                "\nRetrieving content for child page: {}...",
                child.title
            ));
        }
        ReportEvent::ChildFetched(child) => print_lines(output, &child_lines(child)),
        ReportEvent::Creating(entry) => {
            output.info(&format!("\nCreating {} block...", entry.label));
        }
        ReportEvent::Appended(entry, Some(outcome)) => {
            for (tone, line) in append_lines(entry, outcome) {
                match tone {
                    Tone::Info => output.info(&line),
                    Tone::Success => output.success(&line),
                    Tone::Warning => output.warning(&line),
                    Tone::Error => output.error(&line),
                }
            }
        }
    }
}

fn print_lines(output: &Output, lines: &[String]) {
    for line in lines {
        output.info(line);
    }
}

fn page_lines(page: &PageSummary) -> Vec<String> {
    let mut lines = vec![
        "Page query successful!".to_owned(),
        String::new(),
        "=== Page Information ===".to_owned(),
        format!("ID: {}", page.id),
        format!("URL: {}", page.url),
        format!("Created time: {}", page.created_time),
        format!("Last edited time: {}", page.last_edited_time),
        String::new(),
        "Properties:".to_owned(),
    ];
    lines.extend(
        page.properties
            .iter()
            .map(|(name, value)| format!("  - {name}: {value}")),
    );
    lines
}

/// Lines printed once a child page's blocks are fetched.
fn child_lines(child: &ChildReport) -> Vec<String> {
    match child.last_block() {
        Some((index, block)) => {
            let mut lines = vec![
                String::new(),
                format!("=== {} Last Non-Empty Block ===", child.title),
                String::new(),
                format!("[Block {}] Type: {}", index + 1, block.type_name()),
            ];
            lines.extend(render_block(block));
            lines
        }
        None => vec![
            String::new(),
            format!("No non-empty blocks found in {} page.", child.title),
        ],
    }
}

fn append_lines(entry: &Entry, outcome: &AppendOutcome) -> Vec<(Tone, String)> {
    match outcome {
        AppendOutcome::AlreadyExists => vec![(
            Tone::Warning,
            format!(
                "\n{} block already exists. Not creating a new block.",
                entry.label
            ),
        )],
        AppendOutcome::Created { content, label } => {
            let mut lines = Vec::new();
            if content.is_some() {
                lines.push((
                    Tone::Info,
                    format!("New block created with content: \"{}\"", entry.content),
                ));
            }
            if label.is_some() {
                lines.push((
                    Tone::Info,
                    format!("New block created with content: \"{}\"", entry.label),
                ));
            }
            if content.is_some() && label.is_some() {
                lines.push((Tone::Success, "New block created successfully!".to_owned()));
            } else {
                lines.push((
                    Tone::Error,
                    "Some blocks could not be created; see the errors above.".to_owned(),
                ));
            }
            lines
        }
    }
}

fn print_usage(output: &Output) {
    output.info("\nTo create a new block, use the following command:");
    output.info(r#"nq "[date]" "block content""#);
}

#[cfg(test)]
mod tests {
    use nq_notion::types::{Block, BlockKind, BlockList, TextBlock};
    use pretty_assertions::assert_eq;

    use super::*;

    fn child(blocks: Vec<Block>) -> ChildReport {
        ChildReport {
            title: "March".to_owned(),
            page_id: "march".to_owned(),
            blocks,
        }
    }

    #[test]
    fn test_page_lines() {
        let page = PageSummary {
            id: "p1".to_owned(),
            url: "https://www.notion.so/p1".to_owned(),
            created_time: "2025-01-01T00:00:00.000Z".to_owned(),
            last_edited_time: "2025-03-01T00:00:00.000Z".to_owned(),
            properties: vec![("Name".to_owned(), "Journal".to_owned())],
        };

        let lines = page_lines(&page);

        assert_eq!(lines[2], "=== Page Information ===");
        assert_eq!(lines[3], "ID: p1");
        assert_eq!(lines.last().unwrap(), "  - Name: Journal");
    }

    #[test]
    fn test_child_lines_with_last_block() {
        let report = child(vec![
            Block::new("a", BlockKind::Heading1(TextBlock::plain("Week 1"))),
            Block::new("b", BlockKind::Paragraph(TextBlock::plain(" "))),
        ]);

        assert_eq!(
            child_lines(&report),
            vec![
                "",
                "=== March Last Non-Empty Block ===",
                "",
                "[Block 1] Type: heading_1",
                "Heading 1: Week 1",
            ]
        );
    }

    #[test]
    fn test_child_lines_without_blocks() {
        assert_eq!(
            child_lines(&child(vec![])),
            vec![
                "",
                "No non-empty blocks found in March page.",
            ]
        );
    }

    fn entry() -> Entry {
        Entry {
            label: "2025-03-01".to_owned(),
            content: "Went hiking".to_owned(),
        }
    }

    fn created() -> Option<BlockList> {
        Some(BlockList {
            results: vec![],
            next_cursor: None,
            has_more: false,
        })
    }

    #[test]
    fn test_append_lines_already_exists() {
        assert_eq!(
            append_lines(&entry(), &AppendOutcome::AlreadyExists),
            vec![(
                Tone::Warning,
                "\n2025-03-01 block already exists. Not creating a new block.".to_owned()
            )]
        );
    }

    #[test]
    fn test_append_lines_created() {
        let outcome = AppendOutcome::Created {
            content: created(),
            label: created(),
        };

        assert_eq!(
            append_lines(&entry(), &outcome),
            vec![
                (
                    Tone::Info,
                    "New block created with content: \"Went hiking\"".to_owned()
                ),
                (
                    Tone::Info,
                    "New block created with content: \"2025-03-01\"".to_owned()
                ),
                (Tone::Success, "New block created successfully!".to_owned()),
            ]
        );
    }

    #[test]
    fn test_append_lines_label_failed() {
        let outcome = AppendOutcome::Created {
            content: created(),
            label: None,
        };

        assert_eq!(
            append_lines(&entry(), &outcome),
            vec![
                (
                    Tone::Info,
                    "New block created with content: \"Went hiking\"".to_owned()
                ),
                (
                    Tone::Error,
                    "Some blocks could not be created; see the errors above.".to_owned()
                ),
            ]
        );
    }
}
