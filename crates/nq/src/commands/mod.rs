//! CLI command implementations.

pub(crate) mod report;

pub(crate) use report::ReportArgs;
