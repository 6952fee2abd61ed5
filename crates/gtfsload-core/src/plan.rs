//! Batch test-plan construction for the harness's upload and fetch runs.
//!
//! The harness's batch mode reads a CSV of GTFS feeds to load into the
//! target API, one row per archive: either a local zip to upload or a public
//! URL for the API to fetch. Header text and column meaning are the
//! harness's contract, like the double-encoded fixture variables.

use std::path::Path;

use crate::error::Result;

/// Column header the harness's batch test plan expects, verbatim.
pub const HEADER: [&str; 3] = ["project name", "fetch or upload", "file or http address"];

/// How the harness should acquire each feed archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanMode {
    /// Post local archives to the target API.
    Upload,
    /// Have the target API fetch each archive from its public URL.
    Fetch,
}

impl PlanMode {
    /// Value written into the CSV's mode column.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            PlanMode::Upload => "upload",
            PlanMode::Fetch => "fetch",
        }
    }
}

impl std::fmt::Display for PlanMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the batch plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchEntry {
    /// Project the harness creates for this feed (the zip stem).
    pub project: String,
    /// Mode column value.
    pub mode: PlanMode,
    /// Local path or public URL of the archive.
    pub location: String,
}

/// Ordered batch plan: the rows behind the harness's batch CSV.
#[derive(Debug, Clone)]
pub struct BatchPlan {
    entries: Vec<BatchEntry>,
}

impl BatchPlan {
    /// Plan that uploads local archives out of `feeds_dir`.
    #[must_use]
    pub fn upload(feeds_dir: &Path, names: &[String]) -> Self {
        let entries = names
            .iter()
            .map(|name| BatchEntry {
                project: project_name(name),
                mode: PlanMode::Upload,
                location: feeds_dir.join(name).display().to_string(),
            })
            .collect();
        Self { entries }
    }

    /// Plan that points the target API at public bucket URLs.
    #[must_use]
    pub fn fetch(bucket: &str, names: &[String]) -> Self {
        let entries = names
            .iter()
            .map(|name| BatchEntry {
                project: project_name(name),
                mode: PlanMode::Fetch,
                location: format!("https://{bucket}.s3.amazonaws.com/{name}"),
            })
            .collect();
        Self { entries }
    }

    /// Rows in output order.
    #[must_use]
    pub fn entries(&self) -> &[BatchEntry] {
        &self.entries
    }

    /// True when no feed archives went into the plan.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of feeds in the plan.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Lists accepted feed archives in `dir`, sorted by filename.
///
/// Only regular files whose name passes [`is_feed_archive`] are taken;
/// everything else is skipped with a debug log. Sorting keeps plan output
/// deterministic across platforms and directory orderings.
///
/// # Errors
///
/// Returns an error if the directory cannot be read.
pub fn scan_feeds_dir(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if is_feed_archive(name) {
            names.push(name.to_string());
        } else {
            tracing::debug!("Skipping non-archive entry: {name}");
        }
    }
    names.sort();
    Ok(names)
}

/// Archive name filter: word characters and hyphens followed by `.zip`.
///
/// Batch feeds follow this naming convention; anything looser (spaces,
/// dots, non-ASCII) is not a feed the harness can name a project after.
#[must_use]
pub fn is_feed_archive(name: &str) -> bool {
    let Some(stem) = name.strip_suffix(".zip") else {
        return false;
    };
    !stem.is_empty()
        && stem
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

fn project_name(archive: &str) -> String {
    archive.strip_suffix(".zip").unwrap_or(archive).to_string()
}
