use std::fs;
use std::path::Path;

use thiserror::Error;

pub const START_MARKER: &str = "<!-- AUTO-GENERATED-REPO-OVERVIEW:START -->";
pub const END_MARKER: &str = "<!-- AUTO-GENERATED-REPO-OVERVIEW:END -->";

#[derive(Debug, Error)]
pub enum SpliceOverviewError {
    #[error("MarkerMissing: {marker}")]
    MarkerMissing { marker: &'static str },

    #[error("MarkerDuplicated: {marker}")]
    MarkerDuplicated { marker: &'static str },

    #[error("End marker precedes start marker")]
    MarkersOutOfOrder,
}

/// Position of `marker` in `text`; the marker must occur exactly once.
fn find_marker(text: &str, marker: &'static str) -> Result<usize, SpliceOverviewError> {
    let mut positions = text.match_indices(marker).map(|(at, _)| at);

    let first = positions
        .next()
        .ok_or(SpliceOverviewError::MarkerMissing { marker })?;

    if positions.next().is_some() {
        return Err(SpliceOverviewError::MarkerDuplicated { marker });
    }

    Ok(first)
}

/// Replaces everything between the sentinel markers with `table`, keeping
/// the content outside the marker pair untouched.
pub fn splice_overview(current: &str, table: &str) -> Result<String, SpliceOverviewError> {
    let start = find_marker(current, START_MARKER)?;
    let end = find_marker(current, END_MARKER)?;

    if end < start {
        return Err(SpliceOverviewError::MarkersOutOfOrder);
    }

    let prefix = &current[..start];
    let suffix = &current[end + END_MARKER.len()..];

    Ok(format!(
        "{prefix}{START_MARKER}\n{table}\n{END_MARKER}{suffix}"
    ))
}

#[derive(Debug, Error)]
pub enum UpdateOverviewFileError {
    #[error("ReadOverviewFile: {source}")]
    ReadOverviewFile {
        #[source]
        source: std::io::Error,
    },

    #[error("SpliceOverview: {source}")]
    SpliceOverview {
        #[from]
        source: SpliceOverviewError,
    },

    #[error("WriteOverviewFile: {source}")]
    WriteOverviewFile {
        #[source]
        source: std::io::Error,
    },
}

/// Rewrites `path` in place with the spliced content. Nothing is written
/// unless the splice succeeded.
pub fn update_overview_file(path: &Path, table: &str) -> Result<(), UpdateOverviewFileError> {
    let current = fs::read_to_string(path)
        .map_err(|source| UpdateOverviewFileError::ReadOverviewFile { source })?;

    let spliced = splice_overview(&current, table)?;

    fs::write(path, spliced)
        .map_err(|source| UpdateOverviewFileError::WriteOverviewFile { source })?;

    Ok(())
}
