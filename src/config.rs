/// Runtime settings for the viewer
///
/// Resolved once at startup from the command line and the usual data
/// locations. There is no settings file; the constants below are the
/// tuning knobs.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::images::resolver::OrderPolicy;

/// How long a card waits for its screenshot probes before rendering
/// whatever has loaded
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_millis(2500);

/// Horizontal drag distance (logical pixels) that turns a press into a swipe
pub const SWIPE_THRESHOLD: f32 = 50.0;

pub const DEFAULT_ORDER_POLICY: OrderPolicy = OrderPolicy::IndexPreserving;

/// Name of the data document looked up next to the site content
pub const PROJECTS_FILE_NAME: &str = "projects.json";

/// Where the project list comes from
#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    /// Bundled sample data compiled into the binary
    Embedded,
    /// A projects.json on disk, re-read on every load
    File(PathBuf),
}

impl DataSource {
    /// Directory that relative screenshot paths are resolved against
    pub fn site_root(&self) -> PathBuf {
        match self {
            DataSource::File(path) => path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from(".")),
            DataSource::Embedded => PathBuf::from("."),
        }
    }

    /// Human readable label for the status line
    pub fn describe(&self) -> String {
        match self {
            DataSource::File(path) => path.display().to_string(),
            DataSource::Embedded => "embedded sample data".to_string(),
        }
    }
}

/// Settings for one run of the viewer
#[derive(Debug, Clone)]
pub struct Settings {
    pub source: DataSource,
    pub probe_timeout: Duration,
    pub order_policy: OrderPolicy,
    pub swipe_threshold: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source: DataSource::Embedded,
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
            order_policy: DEFAULT_ORDER_POLICY,
            swipe_threshold: SWIPE_THRESHOLD,
        }
    }
}

impl Settings {
    /// Build settings from the process arguments (program name excluded).
    ///
    /// The first argument, if any, is the path to a projects.json.
    /// Otherwise the working directory and then the user data directory
    /// are searched, falling back to the embedded sample data.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let explicit = args.into_iter().next().map(PathBuf::from);
        let source = discover_source(explicit, &candidate_locations());

        Self {
            source,
            ..Self::default()
        }
    }
}

/// Default places a projects.json is looked for, in priority order
fn candidate_locations() -> Vec<PathBuf> {
    let mut locations = vec![PathBuf::from(PROJECTS_FILE_NAME)];

    if let Some(mut path) = dirs::data_dir() {
        path.push("portfolio-viewer");
        path.push(PROJECTS_FILE_NAME);
        locations.push(path);
    }

    locations
}

/// Pick the data source: an explicit path always wins (even if missing,
/// so the user sees the load error), then the first existing location.
fn discover_source(explicit: Option<PathBuf>, locations: &[PathBuf]) -> DataSource {
    if let Some(path) = explicit {
        return DataSource::File(path);
    }

    locations
        .iter()
        .find(|path| path.is_file())
        .cloned()
        .map(DataSource::File)
        .unwrap_or(DataSource::Embedded)
}
