/// Screenshot discovery
///
/// This module handles:
/// - Expanding a project's image sets into candidate paths (candidates.rs)
/// - Checking whether a candidate loads (probe.rs)
/// - Probing all candidates concurrently under a deadline (resolver.rs)

pub mod candidates;
pub mod probe;
pub mod resolver;

pub use candidates::{build_image_candidates, has_image_candidates};
pub use probe::SiteProbe;
pub use resolver::{resolve, OrderPolicy, ResolvedImage};
