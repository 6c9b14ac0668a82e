/// Candidate list construction
///
/// A project's screenshots are declared loosely: numeric ranges that may
/// overshoot the files that actually exist, plus a few literal paths.
/// Every entry becomes a candidate; the resolver decides which are real.

use crate::state::data::{ImageSet, Project};

/// Expand one image set into `folder/prefix{i}.ext` paths, in order.
/// An inverted range expands to nothing.
pub fn expand_image_set(set: &ImageSet) -> impl Iterator<Item = String> + '_ {
    (set.start..=set.end).map(move |i| format!("{}/{}{}.{}", set.folder, set.prefix, i, set.ext))
}

/// Build the ordered candidate list: sets expanded in declaration order,
/// then the extra images appended. Duplicates are kept.
pub fn build_image_candidates(project: &Project) -> Vec<String> {
    project
        .image_sets
        .iter()
        .flat_map(expand_image_set)
        .chain(project.extra_images.iter().cloned())
        .collect()
}

/// Whether the project declares at least one candidate, without building the list
pub fn has_image_candidates(project: &Project) -> bool {
    !project.extra_images.is_empty() || project.image_sets.iter().any(|s| s.start <= s.end)
}
