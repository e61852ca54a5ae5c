//! Order resolution for project lists and image galleries.
//!
//! Both resolvers share the same contract: the caller's requested order is
//! honoured for entries that already exist, unknown entries are ignored, and
//! anything the caller left out is appended in its current relative order.
//! The output is therefore always a permutation of the current entries.

use std::collections::HashSet;

/// Deduplicate `values`, keeping the first occurrence of each entry.
pub fn unique_preserving_order<S: AsRef<str>>(values: &[S]) -> Vec<String> {
    let mut seen = HashSet::with_capacity(values.len());
    values
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}

/// Merge a requested order into the current one.
///
/// `current` must not contain duplicates. The result contains exactly the
/// entries of `current`: requested entries first (deduplicated, unknown ones
/// dropped), then the omitted ones in their original order.
pub fn resolve_order<S: AsRef<str>, R: AsRef<str>>(current: &[S], requested: &[R]) -> Vec<String> {
    let known: HashSet<&str> = current.iter().map(AsRef::<str>::as_ref).collect();

    let mut next: Vec<String> = unique_preserving_order(requested)
        .into_iter()
        .filter(|v| known.contains(v.as_str()))
        .collect();

    let placed: HashSet<String> = next.iter().cloned().collect();
    next.extend(
        current
            .iter()
            .map(AsRef::<str>::as_ref)
            .filter(|v| !placed.contains(*v))
            .map(str::to_string),
    );
    next
}

/// Resolve the next project order from a client-supplied id list.
pub fn resolve_project_order<S: AsRef<str>, R: AsRef<str>>(
    existing_ids: &[S],
    ordered_ids: &[R],
) -> Vec<String> {
    resolve_order(existing_ids, ordered_ids)
}

/// Resolve the next gallery order for one project.
///
/// Images the client sends that the project does not already have are
/// discarded; images the client omits are kept at the end.
pub fn resolve_image_order<S: AsRef<str>, R: AsRef<str>>(
    current_images: &[S],
    requested: &[R],
) -> Vec<String> {
    resolve_order(current_images, requested)
}
