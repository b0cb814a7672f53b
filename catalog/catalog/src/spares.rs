use bicycle::part::Part;

/// Selects the parts to carry as spares.
///
/// Returns the subsequence of parts that need a spare, preserving order and duplicates.
/// The input is left unmodified.
pub fn select_spares(parts: &[Part]) -> Vec<Part> {
    parts
        .iter()
        .filter(|&part| part.needs_spare)
        .cloned()
        .collect()
}
