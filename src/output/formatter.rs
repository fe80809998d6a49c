/// Joins the candidates that contain `filter` (case-insensitively), writing
/// `delimiter` after every kept entry, the last one included.
pub fn format_candidates(candidates: &[String], filter: &str, delimiter: &str) -> String {
    let filter = filter.to_lowercase();

    candidates
        .iter()
        .filter(|candidate| candidate.to_lowercase().contains(&filter))
        .fold(String::new(), |mut output, candidate| {
            output.push_str(candidate);
            output.push_str(delimiter);
            output
        })
}
