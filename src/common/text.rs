//! Small text transforms shared by the form layer and the JSON API.

/// Split a comma-separated input ("rust, web , ") into trimmed, non-empty
/// entries. This is how the tag inputs are submitted.
pub fn split_csv(input: &str) -> Vec<String> {
    split_on(input, ',')
}

/// Split a textarea with one entry per line (responsibilities, skills, ...).
pub fn split_lines(input: &str) -> Vec<String> {
    split_on(input, '\n')
}

fn split_on(input: &str, sep: char) -> Vec<String> {
    input
        .split(sep)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Case-insensitive substring match. An empty needle matches everything,
/// which is what an empty search box means.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Lenient numeric parse for salary/budget style inputs: blank and
/// unparseable values both become `None`.
pub fn parse_money(input: &str) -> Option<i64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<i64>().ok()
}

/// Parse an HTML `<input type="date">` value (ISO `YYYY-MM-DD`); blank or
/// malformed input becomes `None`.
pub fn parse_date(input: &str) -> Option<chrono::NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    chrono::NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}

/// Count how often each tag occurs across a set of tagged records.
/// Returns the counts sorted by frequency (then name, for stable display).
pub fn tally_tags<'a, I>(tag_lists: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a [String]>,
{
    let mut counts: std::collections::HashMap<&str, usize> = std::collections::HashMap::new();
    for tags in tag_lists {
        for tag in tags {
            *counts.entry(tag.as_str()).or_default() += 1;
        }
    }

    let mut tallied: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(tag, count)| (tag.to_string(), count))
        .collect();
    tallied.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    tallied
}
