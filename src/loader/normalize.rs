use crate::constants::{CASE_PREFIX, TICKET_PREFIX};

/// Convert a ticket folder name into its case folder name.
///
/// Ticket numbers (anything starting with `CE` once trimmed and uppercased)
/// are kept verbatim: `" ce00064372 "` becomes `case-CE00064372`. Every other
/// name is slugified: spaces and underscores become hyphens, anything that is
/// not alphanumeric or a hyphen is dropped and the result is lowercased, so
/// `"Weird Name_123!"` becomes `case-weird-name123`.
///
/// The mapping is not injective; callers that care about two folders landing
/// in the same case must track that themselves.
pub fn normalize_case_name(name: &str) -> String {
    let clean = name.trim().to_uppercase();

    if clean.starts_with(TICKET_PREFIX) {
        return format!("{}{}", CASE_PREFIX, clean);
    }

    let slug: String = clean
        .chars()
        .map(|c| if c == ' ' || c == '_' { '-' } else { c })
        .filter(|c| c.is_alphanumeric() || *c == '-')
        .collect::<String>()
        .to_lowercase();

    format!("{}{}", CASE_PREFIX, slug)
}
