//! Level name display helpers

const TIERS: [&str; 3] = ["easy", "medium", "hard"];

/// Strip a leading `"<Tier> <numeral> - "` prefix from a level name.
///
/// The tier is matched without regard to case and the numeral may be roman
/// (`IVX`) or decimal. Names without such a prefix come back trimmed.
pub fn display_name(name: &str) -> &str {
    strip_prefix(name).unwrap_or(name).trim()
}

fn strip_prefix(name: &str) -> Option<&str> {
    let tier = TIERS.iter().find(|t| {
        name.get(..t.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(t))
    })?;
    let rest = name[tier.len()..].trim_start();

    let numeral_len = rest
        .find(|c: char| !matches!(c.to_ascii_uppercase(), 'I' | 'V' | 'X' | '0'..='9'))
        .unwrap_or(rest.len());
    if numeral_len == 0 {
        return None;
    }

    let rest = rest[numeral_len..].trim_start();
    let rest = rest.strip_prefix('-')?;
    Some(rest.trim_start())
}
