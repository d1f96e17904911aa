//! Deterministic, length-preserving masks for sensitive values.

const MASK: char = '*';

/// Masks the local part of an email address, keeping the domain.
///
/// Local parts of one or two characters are masked entirely; longer ones keep
/// their first and last character.
///
/// ```
/// use extractor::domain::masking::mask_email;
///
/// assert_eq!(mask_email("jane.doe@example.com"), "j******e@example.com");
/// assert_eq!(mask_email("jo@x.com"), "**@x.com");
/// ```
pub fn mask_email(email: &str) -> String {
    let Some((local, domain)) = email.split_once('@') else {
        return mask_all(email);
    };

    let chars: Vec<char> = local.chars().collect();
    let masked_local = match chars.as_slice() {
        [first, middle @ .., last] if chars.len() > 2 => {
            let mut out = String::with_capacity(local.len());
            out.push(*first);
            out.extend(std::iter::repeat(MASK).take(middle.len()));
            out.push(*last);
            out
        }
        _ => mask_all(local),
    };

    format!("{}@{}", masked_local, domain)
}

/// Replaces all but the last four characters with `*`.
pub fn mask_card(digits: &str) -> String {
    let count = digits.chars().count();
    let hidden = count.saturating_sub(4);
    std::iter::repeat(MASK)
        .take(hidden)
        .chain(digits.chars().skip(hidden))
        .collect()
}

/// The trailing four characters, shown in clear next to a masked card.
pub fn last_four(digits: &str) -> String {
    let count = digits.chars().count();
    digits.chars().skip(count.saturating_sub(4)).collect()
}

fn mask_all(s: &str) -> String {
    std::iter::repeat(MASK).take(s.chars().count()).collect()
}
