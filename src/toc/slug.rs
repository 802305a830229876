//! Anchor slug generation for TOC links

/// Convert heading text into the anchor used by a TOC link.
///
/// The text is lowercased, then: `&` becomes `--`, a space becomes `-`
/// unless it touches an `&`, ASCII letters, digits and hyphens are kept,
/// and everything else is dropped.
///
/// # Examples
/// ```
/// assert_eq!(mdtoc::slugify("Getting & Started"), "getting--started");
/// assert_eq!(mdtoc::slugify("API Reference!"), "api-reference");
/// ```
pub fn slugify(heading: &str) -> String {
    let chars: Vec<char> = heading.to_lowercase().chars().collect();
    let mut slug = String::with_capacity(chars.len());

    for (i, &c) in chars.iter().enumerate() {
        match c {
            '&' => slug.push_str("--"),
            ' ' => {
                let prev = i.checked_sub(1).and_then(|p| chars.get(p));
                let next = chars.get(i + 1);
                if prev != Some(&'&') && next != Some(&'&') {
                    slug.push('-');
                }
            }
            '-' => slug.push('-'),
            c if c.is_ascii_lowercase() || c.is_ascii_digit() => slug.push(c),
            _ => {}
        }
    }

    slug
}
