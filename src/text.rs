//! Case folding and tokenization shared by matching and search.

const MIN_TOKEN_CHARS: usize = 2;

/// Lowercase `text`. Every case-insensitive comparison in the crate goes
/// through here.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
}

/// Split on whitespace, commas, semicolons and periods, keeping tokens of at
/// least two characters in their original order.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split(|c: char| c.is_whitespace() || matches!(c, ',' | ';' | '.'))
        .filter(|token| token.chars().count() >= MIN_TOKEN_CHARS)
        .collect()
}
