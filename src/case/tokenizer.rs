use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Runs of whitespace, hyphens and underscores separate tokens. Whitespace is
    // the ECMAScript set: it includes U+FEFF and excludes U+0085.
    static ref SEPARATORS: Regex = Regex::new(
        r"[\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}\-_]+"
    )
    .unwrap();
    static ref NON_ALPHANUMERIC: Regex = Regex::new(r"[^a-zA-Z0-9]").unwrap();
}

/// Split `input` into its cleaned token sequence.
///
/// Tokens keep their original order and casing. Anything outside
/// `[a-zA-Z0-9]` is stripped, and tokens left empty by that are dropped, so
/// an empty or separator-only input yields no tokens at all.
pub fn tokenize(input: &str) -> Vec<String> {
    if input.is_empty() {
        return Vec::new();
    }

    let tokens: Vec<String> = SEPARATORS
        .split(input)
        .filter(|fragment| !fragment.is_empty())
        .map(clean_token)
        .filter(|token| !token.is_empty())
        .collect();

    log::debug!("tokenized {:?} into {} tokens", input, tokens.len());
    tokens
}

/// Strip every character that is not an ASCII letter or digit.
pub fn clean_token(fragment: &str) -> String {
    NON_ALPHANUMERIC.replace_all(fragment, "").into_owned()
}
