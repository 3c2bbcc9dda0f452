//! `{{alias}}` token parsing.

/// Opening delimiter of an alias reference.
pub const TOKEN_OPEN: &str = "{{";

/// Closing delimiter of an alias reference.
pub const TOKEN_CLOSE: &str = "}}";

/// An alias reference located inside a path expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AliasToken<'a> {
    /// Alias name between the delimiters.
    pub name: &'a str,
    /// Text before the opening delimiter.
    pub prefix: &'a str,
    /// Text after the closing delimiter, normally `/rest`.
    pub suffix: &'a str,
}

/// Finds the first `{{name}}` reference in `expr`.
///
/// The name runs from the first `{{` up to the first `}}` that follows it.
/// Returns `None` when either delimiter is missing.
#[must_use]
pub fn find_token(expr: &str) -> Option<AliasToken<'_>> {
    let open = expr.find(TOKEN_OPEN)?;
    let name_start = open + TOKEN_OPEN.len();
    let close = name_start + expr[name_start..].find(TOKEN_CLOSE)?;

    Some(AliasToken {
        name: &expr[name_start..close],
        prefix: &expr[..open],
        suffix: &expr[close + TOKEN_CLOSE.len()..],
    })
}

/// Renders `{{name}}` for use at the head of a shortened path.
#[must_use]
pub fn token_for(name: &str) -> String {
    format!("{TOKEN_OPEN}{name}{TOKEN_CLOSE}")
}

/// Replaces a `{{alias}}` reference in `expr` with `path`.
///
/// Returns `None` when `expr` does not reference `alias`, so callers can keep
/// untouched lines verbatim.
#[must_use]
pub fn inline_alias(expr: &str, alias: &str, path: &str) -> Option<String> {
    let token = find_token(expr).filter(|t| t.name == alias)?;
    Some(format!("{}{path}{}", token.prefix, token.suffix))
}
