//! Path template tokenizer.
//!
//! Splits a template such as `/blog/{year}/{slug}` into literal runs and
//! placeholder tokens. Placeholder names follow the regex group-name grammar
//! `[A-Za-z_][A-Za-z0-9_]*` so they can be used verbatim as capture names.

/// One piece of a tokenized template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Literal template text, emitted verbatim.
    Literal(&'a str),
    /// A `{name}` placeholder; holds the bare name.
    Placeholder(&'a str),
}

/// Byte offset of the first unresolvable brace in a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MalformedAt(pub usize);

fn is_placeholder_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Tokenize `template` left to right.
///
/// Any `{` that does not open a well-formed placeholder, and any stray `}`,
/// makes the whole template malformed.
pub fn tokenize(template: &str) -> Result<Vec<Token<'_>>, MalformedAt> {
    let mut tokens = Vec::with_capacity(template.matches('{').count() * 2 + 1);
    let mut rest = template;
    let mut offset = 0;

    while let Some(open) = rest.find(['{', '}']) {
        if rest.as_bytes()[open] == b'}' {
            return Err(MalformedAt(offset + open));
        }
        let after_open = &rest[open + 1..];
        let close = after_open
            .find(['{', '}'])
            .filter(|&i| after_open.as_bytes()[i] == b'}')
            .ok_or(MalformedAt(offset + open))?;
        let name = &after_open[..close];
        if !is_placeholder_name(name) {
            return Err(MalformedAt(offset + open));
        }
        if open > 0 {
            tokens.push(Token::Literal(&rest[..open]));
        }
        tokens.push(Token::Placeholder(name));

        let consumed = open + 1 + close + 1;
        offset += consumed;
        rest = &rest[consumed..];
    }

    if !rest.is_empty() {
        tokens.push(Token::Literal(rest));
    }
    Ok(tokens)
}

/// Placeholder names in template order; malformed templates yield the names
/// found before the first bad brace.
#[must_use]
pub fn placeholder_names(template: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        let after_open = &rest[open + 1..];
        let Some(close) = after_open.find('}') else {
            break;
        };
        let name = &after_open[..close];
        if !is_placeholder_name(name) {
            break;
        }
        names.push(name);
        rest = &after_open[close + 1..];
    }
    names
}
