//! Splitting of `#[validate("...")]` tag strings into a directive and options.
//!
//! A tag has the form `Name[,opt1[,opt2...]]`. Either `,` or `;` may be used as
//! the delimiter, so `QualifiedName,Required` and `QualifiedName;Required` are
//! the same tag. The parser never fails: malformed input is taken literally.

const DELIMITERS: [char; 2] = [',', ';'];

/// A parsed validation tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tag<'a> {
    /// The directive keyword, e.g. `Required` or `OneOf`.
    pub name: &'a str,
    /// Everything after the first delimiter.
    pub options: TagOptions<'a>,
}

/// The option list of a tag, kept as the raw delimited string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TagOptions<'a>(&'a str);

impl<'a> TagOptions<'a> {
    pub fn new(raw: &'a str) -> Self {
        TagOptions(raw)
    }

    pub fn as_str(&self) -> &'a str {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Reports whether `opt` is one of the delimited tokens.
    ///
    /// Matching respects delimiter boundaries: `Req` is not contained in
    /// `Required`, and nothing contains the empty option.
    pub fn contains(&self, opt: &str) -> bool {
        if self.0.is_empty() || opt.is_empty() {
            return false;
        }
        self.tokens().any(|token| token == opt)
    }

    /// Iterates the delimited tokens in order.
    pub fn tokens(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.0.split(DELIMITERS)
    }

    /// The first token, or `""` when there are no options.
    pub fn first(&self) -> &'a str {
        self.tokens().next().unwrap_or_default()
    }
}

/// Splits a raw tag into its directive name and options.
pub fn parse_tag(raw: &str) -> Tag<'_> {
    match raw.split_once(DELIMITERS) {
        Some((name, rest)) => Tag {
            name,
            options: TagOptions(rest),
        },
        None => Tag {
            name: raw,
            options: TagOptions::default(),
        },
    }
}
