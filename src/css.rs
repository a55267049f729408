//! Plain CSS text wrapper built on cssparser.
//!
//! [`CssWrapper`] is the bundled [`StyleWrapper`]: it turns a style block
//! such as `color: red; &:hover { color: blue; }` into
//! `@media only screen and (...) { color: red; &:hover { color: blue; } }`.
//!
//! The payload is tokenized before wrapping. Whitespace runs collapse to a
//! single space, comments are dropped, and stray closing brackets or bad
//! strings/urls are rejected, since they would otherwise end the `@media`
//! block early.

use cssparser::{
    ParseError, ParseErrorKind, Parser, ParserInput, SourceLocation, ToCss as _, Token,
    TokenSerializationType,
};

use crate::error::{Error, Result};
use crate::mixin::StyleWrapper;

type CssParseError<'i> = ParseError<'i, Error>;

/// Wraps CSS text in an `@media` rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CssWrapper;

impl<'s> StyleWrapper<&'s str> for CssWrapper {
    type Output = Result<String>;

    fn wrap(&self, media: &str, style: &'s str) -> Result<String> {
        let body = normalize_style(style)?;
        if body.is_empty() {
            Ok(format!("{media} {{}}"))
        } else {
            Ok(format!("{media} {{ {body} }}"))
        }
    }
}

/// Re-serialize a style block, collapsing whitespace and dropping comments.
pub fn normalize_style(css: &str) -> Result<String> {
    let mut output = String::new();
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);

    match write_block(&mut parser, &mut output) {
        Ok(()) => Ok(output.trim_end().to_string()),
        Err(err) => Err(match err.kind {
            ParseErrorKind::Custom(err) => err,
            ParseErrorKind::Basic(kind) => Error::InvalidStyle(format!(
                "{:?} at line {}, column {}",
                kind,
                err.location.line + 1,
                err.location.column
            )),
        }),
    }
}

fn write_block<'i>(
    parser: &mut Parser<'i, '_>,
    output: &mut String,
) -> std::result::Result<(), CssParseError<'i>> {
    // Last token written at this nesting level, and whether a comment was
    // dropped since then. `1px/**/2px` must not become `1px2px`.
    let mut previous = TokenSerializationType::default();
    let mut skipped_comment = false;

    loop {
        let location = parser.current_source_location();
        let token = match parser.next_including_whitespace_and_comments() {
            Ok(token) => token.clone(),
            Err(_) => break,
        };

        match token {
            Token::WhiteSpace(_) => {
                skipped_comment = false;
                if !output.is_empty() && !output.ends_with([' ', '{', '(', '[']) {
                    output.push(' ');
                }
                continue;
            }
            Token::Comment(_) => {
                skipped_comment = true;
                continue;
            }
            _ => {}
        }

        let current = token.serialization_type();
        if skipped_comment
            && !output.ends_with(' ')
            && previous.needs_separator_when_before(current)
        {
            output.push(' ');
        }
        skipped_comment = false;
        previous = current;

        match token {
            Token::CurlyBracketBlock
            | Token::ParenthesisBlock
            | Token::SquareBracketBlock
            | Token::Function(_) => {
                let close = match token {
                    Token::CurlyBracketBlock => '}',
                    Token::SquareBracketBlock => ']',
                    _ => ')',
                };
                token
                    .to_css(output)
                    .map_err(|_| invalid(location, "unwritable token".into()))?;
                parser.parse_nested_block(|p| write_block(p, output))?;
                if output.ends_with(' ') {
                    output.pop();
                }
                output.push(close);
                previous = TokenSerializationType::default();
            }
            Token::CloseCurlyBracket | Token::CloseParenthesis | Token::CloseSquareBracket => {
                return Err(invalid(
                    location,
                    format!(
                        "unbalanced `{}` at line {}, column {}",
                        token.to_css_string(),
                        location.line + 1,
                        location.column
                    ),
                ));
            }
            Token::BadUrl(_) | Token::BadString(_) => {
                return Err(invalid(
                    location,
                    format!(
                        "malformed string or url at line {}, column {}",
                        location.line + 1,
                        location.column
                    ),
                ));
            }
            _ => {
                token
                    .to_css(output)
                    .map_err(|_| invalid(location, "unwritable token".into()))?;
            }
        }
    }
    Ok(())
}

fn invalid<'i>(location: SourceLocation, message: String) -> CssParseError<'i> {
    location.new_custom_error(Error::InvalidStyle(message))
}
