//! Token events consumed by the tree builder.
//!
//! [`Events`] adapts the [`xmlparser`] tokenizer into a stream of
//! [`Event`]s: start tags arrive with their complete attribute list, empty
//! element tags are expanded into a start and an end event, entity
//! references in text and attribute values are decoded, and DTDs are
//! skipped. The builder does not depend on `xmlparser` directly, so any
//! iterator of events can be turned into a
//! [`Document`](crate::Document) using
//! [`Document::from_events`](crate::Document::from_events).

use std::borrow::Cow;

use xmlparser::{ElementEnd, StrSpan, Token, Tokenizer};

use crate::entity::{parse_entities, EntityError};
use crate::error::{ParseError, Span};

/// Attributes of a start tag or declaration: qualified name and decoded
/// value, in source order.
pub type EventAttributes<'a> = Vec<(Cow<'a, str>, Cow<'a, str>)>;

/// A structural event in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event<'a> {
    /// The XML declaration or a processing instruction.
    Declaration {
        target: Cow<'a, str>,
        content: Cow<'a, str>,
        attributes: EventAttributes<'a>,
        span: Span,
    },
    /// A start tag, or the first half of an empty element tag.
    ElementStart {
        name: Cow<'a, str>,
        attributes: EventAttributes<'a>,
        span: Span,
    },
    /// A close tag, or the second half of an empty element tag.
    ElementEnd { name: Cow<'a, str>, span: Span },
    /// Character data, including CDATA sections.
    Text { content: Cow<'a, str> },
    /// A comment, content as written.
    Comment { content: Cow<'a, str> },
}

struct OpenTag<'a> {
    name: Cow<'a, str>,
    attributes: EventAttributes<'a>,
    span: Span,
}

/// Iterator of [`Event`]s over an XML string.
///
/// Stops after the first error.
pub struct Events<'a> {
    input: &'a str,
    tokenizer: Tokenizer<'a>,
    open_tag: Option<OpenTag<'a>>,
    queued: Option<Event<'a>>,
    done: bool,
}

impl<'a> Events<'a> {
    /// Tokenize the given XML text.
    pub fn new(input: &'a str) -> Self {
        Events {
            input,
            tokenizer: Tokenizer::from(input),
            open_tag: None,
            queued: None,
            done: false,
        }
    }

    fn qname(&self, prefix: StrSpan<'a>, local: StrSpan<'a>) -> (Cow<'a, str>, Span) {
        if prefix.as_str().is_empty() {
            (local.as_str().into(), Span::from_str_span(local))
        } else {
            let input: &'a str = self.input;
            let span = Span::new(prefix.start(), local.end());
            (input[span.start..span.end].into(), span)
        }
    }

    fn handle_token(&mut self, token: Token<'a>) -> Result<Option<Event<'a>>, ParseError> {
        let event = match token {
            Token::Declaration {
                version,
                encoding,
                standalone,
                span,
            } => {
                if !matches!(version.as_str(), "1.0" | "1.1") {
                    return Err(ParseError::InvalidDeclaration {
                        reason: format!("unsupported XML version {}", version.as_str()),
                        span: Span::from_str_span(version),
                    });
                }
                let mut attributes: EventAttributes =
                    vec![("version".into(), version.as_str().into())];
                if let Some(encoding) = encoding {
                    attributes.push(("encoding".into(), encoding.as_str().into()));
                }
                if let Some(standalone) = standalone {
                    let value = if standalone { "yes" } else { "no" };
                    attributes.push(("standalone".into(), value.into()));
                }
                Event::Declaration {
                    target: "xml".into(),
                    content: declaration_content(span.as_str()).into(),
                    attributes,
                    span: Span::from_str_span(span),
                }
            }
            Token::ProcessingInstruction {
                target,
                content,
                span,
            } => Event::Declaration {
                target: target.as_str().into(),
                content: content.map(|c| c.as_str().trim()).unwrap_or("").into(),
                attributes: Vec::new(),
                span: Span::from_str_span(span),
            },
            Token::Comment { text, .. } => Event::Comment {
                content: text.as_str().into(),
            },
            // DTDs are neither validated nor kept
            Token::DtdStart { .. }
            | Token::EmptyDtd { .. }
            | Token::EntityDeclaration { .. }
            | Token::DtdEnd { .. } => return Ok(None),
            Token::ElementStart {
                prefix,
                local,
                span,
            } => {
                let (name, _) = self.qname(prefix, local);
                self.open_tag = Some(OpenTag {
                    name,
                    attributes: Vec::new(),
                    span: Span::from_str_span(span),
                });
                return Ok(None);
            }
            Token::Attribute {
                prefix,
                local,
                value,
                ..
            } => {
                let (name, _) = self.qname(prefix, local);
                let value = decode(value)?;
                if let Some(open_tag) = self.open_tag.as_mut() {
                    open_tag.attributes.push((name, value));
                }
                return Ok(None);
            }
            Token::ElementEnd { end, span } => match end {
                ElementEnd::Open => match self.open_tag.take() {
                    Some(open_tag) => Event::ElementStart {
                        name: open_tag.name,
                        attributes: open_tag.attributes,
                        span: open_tag.span,
                    },
                    None => return Ok(None),
                },
                ElementEnd::Empty => match self.open_tag.take() {
                    Some(open_tag) => {
                        self.queued = Some(Event::ElementEnd {
                            name: open_tag.name.clone(),
                            span: Span::from_str_span(span),
                        });
                        Event::ElementStart {
                            name: open_tag.name,
                            attributes: open_tag.attributes,
                            span: open_tag.span,
                        }
                    }
                    None => return Ok(None),
                },
                ElementEnd::Close(prefix, local) => {
                    let (name, span) = self.qname(prefix, local);
                    Event::ElementEnd { name, span }
                }
            },
            Token::Text { text } => Event::Text {
                content: decode(text)?,
            },
            Token::Cdata { text, .. } => Event::Text {
                content: text.as_str().into(),
            },
        };
        Ok(Some(event))
    }

    fn parser_error(&self, error: xmlparser::Error) -> ParseError {
        let pos = error.pos();
        let offset = text_pos_to_offset(self.input, pos.row as usize, pos.col as usize);
        ParseError::XmlParser {
            error,
            span: Span::new(offset, offset),
        }
    }
}

impl<'a> Iterator for Events<'a> {
    type Item = Result<Event<'a>, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(event) = self.queued.take() {
            return Some(Ok(event));
        }
        if self.done {
            return None;
        }
        loop {
            let token = match self.tokenizer.next()? {
                Ok(token) => token,
                Err(error) => {
                    self.done = true;
                    return Some(Err(self.parser_error(error)));
                }
            };
            match self.handle_token(token) {
                Ok(Some(event)) => return Some(Ok(event)),
                Ok(None) => continue,
                Err(error) => {
                    self.done = true;
                    return Some(Err(error));
                }
            }
        }
    }
}

fn decode(text: StrSpan) -> Result<Cow<str>, ParseError> {
    let span = Span::from_str_span(text);
    parse_entities(text.as_str()).map_err(|e| match e {
        EntityError::Unclosed(entity) => ParseError::UnclosedEntity { entity, span },
        EntityError::Invalid(entity) => ParseError::InvalidEntity { entity, span },
    })
}

/// The raw text of `<?xml ... ?>` between the target and the closing `?>`.
fn declaration_content(declaration: &str) -> &str {
    let inner = declaration.strip_prefix("<?xml").unwrap_or(declaration);
    inner.strip_suffix("?>").unwrap_or(inner).trim()
}

/// Convert the 1-based row and column (in characters) that the tokenizer
/// reports into a byte offset.
fn text_pos_to_offset(input: &str, row: usize, col: usize) -> usize {
    let mut line_start = 0;
    for _ in 1..row {
        match input[line_start..].find('\n') {
            Some(i) => line_start += i + 1,
            None => return input.len(),
        }
    }
    input[line_start..]
        .char_indices()
        .nth(col.saturating_sub(1))
        .map(|(i, _)| line_start + i)
        .unwrap_or(input.len())
}
