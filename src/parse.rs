use std::io::Read;

use crate::document::{Document, Node};
use crate::encoding::encoding;
use crate::error::{Error, ParseError, Span};
use crate::events::{Event, EventAttributes, Events};
use crate::xmlvalue::{Attributes, Value};

struct OpenElement {
    node: Node,
    name: String,
    span: Span,
}

struct DocumentBuilder {
    document: Document,
    open_elements: Vec<OpenElement>,
}

impl DocumentBuilder {
    fn new() -> Self {
        DocumentBuilder {
            document: Document::empty(),
            open_elements: Vec::new(),
        }
    }

    fn current(&self) -> Node {
        self.open_elements
            .last()
            .map(|open| open.node)
            .unwrap_or(self.document.root)
    }

    fn append(&mut self, child: Node) -> Result<(), Error> {
        let parent = self.current();
        parent
            .get()
            .checked_append(child.get(), self.document.arena_mut())?;
        Ok(())
    }

    fn attributes(&mut self, attributes: EventAttributes) -> Attributes {
        attributes
            .into_iter()
            .map(|(name, value)| (self.document.add_name(&name), value.into_owned()))
            .collect()
    }

    fn element_start(
        &mut self,
        name: &str,
        attributes: EventAttributes,
        span: Span,
    ) -> Result<(), Error> {
        let name_id = self.document.add_name(name);
        let attributes = self.attributes(attributes);
        let node = self.document.new_element(name_id, attributes);
        self.append(node)?;
        self.open_elements.push(OpenElement {
            node,
            name: name.to_string(),
            span,
        });
        Ok(())
    }

    fn element_end(&mut self, name: &str, span: Span) -> Result<(), ParseError> {
        let open = self
            .open_elements
            .pop()
            .ok_or_else(|| ParseError::UnexpectedCloseTag {
                name: name.to_string(),
                span,
            })?;
        if open.name != name {
            return Err(ParseError::InvalidCloseTag {
                expected: open.name,
                found: name.to_string(),
                span,
            });
        }
        Ok(())
    }

    fn text(&mut self, content: &str) -> Result<(), Error> {
        // adjacent character data (text, CDATA) ends up in a single node
        let parent = self.current();
        if let Some(last) = self.document.arena()[parent.get()].last_child() {
            if let Value::Text(text) = self.document.arena_mut()[last].get_mut() {
                text.text.push_str(content);
                return Ok(());
            }
        }
        let node = self.document.new_text(content.to_string());
        self.append(node)
    }

    fn add(&mut self, event: Event) -> Result<(), Error> {
        match event {
            Event::Declaration {
                target,
                content,
                attributes,
                ..
            } => {
                let target = self.document.add_name(&target);
                let attributes = self.attributes(attributes);
                let node =
                    self.document
                        .new_declaration(target, content.into_owned(), attributes);
                self.append(node)?;
            }
            Event::ElementStart {
                name,
                attributes,
                span,
            } => {
                self.element_start(&name, attributes, span)?;
            }
            Event::ElementEnd { name, span } => {
                self.element_end(&name, span)?;
            }
            Event::Text { content } => {
                self.text(&content)?;
            }
            Event::Comment { content } => {
                let node = self.document.new_comment(content.into_owned());
                self.append(node)?;
            }
        }
        Ok(())
    }

    fn finish(mut self) -> Result<Document, ParseError> {
        if let Some(open) = self.open_elements.pop() {
            return Err(ParseError::UnclosedTag {
                name: open.name,
                span: open.span,
            });
        }
        Ok(self.document)
    }
}

/// Parsing.
impl Document {
    /// Parse a string containing XML into a document.
    ///
    /// Fails with [`Error::MalformedDocument`] if the XML is not
    /// well-formed. There is no recovery: no partial tree is returned.
    ///
    /// ```rust
    /// use xmlquery::Document;
    ///
    /// let doc = Document::parse("<p>Example</p>")?;
    /// let p = doc.document_element(doc.root()).unwrap();
    /// assert_eq!(doc.name_str(doc.element(p).unwrap().name()), "p");
    /// # Ok::<(), xmlquery::Error>(())
    /// ```
    pub fn parse(xml: &str) -> Result<Document, Error> {
        Document::from_events(Events::new(xml))
    }

    /// Build a document from a stream of events.
    ///
    /// The events must be properly nested: every
    /// [`Event::ElementEnd`](crate::Event::ElementEnd) closes the most
    /// recent unclosed [`Event::ElementStart`](crate::Event::ElementStart)
    /// of the same name, and no element may stay open at the end.
    pub fn from_events<'a>(
        events: impl IntoIterator<Item = Result<Event<'a>, ParseError>>,
    ) -> Result<Document, Error> {
        let mut builder = DocumentBuilder::new();
        for event in events {
            builder.add(event?)?;
        }
        let document = builder.finish()?;
        tracing::debug!(nodes = document.arena().count(), "parsed document");
        Ok(document)
    }

    /// Parse XML bytes into a document.
    ///
    /// The character encoding is detected from a byte order mark or the
    /// XML declaration, and defaults to UTF-8.
    pub fn parse_bytes(data: &[u8]) -> Result<Document, Error> {
        let encoding = encoding(data, None)?;
        let (xml, used, had_errors) = encoding.decode(data);
        if had_errors {
            tracing::debug!(
                encoding = used.name(),
                "replaced malformed byte sequences while decoding"
            );
        }
        Document::parse(&xml)
    }

    /// Read XML from a reader and parse it.
    ///
    /// See [`Document::parse_bytes`] for how the encoding is determined.
    pub fn parse_reader(mut reader: impl Read) -> Result<Document, Error> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Document::parse_bytes(&data)
    }
}
