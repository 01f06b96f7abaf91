use std::borrow::Cow;
use std::io::Write;

use crate::access::NodeEdge;
use crate::document::{Document, Node};
use crate::entity::{serialize_attribute, serialize_text};
use crate::error::Error;
use crate::xmlvalue::{Declaration, Element, Value};

/// Options for XML output.
///
/// The default renders text raw, resolves `xml:space` for every text node
/// and writes childless elements as an open/close tag pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutputParameters {
    /// Escape `&`, `<` and `>` in text content. Attribute values are always
    /// escaped.
    pub escape_text: bool,
    /// Emit all text exactly as stored, as if the output node had
    /// `xml:space="preserve"`.
    pub preserve_space: bool,
    /// Write elements without children as `<name/>`.
    pub empty_element_tags: bool,
}

fn is_xml_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

struct Serializer<'a> {
    document: &'a Document,
    parameters: &'a OutputParameters,
    // effective preserve flag for each open element, seeded with the
    // mode in effect above the output node
    preserve: Vec<bool>,
}

impl<'a> Serializer<'a> {
    fn new(document: &'a Document, node: Node, parameters: &'a OutputParameters) -> Self {
        let inherited = parameters.preserve_space
            || document
                .parent(node)
                .map_or(false, |parent| document.is_space_preserved(parent));
        Serializer {
            document,
            parameters,
            preserve: vec![inherited],
        }
    }

    fn is_preserving(&self) -> bool {
        self.preserve.last().copied().unwrap_or(false)
    }

    fn is_empty_tag(&self, node: Node) -> bool {
        self.parameters.empty_element_tags && self.document.first_child(node).is_none()
    }

    fn render_edge(&mut self, edge: NodeEdge) -> Cow<'a, str> {
        match edge {
            NodeEdge::Start(node) => self.render_start(node),
            NodeEdge::End(node) => self.render_end(node),
        }
    }

    fn render_start(&mut self, node: Node) -> Cow<'a, str> {
        let document = self.document;
        match document.value(node) {
            Value::Document => Cow::Borrowed(""),
            Value::Element(element) => {
                let preserve = self.parameters.preserve_space
                    || element.space().resolve(self.is_preserving());
                self.preserve.push(preserve);
                self.render_start_tag(node, element).into()
            }
            Value::Text(text) => {
                let content = if self.is_preserving() {
                    text.get()
                } else {
                    text.get().trim_matches(is_xml_whitespace)
                };
                if self.parameters.escape_text {
                    serialize_text(content.into())
                } else {
                    content.into()
                }
            }
            Value::Comment(comment) => format!("<!--{}-->", comment.get()).into(),
            Value::Declaration(declaration) => self.render_declaration(declaration).into(),
        }
    }

    fn render_start_tag(&self, node: Node, element: &Element) -> String {
        let mut tag = format!("<{}", self.document.name_str(element.name()));
        for (name_id, value) in element.attributes() {
            tag.push(' ');
            tag.push_str(self.document.name_str(*name_id));
            tag.push_str("=\"");
            tag.push_str(&serialize_attribute(value.into()));
            tag.push('"');
        }
        if self.is_empty_tag(node) {
            tag.push_str("/>");
        } else {
            tag.push('>');
        }
        tag
    }

    fn render_declaration(&self, declaration: &Declaration) -> String {
        let target = self.document.name_str(declaration.target());
        if declaration.content().is_empty() {
            format!("<?{}?>", target)
        } else {
            format!("<?{} {}?>", target, declaration.content())
        }
    }

    fn render_end(&mut self, node: Node) -> Cow<'a, str> {
        let document = self.document;
        if let Value::Element(element) = document.value(node) {
            self.preserve.pop();
            if !self.is_empty_tag(node) {
                return format!("</{}>", document.name_str(element.name())).into();
            }
        }
        Cow::Borrowed("")
    }
}

/// ## Serialization
impl Document {
    /// Serialize a node and its descendants to XML.
    ///
    /// Serializing the document root renders only its children. Text is
    /// escaped only when `escape_text` is set; attribute values are always
    /// escaped. Text outside of `xml:space="preserve"` is trimmed, and
    /// whitespace-only text is dropped.
    ///
    /// ```rust
    /// let doc = xmlquery::Document::parse("<a> x &lt; y <b/></a>")?;
    /// assert_eq!(doc.output_xml(doc.root(), true), "<a>x &lt; y<b></b></a>");
    /// assert_eq!(doc.output_xml(doc.root(), false), "<a>x < y<b></b></a>");
    /// # Ok::<(), xmlquery::Error>(())
    /// ```
    pub fn output_xml(&self, node: Node, escape_text: bool) -> String {
        self.output_xml_with(
            node,
            &OutputParameters {
                escape_text,
                ..Default::default()
            },
        )
    }

    /// Serialize a node and its descendants to XML with explicit
    /// parameters.
    ///
    /// ```rust
    /// use xmlquery::{Document, OutputParameters};
    ///
    /// let doc = Document::parse("<a><b> x </b></a>")?;
    /// let parameters = OutputParameters {
    ///     preserve_space: true,
    ///     empty_element_tags: true,
    ///     ..Default::default()
    /// };
    /// assert_eq!(doc.output_xml_with(doc.root(), &parameters), "<a><b> x </b></a>");
    /// # Ok::<(), xmlquery::Error>(())
    /// ```
    pub fn output_xml_with(&self, node: Node, parameters: &OutputParameters) -> String {
        let mut serializer = Serializer::new(self, node, parameters);
        self.traverse(node)
            .map(|edge| serializer.render_edge(edge))
            .collect()
    }

    /// Write the XML for a node and its descendants to a writer.
    ///
    /// Produces the same output as [`Document::output_xml_with`].
    pub fn write_xml(
        &self,
        node: Node,
        parameters: &OutputParameters,
        mut w: impl Write,
    ) -> Result<(), Error> {
        let mut serializer = Serializer::new(self, node, parameters);
        for edge in self.traverse(node) {
            w.write_all(serializer.render_edge(edge).as_bytes())?;
        }
        w.flush()?;
        Ok(())
    }
}
