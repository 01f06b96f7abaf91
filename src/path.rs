use ahash::{HashMap, HashSet};

use crate::document::{Document, Node};
use crate::error::{Error, PathError};
use crate::select::PathEvaluator;

/// Evaluator for abbreviated location paths.
///
/// Supported are absolute (`/a/b`), descendant (`//a`, `a//b`) and relative
/// (`a/b`, `./a`, `../a`) paths. A step is a qualified element name, `*`,
/// `text()`, `comment()`, `node()`, `.` or `..`, optionally followed by
/// predicates:
///
/// - `[2]`: the second candidate of each context node.
/// - `[last()]`: the last candidate of each context node.
/// - `[@id]`: candidates that have the attribute.
/// - `[@id='2']` or `[@id="2"]`: candidates with this attribute value.
/// - `[name]`: candidates with a child element of that name.
/// - `[name='text']`: candidates with a child element with that text.
///
/// Results come back in document order, without duplicates. Names match
/// on the qualified name as written; prefixes are not resolved.
///
/// ```rust
/// use xmlquery::{Document, SimplePath};
///
/// let doc = Document::parse(r#"<a><b id="1"/><b id="2"><c/></b></a>"#)?;
/// let found = doc.find_with(&SimplePath, doc.root(), "/a/b[@id='2']/c")?;
/// assert_eq!(found.len(), 1);
/// assert_eq!(doc.name_of(found[0]), "c");
/// # Ok::<(), xmlquery::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SimplePath;

impl PathEvaluator for SimplePath {
    fn evaluate(
        &self,
        document: &Document,
        root: Node,
        expression: &str,
    ) -> Result<Vec<Node>, Error> {
        let path = PathParser::new(expression).parse()?;
        let nodes = path.select(document, root);
        tracing::trace!(expression, matches = nodes.len(), "evaluated path expression");
        Ok(nodes)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Child,
    DescendantOrSelf,
    SelfNode,
    Parent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum NodeTest {
    Name(String),
    AnyElement,
    Text,
    Comment,
    AnyNode,
}

impl NodeTest {
    fn matches(&self, document: &Document, node: Node) -> bool {
        match self {
            NodeTest::Name(name) => document
                .element(node)
                .map_or(false, |element| document.name_str(element.name()) == name),
            NodeTest::AnyElement => document.is_element(node),
            NodeTest::Text => document.is_text(node),
            NodeTest::Comment => document.is_comment(node),
            NodeTest::AnyNode => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Predicate {
    Position(usize),
    Last,
    HasAttribute(String),
    AttributeEquals(String, String),
    HasChild(String),
    ChildEquals(String, String),
}

impl Predicate {
    fn filter(&self, document: &Document, candidates: Vec<Node>) -> Vec<Node> {
        match self {
            Predicate::Position(position) => candidates
                .get(position - 1)
                .copied()
                .into_iter()
                .collect(),
            Predicate::Last => candidates.last().copied().into_iter().collect(),
            _ => candidates
                .into_iter()
                .filter(|node| self.matches(document, *node))
                .collect(),
        }
    }

    fn matches(&self, document: &Document, node: Node) -> bool {
        match self {
            Predicate::HasAttribute(name) => document.select_attr(node, name).is_some(),
            Predicate::AttributeEquals(name, value) => {
                document.select_attr(node, name) == Some(value.as_str())
            }
            Predicate::HasChild(name) => document.select_element(node, name).is_some(),
            Predicate::ChildEquals(name, value) => document
                .select_elements(node, name)
                .into_iter()
                .any(|child| document.inner_text(child) == *value),
            Predicate::Position(_) | Predicate::Last => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Step {
    axis: Axis,
    test: NodeTest,
    predicates: Vec<Predicate>,
}

impl Step {
    fn new(axis: Axis, test: NodeTest) -> Self {
        Step {
            axis,
            test,
            predicates: Vec::new(),
        }
    }

    fn select(&self, document: &Document, node: Node) -> Vec<Node> {
        let test = |candidate: &Node| self.test.matches(document, *candidate);
        let candidates: Vec<Node> = match self.axis {
            Axis::Child => document.children(node).filter(test).collect(),
            Axis::DescendantOrSelf => document.descendants(node).filter(test).collect(),
            Axis::SelfNode => Some(node).filter(test).into_iter().collect(),
            Axis::Parent => document.parent(node).filter(test).into_iter().collect(),
        };
        self.predicates
            .iter()
            .fold(candidates, |candidates, predicate| {
                predicate.filter(document, candidates)
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct LocationPath {
    absolute: bool,
    steps: Vec<Step>,
}

impl LocationPath {
    fn select(&self, document: &Document, root: Node) -> Vec<Node> {
        let top = document.top(root);
        let mut context = vec![if self.absolute { top } else { root }];
        if self.steps.is_empty() {
            return context;
        }
        let order: HashMap<Node, usize> = document
            .descendants(top)
            .enumerate()
            .map(|(index, node)| (node, index))
            .collect();
        for step in &self.steps {
            let mut seen = HashSet::default();
            let mut next = Vec::new();
            for node in context {
                for candidate in step.select(document, node) {
                    if seen.insert(candidate) {
                        next.push(candidate);
                    }
                }
            }
            next.sort_by_key(|node| order.get(node).copied().unwrap_or(usize::MAX));
            context = next;
        }
        context
    }
}

fn is_name_start_char(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '-' | '.')
}

struct PathParser<'a> {
    expression: &'a str,
    position: usize,
}

impl<'a> PathParser<'a> {
    fn new(expression: &'a str) -> Self {
        PathParser {
            expression,
            position: 0,
        }
    }

    fn rest(&self) -> &'a str {
        &self.expression[self.position..]
    }

    fn at_end(&self) -> bool {
        self.position >= self.expression.len()
    }

    fn starts_with(&self, s: &str) -> bool {
        self.rest().starts_with(s)
    }

    fn eat(&mut self, s: &str) -> bool {
        if self.starts_with(s) {
            self.position += s.len();
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.position += rest.len() - rest.trim_start().len();
    }

    fn error(&self, reason: impl Into<String>) -> PathError {
        self.error_at(self.position, reason)
    }

    fn error_at(&self, position: usize, reason: impl Into<String>) -> PathError {
        PathError::new(self.expression, position, reason)
    }

    fn parse(mut self) -> Result<LocationPath, PathError> {
        self.skip_whitespace();
        if self.at_end() {
            return Err(self.error("empty expression"));
        }
        let mut steps = Vec::new();
        let absolute = if self.eat("//") {
            steps.push(Step::new(Axis::DescendantOrSelf, NodeTest::AnyNode));
            true
        } else {
            self.eat("/")
        };
        self.skip_whitespace();
        if absolute && steps.is_empty() && self.at_end() {
            // the root on its own
            return Ok(LocationPath { absolute, steps });
        }
        loop {
            steps.push(self.step()?);
            self.skip_whitespace();
            if self.at_end() {
                break;
            }
            if self.eat("//") {
                steps.push(Step::new(Axis::DescendantOrSelf, NodeTest::AnyNode));
            } else if !self.eat("/") {
                return Err(self.error("unexpected character"));
            }
        }
        Ok(LocationPath { absolute, steps })
    }

    fn name(&mut self) -> Option<&'a str> {
        let rest = self.rest();
        let mut end = 0;
        for (index, c) in rest.char_indices() {
            let valid = if index == 0 {
                is_name_start_char(c)
            } else if c == ':' {
                rest[index + 1..]
                    .chars()
                    .next()
                    .map_or(false, is_name_start_char)
            } else {
                is_name_char(c)
            };
            if !valid {
                break;
            }
            end = index + c.len_utf8();
        }
        if end == 0 {
            return None;
        }
        self.position += end;
        Some(&rest[..end])
    }

    fn step(&mut self) -> Result<Step, PathError> {
        self.skip_whitespace();
        if self.eat("..") {
            return Ok(Step::new(Axis::Parent, NodeTest::AnyNode));
        }
        if self.eat(".") {
            return Ok(Step::new(Axis::SelfNode, NodeTest::AnyNode));
        }
        if self.starts_with("@") {
            return Err(self.error("attributes cannot be selected as nodes"));
        }
        let test = if self.eat("*") {
            NodeTest::AnyElement
        } else {
            let start = self.position;
            let name = self.name().ok_or_else(|| self.error("expected a step"))?;
            self.skip_whitespace();
            if self.starts_with("::") {
                return Err(self.error_at(start, format!("unsupported axis {}", name)));
            }
            if self.eat("(") {
                self.skip_whitespace();
                if !self.eat(")") {
                    return Err(self.error("expected ')'"));
                }
                match name {
                    "text" => NodeTest::Text,
                    "comment" => NodeTest::Comment,
                    "node" => NodeTest::AnyNode,
                    _ => {
                        return Err(self.error_at(start, format!("unknown function {}()", name)))
                    }
                }
            } else {
                NodeTest::Name(name.to_string())
            }
        };
        let mut step = Step::new(Axis::Child, test);
        loop {
            self.skip_whitespace();
            if !self.eat("[") {
                break;
            }
            step.predicates.push(self.predicate()?);
        }
        Ok(step)
    }

    fn number(&mut self) -> Result<Option<usize>, PathError> {
        let start = self.position;
        let digits = self.rest().len() - self.rest().trim_start_matches(|c: char| c.is_ascii_digit()).len();
        if digits == 0 {
            return Ok(None);
        }
        self.position += digits;
        self.expression[start..self.position]
            .parse()
            .map(Some)
            .map_err(|_| self.error_at(start, "position out of range"))
    }

    fn literal(&mut self) -> Result<&'a str, PathError> {
        self.skip_whitespace();
        let start = self.position;
        let quote = match self.rest().chars().next() {
            Some(quote @ ('\'' | '"')) => quote,
            _ => return Err(self.error("expected a string literal")),
        };
        self.position += 1;
        let rest = self.rest();
        let end = rest
            .find(quote)
            .ok_or_else(|| self.error_at(start, "unterminated string literal"))?;
        self.position += end + 1;
        Ok(&rest[..end])
    }

    fn predicate(&mut self) -> Result<Predicate, PathError> {
        self.skip_whitespace();
        let start = self.position;
        let predicate = if let Some(position) = self.number()? {
            if position == 0 {
                return Err(self.error_at(start, "positions start at 1"));
            }
            Predicate::Position(position)
        } else if self.eat("@") {
            let name = self
                .name()
                .ok_or_else(|| self.error("expected an attribute name"))?;
            self.skip_whitespace();
            if self.eat("=") {
                let value = self.literal()?;
                Predicate::AttributeEquals(name.to_string(), value.to_string())
            } else {
                Predicate::HasAttribute(name.to_string())
            }
        } else if let Some(name) = self.name() {
            self.skip_whitespace();
            if self.eat("(") {
                self.skip_whitespace();
                if !self.eat(")") {
                    return Err(self.error("expected ')'"));
                }
                if name != "last" {
                    return Err(self.error_at(start, format!("unknown function {}()", name)));
                }
                Predicate::Last
            } else if self.eat("=") {
                let value = self.literal()?;
                Predicate::ChildEquals(name.to_string(), value.to_string())
            } else {
                Predicate::HasChild(name.to_string())
            }
        } else {
            return Err(self.error("expected a predicate"));
        };
        self.skip_whitespace();
        if !self.eat("]") {
            return Err(self.error("expected ']'"));
        }
        Ok(predicate)
    }
}
