//! In-memory element tree built from document text.

use crate::error::DocumentParseError;
use quick_xml::events::Event;
use quick_xml::Reader;
use serde::{Deserialize, Serialize};

/// An element in a parsed document.
///
/// Children are owned exclusively by their parent and kept in document
/// order. Only elements are children; text is folded into [`Node::text`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    tag: String,
    children: Vec<Node>,
    text: Option<String>,
}

impl Node {
    /// Create an element with no children and no text.
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            children: Vec::new(),
            text: None,
        }
    }

    /// Set the element's text value.
    pub fn with_text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    /// Append a child element.
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Tag name, exactly as written in the markup (prefix included).
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// All child elements in document order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Child elements whose tag equals `name`, in document order.
    pub fn children_named<'a, 'b>(&'a self, name: &'b str) -> impl Iterator<Item = &'a Node> + 'b
    where
        'a: 'b,
    {
        self.children.iter().filter(move |child| child.tag == name)
    }

    /// Whitespace-normalized value of the first text-bearing child.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl Drop for Node {
    // Descendants are detached onto a worklist; drop depth stays constant.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// Options applied at the parser boundary, before any markup is read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOptions {
    /// Drop every line starting with `<!` before parsing.
    ///
    /// This is a line-based heuristic for declarations the parser cannot
    /// handle. It will also drop comment and CDATA lines, and any text line
    /// that happens to begin with `<!`.
    #[serde(default)]
    pub strip_declarations: bool,
}

impl ParseOptions {
    pub fn strip_declarations() -> Self {
        Self {
            strip_declarations: true,
        }
    }
}

/// A parsed document. Owns its whole tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Node,
}

impl Document {
    /// Parse document text with default options.
    pub fn parse(text: &str) -> Result<Self, DocumentParseError> {
        Self::parse_with(text, &ParseOptions::default())
    }

    /// Parse document text, applying `options` first.
    pub fn parse_with(text: &str, options: &ParseOptions) -> Result<Self, DocumentParseError> {
        let root = if options.strip_declarations {
            build(&strip_declarations(text))?
        } else {
            build(text)?
        };
        Ok(Self { root })
    }

    /// The root element.
    pub fn root(&self) -> &Node {
        &self.root
    }
}

/// Remove lines whose first non-blank characters are `<!`.
pub fn strip_declarations(text: &str) -> String {
    text.lines()
        .filter(|line| !line.trim_start().starts_with("<!"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// An element still being read.
struct Frame {
    node: Node,
    run: String,
}

impl Frame {
    fn open(tag: String) -> Self {
        Self {
            node: Node {
                tag,
                children: Vec::new(),
                text: None,
            },
            run: String::new(),
        }
    }

    /// Close the pending text run; the first non-blank run becomes the text.
    fn flush(&mut self) {
        if self.node.text.is_none() {
            let normalized = normalize_whitespace(&self.run);
            if !normalized.is_empty() {
                self.node.text = Some(normalized);
            }
        }
        self.run.clear();
    }
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn build(text: &str) -> Result<Node, DocumentParseError> {
    let mut reader = Reader::from_str(text);
    reader.check_end_names(true);

    let mut stack: Vec<Frame> = Vec::new();
    let mut root: Option<Node> = None;

    loop {
        let event = match reader.read_event() {
            Ok(event) => event,
            Err(source) => {
                return Err(DocumentParseError::Markup {
                    position: reader.buffer_position(),
                    source,
                });
            }
        };

        match event {
            Event::Start(start) => {
                let tag = std::str::from_utf8(start.name().as_ref())?.to_string();
                begin_child(&mut stack, &root, &tag)?;
                stack.push(Frame::open(tag));
            }
            Event::Empty(start) => {
                let tag = std::str::from_utf8(start.name().as_ref())?.to_string();
                begin_child(&mut stack, &root, &tag)?;
                attach(&mut stack, &mut root, Node::new(&tag));
            }
            Event::End(end) => {
                let Some(mut frame) = stack.pop() else {
                    let tag = std::str::from_utf8(end.name().as_ref())?.to_string();
                    return Err(DocumentParseError::UnexpectedClose(tag));
                };
                frame.flush();
                attach(&mut stack, &mut root, frame.node);
            }
            Event::Text(text) => {
                let unescaped = match text.unescape() {
                    Ok(unescaped) => unescaped,
                    Err(source) => {
                        return Err(DocumentParseError::Markup {
                            position: reader.buffer_position(),
                            source,
                        });
                    }
                };
                push_text(&mut stack, &unescaped)?;
            }
            Event::CData(data) => {
                push_text(&mut stack, std::str::from_utf8(&data)?)?;
            }
            Event::Eof => break,
            // Declarations, comments, processing instructions, doctype
            _ => {}
        }
    }

    if let Some(mut frame) = stack.pop() {
        return Err(DocumentParseError::Unclosed(std::mem::take(&mut frame.node.tag)));
    }

    root.ok_or(DocumentParseError::NoRoot)
}

fn begin_child(
    stack: &mut [Frame],
    root: &Option<Node>,
    tag: &str,
) -> Result<(), DocumentParseError> {
    match stack.last_mut() {
        Some(parent) => {
            parent.flush();
            Ok(())
        }
        None if root.is_some() => Err(DocumentParseError::MultipleRoots(tag.to_string())),
        None => Ok(()),
    }
}

fn attach(stack: &mut [Frame], root: &mut Option<Node>, node: Node) {
    match stack.last_mut() {
        Some(parent) => parent.node.children.push(node),
        None => *root = Some(node),
    }
}

fn push_text(stack: &mut [Frame], text: &str) -> Result<(), DocumentParseError> {
    match stack.last_mut() {
        Some(frame) => {
            frame.run.push_str(text);
            Ok(())
        }
        None if text.trim().is_empty() => Ok(()),
        None => Err(DocumentParseError::TextOutsideRoot),
    }
}
