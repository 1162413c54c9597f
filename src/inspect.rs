//! reading an emitted document back as a flat outline of its elements
//!
//! The builders guarantee well formed output on their own; this is for callers and
//! tests that want to look at a document structurally instead of comparing strings.

use crate::error;
use crate::Error;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use quick_xml::encoding::Decoder;

#[derive(Debug, Clone, PartialEq, Eq)]
/// one element of a document, in document order
pub struct Node {
    /// 0 for the root element
    pub depth: usize,
    pub name: String,
    /// attributes in the order they were written, values unescaped
    pub attributes: Vec<(String, String)>,
    /// unescaped text content, if the element had any
    pub text: Option<String>,
}

impl Node {
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }
}

/// Parse `document` and list its elements.
///
/// Fails on markup quick-xml rejects, on closing tags that do not match the open
/// element, and on elements left open at the end of the input.
///
/// ```
/// let nodes = xdmf::inspect::outline("<Xdmf><Domain/></Xdmf>").unwrap();
/// assert_eq!(nodes.len(), 2);
/// assert_eq!(nodes[1].name, "Domain");
/// assert_eq!(nodes[1].depth, 1);
///
/// assert!(xdmf::inspect::outline("<Xdmf><Domain></Xdmf>").is_err());
/// ```
pub fn outline(document: &str) -> Result<Vec<Node>, Error> {
    let mut reader = Reader::from_str(document);
    reader.trim_text(true);
    let decoder = reader.decoder();

    let mut nodes: Vec<Node> = Vec::new();
    // indices into `nodes` of the currently open elements
    let mut open: Vec<usize> = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                let node = read_node(decoder, &start, open.len())?;
                open.push(nodes.len());
                nodes.push(node);
            }
            Event::Empty(start) => {
                let node = read_node(decoder, &start, open.len())?;
                nodes.push(node);
            }
            Event::End(end) => {
                let name = decoder.decode(end.name().into_inner())?;
                match open.pop() {
                    Some(index) if nodes[index].name == name => {}
                    Some(index) => {
                        return Err(malformed(format!(
                            "`</{}>` closes `<{}>`",
                            name, nodes[index].name
                        )))
                    }
                    None => {
                        return Err(malformed(format!("`</{}>` has no open element", name)))
                    }
                }
            }
            Event::Text(text) => {
                let text = text.unescape()?;
                match open.last() {
                    Some(&index) => nodes[index].text = Some(text.into_owned()),
                    None => return Err(malformed(format!("text `{}` outside the root", text))),
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(&index) = open.last() {
        return Err(malformed(format!(
            "`<{}>` is never closed",
            nodes[index].name
        )));
    }

    Ok(nodes)
}

fn read_node(decoder: Decoder, start: &BytesStart, depth: usize) -> Result<Node, Error> {
    let name = decoder.decode(start.name().as_ref())?.into_owned();

    let mut attributes = Vec::new();
    for attribute in start.attributes() {
        let attribute = attribute.map_err(quick_xml::Error::from)?;
        let key = decoder.decode(attribute.key.as_ref())?.into_owned();
        let value = attribute.unescape_value()?.into_owned();
        attributes.push((key, value));
    }

    Ok(Node {
        depth,
        name,
        attributes,
        text: None,
    })
}

fn malformed(reason: String) -> Error {
    error::MalformedDocument::new(reason).into()
}
