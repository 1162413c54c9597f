//! # Fragments
//!
//! A [`Fragment`] is the unit every builder produces: the lines of one markup
//! element (or of several sibling elements, for the mesh composites), each line
//! carrying its nesting depth relative to the fragment's own root. Indentation is
//! only turned into whitespace when the fragment is rendered, so nesting a fragment
//! inside another is a uniform depth offset and never touches the text.
//!
//! Fragments are values. Nothing in the crate mutates a fragment after handing it
//! out; composites copy their children and shift the copies.

use crate::config::Options;
use crate::write_xdmf;

use derive_more::Deref;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// one line of markup and how deep it is nested inside its fragment
pub struct Line {
    depth: usize,
    text: String,
}

impl Line {
    pub(crate) fn new<T: Into<String>>(depth: usize, text: T) -> Self {
        Self {
            depth,
            text: text.into(),
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// the markup without any indentation
    pub fn text(&self) -> &str {
        &self.text
    }

    fn shifted(&self, levels: usize) -> Self {
        Self {
            depth: self.depth + levels,
            text: self.text.clone(),
        }
    }

    /// the line as it is written out: indentation followed by the markup
    pub fn render(&self, options: &Options) -> String {
        let mut out = options.indentation(self.depth);
        out.push_str(&self.text);
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref)]
/// An ordered, already nested sequence of markup lines.
///
/// Every fragment handed out by this crate has at least an opening and a closing
/// line, and none of its lines are empty.
pub struct Fragment {
    lines: Vec<Line>,
}

impl Fragment {
    /// `open`, the `body` lines (depths as given), then `close`
    pub(crate) fn element<I>(open: String, body: I, close: &str) -> Self
    where
        I: IntoIterator<Item = Line>,
    {
        let mut lines = vec![Line::new(0, open)];
        lines.extend(body);
        lines.push(Line::new(0, close));
        Self { lines }
    }

    /// `open`, every child shifted `levels` deeper, then `close`
    pub(crate) fn wrap<'a, I>(open: String, children: I, levels: usize, close: &str) -> Self
    where
        I: IntoIterator<Item = &'a Fragment>,
    {
        let body = children
            .into_iter()
            .flat_map(|child| child.lines.iter().map(move |line| line.shifted(levels)))
            .collect::<Vec<_>>();

        Self::element(open, body, close)
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// a copy of this fragment nested `levels` deeper
    pub fn indented(&self, levels: usize) -> Self {
        Self {
            lines: self.lines.iter().map(|line| line.shifted(levels)).collect(),
        }
    }

    /// append `other` as a sibling after this fragment
    pub fn concat(mut self, other: Fragment) -> Self {
        self.lines.extend(other.lines);
        self
    }

    /// the lines with their indentation applied
    pub fn render(&self, options: &Options) -> Vec<String> {
        self.lines.iter().map(|line| line.render(options)).collect()
    }

    /// the rendered lines joined into a single string
    pub fn to_markup(&self, options: &Options) -> String {
        write_xdmf::join(&self.render(options), "\n")
    }
}

impl From<Fragment> for Vec<String> {
    fn from(fragment: Fragment) -> Self {
        fragment.render(&Options::default())
    }
}
