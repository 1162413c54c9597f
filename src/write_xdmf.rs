use crate::fragment::Fragment;
use crate::prelude::*;

use std::io::{BufWriter, Write};
use std::path::Path;

/// the `Version` attribute of the root element
pub const XDMF_VERSION: &str = "3.0";

/// Join `lines` with `separator` between them.
///
/// No separator is inserted where the text accumulated so far already ends with the
/// separator's first character, or where the next line starts with it. Lines that
/// carry their own line breaks therefore do not produce blank lines.
///
/// ```
/// assert_eq!(xdmf::join(&["a", "b"], "\n"), "a\nb");
/// assert_eq!(xdmf::join(&["a\n", "b"], "\n"), "a\nb");
/// assert_eq!(xdmf::join(&["a", "\nb"], "\n"), "a\nb");
/// ```
pub fn join<S: AsRef<str>>(lines: &[S], separator: &str) -> String {
    let first = separator.chars().next();
    let mut out = String::new();

    for line in lines {
        let line = line.as_ref();

        let separated = match first {
            None => true,
            Some(c) => out.is_empty() || out.ends_with(c) || line.starts_with(c),
        };

        if !separated {
            out.push_str(separator);
        }

        out.push_str(line);
    }

    out
}

/// `composite` wrapped in the `<Xdmf>` and `<Domain>` root elements
pub fn document<C: Composite + ?Sized>(composite: &C) -> Fragment {
    let domain = Fragment::wrap("<Domain>".to_string(), [&composite.fragment()], 1, "</Domain>");

    Fragment::wrap(
        format!("<Xdmf Version=\"{}\">", XDMF_VERSION),
        [&domain],
        1,
        "</Xdmf>",
    )
}

/// Serialize `composite` to a complete XDMF document.
///
/// The composite's lines end up two levels below the root element:
///
/// ```text
/// <Xdmf Version="3.0">
///     <Domain>
///         <Grid CollectionType="Temporal" GridType="Collection" Name="Grid">
///         ...
///     </Domain>
/// </Xdmf>
/// ```
pub fn write<C: Composite + ?Sized>(composite: &C, options: &Options) -> String {
    join(&document(composite).render(options), "\n")
}

/// Write the document for `composite` followed by a newline to `writer`, and return it.
pub fn write_to<W, C>(mut writer: W, composite: &C, options: &Options) -> Result<String, Error>
where
    W: Write,
    C: Composite + ?Sized,
{
    let document = write(composite, options);

    writer.write_all(document.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    Ok(document)
}

/// Write the document for `composite` to a file at `path`, replacing any existing file.
///
/// The file is closed before this returns, whether or not the write succeeded.
pub fn write_file<P, C>(path: P, composite: &C, options: &Options) -> Result<String, Error>
where
    P: AsRef<Path>,
    C: Composite + ?Sized,
{
    let path = path.as_ref();
    log::debug!("writing xdmf document to {}", path.display());

    let file = std::fs::File::create(path)?;
    write_to(BufWriter::new(file), composite, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_plain_lines() {
        assert_eq!(join(&["a", "b"], "\n"), "a\nb");
        assert_eq!(join(&["a"], "\n"), "a");
        assert_eq!(join::<&str>(&[], "\n"), "");
    }

    #[test]
    fn join_skips_existing_separators() {
        assert_eq!(join(&["a\n", "b"], "\n"), "a\nb");
        assert_eq!(join(&["a", "\nb"], "\n"), "a\nb");
        assert_eq!(join(&["a\nb", "c"], "\n"), "a\nb\nc");
        assert_eq!(join(&["a", "b", "c"], ", "), "a, b, c");
        assert_eq!(join(&["a,", "b"], ", "), "a,b");
    }

    #[test]
    fn join_with_empty_separator() {
        assert_eq!(join(&["a", "b"], ""), "ab");
    }

    #[test]
    fn empty_domain_wrapping() {
        let grid = Grid::new(Vec::new());
        let rendered = document(&grid).render(&Options::default());

        assert_eq!(rendered[0], "<Xdmf Version=\"3.0\">");
        assert_eq!(rendered[1], "    <Domain>");
        assert_eq!(
            rendered[2],
            "        <Grid CollectionType=\"Temporal\" GridType=\"Collection\" Name=\"Grid\">"
        );
        assert_eq!(rendered[rendered.len() - 2], "    </Domain>");
        assert_eq!(rendered[rendered.len() - 1], "</Xdmf>");
    }

    #[test]
    fn write_to_appends_newline() {
        let grid = Grid::new(Vec::new());
        let mut buffer = Vec::new();

        let document = write_to(&mut buffer, &grid, &Options::default()).unwrap();

        let written = String::from_utf8(buffer).unwrap();
        assert_eq!(written, format!("{}\n", document));
        assert!(!document.ends_with('\n'));
    }
}
