use std::fs;
use std::io::Write;
use std::path::Path;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::{Element, Error, Result};

const INDENT_CHAR: u8 = b' ';
const INDENT_SIZE: usize = 2;

/// Renders `root` as a UTF-8 XML document with two-space indentation,
/// declaration first, newline-terminated.
pub fn render(root: &Element) -> Result<Vec<u8>> {
    let mut writer = Writer::new_with_indent(Vec::new(), INDENT_CHAR, INDENT_SIZE);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    write_element(&mut writer, root)?;

    let mut out = writer.into_inner();
    out.push(b'\n');
    Ok(out)
}

/// Writes `root` to `path`, creating missing parent directories and replacing
/// any existing file.
pub fn write_document(path: &Path, root: &Element) -> Result<()> {
    let bytes = render(root)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| Error::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, bytes).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn write_element<W: Write>(writer: &mut Writer<W>, el: &Element) -> Result<()> {
    let mut start = BytesStart::new(el.name());
    for (key, value) in el.attributes() {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if el.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    if let Some(text) = el.text_content() {
        writer.write_event(Event::Text(BytesText::new(text)))?;
    }
    for child in el.child_elements() {
        write_element(writer, child)?;
    }
    writer.write_event(Event::End(BytesEnd::new(el.name())))?;
    Ok(())
}
