use crate::{Element, XmlError, XmlNode};
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Write;

const INDENT_SIZE: usize = 2;

/// Writes `element` to `output`, indenting nested elements.
///
/// Elements without children are self-closing and text is written inline with its parent tags.
pub(crate) fn write<W: Write>(element: &Element, output: W) -> Result<W, XmlError> {
    let mut writer = Writer::new_with_indent(output, b' ', INDENT_SIZE);
    write_element(&mut writer, element)?;
    Ok(writer.into_inner())
}

fn write_element<W: Write>(writer: &mut Writer<W>, element: &Element) -> Result<(), XmlError> {
    let mut start = BytesStart::new(element.name());
    for (key, value) in element.attributes() {
        start.push_attribute((key, value));
    }

    if element.children().is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    for child in element.children() {
        match child {
            XmlNode::Element(child) => write_element(writer, child)?,
            XmlNode::Text(text) => writer.write_event(Event::Text(BytesText::new(text)))?,
        }
    }
    writer.write_event(Event::End(BytesEnd::new(element.name())))?;
    Ok(())
}
