use crate::{Element, XmlError, XmlNode};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::str;

pub(crate) fn parse(text: &str) -> Result<Element, XmlError> {
    let mut reader = Reader::from_str(text);
    let mut stack: Vec<Element> = Vec::new();
    let mut root = None;

    loop {
        match reader.read_event()? {
            Event::Start(start) => stack.push(open(&start)?),
            Event::Empty(start) => {
                let element = open(&start)?;
                close(&mut stack, &mut root, element)?;
            }
            Event::End(_) => {
                // quick-xml already checks that the end tag matches the open one.
                let element = stack
                    .pop()
                    .ok_or(XmlError::TrailingContent)?;
                close(&mut stack, &mut root, element)?;
            }
            Event::Text(text) => {
                let text = text.unescape()?;
                match stack.last_mut() {
                    Some(parent) => parent.push_child(text.into_owned()),
                    None if text.trim().is_empty() => {}
                    None if root.is_some() => return Err(XmlError::TrailingContent),
                    None => return Err(XmlError::MissingRoot),
                }
            }
            Event::CData(data) => {
                if let Some(parent) = stack.last_mut() {
                    parent.push_child(str::from_utf8(&data)?.to_owned());
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(XmlError::UnclosedElement(open.name().to_owned()));
    }
    root.ok_or(XmlError::MissingRoot)
}

fn open(start: &BytesStart<'_>) -> Result<Element, XmlError> {
    let mut element = Element::new(str::from_utf8(start.name().as_ref())?);
    for attribute in start.attributes() {
        let attribute = attribute.map_err(quick_xml::Error::from)?;
        let key = str::from_utf8(attribute.key.as_ref())?.to_owned();
        let value = attribute.unescape_value()?.into_owned();
        element.set_attribute(key, value);
    }
    Ok(element)
}

fn close(
    stack: &mut [Element],
    root: &mut Option<Element>,
    mut element: Element,
) -> Result<(), XmlError> {
    let has_elements = element.child_elements().next().is_some();
    if has_elements {
        element.retain_children(|child| {
            !matches!(child, XmlNode::Text(text) if text.trim().is_empty())
        });
    }
    match stack.last_mut() {
        Some(parent) => parent.push_child(element),
        None if root.is_some() => return Err(XmlError::TrailingContent),
        None => *root = Some(element),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_skips_declaration_and_indentation() {
        let element = parse(
            r##"<?xml version="1.0" encoding="UTF-8"?>
<!-- annotation -->
<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
	<rdf:Description rdf:about="#a">
		<rdf:value>42</rdf:value>
	</rdf:Description>
</rdf:RDF>
"##,
        )
        .unwrap();
        assert_eq!(element.name(), "rdf:RDF");
        assert_eq!(element.children().len(), 1);
        let description = element.find_child("rdf:Description").unwrap();
        assert_eq!(description.attribute("rdf:about"), Some("#a"));
        let value = description.find_child("rdf:value").unwrap();
        assert_eq!(value.text().as_deref(), Some("42"));
    }

    #[test]
    fn parse_unescapes_text_and_attributes() {
        let element = parse(r#"<a b="x &amp; y">1 &lt; 2</a>"#).unwrap();
        assert_eq!(element.attribute("b"), Some("x & y"));
        assert_eq!(element.text().as_deref(), Some("1 < 2"));
    }

    #[test]
    fn parse_keeps_whitespace_of_text_only_elements() {
        let element = parse("<a> padded </a>").unwrap();
        assert_eq!(element.text().as_deref(), Some(" padded "));
    }

    #[test]
    fn parse_rejects_unclosed_element() {
        let error = parse(r#"<rdf:RDF><rdf:Description rdf:about="a">"#).unwrap_err();
        assert!(matches!(
            error,
            XmlError::UnclosedElement(_) | XmlError::Syntax(_)
        ));
    }

    #[test]
    fn parse_rejects_mismatched_end() {
        assert!(matches!(parse("<a><b></a>"), Err(XmlError::Syntax(_))));
    }

    #[test]
    fn parse_rejects_empty_and_multiple_roots() {
        assert!(matches!(parse("  "), Err(XmlError::MissingRoot)));
        assert!(matches!(parse("<a/><b/>"), Err(XmlError::TrailingContent)));
    }
}
