//! Thin SVG element writer over `quick-xml`.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::error::{ReportError, Result};

/// Attribute list with owned values.
pub type Attrs<'a> = [(&'a str, String)];

pub struct SvgWriter {
    xml: Writer<Vec<u8>>,
}

impl SvgWriter {
    pub fn new() -> Result<Self> {
        let mut writer = Self {
            xml: Writer::new_with_indent(Vec::new(), b' ', 2),
        };
        writer.emit(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        Ok(writer)
    }

    pub fn start(&mut self, name: &str, attrs: &Attrs<'_>) -> Result<()> {
        let element = build_element(name, attrs);
        self.emit(Event::Start(element))
    }

    pub fn end(&mut self, name: &str) -> Result<()> {
        self.emit(Event::End(BytesEnd::new(name)))
    }

    pub fn empty(&mut self, name: &str, attrs: &Attrs<'_>) -> Result<()> {
        let element = build_element(name, attrs);
        self.emit(Event::Empty(element))
    }

    /// Writes `<name attrs>text</name>`.
    pub fn text(&mut self, name: &str, attrs: &Attrs<'_>, text: &str) -> Result<()> {
        self.start(name, attrs)?;
        self.emit(Event::Text(BytesText::new(text)))?;
        self.end(name)
    }

    pub fn finish(self) -> Vec<u8> {
        self.xml.into_inner()
    }

    fn emit(&mut self, event: Event<'_>) -> Result<()> {
        self.xml
            .write_event(event)
            .map_err(|err| ReportError::SvgWrite {
                message: err.to_string(),
            })
    }
}

fn build_element<'a>(name: &'a str, attrs: &'a Attrs<'_>) -> BytesStart<'a> {
    let mut element = BytesStart::new(name);
    for (key, value) in attrs {
        element.push_attribute((*key, value.as_str()));
    }
    element
}

/// Compact coordinate formatting (two decimals, trailing zeros dropped).
pub fn num(value: f64) -> String {
    let text = format!("{value:.2}");
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Shorthand for building an attribute pair.
pub fn attr(key: &str, value: impl ToString) -> (&str, String) {
    (key, value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_compact() {
        assert_eq!(num(10.0), "10");
        assert_eq!(num(10.5), "10.5");
        assert_eq!(num(10.256), "10.26");
        assert_eq!(num(-0.001), "0");
    }

    #[test]
    fn text_is_escaped() {
        let mut writer = SvgWriter::new().unwrap();
        writer
            .text("text", &[attr("x", num(5.0))], "Korea & Vietnam <1>")
            .unwrap();
        let svg = String::from_utf8(writer.finish()).unwrap();
        assert!(svg.contains(r#"<text x="5">Korea &amp; Vietnam &lt;1&gt;</text>"#));
    }
}
