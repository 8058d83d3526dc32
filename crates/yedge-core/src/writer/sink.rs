//! Thin element-stack layer over `quick_xml::Writer`.
//!
//! `quick_xml` needs the element name again when closing, so the sink remembers every element it
//! opened and `end()` closes the innermost one.

use std::fmt::Display;
use std::io::Write;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::error::Result;

/// A start or empty tag being assembled.
pub(crate) struct Tag<'a> {
    name: &'a str,
    start: BytesStart<'a>,
}

impl<'a> Tag<'a> {
    pub(crate) fn new(name: &'a str) -> Self {
        Self {
            name,
            start: BytesStart::new(name),
        }
    }

    /// Appends an attribute; the value is escaped.
    pub(crate) fn attr(mut self, key: &str, value: impl Display) -> Self {
        let value = value.to_string();
        self.start.push_attribute((key, value.as_str()));
        self
    }

    pub(crate) fn attr_if(self, cond: bool, key: &str, value: impl Display) -> Self {
        if cond { self.attr(key, value) } else { self }
    }
}

pub(crate) struct XmlSink<W: Write> {
    xml: quick_xml::Writer<W>,
    open: Vec<String>,
}

impl<W: Write> XmlSink<W> {
    pub(crate) fn new(inner: W, indent: usize) -> Self {
        let xml = if indent == 0 {
            quick_xml::Writer::new(inner)
        } else {
            quick_xml::Writer::new_with_indent(inner, b' ', indent)
        };
        Self {
            xml,
            open: Vec::new(),
        }
    }

    pub(crate) fn declaration(&mut self) -> Result<()> {
        self.xml
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        Ok(())
    }

    pub(crate) fn start(&mut self, tag: Tag<'_>) -> Result<()> {
        let name = tag.name.to_string();
        self.xml.write_event(Event::Start(tag.start))?;
        self.open.push(name);
        Ok(())
    }

    pub(crate) fn empty(&mut self, tag: Tag<'_>) -> Result<()> {
        self.xml.write_event(Event::Empty(tag.start))?;
        Ok(())
    }

    pub(crate) fn text(&mut self, text: &str) -> Result<()> {
        self.xml.write_event(Event::Text(BytesText::new(text)))?;
        Ok(())
    }

    /// Closes the innermost open element. Closing with nothing open is a no-op.
    pub(crate) fn end(&mut self) -> Result<()> {
        if let Some(name) = self.open.pop() {
            self.xml.write_event(Event::End(BytesEnd::new(name)))?;
        }
        Ok(())
    }

    /// `start` + `text` + `end` for an element whose only content is character data.
    pub(crate) fn text_element(&mut self, tag: Tag<'_>, text: &str) -> Result<()> {
        self.start(tag)?;
        self.text(text)?;
        self.end()
    }

    pub(crate) fn flush(&mut self) -> std::io::Result<()> {
        self.xml.get_mut().flush()
    }

    pub(crate) fn into_inner(self) -> W {
        self.xml.into_inner()
    }
}

/// One decimal, the way yEd writes dimensions (`40.0`).
pub(crate) fn fmt_f1(v: f64) -> String {
    format!("{v:.1}")
}

/// Rounded to an integer, for the non-`F` inset attributes.
pub(crate) fn fmt_f0(v: f64) -> String {
    format!("{:.0}", v.round())
}
