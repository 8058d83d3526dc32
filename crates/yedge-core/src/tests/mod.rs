
use crate::*;

/// Runs `build` against a compact writer and returns the produced document.
///
/// The writer is closed afterwards whatever `build` returned, so partial output is still
/// observable.
pub(crate) fn render<F>(build: F) -> (Result<()>, String)
where
    F: FnOnce(&mut GraphMLWriter<&mut Vec<u8>>) -> Result<()>,
{
    let mut buf = Vec::new();
    let outcome = {
        let mut writer = GraphMLWriter::with_options(&mut buf, WriterOptions::compact());
        let outcome = build(&mut writer);
        writer.close().unwrap();
        outcome
    };
    (outcome, String::from_utf8(buf).unwrap())
}

/// Like [`render`] but fails the test when `build` fails.
pub(crate) fn render_ok<F>(build: F) -> String
where
    F: FnOnce(&mut GraphMLWriter<&mut Vec<u8>>) -> Result<()>,
{
    let (outcome, xml) = render(build);
    outcome.unwrap();
    xml
}

pub(crate) fn elements<'a, 'input>(
    doc: &'a roxmltree::Document<'input>,
    local_name: &str,
) -> Vec<roxmltree::Node<'a, 'input>> {
    doc.descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == local_name)
        .collect()
}
