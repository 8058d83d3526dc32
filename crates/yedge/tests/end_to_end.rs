use yedge::{
    Color, ErrorKind, FontStyle, GraphMLWriter, GroupStyles, NodeStyle, Position, Shape,
    WriterOptions, WriterState,
};

const NS_Y: &str = "http://www.yworks.com/xml/graphml";

fn named<'a, 'input>(
    doc: &'a roxmltree::Document<'input>,
    name: &str,
) -> Vec<roxmltree::Node<'a, 'input>> {
    doc.descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == name)
        .collect()
}

#[test]
fn grouped_document_reads_back() {
    let mut buf = Vec::new();
    let mut writer = GraphMLWriter::new(&mut buf);

    writer.open_graph().unwrap();
    let mut ids = Vec::new();
    for i in 0..3 {
        writer.group(&format!("Group #{}", i + 1), i != 1).unwrap();
        for j in 0..5 {
            ids.push(writer.node(&format!("N{}", i * 5 + j + 1)).unwrap());
        }
        writer.close_group().unwrap();
    }
    for k in 0..15 {
        writer
            .edge(&ids[k], &ids[(k * 4 + 3) % ids.len()])
            .unwrap();
    }
    writer.close_graph().unwrap();
    writer.close().unwrap();
    assert_eq!(writer.state(), WriterState::Closed);
    drop(writer);

    let xml = String::from_utf8(buf).unwrap();
    let doc = roxmltree::Document::parse(&xml).unwrap();

    assert_eq!(named(&doc, "graph").len(), 4);
    assert_eq!(named(&doc, "node").len(), 18);
    assert_eq!(named(&doc, "edge").len(), 15);
    assert_eq!(named(&doc, "ShapeNode").len(), 15);
    assert_eq!(named(&doc, "GroupNode").len(), 6);

    let folder_types: Vec<_> = named(&doc, "node")
        .into_iter()
        .filter_map(|n| n.attribute("yfiles.foldertype"))
        .collect();
    assert_eq!(folder_types, ["group", "folder", "group"]);

    // Every edge endpoint refers to a node of the document.
    let node_ids: Vec<_> = named(&doc, "node")
        .into_iter()
        .map(|n| n.attribute("id").unwrap())
        .collect();
    for edge in named(&doc, "edge") {
        assert!(node_ids.contains(&edge.attribute("source").unwrap()));
        assert!(node_ids.contains(&edge.attribute("target").unwrap()));
    }
    assert!(node_ids.contains(&"n12::n15"));
}

#[test]
fn styles_can_come_from_json() {
    let node: NodeStyle = serde_json::from_str(
        r##"{
            "general": { "width": 120.0, "fillColor": "#FFCC0080" },
            "shape": { "shape": "hexagon", "shadowColor": null },
            "label": { "fontStyle": "bolditalic", "position": "b" }
        }"##,
    )
    .unwrap();
    assert_eq!(node.width(), 120.0);
    assert_eq!(node.fill_color(), Some(Color::rgba(0xFF, 0xCC, 0x00, 0x80)));
    assert_eq!(node.shape(), Shape::Hexagon);
    assert_eq!(node.font_style(), FontStyle::BoldItalic);
    assert_eq!(node.position(), Position::Bottom);

    let groups: GroupStyles =
        serde_json::from_str(r#"{"open": {"closedWidth": 70.0}}"#).unwrap();
    assert_eq!(groups.open().closed_width(), 70.0);
    assert_eq!(groups.closed().closed_width(), 50.0);

    let mut buf = Vec::new();
    let mut writer = GraphMLWriter::with_options(&mut buf, WriterOptions::compact());
    writer.set_node_style(&node).unwrap();
    writer.set_group_styles(&groups).unwrap();
    writer.open_graph().unwrap();
    writer.node("hex").unwrap();
    writer.close_graph().unwrap();
    writer.close().unwrap();
    drop(writer);

    let xml = String::from_utf8(buf).unwrap();
    let doc = roxmltree::Document::parse(&xml).unwrap();
    let shape = named(&doc, "Shape")[0];
    assert_eq!(shape.tag_name().namespace(), Some(NS_Y));
    assert_eq!(shape.attribute("type"), Some("hexagon"));
    assert!(named(&doc, "DropShadow").is_empty());
    assert_eq!(named(&doc, "Fill")[0].attribute("color"), Some("#FFCC0080"));
    let label = named(&doc, "NodeLabel")[0];
    assert_eq!(label.attribute("fontStyle"), Some("bolditalic"));
    assert_eq!(label.attribute("modelPosition"), Some("b"));
}

#[test]
fn unknown_vocabulary_in_json_is_rejected() {
    let err = serde_json::from_str::<NodeStyle>(r#"{"shape": {"shape": "blob"}}"#)
        .unwrap_err();
    assert!(err.to_string().contains("blob"), "{err}");

    let err = "blob".parse::<Shape>().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IllegalArgument);
}

#[cfg(feature = "graph")]
#[test]
fn graph_facade_writes_nested_groups() {
    use yedge::graph::DirectedGraph;

    let mut g: DirectedGraph<&str, ()> = DirectedGraph::new();
    let a = g.add_node("A");
    let x = g.add_child(&a, "X").unwrap();
    let y = g.add_child(&a, "Y").unwrap();
    g.add_edge(&x, &y, ()).unwrap();

    let mut buf = Vec::new();
    g.to_graphml(&mut buf).unwrap();
    let xml = String::from_utf8(buf).unwrap();
    let doc = roxmltree::Document::parse(&xml).unwrap();

    let edge = named(&doc, "edge")[0];
    assert_eq!(edge.attribute("source"), Some("n0::n1"));
    assert_eq!(edge.attribute("target"), Some("n0::n2"));
    assert_eq!(named(&doc, "graph")[1].attribute("id"), Some("n0:"));
}
