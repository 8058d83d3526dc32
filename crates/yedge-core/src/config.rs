/// Output options of a [`GraphMLWriter`](crate::GraphMLWriter).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WriterOptions {
    /// Spaces per nesting level; `0` writes everything on one line.
    pub indent: usize,
    /// Id of the root `<graph>` element.
    pub graph_id: String,
    /// `edgedefault` of the root graph and of every group graph.
    pub edge_default: String,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            graph_id: "G".to_string(),
            edge_default: "directed".to_string(),
        }
    }
}

impl WriterOptions {
    /// Single-line output, handy for snapshot-style assertions.
    pub fn compact() -> Self {
        Self {
            indent: 0,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let opts: WriterOptions = serde_json::from_str(r#"{"graphId": "root"}"#).unwrap();
        assert_eq!(opts.graph_id, "root");
        assert_eq!(opts.indent, 2);
        assert_eq!(opts.edge_default, "directed");
    }
}
