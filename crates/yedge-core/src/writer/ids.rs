/// Separator between a group id and the ids allocated inside it.
pub const SCOPE_SEPARATOR: &str = "::";

/// Allocates node/group and edge identifiers.
///
/// Both counters are global to the document: entering a group does not reset them. Node ids are
/// prefixed by the id of the innermost open group, which already carries its own ancestors, so a
/// node in `n0` → `n0::n1` reads `n0::n1::n2`.
#[derive(Debug, Default)]
pub(crate) struct IdAllocator {
    next_node: u64,
    next_edge: u64,
    scopes: Vec<String>,
}

impl IdAllocator {
    pub(crate) fn next_node_id(&mut self) -> String {
        let seq = self.next_node;
        self.next_node += 1;

        match self.scopes.last() {
            None => format!("n{seq}"),
            Some(group_id) => format!("{group_id}{SCOPE_SEPARATOR}n{seq}"),
        }
    }

    pub(crate) fn next_edge_id(&mut self) -> String {
        let seq = self.next_edge;
        self.next_edge += 1;
        format!("e{seq}")
    }

    pub(crate) fn push_scope(&mut self, group_id: String) {
        self.scopes.push(group_id);
    }

    pub(crate) fn pop_scope(&mut self) -> Option<String> {
        self.scopes.pop()
    }

    pub(crate) fn depth(&self) -> usize {
        self.scopes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_level_ids_are_flat() {
        let mut ids = IdAllocator::default();
        assert_eq!(ids.next_node_id(), "n0");
        assert_eq!(ids.next_node_id(), "n1");
        assert_eq!(ids.next_edge_id(), "e0");
        assert_eq!(ids.next_edge_id(), "e1");
    }

    #[test]
    fn nested_ids_carry_every_enclosing_group() {
        let mut ids = IdAllocator::default();
        let outer = ids.next_node_id();
        ids.push_scope(outer.clone());
        let inner = ids.next_node_id();
        ids.push_scope(inner.clone());
        let leaf = ids.next_node_id();

        assert_eq!(inner, "n0::n1");
        assert_eq!(leaf, "n0::n1::n2");
        assert_eq!(ids.depth(), 2);

        assert_eq!(ids.pop_scope().as_deref(), Some("n0::n1"));
        assert_eq!(ids.next_node_id(), "n0::n3");
        ids.pop_scope();
        assert_eq!(ids.next_node_id(), "n4");
        assert_eq!(ids.pop_scope(), None);
    }
}
