use std::fmt;

/// Lifecycle of a [`GraphMLWriter`](crate::GraphMLWriter).
///
/// ```text
/// Initial -> DocumentOpened -> GraphOpened -> GraphClosed -> DocumentClosed -> Closed
/// ```
///
/// `DocumentOpened -> DocumentClosed` is allowed as well, and every state except `Closed` may
/// jump straight to `Closed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WriterState {
    Initial,
    DocumentOpened,
    GraphOpened,
    GraphClosed,
    DocumentClosed,
    Closed,
}

impl WriterState {
    pub const ALL: [WriterState; 6] = [
        WriterState::Initial,
        WriterState::DocumentOpened,
        WriterState::GraphOpened,
        WriterState::GraphClosed,
        WriterState::DocumentClosed,
        WriterState::Closed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WriterState::Initial => "INITIAL",
            WriterState::DocumentOpened => "DOCUMENT_OPENED",
            WriterState::GraphOpened => "GRAPH_OPENED",
            WriterState::GraphClosed => "GRAPH_CLOSED",
            WriterState::DocumentClosed => "DOCUMENT_CLOSED",
            WriterState::Closed => "CLOSED",
        }
    }

    pub fn can_transition_to(self, target: WriterState) -> bool {
        use WriterState::*;

        match (self, target) {
            (Closed, _) => false,
            (_, Closed) => true,
            (Initial, DocumentOpened)
            | (DocumentOpened, GraphOpened)
            | (DocumentOpened, DocumentClosed)
            | (GraphOpened, GraphClosed)
            | (GraphClosed, DocumentClosed) => true,
            _ => false,
        }
    }
}

impl fmt::Display for WriterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
