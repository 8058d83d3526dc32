#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("The node with id '{id}' doesn't exist")]
    UnknownNode { id: String },

    #[error("The given {role} node '{id}' doesn't belong to this graph")]
    NotInGraph { role: &'static str, id: String },

    #[error("The node '{child}' can't be moved under '{parent}': it would become its own ancestor")]
    Cycle { child: String, parent: String },

    #[error(transparent)]
    Writer(#[from] yedge_core::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
