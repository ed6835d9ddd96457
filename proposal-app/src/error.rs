use proposal_catalog::CatalogError;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("Invalid {arg}: {value}")]
    InvalidArgument {
        arg: &'static str,
        value: String,
    },

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
