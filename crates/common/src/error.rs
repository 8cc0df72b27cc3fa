use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown theme `{0}`")]
    Theme(String),
    #[error("unknown tab `{0}`")]
    Tab(String),
}
