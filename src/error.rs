use thiserror::Error;

#[derive(Error, Debug)]
pub enum CiStateError {
    #[error("Invalid configuration: missing {missing} handle")]
    InvalidConfiguration { missing: &'static str },
}

pub type Result<T> = std::result::Result<T, CiStateError>;
