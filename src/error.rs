use thiserror::Error;

use crate::{config::LoadError, infra::error::InfraError, server::OptionError, text::TextError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to load configuration: {0}")]
    Config(#[from] LoadError),
    #[error("failed to construct server: {0}")]
    Option(#[from] OptionError),
    #[error(transparent)]
    Text(#[from] TextError),
    #[error(transparent)]
    Infra(#[from] InfraError),
}
