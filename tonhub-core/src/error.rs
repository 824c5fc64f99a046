use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Handler error: {0}")]
    Handler(#[from] HandlerError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Bot token not set")]
    MissingToken,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum HandlerError {
    #[error("Message has no sender display name")]
    MissingSenderName,

    #[error("Unsupported command: {0}")]
    UnsupportedCommand(String),
}

pub type Result<T> = std::result::Result<T, BotError>;
