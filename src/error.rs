use thiserror::Error;

#[derive(Error, Debug)]
pub enum PizzaError {
    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("too many toppings: {requested} selected, limit is {limit}")]
    ToppingLimit { limit: usize, requested: usize },

    #[error("duplicate topping: {0}")]
    DuplicateTopping(String),

    #[error("topping names must be non-empty (found {0:?})")]
    BlankTopping(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PizzaError>;
