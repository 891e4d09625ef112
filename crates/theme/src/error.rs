use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    #[error("invalid theme kind '{0}', expected 'dark' or 'light'")]
    InvalidThemeKind(String),
}
