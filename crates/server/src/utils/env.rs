use std::num::ParseIntError;

/// Port used when `PORT` is unset or empty
pub const DEFAULT_PORT: u16 = 3001;

/// Resolves the TCP port to bind from the `PORT` environment variable
pub fn resolve_port() -> Result<u16, ParseIntError> {
    parse_port(std::env::var("PORT").ok())
}

fn parse_port(raw: Option<String>) -> Result<u16, ParseIntError> {
    match raw.as_deref() {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value.parse(),
    }
}
