pub mod delimited;
pub mod graphql;

mod error;

pub use error::{Error, Result};
