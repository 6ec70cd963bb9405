//! Value objects - identifiers and small immutable types

mod snowflake;

pub use snowflake::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
