//! Value objects - immutable types that represent domain concepts

mod snowflake;
mod user_ref;

pub use snowflake::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
pub use user_ref::UserRef;
