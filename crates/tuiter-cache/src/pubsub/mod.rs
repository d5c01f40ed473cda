//! Redis Pub/Sub module.
//!
//! Fans notifications out to per-user channels. Subscribing and delivering
//! to clients is the transport's job; only publishing lives here.

mod publisher;

pub use publisher::{user_channel, Publisher};
