//! Test doubles for exercising the MSAL bridge without a native backend.

mod channel;

pub use channel::{FakeChannel, Invocation};
