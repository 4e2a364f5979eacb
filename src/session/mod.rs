mod actions;
mod core;
mod pointer;
#[cfg(test)]
mod tests;

pub use self::core::{NOTICE_DURATION, Notice, Session, SessionError};
