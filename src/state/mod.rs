/// State management module
///
/// This module handles the browsing state of the viewer:
/// - The folder/cursor/image session (session.rs)
/// - Change notifications published by the session (data.rs)

pub mod data;
pub mod session;
