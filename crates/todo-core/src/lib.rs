//! Core of the `todo` command: the list file format, the list itself, and the
//! mapping from command-line arguments to one action per invocation.

pub mod action;
pub mod codec;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod list;
pub mod prompt;
pub mod storage;

pub use action::{Action, ActionFlags};
pub use error::{ArgumentError, TodoError};
pub use list::{Todo, TodoList};
