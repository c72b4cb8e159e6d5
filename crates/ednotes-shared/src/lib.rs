//! Data model shared between the EdNotes server and its clients.
//!
//! Records ([`Article`], [`Category`], [`Project`]) mirror the stored rows,
//! the derived navigation types ([`CategoryTreeNode`], [`ArticleSummary`])
//! are what the navigation endpoints emit, and [`api`] holds request bodies.

pub mod api;
mod models;

pub use models::*;
