//! # Repository Module
//!
//! Database repository implementations for TileQuote.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  CLI subcommand                                                         │
//! │       │                                                                 │
//! │       │  db.quotes().save(&doc, now)                                    │
//! │       ▼                                                                 │
//! │  SavedQuoteRepository                                                   │
//! │  ├── save(&self, doc, now)                                              │
//! │  ├── list(&self)                                                        │
//! │  ├── get(&self, id)                                                     │
//! │  └── delete(&self, id)                                                  │
//! │       │                                                                 │
//! │       │  SQL Query (JSON column in, JSON column out)                     │
//! │       ▼                                                                 │
//! │  SQLite Database                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`PresetRepository`](preset::PresetRepository) - Named rate sheets
//! - [`SavedQuoteRepository`](quote::SavedQuoteRepository) - Frozen quote snapshots
//! - [`WorkspaceRepository`](document::WorkspaceRepository) - The document being edited

pub mod document;
pub mod preset;
pub mod quote;
