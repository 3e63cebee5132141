//! # tilequote-db: Database Layer for TileQuote
//!
//! Local SQLite storage for rate presets, saved quotes and the working
//! document, using sqlx for async access.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        TileQuote Data Flow                              │
//! │                                                                         │
//! │  tilequote save / quotes / presets / workspace                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  tilequote-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │               │    │  (embedded)  │  │   │
//! │  │   │               │    │ PresetRepo    │    │ 001_initial  │  │   │
//! │  │   │ SqlitePool    │◄───│ SavedQuoteRepo│    │   _schema    │  │   │
//! │  │   │               │    │ WorkspaceRepo │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │   SQLite file (platform data dir, or TILEQUOTE_DB_PATH)         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tilequote_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("tilequote.db")).await?;
//! let saved = db.quotes().save(&document, Utc::now()).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

pub use repository::document::WorkspaceRepository;
pub use repository::preset::PresetRepository;
pub use repository::quote::{SavedQuoteRepository, SavedQuoteSummary};
