//! # Profile Twin
//!
//! A profile-backed question-answering chatbot with keyword retrieval.
//!
//! Profile Twin flattens a structured profile JSON into a flat list of
//! documents, ranks them against user questions with a small keyword
//! scorer, and either shows the matched context directly or forwards it
//! to a hosted completion API for a conversational answer.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐   ┌──────────────┐   ┌───────────────┐
//! │ profile.json│──▶│   Builder    │──▶│ Document Store│
//! └─────────────┘   └──────────────┘   │    (JSON)     │
//!                                      └──────┬────────┘
//!                                             │
//!                         ┌───────────────────┤
//!                         ▼                   ▼
//!                   ┌──────────┐        ┌──────────┐
//!                   │   Chat   │        │  Query   │
//!                   │ (search +│        │ (search  │
//!                   │   API)   │        │  only)   │
//!                   └──────────┘        └──────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! twin build                 # flatten profile.json into the store
//! twin query python mysql    # non-interactive search
//! twin chat                  # interactive chatbot
//! twin stats                 # store overview
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`models`] | Core data types |
//! | [`store`] | Document store load/save |
//! | [`builder`] | Profile flattening |
//! | [`search`] | Both keyword matching variants |
//! | [`context`] | Context block rendering |
//! | [`completion`] | Hosted completion API client |
//! | [`chat`] | Interactive orchestrator |
//! | [`query`] | Non-interactive search command |
//! | [`stats`] | Store overview command |

pub mod builder;
pub mod chat;
pub mod completion;
pub mod config;
pub mod context;
pub mod models;
pub mod query;
pub mod search;
pub mod stats;
pub mod store;
