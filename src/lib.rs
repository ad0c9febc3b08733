//! Site Backend - the server side of the education site.
//!
//! This library provides the HTTP endpoints behind the site: a thin proxy to an
//! upstream chat-completion API, a contact-form inbox, and a minimal account
//! store. All records are held in process memory.
//!
//! # Architecture
//!
//! - **domain**: Value objects (record IDs, password digests) and presence checks
//! - **models**: Records, request bodies, and upstream wire types
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **client**: HTTP client for the upstream chat-completion API
//! - **repositories**: Storage traits and in-memory implementations
//! - **services**: Registration/login, contact submission, chat completion
//! - **server**: axum router and handlers
//! - **features**: Static table of disabled site pages
//! - **metrics**: Counters for upstream calls and endpoint activity

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod features;
pub mod metrics;
pub mod models;
pub mod repositories;
pub mod server;
pub mod services;

pub use client::ChatClient;
pub use config::Config;
pub use error::{ChatApiError, ConfigError, ServiceError};
pub use metrics::{HttpTimer, Metrics, MetricsSummary};
pub use models::{ChatTurn, ContactMessage, User, UserProfile};
pub use server::{app_router, AppState};
