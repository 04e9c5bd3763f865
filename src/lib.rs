//! Assistant Bot - a command-line contact book with birthday reminders.
//!
//! The bot keeps an in-memory directory of people with their phone numbers
//! and birthdays, and answers simple commands read from standard input.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (names, phone numbers, birth dates)
//! - **models**: Contact records and birthday entries
//! - **repositories**: Storage seams with in-memory implementations
//! - **services**: Directory and birthday business logic, weekly report
//! - **repl**: Command parsing, dispatch and the interactive loop
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **metrics**: Session counters

pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod repl;
pub mod repositories;
pub mod services;

pub use config::Config;
pub use error::{AssistantError, AssistantResult, ConfigError};
pub use metrics::{Metrics, MetricsSummary};
pub use models::{BirthdayEntry, Contact};
pub use repl::{run_repl, AssistantBot, Command, Reply};
pub use services::{BirthdayService, ContactService, UpcomingBirthdays};
