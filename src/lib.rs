//! # Uplift - Update companion for the Drift Launcher
//!
//! A command-line utility that keeps the Drift Launcher up to date by
//! coordinating its external updater process.
//!
//! ## Features
//!
//! - **Scheduled Checks**: Single-shot timer derived from the last
//!   completed check and the configured interval
//! - **Manual Checks**: One-shot check with full outcome reporting
//! - **Offer Workflow**: Install, skip-forever, or postpone decisions
//!   with a persisted per-version skip registry
//! - **Detached Install**: Fire-and-forget handoff to the updater, which
//!   restarts the launcher when it finishes
//! - **Mod Query URLs**: Pure query builders for the launcher's mod
//!   repository API
//!
//! ## Usage
//!
//! ```rust,no_run
//! use uplift::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
