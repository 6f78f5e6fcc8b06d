//! Query builders for external service APIs used by the launcher.
//!
//! The launcher's mod browser queries the CurseForge REST API. Only the
//! request construction lives here - transport and response handling
//! belong to whatever HTTP client consumes the URLs, so everything in
//! this module is pure and side-effect free.

pub mod curseforge;
