//! Shopsync - A safe-by-default store-sync agent for B2B commerce portals.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── run           # Execute a sync run
//! │   ├── status        # Show resolved config and backend availability
//! │   ├── redact        # Mask a value for safe sharing
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # Env + .shopsync.toml configuration
//!     ├── secrets/      # Secret resolution backends
//!     │   ├── mod       # SecretBackend trait, aliases, provider
//!     │   ├── mock      # Deterministic placeholder backend
//!     │   └── gcp       # Live backend via gcloud CLI (feature `gcp`)
//!     ├── redact        # Display masking and fingerprints
//!     ├── agent         # Orchestrated sync run with outer error boundary
//!     ├── notify        # Log-only notification sink
//!     └── pacing        # Request pacing delays
//! ```
//!
//! # Features
//!
//! - Secrets requested by non-sensitive alias, never logged by value
//! - Mock mode by default; live resolution behind the `gcp` feature
//! - Single-shot best-effort runs with classified failure reporting
//! - Immutable configuration collected once at startup

pub mod cli;
pub mod core;
pub mod error;
