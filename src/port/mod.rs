//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the extension points in the hexagonal architecture. The swap
//! orchestrator drives four external collaborators through the outbound
//! ports:
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │   Swap orchestrator     │
//!                    └────────────┬────────────┘
//!        ┌───────────────┬────────┴───────┬────────────────┐
//!        ▼               ▼                ▼                ▼
//!  ┌──────────┐   ┌─────────────┐  ┌─────────────┐  ┌────────────┐
//!  │  Wallet  │   │   Token     │  │  Exchange   │  │  Receipt   │
//!  │Connector │   │  Contract   │  │  Contract   │  │  Watcher   │
//!  └──────────┘   └─────────────┘  └─────────────┘  └────────────┘
//! ```
//!
//! The inbound ports are what the CLI sees of the application.

pub mod inbound;
pub mod outbound;
