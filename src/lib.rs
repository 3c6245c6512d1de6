//! roflswap - WATER/FIRE swaps on the ROFLSwap dark-pool exchange.
//!
//! A swap is two dependent transactions on Oasis Sapphire: an ERC-20
//! approval that lets the exchange pull the sold token, then a `placeOrder`
//! call carrying the encoded order. The order id is read back from the
//! exchange's `OrderPlaced` event.
//!
//! # Architecture
//!
//! The crate follows a hexagonal layout:
//!
//! - [`domain`] - Tokens, amounts, the swap attempt state machine, order
//!   payloads and event decoding. No I/O.
//! - [`port`] - Inbound operator use cases consumed by the CLI, and
//!   outbound traits for the wallet, the two contracts and the receipt
//!   source.
//! - [`application`] - The swap orchestrator and receipt polling.
//! - [`adapter`] - The CLI and the Sapphire JSON-RPC implementations of the
//!   ports (the latter behind the `sapphire` feature).
//! - [`infrastructure`] - Configuration, wiring and the operator that
//!   implements the inbound port.
//!
//! # Example
//!
//! ```no_run
//! use roflswap::domain::intent::SwapIntent;
//! use roflswap::domain::token::Token;
//! use roflswap::infrastructure::bootstrap::build_orchestrator;
//! use roflswap::infrastructure::config::settings::Config;
//!
//! # async fn run() -> roflswap::error::Result<()> {
//! let config = Config::load_or_default("config.toml")?;
//! let (_wallet, orchestrator) = build_orchestrator(&config)?;
//! orchestrator.connect().await?;
//! let snapshot = orchestrator
//!     .submit_swap(&SwapIntent::new(Token::Water, "10.5"))
//!     .await?;
//! println!("{:?}", snapshot.order_id);
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
