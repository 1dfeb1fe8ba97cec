//! Wallet balances ranked by blockchain and valued against the price table.

mod balances_model;
mod ranking;

pub use balances_model::{RankedBalance, WalletBalance};
pub use ranking::{blockchain_priority, rank_balances, UNKNOWN_BLOCKCHAIN_PRIORITY};
