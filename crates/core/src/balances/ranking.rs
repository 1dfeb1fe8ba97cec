use crate::fx::PriceTable;

use super::balances_model::{RankedBalance, WalletBalance};

/// Priority given to chains not in the table. Balances on them are dropped.
pub const UNKNOWN_BLOCKCHAIN_PRIORITY: i32 = -99;

pub fn blockchain_priority(blockchain: &str) -> i32 {
    match blockchain {
        "Osmosis" => 100,
        "Ethereum" => 50,
        "Arbitrum" => 30,
        "Zilliqa" => 20,
        "Neo" => 20,
        _ => UNKNOWN_BLOCKCHAIN_PRIORITY,
    }
}

/// Keeps positive balances on known chains, highest priority first.
///
/// The sort is stable, so balances with equal priority keep their input
/// order. Values use `prices` when given; a missing price counts as zero.
pub fn rank_balances(balances: &[WalletBalance], prices: Option<&PriceTable>) -> Vec<RankedBalance> {
    let mut ranked: Vec<RankedBalance> = balances
        .iter()
        .filter_map(|balance| {
            let priority = blockchain_priority(&balance.blockchain);
            if priority <= UNKNOWN_BLOCKCHAIN_PRIORITY || balance.amount <= 0.0 {
                return None;
            }

            let price = prices
                .and_then(|table| table.price(&balance.currency))
                .unwrap_or(0.0);

            Some(RankedBalance {
                balance: balance.clone(),
                priority,
                // Halves round up, not to even.
                formatted: format!("{:.0}", balance.amount.round()),
                usd_value: price * balance.amount,
            })
        })
        .collect();

    ranked.sort_by(|a, b| b.priority.cmp(&a.priority));
    ranked
}
