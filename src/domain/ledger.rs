//! Address ledger lookup: balance plus a paginated transaction history.
//!
//! `SyntheticLedger` fabricates shape-consistent data; a real chain indexer can be
//! plugged in by implementing [`LedgerProvider`].

use crate::domain::address::Chain;
use crate::domain::pagination::{total_pages, PageRequest};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::Serialize;
use utoipa::ToSchema;

const HISTORY_WINDOW_SECS: i64 = 30 * 24 * 60 * 60;
const MIN_TRANSACTIONS: u64 = 50;
const MAX_TRANSACTIONS: u64 = 550;
const MAX_BALANCE: f64 = 100_000.0;
const MAX_AMOUNT: f64 = 10_000.0;

#[derive(Debug, Clone)]
pub struct LedgerQuery {
    pub address: String,
    pub chain: Chain,
    pub page: PageRequest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Incoming,
    Outgoing,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LedgerTransaction {
    pub hash: String,
    #[serde(rename = "type")]
    pub direction: Direction,
    pub from: String,
    pub to: String,
    pub amount: String,
    pub token: String,
    pub timestamp: DateTime<Utc>,
    pub confirmations: u32,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LedgerPage {
    pub address: String,
    pub chain: Chain,
    pub balance: String,
    pub balance_usd: String,
    pub total_transactions: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u64,
    pub transactions: Vec<LedgerTransaction>,
}

#[async_trait]
pub trait LedgerProvider: Send + Sync {
    async fn lookup(&self, query: &LedgerQuery) -> anyhow::Result<LedgerPage>;
}

/// Random balances and transfers; nothing is fetched from a chain.
#[derive(Debug, Default, Clone, Copy)]
pub struct SyntheticLedger;

#[async_trait]
impl LedgerProvider for SyntheticLedger {
    async fn lookup(&self, query: &LedgerQuery) -> anyhow::Result<LedgerPage> {
        Ok(generate_ledger_page(query, Utc::now(), &mut rand::thread_rng()))
    }
}

/// Builds one page of a synthetic ledger relative to `now`.
pub fn generate_ledger_page<R: Rng + ?Sized>(
    query: &LedgerQuery,
    now: DateTime<Utc>,
    rng: &mut R,
) -> LedgerPage {
    let balance = round2(rng.gen_range(0.0..MAX_BALANCE));
    let total = rng.gen_range(MIN_TRANSACTIONS..MAX_TRANSACTIONS);

    let transactions = query
        .page
        .bounds(total)
        .map(|_| synthetic_transaction(&query.address, now, rng))
        .collect();

    LedgerPage {
        address: query.address.clone(),
        chain: query.chain,
        balance: format!("{:.2}", balance),
        // Token treated as USD-pegged.
        balance_usd: format!("{:.2}", balance),
        total_transactions: total,
        page: query.page.page,
        page_size: query.page.page_size,
        total_pages: total_pages(total, query.page.page_size),
        transactions,
    }
}

fn synthetic_transaction<R: Rng + ?Sized>(
    subject: &str,
    now: DateTime<Utc>,
    rng: &mut R,
) -> LedgerTransaction {
    let direction = if rng.gen_bool(0.5) {
        Direction::Incoming
    } else {
        Direction::Outgoing
    };
    let counterparty = random_hex(rng, 20);
    let (from, to) = match direction {
        Direction::Incoming => (counterparty, subject.to_string()),
        Direction::Outgoing => (subject.to_string(), counterparty),
    };
    let age = Duration::seconds(rng.gen_range(0..HISTORY_WINDOW_SECS));

    LedgerTransaction {
        hash: random_hex(rng, 32),
        direction,
        from,
        to,
        amount: format!("{:.2}", round2(rng.gen_range(0.01..MAX_AMOUNT))),
        token: "USDT".to_string(),
        timestamp: now - age,
        confirmations: rng.gen_range(1..=1000),
        status: "confirmed".to_string(),
    }
}

/// `0x`-prefixed hex string of `bytes` random bytes.
fn random_hex<R: Rng + ?Sized>(rng: &mut R, bytes: usize) -> String {
    let mut buf = vec![0u8; bytes];
    rng.fill(&mut buf[..]);
    format!("0x{}", hex::encode(buf))
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
