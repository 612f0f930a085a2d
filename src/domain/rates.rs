//! USDT/CNY quotes across exchanges.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Serialize, Serializer};
use utoipa::ToSchema;

const BASE_PRICE: f64 = 7.20;
const BASE_JITTER: f64 = 0.05;
const MAX_CHANGE_PCT: f64 = 1.0;

struct ExchangeProfile {
    name: &'static str,
    spread: f64,
    volume: (u64, u64),
}

const EXCHANGES: [ExchangeProfile; 3] = [
    ExchangeProfile {
        name: "Binance",
        spread: 0.01,
        volume: (1_000_000, 5_000_000),
    },
    ExchangeProfile {
        name: "OKX",
        spread: 0.015,
        volume: (800_000, 4_000_000),
    },
    ExchangeProfile {
        name: "Huobi",
        spread: 0.008,
        volume: (500_000, 3_000_000),
    },
];

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ExchangeQuote {
    pub name: String,
    #[serde(serialize_with = "fixed4")]
    #[schema(value_type = String, example = "7.2100")]
    pub buy_price: f64,
    #[serde(serialize_with = "fixed4")]
    #[schema(value_type = String, example = "7.1900")]
    pub sell_price: f64,
    /// Percent.
    #[serde(serialize_with = "fixed2")]
    #[schema(value_type = String, example = "-0.35")]
    pub change_24h: f64,
    pub volume_24h: u64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RateSnapshot {
    pub base_currency: String,
    pub quote_currency: String,
    #[serde(serialize_with = "fixed4")]
    #[schema(value_type = String)]
    pub base_price: f64,
    /// Sorted by buy price, highest first.
    pub exchanges: Vec<ExchangeQuote>,
    #[serde(serialize_with = "fixed4")]
    #[schema(value_type = String)]
    pub highest_buy: f64,
    #[serde(serialize_with = "fixed4")]
    #[schema(value_type = String)]
    pub lowest_sell: f64,
    #[serde(serialize_with = "fixed4")]
    #[schema(value_type = String)]
    pub avg_price: f64,
    pub updated_at: DateTime<Utc>,
}

#[async_trait]
pub trait RateProvider: Send + Sync {
    async fn snapshot(&self) -> anyhow::Result<RateSnapshot>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SyntheticRates;

#[async_trait]
impl RateProvider for SyntheticRates {
    async fn snapshot(&self) -> anyhow::Result<RateSnapshot> {
        Ok(generate_snapshot(Utc::now(), &mut rand::thread_rng()))
    }
}

pub fn generate_snapshot<R: Rng + ?Sized>(now: DateTime<Utc>, rng: &mut R) -> RateSnapshot {
    let base = BASE_PRICE + rng.gen_range(-BASE_JITTER..=BASE_JITTER);
    let quotes = EXCHANGES
        .iter()
        .map(|ex| ExchangeQuote {
            name: ex.name.to_string(),
            buy_price: round4(base + ex.spread),
            sell_price: round4(base - ex.spread),
            change_24h: round2(rng.gen_range(-MAX_CHANGE_PCT..=MAX_CHANGE_PCT)),
            volume_24h: rng.gen_range(ex.volume.0..ex.volume.1),
        })
        .collect();
    aggregate(round4(base), quotes, now)
}

/// Sorts quotes by buy price (descending) and derives the summary prices.
pub fn aggregate(base_price: f64, mut quotes: Vec<ExchangeQuote>, now: DateTime<Utc>) -> RateSnapshot {
    quotes.sort_by(|a, b| b.buy_price.total_cmp(&a.buy_price));

    let highest_buy = quotes.first().map(|q| q.buy_price).unwrap_or(0.0);
    let lowest_sell = quotes.last().map(|q| q.sell_price).unwrap_or(0.0);
    let avg_price = if quotes.is_empty() {
        0.0
    } else {
        round4(quotes.iter().map(|q| q.buy_price).sum::<f64>() / quotes.len() as f64)
    };

    RateSnapshot {
        base_currency: "USDT".to_string(),
        quote_currency: "CNY".to_string(),
        base_price,
        exchanges: quotes,
        highest_buy,
        lowest_sell,
        avg_price,
        updated_at: now,
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn round4(v: f64) -> f64 {
    (v * 10_000.0).round() / 10_000.0
}

fn fixed2<S: Serializer>(v: &f64, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&format!("{:.2}", v))
}

fn fixed4<S: Serializer>(v: &f64, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&format!("{:.4}", v))
}
