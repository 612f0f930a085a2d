//! Dashboard aggregates for a group chat.

use crate::domain::pagination::{total_pages, PageRequest};
use async_trait::async_trait;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use rand::Rng;
use serde::Serialize;
use utoipa::ToSchema;

const ACTIVITY_DAYS: i64 = 7;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DailyActivity {
    #[schema(value_type = String, example = "2026-10-18")]
    pub date: NaiveDate,
    pub messages: u64,
    pub active_users: u64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MemberActivity {
    pub user_id: i64,
    pub username: String,
    pub message_count: u64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TopMembersPage {
    pub members: Vec<MemberActivity>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ChatStats {
    pub group_id: String,
    pub total_messages: u64,
    pub total_members: u64,
    pub active_members: u64,
    pub messages_today: u64,
    pub new_members_today: u64,
    /// Oldest day first.
    pub daily_activity: Vec<DailyActivity>,
    pub top_members: TopMembersPage,
    pub generated_at: DateTime<Utc>,
}

#[async_trait]
pub trait StatsProvider: Send + Sync {
    async fn chat_stats(&self, group_id: &str, page: PageRequest) -> anyhow::Result<ChatStats>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SyntheticStats;

#[async_trait]
impl StatsProvider for SyntheticStats {
    async fn chat_stats(&self, group_id: &str, page: PageRequest) -> anyhow::Result<ChatStats> {
        Ok(generate_chat_stats(
            group_id,
            page,
            Utc::now(),
            &mut rand::thread_rng(),
        ))
    }
}

pub fn generate_chat_stats<R: Rng + ?Sized>(
    group_id: &str,
    page: PageRequest,
    now: DateTime<Utc>,
    rng: &mut R,
) -> ChatStats {
    let total_members: u64 = rng.gen_range(100..5_000);
    let active_members = rng.gen_range(total_members / 10..=total_members / 2);

    let today = now.date_naive();
    let daily_activity: Vec<DailyActivity> = (0..ACTIVITY_DAYS)
        .rev()
        .map(|days_ago| DailyActivity {
            date: today - Duration::days(days_ago),
            messages: rng.gen_range(200..3_000),
            active_users: rng.gen_range(1..=active_members.max(1)),
        })
        .collect();

    let messages_today = daily_activity.last().map(|d| d.messages).unwrap_or(0);
    let total_messages = daily_activity.iter().map(|d| d.messages).sum::<u64>()
        + rng.gen_range(10_000..500_000);

    // Ranked list: counts drawn then sorted so rank order is stable within a response.
    let ranked_total = active_members;
    let mut counts: Vec<u64> = (0..ranked_total).map(|_| rng.gen_range(1..1_500)).collect();
    counts.sort_unstable_by(|a, b| b.cmp(a));

    let bounds = page.bounds(ranked_total);
    let members = bounds
        .map(|rank| MemberActivity {
            user_id: 100_000_000 + rank as i64 * 7_919,
            username: format!("member_{}", rank + 1),
            message_count: counts[rank as usize],
        })
        .collect();

    ChatStats {
        group_id: group_id.to_string(),
        total_messages,
        total_members,
        active_members,
        messages_today,
        new_members_today: rng.gen_range(0..50),
        daily_activity,
        top_members: TopMembersPage {
            members,
            total: ranked_total,
            page: page.page,
            page_size: page.page_size,
            total_pages: total_pages(ranked_total, page.page_size),
        },
        generated_at: now,
    }
}
