use chrono::{DateTime, Utc};
use futures::future::try_join;
use rust_decimal::prelude::ToPrimitive;

use crate::client::{ClientError, GatewayClient};
use crate::models::{ActivityEvent, DashboardStats, RevenuePoint};
use crate::views::{error_panel, esc, fmt_ago, fmt_money, stat_card};

/// Snapshot rendered on the dashboard, refreshed by the background task
#[derive(Debug, Clone)]
pub struct DashboardData {
    pub stats: DashboardStats,
    pub revenue: Vec<RevenuePoint>,
    pub activity: Vec<ActivityEvent>,
    pub fetched_at: DateTime<Utc>,
}

pub async fn fetch(client: &GatewayClient) -> Result<DashboardData, ClientError> {
    // Stats and the revenue series are independent; fetch them together
    let (stats, revenue) = try_join(
        client.get::<DashboardStats>("dashboard/stats"),
        client.get::<Vec<RevenuePoint>>("dashboard/revenue"),
    )
    .await?;
    let activity = client.get::<Vec<ActivityEvent>>("dashboard/activity").await?;

    Ok(DashboardData {
        stats,
        revenue,
        activity,
        fetched_at: Utc::now(),
    })
}

pub async fn render(client: &GatewayClient, cached: Option<DashboardData>) -> String {
    let data = match cached {
        Some(data) => data,
        None => match fetch(client).await {
            Ok(data) => data,
            Err(e) => {
                tracing::error!("dashboard load failed: {}", e);
                return error_panel("the dashboard");
            }
        },
    };
    render_data(&data)
}

fn render_data(data: &DashboardData) -> String {
    let stats = &data.stats;
    let cards = [
        stat_card(
            "Monthly revenue",
            &fmt_money(&stats.monthly_revenue, "usd"),
            &format!("{:+.1}% vs last month", stats.revenue_growth_pct),
        ),
        stat_card(
            "Pending payouts",
            &fmt_money(&stats.pending_payouts, "usd"),
            "across all tenants",
        ),
        stat_card(
            "Tenants",
            &stats.total_tenants.to_string(),
            "organizations on the platform",
        ),
        stat_card(
            "Active users",
            &stats.active_users.to_string(),
            &format!("{:+.1}% vs last month", stats.user_growth_pct),
        ),
    ]
    .join("\n");

    let labels: Vec<&str> = data.revenue.iter().map(|p| p.month.as_str()).collect();
    let totals: Vec<f64> = data
        .revenue
        .iter()
        .map(|p| p.total.to_f64().unwrap_or(0.0))
        .collect();
    let labels_json = serde_json::to_string(&labels).unwrap_or_else(|_| "[]".to_string());
    let totals_json = serde_json::to_string(&totals).unwrap_or_else(|_| "[]".to_string());

    let activity_rows = data
        .activity
        .iter()
        .map(render_activity_row)
        .collect::<String>();

    format!(
        r#"<div class="grid grid-cols-1 gap-4 md:grid-cols-2 xl:grid-cols-4">
{cards}
</div>
<div class="mt-6 grid grid-cols-1 gap-6 xl:grid-cols-3">
  <div class="xl:col-span-2 rounded-lg border border-slate-800 bg-slate-900 p-5">
    <h2 class="text-sm font-semibold text-slate-200">Revenue, last 12 months</h2>
    <canvas id="revenue-chart" height="110"></canvas>
  </div>
  <div class="rounded-lg border border-slate-800 bg-slate-900 p-5">
    <h2 class="text-sm font-semibold text-slate-200">Recent activity</h2>
    <ul class="mt-3 space-y-3">{activity_rows}</ul>
  </div>
</div>
<p class="mt-4 text-xs text-slate-500">Snapshot from {fetched_at}</p>
<script>
  new Chart(document.getElementById('revenue-chart'), {{
    type: 'line',
    data: {{
      labels: {labels_json},
      datasets: [{{
        label: 'Revenue (USD)',
        data: {totals_json},
        borderColor: '#818cf8',
        backgroundColor: 'rgba(129, 140, 248, 0.15)',
        fill: true,
        tension: 0.3,
      }}],
    }},
    options: {{ plugins: {{ legend: {{ display: false }} }}, scales: {{ y: {{ beginAtZero: false }} }} }}
  }});
</script>"#,
        cards = cards,
        activity_rows = activity_rows,
        fetched_at = data.fetched_at.format("%H:%M:%S UTC"),
        labels_json = labels_json,
        totals_json = totals_json,
    )
}

fn render_activity_row(event: &ActivityEvent) -> String {
    format!(
        r#"<li class="text-sm">
  <span class="text-slate-200">{actor}</span>
  <span class="text-indigo-300"> {action} </span>
  <span class="text-slate-400">{detail}</span>
  <span class="block text-xs text-slate-500">{ago}</span>
</li>"#,
        actor = esc(&event.actor),
        action = esc(&event.action),
        detail = esc(&event.detail),
        ago = fmt_ago(&event.at),
    )
}
