use futures::future::try_join;

use crate::client::GatewayClient;
use crate::models::{FinanceSummary, Payout};
use crate::views::{error_panel, esc, fmt_date, fmt_money, stat_card, status_badge};

pub async fn render(client: &GatewayClient) -> String {
    let result = try_join(
        client.get::<FinanceSummary>("tenant/finance/summary"),
        client.get::<Vec<Payout>>("tenant/finance/payouts"),
    )
    .await;

    let (summary, payouts) = match result {
        Ok(parts) => parts,
        Err(e) => {
            tracing::error!("finance load failed: {}", e);
            return error_panel("finance data");
        }
    };

    let cards = [
        stat_card(
            "Available balance",
            &fmt_money(&summary.balance, &summary.currency),
            "ready to pay out",
        ),
        stat_card(
            "Pending",
            &fmt_money(&summary.pending, &summary.currency),
            &format!("next payout {}", fmt_date(&summary.next_payout_at)),
        ),
        stat_card(
            "Lifetime volume",
            &fmt_money(&summary.lifetime_volume, &summary.currency),
            "since the tenant joined",
        ),
    ]
    .join("\n");

    let rows = payouts.iter().map(render_payout_row).collect::<String>();

    format!(
        r#"<div class="grid grid-cols-1 gap-4 lg:grid-cols-3">
{cards}
</div>
<section class="mt-6">
  <h2 class="text-sm font-semibold text-slate-200">Payout history</h2>
  <div class="mt-3 overflow-hidden rounded-lg border border-slate-800">
    <table class="w-full text-left text-sm">
      <thead class="bg-slate-900 text-xs uppercase tracking-wider text-slate-400">
        <tr><th class="px-4 py-3">Payout</th><th class="px-4 py-3">Initiated</th><th class="px-4 py-3">Amount</th><th class="px-4 py-3">Status</th></tr>
      </thead>
      <tbody class="divide-y divide-slate-800 bg-slate-900/50">{rows}</tbody>
    </table>
  </div>
</section>"#,
        cards = cards,
        rows = rows,
    )
}

fn render_payout_row(payout: &Payout) -> String {
    format!(
        r#"<tr>
  <td class="px-4 py-3 font-mono text-xs text-slate-300">{id}</td>
  <td class="px-4 py-3 text-slate-400">{initiated}</td>
  <td class="px-4 py-3">{amount}</td>
  <td class="px-4 py-3">{status}</td>
</tr>"#,
        id = esc(&payout.id),
        initiated = fmt_date(&payout.initiated_at),
        amount = fmt_money(&payout.amount, &payout.currency),
        status = status_badge(&payout.status),
    )
}
