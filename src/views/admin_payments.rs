use crate::client::GatewayClient;
use crate::models::{AdminPayment, PlatformStats};
use crate::views::{error_panel, esc, fmt_date, fmt_money, stat_card, status_badge};

const PAGE_SIZE: u32 = 10;

pub async fn render(client: &GatewayClient, page: u32) -> String {
    let stats = match client.get::<PlatformStats>("admin/stats").await {
        Ok(stats) => stats,
        Err(e) => {
            tracing::error!("platform stats load failed: {}", e);
            return error_panel("the payments ledger");
        }
    };

    let page = page.max(1);
    let page_query = page.to_string();
    let limit_query = PAGE_SIZE.to_string();
    let ledger = client
        .get_paged::<Vec<AdminPayment>>(
            "admin/payments",
            &[("page", &page_query), ("limit", &limit_query)],
        )
        .await;

    let (payments, meta) = match ledger {
        Ok(parts) => parts,
        Err(e) => {
            tracing::error!("payments ledger load failed: {}", e);
            return error_panel("the payments ledger");
        }
    };

    let cards = [
        stat_card(
            "Platform MRR",
            &fmt_money(&stats.platform_mrr, "usd"),
            &format!("{} active tenants", stats.active_tenants),
        ),
        stat_card(
            "Volume, 30 days",
            &fmt_money(&stats.volume_30d, "usd"),
            "gross processed",
        ),
        stat_card(
            "Users",
            &stats.total_users.to_string(),
            &format!("across {} tenants", stats.total_tenants),
        ),
    ]
    .join("\n");

    let rows = payments.iter().map(render_payment_row).collect::<String>();

    let pager = meta
        .map(|m| {
            let prev = if m.page > 1 {
                format!(
                    r#"<a class="text-indigo-300 hover:underline" href="/console/admin-payments?page={}">&larr; Newer</a>"#,
                    m.page - 1
                )
            } else {
                String::new()
            };
            let next = if m.page < m.total_pages {
                format!(
                    r#"<a class="text-indigo-300 hover:underline" href="/console/admin-payments?page={}">Older &rarr;</a>"#,
                    m.page + 1
                )
            } else {
                String::new()
            };
            format!(
                r#"<div class="mt-3 flex items-center justify-between text-sm">
  {prev}<span class="text-slate-500">Page {page} of {total_pages} &middot; {total} payments</span>{next}
</div>"#,
                prev = prev,
                page = m.page,
                total_pages = m.total_pages,
                total = m.total,
                next = next,
            )
        })
        .unwrap_or_default();

    format!(
        r#"<div class="grid grid-cols-1 gap-4 lg:grid-cols-3">
{cards}
</div>
<section class="mt-6">
  <div class="overflow-hidden rounded-lg border border-slate-800">
    <table class="w-full text-left text-sm">
      <thead class="bg-slate-900 text-xs uppercase tracking-wider text-slate-400">
        <tr><th class="px-4 py-3">Payment</th><th class="px-4 py-3">Tenant</th><th class="px-4 py-3">Date</th><th class="px-4 py-3">Gross</th><th class="px-4 py-3">Fee</th><th class="px-4 py-3">Net</th><th class="px-4 py-3">Status</th></tr>
      </thead>
      <tbody class="divide-y divide-slate-800 bg-slate-900/50">{rows}</tbody>
    </table>
  </div>
  {pager}
</section>"#,
        cards = cards,
        rows = rows,
        pager = pager,
    )
}

fn render_payment_row(payment: &AdminPayment) -> String {
    format!(
        r#"<tr>
  <td class="px-4 py-3 font-mono text-xs text-slate-300">{id}</td>
  <td class="px-4 py-3 font-medium text-slate-200">{tenant}</td>
  <td class="px-4 py-3 text-slate-400">{date}</td>
  <td class="px-4 py-3">{gross}</td>
  <td class="px-4 py-3 text-slate-400">{fee}</td>
  <td class="px-4 py-3">{net}</td>
  <td class="px-4 py-3">{status}</td>
</tr>"#,
        id = esc(&payment.id),
        tenant = esc(&payment.tenant),
        date = fmt_date(&payment.at),
        gross = fmt_money(&payment.amount, &payment.currency),
        fee = fmt_money(&payment.fee, &payment.currency),
        net = fmt_money(&payment.net, &payment.currency),
        status = status_badge(&payment.status),
    )
}
