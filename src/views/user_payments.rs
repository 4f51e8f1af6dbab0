use futures::future::try_join;

use crate::client::GatewayClient;
use crate::models::{PaymentMethod, PaymentRecord};
use crate::views::{error_panel, esc, fmt_date, fmt_money, status_badge};

pub async fn render(client: &GatewayClient) -> String {
    let result = try_join(
        client.get::<Vec<PaymentRecord>>("user/payments"),
        client.get::<Vec<PaymentMethod>>("payment/methods"),
    )
    .await;

    let (payments, methods) = match result {
        Ok(parts) => parts,
        Err(e) => {
            tracing::error!("payments load failed: {}", e);
            return error_panel("your payments");
        }
    };

    let method_cards = methods.iter().map(render_method).collect::<String>();
    let rows = payments.iter().map(render_payment_row).collect::<String>();

    format!(
        r#"<section>
  <h2 class="text-sm font-semibold text-slate-200">Saved payment methods</h2>
  <div class="mt-3 grid grid-cols-1 gap-4 md:grid-cols-2 xl:grid-cols-3">{method_cards}</div>
</section>
<section class="mt-8">
  <h2 class="text-sm font-semibold text-slate-200">Payment history</h2>
  <div class="mt-3 overflow-hidden rounded-lg border border-slate-800">
    <table class="w-full text-left text-sm">
      <thead class="bg-slate-900 text-xs uppercase tracking-wider text-slate-400">
        <tr><th class="px-4 py-3">Description</th><th class="px-4 py-3">Date</th><th class="px-4 py-3">Method</th><th class="px-4 py-3">Amount</th><th class="px-4 py-3">Status</th></tr>
      </thead>
      <tbody class="divide-y divide-slate-800 bg-slate-900/50">{rows}</tbody>
    </table>
  </div>
</section>"#,
        method_cards = method_cards,
        rows = rows,
    )
}

fn render_method(method: &PaymentMethod) -> String {
    let default_badge = if method.is_default {
        r#"<span class="rounded-full bg-indigo-900/60 px-2 py-0.5 text-xs text-indigo-300">default</span>"#
    } else {
        ""
    };

    format!(
        r#"<div class="flex items-center justify-between rounded-lg border border-slate-800 bg-slate-900 p-4">
  <div class="flex items-center gap-3">
    <i class="fa-brands fa-cc-{brand} text-2xl text-slate-300"></i>
    <div>
      <p class="text-sm font-medium text-slate-200">&bull;&bull;&bull;&bull; {last4}</p>
      <p class="text-xs text-slate-400">expires {exp_month:02}/{exp_year}</p>
    </div>
  </div>
  {default_badge}
</div>"#,
        brand = esc(&method.brand),
        last4 = esc(&method.last4),
        exp_month = method.exp_month,
        exp_year = method.exp_year,
        default_badge = default_badge,
    )
}

fn render_payment_row(payment: &PaymentRecord) -> String {
    format!(
        r#"<tr>
  <td class="px-4 py-3 font-medium text-slate-200">{description}</td>
  <td class="px-4 py-3 text-slate-400">{date}</td>
  <td class="px-4 py-3 text-slate-400">{method}</td>
  <td class="px-4 py-3">{amount}</td>
  <td class="px-4 py-3">{status}</td>
</tr>"#,
        description = esc(&payment.description),
        date = fmt_date(&payment.at),
        method = esc(&payment.method),
        amount = fmt_money(&payment.amount, &payment.currency),
        status = status_badge(&payment.status),
    )
}
