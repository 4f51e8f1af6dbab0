use futures::future::try_join;

use crate::client::GatewayClient;
use crate::models::{Invoice, MarketplaceService, Plan};
use crate::views::{error_panel, esc, fmt_date, fmt_money, status_badge};

pub async fn render(client: &GatewayClient) -> String {
    let plans_and_invoices = try_join(
        client.get::<Vec<Plan>>("payment/plans"),
        client.get_paged::<Vec<Invoice>>("payment/invoices", &[("page", "1"), ("limit", "6")]),
    )
    .await;

    let (plans, (invoices, meta)) = match plans_and_invoices {
        Ok(parts) => parts,
        Err(e) => {
            tracing::error!("billing load failed: {}", e);
            return error_panel("billing");
        }
    };

    // The add-on catalog comes from the marketplace; a failure here only
    // blanks that region
    let services_html = match client
        .get::<Vec<MarketplaceService>>("marketplace/services")
        .await
    {
        Ok(services) => services.iter().map(render_service).collect::<String>(),
        Err(e) => {
            tracing::error!("marketplace load failed: {}", e);
            error_panel("the service catalog")
        }
    };

    let plan_cards = plans.iter().map(render_plan).collect::<String>();
    let invoice_rows = invoices.iter().map(render_invoice_row).collect::<String>();
    let invoice_note = meta
        .map(|m| format!("Showing {} of {} invoices", invoices.len(), m.total))
        .unwrap_or_default();

    format!(
        r#"<section>
  <h2 class="text-sm font-semibold text-slate-200">Plans</h2>
  <div class="mt-3 grid grid-cols-1 gap-4 lg:grid-cols-3">{plan_cards}</div>
</section>
<section class="mt-8">
  <h2 class="text-sm font-semibold text-slate-200">Marketplace add-ons</h2>
  <div class="mt-3 grid grid-cols-1 gap-4 lg:grid-cols-3">{services_html}</div>
</section>
<section class="mt-8">
  <h2 class="text-sm font-semibold text-slate-200">Invoices</h2>
  <div class="mt-3 overflow-hidden rounded-lg border border-slate-800">
    <table class="w-full text-left text-sm">
      <thead class="bg-slate-900 text-xs uppercase tracking-wider text-slate-400">
        <tr><th class="px-4 py-3">Invoice</th><th class="px-4 py-3">Issued</th><th class="px-4 py-3">Due</th><th class="px-4 py-3">Amount</th><th class="px-4 py-3">Status</th></tr>
      </thead>
      <tbody class="divide-y divide-slate-800 bg-slate-900/50">{invoice_rows}</tbody>
    </table>
  </div>
  <p class="mt-2 text-xs text-slate-500">{invoice_note}</p>
</section>"#,
        plan_cards = plan_cards,
        services_html = services_html,
        invoice_rows = invoice_rows,
        invoice_note = invoice_note,
    )
}

fn render_plan(plan: &Plan) -> String {
    let features = plan
        .features
        .iter()
        .map(|f| {
            format!(
                r#"<li><i class="fa-solid fa-check mr-2 text-emerald-400"></i>{}</li>"#,
                esc(f)
            )
        })
        .collect::<String>();

    format!(
        r#"<div class="rounded-lg border border-slate-800 bg-slate-900 p-5">
  <h3 class="font-semibold text-white">{name}</h3>
  <p class="mt-1 text-xs text-slate-400">{description}</p>
  <p class="mt-3 text-2xl font-semibold text-white">{price}<span class="text-sm font-normal text-slate-400">/mo</span></p>
  <ul class="mt-3 space-y-1 text-sm text-slate-300">{features}</ul>
</div>"#,
        name = esc(&plan.name),
        description = esc(&plan.description),
        price = fmt_money(&plan.price_monthly, &plan.currency),
        features = features,
    )
}

fn render_service(service: &MarketplaceService) -> String {
    let state = if service.enabled {
        r#"<span class="text-xs text-emerald-300"><i class="fa-solid fa-circle-check mr-1"></i>Enabled</span>"#
    } else {
        r#"<span class="text-xs text-slate-400">Available</span>"#
    };

    format!(
        r#"<div class="rounded-lg border border-slate-800 bg-slate-900 p-5">
  <div class="flex items-center justify-between">
    <h3 class="font-semibold text-white">{name}</h3>
    {state}
  </div>
  <p class="mt-1 text-xs uppercase tracking-wider text-slate-500">{category}</p>
  <p class="mt-2 text-sm text-slate-300">{description}</p>
  <p class="mt-3 text-sm text-slate-200">{price}/mo</p>
</div>"#,
        name = esc(&service.name),
        state = state,
        category = esc(&service.category),
        description = esc(&service.description),
        price = fmt_money(&service.price_monthly, &service.currency),
    )
}

fn render_invoice_row(invoice: &Invoice) -> String {
    format!(
        r#"<tr>
  <td class="px-4 py-3 font-medium text-slate-200">{number}</td>
  <td class="px-4 py-3 text-slate-400">{issued}</td>
  <td class="px-4 py-3 text-slate-400">{due}</td>
  <td class="px-4 py-3">{amount}</td>
  <td class="px-4 py-3">{status}</td>
</tr>"#,
        number = esc(&invoice.number),
        issued = fmt_date(&invoice.issued_at),
        due = fmt_date(&invoice.due_at),
        amount = fmt_money(&invoice.amount, &invoice.currency),
        status = status_badge(&invoice.status),
    )
}
