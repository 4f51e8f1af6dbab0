use futures::future::try_join;

use crate::client::GatewayClient;
use crate::models::{TenantMember, TenantProfile};
use crate::views::{error_panel, esc, fmt_ago, fmt_date, status_badge};

pub async fn render(client: &GatewayClient) -> String {
    let result = try_join(
        client.get::<TenantProfile>("tenant/profile"),
        client.get_paged::<Vec<TenantMember>>("tenant/users", &[("page", "1"), ("limit", "10")]),
    )
    .await;

    let (profile, (members, meta)) = match result {
        Ok(parts) => parts,
        Err(e) => {
            tracing::error!("tenant load failed: {}", e);
            return error_panel("the tenant");
        }
    };

    let member_rows = members.iter().map(render_member_row).collect::<String>();
    let member_note = meta
        .map(|m| format!("{} members total", m.total))
        .unwrap_or_default();

    format!(
        r#"<div class="rounded-lg border border-slate-800 bg-slate-900 p-6">
  <div class="flex items-center justify-between">
    <div>
      <h2 class="text-lg font-semibold text-white">{name}</h2>
      <p class="text-sm text-slate-400">{slug} &middot; created {created}</p>
    </div>
    {status}
  </div>
  <dl class="mt-4 grid grid-cols-2 gap-4 text-sm md:grid-cols-3">
    <div><dt class="text-slate-400">Plan</dt><dd class="mt-1 text-slate-200">{plan}</dd></div>
    <div><dt class="text-slate-400">Seats</dt><dd class="mt-1 text-slate-200">{seats_used} of {seats} used</dd></div>
  </dl>
</div>
<section class="mt-6">
  <h2 class="text-sm font-semibold text-slate-200">Members</h2>
  <div class="mt-3 overflow-hidden rounded-lg border border-slate-800">
    <table class="w-full text-left text-sm">
      <thead class="bg-slate-900 text-xs uppercase tracking-wider text-slate-400">
        <tr><th class="px-4 py-3">Name</th><th class="px-4 py-3">Email</th><th class="px-4 py-3">Role</th><th class="px-4 py-3">Status</th><th class="px-4 py-3">Last seen</th></tr>
      </thead>
      <tbody class="divide-y divide-slate-800 bg-slate-900/50">{member_rows}</tbody>
    </table>
  </div>
  <p class="mt-2 text-xs text-slate-500">{member_note}</p>
</section>"#,
        name = esc(&profile.name),
        slug = esc(&profile.slug),
        created = fmt_date(&profile.created_at),
        status = status_badge(&profile.status),
        plan = esc(&profile.plan),
        seats_used = profile.seats_used,
        seats = profile.seats,
        member_rows = member_rows,
        member_note = member_note,
    )
}

fn render_member_row(member: &TenantMember) -> String {
    let last_seen = member
        .last_seen
        .map(|at| fmt_ago(&at))
        .unwrap_or_else(|| "-".to_string());

    format!(
        r#"<tr>
  <td class="px-4 py-3 font-medium text-slate-200">{name}</td>
  <td class="px-4 py-3 text-slate-400">{email}</td>
  <td class="px-4 py-3 text-slate-300">{role}</td>
  <td class="px-4 py-3">{status}</td>
  <td class="px-4 py-3 text-slate-400">{last_seen}</td>
</tr>"#,
        name = esc(&member.name),
        email = esc(&member.email),
        role = member.role.label(),
        status = status_badge(&member.status),
        last_seen = last_seen,
    )
}
