//! View components: each page fetches what it needs through the gateway
//! client and renders an HTML string. A failed fetch becomes a static
//! "failed to load" panel for that region; nothing retries.

pub mod admin_payments;
pub mod billing;
pub mod dashboard;
pub mod profile;
pub mod shell;
pub mod tenant;
pub mod tenant_finance;
pub mod user_payments;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Minimal HTML escaping for fixture-sourced strings
pub fn esc(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// The generic failure panel shown in place of a region that failed to load
pub fn error_panel(region: &str) -> String {
    format!(
        r#"<div class="rounded-lg border border-red-800 bg-red-950/40 p-6 text-center">
  <i class="fa-solid fa-triangle-exclamation text-2xl text-red-400"></i>
  <p class="mt-2 text-sm text-red-200">Failed to load {region}. Try reloading the page.</p>
</div>"#,
        region = esc(region)
    )
}

pub fn not_authorized_panel(title: &str) -> String {
    format!(
        r#"<div class="rounded-lg border border-slate-700 bg-slate-900 p-10 text-center">
  <i class="fa-solid fa-lock text-3xl text-slate-500"></i>
  <h2 class="mt-3 text-lg font-semibold text-slate-200">{title} is not available for this role</h2>
  <p class="mt-1 text-sm text-slate-400">Switch the demo role from the header to view this page.</p>
</div>"#,
        title = esc(title)
    )
}

pub fn stat_card(label: &str, value: &str, sub: &str) -> String {
    format!(
        r#"<div class="rounded-lg border border-slate-800 bg-slate-900 p-5">
  <p class="text-xs font-medium uppercase tracking-wider text-slate-400">{label}</p>
  <p class="mt-2 text-2xl font-semibold text-white">{value}</p>
  <p class="mt-1 text-xs text-slate-400">{sub}</p>
</div>"#,
        label = esc(label),
        value = esc(value),
        sub = esc(sub),
    )
}

pub fn status_badge(status: &str) -> String {
    let classes = match status {
        "active" | "paid" | "succeeded" | "online" => "bg-emerald-900/60 text-emerald-300",
        "trialing" | "pending" | "open" | "in_transit" | "invited" => "bg-amber-900/60 text-amber-300",
        "suspended" | "past_due" | "failed" => "bg-red-900/60 text-red-300",
        "refunded" | "void" => "bg-slate-800 text-slate-300",
        _ => "bg-slate-800 text-slate-300",
    };
    format!(
        r#"<span class="inline-block rounded-full px-2 py-0.5 text-xs font-medium {classes}">{status}</span>"#,
        classes = classes,
        status = esc(status),
    )
}

/// "$1,234.56" for usd, "1,234.56 EUR" otherwise
pub fn fmt_money(amount: &Decimal, currency: &str) -> String {
    let rounded = amount.round_dp(2);
    let text = format!("{:.2}", rounded);
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let negative = int_part.starts_with('-');
    let digits = int_part.trim_start_matches('-');
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    match currency {
        "usd" => format!("{}${}.{}", sign, grouped, frac_part),
        other => format!("{}{}.{} {}", sign, grouped, frac_part, other.to_uppercase()),
    }
}

pub fn fmt_date(dt: &DateTime<Utc>) -> String {
    dt.format("%b %d, %Y").to_string()
}

/// Coarse "2h ago" style relative time for the activity feed
pub fn fmt_ago(dt: &DateTime<Utc>) -> String {
    let delta = Utc::now().signed_duration_since(*dt);
    if delta.num_minutes() < 1 {
        "just now".to_string()
    } else if delta.num_hours() < 1 {
        format!("{}m ago", delta.num_minutes())
    } else if delta.num_days() < 1 {
        format!("{}h ago", delta.num_hours())
    } else {
        format!("{}d ago", delta.num_days())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn money_grouping() {
        assert_eq!(fmt_money(&dec!(28450.00), "usd"), "$28,450.00");
        assert_eq!(fmt_money(&dec!(49), "usd"), "$49.00");
        assert_eq!(fmt_money(&dec!(1234567.891), "eur"), "1,234,567.89 EUR");
        assert_eq!(fmt_money(&dec!(-320.5), "usd"), "-$320.50");
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(esc("<b>&\"hi\"</b>"), "&lt;b&gt;&amp;&quot;hi&quot;&lt;/b&gt;");
    }
}
