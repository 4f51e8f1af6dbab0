use crate::client::GatewayClient;
use crate::models::UserProfile;
use crate::views::{error_panel, esc, fmt_date};

const LANGUAGES: &[(&str, &str)] = &[("en", "English"), ("de", "Deutsch"), ("es", "Español")];
const TIMEZONES: &[&str] = &["UTC", "Europe/Berlin", "America/New_York", "Asia/Tokyo"];
const THEMES: &[&str] = &["light", "dark"];

pub async fn render(client: &GatewayClient) -> String {
    let profile = match client.get::<UserProfile>("user/profile").await {
        Ok(profile) => profile,
        Err(e) => {
            tracing::error!("profile load failed: {}", e);
            return error_panel("your profile");
        }
    };
    render_profile(&profile)
}

fn render_profile(profile: &UserProfile) -> String {
    let prefs = &profile.preferences;

    let language_options = LANGUAGES
        .iter()
        .map(|(value, label)| option(value, label, prefs.language == *value))
        .collect::<String>();
    let timezone_options = TIMEZONES
        .iter()
        .map(|tz| option(tz, tz, prefs.timezone == *tz))
        .collect::<String>();
    let theme_options = THEMES
        .iter()
        .map(|theme| option(theme, theme, prefs.theme == *theme))
        .collect::<String>();

    let tenant_line = profile
        .tenant
        .as_deref()
        .map(|tenant| format!(r#"<p class="text-sm text-slate-400">{}</p>"#, esc(tenant)))
        .unwrap_or_default();

    format!(
        r#"<div class="grid grid-cols-1 gap-6 xl:grid-cols-2">
  <div class="rounded-lg border border-slate-800 bg-slate-900 p-6">
    <div class="flex items-center gap-4">
      <div class="flex h-14 w-14 items-center justify-center rounded-full bg-indigo-900/70 text-xl font-semibold text-indigo-200">{initial}</div>
      <div>
        <h2 class="text-lg font-semibold text-white">{name}</h2>
        <p class="text-sm text-slate-400">{email}</p>
        {tenant_line}
      </div>
    </div>
    <dl class="mt-6 space-y-2 text-sm">
      <div class="flex justify-between"><dt class="text-slate-400">Role</dt><dd class="text-slate-200">{role}</dd></div>
      <div class="flex justify-between"><dt class="text-slate-400">Member since</dt><dd class="text-slate-200">{member_since}</dd></div>
    </dl>
  </div>
  <div class="rounded-lg border border-slate-800 bg-slate-900 p-6">
    <h2 class="text-sm font-semibold text-slate-200">Preferences</h2>
    <form class="mt-4 space-y-4" onsubmit="submitPreferences(event)">
      <label class="block text-sm">
        <span class="text-slate-400">Language</span>
        <select name="language" class="mt-1 w-full rounded border border-slate-700 bg-slate-950 px-2 py-1.5">{language_options}</select>
      </label>
      <label class="block text-sm">
        <span class="text-slate-400">Timezone</span>
        <select name="timezone" class="mt-1 w-full rounded border border-slate-700 bg-slate-950 px-2 py-1.5">{timezone_options}</select>
      </label>
      <label class="block text-sm">
        <span class="text-slate-400">Theme</span>
        <select name="theme" class="mt-1 w-full rounded border border-slate-700 bg-slate-950 px-2 py-1.5">{theme_options}</select>
      </label>
      <label class="flex items-center gap-2 text-sm text-slate-300">
        <input type="checkbox" name="invoiceEmails"{invoice_checked} class="rounded border-slate-700 bg-slate-950">
        Email me a copy of every invoice
      </label>
      <button type="submit" class="rounded bg-indigo-600 px-4 py-2 text-sm font-medium text-white hover:bg-indigo-500">Save preferences</button>
    </form>
  </div>
</div>"#,
        initial = esc(&profile.name.chars().next().map(String::from).unwrap_or_default()),
        name = esc(&profile.name),
        email = esc(&profile.email),
        tenant_line = tenant_line,
        role = profile.role.label(),
        member_since = fmt_date(&profile.member_since),
        language_options = language_options,
        timezone_options = timezone_options,
        theme_options = theme_options,
        invoice_checked = if prefs.invoice_emails { " checked" } else { "" },
    )
}

fn option(value: &str, label: &str, selected: bool) -> String {
    format!(
        r#"<option value="{value}"{selected}>{label}</option>"#,
        value = esc(value),
        selected = if selected { " selected" } else { "" },
        label = esc(label),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::demo_identity;
    use crate::mock::fixtures;
    use crate::models::PreferencesPatch;
    use crate::types::Role;

    #[test]
    fn form_defaults_reflect_stored_preferences() {
        let mut preferences = fixtures::default_preferences();
        preferences.apply(&PreferencesPatch {
            timezone: Some("Europe/Berlin".into()),
            invoice_emails: Some(false),
            ..Default::default()
        });
        let profile = fixtures::user_profile(demo_identity(Role::User), preferences);

        let html = render_profile(&profile);
        assert!(html.contains(r#"<option value="Europe/Berlin" selected>"#));
        assert!(html.contains(r#"<option value="en" selected>"#));
        assert!(!html.contains(r#"name="invoiceEmails" checked"#));
    }
}
