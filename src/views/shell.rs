//! The server-side HTML shell: CDN-hosted styling, icons, charting and date
//! libraries around the sidebar, header chrome, and the page content region.

use crate::router::Page;
use crate::types::Role;
use crate::views::esc;

pub struct ShellContext<'a> {
    pub page: Page,
    pub role: Role,
    pub user_name: &'a str,
    pub sidebar_html: &'a str,
    pub content_html: &'a str,
    pub banner_hidden: bool,
}

pub fn render(ctx: &ShellContext<'_>) -> String {
    let banner = if ctx.banner_hidden {
        String::new()
    } else {
        r#"<div id="demo-banner" class="flex items-center justify-between bg-indigo-600 px-4 py-2 text-sm text-white">
      <span><i class="fa-solid fa-flask mr-2"></i>Demo mode: all data is simulated and nothing is ever charged.</span>
      <button class="rounded px-2 py-0.5 hover:bg-indigo-500" onclick="hideBanner()"><i class="fa-solid fa-xmark"></i></button>
    </div>"#
            .to_string()
    };

    let role_options = Role::ALL
        .iter()
        .map(|role| {
            format!(
                r#"<option value="{value}"{selected}>{label}</option>"#,
                value = role.as_str(),
                selected = if *role == ctx.role { " selected" } else { "" },
                label = role.label(),
            )
        })
        .collect::<String>();

    format!(
        r#"<!DOCTYPE html>
<html lang="en" class="dark">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title} &middot; Platform Gateway</title>
  <script src="https://cdn.tailwindcss.com"></script>
  <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css">
  <script src="https://cdn.jsdelivr.net/npm/chart.js@4.4.3/dist/chart.umd.min.js"></script>
  <script src="https://cdn.jsdelivr.net/npm/axios@1.7.2/dist/axios.min.js"></script>
  <script src="https://cdn.jsdelivr.net/npm/dayjs@1.11.11/dayjs.min.js"></script>
</head>
<body class="bg-slate-950 text-slate-100">
  {banner}
  <div class="flex min-h-screen">
    <aside class="w-64 shrink-0 border-r border-slate-800 bg-slate-900/60">
      <div class="flex items-center gap-2 px-5 py-4 border-b border-slate-800">
        <i class="fa-solid fa-diagram-project text-indigo-400"></i>
        <span class="font-semibold text-white">Platform Gateway</span>
      </div>
      {sidebar}
    </aside>
    <div class="flex-1">
      <header class="flex items-center justify-between border-b border-slate-800 px-8 py-4">
        <h1 class="text-xl font-semibold text-white">{title}</h1>
        <div class="flex items-center gap-4">
          <select id="role-switcher" class="rounded border border-slate-700 bg-slate-900 px-2 py-1 text-sm" onchange="switchRole(this.value)">
            {role_options}
          </select>
          <span class="text-sm text-slate-300"><i class="fa-regular fa-user mr-2"></i>{user}</span>
        </div>
      </header>
      <main id="page-content" class="p-8" data-page="{slug}">
        {content}
      </main>
    </div>
  </div>
  <script>
    function toggleSection(id) {{
      axios.post('/api/nav/toggle', {{ section: id }}).then(() => location.reload());
    }}
    function hideBanner() {{
      axios.post('/api/banner/hide').then(() => document.getElementById('demo-banner').remove());
    }}
    function switchRole(role) {{
      axios.put('/api/demo/role', {{ role: role }}).then(() => location.reload());
    }}
    function submitPreferences(event) {{
      event.preventDefault();
      const form = event.target;
      axios.put('/api/user/preferences', {{
        language: form.language.value,
        timezone: form.timezone.value,
        theme: form.theme.value,
        invoiceEmails: form.invoiceEmails.checked,
      }}).then(() => location.reload());
    }}
  </script>
</body>
</html>"#,
        title = esc(ctx.page.title()),
        banner = banner,
        sidebar = ctx.sidebar_html,
        role_options = role_options,
        user = esc(ctx.user_name),
        slug = ctx.page.slug(),
        content = ctx.content_html,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_carries_title_banner_and_content() {
        let ctx = ShellContext {
            page: Page::Billing,
            role: Role::User,
            user_name: "Sam Okafor",
            sidebar_html: "<nav></nav>",
            content_html: "<p>hello</p>",
            banner_hidden: false,
        };
        let html = render(&ctx);
        assert!(html.contains("<title>Billing &amp; Plans &middot; Platform Gateway</title>"));
        assert!(html.contains(r#"id="demo-banner""#));
        assert!(html.contains("<p>hello</p>"));

        let hidden = render(&ShellContext {
            banner_hidden: true,
            ..ctx
        });
        assert!(!hidden.contains(r#"id="demo-banner""#));
    }
}
