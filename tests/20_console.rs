mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn root_redirects_to_the_dashboard() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    let res = client.get(&server.base_url).send().await?;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        res.headers().get("location").and_then(|v| v.to_str().ok()),
        Some("/console/dashboard")
    );
    Ok(())
}

#[tokio::test]
async fn page_titles_follow_the_static_lookup() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    for (slug, title) in [
        ("dashboard", "Dashboard"),
        ("billing", "Billing &amp; Plans"),
        ("profile", "Your Profile"),
    ] {
        let html = client
            .get(format!("{}/console/{}", server.base_url, slug))
            .send()
            .await?
            .text()
            .await?;
        assert!(
            html.contains(&format!("<title>{} &middot; Platform Gateway</title>", title)),
            "missing title for /console/{}",
            slug
        );
        assert!(html.contains(&format!(r#"data-page="{}""#, slug)));
    }

    // Unknown slugs fall back to the dashboard
    let html = client
        .get(format!("{}/console/definitely-not-a-page", server.base_url))
        .send()
        .await?
        .text()
        .await?;
    assert!(html.contains("<title>Dashboard &middot; Platform Gateway</title>"));
    Ok(())
}

/// Role switching, section visibility, expand/collapse, and the banner flag
/// drive shared server state, so the whole flow runs as one sequence.
#[tokio::test]
async fn role_and_navigation_flow() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let page_url = format!("{}/console/dashboard", server.base_url);

    // Default development role is the platform admin
    let html = client.get(&page_url).send().await?.text().await?;
    assert!(html.contains(r#"data-section="management""#));
    assert!(!html.contains(r#"data-section="payments""#));

    // Collapsed by default: the management links are hidden until toggled
    assert!(!html.contains("/console/admin-payments"));
    let res = client
        .post(format!("{}/api/nav/toggle", server.base_url))
        .json(&json!({ "section": "management" }))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    assert_eq!(res["data"]["expanded"], json!(true));

    let html = client.get(&page_url).send().await?.text().await?;
    assert!(html.contains("/console/admin-payments"));

    // Toggling again collapses rather than duplicating the entry
    client
        .post(format!("{}/api/nav/toggle", server.base_url))
        .json(&json!({ "section": "management" }))
        .send()
        .await?;
    let html = client.get(&page_url).send().await?.text().await?;
    assert!(!html.contains("/console/admin-payments"));

    // Hide the demo banner
    assert!(html.contains(r#"id="demo-banner""#));
    client
        .post(format!("{}/api/banner/hide", server.base_url))
        .send()
        .await?;
    let html = client.get(&page_url).send().await?.text().await?;
    assert!(!html.contains(r#"id="demo-banner""#));

    // Switch to the member role: admin sections disappear
    let switched = client
        .put(format!("{}/api/demo/role", server.base_url))
        .json(&json!({ "role": "user" }))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    assert_eq!(switched["data"]["role"], json!("user"));

    let html = client.get(&page_url).send().await?.text().await?;
    assert!(!html.contains(r#"data-section="management""#));
    assert!(html.contains(r#"data-section="payments""#));

    // The ledger page exists but is not offered to this role
    let html = client
        .get(format!("{}/console/admin-payments", server.base_url))
        .send()
        .await?
        .text()
        .await?;
    assert!(html.contains("not available for this role"));

    // Back to the admin so other tests in this binary see the default
    client
        .put(format!("{}/api/demo/role", server.base_url))
        .json(&json!({ "role": "super_admin" }))
        .send()
        .await?;
    Ok(())
}

#[tokio::test]
async fn profile_form_reflects_preference_writes() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    client
        .put(format!("{}/api/user/preferences", server.base_url))
        .json(&json!({ "language": "de", "invoiceEmails": false }))
        .send()
        .await?;

    let html = client
        .get(format!("{}/console/profile", server.base_url))
        .send()
        .await?
        .text()
        .await?;
    assert!(html.contains(r#"<option value="de" selected>"#));
    assert!(!html.contains(r#"name="invoiceEmails" checked"#));
    Ok(())
}
