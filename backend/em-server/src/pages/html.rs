//! HTML building blocks shared by every server-rendered page.

use em_core::NavbarView;

use std::fmt::Write;

pub const SIGN_UP_PATH: &str = "/auth/signup";

/// Escape text for use in element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Top navigation bar. Signing out posts to `/auth/signout`.
pub fn navbar(site_title: &str, view: &NavbarView, sign_in_path: &str) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        r#"<nav class="navbar"><a href="/" class="brand">{}</a><div class="nav-actions">"#,
        escape(site_title)
    );

    match view {
        NavbarView::Loading => html.push_str(r#"<div class="skeleton"></div>"#),
        NavbarView::SignedIn { display_name } => {
            let _ = write!(
                html,
                r#"<span class="user-name">{}</span><form method="post" action="/auth/signout"><button type="submit">Sign out</button></form>"#,
                escape(display_name)
            );
        }
        NavbarView::SignedOut => {
            let _ = write!(
                html,
                r#"<a href="{}">Sign in</a><a href="{}" class="btn-primary">Get started</a>"#,
                escape(sign_in_path),
                SIGN_UP_PATH
            );
        }
    }

    html.push_str("</div></nav>");
    html
}

/// Full document around `body`.
pub fn layout(page_title: &str, site_title: &str, navbar_html: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8"/>
  <meta name="viewport" content="width=device-width, initial-scale=1"/>
  <title>{title} | {site}</title>
</head>
<body class="min-h-screen bg-gray-50">
{navbar}
<main>
{body}
</main>
</body>
</html>"#,
        title = escape(page_title),
        site = escape(site_title),
        navbar = navbar_html,
        body = body,
    )
}
