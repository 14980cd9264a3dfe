use crate::pages::html::{SIGN_UP_PATH, escape, layout, navbar};

use em_core::NavbarView;

use googletest::prelude::*;

#[test]
fn given_markup_characters_when_escaped_then_entities_replace_them() {
    let escaped = escape(r#"<script>alert("x") & 'y'</script>"#);

    assert_that!(
        escaped,
        eq("&lt;script&gt;alert(&quot;x&quot;) &amp; &#39;y&#39;&lt;/script&gt;")
    );
}

#[test]
fn given_signed_in_view_when_rendered_then_name_and_sign_out_form_shown() {
    let view = NavbarView::SignedIn {
        display_name: "Ada <Admin>".to_string(),
    };

    let html = navbar("Event Manager", &view, "/auth/signin");

    assert_that!(html, contains_substring("Ada &lt;Admin&gt;"));
    assert_that!(html, contains_substring(r#"action="/auth/signout""#));
    assert_that!(html, not(contains_substring("Get started")));
}

#[test]
fn given_signed_out_view_when_rendered_then_sign_in_and_sign_up_links_shown() {
    let html = navbar("Event Manager", &NavbarView::SignedOut, "/auth/signin");

    assert_that!(html, contains_substring(r#"href="/auth/signin""#));
    assert_that!(html, contains_substring(SIGN_UP_PATH));
    assert_that!(html, not(contains_substring("Sign out")));
}

#[test]
fn given_loading_view_when_rendered_then_placeholder_only() {
    let html = navbar("Event Manager", &NavbarView::Loading, "/auth/signin");

    assert_that!(html, contains_substring("skeleton"));
    assert_that!(html, not(contains_substring("Sign in")));
}

#[test]
fn given_page_when_laid_out_then_title_and_body_wrapped() {
    let html = layout("Tech & Talks", "Event Manager", "<nav></nav>", "<p>body</p>");

    assert_that!(html, starts_with("<!DOCTYPE html>"));
    assert_that!(html, contains_substring("<title>Tech &amp; Talks | Event Manager</title>"));
    assert_that!(html, contains_substring("<p>body</p>"));
}
