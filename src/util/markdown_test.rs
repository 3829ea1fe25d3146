use super::*;

#[test]
fn renders_basic_emphasis() {
    let html = render_markdown_html("Under **Article 36** of the Family Code");
    assert!(html.contains("<strong>Article 36</strong>"));
}

#[test]
fn drops_inline_html() {
    let html = render_markdown_html("hello <img src=x onerror=alert(1)> world");
    assert!(!html.contains("<img"));
    assert!(!html.contains("onerror"));
    assert!(html.contains("hello"));
    assert!(html.contains("world"));
}

#[test]
fn drops_html_blocks() {
    let html = render_markdown_html("<script>alert(1)</script>\n\nSafe text");
    assert!(!html.contains("<script"));
    assert!(html.contains("Safe text"));
}

#[test]
fn escapes_angle_brackets_in_code() {
    let html = render_markdown_html("`<b>`");
    assert!(html.contains("&lt;b&gt;"));
}

#[test]
fn single_newlines_become_line_breaks() {
    let html = render_markdown_html("line one\nline two");
    assert!(html.contains("<br />"));
}

#[test]
fn renders_lists() {
    let html = render_markdown_html("- first\n- second");
    assert!(html.contains("<li>first</li>"));
    assert!(html.contains("<li>second</li>"));
}

// =============================================================
// Link and image destinations
// =============================================================

#[test]
fn javascript_link_is_neutralized() {
    let html = render_markdown_html("[click me](javascript:alert(document.cookie))");
    assert!(!html.contains("javascript:"));
    assert!(html.contains(r##"<a href="#">click me</a>"##));
}

#[test]
fn mixed_case_javascript_scheme_is_neutralized() {
    let html = render_markdown_html("[x](JaVaScRiPt:alert(1))");
    assert!(!html.to_ascii_lowercase().contains("script:"));
}

#[test]
fn javascript_autolink_is_neutralized() {
    let html = render_markdown_html("<javascript:alert(1)>");
    assert!(!html.contains(r#"href="javascript:"#));
}

#[test]
fn data_image_is_neutralized() {
    let html = render_markdown_html("![pic](data:image/svg+xml;base64,PHN2Zz4=)");
    assert!(!html.contains("data:"));
    assert!(html.contains(r##"src="#""##));
}

#[test]
fn data_link_is_neutralized() {
    let html = render_markdown_html("[doc](data:text/html;base64,PHNjcmlwdD4=)");
    assert!(!html.contains("data:text"));
}

#[test]
fn safe_links_are_kept() {
    let html = render_markdown_html("[law](https://lawphil.net/statutes) and [mail](mailto:help@example.ph)");
    assert!(html.contains(r#"href="https://lawphil.net/statutes""#));
    assert!(html.contains(r#"href="mailto:help@example.ph""#));
}

#[test]
fn relative_links_are_kept() {
    let html = render_markdown_html("[faq](/help/faq) [top](#intro) [next](page?a=b:c)");
    assert!(html.contains(r#"href="/help/faq""#));
    assert!(html.contains(r##"href="#intro""##));
    assert!(html.contains(r#"href="page?a=b:c""#));
}

#[test]
fn is_safe_url_checks_scheme() {
    assert!(is_safe_url("http://example.ph"));
    assert!(is_safe_url("HTTPS://example.ph"));
    assert!(is_safe_url("docs/affidavit.txt"));
    assert!(!is_safe_url("javascript:void(0)"));
    assert!(!is_safe_url(" javascript:void(0)"));
    assert!(!is_safe_url("java\tscript:void(0)"));
    assert!(!is_safe_url("java\nscript:void(0)"));
    assert!(!is_safe_url("vbscript:msgbox"));
    assert!(!is_safe_url("data:text/html,x"));
}
