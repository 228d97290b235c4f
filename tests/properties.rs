use ferrokit::app::services::markdown::parse;
use ferrokit::{
    fuzzy_score, render_markdown, sanitize_html, Block, Inline, MemoryStore, ThemeController,
};

#[test]
fn sanitized_output_never_contains_script() {
    let inputs = [
        "<script>alert(1)</script>",
        "before<script type='x'>\nmulti\nline\n</script>after",
        "<scr<script>x</script>ipt>alert(1)</script>",
        "<<b>script>alert(1)<</b>/script>",
        "<ScRiPt>mixed</ScRiPt>",
    ];
    for input in inputs {
        let out = sanitize_html(input);
        assert!(!out.to_lowercase().contains("<script"), "{:?} -> {:?}", input, out);
    }
}

#[test]
fn javascript_href_removed_entirely() {
    let out = sanitize_html(r#"<a href="javascript:alert(1)" title="t">x</a>"#);
    assert!(!out.contains("href"));
    assert_eq!(out, r#"<a title="t">x</a>"#);
}

#[test]
fn sanitizer_is_idempotent() {
    let inputs = [
        r#"<p onclick="a()">x</p><img src="data:image/png;base64,AAA" alt=a>"#,
        "<style>p{}</style><em>ok</em><unknown>t</unknown>",
        "a < b && c > d",
    ];
    for input in inputs {
        let once = sanitize_html(input);
        assert_eq!(sanitize_html(&once), once);
    }
}

#[test]
fn bold_and_heading_spans() {
    let blocks = parse("**bold**\n### Title");
    assert_eq!(blocks[0], Block::Paragraph(vec![Inline::Bold("bold".to_string())]));
    assert_eq!(
        blocks[1],
        Block::Heading { level: 3, spans: vec![Inline::Text("Title".to_string())] }
    );
}

#[test]
fn fuzzy_scores() {
    assert!(fuzzy_score("cb", "Command Bar") > fuzzy_score("xz", "Command Bar"));
    assert_eq!(fuzzy_score("xz", "Command Bar"), 0);
    assert_eq!(fuzzy_score("bar", "bar"), 100);
}

#[test]
fn font_scale_clamped() {
    let mut theme = ThemeController::load(MemoryStore::new());
    theme.set_font_size_scale(5.0);
    assert_eq!(theme.state().font_size_scale, 2.0);
    theme.set_font_size_scale(0.1);
    assert_eq!(theme.state().font_size_scale, 0.5);
}

#[test]
fn chat_message_end_to_end() {
    let html = render_markdown(
        "## Result\n- uses `regex`\n- see [docs](https://docs.rs)\n```sh\ncargo add x\n```",
        true,
    );
    assert_eq!(
        html,
        "<h2>Result</h2>\n<ul>\n<li>uses <code>regex</code></li>\n\
         <li>see <a href=\"https://docs.rs\">docs</a></li>\n</ul>\n\
         <pre><code class=\"language-sh\">cargo add x</code></pre>\n"
    );
}
