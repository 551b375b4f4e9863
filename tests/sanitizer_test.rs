use fuel_digest::{dom, extract_with_options, ContentSanitizer, Options};

#[test]
fn removes_exactly_the_tracker_script() {
    let doc = dom::parse(
        r#"<html><head>
            <script>googletag.cmd.push(function() {});</script>
            <script>document.title = "Ціни";</script>
        </head><body></body></html>"#,
    );

    let removed = ContentSanitizer::default().sanitize(&doc);

    assert_eq!(removed, 1);
    let remaining = doc.select("script");
    assert_eq!(remaining.length(), 1);
    assert!(remaining.text().contains("document.title"));
}

#[test]
fn scripts_anywhere_in_the_body_are_checked() {
    let doc = dom::parse(
        r#"<body><div><table><tr><td>1<script>var p = {disablePlayerDetachOnCreativeLoad: true};</script></td></tr></table></div>
           <footer><script>BidmaticLoader.init()</script></footer></body>"#,
    );
    assert_eq!(ContentSanitizer::default().sanitize(&doc), 2);
    assert!(doc.select("script").is_empty());
}

#[test]
fn tracker_inside_a_table_never_reaches_the_output() {
    let html = r#"<table><tr><td>Дата<script>googletag.display("x")</script></td></tr></table>"#;
    let result = fuel_digest::extract(html);
    assert_eq!(result.scripts_removed, 1);
    assert!(!result.html.contains("googletag"));
    assert!(result.html.contains("<td>Date</td>"));
}

#[test]
fn signatures_come_from_options() {
    let options = Options {
        tracker_signatures: vec!["adsbygoogle".to_string()],
        ..Options::default()
    };
    let result = extract_with_options(
        "<script>googletag.x()</script><script>adsbygoogle.push({})</script><h1>Дата</h1>",
        &options,
    );
    assert_eq!(result.scripts_removed, 1);
}
