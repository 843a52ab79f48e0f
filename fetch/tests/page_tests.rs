use keyphrase_fetch::{PageDocument, PageReport, PageSignals};

const GUIDE: &str = include_str!("fixtures/guide.html");
const URL: &str = "https://example.com/rust-web-scraping-guide.html";

#[test]
fn it_extracts_meta_and_headings() {
    let doc = PageDocument::parse(GUIDE);
    assert_eq!(doc.title().as_deref(), Some("Rust Web Scraping Guide | Example"));
    assert_eq!(
        doc.description().as_deref(),
        Some("The complete rust web scraping guide, from requests to parsing.")
    );
    assert_eq!(doc.headings(1), vec!["The Rust Web Scraping Guide"]);
    assert_eq!(doc.headings(2).len(), 2);
    assert_eq!(doc.headings(3), vec!["Parsing HTML with selectors"]);
}

#[test]
fn it_joins_only_the_leading_paragraphs() {
    let doc = PageDocument::parse(GUIDE);
    let lead = doc.leading_paragraphs(3).expect("three paragraphs");
    assert_eq!(lead.lines().count(), 3);
    assert!(!lead.contains("fourth"));
    assert!(doc.leading_paragraphs(5).is_none());
}

#[test]
fn it_orders_styled_text_by_tag() {
    let doc = PageDocument::parse(GUIDE);
    assert_eq!(
        doc.styled_text(),
        vec!["rust web scraping guide", "rust web scraping guide", "whole thing"]
    );
}

#[test]
fn description_falls_back_to_twitter() {
    let doc = PageDocument::parse(r#"<meta name="twitter:description" content="from twitter">"#);
    assert_eq!(doc.description().as_deref(), Some("from twitter"));
}

#[test]
fn missing_signals_are_absent_not_errors() {
    let signals = PageSignals::from_html(URL, "<html><body><p>only one</p></body></html>");
    assert!(signals.title.is_none());
    assert!(signals.description.is_none());
    assert!(signals.leading_paragraphs.is_none());
    let report = PageReport::build(signals);
    assert!(report.analysis.per_source_rankings.paragraphs.is_empty());
}

#[test]
fn it_reports_the_winning_phrase() {
    let report = PageReport::build(PageSignals::from_html(URL, GUIDE));
    assert_eq!(report.signals.url_text, "rust web scraping guide html");
    let winner = report.analysis.winning_keywords.top().expect("winner");
    assert_eq!(winner.phrase, "rust web scraping guide");
    assert_eq!(winner.count, 4);

    let json = serde_json::to_value(&report).expect("serializable");
    assert_eq!(json["winning_keywords"][0]["phrase"], "rust web scraping guide");
    assert!(json["per_source_rankings"]["h3"].as_array().is_some());
    assert_eq!(json["url_text"], "rust web scraping guide html");
}
