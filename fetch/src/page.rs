use keyphrase_core::config::LEADING_PARAGRAPHS;
use keyphrase_core::{text_from_url, AnalysisInput};
use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref TITLE_META: [Selector; 3] = [
        selector("meta[name=title]"),
        selector(r#"meta[property="og:title"]"#),
        selector(r#"meta[name="og:title"][content]"#),
    ];
    static ref TITLE: Selector = selector("title");
    static ref DESCRIPTION_META: [Selector; 3] = [
        selector("meta[name=description]"),
        selector(r#"meta[property="og:description"]"#),
        selector(r#"meta[name="twitter:description"]"#),
    ];
    static ref HEADINGS: [Selector; 3] = [selector("h1"), selector("h2"), selector("h3")];
    static ref PARAGRAPH: Selector = selector("p");
    static ref STYLED: [Selector; 3] = [selector("b"), selector("i"), selector("u")];
}

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("valid selector")
}

fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>()
}

/// A parsed HTML page and the accessors the phrase analysis needs.
pub struct PageDocument {
    html: Html,
}

impl PageDocument {
    pub fn parse(html: &str) -> Self {
        Self { html: Html::parse_document(html) }
    }

    /// `content` of the first matching meta tag that has one. A tag without `content` does not
    /// end the search: later matches and later selectors are still tried.
    fn first_meta_content(&self, selectors: &[Selector]) -> Option<String> {
        selectors.iter().find_map(|sel| {
            self.html
                .select(sel)
                .find_map(|el| el.value().attr("content"))
                .map(str::to_string)
        })
    }

    fn texts<'a>(&'a self, sel: &'a Selector) -> impl Iterator<Item = String> + 'a {
        self.html.select(sel).map(element_text)
    }

    /// Meta title, falling back through og:title to the `<title>` element.
    /// Meta tags lacking `content` are skipped rather than yielding `None`.
    pub fn title(&self) -> Option<String> {
        self.first_meta_content(TITLE_META.as_slice())
            .or_else(|| self.texts(&TITLE).next())
    }

    /// Meta description, then og:description, then twitter:description.
    pub fn description(&self) -> Option<String> {
        self.first_meta_content(DESCRIPTION_META.as_slice())
    }

    /// Text of each `<h1>`..`<h3>` element in document order. Other levels yield nothing.
    pub fn headings(&self, level: u8) -> Vec<String> {
        match level {
            1..=3 => self.texts(&HEADINGS[usize::from(level) - 1]).collect(),
            _ => Vec::new(),
        }
    }

    /// The first `count` paragraphs joined by newlines, or `None` if the page has fewer.
    pub fn leading_paragraphs(&self, count: usize) -> Option<String> {
        let paragraphs: Vec<String> = self.texts(&PARAGRAPH).take(count).collect();
        (paragraphs.len() >= count).then(|| paragraphs.join("\n"))
    }

    /// Bold runs, then italic, then underlined.
    pub fn styled_text(&self) -> Vec<String> {
        STYLED.iter().flat_map(|sel| self.texts(sel)).collect()
    }

    pub fn signals(&self, url: &str) -> PageSignals {
        PageSignals {
            url: url.to_string(),
            url_text: text_from_url(url),
            title: self.title(),
            description: self.description(),
            h1: self.headings(1),
            h2: self.headings(2),
            h3: self.headings(3),
            leading_paragraphs: self.leading_paragraphs(LEADING_PARAGRAPHS),
            styled_text: self.styled_text(),
        }
    }
}

/// Everything extracted from one page, detached from the parsed DOM.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSignals {
    pub url: String,
    pub url_text: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub h1: Vec<String>,
    pub h2: Vec<String>,
    pub h3: Vec<String>,
    pub leading_paragraphs: Option<String>,
    pub styled_text: Vec<String>,
}

impl PageSignals {
    pub fn from_html(url: &str, html: &str) -> Self {
        PageDocument::parse(html).signals(url)
    }

    /// Styled text is reported but not ranked.
    pub fn analysis_input(&self) -> AnalysisInput {
        AnalysisInput {
            url_text: self.url_text.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            h1: self.h1.clone(),
            h2: self.h2.clone(),
            h3: self.h3.clone(),
            leading_paragraphs: self.leading_paragraphs.clone(),
        }
    }
}
