use crate::config::toml_config::ExtractConfig;
use crate::domain::model::RawSection;
use crate::domain::ports::Extractor;
use crate::utils::error::{BotError, Result};
use scraper::{ElementRef, Html, Selector};

/// Extractor backed by the `scraper` crate. Content containers are `div`
/// elements whose `class` attribute equals the configured string exactly.
pub struct ScraperExtractor {
    container: Selector,
    heading: Selector,
    paragraph: Selector,
}

impl ScraperExtractor {
    pub fn new(container_class: &str, heading_tag: &str, paragraph_tag: &str) -> Result<Self> {
        let container = format!("div[class={}]", css_string(container_class));
        Ok(Self {
            container: parse_selector("extract.container_class", &container)?,
            heading: parse_selector("extract.heading_tag", heading_tag)?,
            paragraph: parse_selector("extract.paragraph_tag", paragraph_tag)?,
        })
    }

    pub fn from_config(config: &ExtractConfig) -> Result<Self> {
        Self::new(&config.container_class, &config.heading_tag, &config.paragraph_tag)
    }

    fn first_text(&self, element: ElementRef<'_>, selector: &Selector) -> Option<String> {
        element
            .select(selector)
            .next()
            .map(|found| found.text().collect::<String>().trim().to_string())
    }
}

/// Quote a value as a CSS string literal.
fn css_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            // control chars (newlines included) only survive as hex escapes
            c if c.is_control() => out.push_str(&format!("\\{:x} ", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

fn parse_selector(field: &str, selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| BotError::ConfigValidationError {
        field: field.to_string(),
        message: format!("invalid selector '{}': {}", selector, e),
    })
}

impl Extractor for ScraperExtractor {
    fn first_paragraph(&self, html: &str) -> Option<String> {
        let document = Html::parse_document(html);
        let container = document.select(&self.container).next()?;
        self.first_text(container, &self.paragraph)
    }

    fn sections(&self, html: &str) -> Vec<RawSection> {
        let document = Html::parse_document(html);
        document
            .select(&self.container)
            .map(|container| RawSection {
                heading: self.first_text(container, &self.heading),
                paragraph: self.first_text(container, &self.paragraph),
            })
            .collect()
    }
}
