use std::fmt::Write as _;

use shared::domain::ChefRecord;

use crate::filter::{SearchCriteria, Searchable};

pub const DEFAULT_IMAGE: &str = "images/chef1.jpg";
pub const BOOKING_PAGE: &str = "book-a-chef.html";
const DEFAULT_RATING: f64 = 4.5;

/// Display form of one chef plus the lowercased attributes searches read.
#[derive(Debug, Clone, PartialEq)]
pub struct ChefCard {
    pub image: String,
    pub name: String,
    pub location: String,
    pub rating_text: String,
    pub profile_href: String,
    pub booking_href: String,
    pub data_location: String,
    pub data_cuisine: String,
    pub data_diet: String,
    pub visible: bool,
}

impl ChefCard {
    pub fn from_record(record: &ChefRecord) -> Self {
        let rating = record
            .rating
            .filter(|r| *r != 0.0)
            .unwrap_or(DEFAULT_RATING);
        let reviews = match record.review_count {
            Some(count) if count > 0 => count.to_string(),
            _ => "New".to_string(),
        };
        let data_diet = record
            .dietary_tags
            .iter()
            .map(|tag| hyphenate(&tag.to_lowercase()))
            .collect::<Vec<_>>()
            .join(",");

        Self {
            image: non_empty(record.image_url.as_deref()).unwrap_or(DEFAULT_IMAGE).to_string(),
            name: record.name.clone(),
            location: record.location.clone(),
            rating_text: format!("{rating} ({reviews})"),
            profile_href: non_empty(record.profile_url.as_deref())
                .unwrap_or(BOOKING_PAGE)
                .to_string(),
            booking_href: BOOKING_PAGE.to_string(),
            data_location: record.location.to_lowercase(),
            data_cuisine: record.cuisine.to_lowercase(),
            data_diet,
            visible: true,
        }
    }

    fn write_html(&self, out: &mut String) {
        let style = if self.visible {
            ""
        } else {
            r#" style="display:none""#
        };
        let _ = write!(
            out,
            r#"<div class="chef-card" data-location="{}" data-cuisine="{}" data-diet="{}"{style}>
  <img src="{}" alt="{}">
  <h3>{}</h3>
  <p class="chef-location">{}</p>
  <div class="chef-rating"><span class="stars">★★★★★</span><span class="rating-text">{}</span></div>
  <a href="{}" class="btn">View Profile</a>
  <a href="{}" class="btn btn-secondary">Book Now</a>
</div>
"#,
            html_escape(&self.data_location),
            html_escape(&self.data_cuisine),
            html_escape(&self.data_diet),
            html_escape(&self.image),
            html_escape(&self.name),
            html_escape(&self.name),
            html_escape(&self.location),
            html_escape(&self.rating_text),
            html_escape(&self.profile_href),
            html_escape(&self.booking_href),
        );
    }
}

impl Searchable for ChefCard {
    fn cuisine(&self) -> &str {
        &self.data_cuisine
    }

    fn dietary(&self) -> String {
        self.data_diet.clone()
    }
}

/// The explore page: a grid of cards, a no-results block and the feedback
/// line of the last search.
#[derive(Debug, Clone, Default)]
pub struct ExploreView {
    cards: Vec<ChefCard>,
    feedback: Option<String>,
}

impl ExploreView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces whatever was shown with one visible card per record.
    pub fn render(&mut self, records: &[ChefRecord]) {
        self.cards = records.iter().map(ChefCard::from_record).collect();
        self.feedback = None;
    }

    /// Filters the cards currently shown. Returns how many stay visible.
    pub fn apply_search(&mut self, criteria: &SearchCriteria) -> usize {
        let mut visible = 0;
        for card in &mut self.cards {
            card.visible = criteria.matches(&*card);
            if card.visible {
                visible += 1;
            }
        }
        let noun = if visible == 1 { "chef" } else { "chefs" };
        self.feedback = Some(format!("Found {visible} {noun} matching your criteria"));
        visible
    }

    pub fn reset_search(&mut self) {
        for card in &mut self.cards {
            card.visible = true;
        }
        self.feedback = None;
    }

    pub fn cards(&self) -> &[ChefCard] {
        &self.cards
    }

    pub fn visible_cards(&self) -> impl Iterator<Item = &ChefCard> {
        self.cards.iter().filter(|card| card.visible)
    }

    pub fn visible_count(&self) -> usize {
        self.visible_cards().count()
    }

    pub fn shows_empty_state(&self) -> bool {
        self.visible_count() == 0
    }

    pub fn feedback(&self) -> Option<&str> {
        self.feedback.as_deref()
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        let grid_style = if self.shows_empty_state() {
            "none"
        } else {
            "grid"
        };
        let _ = writeln!(out, r#"<div class="chef-cards" style="display:{grid_style}">"#);
        for card in &self.cards {
            card.write_html(&mut out);
        }
        out.push_str("</div>\n");

        let empty_style = if self.shows_empty_state() {
            "block"
        } else {
            "none"
        };
        let _ = writeln!(
            out,
            r#"<div id="no-results" style="display:{empty_style}"><h3>No chefs found matching your criteria</h3><p>Try adjusting your search filters or browse all available chefs.</p></div>"#
        );
        if let Some(feedback) = &self.feedback {
            let _ = writeln!(
                out,
                r#"<div id="search-feedback">{}</div>"#,
                html_escape(feedback)
            );
        }
        out
    }
}

pub fn html_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
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

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn hyphenate(tag: &str) -> String {
    tag.split_whitespace().collect::<Vec<_>>().join("-")
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
