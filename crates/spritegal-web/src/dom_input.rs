#![forbid(unsafe_code)]

//! Decoding of delegated DOM input into gallery events.
//!
//! The host attaches one `click` and one `input` listener to the gallery
//! container. For a click it resolves the nearest `<button>` ancestor of the
//! event target and hands its attributes to [`decode_click`]; for input it
//! hands the range input's attributes to [`decode_slider_input`]. Anything
//! that does not decode is ignored.

use spritegal_core::{Event, StepDirection};
use spritegal_runtime::ids;

pub const DOT_CLASS: &str = "gallery-pagination-dot";
pub const SLIDER_CLASS: &str = "slider-input";

/// Attributes of a clicked `<button>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClickTarget<'a> {
    pub id: &'a str,
    /// Raw `class` attribute.
    pub class_name: &'a str,
    /// `data-action`.
    pub action: Option<&'a str>,
    /// `data-sample-index`.
    pub sample_index: Option<&'a str>,
    /// `data-page`.
    pub page: Option<&'a str>,
}

impl ClickTarget<'_> {
    fn has_class(&self, class: &str) -> bool {
        self.class_name.split_whitespace().any(|c| c == class)
    }
}

#[must_use]
pub fn decode_click(target: &ClickTarget<'_>) -> Option<Event> {
    match target.id {
        ids::PREV_PAGE => return Some(Event::PrevPage),
        ids::NEXT_PAGE => return Some(Event::NextPage),
        _ => {}
    }

    if target.has_class(DOT_CLASS) {
        let page = target.page?.trim().parse::<i64>().ok()?;
        return Some(Event::GoToPage(page));
    }

    let direction = StepDirection::from_action(target.action?)?;
    let sample = parse_index(target.sample_index?)?;
    Some(Event::Step { sample, direction })
}

/// Decode an `input` event from a range input.
#[must_use]
pub fn decode_slider_input(
    class_name: &str,
    sample_index: Option<&str>,
    value: &str,
) -> Option<Event> {
    if !class_name.split_whitespace().any(|c| c == SLIDER_CLASS) {
        return None;
    }
    let sample = parse_index(sample_index?)?;
    let value = value.trim().parse::<i64>().ok()?;
    Some(Event::SliderInput { sample, value })
}

fn parse_index(raw: &str) -> Option<usize> {
    raw.trim().parse().ok()
}
