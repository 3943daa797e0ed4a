#![forbid(unsafe_code)]

//! Full HTML rendering of a [`SurfaceSnapshot`].
//!
//! Class names and ids match the gallery stylesheet; icons use Font Awesome
//! classes. All text and attribute values are escaped.

use std::fmt::Write;

use spritegal_core::{Pager, StepDirection};

use crate::surface::{SampleSurface, SurfaceSnapshot, ids};

/// Render the complete gallery markup for a container's `innerHTML`.
#[must_use]
pub fn render_markup(snapshot: &SurfaceSnapshot) -> String {
    let mut out = String::with_capacity(1024 + snapshot.samples.len() * 1024);

    nav_button(
        &mut out,
        "prev",
        ids::PREV_PAGE,
        "fa-chevron-left",
        snapshot.prev_disabled,
    );

    let _ = write!(
        out,
        r#"<div class="slider-gallery-container"><div class="slider-gallery-wrapper" id="{}" style="transform: {}">"#,
        ids::WRAPPER,
        escape(&snapshot.wrapper_transform)
    );
    let pager = Pager::new(snapshot.samples.len(), snapshot.samples_per_page);
    for page in 0..pager.total_pages() {
        out.push_str(r#"<div class="slider-gallery-page">"#);
        for index in pager.page_range(page) {
            slider_item(&mut out, index, &snapshot.samples[index]);
        }
        out.push_str("</div>");
    }
    out.push_str("</div></div>");

    nav_button(
        &mut out,
        "next",
        ids::NEXT_PAGE,
        "fa-chevron-right",
        snapshot.next_disabled,
    );

    for caption in &snapshot.captions {
        let _ = write!(
            out,
            r#"<h2 class="{}">{}</h2>"#,
            escape(&caption.class),
            escape(&caption.text)
        );
    }

    let _ = write!(
        out,
        r#"<div class="gallery-pagination" id="{}">"#,
        ids::PAGINATION
    );
    for page in 0..snapshot.total_pages {
        let active = if snapshot.dot_active(page) {
            " active"
        } else {
            ""
        };
        let _ = write!(
            out,
            r#"<button class="gallery-pagination-dot{active}" id="{}" data-page="{page}"></button>"#,
            ids::dot(page)
        );
    }
    out.push_str("</div>");

    out
}

fn nav_button(out: &mut String, side: &str, id: &str, icon: &str, disabled: bool) {
    let _ = write!(
        out,
        r#"<button class="gallery-nav-button {side}" id="{id}"{}><i class="fas {icon}"></i></button>"#,
        disabled_attr(disabled)
    );
}

fn slider_item(out: &mut String, index: usize, sample: &SampleSurface) {
    let frame_style = sample
        .sprite
        .as_ref()
        .map(|s| format!(r#" style="{}""#, escape(&s.inline_css())))
        .unwrap_or_default();

    let _ = write!(
        out,
        r#"<div class="slider-contrabble-item"><div class="slider-image-container"><div class="slider-image-frame" id="{}"{frame_style}></div></div>"#,
        ids::frame(index)
    );
    let _ = write!(
        out,
        r#"<div class="slider-prompt">{}</div>"#,
        escape(&sample.prompt)
    );
    out.push_str(
        r#"<div class="slider-controls"><div class="slider-control-wrapper"><span class="slider-control-label">Strength:</span>"#,
    );
    step_button(
        out,
        index,
        StepDirection::Decrement,
        sample.decrement_disabled,
    );
    let _ = write!(
        out,
        r#"<input type="range" class="slider-input" id="{}" min="0" max="{}" value="{}" step="1" data-sample-index="{index}" style="background: {}"/>"#,
        ids::slider(index),
        sample.max_frame,
        sample.frame,
        escape(&sample.track_background)
    );
    step_button(
        out,
        index,
        StepDirection::Increment,
        sample.increment_disabled,
    );
    out.push_str("</div></div></div>");
}

fn step_button(out: &mut String, index: usize, direction: StepDirection, disabled: bool) {
    let action = direction.as_str();
    let icon = match direction {
        StepDirection::Decrement => "fa-minus",
        StepDirection::Increment => "fa-plus",
    };
    let _ = write!(
        out,
        r#"<button class="slider-step-button {action}" id="{}" data-sample-index="{index}" data-action="{action}"{}><i class="fas {icon}"></i></button>"#,
        ids::step(direction, index),
        disabled_attr(disabled)
    );
}

fn disabled_attr(disabled: bool) -> &'static str {
    if disabled { " disabled" } else { "" }
}

/// Escape text for HTML content and double-quoted attribute values.
#[must_use]
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
