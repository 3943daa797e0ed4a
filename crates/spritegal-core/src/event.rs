#![forbid(unsafe_code)]

//! Canonical input events delivered by the host page.
//!
//! The web frontend decodes DOM clicks, slider input, image loads and layout
//! measurements into these values; the runtime maps them onto model messages.

/// Direction of a slider step button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepDirection {
    Decrement,
    Increment,
}

impl StepDirection {
    /// Signed frame delta.
    #[must_use]
    pub fn delta(self) -> i64 {
        match self {
            Self::Decrement => -1,
            Self::Increment => 1,
        }
    }

    /// Parse a `data-action` attribute value.
    #[must_use]
    pub fn from_action(action: &str) -> Option<Self> {
        match action {
            "decrement" => Some(Self::Decrement),
            "increment" => Some(Self::Increment),
            _ => None,
        }
    }

    /// Value of the `data-action` attribute and the id prefix.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Decrement => "decrement",
            Self::Increment => "increment",
        }
    }
}

/// Host input event.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// "Previous page" button.
    PrevPage,
    /// "Next page" button.
    NextPage,
    /// Pagination dot or programmatic navigation. Signed so that callers can
    /// pass through out-of-range requests, which are ignored.
    GoToPage(i64),
    /// The range input of `sample` reported `value`.
    SliderInput { sample: usize, value: i64 },
    /// A step button of `sample` was pressed.
    Step {
        sample: usize,
        direction: StepDirection,
    },
    /// The frame box of `sample` is `height` CSS pixels tall.
    FrameMeasured { sample: usize, height: f64 },
    /// The sheet at `path` finished decoding.
    ImageLoaded { path: String },
    /// The sheet at `path` failed to load or decode.
    ImageFailed { path: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_direction_round_trips_action() {
        for dir in [StepDirection::Decrement, StepDirection::Increment] {
            assert_eq!(StepDirection::from_action(dir.as_str()), Some(dir));
        }
        assert_eq!(StepDirection::from_action("reset"), None);
    }

    #[test]
    fn delta_sign() {
        assert_eq!(StepDirection::Decrement.delta(), -1);
        assert_eq!(StepDirection::Increment.delta(), 1);
    }
}
