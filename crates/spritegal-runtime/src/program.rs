#![forbid(unsafe_code)]

//! Elm-style model contract for the gallery runtime.
//!
//! A [`Model`] owns all widget state. Host input arrives as
//! [`spritegal_core::Event`] values converted into the model's message type;
//! `update` mutates state and returns a [`Cmd`] describing follow-up work;
//! `view` derives a [`SurfaceSnapshot`] from state alone. The DOM is never
//! read back.
//!
//! # Example
//!
//! ```ignore
//! use spritegal_runtime::program::{Cmd, Model};
//!
//! impl Model for Counter {
//!     type Message = Msg;
//!
//!     fn update(&mut self, msg: Msg) -> Cmd<Msg> {
//!         match msg {
//!             Msg::Bump => { self.count += 1; Cmd::none() }
//!             Msg::BumpTwice => Cmd::batch(vec![Cmd::msg(Msg::Bump), Cmd::msg(Msg::Bump)]),
//!         }
//!     }
//!
//!     fn view(&self) -> SurfaceSnapshot { /* ... */ }
//! }
//! ```

use spritegal_core::Event;

use crate::surface::SurfaceSnapshot;

/// Application state and behavior.
pub trait Model: Sized {
    /// The message type for this model. Must be convertible from host events.
    type Message: From<Event> + 'static;

    /// Called once before the first render. Return commands for startup side
    /// effects such as image preloading.
    fn init(&mut self) -> Cmd<Self::Message> {
        Cmd::none()
    }

    /// Core state transition.
    fn update(&mut self, msg: Self::Message) -> Cmd<Self::Message>;

    /// Derive the rendered surface from the current state.
    fn view(&self) -> SurfaceSnapshot;
}

/// Side effects requested by the model and executed by the runner.
#[derive(Default)]
pub enum Cmd<M> {
    /// No operation.
    #[default]
    None,
    /// Execute commands in order.
    Batch(Vec<Cmd<M>>),
    /// Send a message back to the model before the step completes.
    Msg(M),
    /// Record a log line for the host.
    Log(String),
    /// Ask the host to start loading the image at this path.
    LoadImage(String),
}

impl<M: std::fmt::Debug> std::fmt::Debug for Cmd<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Batch(cmds) => f.debug_tuple("Batch").field(cmds).finish(),
            Self::Msg(m) => f.debug_tuple("Msg").field(m).finish(),
            Self::Log(s) => f.debug_tuple("Log").field(s).finish(),
            Self::LoadImage(p) => f.debug_tuple("LoadImage").field(p).finish(),
        }
    }
}

impl<M> Cmd<M> {
    #[inline]
    pub fn none() -> Self {
        Self::None
    }

    #[inline]
    pub fn msg(m: M) -> Self {
        Self::Msg(m)
    }

    #[inline]
    pub fn log(msg: impl Into<String>) -> Self {
        Self::Log(msg.into())
    }

    #[inline]
    pub fn load_image(path: impl Into<String>) -> Self {
        Self::LoadImage(path.into())
    }

    /// Create a batch of commands, collapsing empty and single batches.
    pub fn batch(mut cmds: Vec<Self>) -> Self {
        match cmds.len() {
            0 => Self::None,
            1 => cmds.pop().unwrap_or(Self::None),
            _ => Self::Batch(cmds),
        }
    }

    /// Whether this command does nothing.
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}
