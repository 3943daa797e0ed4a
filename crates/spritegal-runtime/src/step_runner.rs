#![forbid(unsafe_code)]

//! Step-based program runner for the browser host.
//!
//! [`StepRunner`] drives a [`Model`] without threads, timers or DOM access.
//! The host (the wasm frontend) delivers events via [`push_event`] and calls
//! [`step`] / [`render`] from its own event handlers.
//!
//! The execution model is:
//! ```text
//! DOM event / image decode / layout measurement
//!   → push_event(Event)        // click, slider input, image ready, resize
//!   → step()                   // drain events, run model.update
//!   → render()                 // if dirty: model.view → snapshot + patches
//!   → apply the patches        // set styles, disabled flags, classes
//! ```
//!
//! The first render carries no patches; the host paints the whole snapshot as
//! markup. Every later render is a diff against the previous snapshot.
//!
//! [`push_event`]: StepRunner::push_event
//! [`step`]: StepRunner::step
//! [`render`]: StepRunner::render

use std::collections::VecDeque;

use spritegal_core::Event;
use tracing::trace;

use crate::program::{Cmd, Model};
use crate::surface::{DomPatch, SurfaceSnapshot, diff};

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// Work the host must perform outside the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Begin loading the sprite sheet at this path.
    LoadImage(String),
}

/// Outcome of a single [`StepRunner::step`] call.
#[derive(Debug, Clone, Copy, Default)]
pub struct StepResult {
    /// Number of queued events processed in this step.
    pub events_processed: u32,
    /// Whether the view is dirty (render needed).
    pub dirty: bool,
    /// Number of host effects waiting in [`StepRunner::take_effects`].
    pub pending_effects: usize,
}

/// Rendered output from [`StepRunner::render`].
#[derive(Debug)]
pub struct RenderedSurface<'a> {
    /// The full rendered snapshot.
    pub snapshot: &'a SurfaceSnapshot,
    /// Patches against the previous snapshot (`None` on first render).
    pub patches: Option<Vec<DomPatch>>,
    /// Sequential render index (starts at 0).
    pub frame_idx: u64,
}

// ---------------------------------------------------------------------------
// StepRunner
// ---------------------------------------------------------------------------

pub struct StepRunner<M: Model> {
    model: M,

    /// Most recently rendered snapshot; the diff baseline.
    current: Option<SurfaceSnapshot>,

    dirty: bool,
    initialized: bool,
    frame_idx: u64,

    /// Buffered events from the host.
    event_queue: VecDeque<Event>,
    /// Effects requested via commands, drained by the host.
    effects: Vec<Effect>,
    /// Log messages emitted via `Cmd::Log`.
    logs: Vec<String>,
}

impl<M: Model> StepRunner<M> {
    /// The model is not initialized until [`init`](Self::init) is called.
    #[must_use]
    pub fn new(model: M) -> Self {
        Self {
            model,
            current: None,
            dirty: true,
            initialized: false,
            frame_idx: 0,
            event_queue: VecDeque::new(),
            effects: Vec::new(),
            logs: Vec::new(),
        }
    }

    /// Run `Model::init()`. Calling it again is a no-op.
    pub fn init(&mut self) -> StepResult {
        if self.initialized {
            return self.summary(StepResult::default());
        }
        let cmd = self.model.init();
        self.initialized = true;
        self.dirty = true;
        self.execute_cmd(cmd);
        self.summary(StepResult::default())
    }

    // -- Event delivery -----------------------------------------------------

    /// Buffer a single event for processing on the next `step`.
    pub fn push_event(&mut self, event: Event) {
        self.event_queue.push_back(event);
    }

    /// Buffer multiple events for processing on the next `step`.
    pub fn push_events(&mut self, events: impl IntoIterator<Item = Event>) {
        self.event_queue.extend(events);
    }

    // -- Step ---------------------------------------------------------------

    /// Process all buffered events. Events stay queued until `init` runs.
    pub fn step(&mut self) -> StepResult {
        if !self.initialized {
            return StepResult::default();
        }

        let mut result = StepResult::default();
        while let Some(event) = self.event_queue.pop_front() {
            self.handle_event(event);
            result.events_processed += 1;
        }
        self.summary(result)
    }

    /// Process a single event immediately (without buffering).
    pub fn step_event(&mut self, event: Event) -> StepResult {
        if !self.initialized {
            return StepResult::default();
        }
        self.handle_event(event);
        self.summary(StepResult {
            events_processed: 1,
            ..Default::default()
        })
    }

    // -- Render -------------------------------------------------------------

    /// Render if dirty. Returns `None` when nothing changed since the last
    /// render.
    pub fn render(&mut self) -> Option<RenderedSurface<'_>> {
        if !self.dirty {
            return None;
        }
        Some(self.force_render())
    }

    /// Render unconditionally.
    pub fn force_render(&mut self) -> RenderedSurface<'_> {
        let snapshot = self.model.view();
        let patches = self.current.as_ref().map(|prev| diff(prev, &snapshot));
        if let Some(patches) = &patches {
            trace!(frame_idx = self.frame_idx, patches = patches.len(), "surface diff");
        }

        self.dirty = false;
        let idx = self.frame_idx;
        self.frame_idx += 1;

        RenderedSurface {
            snapshot: self.current.insert(snapshot),
            patches,
            frame_idx: idx,
        }
    }

    /// Drop the diff baseline so the next render is a full paint.
    pub fn invalidate(&mut self) {
        self.current = None;
        self.dirty = true;
    }

    // -- Accessors ----------------------------------------------------------

    /// Number of buffered events awaiting processing.
    #[must_use]
    pub fn pending_events(&self) -> usize {
        self.event_queue.len()
    }

    #[must_use]
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Drain host effects in request order.
    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    /// Drain and return accumulated log messages.
    pub fn drain_logs(&mut self) -> Vec<String> {
        std::mem::take(&mut self.logs)
    }

    #[must_use]
    pub fn logs(&self) -> &[String] {
        &self.logs
    }

    // -- Internal -----------------------------------------------------------

    fn summary(&self, mut result: StepResult) -> StepResult {
        result.dirty = self.dirty;
        result.pending_effects = self.effects.len();
        result
    }

    fn handle_event(&mut self, event: Event) {
        let msg = M::Message::from(event);
        let cmd = self.model.update(msg);
        self.dirty = true;
        self.execute_cmd(cmd);
    }

    fn execute_cmd(&mut self, cmd: Cmd<M::Message>) {
        match cmd {
            Cmd::None => {}
            Cmd::Msg(m) => {
                let cmd = self.model.update(m);
                self.execute_cmd(cmd);
            }
            Cmd::Batch(cmds) => {
                for c in cmds {
                    self.execute_cmd(c);
                }
            }
            Cmd::Log(text) => {
                self.logs.push(text);
            }
            Cmd::LoadImage(path) => {
                self.effects.push(Effect::LoadImage(path));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::GalleryModel;
    use crate::surface::NavButton;
    use pretty_assertions::assert_eq;
    use spritegal_core::{Sample, StepDirection};

    fn runner(samples: &[(&str, u32)]) -> StepRunner<GalleryModel> {
        let samples = samples
            .iter()
            .map(|&(path, frames)| Sample::new(path, path, frames).unwrap())
            .collect();
        StepRunner::new(GalleryModel::with_samples(samples))
    }

    fn patches(runner: &mut StepRunner<GalleryModel>) -> Vec<DomPatch> {
        runner
            .render()
            .and_then(|r| r.patches)
            .unwrap_or_default()
    }

    #[test]
    fn init_emits_load_effects() {
        let mut r = runner(&[("a.jpg", 3), ("b.jpg", 3), ("a.jpg", 2)]);
        let result = r.init();
        assert!(result.dirty);
        assert_eq!(result.pending_effects, 2);
        assert_eq!(
            r.take_effects(),
            vec![
                Effect::LoadImage("a.jpg".to_owned()),
                Effect::LoadImage("b.jpg".to_owned())
            ]
        );
        assert!(r.take_effects().is_empty());
    }

    #[test]
    fn second_init_is_noop() {
        let mut r = runner(&[("a.jpg", 3)]);
        r.init();
        r.take_effects();
        r.init();
        assert!(r.take_effects().is_empty());
    }

    #[test]
    fn first_render_has_no_patches() {
        let mut r = runner(&[("a.jpg", 3)]);
        r.init();
        let rendered = r.render().expect("dirty after init");
        assert_eq!(rendered.frame_idx, 0);
        assert!(rendered.patches.is_none());
        assert_eq!(rendered.snapshot.samples.len(), 1);
    }

    #[test]
    fn render_returns_none_when_clean() {
        let mut r = runner(&[("a.jpg", 3)]);
        r.init();
        r.render();
        assert!(r.render().is_none());
    }

    #[test]
    fn events_wait_for_init() {
        let mut r = runner(&[("a.jpg", 3)]);
        r.push_event(Event::SliderInput {
            sample: 0,
            value: 2,
        });
        assert_eq!(r.step().events_processed, 0);
        assert_eq!(r.pending_events(), 1);
        r.init();
        assert_eq!(r.step().events_processed, 1);
        assert_eq!(r.model().frame(0), Some(2));
    }

    #[test]
    fn step_button_patches_slider() {
        let mut r = runner(&[("a.jpg", 3)]);
        r.init();
        r.render();
        r.step_event(Event::Step {
            sample: 0,
            direction: StepDirection::Increment,
        });
        assert_eq!(
            patches(&mut r),
            vec![
                DomPatch::StepDisabled {
                    sample: 0,
                    direction: StepDirection::Decrement,
                    disabled: false
                },
                DomPatch::TrackBackground {
                    sample: 0,
                    css: "linear-gradient(to right, #007bff 0%, #007bff 50%, #e9ecef 50%, #e9ecef 100%)"
                        .to_owned()
                },
                DomPatch::SliderValue {
                    sample: 0,
                    value: 1
                },
            ]
        );
    }

    #[test]
    fn late_image_paints_latest_frame() {
        let mut r = runner(&[("a.jpg", 5)]);
        r.init();
        r.render();
        r.push_events([
            Event::FrameMeasured {
                sample: 0,
                height: 512.0,
            },
            Event::SliderInput {
                sample: 0,
                value: 1,
            },
            Event::SliderInput {
                sample: 0,
                value: 3,
            },
        ]);
        r.step();
        assert!(
            !patches(&mut r)
                .iter()
                .any(|p| matches!(p, DomPatch::Sprite { .. }))
        );

        r.step_event(Event::ImageLoaded {
            path: "a.jpg".to_owned(),
        });
        let sprites: Vec<DomPatch> = patches(&mut r)
            .into_iter()
            .filter(|p| matches!(p, DomPatch::Sprite { .. }))
            .collect();
        assert_eq!(sprites.len(), 1);
        match &sprites[0] {
            DomPatch::Sprite { sample, style } => {
                assert_eq!(*sample, 0);
                assert_eq!(style.position, "-1536px 0");
                assert_eq!(style.size, "2560px 512px");
            }
            other => panic!("unexpected patch: {other:?}"),
        }
    }

    #[test]
    fn resize_repaints_sprite() {
        let mut r = runner(&[("a.jpg", 2)]);
        r.init();
        r.push_events([
            Event::ImageLoaded {
                path: "a.jpg".to_owned(),
            },
            Event::FrameMeasured {
                sample: 0,
                height: 100.0,
            },
        ]);
        r.step();
        r.render();
        r.step_event(Event::FrameMeasured {
            sample: 0,
            height: 200.0,
        });
        let p = patches(&mut r);
        assert!(matches!(
            &p[..],
            [DomPatch::Sprite { style, .. }] if style.size == "400px 200px"
        ));
    }

    #[test]
    fn zero_height_defers_sprite_until_remeasured() {
        let mut r = runner(&[("a.jpg", 4)]);
        r.init();
        r.render();
        r.push_events([
            Event::ImageLoaded {
                path: "a.jpg".to_owned(),
            },
            Event::FrameMeasured {
                sample: 0,
                height: 0.0,
            },
        ]);
        r.step();
        assert!(patches(&mut r).is_empty());

        r.step_event(Event::SliderInput {
            sample: 0,
            value: 2,
        });
        assert!(
            !patches(&mut r)
                .iter()
                .any(|p| matches!(p, DomPatch::Sprite { .. }))
        );

        r.step_event(Event::FrameMeasured {
            sample: 0,
            height: 100.0,
        });
        let p = patches(&mut r);
        assert!(matches!(
            &p[..],
            [DomPatch::Sprite { style, .. }]
                if style.position == "-200px 0" && style.size == "400px 100px"
        ));
    }

    #[test]
    fn navigation_patches() {
        let mut r = runner(&[("a", 1), ("b", 1), ("c", 1), ("d", 1)]);
        r.init();
        r.render();
        r.step_event(Event::NextPage);
        assert_eq!(
            patches(&mut r),
            vec![
                DomPatch::WrapperTransform("translateX(-100%)".to_owned()),
                DomPatch::NavDisabled {
                    button: NavButton::Prev,
                    disabled: false
                },
                DomPatch::NavDisabled {
                    button: NavButton::Next,
                    disabled: true
                },
                DomPatch::DotActive {
                    page: 0,
                    active: false
                },
                DomPatch::DotActive {
                    page: 1,
                    active: true
                },
            ]
        );
        r.step_event(Event::NextPage);
        assert!(patches(&mut r).is_empty());
    }

    #[test]
    fn failed_image_logs() {
        let mut r = runner(&[("a.jpg", 2)]);
        r.init();
        r.step_event(Event::ImageFailed {
            path: "a.jpg".to_owned(),
        });
        assert_eq!(r.logs(), &["image failed: a.jpg"]);
        assert_eq!(r.drain_logs().len(), 1);
        assert!(r.logs().is_empty());
    }

    #[test]
    fn invalidate_forces_full_paint() {
        let mut r = runner(&[("a.jpg", 2)]);
        r.init();
        r.render();
        r.invalidate();
        let rendered = r.render().expect("dirty after invalidate");
        assert!(rendered.patches.is_none());
        assert_eq!(rendered.frame_idx, 1);
    }

    #[test]
    fn deterministic_replay() {
        fn run_scenario() -> Vec<DomPatch> {
            let mut r = runner(&[("a", 4), ("b", 4), ("c", 4), ("d", 4)]);
            r.init();
            r.render();
            r.push_events([
                Event::NextPage,
                Event::Step {
                    sample: 3,
                    direction: StepDirection::Increment,
                },
                Event::GoToPage(0),
                Event::SliderInput {
                    sample: 0,
                    value: 3,
                },
            ]);
            r.step();
            patches(&mut r)
        }
        assert_eq!(run_scenario(), run_scenario());
    }
}
