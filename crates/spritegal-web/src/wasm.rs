#![forbid(unsafe_code)]

//! `wasm-bindgen` exports and the DOM host.
//!
//! [`SpriteGallery`] owns a [`GalleryCore`] and the browser objects it drives.
//! Listeners hold a weak reference to the host, so dropping the JS handle
//! detaches the gallery. Only compiled on `wasm32` targets.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo::events::EventListener;
use js_sys::Array;
use spritegal_core::{Event, default_catalog};
use spritegal_runtime::{DomPatch, ids};
use tracing::{debug, info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Element, HtmlElement, HtmlImageElement, HtmlInputElement};

use crate::dom_input::{ClickTarget, decode_click, decode_slider_input};
use crate::error::MountError;
use crate::gallery_core::GalleryCore;

/// Container id used by [`mount_default_gallery`].
pub const DEFAULT_CONTAINER_ID: &str = "interactiveSliderGallery";

thread_local! {
    /// Galleries mounted by [`mount_default_gallery`] live as long as the page.
    static MOUNTED: RefCell<Vec<SpriteGallery>> = const { RefCell::new(Vec::new()) };
}

fn install_panic_hook() {
    use std::sync::Once;

    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        std::panic::set_hook(Box::new(|info| {
            let msg = if let Some(loc) = info.location() {
                format!(
                    "panic at {}:{}:{}: {info}",
                    loc.file(),
                    loc.line(),
                    loc.column()
                )
            } else {
                format!("panic: {info}")
            };
            web_sys::console::error_1(&JsValue::from_str(&msg));
        }));
    });
}

/// Module entry. Installs the panic hook and console logging, then mounts the
/// default gallery if the page has an `#interactiveSliderGallery` element.
#[wasm_bindgen(start)]
pub fn wasm_start() {
    install_panic_hook();
    #[cfg(feature = "console-log")]
    crate::console_log::init();
    mount_default_gallery();
}

impl From<MountError> for JsValue {
    fn from(err: MountError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

// ---------------------------------------------------------------------------
// Host
// ---------------------------------------------------------------------------

struct Host {
    core: RefCell<GalleryCore>,
    /// Element lookups are scoped here so several galleries can share a page.
    container: Element,
    /// Keeps preloaded sheets alive for the browser cache.
    images: RefCell<HashMap<String, HtmlImageElement>>,
    listeners: RefCell<Vec<EventListener>>,
}

impl Host {
    fn mount(container_id: &str, mut core: GalleryCore) -> Result<Rc<Self>, MountError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| MountError::Dom("document unavailable".to_owned()))?;
        let container = document
            .get_element_by_id(container_id)
            .ok_or_else(|| MountError::ContainerNotFound(container_id.to_owned()))?;

        let paths = core.init();
        let markup = core.initial_markup();
        let samples = core.sample_count();
        let pages = core.total_pages();

        let host = Rc::new(Self {
            core: RefCell::new(core),
            container: container.clone(),
            images: RefCell::new(HashMap::new()),
            listeners: RefCell::new(Vec::new()),
        });

        for path in paths {
            host.preload(path)?;
        }
        container.set_inner_html(&markup);
        host.attach_listeners(&container);
        host.measure_frames();

        info!(container = container_id, samples, pages, "gallery mounted");
        Ok(host)
    }

    /// Start loading `path` and dispatch the outcome once `decode()` settles.
    fn preload(self: &Rc<Self>, path: String) -> Result<(), MountError> {
        let img = HtmlImageElement::new().map_err(|_| MountError::Dom("create image".to_owned()))?;
        img.set_src(&path);
        let decoded = JsFuture::from(img.decode());
        self.images.borrow_mut().insert(path.clone(), img);

        let weak = Rc::downgrade(self);
        spawn_local(async move {
            let event = match decoded.await {
                Ok(_) => Event::ImageLoaded { path },
                Err(_) => Event::ImageFailed { path },
            };
            if let Some(host) = weak.upgrade() {
                host.dispatch_measured(event);
            }
        });
        Ok(())
    }

    fn attach_listeners(self: &Rc<Self>, container: &Element) {
        let mut listeners = self.listeners.borrow_mut();

        let weak = Rc::downgrade(self);
        listeners.push(EventListener::new(container, "click", move |event| {
            let Some(host) = weak.upgrade() else {
                return;
            };
            let Some(button) = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.closest("button").ok().flatten())
            else {
                return;
            };
            let id = button.id();
            let class_name = button.class_name();
            let action = button.get_attribute("data-action");
            let sample_index = button.get_attribute("data-sample-index");
            let page = button.get_attribute("data-page");
            let target = ClickTarget {
                id: &id,
                class_name: &class_name,
                action: action.as_deref(),
                sample_index: sample_index.as_deref(),
                page: page.as_deref(),
            };
            if let Some(event) = decode_click(&target) {
                host.dispatch_measured(event);
            }
        }));

        let weak = Rc::downgrade(self);
        listeners.push(EventListener::new(container, "input", move |event| {
            let Some(host) = weak.upgrade() else {
                return;
            };
            let Some(input) = event
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };
            let sample_index = input.get_attribute("data-sample-index");
            if let Some(event) =
                decode_slider_input(&input.class_name(), sample_index.as_deref(), &input.value())
            {
                host.dispatch_measured(event);
            }
        }));

        if let Some(window) = web_sys::window() {
            let weak = Rc::downgrade(self);
            listeners.push(EventListener::new(&window, "resize", move |_| {
                if let Some(host) = weak.upgrade() {
                    host.measure_frames();
                }
            }));
        }
    }

    /// Report every frame box's current height.
    fn measure_frames(&self) {
        self.dispatch(self.frame_measurements());
    }

    fn frame_measurements(&self) -> Vec<Event> {
        let count = self.core.borrow().sample_count();
        (0..count)
            .filter_map(|sample| self.measure_frame(sample))
            .collect()
    }

    fn measure_frame(&self, sample: usize) -> Option<Event> {
        let el = self.html_element(&ids::frame(sample))?;
        Some(Event::FrameMeasured {
            sample,
            height: f64::from(el.offset_height()),
        })
    }

    /// Dispatch `event` after re-reading the height of every frame box it may
    /// paint. Boxes can change size without a window resize (a container that
    /// was hidden at mount, for one).
    fn dispatch_measured(&self, event: Event) {
        let mut events: Vec<Event> = match &event {
            Event::SliderInput { sample, .. } | Event::Step { sample, .. } => {
                self.measure_frame(*sample).into_iter().collect()
            }
            Event::ImageLoaded { .. } => self.frame_measurements(),
            _ => Vec::new(),
        };
        events.push(event);
        self.dispatch(events);
    }

    fn dispatch(&self, events: impl IntoIterator<Item = Event>) {
        let patches = self.core.borrow_mut().dispatch(events);
        for patch in &patches {
            self.apply(patch);
        }
    }

    /// Apply one patch. Missing elements are skipped.
    fn apply(&self, patch: &DomPatch) {
        let id = patch.target_id();
        match patch {
            DomPatch::WrapperTransform(transform) => {
                self.set_style(&id, "transform", transform);
            }
            DomPatch::NavDisabled { disabled, .. } | DomPatch::StepDisabled { disabled, .. } => {
                if let Some(el) = self.element(&id) {
                    let _ = el.toggle_attribute_with_force("disabled", *disabled);
                }
            }
            DomPatch::DotActive { active, .. } => {
                if let Some(el) = self.element(&id) {
                    let _ = el.class_list().toggle_with_force("active", *active);
                }
            }
            DomPatch::TrackBackground { css, .. } => {
                self.set_style(&id, "background", css);
            }
            DomPatch::SliderValue { value, .. } => {
                if let Some(input) = self
                    .element(&id)
                    .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
                {
                    input.set_value(&value.to_string());
                }
            }
            DomPatch::Sprite { style, .. } => {
                if let Some(el) = self.html_element(&id) {
                    let css = el.style();
                    for (property, value) in style.properties() {
                        let _ = css.set_property(property, value);
                    }
                }
            }
        }
    }

    fn element(&self, id: &str) -> Option<Element> {
        self.container
            .query_selector(&format!("#{id}"))
            .ok()
            .flatten()
    }

    fn html_element(&self, id: &str) -> Option<HtmlElement> {
        self.element(id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    }

    fn set_style(&self, id: &str, property: &str, value: &str) {
        if let Some(el) = self.html_element(id) {
            let _ = el.style().set_property(property, value);
        }
    }
}

// ---------------------------------------------------------------------------
// Exports
// ---------------------------------------------------------------------------

/// Paginated sprite-sheet slider gallery mounted into a page element.
#[wasm_bindgen]
pub struct SpriteGallery {
    host: Rc<Host>,
}

#[wasm_bindgen]
impl SpriteGallery {
    /// Mount into `#containerId` with `samples`, an array of
    /// `{ imagePath, prompt, numFrames }`.
    #[wasm_bindgen(constructor)]
    pub fn new(container_id: &str, samples: JsValue) -> Result<SpriteGallery, JsValue> {
        install_panic_hook();
        let json = js_sys::JSON::stringify(&samples)?
            .as_string()
            .ok_or_else(|| MountError::Dom("samples are not serializable".to_owned()))?;
        let core = GalleryCore::from_json(&json)?;
        let host = Host::mount(container_id, core)?;
        Ok(Self { host })
    }

    /// Navigate to `page`. Out-of-range pages are ignored.
    #[wasm_bindgen(js_name = goToPage)]
    pub fn go_to_page(&self, page: i32) {
        self.host.dispatch([Event::GoToPage(i64::from(page))]);
    }

    #[wasm_bindgen(getter, js_name = currentPage)]
    pub fn current_page(&self) -> usize {
        self.host.core.borrow().current_page()
    }

    #[wasm_bindgen(getter, js_name = totalPages)]
    pub fn total_pages(&self) -> usize {
        self.host.core.borrow().total_pages()
    }

    /// Current frame of `sample`, or `undefined` for an unknown sample.
    #[wasm_bindgen(js_name = frameOf)]
    pub fn frame_of(&self, sample: usize) -> Option<u32> {
        self.host.core.borrow().frame_of(sample)
    }

    /// Re-measure frame boxes, e.g. after the container was shown.
    pub fn remeasure(&self) {
        self.host.measure_frames();
    }

    /// Drain log lines buffered since the last call (failed sprite sheets).
    /// Returns `Array<string>`.
    #[wasm_bindgen(js_name = takeLogs)]
    pub fn take_logs(&self) -> Array {
        let arr = Array::new();
        for line in self.host.core.borrow_mut().take_logs() {
            arr.push(&JsValue::from_str(&line));
        }
        arr
    }
}

/// Mount the built-in catalog into `#interactiveSliderGallery`, waiting for
/// `DOMContentLoaded` if the document is still loading. A missing container
/// is skipped silently, and the default gallery is mounted at most once.
///
/// Runs automatically from the module's start function; call it again after
/// inserting the container later.
#[wasm_bindgen(js_name = mountDefaultGallery)]
pub fn mount_default_gallery() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", |_| mount_default_now()).forget();
    } else {
        mount_default_now();
    }
}

fn mount_default_now() {
    if MOUNTED.with(|m| !m.borrow().is_empty()) {
        return;
    }
    match Host::mount(DEFAULT_CONTAINER_ID, GalleryCore::new(default_catalog())) {
        Ok(host) => MOUNTED.with(|m| m.borrow_mut().push(SpriteGallery { host })),
        Err(MountError::ContainerNotFound(id)) => debug!(%id, "no gallery container on page"),
        Err(err) => warn!(%err, "default gallery mount failed"),
    }
}
