use super::constants::*;

/// Scroll position and viewport size at the moment of a scroll event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportSnapshot {
    pub scroll_offset: f64,
    pub viewport_height: f64,
}

/// Geometry of one element: layout offsets plus its viewport-relative box.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementBox {
    pub offset_top: f64,
    pub offset_height: f64,
    pub client_top: f64,
    pub client_height: f64,
}

/// Capability a coordinator needs from an on-screen element.
pub trait RenderTarget {
    fn set_style(&self, property: &str, value: &str);
    fn set_class(&self, class: &str, on: bool);
    fn attribute(&self, name: &str) -> Option<String>;
    fn geometry(&self) -> ElementBox;
}

pub trait MetricsSource {
    fn snapshot(&self) -> ViewportSnapshot;
}

pub trait ScrollBinding {
    fn apply(&self, view: &ViewportSnapshot);
}

/// Scroll-driven animation coordinator.
///
/// Binds a [`MetricsSource`] to a [`ScrollBinding`]: on every scroll event it
/// takes one [`ViewportSnapshot`] and hands it to the binding, which maps it to
/// visual properties on the elements it owns. There is no batching or
/// throttling, and re-applying the same snapshot is harmless.
///
/// Each binding owns its elements exclusively. Binding constructors return
/// `None` when a required element is missing, so the page never registers a
/// coordinator that could only apply half an animation.
pub struct Coordinator<M, B> {
    metrics: M,
    binding: B,
}

impl<M: MetricsSource, B: ScrollBinding> Coordinator<M, B> {
    pub fn new(metrics: M, binding: B) -> Self {
        Self { metrics, binding }
    }

    pub fn on_scroll(&self) {
        let view = self.metrics.snapshot();
        self.binding.apply(&view);
    }
}

// ---------------- Pure mappings ----------------

#[inline]
pub fn navbar_scrolled(scroll_offset: f64) -> bool {
    scroll_offset > NAVBAR_SCROLLED_THRESHOLD_PX
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxFrame {
    pub translate_y: f64,
    pub opacity: f64,
}

/// `None` once the hero has scrolled a full viewport away; the last applied
/// frame is left in place.
pub fn parallax_frame(view: &ViewportSnapshot) -> Option<ParallaxFrame> {
    if view.viewport_height <= 0.0 || view.scroll_offset >= view.viewport_height {
        return None;
    }
    Some(ParallaxFrame {
        translate_y: view.scroll_offset * PARALLAX_TRANSLATE_FACTOR,
        opacity: 1.0 - (view.scroll_offset / view.viewport_height) * PARALLAX_FADE_FACTOR,
    })
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatMotion {
    pub rotation_deg: f64,
    pub translate_per_px: f64,
}

impl FloatMotion {
    pub fn new((rotation_deg, translate_per_px): (f64, f64)) -> Self {
        Self {
            rotation_deg,
            translate_per_px,
        }
    }

    pub fn transform(&self, scroll_offset: f64) -> String {
        format!(
            "rotate({:.2}deg) translateY({:.2}px)",
            self.rotation_deg,
            scroll_offset * self.translate_per_px
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingFrame {
    pub rotation_deg: f64,
    pub scale: f64,
}

/// Even rings turn clockwise, odd rings counter-clockwise; outer rings turn
/// and grow faster.
pub fn mandala_ring(index: usize, scroll_offset: f64) -> RingFrame {
    let step = (index + 1) as f64;
    let direction = if index % 2 == 0 { 1.0 } else { -1.0 };
    RingFrame {
        rotation_deg: scroll_offset * step * MANDALA_SPEED_STEP * direction,
        scale: 1.0 + scroll_offset * MANDALA_SCALE_STEP * step,
    }
}

impl RingFrame {
    pub fn transform(&self) -> String {
        format!(
            "translate(-50%, -50%) rotate({:.2}deg) scale({:.4})",
            self.rotation_deg, self.scale
        )
    }
}

/// Fraction of the timeline the rocket has travelled, in \[0, 1\].
///
/// Travel starts when the container top reaches the middle of the viewport.
pub fn rocket_progress(container_top: f64, container_height: f64, viewport_height: f64) -> f64 {
    let half = viewport_height / 2.0;
    let progress = (half - container_top) / (container_height - half);
    if progress.is_nan() {
        return 0.0;
    }
    progress.clamp(0.0, 1.0)
}

#[inline]
pub fn rocket_top(progress: f64, container_height: f64) -> f64 {
    progress * (container_height - ROCKET_TRAVEL_INSET_PX)
}

#[inline]
pub fn timeline_event_active(rocket_top: f64, event_offset_top: f64) -> bool {
    rocket_top > event_offset_top - TIMELINE_LOOKAHEAD_PX
}

/// A section as seen by the active-nav highlighter.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionSpan {
    pub id: String,
    pub offset_top: f64,
    pub height: f64,
}

impl SectionSpan {
    pub fn contains(&self, scroll_offset: f64) -> bool {
        let top = self.offset_top - SECTION_ACTIVATION_OFFSET_PX;
        scroll_offset >= top && scroll_offset < top + self.height
    }
}

/// Id of the section whose activation range contains `scroll_offset`.
///
/// Overlapping ranges resolve to the last section in document order.
pub fn active_section(scroll_offset: f64, sections: &[SectionSpan]) -> Option<&str> {
    sections
        .iter()
        .filter(|s| s.contains(scroll_offset))
        .last()
        .map(|s| s.id.as_str())
}

#[inline]
fn px(v: f64) -> String {
    format!("{:.2}px", v)
}

// ---------------- Bindings ----------------

pub struct NavbarBinding<T> {
    navbar: T,
}

impl<T: RenderTarget> NavbarBinding<T> {
    pub fn new(navbar: Option<T>) -> Option<Self> {
        Some(Self { navbar: navbar? })
    }
}

impl<T: RenderTarget> ScrollBinding for NavbarBinding<T> {
    fn apply(&self, view: &ViewportSnapshot) {
        self.navbar
            .set_class("scrolled", navbar_scrolled(view.scroll_offset));
    }
}

pub struct ParallaxBinding<T> {
    content: T,
}

impl<T: RenderTarget> ParallaxBinding<T> {
    pub fn new(content: Option<T>) -> Option<Self> {
        Some(Self { content: content? })
    }
}

impl<T: RenderTarget> ScrollBinding for ParallaxBinding<T> {
    fn apply(&self, view: &ViewportSnapshot) {
        if let Some(frame) = parallax_frame(view) {
            self.content
                .set_style("transform", &format!("translateY({})", px(frame.translate_y)));
            self.content
                .set_style("opacity", &format!("{:.4}", frame.opacity));
        }
    }
}

pub struct FloatingBinding<T> {
    elements: Vec<(T, FloatMotion)>,
}

impl<T: RenderTarget> FloatingBinding<T> {
    pub fn new(candidates: impl IntoIterator<Item = (Option<T>, FloatMotion)>) -> Option<Self> {
        let elements: Vec<_> = candidates
            .into_iter()
            .filter_map(|(el, motion)| el.map(|el| (el, motion)))
            .collect();
        (!elements.is_empty()).then_some(Self { elements })
    }
}

impl<T: RenderTarget> ScrollBinding for FloatingBinding<T> {
    fn apply(&self, view: &ViewportSnapshot) {
        for (el, motion) in &self.elements {
            el.set_style("transform", &motion.transform(view.scroll_offset));
        }
    }
}

pub struct MandalaBinding<T> {
    rings: Vec<T>,
}

impl<T: RenderTarget> MandalaBinding<T> {
    /// `tunnel_present` guards on the tunnel container; the rings are its children.
    pub fn new(tunnel_present: bool, rings: Vec<T>) -> Option<Self> {
        tunnel_present.then_some(Self { rings })
    }
}

impl<T: RenderTarget> ScrollBinding for MandalaBinding<T> {
    fn apply(&self, view: &ViewportSnapshot) {
        for (i, ring) in self.rings.iter().enumerate() {
            ring.set_style("transform", &mandala_ring(i, view.scroll_offset).transform());
        }
    }
}

pub struct RocketBinding<T> {
    container: T,
    rocket: T,
    line: T,
    events: Vec<T>,
}

impl<T: RenderTarget> RocketBinding<T> {
    pub fn new(container: Option<T>, rocket: Option<T>, line: Option<T>, events: Vec<T>) -> Option<Self> {
        Some(Self {
            container: container?,
            rocket: rocket?,
            line: line?,
            events,
        })
    }
}

impl<T: RenderTarget> ScrollBinding for RocketBinding<T> {
    fn apply(&self, view: &ViewportSnapshot) {
        let rect = self.container.geometry();
        let progress = rocket_progress(rect.client_top, rect.client_height, view.viewport_height);
        let top = rocket_top(progress, rect.client_height);

        self.rocket.set_style("top", &px(top));
        self.line.set_style("--scroll-percent", &px(top));

        for event in &self.events {
            let active = timeline_event_active(top, event.geometry().offset_top);
            event.set_class("active", active);
        }
    }
}

pub struct ActiveNavBinding<T> {
    sections: Vec<T>,
    links: Vec<T>,
}

impl<T: RenderTarget> ActiveNavBinding<T> {
    pub fn new(sections: Vec<T>, links: Vec<T>) -> Option<Self> {
        (!sections.is_empty() && !links.is_empty()).then_some(Self { sections, links })
    }

    fn spans(&self) -> Vec<SectionSpan> {
        self.sections
            .iter()
            .filter_map(|s| {
                let g = s.geometry();
                Some(SectionSpan {
                    id: s.attribute("id")?,
                    offset_top: g.offset_top,
                    height: g.offset_height,
                })
            })
            .collect()
    }
}

impl<T: RenderTarget> ScrollBinding for ActiveNavBinding<T> {
    fn apply(&self, view: &ViewportSnapshot) {
        let spans = self.spans();
        let Some(id) = active_section(view.scroll_offset, &spans) else {
            return;
        };
        let wanted = format!("#{id}");
        for link in &self.links {
            let hit = link.attribute("href").as_deref() == Some(wanted.as_str());
            link.set_class("active", hit);
        }
    }
}
