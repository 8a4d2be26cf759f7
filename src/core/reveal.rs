use super::constants::{LAZY_ROOT_MARGIN, LAZY_THRESHOLD, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealConfig {
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl RevealConfig {
    pub const SCROLL_REVEAL: Self = Self {
        threshold: REVEAL_THRESHOLD,
        root_margin: REVEAL_ROOT_MARGIN,
    };
    pub const LAZY_IMAGES: Self = Self {
        threshold: LAZY_THRESHOLD,
        root_margin: LAZY_ROOT_MARGIN,
    };
}

/// What to do with an element the first time it is seen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealAction {
    /// Add the persistent `visible` class.
    MarkVisible,
    /// Move `data-src` into `src`.
    SwapSource,
}

/// One observer entry. The threshold itself is applied by the browser.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IntersectionSample {
    pub is_intersecting: bool,
}

#[derive(Clone, Debug)]
pub struct RevealTarget<T> {
    pub element: T,
    pub visible: bool,
}

/// Fixed set of observed elements. `visible` only ever goes false -> true.
#[derive(Clone, Debug)]
pub struct RevealSet<T> {
    targets: Vec<RevealTarget<T>>,
    action: RevealAction,
}

impl<T: PartialEq> RevealSet<T> {
    pub fn new(elements: impl IntoIterator<Item = T>, action: RevealAction) -> Self {
        Self {
            targets: elements
                .into_iter()
                .map(|element| RevealTarget {
                    element,
                    visible: false,
                })
                .collect(),
            action,
        }
    }

    pub fn action(&self) -> RevealAction {
        self.action
    }

    /// Returns `true` exactly once per element: on its first intersecting
    /// sample. The caller applies the action and stops observing it.
    pub fn intersect(&mut self, element: &T, sample: IntersectionSample) -> bool {
        if !sample.is_intersecting {
            return false;
        }
        match self.targets.iter_mut().find(|t| &t.element == element) {
            Some(t) if !t.visible => {
                t.visible = true;
                true
            }
            _ => false,
        }
    }

    /// Elements still waiting for their first intersection.
    pub fn pending(&self) -> impl Iterator<Item = &T> {
        self.targets.iter().filter(|t| !t.visible).map(|t| &t.element)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
