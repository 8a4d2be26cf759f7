/// `document.readyState`, as seen when the module starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadyPhase {
    Loading,
    Interactive,
    Complete,
}

impl ReadyPhase {
    /// Unknown or missing values count as still loading, so listeners get
    /// registered rather than skipped.
    pub fn parse(ready_state: Option<&str>) -> Self {
        match ready_state {
            Some("interactive") => Self::Interactive,
            Some("complete") => Self::Complete,
            _ => Self::Loading,
        }
    }

    /// `DOMContentLoaded` has already fired.
    pub fn dom_parsed(self) -> bool {
        self != Self::Loading
    }

    /// The window `load` event has already fired.
    pub fn loaded(self) -> bool {
        self == Self::Complete
    }
}
