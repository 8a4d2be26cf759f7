pub const PLAY_LABEL: &str = "▶";
pub const PAUSE_LABEL: &str = "⏸";

/// First-interaction listener lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InteractionGate {
    #[default]
    Idle,
    /// Autoplay was rejected; the next click/touch may start playback.
    Armed,
    /// The listener fired and was removed.
    Spent,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleAction {
    Play,
    Pause,
}

/// How the toggle button should look.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonFace {
    pub label: &'static str,
    pub playing: bool,
}

impl ButtonFace {
    pub const PLAYING: Self = Self {
        label: PAUSE_LABEL,
        playing: true,
    };
    pub const PAUSED: Self = Self {
        label: PLAY_LABEL,
        playing: false,
    };
}

/// Background music state: autoplay, the first-interaction fallback, and the
/// manual toggle button.
#[derive(Clone, Debug, Default)]
pub struct MusicPlayer {
    playing: bool,
    gate: InteractionGate,
}

impl MusicPlayer {
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn gate(&self) -> InteractionGate {
        self.gate
    }

    pub fn autoplay_started(&mut self) -> ButtonFace {
        self.playing = true;
        ButtonFace::PLAYING
    }

    pub fn autoplay_rejected(&mut self) {
        if self.gate == InteractionGate::Idle {
            self.gate = InteractionGate::Armed;
        }
    }

    /// Called on the first click/touch after a rejected autoplay. Returns
    /// whether playback should be started; the gate is spent either way so the
    /// listener must be removed.
    pub fn take_interaction(&mut self) -> bool {
        if self.gate != InteractionGate::Armed {
            return false;
        }
        self.gate = InteractionGate::Spent;
        !self.playing
    }

    /// `play()` triggered by the interaction gate resolved.
    pub fn interaction_started(&mut self) -> ButtonFace {
        self.playing = true;
        ButtonFace::PLAYING
    }

    /// Flips the flag immediately and says what to do with the media element.
    pub fn toggle(&mut self) -> ToggleAction {
        let action = if self.playing {
            ToggleAction::Pause
        } else {
            ToggleAction::Play
        };
        self.playing = !self.playing;
        action
    }
}
