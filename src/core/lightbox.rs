#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryImage {
    pub source_uri: String,
    pub alt_text: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxCommand {
    Close,
    Prev,
    Next,
}

/// Modal image viewer over a fixed, ordered gallery.
#[derive(Clone, Debug, Default)]
pub struct Lightbox {
    images: Vec<GalleryImage>,
    current_index: usize,
    is_open: bool,
}

impl Lightbox {
    pub fn new(images: Vec<GalleryImage>) -> Self {
        Self {
            images,
            current_index: 0,
            is_open: false,
        }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current(&self) -> Option<&GalleryImage> {
        self.images.get(self.current_index)
    }

    pub fn open(&mut self, index: usize) -> Option<&GalleryImage> {
        if index >= self.images.len() {
            return None;
        }
        self.current_index = index;
        self.is_open = true;
        self.current()
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn next(&mut self) -> Option<&GalleryImage> {
        self.step(1)
    }

    pub fn prev(&mut self) -> Option<&GalleryImage> {
        self.step(-1)
    }

    fn step(&mut self, delta: isize) -> Option<&GalleryImage> {
        let n = self.images.len() as isize;
        if n == 0 {
            return None;
        }
        self.current_index = (self.current_index as isize + delta + n).rem_euclid(n) as usize;
        self.current()
    }

    /// Keyboard mapping; keys are ignored while the modal is closed.
    pub fn command_for_key(&self, key: &str) -> Option<LightboxCommand> {
        if !self.is_open {
            return None;
        }
        match key {
            "Escape" => Some(LightboxCommand::Close),
            "ArrowLeft" => Some(LightboxCommand::Prev),
            "ArrowRight" => Some(LightboxCommand::Next),
            _ => None,
        }
    }

    /// Applies a command; returns the image to show, if any.
    pub fn apply(&mut self, command: LightboxCommand) -> Option<&GalleryImage> {
        match command {
            LightboxCommand::Close => {
                self.close();
                None
            }
            LightboxCommand::Prev => self.prev(),
            LightboxCommand::Next => self.next(),
        }
    }
}
