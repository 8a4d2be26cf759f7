/// Reveals a fixed string one character per step.
///
/// Each item is the text revealed so far; the iterator ends once the whole
/// string has been emitted and is never restarted.
#[derive(Clone, Debug)]
pub struct Typewriter {
    chars: Vec<char>,
    revealed: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            revealed: 0,
        }
    }

    pub fn is_done(&self) -> bool {
        self.revealed >= self.chars.len()
    }
}

impl Iterator for Typewriter {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.is_done() {
            return None;
        }
        self.revealed += 1;
        Some(self.chars[..self.revealed].iter().collect())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.chars.len() - self.revealed;
        (left, Some(left))
    }
}
