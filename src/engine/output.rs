#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputBlock {
    Text(String),
    Event(String),
    Error(String),
}

#[derive(Default, Debug)]
pub struct Output {
    pub blocks: Vec<OutputBlock>,
}

/// What a command did to the session as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Won,
    Dead,
}

impl Outcome {
    pub fn is_over(self) -> bool {
        self != Outcome::Continue
    }
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn say(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Text(s));
        }
    }

    pub fn event(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Event(s));
        }
    }

    /// Goes to stderr in the terminal driver.
    pub fn error(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Error(s));
        }
    }

    /// All block texts joined by newlines, in order.
    pub fn text(&self) -> String {
        self.blocks
            .iter()
            .map(|b| match b {
                OutputBlock::Text(s) | OutputBlock::Event(s) | OutputBlock::Error(s) => s.as_str(),
            })
            .collect::<Vec<&str>>()
            .join("\n")
    }
}
