use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum OutputBlock {
    Title(String),
    /// Asset reference of the view now on screen.
    View(String),
    Items(String),
    Text(String),
    Event(String),
    Ahead(String),
}

#[derive(Default, Debug, Serialize)]
pub struct Output {
    pub blocks: Vec<OutputBlock>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Title(s));
        }
    }

    pub fn view(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::View(s));
        }
    }

    pub fn items(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Items(s));
        }
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

    pub fn set_ahead(&mut self, s: impl Into<String>) {
        let s = s.into();
        if s.trim().is_empty() {
            return;
        }

        // ensure only one Ahead block exists, always last
        self.blocks.retain(|b| !matches!(b, OutputBlock::Ahead(_)));
        self.blocks.push(OutputBlock::Ahead(s));
    }

    /// Asset of the last view block, if one was rendered.
    pub fn last_view(&self) -> Option<&str> {
        self.blocks.iter().rev().find_map(|b| match b {
            OutputBlock::View(v) => Some(v.as_str()),
            _ => None,
        })
    }
}
