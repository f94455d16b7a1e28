//! Layout blocks handed to the page-flowing writer
//!
//! A block is one logical instruction: a run of styled text or the
//! two-column signature area. Vertical gaps are carried on the following
//! block as `space_before`, measured in lines.

use serde::Serialize;

pub const TITLE_SIZE: f64 = 20.0;
pub const SUBTITLE_SIZE: f64 = 12.0;
pub const HEADING_SIZE: f64 = 14.0;
pub const BODY_SIZE: f64 = 10.0;

/// Left padding for continuation lines (IDs, descriptions)
pub const NESTED_INDENT: f64 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Justify,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextBlock {
    pub text: String,
    /// Points
    pub size: f64,
    pub bold: bool,
    pub align: Align,
    /// Points
    pub indent: f64,
    pub space_before: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignatureParty {
    pub line: String,
    pub role: String,
    pub name: String,
    pub date: String,
}

impl SignatureParty {
    pub fn new(role: &str, name: &str) -> Self {
        Self {
            line: "_____________________".to_string(),
            role: role.to_string(),
            name: format!("Name: {}", name),
            date: "Date: _______________".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignatureBlock {
    pub space_before: f64,
    pub left: SignatureParty,
    pub right: SignatureParty,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Text(TextBlock),
    Signatures(SignatureBlock),
}

impl Block {
    /// Text of a text block, `None` for signatures
    pub fn text(&self) -> Option<&str> {
        match self {
            Block::Text(block) => Some(&block.text),
            Block::Signatures(_) => None,
        }
    }
}

/// Accumulates blocks top to bottom
#[derive(Debug, Default)]
pub struct DocumentWriter {
    blocks: Vec<Block>,
    pending_space: f64,
}

impl DocumentWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Leave `lines` of vertical space before the next block
    pub fn move_down(&mut self, lines: f64) -> &mut Self {
        self.pending_space += lines;
        self
    }

    pub fn text(
        &mut self,
        text: impl Into<String>,
        size: f64,
        bold: bool,
        align: Align,
        indent: f64,
    ) -> &mut Self {
        let space_before = std::mem::take(&mut self.pending_space);
        self.blocks.push(Block::Text(TextBlock {
            text: text.into(),
            size,
            bold,
            align,
            indent,
            space_before,
        }));
        self
    }

    pub fn title(&mut self, text: impl Into<String>) -> &mut Self {
        self.text(text, TITLE_SIZE, true, Align::Center, 0.0)
    }

    pub fn subtitle(&mut self, text: impl Into<String>) -> &mut Self {
        self.text(text, SUBTITLE_SIZE, false, Align::Center, 0.0)
    }

    /// Section heading followed by half a line of space
    pub fn heading(&mut self, text: impl Into<String>) -> &mut Self {
        self.text(text, HEADING_SIZE, true, Align::Left, 0.0)
            .move_down(0.5)
    }

    pub fn line(&mut self, text: impl Into<String>) -> &mut Self {
        self.text(text, BODY_SIZE, false, Align::Left, 0.0)
    }

    /// `Label: value`
    pub fn field(&mut self, label: &str, value: impl std::fmt::Display) -> &mut Self {
        self.line(format!("{}: {}", label, value))
    }

    pub fn nested(&mut self, text: impl Into<String>) -> &mut Self {
        self.text(text, BODY_SIZE, false, Align::Left, NESTED_INDENT)
    }

    pub fn paragraph(&mut self, text: impl Into<String>) -> &mut Self {
        self.text(text, BODY_SIZE, false, Align::Justify, 0.0)
    }

    pub fn signatures(&mut self, left: SignatureParty, right: SignatureParty) -> &mut Self {
        let space_before = std::mem::take(&mut self.pending_space);
        self.blocks.push(Block::Signatures(SignatureBlock {
            space_before,
            left,
            right,
        }));
        self
    }

    pub fn finish(self) -> Vec<Block> {
        self.blocks
    }
}
