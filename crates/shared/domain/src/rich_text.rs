//! Structured rich-text documents.
//!
//! Bodies and bios are stored as a small node tree: a single `root` holding
//! `paragraph` nodes, each holding `text` leaves. The serialized shape matches
//! the lexical editor state (`{"root": {"type": "root", "children": [...]}}`).

use serde::{Deserialize, Serialize};

const NODE_VERSION: u32 = 1;

/// Text direction of a block node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

/// Rendering mode of a text leaf
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextMode {
    #[default]
    Normal,
    Token,
    Segmented,
}

/// A run of plain text inside a paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextLeaf {
    pub text: String,
    #[serde(default)]
    pub detail: u32,
    /// Bit flags (bold, italic, ...); zero for plain text
    #[serde(default)]
    pub format: u32,
    #[serde(default)]
    pub mode: TextMode,
    #[serde(default)]
    pub style: String,
    #[serde(default = "default_version")]
    pub version: u32,
}

impl TextLeaf {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            detail: 0,
            format: 0,
            mode: TextMode::Normal,
            style: String::new(),
            version: NODE_VERSION,
        }
    }
}

/// A node of the rich-text tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RichTextNode {
    Root {
        children: Vec<RichTextNode>,
        #[serde(default)]
        direction: Option<TextDirection>,
        #[serde(default)]
        format: String,
        #[serde(default)]
        indent: u32,
        #[serde(default = "default_version")]
        version: u32,
    },
    Paragraph {
        children: Vec<RichTextNode>,
        #[serde(default)]
        direction: Option<TextDirection>,
        #[serde(default)]
        format: String,
        #[serde(default)]
        indent: u32,
        #[serde(default = "default_version")]
        version: u32,
    },
    Text(TextLeaf),
}

impl RichTextNode {
    fn paragraph(text: &str) -> Self {
        RichTextNode::Paragraph {
            children: vec![RichTextNode::Text(TextLeaf::plain(text))],
            direction: Some(TextDirection::Ltr),
            format: String::new(),
            indent: 0,
            version: NODE_VERSION,
        }
    }

    /// Direct children of a block node; leaves have none.
    pub fn children(&self) -> &[RichTextNode] {
        match self {
            RichTextNode::Root { children, .. } | RichTextNode::Paragraph { children, .. } => {
                children
            }
            RichTextNode::Text(_) => &[],
        }
    }

    /// Concatenated text of every leaf below this node.
    pub fn text_content(&self) -> String {
        match self {
            RichTextNode::Text(leaf) => leaf.text.clone(),
            _ => self.children().iter().map(RichTextNode::text_content).collect(),
        }
    }
}

/// Rich-text document wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichText {
    pub root: RichTextNode,
}

fn default_version() -> u32 {
    NODE_VERSION
}

impl RichText {
    /// Build a document with one paragraph per input string.
    pub fn from_paragraphs<S: AsRef<str>>(paragraphs: &[S]) -> Self {
        Self {
            root: RichTextNode::Root {
                children: paragraphs
                    .iter()
                    .map(|text| RichTextNode::paragraph(text.as_ref()))
                    .collect(),
                direction: Some(TextDirection::Ltr),
                format: String::new(),
                indent: 0,
                version: NODE_VERSION,
            },
        }
    }

    /// Text of each paragraph, in order.
    pub fn paragraphs(&self) -> Vec<String> {
        self.root
            .children()
            .iter()
            .filter(|node| matches!(node, RichTextNode::Paragraph { .. }))
            .map(RichTextNode::text_content)
            .collect()
    }

    /// Paragraph texts joined by blank lines.
    pub fn plain_text(&self) -> String {
        self.paragraphs().join("\n\n")
    }

    /// A document is empty when no paragraph carries any text.
    pub fn is_empty(&self) -> bool {
        self.paragraphs().iter().all(|p| p.trim().is_empty())
    }
}
