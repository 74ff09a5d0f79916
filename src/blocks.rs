use crate::types::{Block, ListFormat};

/// A display-ready projection of one rich-text block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayNode {
    Paragraph { text: String },
    Heading { level: u8, text: String },
    List { ordered: bool, items: Vec<String> },
}

/// Concatenated text of the direct text leaves of `children`.
/// Non-text children contribute nothing.
fn children_text(children: &[Block]) -> String {
    children
        .iter()
        .map(|child| match child {
            Block::Text(leaf) => leaf.text.as_str(),
            _ => "",
        })
        .collect()
}

/// Heading level bucket as shipped: 1, 2 and 3 are distinguished, a missing
/// or zero level means 2, and everything else (4 and up included) collapses
/// into 4. Deliberately left as observed, pending product confirmation.
fn heading_level(level: Option<u64>) -> u8 {
    match level {
        None | Some(0) => 2,
        Some(1) => 1,
        Some(2) => 2,
        Some(3) => 3,
        Some(_) => 4,
    }
}

/// Render a block tree as plain text.
///
/// Only paragraph and heading nodes with children contribute; their
/// text-leaf children are concatenated in document order and non-empty
/// contributions are joined with a blank line. Absent or empty input yields
/// `""`. Never fails.
pub fn render_blocks_as_text(blocks: Option<&[Block]>) -> String {
    let Some(blocks) = blocks else {
        return String::new();
    };

    blocks
        .iter()
        .filter_map(|block| match block {
            Block::Paragraph(p) => p.children.as_deref().map(children_text),
            Block::Heading(h) => h.children.as_deref().map(children_text),
            _ => None,
        })
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Render a block tree as a sequence of display nodes.
///
/// One node per recognized top-level block; text leaves, stray list items,
/// unknown node types and nodes without a children array are filtered out
/// rather than treated as errors. Within a list, only `list-item` children
/// that themselves carry children produce items; anything else is silently
/// skipped.
pub fn render_blocks(blocks: Option<&[Block]>) -> Vec<DisplayNode> {
    let Some(blocks) = blocks else {
        return Vec::new();
    };

    blocks
        .iter()
        .filter_map(|block| match block {
            Block::Paragraph(p) => p.children.as_deref().map(|children| {
                DisplayNode::Paragraph {
                    text: children_text(children),
                }
            }),
            Block::Heading(h) => h.children.as_deref().map(|children| {
                DisplayNode::Heading {
                    level: heading_level(h.level),
                    text: children_text(children),
                }
            }),
            Block::List(list) => {
                let children = list.children.as_deref()?;
                let items = children
                    .iter()
                    .filter_map(|child| match child {
                        Block::ListItem(item) => item.children.as_deref().map(children_text),
                        _ => None,
                    })
                    .collect();
                Some(DisplayNode::List {
                    ordered: list.format == Some(ListFormat::Ordered),
                    items,
                })
            }
            Block::ListItem(_) | Block::Text(_) | Block::Unknown => None,
        })
        .collect()
}
