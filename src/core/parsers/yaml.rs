//! Lenient parser for YAML locale files.
//!
//! Only the subset that locale files actually use is understood: nested
//! `key: value` mappings, quoted scalars, `{}` and block scalars (`|`, `>`,
//! `|-`, `>-`). Everything else is skipped line by line, so parsing never
//! fails. The output only has to be faithful enough to compare key coverage.
//!
//! Nesting is resolved from raw indentation against a stack of open
//! mappings. There is no fixed indent width: a line belongs to the nearest
//! open mapping whose key was indented strictly less than the line itself.

use std::collections::HashMap;
use std::mem;

use super::line::{self, Entry, Line, ValueKind};
use crate::core::data::{Mapping, Node};

/// Parse locale file content into a tree rooted at a mapping.
pub fn parse(text: &str) -> Node {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut builder = TreeBuilder::new();
    for raw in text.lines() {
        builder.feed_line(raw);
    }
    builder.finish()
}

type MappingId = usize;

const ROOT: MappingId = 0;

/// Indentation of the root frame; every real line is deeper.
const ROOT_INDENT: isize = -1;

/// Incremental, line-at-a-time tree builder.
///
/// Mappings live in an arena while the document is being read so that the
/// frame stack and an open block scalar can refer to them by index. The
/// owned `Node` tree is assembled in `finish`.
#[derive(Debug)]
pub struct TreeBuilder {
    arena: Vec<ArenaMapping>,
    frames: Vec<Frame>,
    state: State,
}

/// An open mapping and the indentation of the key that opened it.
#[derive(Debug, Clone, Copy)]
struct Frame {
    mapping: MappingId,
    indent: isize,
}

#[derive(Debug)]
enum State {
    Normal,
    InBlockScalar(BlockScalar),
}

#[derive(Debug)]
struct BlockScalar {
    key: String,
    owner: MappingId,
    open_indent: usize,
    lines: Vec<String>,
}

#[derive(Debug, Default)]
struct ArenaMapping {
    entries: Vec<(String, Slot)>,
    positions: HashMap<String, usize>,
}

#[derive(Debug)]
enum Slot {
    Scalar(String),
    Mapping(MappingId),
}

impl ArenaMapping {
    /// Assign `key`, keeping the original position when it already exists.
    fn assign(&mut self, key: String, slot: Slot) {
        match self.positions.get(&key) {
            Some(&position) => self.entries[position].1 = slot,
            None => {
                self.positions.insert(key.clone(), self.entries.len());
                self.entries.push((key, slot));
            }
        }
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            arena: vec![ArenaMapping::default()],
            frames: vec![Frame {
                mapping: ROOT,
                indent: ROOT_INDENT,
            }],
            state: State::Normal,
        }
    }

    /// Consume one raw line (without its terminator).
    pub fn feed_line(&mut self, raw: &str) {
        if let State::InBlockScalar(block) = &mut self.state {
            if line::is_block_continuation(raw, block.open_indent) {
                block.lines.push(raw.to_string());
                return;
            }
            // The line that ends the block is still a regular line.
            self.close_block_scalar();
        }

        if let Line::Entry(entry) = line::classify(raw) {
            self.apply_entry(&entry);
        }
    }

    /// Flush any open block scalar and assemble the tree.
    pub fn finish(mut self) -> Node {
        self.close_block_scalar();
        Node::Mapping(self.materialize())
    }

    fn apply_entry(&mut self, entry: &Entry<'_>) {
        let indent = entry.indent as isize;
        while self.frames.len() > 1 && self.frames.last().is_some_and(|f| f.indent >= indent) {
            self.frames.pop();
        }
        let parent = self.current_mapping();

        match entry.value_kind() {
            ValueKind::BlockScalar => {
                self.state = State::InBlockScalar(BlockScalar {
                    key: entry.key.to_string(),
                    owner: parent,
                    open_indent: entry.indent,
                    lines: Vec::new(),
                });
            }
            ValueKind::Mapping => {
                let child = self.alloc_mapping();
                self.arena[parent].assign(entry.key.to_string(), Slot::Mapping(child));
                self.frames.push(Frame {
                    mapping: child,
                    indent,
                });
            }
            ValueKind::Scalar(value) => {
                self.arena[parent].assign(entry.key.to_string(), Slot::Scalar(value.to_string()));
            }
        }
    }

    fn close_block_scalar(&mut self) {
        if let State::InBlockScalar(block) = mem::replace(&mut self.state, State::Normal) {
            let value = join_block_lines(&block.lines);
            self.arena[block.owner].assign(block.key, Slot::Scalar(value));
        }
    }

    fn current_mapping(&self) -> MappingId {
        self.frames.last().map_or(ROOT, |frame| frame.mapping)
    }

    fn alloc_mapping(&mut self) -> MappingId {
        self.arena.push(ArenaMapping::default());
        self.arena.len() - 1
    }

    /// Assemble owned mappings from the arena without recursing.
    ///
    /// A child is always allocated after its parent, so walking the arena
    /// backwards finishes every child before the mapping that holds it.
    /// Mappings orphaned by a duplicate key are built and never claimed.
    fn materialize(&mut self) -> Mapping {
        let mut built: Vec<Option<Mapping>> = Vec::with_capacity(self.arena.len());
        built.resize_with(self.arena.len(), || None);

        for id in (0..self.arena.len()).rev() {
            let entries = mem::take(&mut self.arena[id].entries);
            let nodes = entries
                .into_iter()
                .map(|(key, slot)| {
                    let node = match slot {
                        Slot::Scalar(value) => Node::Scalar(value),
                        Slot::Mapping(child) => {
                            Node::Mapping(built[child].take().unwrap_or_default())
                        }
                    };
                    (key, node)
                })
                .collect();
            built[id] = Some(Mapping::from_unique_entries(nodes));
        }

        built[ROOT].take().unwrap_or_default()
    }
}

/// Render buffered block scalar lines into the scalar value.
///
/// Lines are de-indented by the indentation of the first non-blank line,
/// joined with newlines, and the result is trimmed.
pub fn join_block_lines(lines: &[String]) -> String {
    let content_indent = lines
        .iter()
        .find(|l| !l.trim().is_empty())
        .map_or(0, |l| line::leading_whitespace(l));

    lines
        .iter()
        .map(|l| dedent(l, content_indent))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

fn dedent(raw: &str, columns: usize) -> &str {
    let cut = raw
        .char_indices()
        .take_while(|(_, c)| c.is_whitespace())
        .take(columns)
        .last()
        .map_or(0, |(i, c)| i + c.len_utf8());
    &raw[cut..]
}
