use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::style::{ParsePxError, Px, Style};

/// The measurable, styleable surface of a collapsible panel.
///
/// Implementors are handles: methods take `&self` and writes go through to
/// the shared node, the way a DOM element reference behaves.
pub trait Element {
    /// Rendered height. Zero while the panel is collapsed, hidden, or unmounted.
    fn offset_height(&self) -> u32;

    /// Full content height, including content currently clipped by overflow.
    fn scroll_height(&self) -> u32;

    /// Write the `max-height` inline style.
    fn set_max_height(&self, value: Px);
}

#[derive(Debug, Default)]
struct NodeState {
    id: String,
    offset_height: u32,
    scroll_height: u32,
    style: Style,
    style_writes: usize,
}

/// In-memory element handle.
///
/// Clones share the same node, and equality is identity: two handles are
/// equal only when they point at the same node.
#[derive(Clone)]
pub struct Node {
    inner: Rc<RefCell<NodeState>>,
}

impl Node {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(NodeState {
                id: id.into(),
                ..Default::default()
            })),
        }
    }

    pub fn with_heights(self, offset_height: u32, scroll_height: u32) -> Self {
        {
            let mut state = self.inner.borrow_mut();
            state.offset_height = offset_height;
            state.scroll_height = scroll_height;
        }
        self
    }

    pub fn id(&self) -> String {
        self.inner.borrow().id.clone()
    }

    pub fn set_offset_height(&self, value: u32) {
        self.inner.borrow_mut().offset_height = value;
    }

    pub fn set_scroll_height(&self, value: u32) {
        self.inner.borrow_mut().scroll_height = value;
    }

    pub fn style(&self) -> Style {
        self.inner.borrow().style.clone()
    }

    pub fn max_height(&self) -> Option<Px> {
        self.inner.borrow().style.max_height
    }

    /// Write `max-height` from an inline style string such as `"240px"`.
    pub fn set_max_height_css(&self, css: &str) -> Result<(), ParsePxError> {
        let value = css.parse()?;
        self.set_max_height(value);
        Ok(())
    }

    /// Number of times the inline style has been written.
    pub fn style_writes(&self) -> usize {
        self.inner.borrow().style_writes
    }
}

impl Element for Node {
    fn offset_height(&self) -> u32 {
        self.inner.borrow().offset_height
    }

    fn scroll_height(&self) -> u32 {
        self.inner.borrow().scroll_height
    }

    fn set_max_height(&self, value: Px) {
        let mut state = self.inner.borrow_mut();
        state.style.max_height = Some(value);
        state.style_writes += 1;
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Node {}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.borrow();
        f.debug_struct("Node")
            .field("id", &state.id)
            .field("offset_height", &state.offset_height)
            .field("scroll_height", &state.scroll_height)
            .field("style", &state.style)
            .finish()
    }
}
