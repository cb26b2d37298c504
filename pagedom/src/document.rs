use crate::element::{find_element, Content, Element};
use crate::query::{self, ElementPath};

/// Viewport scroll position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollPosition {
    pub x: u16,
    pub y: u16,
}

impl ScrollPosition {
    pub fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// The element tree of one rendered page plus its viewport scroll position.
///
/// The fragment-swap engine is an external collaborator: it replaces subtrees
/// through [`Document::replace_children`] and announces what it did via
/// lifecycle events. Everything else mutates the tree through click handling.
#[derive(Debug)]
pub struct Document {
    root: Element,
    scroll: ScrollPosition,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self {
            root,
            scroll: ScrollPosition::default(),
        }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    // Lookup

    pub fn element_by_id(&self, id: &str) -> Option<&Element> {
        find_element(&self.root, id)
    }

    pub fn path_by_id(&self, id: &str) -> Option<ElementPath> {
        query::find_path_by_id(&self.root, id)
    }

    pub fn element_at(&self, path: &ElementPath) -> Option<&Element> {
        query::resolve(&self.root, path)
    }

    pub fn element_at_mut(&mut self, path: &ElementPath) -> Option<&mut Element> {
        query::resolve_mut(&mut self.root, path)
    }

    // Scroll

    pub fn scroll(&self) -> ScrollPosition {
        self.scroll
    }

    /// Jump the viewport. There is no smooth variant; every move is immediate.
    pub fn scroll_to(&mut self, x: u16, y: u16) {
        self.scroll = ScrollPosition::new(x, y);
    }

    // Fragment swap seam

    /// Replace the children of the element with the given id, as a fragment
    /// swap does. Returns false when the target id is not in the tree.
    pub fn replace_children(&mut self, id: &str, new_children: Vec<Element>) -> bool {
        let Some(path) = self.path_by_id(id) else {
            return false;
        };
        let Some(element) = self.element_at_mut(&path) else {
            return false;
        };
        element.content = Content::Children(new_children);
        true
    }
}
