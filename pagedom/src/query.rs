use crate::element::{Content, Element};

/// Position of an element in the tree as child indices from the root.
///
/// Paths separate lookup from mutation: callers resolve the elements a click
/// involves first, then write to each through `resolve_mut`. A path is only
/// valid against the tree it was produced from; after a fragment swap it must
/// be re-derived.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ElementPath(Vec<usize>);

impl ElementPath {
    /// The path of the document root itself.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn new(indices: Vec<usize>) -> Self {
        Self(indices)
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Path of the parent element, or None at the root.
    pub fn parent(&self) -> Option<ElementPath> {
        if self.0.is_empty() {
            return None;
        }
        Some(Self(self.0[..self.0.len() - 1].to_vec()))
    }

    /// Path of the nth child of this element.
    pub fn child(&self, index: usize) -> ElementPath {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }
}

/// Walk a path down from the root.
pub fn resolve<'a>(root: &'a Element, path: &ElementPath) -> Option<&'a Element> {
    let mut current = root;
    for &index in path.indices() {
        current = current.child_elements().get(index)?;
    }
    Some(current)
}

/// Walk a path down from the root, mutably.
pub fn resolve_mut<'a>(root: &'a mut Element, path: &ElementPath) -> Option<&'a mut Element> {
    let mut current = root;
    for &index in path.indices() {
        let Content::Children(children) = &mut current.content else {
            return None;
        };
        current = children.get_mut(index)?;
    }
    Some(current)
}

/// Find the path of the element with the given id, pre-order.
pub fn find_path_by_id(root: &Element, id: &str) -> Option<ElementPath> {
    fn walk(element: &Element, id: &str, indices: &mut Vec<usize>) -> bool {
        if element.id == id {
            return true;
        }
        for (index, child) in element.child_elements().iter().enumerate() {
            indices.push(index);
            if walk(child, id, indices) {
                return true;
            }
            indices.pop();
        }
        false
    }

    let mut indices = Vec::new();
    if walk(root, id, &mut indices) {
        Some(ElementPath::new(indices))
    } else {
        None
    }
}

/// Find the nearest element matching a predicate, starting at `start` and
/// walking up through its ancestors. The start element itself is tested first.
pub fn closest(
    root: &Element,
    start: &ElementPath,
    pred: impl Fn(&Element) -> bool,
) -> Option<ElementPath> {
    let mut current = Some(start.clone());
    while let Some(path) = current {
        if let Some(element) = resolve(root, &path) {
            if pred(element) {
                return Some(path);
            }
        }
        current = path.parent();
    }
    None
}

/// Path of the element immediately after `path` under the same parent.
pub fn next_sibling(root: &Element, path: &ElementPath) -> Option<ElementPath> {
    let indices = path.indices();
    let (&last, rest) = indices.split_last()?;
    let mut sibling = rest.to_vec();
    sibling.push(last + 1);
    let sibling = ElementPath::new(sibling);
    resolve(root, &sibling)?;
    Some(sibling)
}

/// Collect the paths of all descendants of `scope` matching a predicate, in
/// document (pre-)order. The scope element itself is not included.
pub fn descendants_matching(
    root: &Element,
    scope: &ElementPath,
    pred: impl Fn(&Element) -> bool,
) -> Vec<ElementPath> {
    fn walk(
        element: &Element,
        path: &ElementPath,
        pred: &impl Fn(&Element) -> bool,
        out: &mut Vec<ElementPath>,
    ) {
        for (index, child) in element.child_elements().iter().enumerate() {
            let child_path = path.child(index);
            if pred(child) {
                out.push(child_path.clone());
            }
            walk(child, &child_path, pred, out);
        }
    }

    let mut out = Vec::new();
    if let Some(element) = resolve(root, scope) {
        walk(element, scope, &pred, &mut out);
    }
    out
}
