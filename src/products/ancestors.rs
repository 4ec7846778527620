//! Persistent ancestor chains.
//!
//! Each step of the traversal extends the chain by allocating one head node
//! that points at the parent's chain. Nothing is ever copied, so every
//! occurrence found below the same container shares the tail of its chain
//! with its siblings.

use serde_json::Value;
use std::fmt;
use std::rc::Rc;

struct Link<'a> {
    value: &'a Value,
    next: Ancestors<'a>,
}

/// Ordered chain of containing values, innermost first, document root last.
///
/// Cloning is cheap: it bumps a reference count on the head node.
#[derive(Clone, Default)]
pub struct Ancestors<'a> {
    head: Option<Rc<Link<'a>>>,
    len: usize,
}

impl<'a> Ancestors<'a> {
    /// The empty chain, used when the traversal starts at the document root.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns a new chain with `container` as its innermost element.
    ///
    /// `self` is left untouched and becomes the tail of the returned chain.
    #[must_use]
    pub fn push(&self, container: &'a Value) -> Self {
        Self {
            head: Some(Rc::new(Link {
                value: container,
                next: self.clone(),
            })),
            len: self.len + 1,
        }
    }

    /// The immediate parent of the occurrence, if any.
    #[must_use]
    pub fn parent(&self) -> Option<&'a Value> {
        self.head.as_ref().map(|link| link.value)
    }

    /// The outermost container, i.e. the document root.
    #[must_use]
    pub fn root(&self) -> Option<&'a Value> {
        self.iter().last()
    }

    /// Number of containers in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate from the immediate parent out to the document root.
    pub fn iter(&self) -> Iter<'_, 'a> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Materialize the chain into a vector, innermost first.
    #[must_use]
    pub fn to_vec(&self) -> Vec<&'a Value> {
        self.iter().collect()
    }

    /// Whether both chains share the very same head node.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.head, &other.head) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

/// Iterator over an [`Ancestors`] chain.
pub struct Iter<'c, 'a> {
    next: Option<&'c Link<'a>>,
}

impl<'a> Iterator for Iter<'_, 'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<Self::Item> {
        let link = self.next?;
        self.next = link.next.head.as_deref();
        Some(link.value)
    }
}

impl PartialEq for Ancestors<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len
            && self.iter().zip(other.iter()).all(|(a, b)| std::ptr::eq(a, b) || a == b)
    }
}

impl fmt::Debug for Ancestors<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Full values would repeat the whole document once per level.
        f.debug_struct("Ancestors").field("len", &self.len).finish()
    }
}
