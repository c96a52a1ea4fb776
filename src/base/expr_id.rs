use std::fmt;

/// Identifies an expression node within an [`ExprTree`](crate::tree::ExprTree).
///
/// Ids are dense arena indices handed out by the tree builder in insertion
/// order. They carry no meaning across trees.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExprId(u32);

impl ExprId {
    /// Create an id from a raw arena index.
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// The raw arena index.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExprId({})", self.0)
    }
}

impl fmt::Display for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
