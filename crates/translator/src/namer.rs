/// Prefix of every bound parameter name.
pub const PARAM_PREFIX: &str = "@p";

/// Hands out placeholder names (`@p0`, `@p1`, ...) for one translation.
///
/// A single namer is threaded through the whole walk so that names never
/// collide between branches of the tree.
#[derive(Debug, Default)]
pub struct ParamNamer {
    next: usize,
}

impl ParamNamer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_name(&mut self) -> String {
        let name = placeholder(self.next);
        self.next += 1;
        name
    }

    /// Number of names handed out so far.
    pub fn allocated(&self) -> usize {
        self.next
    }
}

pub fn placeholder(index: usize) -> String {
    format!("{PARAM_PREFIX}{index}")
}
