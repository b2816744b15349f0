pub struct SkipListOptions {
    /// maximum number of levels the list may grow to
    pub depth: usize,
}

impl SkipListOptions {
    pub fn new_with_defaults() -> Self {
        Self { depth: 1 }
    }
}
