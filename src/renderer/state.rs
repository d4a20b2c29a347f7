/// Mutable walk state for a single render pass.
///
/// Scoped to one `render` call: a fresh state is created per pass so
/// counters never leak between renders. Both heading levels draw from
/// `title_count`, so emitted heading ids form one contiguous sequence;
/// `list_count` advances for every list entry whatever its depth.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderState {
    pub in_list: bool,
    pub title_count: usize,
    pub list_count: usize,
}

impl RenderState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id suffix for the heading being emitted and advances
    /// the shared title counter.
    pub fn next_title(&mut self) -> usize {
        let n = self.title_count;
        self.title_count += 1;
        n
    }

    /// Returns the id suffix for the list entry being emitted and advances
    /// the list counter. Monotone across container runs, never reset.
    pub fn next_list_item(&mut self) -> usize {
        let n = self.list_count;
        self.list_count += 1;
        n
    }

    /// Marks entry into a list run. True when this entry is the first of
    /// its run and the container must be opened.
    pub fn enter_list(&mut self) -> bool {
        let opening = !self.in_list;
        self.in_list = true;
        opening
    }

    /// Marks the end of a list run. True when a container was actually
    /// open and its close must be emitted.
    pub fn leave_list(&mut self) -> bool {
        let closing = self.in_list;
        self.in_list = false;
        closing
    }
}
