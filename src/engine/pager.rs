//! "Load more" cursor over the generated sequence for one input

use super::generator::FancyGenerator;
use crate::types::FancyText;

/// Resumable cursor; each page continues where the last one stopped.
pub struct FancyPager {
    generator: FancyGenerator,
    input: String,
    current_index: u64,
}

impl FancyPager {
    /// Create a pager starting at index 0
    pub fn new(generator: FancyGenerator, input: impl Into<String>) -> Self {
        Self {
            generator,
            input: input.into(),
            current_index: 0,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Index of the next result to be produced
    pub fn current_index(&self) -> u64 {
        self.current_index
    }

    /// Set current index (for resume)
    pub fn set_index(&mut self, index: u64) {
        self.current_index = index;
    }

    /// Whether the pager can produce anything at all
    pub fn is_exhausted(&self) -> bool {
        self.input.is_empty()
    }

    /// Produce the next page and advance the cursor by `count`.
    pub fn next_batch(&mut self, count: usize) -> Vec<FancyText> {
        let batch = self
            .generator
            .generate_batch(&self.input, self.current_index, count);
        if !batch.is_empty() {
            self.current_index = self.current_index.wrapping_add(count as u64);
        }
        batch
    }
}

impl Iterator for FancyPager {
    type Item = FancyText;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_exhausted() {
            return None;
        }
        let item = self
            .generator
            .render_at(&self.input, self.current_index, &mut rand::thread_rng());
        self.current_index = self.current_index.wrapping_add(1);
        Some(item)
    }
}
