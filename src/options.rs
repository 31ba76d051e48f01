use clap::{ArgAction, Args};

use crate::heap::DEFAULT_CAPACITY;

/// Options controlling how the heap is built
#[derive(Debug, Args)]
pub struct HeapOptions {
    /// Fixed capacity of the heap
    #[arg(long, required = false, default_value_t = DEFAULT_CAPACITY)]
    pub capacity: usize,

    /// Fail rather than drop items when the input exceeds the capacity
    #[arg(long,
        action = ArgAction::Set,
        default_value_t = false,
        default_missing_value = "true",
        num_args = 0..=1,)]
    pub strict: bool,
}

impl Default for HeapOptions {
    fn default() -> Self {
        HeapOptions {
            capacity: DEFAULT_CAPACITY,
            strict: false,
        }
    }
}
