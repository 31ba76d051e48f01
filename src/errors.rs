use std::{
    fmt::Display,
    io::{Error as IoError, ErrorKind},
};

#[derive(Debug)]
pub enum HeapError {
    BadItem(String, String),
    Empty,
    TooManyItems(usize, usize),
}

impl Display for HeapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeapError::BadItem(source, text) => {
                write!(f, "Unable to parse '{}' from {} as an item", text, source)
            }
            HeapError::Empty => write!(f, "Heap is empty"),
            HeapError::TooManyItems(capacity, given) => {
                write!(
                    f,
                    "Too many items for heap (capacity {}, {} given)",
                    capacity, given
                )
            }
        }
    }
}

impl std::error::Error for HeapError {}

pub fn as_io_error(error: HeapError) -> std::io::Error {
    IoError::new(ErrorKind::Other, error)
}
