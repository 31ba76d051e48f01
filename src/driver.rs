use std::io::{Read, Write};

use itertools::Itertools;

use crate::{
    errors::{HeapError, as_io_error},
    heap::Heap,
    options::HeapOptions,
};

/// Parse whitespace separated integers. `source` names the input in errors.
pub fn parse_items(source: &str, text: &str) -> std::io::Result<Vec<i64>> {
    text.split_whitespace()
        .map(|word| {
            word.parse::<i64>().map_err(|_| {
                as_io_error(HeapError::BadItem(String::from(source), String::from(word)))
            })
        })
        .collect()
}

/// Items from the command line if any were given, otherwise from `input`.
pub fn read_items<R: Read>(values: &[String], mut input: R) -> std::io::Result<Vec<i64>> {
    if !values.is_empty() {
        return parse_items("the command line", &values.join(" "));
    }
    let mut text = String::new();
    input.read_to_string(&mut text)?;
    parse_items("stdin", &text)
}

pub fn build_heap(items: Vec<i64>, options: &HeapOptions) -> std::io::Result<Heap<i64>> {
    if options.strict && items.len() > options.capacity {
        return Err(as_io_error(HeapError::TooManyItems(
            options.capacity,
            items.len(),
        )));
    }
    log::info!(
        "building heap of {} items (capacity {})",
        items.len(),
        options.capacity
    );
    let given = items.len();
    let heap = Heap::from_items(options.capacity, items);
    if heap.size() < given {
        log::warn!(
            "heap overflow: dropped {} of {} items (capacity {})",
            given - heap.size(),
            given,
            options.capacity
        );
    }
    log::debug!("heap array: {:?}", heap.heap_array());
    Ok(heap)
}

pub fn write_sorted<W: Write>(heap: &Heap<i64>, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{}", heap.heap_sort().iter().join(" "))
}

pub fn write_tree<W: Write>(heap: &Heap<i64>, out: &mut W) -> std::io::Result<()> {
    heap.print_tree(out)
}

/// Print the maximum and remove it until the heap is empty.
pub fn write_drained<W: Write>(heap: &mut Heap<i64>, out: &mut W) -> std::io::Result<()> {
    let mut values = Vec::with_capacity(heap.size());
    while !heap.is_empty() {
        values.push(heap.top().map_err(as_io_error)?);
        heap.remove();
    }
    writeln!(out, "{}", values.iter().join(" "))
}

pub fn write_deleted<W: Write>(
    heap: &mut Heap<i64>,
    value: i64,
    out: &mut W,
) -> std::io::Result<()> {
    if heap.remove_node(&value) {
        writeln!(out, "removed {}", value)?;
    } else {
        writeln!(out, "{} not found", value)?;
    }
    writeln!(out, "{}", heap.heap_array().iter().join(" "))?;
    writeln!(out, "verified: {}", heap.verify())
}
