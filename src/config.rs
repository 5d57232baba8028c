//! Runtime configuration
//!
//! Built by the binary from its command-line arguments; the library itself
//! only consumes [`Config`].

use crate::heap::parse::parse_keys;
use crate::heap::{HeapEngine, HeapError, Key, Trace};
use crate::playback::Speed;
use clap::ValueEnum;

/// Operation run by the headless trace dump
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DumpOperation {
    Build,
    Sort,
    Delete,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub speed: Speed,
    pub initial_values: Vec<Key>,
}

impl Config {
    /// Build a config from the raw speed setting and an optional value list
    pub fn from_parts(speed: u8, values: Option<&str>) -> Result<Self, HeapError> {
        let initial_values = match values {
            Some(text) => parse_keys(text)?,
            None => Vec::new(),
        };
        Ok(Config {
            speed: Speed::new(speed),
            initial_values,
        })
    }
}

/// Run `operation` over `values` without any UI and return the resulting trace.
///
/// `Delete` heapifies the values first and records only the delete; on an
/// empty list its trace is the single `error` step.
pub fn dump_trace(operation: DumpOperation, values: &[Key]) -> Result<Trace, HeapError> {
    let mut engine = HeapEngine::new();
    match operation {
        DumpOperation::Build | DumpOperation::Sort if values.is_empty() => {
            return Err(HeapError::EmptyHeap);
        }
        DumpOperation::Build => engine.build_heap(values),
        DumpOperation::Sort => {
            engine.heap_sort(Some(values));
        }
        DumpOperation::Delete => {
            engine.build_heap(values);
            engine.delete();
        }
    }
    Ok(engine.trace())
}
