//! Chunk partitioning of array axes
//!
//! A chunk specification names one axis and an extent: either the whole axis
//! (the `-1` sentinel, reproducing a single-block run) or a fixed block size
//! that splits the axis into contiguous spans for independent processing.
//! Chunking is a performance partition, not a semantic one; reduction results
//! must not depend on it.

use crate::errors::{GridQuantError, Result};
use std::ops::Range;

/// How far each chunk extends along the chunked axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkExtent {
    /// Do not split: one chunk spans the full axis.
    Whole,
    /// Contiguous blocks of at most `size` elements, in axis order.
    Size(usize),
}

impl ChunkExtent {
    /// Interpret a signed chunk-size argument: `-1` means the whole axis,
    /// any value of at least one is a block size.
    pub fn from_sentinel(value: i64) -> Result<Self> {
        match value {
            -1 => Ok(ChunkExtent::Whole),
            v if v >= 1 => Ok(ChunkExtent::Size(v as usize)),
            v => Err(GridQuantError::InvalidChunk {
                message: format!("chunk size must be >= 1 or the sentinel -1, got {}", v),
            }),
        }
    }
}

/// A partitioning of one array axis into contiguous blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkSpec {
    pub axis: usize,
    pub extent: ChunkExtent,
}

impl ChunkSpec {
    /// One chunk spanning the full axis.
    pub fn whole(axis: usize) -> Self {
        Self {
            axis,
            extent: ChunkExtent::Whole,
        }
    }

    /// Fixed-size chunks along the axis. A zero size is rejected.
    pub fn with_size(axis: usize, size: usize) -> Result<Self> {
        if size == 0 {
            return Err(GridQuantError::InvalidChunk {
                message: "chunk size must be at least 1".to_string(),
            });
        }
        Ok(Self {
            axis,
            extent: ChunkExtent::Size(size),
        })
    }

    /// Split `0..len` into ordered, non-overlapping spans covering the axis
    /// exactly. The final span may be shorter than the block size.
    pub fn partition(&self, len: usize) -> Vec<Range<usize>> {
        match self.extent {
            ChunkExtent::Whole => {
                if len == 0 {
                    Vec::new()
                } else {
                    vec![0..len]
                }
            }
            ChunkExtent::Size(size) => {
                let mut spans = Vec::with_capacity(len.div_ceil(size));
                let mut start = 0;
                while start < len {
                    let end = (start + size).min(len);
                    spans.push(start..end);
                    start = end;
                }
                spans
            }
        }
    }
}
