//! # Input Validation
//!
//! Checks shared by every codec before a sequence is decoded or encoded.

use crate::error::{Result, TagspanError};
use crate::item::SequenceItem;

/// Ensure an item does not end before it begins.
pub fn check_span(item: &SequenceItem) -> Result<()> {
    if item.end() < item.begin() {
        return Err(TagspanError::IllegalSpan {
            begin: item.begin(),
            end: item.end(),
        });
    }
    Ok(())
}

/// Ensure every item is well-formed and `begin` is strictly ascending.
pub fn check_order(items: &[SequenceItem]) -> Result<()> {
    let mut previous: Option<&SequenceItem> = None;

    for item in items {
        check_span(item)?;
        if let Some(prev) = previous {
            if item.begin() <= prev.begin() {
                return Err(TagspanError::IllegalOrder {
                    previous: prev.begin(),
                    current: item.begin(),
                });
            }
        }
        previous = Some(item);
    }

    Ok(())
}

/// Ensure spans are ordered and pairwise disjoint.
pub fn check_disjoint(spans: &[SequenceItem]) -> Result<()> {
    check_order(spans)?;

    for pair in spans.windows(2) {
        if pair[1].begin() <= pair[0].end() {
            return Err(TagspanError::OverlappingSpans {
                previous_end: pair[0].end(),
                begin: pair[1].begin(),
            });
        }
    }

    Ok(())
}

/// One past the last unit index of `length` units starting at `offset`.
pub fn unit_limit(offset: usize, length: usize) -> Result<usize> {
    offset
        .checked_add(length)
        .ok_or(TagspanError::IndexOverflow {
            first: offset,
            length,
        })
}

/// Ensure every span lies within `offset..offset + length`.
pub fn check_bounds(spans: &[SequenceItem], offset: usize, length: usize) -> Result<()> {
    let limit = unit_limit(offset, length)?;

    for span in spans {
        if span.begin() < offset || span.end() >= limit {
            return Err(TagspanError::SpanOutOfBounds {
                begin: span.begin(),
                end: span.end(),
                first: offset,
                length,
            });
        }
    }

    Ok(())
}
