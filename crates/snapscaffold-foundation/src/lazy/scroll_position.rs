//! Shared index + offset scroll position.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use snapscaffold_core::collections::map::{Entry, HashMap};
use snapscaffold_core::MutableState;

use super::DEFAULT_ITEM_SIZE_ESTIMATE;
use crate::MutableInteractionSource;

const MAX_CACHE_SIZE: usize = 100;

struct PositionInner {
    item_count: usize,
    items_per_line: usize,
    viewport_size: f32,
    is_scrolling: bool,

    /// Cache of recently measured line sizes (line -> main_axis_size).
    line_size_cache: HashMap<usize, f32>,
    /// LRU order tracking - front is oldest, back is newest.
    line_size_lru: VecDeque<usize>,

    /// Running average of measured line sizes for estimation.
    average_line_size: f32,
    total_measured_lines: usize,
}

/// Index of the first visible item and the offset scrolled into it.
///
/// The index always points at the first item of a line; the offset is in
/// `[0, line_size)` of that line. Cloning shares the position.
#[derive(Clone)]
pub struct LazyScrollPosition {
    index: MutableState<usize>,
    scroll_offset: MutableState<f32>,
    inner: Rc<RefCell<PositionInner>>,
    interaction_source: MutableInteractionSource,
}

impl LazyScrollPosition {
    pub fn new(items_per_line: usize, index: usize, scroll_offset: f32) -> Self {
        let items_per_line = items_per_line.max(1);
        Self {
            index: MutableState::new(index - index % items_per_line),
            scroll_offset: MutableState::new(scroll_offset.max(0.0)),
            inner: Rc::new(RefCell::new(PositionInner {
                item_count: 0,
                items_per_line,
                viewport_size: 0.0,
                is_scrolling: false,
                line_size_cache: HashMap::default(),
                line_size_lru: VecDeque::new(),
                average_line_size: DEFAULT_ITEM_SIZE_ESTIMATE,
                total_measured_lines: 0,
            })),
            interaction_source: MutableInteractionSource::new(),
        }
    }

    pub fn index(&self) -> usize {
        self.index.get()
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset.get()
    }

    pub fn items_per_line(&self) -> usize {
        self.inner.borrow().items_per_line
    }

    pub fn item_count(&self) -> usize {
        self.inner.borrow().item_count
    }

    pub fn set_item_count(&self, count: usize) {
        self.inner.borrow_mut().item_count = count;
        let lines = self.line_count();
        if lines == 0 {
            self.request_position(0, 0.0);
        } else if self.first_line() >= lines {
            let per_line = self.items_per_line();
            self.request_position((lines - 1) * per_line, 0.0);
        }
    }

    pub fn set_viewport_size(&self, size: f32) {
        self.inner.borrow_mut().viewport_size = size.max(0.0);
    }

    pub fn viewport_size(&self) -> f32 {
        self.inner.borrow().viewport_size
    }

    pub fn interaction_source(&self) -> &MutableInteractionSource {
        &self.interaction_source
    }

    pub fn is_scrolling(&self) -> bool {
        self.inner.borrow().is_scrolling
    }

    pub fn set_scrolling(&self, scrolling: bool) {
        self.inner.borrow_mut().is_scrolling = scrolling;
    }

    /// Jumps to the line containing `index`; clears nothing else.
    pub fn request_position(&self, index: usize, scroll_offset: f32) {
        let per_line = self.items_per_line();
        self.index.set(index - index % per_line);
        self.scroll_offset.set(scroll_offset.max(0.0));
    }

    /// Records the measured main-axis size of the line containing `index`.
    ///
    /// A line is as tall as its tallest measured item; a lone item replaces
    /// its previous size.
    pub fn cache_item_size(&self, index: usize, size: f32) {
        let per_line = self.items_per_line();
        let line = index / per_line;
        if per_line == 1 {
            self.store_line_size(line, size, |_, new| new);
        } else {
            self.store_line_size(line, size, f32::max);
        }
    }

    /// Records an item spanning all of `line`. Its size replaces whatever
    /// the line measured before, so the line can shrink.
    pub fn cache_full_line_size(&self, line: usize, size: f32) {
        self.store_line_size(line, size, |_, new| new);
    }

    /// Stores a line size with LRU eviction, O(1) apart from the LRU scan.
    fn store_line_size(&self, line: usize, size: f32, merge: impl FnOnce(f32, f32) -> f32) {
        let mut inner = self.inner.borrow_mut();
        let size = size.max(0.0);

        if let Entry::Occupied(mut entry) = inner.line_size_cache.entry(line) {
            let merged = merge(*entry.get(), size);
            entry.insert(merged);
            if let Some(pos) = inner.line_size_lru.iter().position(|&k| k == line) {
                inner.line_size_lru.remove(pos);
            }
            inner.line_size_lru.push_back(line);
            return;
        }

        // Evict oldest entries until under limit
        while inner.line_size_cache.len() >= MAX_CACHE_SIZE {
            let Some(oldest) = inner.line_size_lru.pop_front() else {
                break;
            };
            if inner.line_size_cache.remove(&oldest).is_some() {
                break;
            }
        }

        inner.line_size_cache.insert(line, size);
        inner.line_size_lru.push_back(line);

        // Update running average
        inner.total_measured_lines += 1;
        let n = inner.total_measured_lines as f32;
        inner.average_line_size = inner.average_line_size * ((n - 1.0) / n) + size / n;
    }

    pub fn cached_line_size(&self, line: usize) -> Option<f32> {
        self.inner.borrow().line_size_cache.get(&line).copied()
    }

    pub fn average_line_size(&self) -> f32 {
        self.inner.borrow().average_line_size
    }

    /// Moves the position by `delta` pixels, clamped at the first line and at
    /// the point where the last line's end meets the viewport end.
    ///
    /// Returns the consumed part of `delta`.
    pub fn consume_scroll_delta(&self, delta: f32) -> f32 {
        if !delta.is_finite() || delta == 0.0 || self.line_count() == 0 {
            return 0.0;
        }
        let (max_line, max_offset) = self.max_position();
        let mut line = self.first_line().min(max_line);
        let mut offset = self.scroll_offset();
        if line == max_line {
            offset = offset.min(max_offset);
        }
        let mut remaining = delta;

        while remaining > 0.0 {
            let limit = if line == max_line {
                max_offset
            } else {
                self.line_size(line)
            };
            let room = (limit - offset).max(0.0);
            if remaining < room {
                offset += remaining;
                remaining = 0.0;
            } else if line == max_line {
                offset = limit;
                remaining -= room;
                break;
            } else {
                remaining -= room;
                line += 1;
                offset = 0.0;
            }
        }

        while remaining < 0.0 {
            if -remaining <= offset {
                offset += remaining;
                remaining = 0.0;
            } else {
                remaining += offset;
                offset = 0.0;
                if line == 0 {
                    break;
                }
                line -= 1;
                offset = self.line_size(line);
            }
        }

        let per_line = self.items_per_line();
        self.index.set(line * per_line);
        self.scroll_offset.set(offset);
        delta - remaining
    }

    pub fn can_scroll_backward(&self) -> bool {
        self.index() > 0 || self.scroll_offset() > 0.0
    }

    pub fn can_scroll_forward(&self) -> bool {
        if self.line_count() == 0 {
            return false;
        }
        let (max_line, max_offset) = self.max_position();
        let line = self.first_line();
        line < max_line || (line == max_line && self.scroll_offset() < max_offset)
    }

    fn first_line(&self) -> usize {
        self.index() / self.items_per_line()
    }

    fn line_count(&self) -> usize {
        let inner = self.inner.borrow();
        inner.item_count.div_ceil(inner.items_per_line)
    }

    fn line_size(&self, line: usize) -> f32 {
        self.cached_line_size(line)
            .unwrap_or_else(|| self.average_line_size())
    }

    /// Furthest position: the viewport ends exactly at the last line's end.
    fn max_position(&self) -> (usize, f32) {
        let lines = self.line_count();
        if lines == 0 {
            return (0, 0.0);
        }
        let mut remaining = self.viewport_size();
        let mut line = lines - 1;
        loop {
            let size = self.line_size(line);
            if remaining <= size {
                return (line, size - remaining);
            }
            remaining -= size;
            if line == 0 {
                return (0, 0.0);
            }
            line -= 1;
        }
    }
}

impl std::fmt::Debug for LazyScrollPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LazyScrollPosition")
            .field("index", &self.index())
            .field("scroll_offset", &self.scroll_offset())
            .field("item_count", &self.item_count())
            .finish()
    }
}
