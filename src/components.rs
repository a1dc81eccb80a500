//! Largest 4-connected foreground component.
//!
//! Breadth-first flood fill from every unvisited foreground pixel in
//! row-major order. The queue is a preallocated array of `w·h` slots driven
//! by head/tail counters: a component can never hold more pixels than the
//! image, so the queue never grows and a full scan is O(w·h).
use crate::image::BinaryMask;
use crate::types::Roi;
use log::debug;
use serde::Serialize;

const NEIGH_OFFSETS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// One connected component: pixel count and inclusive bounding box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    pub pixel_count: usize,
    pub bbox: Roi,
}

/// Outcome of a full labelling pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentSummary {
    /// Largest component, `None` when the mask has no foreground.
    pub largest: Option<Component>,
    /// Number of components found.
    pub component_count: usize,
}

/// Fixed-capacity FIFO of linear pixel indices.
struct FixedQueue {
    slots: Vec<usize>,
    head: usize,
    tail: usize,
}

impl FixedQueue {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![0; capacity],
            head: 0,
            tail: 0,
        }
    }

    #[inline]
    fn clear(&mut self) {
        self.head = 0;
        self.tail = 0;
    }

    #[inline]
    fn push(&mut self, idx: usize) {
        self.slots[self.tail] = idx;
        self.tail += 1;
    }

    #[inline]
    fn pop(&mut self) -> Option<usize> {
        if self.head == self.tail {
            return None;
        }
        let idx = self.slots[self.head];
        self.head += 1;
        Some(idx)
    }
}

/// Labelling workspace for a single mask.
pub struct ComponentExtractor<'a> {
    mask: &'a BinaryMask,
    visited: Vec<bool>,
    queue: FixedQueue,
}

impl<'a> ComponentExtractor<'a> {
    pub fn new(mask: &'a BinaryMask) -> Self {
        let n = mask.w * mask.h;
        Self {
            mask,
            visited: vec![false; n],
            queue: FixedQueue::with_capacity(n),
        }
    }

    /// Scan the whole mask and keep the component with the most pixels.
    /// On equal size the component discovered first wins.
    pub fn extract(mut self) -> ComponentSummary {
        let (w, h) = (self.mask.w, self.mask.h);
        let mut largest: Option<Component> = None;
        let mut component_count = 0usize;

        for y in 0..h {
            for x in 0..w {
                let idx = y * w + x;
                if self.visited[idx] || !self.mask.is_foreground(x, y) {
                    continue;
                }
                let component = self.flood(x, y);
                component_count += 1;
                if largest.map_or(true, |best| component.pixel_count > best.pixel_count) {
                    largest = Some(component);
                }
            }
        }

        debug!(
            "components: count={} largest={:?}",
            component_count,
            largest.map(|c| (c.pixel_count, c.bbox))
        );
        ComponentSummary {
            largest,
            component_count,
        }
    }

    fn flood(&mut self, seed_x: usize, seed_y: usize) -> Component {
        let w = self.mask.w;
        let h = self.mask.h;
        self.queue.clear();
        let seed = seed_y * w + seed_x;
        self.visited[seed] = true;
        self.queue.push(seed);

        let mut bbox = Roi::at(seed_x, seed_y);
        let mut pixel_count = 0usize;

        while let Some(idx) = self.queue.pop() {
            let (cx, cy) = (idx % w, idx / w);
            pixel_count += 1;
            bbox.include(cx, cy);

            for (dx, dy) in NEIGH_OFFSETS {
                let nx = cx as isize + dx;
                let ny = cy as isize + dy;
                if nx < 0 || ny < 0 || nx >= w as isize || ny >= h as isize {
                    continue;
                }
                let (nx, ny) = (nx as usize, ny as usize);
                let nidx = ny * w + nx;
                if !self.visited[nidx] && self.mask.is_foreground(nx, ny) {
                    self.visited[nidx] = true;
                    self.queue.push(nidx);
                }
            }
        }

        Component { pixel_count, bbox }
    }
}

/// Bounding box of the largest 4-connected component, if any.
pub fn largest_component(mask: &BinaryMask) -> Option<Component> {
    ComponentExtractor::new(mask).extract().largest
}
