//! Traversal of the active timeline.

use crate::layer::{Cursor, LayerId, Layers};
use crate::Step;

/// A step met while walking the timeline.
#[derive(Debug)]
pub struct Instruction<'a, T> {
    pub step: &'a Step<T>,
    pub layer: LayerId,
    /// The step is shadowed by a branch and must be neither applied nor reverted.
    pub is_cancelled: bool,
    /// Where the head stands once this instruction has been handled.
    pub next: Cursor,
}

/// Forward walk: oldest step first, entering branches at their branching step.
pub struct Execution<'a, T> {
    layers: &'a Layers<T>,
    layer: LayerId,
    index: usize,
    done: bool,
}

impl<'a, T> Execution<'a, T> {
    pub(crate) fn new(layers: &'a Layers<T>, from: Cursor) -> Self {
        let mut execution = Self {
            layers,
            layer: from.layer,
            index: 0,
            done: false,
        };
        if let Some(id) = from.step {
            match layers.branch_at(from.layer, id) {
                Some(branch) => execution.layer = branch,
                None => match layers.get(from.layer).position(id) {
                    Some(index) => execution.index = index + 1,
                    None => execution.done = true,
                },
            }
        }
        execution
    }
}

impl<'a, T> Iterator for Execution<'a, T> {
    type Item = Instruction<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            let layers = self.layers;
            let Some(step) = layers.get(self.layer).steps().get(self.index) else {
                // End of the layer: only a branch without branching step continues from here.
                match layers.active_next(self.layer) {
                    Some(next) if layers.get(next).branching_step().is_none() => {
                        self.layer = next;
                        self.index = 0;
                    }
                    _ => self.done = true,
                }
                continue;
            };

            let layer = self.layer;
            if let Some(branch) = layers.branch_at(layer, step.id) {
                self.layer = branch;
                self.index = 0;
                return Some(Instruction {
                    step,
                    layer,
                    is_cancelled: true,
                    next: Cursor::start_of(branch),
                });
            }

            self.index += 1;
            return Some(Instruction {
                step,
                layer,
                is_cancelled: false,
                next: Cursor::after(layer, step.id),
            });
        }
        None
    }
}

/// Backward walk: newest step first, leaving each layer through `previous` at its branching
/// step.
pub struct RevertedExecution<'a, T> {
    layers: &'a Layers<T>,
    layer: LayerId,
    /// Steps of `layer` still to be yielded (the next one is at `remaining - 1`).
    remaining: usize,
    done: bool,
}

impl<'a, T> RevertedExecution<'a, T> {
    pub(crate) fn new(layers: &'a Layers<T>, from: Cursor) -> Self {
        let (remaining, done) = match from.step {
            None => (0, false),
            Some(id) => match layers.get(from.layer).position(id) {
                Some(index) => (index + 1, false),
                None => (0, true),
            },
        };
        Self {
            layers,
            layer: from.layer,
            remaining,
            done,
        }
    }
}

impl<'a, T> Iterator for RevertedExecution<'a, T> {
    type Item = Instruction<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let layers = self.layers;
        while !self.done {
            let current = layers.get(self.layer);
            if self.remaining == 0 {
                let Some(previous) = current.previous() else {
                    self.done = true;
                    break;
                };
                let parent = layers.get(previous);
                self.remaining = match current.branching_step() {
                    Some(id) => parent.position(id).map_or(0, |index| index + 1),
                    None => parent.steps().len(),
                };
                self.layer = previous;
                continue;
            }

            self.remaining -= 1;
            let index = self.remaining;
            let steps = current.steps();
            let step = &steps[index];
            let next = match index.checked_sub(1) {
                Some(before) => Cursor::after(self.layer, steps[before].id),
                None => Cursor::start_of(self.layer),
            };
            return Some(Instruction {
                step,
                layer: self.layer,
                is_cancelled: layers.is_cancelled(self.layer, step.id),
                next,
            });
        }
        None
    }
}
