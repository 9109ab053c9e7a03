//! Arena of history layers.
//!
//! A layer is a run of steps. Its `next` layer replaces the timeline from the layer's
//! `branching_step` on: that step and every step after it in the parent are shadowed, and
//! traversal continues in `next`. A `next` without a branching step simply continues after the
//! last step of its parent. Layers are never freed; deleting one only tombstones it, and a
//! tombstoned layer is never followed.

use crate::instruction::{Execution, Instruction, RevertedExecution};
use crate::{HistoryError, Step, StepId};

/// Handle of a layer inside its [`Layers`] arena.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct LayerId(usize);

impl LayerId {
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A position in the layer tree: right after `step` in `layer`, or before the first step of
/// `layer` when `step` is `None`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cursor {
    pub layer: LayerId,
    pub step: Option<StepId>,
}

impl Cursor {
    pub const fn start_of(layer: LayerId) -> Self {
        Self { layer, step: None }
    }

    pub const fn after(layer: LayerId, step: StepId) -> Self {
        Self {
            layer,
            step: Some(step),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Layer<T> {
    steps: Vec<Step<T>>,
    previous: Option<LayerId>,
    next: Option<LayerId>,
    branching_step: Option<StepId>,
    deleted: bool,
}

impl<T> Layer<T> {
    fn with_steps(steps: Vec<Step<T>>) -> Self {
        Self {
            steps,
            previous: None,
            next: None,
            branching_step: None,
            deleted: false,
        }
    }

    pub fn steps(&self) -> &[Step<T>] {
        &self.steps
    }

    pub fn previous(&self) -> Option<LayerId> {
        self.previous
    }

    pub fn next(&self) -> Option<LayerId> {
        self.next
    }

    /// Step of `previous` this layer branches at.
    pub fn branching_step(&self) -> Option<StepId> {
        self.branching_step
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    pub(crate) fn position(&self, id: StepId) -> Option<usize> {
        self.steps.iter().position(|step| step.id == id)
    }
}

#[derive(Debug, Clone)]
pub struct Layers<T> {
    layers: Vec<Layer<T>>,
}

impl<T> Default for Layers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Layers<T> {
    /// An arena holding a single empty root layer.
    pub fn new() -> Self {
        Self {
            layers: vec![Layer::with_steps(Vec::new())],
        }
    }

    pub fn root(&self) -> LayerId {
        LayerId(0)
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn get(&self, id: LayerId) -> &Layer<T> {
        &self.layers[id.0]
    }

    fn get_mut(&mut self, id: LayerId) -> &mut Layer<T> {
        &mut self.layers[id.0]
    }

    fn push(&mut self, layer: Layer<T>) -> LayerId {
        self.layers.push(layer);
        LayerId(self.layers.len() - 1)
    }

    pub fn add_step(&mut self, layer: LayerId, step: Step<T>) {
        self.get_mut(layer).steps.push(step);
    }

    pub fn prepend_step(&mut self, layer: LayerId, step: Step<T>) {
        self.get_mut(layer).steps.insert(0, step);
    }

    /// `next` of `layer`, unless it was deleted.
    pub fn active_next(&self, layer: LayerId) -> Option<LayerId> {
        self.get(layer).next.filter(|next| !self.get(*next).deleted)
    }

    /// The active branch replacing the timeline of `layer` from `step` on, if any.
    pub fn branch_at(&self, layer: LayerId, step: StepId) -> Option<LayerId> {
        self.active_next(layer)
            .filter(|next| self.get(*next).branching_step == Some(step))
    }

    /// Whether `step` of `layer` is shadowed by the layer's active branch.
    pub fn is_cancelled(&self, layer: LayerId, step: StepId) -> bool {
        self.branch_at(layer, step).is_some()
    }

    /// Instructions after `from`, oldest first.
    pub fn execution(&self, from: Cursor) -> Execution<'_, T> {
        Execution::new(self, from)
    }

    /// Instructions up to and including `from`, newest first.
    pub fn reverted_execution(&self, from: Cursor) -> RevertedExecution<'_, T> {
        RevertedExecution::new(self, from)
    }

    /// Most recent instruction for `id` reachable backwards from `from`.
    pub fn find_instruction(
        &self,
        from: Cursor,
        id: StepId,
    ) -> Result<Instruction<'_, T>, HistoryError> {
        self.reverted_execution(from)
            .find(|instruction| instruction.step.id == id)
            .ok_or(HistoryError::UnknownStep(id))
    }

    /// Layer holding the instruction found by [`Layers::find_instruction`].
    pub fn find_layer(&self, from: Cursor, id: StepId) -> Result<LayerId, HistoryError> {
        Ok(self.find_instruction(from, id)?.layer)
    }

    /// The branch created the last time `id` was undone.
    pub fn find_undo_layer(&self, from: Cursor, id: StepId) -> Result<LayerId, HistoryError> {
        let layer = self.find_layer(from, id)?;
        self.branch_at(layer, id).ok_or(HistoryError::NotUndone(id))
    }

    /// Make `layer` the active branch of `parent`, starting at `branching_step`.
    pub fn insert_after(
        &mut self,
        layer: LayerId,
        parent: LayerId,
        branching_step: Option<StepId>,
    ) {
        let inserted = self.get_mut(layer);
        inserted.previous = Some(parent);
        inserted.branching_step = branching_step;
        self.get_mut(parent).next = Some(layer);
    }

    pub fn delete(&mut self, layer: LayerId) {
        self.get_mut(layer).deleted = true;
    }

    /// Copy of `layer` and its active `next` chain, with every payload passed through `f`.
    ///
    /// The returned layer is detached; branching steps further down the chain are preserved.
    pub fn transformed<F>(&mut self, layer: LayerId, mut f: F) -> LayerId
    where
        F: FnMut(&T) -> T,
    {
        let first = self.map_layer(layer, &mut f);
        let mut source = layer;
        let mut copy = first;
        while let Some(next) = self.active_next(source) {
            let branching_step = self.get(next).branching_step;
            let next_copy = self.map_layer(next, &mut f);
            self.insert_after(next_copy, copy, branching_step);
            source = next;
            copy = next_copy;
        }
        first
    }

    /// Detached layer holding the steps of `layer` after `id`, followed by a copy of the active
    /// `next` chain, with every payload passed through `f`.
    ///
    /// The copied chain keeps its branching step only if that step is still part of the copy;
    /// otherwise it continues after the copy's last step.
    pub fn copy_after<F>(&mut self, layer: LayerId, id: StepId, mut f: F) -> LayerId
    where
        F: FnMut(&T) -> T,
    {
        let source = self.get(layer);
        let steps = match source.position(id) {
            Some(index) => source.steps[index + 1..]
                .iter()
                .map(|step| Step::new(step.id, f(&step.data)))
                .collect(),
            None => Vec::new(),
        };
        let next = self.active_next(layer);
        let copy = self.push(Layer::with_steps(steps));

        if let Some(next) = next {
            let branching_step = self
                .get(next)
                .branching_step
                .filter(|step| self.get(copy).position(*step).is_some());
            let next_copy = self.transformed(next, &mut f);
            self.insert_after(next_copy, copy, branching_step);
        }
        copy
    }

    fn map_layer<F>(&mut self, layer: LayerId, f: &mut F) -> LayerId
    where
        F: FnMut(&T) -> T,
    {
        let steps = self
            .get(layer)
            .steps
            .iter()
            .map(|step| Step::new(step.id, f(&step.data)))
            .collect();
        self.push(Layer::with_steps(steps))
    }
}
