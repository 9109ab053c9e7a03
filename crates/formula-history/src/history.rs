use std::collections::HashSet;

use log::debug;

use crate::instruction::Instruction;
use crate::layer::{Cursor, LayerId, Layers};
use crate::{Dispatcher, HistoryError, Rebase, Step, StepId};

/// Branching undo/redo history.
///
/// Undoing a step does not replay the log: the step is reverted together with everything
/// committed after it, the later steps are rebased as if it never happened and grafted as a new
/// branch, and that branch is applied. Redo works the same way in the other direction, on the
/// branch left behind by the matching undo.
#[derive(Debug)]
pub struct History<T, D> {
    layers: Layers<T>,
    head: Cursor,
    dispatcher: D,
    seen: HashSet<StepId>,
}

impl<T, D> History<T, D>
where
    T: Rebase + Clone,
    D: Dispatcher<T>,
{
    pub fn new(dispatcher: D) -> Self {
        let layers = Layers::new();
        let head = Cursor::start_of(layers.root());
        Self {
            layers,
            head,
            dispatcher,
            seen: HashSet::new(),
        }
    }

    pub fn layers(&self) -> &Layers<T> {
        &self.layers
    }

    /// Position of the last applied step.
    pub fn head(&self) -> Cursor {
        self.head
    }

    pub fn head_layer(&self) -> LayerId {
        self.head.layer
    }

    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    pub fn dispatcher_mut(&mut self) -> &mut D {
        &mut self.dispatcher
    }

    pub fn into_dispatcher(self) -> D {
        self.dispatcher
    }

    /// Commit a new step at the tip of the timeline and apply it.
    ///
    /// Ids are never reused: an id seen before in this history is rejected, even when the step
    /// carrying it has been undone.
    pub fn add_step(&mut self, id: StepId, data: T) -> Result<(), HistoryError> {
        if !self.seen.insert(id) {
            return Err(HistoryError::DuplicateStep(id));
        }

        let layer = self.head.layer;
        self.layers.add_step(layer, Step::new(id, data));
        self.head = Cursor::after(layer, id);
        if let Some(step) = self.layers.get(layer).steps().last() {
            self.dispatcher.apply(&step.data);
        }
        Ok(())
    }

    /// Undo step `id`, keeping every step committed after it.
    pub fn undo(&mut self, id: StepId) -> Result<(), HistoryError> {
        let (layer, data) = {
            let instruction = self.layers.find_instruction(self.head, id)?;
            if instruction.is_cancelled {
                return Err(HistoryError::AlreadyUndone(id));
            }
            (instruction.layer, instruction.step.data.clone())
        };
        debug!("undo step {id} from layer {}", layer.index());

        self.revert_before(id);
        let branch = self.layers.copy_after(layer, id, |later| later.without(&data));
        self.layers.insert_after(branch, layer, Some(id));
        debug!("grafted layer {} at step {id}", branch.index());

        self.checkout_end();
        Ok(())
    }

    /// Redo step `id`, previously undone.
    pub fn redo(&mut self, id: StepId) -> Result<(), HistoryError> {
        let (owner, step) = {
            let instruction = self.layers.find_instruction(self.head, id)?;
            if !instruction.is_cancelled {
                return Err(HistoryError::NotUndone(id));
            }
            (instruction.layer, instruction.step.clone())
        };
        let undo_layer = self.layers.find_undo_layer(self.head, id)?;
        debug!("redo step {id}, superseding layer {}", undo_layer.index());

        self.revert_before(id);
        let branch = self
            .layers
            .transformed(undo_layer, |later| later.with(&step.data));
        self.layers.prepend_step(branch, step);
        self.layers.insert_after(branch, owner, Some(id));
        self.layers.delete(undo_layer);
        debug!("grafted layer {} at step {id}", branch.index());

        self.checkout_end();
        Ok(())
    }

    pub fn can_undo(&self, id: StepId) -> bool {
        self.layers
            .find_instruction(self.head, id)
            .is_ok_and(|instruction| !instruction.is_cancelled)
    }

    pub fn can_redo(&self, id: StepId) -> bool {
        self.layers.find_undo_layer(self.head, id).is_ok()
    }

    /// Ids of the steps currently in effect, oldest first.
    pub fn active_steps(&self) -> Vec<StepId> {
        let mut ids: Vec<StepId> = self
            .layers
            .reverted_execution(self.head)
            .filter(|instruction| !instruction.is_cancelled)
            .map(|instruction| instruction.step.id)
            .collect();
        ids.reverse();
        ids
    }

    /// Revert everything applied since step `id`, `id` included.
    fn revert_before(&mut self, id: StepId) {
        for instruction in self.layers.reverted_execution(self.head) {
            let Instruction {
                step,
                is_cancelled,
                next,
                ..
            } = instruction;
            if !is_cancelled {
                self.dispatcher.revert(&step.data);
            }
            self.head = next;
            if step.id == id {
                break;
            }
        }
    }

    /// Apply every step after the head.
    fn checkout_end(&mut self) {
        for instruction in self.layers.execution(self.head) {
            if !instruction.is_cancelled {
                self.dispatcher.apply(&instruction.step.data);
            }
            self.head = instruction.next;
        }
    }
}
