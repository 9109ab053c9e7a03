//! Static classification of which rule handles each pair of command kinds.
//!
//! Nothing here is consulted while transforming; it exists so that the rule table can be
//! checked exhaustively against [`CommandKind::ALL`].

use formula_model::CommandKind;

use crate::{specific, TransformError};

/// How a kind pair is transformed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TransformRule {
    /// The executed kind cannot affect the kind being transformed.
    NoEffect,
    /// Handled by the capability-driven pipeline alone.
    Generic,
    /// Handled by a registered kind-pair rule alone.
    Specific,
    GenericThenSpecific,
}

/// What an executed command does to the document structure.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Effect {
    None,
    Grid,
    Merge,
    SheetDeletion,
    SheetCreation,
    FigureDeletion,
}

fn effect(executed: CommandKind) -> Effect {
    use CommandKind as K;
    match executed {
        K::AddColumnsRows | K::RemoveColumnsRows => Effect::Grid,
        K::AddMerge | K::RemoveMerge => Effect::Merge,
        K::DeleteSheet => Effect::SheetDeletion,
        K::CreateSheet => Effect::SheetCreation,
        K::DeleteFigure | K::DeleteChart => Effect::FigureDeletion,
        _ => Effect::None,
    }
}

/// Kinds an effect deliberately leaves alone.
fn is_immune(to_transform: CommandKind, executed: CommandKind, effect: Effect) -> bool {
    use CommandKind as K;
    let caps = to_transform.capabilities();
    match effect {
        Effect::None => true,
        Effect::SheetDeletion => !caps.sheet,
        // Figures are positioned in pixels, sheet-level commands carry no coordinates.
        Effect::Grid => matches!(
            to_transform,
            K::CreateSheet
                | K::DeleteSheet
                | K::DuplicateSheet
                | K::RenameSheet
                | K::CreateFigure
                | K::UpdateFigure
                | K::DeleteFigure
                | K::DeleteChart
                | K::UpdateCarousel
        ),
        // Only single-cell edits and merges care about merged cells.
        Effect::Merge => caps.target || caps.grid || !caps.is_geometric(),
        Effect::FigureDeletion => match to_transform {
            K::UpdateChart | K::UpdateCarousel => false,
            K::UpdateFigure => executed == K::DeleteChart,
            _ => true,
        },
        Effect::SheetCreation => to_transform != K::CreateSheet,
    }
}

fn has_generic_rule(to_transform: CommandKind, effect: Effect) -> bool {
    let caps = to_transform.capabilities();
    match effect {
        Effect::SheetDeletion => caps.sheet,
        Effect::Grid => caps.is_geometric(),
        Effect::Merge => caps.position || to_transform == CommandKind::AddMerge,
        Effect::None | Effect::SheetCreation | Effect::FigureDeletion => false,
    }
}

/// Which rule transforms `to_transform` against `executed`.
///
/// Fails when `executed` has a structural effect that `to_transform` is neither handled for nor
/// declared immune to.
pub fn rule_for(
    to_transform: CommandKind,
    executed: CommandKind,
) -> Result<TransformRule, TransformError> {
    let effect = effect(executed);
    let generic = has_generic_rule(to_transform, effect);
    let specific = specific::lookup(to_transform, executed).is_some();

    match (generic, specific) {
        (true, true) => Ok(TransformRule::GenericThenSpecific),
        (true, false) => Ok(TransformRule::Generic),
        (false, true) => Ok(TransformRule::Specific),
        (false, false) if is_immune(to_transform, executed, effect) => Ok(TransformRule::NoEffect),
        (false, false) => Err(TransformError::MissingTransformation {
            to_transform,
            executed,
        }),
    }
}
