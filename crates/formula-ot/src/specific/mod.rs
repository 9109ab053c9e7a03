//! Kind-pair overrides applied after the generic pipeline.
//!
//! The table is keyed by `(to_transform, executed)` and built once.

mod charts;
mod figures;
mod headers;
mod sheets;

use std::collections::HashMap;
use std::sync::OnceLock;

use formula_model::{Command, CommandKind};

use crate::TransformOutcome;

/// A specific transformation. Receives the generic result and the executed command.
pub type SpecificTransform = fn(&Command, &Command) -> TransformOutcome;

type Registry = HashMap<(CommandKind, CommandKind), SpecificTransform>;

static REGISTRY: OnceLock<Registry> = OnceLock::new();

fn registry() -> &'static Registry {
    REGISTRY.get_or_init(build)
}

fn build() -> Registry {
    use CommandKind as K;

    let mut table: Registry = HashMap::new();
    let mut add = |to: K, executed: K, f: SpecificTransform| {
        table.insert((to, executed), f);
    };

    add(K::DuplicateSheet, K::DeleteSheet, sheets::cross_sheet_vs_delete_sheet);
    add(K::MoveRanges, K::DeleteSheet, sheets::cross_sheet_vs_delete_sheet);
    add(K::CreateSheet, K::CreateSheet, sheets::create_sheet_vs_create_sheet);

    add(K::UpdateFigure, K::DeleteFigure, figures::update_vs_delete_figure);
    add(K::UpdateChart, K::DeleteFigure, figures::update_vs_delete_figure);
    add(K::UpdateCarousel, K::DeleteFigure, figures::update_vs_delete_figure);
    add(K::UpdateChart, K::DeleteChart, figures::update_chart_vs_delete_chart);
    add(K::UpdateCarousel, K::DeleteChart, figures::carousel_vs_delete_chart);

    for chart in [K::CreateChart, K::UpdateChart] {
        add(chart, K::AddColumnsRows, charts::chart_vs_grid_edit);
        add(chart, K::RemoveColumnsRows, charts::chart_vs_grid_edit);
        add(chart, K::DeleteSheet, charts::chart_vs_delete_sheet);
    }

    add(K::AddColumnsRows, K::AddColumnsRows, headers::insertion_vs_grid_edit);
    add(K::AddColumnsRows, K::RemoveColumnsRows, headers::insertion_vs_grid_edit);
    add(K::MoveRanges, K::AddColumnsRows, headers::move_destination_vs_grid_edit);
    add(K::MoveRanges, K::RemoveColumnsRows, headers::move_destination_vs_grid_edit);

    table
}

/// Specific transformation registered for `(to_transform, executed)`, if any.
pub fn lookup(to_transform: CommandKind, executed: CommandKind) -> Option<SpecificTransform> {
    registry().get(&(to_transform, executed)).copied()
}
