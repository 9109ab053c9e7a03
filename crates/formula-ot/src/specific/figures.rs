use formula_model::{Command, UpdateCarousel};
use log::trace;

use crate::TransformOutcome;

/// Updates of a figure (or of the chart it hosts) that was deleted are dropped.
pub(super) fn update_vs_delete_figure(cmd: &Command, executed: &Command) -> TransformOutcome {
    let Command::DeleteFigure(deleted) = executed else {
        return TransformOutcome::Transformed(cmd.clone());
    };
    if cmd.sheet_id() == Some(deleted.sheet_id.as_str())
        && cmd.figure_id() == Some(deleted.figure_id.as_str())
    {
        trace!("{} dropped: figure {} deleted", cmd.kind(), deleted.figure_id);
        return TransformOutcome::Ignored;
    }
    TransformOutcome::Transformed(cmd.clone())
}

pub(super) fn update_chart_vs_delete_chart(cmd: &Command, executed: &Command) -> TransformOutcome {
    let (Command::UpdateChart(update), Command::DeleteChart(deleted)) = (cmd, executed) else {
        return TransformOutcome::Transformed(cmd.clone());
    };
    if update.chart_id == deleted.chart_id {
        trace!("UPDATE_CHART dropped: chart {} deleted", deleted.chart_id);
        return TransformOutcome::Ignored;
    }
    TransformOutcome::Transformed(cmd.clone())
}

/// A carousel loses the slides showing a deleted chart; it is dropped once no slide is left.
pub(super) fn carousel_vs_delete_chart(cmd: &Command, executed: &Command) -> TransformOutcome {
    let (Command::UpdateCarousel(carousel), Command::DeleteChart(deleted)) = (cmd, executed) else {
        return TransformOutcome::Transformed(cmd.clone());
    };
    let items: Vec<_> = carousel
        .items
        .iter()
        .filter(|item| item.chart_id() != Some(deleted.chart_id.as_str()))
        .cloned()
        .collect();
    if items.is_empty() {
        trace!("UPDATE_CAROUSEL dropped: its only chart {} was deleted", deleted.chart_id);
        return TransformOutcome::Ignored;
    }
    TransformOutcome::Transformed(Command::UpdateCarousel(UpdateCarousel {
        items,
        ..carousel.clone()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use formula_model::charts::{CarouselItem, ChartDefinition, ChartKind, FigureGeometry};
    use formula_model::{ChartCommand, DeleteChart, DeleteFigure, FigureCommand};
    use pretty_assertions::assert_eq;

    fn chart_item(chart_id: &str) -> CarouselItem {
        CarouselItem::Chart {
            chart_id: chart_id.to_string(),
        }
    }

    fn delete_chart(chart_id: &str) -> Command {
        Command::DeleteChart(DeleteChart {
            sheet_id: "s1".to_string(),
            chart_id: chart_id.to_string(),
        })
    }

    fn carousel(items: Vec<CarouselItem>) -> Command {
        Command::UpdateCarousel(UpdateCarousel {
            sheet_id: "s1".to_string(),
            figure_id: "f1".to_string(),
            items,
        })
    }

    #[test]
    fn carousel_keeps_other_slides() {
        let cmd = carousel(vec![chart_item("c1"), CarouselItem::DataView, chart_item("c2")]);
        assert_eq!(
            carousel_vs_delete_chart(&cmd, &delete_chart("c1")),
            TransformOutcome::Transformed(carousel(vec![CarouselItem::DataView, chart_item("c2")]))
        );
    }

    #[test]
    fn carousel_without_slides_is_dropped() {
        let cmd = carousel(vec![chart_item("c1"), chart_item("c1")]);
        assert_eq!(carousel_vs_delete_chart(&cmd, &delete_chart("c1")), TransformOutcome::Ignored);
    }

    #[test]
    fn updates_of_deleted_figures_are_dropped() {
        let geometry = FigureGeometry {
            x: 0.0,
            y: 0.0,
            width: 100.0,
            height: 50.0,
        };
        let update = Command::UpdateFigure(FigureCommand {
            sheet_id: "s1".to_string(),
            figure_id: "f1".to_string(),
            geometry,
        });
        let delete = |figure_id: &str| {
            Command::DeleteFigure(DeleteFigure {
                sheet_id: "s1".to_string(),
                figure_id: figure_id.to_string(),
            })
        };
        assert_eq!(update_vs_delete_figure(&update, &delete("f1")), TransformOutcome::Ignored);
        assert_eq!(
            update_vs_delete_figure(&update, &delete("f2")),
            TransformOutcome::Transformed(update.clone())
        );

        let chart = Command::UpdateChart(ChartCommand {
            sheet_id: "s1".to_string(),
            figure_id: "f1".to_string(),
            chart_id: "c1".to_string(),
            definition: ChartDefinition::new(ChartKind::Bar),
        });
        assert_eq!(update_vs_delete_figure(&chart, &delete("f1")), TransformOutcome::Ignored);
        assert_eq!(
            update_chart_vs_delete_chart(&chart, &delete_chart("c1")),
            TransformOutcome::Ignored
        );
    }
}
