//! Chart and carousel payloads carried by chart/figure commands.
//!
//! Chart definitions are plain data: the ranges they plot are stored as [`RangeRef`]s rather
//! than as command zones, so structural edits have to walk the definition explicitly (see
//! [`ChartDefinition::map_ranges`]).

use serde::{Deserialize, Serialize};

use crate::{ChartId, SheetId, Zone};

/// A range plotted by a chart.
///
/// `sheet_id = None` means the range lives on the same sheet as the chart itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sheet_id: Option<SheetId>,
    pub zone: Zone,
}

impl RangeRef {
    pub fn local(zone: Zone) -> Self {
        Self {
            sheet_id: None,
            zone,
        }
    }

    pub fn on_sheet(sheet_id: impl Into<SheetId>, zone: Zone) -> Self {
        Self {
            sheet_id: Some(sheet_id.into()),
            zone,
        }
    }

    /// Sheet the range points to, given the sheet that owns the chart.
    pub fn resolved_sheet<'a>(&'a self, chart_sheet: &'a str) -> &'a str {
        self.sheet_id.as_deref().unwrap_or(chart_sheet)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSet {
    pub data_range: RangeRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_cell: Option<RangeRef>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
    Scatter,
    Area,
    Combo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDefinition {
    pub chart_kind: ChartKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub data_sets: Vec<DataSet>,
    /// Shared category labels (x axis).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels_range: Option<RangeRef>,
    #[serde(default = "crate::serde_defaults::default_true")]
    pub show_legend: bool,
    /// Nested plots of a combo chart, each with its own ranges.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_charts: Vec<ChartDefinition>,
}

impl ChartDefinition {
    pub fn new(chart_kind: ChartKind) -> Self {
        Self {
            chart_kind,
            title: None,
            data_sets: Vec::new(),
            labels_range: None,
            show_legend: true,
            sub_charts: Vec::new(),
        }
    }

    /// Rebuild the definition with every embedded range passed through `f`.
    ///
    /// Returning `None` removes the range: a data set whose data range disappears is dropped,
    /// while a vanished label cell or labels range is simply cleared. Sub-charts are walked
    /// recursively.
    #[must_use]
    pub fn map_ranges<F>(&self, f: &mut F) -> ChartDefinition
    where
        F: FnMut(&RangeRef) -> Option<RangeRef>,
    {
        let data_sets = self
            .data_sets
            .iter()
            .filter_map(|set| {
                let data_range = f(&set.data_range)?;
                let label_cell = set.label_cell.as_ref().and_then(|label| f(label));
                Some(DataSet {
                    data_range,
                    label_cell,
                })
            })
            .collect();

        ChartDefinition {
            chart_kind: self.chart_kind,
            title: self.title.clone(),
            data_sets,
            labels_range: self.labels_range.as_ref().and_then(|r| f(r)),
            show_legend: self.show_legend,
            sub_charts: self.sub_charts.iter().map(|sub| sub.map_ranges(f)).collect(),
        }
    }

    /// Every range referenced by the definition, depth-first.
    pub fn ranges(&self) -> Vec<&RangeRef> {
        let mut out = Vec::new();
        for set in &self.data_sets {
            out.push(&set.data_range);
            out.extend(set.label_cell.as_ref());
        }
        out.extend(self.labels_range.as_ref());
        for sub in &self.sub_charts {
            out.extend(sub.ranges());
        }
        out
    }
}

/// One slide of a carousel figure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum CarouselItem {
    Chart {
        #[serde(rename = "chartId")]
        chart_id: ChartId,
    },
    DataView,
}

impl CarouselItem {
    pub fn chart_id(&self) -> Option<&str> {
        match self {
            CarouselItem::Chart { chart_id } => Some(chart_id),
            CarouselItem::DataView => None,
        }
    }
}

/// Pixel geometry of a floating figure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FigureGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn zone(a1: &str) -> Zone {
        Zone::from_a1(a1).unwrap()
    }

    fn sample() -> ChartDefinition {
        let mut line = ChartDefinition::new(ChartKind::Line);
        line.data_sets.push(DataSet {
            data_range: RangeRef::local(zone("D1:D9")),
            label_cell: None,
        });

        let mut combo = ChartDefinition::new(ChartKind::Combo);
        combo.data_sets.push(DataSet {
            data_range: RangeRef::local(zone("B2:B9")),
            label_cell: Some(RangeRef::local(zone("B1"))),
        });
        combo.labels_range = Some(RangeRef::on_sheet("other", zone("A2:A9")));
        combo.sub_charts.push(line);
        combo
    }

    #[test]
    fn ranges_are_listed_depth_first() {
        let def = sample();
        let listed: Vec<String> = def.ranges().iter().map(|r| r.zone.to_string()).collect();
        assert_eq!(listed, vec!["B2:B9", "B1", "A2:A9", "D1:D9"]);
    }

    #[test]
    fn map_ranges_drops_data_sets_and_clears_labels() {
        let def = sample();
        let mapped = def.map_ranges(&mut |r: &RangeRef| {
            if r.zone.left == 1 && r.zone.is_single_cell() {
                // Label cell goes away, its data set survives.
                None
            } else if r.zone.left == 3 {
                None
            } else {
                Some(r.clone())
            }
        });

        assert_eq!(mapped.data_sets.len(), 1);
        assert_eq!(mapped.data_sets[0].label_cell, None);
        assert!(mapped.sub_charts[0].data_sets.is_empty());
        assert_eq!(mapped.labels_range, def.labels_range);
    }

    #[test]
    fn legend_defaults_to_visible_when_missing() {
        let json = r#"{"chartKind":"bar","dataSets":[]}"#;
        let def: ChartDefinition = serde_json::from_str(json).unwrap();
        assert!(def.show_legend);
        assert!(def.sub_charts.is_empty());
    }
}
