//! HTML rendering of a `DashboardView`

use super::{
    view::{BarChart, ChartState, DashboardView},
    PAGE_TITLE, TEAM_SELECT_LABEL,
};
use crate::{storage::PlayerRecord, Result};
use askama::Template;

const MARGIN_LEFT: u32 = 48;
const MARGIN_RIGHT: u32 = 16;
const MARGIN_TOP: u32 = 48;
const MARGIN_BOTTOM: u32 = 120;
const PLOT_HEIGHT: u32 = 300;
const MIN_PLOT_WIDTH: u32 = 560;
const SLOT_WIDTH: u32 = 40;

#[derive(Template)]
#[template(path = "dashboard.html")]
struct DashboardTemplate<'a> {
    title: &'a str,
    select_label: &'a str,
    error_message: Option<&'a str>,
    options: Vec<TeamOption<'a>>,
    rows: &'a [PlayerRecord],
    warning: Option<&'a str>,
    chart: Option<ChartLayout>,
}

struct TeamOption<'a> {
    name: &'a str,
    selected: bool,
}

/// Pixel geometry for the inline SVG chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartLayout {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub title_x: u32,
    pub axis_label_x: u32,
    pub plot_left: u32,
    pub plot_right: u32,
    pub plot_top: u32,
    pub baseline: u32,
    pub max_label_y: u32,
    pub label_y: u32,
    pub max_value: u32,
    pub bars: Vec<BarLayout>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarLayout {
    pub label: String,
    pub value: u32,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub center_x: u32,
    pub value_y: u32,
}

/// Lay bars out left to right, scaled so the tallest bar fills the plot.
/// An all-zero chart keeps every bar at height 0.
pub fn layout_chart(chart: &BarChart) -> ChartLayout {
    let count = chart.bars.len().max(1) as u32;
    let plot_width = (count * SLOT_WIDTH).max(MIN_PLOT_WIDTH);
    let slot = plot_width / count;
    let bar_width = (slot * 7 / 10).max(1);
    let baseline = MARGIN_TOP + PLOT_HEIGHT;
    let max_value = chart.bars.iter().map(|b| b.value).max().unwrap_or(0);

    let bars = chart
        .bars
        .iter()
        .enumerate()
        .map(|(i, bar)| {
            let height = if max_value == 0 {
                0
            } else {
                (u64::from(bar.value) * u64::from(PLOT_HEIGHT) / u64::from(max_value)) as u32
            };
            let x = MARGIN_LEFT + i as u32 * slot + (slot - bar_width) / 2;
            let y = baseline - height;
            BarLayout {
                label: bar.label.clone(),
                value: bar.value,
                x,
                y,
                width: bar_width,
                height,
                center_x: x + bar_width / 2,
                value_y: y - 4,
            }
        })
        .collect();

    let width = MARGIN_LEFT + plot_width + MARGIN_RIGHT;
    ChartLayout {
        title: chart.title.clone(),
        width,
        height: baseline + MARGIN_BOTTOM,
        title_x: width / 2,
        axis_label_x: MARGIN_LEFT - 6,
        plot_left: MARGIN_LEFT,
        plot_right: MARGIN_LEFT + plot_width,
        plot_top: MARGIN_TOP,
        baseline,
        max_label_y: MARGIN_TOP + 4,
        label_y: baseline + 14,
        max_value,
        bars,
    }
}

/// Render the full dashboard page.
pub fn render_page(view: &DashboardView) -> Result<String> {
    let template = match view {
        DashboardView::Unavailable { message } => DashboardTemplate {
            title: PAGE_TITLE,
            select_label: TEAM_SELECT_LABEL,
            error_message: Some(*message),
            options: Vec::new(),
            rows: &[],
            warning: None,
            chart: None,
        },
        DashboardView::Ready(team_view) => {
            let (warning, chart) = match &team_view.chart {
                ChartState::Bars(chart) => (None, Some(layout_chart(chart))),
                ChartState::Warning(message) => (Some(*message), None),
            };
            DashboardTemplate {
                title: PAGE_TITLE,
                select_label: TEAM_SELECT_LABEL,
                error_message: None,
                options: team_view
                    .teams
                    .iter()
                    .map(|name| TeamOption {
                        name: name.as_str(),
                        selected: *name == team_view.selected,
                    })
                    .collect(),
                rows: &team_view.rows,
                warning,
                chart,
            }
        }
    };

    Ok(template.render()?)
}
