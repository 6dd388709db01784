//! Dashboard state derived from the loaded records

use super::{NO_DATA_MESSAGE, NO_TEAM_DATA_WARNING};
use crate::storage::PlayerRecord;
use std::collections::HashSet;

/// What the page shows for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardView {
    /// Nothing stored: only the error message is shown.
    Unavailable { message: &'static str },
    Ready(TeamView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamView {
    /// Dropdown options, in first-occurrence order.
    pub teams: Vec<String>,
    pub selected: String,
    /// Records of the selected team, in stored order.
    pub rows: Vec<PlayerRecord>,
    pub chart: ChartState,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartState {
    Bars(BarChart),
    Warning(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarChart {
    pub title: String,
    pub bars: Vec<Bar>,
}

/// One bar per record; repeated player names give repeated bars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bar {
    pub label: String,
    pub value: u32,
}

pub fn chart_title(team: &str) -> String {
    format!("Gols por Jogador - {team}")
}

/// Distinct team names in the order they first appear.
pub fn distinct_teams(records: &[PlayerRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter(|r| seen.insert(r.team.as_str()))
        .map(|r| r.team.clone())
        .collect()
}

pub fn filter_by_team(records: &[PlayerRecord], team: &str) -> Vec<PlayerRecord> {
    records.iter().filter(|r| r.team == team).cloned().collect()
}

/// Evaluate the whole page for `selection`, defaulting to the first team.
pub fn evaluate(records: &[PlayerRecord], selection: Option<&str>) -> DashboardView {
    let teams = distinct_teams(records);
    let Some(first) = teams.first() else {
        return DashboardView::Unavailable {
            message: NO_DATA_MESSAGE,
        };
    };

    let selected = selection.unwrap_or(first.as_str()).to_string();
    let rows = filter_by_team(records, &selected);
    let chart = if rows.is_empty() {
        ChartState::Warning(NO_TEAM_DATA_WARNING)
    } else {
        ChartState::Bars(BarChart {
            title: chart_title(&selected),
            bars: rows
                .iter()
                .map(|r| Bar {
                    label: r.player.clone(),
                    value: r.goals,
                })
                .collect(),
        })
    };

    DashboardView::Ready(TeamView {
        teams,
        selected,
        rows,
        chart,
    })
}

#[cfg(test)]
mod tests;
