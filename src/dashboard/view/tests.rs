//! Unit tests for dashboard evaluation

use super::*;

fn two_teams() -> Vec<PlayerRecord> {
    vec![
        PlayerRecord::new("A", "TeamX", 3, 1),
        PlayerRecord::new("B", "TeamY", 0, 0),
    ]
}

fn ready(view: DashboardView) -> TeamView {
    match view {
        DashboardView::Ready(team_view) => team_view,
        other => panic!("Expected Ready view, got {other:?}"),
    }
}

#[test]
fn test_empty_records_are_unavailable() {
    let view = evaluate(&[], None);
    assert_eq!(
        view,
        DashboardView::Unavailable {
            message: "Nenhum dado disponível. Verifique a fonte dos dados."
        }
    );
}

#[test]
fn test_empty_records_ignore_selection() {
    let view = evaluate(&[], Some("TeamX"));
    assert!(matches!(view, DashboardView::Unavailable { .. }));
}

#[test]
fn test_selecting_team_filters_and_charts_goals() {
    let view = ready(evaluate(&two_teams(), Some("TeamX")));

    assert_eq!(view.selected, "TeamX");
    assert_eq!(view.rows, vec![PlayerRecord::new("A", "TeamX", 3, 1)]);
    match view.chart {
        ChartState::Bars(chart) => {
            assert_eq!(chart.title, "Gols por Jogador - TeamX");
            assert_eq!(
                chart.bars,
                vec![Bar {
                    label: "A".to_string(),
                    value: 3
                }]
            );
        }
        other => panic!("Expected bars, got {other:?}"),
    }
}

#[test]
fn test_default_selection_is_first_team() {
    let records = vec![
        PlayerRecord::new("C", "TeamZ", 1, 0),
        PlayerRecord::new("A", "TeamX", 3, 1),
    ];
    let view = ready(evaluate(&records, None));
    assert_eq!(view.selected, "TeamZ");
}

#[test]
fn test_distinct_teams_keep_first_occurrence_order() {
    let records = vec![
        PlayerRecord::new("a", "Wolves", 0, 0),
        PlayerRecord::new("b", "Arsenal", 0, 0),
        PlayerRecord::new("c", "Wolves", 0, 0),
        PlayerRecord::new("d", "Brentford", 0, 0),
        PlayerRecord::new("e", "Arsenal", 0, 0),
    ];
    assert_eq!(
        distinct_teams(&records),
        vec!["Wolves", "Arsenal", "Brentford"]
    );
}

#[test]
fn test_all_zero_goals_still_chart() {
    let records = vec![
        PlayerRecord::new("Keeper", "Luton", 0, 0),
        PlayerRecord::new("Defender", "Luton", 0, 2),
    ];
    let view = ready(evaluate(&records, Some("Luton")));

    match view.chart {
        ChartState::Bars(chart) => {
            assert_eq!(chart.bars.len(), 2);
            assert!(chart.bars.iter().all(|b| b.value == 0));
        }
        other => panic!("Expected bars, got {other:?}"),
    }
}

#[test]
fn test_repeated_player_gives_repeated_bars() {
    let records = vec![
        PlayerRecord::new("Twin", "Everton", 2, 0),
        PlayerRecord::new("Twin", "Everton", 5, 1),
    ];
    let view = ready(evaluate(&records, None));

    match view.chart {
        ChartState::Bars(chart) => {
            let values: Vec<u32> = chart.bars.iter().map(|b| b.value).collect();
            assert_eq!(values, vec![2, 5]);
        }
        other => panic!("Expected bars, got {other:?}"),
    }
}

#[test]
fn test_unknown_team_shows_warning() {
    let view = ready(evaluate(&two_teams(), Some("Nobody FC")));

    assert!(view.rows.is_empty());
    assert_eq!(
        view.chart,
        ChartState::Warning("Nenhum dado disponível para este time.")
    );
    // options still come from the data
    assert_eq!(view.teams, vec!["TeamX", "TeamY"]);
}

#[test]
fn test_filter_preserves_relative_order() {
    let records = vec![
        PlayerRecord::new("first", "Spurs", 1, 0),
        PlayerRecord::new("other", "Villa", 1, 0),
        PlayerRecord::new("second", "Spurs", 9, 0),
    ];
    let rows = filter_by_team(&records, "Spurs");
    let names: Vec<&str> = rows.iter().map(|r| r.player.as_str()).collect();
    assert_eq!(names, vec!["first", "second"]);
}
