//! FILENAME: persistence/src/share.rs
//! Shareable session state as ordered key/value pairs.
//!
//! PURPOSE: Capture the parts of a session worth putting in a link and
//! restore them later. Every field is optional on the way back in, and
//! anything malformed degrades to the default silently; a stale or
//! hand-edited link must still produce a valid dashboard.
//!
//! The pairs are transport-agnostic: the embedding shell decides how to
//! escape and join them into an actual URL fragment.

use board_engine::{
    columns_for, default_sort, find_column, BoardKind, BoardState, Dashboard, SortDirection,
};

pub const PARAM_TAB: &str = "tab";
pub const PARAM_TEAM: &str = "team";
pub const PARAM_HAND: &str = "throws";
pub const PARAM_MIN_COUNT: &str = "min";
pub const PARAM_SEARCH: &str = "search";
pub const PARAM_SORT: &str = "sort";
pub const PARAM_DIRECTION: &str = "dir";
pub const PARAM_PAGE: &str = "page";
pub const PARAM_PITCH_TYPES: &str = "pitch";

/// Captures the shareable slice of a session. Only non-default values
/// produce a pair; absent means "default" on restore, so a fresh
/// dashboard captures to an empty list.
pub fn capture_share_state(state: &BoardState) -> Vec<(String, String)> {
    let mut params = Vec::new();
    let mut push = |key: &str, value: String| {
        if !value.is_empty() {
            params.push((key.to_string(), value));
        }
    };

    if state.board != BoardKind::default() {
        push(PARAM_TAB, state.board.name().to_string());
    }
    if let Some(team) = &state.team {
        push(PARAM_TEAM, team.clone());
    }
    if let Some(hand) = &state.hand {
        push(PARAM_HAND, hand.clone());
    }
    if let Some(minimum) = state.min_count {
        push(PARAM_MIN_COUNT, format_threshold(minimum));
    }
    push(PARAM_SEARCH, state.search.clone());
    if state.sort != default_sort(state.board) {
        if let Some(key) = &state.sort.key {
            push(PARAM_SORT, key.clone());
            push(PARAM_DIRECTION, state.sort.direction.name().to_string());
        }
    }
    if state.page > 1 {
        push(PARAM_PAGE, state.page.to_string());
    }
    if !state.pitch_types.is_empty() {
        push(PARAM_PITCH_TYPES, state.pitch_types.join(","));
    }

    params
}

/// Applies captured pairs to a dashboard. Pair order does not matter;
/// fields are applied in dependency order (view first, page last) so each
/// mutator's own resets cannot clobber a restored value.
pub fn apply_share_state(dashboard: &mut Dashboard, params: &[(String, String)]) {
    let get = |key: &str| {
        params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    };

    if let Some(tab) = get(PARAM_TAB) {
        match BoardKind::from_name(tab) {
            Some(board) => dashboard.set_board(board),
            None => log::warn!("ignoring unknown view {tab:?} in shared state"),
        }
    }

    if let Some(team) = get(PARAM_TEAM) {
        dashboard.set_team(non_default(team));
    }
    if let Some(hand) = get(PARAM_HAND) {
        dashboard.set_hand(non_default(hand));
    }
    if let Some(minimum) = get(PARAM_MIN_COUNT) {
        match minimum.parse::<f64>() {
            Ok(m) if m.is_finite() => dashboard.set_min_count(Some(m)),
            _ => log::warn!("ignoring unparseable minimum {minimum:?} in shared state"),
        }
    }
    if let Some(search) = get(PARAM_SEARCH) {
        dashboard.set_search(search);
    }
    if let Some(joined) = get(PARAM_PITCH_TYPES) {
        let types: Vec<String> = joined
            .split(',')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        dashboard.set_pitch_types(types);
    }

    if let Some(key) = get(PARAM_SORT) {
        if find_column(columns_for(dashboard.state().board), key).is_some() {
            let direction = get(PARAM_DIRECTION)
                .and_then(SortDirection::from_name)
                .unwrap_or(SortDirection::Descending);
            dashboard.set_sort(key, direction);
        } else {
            log::warn!("ignoring unknown sort key {key:?} in shared state");
        }
    }

    // Page is applied last: filter restoring above reset it to 1.
    if let Some(page) = get(PARAM_PAGE) {
        dashboard.set_page(page.parse::<usize>().unwrap_or(1));
    }
}

/// "all" in a shared link means the filter was not narrowed.
fn non_default(value: &str) -> Option<String> {
    if value == "all" || value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn format_threshold(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use board_engine::{Dataset, PageSize};
    use engine::Row;

    fn create_test_dashboard() -> Dashboard {
        let mut dataset = Dataset::default();
        for (name, team, pt, count) in [
            ("A. Alpha", "SEA", "FF", 120.0),
            ("B. Beta", "TEX", "SL", 90.0),
            ("C. Gamma", "SEA", "FF", 60.0),
            ("D. Delta", "SEA", "CH", 30.0),
        ] {
            let mut row = Row::new();
            row.insert("pitcher", name);
            row.insert("team", team);
            row.insert("throws", "R");
            row.insert("pitchType", pt);
            row.insert("count", count);
            dataset.pitch.push(row);
        }
        for (name, count) in [
            ("E. Epsilon", 300.0),
            ("F. Zeta", 250.0),
            ("G. Eta", 200.0),
            ("H. Theta", 150.0),
            ("I. Iota", 100.0),
        ] {
            let mut row = Row::new();
            row.insert("hitter", name);
            row.insert("team", "SEA");
            row.insert("stands", "L");
            row.insert("count", count);
            dataset.hitter.push(row);
        }
        Dashboard::new(dataset)
    }

    fn value<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
        params.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_default_session_captures_to_nothing() {
        let dashboard = create_test_dashboard();
        assert!(capture_share_state(dashboard.state()).is_empty());
    }

    #[test]
    fn test_capture_emits_only_non_default_pairs() {
        let mut dashboard = create_test_dashboard();
        dashboard.set_board(BoardKind::Hitter);
        dashboard.set_search("alpha");

        let params = capture_share_state(dashboard.state());
        assert_eq!(value(&params, PARAM_TAB), Some("hitter"));
        assert_eq!(value(&params, PARAM_SEARCH), Some("alpha"));
        // Default sort and page stay implicit.
        assert_eq!(value(&params, PARAM_SORT), None);
        assert_eq!(value(&params, PARAM_DIRECTION), None);
        assert_eq!(value(&params, PARAM_PAGE), None);
        assert_eq!(value(&params, PARAM_TEAM), None);
    }

    #[test]
    fn test_round_trip_reproduces_display_model() {
        let mut dashboard = create_test_dashboard();
        dashboard.set_team(Some("SEA".to_string()));
        dashboard.set_pitch_types(vec!["FF".to_string(), "CH".to_string()]);
        dashboard.set_min_count(Some(25.0));
        dashboard.set_page_size(PageSize::Rows(2));
        dashboard.toggle_sort("pitcher");
        dashboard.set_page(2);

        let params = capture_share_state(dashboard.state());
        assert_eq!(value(&params, PARAM_PITCH_TYPES), Some("FF,CH"));
        assert_eq!(value(&params, PARAM_MIN_COUNT), Some("25"));

        let mut restored = create_test_dashboard();
        restored.set_page_size(PageSize::Rows(2));
        apply_share_state(&mut restored, &params);

        let a = dashboard.refresh();
        let b = restored.refresh();
        assert_eq!(a.current_page, b.current_page);
        assert_eq!(a.sort, b.sort);
        assert_eq!(a.total_row_count, b.total_row_count);
        assert_eq!(a.page_rows, b.page_rows);
    }

    #[test]
    fn test_round_trip_on_non_default_view() {
        let mut dashboard = create_test_dashboard();
        dashboard.set_board(BoardKind::Hitter);
        // Multi-select chips persist even where they do not bind.
        dashboard.set_pitch_types(vec!["FF".to_string(), "CH".to_string()]);
        dashboard.set_page_size(PageSize::Rows(2));
        dashboard.set_page(2);

        let params = capture_share_state(dashboard.state());
        assert_eq!(value(&params, PARAM_TAB), Some("hitter"));
        assert_eq!(value(&params, PARAM_PITCH_TYPES), Some("FF,CH"));
        assert_eq!(value(&params, PARAM_PAGE), Some("2"));

        let mut restored = create_test_dashboard();
        restored.set_page_size(PageSize::Rows(2));
        apply_share_state(&mut restored, &params);

        let a = dashboard.refresh();
        let b = restored.refresh();
        assert_eq!(b.current_page, 2);
        assert_eq!(a.page_rows, b.page_rows);
        assert_eq!(a.page_rows[0].name, "G. Eta");
    }

    #[test]
    fn test_apply_order_independent() {
        let params = vec![
            (PARAM_PAGE.to_string(), "2".to_string()),
            (PARAM_TEAM.to_string(), "SEA".to_string()),
            (PARAM_TAB.to_string(), "pitch".to_string()),
        ];
        let mut dashboard = create_test_dashboard();
        dashboard.set_page_size(PageSize::Rows(2));
        apply_share_state(&mut dashboard, &params);

        assert_eq!(dashboard.state().team.as_deref(), Some("SEA"));
        // Page survives because it is applied after the filters.
        assert_eq!(dashboard.state().page, 2);
    }

    #[test]
    fn test_malformed_values_degrade_to_defaults() {
        let params = vec![
            (PARAM_TAB.to_string(), "bogus".to_string()),
            (PARAM_SORT.to_string(), "notacolumn".to_string()),
            (PARAM_DIRECTION.to_string(), "sideways".to_string()),
            (PARAM_PAGE.to_string(), "NaN".to_string()),
            (PARAM_MIN_COUNT.to_string(), "lots".to_string()),
        ];
        let mut dashboard = create_test_dashboard();
        apply_share_state(&mut dashboard, &params);

        let state = dashboard.state();
        assert_eq!(state.board, BoardKind::Pitch);
        assert_eq!(state.sort.key.as_deref(), Some("count"));
        assert_eq!(state.page, 1);
        assert_eq!(state.min_count, None);
        // The degraded state still renders.
        assert_eq!(dashboard.refresh().current_page, 1);
    }

    #[test]
    fn test_all_means_unfiltered() {
        let mut dashboard = create_test_dashboard();
        dashboard.set_team(Some("SEA".to_string()));

        let params = vec![(PARAM_TEAM.to_string(), "all".to_string())];
        apply_share_state(&mut dashboard, &params);
        assert_eq!(dashboard.state().team, None);
    }
}
