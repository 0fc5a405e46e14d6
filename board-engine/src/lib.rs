//! FILENAME: board-engine/src/lib.rs
//! Leaderboard subsystem for the dashboard.
//!
//! This crate turns loaded row collections into render-ready display
//! models. It depends on `engine` for shared value, formatting, and
//! color types.
//!
//! Layers:
//! - `definition`: Declarative configuration (what each board IS)
//! - `dataset`: Loaded row collections and league metadata
//! - `view`: Renderable output for the frontend (WHAT we display)
//! - `engine`: Calculation pipeline and orchestrator (HOW we compute)

pub mod dataset;
pub mod definition;
pub mod engine;
pub mod view;

pub use dataset::{Dataset, Metadata};
pub use definition::*;
pub use self::engine::{
    filter_rows, league_average_row, paginate, sort_rows, BoardState, Dashboard, PageSlice,
    LEAGUE_AVERAGE_LABEL,
};
pub use view::{DisplayCell, DisplayModel, DisplayRow};

#[cfg(test)]
mod tests {
    use super::*;
    use ::engine::Row;

    fn pitch_row(pitcher: &str, pitch_type: &str, count: f64) -> Row {
        let mut row = Row::new();
        row.insert("pitcher", pitcher);
        row.insert("team", "SEA");
        row.insert("throws", "L");
        row.insert("pitchType", pitch_type);
        row.insert("count", count);
        row
    }

    #[test]
    fn integration_test_filter_sort_paginate_end_to_end() {
        let mut dataset = Dataset::default();
        for i in 0..120 {
            dataset
                .pitch
                .push(pitch_row(&format!("Pitcher {i:03}"), "FF", i as f64));
        }

        let mut dashboard = Dashboard::new(dataset);
        dashboard.set_page_size(PageSize::Rows(50));
        let model = dashboard.refresh();

        assert_eq!(model.total_row_count, 120);
        assert_eq!(model.total_pages, 3);
        assert_eq!(model.page_rows.len(), 50);
        // Default sort is count descending, so the biggest sample leads.
        assert_eq!(model.page_rows[0].name, "Pitcher 119");

        dashboard.set_page(3);
        let last = dashboard.refresh();
        assert_eq!(last.page_rows.len(), 20);
        assert_eq!(last.page_rows[0].cells[0].text, "101");
    }

    #[test]
    fn integration_test_stale_page_clamps_after_filter_shrink() {
        let mut dataset = Dataset::default();
        for i in 0..60 {
            dataset
                .pitch
                .push(pitch_row(&format!("Pitcher {i:02}"), "FF", i as f64));
        }

        // A restored snapshot can carry a page index the narrowed result
        // set no longer reaches; refresh clamps rather than going blank.
        let mut state = BoardState::new(BoardKind::Pitch);
        state.page_size = PageSize::Rows(10);
        state.page = 6;
        state.search = "Pitcher 0".to_string();

        let model = Dashboard::with_state(dataset, state).refresh();
        assert_eq!(model.total_row_count, 10);
        assert_eq!(model.total_pages, 1);
        assert_eq!(model.current_page, 1);
        assert_eq!(model.page_rows.len(), 10);
    }
}
