//! FILENAME: board-engine/src/engine.rs
//! Board Engine - the calculation core of the leaderboard.
//!
//! PURPOSE: Pure pipeline stages (filter, sort, paginate, aggregate) and the
//! `Dashboard` orchestrator that composes them into a `DisplayModel`.
//!
//! CONTEXT: Every stage is a pure function over borrowed rows; the only
//! mutable state lives in `BoardState`, owned by the orchestrator. State
//! changes never touch the dataset, they only alter what the next
//! `refresh()` computes.

use std::cmp::Ordering;

use engine::{ColorScheme, FieldValue, Row};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::definition::{
    columns_for, default_hidden_columns, default_sort, find_column, hand_field, name_field,
    BoardKind, ColumnRole, FieldDescriptor, FilterCriteria, PageSize, SortDirection, SortState,
    SortType,
};
use crate::view::{DisplayCell, DisplayModel, DisplayRow};

/// Name-field label of the synthetic average row.
pub const LEAGUE_AVERAGE_LABEL: &str = "League Avg";

// ============================================================================
// FILTER
// ============================================================================

/// Applies every active criterion conjunctively. Rows missing a referenced
/// field fail that criterion, except text search where a missing name is
/// treated as the empty string.
pub fn filter_rows<'a>(
    rows: &'a [Row],
    criteria: &FilterCriteria,
    name_field: &str,
) -> Vec<&'a Row> {
    let search = criteria.search.trim().to_lowercase();
    rows.iter()
        .filter(|row| row_passes(row, criteria, name_field, &search))
        .collect()
}

fn row_passes(row: &Row, criteria: &FilterCriteria, name_field: &str, search: &str) -> bool {
    for (field, expected) in &criteria.categorical_equals {
        if row.text(field) != Some(expected.as_str()) {
            return false;
        }
    }

    for (field, allowed) in &criteria.membership {
        if allowed.is_empty() {
            continue;
        }
        match row.text(field) {
            Some(value) if allowed.iter().any(|v| v == value) => {}
            _ => return false,
        }
    }

    // Missing values never satisfy a minimum.
    for (field, minimum) in &criteria.numeric_minimum {
        match row.number(field) {
            Some(value) if value >= *minimum => {}
            _ => return false,
        }
    }

    if !search.is_empty() {
        let name = row.text(name_field).unwrap_or("");
        if !name.to_lowercase().contains(search) {
            return false;
        }
    }

    true
}

// ============================================================================
// SORT
// ============================================================================

/// Stable sort by the active column. Rows with a missing sort value go last
/// in BOTH directions; direction only flips the comparison of present
/// values. Unsortable or unknown keys leave the order untouched.
pub fn sort_rows<'a>(
    mut rows: Vec<&'a Row>,
    columns: &[FieldDescriptor],
    sort: &SortState,
) -> Vec<&'a Row> {
    let key = match &sort.key {
        Some(key) => key.as_str(),
        None => return rows,
    };
    let column = match find_column(columns, key) {
        Some(column) if column.sort != SortType::Unsortable => column,
        _ => return rows,
    };

    // Columns with a non-comparable display value sort by a numeric proxy.
    let field = column.sort_key.unwrap_or(column.key);
    let descending = sort.direction == SortDirection::Descending;

    match column.sort {
        SortType::Numeric => rows.sort_by(|a, b| {
            compare_present(a.number(field), b.number(field), descending, |x, y| {
                x.total_cmp(y)
            })
        }),
        SortType::Text => rows.sort_by(|a, b| {
            compare_present(
                a.text(field).map(str::to_lowercase),
                b.text(field).map(str::to_lowercase),
                descending,
                |x, y| x.cmp(y),
            )
        }),
        SortType::Unsortable => {}
    }

    rows
}

fn compare_present<T, F>(a: Option<T>, b: Option<T>, descending: bool, cmp: F) -> Ordering
where
    F: Fn(&T, &T) -> Ordering,
{
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(x), Some(y)) => {
            let ordering = cmp(&x, &y);
            if descending {
                ordering.reverse()
            } else {
                ordering
            }
        }
    }
}

// ============================================================================
// PAGINATE
// ============================================================================

/// Resolved slice of the filtered row sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSlice {
    pub start: usize,
    pub end: usize,
    pub total_pages: usize,
    /// Requested page clamped to `[1, total_pages]`.
    pub page: usize,
}

pub fn paginate(row_count: usize, size: PageSize, requested_page: usize) -> PageSlice {
    let limit = size.limit();
    let total_pages = match limit {
        Some(limit) => row_count.div_ceil(limit).max(1),
        None => 1,
    };
    let page = requested_page.clamp(1, total_pages);
    let (start, end) = match limit {
        Some(limit) => {
            let start = (page - 1) * limit;
            (start.min(row_count), (start + limit).min(row_count))
        }
        None => (0, row_count),
    };

    PageSlice {
        start,
        end,
        total_pages,
        page,
    }
}

// ============================================================================
// AGGREGATE
// ============================================================================

/// Synthetic mean row over the full filtered set. Only percentile-eligible
/// data columns participate; each average skips missing values, and a
/// column with no present value at all stays null. The view's name field
/// carries a fixed label instead of an average.
pub fn league_average_row(
    rows: &[&Row],
    columns: &[&FieldDescriptor],
    name_field: &str,
) -> Row {
    let mut average = Row::new();
    average.insert(name_field, LEAGUE_AVERAGE_LABEL);

    for column in columns {
        if column.role != ColumnRole::Data || !column.percentile_eligible {
            continue;
        }
        let mut sum = 0.0;
        let mut present = 0usize;
        for row in rows {
            if let Some(value) = row.number(column.key) {
                sum += value;
                present += 1;
            }
        }
        let value = if present > 0 {
            FieldValue::Number(sum / present as f64)
        } else {
            FieldValue::Empty
        };
        average.insert(column.key, value);
    }

    average
}

// ============================================================================
// SESSION STATE
// ============================================================================

/// Everything the user can change about one dashboard session. Serializing
/// this snapshot and restoring it reproduces the same `DisplayModel`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardState {
    pub board: BoardKind,
    /// `None` means "all teams".
    pub team: Option<String>,
    /// Handedness; routed to throws or stands depending on the view.
    pub hand: Option<String>,
    /// Multi-select pitch types, applied on the pitch view only.
    pub pitch_types: Vec<String>,
    pub min_count: Option<f64>,
    /// Hitter-view minimum on swing count.
    pub min_swings: Option<f64>,
    pub search: String,
    pub sort: SortState,
    pub page: usize,
    pub page_size: PageSize,
    /// Hidden column keys, shared across all views.
    pub hidden_columns: FxHashSet<String>,
    /// Compare selection in click order; marker assignment follows it.
    pub compare: Vec<String>,
    pub show_league_avg: bool,
    pub scheme: ColorScheme,
    /// Keyboard-focused index within the current page.
    pub focus: Option<usize>,
}

impl Default for BoardState {
    fn default() -> Self {
        BoardState::new(BoardKind::default())
    }
}

impl BoardState {
    pub fn new(board: BoardKind) -> Self {
        BoardState {
            board,
            team: None,
            hand: None,
            pitch_types: Vec::new(),
            min_count: None,
            min_swings: None,
            search: String::new(),
            sort: default_sort(board),
            page: 1,
            page_size: PageSize::default(),
            hidden_columns: default_hidden_columns(),
            compare: Vec::new(),
            show_league_avg: false,
            scheme: ColorScheme::default(),
            focus: None,
        }
    }

    /// Assembles generic filter criteria from the concrete session fields,
    /// routing shared controls to the view's own fields: one handedness
    /// control feeds throws or stands, pitch-type chips only bind on the
    /// pitch view, the swing minimum only on the hitter view.
    pub fn effective_criteria(&self) -> FilterCriteria {
        let mut criteria = FilterCriteria::new();
        if let Some(team) = &self.team {
            criteria.set_equals("team", team);
        }
        if let Some(hand) = &self.hand {
            criteria.set_equals(hand_field(self.board), hand);
        }
        if self.board == BoardKind::Pitch && !self.pitch_types.is_empty() {
            criteria.set_membership("pitchType", &self.pitch_types);
        }
        if let Some(minimum) = self.min_count {
            if minimum > 0.0 {
                criteria.set_minimum("count", Some(minimum));
            }
        }
        if self.board == BoardKind::Hitter {
            if let Some(minimum) = self.min_swings {
                if minimum > 0.0 {
                    criteria.set_minimum("nSwings", Some(minimum));
                }
            }
        }
        criteria.search = self.search.clone();
        criteria
    }
}

// ============================================================================
// ORCHESTRATOR
// ============================================================================

/// Owns the loaded dataset and the session state; composes the pipeline
/// into display models. All mutators keep the state internally consistent:
/// anything that changes the filtered set resets to page 1, switching the
/// view resets the sort to the view's default.
pub struct Dashboard {
    dataset: Dataset,
    state: BoardState,
}

impl Dashboard {
    pub fn new(dataset: Dataset) -> Self {
        Dashboard {
            dataset,
            state: BoardState::default(),
        }
    }

    pub fn with_state(dataset: Dataset, state: BoardState) -> Self {
        Dashboard { dataset, state }
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    // ------------------------------------------------------------------
    // STATE MUTATORS
    // ------------------------------------------------------------------

    /// Switches the active view. Row identity differs across views, so the
    /// sort resets to the view default and the page and focus reset.
    pub fn set_board(&mut self, board: BoardKind) {
        if self.state.board == board {
            return;
        }
        self.state.board = board;
        self.state.sort = default_sort(board);
        self.state.page = 1;
        self.state.focus = None;
    }

    pub fn set_team(&mut self, team: Option<String>) {
        self.state.team = team;
        self.filter_changed();
    }

    pub fn set_hand(&mut self, hand: Option<String>) {
        self.state.hand = hand;
        self.filter_changed();
    }

    pub fn set_pitch_types(&mut self, pitch_types: Vec<String>) {
        self.state.pitch_types = pitch_types;
        self.filter_changed();
    }

    pub fn set_min_count(&mut self, minimum: Option<f64>) {
        self.state.min_count = minimum;
        self.filter_changed();
    }

    pub fn set_min_swings(&mut self, minimum: Option<f64>) {
        self.state.min_swings = minimum;
        self.filter_changed();
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.state.search = search.into();
        self.filter_changed();
    }

    /// Column-header click: flips the active column or activates a new one
    /// with its type default. Unknown keys are ignored.
    pub fn toggle_sort(&mut self, key: &str) {
        if let Some(column) = find_column(columns_for(self.state.board), key) {
            self.state.sort.toggle(column);
            self.state.page = 1;
            self.state.focus = None;
        }
    }

    /// Direct sort assignment, used by state restoration. Keys that do not
    /// name a sortable column of the current view are ignored, leaving the
    /// default in place.
    pub fn set_sort(&mut self, key: &str, direction: SortDirection) {
        match find_column(columns_for(self.state.board), key) {
            Some(column) if column.sort != SortType::Unsortable => {
                self.state.sort = SortState {
                    key: Some(column.key.to_string()),
                    direction,
                };
            }
            _ => {}
        }
    }

    pub fn set_page(&mut self, page: usize) {
        self.state.page = page.max(1);
        self.state.focus = None;
    }

    pub fn set_page_size(&mut self, size: PageSize) {
        self.state.page_size = size;
        self.filter_changed();
    }

    pub fn toggle_column(&mut self, key: &str) {
        if !self.state.hidden_columns.remove(key) {
            self.state.hidden_columns.insert(key.to_string());
        }
    }

    /// Compare membership is independent of filter, sort, and page state;
    /// it is only ever cleared explicitly.
    pub fn toggle_compare(&mut self, name: &str) {
        if let Some(position) = self.state.compare.iter().position(|n| n == name) {
            self.state.compare.remove(position);
        } else {
            self.state.compare.push(name.to_string());
        }
    }

    pub fn clear_compare(&mut self) {
        self.state.compare.clear();
    }

    pub fn compare_names(&self) -> &[String] {
        &self.state.compare
    }

    pub fn set_show_league_avg(&mut self, show: bool) {
        self.state.show_league_avg = show;
    }

    pub fn set_scheme(&mut self, scheme: ColorScheme) {
        self.state.scheme = scheme;
    }

    pub fn set_focus(&mut self, focus: Option<usize>) {
        self.state.focus = focus;
    }

    fn filter_changed(&mut self) {
        self.state.page = 1;
        self.state.focus = None;
    }

    // ------------------------------------------------------------------
    // PIPELINE
    // ------------------------------------------------------------------

    /// Recomputes filter → sort → paginate → aggregate from the current
    /// state. Pure given the state snapshot.
    pub fn refresh(&self) -> DisplayModel {
        let board = self.state.board;
        let columns = columns_for(board);
        let name = name_field(board);

        let criteria = self.state.effective_criteria();
        let filtered = filter_rows(self.dataset.rows(board), &criteria, name);
        let sorted = sort_rows(filtered, columns, &self.state.sort);
        let slice = paginate(sorted.len(), self.state.page_size, self.state.page);

        let visible: Vec<&'static FieldDescriptor> = columns
            .iter()
            .filter(|column| !self.state.hidden_columns.contains(column.key))
            .collect();

        let mut page_rows = Vec::with_capacity(slice.end - slice.start);
        for (offset, row) in sorted[slice.start..slice.end].iter().enumerate() {
            let rank = slice.start + offset + 1;
            page_rows.push(self.display_row(row, &visible, name, Some(rank), false));
        }

        let aggregate_row = if self.state.show_league_avg && !page_rows.is_empty() {
            let average = league_average_row(&sorted, &visible, name);
            Some(self.display_row(&average, &visible, name, None, true))
        } else {
            None
        };

        DisplayModel {
            page_rows,
            total_row_count: sorted.len(),
            total_pages: slice.total_pages,
            current_page: slice.page,
            visible_columns: visible,
            sort: self.state.sort.clone(),
            aggregate_row,
        }
    }

    fn display_row(
        &self,
        row: &Row,
        visible: &[&'static FieldDescriptor],
        name_field: &str,
        rank: Option<usize>,
        is_aggregate: bool,
    ) -> DisplayRow {
        let name = row.text(name_field).unwrap_or("").to_string();
        let compare_selected = !is_aggregate && self.state.compare.iter().any(|n| n == &name);

        let mut cells = Vec::with_capacity(visible.len());
        for column in visible {
            let cell = match column.role {
                ColumnRole::Rank => {
                    DisplayCell::plain(rank.map(|r| r.to_string()).unwrap_or_default())
                }
                ColumnRole::Compare => DisplayCell::plain(String::new()),
                ColumnRole::Data => {
                    let percentile = if column.percentile_eligible && !is_aggregate {
                        row.percentile(column.key)
                    } else {
                        None
                    };
                    DisplayCell::from_field(
                        row.get(column.key),
                        column,
                        percentile,
                        self.state.scheme,
                    )
                }
            };
            cells.push(cell);
        }

        DisplayRow {
            cells,
            name,
            is_aggregate,
            compare_selected,
        }
    }

    // ------------------------------------------------------------------
    // EXPORT AND SIDE PANEL
    // ------------------------------------------------------------------

    /// Full filtered and sorted row sequence, not just the current page.
    pub fn export_rows(&self) -> Vec<&Row> {
        let board = self.state.board;
        let criteria = self.state.effective_criteria();
        let filtered = filter_rows(self.dataset.rows(board), &criteria, name_field(board));
        sort_rows(filtered, columns_for(board), &self.state.sort)
    }

    /// Visible data columns only; rank and compare columns never export.
    pub fn export_columns(&self) -> Vec<&'static FieldDescriptor> {
        columns_for(self.state.board)
            .iter()
            .filter(|column| {
                column.role == ColumnRole::Data
                    && !self.state.hidden_columns.contains(column.key)
            })
            .collect()
    }

    /// One pitcher's pitch-view rows, ordered by usage share descending
    /// with missing usage treated as zero. Feeds the side-panel arsenal
    /// table.
    pub fn arsenal(&self, pitcher: &str) -> Vec<&Row> {
        let mut rows: Vec<&Row> = self
            .dataset
            .pitch
            .iter()
            .filter(|row| row.text("pitcher") == Some(pitcher))
            .collect();
        rows.sort_by(|a, b| {
            let ua = a.number("usagePct").unwrap_or(0.0);
            let ub = b.number("usagePct").unwrap_or(0.0);
            ub.total_cmp(&ua)
        });
        rows
    }
}
