//! FILENAME: board-engine/src/definition.rs
//! Board Definition - the declarative configuration layer.
//!
//! This module contains all the types needed to DESCRIBE a leaderboard:
//! which views exist, which columns each view carries, and the filter,
//! sort, and pagination criteria applied to them. Behavior elsewhere in
//! the crate is keyed off these descriptor fields; no per-column code.

use engine::FormatRule;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 50;

// ============================================================================
// BOARDS
// ============================================================================

/// The three fixed leaderboard views. Views do not share rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardKind {
    /// One row per pitcher x pitch type.
    Pitch,
    /// One row per pitcher aggregate.
    Pitcher,
    /// One row per hitter aggregate.
    Hitter,
}

impl BoardKind {
    pub fn name(&self) -> &'static str {
        match self {
            BoardKind::Pitch => "pitch",
            BoardKind::Pitcher => "pitcher",
            BoardKind::Hitter => "hitter",
        }
    }

    pub fn from_name(name: &str) -> Option<BoardKind> {
        match name {
            "pitch" => Some(BoardKind::Pitch),
            "pitcher" => Some(BoardKind::Pitcher),
            "hitter" => Some(BoardKind::Hitter),
            _ => None,
        }
    }
}

impl Default for BoardKind {
    fn default() -> Self {
        BoardKind::Pitch
    }
}

// ============================================================================
// COLUMN DESCRIPTORS
// ============================================================================

/// Rendering role of a column. Rank and compare columns carry no row data
/// and are excluded from export and from the settings toggle list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnRole {
    Rank,
    Compare,
    Data,
}

/// How a column orders, if at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortType {
    Numeric,
    Text,
    Unsortable,
}

/// Declarative metadata for one column of one view.
///
/// The tables below are the single source of truth: formatting, sorting,
/// percentile coloring, aggregation, and export all consult these flags.
#[derive(Debug, Clone, Serialize)]
pub struct FieldDescriptor {
    /// Row field this column displays. Unique within a view.
    pub key: &'static str,
    pub label: &'static str,
    /// Settings-panel section ("info", "metrics", "stats", ...).
    pub group: &'static str,
    pub format: FormatRule,
    pub sort: SortType,
    /// Comparison alias: an always-numeric proxy field used for ordering
    /// when the displayed value is not directly comparable.
    pub sort_key: Option<&'static str>,
    pub role: ColumnRole,
    /// Whether a `<key>_pctl` companion may drive conditional coloring.
    pub percentile_eligible: bool,
    pub default_hidden: bool,
    /// Whether the column appears in the settings toggle list.
    pub toggle: bool,
    pub tooltip: Option<&'static str>,
}

impl FieldDescriptor {
    /// Data column. Numeric columns start percentile-eligible; opt out
    /// with `no_percentile` for identity-like numbers (counts, usage).
    const fn new(
        key: &'static str,
        label: &'static str,
        group: &'static str,
        format: FormatRule,
        sort: SortType,
    ) -> Self {
        FieldDescriptor {
            key,
            label,
            group,
            format,
            sort,
            sort_key: None,
            role: ColumnRole::Data,
            percentile_eligible: matches!(sort, SortType::Numeric),
            default_hidden: false,
            toggle: true,
            tooltip: None,
        }
    }

    const fn rank() -> Self {
        FieldDescriptor {
            key: "_rank",
            label: "#",
            group: "info",
            format: FormatRule::Text,
            sort: SortType::Unsortable,
            sort_key: None,
            role: ColumnRole::Rank,
            percentile_eligible: false,
            default_hidden: false,
            toggle: false,
            tooltip: Some("Rank"),
        }
    }

    const fn compare() -> Self {
        FieldDescriptor {
            key: "_compare",
            label: "",
            group: "info",
            format: FormatRule::Text,
            sort: SortType::Unsortable,
            sort_key: None,
            role: ColumnRole::Compare,
            percentile_eligible: false,
            default_hidden: false,
            toggle: false,
            tooltip: None,
        }
    }

    const fn no_percentile(mut self) -> Self {
        self.percentile_eligible = false;
        self
    }

    const fn hidden(mut self) -> Self {
        self.default_hidden = true;
        self
    }

    const fn no_toggle(mut self) -> Self {
        self.toggle = false;
        self
    }

    const fn with_sort_key(mut self, sort_key: &'static str) -> Self {
        self.sort_key = Some(sort_key);
        self
    }

    const fn with_tooltip(mut self, tooltip: &'static str) -> Self {
        self.tooltip = Some(tooltip);
        self
    }
}

// ============================================================================
// COLUMN REGISTRY
// ============================================================================

use engine::FormatRule::{Clock, Decimal, Integer, Percent, Text};

use self::SortType::{Numeric, Text as TextSort};

static PITCH_COLUMNS: &[FieldDescriptor] = &[
    FieldDescriptor::rank(),
    FieldDescriptor::compare(),
    FieldDescriptor::new("pitcher", "Pitcher", "info", Text, TextSort)
        .no_toggle()
        .with_tooltip("Pitcher name"),
    FieldDescriptor::new("team", "Team", "info", Text, TextSort)
        .with_tooltip("Team abbreviation"),
    FieldDescriptor::new("throws", "Throws", "info", Text, TextSort)
        .with_tooltip("Throwing hand (R/L)"),
    FieldDescriptor::new("pitchType", "Pitch", "info", Text, TextSort)
        .with_tooltip("Pitch type"),
    FieldDescriptor::new("count", "Count", "info", Integer, Numeric)
        .no_percentile()
        .with_tooltip("Number of pitches"),
    FieldDescriptor::new("usagePct", "Usage%", "info", Percent(1), Numeric)
        .no_percentile()
        .with_tooltip("Usage rate (% of pitcher's total pitches)"),
    // Metrics
    FieldDescriptor::new("velocity", "Velo", "metrics", Decimal(1), Numeric)
        .with_tooltip("Average Velocity (mph)"),
    FieldDescriptor::new("spinRate", "Spin", "metrics", Integer, Numeric)
        .with_tooltip("Average Spin Rate (rpm)"),
    FieldDescriptor::new("stuffScore", "Stuff", "metrics", Integer, Numeric)
        .hidden()
        .with_tooltip("Composite stuff score (velocity/spin blend)"),
    FieldDescriptor::new("breakTilt", "Tilt", "metrics", Clock, Numeric)
        .with_sort_key("breakTiltMinutes")
        .no_percentile()
        .with_tooltip("Average Break Tilt (clock notation)"),
    FieldDescriptor::new("indVertBrk", "IVB", "metrics", Decimal(1), Numeric)
        .with_tooltip("Induced Vertical Break (inches)"),
    FieldDescriptor::new("horzBrk", "HB", "metrics", Decimal(1), Numeric)
        .with_tooltip("Horizontal Break (inches)"),
    FieldDescriptor::new("relPosZ", "RelZ", "metrics", Decimal(1), Numeric)
        .hidden()
        .with_tooltip("Vertical Release Position (feet)"),
    FieldDescriptor::new("relPosX", "RelX", "metrics", Decimal(1), Numeric)
        .hidden()
        .with_tooltip("Horizontal Release Position (feet)"),
    FieldDescriptor::new("extension", "Ext", "metrics", Decimal(1), Numeric)
        .with_tooltip("Extension (feet)"),
    FieldDescriptor::new("vaa", "VAA", "metrics", Decimal(2), Numeric)
        .hidden()
        .with_tooltip("Vertical Approach Angle (degrees)"),
    FieldDescriptor::new("haa", "HAA", "metrics", Decimal(2), Numeric)
        .hidden()
        .with_tooltip("Horizontal Approach Angle (degrees)"),
    FieldDescriptor::new("vra", "VRA", "metrics", Decimal(2), Numeric)
        .hidden()
        .with_tooltip("Vertical Release Angle (degrees)"),
    FieldDescriptor::new("hra", "HRA", "metrics", Decimal(2), Numeric)
        .hidden()
        .with_tooltip("Horizontal Release Angle (degrees)"),
    // Stats
    FieldDescriptor::new("izPct", "IZ%", "stats", Percent(1), Numeric)
        .with_tooltip("In-Zone Rate"),
    FieldDescriptor::new("swStrPct", "SwStr%", "stats", Percent(1), Numeric)
        .with_tooltip("Swinging Strike Rate"),
    FieldDescriptor::new("cswPct", "CSW%", "stats", Percent(1), Numeric)
        .with_tooltip("Called Strike + Whiff Rate"),
    FieldDescriptor::new("chasePct", "Chase%", "stats", Percent(1), Numeric)
        .with_tooltip("Out-of-Zone Swing Rate"),
    FieldDescriptor::new("gbPct", "GB%", "stats", Percent(1), Numeric)
        .with_tooltip("Ground Ball Rate"),
];

static PITCHER_COLUMNS: &[FieldDescriptor] = &[
    FieldDescriptor::rank(),
    FieldDescriptor::compare(),
    FieldDescriptor::new("pitcher", "Pitcher", "info", Text, TextSort)
        .no_toggle()
        .with_tooltip("Pitcher name"),
    FieldDescriptor::new("team", "Team", "info", Text, TextSort)
        .with_tooltip("Team abbreviation"),
    FieldDescriptor::new("throws", "Throws", "info", Text, TextSort)
        .with_tooltip("Throwing hand (R/L)"),
    FieldDescriptor::new("count", "Count", "info", Integer, Numeric)
        .no_percentile()
        .with_tooltip("Number of pitches"),
    FieldDescriptor::new("izPct", "IZ%", "stats", Percent(1), Numeric)
        .with_tooltip("In-Zone Rate"),
    FieldDescriptor::new("swStrPct", "SwStr%", "stats", Percent(1), Numeric)
        .with_tooltip("Swinging Strike Rate"),
    FieldDescriptor::new("cswPct", "CSW%", "stats", Percent(1), Numeric)
        .with_tooltip("Called Strike + Whiff Rate"),
    FieldDescriptor::new("chasePct", "Chase%", "stats", Percent(1), Numeric)
        .with_tooltip("Out-of-Zone Swing Rate"),
    FieldDescriptor::new("gbPct", "GB%", "stats", Percent(1), Numeric)
        .with_tooltip("Ground Ball Rate"),
];

static HITTER_COLUMNS: &[FieldDescriptor] = &[
    FieldDescriptor::rank(),
    FieldDescriptor::new("hitter", "Hitter", "info", Text, TextSort).no_toggle(),
    FieldDescriptor::new("team", "Team", "info", Text, TextSort)
        .with_tooltip("Team abbreviation"),
    FieldDescriptor::new("stands", "Stands", "info", Text, TextSort),
    FieldDescriptor::new("count", "Pitches", "info", Integer, Numeric).no_percentile(),
    FieldDescriptor::new("nSwings", "Swings", "info", Integer, Numeric).no_percentile(),
    // Discipline
    FieldDescriptor::new("swingPct", "Swing%", "discipline", Percent(1), Numeric),
    FieldDescriptor::new("izSwingPct", "IZSw%", "discipline", Percent(1), Numeric),
    FieldDescriptor::new("chasePct", "Chase%", "discipline", Percent(1), Numeric)
        .with_tooltip("Out-of-Zone Swing Rate"),
    FieldDescriptor::new("izSwChase", "IZSw-Ch", "discipline", Percent(1), Numeric),
    FieldDescriptor::new("whiffPct", "Whiff%", "discipline", Percent(1), Numeric),
    // Quality
    FieldDescriptor::new("medEV", "Med EV", "quality", Decimal(1), Numeric),
    FieldDescriptor::new("maxEV", "Max EV", "quality", Decimal(1), Numeric),
    FieldDescriptor::new("barrelPct", "Barrel%", "quality", Percent(1), Numeric),
    FieldDescriptor::new("xBA", "xBA", "quality", Decimal(3), Numeric),
    FieldDescriptor::new("xSLG", "xSLG", "quality", Decimal(3), Numeric),
    // Batted Ball
    FieldDescriptor::new("gbPct", "GB%", "batted_ball", Percent(1), Numeric)
        .with_tooltip("Ground Ball Rate"),
    FieldDescriptor::new("ldPct", "LD%", "batted_ball", Percent(1), Numeric),
    FieldDescriptor::new("fbPct", "FB%", "batted_ball", Percent(1), Numeric),
    FieldDescriptor::new("medLA", "Med LA", "batted_ball", Decimal(1), Numeric),
];

/// Side-panel arsenal summary: a fixed subset of pitch-view columns shown
/// per pitch type for one pitcher.
static ARSENAL_COLUMNS: &[FieldDescriptor] = &[
    FieldDescriptor::new("pitchType", "Pitch", "info", Text, TextSort),
    FieldDescriptor::new("usagePct", "Usage", "info", Percent(1), Numeric).no_percentile(),
    FieldDescriptor::new("velocity", "Velo", "metrics", Decimal(1), Numeric),
    FieldDescriptor::new("spinRate", "Spin", "metrics", Integer, Numeric),
    FieldDescriptor::new("indVertBrk", "IVB", "metrics", Decimal(1), Numeric),
    FieldDescriptor::new("horzBrk", "HB", "metrics", Decimal(1), Numeric),
    FieldDescriptor::new("extension", "Ext", "metrics", Decimal(1), Numeric),
];

/// Column list for a view. Pure static lookup, no mutation after init.
pub fn columns_for(kind: BoardKind) -> &'static [FieldDescriptor] {
    match kind {
        BoardKind::Pitch => PITCH_COLUMNS,
        BoardKind::Pitcher => PITCHER_COLUMNS,
        BoardKind::Hitter => HITTER_COLUMNS,
    }
}

/// Field holding the entity name, the text-search target.
pub fn name_field(kind: BoardKind) -> &'static str {
    match kind {
        BoardKind::Pitch | BoardKind::Pitcher => "pitcher",
        BoardKind::Hitter => "hitter",
    }
}

/// Field holding handedness; one UI control drives both.
pub fn hand_field(kind: BoardKind) -> &'static str {
    match kind {
        BoardKind::Pitch | BoardKind::Pitcher => "throws",
        BoardKind::Hitter => "stands",
    }
}

/// Every view ranks by sample size until the user sorts explicitly.
pub fn default_sort(_kind: BoardKind) -> SortState {
    SortState {
        key: Some("count".to_string()),
        direction: SortDirection::Descending,
    }
}

pub fn arsenal_columns() -> &'static [FieldDescriptor] {
    ARSENAL_COLUMNS
}

pub fn find_column<'a>(
    columns: &'a [FieldDescriptor],
    key: &str,
) -> Option<&'a FieldDescriptor> {
    columns.iter().find(|c| c.key == key)
}

/// Initial hidden set, merged across ALL views: hiding a column is a
/// global preference, not a per-view one.
pub fn default_hidden_columns() -> FxHashSet<String> {
    let mut hidden = FxHashSet::default();
    for columns in [PITCH_COLUMNS, PITCHER_COLUMNS, HITTER_COLUMNS] {
        for col in columns {
            if col.default_hidden {
                hidden.insert(col.key.to_string());
            }
        }
    }
    hidden
}

// ============================================================================
// SORTING
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    pub fn name(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    pub fn from_name(name: &str) -> Option<SortDirection> {
        match name {
            "asc" => Some(SortDirection::Ascending),
            "desc" => Some(SortDirection::Descending),
            _ => None,
        }
    }

    pub fn flipped(&self) -> SortDirection {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

impl Default for SortDirection {
    fn default() -> Self {
        SortDirection::Descending
    }
}

/// Active sort key and direction for one view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortState {
    pub key: Option<String>,
    pub direction: SortDirection,
}

impl SortState {
    /// Column-click protocol: clicking the active column flips direction;
    /// clicking a new column activates it with a type-dependent default
    /// (names browse alphabetically, stats lead with the best values).
    /// Unsortable columns are a no-op.
    pub fn toggle(&mut self, column: &FieldDescriptor) {
        if column.sort == SortType::Unsortable {
            return;
        }
        if self.key.as_deref() == Some(column.key) {
            self.direction = self.direction.flipped();
        } else {
            self.key = Some(column.key.to_string());
            self.direction = match column.sort {
                SortType::Text => SortDirection::Ascending,
                _ => SortDirection::Descending,
            };
        }
    }
}

// ============================================================================
// FILTERING
// ============================================================================

/// Conjunctive filter criteria: a row survives only if it satisfies every
/// active criterion. Absent entries, empty membership sets, and an empty
/// search string mean "no restriction".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    /// Exact match on a categorical field.
    pub categorical_equals: FxHashMap<String, String>,
    /// Multi-select membership on a categorical field.
    pub membership: FxHashMap<String, SmallVec<[String; 8]>>,
    /// Inclusive lower bound on a numeric field; missing values never pass.
    pub numeric_minimum: FxHashMap<String, f64>,
    /// Case-insensitive substring match against the view's name field.
    pub search: String,
}

impl FilterCriteria {
    pub fn new() -> Self {
        FilterCriteria::default()
    }

    /// Sets or clears ("all") an exact-match criterion.
    pub fn set_equals(&mut self, field: &str, value: &str) {
        if value == "all" || value.is_empty() {
            self.categorical_equals.remove(field);
        } else {
            self.categorical_equals
                .insert(field.to_string(), value.to_string());
        }
    }

    /// Sets or clears (empty slice) a membership criterion.
    pub fn set_membership(&mut self, field: &str, values: &[String]) {
        if values.is_empty() {
            self.membership.remove(field);
        } else {
            self.membership
                .insert(field.to_string(), values.iter().cloned().collect());
        }
    }

    pub fn set_minimum(&mut self, field: &str, minimum: Option<f64>) {
        match minimum {
            Some(m) => {
                self.numeric_minimum.insert(field.to_string(), m);
            }
            None => {
                self.numeric_minimum.remove(field);
            }
        }
    }

    pub fn is_unrestricted(&self) -> bool {
        self.categorical_equals.is_empty()
            && self.membership.is_empty()
            && self.numeric_minimum.is_empty()
            && self.search.is_empty()
    }
}

// ============================================================================
// PAGINATION
// ============================================================================

/// Rows per page; `All` renders the entire result on a single page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageSize {
    Rows(usize),
    All,
}

impl PageSize {
    /// Bounded page length, `None` for unbounded. `Rows(0)` is unbounded.
    pub fn limit(&self) -> Option<usize> {
        match self {
            PageSize::Rows(n) if *n > 0 => Some(*n),
            _ => None,
        }
    }
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize::Rows(DEFAULT_PAGE_SIZE)
    }
}
