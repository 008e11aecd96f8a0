//! Client-side table state.
//!
//! The API hands the console whole collections; filtering, sorting, and
//! pagination all happen here against the in-memory rows. The semantics
//! follow the table widgets the console renders:
//! - the filter is a trimmed, case-insensitive substring match over a row's
//!   searchable text, and typing it returns the user to the first page
//! - clicking a column cycles ascending, descending, then unsorted
//! - changing the page size keeps the previously first visible row on screen

use std::cmp::Ordering;

use crmpro_core::Customer;

/// Page sizes offered by the paginator.
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 25, 100];

/// Rows per page before the user picks anything.
pub const DEFAULT_PAGE_SIZE: usize = PAGE_SIZE_OPTIONS[0];

/// A row the table can filter and sort.
pub trait TableRow: Clone {
    /// Column discriminator for sorting.
    type Column: Copy + PartialEq;

    /// Lower-cased text the filter needle is matched against.
    fn haystack(&self) -> String;

    /// Ordering of two rows under the given column.
    fn compare(&self, other: &Self, column: Self::Column) -> Ordering;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// The active sort, if any.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sort<C> {
    pub column: C,
    pub direction: SortDirection,
}

/// Everything the table view derives its rendering from.
#[derive(Debug, Clone)]
pub struct TableState<T: TableRow> {
    rows: Vec<T>,
    filter: String,
    sort: Option<Sort<T::Column>>,
    page_index: usize,
    page_size: usize,
}

impl<T: TableRow> TableState<T> {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            filter: String::new(),
            sort: None,
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Replace the backing rows after a fetch. Filter and sort survive; the
    /// page index is clamped into the new range.
    pub fn set_rows(&mut self, rows: Vec<T>) {
        self.rows = rows;
        self.clamp_page();
    }

    /// Normalize the typed needle (trim, lowercase) and return to the first
    /// page.
    pub fn set_filter(&mut self, raw: &str) {
        self.filter = raw.trim().to_lowercase();
        self.page_index = 0;
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Cycle the sort for `column`: ascending, then descending, then none.
    /// A different column always starts ascending.
    pub fn toggle_sort(&mut self, column: T::Column) {
        self.sort = match self.sort {
            Some(sort) if sort.column == column => match sort.direction {
                SortDirection::Ascending => Some(Sort {
                    column,
                    direction: SortDirection::Descending,
                }),
                SortDirection::Descending => None,
            },
            _ => Some(Sort {
                column,
                direction: SortDirection::Ascending,
            }),
        };
    }

    pub fn sort(&self) -> Option<Sort<T::Column>> {
        self.sort
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Change the page size, keeping the previously first visible row
    /// visible on the recomputed page.
    pub fn set_page_size(&mut self, size: usize) {
        if size == 0 {
            return;
        }
        let first_visible = self.page_index * self.page_size;
        self.page_size = size;
        self.page_index = first_visible / size;
        self.clamp_page();
    }

    pub fn prev_page(&mut self) {
        if self.has_prev_page() {
            self.page_index -= 1;
        }
    }

    pub fn next_page(&mut self) {
        if self.has_next_page() {
            self.page_index += 1;
        }
    }

    pub fn has_prev_page(&self) -> bool {
        self.page_index > 0
    }

    pub fn has_next_page(&self) -> bool {
        self.page_index + 1 < self.page_count()
    }

    /// Rows surviving the filter, in display order.
    pub fn filtered(&self) -> Vec<T> {
        let mut rows: Vec<T> = if self.filter.is_empty() {
            self.rows.clone()
        } else {
            self.rows
                .iter()
                .filter(|row| row.haystack().contains(&self.filter))
                .cloned()
                .collect()
        };
        if let Some(sort) = self.sort {
            rows.sort_by(|a, b| {
                let ordering = a.compare(b, sort.column);
                match sort.direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }
        rows
    }

    /// The slice of [`filtered`](Self::filtered) for the current page.
    pub fn page(&self) -> Vec<T> {
        let rows = self.filtered();
        let start = (self.page_index * self.page_size).min(rows.len());
        let end = (start + self.page_size).min(rows.len());
        rows[start..end].to_vec()
    }

    pub fn filtered_len(&self) -> usize {
        if self.filter.is_empty() {
            self.rows.len()
        } else {
            self.rows
                .iter()
                .filter(|row| row.haystack().contains(&self.filter))
                .count()
        }
    }

    pub fn total_len(&self) -> usize {
        self.rows.len()
    }

    /// Number of pages under the current filter, never zero.
    pub fn page_count(&self) -> usize {
        self.filtered_len().div_ceil(self.page_size).max(1)
    }

    /// Paginator caption, e.g. `1 – 5 of 12`.
    pub fn range_label(&self) -> String {
        let total = self.filtered_len();
        if total == 0 {
            return "0 of 0".to_string();
        }
        let start = self.page_index * self.page_size;
        let end = (start + self.page_size).min(total);
        format!("{} – {} of {}", start + 1, end, total)
    }

    fn clamp_page(&mut self) {
        let last = self.page_count() - 1;
        if self.page_index > last {
            self.page_index = last;
        }
    }
}

impl<T: TableRow> Default for TableState<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Customers table
// ─────────────────────────────────────────────────────────────────────────────

/// Sortable columns of the customers table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerColumn {
    Name,
    Email,
    Status,
}

impl TableRow for Customer {
    type Column = CustomerColumn;

    fn haystack(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if let Some(id) = self.id {
            parts.push(id.to_string());
        }
        parts.push(self.name.clone());
        parts.push(self.email.clone());
        if let Some(phone) = &self.phone {
            parts.push(phone.clone());
        }
        if let Some(city) = &self.city {
            parts.push(city.clone());
        }
        parts.push(self.display_status().to_string());
        parts.join(" ").to_lowercase()
    }

    fn compare(&self, other: &Self, column: CustomerColumn) -> Ordering {
        match column {
            CustomerColumn::Name => compare_text(&self.name, &other.name),
            CustomerColumn::Email => compare_text(&self.email, &other.email),
            CustomerColumn::Status => compare_text(self.display_status(), other.display_status()),
        }
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
