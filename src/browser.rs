//! Scrollable course list
//!
//! Selection always stays inside the visible window; switching category
//! resets both selection and scroll.

use crate::catalog::{Category, Course};

/// Default number of rows shown at once
pub const DEFAULT_VISIBLE_ROWS: usize = 10;

/// A row in the visible window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowserRow {
    pub index: usize,
    pub course: &'static Course,
    pub selected: bool,
}

#[derive(Debug, Clone)]
pub struct CourseBrowser {
    category: Category,
    selected: usize,
    scroll_index: usize,
    visible_rows: usize,
}

impl Default for CourseBrowser {
    fn default() -> Self {
        Self::new(DEFAULT_VISIBLE_ROWS)
    }
}

impl CourseBrowser {
    pub fn new(visible_rows: usize) -> Self {
        Self {
            category: Category::Main,
            selected: 0,
            scroll_index: 0,
            visible_rows: visible_rows.max(1),
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn courses(&self) -> &'static [Course] {
        self.category.courses()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn scroll_index(&self) -> usize {
        self.scroll_index
    }

    /// Move the selection by `amount` rows
    pub fn scroll(&mut self, amount: isize) {
        let last = self.courses().len().saturating_sub(1);
        self.selected = self.selected.saturating_add_signed(amount).min(last);

        if self.selected < self.scroll_index {
            self.scroll_index = self.selected;
        } else if self.selected >= self.scroll_index + self.visible_rows {
            self.scroll_index = self.selected + 1 - self.visible_rows;
        }
    }

    /// Switch to the next category
    pub fn cycle_category(&mut self) {
        self.set_category(self.category.next());
    }

    pub fn set_category(&mut self, category: Category) {
        self.category = category;
        self.selected = 0;
        self.scroll_index = 0;
        log::debug!("Browsing {}", category.as_str());
    }

    pub fn selected_course(&self) -> Option<&'static Course> {
        self.courses().get(self.selected)
    }

    /// Rows currently in view
    pub fn visible(&self) -> Vec<BrowserRow> {
        self.courses()
            .iter()
            .enumerate()
            .skip(self.scroll_index)
            .take(self.visible_rows)
            .map(|(index, course)| BrowserRow {
                index,
                course,
                selected: index == self.selected,
            })
            .collect()
    }
}
