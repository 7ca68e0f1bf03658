// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::fmt;

const MAX_VISIBLE_PAGES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum PageSize {
    Ten,
    Twenty,
    Fifty,
    #[default]
    Hundred,
}

impl PageSize {
    pub const ALL: [Self; 4] = [Self::Ten, Self::Twenty, Self::Fifty, Self::Hundred];

    pub const fn get(self) -> usize {
        match self {
            Self::Ten => 10,
            Self::Twenty => 20,
            Self::Fifty => 50,
            Self::Hundred => 100,
        }
    }

    pub fn from_rows(rows: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.get() == rows)
    }

    pub fn rotate(self, delta: isize) -> Self {
        let current = Self::ALL
            .iter()
            .position(|size| *size == self)
            .unwrap_or(0) as isize;
        let len = Self::ALL.len() as isize;
        Self::ALL[(current + delta).rem_euclid(len) as usize]
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSizeError {
    Unsupported(usize),
}

impl fmt::Display for PageSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported(rows) => {
                write!(f, "unsupported page size {rows}; use one of 10, 20, 50 or 100")
            }
        }
    }
}

impl std::error::Error for PageSizeError {}

impl TryFrom<usize> for PageSize {
    type Error = PageSizeError;

    fn try_from(rows: usize) -> Result<Self, Self::Error> {
        Self::from_rows(rows).ok_or(PageSizeError::Unsupported(rows))
    }
}

/// One entry of the page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageToken {
    Page(usize),
    Ellipsis,
}

impl fmt::Display for PageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page(page) => write!(f, "{page}"),
            Self::Ellipsis => f.write_str("..."),
        }
    }
}

pub fn total_pages(count: usize, size: usize) -> usize {
    if size == 0 {
        return 0;
    }
    count.div_ceil(size)
}

/// Rows `[(page-1)*size, page*size)` clipped to `items`. Page 0 reads as page 1.
pub fn page_slice<T>(items: &[T], size: usize, page: usize) -> &[T] {
    let start = page.max(1).saturating_sub(1).saturating_mul(size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(size).min(items.len());
    &items[start..end]
}

pub fn page_window(current: usize, total: usize) -> Vec<PageToken> {
    if total <= MAX_VISIBLE_PAGES {
        return (1..=total).map(PageToken::Page).collect();
    }

    if current <= 3 {
        let mut tokens: Vec<PageToken> = (1..=4).map(PageToken::Page).collect();
        tokens.push(PageToken::Ellipsis);
        tokens.push(PageToken::Page(total));
        tokens
    } else if current >= total - 2 {
        let mut tokens = vec![PageToken::Page(1), PageToken::Ellipsis];
        tokens.extend((total - 3..=total).map(PageToken::Page));
        tokens
    } else {
        vec![
            PageToken::Page(1),
            PageToken::Ellipsis,
            PageToken::Page(current - 1),
            PageToken::Page(current),
            PageToken::Page(current + 1),
            PageToken::Ellipsis,
            PageToken::Page(total),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub size: PageSize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            size: PageSize::default(),
        }
    }
}

impl Pagination {
    pub fn total_pages(&self, count: usize) -> usize {
        total_pages(count, self.size.get())
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        page_slice(items, self.size.get(), self.page)
    }

    pub fn window(&self, count: usize) -> Vec<PageToken> {
        page_window(self.page, self.total_pages(count))
    }

    /// Keeps `page` inside `[1, max(1, total_pages)]`.
    pub fn clamp(&mut self, count: usize) -> bool {
        let last = self.total_pages(count).max(1);
        let clamped = self.page.clamp(1, last);
        let changed = clamped != self.page;
        self.page = clamped;
        changed
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self, count: usize) -> bool {
        self.page < self.total_pages(count)
    }
}
