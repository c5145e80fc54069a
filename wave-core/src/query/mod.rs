//! Query pipeline: filter, then sort, then paginate.
//!
//! Every function here is pure. Callers re-run [`project`] whenever the
//! collection or the query changes; at tens to hundreds of rows there is
//! nothing worth caching.

pub mod filtering;
pub mod pagination;
pub mod sorting;
pub mod view;

pub use filtering::filter_users;
pub use pagination::{clamp_page, paginate, total_pages, visible_range};
pub use sorting::{
    SortConfig, SortDirection, SortKey, UnknownSortKey, natural_cmp,
    sort_users,
};
pub use view::UsersListView;

use wave_config::constants::DEFAULT_PAGE_SIZE;
use wave_model::User;

/// Parameters for one render of the user list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserQuery {
    pub search_term: String,
    pub sort: SortConfig,
    /// 1-based.
    pub page: usize,
    pub page_size: usize,
}

impl Default for UserQuery {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            sort: SortConfig::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of the arranged collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPage {
    pub users: Vec<User>,
    /// Matches across all pages.
    pub total_count: usize,
    pub total_pages: usize,
    pub page: usize,
    /// 1-based inclusive range of the rows on this page.
    pub range: Option<(usize, usize)>,
}

impl UserPage {
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Footer text, e.g. `Showing 11-20 of 25 users`.
    pub fn summary(&self) -> Option<String> {
        self.range.map(|(start, end)| {
            format!("Showing {start}-{end} of {} users", self.total_count)
        })
    }
}

/// Filter and sort without paginating.
pub fn arrange<'a>(users: &'a [User], query: &UserQuery) -> Vec<&'a User> {
    let mut rows = filter_users(users, &query.search_term);
    sort_users(&mut rows, query.sort);
    rows
}

pub fn project(users: &[User], query: &UserQuery) -> UserPage {
    let rows = arrange(users, query);
    let total_count = rows.len();

    UserPage {
        users: paginate(&rows, query.page, query.page_size)
            .iter()
            .map(|user| (*user).clone())
            .collect(),
        total_count,
        total_pages: total_pages(total_count, query.page_size),
        page: query.page,
        range: visible_range(total_count, query.page, query.page_size),
    }
}
