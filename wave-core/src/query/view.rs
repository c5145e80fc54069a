//! Presentation-side owner of the list query.
//!
//! Changing the search or the sort returns to page 1, and page navigation
//! never leaves `1..=total_pages`.

use wave_config::PaginationConfig;
use wave_model::User;

use super::pagination::clamp_page;
use super::sorting::{SortConfig, SortKey};
use super::{UserPage, UserQuery, arrange, project};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsersListView {
    query: UserQuery,
}

impl UsersListView {
    pub fn new(page_size: usize) -> Self {
        Self {
            query: UserQuery {
                page_size,
                ..UserQuery::default()
            },
        }
    }

    pub fn from_config(config: &PaginationConfig) -> Self {
        Self::new(config.page_size)
    }

    pub fn query(&self) -> &UserQuery {
        &self.query
    }

    pub fn search_term(&self) -> &str {
        &self.query.search_term
    }

    pub fn sort(&self) -> SortConfig {
        self.query.sort
    }

    pub fn page(&self) -> usize {
        self.query.page
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.query.search_term = term.into();
        self.query.page = 1;
    }

    pub fn clear_search(&mut self) {
        self.set_search_term(String::new());
    }

    /// Header click on `key`; see [`SortConfig::toggle`].
    pub fn sort_by(&mut self, key: SortKey) {
        self.query.sort.toggle(key);
        self.query.page = 1;
    }

    pub fn next_page(&mut self, total_pages: usize) {
        self.query.page = clamp_page(self.query.page + 1, total_pages);
    }

    pub fn previous_page(&mut self) {
        self.query.page = self.query.page.saturating_sub(1).max(1);
    }

    pub fn go_to_page(&mut self, page: usize, total_pages: usize) {
        self.query.page = clamp_page(page, total_pages);
    }

    /// Project `users`, pulling the page back in range if the collection
    /// shrank since the last navigation.
    pub fn render(&self, users: &[User]) -> UserPage {
        let total = super::total_pages(
            arrange(users, &self.query).len(),
            self.query.page_size,
        );
        let query = UserQuery {
            page: clamp_page(self.query.page, total),
            ..self.query.clone()
        };
        project(users, &query)
    }
}

#[cfg(test)]
mod tests {
    use wave_model::{Address, Company, UserId};

    use super::*;
    use crate::query::SortDirection;

    fn users(count: u64) -> Vec<User> {
        (1..=count)
            .map(|n| User {
                id: UserId(n),
                name: format!("user{n}"),
                username: format!("user{n}"),
                email: format!("user{n}@example.com"),
                address: Address::default(),
                phone: String::new(),
                website: String::new(),
                company: Company::default(),
            })
            .collect()
    }

    #[test]
    fn search_and_sort_reset_page() {
        let mut view = UsersListView::new(10);
        view.go_to_page(3, 3);
        view.set_search_term("user");
        assert_eq!(view.page(), 1);

        view.go_to_page(2, 3);
        view.sort_by(SortKey::Email);
        assert_eq!(view.page(), 1);
        assert_eq!(view.sort().key, SortKey::Email);
        assert_eq!(view.sort().direction, SortDirection::Ascending);

        view.go_to_page(2, 3);
        view.clear_search();
        assert_eq!(view.page(), 1);
    }

    #[test]
    fn navigation_stays_in_bounds() {
        let mut view = UsersListView::new(10);
        view.previous_page();
        assert_eq!(view.page(), 1);

        for _ in 0..5 {
            view.next_page(3);
        }
        assert_eq!(view.page(), 3);
    }

    #[test]
    fn render_clamps_after_collection_shrinks() {
        let mut view = UsersListView::new(10);
        view.go_to_page(3, 3);

        let page = view.render(&users(12));

        assert_eq!(page.page, 2);
        assert_eq!(page.users.len(), 2);
    }
}
