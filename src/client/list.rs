//! Read-model for the user table.
//!
//! The table never stores a filtered or sorted copy. It keeps the full record
//! set plus the search term and sort spec, and [`derive_view`] recomputes the
//! rows from those three inputs whenever they are needed.

use std::cmp::Ordering;

use uuid::Uuid;

use crate::core::models::user::User;
use crate::core::validation::Field;

/// Columns the search box looks at.
pub const SEARCH_FIELDS: [Field; 3] = [Field::Name, Field::Email, Field::State];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortSpec {
    pub column: Field,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn ascending(column: Field) -> Self {
        SortSpec {
            column,
            direction: SortDirection::Ascending,
        }
    }

    /// Result of clicking `column` while `current` is active: the same column
    /// flips from ascending to descending, anything else starts ascending.
    pub fn after_click(current: Option<SortSpec>, column: Field) -> SortSpec {
        match current {
            Some(spec) if spec.column == column && spec.direction == SortDirection::Ascending => SortSpec {
                column,
                direction: SortDirection::Descending,
            },
            _ => SortSpec::ascending(column),
        }
    }

    fn compare(&self, a: &User, b: &User) -> Ordering {
        let ordering = a.get(self.column).cmp(b.get(self.column));
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Case-insensitive substring match on name, email or state.
pub fn matches_search(user: &User, term: &str) -> bool {
    let needle = term.to_lowercase();
    SEARCH_FIELDS
        .iter()
        .any(|&field| user.get(field).to_lowercase().contains(&needle))
}

pub fn filter_users(users: &[User], term: &str) -> Vec<User> {
    if term.is_empty() {
        return users.to_vec();
    }
    users.iter().filter(|user| matches_search(user, term)).cloned().collect()
}

/// Stable: rows with equal keys keep their relative order in both directions.
pub fn sort_users(users: &mut [User], spec: SortSpec) {
    users.sort_by(|a, b| spec.compare(a, b));
}

pub fn derive_view(users: &[User], term: &str, sort: Option<SortSpec>) -> Vec<User> {
    let mut rows = filter_users(users, term);
    if let Some(spec) = sort {
        sort_users(&mut rows, spec);
    }
    rows
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Failed(String),
}

#[derive(Clone, Debug, Default)]
pub struct UserList {
    users: Vec<User>,
    search_term: String,
    sort: Option<SortSpec>,
    status: LoadStatus,
}

impl UserList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_loading(&mut self) {
        self.status = LoadStatus::Loading;
    }

    pub fn loaded(&mut self, users: Vec<User>) {
        self.users = users;
        self.status = LoadStatus::Idle;
    }

    /// Keeps whatever rows were already loaded.
    pub fn failed(&mut self, message: impl Into<String>) {
        self.status = LoadStatus::Failed(message.into());
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn click_column(&mut self, column: Field) -> SortSpec {
        let spec = SortSpec::after_click(self.sort, column);
        self.sort = Some(spec);
        spec
    }

    /// Drops a deleted record locally, without a re-fetch.
    pub fn remove(&mut self, user_id: Uuid) -> bool {
        let before = self.users.len();
        self.users.retain(|user| user.id != user_id);
        self.users.len() != before
    }

    pub fn view(&self) -> Vec<User> {
        derive_view(&self.users, &self.search_term, self.sort)
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn sort(&self) -> Option<SortSpec> {
        self.sort
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// Placeholder text for an empty table.
    pub fn empty_message(&self) -> &'static str {
        if self.search_term.is_empty() {
            "Please add users to get started"
        } else {
            "No users match your search."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str, email: &str, phone: &str, state: &str) -> User {
        User {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            state: state.to_string(),
        }
    }

    fn sample() -> Vec<User> {
        vec![
            user("Jane Doe", "jane@gmail.com", "9876543210", "Kerala"),
            user("Arjun Rao", "arjun@gmail.com", "9123456780", "Goa"),
            user("Meera Iyer", "meera@gmail.com", "9000000001", "Kerala"),
            user("Bob Stone", "bob@gmail.com", "9555555555", "Assam"),
        ]
    }

    fn names(rows: &[User]) -> Vec<&str> {
        rows.iter().map(|u| u.name.as_str()).collect()
    }

    #[test]
    fn empty_term_keeps_full_set() {
        let users = sample();
        assert_eq!(filter_users(&users, ""), users);
        assert_eq!(derive_view(&users, "", None), users);
    }

    #[test]
    fn search_is_case_insensitive() {
        let users = sample();
        assert_eq!(names(&filter_users(&users, "jane")), vec!["Jane Doe"]);
        assert_eq!(names(&filter_users(&users, "JANE")), vec!["Jane Doe"]);
    }

    #[test]
    fn search_matches_any_of_name_email_state() {
        let users = sample();
        assert_eq!(names(&filter_users(&users, "kerala")), vec!["Jane Doe", "Meera Iyer"]);
        assert_eq!(names(&filter_users(&users, "bob@")), vec!["Bob Stone"]);
        // phone is not searched
        assert!(filter_users(&users, "9876").is_empty());
    }

    #[test]
    fn clicking_same_column_toggles_direction() {
        let mut list = UserList::new();
        list.loaded(sample());

        list.click_column(Field::Name);
        assert_eq!(
            names(&list.view()),
            vec!["Arjun Rao", "Bob Stone", "Jane Doe", "Meera Iyer"]
        );

        list.click_column(Field::Name);
        assert_eq!(
            names(&list.view()),
            vec!["Meera Iyer", "Jane Doe", "Bob Stone", "Arjun Rao"]
        );

        let spec = list.click_column(Field::Name);
        assert_eq!(spec.direction, SortDirection::Ascending);
    }

    #[test]
    fn switching_column_starts_ascending() {
        let mut list = UserList::new();
        list.loaded(sample());
        list.click_column(Field::Name);
        list.click_column(Field::Name);
        let spec = list.click_column(Field::Phone);
        assert_eq!(spec, SortSpec::ascending(Field::Phone));
        assert_eq!(list.view()[0].phone, "9000000001");
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let users = sample();
        let asc = derive_view(&users, "", Some(SortSpec::ascending(Field::State)));
        assert_eq!(
            names(&asc),
            vec!["Bob Stone", "Arjun Rao", "Jane Doe", "Meera Iyer"]
        );

        let desc = derive_view(
            &users,
            "",
            Some(SortSpec {
                column: Field::State,
                direction: SortDirection::Descending,
            }),
        );
        // the two Kerala rows keep their original relative order
        assert_eq!(
            names(&desc),
            vec!["Jane Doe", "Meera Iyer", "Arjun Rao", "Bob Stone"]
        );
    }

    #[test]
    fn sort_survives_search_changes() {
        let mut list = UserList::new();
        list.loaded(sample());
        list.click_column(Field::Name);
        list.click_column(Field::Name);

        list.set_search_term("kerala");
        assert_eq!(names(&list.view()), vec!["Meera Iyer", "Jane Doe"]);

        list.set_search_term("");
        assert_eq!(names(&list.view())[0], "Meera Iyer");
    }

    #[test]
    fn remove_drops_row_from_every_view() {
        let mut list = UserList::new();
        let users = sample();
        let jane = users[0].id;
        list.loaded(users);
        list.set_search_term("kerala");

        assert!(list.remove(jane));
        assert_eq!(list.users().len(), 3);
        assert_eq!(names(&list.view()), vec!["Meera Iyer"]);
        assert!(!list.remove(jane));
    }

    #[test]
    fn status_and_empty_message() {
        let mut list = UserList::new();
        assert_eq!(list.status(), &LoadStatus::Idle);
        assert_eq!(list.empty_message(), "Please add users to get started");

        list.begin_loading();
        assert_eq!(list.status(), &LoadStatus::Loading);
        list.failed("Failed to fetch users");
        assert_eq!(list.status(), &LoadStatus::Failed("Failed to fetch users".to_string()));

        list.set_search_term("zzz");
        assert_eq!(list.empty_message(), "No users match your search.");
    }
}
