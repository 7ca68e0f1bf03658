// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::{User, UserStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Organization,
    Username,
    Email,
    Date,
    PhoneNumber,
    Status,
}

impl FilterField {
    /// Order of the inputs in the filter panel.
    pub const ALL: [Self; 6] = [
        Self::Organization,
        Self::Username,
        Self::Email,
        Self::Date,
        Self::PhoneNumber,
        Self::Status,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Organization => "Organization",
            Self::Username => "Username",
            Self::Email => "Email",
            Self::Date => "Date",
            Self::PhoneNumber => "Phone Number",
            Self::Status => "Status",
        }
    }

    /// Organization and status are picked from a fixed list rather than typed.
    pub const fn is_choice(self) -> bool {
        matches!(self, Self::Organization | Self::Status)
    }
}

/// Per-field constraints; an empty value leaves the field unconstrained.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserFilter {
    pub organization: String,
    pub username: String,
    pub email: String,
    pub date: String,
    pub phone_number: String,
    pub status: String,
}

impl UserFilter {
    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::Organization => &self.organization,
            FilterField::Username => &self.username,
            FilterField::Email => &self.email,
            FilterField::Date => &self.date,
            FilterField::PhoneNumber => &self.phone_number,
            FilterField::Status => &self.status,
        }
    }

    pub fn set(&mut self, field: FilterField, value: impl Into<String>) {
        let slot = match field {
            FilterField::Organization => &mut self.organization,
            FilterField::Username => &mut self.username,
            FilterField::Email => &mut self.email,
            FilterField::Date => &mut self.date,
            FilterField::PhoneNumber => &mut self.phone_number,
            FilterField::Status => &mut self.status,
        };
        *slot = value.into();
    }

    pub fn is_empty(&self) -> bool {
        FilterField::ALL
            .iter()
            .all(|field| self.get(*field).is_empty())
    }

    pub fn active_fields(&self) -> Vec<FilterField> {
        FilterField::ALL
            .into_iter()
            .filter(|field| !self.get(*field).is_empty())
            .collect()
    }

    pub fn matches(&self, user: &User) -> bool {
        contains_ignore_case(&user.organization, &self.organization)
            && contains_ignore_case(&user.username, &self.username)
            && contains_ignore_case(&user.email, &self.email)
            && (self.phone_number.is_empty() || user.phone_number.contains(&self.phone_number))
            && (self.status.is_empty()
                || UserStatus::parse(&self.status) == Some(user.status))
            && (self.date.is_empty() || user.date_joined.contains(&self.date))
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Users satisfying every non-empty constraint, in input order.
pub fn apply_filter<'a>(users: &'a [User], filter: &UserFilter) -> Vec<&'a User> {
    if filter.is_empty() {
        return users.iter().collect();
    }
    users.iter().filter(|user| filter.matches(user)).collect()
}

/// Organizations in first-seen order, for the organization chooser.
pub fn distinct_organizations(users: &[User]) -> Vec<String> {
    let mut seen = Vec::<String>::new();
    for user in users {
        if !seen.iter().any(|org| org == &user.organization) {
            seen.push(user.organization.clone());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::{FilterField, UserFilter, apply_filter, distinct_organizations};
    use crate::{User, UserId, UserStatus};

    fn user(id: &str, organization: &str, username: &str, status: UserStatus) -> User {
        User {
            id: UserId::from(id),
            organization: organization.to_owned(),
            username: username.to_owned(),
            email: format!("{id}@example.com"),
            phone_number: "08012345678".to_owned(),
            date_joined: "Apr 30, 2020, 12:00 AM".to_owned(),
            status,
        }
    }

    fn sample() -> Vec<User> {
        vec![
            user("user-1", "Lendsqr", "Grace Effiom", UserStatus::Active),
            user("user-2", "Irorun", "Debby Ogana", UserStatus::Inactive),
            user("user-3", "Lendstar", "Tosin Dokunmu", UserStatus::Active),
            user("user-4", "Lendsqr", "John Doe", UserStatus::Blacklisted),
        ]
    }

    #[test]
    fn empty_filter_is_identity() {
        let users = sample();
        let filtered = apply_filter(&users, &UserFilter::default());
        assert_eq!(filtered.len(), users.len());
        assert!(filtered.iter().zip(&users).all(|(a, b)| *a == b));
    }

    #[test]
    fn text_fields_match_case_insensitively() {
        let users = sample();
        let mut filter = UserFilter::default();
        filter.set(FilterField::Organization, "LENDS");
        let ids: Vec<&str> = apply_filter(&users, &filter)
            .iter()
            .map(|u| u.id.as_str())
            .collect();
        assert_eq!(ids, vec!["user-1", "user-3", "user-4"]);
    }

    #[test]
    fn fields_combine_with_and() {
        let users = sample();
        let mut filter = UserFilter::default();
        filter.set(FilterField::Organization, "lendsqr");
        filter.set(FilterField::Status, "Active");
        let filtered = apply_filter(&users, &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id.as_str(), "user-1");
    }

    #[test]
    fn status_requires_exact_label() {
        let users = sample();
        let mut filter = UserFilter::default();
        filter.set(FilterField::Status, "active");
        assert!(apply_filter(&users, &filter).is_empty());
    }

    #[test]
    fn phone_and_date_are_case_sensitive_substrings() {
        let users = sample();
        let mut filter = UserFilter::default();
        filter.set(FilterField::Date, "apr 30");
        assert!(apply_filter(&users, &filter).is_empty());

        filter.set(FilterField::Date, "Apr 30");
        filter.set(FilterField::PhoneNumber, "234");
        assert_eq!(apply_filter(&users, &filter).len(), 4);
    }

    #[test]
    fn filtered_output_is_a_subsequence() {
        let users = sample();
        let mut filter = UserFilter::default();
        filter.set(FilterField::Username, "o");
        let filtered = apply_filter(&users, &filter);
        let mut cursor = users.iter();
        for kept in filtered {
            assert!(cursor.any(|candidate| candidate == kept));
        }
    }

    #[test]
    fn active_fields_lists_constrained_fields_in_panel_order() {
        let mut filter = UserFilter::default();
        filter.set(FilterField::Status, "Pending");
        filter.set(FilterField::Email, "gmail");
        assert_eq!(
            filter.active_fields(),
            vec![FilterField::Email, FilterField::Status]
        );
    }

    #[test]
    fn organizations_are_distinct_in_first_seen_order() {
        assert_eq!(
            distinct_organizations(&sample()),
            vec!["Lendsqr", "Irorun", "Lendstar"]
        );
    }
}
