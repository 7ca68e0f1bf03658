// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::{User, UserStatus};

/// Headline counts for the users page cards.
///
/// Loan and savings counts stay `None`: user rows carry no loan or savings
/// data to derive them from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UserStats {
    pub total: usize,
    pub active: usize,
    pub with_loans: Option<usize>,
    pub with_savings: Option<usize>,
}

impl UserStats {
    pub fn from_users(users: &[User]) -> Self {
        Self {
            total: users.len(),
            active: users
                .iter()
                .filter(|user| user.status == UserStatus::Active)
                .count(),
            with_loans: None,
            with_savings: None,
        }
    }

    pub fn cards(&self) -> [(&'static str, String); 4] {
        [
            ("USERS", group_thousands(self.total)),
            ("ACTIVE USERS", group_thousands(self.active)),
            ("USERS WITH LOANS", optional_count(self.with_loans)),
            ("USERS WITH SAVINGS", optional_count(self.with_savings)),
        ]
    }
}

fn optional_count(value: Option<usize>) -> String {
    value.map_or_else(|| "n/a".to_owned(), group_thousands)
}

pub fn group_thousands(value: usize) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{UserStats, group_thousands};
    use crate::{User, UserId, UserStatus};

    #[test]
    fn counts_active_users() {
        let users: Vec<User> = [
            UserStatus::Active,
            UserStatus::Pending,
            UserStatus::Active,
        ]
        .into_iter()
        .enumerate()
        .map(|(index, status)| User {
            id: UserId::new(format!("user-{index}")),
            organization: "Lendsqr".to_owned(),
            username: "Jane Smith".to_owned(),
            email: "jane@example.com".to_owned(),
            phone_number: "08011112222".to_owned(),
            date_joined: "Jan 2, 2020, 12:00 AM".to_owned(),
            status,
        })
        .collect();

        let stats = UserStats::from_users(&users);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.active, 2);
        assert_eq!(stats.cards()[2].1, "n/a");
    }

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(2453), "2,453");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }
}
