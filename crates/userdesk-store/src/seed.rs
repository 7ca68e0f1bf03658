// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use time::macros::format_description;
use time::{Date, Month, PrimitiveDateTime, Time};
use userdesk_app::{User, UserId, UserStatus};

pub const DEFAULT_USER_COUNT: usize = 500;

const ORGANIZATIONS: [&str; 3] = ["Lendsqr", "Lendstar", "Irorun"];
const NAMES: [&str; 7] = [
    "Adedeji",
    "Debby Ogana",
    "Grace Effiom",
    "Tosin Dokunmu",
    "Peter Williams",
    "John Doe",
    "Jane Smith",
];
const JOIN_YEAR: i32 = 2020;

#[derive(Debug, Clone)]
struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    fn new(seed: u64) -> Self {
        let mut state = seed ^ 0x9E37_79B9_7F4A_7C15;
        if state == 0 {
            state = 0xA409_3822_299F_31D0;
        }
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);

        let mut x = self.state;
        x ^= x >> 13;
        x ^= x << 7;
        x ^= x >> 17;
        x
    }

    fn int_n(&mut self, n: usize) -> usize {
        if n <= 1 {
            return 0;
        }
        (self.next_u64() % (n as u64)) as usize
    }
}

/// Reproducible mock users standing in for a users API.
#[derive(Debug, Clone)]
pub struct UserFaker {
    rng: DeterministicRng,
}

impl UserFaker {
    pub fn new(seed: u64) -> Self {
        let normalized = if seed == 0 { 1 } else { seed };
        Self {
            rng: DeterministicRng::new(normalized),
        }
    }

    /// The user at 1-based position `index`; ids and emails follow the index.
    pub fn user(&mut self, index: usize) -> Result<User> {
        Ok(User {
            id: UserId::new(format!("user-{index}")),
            organization: self.pick(&ORGANIZATIONS).to_owned(),
            username: self.pick(&NAMES).to_owned(),
            email: format!("user{index}@example.com"),
            phone_number: format!("080{}", 10_000_000 + self.rng.int_n(90_000_000)),
            date_joined: self.join_date()?,
            status: self.pick(&UserStatus::ALL),
        })
    }

    fn join_date(&mut self) -> Result<String> {
        let month_index = self.rng.int_n(12) as u8 + 1;
        let day = self.rng.int_n(28) as u8 + 1;
        let month = Month::try_from(month_index)
            .with_context(|| format!("month index {month_index} out of range"))?;
        let date = Date::from_calendar_date(JOIN_YEAR, month, day)
            .with_context(|| format!("build join date {JOIN_YEAR}-{month_index}-{day}"))?;
        let format = format_description!(
            "[month repr:short] [day padding:none], [year], [hour repr:12 padding:none]:[minute] [period]"
        );
        PrimitiveDateTime::new(date, Time::MIDNIGHT)
            .format(&format)
            .context("format join date")
    }

    fn pick<T: Copy>(&mut self, values: &[T]) -> T {
        values[self.rng.int_n(values.len())]
    }
}

pub fn generate_users(count: usize, seed: u64) -> Result<Vec<User>> {
    let mut faker = UserFaker::new(seed);
    (1..=count).map(|index| faker.user(index)).collect()
}

#[cfg(test)]
mod tests {
    use super::{UserFaker, generate_users};
    use anyhow::Result;

    #[test]
    fn join_dates_use_short_month_and_twelve_hour_clock() -> Result<()> {
        let user = UserFaker::new(3).user(1)?;
        assert!(user.date_joined.contains(", 2020, 12:00 AM"), "got {}", user.date_joined);
        Ok(())
    }

    #[test]
    fn phone_numbers_have_eleven_digits() -> Result<()> {
        for user in generate_users(50, 9)? {
            assert_eq!(user.phone_number.len(), 11);
            assert!(user.phone_number.starts_with("080"));
        }
        Ok(())
    }

    #[test]
    fn seed_zero_is_normalized() -> Result<()> {
        assert_eq!(generate_users(5, 0)?, generate_users(5, 1)?);
        Ok(())
    }
}
