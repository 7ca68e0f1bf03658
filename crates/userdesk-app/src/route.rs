// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::UserId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Users,
    UserDetail(UserId),
    /// A path with no screen behind it, such as a sidebar entry that is not built yet.
    Unknown(String),
}

impl Route {
    /// Resolves a path, following the `/` and `/dashboard` redirects.
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        let normalized = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };

        match normalized {
            "" | "/" | "/login" => Self::Login,
            "/dashboard" | "/users" => Self::Users,
            other => match other.strip_prefix("/users/") {
                Some(id) if !id.is_empty() && !id.contains('/') => {
                    Self::UserDetail(UserId::from(id))
                }
                _ => Self::Unknown(other.to_owned()),
            },
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Login => "/login".to_owned(),
            Self::Users => "/users".to_owned(),
            Self::UserDetail(id) => format!("/users/{id}"),
            Self::Unknown(path) => path.clone(),
        }
    }

    pub fn user_detail(id: &UserId) -> Self {
        Self::UserDetail(id.clone())
    }
}
