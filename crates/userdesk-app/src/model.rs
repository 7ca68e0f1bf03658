// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};

use crate::ids::UserId;

pub const MAX_USER_TIER: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserStatus {
    Active,
    Inactive,
    Pending,
    Blacklisted,
}

impl UserStatus {
    pub const ALL: [Self; 4] = [
        Self::Active,
        Self::Inactive,
        Self::Pending,
        Self::Blacklisted,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Pending => "Pending",
            Self::Blacklisted => "Blacklisted",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Active" => Some(Self::Active),
            "Inactive" => Some(Self::Inactive),
            "Pending" => Some(Self::Pending),
            "Blacklisted" => Some(Self::Blacklisted),
            _ => None,
        }
    }
}

/// A user row as listed in the users table and handed off to the detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub organization: String,
    pub username: String,
    pub email: String,
    pub phone_number: String,
    pub date_joined: String,
    pub status: UserStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guarantor {
    pub full_name: String,
    pub phone_number: String,
    pub email: String,
    pub relationship: String,
}

/// Display-only fields shown on the detail page on top of the listed user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileExtras {
    pub account_balance: String,
    pub account_number: String,
    pub bank: String,
    pub bvn: String,
    pub gender: String,
    pub marital_status: String,
    pub children: String,
    pub type_of_residence: String,
    pub level_of_education: String,
    pub employment_status: String,
    pub sector_of_employment: String,
    pub duration_of_employment: String,
    pub office_email: String,
    pub monthly_income: String,
    pub loan_repayment: String,
    pub twitter: String,
    pub facebook: String,
    pub instagram: String,
    pub guarantors: [Guarantor; 2],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDetails {
    pub user: User,
    pub extras: UserProfileExtras,
    pub tier: u8,
    /// False when the record was synthesized because nothing was handed off.
    pub from_store: bool,
}

impl UserDetails {
    /// Labelled fields that must never render blank on the detail page.
    pub fn required_fields(&self) -> Vec<(&'static str, &str)> {
        let user = &self.user;
        let extras = &self.extras;
        let mut fields = vec![
            ("id", user.id.as_str()),
            ("organization", user.organization.as_str()),
            ("username", user.username.as_str()),
            ("email", user.email.as_str()),
            ("phone number", user.phone_number.as_str()),
            ("date joined", user.date_joined.as_str()),
            ("status", user.status.as_str()),
            ("account balance", extras.account_balance.as_str()),
            ("account number", extras.account_number.as_str()),
            ("bank", extras.bank.as_str()),
            ("bvn", extras.bvn.as_str()),
            ("gender", extras.gender.as_str()),
            ("marital status", extras.marital_status.as_str()),
            ("children", extras.children.as_str()),
            ("type of residence", extras.type_of_residence.as_str()),
            ("level of education", extras.level_of_education.as_str()),
            ("employment status", extras.employment_status.as_str()),
            ("sector of employment", extras.sector_of_employment.as_str()),
            (
                "duration of employment",
                extras.duration_of_employment.as_str(),
            ),
            ("office email", extras.office_email.as_str()),
            ("monthly income", extras.monthly_income.as_str()),
            ("loan repayment", extras.loan_repayment.as_str()),
            ("twitter", extras.twitter.as_str()),
            ("facebook", extras.facebook.as_str()),
            ("instagram", extras.instagram.as_str()),
        ];
        for guarantor in &extras.guarantors {
            fields.push(("guarantor name", guarantor.full_name.as_str()));
            fields.push(("guarantor phone", guarantor.phone_number.as_str()));
            fields.push(("guarantor email", guarantor.email.as_str()));
            fields.push(("guarantor relationship", guarantor.relationship.as_str()));
        }
        fields
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailTab {
    #[default]
    General,
    Documents,
    Bank,
    Loans,
    Savings,
    AppAndSystem,
}

impl DetailTab {
    pub const ALL: [Self; 6] = [
        Self::General,
        Self::Documents,
        Self::Bank,
        Self::Loans,
        Self::Savings,
        Self::AppAndSystem,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::General => "General Details",
            Self::Documents => "Documents",
            Self::Bank => "Bank Details",
            Self::Loans => "Loans",
            Self::Savings => "Savings",
            Self::AppAndSystem => "App and System",
        }
    }

    pub fn rotate(self, delta: isize) -> Self {
        let current = Self::ALL
            .iter()
            .position(|tab| *tab == self)
            .unwrap_or(0) as isize;
        let len = Self::ALL.len() as isize;
        Self::ALL[(current + delta).rem_euclid(len) as usize]
    }
}
