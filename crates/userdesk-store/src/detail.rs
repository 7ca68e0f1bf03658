// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use userdesk_app::{
    Guarantor, User, UserDetails, UserId, UserProfileExtras, UserStatus,
};

use crate::local::{LocalStore, load_stashed_user};

const DEFAULT_TIER: u8 = 1;

/// Resolves the detail page for `id`: the handed-off user when there is one,
/// otherwise a placeholder under the same id.
pub fn load_user_details(store: &dyn LocalStore, id: &UserId) -> UserDetails {
    match load_stashed_user(store, id) {
        Some(user) => {
            let extras = profile_extras(&user);
            let details = UserDetails {
                user,
                extras,
                tier: DEFAULT_TIER,
                from_store: true,
            };
            let blank: Vec<&str> = details
                .required_fields()
                .into_iter()
                .filter(|(_, value)| value.trim().is_empty())
                .map(|(label, _)| label)
                .collect();
            if !blank.is_empty() {
                tracing::warn!(user = %id, ?blank, "stored user has blank fields");
            }
            details
        }
        None => {
            tracing::info!(user = %id, "no stored user; showing placeholder details");
            placeholder_details(id)
        }
    }
}

pub fn placeholder_details(id: &UserId) -> UserDetails {
    let user = User {
        id: id.clone(),
        organization: "Lendsqr".to_owned(),
        username: "Grace Effiom".to_owned(),
        email: "grace@gmail.com".to_owned(),
        phone_number: "07060780922".to_owned(),
        date_joined: "May 15, 2020 10:00 AM".to_owned(),
        status: UserStatus::Active,
    };
    let extras = profile_extras(&user);
    UserDetails {
        user,
        extras,
        tier: DEFAULT_TIER,
        from_store: false,
    }
}

/// Supplementary profile fields. The mock profile is identical for every user.
pub fn profile_extras(_user: &User) -> UserProfileExtras {
    UserProfileExtras {
        account_balance: "200,000.00".to_owned(),
        account_number: "9912345678".to_owned(),
        bank: "Providus Bank".to_owned(),
        bvn: "07060780922".to_owned(),
        gender: "Female".to_owned(),
        marital_status: "Single".to_owned(),
        children: "None".to_owned(),
        type_of_residence: "Parent's Apartment".to_owned(),
        level_of_education: "B.Sc".to_owned(),
        employment_status: "Employed".to_owned(),
        sector_of_employment: "FinTech".to_owned(),
        duration_of_employment: "2 years".to_owned(),
        office_email: "grace@lendsqr.com".to_owned(),
        monthly_income: "₦200,000.00- ₦400,000.00".to_owned(),
        loan_repayment: "40,000".to_owned(),
        twitter: "@grace_effiom".to_owned(),
        facebook: "Grace Effiom".to_owned(),
        instagram: "@grace_effiom".to_owned(),
        guarantors: [default_guarantor(), default_guarantor()],
    }
}

fn default_guarantor() -> Guarantor {
    Guarantor {
        full_name: "Debby Ogana".to_owned(),
        phone_number: "07060780922".to_owned(),
        email: "debby@gmail.com".to_owned(),
        relationship: "Sister".to_owned(),
    }
}
