// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub const APP_VERSION_LABEL: &str = "v1.2.0";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const ORG_SWITCH_LABEL: &str = "Switch Organization";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarItem {
    pub name: &'static str,
    pub path: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarSection {
    Customers,
    Businesses,
    Settings,
}

impl SidebarSection {
    pub const ALL: [Self; 3] = [Self::Customers, Self::Businesses, Self::Settings];

    pub const fn title(self) -> &'static str {
        match self {
            Self::Customers => "CUSTOMERS",
            Self::Businesses => "BUSINESSES",
            Self::Settings => "SETTINGS",
        }
    }

    pub const fn items(self) -> &'static [SidebarItem] {
        match self {
            Self::Customers => CUSTOMERS,
            Self::Businesses => BUSINESSES,
            Self::Settings => SETTINGS,
        }
    }

    /// Customer entries also light up for nested paths such as `/users/:id`.
    pub fn is_active(self, item: &SidebarItem, current_path: &str) -> bool {
        if current_path == item.path {
            return true;
        }
        self == Self::Customers
            && current_path
                .strip_prefix(item.path)
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

const CUSTOMERS: &[SidebarItem] = &[
    SidebarItem { name: "Users", path: "/users" },
    SidebarItem { name: "Guarantors", path: "/guarantors" },
    SidebarItem { name: "Loans", path: "/loans" },
    SidebarItem { name: "Decision Models", path: "/decision-models" },
    SidebarItem { name: "Savings", path: "/savings" },
    SidebarItem { name: "Loan Requests", path: "/loan-requests" },
    SidebarItem { name: "Whitelist", path: "/whitelist" },
    SidebarItem { name: "Karma", path: "/karma" },
];

const BUSINESSES: &[SidebarItem] = &[
    SidebarItem { name: "Organization", path: "/organization" },
    SidebarItem { name: "Loan Products", path: "/loan-products" },
    SidebarItem { name: "Savings Products", path: "/savings-products" },
    SidebarItem { name: "Fees and Charges", path: "/fees" },
    SidebarItem { name: "Transactions", path: "/transactions" },
    SidebarItem { name: "Services", path: "/services" },
    SidebarItem { name: "Service Account", path: "/service-account" },
    SidebarItem { name: "Settlements", path: "/settlements" },
    SidebarItem { name: "Reports", path: "/reports" },
];

const SETTINGS: &[SidebarItem] = &[
    SidebarItem { name: "Preferences", path: "/preferences" },
    SidebarItem { name: "Fees and Pricing", path: "/fees-pricing" },
    SidebarItem { name: "Audit Logs", path: "/audit-logs" },
];

const SYSTEM_MESSAGES: SidebarItem = SidebarItem {
    name: "Systems Messages",
    path: "/system-messages",
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarEntry {
    /// Organization chooser at the top; shown but never focused.
    OrgSwitch,
    Heading(&'static str),
    Link { item: SidebarItem, active: bool },
    Logout,
    Version,
}

/// Flattened sidebar for a given location. `extra_items` adds the system
/// messages link, the logout action and the version footer.
pub fn sidebar_entries(current_path: &str, extra_items: bool) -> Vec<SidebarEntry> {
    let dashboard = SidebarItem {
        name: "Dashboard",
        path: DASHBOARD_PATH,
    };
    let mut entries = vec![
        SidebarEntry::OrgSwitch,
        SidebarEntry::Link {
            item: dashboard,
            active: current_path == DASHBOARD_PATH,
        },
    ];

    for section in SidebarSection::ALL {
        entries.push(SidebarEntry::Heading(section.title()));
        for item in section.items() {
            entries.push(SidebarEntry::Link {
                item: *item,
                active: section.is_active(item, current_path),
            });
        }
    }

    if extra_items {
        entries.push(SidebarEntry::Link {
            item: SYSTEM_MESSAGES,
            active: current_path == SYSTEM_MESSAGES.path,
        });
        entries.push(SidebarEntry::Logout);
        entries.push(SidebarEntry::Version);
    }
    entries
}

/// Entries the keyboard cursor can land on.
pub fn is_selectable(entry: &SidebarEntry) -> bool {
    matches!(entry, SidebarEntry::Link { .. } | SidebarEntry::Logout)
}

#[cfg(test)]
mod tests {
    use super::{SidebarEntry, SidebarSection, is_selectable, sidebar_entries};

    fn active_names(path: &str) -> Vec<&'static str> {
        sidebar_entries(path, false)
            .into_iter()
            .filter_map(|entry| match entry {
                SidebarEntry::Link { item, active: true } => Some(item.name),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn users_link_active_on_detail_pages() {
        assert_eq!(active_names("/users"), vec!["Users"]);
        assert_eq!(active_names("/users/user-4"), vec!["Users"]);
    }

    #[test]
    fn prefix_match_needs_a_path_separator() {
        assert!(active_names("/loans-archive").is_empty());
        assert_eq!(active_names("/loans/7"), vec!["Loans"]);
    }

    #[test]
    fn business_links_only_match_exactly() {
        let item = SidebarSection::Businesses.items()[0];
        assert!(SidebarSection::Businesses.is_active(&item, "/organization"));
        assert!(!SidebarSection::Businesses.is_active(&item, "/organization/2"));
    }

    #[test]
    fn org_switch_leads_and_is_not_selectable() {
        let entries = sidebar_entries("/users", false);
        assert_eq!(entries.first(), Some(&SidebarEntry::OrgSwitch));
        assert!(!is_selectable(&SidebarEntry::OrgSwitch));
        let first_selectable = entries.iter().find(|entry| is_selectable(entry));
        assert!(matches!(
            first_selectable,
            Some(SidebarEntry::Link { item, .. }) if item.name == "Dashboard"
        ));
    }

    #[test]
    fn extra_items_add_logout_and_version() {
        let plain = sidebar_entries("/users", false);
        assert!(!plain.contains(&SidebarEntry::Logout));

        let extra = sidebar_entries("/users/user-1", true);
        assert!(extra.contains(&SidebarEntry::Logout));
        assert_eq!(extra.last(), Some(&SidebarEntry::Version));
        assert!(!is_selectable(&SidebarEntry::Version));
        assert!(is_selectable(&SidebarEntry::Logout));
    }
}
