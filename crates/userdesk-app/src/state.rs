// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::Route;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub route: Route,
    pub status_line: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            route: Route::Login,
            status_line: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    Navigate(String),
    Logout,
    SetStatus(String),
    ClearStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    RouteChanged(Route),
    LocalStateCleared,
    StatusUpdated(String),
    StatusCleared,
}

impl AppState {
    pub fn at(path: &str) -> Self {
        Self {
            route: Route::parse(path),
            ..Self::default()
        }
    }

    pub fn dispatch(&mut self, command: AppCommand) -> Vec<AppEvent> {
        match command {
            AppCommand::Navigate(path) => self.navigate(&path),
            AppCommand::Logout => {
                tracing::info!("logout requested");
                self.route = Route::Login;
                vec![
                    AppEvent::LocalStateCleared,
                    AppEvent::RouteChanged(Route::Login),
                    self.set_status("logged out"),
                ]
            }
            AppCommand::SetStatus(message) => vec![self.set_status(&message)],
            AppCommand::ClearStatus => {
                self.status_line = None;
                vec![AppEvent::StatusCleared]
            }
        }
    }

    fn navigate(&mut self, path: &str) -> Vec<AppEvent> {
        let route = Route::parse(path);
        if let Route::Unknown(unknown) = &route {
            tracing::debug!(path = %unknown, "navigation to unbuilt screen");
            return vec![self.set_status(&format!("{unknown} is not available yet"))];
        }
        if route == self.route {
            return Vec::new();
        }
        tracing::info!(from = %self.route.path(), to = %route.path(), "navigate");
        self.route = route.clone();
        vec![AppEvent::RouteChanged(route)]
    }

    fn set_status(&mut self, message: &str) -> AppEvent {
        self.status_line = Some(message.to_owned());
        AppEvent::StatusUpdated(message.to_owned())
    }
}
