// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Result, bail};

pub const LOGIN_TARGET_PATH: &str = "/users";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

impl LoginField {
    pub const fn next(self) -> Self {
        match self {
            Self::Email => Self::Password,
            Self::Password => Self::Email,
        }
    }

    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Password => "Password",
        }
    }
}

/// Login screen state. There is no real authentication: a valid submit only
/// arms a delayed hop to the users list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub password_visible: bool,
    pub focus: LoginField,
    pending: Option<u64>,
    last_token: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginCommand {
    Focus(LoginField),
    FocusNext,
    Input(char),
    Backspace,
    TogglePasswordVisibility,
    Submit,
    /// The scheduled delay for `token` ran out.
    DelayElapsed { token: u64 },
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginEvent {
    FieldChanged(LoginField),
    FocusChanged(LoginField),
    PasswordVisibilityChanged(bool),
    SubmitRejected(String),
    /// The host must start a timer and report back with the same token.
    SubmitScheduled { token: u64 },
    Navigate(String),
    Cancelled { token: u64 },
}

impl LoginForm {
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending_token(&self) -> Option<u64> {
        self.pending
    }

    pub fn masked_password(&self) -> String {
        if self.password_visible {
            self.password.clone()
        } else {
            "•".repeat(self.password.chars().count())
        }
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.password_visible { "HIDE" } else { "SHOW" }
    }

    pub fn validate(&self) -> Result<()> {
        let email = self.email.trim();
        if email.is_empty() {
            bail!("email is required -- enter your email and retry");
        }
        if !email.contains('@') {
            bail!("email {email:?} is not a valid address -- include an @");
        }
        if self.password.is_empty() {
            bail!("password is required -- enter your password and retry");
        }
        Ok(())
    }

    pub fn dispatch(&mut self, command: LoginCommand) -> Vec<LoginEvent> {
        let editable = !self.is_loading();
        match command {
            LoginCommand::Focus(field) => {
                self.focus = field;
                vec![LoginEvent::FocusChanged(field)]
            }
            LoginCommand::FocusNext => {
                self.focus = self.focus.next();
                vec![LoginEvent::FocusChanged(self.focus)]
            }
            LoginCommand::Input(ch) if editable => {
                self.focused_value().push(ch);
                vec![LoginEvent::FieldChanged(self.focus)]
            }
            LoginCommand::Backspace if editable => {
                self.focused_value().pop();
                vec![LoginEvent::FieldChanged(self.focus)]
            }
            LoginCommand::TogglePasswordVisibility if editable => {
                self.password_visible = !self.password_visible;
                vec![LoginEvent::PasswordVisibilityChanged(self.password_visible)]
            }
            LoginCommand::Input(_)
            | LoginCommand::Backspace
            | LoginCommand::TogglePasswordVisibility => Vec::new(),
            LoginCommand::Submit => self.submit(),
            LoginCommand::DelayElapsed { token } => {
                if self.pending != Some(token) {
                    tracing::debug!(token, "ignoring stale login completion");
                    return Vec::new();
                }
                self.pending = None;
                vec![LoginEvent::Navigate(LOGIN_TARGET_PATH.to_owned())]
            }
            LoginCommand::Cancel => match self.pending.take() {
                Some(token) => vec![LoginEvent::Cancelled { token }],
                None => Vec::new(),
            },
        }
    }

    fn submit(&mut self) -> Vec<LoginEvent> {
        if self.is_loading() {
            return Vec::new();
        }
        if let Err(error) = self.validate() {
            return vec![LoginEvent::SubmitRejected(error.to_string())];
        }
        tracing::info!(email = %self.email.trim(), "login submitted");
        self.last_token = self.last_token.wrapping_add(1);
        self.pending = Some(self.last_token);
        vec![LoginEvent::SubmitScheduled {
            token: self.last_token,
        }]
    }

    fn focused_value(&mut self) -> &mut String {
        match self.focus {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{LOGIN_TARGET_PATH, LoginCommand, LoginEvent, LoginField, LoginForm};

    fn type_text(form: &mut LoginForm, text: &str) {
        for ch in text.chars() {
            form.dispatch(LoginCommand::Input(ch));
        }
    }

    fn filled_form() -> LoginForm {
        let mut form = LoginForm::default();
        type_text(&mut form, "test@example.com");
        form.dispatch(LoginCommand::FocusNext);
        type_text(&mut form, "password123");
        form
    }

    #[test]
    fn typing_fills_focused_field() {
        let form = filled_form();
        assert_eq!(form.email, "test@example.com");
        assert_eq!(form.password, "password123");
        assert_eq!(form.focus, LoginField::Password);
    }

    #[test]
    fn password_is_masked_until_shown() {
        let mut form = filled_form();
        assert_eq!(form.masked_password(), "•••••••••••");
        assert_eq!(form.toggle_label(), "SHOW");

        form.dispatch(LoginCommand::TogglePasswordVisibility);
        assert_eq!(form.masked_password(), "password123");
        assert_eq!(form.toggle_label(), "HIDE");

        form.dispatch(LoginCommand::TogglePasswordVisibility);
        assert_eq!(form.toggle_label(), "SHOW");
    }

    #[test]
    fn submit_requires_both_fields() {
        let mut form = LoginForm::default();
        let events = form.dispatch(LoginCommand::Submit);
        assert!(matches!(
            events.as_slice(),
            [LoginEvent::SubmitRejected(message)] if message.contains("email is required")
        ));

        type_text(&mut form, "a@b.co");
        let events = form.dispatch(LoginCommand::Submit);
        assert!(matches!(
            events.as_slice(),
            [LoginEvent::SubmitRejected(message)] if message.contains("password is required")
        ));
        assert!(!form.is_loading());
    }

    #[test]
    fn submit_schedules_then_navigates_on_matching_token() {
        let mut form = filled_form();
        let events = form.dispatch(LoginCommand::Submit);
        assert_eq!(events, vec![LoginEvent::SubmitScheduled { token: 1 }]);
        assert!(form.is_loading());

        assert!(form.dispatch(LoginCommand::Input('x')).is_empty());
        assert!(form.dispatch(LoginCommand::Submit).is_empty());

        let events = form.dispatch(LoginCommand::DelayElapsed { token: 1 });
        assert_eq!(
            events,
            vec![LoginEvent::Navigate(LOGIN_TARGET_PATH.to_owned())]
        );
        assert!(!form.is_loading());
    }

    #[test]
    fn cancelled_submit_ignores_late_completion() {
        let mut form = filled_form();
        form.dispatch(LoginCommand::Submit);
        assert_eq!(
            form.dispatch(LoginCommand::Cancel),
            vec![LoginEvent::Cancelled { token: 1 }]
        );
        assert!(
            form.dispatch(LoginCommand::DelayElapsed { token: 1 })
                .is_empty()
        );

        let events = form.dispatch(LoginCommand::Submit);
        assert_eq!(events, vec![LoginEvent::SubmitScheduled { token: 2 }]);
        assert!(
            form.dispatch(LoginCommand::DelayElapsed { token: 1 })
                .is_empty()
        );
    }
}
