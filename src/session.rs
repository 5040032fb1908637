use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::error::{Result, WorkerTrackError};
use crate::model::role::Role;
use crate::model::view::View;

/// One authenticated UI session. Exactly one is live at a time in this
/// single-user model; logout consumes it and the next login starts fresh at
/// the role's default view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Session {
    pub session_id: String,
    pub role: Role,
    pub username: String,
    pub view: View,
}

impl Session {
    /// Credentials are only checked for presence here; real verification
    /// belongs to an external collaborator.
    pub fn login(role: Role, username: &str, password: &str) -> Result<Session> {
        if username.trim().is_empty() || password.trim().is_empty() {
            return Err(WorkerTrackError::EmptyCredential);
        }

        let session = Session {
            session_id: Uuid::new_v4().to_string(),
            role,
            username: username.to_string(),
            view: role.default_view(),
        };
        info!(session_id = %session.session_id, username = %session.username, %role, "logged in");
        Ok(session)
    }

    /// Switch views. Views outside the role's set are rejected with
    /// `InvalidView` rather than silently ignored.
    pub fn set_view(&mut self, view: View) -> Result<()> {
        if !self.role.allows(view) {
            return Err(WorkerTrackError::InvalidView {
                role: self.role,
                view: view.to_string(),
            });
        }
        self.view = view;
        Ok(())
    }

    /// Route from the UI's string view id.
    pub fn set_view_str(&mut self, view_id: &str) -> Result<()> {
        let view = view_id
            .parse::<View>()
            .map_err(|_| WorkerTrackError::InvalidView {
                role: self.role,
                view: view_id.to_string(),
            })?;
        self.set_view(view)
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn logout(self) {
        info!(session_id = %self.session_id, username = %self.username, "logged out");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_requires_both_credentials() {
        assert_eq!(
            Session::login(Role::Worker, "", "password"),
            Err(WorkerTrackError::EmptyCredential)
        );
        assert_eq!(
            Session::login(Role::Worker, "demo_user", ""),
            Err(WorkerTrackError::EmptyCredential)
        );
        assert_eq!(
            Session::login(Role::Admin, "admin", "   "),
            Err(WorkerTrackError::EmptyCredential)
        );
        assert!(Session::login(Role::Worker, "demo_user", "password").is_ok());
    }

    #[test]
    fn each_role_lands_on_its_default_view() {
        let worker = Session::login(Role::Worker, "demo_user", "password").unwrap();
        assert_eq!(worker.view, View::Attendance);

        let admin = Session::login(Role::Admin, "admin", "admin123").unwrap();
        assert_eq!(admin.view, View::Dashboard);
    }

    #[test]
    fn views_are_scoped_per_role() {
        let mut worker = Session::login(Role::Worker, "demo_user", "password").unwrap();
        worker.set_view(View::History).unwrap();
        assert_eq!(worker.view, View::History);

        let err = worker.set_view(View::Dashboard).unwrap_err();
        assert!(matches!(err, WorkerTrackError::InvalidView { role: Role::Worker, .. }));
        // rejected switch leaves the view untouched
        assert_eq!(worker.view, View::History);

        let mut admin = Session::login(Role::Admin, "admin", "admin123").unwrap();
        admin.set_view(View::Workers).unwrap();
        admin.set_view(View::Reports).unwrap();
        assert!(admin.set_view(View::Attendance).is_err());
    }

    #[test]
    fn string_view_ids_parse_and_route() {
        let mut worker = Session::login(Role::Worker, "demo_user", "password").unwrap();
        worker.set_view_str("history").unwrap();
        assert_eq!(worker.view, View::History);

        // unknown ids and out-of-role ids both come back as InvalidView
        assert!(worker.set_view_str("payslips").is_err());
        assert!(worker.set_view_str("dashboard").is_err());
    }
}
