//! Student dashboard action table.
//!
//! Every dashboard button is identified by its label. A label resolves to a
//! [`DashboardAction`], whose [`ActionOutcome`] is either a navigation or an
//! inert notice. None of the advertised features exist behind these notices.

use serde::Serialize;

/// Path of the course catalog placeholder page.
pub const CATALOG_PATH: &str = "/dashboard/catalog";

/// Bullet points shown on the course catalog placeholder.
pub const CATALOG_FEATURES: &[&str] = &[
    "Browse available courses",
    "Add courses to your schedule",
    "Drop courses if needed",
    "View prerequisites and schedules",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardAction {
    RegisterForCourses,
    BrowseCatalog,
    DownloadTranscript,
    PayTuition,
    ContactSupport,
    ViewAllCourses,
    Inbox,
}

/// Navigation targets reachable from the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Destination {
    Catalog,
}

impl Destination {
    pub fn path(&self) -> &'static str {
        match self {
            Destination::Catalog => CATALOG_PATH,
        }
    }
}

/// What the UI should do after a dashboard action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActionOutcome {
    Navigate {
        destination: Destination,
        location: &'static str,
    },
    Notify {
        title: String,
        message: String,
    },
}

impl ActionOutcome {
    fn navigate(destination: Destination) -> Self {
        ActionOutcome::Navigate {
            destination,
            location: destination.path(),
        }
    }

    fn notify(title: impl Into<String>, message: impl Into<String>) -> Self {
        ActionOutcome::Notify {
            title: title.into(),
            message: message.into(),
        }
    }
}

impl DashboardAction {
    pub const ALL: [DashboardAction; 7] = [
        DashboardAction::RegisterForCourses,
        DashboardAction::BrowseCatalog,
        DashboardAction::DownloadTranscript,
        DashboardAction::PayTuition,
        DashboardAction::ContactSupport,
        DashboardAction::ViewAllCourses,
        DashboardAction::Inbox,
    ];

    /// Resolves a button label. Labels are matched exactly.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.label() == label)
    }

    pub fn label(&self) -> &'static str {
        match self {
            DashboardAction::RegisterForCourses => "Register for Courses",
            DashboardAction::BrowseCatalog => "Browse Catalog",
            DashboardAction::DownloadTranscript => "Download Transcript",
            DashboardAction::PayTuition => "Pay Tuition",
            DashboardAction::ContactSupport => "Contact Support",
            DashboardAction::ViewAllCourses => "View All",
            DashboardAction::Inbox => "Inbox",
        }
    }

    pub fn outcome(&self) -> ActionOutcome {
        match self {
            DashboardAction::RegisterForCourses | DashboardAction::BrowseCatalog => {
                ActionOutcome::navigate(Destination::Catalog)
            }
            DashboardAction::DownloadTranscript => ActionOutcome::notify(
                "Generating Transcript...",
                "Your official transcript will be downloaded shortly.",
            ),
            DashboardAction::PayTuition => ActionOutcome::notify(
                "Redirecting to Payment Portal...",
                "This would open the tuition payment system.",
            ),
            DashboardAction::ContactSupport => ActionOutcome::notify(
                "Opening Support Center...",
                "This would open a help desk ticket system.",
            ),
            DashboardAction::ViewAllCourses => ActionOutcome::notify(
                "Opening full course list...",
                "This would show all enrolled courses.",
            ),
            DashboardAction::Inbox => ActionOutcome::notify(
                "Opening message inbox...",
                "This would show all messages and notifications.",
            ),
        }
    }
}

/// Notice shown when a message in the inbox preview is opened.
pub fn message_notice(sender: &str) -> ActionOutcome {
    ActionOutcome::notify(
        format!("Message from: {sender}"),
        "This would open the full message thread with conversation history, \
         replies, attachments and status tracking.",
    )
}

/// Student ID shown on the dashboard header.
pub fn student_id_for(email: &str) -> &'static str {
    if email.contains("jane.doe") {
        "STU002"
    } else {
        "STU001"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip() {
        for action in DashboardAction::ALL {
            assert_eq!(DashboardAction::from_label(action.label()), Some(action));
        }
    }

    #[test]
    fn test_unknown_label() {
        assert_eq!(DashboardAction::from_label("Launch Rocket"), None);
        assert_eq!(DashboardAction::from_label("pay tuition"), None);
    }

    #[test]
    fn test_register_navigates_to_catalog() {
        let outcome = DashboardAction::RegisterForCourses.outcome();
        assert_eq!(
            outcome,
            ActionOutcome::Navigate {
                destination: Destination::Catalog,
                location: CATALOG_PATH,
            }
        );
        assert_eq!(DashboardAction::BrowseCatalog.outcome(), outcome);
    }

    #[test]
    fn test_stub_actions_notify() {
        for action in [
            DashboardAction::DownloadTranscript,
            DashboardAction::PayTuition,
            DashboardAction::ContactSupport,
            DashboardAction::ViewAllCourses,
            DashboardAction::Inbox,
        ] {
            assert!(matches!(action.outcome(), ActionOutcome::Notify { .. }));
        }
    }

    #[test]
    fn test_outcome_json_shape() {
        let json = serde_json::to_value(DashboardAction::PayTuition.outcome()).unwrap();
        assert_eq!(json["kind"], "notify");
        assert_eq!(json["title"], "Redirecting to Payment Portal...");

        let json = serde_json::to_value(DashboardAction::RegisterForCourses.outcome()).unwrap();
        assert_eq!(json["kind"], "navigate");
        assert_eq!(json["destination"], "catalog");
        assert_eq!(json["location"], "/dashboard/catalog");
    }

    #[test]
    fn test_message_notice_names_sender() {
        match message_notice("Registrar's Office") {
            ActionOutcome::Notify { title, .. } => {
                assert_eq!(title, "Message from: Registrar's Office")
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_student_ids() {
        assert_eq!(student_id_for("john.smith@boolean.edu"), "STU001");
        assert_eq!(student_id_for("jane.doe@boolean.edu"), "STU002");
        assert_eq!(student_id_for("someone@boolean.edu"), "STU001");
    }
}
