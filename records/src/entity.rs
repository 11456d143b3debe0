//! Entity kinds managed by the dashboard.
//!
//! DESIGN
//! ======
//! The table-name string of the backend API is a closed set. Modeling it as
//! an enum lets the form modal dispatch exhaustively instead of looking up
//! components in a string map that can silently miss.

#[cfg(test)]
#[path = "entity_test.rs"]
mod entity_test;

use serde::{Deserialize, Serialize};

/// Every entity type the dashboard lists and edits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Teacher,
    Student,
    Parent,
    Subject,
    Class,
    Lesson,
    Exam,
    Assignment,
    Result,
    Attendance,
    Event,
    Announcement,
    Grade,
}

impl EntityKind {
    /// All kinds, in sidebar-menu order.
    pub const ALL: [EntityKind; 13] = [
        EntityKind::Teacher,
        EntityKind::Student,
        EntityKind::Parent,
        EntityKind::Subject,
        EntityKind::Class,
        EntityKind::Lesson,
        EntityKind::Exam,
        EntityKind::Assignment,
        EntityKind::Result,
        EntityKind::Attendance,
        EntityKind::Event,
        EntityKind::Announcement,
        EntityKind::Grade,
    ];

    /// The lowercase table name used in dialogs ("delete this exam?").
    #[must_use]
    pub fn table_name(self) -> &'static str {
        match self {
            Self::Teacher => "teacher",
            Self::Student => "student",
            Self::Parent => "parent",
            Self::Subject => "subject",
            Self::Class => "class",
            Self::Lesson => "lesson",
            Self::Exam => "exam",
            Self::Assignment => "assignment",
            Self::Result => "result",
            Self::Attendance => "attendance",
            Self::Event => "event",
            Self::Announcement => "announcement",
            Self::Grade => "grade",
        }
    }

    /// Human heading for the list page ("All Exams").
    #[must_use]
    pub fn plural_label(self) -> &'static str {
        match self {
            Self::Teacher => "Teachers",
            Self::Student => "Students",
            Self::Parent => "Parents",
            Self::Subject => "Subjects",
            Self::Class => "Classes",
            Self::Lesson => "Lessons",
            Self::Exam => "Exams",
            Self::Assignment => "Assignments",
            Self::Result => "Results",
            Self::Attendance => "Attendance",
            Self::Event => "Events",
            Self::Announcement => "Announcements",
            Self::Grade => "Grades",
        }
    }

    /// Route segment for the list page under `/list/`.
    #[must_use]
    pub fn route_segment(self) -> &'static str {
        match self {
            Self::Teacher => "teachers",
            Self::Student => "students",
            Self::Parent => "parents",
            Self::Subject => "subjects",
            Self::Class => "classes",
            Self::Lesson => "lessons",
            Self::Exam => "exams",
            Self::Assignment => "assignments",
            Self::Result => "results",
            Self::Attendance => "attendance",
            Self::Event => "events",
            Self::Announcement => "announcements",
            Self::Grade => "grades",
        }
    }

    /// Whether the shared action layer has a wired delete for this kind.
    /// Only exam, announcement, and parent go through it; the other kinds
    /// have no delete handler at all.
    #[must_use]
    pub fn has_wired_delete(self) -> bool {
        matches!(self, Self::Exam | Self::Announcement | Self::Parent)
    }
}

/// What a form modal was opened to do.
#[derive(Clone, Debug, PartialEq)]
pub enum FormMode {
    Create,
    Update,
    Delete,
}
