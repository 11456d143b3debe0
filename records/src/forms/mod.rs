//! Form payloads and their validation schemas, one module per entity.
//!
//! DESIGN
//! ======
//! Each form is a `*Draft` (the raw strings a user typed) plus a `validate`
//! method producing either a serializable `*Payload` (backend field names)
//! or `FieldErrors`. Validation runs entirely client-side before any
//! request; a draft that fails never reaches the network layer.

pub mod rules;

pub mod announcement;
pub mod assignment;
pub mod attendance;
pub mod class;
pub mod event;
pub mod exam;
pub mod grade;
pub mod lesson;
pub mod parent;
pub mod result;
pub mod student;
pub mod subject;
pub mod teacher;

/// Field-level validation failures, in field declaration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<(&'static str, String)>);

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push((field, message.into()));
    }

    /// Record the outcome of one rule check.
    pub fn check(&mut self, field: &'static str, outcome: Result<(), String>) {
        if let Err(message) = outcome {
            self.push(field, message);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The message attached to a field, if that field failed.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.iter().find(|(f, _)| *f == field).map(|(_, m)| m.as_str())
    }

    /// The first failure message, for single-banner surfaces.
    #[must_use]
    pub fn first_message(&self) -> Option<&str> {
        self.0.first().map(|(_, m)| m.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }

    fn into_result<T>(self, payload: T) -> Result<T, FieldErrors> {
        if self.is_empty() { Ok(payload) } else { Err(self) }
    }
}

/// Student/teacher sex selector. The backend speaks uppercase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "MALE",
            Self::Female => "FEMALE",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "MALE" => Some(Self::Male),
            "FEMALE" => Some(Self::Female),
            _ => None,
        }
    }
}

/// Weekday a lesson can be scheduled on. School days only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LessonDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl LessonDay {
    pub const ALL: [LessonDay; 5] = [
        LessonDay::Monday,
        LessonDay::Tuesday,
        LessonDay::Wednesday,
        LessonDay::Thursday,
        LessonDay::Friday,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Monday => "MONDAY",
            Self::Tuesday => "TUESDAY",
            Self::Wednesday => "WEDNESDAY",
            Self::Thursday => "THURSDAY",
            Self::Friday => "FRIDAY",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == value)
    }
}
