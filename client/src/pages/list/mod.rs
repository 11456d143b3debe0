//! Entity list pages, one per `EntityKind`.
//!
//! Every page is the same shape: a `RemoteList` loaded through
//! `load_when_ready`, a client-side search filter, column descriptors, and
//! a row renderer with role-gated modal triggers. Only the columns and the
//! row cells differ per entity.

pub mod announcements;
pub mod assignments;
pub mod attendance;
pub mod classes;
pub mod events;
pub mod exams;
pub mod grades;
pub mod lessons;
pub mod parents;
pub mod results;
pub mod students;
pub mod subjects;
pub mod teachers;
