//! Modal dispatcher for entity forms and delete confirmations.
//!
//! DESIGN
//! ======
//! Where the old dashboard looked form components up in a string-keyed map,
//! the modal here matches exhaustively on `EntityKind`, so a missing arm is
//! a compile error, not a silent fall-through. Update intents carry a typed
//! seed row and each form receives its own entity's data.
//!
//! Deletion is wired only for exam, announcement, and parent (the entities
//! the shared action layer covers); confirming any other kind reports that
//! plainly instead of doing nothing.

#[cfg(test)]
#[path = "form_modal_test.rs"]
mod form_modal_test;

use leptos::prelude::*;
use records::entity::{EntityKind, FormMode};
use records::rows::{
    AnnouncementRow, AssignmentRow, AttendanceRow, ClassRow, EventRow, ExamRow, GradeRow,
    LessonRow, ParentRow, ResultRow, StudentRow, SubjectRow, TeacherRow,
};

use crate::components::banner::{Banner, BannerView};
use crate::components::forms::announcement_form::AnnouncementForm;
use crate::components::forms::assignment_form::AssignmentForm;
use crate::components::forms::attendance_form::AttendanceForm;
use crate::components::forms::class_form::ClassForm;
use crate::components::forms::event_form::EventForm;
use crate::components::forms::exam_form::ExamForm;
use crate::components::forms::grade_form::GradeForm;
use crate::components::forms::lesson_form::LessonForm;
use crate::components::forms::parent_form::ParentForm;
use crate::components::forms::result_form::ResultForm;
use crate::components::forms::student_form::StudentForm;
use crate::components::forms::subject_form::SubjectForm;
use crate::components::forms::teacher_form::TeacherForm;

/// A typed row seeding an update form.
#[derive(Clone, Debug, PartialEq)]
pub enum FormSeed {
    Teacher(TeacherRow),
    Student(StudentRow),
    Parent(ParentRow),
    Subject(SubjectRow),
    Class(ClassRow),
    Lesson(LessonRow),
    Exam(ExamRow),
    Assignment(AssignmentRow),
    Result(ResultRow),
    Attendance(AttendanceRow),
    Event(EventRow),
    Announcement(AnnouncementRow),
    Grade(GradeRow),
}

impl FormSeed {
    #[must_use]
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Teacher(_) => EntityKind::Teacher,
            Self::Student(_) => EntityKind::Student,
            Self::Parent(_) => EntityKind::Parent,
            Self::Subject(_) => EntityKind::Subject,
            Self::Class(_) => EntityKind::Class,
            Self::Lesson(_) => EntityKind::Lesson,
            Self::Exam(_) => EntityKind::Exam,
            Self::Assignment(_) => EntityKind::Assignment,
            Self::Result(_) => EntityKind::Result,
            Self::Attendance(_) => EntityKind::Attendance,
            Self::Event(_) => EntityKind::Event,
            Self::Announcement(_) => EntityKind::Announcement,
            Self::Grade(_) => EntityKind::Grade,
        }
    }
}

/// What the modal trigger was placed to do.
#[derive(Clone, Debug, PartialEq)]
pub enum ModalIntent {
    Create(EntityKind),
    Update(FormSeed),
    Delete { kind: EntityKind, id: i64 },
}

impl ModalIntent {
    #[must_use]
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Create(kind) | Self::Delete { kind, .. } => *kind,
            Self::Update(seed) => seed.kind(),
        }
    }

    fn trigger_class(&self) -> &'static str {
        match self {
            Self::Create(_) => "modal-trigger modal-trigger--create",
            Self::Update(_) => "modal-trigger modal-trigger--update",
            Self::Delete { .. } => "modal-trigger modal-trigger--delete",
        }
    }

    fn trigger_label(&self) -> &'static str {
        match self {
            Self::Create(_) => "+",
            Self::Update(_) => "Edit",
            Self::Delete { .. } => "Delete",
        }
    }
}

/// The message shown when delete is confirmed for a kind the action layer
/// does not cover.
#[must_use]
pub fn unwired_delete_message(kind: EntityKind) -> String {
    format!("Delete is not wired for {} records.", kind.table_name())
}

/// Trigger button plus the modal it opens.
#[component]
pub fn FormModal(intent: ModalIntent) -> impl IntoView {
    let open = RwSignal::new(false);
    let trigger_class = intent.trigger_class();
    let trigger_label = intent.trigger_label();

    view! {
        <button
            class=trigger_class
            title=trigger_label
            on:click=move |_| open.set(true)
        >
            {trigger_label}
        </button>
        <Show when=move || open.get()>
            {
                let intent = intent.clone();
                move || {
                    let intent = intent.clone();
                    view! {
                        <div class="dialog-backdrop" on:click=move |_| open.set(false)>
                            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                                <ModalBody intent=intent/>
                                <button
                                    class="dialog__close"
                                    aria-label="Close"
                                    on:click=move |_| open.set(false)
                                >
                                    "✕"
                                </button>
                            </div>
                        </div>
                    }
                }
            }
        </Show>
    }
}

/// Exhaustive dispatch from intent to the matching form or confirmation.
#[component]
fn ModalBody(intent: ModalIntent) -> impl IntoView {
    match intent {
        ModalIntent::Delete { kind, id } => view! { <DeleteConfirm kind=kind id=id/> }.into_any(),
        ModalIntent::Create(kind) => match kind {
            EntityKind::Teacher => view! { <TeacherForm mode=FormMode::Create/> }.into_any(),
            EntityKind::Student => view! { <StudentForm mode=FormMode::Create/> }.into_any(),
            EntityKind::Parent => view! { <ParentForm mode=FormMode::Create/> }.into_any(),
            EntityKind::Subject => view! { <SubjectForm mode=FormMode::Create/> }.into_any(),
            EntityKind::Class => view! { <ClassForm mode=FormMode::Create/> }.into_any(),
            EntityKind::Lesson => view! { <LessonForm mode=FormMode::Create/> }.into_any(),
            EntityKind::Exam => view! { <ExamForm mode=FormMode::Create/> }.into_any(),
            EntityKind::Assignment => view! { <AssignmentForm mode=FormMode::Create/> }.into_any(),
            EntityKind::Result => view! { <ResultForm mode=FormMode::Create/> }.into_any(),
            EntityKind::Attendance => view! { <AttendanceForm mode=FormMode::Create/> }.into_any(),
            EntityKind::Event => view! { <EventForm mode=FormMode::Create/> }.into_any(),
            EntityKind::Announcement => {
                view! { <AnnouncementForm mode=FormMode::Create/> }.into_any()
            }
            EntityKind::Grade => view! { <GradeForm mode=FormMode::Create/> }.into_any(),
        },
        ModalIntent::Update(seed) => match seed {
            FormSeed::Teacher(row) => {
                view! { <TeacherForm mode=FormMode::Update seed=row/> }.into_any()
            }
            FormSeed::Student(row) => {
                view! { <StudentForm mode=FormMode::Update seed=row/> }.into_any()
            }
            FormSeed::Parent(row) => {
                view! { <ParentForm mode=FormMode::Update seed=row/> }.into_any()
            }
            FormSeed::Subject(row) => {
                view! { <SubjectForm mode=FormMode::Update seed=row/> }.into_any()
            }
            FormSeed::Class(row) => {
                view! { <ClassForm mode=FormMode::Update seed=row/> }.into_any()
            }
            FormSeed::Lesson(row) => {
                view! { <LessonForm mode=FormMode::Update seed=row/> }.into_any()
            }
            FormSeed::Exam(row) => view! { <ExamForm mode=FormMode::Update seed=row/> }.into_any(),
            FormSeed::Assignment(row) => {
                view! { <AssignmentForm mode=FormMode::Update seed=row/> }.into_any()
            }
            FormSeed::Result(row) => {
                view! { <ResultForm mode=FormMode::Update seed=row/> }.into_any()
            }
            FormSeed::Attendance(row) => {
                view! { <AttendanceForm mode=FormMode::Update seed=row/> }.into_any()
            }
            FormSeed::Event(row) => {
                view! { <EventForm mode=FormMode::Update seed=row/> }.into_any()
            }
            FormSeed::Announcement(row) => {
                view! { <AnnouncementForm mode=FormMode::Update seed=row/> }.into_any()
            }
            FormSeed::Grade(row) => {
                view! { <GradeForm mode=FormMode::Update seed=row/> }.into_any()
            }
        },
    }
}

/// Confirm-and-delete body. Only the action-backed kinds actually delete.
#[component]
fn DeleteConfirm(kind: EntityKind, id: i64) -> impl IntoView {
    let banner = RwSignal::new(None::<Banner>);
    let busy = RwSignal::new(false);

    let on_confirm = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        if !kind.has_wired_delete() {
            banner.set(Some(Banner::error(unwired_delete_message(kind))));
            return;
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
        #[cfg(feature = "hydrate")]
        {
            busy.set(true);
            leptos::task::spawn_local(async move {
                let result = match kind {
                    EntityKind::Exam => crate::net::actions::delete_exam(id).await,
                    EntityKind::Announcement => {
                        crate::net::actions::delete_announcement(id).await
                    }
                    EntityKind::Parent => crate::net::actions::delete_parent(id).await,
                    _ => unreachable!("has_wired_delete gated above"),
                };
                banner.set(Some(Banner::from_action(&result)));
                busy.set(false);
            });
        }
    };

    view! {
        <form class="delete-confirm" on:submit=on_confirm>
            <span class="delete-confirm__prompt">
                {format!("Are you sure you want to delete this {}?", kind.table_name())}
            </span>
            <button class="btn btn--danger" type="submit" disabled=move || busy.get()>
                "Delete"
            </button>
            <BannerView banner=banner/>
        </form>
    }
}
