//! Teacher overview page: week schedule plus announcements.

use leptos::prelude::*;

use crate::components::announcements::Announcements;
use crate::components::schedule::SchedulePanel;

/// Until per-user auth exists the schedule is scoped to a demo teacher,
/// the same way the source deployment pinned one.
const DEMO_TEACHER_ID: &str = "70c8d87a-245c-4036-a6e7-5396f50a5e74";

#[component]
pub fn TeacherHomePage() -> impl IntoView {
    view! {
        <div class="teacher-page">
            <div class="teacher-page__main">
                <SchedulePanel scope="teacherId" id=DEMO_TEACHER_ID.to_owned()/>
            </div>
            <div class="teacher-page__side">
                <Announcements/>
            </div>
        </div>
    }
}
