//! Attendance list page.

use leptos::prelude::*;
use records::entity::EntityKind;
use records::raw::RawAttendance;
use records::rows::{AttendanceRow, project_attendance};

use crate::components::form_modal::{FormModal, FormSeed, ModalIntent};
use crate::components::list_scaffold::ListScaffold;
use crate::components::table::{Column, DataTable};
use crate::state::list::{RemoteList, load_when_ready};
use crate::state::session::use_session;
use crate::util::search::filter_rows;

const COLUMNS: &[Column] = &[
    Column::new("Attendance ID"),
    Column::hidden_on_narrow("Date"),
    Column::hidden_on_narrow("Present"),
    Column::hidden_on_narrow("Student Name"),
    Column::hidden_on_narrow("Lesson Name"),
    Column::new("Actions"),
];

#[component]
pub fn AttendanceListPage() -> impl IntoView {
    let session = use_session();
    let list = RemoteList::<AttendanceRow>::new();
    load_when_ready::<RawAttendance, AttendanceRow>(
        list,
        EntityKind::Attendance,
        project_attendance,
    );
    let query = RwSignal::new(String::new());

    let filtered = move || {
        filter_rows(&list.rows.get(), &query.get(), |row| {
            format!("{} {} {}", row.student_name, row.lesson_name, row.date)
        })
    };
    let can_manage = move || session.get().can_manage();

    view! {
        <ListScaffold kind=EntityKind::Attendance query=query loading=list.loading>
            <DataTable columns=COLUMNS>
                {move || {
                    filtered()
                        .into_iter()
                        .map(|row| {
                            let update = ModalIntent::Update(FormSeed::Attendance(row.clone()));
                            let delete =
                                ModalIntent::Delete { kind: EntityKind::Attendance, id: row.id };
                            view! {
                                <tr class="data-table__row">
                                    <td>{row.id}</td>
                                    <td class="data-table__narrow-hidden">{row.date}</td>
                                    <td class="data-table__narrow-hidden">{row.present}</td>
                                    <td class="data-table__narrow-hidden">{row.student_name}</td>
                                    <td class="data-table__narrow-hidden">{row.lesson_name}</td>
                                    <td>
                                        <div class="data-table__actions">
                                            <Show when=can_manage>
                                                <FormModal intent=update.clone()/>
                                                <FormModal intent=delete.clone()/>
                                            </Show>
                                        </div>
                                    </td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </DataTable>
        </ListScaffold>
    }
}
