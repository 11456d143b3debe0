//! Teachers list page.

use leptos::prelude::*;
use records::entity::EntityKind;
use records::raw::RawTeacher;
use records::rows::{TeacherRow, project_teacher};

use crate::components::form_modal::{FormModal, FormSeed, ModalIntent};
use crate::components::list_scaffold::ListScaffold;
use crate::components::table::{Column, DataTable};
use crate::state::list::{RemoteList, load_when_ready};
use crate::state::session::use_session;
use crate::util::search::filter_rows;

const COLUMNS: &[Column] = &[
    Column::new("Info"),
    Column::hidden_on_narrow("Teacher ID"),
    Column::hidden_on_narrow("Subjects"),
    Column::hidden_on_narrow("Classes"),
    Column::hidden_on_narrow("Lessons"),
    Column::hidden_on_narrow("Phone"),
    Column::hidden_on_narrow("Address"),
    Column::new("Actions"),
];

#[component]
pub fn TeacherListPage() -> impl IntoView {
    let session = use_session();
    let list = RemoteList::<TeacherRow>::new();
    load_when_ready::<RawTeacher, TeacherRow>(list, EntityKind::Teacher, project_teacher);
    let query = RwSignal::new(String::new());

    let filtered = move || {
        filter_rows(&list.rows.get(), &query.get(), |row| {
            format!("{} {} {}", row.name, row.subjects, row.classes)
        })
    };
    let can_manage = move || session.get().can_manage();

    view! {
        <ListScaffold kind=EntityKind::Teacher query=query loading=list.loading>
            <DataTable columns=COLUMNS>
                {move || {
                    filtered()
                        .into_iter()
                        .map(|row| {
                            let update = ModalIntent::Update(FormSeed::Teacher(row.clone()));
                            let delete =
                                ModalIntent::Delete { kind: EntityKind::Teacher, id: row.id };
                            view! {
                                <tr class="data-table__row">
                                    <td>
                                        <div class="data-table__info">
                                            <img
                                                class="data-table__avatar"
                                                src=row.photo
                                                alt="Teacher photo"
                                            />
                                            <div class="data-table__identity">
                                                <h3>{row.name}</h3>
                                                <p>{row.email}</p>
                                            </div>
                                        </div>
                                    </td>
                                    <td class="data-table__narrow-hidden">{row.teacher_id}</td>
                                    <td class="data-table__narrow-hidden">{row.subjects}</td>
                                    <td class="data-table__narrow-hidden">{row.classes}</td>
                                    <td class="data-table__narrow-hidden">{row.lessons}</td>
                                    <td class="data-table__narrow-hidden">{row.phone}</td>
                                    <td class="data-table__narrow-hidden">{row.address}</td>
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
