//! Students list page.

use leptos::prelude::*;
use records::entity::EntityKind;
use records::raw::RawStudent;
use records::rows::{StudentRow, project_student};

use crate::components::form_modal::{FormModal, FormSeed, ModalIntent};
use crate::components::list_scaffold::ListScaffold;
use crate::components::table::{Column, DataTable};
use crate::state::list::{RemoteList, load_when_ready};
use crate::state::session::use_session;
use crate::util::search::filter_rows;

const COLUMNS: &[Column] = &[
    Column::new("Info"),
    Column::hidden_on_narrow("Student Id"),
    Column::hidden_on_narrow("Grade"),
    Column::hidden_on_narrow("Phone"),
    Column::hidden_on_narrow("Class"),
    Column::hidden_on_narrow("Address"),
    Column::new("Actions"),
];

#[component]
pub fn StudentListPage() -> impl IntoView {
    let session = use_session();
    let list = RemoteList::<StudentRow>::new();
    load_when_ready::<RawStudent, StudentRow>(list, EntityKind::Student, project_student);
    let query = RwSignal::new(String::new());

    let filtered = move || {
        filter_rows(&list.rows.get(), &query.get(), |row| {
            format!("{} {} {}", row.name, row.email, row.class)
        })
    };
    let can_manage = move || session.get().can_manage();

    view! {
        <ListScaffold kind=EntityKind::Student query=query loading=list.loading>
            <DataTable columns=COLUMNS>
                {move || {
                    filtered()
                        .into_iter()
                        .map(|row| {
                            let update = ModalIntent::Update(FormSeed::Student(row.clone()));
                            let delete =
                                ModalIntent::Delete { kind: EntityKind::Student, id: row.id };
                            view! {
                                <tr class="data-table__row">
                                    <td>
                                        <div class="data-table__info">
                                            <img
                                                class="data-table__avatar"
                                                src=row.photo
                                                alt="Student photo"
                                            />
                                            <div class="data-table__identity">
                                                <h3>{row.name}</h3>
                                                <p>{row.email}</p>
                                            </div>
                                        </div>
                                    </td>
                                    <td class="data-table__narrow-hidden">{row.student_id}</td>
                                    <td class="data-table__narrow-hidden">{row.grade}</td>
                                    <td class="data-table__narrow-hidden">{row.phone}</td>
                                    <td class="data-table__narrow-hidden">{row.class}</td>
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
