//! Grades list page. Each grade row carries its enrolled students as
//! sub-rows, the one nested rendering among the list pages.

use leptos::prelude::*;
use records::entity::EntityKind;
use records::raw::RawGrade;
use records::rows::{GradeRow, project_grade};

use crate::components::form_modal::{FormModal, FormSeed, ModalIntent};
use crate::components::list_scaffold::ListScaffold;
use crate::components::table::{Column, DataTable};
use crate::state::list::{RemoteList, load_when_ready};
use crate::state::session::use_session;
use crate::util::search::filter_rows;

const COLUMNS: &[Column] = &[
    Column::new("Grade Level"),
    Column::new("Student Name"),
    Column::hidden_on_narrow("Student Email"),
    Column::new("Actions"),
];

#[component]
pub fn GradeListPage() -> impl IntoView {
    let session = use_session();
    let list = RemoteList::<GradeRow>::new();
    load_when_ready::<RawGrade, GradeRow>(list, EntityKind::Grade, project_grade);
    let query = RwSignal::new(String::new());

    let filtered = move || {
        filter_rows(&list.rows.get(), &query.get(), |row| {
            let students =
                row.students.iter().map(|s| s.student_name.as_str()).collect::<Vec<_>>().join(" ");
            format!("{} {students}", row.level)
        })
    };
    let can_manage = move || session.get().can_manage();

    view! {
        <ListScaffold kind=EntityKind::Grade query=query loading=list.loading>
            <DataTable columns=COLUMNS>
                {move || {
                    filtered()
                        .into_iter()
                        .map(|row| {
                            let update = ModalIntent::Update(FormSeed::Grade(row.clone()));
                            let delete =
                                ModalIntent::Delete { kind: EntityKind::Grade, id: row.id };
                            let students = if row.students.is_empty() {
                                view! { <p class="data-table__empty">"No students enrolled"</p> }
                                    .into_any()
                            } else {
                                view! {
                                    <ul class="data-table__sublist">
                                        {row
                                            .students
                                            .iter()
                                            .map(|s| {
                                                view! {
                                                    <li>
                                                        {s.student_name.clone()}
                                                        <span class="data-table__subnote">
                                                            {s.email.clone()}
                                                        </span>
                                                    </li>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                }
                                    .into_any()
                            };
                            view! {
                                <tr class="data-table__row">
                                    <td>{row.level.clone()}</td>
                                    <td colspan="2">{students}</td>
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
