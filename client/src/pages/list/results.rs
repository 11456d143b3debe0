//! Results list page.

use leptos::prelude::*;
use records::entity::EntityKind;
use records::raw::RawResult;
use records::rows::{ResultRow, project_result};

use crate::components::form_modal::{FormModal, FormSeed, ModalIntent};
use crate::components::list_scaffold::ListScaffold;
use crate::components::table::{Column, DataTable};
use crate::state::list::{RemoteList, load_when_ready};
use crate::state::session::use_session;
use crate::util::search::filter_rows;

const COLUMNS: &[Column] = &[
    Column::new("Student Name"),
    Column::new("Exam Title"),
    Column::hidden_on_narrow("Assignment Title"),
    Column::new("Score"),
    Column::new("Actions"),
];

#[component]
pub fn ResultListPage() -> impl IntoView {
    let session = use_session();
    let list = RemoteList::<ResultRow>::new();
    load_when_ready::<RawResult, ResultRow>(list, EntityKind::Result, project_result);
    let query = RwSignal::new(String::new());

    let filtered = move || {
        filter_rows(&list.rows.get(), &query.get(), |row| {
            format!("{} {} {}", row.student_name, row.exam_title, row.assignment_title)
        })
    };
    let can_manage = move || session.get().can_manage();

    view! {
        <ListScaffold kind=EntityKind::Result query=query loading=list.loading>
            <DataTable columns=COLUMNS>
                {move || {
                    filtered()
                        .into_iter()
                        .map(|row| {
                            let update = ModalIntent::Update(FormSeed::Result(row.clone()));
                            let delete =
                                ModalIntent::Delete { kind: EntityKind::Result, id: row.id };
                            view! {
                                <tr class="data-table__row">
                                    <td>{row.student_name}</td>
                                    <td>{row.exam_title}</td>
                                    <td class="data-table__narrow-hidden">{row.assignment_title}</td>
                                    <td>{row.score}</td>
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
