//! Assignments list page.

use leptos::prelude::*;
use records::entity::EntityKind;
use records::raw::RawAssignment;
use records::rows::{AssignmentRow, project_assignment};

use crate::components::form_modal::{FormModal, FormSeed, ModalIntent};
use crate::components::list_scaffold::ListScaffold;
use crate::components::table::{Column, DataTable};
use crate::state::list::{RemoteList, load_when_ready};
use crate::state::session::use_session;
use crate::util::search::filter_rows;

const COLUMNS: &[Column] = &[
    Column::new("Assignment Title"),
    Column::hidden_on_narrow("Start Date"),
    Column::hidden_on_narrow("Due Date"),
    Column::hidden_on_narrow("Lesson"),
    Column::new("Actions"),
];

#[component]
pub fn AssignmentListPage() -> impl IntoView {
    let session = use_session();
    let list = RemoteList::<AssignmentRow>::new();
    load_when_ready::<RawAssignment, AssignmentRow>(
        list,
        EntityKind::Assignment,
        project_assignment,
    );
    let query = RwSignal::new(String::new());

    let filtered = move || {
        filter_rows(&list.rows.get(), &query.get(), |row| {
            format!("{} {}", row.assignment_title, row.lesson)
        })
    };
    let can_manage = move || session.get().can_manage();

    view! {
        <ListScaffold kind=EntityKind::Assignment query=query loading=list.loading>
            <DataTable columns=COLUMNS>
                {move || {
                    filtered()
                        .into_iter()
                        .map(|row| {
                            let update = ModalIntent::Update(FormSeed::Assignment(row.clone()));
                            let delete =
                                ModalIntent::Delete { kind: EntityKind::Assignment, id: row.id };
                            view! {
                                <tr class="data-table__row">
                                    <td>{row.assignment_title}</td>
                                    <td class="data-table__narrow-hidden">{row.start_date}</td>
                                    <td class="data-table__narrow-hidden">{row.due_date}</td>
                                    <td class="data-table__narrow-hidden">{row.lesson}</td>
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
