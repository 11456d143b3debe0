//! Subjects list page.

use leptos::prelude::*;
use records::entity::EntityKind;
use records::raw::RawSubject;
use records::rows::{SubjectRow, project_subject};

use crate::components::form_modal::{FormModal, FormSeed, ModalIntent};
use crate::components::list_scaffold::ListScaffold;
use crate::components::table::{Column, DataTable};
use crate::state::list::{RemoteList, load_when_ready};
use crate::state::session::use_session;
use crate::util::search::filter_rows;

const COLUMNS: &[Column] = &[
    Column::new("Subject Name"),
    Column::hidden_on_narrow("Teachers"),
    Column::hidden_on_narrow("Lessons"),
    Column::new("Actions"),
];

#[component]
pub fn SubjectListPage() -> impl IntoView {
    let session = use_session();
    let list = RemoteList::<SubjectRow>::new();
    load_when_ready::<RawSubject, SubjectRow>(list, EntityKind::Subject, project_subject);
    let query = RwSignal::new(String::new());

    let filtered = move || {
        filter_rows(&list.rows.get(), &query.get(), |row| {
            format!("{} {}", row.subject_name, row.teachers)
        })
    };
    let can_manage = move || session.get().can_manage();

    view! {
        <ListScaffold kind=EntityKind::Subject query=query loading=list.loading>
            <DataTable columns=COLUMNS>
                {move || {
                    filtered()
                        .into_iter()
                        .map(|row| {
                            let update = ModalIntent::Update(FormSeed::Subject(row.clone()));
                            let delete =
                                ModalIntent::Delete { kind: EntityKind::Subject, id: row.id };
                            view! {
                                <tr class="data-table__row">
                                    <td>{row.subject_name}</td>
                                    <td class="data-table__narrow-hidden">{row.teachers}</td>
                                    <td class="data-table__narrow-hidden">{row.lessons}</td>
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
