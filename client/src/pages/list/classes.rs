//! Classes list page.

use leptos::prelude::*;
use records::entity::EntityKind;
use records::raw::RawClass;
use records::rows::{ClassRow, project_class};

use crate::components::form_modal::{FormModal, FormSeed, ModalIntent};
use crate::components::list_scaffold::ListScaffold;
use crate::components::table::{Column, DataTable};
use crate::state::list::{RemoteList, load_when_ready};
use crate::state::session::use_session;
use crate::util::search::filter_rows;

const COLUMNS: &[Column] = &[
    Column::new("Class Name"),
    Column::hidden_on_narrow("Capacity"),
    Column::hidden_on_narrow("Grade"),
    Column::hidden_on_narrow("Supervisor"),
    Column::new("Actions"),
];

#[component]
pub fn ClassListPage() -> impl IntoView {
    let session = use_session();
    let list = RemoteList::<ClassRow>::new();
    load_when_ready::<RawClass, ClassRow>(list, EntityKind::Class, project_class);
    let query = RwSignal::new(String::new());

    let filtered = move || {
        filter_rows(&list.rows.get(), &query.get(), |row| {
            format!("{} {}", row.name, row.supervisor)
        })
    };
    let can_manage = move || session.get().can_manage();

    view! {
        <ListScaffold kind=EntityKind::Class query=query loading=list.loading>
            <DataTable columns=COLUMNS>
                {move || {
                    filtered()
                        .into_iter()
                        .map(|row| {
                            let update = ModalIntent::Update(FormSeed::Class(row.clone()));
                            let delete =
                                ModalIntent::Delete { kind: EntityKind::Class, id: row.id };
                            view! {
                                <tr class="data-table__row">
                                    <td>{row.name}</td>
                                    <td class="data-table__narrow-hidden">{row.capacity}</td>
                                    <td class="data-table__narrow-hidden">{row.grade}</td>
                                    <td class="data-table__narrow-hidden">{row.supervisor}</td>
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
