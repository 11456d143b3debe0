//! Parents list page.

use leptos::prelude::*;
use records::entity::EntityKind;
use records::raw::RawParent;
use records::rows::{ParentRow, project_parent};

use crate::components::form_modal::{FormModal, FormSeed, ModalIntent};
use crate::components::list_scaffold::ListScaffold;
use crate::components::table::{Column, DataTable};
use crate::state::list::{RemoteList, load_when_ready};
use crate::state::session::use_session;
use crate::util::search::filter_rows;

const COLUMNS: &[Column] = &[
    Column::new("Info"),
    Column::hidden_on_narrow("Students"),
    Column::hidden_on_narrow("Phone"),
    Column::hidden_on_narrow("Address"),
    Column::new("Actions"),
];

#[component]
pub fn ParentListPage() -> impl IntoView {
    let session = use_session();
    let list = RemoteList::<ParentRow>::new();
    load_when_ready::<RawParent, ParentRow>(list, EntityKind::Parent, project_parent);
    let query = RwSignal::new(String::new());

    let filtered = move || {
        filter_rows(&list.rows.get(), &query.get(), |row| {
            format!("{} {} {}", row.name, row.email, row.students)
        })
    };
    let can_manage = move || session.get().can_manage();

    view! {
        <ListScaffold kind=EntityKind::Parent query=query loading=list.loading>
            <DataTable columns=COLUMNS>
                {move || {
                    filtered()
                        .into_iter()
                        .map(|row| {
                            let update = ModalIntent::Update(FormSeed::Parent(row.clone()));
                            let delete =
                                ModalIntent::Delete { kind: EntityKind::Parent, id: row.id };
                            view! {
                                <tr class="data-table__row">
                                    <td>
                                        <div class="data-table__identity">
                                            <h3>{row.name}</h3>
                                            <p>{row.email}</p>
                                        </div>
                                    </td>
                                    <td class="data-table__narrow-hidden">{row.students}</td>
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
