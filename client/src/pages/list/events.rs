//! Events list page.

use leptos::prelude::*;
use records::entity::EntityKind;
use records::raw::RawEvent;
use records::rows::{EventRow, project_event};

use crate::components::form_modal::{FormModal, FormSeed, ModalIntent};
use crate::components::list_scaffold::ListScaffold;
use crate::components::table::{Column, DataTable};
use crate::state::list::{RemoteList, load_when_ready};
use crate::state::session::use_session;
use crate::util::search::filter_rows;

const COLUMNS: &[Column] = &[
    Column::new("Title"),
    Column::new("Class"),
    Column::hidden_on_narrow("Date"),
    Column::hidden_on_narrow("Start Time"),
    Column::hidden_on_narrow("End Time"),
    Column::new("Actions"),
];

#[component]
pub fn EventListPage() -> impl IntoView {
    let session = use_session();
    let list = RemoteList::<EventRow>::new();
    load_when_ready::<RawEvent, EventRow>(list, EntityKind::Event, project_event);
    let query = RwSignal::new(String::new());

    let filtered = move || {
        filter_rows(&list.rows.get(), &query.get(), |row| {
            format!("{} {}", row.title, row.class)
        })
    };
    let can_manage = move || session.get().can_manage();

    view! {
        <ListScaffold kind=EntityKind::Event query=query loading=list.loading>
            <DataTable columns=COLUMNS>
                {move || {
                    filtered()
                        .into_iter()
                        .map(|row| {
                            let update = ModalIntent::Update(FormSeed::Event(row.clone()));
                            let delete =
                                ModalIntent::Delete { kind: EntityKind::Event, id: row.id };
                            view! {
                                <tr class="data-table__row">
                                    <td>{row.title}</td>
                                    <td>{row.class}</td>
                                    <td class="data-table__narrow-hidden">{row.date}</td>
                                    <td class="data-table__narrow-hidden">{row.start_time}</td>
                                    <td class="data-table__narrow-hidden">{row.end_time}</td>
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
