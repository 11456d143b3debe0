//! Announcements list page.

use leptos::prelude::*;
use records::entity::EntityKind;
use records::raw::RawAnnouncement;
use records::rows::{AnnouncementRow, project_announcement};

use crate::components::form_modal::{FormModal, FormSeed, ModalIntent};
use crate::components::list_scaffold::ListScaffold;
use crate::components::table::{Column, DataTable};
use crate::state::list::{RemoteList, load_when_ready};
use crate::state::session::use_session;
use crate::util::search::filter_rows;

const COLUMNS: &[Column] = &[
    Column::new("Title"),
    Column::hidden_on_narrow("Description"),
    Column::hidden_on_narrow("Date"),
    Column::hidden_on_narrow("Class"),
    Column::new("Actions"),
];

#[component]
pub fn AnnouncementListPage() -> impl IntoView {
    let session = use_session();
    let list = RemoteList::<AnnouncementRow>::new();
    load_when_ready::<RawAnnouncement, AnnouncementRow>(
        list,
        EntityKind::Announcement,
        project_announcement,
    );
    let query = RwSignal::new(String::new());

    let filtered = move || {
        filter_rows(&list.rows.get(), &query.get(), |row| {
            format!("{} {}", row.title, row.description)
        })
    };
    let can_manage = move || session.get().can_manage();

    view! {
        <ListScaffold kind=EntityKind::Announcement query=query loading=list.loading>
            <DataTable columns=COLUMNS>
                {move || {
                    filtered()
                        .into_iter()
                        .map(|row| {
                            let update = ModalIntent::Update(FormSeed::Announcement(row.clone()));
                            let delete =
                                ModalIntent::Delete { kind: EntityKind::Announcement, id: row.id };
                            view! {
                                <tr class="data-table__row">
                                    <td>{row.title}</td>
                                    <td class="data-table__narrow-hidden">{row.description}</td>
                                    <td class="data-table__narrow-hidden">{row.date}</td>
                                    <td class="data-table__narrow-hidden">{row.class}</td>
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
