//! Lessons list page.

use leptos::prelude::*;
use records::entity::EntityKind;
use records::raw::RawLesson;
use records::rows::{LessonRow, project_lesson};

use crate::components::form_modal::{FormModal, FormSeed, ModalIntent};
use crate::components::list_scaffold::ListScaffold;
use crate::components::table::{Column, DataTable};
use crate::state::list::{RemoteList, load_when_ready};
use crate::state::session::use_session;
use crate::util::search::filter_rows;

const COLUMNS: &[Column] = &[
    Column::new("Lesson Name"),
    Column::new("Day"),
    Column::hidden_on_narrow("Start Time"),
    Column::hidden_on_narrow("End Time"),
    Column::hidden_on_narrow("Subject"),
    Column::hidden_on_narrow("Class"),
    Column::hidden_on_narrow("Teacher"),
    Column::new("Actions"),
];

#[component]
pub fn LessonListPage() -> impl IntoView {
    let session = use_session();
    let list = RemoteList::<LessonRow>::new();
    load_when_ready::<RawLesson, LessonRow>(list, EntityKind::Lesson, project_lesson);
    let query = RwSignal::new(String::new());

    let filtered = move || {
        filter_rows(&list.rows.get(), &query.get(), |row| {
            format!("{} {} {}", row.name, row.subject, row.teacher)
        })
    };
    let can_manage = move || session.get().can_manage();

    view! {
        <ListScaffold kind=EntityKind::Lesson query=query loading=list.loading>
            <DataTable columns=COLUMNS>
                {move || {
                    filtered()
                        .into_iter()
                        .map(|row| {
                            let update = ModalIntent::Update(FormSeed::Lesson(row.clone()));
                            let delete =
                                ModalIntent::Delete { kind: EntityKind::Lesson, id: row.id };
                            view! {
                                <tr class="data-table__row">
                                    <td>{row.name}</td>
                                    <td>{row.day}</td>
                                    <td class="data-table__narrow-hidden">{row.start_time}</td>
                                    <td class="data-table__narrow-hidden">{row.end_time}</td>
                                    <td class="data-table__narrow-hidden">{row.subject}</td>
                                    <td class="data-table__narrow-hidden">{row.class}</td>
                                    <td class="data-table__narrow-hidden">{row.teacher}</td>
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
