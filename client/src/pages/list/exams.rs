//! Exams list page.

use leptos::prelude::*;
use records::entity::EntityKind;
use records::raw::RawExam;
use records::rows::{ExamRow, project_exam};

use crate::components::form_modal::{FormModal, FormSeed, ModalIntent};
use crate::components::list_scaffold::ListScaffold;
use crate::components::table::{Column, DataTable};
use crate::state::list::{RemoteList, load_when_ready};
use crate::state::session::use_session;
use crate::util::search::filter_rows;

const COLUMNS: &[Column] = &[
    Column::new("Exam Title"),
    Column::new("Lesson"),
    Column::hidden_on_narrow("Score"),
    Column::hidden_on_narrow("Start Time"),
    Column::hidden_on_narrow("End Time"),
    Column::new("Actions"),
];

#[component]
pub fn ExamListPage() -> impl IntoView {
    let session = use_session();
    let list = RemoteList::<ExamRow>::new();
    load_when_ready::<RawExam, ExamRow>(list, EntityKind::Exam, project_exam);
    let query = RwSignal::new(String::new());

    let filtered = move || {
        filter_rows(&list.rows.get(), &query.get(), |row| {
            format!("{} {}", row.exam_title, row.lesson_name)
        })
    };
    let can_manage = move || session.get().can_manage();

    view! {
        <ListScaffold kind=EntityKind::Exam query=query loading=list.loading>
            <DataTable columns=COLUMNS>
                {move || {
                    filtered()
                        .into_iter()
                        .map(|row| {
                            let update = ModalIntent::Update(FormSeed::Exam(row.clone()));
                            let delete =
                                ModalIntent::Delete { kind: EntityKind::Exam, id: row.id };
                            view! {
                                <tr class="data-table__row">
                                    <td>{row.exam_title}</td>
                                    <td>{row.lesson_name}</td>
                                    <td class="data-table__narrow-hidden">{row.score}</td>
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
