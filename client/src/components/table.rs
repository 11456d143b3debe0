//! Column descriptors and the shared data table shell.

use leptos::prelude::*;

/// One column of a list page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Column {
    pub header: &'static str,
    /// Collapse on narrow viewports (the `hidden md:table-cell` of old).
    pub narrow_hidden: bool,
}

impl Column {
    #[must_use]
    pub const fn new(header: &'static str) -> Self {
        Self { header, narrow_hidden: false }
    }

    #[must_use]
    pub const fn hidden_on_narrow(header: &'static str) -> Self {
        Self { header, narrow_hidden: true }
    }
}

/// Table shell: headers from the column descriptors, rows from children.
#[component]
pub fn DataTable(columns: &'static [Column], children: Children) -> impl IntoView {
    view! {
        <table class="data-table">
            <thead>
                <tr>
                    {columns
                        .iter()
                        .map(|col| {
                            view! {
                                <th class:data-table__narrow-hidden=col.narrow_hidden>
                                    {col.header}
                                </th>
                            }
                        })
                        .collect::<Vec<_>>()}
                </tr>
            </thead>
            <tbody>{children()}</tbody>
        </table>
    }
}
