//! Generic list table: search, status tabs, sortable columns, row
//! selection, pagination and export over a [`CollectionView`].
//!
//! Entity pages only describe their columns:
//!
//! ```ignore
//! fn columns() -> Vec<Column<User>> {
//!     vec![
//!         Column::new("name", "Name", |u: &User| cell_text(u.full_name())),
//!         Column::new("status", "Status", |u: &User| status_badge(&u.status)),
//!     ]
//! }
//!
//! view! {
//!     <CollectionPanel
//!         collection=collection
//!         columns=columns()
//!         status_options=status_options(USER_STATUSES)
//!         loading=loading
//!         export_name="users"
//!     />
//! }
//! ```

use leptos::prelude::*;
use thaw::*;

use super::pagination_controls::PaginationControls;
use super::search_input::SearchInput;
use super::status_filter_tabs::StatusFilterTabs;
use super::table::{SortableHeaderCell, TableCellCheckbox, TableHeaderCheckbox};
use crate::shared::collection::{CollectionRecord, CollectionView, RowKey, StatusOption};
use crate::shared::export::{export_filename, export_to_excel, ExcelExportable};
use crate::shared::icons::icon;
use crate::shared::notify::use_notify;

/// Display rule for one column.
pub struct Column<T> {
    /// Field name passed to `Sortable::sort_key`.
    pub field: &'static str,
    pub label: &'static str,
    pub sortable: bool,
    pub numeric: bool,
    pub min_width: f64,
    pub render: fn(&T) -> AnyView,
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Column<T> {}

impl<T> Column<T> {
    pub fn new(field: &'static str, label: &'static str, render: fn(&T) -> AnyView) -> Self {
        Self {
            field,
            label,
            sortable: true,
            numeric: false,
            min_width: 120.0,
            render,
        }
    }

    pub fn unsorted(mut self) -> Self {
        self.sortable = false;
        self
    }

    /// Right-aligned.
    pub fn numeric(mut self) -> Self {
        self.numeric = true;
        self
    }

    pub fn width(mut self, min_width: f64) -> Self {
        self.min_width = min_width;
        self
    }
}

#[component]
pub fn CollectionPanel<T>(
    collection: RwSignal<CollectionView<T>>,
    columns: Vec<Column<T>>,
    /// Status tabs; none are shown when empty.
    #[prop(optional)]
    status_options: Vec<StatusOption>,
    #[prop(into)]
    loading: Signal<bool>,
    /// File name prefix for exports.
    export_name: &'static str,
    #[prop(optional, into)]
    search_placeholder: String,
    /// Per-row action buttons rendered in the last column.
    #[prop(optional)]
    actions: Option<Callback<T, AnyView>>,
) -> impl IntoView
where
    T: CollectionRecord + ExcelExportable + Send + Sync + 'static,
{
    let notify = use_notify();
    let columns = StoredValue::new(columns);
    let column_count = columns.with_value(|c| c.len()) + 1 + usize::from(actions.is_some());
    let has_status_tabs = !status_options.is_empty();

    let query = Signal::derive(move || collection.with(|v| v.query().to_string()));
    let status = Signal::derive(move || collection.with(|v| v.status_filter().clone()));
    let sort_field = Signal::derive(move || collection.with(|v| v.sort_field().to_string()));
    let sort_ascending = Signal::derive(move || collection.with(|v| v.sort_ascending()));
    let rows = Signal::derive(move || collection.with(|v| v.keyed_page_rows()));
    let selected_count = Signal::derive(move || collection.with(|v| v.selection().len()));

    let on_export = move |_| {
        let rows = collection.with_untracked(|v| v.export_rows());
        if let Err(e) = export_to_excel(&rows, &export_filename(export_name)) {
            log::error!("Export of {} failed: {}", export_name, e);
            notify.error(e);
        }
    };

    view! {
        <div class="collection-panel">
            <div class="filter-panel">
                <div class="filter-panel-header">
                    <div class="filter-panel-header__left">
                        <SearchInput
                            value=query
                            on_change=Callback::new(move |q: String| collection.update(|v| v.set_query(&q)))
                            placeholder=search_placeholder
                        />
                        {has_status_tabs.then(|| view! {
                            <StatusFilterTabs
                                options=status_options
                                current=status
                                on_select=Callback::new(move |f| collection.update(|v| v.set_status_filter(f)))
                            />
                        })}
                    </div>
                    <div class="filter-panel-header__right">
                        <Show when=move || selected_count.get() != 0>
                            <span class="filter-panel__selection">
                                {move || format!("{} selected", selected_count.get())}
                            </span>
                            <Button
                                appearance=ButtonAppearance::Subtle
                                on_click=move |_| collection.update(|v| v.clear_selection())
                            >
                                "Clear"
                            </Button>
                        </Show>
                        <Button appearance=ButtonAppearance::Secondary on_click=on_export>
                            {icon("download")}
                            " Export"
                        </Button>
                    </div>
                </div>
            </div>

            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCheckbox
                                state=Signal::derive(move || collection.with(|v| v.page_selection_state()))
                                on_change=Callback::new(move |checked| collection.update(|v| v.set_page_selected(checked)))
                            />
                            {columns.get_value().into_iter().map(|col| {
                                let align = if col.numeric { "right" } else { "left" };
                                if col.sortable {
                                    view! {
                                        <SortableHeaderCell
                                            label=col.label
                                            sort_field=col.field
                                            current_sort_field=sort_field
                                            sort_ascending=sort_ascending
                                            on_sort=Callback::new(move |field: String| collection.update(|v| v.toggle_sort(&field)))
                                            min_width=col.min_width
                                            align=align
                                        />
                                    }.into_any()
                                } else {
                                    view! {
                                        <TableHeaderCell resizable=false min_width=col.min_width>
                                            {col.label}
                                        </TableHeaderCell>
                                    }.into_any()
                                }
                            }).collect_view()}
                            {actions.is_some().then(|| view! {
                                <TableHeaderCell resizable=false min_width=80.0>""</TableHeaderCell>
                            })}
                        </TableRow>
                    </TableHeader>

                    <TableBody>
                        <For
                            each=move || rows.get()
                            key=|(key, _): &(RowKey, T)| key.clone()
                            children=move |(_, row): (RowKey, T)| {
                                let id = row.record_id();
                                let id_for_checked = id.clone();
                                let checked = Signal::derive(move || collection.with(|v| v.is_selected(&id_for_checked)));
                                let cells = columns
                                    .get_value()
                                    .into_iter()
                                    .map(|col| {
                                        let class = if col.numeric { "table__cell--numeric" } else { "" };
                                        let content = (col.render)(&row);
                                        view! {
                                            <TableCell class=class>
                                                <TableCellLayout truncate=true>{content}</TableCellLayout>
                                            </TableCell>
                                        }
                                    })
                                    .collect_view();
                                let action_cell = actions.map(|a| {
                                    let content = a.run(row.clone());
                                    view! {
                                        <TableCell class="table__cell--actions">{content}</TableCell>
                                    }
                                });
                                view! {
                                    <TableRow>
                                        <TableCellCheckbox
                                            checked=checked
                                            on_change=Callback::new(move |on: bool| collection.update(|v| v.toggle_row(&id, on)))
                                        />
                                        {cells}
                                        {action_cell}
                                    </TableRow>
                                }
                            }
                        />
                        <Show when=move || rows.with(|r| r.is_empty())>
                            <TableRow>
                                <TableCell attr:colspan=column_count.to_string()>
                                    <div class="table__empty">
                                        {move || if loading.get() { "Loading..." } else { "No records found" }}
                                    </div>
                                </TableCell>
                            </TableRow>
                        </Show>
                    </TableBody>
                </Table>
            </div>

            <PaginationControls
                current_page=Signal::derive(move || collection.with(|v| v.page()))
                total_pages=Signal::derive(move || collection.with(|v| v.page_count()))
                total_count=Signal::derive(move || collection.with(|v| v.filtered_count()))
                page_size=Signal::derive(move || collection.with(|v| v.page_size()))
                on_page_change=Callback::new(move |page| collection.update(|v| v.set_page(page)))
                on_page_size_change=Callback::new(move |size| collection.update(|v| v.set_page_size(size)))
            />
        </div>
    }
}
