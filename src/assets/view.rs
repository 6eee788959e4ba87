//! Markup for the asset editor: the create/edit form and the asset table.

use maud::{Markup, html};

use crate::{
    alert::Alert,
    asset::{Asset, AssetField},
    editor::Editor,
    endpoints::{self, format_endpoint},
    html::{
        ALERT_TARGET, BUTTON_DELETE_STYLE, BUTTON_EDIT_STYLE, BUTTON_PRIMARY_STYLE,
        BUTTON_SECONDARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, LINK_STYLE,
        PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base,
        loading_spinner,
    },
    store::StoreSnapshot,
};

/// The id of the element that action responses replace.
pub const ASSET_EDITOR_ID: &str = "asset-editor";

/// The CSS selector for [ASSET_EDITOR_ID].
const ASSET_EDITOR_TARGET: &str = "#asset-editor";

/// The inputs shown in the form, in display order.
const FORM_INPUTS: [FormInput; 5] = [
    FormInput {
        field: AssetField::DealerId,
        label: "Dealer ID",
        required: true,
    },
    FormInput {
        field: AssetField::Msisdn,
        label: "MSISDN",
        required: true,
    },
    FormInput {
        field: AssetField::Mpin,
        label: "MPIN",
        required: true,
    },
    FormInput {
        field: AssetField::Balance,
        label: "Balance",
        required: true,
    },
    FormInput {
        field: AssetField::Remarks,
        label: "Remarks",
        required: false,
    },
];

struct FormInput {
    field: AssetField,
    label: &'static str,
    required: bool,
}

/// The full page: the editor wrapped in the base layout.
pub fn assets_page_view(snapshot: &StoreSnapshot, editor: &Editor) -> Markup {
    let content = html!(
        main class=(PAGE_CONTAINER_STYLE)
        {
            (asset_editor_view(snapshot, editor))
        }
    );

    base("Assets", &content)
}

/// The part of the page that is re-rendered after every action.
pub fn asset_editor_view(snapshot: &StoreSnapshot, editor: &Editor) -> Markup {
    html!(
        div id=(ASSET_EDITOR_ID) class="w-full max-w-5xl space-y-8"
        {
            h1 class="text-2xl font-bold" { "Asset Tracker" }

            @if let Some(error) = &snapshot.error {
                div id="refresh-error"
                {
                    (Alert::error("Could not load assets", error).into_html())
                }
            }

            (asset_form_view(editor))

            (asset_list_view(snapshot))
        }
    )
}

fn asset_form_view(editor: &Editor) -> Markup {
    let is_editing = editor.is_editing();
    let draft = editor.asset();
    let (title, submit_text) = if is_editing {
        ("Edit Asset", "Update Asset")
    } else {
        ("Create New Asset", "Create Asset")
    };

    html!(
        section class="p-4 border rounded-lg border-gray-300 dark:border-gray-600"
        {
            h2 class="text-xl font-semibold mb-2" { (title) }

            form
                hx-post=(endpoints::SUBMIT_DRAFT)
                hx-target=(ASSET_EDITOR_TARGET)
                hx-swap="outerHTML"
                hx-target-error=(ALERT_TARGET)
                data-mode=(if is_editing { "edit" } else { "create" })
                class="grid grid-cols-1 md:grid-cols-2 gap-4"
            {
                @for input in &FORM_INPUTS {
                    (form_input_view(input, draft, is_editing))
                }

                div class="md:col-span-2 flex justify-end gap-2"
                {
                    @if is_editing {
                        button
                            type="button"
                            hx-post=(endpoints::CANCEL_DRAFT)
                            hx-target=(ASSET_EDITOR_TARGET)
                            hx-swap="outerHTML"
                            hx-target-error=(ALERT_TARGET)
                            class=(BUTTON_SECONDARY_STYLE)
                        {
                            "Cancel Edit"
                        }
                    }

                    button type="submit" class=(BUTTON_PRIMARY_STYLE) { (submit_text) }
                }
            }
        }
    )
}

fn form_input_view(input: &FormInput, draft: &Asset, is_editing: bool) -> Markup {
    let name = input.field.name();
    // The dealer ID addresses the asset being edited.
    let disabled = is_editing && input.field == AssetField::DealerId;
    let wrapper_style = if input.field == AssetField::Remarks {
        "md:col-span-2"
    } else {
        ""
    };

    html!(
        div class=(wrapper_style)
        {
            label for=(name) class=(FORM_LABEL_STYLE) { (input.label) }

            input
                id=(name)
                type="text"
                name=(name)
                placeholder=(input.label)
                value=(draft.field(input.field))
                required[input.required]
                disabled[disabled]
                hx-put=(endpoints::DRAFT)
                hx-trigger="change"
                hx-swap="none"
                hx-target-error=(ALERT_TARGET)
                class=(FORM_TEXT_INPUT_STYLE);
        }
    )
}

fn asset_list_view(snapshot: &StoreSnapshot) -> Markup {
    html!(
        section class="space-y-4"
        {
            header class="flex justify-between flex-wrap items-end"
            {
                h2 class="text-xl font-semibold" { "Assets on Ledger" }

                button
                    type="button"
                    hx-post=(endpoints::REFRESH_ASSETS)
                    hx-target=(ASSET_EDITOR_TARGET)
                    hx-swap="outerHTML"
                    hx-target-error=(ALERT_TARGET)
                    class=(LINK_STYLE)
                {
                    "Reload"
                }
            }

            @if snapshot.loading {
                // Poll until the refresh started elsewhere settles.
                p
                    id="assets-loading"
                    hx-get=(endpoints::ASSETS_VIEW)
                    hx-trigger="load delay:1s"
                    hx-select=(ASSET_EDITOR_TARGET)
                    hx-target=(ASSET_EDITOR_TARGET)
                    hx-swap="outerHTML"
                {
                    (loading_spinner())
                    "Loading assets..."
                }
            } @else {
                (asset_table_view(&snapshot.assets))
            }
        }
    )
}

fn asset_table_view(assets: &[Asset]) -> Markup {
    html!(
        div class="overflow-x-auto"
        {
            table class="w-full text-sm text-left rtl:text-right text-gray-500 dark:text-gray-400"
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "Dealer ID" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "MSISDN" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Balance" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Status" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Remarks" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                    }
                }

                tbody
                {
                    @for asset in assets {
                        (asset_row_view(asset))
                    }

                    @if assets.is_empty() {
                        tr
                        {
                            td
                                colspan="6"
                                class="px-6 py-4 text-center text-gray-500 dark:text-gray-400"
                            {
                                "No assets found. Create an asset with the form above."
                            }
                        }
                    }
                }
            }
        }
    )
}

fn asset_row_view(asset: &Asset) -> Markup {
    let edit_url = format_endpoint(endpoints::EDIT_ASSET, &asset.dealer_id);
    let delete_url = format_endpoint(endpoints::DELETE_ASSET, &asset.dealer_id);

    html!(
        tr class=(TABLE_ROW_STYLE) data-dealer-id=(asset.dealer_id)
        {
            th
                scope="row"
                class="px-6 py-4 font-medium text-gray-900 whitespace-nowrap dark:text-white"
            {
                (asset.dealer_id)
            }
            td class=(TABLE_CELL_STYLE) { (asset.msisdn) }
            td class=(TABLE_CELL_STYLE) { (asset.balance) }
            td class=(TABLE_CELL_STYLE) { (asset.status) }
            td class=(TABLE_CELL_STYLE) { (asset.remarks) }
            td class=(TABLE_CELL_STYLE)
            {
                div class="flex gap-4"
                {
                    button
                        type="button"
                        hx-post=(edit_url)
                        hx-target=(ASSET_EDITOR_TARGET)
                        hx-swap="outerHTML"
                        hx-target-error=(ALERT_TARGET)
                        class=(BUTTON_EDIT_STYLE)
                    {
                        "Edit"
                    }

                    button
                        type="button"
                        hx-delete=(delete_url)
                        hx-target=(ASSET_EDITOR_TARGET)
                        hx-swap="outerHTML"
                        hx-target-error=(ALERT_TARGET)
                        class=(BUTTON_DELETE_STYLE)
                    {
                        "Delete"
                    }
                }
            }
        }
    )
}
