use dioxus::prelude::*;
use shared_types::{AppError, FeatureFlags, InventoryItem, NewInventoryItem};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonType, ButtonVariant, Card, CardDescription, CardHeader,
    CardTitle, DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableHeader, DataTableRow,
    EmptyState, FieldError, Form, Input, Sheet, SheetFooter, SheetHeader,
};

use crate::components::InventoryHeader;
use crate::notify::use_notifier;

/// Items at or below this quantity are flagged as running low.
const LOW_STOCK_THRESHOLD: u32 = 5;

/// Clinic supplies list with an add-item sheet.
#[component]
pub fn Inventory() -> Element {
    let flags: FeatureFlags = use_context();
    let mut items = use_signal(Vec::<InventoryItem>::new);
    let mut show_sheet = use_signal(|| false);

    if !flags.inventory {
        return rsx! {
            div { class: "container",
                Card {
                    CardHeader {
                        CardTitle { "Inventory is turned off" }
                        CardDescription { "Enable it under [features] in config.toml." }
                    }
                }
            }
        };
    }

    rsx! {
        div { class: "container",
            InventoryHeader { on_add: move |_| show_sheet.set(true) }

            if items.read().is_empty() {
                EmptyState {
                    title: "No items yet",
                    description: "Add supplies to start tracking stock.",
                }
            } else {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Item" }
                        DataTableColumn { "Quantity" }
                        DataTableColumn { "Added" }
                    }
                    DataTableBody {
                        for item in items.read().iter().cloned() {
                            InventoryRow { key: "{item.id}", item }
                        }
                    }
                }
            }

            AddItemSheet {
                open: show_sheet(),
                on_close: move |_| show_sheet.set(false),
                on_added: move |item: InventoryItem| items.write().push(item),
            }
        }
    }
}

#[component]
fn InventoryRow(item: InventoryItem) -> Element {
    let added = item.added_at.format("%b %-d, %Y").to_string();
    let low = item.quantity <= LOW_STOCK_THRESHOLD;

    rsx! {
        DataTableRow {
            DataTableCell { "{item.name}" }
            DataTableCell { numeric: true,
                "{item.quantity} {item.unit}"
                if low {
                    Badge { variant: BadgeVariant::Warning, "Low" }
                }
            }
            DataTableCell { "{added}" }
        }
    }
}

#[component]
fn AddItemSheet(
    open: bool,
    on_close: EventHandler<()>,
    on_added: EventHandler<InventoryItem>,
) -> Element {
    let notifier = use_notifier();
    let mut name = use_signal(String::new);
    let mut quantity = use_signal(String::new);
    let mut unit = use_signal(String::new);
    let mut errors = use_signal(|| None::<AppError>);

    let handle_save = move |_: FormEvent| {
        let form = NewInventoryItem {
            name: name.read().clone(),
            quantity: quantity.read().clone(),
            unit: unit.read().clone(),
        };
        match form.validate() {
            Ok(item) => {
                tracing::info!(item = %item.name, quantity = item.quantity, "Inventory item added");
                if item.quantity <= LOW_STOCK_THRESHOLD {
                    notifier.warning(format!(
                        "{} added, only {} {} in stock",
                        item.name, item.quantity, item.unit
                    ));
                } else {
                    notifier.success(format!("{} added", item.name));
                }
                on_added.call(item);
                name.set(String::new());
                quantity.set(String::new());
                unit.set(String::new());
                errors.set(None);
                on_close.call(());
            }
            Err(e) => {
                tracing::warn!(error = %e, "Inventory form rejected");
                notifier.error(e.friendly_message());
                errors.set(Some(e));
            }
        }
    };

    let field_error = move |field: &str| {
        errors
            .read()
            .as_ref()
            .and_then(|e| e.field_error(field))
            .map(str::to_string)
    };

    rsx! {
        Sheet { open, on_close,
            SheetHeader {
                title: "Add Item",
                description: "Record a new supply and its starting stock.",
                on_close,
            }
            Form { class: "inventory-form", onsubmit: handle_save,
                Input {
                    label: "Item name",
                    required: true,
                    value: name.read().clone(),
                    on_input: move |e: FormEvent| name.set(e.value()),
                    placeholder: "e.g., Nitrile gloves",
                }
                FieldError { message: field_error("name") }

                Input {
                    label: "Quantity",
                    input_type: "number",
                    required: true,
                    value: quantity.read().clone(),
                    on_input: move |e: FormEvent| quantity.set(e.value()),
                    placeholder: "1",
                }
                FieldError { message: field_error("quantity") }

                Input {
                    label: "Unit",
                    value: unit.read().clone(),
                    on_input: move |e: FormEvent| unit.set(e.value()),
                    placeholder: "boxes",
                }

                SheetFooter {
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        button_type: ButtonType::Submit,
                        "Save Item"
                    }
                }
            }
        }
    }
}
