//! HTML views for the expense tracker page.

use maud::{Markup, html};
use time::{Date, macros::format_description};

use crate::{
    client::{ExpenseClient, ExpenseFilter},
    dashboard::charts::{chart_script, chart_view, spending_chart},
    endpoints::{self, format_endpoint},
    expense::Expense,
    html::{
        BUTTON_DELETE_STYLE, BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, FORM_LABEL_STYLE,
        FORM_TEXT_INPUT_STYLE, HeadElement, PAGE_CONTAINER_STYLE, base, format_currency,
    },
};

const ECHARTS_URL: &str = "https://cdn.jsdelivr.net/npm/echarts@6.0.0/dist/echarts.min.js";

/// Render the whole page for the current client state.
///
/// The chart is left out entirely when no expenses pass the filter.
pub(super) fn expenses_page_view<A>(client: &ExpenseClient<A>) -> Markup {
    let filtered_expenses = client.filtered_expenses();

    let head_elements = if filtered_expenses.is_empty() {
        Vec::new()
    } else {
        vec![
            HeadElement::ScriptLink(ECHARTS_URL.to_owned()),
            chart_script(&spending_chart(&client.category_data())),
        ]
    };

    let content = html! {
        div class=(PAGE_CONTAINER_STYLE)
        {
            h1 class="text-3xl font-bold mb-6" { "Expense Tracker" }

            (expense_form_view())
            (filter_view(client.filter()))

            @if !filtered_expenses.is_empty() {
                (chart_view())
            }

            (expense_list_view(&filtered_expenses))
        }
    };

    base("Expenses", &head_elements, &content)
}

fn expense_form_view() -> Markup {
    html! {
        form
            id="expense-form"
            hx-post=(endpoints::EXPENSES_FORM)
            hx-target-error="#alert-container"
            class="w-full max-w-2xl grid grid-cols-1 md:grid-cols-4 gap-4 items-end mb-6"
        {
            div
            {
                label for="title" class=(FORM_LABEL_STYLE) { "Title" }
                input
                    id="title"
                    type="text"
                    name="title"
                    placeholder="Title"
                    required
                    autofocus
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }
                input
                    id="amount"
                    type="number"
                    name="amount"
                    placeholder="Amount"
                    step="0.01"
                    min="0"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="category" class=(FORM_LABEL_STYLE) { "Category" }
                input
                    id="category"
                    type="text"
                    name="category"
                    placeholder="Category"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add Expense" }
        }
    }
}

fn filter_view(filter: &ExpenseFilter) -> Markup {
    let start_date = filter.start_date.map(format_date).unwrap_or_default();
    let end_date = filter.end_date.map(format_date).unwrap_or_default();

    html! {
        form
            id="filter-form"
            method="get"
            action=(endpoints::ROOT)
            class="w-full max-w-2xl grid grid-cols-1 md:grid-cols-5 gap-4 items-end mb-6"
        {
            div class="md:col-span-2"
            {
                label for="filter-category" class=(FORM_LABEL_STYLE) { "Category" }
                input
                    id="filter-category"
                    type="text"
                    name="category"
                    placeholder="Filter by Category"
                    value=(filter.category)
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="start-date" class=(FORM_LABEL_STYLE) { "From" }
                input
                    id="start-date"
                    type="date"
                    name="start_date"
                    value=(start_date)
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="end-date" class=(FORM_LABEL_STYLE) { "To" }
                input
                    id="end-date"
                    type="date"
                    name="end_date"
                    value=(end_date)
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div class="flex flex-col"
            {
                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Filter" }
                a
                    id="clear-filters"
                    href=(endpoints::ROOT)
                    class=(format!("mt-2 text-center {BUTTON_SECONDARY_STYLE}"))
                {
                    "Clear Filters"
                }
            }
        }
    }
}

fn expense_list_view(expenses: &[&Expense]) -> Markup {
    html! {
        ul id="expense-list" class="w-full max-w-2xl divide-y divide-gray-200 dark:divide-gray-700"
        {
            @for expense in expenses {
                li class="expense-item flex justify-between items-center py-3"
                {
                    span
                    {
                        (expense.title) " - " (format_currency(expense.amount))
                        " (" (expense.category) ")"
                    }

                    button
                        hx-delete=(format_endpoint(endpoints::DELETE_EXPENSE_FORM, expense.id))
                        hx-target-error="#alert-container"
                        class=(BUTTON_DELETE_STYLE)
                    {
                        "Delete"
                    }
                }
            }
        }

        @if expenses.is_empty() {
            p class="text-gray-500 dark:text-gray-400" { "No expenses to show." }
        }
    }
}

fn format_date(date: Date) -> String {
    date.format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_default()
}
