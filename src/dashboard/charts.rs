//! The spending by category pie chart.
//!
//! The chart is generated as JSON configuration for the ECharts library and
//! rendered with an HTML container and JavaScript initialization code.

use charming::{
    Chart,
    component::Legend,
    element::{Color, JsFunction, Label, Tooltip, Trigger},
    series::Pie,
};
use maud::{Markup, PreEscaped, html};

use crate::{client::CategoryTotal, html::HeadElement};

/// The HTML element ID of the chart container.
pub(super) const SPENDING_CHART_ID: &str = "spending-chart";

/// Slice colours, reused in order when there are more categories than colours.
const PALETTE: [&str; 6] = [
    "#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#A28CFF", "#FF6699",
];

pub(super) fn spending_chart(totals: &[CategoryTotal]) -> Chart {
    let data = totals
        .iter()
        .map(|total| (total.value, total.name.clone()))
        .collect::<Vec<_>>();

    Chart::new()
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Item)
                .value_formatter(currency_formatter()),
        )
        .legend(Legend::new().top("bottom"))
        .color(PALETTE.into_iter().map(Color::from).collect())
        .series(
            Pie::new()
                .name("Spending")
                .radius("60%")
                .center(vec!["50%", "45%"])
                .label(Label::new().show(true))
                .data(data),
        )
}

/// Renders the heading and container for the spending chart.
pub(super) fn chart_view() -> Markup {
    html!(
        section
            id="spending-chart-section"
            class="w-full max-w-2xl mx-auto mb-4"
        {
            h2 class="text-xl font-bold mb-2" { "Spending by Category" }

            div
                id=(SPENDING_CHART_ID)
                class="min-h-[300px] rounded dark:bg-gray-100"
            {}
        }
    )
}

/// Generates the JavaScript that draws `chart` into the chart container once
/// the page has loaded.
pub(super) fn chart_script(chart: &Chart) -> HeadElement {
    // Category names are user input, keep them from closing the script tag.
    let options = chart.to_string().replace("</", "<\\/");

    let script = format!(
        r#"document.addEventListener('DOMContentLoaded', function() {{
            const chartDom = document.getElementById("{SPENDING_CHART_ID}");
            const chart = echarts.init(chartDom);
            const option = {options};
            chart.setOption(option);

            window.addEventListener('resize', chart.resize);
        }});"#
    );

    HeadElement::ScriptSource(PreEscaped(script))
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-US', {
              style: 'currency',
              currency: 'USD'
            });
            return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}
