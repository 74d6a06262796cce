pub mod category_chart;
pub mod category_list;

use shared::view::statistics_total_text;
use shared::{Command, ViewState};
use yew::prelude::*;

use super::period_tabs::PeriodTabs;
use category_chart::CategoryChart;
use category_list::CategoryList;

#[derive(Properties, PartialEq)]
pub struct StatisticsPageProps {
    pub state: ViewState,
    pub dispatch: Callback<Command>,
}

#[function_component(StatisticsPage)]
pub fn statistics_page(props: &StatisticsPageProps) -> Html {
    let state = &props.state;
    let statistics = &state.statistics;

    let on_period = props.dispatch.reform(Command::SelectStatisticsPeriod);
    let on_hover = props.dispatch.reform(Command::HighlightCategory);

    // Nothing is drawn until the first breakdown response arrives
    let breakdown = match &statistics.by_category {
        Some(data) => html! {
            <div class="row">
                <div class="col-md-6">
                    <CategoryChart
                        data={data.clone()}
                        generation={statistics.chart_generation}
                        highlighted={statistics.highlighted}
                    />
                </div>
                <div class="col-md-6">
                    <CategoryList data={data.clone()} highlighted={statistics.highlighted} {on_hover} />
                </div>
            </div>
        },
        None => html! { <div class="loading">{"Carregando..."}</div> },
    };

    html! {
        <section class="content-page active" id="estatisticas-page">
            <div class="page-header">
                <h2>{"Estatísticas"}</h2>
            </div>

            <PeriodTabs id="periodoTabsEstatisticas" selected={state.statistics_period} on_select={on_period} />

            <div class="card total-card">
                <div class="card-body">
                    <span class="total-label">{"Total de despesas: "}</span>
                    <span class="total-valor" id="total-despesas-estatisticas">
                        {statistics_total_text(state)}
                    </span>
                </div>
            </div>

            {breakdown}
        </section>
    }
}
