use common::model::preview::CsvPreview;
use yew::{html, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct DataTableProps {
    pub preview: CsvPreview,
}

/// Scrollable preview table: first row as headers, the rest as body.
pub struct DataTable;

impl Component for DataTable {
    type Message = ();
    type Properties = DataTableProps;

    fn create(_ctx: &Context<Self>) -> Self {
        DataTable
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let preview = &ctx.props().preview;
        if preview.is_empty() {
            return html! { <p>{"No data to display."}</p> };
        }

        html! {
            <div class="data-table">
                <table>
                    <thead>
                        <tr>
                            { for preview.headers().iter().map(|h| html! { <th scope="col">{ h.clone() }</th> }) }
                        </tr>
                    </thead>
                    <tbody>
                        { for preview.body().iter().map(|row| html! {
                            <tr>
                                { for row.iter().map(|cell| html! { <td>{ cell.clone() }</td> }) }
                            </tr>
                        }) }
                    </tbody>
                </table>
            </div>
        }
    }
}
