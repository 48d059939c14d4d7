use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AppHeaderProps {
    /// Whether the "Analyze New File" button is visible.
    pub show_reset: bool,
    pub on_reset: Callback<MouseEvent>,
}

pub struct AppHeader;

impl Component for AppHeader {
    type Message = ();
    type Properties = AppHeaderProps;

    fn create(_ctx: &Context<Self>) -> Self {
        AppHeader
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <header class="app-header container">
                <div class="brand">
                    <i class="material-icons brand-icon">{"psychology"}</i>
                    <div>
                        <h1>{"Support Intelligence Hub"}</h1>
                        <p class="subtitle">{"AI-Powered Log & Data Analysis"}</p>
                    </div>
                </div>
                if props.show_reset {
                    <button class="reset-btn" onclick={props.on_reset.clone()}>
                        {"Analyze New File"}
                    </button>
                }
            </header>
        }
    }
}
