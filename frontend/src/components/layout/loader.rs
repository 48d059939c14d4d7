use yew::{html, Component, Context, Html};

pub struct Loader;

impl Component for Loader {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Loader
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="loader" data-testid="loader">
                <div class="spinner"></div>
                <p class="loader-title">{"Analyzing Data..."}</p>
                <p class="loader-text">{"The AI is surfacing insights, please wait a moment."}</p>
            </div>
        }
    }
}
