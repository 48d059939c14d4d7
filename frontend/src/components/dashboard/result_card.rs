use yew::{html, AttrValue, Children, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct ResultCardProps {
    pub title: AttrValue,
    /// Material icon name shown next to the title.
    pub icon: AttrValue,
    pub children: Children,
}

pub struct ResultCard;

impl Component for ResultCard {
    type Message = ();
    type Properties = ResultCardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ResultCard
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <section class="result-card">
                <div class="result-card-header">
                    <i class="material-icons">{ props.icon.clone() }</i>
                    <h2>{ props.title.clone() }</h2>
                </div>
                <div class="result-card-body">
                    { for props.children.iter() }
                </div>
            </section>
        }
    }
}
