use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingSpinnerProps {
    pub loading: bool,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &LoadingSpinnerProps) -> Html {
    if !props.loading {
        return html! {};
    }
    html! {
        <div class="loading-spinner" role="status" aria-live="polite">
            <div class="spinner"></div>
            <span class="loading-text">{"Loading..."}</span>
        </div>
    }
}
