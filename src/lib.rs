use wasm_bindgen::prelude::*;
use yew::prelude::*;

pub mod api;
pub mod components;
pub mod config;
pub mod criteria;
pub mod error;
pub mod model;
pub mod navigation;
pub mod search;

use api::HttpPetApi;
use components::search_form::SearchForm;
use components::search_results::SearchResults;
use config::Config;
use criteria::SearchCriteria;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub api: HttpPetApi,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let criteria = use_state(|| {
        navigation::read_criteria().unwrap_or_else(|err| {
            log::error!("could not read search criteria from URL: {:?}", err);
            SearchCriteria::default()
        })
    });

    let on_search = {
        let criteria = criteria.clone();
        Callback::from(move |next: SearchCriteria| {
            if let Err(err) = navigation::write_criteria(&next) {
                log::warn!("could not update URL: {:?}", err);
            }
            criteria.set(next);
        })
    };

    html! {
        <div class="container">
            <h1>{"Find a pet to adopt"}</h1>
            <SearchForm criteria={(*criteria).clone()} {on_search} />
            <SearchResults criteria={(*criteria).clone()} api={props.api.clone()} />
        </div>
    }
}

// Starting the Yew application
#[wasm_bindgen(start)]
pub fn run_app() -> Result<(), JsValue> {
    let config = Config::from_env();
    console_log::init_with_level(config.log_level).map_err(|e| JsValue::from_str(&e.to_string()))?;
    log::info!("Pet search initialized, API at {}", config.api_base_url);

    yew::Renderer::<App>::with_props(AppProps {
        api: HttpPetApi::new(config.api_base_url),
    })
    .render();
    Ok(())
}
