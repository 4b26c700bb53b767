use crate::criteria::SearchCriteria;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

pub const SPECIES_OPTIONS: &[(&str, &str)] = &[
    ("", "Any animal"),
    ("dog", "Dogs"),
    ("cat", "Cats"),
    ("other", "Other"),
];

#[derive(Properties, PartialEq)]
pub struct SearchFormProps {
    pub criteria: SearchCriteria,
    pub on_search: Callback<SearchCriteria>,
}

#[function_component(SearchForm)]
pub fn search_form(props: &SearchFormProps) -> Html {
    let draft = use_state(|| props.criteria.clone());

    let handle_search_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                draft.set(SearchCriteria {
                    search: input.value(),
                    ..(*draft).clone()
                });
            }
        })
    };

    let handle_animal_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                draft.set(SearchCriteria {
                    animal: select.value(),
                    ..(*draft).clone()
                });
            }
        })
    };

    let handle_submit = {
        let draft = draft.clone();
        let on_search = props.on_search.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let criteria = SearchCriteria::new(draft.search.trim(), draft.animal.clone());
            log::info!("new search: {:?}", criteria);
            on_search.emit(criteria);
        })
    };

    html! {
        <form class="search-form" onsubmit={handle_submit}>
            <label class="search-field">
                <span>{"Location"}</span>
                <input
                    type="text"
                    id="searchInput"
                    placeholder="State, city or postal code"
                    value={draft.search.clone()}
                    oninput={handle_search_input}
                />
            </label>
            <label class="search-field">
                <span>{"Animal"}</span>
                <select id="animalSelect" onchange={handle_animal_change}>
                    {
                        SPECIES_OPTIONS.iter().map(|(value, label)| html! {
                            <option value={*value} selected={draft.animal == *value}>{*label}</option>
                        }).collect::<Html>()
                    }
                </select>
            </label>
            <button type="submit" class="search-button">{"Search"}</button>
        </form>
    }
}
