use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{HttpPetApi, PetApi};
use crate::components::loading_spinner::LoadingSpinner;
use crate::components::pet_card::PetCard;
use crate::components::search_error::SearchError;
use crate::criteria::SearchCriteria;
use crate::model::Pet;
use crate::search::search_pets;

pub const FETCH_FAILED: &str = "Failed to fetch pets data";
pub const NO_RESULTS: &str = "No results found for your search.";

#[derive(Clone, PartialEq, Debug)]
pub enum ResultsState {
    Loading,
    Loaded(Rc<Vec<Pet>>),
    Failed(AttrValue),
}

#[derive(Properties, PartialEq)]
pub struct SearchResultsProps {
    pub criteria: SearchCriteria,
    pub api: HttpPetApi,
}

/// One search issued by the results view. Once cancelled, its outcome is
/// dropped instead of replacing newer state.
#[derive(Clone)]
pub struct SearchTask {
    current: Rc<Cell<bool>>,
}

impl SearchTask {
    /// Resets the view to `Loading` and returns the live task.
    pub fn start(on_state: &Callback<ResultsState>) -> Self {
        on_state.emit(ResultsState::Loading);
        Self {
            current: Rc::new(Cell::new(true)),
        }
    }

    pub fn cancel(&self) {
        self.current.set(false);
    }

    pub async fn run<A: PetApi>(self, api: &A, criteria: &SearchCriteria, on_state: Callback<ResultsState>) {
        let next = match search_pets(api, criteria).await {
            Ok(pets) => ResultsState::Loaded(Rc::new(pets)),
            Err(err) => {
                log::error!("search for {:?} failed: {}", criteria, err);
                ResultsState::Failed(FETCH_FAILED.into())
            }
        };
        if self.current.get() {
            on_state.emit(next);
        } else {
            log::debug!("discarding results for superseded search {:?}", criteria);
        }
    }
}

/// Runs a search whenever the criteria change and shows its outcome.
#[function_component(SearchResults)]
pub fn search_results(props: &SearchResultsProps) -> Html {
    let state = use_state(|| ResultsState::Loading);

    {
        let on_state = {
            let state = state.clone();
            Callback::from(move |next: ResultsState| state.set(next))
        };
        let api = props.api.clone();
        use_effect_with(props.criteria.clone(), move |criteria| {
            let task = SearchTask::start(&on_state);
            let guard = task.clone();

            let criteria = criteria.clone();
            spawn_local(async move {
                task.run(&api, &criteria, on_state).await;
            });

            move || guard.cancel()
        });
    }

    html! {
        <div class="search-results">
            <ResultsBody state={(*state).clone()} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ResultsBodyProps {
    pub state: ResultsState,
}

#[function_component(ResultsBody)]
pub fn results_body(props: &ResultsBodyProps) -> Html {
    let loading = props.state == ResultsState::Loading;
    html! {
        <>
            <LoadingSpinner {loading} />
            {
                match &props.state {
                    ResultsState::Loading => html! {},
                    ResultsState::Failed(message) => html! {
                        <SearchError message={message.clone()} />
                    },
                    ResultsState::Loaded(pets) => html! {
                        <>
                            <div class="results-header">
                                <h1>{"Search results"}</h1>
                            </div>
                            <div class="results-grid">
                                {
                                    if pets.is_empty() {
                                        html! { <p class="no-results">{NO_RESULTS}</p> }
                                    } else {
                                        pets.iter().map(|pet| html! {
                                            <div key={pet.pet_id.to_string()} class="result-item">
                                                <PetCard pet={pet.clone()} />
                                            </div>
                                        }).collect::<Html>()
                                    }
                                }
                            </div>
                        </>
                    },
                }
            }
        </>
    }
}
