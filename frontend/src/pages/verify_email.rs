use std::rc::Rc;

use view_core::verify_email::TOKEN_PARAM;
use view_core::{Activation, Destination, EmailVerifier, VerificationOutcome};
use yew::prelude::*;

use crate::config::AppConfig;
use crate::i18n::use_catalog;
use crate::services::api::ApiService;
use crate::services::routing::use_view_router;

#[derive(Properties, PartialEq)]
pub struct VerifyParticipantEmailProps {
    pub token: String,
}

#[function_component(VerifyParticipantEmail)]
pub fn verify_participant_email(props: &VerifyParticipantEmailProps) -> Html {
    let router = use_view_router(vec![(TOKEN_PARAM, props.token.clone())]);
    let catalog = use_catalog();
    let outcome = use_state(|| VerificationOutcome::Pending);

    {
        let outcome = outcome.clone();
        let router = router.clone();

        use_effect_with(props.token.clone(), move |_| {
            outcome.set(VerificationOutcome::Pending);

            let api = Rc::new(ApiService::new(&AppConfig::from_env()));
            let verifier = EmailVerifier::new(api, router);

            let activation = Activation::new();
            let live = activation.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Some(settled) = verifier.run(&live).await {
                    outcome.set(settled);
                }
            });

            move || activation.dispose()
        });
    }

    let go_home = Callback::from(move |_| router.navigate(Destination::Home));
    let message = outcome.message(&*catalog);

    html! {
        <div class="container">
            <h2>{ catalog.text("verify_email.heading") }</h2>
            {match *outcome {
                VerificationOutcome::Pending => html! {
                    <div class="loading">
                        <div class="spinner"></div>
                        <p>{ message }</p>
                    </div>
                },
                VerificationOutcome::Verified => html! {
                    <div class="verify-result verify-success">
                        <p>{ message }</p>
                        <button class="btn btn-primary" onclick={go_home}>
                            { catalog.text("verify_email.home") }
                        </button>
                    </div>
                },
                VerificationOutcome::Failed(_) => html! {
                    <div class="verify-result verify-failed">
                        <p>{ message }</p>
                        <button class="btn btn-secondary" onclick={go_home}>
                            { catalog.text("verify_email.home") }
                        </button>
                    </div>
                },
            }}
        </div>
    }
}
