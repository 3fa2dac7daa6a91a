use view_core::CalendarCard;
use yew::prelude::*;

use crate::i18n::use_catalog;

#[derive(Properties, PartialEq)]
pub struct CalendarCardProps {
    pub card: CalendarCard,
}

#[function_component(CalendarCardView)]
pub fn calendar_card_view(props: &CalendarCardProps) -> Html {
    let catalog = use_catalog();
    let card = &props.card;

    html! {
        <div class="calendar-card">
            <div class="calendar-card-header">
                <h3 class="calendar-name">{ &card.name }</h3>
                <a class="btn btn-secondary" href={card.edit.path()}>
                    { catalog.text("admin.calendar_card.edit") }
                </a>
            </div>
            if let Some(desc) = &card.description {
                <p class="calendar-description">{ desc }</p>
            }
            <div class="calendar-participants">
                <span class="calendar-label">
                    { format!("{} ({})", catalog.text("admin.calendar_card.participants"), card.participant_count) }
                </span>
                <div class="chips">
                    { for card.chips.iter().map(|name| html! {
                        <span class="chip">{ name }</span>
                    })}
                    if let Some(label) = card.overflow_label() {
                        <span class="chip chip-overflow">{ label }</span>
                    }
                </div>
            </div>
            <dl class="calendar-meta">
                <dt>{ catalog.text("admin.calendar_card.threshold") }</dt>
                <dd>{ card.threshold }</dd>
                <dt>{ catalog.text("admin.calendar_card.created") }</dt>
                <dd>{ &card.created }</dd>
            </dl>
            <a class="public-link" href={card.public_path.clone()} target="_blank" rel="noopener noreferrer">
                { catalog.text("admin.calendar_card.public_link") }
            </a>
        </div>
    }
}
