use std::cell::Cell;
use std::rc::Rc;

use gloo::timers::callback::Timeout;
use view_core::Toasts;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub message: String,
}

pub enum ToastAction {
    Push { id: u32, message: String },
    Dismiss(u32),
}

/// Visible error toasts, oldest first.
#[derive(Debug, Default, PartialEq)]
pub struct ToastList {
    toasts: Vec<Toast>,
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ToastAction::Push { id, message } => {
                let mut toasts = self.toasts.clone();
                toasts.push(Toast { id, message });
                Rc::new(Self { toasts })
            }
            ToastAction::Dismiss(id) => {
                if !self.toasts.iter().any(|t| t.id == id) {
                    return self;
                }
                Rc::new(Self {
                    toasts: self.toasts.iter().filter(|t| t.id != id).cloned().collect(),
                })
            }
        }
    }
}

/// Adds a toast under a fresh id and schedules its own dismissal.
fn push_toast(
    next_id: &Cell<u32>,
    message: String,
    dispatch: impl Fn(ToastAction),
    schedule_dismiss: impl FnOnce(u32),
) {
    let id = next_id.get();
    next_id.set(id.wrapping_add(1));
    dispatch(ToastAction::Push { id, message });
    schedule_dismiss(id);
}

/// Context handle pages use to raise toasts.
#[derive(Clone, PartialEq)]
pub struct ToastSink(Callback<String>);

impl Toasts for ToastSink {
    fn error(&self, message: String) {
        self.0.emit(message);
    }
}

struct LogOnlyToasts;

impl Toasts for LogOnlyToasts {
    fn error(&self, message: String) {
        tracing::error!("Toast raised outside ToastProvider: {}", message);
    }
}

#[hook]
pub fn use_toasts() -> Rc<dyn Toasts> {
    match use_context::<ToastSink>() {
        Some(sink) => Rc::new(sink),
        None => Rc::new(LogOnlyToasts),
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub duration_ms: u32,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let list = use_reducer(ToastList::default);

    let sink = {
        let dispatcher = list.dispatcher();
        let duration_ms = props.duration_ms;
        use_memo((), move |_| {
            let next_id = Cell::new(0u32);
            ToastSink(Callback::from(move |message: String| {
                push_toast(
                    &next_id,
                    message,
                    |action| dispatcher.dispatch(action),
                    |id| {
                        let dispatcher = dispatcher.clone();
                        Timeout::new(duration_ms, move || {
                            dispatcher.dispatch(ToastAction::Dismiss(id))
                        })
                        .forget();
                    },
                )
            }))
        })
    };

    html! {
        <ContextProvider<ToastSink> context={(*sink).clone()}>
            { props.children.clone() }
            <div class="toast-stack">
                { for list.toasts.iter().map(|toast| {
                    let id = toast.id;
                    let dispatcher = list.dispatcher();
                    let dismiss = Callback::from(move |_| dispatcher.dispatch(ToastAction::Dismiss(id)));

                    html! {
                        <div class="toast toast-error" key={id.to_string()}>
                            <span class="toast-message">{ &toast.message }</span>
                            <button class="toast-close" onclick={dismiss}>{ "×" }</button>
                        </div>
                    }
                })}
            </div>
        </ContextProvider<ToastSink>>
    }
}
