//! Main module for the Ticket Pool dashboard using Yew.
//! Wires the reducer-backed state, the processing timer and the view components.

use ticket_pool::{ConfigField, Dashboard, PoolAction};
use yew::prelude::*;

mod components;
mod config;
mod hooks;
mod utils;

use components::{render_error, ButtonVariant, ConfigInput, ControlButton, StatusCard};
use config::{APP_TITLE, CONFIG_HEADING, STATUS_HEADING};
use hooks::use_tick_driver;
use utils::{field_display, log_level_from_query};

/// Primary application component: owns the dashboard state and the timer.
#[function_component(App)]
fn app() -> Html {
    let dashboard = use_reducer(Dashboard::default);
    let running = dashboard.is_running();

    use_tick_driver(
        dashboard.status.processing_status,
        dashboard.configuration.tick_rate(),
        dashboard.dispatcher(),
    );

    let on_action = |action: PoolAction| {
        let dispatcher = dashboard.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(action.clone()))
    };
    let field_input = |field: ConfigField| {
        let dispatcher = dashboard.dispatcher();
        Callback::from(move |raw: String| dispatcher.dispatch(PoolAction::SetField { field, raw }))
    };

    html! {
        <div class="container">
            <h1>{ APP_TITLE }</h1>

            <section class="config-section">
                <h2>{ CONFIG_HEADING }</h2>
                <div class="grid">
                    { for ConfigField::ALL.iter().map(|&field| html! {
                        <ConfigInput
                            key={field.label().to_string()}
                            label={field.label()}
                            value={field_display(dashboard.configuration.get(field))}
                            onchange={field_input(field)}
                        />
                    }) }
                </div>
                { render_error(&dashboard.errors.configuration_error) }
                { render_error(&dashboard.errors.system_error) }
            </section>

            <section class="status-section">
                <h2>{ STATUS_HEADING }</h2>
                <div class="grid">
                    <StatusCard
                        label="Total Tickets"
                        value={dashboard.status.total_tickets.to_string()}
                    />
                    <StatusCard
                        label="Available Tickets"
                        value={dashboard.status.available_tickets.to_string()}
                    />
                    <StatusCard
                        label="Processing Status"
                        value={dashboard.status.processing_status.to_string()}
                        highlight={true}
                    />
                </div>
            </section>

            <div class="controls">
                <ControlButton
                    label="Start"
                    variant={ButtonVariant::Start}
                    onclick={on_action(PoolAction::Start)}
                    disabled={running}
                />
                <ControlButton
                    label="Stop"
                    variant={ButtonVariant::Stop}
                    onclick={on_action(PoolAction::Stop)}
                    disabled={!running}
                />
                <ControlButton
                    label="Reset"
                    variant={ButtonVariant::Reset}
                    onclick={on_action(PoolAction::Reset)}
                />
            </div>
        </div>
    }
}

/// Entry point: installs the panic hook and logger, then renders the App component.
fn main() {
    console_error_panic_hook::set_once();

    let search = gloo_utils::window()
        .location()
        .search()
        .unwrap_or_default();
    wasm_logger::init(wasm_logger::Config::new(log_level_from_query(&search)));

    yew::Renderer::<App>::new().render();
}
