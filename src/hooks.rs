use gloo_timers::callback::Interval;
use ticket_pool::defaults::TICK_INTERVAL_MS;
use ticket_pool::ticker::TickDriver;
use ticket_pool::{Dashboard, PoolAction, ProcessingStatus};
use yew::prelude::*;

/// Keeps the processing interval in step with the dashboard.
///
/// The interval is armed when the pool starts running, re-armed when the
/// effective rate changes while running, and cancelled when the pool stops
/// or the component unmounts.
#[hook]
pub fn use_tick_driver(
    status: ProcessingStatus,
    rate: u64,
    dispatcher: UseReducerDispatcher<Dashboard>,
) {
    let driver = use_mut_ref(TickDriver::<Interval>::new);

    {
        let driver = driver.clone();
        use_effect_with((status, rate), move |&(status, rate)| {
            driver.borrow_mut().sync(status, rate, move |rate| {
                Interval::new(TICK_INTERVAL_MS, move || {
                    dispatcher.dispatch(PoolAction::Tick { rate });
                })
            });
            || ()
        });
    }

    // Teardown: no timer may outlive the view.
    use_effect_with((), move |_| {
        move || {
            driver.borrow_mut().disarm();
        }
    });
}
