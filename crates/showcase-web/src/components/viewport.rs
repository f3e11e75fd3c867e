use leptos::html::Div;
use leptos::prelude::*;

/// Share of the element that must be on screen before it counts as visible
#[cfg(feature = "hydrate")]
const VISIBILITY_THRESHOLD: f64 = 0.1;

/// Shrinks the viewport's bottom edge so panels reveal a little after entering
#[cfg(feature = "hydrate")]
const ROOT_MARGIN: &str = "0px 0px -10% 0px";

/// Check if user prefers reduced motion (client-side only)
#[cfg(feature = "hydrate")]
fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok())
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// Fold one observer batch into the revealed flag.
///
/// A batch can hold an enter and a leave for the same element; any
/// intersecting entry counts, whatever comes after it.
fn revealed_after(revealed: bool, reports: impl IntoIterator<Item = bool>) -> bool {
    revealed || reports.into_iter().any(|intersecting| intersecting)
}

/// Becomes `true` the first time `target` scrolls into the viewport and
/// stays `true`; the observer disconnects once that happens.
///
/// On the server the signal stays `false`; the client takes over after
/// hydration.
pub fn use_scrolled_into_view(target: NodeRef<Div>) -> Signal<bool> {
    #[cfg(feature = "hydrate")]
    let (revealed, set_revealed) = signal(false);
    #[cfg(not(feature = "hydrate"))]
    let (revealed, _) = signal(false);
    #[cfg(not(feature = "hydrate"))]
    let _ = target;

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        Effect::new(move |_| {
            let Some(element) = target.get() else {
                return;
            };

            // No entrance animation to wait for: show everything at once
            if prefers_reduced_motion() {
                set_revealed.set(true);
                return;
            }

            let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
                move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                    let reports = entries.iter().map(|entry| {
                        let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                        entry.is_intersecting()
                    });
                    if revealed_after(false, reports) {
                        set_revealed.set(true);
                        observer.disconnect();
                    }
                },
            );

            let options = web_sys::IntersectionObserverInit::new();
            options.set_threshold(&wasm_bindgen::JsValue::from_f64(VISIBILITY_THRESHOLD));
            options.set_root_margin(ROOT_MARGIN);

            let observer =
                match web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
                    Ok(observer) => observer,
                    Err(_) => {
                        // Without an observer nothing would ever reveal the panel
                        set_revealed.set(true);
                        return;
                    }
                };
            observer.observe(&element);

            // Owned by this effect: dropped, and the JS closure freed, on unmount
            let observed = StoredValue::new_local((observer, callback));
            on_cleanup(move || {
                observed.try_with_value(|(observer, _)| observer.disconnect());
            });
        });
    }

    revealed.into()
}
