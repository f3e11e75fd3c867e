use crate::config::CONFIG;
use leptos::html::Div;
use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::components::{ServiceSection, use_scrolled_into_view};
use crate::services::ServiceDescriptor;

/// Server function returning the configured services in page order
#[server(ListServices)]
pub async fn list_services() -> Result<Vec<ServiceDescriptor>, ServerFnError> {
    Ok(crate::catalog::current().services.clone())
}

/// Placeholder panels shown while the catalog loads
#[component]
fn ServicesSkeleton() -> impl IntoView {
    view! {
        <div class="space-y-4 max-w-6xl mx-auto px-4 py-20">
            {(0..2).map(|_| view! {
                <div class="h-72 rounded-3xl border border-premium-silver/20 bg-premium-gray/20 animate-pulse"></div>
            }).collect_view()}
        </div>
    }
}

/// A service panel revealed by its own viewport observer
#[component]
fn ObservedService(service: ServiceDescriptor, index: usize) -> impl IntoView {
    let node_ref = NodeRef::<Div>::new();
    let is_visible = use_scrolled_into_view(node_ref);

    view! {
        <div node_ref=node_ref>
            <ServiceSection service=service index=index is_visible=is_visible />
        </div>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let services = Resource::new(|| (), |_| list_services());
    let canonical = format!("{}/", CONFIG.base_url);
    let mailto = format!("mailto:{}", CONFIG.contact_email);
    let footer_mailto = mailto.clone();

    view! {
        <Title text=CONFIG.name />
        <Meta name="description" content=CONFIG.description />
        <Link rel="canonical" href=canonical />
        <main class="min-h-screen bg-premium-black text-white">
            <header class="max-w-6xl mx-auto px-4 pt-28 pb-12 text-center">
                <h1 class="text-4xl md:text-6xl font-bold tracking-tight">{CONFIG.name}</h1>
                <p class="mt-6 text-lg md:text-xl font-light text-premium-silver/80">{CONFIG.tagline}</p>
            </header>

            <Suspense fallback=move || view! { <ServicesSkeleton /> }>
                {move || {
                    services.get().map(|result| match result {
                        Ok(list) => list
                            .into_iter()
                            .enumerate()
                            .map(|(index, service)| view! { <ObservedService service=service index=index /> })
                            .collect_view()
                            .into_any(),
                        Err(e) => {
                            tracing::warn!("failed to load services: {}", e);
                            view! {
                                <p class="max-w-6xl mx-auto px-4 py-20 text-center text-premium-silver/70">
                                    "Our services are unavailable right now. Reach us at "
                                    <a href=mailto.clone() class="underline">{CONFIG.contact_email}</a>
                                    "."
                                </p>
                            }
                            .into_any()
                        }
                    })
                }}
            </Suspense>

            <footer class="border-t border-premium-silver/20 py-10 text-center text-sm text-premium-silver/60">
                {CONFIG.name} " \u{00B7} " <a href=footer_mailto>{CONFIG.contact_email}</a>
            </footer>
        </main>
    }
}
