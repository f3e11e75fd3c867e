use leptos::prelude::*;

use crate::components::Icon;
use crate::panel::{
    DecorativeVisual, HoverState, Orientation, PointerEvent, accent_dot_class, accent_square_class, content_reveal_class,
    device_class, glow_class, glow_filter, latched_visibility, tile_ambient_class, tile_border_class, visual_reveal_class,
    visual_reveal_delay,
};
use crate::services::{ServiceDescriptor, ServiceIcon};

const SPECIAL_PATTERN: &str = "background-image: radial-gradient(circle at 25% 25%, rgba(59, 130, 246, 0.1) 0%, transparent 50%), \
     radial-gradient(circle at 75% 75%, rgba(168, 85, 247, 0.1) 0%, transparent 50%)";

/// One service panel: text and CTAs beside a glowing icon visual.
///
/// `is_visible` comes from the parent's viewport observer. The panel latches
/// it, so once revealed the content stays revealed even if the parent later
/// reports the panel as off screen.
#[component]
pub fn ServiceSection(
    service: ServiceDescriptor,
    /// Position on the page; odd positions mirror the layout
    index: usize,
    #[prop(into)] is_visible: Signal<bool>,
) -> impl IntoView {
    let shown = latched_visibility(is_visible);

    let (hover, set_hover) = signal(HoverState::default());
    let hovered = Memo::new(move |_| hover.get().is_hovered());

    let orientation = Orientation::from_index(index);
    let visual = DecorativeVisual::for_service(&service, index);

    let section_class = format!(
        "relative py-20 lg:py-28 flex items-center justify-center px-4 overflow-hidden bg-gradient-to-b {}",
        service.background
    );
    let content_column = format!("space-y-8 {}", orientation.content_class());
    let visual_column = format!("relative {}", orientation.visual_class());

    let glow_accent = service.accent_color.clone();

    let figure = match visual {
        DecorativeVisual::Core => view! { <CoreVisual icon=service.icon /> }.into_any(),
        DecorativeVisual::Tile { .. } => view! {
            <TileVisual
                icon=service.icon
                accent_color=service.accent_color.clone()
                sweep_style=visual.sweep_style().unwrap_or_default()
                hovered=hovered
            />
        }
        .into_any(),
    };

    view! {
        <section
            data-service-section=index.to_string()
            data-visual=visual.marker()
            id=service.id.clone()
            class=section_class
        >
            {service.is_special.then(|| view! {
                <div class="absolute inset-0 opacity-10">
                    <div class="absolute inset-0" style=SPECIAL_PATTERN></div>
                </div>
            })}

            <div class="relative max-w-6xl mx-auto grid grid-cols-1 lg:grid-cols-2 gap-12 lg:gap-20 items-center">
                <div class=content_column>
                    <div class=move || content_reveal_class(shown.get())>
                        <div class="space-y-6">
                            <h2 class="text-3xl md:text-4xl lg:text-5xl font-bold text-white leading-tight tracking-tight">
                                {service.title}
                            </h2>
                            <h3 class="text-xl md:text-2xl font-light text-premium-silver/90 tracking-wide leading-relaxed">
                                {service.subtitle}
                            </h3>
                            <p class="text-base md:text-lg text-premium-silver/70 font-light leading-relaxed max-w-lg tracking-wide">
                                {service.description}
                            </p>
                        </div>

                        <div class="flex flex-col sm:flex-row gap-4 pt-8">
                            <button
                                type="button"
                                class="group relative inline-flex items-center justify-center px-8 py-4 bg-blue-600 text-white font-medium rounded-full hover:bg-blue-500 transition-all duration-300 hover:-translate-y-1 hover:scale-105 hover:shadow-2xl overflow-hidden"
                            >
                                <span class="relative z-10 text-sm font-medium">{service.primary_button_text}</span>
                                <div class="absolute inset-0 bg-gradient-to-r from-blue-400 to-blue-600 opacity-0 group-hover:opacity-100 transition-opacity duration-300"></div>
                            </button>
                            <button
                                type="button"
                                class="group inline-flex items-center justify-center px-8 py-4 bg-transparent border border-premium-silver/30 text-premium-silver font-medium rounded-full hover:border-white hover:text-white transition-all duration-300 hover:-translate-y-1 hover:scale-105 hover:shadow-xl"
                            >
                                <span class="text-sm font-medium">{service.secondary_button_text}</span>
                                <Icon
                                    icon=ServiceIcon::ChevronRight
                                    class="ml-2 w-4 h-4 group-hover:translate-x-1 transition-transform duration-300"
                                />
                            </button>
                        </div>
                    </div>
                </div>

                <div class=visual_column>
                    <div
                        class=move || visual_reveal_class(shown.get())
                        style=move || visual_reveal_delay(shown.get())
                        on:mouseenter=move |_| set_hover.update(|h| h.apply(PointerEvent::Enter))
                        on:mouseleave=move |_| set_hover.update(|h| h.apply(PointerEvent::Leave))
                    >
                        <div class=move || device_class(hovered.get())>
                            <div class=move || glow_class(&glow_accent, hovered.get())></div>
                            <div class="relative h-full rounded-3xl bg-gradient-to-br from-premium-gray/40 to-premium-black/60 border border-premium-silver/40 backdrop-blur-md p-20 flex items-center justify-center shadow-2xl">
                                {figure}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Concentric rings with two dots orbiting the icon
#[component]
fn CoreVisual(icon: ServiceIcon) -> impl IntoView {
    view! {
        <div class="relative w-32 h-32" data-visual-part="core">
            <div class="absolute inset-0 rounded-full bg-gradient-to-br from-blue-400/50 to-cyan-400/50"></div>
            <div class="absolute inset-3 rounded-full bg-gradient-to-br from-blue-500/60 to-cyan-500/60"></div>
            <div class="absolute inset-6 rounded-full bg-gradient-to-br from-blue-600/70 to-cyan-600/70"></div>
            <div class="absolute inset-0 flex items-center justify-center">
                <Icon icon=icon class="w-14 h-14 text-blue-300 drop-shadow-lg" />
            </div>
            <div class="absolute inset-0 animate-spin" style="animation-duration: 20s">
                <div class="absolute top-0 left-1/2 w-3 h-3 bg-blue-300 rounded-full transform -translate-x-1/2 shadow-lg shadow-blue-400/50"></div>
                <div class="absolute bottom-0 left-1/2 w-3 h-3 bg-cyan-300 rounded-full transform -translate-x-1/2 shadow-lg shadow-cyan-400/50"></div>
            </div>
        </div>
    }
}

/// Square icon tile with a light sweep and two floating accents
#[component]
fn TileVisual(icon: ServiceIcon, accent_color: String, sweep_style: String, hovered: Memo<bool>) -> impl IntoView {
    let icon_style = glow_filter(&accent_color);
    let border_accent = accent_color.clone();
    let ambient_accent = accent_color.clone();
    let square_accent = accent_color.clone();
    let dot_accent = accent_color;

    view! {
        <div class="relative w-28 h-28" data-visual-part="tile">
            <div class=move || tile_border_class(&border_accent, hovered.get())>
                <div class="w-full h-full rounded-2xl bg-premium-black flex items-center justify-center relative overflow-hidden shadow-inner">
                    <Icon
                        icon=icon
                        class="w-14 h-14 text-white/90 relative z-10 drop-shadow-lg transition-all duration-300"
                        style=icon_style
                    />
                    <div
                        class="absolute inset-0 bg-gradient-to-r from-transparent via-white/25 to-transparent -translate-x-full"
                        style=sweep_style
                    ></div>
                    {move || hovered.get().then(|| view! {
                        <div class="absolute inset-0 bg-gradient-to-r from-transparent via-blue-400/50 to-transparent"></div>
                    })}
                    <div class=move || tile_ambient_class(&ambient_accent, hovered.get())></div>
                </div>
            </div>
            <div class=move || accent_square_class(&square_accent, hovered.get())></div>
            <div class=move || accent_dot_class(&dot_accent, hovered.get())></div>
        </div>
    }
}
