//! Preview card for volunteer and comitard profiles.

use leptos::prelude::*;

use content::preview::{Avatar, ProfilePreview};

/// Round avatar used by the preview card and the list tables.
pub fn avatar_view(avatar: Avatar, class: &'static str) -> AnyView {
    match avatar {
        Avatar::Image(url) => view! { <img class=class src=url alt="" /> }.into_any(),
        Avatar::Initials(text) => view! { <div class=format!("{class} {class}--initials")>{text}</div> }.into_any(),
    }
}

fn render(plan: ProfilePreview) -> impl IntoView {
    let ProfilePreview { avatar, name, heading, category, status, featured, body_html, testimonial, order } = plan;
    view! {
        <article class="profile-card">
            {avatar_view(avatar, "profile-card__avatar")}
            <h2 class="profile-card__name">{name}</h2>
            {heading.map(|h| view! { <p class="profile-card__heading">{h}</p> })}
            <div class="profile-card__badges">
                {category.map(|c| view! { <span class="badge">{c}</span> })}
                {status.map(|s| view! { <span class=format!("badge badge--{s}")>{s}</span> })}
                {featured.then(|| view! { <span class="badge badge--featured">"Featured"</span> })}
                {order.map(|o| view! { <span class="badge">{format!("#{o}")}</span> })}
            </div>
            {body_html.map(|html| view! { <div class="profile-card__body" inner_html=html></div> })}
            {testimonial.map(|t| view! { <blockquote class="profile-card__testimonial">{t}</blockquote> })}
        </article>
    }
}

/// Renders a plan produced by `volunteer_preview` or `comitard_preview`.
#[component]
pub fn ProfilePreviewPane(#[prop(into)] plan: Signal<ProfilePreview>) -> impl IntoView {
    view! { <div class="preview-pane">{move || render(plan.get())}</div> }
}
