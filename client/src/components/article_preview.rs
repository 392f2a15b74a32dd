//! Live article preview pane.

use leptos::prelude::*;

use content::Document;
use content::preview::{ArticlePreview, MarkupStyle, PreviewBlock, article_preview};

fn render_block(block: PreviewBlock) -> AnyView {
    match block {
        PreviewBlock::Markup { style: MarkupStyle::Paragraph, html, .. } => {
            view! { <div class="preview__text" inner_html=html></div> }.into_any()
        }
        PreviewBlock::Markup { style: MarkupStyle::Subheading, html, .. } => {
            view! { <h4 class="preview__subheading" inner_html=html></h4> }.into_any()
        }
        PreviewBlock::Markup { style: MarkupStyle::Quote, html, .. } => {
            view! { <blockquote class="preview__quote" inner_html=html></blockquote> }.into_any()
        }
        PreviewBlock::Image { url, .. } => view! { <img class="preview__image" src=url alt="" /> }.into_any(),
        PreviewBlock::Video { url, .. } => view! {
            <iframe class="preview__video" src=url allowfullscreen=true title="video"></iframe>
        }
        .into_any(),
    }
}

fn render(plan: ArticlePreview) -> impl IntoView {
    let ArticlePreview { category, title, subtitle, hero_url, excerpt, tags, sections } = plan;
    view! {
        <article class="preview">
            {category.map(|c| view! { <span class="preview__category">{c}</span> })}
            {title.map(|t| view! { <h1 class="preview__title">{t}</h1> })}
            {subtitle.map(|s| view! { <h2 class="preview__subtitle">{s}</h2> })}
            {hero_url.map(|url| view! { <img class="preview__hero" src=url alt="" /> })}
            {excerpt.map(|e| view! { <p class="preview__excerpt">{e}</p> })}
            {(!tags.is_empty())
                .then(|| {
                    view! {
                        <div class="preview__tags">
                            {tags.into_iter().map(|tag| view! { <span class="tag">{tag}</span> }).collect_view()}
                        </div>
                    }
                })}
            {sections
                .into_iter()
                .map(|section| {
                    view! {
                        <section class="preview__section">
                            {section.title.map(|t| view! { <h3 class="preview__section-title">{t}</h3> })}
                            {section.blocks.into_iter().map(render_block).collect_view()}
                        </section>
                    }
                })
                .collect_view()}
        </article>
    }
}

/// Re-renders from the document on every change.
#[component]
pub fn ArticlePreviewPane(#[prop(into)] document: Signal<Document>) -> impl IntoView {
    view! { <div class="preview-pane">{move || document.with(|doc| render(article_preview(doc)))}</div> }
}
