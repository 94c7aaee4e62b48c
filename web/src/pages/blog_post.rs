//! Single blog article.  A missing or unreachable post sends the reader back
//! to the resources list with a notice.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use isocert_common::api::Fetched;
use isocert_common::blog::{resolve_post, PostView};
use isocert_common::records::{long_date, BlogPost};
use isocert_common::routes;

use crate::components::toaster::use_toaster;
use crate::pages::fetched;

// ─── Server function ─────────────────────────────────────────────────────────

#[server(name = GetBlogPost, prefix = "/api")]
pub async fn get_blog_post(id: String) -> Result<Fetched<BlogPost>, ServerFnError> {
    use isocert_common::api::Backend;
    let state = crate::app::app_state()?;
    Ok(state.backend.blog_post(&id).await)
}

// ─── Page component ──────────────────────────────────────────────────────────

#[component]
pub fn BlogPostPage() -> impl IntoView {
    let params = use_params_map();
    let post_id = move || params.with(|p| p.get("post_id").unwrap_or_default());

    let post = Resource::new(post_id, |id| async move { fetched(get_blog_post(id).await) });

    let navigate = use_navigate();
    let toasts = use_toaster();
    Effect::new(move |_| {
        if let Some(result) = post.get() {
            if let PostView::Bounce { notice, to } = resolve_post(result) {
                toasts.push(notice);
                navigate(to, Default::default());
            }
        }
    });

    view! {
        <div class="blog-page">
            <Suspense fallback=move || view! { <div class="spinner"></div> }>
                {move || post.get().map(|res| match res {
                    Ok(post) => view! { <Article post /> }.into_any(),
                    Err(_) => ().into_any(),
                })}
            </Suspense>
        </div>
    }
}

#[component]
fn Article(post: BlogPost) -> impl IntoView {
    let date = long_date(&post.created_at);
    let tags = post.tag_list().to_vec();

    view! {
        <article class="blog-post">
            <a href=routes::RESOURCES class="back-link">"← Back to Resources"</a>
            <h1>{post.title}</h1>
            <div class="post-meta">
                <span class="post-author">{post.author}</span>
                <span class="post-date">{date}</span>
            </div>

            <div class="post-body">{post.content}</div>

            {(!tags.is_empty()).then(|| view! {
                <div class="post-tags">
                    {tags.into_iter().map(|tag| view! { <span class="tag">{tag}</span> }).collect_view()}
                </div>
            })}
        </article>

        <section class="post-cta">
            <h2>"Want to Learn More?"</h2>
            <p>"Explore our other articles and resources"</p>
            <a href=routes::RESOURCES class="btn-primary">"Explore Resources"</a>
        </section>
    }
}
