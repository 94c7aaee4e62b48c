//! Resources page – list of blog articles.

use leptos::prelude::*;

use isocert_common::api::Fetched;
use isocert_common::records::{excerpt, long_date, BlogPost};
use isocert_common::routes;

use crate::pages::fetched;

// ─── Server function ─────────────────────────────────────────────────────────

#[server(name = ListBlogPosts, prefix = "/api")]
pub async fn list_blog_posts() -> Result<Fetched<Vec<BlogPost>>, ServerFnError> {
    use isocert_common::api::Backend;
    let state = crate::app::app_state()?;
    Ok(state.backend.blog_posts().await)
}

// ─── Page component ──────────────────────────────────────────────────────────

#[component]
pub fn ResourcesPage() -> impl IntoView {
    let posts = Resource::new(|| (), |_| async { fetched(list_blog_posts().await) });

    view! {
        <div class="resources-page">
            <h1>"Resources"</h1>
            <Suspense fallback=move || view! { <p class="loading">"Loading…"</p> }>
                {move || posts.get().map(|res| match res {
                    Ok(posts) if posts.is_empty() => view! {
                        <p class="empty">"No articles yet"</p>
                    }.into_any(),
                    Ok(posts) => view! {
                        <div class="post-grid">
                            {posts.into_iter().map(|post| view! { <PostCard post /> }).collect_view()}
                        </div>
                    }.into_any(),
                    Err(e) => view! {
                        <p class="error">"Could not load articles: " {e.to_string()}</p>
                    }.into_any(),
                })}
            </Suspense>
        </div>
    }
}

#[component]
fn PostCard(post: BlogPost) -> impl IntoView {
    let href = routes::blog_post(&post.id);
    let date = long_date(&post.created_at);
    let summary = excerpt(&post.content);

    view! {
        <article class="post-card">
            <a href=href class="post-title">{post.title}</a>
            <p class="post-meta">{post.author} " · " {date}</p>
            <p class="post-excerpt">{summary}</p>
        </article>
    }
}
