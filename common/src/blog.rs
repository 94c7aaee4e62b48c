//! Blog post page outcome.

use crate::api::{ApiError, Fetched};
use crate::notice::Notice;
use crate::records::BlogPost;
use crate::routes;

#[derive(Debug, Clone, PartialEq)]
pub enum PostView {
    Show(BlogPost),
    /// Post could not be loaded: show `notice` and navigate to `to`.
    Bounce { notice: Notice, to: &'static str },
}

/// Turn a single-post fetch into what the page renders.
pub fn resolve_post(fetched: Fetched<BlogPost>) -> PostView {
    match fetched {
        Ok(post) => PostView::Show(post),
        Err(ApiError::NotFound) => PostView::Bounce {
            notice: Notice::error("Blog post not found"),
            to: routes::RESOURCES,
        },
        Err(_) => PostView::Bounce {
            notice: Notice::error("Could not load the blog post"),
            to: routes::RESOURCES,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::{self, FakeBackend};
    use crate::api::Backend;

    #[tokio::test]
    async fn test_missing_post_bounces_to_resources() {
        let backend = FakeBackend::with_counts(0, 0, 0);
        let view = resolve_post(backend.blog_post("nope").await);
        assert_eq!(
            view,
            PostView::Bounce {
                notice: Notice::error("Blog post not found"),
                to: "/resources",
            }
        );
    }

    #[tokio::test]
    async fn test_existing_post_is_shown() {
        let mut backend = FakeBackend::with_counts(0, 0, 0);
        backend.posts = vec![fake::post("a"), fake::post("b")];
        match resolve_post(backend.blog_post("b").await) {
            PostView::Show(post) => {
                assert_eq!(post.id, "b");
                assert_eq!(post.tag_list(), ["quality", "iso"]);
            }
            other => panic!("expected post, got {other:?}"),
        }
    }

    #[test]
    fn test_network_error_bounces_too() {
        let view = resolve_post(Err(ApiError::Transport("connection refused".into())));
        assert!(matches!(view, PostView::Bounce { to: "/resources", .. }));
    }
}
