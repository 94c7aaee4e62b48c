//! Route paths shared by the router, the session guard and redirects.

pub const HOME: &str = "/";
pub const TRAINING: &str = "/training";
pub const FRANCHISE: &str = "/franchise";
pub const RESOURCES: &str = "/resources";
pub const CONTACT: &str = "/contact";
pub const ADMIN_LOGIN: &str = "/admin/login";
pub const ADMIN_DASHBOARD: &str = "/admin/dashboard";

/// Detail page of a single blog post.
pub fn blog_post(id: &str) -> String {
    format!("{RESOURCES}/blog/{id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blog_post_path() {
        assert_eq!(blog_post("abc-123"), "/resources/blog/abc-123");
    }
}
