use bloglist_types::models::{BlogRecord, BlogSummary, FavoriteBlog};

use crate::error::{Error, Result};

/// Placeholder reduction kept for callers wiring up the aggregate surface.
/// Always returns 1.
pub fn identity_probe(_blogs: &[BlogRecord]) -> u32 {
    1
}

/// Sum of likes over the collection, saturating at `u64::MAX`.
pub fn total_likes(blogs: &[BlogRecord]) -> u64 {
    blogs
        .iter()
        .fold(0u64, |total, blog| total.saturating_add(blog.likes))
}

/// The most-liked blog. On ties the earliest one in `blogs` wins: a later
/// blog only takes over when it has strictly more likes.
pub fn favorite_blog(blogs: &[BlogRecord]) -> Result<FavoriteBlog> {
    let mut iter = blogs.iter();
    let first = iter.next().ok_or(Error::EmptyInput)?;

    let best = iter.fold(first, |best, blog| {
        if blog.likes > best.likes { blog } else { best }
    });

    Ok(FavoriteBlog::from(best))
}

/// Both reductions at once for read paths. An empty collection has no
/// favorite rather than an error.
pub fn summarize(blogs: &[BlogRecord]) -> BlogSummary {
    BlogSummary {
        total_likes: total_likes(blogs),
        favorite: favorite_blog(blogs).ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn blog(title: &str, likes: u64) -> BlogRecord {
        BlogRecord {
            id: Uuid::new_v4(),
            title: title.to_string(),
            author: format!("{title} author"),
            url: format!("http://{title}"),
            likes,
        }
    }

    fn seeded() -> Vec<BlogRecord> {
        vec![
            blog("React patterns", 7),
            blog("Go To Statement Considered Harmful", 5),
            blog("Canonical string reduction", 10),
            blog("TDD harms architecture", 0),
            blog("Type wars", 2),
        ]
    }

    #[test]
    fn probe_ignores_input() {
        assert_eq!(identity_probe(&[]), 1);
        assert_eq!(identity_probe(&seeded()), 1);
    }

    #[test]
    fn total_of_empty_list_is_zero() {
        assert_eq!(total_likes(&[]), 0);
    }

    #[test]
    fn total_of_single_blog_is_its_likes() {
        assert_eq!(total_likes(&[blog("only", 5)]), 5);
    }

    #[test]
    fn total_of_seeded_list() {
        assert_eq!(total_likes(&seeded()), 24);
    }

    #[test]
    fn total_saturates() {
        let blogs = vec![blog("a", u64::MAX), blog("b", 1)];
        assert_eq!(total_likes(&blogs), u64::MAX);
    }

    #[test]
    fn favorite_of_empty_list_fails() {
        assert!(matches!(favorite_blog(&[]), Err(Error::EmptyInput)));
    }

    #[test]
    fn favorite_of_single_blog() {
        let fav = favorite_blog(&[blog("only", 3)]).unwrap();
        assert_eq!(fav.title, "only");
        assert_eq!(fav.likes, 3);
    }

    #[test]
    fn favorite_picks_most_likes_and_drops_id_and_url() {
        let fav = favorite_blog(&seeded()).unwrap();
        assert_eq!(
            fav,
            FavoriteBlog {
                title: "Canonical string reduction".into(),
                author: "Canonical string reduction author".into(),
                likes: 10,
            }
        );
    }

    #[test]
    fn favorite_tie_keeps_first_occurrence() {
        let blogs = vec![blog("X", 5), blog("Y", 5)];
        assert_eq!(favorite_blog(&blogs).unwrap().title, "X");

        let blogs = vec![blog("low", 1), blog("first", 9), blog("mid", 4), blog("second", 9)];
        assert_eq!(favorite_blog(&blogs).unwrap().title, "first");
    }

    #[test]
    fn favorite_of_all_zero_is_first() {
        let blogs = vec![blog("a", 0), blog("b", 0), blog("c", 0)];
        assert_eq!(favorite_blog(&blogs).unwrap().title, "a");
    }

    #[test]
    fn reductions_do_not_touch_input() {
        let blogs = seeded();
        let before = blogs.clone();

        assert_eq!(total_likes(&blogs), total_likes(&blogs));
        assert_eq!(favorite_blog(&blogs).unwrap(), favorite_blog(&blogs).unwrap());
        assert_eq!(blogs, before);
    }

    #[test]
    fn summary_of_empty_list_has_no_favorite() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_likes, 0);
        assert!(summary.favorite.is_none());
    }

    #[test]
    fn summary_combines_both_reductions() {
        let summary = summarize(&seeded());
        assert_eq!(summary.total_likes, 24);
        assert_eq!(summary.favorite.unwrap().likes, 10);
    }
}
