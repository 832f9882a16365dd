use serde::Serialize;

use crate::error::{Error, Result};

/// 首页第一页的文章数
pub const HOME_FIRST_PAGE_SIZE: usize = 8;
/// 首页后续每页的文章数
pub const HOME_PAGE_SIZE: usize = 9;

/// 分页窗口：某一页可见的文章以及描述其位置的元信息。
///
/// 不变量：
///
/// - `1 <= current_page <= max(total_pages, 1)`
/// - `has_next_page == current_page < total_pages`
/// - `has_prev_page == current_page > 1`
/// - `posts_per_page` 为该页实际使用的页大小
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageWindow<T> {
    pub posts: Vec<T>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_posts: usize,
    pub has_next_page: bool,
    pub has_prev_page: bool,
    pub posts_per_page: usize,
}

impl<T: Clone> PageWindow<&T> {
    /// 将借用的窗口转为持有所有权的窗口
    pub fn cloned(self) -> PageWindow<T> {
        PageWindow {
            posts: self.posts.into_iter().cloned().collect(),
            current_page: self.current_page,
            total_pages: self.total_pages,
            total_posts: self.total_posts,
            has_next_page: self.has_next_page,
            has_prev_page: self.has_prev_page,
            posts_per_page: self.posts_per_page,
        }
    }
}

/// 分页方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLayout {
    /// 每页固定数量
    Uniform(usize),
    /// 第一页 `first` 篇，之后每页 `rest` 篇
    FirstPageIrregular { first: usize, rest: usize },
}

impl PageLayout {
    /// 首页使用的分页方式：第一页 8 篇，之后每页 9 篇
    pub const HOME: PageLayout = PageLayout::FirstPageIrregular {
        first: HOME_FIRST_PAGE_SIZE,
        rest: HOME_PAGE_SIZE,
    };

    fn validate(self) -> Result<Self> {
        let valid = match self {
            PageLayout::Uniform(size) => size > 0,
            PageLayout::FirstPageIrregular { first, rest } => first > 0 && rest > 0,
        };
        match valid {
            true => Ok(self),
            false => Err(Error::InvalidArgument("page size must be positive")),
        }
    }

    /// 总页数，没有文章时均匀分页为 0 页，首页分页为 1 页
    pub fn total_pages(self, total_posts: usize) -> usize {
        match self {
            PageLayout::Uniform(size) => total_posts.div_ceil(size),
            PageLayout::FirstPageIrregular { first, rest } => match total_posts <= first {
                true => 1,
                false => 1 + (total_posts - first).div_ceil(rest),
            },
        }
    }

    /// 第 `page` 页（从 1 开始）的起始偏移和页大小
    fn bounds(self, page: usize) -> (usize, usize) {
        match self {
            PageLayout::Uniform(size) => ((page - 1) * size, size),
            PageLayout::FirstPageIrregular { first, .. } if page == 1 => (0, first),
            PageLayout::FirstPageIrregular { first, rest } => (first + (page - 2) * rest, rest),
        }
    }

    /// 计算第 `page` 页的窗口
    ///
    /// 超出范围的页码会被静默地限制到 `[1, max(total_pages, 1)]`。
    pub fn window<T: Clone>(self, posts: &[T], page: i64) -> Result<PageWindow<T>> {
        Ok(self.validate()?.slice(posts, page))
    }

    fn slice<T: Clone>(self, posts: &[T], page: i64) -> PageWindow<T> {
        let total_posts = posts.len();
        let total_pages = self.total_pages(total_posts);
        let current_page = clamp_page(page, total_pages);

        let (start, size) = self.bounds(current_page);
        let start = start.min(total_posts);
        let end = start.saturating_add(size).min(total_posts);

        PageWindow {
            posts: posts[start..end].to_vec(),
            current_page,
            total_pages,
            total_posts,
            has_next_page: current_page < total_pages,
            has_prev_page: current_page > 1,
            posts_per_page: size,
        }
    }
}

fn clamp_page(page: i64, total_pages: usize) -> usize {
    let last = i64::try_from(total_pages.max(1)).unwrap_or(i64::MAX);
    // 结果在 [1, last] 内，必然能转换
    page.clamp(1, last) as usize
}

/// 按固定页大小分页
///
/// `page_size` 为 0 时返回 [`Error::InvalidArgument`]。
pub fn paginate<T: Clone>(posts: &[T], page: i64, page_size: usize) -> Result<PageWindow<T>> {
    PageLayout::Uniform(page_size).window(posts, page)
}

/// 首页分页：第一页 8 篇，之后每页 9 篇
///
/// 返回的 `posts_per_page` 是该页实际的页大小（8 或 9）。
pub fn paginate_home<T: Clone>(posts: &[T], page: i64) -> PageWindow<T> {
    PageLayout::HOME.slice(posts, page)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn test_paginate_basic() {
        let posts = items(13);

        let page = paginate(&posts, 2, 5).unwrap();

        assert_eq!(page.posts, vec![5, 6, 7, 8, 9]);
        assert_eq!(page.current_page, 2);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_posts, 13);
        assert!(page.has_next_page);
        assert!(page.has_prev_page);
        assert_eq!(page.posts_per_page, 5);
    }

    #[test]
    fn test_paginate_last_page_is_short() {
        let page = paginate(&items(13), 3, 5).unwrap();

        assert_eq!(page.posts, vec![10, 11, 12]);
        assert!(!page.has_next_page);
        assert!(page.has_prev_page);
    }

    #[test]
    fn test_paginate_covers_every_post_once() {
        for page_size in 1..=7 {
            for total in 0..=30 {
                let posts = items(total);
                let total_pages = paginate(&posts, 1, page_size).unwrap().total_pages;

                let seen: Vec<usize> = (1..=total_pages as i64)
                    .flat_map(|p| paginate(&posts, p, page_size).unwrap().posts)
                    .collect();

                assert_eq!(seen, posts, "page_size={page_size} total={total}");
            }
        }
    }

    #[test]
    fn test_paginate_clamps_out_of_range_pages() {
        let posts = items(12);
        let last = paginate(&posts, 3, 5).unwrap();
        let first = paginate(&posts, 1, 5).unwrap();

        assert_eq!(paginate(&posts, 4, 5).unwrap(), last);
        assert_eq!(paginate(&posts, 999, 5).unwrap(), last);
        assert_eq!(paginate(&posts, i64::MAX, 5).unwrap(), last);
        assert_eq!(paginate(&posts, 0, 5).unwrap(), first);
        assert_eq!(paginate(&posts, -7, 5).unwrap(), first);
        assert_eq!(paginate(&posts, i64::MIN, 5).unwrap(), first);
    }

    #[test]
    fn test_paginate_empty() {
        let page = paginate::<usize>(&[], 1, 5).unwrap();

        assert!(page.posts.is_empty());
        assert_eq!(page.current_page, 1);
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.total_posts, 0);
        assert!(!page.has_next_page);
        assert!(!page.has_prev_page);

        assert_eq!(paginate::<usize>(&[], 3, 5).unwrap(), page);
    }

    #[test]
    fn test_paginate_zero_page_size_is_rejected() {
        assert!(matches!(
            paginate(&items(3), 1, 0),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            PageLayout::FirstPageIrregular { first: 0, rest: 3 }.window(&items(3), 1),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_home_eight_posts_fit_one_page() {
        let page = paginate_home(&items(8), 1);

        assert_eq!(page.total_pages, 1);
        assert_eq!(page.posts.len(), 8);
        assert_eq!(page.posts_per_page, 8);
        assert!(!page.has_next_page);
    }

    #[test]
    fn test_home_nine_posts_spill_to_second_page() {
        let posts = items(9);

        let first = paginate_home(&posts, 1);
        let second = paginate_home(&posts, 2);

        assert_eq!(first.total_pages, 2);
        assert_eq!(first.posts.len(), 8);
        assert_eq!(second.posts, vec![8]);
        assert_eq!(second.posts_per_page, 9);
    }

    #[test]
    fn test_home_seventeen_and_eighteen_posts() {
        let seventeen = paginate_home(&items(17), 2);
        assert_eq!(seventeen.total_pages, 2);
        assert_eq!(seventeen.posts.len(), 9);
        assert!(!seventeen.has_next_page);

        let eighteen = paginate_home(&items(18), 3);
        assert_eq!(eighteen.total_pages, 3);
        assert_eq!(eighteen.posts, vec![17]);
        assert_eq!(eighteen.posts_per_page, 9);
    }

    #[test]
    fn test_home_clamps_and_handles_empty() {
        let posts = items(18);
        assert_eq!(paginate_home(&posts, 42), paginate_home(&posts, 3));
        assert_eq!(paginate_home(&posts, -1), paginate_home(&posts, 1));

        let empty = paginate_home::<usize>(&[], 5);
        assert_eq!(empty.current_page, 1);
        assert_eq!(empty.total_pages, 1);
        assert!(empty.posts.is_empty());
        assert_eq!(empty.posts_per_page, 8);
    }

    #[test]
    fn test_cloned_window() {
        let posts = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let refs: Vec<&String> = posts.iter().collect();

        let window = paginate(&refs, 2, 2).unwrap().cloned();

        assert_eq!(window.posts, vec!["c".to_string()]);
        assert_eq!(window.total_posts, 3);
    }
}
