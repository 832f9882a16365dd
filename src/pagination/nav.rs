use serde::{Serialize, Serializer};

/// 分页导航中的一项：页码或省略号
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

impl Serialize for PageItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageItem::Page(n) => serializer.serialize_u64(*n as u64),
            PageItem::Ellipsis => serializer.serialize_str("..."),
        }
    }
}

/// 当前页两侧各显示的页码数
const DELTA: usize = 1;

/// 计算分页导航中可见的页码。
///
/// - 只有一页或没有页时不显示导航
/// - 不超过 4 页时显示全部页码
/// - 否则显示首页、末页以及当前页左右各一页，中间间隔用省略号表示
///
/// 超出范围的 `current_page` 会被限制到 `[1, total_pages]`。
///
/// ```ignore
/// // 1 … 4 5 6 … 10
/// let items = page_items(5, 10);
/// ```
pub fn page_items(current_page: usize, total_pages: usize) -> Vec<PageItem> {
    if total_pages <= 1 {
        return Vec::new();
    }
    if total_pages <= 4 {
        return (1..=total_pages).map(PageItem::Page).collect();
    }

    let current_page = current_page.clamp(1, total_pages);
    let low = current_page.saturating_sub(DELTA).max(2);
    let high = current_page.saturating_add(DELTA).min(total_pages - 1);

    let mut items = vec![PageItem::Page(1)];
    if current_page.saturating_sub(DELTA) > 2 {
        items.push(PageItem::Ellipsis);
    }
    items.extend((low..=high).map(PageItem::Page));
    if current_page.saturating_add(DELTA) < total_pages - 1 {
        items.push(PageItem::Ellipsis);
    }
    items.push(PageItem::Page(total_pages));

    items
}

/// 第 `page` 页的链接，第一页不带查询参数
///
/// `base_path` 为空时表示站点根路径。
pub fn page_url(base_path: &str, page: usize) -> String {
    let base = match base_path.is_empty() {
        true => "/",
        false => base_path,
    };
    match page {
        1 => base.to_string(),
        n => format!("{}?page={}", base, n),
    }
}
