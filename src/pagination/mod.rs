mod nav;
mod window;

pub use self::{
    nav::{PageItem, page_items, page_url},
    window::{HOME_FIRST_PAGE_SIZE, HOME_PAGE_SIZE, PageLayout, PageWindow, paginate, paginate_home},
};
