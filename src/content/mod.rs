mod front_matter;
mod post;
mod reading_time;

pub use self::{
    front_matter::FrontMatter,
    post::{Content, NoContent, Post, PostBuilder},
    reading_time::reading_time,
};
