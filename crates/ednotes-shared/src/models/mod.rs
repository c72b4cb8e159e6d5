mod article;
mod category;
mod project;

pub use article::*;
pub use category::*;
pub use project::*;
