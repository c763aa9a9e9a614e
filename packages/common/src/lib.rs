pub mod error;
pub mod result;
pub mod template_source;

pub use error::*;
pub use result::*;
pub use template_source::*;
