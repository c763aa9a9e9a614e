pub mod dom;
pub mod error;
pub mod parser;

pub use dom::{NodePath, VNode, VirtualDomDocument};
pub use error::{ParseError, ParseResult};
pub use parser::{parse, parse_template};
