pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod lists;
pub mod media;
pub mod styled_line;
pub mod toggle;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use heading::{Heading, Rule};
pub use lists::{CustomList, DashList, OrderedList};
pub use media::{MediaDirective, MediaType};
pub use styled_line::StyledLine;
pub use toggle::{Toggle, ToggleFrame, ToggleLine, ToggleStack};
