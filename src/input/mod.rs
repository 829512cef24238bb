pub mod source;

pub use source::{InputEvent, InputSource, LineSource, StdinSource};
