pub mod history;
pub mod input;
pub mod menu;
pub mod number;
pub mod ops;
pub mod session;

pub use history::{History, HistoryEntry};
pub use input::{Console, NumberInput};
pub use menu::{MenuChoice, DEFAULT_TITLE};
pub use number::Number;
pub use ops::Operation;
pub use session::{Session, State};
